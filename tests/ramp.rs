use lpc111x_hal::ramp::DutyRamp;

#[test]
fn the_first_item_is_the_starting_duty() {
    assert_eq!(DutyRamp::new(50).next(), Some(50));
    assert_eq!(DutyRamp::new(0).next(), Some(0));
    assert_eq!(DutyRamp::new(100).next(), Some(100));
}

#[test]
fn fifty_one_steps_take_half_scale_to_full_scale() {
    let up: Vec<u8> = DutyRamp::new(50).take(51).collect();

    assert_eq!(up.len(), 51);
    assert_eq!(up.first(), Some(&50));
    assert_eq!(up.last(), Some(&100));
    assert!(up.windows(2).all(|w| w[1] == w[0] + 1));
}

#[test]
fn full_scale_turns_the_sweep_around_once() {
    let around_the_peak: Vec<u8> = DutyRamp::new(98).take(6).collect();
    assert_eq!(around_the_peak, [98, 99, 100, 99, 98, 97]);
}

#[test]
fn zero_turns_the_sweep_around_once() {
    // 51 items climbing 50..=100, 100 more descending to 0, climbing again
    let around_the_trough: Vec<u8> = DutyRamp::new(50).skip(149).take(4).collect();
    assert_eq!(around_the_trough, [1, 0, 1, 2]);
}

#[test]
fn out_of_range_start_clamps_to_full_scale() {
    let steps: Vec<u8> = DutyRamp::new(255).take(3).collect();
    assert_eq!(steps, [100, 99, 98]);
}

#[test]
fn the_sweep_never_ends_and_stays_in_range() {
    let mut ramp = DutyRamp::new(0);
    assert!(ramp.by_ref().take(10_000).all(|duty| duty <= 100));
    // still going after two dozen full triangles
    assert_eq!(ramp.next(), Some(0));
}
