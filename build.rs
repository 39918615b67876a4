use std::{env, fs::File, io::prelude::*, path::PathBuf};

fn main() {
    if cfg!(feature = "ld") {
        check_device_feature();
        gen_memory_x();
    }
    println!("cargo:rerun-if-changed=build.rs");
}

/// Check device feature selection
///
/// Only the `ld` builds need this: the peripheral map is common to the whole
/// family, but the linker script is not.
fn check_device_feature() {
    if !cfg!(feature = "device-selected") {
        eprintln!(
            "Generating `memory.x` requires you to specify your target chip as a feature.

Please select one of the following:

    lpc1111 lpc1112 lpc1113 lpc1114 lpc1115

Example: The common DIP-28 part is an LPC1114FN28/102.
So you need to specify lpc1114 in your Cargo.toml."
        );
        std::process::exit(1);
    }
}

/// Generate `memory.x` for selected device
///
/// Available RAM/FLASH values are extracted from the LPC111x datasheet.
fn gen_memory_x() {
    enum Device {
        Lpc1111,
        Lpc1112,
        Lpc1113,
        Lpc1114,
        Lpc1115,
    }

    let device = if cfg!(feature = "lpc1111") {
        Device::Lpc1111
    } else if cfg!(feature = "lpc1112") {
        Device::Lpc1112
    } else if cfg!(feature = "lpc1113") {
        Device::Lpc1113
    } else if cfg!(feature = "lpc1114") {
        Device::Lpc1114
    } else if cfg!(feature = "lpc1115") {
        Device::Lpc1115
    } else {
        eprintln!(
            "Memory size unknown.
This may be due to incorrect feature configuration in Cargo.toml or lpc111x-hal's internal issue."
        );
        std::process::exit(1);
    };

    let flash = match device {
        Device::Lpc1111 => 8,
        Device::Lpc1112 => 16,
        Device::Lpc1113 => 24,
        Device::Lpc1114 => 32,
        Device::Lpc1115 => 64,
    };
    let ram = match device {
        Device::Lpc1111 | Device::Lpc1112 => 2,
        Device::Lpc1113 | Device::Lpc1114 => 4,
        Device::Lpc1115 => 8,
    };

    let out_dir = PathBuf::from(env::var_os("OUT_DIR").unwrap());
    let mut file = File::create(out_dir.join("memory.x")).unwrap();
    writeln!(file, "MEMORY {{").unwrap();
    writeln!(file, "    FLASH (rx) : o = 0x0000000, l = {}K", flash).unwrap();
    writeln!(file, "    RAM (rwx) : o = 0x10000000, l = {}K", ram).unwrap();
    writeln!(file, "}}").unwrap();
    println!("cargo:rustc-link-search={}", out_dir.display());
}
