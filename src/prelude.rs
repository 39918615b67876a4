//! Prelude

pub use crate::flash::FlashExt as _lpc111x_hal_flash_FlashExt;
pub use crate::hal::prelude::*;
pub use crate::iocon::IoconExt as _lpc111x_hal_iocon_IoconExt;
pub use crate::syscon::SysconExt as _lpc111x_hal_syscon_SysconExt;
pub use crate::time::U32Ext as _lpc111x_hal_time_U32Ext;
