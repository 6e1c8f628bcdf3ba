//! Application constants and configuration

use std::time::Duration;

pub const APP_NAME: &str = "Portfolio";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// How often the profile header flips between shown and hidden
pub const PROFILE_CYCLE: Duration = Duration::from_secs(4);
/// Enter/exit transition length for the profile header, in seconds
pub const PROFILE_TRANSITION_SECS: f32 = 0.8;
/// Vertical travel of the profile header during enter/exit
pub const PROFILE_TRAVEL: f32 = 30.0;

/// Below this window width the nav links are hidden
pub const MOBILE_BREAKPOINT: f32 = 600.0;
pub const TABLET_BREAKPOINT: f32 = 900.0;

/// Suggested file name for the exported resume
pub const RESUME_FILE_NAME: &str = "Shiva_Rama_Krishna_Reddy_Resume.pdf";
