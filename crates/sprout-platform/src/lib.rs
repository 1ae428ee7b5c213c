//! Platform service traits and implementations.
//!
//! The shell core dispatches all device I/O through these trait boundaries:
//! battery readout, wall-clock time, connectivity status, and the camera
//! capture pipeline. Frontends pick an implementation; tests use
//! [`FixedPlatform`].

pub mod fixed;
pub mod services;
pub mod sysfs;

pub use fixed::FixedPlatform;
pub use services::{
    BatteryState, CaptureService, ConnectivityService, Platform, PowerInfo, PowerService,
    SystemTime, TimeService, days_in_month, days_to_ymd, is_leap, weekday,
};
pub use sysfs::DesktopPlatform;
