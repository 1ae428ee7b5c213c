//! Desktop / Linux-tablet platform implementation.
//!
//! Battery readout comes from `/sys/class/power_supply`; devices without a
//! battery (or non-Linux hosts) degrade to `Unsupported` rather than erroring.
//! The capture service here is a stub that synthesizes file names, standing in
//! for a real media pipeline.

use std::path::{Path, PathBuf};

use sprout_types::error::Result;

use crate::services::{
    BatteryState, CaptureService, ConnectivityService, Platform, PowerInfo, PowerService,
    SystemTime, TimeService, days_to_ymd,
};

/// Default platform implementation for desktop / Linux tablets.
pub struct DesktopPlatform {
    start_time: std::time::Instant,
    power_supply_dir: PathBuf,
    captures: u32,
    recording: bool,
}

impl DesktopPlatform {
    pub fn new() -> Self {
        Self::with_power_supply_dir("/sys/class/power_supply")
    }

    /// Use an alternate power-supply directory (tests point this at a
    /// temporary tree).
    pub fn with_power_supply_dir(dir: impl Into<PathBuf>) -> Self {
        Self {
            start_time: std::time::Instant::now(),
            power_supply_dir: dir.into(),
            captures: 0,
            recording: false,
        }
    }

    /// Find the first battery entry (`BAT*`) under the power-supply dir.
    fn battery_dir(&self) -> Option<PathBuf> {
        let entries = std::fs::read_dir(&self.power_supply_dir).ok()?;
        let mut bats: Vec<PathBuf> = entries
            .filter_map(|e| e.ok())
            .map(|e| e.path())
            .filter(|p| {
                p.file_name()
                    .and_then(|n| n.to_str())
                    .is_some_and(|n| n.starts_with("BAT"))
            })
            .collect();
        bats.sort();
        bats.into_iter().next()
    }

    fn read_trimmed(path: &Path) -> Option<String> {
        std::fs::read_to_string(path)
            .ok()
            .map(|s| s.trim().to_string())
    }
}

impl Default for DesktopPlatform {
    fn default() -> Self {
        Self::new()
    }
}

impl PowerService for DesktopPlatform {
    fn power_info(&self) -> Result<PowerInfo> {
        let Some(bat) = self.battery_dir() else {
            return Ok(PowerInfo::unsupported());
        };

        let percent = Self::read_trimmed(&bat.join("capacity"))
            .and_then(|s| s.parse::<u8>().ok())
            .map(|p| p.min(100));
        let state = match Self::read_trimmed(&bat.join("status")).as_deref() {
            Some("Charging") => BatteryState::Charging,
            Some("Full") => BatteryState::Full,
            Some("Discharging") | Some("Not charging") => BatteryState::Discharging,
            _ => {
                if percent.is_some() {
                    BatteryState::Discharging
                } else {
                    BatteryState::Unsupported
                }
            },
        };

        Ok(PowerInfo {
            battery_percent: percent,
            state,
        })
    }
}

impl TimeService for DesktopPlatform {
    fn now(&self) -> Result<SystemTime> {
        use std::time::SystemTime as StdTime;
        let dur = StdTime::now()
            .duration_since(StdTime::UNIX_EPOCH)
            .unwrap_or_default();
        let secs = dur.as_secs();

        // Simple UTC breakdown (no TZ handling).
        let days = secs / 86400;
        let time_of_day = secs % 86400;
        let hour = (time_of_day / 3600) as u8;
        let minute = ((time_of_day % 3600) / 60) as u8;
        let second = (time_of_day % 60) as u8;
        let (year, month, day) = days_to_ymd(days);

        Ok(SystemTime {
            year,
            month,
            day,
            hour,
            minute,
            second,
        })
    }

    fn uptime_secs(&self) -> Result<u64> {
        Ok(self.start_time.elapsed().as_secs())
    }
}

impl ConnectivityService for DesktopPlatform {
    fn is_online(&self) -> Result<bool> {
        // Desktop hosts are assumed reachable; real radios report through
        // their own service implementation.
        Ok(true)
    }
}

impl CaptureService for DesktopPlatform {
    fn capture_photo(&mut self, filter: &str) -> Result<String> {
        self.captures += 1;
        let name = format!("photo-{:04}.png", self.captures);
        log::info!("capture: photo '{name}' (filter: {filter})");
        Ok(name)
    }

    fn start_recording(&mut self) -> Result<()> {
        self.recording = true;
        log::info!("capture: recording started");
        Ok(())
    }

    fn stop_recording(&mut self) -> Result<String> {
        self.recording = false;
        self.captures += 1;
        let name = format!("video-{:04}.webm", self.captures);
        log::info!("capture: recording stopped -> '{name}'");
        Ok(name)
    }
}

impl Platform for DesktopPlatform {}
