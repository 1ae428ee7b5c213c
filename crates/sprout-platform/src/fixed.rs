//! Fixed-value platform for tests and scripted simulator runs.

use sprout_types::error::Result;

use crate::services::{
    BatteryState, CaptureService, ConnectivityService, Platform, PowerInfo, PowerService,
    SystemTime, TimeService,
};

/// A platform whose readings never change unless the test changes them.
#[derive(Debug, Clone)]
pub struct FixedPlatform {
    pub power: PowerInfo,
    pub online: bool,
    pub time: SystemTime,
    pub uptime: u64,
    /// Photo / video file names handed out so far.
    pub captured: Vec<String>,
    pub recording: bool,
}

impl FixedPlatform {
    pub fn new() -> Self {
        Self {
            power: PowerInfo {
                battery_percent: Some(100),
                state: BatteryState::Discharging,
            },
            online: true,
            time: SystemTime {
                year: 2024,
                month: 6,
                day: 15,
                hour: 9,
                minute: 30,
                second: 0,
            },
            uptime: 0,
            captured: Vec::new(),
            recording: false,
        }
    }

    pub fn with_battery(mut self, percent: u8, state: BatteryState) -> Self {
        self.power = PowerInfo {
            battery_percent: Some(percent),
            state,
        };
        self
    }

    pub fn without_battery(mut self) -> Self {
        self.power = PowerInfo::unsupported();
        self
    }
}

impl Default for FixedPlatform {
    fn default() -> Self {
        Self::new()
    }
}

impl PowerService for FixedPlatform {
    fn power_info(&self) -> Result<PowerInfo> {
        Ok(self.power)
    }
}

impl TimeService for FixedPlatform {
    fn now(&self) -> Result<SystemTime> {
        Ok(self.time)
    }

    fn uptime_secs(&self) -> Result<u64> {
        Ok(self.uptime)
    }
}

impl ConnectivityService for FixedPlatform {
    fn is_online(&self) -> Result<bool> {
        Ok(self.online)
    }
}

impl CaptureService for FixedPlatform {
    fn capture_photo(&mut self, filter: &str) -> Result<String> {
        let name = format!("photo-{}-{}.png", self.captured.len(), filter);
        self.captured.push(name.clone());
        Ok(name)
    }

    fn start_recording(&mut self) -> Result<()> {
        self.recording = true;
        Ok(())
    }

    fn stop_recording(&mut self) -> Result<String> {
        self.recording = false;
        let name = format!("video-{}.webm", self.captured.len());
        self.captured.push(name.clone());
        Ok(name)
    }
}

impl Platform for FixedPlatform {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_readings_are_stable() {
        let platform = FixedPlatform::new().with_battery(42, BatteryState::Charging);
        let a = platform.power_info().unwrap();
        let b = platform.power_info().unwrap();
        assert_eq!(a.battery_percent, Some(42));
        assert_eq!(b.battery_percent, Some(42));
        assert!(a.charging());
    }

    #[test]
    fn without_battery_reads_unsupported() {
        let platform = FixedPlatform::new().without_battery();
        let info = platform.power_info().unwrap();
        assert_eq!(info.state, BatteryState::Unsupported);
    }

    #[test]
    fn captures_are_recorded() {
        let mut platform = FixedPlatform::new();
        platform.capture_photo("Sepia").unwrap();
        platform.start_recording().unwrap();
        assert!(platform.recording);
        platform.stop_recording().unwrap();
        assert_eq!(platform.captured.len(), 2);
    }
}
