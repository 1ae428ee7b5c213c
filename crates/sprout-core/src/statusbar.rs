//! Header chrome: greeting, connectivity, battery, date, and clock.
//!
//! The bar caches formatted strings and refreshes them from platform
//! snapshots, then syncs its scene objects each frame. Battery and
//! connectivity are display-only: they never influence navigation or
//! preferences.

use sprout_platform::{BatteryState, PowerInfo, SystemTime};
use sprout_scene::SceneRegistry;
use sprout_scene::helpers::{ensure_fill, ensure_pill, ensure_text, hide_prefix};
use sprout_types::color::with_alpha;

use crate::skin::Palette;

/// Header bar height in pixels.
pub const HEIGHT: u32 = 48;

/// Scene-object namespace for the header.
pub const PREFIX: &str = "hdr_";

/// Z-order for header objects (above screen content).
const Z_HEADER: i32 = 900;

/// Month names for the date display.
const MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Runtime state for the header bar.
#[derive(Debug)]
pub struct StatusBar {
    greeting: String,
    clock_text: String,
    date_text: String,
    battery_text: String,
    battery_supported: bool,
    charging: bool,
    online: bool,
}

impl StatusBar {
    pub fn new(owner_name: &str) -> Self {
        Self {
            greeting: format!("Hi {owner_name}"),
            clock_text: "00:00".to_string(),
            date_text: String::new(),
            battery_text: String::new(),
            battery_supported: false,
            charging: false,
            online: false,
        }
    }

    /// Refresh cached strings from platform snapshots.
    pub fn update_info(
        &mut self,
        time: Option<&SystemTime>,
        power: Option<&PowerInfo>,
        online: bool,
    ) {
        self.online = online;
        if let Some(t) = time {
            self.clock_text = format!("{:02}:{:02}", t.hour, t.minute);
            let month_name = if (1..=12).contains(&t.month) {
                MONTHS[(t.month - 1) as usize]
            } else {
                "???"
            };
            self.date_text = format!("{month_name} {}, {}", t.day, t.year);
        }
        if let Some(p) = power {
            self.battery_supported = p.state != BatteryState::Unsupported;
            self.charging = p.charging();
            self.battery_text = match p.state {
                BatteryState::Unsupported => String::new(),
                _ => {
                    let pct = p.battery_percent.unwrap_or(0);
                    let icon = match pct {
                        0..=20 => "[|    ]",
                        21..=40 => "[||   ]",
                        41..=60 => "[|||  ]",
                        61..=80 => "[|||| ]",
                        _ => "[|||||]",
                    };
                    if p.charging() {
                        format!("{pct}% {icon}+")
                    } else {
                        format!("{pct}% {icon}")
                    }
                },
            };
        }
    }

    /// Synchronize header scene objects.
    pub fn sync_scene(&self, scene: &mut SceneRegistry, palette: &Palette, screen_w: u32) {
        // Left cluster: avatar + greeting pill.
        ensure_pill(
            scene,
            "hdr_id_pill",
            8,
            8,
            220,
            HEIGHT - 16,
            palette.header_bg,
            with_alpha(palette.header_text, 60),
        );
        if let Ok(obj) = scene.get_mut("hdr_id_pill") {
            obj.z = Z_HEADER;
        }
        ensure_fill(
            scene,
            "hdr_avatar",
            14,
            12,
            HEIGHT - 24,
            HEIGHT - 24,
            palette.accent_subtle,
        );
        if let Ok(obj) = scene.get_mut("hdr_avatar") {
            obj.z = Z_HEADER + 1;
            obj.border_radius = Some(((HEIGHT - 24) / 2) as u16);
            obj.stroke_width = Some(2);
            obj.stroke_color = Some(with_alpha(palette.header_text, 120));
        }
        ensure_text(
            scene,
            "hdr_greeting",
            14 + HEIGHT as i32 - 16,
            16,
            14,
            palette.header_text,
        );
        if let Ok(obj) = scene.get_mut("hdr_greeting") {
            obj.z = Z_HEADER + 1;
            obj.text = Some(self.greeting.clone());
        }

        // Right cluster: wifi + battery + date + clock pill.
        let pill_w = 300u32;
        let pill_x = screen_w as i32 - pill_w as i32 - 8;
        ensure_pill(
            scene,
            "hdr_status_pill",
            pill_x,
            8,
            pill_w,
            HEIGHT - 16,
            palette.header_bg,
            with_alpha(palette.header_text, 60),
        );
        if let Ok(obj) = scene.get_mut("hdr_status_pill") {
            obj.z = Z_HEADER;
        }

        ensure_text(scene, "hdr_wifi", pill_x + 10, 16, 14, palette.header_text);
        if let Ok(obj) = scene.get_mut("hdr_wifi") {
            obj.z = Z_HEADER + 1;
            obj.text = Some(if self.online { "((*))" } else { "" }.to_string());
            obj.visible = self.online;
        }

        ensure_text(
            scene,
            "hdr_battery",
            pill_x + 52,
            16,
            14,
            if self.charging {
                palette.success
            } else {
                palette.header_text
            },
        );
        if let Ok(obj) = scene.get_mut("hdr_battery") {
            obj.z = Z_HEADER + 1;
            obj.text = Some(self.battery_text.clone());
            obj.visible = self.battery_supported;
        }

        ensure_text(scene, "hdr_date", pill_x + 140, 16, 14, palette.header_text);
        if let Ok(obj) = scene.get_mut("hdr_date") {
            obj.z = Z_HEADER + 1;
            obj.text = Some(self.date_text.clone());
        }

        ensure_text(scene, "hdr_clock", pill_x + 252, 16, 14, palette.header_text);
        if let Ok(obj) = scene.get_mut("hdr_clock") {
            obj.z = Z_HEADER + 1;
            obj.text = Some(self.clock_text.clone());
        }
    }

    /// Hide every header object (immersive screens).
    pub fn hide(scene: &mut SceneRegistry) {
        hide_prefix(scene, PREFIX);
    }
}
