//! Activity screens.
//!
//! Each screen owns its state, handles its own input, and syncs its own
//! scene objects under a per-screen name prefix. Screens communicate with
//! the shell exclusively through [`ScreenEvent`] values; they never touch
//! the navigation stack or the preference store.

pub mod battery;
pub mod calculator;
pub mod calendar;
pub mod camera;
pub mod entertainment;
pub mod learning;
pub mod mainmenu;
pub mod mathpractice;
pub mod rps;
pub mod settings;
pub mod widgets;

use sprout_platform::{PowerInfo, SystemTime};
use sprout_prefs::{FontFamily, FontSize, MenuTheme, Preferences, Theme};
use sprout_scene::SceneRegistry;
use sprout_types::geometry::Rect;
use sprout_types::input::InputEvent;

use crate::skin::{MenuSkin, Palette};
use crate::view::ViewId;

/// A requested preference change (applied write-through by the shell).
#[derive(Debug, Clone, PartialEq)]
pub enum PrefChange {
    Theme(Theme),
    FontFamily(FontFamily),
    FontSize(FontSize),
    MenuTheme(MenuTheme),
    Background(String),
}

/// A camera pipeline request (forwarded to the capture service).
#[derive(Debug, Clone, PartialEq)]
pub enum CaptureRequest {
    Photo { filter: String },
    StartRecording,
    StopRecording,
}

/// What a screen asks the shell to do in response to input or a timer.
#[derive(Debug, Clone, PartialEq)]
pub enum ScreenEvent {
    None,
    /// Push a screen onto the navigation history.
    Navigate(ViewId),
    /// Pop the navigation history.
    Back,
    /// Hand a URL to the host (display/dispatch only; the shell never
    /// opens sockets).
    OpenUrl(String),
    /// Change one preference.
    Pref(PrefChange),
    /// Persist a non-preference payload under a storage key.
    Store {
        key: &'static str,
        value: serde_json::Value,
    },
    /// Drive the camera pipeline.
    Capture(CaptureRequest),
}

/// Read-only inputs a screen needs for layout and styling.
#[derive(Debug, Clone)]
pub struct ScreenContext {
    pub palette: Palette,
    pub skin: MenuSkin,
    pub font_class: &'static str,
    pub font_px: u16,
    /// Area available to the screen (excludes chrome unless immersive).
    pub content: Rect,
    /// Full screen rectangle.
    pub screen: Rect,
    pub prefs: Preferences,
    pub battery: PowerInfo,
    pub online: bool,
    pub now: SystemTime,
    /// Event-loop ticks per second; screen timers count in frames.
    pub fps: u32,
}

/// Lifecycle and rendering contract every screen implements.
pub trait Screen {
    fn view_id(&self) -> ViewId;

    /// Scene-object namespace; the shell destroys it on leave.
    fn prefix(&self) -> &'static str;

    /// Called when the screen becomes current (after a push or pop).
    fn on_enter(&mut self) {}

    fn handle_input(&mut self, event: &InputEvent, ctx: &ScreenContext) -> ScreenEvent;

    /// Per-frame timer hook.
    fn tick(&mut self, _ctx: &ScreenContext) -> ScreenEvent {
        ScreenEvent::None
    }

    fn sync_scene(&self, scene: &mut SceneRegistry, ctx: &ScreenContext);
}

#[cfg(test)]
pub(crate) mod testutil {
    use sprout_platform::{BatteryState, PowerInfo, SystemTime};
    use sprout_prefs::Preferences;
    use sprout_types::geometry::Rect;

    use super::ScreenContext;
    use crate::skin::{Palette, menu_skin};
    use crate::{bottombar, statusbar};

    /// A context matching the default 800x600 shell with chrome visible.
    pub fn ctx() -> ScreenContext {
        let prefs = Preferences::default();
        ScreenContext {
            palette: Palette::dark(),
            skin: menu_skin(prefs.menu_theme, true),
            font_class: "font-modern",
            font_px: 16,
            content: Rect::new(
                0,
                statusbar::HEIGHT as i32,
                800,
                600 - statusbar::HEIGHT - bottombar::HEIGHT,
            ),
            screen: Rect::new(0, 0, 800, 600),
            prefs,
            battery: PowerInfo {
                battery_percent: Some(80),
                state: BatteryState::Discharging,
            },
            online: true,
            now: SystemTime {
                year: 2024,
                month: 6,
                day: 15,
                hour: 9,
                minute: 30,
                second: 0,
            },
            fps: 30,
        }
    }
}
