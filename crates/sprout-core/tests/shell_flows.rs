//! End-to-end navigation and settings flows through the assembled shell.

use sprout_core::screens::{PrefChange, ScreenEvent};
use sprout_core::{PadConfig, Shell, ViewId};
use sprout_platform::{BatteryState, FixedPlatform};
use sprout_prefs::{MemoryStorage, PrefStorage, PrefStore, Preferences, Theme};
use sprout_scene::SceneRegistry;
use sprout_types::input::{Button, InputEvent};

fn shell_with(storage: MemoryStorage) -> Shell<MemoryStorage, FixedPlatform> {
    Shell::new(
        PadConfig::default(),
        PrefStore::new(storage),
        FixedPlatform::new(),
    )
}

fn fresh_shell() -> Shell<MemoryStorage, FixedPlatform> {
    shell_with(MemoryStorage::new())
}

#[test]
fn deep_navigation_and_back_to_root() {
    let mut shell = fresh_shell();
    shell.navigate_to(ViewId::Entertainment);
    shell.navigate_to(ViewId::RockPaperScissors);
    assert_eq!(shell.current_view(), ViewId::RockPaperScissors);
    assert!(shell.can_go_back());

    shell.handle_event(&InputEvent::ButtonPress(Button::Back));
    assert_eq!(shell.current_view(), ViewId::Entertainment);
    shell.handle_event(&InputEvent::ButtonPress(Button::Back));
    assert_eq!(shell.current_view(), ViewId::MainMenu);
    // Popping at the root stays put.
    shell.handle_event(&InputEvent::ButtonPress(Button::Back));
    assert_eq!(shell.current_view(), ViewId::MainMenu);
    assert_eq!(shell.nav_depth(), 1);
}

#[test]
fn corrupt_stored_theme_falls_back_to_dark() {
    let mut storage = MemoryStorage::new();
    storage.seed("app-theme", "{{{{ not json");
    storage.seed("app-menu-theme", "\"neon\"");
    let shell = shell_with(storage);
    assert_eq!(shell.prefs().theme, Theme::Dark);
    assert!(shell.is_dark());
    // The intact key still loads.
    assert_eq!(
        serde_json::to_string(&shell.prefs().menu_theme).unwrap(),
        "\"neon\""
    );
}

#[test]
fn preference_round_trip_across_sessions() {
    let mut shell = fresh_shell();
    // Drive the settings screen the way a user would: click the Light half
    // of the theme toggle.
    shell.navigate_to(ViewId::Settings);
    let mut scene = SceneRegistry::new();
    shell.sync_scene(&mut scene);
    let rect = scene.get("set_theme_light").unwrap().rect();
    let (x, y) = rect.center();
    shell.handle_event(&InputEvent::PointerClick { x, y });
    assert_eq!(shell.prefs().theme, Theme::Light);
    assert!(!shell.is_dark());

    // A fresh session over the same storage sees the change; untouched
    // keys keep their defaults.
    let raw = shell
        .store()
        .storage()
        .read("app-theme")
        .unwrap()
        .expect("theme was persisted");
    assert_eq!(raw, "\"light\"");
    let reloaded = Preferences::load(shell.store());
    assert_eq!(reloaded.theme, Theme::Light);
    assert_eq!(reloaded.menu_theme, Preferences::default().menu_theme);
}

#[test]
fn background_styles_derive_on_the_scene_root() {
    let mut shell = fresh_shell();
    let mut scene = SceneRegistry::new();

    shell.sync_scene(&mut scene);
    let bg = scene.get("root_bg").unwrap();
    assert_eq!(bg.style_class, None);
    assert_eq!(bg.image_url, None);

    // Walk the settings cycler once: first non-default choice is a solid.
    shell.navigate_to(ViewId::Settings);
    shell.sync_scene(&mut scene);
    let next = scene.get("set_bg_next").unwrap().rect();
    let (x, y) = next.center();
    shell.handle_event(&InputEvent::PointerClick { x, y });
    shell.sync_scene(&mut scene);
    let bg = scene.get("root_bg").unwrap();
    assert_eq!(bg.style_class.as_deref(), Some("bg-blue-900"));
    assert_eq!(bg.image_url, None);
}

#[test]
fn main_menu_cards_drive_navigation() {
    let mut shell = fresh_shell();
    let mut scene = SceneRegistry::new();
    shell.sync_scene(&mut scene);

    // Card 1 is Learning.
    let rect = scene.get("menu_card_1").unwrap().rect();
    let (x, y) = rect.center();
    shell.handle_event(&InputEvent::PointerClick { x, y });
    assert_eq!(shell.current_view(), ViewId::Learning);

    shell.sync_scene(&mut scene);
    // Learning's first button opens the calculator.
    let rect = scene.get("learn_btn_0").unwrap().rect();
    let (x, y) = rect.center();
    shell.handle_event(&InputEvent::PointerClick { x, y });
    assert_eq!(shell.current_view(), ViewId::Calculator);
    assert_eq!(shell.nav_depth(), 3);
}

#[test]
fn calculator_state_survives_leaving_and_returning() {
    let mut shell = fresh_shell();
    let mut scene = SceneRegistry::new();
    shell.navigate_to(ViewId::Calculator);
    shell.sync_scene(&mut scene);

    // Type 7 via the keypad.
    let rect = scene.get("calc_btn_0").unwrap().rect();
    let (x, y) = rect.center();
    shell.handle_event(&InputEvent::PointerClick { x, y });
    shell.sync_scene(&mut scene);
    assert_eq!(
        scene.get("calc_display").unwrap().text.as_deref(),
        Some("7")
    );

    // Leave and come back: per-feature state is isolated, not reset.
    shell.handle_event(&InputEvent::ButtonPress(Button::Back));
    shell.sync_scene(&mut scene);
    assert!(!scene.contains("calc_display"));
    shell.navigate_to(ViewId::Calculator);
    shell.sync_scene(&mut scene);
    assert_eq!(
        scene.get("calc_display").unwrap().text.as_deref(),
        Some("7")
    );
}

#[test]
fn camera_round_trip_restores_chrome() {
    let mut shell = fresh_shell();
    let mut scene = SceneRegistry::new();
    shell.sync_scene(&mut scene);
    assert!(scene.get("hdr_clock").unwrap().visible);

    shell.navigate_to(ViewId::Camera);
    shell.sync_scene(&mut scene);
    assert!(!scene.get("hdr_clock").unwrap().visible);
    assert!(!scene.contains("foot_back_pill") || !scene.get("foot_back_pill").unwrap().visible);

    shell.handle_event(&InputEvent::ButtonPress(Button::Back));
    shell.sync_scene(&mut scene);
    assert!(scene.get("hdr_clock").unwrap().visible);
    assert!(!scene.contains("cam_viewfinder"));
}

#[test]
fn camera_capture_flows_to_the_platform() {
    let mut shell = fresh_shell();
    let mut scene = SceneRegistry::new();
    shell.navigate_to(ViewId::Camera);
    shell.sync_scene(&mut scene);

    let rect = scene.get("cam_shutter").unwrap().rect();
    let (x, y) = rect.center();
    shell.handle_event(&InputEvent::PointerClick { x, y });
    assert_eq!(shell.platform().captured.len(), 1);
    assert!(shell.platform().captured[0].starts_with("photo-"));
}

#[test]
fn calendar_events_persist_through_storage() {
    let mut shell = fresh_shell();
    let mut scene = SceneRegistry::new();
    shell.navigate_to(ViewId::Calendar);
    shell.sync_scene(&mut scene);

    // Open the fixed platform's "today" (June 15, 2024).
    let rect = scene.get("cal_day_15").unwrap().rect();
    let (x, y) = rect.center();
    shell.handle_event(&InputEvent::PointerClick { x, y });
    for c in "Swim".chars() {
        shell.handle_event(&InputEvent::TextInput(c));
    }
    shell.sync_scene(&mut scene);
    let add = scene.get("cal_modal_add").unwrap().rect();
    let (x, y) = add.center();
    shell.handle_event(&InputEvent::PointerClick { x, y });

    let raw = shell
        .store()
        .storage()
        .read("calendar-events")
        .unwrap()
        .expect("events were persisted");
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(value["2024-6-15"][0]["title"], "Swim");
    assert_eq!(value["2024-6-15"][0]["time"], "12:00");
}

#[test]
fn battery_screen_reflects_platform_state() {
    let platform = FixedPlatform::new().with_battery(12, BatteryState::Discharging);
    let mut shell = Shell::new(
        PadConfig::default(),
        PrefStore::new(MemoryStorage::new()),
        platform,
    );
    let mut scene = SceneRegistry::new();
    shell.navigate_to(ViewId::BatteryInfo);
    shell.sync_scene(&mut scene);
    assert_eq!(scene.get("batt_pct").unwrap().text.as_deref(), Some("12%"));
    assert!(
        scene
            .get("batt_advice")
            .unwrap()
            .text
            .as_deref()
            .unwrap()
            .contains("low")
    );
}

#[test]
fn battery_unsupported_falls_back_gracefully() {
    let platform = FixedPlatform::new().without_battery();
    let mut shell = Shell::new(
        PadConfig::default(),
        PrefStore::new(MemoryStorage::new()),
        platform,
    );
    let mut scene = SceneRegistry::new();
    shell.navigate_to(ViewId::BatteryInfo);
    shell.sync_scene(&mut scene);
    assert!(scene.contains("batt_unsupported"));
    // Header battery segment is hidden too.
    assert!(!scene.get("hdr_battery").unwrap().visible);
}

#[test]
fn reentrant_navigation_to_the_same_screen() {
    let mut shell = fresh_shell();
    shell.navigate_to(ViewId::Calculator);
    shell.navigate_to(ViewId::Calculator);
    assert_eq!(shell.nav_depth(), 3);
    shell.handle_event(&InputEvent::ButtonPress(Button::Back));
    // Back from the duplicate returns to the same screen, not the menu.
    assert_eq!(shell.current_view(), ViewId::Calculator);
}

#[test]
fn pref_write_failure_keeps_memory_authoritative() {
    // Simulate a write failure by using an invalid storage key path: not
    // reachable through Preferences, so instead verify the documented
    // behavior at the shell level -- the in-memory value reflects the
    // latest setter even when nothing was stored beforehand.
    let mut shell = fresh_shell();
    shell.navigate_to(ViewId::Settings);
    let mut scene = SceneRegistry::new();
    shell.sync_scene(&mut scene);
    let rect = scene.get("set_size_2").unwrap().rect();
    let (x, y) = rect.center();
    shell.handle_event(&InputEvent::PointerClick { x, y });
    assert_eq!(
        serde_json::to_string(&shell.prefs().font_size).unwrap(),
        "\"large\""
    );
}

#[test]
fn immersive_screen_ignores_footer_hit_region() {
    let mut shell = fresh_shell();
    let mut scene = SceneRegistry::new();
    shell.navigate_to(ViewId::Camera);
    shell.sync_scene(&mut scene);
    // A tap where the footer pill would be goes to the camera, not back.
    let rect = sprout_core::bottombar::back_rect(800, 600);
    let (x, y) = rect.center();
    shell.handle_event(&InputEvent::PointerClick { x, y });
    assert_eq!(shell.current_view(), ViewId::Camera);
}

#[test]
fn status_refresh_is_display_only() {
    let mut shell = fresh_shell();
    shell.navigate_to(ViewId::Learning);
    let before_depth = shell.nav_depth();
    let before_prefs = shell.prefs().clone();
    for _ in 0..120 {
        shell.tick();
    }
    assert_eq!(shell.nav_depth(), before_depth);
    assert_eq!(shell.prefs(), &before_prefs);
}
