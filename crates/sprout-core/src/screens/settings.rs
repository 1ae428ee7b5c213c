//! Settings: theme, background, menu skin, font family, and font size.
//!
//! Every control emits a [`PrefChange`]; the shell applies it write-through.
//! Current values come from the context's preference snapshot, so the screen
//! itself stays stateless.

use sprout_prefs::{FontFamily, FontSize, MenuTheme, Theme};
use sprout_scene::SceneRegistry;
use sprout_scene::helpers::{ensure_fill, ensure_text};
use sprout_types::color::Color;
use sprout_types::geometry::Rect;
use sprout_types::input::InputEvent;

use super::widgets::{grid_rects, plain_button, screen_title, themed_button};
use super::{PrefChange, Screen, ScreenContext, ScreenEvent};
use crate::skin::background::background_choices;
use crate::skin::font::{family_name, size_name};
use crate::skin::menu::menu_theme_name;
use crate::view::ViewId;

const PREFIX: &str = "set_";
const PANEL_W: u32 = 520;
const ROW_H: u32 = 36;

#[derive(Debug, Default)]
pub struct SettingsScreen;

impl SettingsScreen {
    pub fn new() -> Self {
        Self
    }

    fn panel(ctx: &ScreenContext) -> Rect {
        Rect::new(
            ctx.content.x + (ctx.content.w as i32 - PANEL_W as i32) / 2,
            ctx.content.y + 44,
            PANEL_W,
            ctx.content.h - 50,
        )
    }

    fn theme_rects(ctx: &ScreenContext) -> [Rect; 2] {
        let panel = Self::panel(ctx);
        let half = (PANEL_W - 36) / 2;
        let y = panel.y + 26;
        [
            Rect::new(panel.x + 12, y, half, ROW_H),
            Rect::new(panel.x + 24 + half as i32, y, half, ROW_H),
        ]
    }

    /// Background cycler: left arrow, value label, right arrow.
    fn background_row(ctx: &ScreenContext) -> (Rect, Rect) {
        let panel = Self::panel(ctx);
        let y = panel.y + 88;
        (
            Rect::new(panel.x + 12, y, 44, ROW_H),
            Rect::new(panel.x + PANEL_W as i32 - 56, y, 44, ROW_H),
        )
    }

    /// Menu skin cycler: left arrow, value label, right arrow.
    fn skin_row(ctx: &ScreenContext) -> (Rect, Rect) {
        let panel = Self::panel(ctx);
        let y = panel.y + 150;
        (
            Rect::new(panel.x + 12, y, 44, ROW_H),
            Rect::new(panel.x + PANEL_W as i32 - 56, y, 44, ROW_H),
        )
    }

    fn font_rects(ctx: &ScreenContext) -> Vec<Rect> {
        let panel = Self::panel(ctx);
        let area = Rect::new(panel.x + 12, panel.y + 212, PANEL_W - 24, 2 * (ROW_H + 6));
        grid_rects(area, 4, FontFamily::ALL.len(), ROW_H - 4, 6)
    }

    fn size_rects(ctx: &ScreenContext) -> Vec<Rect> {
        let panel = Self::panel(ctx);
        let area = Rect::new(panel.x + 12, panel.y + 308, PANEL_W - 24, ROW_H);
        grid_rects(area, 3, FontSize::ALL.len(), ROW_H, 8)
    }

    fn exit_rect(ctx: &ScreenContext) -> Rect {
        let panel = Self::panel(ctx);
        Rect::new(
            panel.x + 12,
            panel.y + panel.h as i32 - 54,
            PANEL_W - 24,
            44,
        )
    }

    fn cycle_background(current: &str, step: i32) -> String {
        let choices = background_choices();
        let pos = choices
            .iter()
            .position(|(_, value)| *value == current)
            .unwrap_or(0);
        let next = (pos as i32 + step).rem_euclid(choices.len() as i32) as usize;
        choices[next].1.to_string()
    }

    fn cycle_skin(current: MenuTheme, step: i32) -> MenuTheme {
        let pos = MenuTheme::ALL
            .iter()
            .position(|t| *t == current)
            .unwrap_or(0);
        let next = (pos as i32 + step).rem_euclid(MenuTheme::ALL.len() as i32) as usize;
        MenuTheme::ALL[next]
    }

    fn background_label(current: &str) -> String {
        background_choices()
            .iter()
            .find(|(_, value)| *value == current)
            .map(|(name, _)| name.to_string())
            .unwrap_or_else(|| "Custom".to_string())
    }
}

impl Screen for SettingsScreen {
    fn view_id(&self) -> ViewId {
        ViewId::Settings
    }

    fn prefix(&self) -> &'static str {
        PREFIX
    }

    fn handle_input(&mut self, event: &InputEvent, ctx: &ScreenContext) -> ScreenEvent {
        let InputEvent::PointerClick { x, y } = event else {
            return ScreenEvent::None;
        };
        let (x, y) = (*x, *y);

        let [light, dark] = Self::theme_rects(ctx);
        if light.contains(x, y) {
            return ScreenEvent::Pref(PrefChange::Theme(Theme::Light));
        }
        if dark.contains(x, y) {
            return ScreenEvent::Pref(PrefChange::Theme(Theme::Dark));
        }

        let (bg_prev, bg_next) = Self::background_row(ctx);
        if bg_prev.contains(x, y) {
            return ScreenEvent::Pref(PrefChange::Background(Self::cycle_background(
                &ctx.prefs.background,
                -1,
            )));
        }
        if bg_next.contains(x, y) {
            return ScreenEvent::Pref(PrefChange::Background(Self::cycle_background(
                &ctx.prefs.background,
                1,
            )));
        }

        let (skin_prev, skin_next) = Self::skin_row(ctx);
        if skin_prev.contains(x, y) {
            return ScreenEvent::Pref(PrefChange::MenuTheme(Self::cycle_skin(
                ctx.prefs.menu_theme,
                -1,
            )));
        }
        if skin_next.contains(x, y) {
            return ScreenEvent::Pref(PrefChange::MenuTheme(Self::cycle_skin(
                ctx.prefs.menu_theme,
                1,
            )));
        }

        for (rect, family) in Self::font_rects(ctx).iter().zip(FontFamily::ALL) {
            if rect.contains(x, y) {
                return ScreenEvent::Pref(PrefChange::FontFamily(*family));
            }
        }
        for (rect, size) in Self::size_rects(ctx).iter().zip(FontSize::ALL) {
            if rect.contains(x, y) {
                return ScreenEvent::Pref(PrefChange::FontSize(*size));
            }
        }

        if Self::exit_rect(ctx).contains(x, y) {
            return ScreenEvent::Back;
        }
        ScreenEvent::None
    }

    fn sync_scene(&self, scene: &mut SceneRegistry, ctx: &ScreenContext) {
        screen_title(scene, "set_title", "Settings", ctx);

        let panel = Self::panel(ctx);
        ensure_fill(
            scene, "set_panel", panel.x, panel.y, panel.w, panel.h,
            ctx.palette.surface,
        );
        if let Ok(obj) = scene.get_mut("set_panel") {
            obj.z = -1;
            obj.border_radius = Some(16);
        }

        let section = |scene: &mut SceneRegistry, name: &str, label: &str, y: i32| {
            ensure_text(
                scene,
                name,
                panel.x + 12,
                y,
                ctx.font_px + 2,
                ctx.palette.text_primary,
            );
            if let Ok(obj) = scene.get_mut(name) {
                obj.text = Some(label.to_string());
            }
        };

        // Theme toggle.
        section(scene, "set_sec_theme", "Appearance", panel.y + 4);
        let [light, dark] = Self::theme_rects(ctx);
        let is_light = ctx.prefs.theme == Theme::Light;
        plain_button(
            scene,
            "set_theme_light",
            light,
            "Light",
            if is_light {
                ctx.palette.accent
            } else {
                ctx.palette.surface_variant
            },
            if is_light {
                Color::WHITE
            } else {
                ctx.palette.text_primary
            },
            ctx.font_px,
        );
        plain_button(
            scene,
            "set_theme_dark",
            dark,
            "Dark",
            if is_light {
                ctx.palette.surface_variant
            } else {
                ctx.palette.accent
            },
            if is_light {
                ctx.palette.text_primary
            } else {
                Color::WHITE
            },
            ctx.font_px,
        );

        // Background cycler.
        section(scene, "set_sec_bg", "Wallpaper", panel.y + 66);
        let (bg_prev, bg_next) = Self::background_row(ctx);
        plain_button(
            scene, "set_bg_prev", bg_prev, "<",
            ctx.palette.surface_variant, ctx.palette.text_primary, ctx.font_px,
        );
        plain_button(
            scene, "set_bg_next", bg_next, ">",
            ctx.palette.surface_variant, ctx.palette.text_primary, ctx.font_px,
        );
        ensure_text(
            scene,
            "set_bg_value",
            panel.x + 76,
            bg_prev.y + 8,
            ctx.font_px,
            ctx.palette.text_secondary,
        );
        if let Ok(obj) = scene.get_mut("set_bg_value") {
            obj.text = Some(Self::background_label(&ctx.prefs.background));
        }

        // Menu skin cycler.
        section(scene, "set_sec_skin", "Menu style", panel.y + 128);
        let (skin_prev, skin_next) = Self::skin_row(ctx);
        plain_button(
            scene, "set_skin_prev", skin_prev, "<",
            ctx.palette.surface_variant, ctx.palette.text_primary, ctx.font_px,
        );
        plain_button(
            scene, "set_skin_next", skin_next, ">",
            ctx.palette.surface_variant, ctx.palette.text_primary, ctx.font_px,
        );
        ensure_text(
            scene,
            "set_skin_value",
            panel.x + 76,
            skin_prev.y + 8,
            ctx.font_px,
            ctx.palette.text_secondary,
        );
        if let Ok(obj) = scene.get_mut("set_skin_value") {
            obj.text = Some(menu_theme_name(ctx.prefs.menu_theme).to_string());
        }

        // Font family grid.
        section(scene, "set_sec_font", "Font", panel.y + 190);
        for (i, (rect, family)) in Self::font_rects(ctx).iter().zip(FontFamily::ALL).enumerate() {
            let selected = ctx.prefs.font_family == *family;
            plain_button(
                scene,
                &format!("set_font_{i}"),
                *rect,
                family_name(*family),
                if selected {
                    ctx.palette.accent
                } else {
                    ctx.palette.surface_variant
                },
                if selected {
                    Color::WHITE
                } else {
                    ctx.palette.text_primary
                },
                12,
            );
        }

        // Font size row.
        section(scene, "set_sec_size", "Text size", panel.y + 286);
        for (i, (rect, size)) in Self::size_rects(ctx).iter().zip(FontSize::ALL).enumerate() {
            let selected = ctx.prefs.font_size == *size;
            plain_button(
                scene,
                &format!("set_size_{i}"),
                *rect,
                size_name(*size),
                if selected {
                    ctx.palette.accent
                } else {
                    ctx.palette.surface_variant
                },
                if selected {
                    Color::WHITE
                } else {
                    ctx.palette.text_primary
                },
                ctx.font_px,
            );
        }

        themed_button(scene, "set_exit", Self::exit_rect(ctx), "Exit", ctx);
    }
}
