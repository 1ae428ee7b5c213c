//! Battery readout: gauge, percentage, and a friendly advice line.

use sprout_scene::SceneRegistry;
use sprout_scene::helpers::{ensure_fill, ensure_text};
use sprout_types::geometry::Rect;
use sprout_types::input::InputEvent;

use super::widgets::{screen_title, themed_button};
use super::{Screen, ScreenContext, ScreenEvent};
use crate::view::ViewId;

const PREFIX: &str = "batt_";
const GAUGE_W: u32 = 96;
const GAUGE_H: u32 = 190;

#[derive(Debug, Default)]
pub struct BatteryInfoScreen;

impl BatteryInfoScreen {
    pub fn new() -> Self {
        Self
    }

    fn advice(level: u8, charging: bool) -> &'static str {
        if charging {
            "Charging now -- the battery will be full soon!"
        } else if level <= 15 {
            "Battery low! Plug in the charger soon."
        } else {
            "Battery is in good shape. Keep playing!"
        }
    }

    fn exit_rect(ctx: &ScreenContext) -> Rect {
        Rect::new(
            ctx.content.x + (ctx.content.w as i32 - 280) / 2,
            ctx.content.y + ctx.content.h as i32 - 80,
            280,
            56,
        )
    }
}

impl Screen for BatteryInfoScreen {
    fn view_id(&self) -> ViewId {
        ViewId::BatteryInfo
    }

    fn prefix(&self) -> &'static str {
        PREFIX
    }

    fn handle_input(&mut self, event: &InputEvent, ctx: &ScreenContext) -> ScreenEvent {
        if let InputEvent::PointerClick { x, y } = event
            && Self::exit_rect(ctx).contains(*x, *y)
        {
            return ScreenEvent::Back;
        }
        ScreenEvent::None
    }

    fn sync_scene(&self, scene: &mut SceneRegistry, ctx: &ScreenContext) {
        screen_title(scene, "batt_title", "Battery", ctx);

        use sprout_platform::BatteryState;
        let supported = ctx.battery.state != BatteryState::Unsupported;
        if !supported {
            scene.destroy_prefix("batt_gauge");
            scene.destroy_prefix("batt_pct");
            scene.destroy_prefix("batt_state");
            ensure_text(
                scene,
                "batt_unsupported",
                ctx.content.x + ctx.content.w as i32 / 2 - 170,
                ctx.content.y + ctx.content.h as i32 / 2,
                ctx.font_px + 2,
                ctx.palette.text_secondary,
            );
            if let Ok(obj) = scene.get_mut("batt_unsupported") {
                obj.text = Some("This device does not report battery status.".to_string());
            }
            themed_button(scene, "batt_exit", Self::exit_rect(ctx), "Exit", ctx);
            return;
        }
        scene.destroy_prefix("batt_unsupported");

        let level = ctx.battery.battery_percent.unwrap_or(0);
        let charging = ctx.battery.charging();

        // Gauge shell and fill (fill grows from the bottom).
        let gauge_x = ctx.content.x + ctx.content.w as i32 / 2 - GAUGE_W as i32 / 2;
        let gauge_y = ctx.content.y + 80;
        ensure_fill(
            scene,
            "batt_gauge",
            gauge_x,
            gauge_y,
            GAUGE_W,
            GAUGE_H,
            ctx.palette.surface,
        );
        if let Ok(obj) = scene.get_mut("batt_gauge") {
            obj.border_radius = Some(16);
            obj.stroke_width = Some(4);
            obj.stroke_color = Some(ctx.palette.border);
        }
        let fill_h = (GAUGE_H - 12) * level as u32 / 100;
        let fill_color = if level <= 15 {
            ctx.palette.danger
        } else if level <= 50 {
            ctx.palette.warning
        } else {
            ctx.palette.success
        };
        ensure_fill(
            scene,
            "batt_gauge_fill",
            gauge_x + 6,
            gauge_y + (GAUGE_H - 6 - fill_h) as i32,
            GAUGE_W - 12,
            fill_h,
            fill_color,
        );
        if let Ok(obj) = scene.get_mut("batt_gauge_fill") {
            obj.z = 1;
            obj.border_radius = Some(8);
        }
        ensure_text(scene, "batt_gauge_bolt", gauge_x + GAUGE_W as i32 / 2 - 10, gauge_y + GAUGE_H as i32 / 2 - 16, 32, ctx.palette.text_primary);
        if let Ok(obj) = scene.get_mut("batt_gauge_bolt") {
            obj.z = 2;
            obj.text = Some("\u{26A1}".to_string());
            obj.visible = charging;
        }

        // Percent readout and state line.
        ensure_text(
            scene,
            "batt_pct",
            gauge_x - 10,
            gauge_y + GAUGE_H as i32 + 18,
            44,
            ctx.palette.text_primary,
        );
        if let Ok(obj) = scene.get_mut("batt_pct") {
            obj.text = Some(format!("{level}%"));
        }
        ensure_text(
            scene,
            "batt_state",
            gauge_x - 10,
            gauge_y + GAUGE_H as i32 + 70,
            ctx.font_px + 2,
            ctx.palette.text_secondary,
        );
        if let Ok(obj) = scene.get_mut("batt_state") {
            obj.text = Some(if charging { "Charging" } else { "Not charging" }.to_string());
        }

        // Advice panel.
        let advice = Self::advice(level, charging);
        ensure_fill(
            scene,
            "batt_advice",
            ctx.content.x + (ctx.content.w as i32 - 460) / 2,
            gauge_y + GAUGE_H as i32 + 106,
            460,
            52,
            ctx.palette.surface,
        );
        if let Ok(obj) = scene.get_mut("batt_advice") {
            obj.border_radius = Some(10);
            obj.text = Some(advice.to_string());
            obj.text_color = ctx.palette.text_primary;
            obj.font_size = ctx.font_px;
        }

        themed_button(scene, "batt_exit", Self::exit_rect(ctx), "Exit", ctx);
    }
}
