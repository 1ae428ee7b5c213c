//! Footer chrome: the back pill.
//!
//! Shown only when the history can go back and the active screen is not
//! immersive; the shell enforces both conditions.

use sprout_scene::SceneRegistry;
use sprout_scene::helpers::{ensure_pill, ensure_text, hide_prefix};
use sprout_types::color::with_alpha;
use sprout_types::geometry::Rect;

use crate::skin::Palette;

/// Footer band height in pixels.
pub const HEIGHT: u32 = 72;

/// Scene-object namespace for the footer.
pub const PREFIX: &str = "foot_";

const Z_FOOTER: i32 = 900;
const PILL_W: u32 = 96;
const PILL_H: u32 = 48;

/// The back pill's rectangle, centered in the footer band.
pub fn back_rect(screen_w: u32, screen_h: u32) -> Rect {
    Rect::new(
        (screen_w as i32 - PILL_W as i32) / 2,
        screen_h as i32 - HEIGHT as i32 + (HEIGHT - PILL_H) as i32 / 2,
        PILL_W,
        PILL_H,
    )
}

/// Stateless footer renderer.
#[derive(Debug, Default)]
pub struct BottomBar;

impl BottomBar {
    pub fn new() -> Self {
        Self
    }

    /// Whether a tap lands on the back pill.
    pub fn hit_back(&self, x: i32, y: i32, screen_w: u32, screen_h: u32) -> bool {
        back_rect(screen_w, screen_h).contains(x, y)
    }

    /// Synchronize footer scene objects.
    pub fn sync_scene(
        &self,
        scene: &mut SceneRegistry,
        palette: &Palette,
        screen_w: u32,
        screen_h: u32,
    ) {
        let rect = back_rect(screen_w, screen_h);
        ensure_pill(
            scene,
            "foot_back_pill",
            rect.x,
            rect.y,
            rect.w,
            rect.h,
            palette.footer_bg,
            with_alpha(palette.footer_icon, 50),
        );
        if let Ok(obj) = scene.get_mut("foot_back_pill") {
            obj.z = Z_FOOTER;
        }
        let (cx, cy) = rect.center();
        ensure_text(scene, "foot_back_icon", cx - 8, cy - 10, 20, palette.footer_icon);
        if let Ok(obj) = scene.get_mut("foot_back_icon") {
            obj.z = Z_FOOTER + 1;
            obj.text = Some("<".to_string());
        }
    }

    /// Hide the footer (root screen or immersive screen).
    pub fn hide(scene: &mut SceneRegistry) {
        hide_prefix(scene, PREFIX);
    }
}
