//! Shared scene widgets for the activity screens.

use sprout_scene::SceneRegistry;
use sprout_scene::helpers::{ensure_fill, ensure_text};
use sprout_types::color::Color;
use sprout_types::geometry::Rect;

use super::ScreenContext;

/// Standard themed-button size.
pub const BTN_W: u32 = 280;
pub const BTN_H: u32 = 56;
pub const GAP: u32 = 18;

/// Rects for a centered vertical column of standard buttons.
pub fn column_rects(content: Rect, count: usize) -> Vec<Rect> {
    let total_h = count as u32 * BTN_H + count.saturating_sub(1) as u32 * GAP;
    let x = content.x + (content.w as i32 - BTN_W as i32) / 2;
    let mut y = content.y + (content.h as i32 - total_h as i32).max(0) / 2;
    (0..count)
        .map(|_| {
            let rect = Rect::new(x, y, BTN_W, BTN_H);
            y += (BTN_H + GAP) as i32;
            rect
        })
        .collect()
}

/// Rects for a grid laid out left-to-right, top-to-bottom inside `area`.
pub fn grid_rects(area: Rect, cols: usize, count: usize, cell_h: u32, gap: u32) -> Vec<Rect> {
    let cols = cols.max(1);
    let cell_w = (area.w.saturating_sub((cols as u32 - 1) * gap)) / cols as u32;
    (0..count)
        .map(|i| {
            let col = i % cols;
            let row = i / cols;
            Rect::new(
                area.x + col as i32 * (cell_w + gap) as i32,
                area.y + row as i32 * (cell_h + gap) as i32,
                cell_w,
                cell_h,
            )
        })
        .collect()
}

/// Sync a button styled by the active menu skin: rim, face, centered label.
pub fn themed_button(
    scene: &mut SceneRegistry,
    name: &str,
    rect: Rect,
    label: &str,
    ctx: &ScreenContext,
) {
    ensure_fill(scene, name, rect.x, rect.y, rect.w, rect.h, ctx.skin.container);
    if let Ok(obj) = scene.get_mut(name) {
        obj.border_radius = Some(12);
    }
    let face = rect.inset(3);
    let face_name = format!("{name}_face");
    ensure_fill(
        scene,
        &face_name,
        face.x,
        face.y,
        face.w,
        face.h,
        ctx.skin.button_bg,
    );
    if let Ok(obj) = scene.get_mut(&face_name) {
        obj.border_radius = Some(10);
        obj.z = 1;
        obj.gradient_top = ctx.skin.button_bg_bottom.map(|_| ctx.skin.button_bg);
        obj.gradient_bottom = ctx.skin.button_bg_bottom;
    }
    let label_name = format!("{name}_label");
    let (cx, cy) = rect.center();
    ensure_text(
        scene,
        &label_name,
        cx - (label.len() as i32 * ctx.font_px as i32) / 4,
        cy - ctx.font_px as i32 / 2,
        ctx.font_px,
        ctx.skin.button_text,
    );
    if let Ok(obj) = scene.get_mut(&label_name) {
        obj.z = 2;
        obj.text = Some(label.to_string());
        obj.stroke_color = ctx.skin.glow;
    }
}

/// Sync a plain (non-skinned) button: fill + centered label.
pub fn plain_button(
    scene: &mut SceneRegistry,
    name: &str,
    rect: Rect,
    label: &str,
    fill: Color,
    text_color: Color,
    font_px: u16,
) {
    ensure_fill(scene, name, rect.x, rect.y, rect.w, rect.h, fill);
    if let Ok(obj) = scene.get_mut(name) {
        obj.border_radius = Some(10);
    }
    let label_name = format!("{name}_label");
    let (cx, cy) = rect.center();
    ensure_text(
        scene,
        &label_name,
        cx - (label.len() as i32 * font_px as i32) / 4,
        cy - font_px as i32 / 2,
        font_px,
        text_color,
    );
    if let Ok(obj) = scene.get_mut(&label_name) {
        obj.z = 1;
        obj.text = Some(label.to_string());
    }
}

/// Sync a screen title centered near the top of the content area.
pub fn screen_title(scene: &mut SceneRegistry, name: &str, label: &str, ctx: &ScreenContext) {
    let title_px = ctx.font_px + 12;
    let x = ctx.content.x + ctx.content.w as i32 / 2 - (label.len() as i32 * title_px as i32) / 4;
    ensure_text(scene, name, x, ctx.content.y + 16, title_px, ctx.palette.text_primary);
    if let Ok(obj) = scene.get_mut(name) {
        obj.text = Some(label.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::screens::testutil;

    #[test]
    fn column_is_centered_and_stacked() {
        let ctx = testutil::ctx();
        let rects = column_rects(ctx.content, 3);
        assert_eq!(rects.len(), 3);
        assert!(rects.windows(2).all(|w| w[1].y > w[0].y));
        for r in &rects {
            assert_eq!(r.x, ctx.content.x + (ctx.content.w as i32 - BTN_W as i32) / 2);
        }
    }

    #[test]
    fn grid_fills_rows() {
        let area = Rect::new(0, 0, 400, 400);
        let rects = grid_rects(area, 4, 6, 50, 10);
        assert_eq!(rects.len(), 6);
        assert_eq!(rects[0].y, rects[3].y);
        assert!(rects[4].y > rects[0].y);
    }

    #[test]
    fn themed_button_creates_three_objects() {
        let ctx = testutil::ctx();
        let mut scene = SceneRegistry::new();
        themed_button(&mut scene, "t_btn", Rect::new(0, 0, 100, 40), "Play", &ctx);
        assert!(scene.contains("t_btn"));
        assert!(scene.contains("t_btn_face"));
        assert_eq!(
            scene.get("t_btn_label").unwrap().text.as_deref(),
            Some("Play")
        );
    }

    #[test]
    fn plain_button_labels() {
        let mut scene = SceneRegistry::new();
        plain_button(
            &mut scene,
            "p_btn",
            Rect::new(0, 0, 80, 30),
            "OK",
            Color::rgb(50, 50, 50),
            Color::WHITE,
            16,
        );
        assert_eq!(scene.get("p_btn_label").unwrap().text.as_deref(), Some("OK"));
    }
}
