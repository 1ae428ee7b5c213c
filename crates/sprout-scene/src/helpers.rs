//! Idempotent object-sync helpers.
//!
//! Components call these every frame; objects are created on first use and
//! updated in place afterwards, so sync code never branches on existence.

use sprout_types::color::Color;

use crate::SceneRegistry;

/// Ensure a text object exists with the given position and style.
pub fn ensure_text(
    scene: &mut SceneRegistry,
    name: &str,
    x: i32,
    y: i32,
    font_size: u16,
    color: Color,
) {
    if !scene.contains(name) {
        scene.create(name);
    }
    if let Ok(obj) = scene.get_mut(name) {
        obj.x = x;
        obj.y = y;
        obj.font_size = font_size;
        obj.text_color = color;
        obj.color = Color::TRANSPARENT;
        obj.visible = true;
    }
}

/// Ensure a filled rectangle exists with the given geometry and color.
pub fn ensure_fill(
    scene: &mut SceneRegistry,
    name: &str,
    x: i32,
    y: i32,
    w: u32,
    h: u32,
    color: Color,
) {
    if !scene.contains(name) {
        scene.create(name);
    }
    if let Ok(obj) = scene.get_mut(name) {
        obj.x = x;
        obj.y = y;
        obj.w = w;
        obj.h = h;
        obj.color = color;
        obj.visible = true;
    }
}

/// Ensure a pill-shaped (fully rounded) fill with a stroke outline.
#[allow(clippy::too_many_arguments)]
pub fn ensure_pill(
    scene: &mut SceneRegistry,
    name: &str,
    x: i32,
    y: i32,
    w: u32,
    h: u32,
    fill: Color,
    stroke: Color,
) {
    ensure_fill(scene, name, x, y, w, h, fill);
    if let Ok(obj) = scene.get_mut(name) {
        obj.border_radius = Some((h / 2) as u16);
        obj.stroke_width = Some(1);
        obj.stroke_color = Some(stroke);
    }
}

/// Ensure a thin border/separator rectangle.
pub fn ensure_border(
    scene: &mut SceneRegistry,
    name: &str,
    x: i32,
    y: i32,
    w: u32,
    h: u32,
    color: Color,
) {
    ensure_fill(scene, name, x, y, w, h, color);
}

/// Hide the named objects if they exist.
pub fn hide_objects(scene: &mut SceneRegistry, names: &[&str]) {
    for name in names {
        if let Ok(obj) = scene.get_mut(name) {
            obj.visible = false;
        }
    }
}

/// Hide every object whose name starts with `prefix`.
pub fn hide_prefix(scene: &mut SceneRegistry, prefix: &str) {
    let names: Vec<String> = scene
        .iter()
        .filter(|(n, _)| n.starts_with(prefix))
        .map(|(n, _)| n.to_string())
        .collect();
    for name in names {
        if let Ok(obj) = scene.get_mut(&name) {
            obj.visible = false;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ensure_text_creates_then_updates() {
        let mut scene = SceneRegistry::new();
        ensure_text(&mut scene, "label", 10, 20, 16, Color::WHITE);
        assert!(scene.contains("label"));
        ensure_text(&mut scene, "label", 30, 40, 18, Color::BLACK);
        let obj = scene.get("label").unwrap();
        assert_eq!((obj.x, obj.y), (30, 40));
        assert_eq!(obj.font_size, 18);
        assert_eq!(obj.text_color, Color::BLACK);
    }

    #[test]
    fn ensure_text_preserves_text_content() {
        let mut scene = SceneRegistry::new();
        ensure_text(&mut scene, "label", 0, 0, 16, Color::WHITE);
        scene.get_mut("label").unwrap().text = Some("hello".into());
        ensure_text(&mut scene, "label", 5, 5, 16, Color::WHITE);
        assert_eq!(scene.get("label").unwrap().text.as_deref(), Some("hello"));
    }

    #[test]
    fn ensure_fill_sets_geometry() {
        let mut scene = SceneRegistry::new();
        ensure_fill(&mut scene, "bg", 0, 0, 480, 272, Color::rgb(20, 20, 40));
        let obj = scene.get("bg").unwrap();
        assert_eq!((obj.w, obj.h), (480, 272));
        assert_eq!(obj.color, Color::rgb(20, 20, 40));
    }

    #[test]
    fn ensure_pill_rounds_and_strokes() {
        let mut scene = SceneRegistry::new();
        ensure_pill(
            &mut scene,
            "pill",
            10,
            10,
            80,
            24,
            Color::rgba(255, 255, 255, 30),
            Color::WHITE,
        );
        let obj = scene.get("pill").unwrap();
        assert_eq!(obj.border_radius, Some(12));
        assert_eq!(obj.stroke_width, Some(1));
        assert_eq!(obj.stroke_color, Some(Color::WHITE));
    }

    #[test]
    fn hide_objects_skips_missing() {
        let mut scene = SceneRegistry::new();
        scene.create("a");
        hide_objects(&mut scene, &["a", "missing"]);
        assert!(!scene.get("a").unwrap().visible);
    }

    #[test]
    fn hide_prefix_hides_all_matching() {
        let mut scene = SceneRegistry::new();
        scene.create("hdr_clock");
        scene.create("hdr_battery");
        scene.create("foot_back");
        hide_prefix(&mut scene, "hdr_");
        assert!(!scene.get("hdr_clock").unwrap().visible);
        assert!(!scene.get("hdr_battery").unwrap().visible);
        assert!(scene.get("foot_back").unwrap().visible);
    }
}
