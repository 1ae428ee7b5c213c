//! Named-object scene registry.
//!
//! The shell renders by synchronizing a registry of named objects instead of
//! issuing draw calls: each frame, components create or update the objects
//! they own, and a frontend walks the registry in z-order to present it.
//! Objects are keyed by name so repeated syncs are idempotent.

pub mod helpers;

use std::collections::BTreeMap;

use sprout_types::color::Color;
use sprout_types::error::{PadError, Result};
use sprout_types::geometry::Rect;

/// A single presentable object: a rectangle with optional text and styling.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneObject {
    pub x: i32,
    pub y: i32,
    pub w: u32,
    pub h: u32,
    /// Draw order; higher values draw on top.
    pub z: i32,
    pub visible: bool,
    /// Fill color (alpha 0 = no fill).
    pub color: Color,
    pub text: Option<String>,
    pub text_color: Color,
    pub font_size: u16,
    /// Extended visual properties.
    pub border_radius: Option<u16>,
    pub gradient_top: Option<Color>,
    pub gradient_bottom: Option<Color>,
    pub stroke_width: Option<u16>,
    pub stroke_color: Option<Color>,
    /// Background-image URL (backgrounds only).
    pub image_url: Option<String>,
    /// Opaque presentation class token (backgrounds / typography).
    pub style_class: Option<String>,
}

impl Default for SceneObject {
    fn default() -> Self {
        Self {
            x: 0,
            y: 0,
            w: 0,
            h: 0,
            z: 0,
            visible: true,
            color: Color::TRANSPARENT,
            text: None,
            text_color: Color::WHITE,
            font_size: 16,
            border_radius: None,
            gradient_top: None,
            gradient_bottom: None,
            stroke_width: None,
            stroke_color: None,
            image_url: None,
            style_class: None,
        }
    }
}

impl SceneObject {
    /// The object's bounding rectangle.
    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.w, self.h)
    }

    /// Whether a point hits this object (visible objects only).
    pub fn hit(&self, px: i32, py: i32) -> bool {
        self.visible && self.rect().contains(px, py)
    }
}

/// Registry of named scene objects.
///
/// Iteration order is deterministic (sorted by name); presentation order is
/// obtained from [`SceneRegistry::draw_order`].
#[derive(Debug, Default)]
pub struct SceneRegistry {
    objects: BTreeMap<String, SceneObject>,
}

impl SceneRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an object with default fields, replacing any existing object
    /// with the same name. Returns a mutable reference for initialization.
    pub fn create(&mut self, name: &str) -> &mut SceneObject {
        self.objects
            .insert(name.to_string(), SceneObject::default());
        self.objects
            .get_mut(name)
            .unwrap_or_else(|| unreachable!("object inserted above"))
    }

    /// Whether an object with this name exists.
    pub fn contains(&self, name: &str) -> bool {
        self.objects.contains_key(name)
    }

    pub fn get(&self, name: &str) -> Result<&SceneObject> {
        self.objects
            .get(name)
            .ok_or_else(|| PadError::Scene(format!("no such object: {name}")))
    }

    pub fn get_mut(&mut self, name: &str) -> Result<&mut SceneObject> {
        self.objects
            .get_mut(name)
            .ok_or_else(|| PadError::Scene(format!("no such object: {name}")))
    }

    /// Remove an object. Missing names are an error so callers can detect
    /// teardown mismatches.
    pub fn destroy(&mut self, name: &str) -> Result<()> {
        if self.objects.remove(name).is_none() {
            return Err(PadError::Scene(format!("no such object: {name}")));
        }
        Ok(())
    }

    /// Remove every object whose name starts with `prefix`.
    ///
    /// Used when switching screens: each screen namespaces its objects under
    /// a prefix, so the previous screen's objects can be dropped wholesale.
    pub fn destroy_prefix(&mut self, prefix: &str) -> usize {
        let names: Vec<String> = self
            .objects
            .keys()
            .filter(|k| k.starts_with(prefix))
            .cloned()
            .collect();
        for name in &names {
            self.objects.remove(name);
        }
        if !names.is_empty() {
            log::debug!("scene: destroyed {} objects under '{prefix}'", names.len());
        }
        names.len()
    }

    /// Number of objects in the registry.
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// Iterate objects by name (sorted).
    pub fn iter(&self) -> impl Iterator<Item = (&str, &SceneObject)> {
        self.objects.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Names and objects in presentation order: ascending z, then name.
    pub fn draw_order(&self) -> Vec<(&str, &SceneObject)> {
        let mut items: Vec<(&str, &SceneObject)> = self
            .objects
            .iter()
            .filter(|(_, o)| o.visible)
            .map(|(k, v)| (k.as_str(), v))
            .collect();
        items.sort_by(|a, b| a.1.z.cmp(&b.1.z).then_with(|| a.0.cmp(b.0)));
        items
    }

    /// Topmost visible object containing the point, if any.
    pub fn hit_test(&self, x: i32, y: i32) -> Option<&str> {
        self.draw_order()
            .into_iter()
            .rev()
            .find(|(_, o)| o.hit(x, y))
            .map(|(name, _)| name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn create_and_get() {
        let mut scene = SceneRegistry::new();
        {
            let obj = scene.create("bar_top");
            obj.w = 480;
            obj.h = 24;
        }
        assert!(scene.contains("bar_top"));
        let obj = scene.get("bar_top").unwrap();
        assert_eq!(obj.w, 480);
        assert_eq!(obj.h, 24);
    }

    #[test]
    fn create_replaces_existing() {
        let mut scene = SceneRegistry::new();
        scene.create("a").x = 99;
        scene.create("a");
        assert_eq!(scene.get("a").unwrap().x, 0);
        assert_eq!(scene.len(), 1);
    }

    #[test]
    fn get_missing_is_error() {
        let scene = SceneRegistry::new();
        assert!(scene.get("nope").is_err());
    }

    #[test]
    fn destroy_removes() {
        let mut scene = SceneRegistry::new();
        scene.create("a");
        scene.destroy("a").unwrap();
        assert!(!scene.contains("a"));
        assert!(scene.destroy("a").is_err());
    }

    #[test]
    fn destroy_prefix_removes_only_matching() {
        let mut scene = SceneRegistry::new();
        scene.create("calc_display");
        scene.create("calc_btn_0");
        scene.create("hdr_clock");
        let removed = scene.destroy_prefix("calc_");
        assert_eq!(removed, 2);
        assert!(scene.contains("hdr_clock"));
        assert!(!scene.contains("calc_display"));
    }

    #[test]
    fn draw_order_sorts_by_z_then_name() {
        let mut scene = SceneRegistry::new();
        scene.create("b").z = 10;
        scene.create("a").z = 10;
        scene.create("top").z = 900;
        scene.create("hidden").z = 999;
        scene.get_mut("hidden").unwrap().visible = false;

        let order: Vec<&str> = scene.draw_order().iter().map(|(n, _)| *n).collect();
        assert_eq!(order, vec!["a", "b", "top"]);
    }

    #[test]
    fn hit_test_prefers_topmost() {
        let mut scene = SceneRegistry::new();
        {
            let below = scene.create("below");
            below.w = 100;
            below.h = 100;
        }
        {
            let above = scene.create("above");
            above.w = 100;
            above.h = 100;
            above.z = 5;
        }
        assert_eq!(scene.hit_test(50, 50), Some("above"));
        assert_eq!(scene.hit_test(500, 500), None);
    }

    #[test]
    fn hit_ignores_invisible() {
        let mut scene = SceneRegistry::new();
        {
            let obj = scene.create("ghost");
            obj.w = 10;
            obj.h = 10;
            obj.visible = false;
        }
        assert_eq!(scene.hit_test(5, 5), None);
    }

    proptest! {
        #[test]
        fn create_then_contains(name in "[a-z_]{1,16}") {
            let mut scene = SceneRegistry::new();
            scene.create(&name);
            prop_assert!(scene.contains(&name));
            prop_assert!(scene.get(&name).is_ok());
        }

        #[test]
        fn destroy_prefix_leaves_no_match(
            names in prop::collection::btree_set("[a-z]{1,8}", 1..12),
            prefix in "[a-z]{1,3}",
        ) {
            let mut scene = SceneRegistry::new();
            for n in &names {
                scene.create(n);
            }
            scene.destroy_prefix(&prefix);
            prop_assert!(scene.iter().all(|(n, _)| !n.starts_with(&prefix)));
        }
    }
}
