//! Text rendering of the scene for the simulator.

use sprout_scene::SceneRegistry;

/// Print visible objects in draw order: name, geometry, and label text.
pub fn print_scene(scene: &SceneRegistry) {
    println!("--- scene ({} objects) ---", scene.len());
    for (name, obj) in scene.draw_order() {
        let mut line = format!(
            "  [{name}] {}x{} @ ({}, {}) z={}",
            obj.w, obj.h, obj.x, obj.y, obj.z,
        );
        if let Some(text) = &obj.text {
            line.push_str(&format!("  \"{text}\""));
        }
        if let Some(class) = &obj.style_class {
            line.push_str(&format!("  class={class}"));
        }
        if let Some(url) = &obj.image_url {
            line.push_str(&format!("  image={url}"));
        }
        println!("{line}");
    }
}
