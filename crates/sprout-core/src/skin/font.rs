//! Font family and size tables.

use sprout_prefs::{FontFamily, FontSize};

/// Presentation class token recorded on the scene root.
pub fn family_class(family: FontFamily) -> &'static str {
    match family {
        FontFamily::Modern => "font-modern",
        FontFamily::Formal => "font-formal",
        FontFamily::Stylish => "font-stylish",
        FontFamily::Pixel => "font-pixel",
        FontFamily::Script => "font-script",
        FontFamily::Futuristic => "font-futuristic",
        FontFamily::Mono => "font-mono",
        FontFamily::Handwritten => "font-handwritten",
    }
}

/// Display name for the font picker.
pub fn family_name(family: FontFamily) -> &'static str {
    match family {
        FontFamily::Modern => "Modern",
        FontFamily::Formal => "Formal",
        FontFamily::Stylish => "Stylish",
        FontFamily::Pixel => "Pixel",
        FontFamily::Script => "Script",
        FontFamily::Futuristic => "Futuristic",
        FontFamily::Mono => "Typewriter",
        FontFamily::Handwritten => "Handwritten",
    }
}

/// Presentation class token for the base font size.
pub fn size_class(size: FontSize) -> &'static str {
    match size {
        FontSize::Small => "text-sm",
        FontSize::Base => "text-base",
        FontSize::Large => "text-lg",
    }
}

/// Base font size in pixels.
pub fn size_px(size: FontSize) -> u16 {
    match size {
        FontSize::Small => 14,
        FontSize::Base => 16,
        FontSize::Large => 18,
    }
}

/// Display name for the size picker.
pub fn size_name(size: FontSize) -> &'static str {
    match size {
        FontSize::Small => "Small",
        FontSize::Base => "Medium",
        FontSize::Large => "Large",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn family_classes_are_unique() {
        use std::collections::HashSet;
        let classes: HashSet<&str> = FontFamily::ALL.iter().map(|f| family_class(*f)).collect();
        assert_eq!(classes.len(), FontFamily::ALL.len());
    }

    #[test]
    fn sizes_are_ordered() {
        assert!(size_px(FontSize::Small) < size_px(FontSize::Base));
        assert!(size_px(FontSize::Base) < size_px(FontSize::Large));
    }

    #[test]
    fn size_classes() {
        assert_eq!(size_class(FontSize::Small), "text-sm");
        assert_eq!(size_class(FontSize::Base), "text-base");
        assert_eq!(size_class(FontSize::Large), "text-lg");
    }
}
