//! Background theme derivation.
//!
//! The persisted background preference is a tagged string:
//! `default`, `solid:<class>`, `gradient:<class>`, or `image:<url>`.
//! Derivation splits on the first `:`. Unrecognized tags keep the permissive
//! behavior of applying the remainder as an opaque style class (logged at
//! warn); a string without a separator is treated the same way.

/// Derived background presentation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BackgroundStyle {
    /// The neutral palette background for the active light/dark theme.
    Neutral,
    /// An opaque style-class token applied as-is (solids and gradients).
    Class(String),
    /// A background image by URL.
    Image(String),
}

impl BackgroundStyle {
    pub fn class(&self) -> Option<&str> {
        match self {
            Self::Class(c) => Some(c),
            _ => None,
        }
    }

    pub fn image_url(&self) -> Option<&str> {
        match self {
            Self::Image(url) => Some(url),
            _ => None,
        }
    }
}

/// Derive the presentation for a raw background-theme string.
pub fn derive_background(raw: &str) -> BackgroundStyle {
    if raw == "default" {
        return BackgroundStyle::Neutral;
    }
    match raw.split_once(':') {
        Some(("image", url)) => BackgroundStyle::Image(url.to_string()),
        Some(("solid", class)) | Some(("gradient", class)) => {
            BackgroundStyle::Class(class.to_string())
        },
        Some((tag, rest)) => {
            log::warn!("background: unknown tag '{tag}', applying remainder as class");
            BackgroundStyle::Class(rest.to_string())
        },
        None => {
            log::warn!("background: untagged value '{raw}', applying as class");
            BackgroundStyle::Class(raw.to_string())
        },
    }
}

/// Background choices offered by the settings screen, grouped for display.
pub const BACKGROUND_OPTIONS: &[(&str, &[(&str, &str)])] = &[
    (
        "Solid colors",
        &[
            ("Default", "default"),
            ("Deep Blue", "solid:bg-blue-900"),
            ("Slate", "solid:bg-slate-900"),
            ("Blush", "solid:bg-pink-900"),
            ("Moss", "solid:bg-emerald-900"),
        ],
    ),
    (
        "Gradients",
        &[
            (
                "Sunset",
                "gradient:bg-gradient-to-br from-yellow-800 via-orange-700 to-red-900",
            ),
            (
                "Open Sky",
                "gradient:bg-gradient-to-br from-sky-400 to-blue-600",
            ),
            (
                "Galaxy",
                "gradient:bg-gradient-to-br from-gray-900 via-purple-900 to-violet-600",
            ),
            (
                "Deep Forest",
                "gradient:bg-gradient-to-br from-green-900 to-teal-800",
            ),
        ],
    ),
    (
        "Pictures",
        &[
            (
                "Nature",
                "image:https://images.pexels.com/photos/3225517/pexels-photo-3225517.jpeg",
            ),
            (
                "Cosmos",
                "image:https://images.pexels.com/photos/110854/pexels-photo-110854.jpeg",
            ),
            (
                "Abstract",
                "image:https://images.pexels.com/photos/2113566/pexels-photo-2113566.jpeg",
            ),
        ],
    ),
];

/// Flattened `(name, value)` list of every offered background.
pub fn background_choices() -> Vec<(&'static str, &'static str)> {
    BACKGROUND_OPTIONS
        .iter()
        .flat_map(|(_, options)| options.iter().copied())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_neutral() {
        assert_eq!(derive_background("default"), BackgroundStyle::Neutral);
    }

    #[test]
    fn image_keeps_url_and_has_no_class() {
        let style = derive_background("image:https://x/y.jpg");
        assert_eq!(style.image_url(), Some("https://x/y.jpg"));
        assert_eq!(style.class(), None);
    }

    #[test]
    fn image_url_with_colons_survives() {
        // Only the first separator splits; URLs keep their own colons.
        let style = derive_background("image:https://host:8080/pic.png");
        assert_eq!(style.image_url(), Some("https://host:8080/pic.png"));
    }

    #[test]
    fn solid_and_gradient_become_classes() {
        assert_eq!(
            derive_background("solid:bg-blue-900").class(),
            Some("bg-blue-900")
        );
        assert_eq!(
            derive_background("gradient:bg-gradient-to-br from-sky-400 to-blue-600").class(),
            Some("bg-gradient-to-br from-sky-400 to-blue-600")
        );
    }

    #[test]
    fn unknown_tag_falls_through_to_class() {
        assert_eq!(derive_background("sparkle:bg-unicorn").class(), Some("bg-unicorn"));
    }

    #[test]
    fn untagged_value_is_applied_as_class() {
        assert_eq!(derive_background("bg-mystery"), BackgroundStyle::Class("bg-mystery".into()));
    }

    #[test]
    fn choices_cover_all_groups() {
        let choices = background_choices();
        assert_eq!(choices.len(), 12);
        assert_eq!(choices[0], ("Default", "default"));
        // Every offered value derives without panicking.
        for (_, value) in choices {
            let _ = derive_background(value);
        }
    }
}
