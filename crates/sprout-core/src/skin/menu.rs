//! Menu skin style descriptors.
//!
//! Each of the fourteen selectable skins maps to a flat style record used by
//! the menu cards and themed buttons. The mapping is an exhaustive match so
//! a new skin variant without styling is a compile error; there is no
//! inheritance, only data.

use sprout_prefs::{FontFamily, MenuTheme};
use sprout_types::color::{Color, with_alpha};

/// Style record for menu cards and themed buttons under one skin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuSkin {
    /// Outer card rim / container fill.
    pub container: Color,
    /// Button face fill.
    pub button_bg: Color,
    /// Bottom color when the face is a vertical gradient.
    pub button_bg_bottom: Option<Color>,
    /// Label color.
    pub button_text: Color,
    /// Text glow color, for neon-style skins.
    pub glow: Option<Color>,
    /// Font family the skin forces on its labels (None = user's choice).
    pub font: Option<FontFamily>,
}

impl MenuSkin {
    const fn flat(container: Color, button_bg: Color, button_text: Color) -> Self {
        Self {
            container,
            button_bg,
            button_bg_bottom: None,
            button_text,
            glow: None,
            font: None,
        }
    }
}

/// Resolve the style record for a skin. `dark` selects the shell-theme-aware
/// variants used by the neutral skins (classic, minimalist, ios).
pub fn menu_skin(theme: MenuTheme, dark: bool) -> MenuSkin {
    match theme {
        MenuTheme::Rainbow => MenuSkin {
            container: Color::rgb(147, 51, 234),
            button_bg: if dark {
                with_alpha(Color::rgb(17, 24, 39), 204)
            } else {
                with_alpha(Color::WHITE, 204)
            },
            button_bg_bottom: None,
            button_text: if dark {
                Color::rgb(243, 244, 246)
            } else {
                Color::rgb(219, 39, 119)
            },
            glow: Some(Color::rgb(236, 72, 153)),
            font: None,
        },
        MenuTheme::Matrix => MenuSkin {
            glow: Some(Color::rgb(0, 255, 0)),
            font: Some(FontFamily::Mono),
            ..MenuSkin::flat(
                Color::rgb(20, 83, 45),
                Color::BLACK,
                Color::rgb(74, 222, 128),
            )
        },
        MenuTheme::Cute => MenuSkin {
            font: Some(FontFamily::Stylish),
            ..MenuSkin::flat(
                Color::rgb(244, 114, 182),
                Color::rgb(252, 231, 243),
                Color::rgb(219, 39, 119),
            )
        },
        MenuTheme::Neon => MenuSkin {
            glow: Some(Color::rgb(0, 255, 255)),
            ..MenuSkin::flat(
                Color::rgb(162, 28, 175),
                Color::BLACK,
                Color::rgb(103, 232, 249),
            )
        },
        MenuTheme::Classic => {
            if dark {
                MenuSkin::flat(
                    Color::rgb(75, 85, 99),
                    Color::rgb(31, 41, 55),
                    Color::rgb(229, 231, 235),
                )
            } else {
                MenuSkin::flat(
                    Color::rgb(156, 163, 175),
                    Color::WHITE,
                    Color::rgb(31, 41, 55),
                )
            }
        },
        MenuTheme::Ocean => MenuSkin {
            button_bg_bottom: Some(Color::rgb(96, 165, 250)),
            ..MenuSkin::flat(
                Color::rgb(6, 182, 212),
                Color::rgb(191, 219, 254),
                Color::WHITE,
            )
        },
        MenuTheme::Sunset => MenuSkin {
            button_bg_bottom: Some(Color::rgb(249, 115, 22)),
            ..MenuSkin::flat(
                Color::rgb(220, 38, 38),
                Color::rgb(253, 224, 71),
                Color::WHITE,
            )
        },
        MenuTheme::Jungle => MenuSkin {
            button_bg_bottom: Some(Color::rgb(22, 101, 52)),
            ..MenuSkin::flat(
                Color::rgb(113, 63, 18),
                Color::rgb(101, 163, 13),
                Color::WHITE,
            )
        },
        MenuTheme::Royal => MenuSkin {
            font: Some(FontFamily::Formal),
            ..MenuSkin::flat(
                Color::rgb(234, 179, 8),
                Color::rgb(107, 33, 168),
                Color::rgb(253, 224, 71),
            )
        },
        MenuTheme::Minimalist => {
            if dark {
                MenuSkin::flat(
                    Color::rgb(75, 85, 99),
                    with_alpha(Color::rgb(17, 24, 39), 128),
                    Color::rgb(229, 231, 235),
                )
            } else {
                MenuSkin::flat(
                    Color::rgb(156, 163, 175),
                    with_alpha(Color::rgb(243, 244, 246), 128),
                    Color::rgb(31, 41, 55),
                )
            }
        },
        MenuTheme::Ios => {
            if dark {
                MenuSkin::flat(
                    with_alpha(Color::BLACK, 50),
                    with_alpha(Color::rgb(55, 65, 81), 128),
                    Color::WHITE,
                )
            } else {
                MenuSkin::flat(
                    with_alpha(Color::WHITE, 50),
                    with_alpha(Color::rgb(229, 231, 235), 128),
                    Color::BLACK,
                )
            }
        },
        MenuTheme::Space => MenuSkin {
            glow: Some(Color::rgb(240, 0, 240)),
            font: Some(FontFamily::Futuristic),
            ..MenuSkin::flat(
                Color::rgb(49, 46, 129),
                Color::BLACK,
                Color::rgb(216, 180, 254),
            )
        },
        MenuTheme::Vintage => MenuSkin {
            font: Some(FontFamily::Formal),
            ..MenuSkin::flat(
                Color::rgb(146, 64, 14),
                Color::rgb(245, 232, 199),
                Color::rgb(107, 79, 79),
            )
        },
        MenuTheme::Pastel => MenuSkin {
            font: Some(FontFamily::Script),
            ..MenuSkin::flat(
                Color::rgb(254, 205, 211),
                Color::rgb(204, 251, 241),
                Color::rgb(17, 94, 89),
            )
        },
    }
}

/// Display name for the skin picker.
pub fn menu_theme_name(theme: MenuTheme) -> &'static str {
    match theme {
        MenuTheme::Rainbow => "Rainbow",
        MenuTheme::Matrix => "Matrix",
        MenuTheme::Cute => "Cute",
        MenuTheme::Neon => "Neon",
        MenuTheme::Classic => "Classic",
        MenuTheme::Ocean => "Ocean",
        MenuTheme::Sunset => "Sunset",
        MenuTheme::Jungle => "Jungle",
        MenuTheme::Royal => "Royal",
        MenuTheme::Minimalist => "Minimalist",
        MenuTheme::Ios => "iOS",
        MenuTheme::Space => "Space",
        MenuTheme::Vintage => "Vintage",
        MenuTheme::Pastel => "Pastel",
    }
}
