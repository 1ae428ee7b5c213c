//! Light/dark base palettes with derived chrome colors.

use sprout_prefs::Theme;
use sprout_types::color::{Color, lighten, with_alpha};

/// Runtime palette for the shell chrome and neutral surfaces.
///
/// Screens take their accent styling from the active menu skin; this palette
/// covers everything the skin does not: backgrounds, chrome bars, body text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// Neutral shell background (the `default` background theme).
    pub background: Color,
    /// Card / panel surface.
    pub surface: Color,
    /// Slightly raised surface variant.
    pub surface_variant: Color,
    /// Primary body text.
    pub text_primary: Color,
    /// Dimmed text.
    pub text_secondary: Color,
    /// Header bar fill.
    pub header_bg: Color,
    /// Header text and icons.
    pub header_text: Color,
    /// Footer pill fill.
    pub footer_bg: Color,
    /// Footer icon color.
    pub footer_icon: Color,
    /// Accent for selected controls.
    pub accent: Color,
    /// Translucent accent wash.
    pub accent_subtle: Color,
    pub success: Color,
    pub warning: Color,
    pub danger: Color,
    /// Separator / outline color.
    pub border: Color,
}

impl Palette {
    /// Palette for the light theme.
    pub fn light() -> Self {
        let bg = Color::rgb(243, 244, 246);
        let text = Color::rgb(17, 24, 39);
        let accent = Color::rgb(59, 130, 246);
        Self {
            background: bg,
            surface: Color::rgb(229, 231, 235),
            surface_variant: Color::rgb(209, 213, 219),
            text_primary: text,
            text_secondary: Color::rgb(107, 114, 128),
            header_bg: with_alpha(Color::BLACK, 50),
            header_text: Color::WHITE,
            footer_bg: with_alpha(Color::rgb(229, 231, 235), 120),
            footer_icon: text,
            accent,
            accent_subtle: with_alpha(accent, 40),
            success: Color::rgb(34, 197, 94),
            warning: Color::rgb(234, 179, 8),
            danger: Color::rgb(239, 68, 68),
            border: Color::rgb(156, 163, 175),
        }
    }

    /// Palette for the dark theme.
    pub fn dark() -> Self {
        let bg = Color::rgb(17, 24, 39);
        let text = Color::rgb(243, 244, 246);
        let accent = Color::rgb(96, 165, 250);
        Self {
            background: bg,
            surface: Color::rgb(31, 41, 55),
            surface_variant: lighten(Color::rgb(31, 41, 55), 0.08),
            text_primary: text,
            text_secondary: Color::rgb(156, 163, 175),
            header_bg: with_alpha(Color::WHITE, 25),
            header_text: Color::WHITE,
            footer_bg: with_alpha(Color::BLACK, 80),
            footer_icon: Color::WHITE,
            accent,
            accent_subtle: with_alpha(accent, 40),
            success: Color::rgb(74, 222, 128),
            warning: Color::rgb(250, 204, 21),
            danger: Color::rgb(248, 113, 113),
            border: Color::rgb(75, 85, 99),
        }
    }

    pub fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Light => Self::light(),
            Theme::Dark => Self::dark(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn light_and_dark_differ() {
        assert_ne!(Palette::light().background, Palette::dark().background);
        assert_ne!(Palette::light().text_primary, Palette::dark().text_primary);
    }

    #[test]
    fn for_theme_dispatch() {
        assert_eq!(Palette::for_theme(Theme::Light), Palette::light());
        assert_eq!(Palette::for_theme(Theme::Dark), Palette::dark());
    }

    #[test]
    fn accent_subtle_is_translucent() {
        assert!(Palette::dark().accent_subtle.a < 255);
        assert!(Palette::light().accent_subtle.a < 255);
    }
}
