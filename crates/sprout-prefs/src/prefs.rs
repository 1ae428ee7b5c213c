//! The typed preference set and its persistence keys.
//!
//! Each preference is independent: its own key, its own default, its own
//! write. The background theme is intentionally a free-form tagged string
//! (see the shell's background derivation) rather than a closed enum.

use serde::{Deserialize, Serialize};

use crate::storage::PrefStorage;
use crate::store::PrefStore;

/// Storage key for the light/dark theme.
pub const KEY_THEME: &str = "app-theme";
/// Storage key for the font family.
pub const KEY_FONT_FAMILY: &str = "app-font-family";
/// Storage key for the font size.
pub const KEY_FONT_SIZE: &str = "app-font-size";
/// Storage key for the menu skin.
pub const KEY_MENU_THEME: &str = "app-menu-theme";
/// Storage key for the background theme string.
pub const KEY_BACKGROUND: &str = "app-background-theme";

/// Light/dark presentation theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
}

/// The eight selectable font families.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontFamily {
    Modern,
    Formal,
    Stylish,
    Pixel,
    Script,
    Futuristic,
    Mono,
    Handwritten,
}

impl FontFamily {
    pub const ALL: &[FontFamily] = &[
        FontFamily::Modern,
        FontFamily::Formal,
        FontFamily::Stylish,
        FontFamily::Pixel,
        FontFamily::Script,
        FontFamily::Futuristic,
        FontFamily::Mono,
        FontFamily::Handwritten,
    ];
}

/// The three selectable font sizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontSize {
    Small,
    Base,
    Large,
}

impl FontSize {
    pub const ALL: &[FontSize] = &[FontSize::Small, FontSize::Base, FontSize::Large];
}

/// The fourteen selectable menu skins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MenuTheme {
    Rainbow,
    Matrix,
    Cute,
    Neon,
    Classic,
    Ocean,
    Sunset,
    Jungle,
    Royal,
    Minimalist,
    Ios,
    Space,
    Vintage,
    Pastel,
}

impl MenuTheme {
    pub const ALL: &[MenuTheme] = &[
        MenuTheme::Rainbow,
        MenuTheme::Matrix,
        MenuTheme::Cute,
        MenuTheme::Neon,
        MenuTheme::Ios,
        MenuTheme::Space,
        MenuTheme::Vintage,
        MenuTheme::Pastel,
        MenuTheme::Ocean,
        MenuTheme::Sunset,
        MenuTheme::Jungle,
        MenuTheme::Royal,
        MenuTheme::Minimalist,
        MenuTheme::Classic,
    ];
}

/// The assembled preference set held by the shell for the session.
#[derive(Debug, Clone, PartialEq)]
pub struct Preferences {
    pub theme: Theme,
    pub font_family: FontFamily,
    pub font_size: FontSize,
    pub menu_theme: MenuTheme,
    /// Tagged background string: `default`, `solid:<class>`,
    /// `gradient:<class>`, or `image:<url>`.
    pub background: String,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            theme: Theme::Dark,
            font_family: FontFamily::Modern,
            font_size: FontSize::Base,
            menu_theme: MenuTheme::Rainbow,
            background: "default".to_string(),
        }
    }
}

impl Preferences {
    /// Load every preference, falling back per-key to its default.
    pub fn load<S: PrefStorage>(store: &PrefStore<S>) -> Self {
        let defaults = Self::default();
        Self {
            theme: store.load(KEY_THEME, defaults.theme),
            font_family: store.load(KEY_FONT_FAMILY, defaults.font_family),
            font_size: store.load(KEY_FONT_SIZE, defaults.font_size),
            menu_theme: store.load(KEY_MENU_THEME, defaults.menu_theme),
            background: store.load(KEY_BACKGROUND, defaults.background),
        }
    }

    pub fn set_theme<S: PrefStorage>(&mut self, store: &mut PrefStore<S>, theme: Theme) {
        self.theme = theme;
        store.set(KEY_THEME, &theme);
    }

    pub fn set_font_family<S: PrefStorage>(&mut self, store: &mut PrefStore<S>, font: FontFamily) {
        self.font_family = font;
        store.set(KEY_FONT_FAMILY, &font);
    }

    pub fn set_font_size<S: PrefStorage>(&mut self, store: &mut PrefStore<S>, size: FontSize) {
        self.font_size = size;
        store.set(KEY_FONT_SIZE, &size);
    }

    pub fn set_menu_theme<S: PrefStorage>(&mut self, store: &mut PrefStore<S>, theme: MenuTheme) {
        self.menu_theme = theme;
        store.set(KEY_MENU_THEME, &theme);
    }

    pub fn set_background<S: PrefStorage>(&mut self, store: &mut PrefStore<S>, background: String) {
        store.set(KEY_BACKGROUND, &background);
        self.background = background;
    }
}
