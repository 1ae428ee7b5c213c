//! Visual theming: palettes, menu skins, fonts, and background derivation.

pub mod background;
pub mod font;
pub mod menu;
pub mod palette;

pub use background::{BackgroundStyle, derive_background};
pub use menu::{MenuSkin, menu_skin, menu_theme_name};
pub use palette::Palette;
