//! SPROUT_PAD shell core.
//!
//! The shell owns the navigation stack and the preference set, composes
//! header/footer chrome around the active screen, and dispatches input to
//! the screen's own state. Screens never mutate navigation or preferences
//! directly; they return [`screens::ScreenEvent`] values the shell applies.

pub mod bottombar;
pub mod config;
pub mod nav;
pub mod registry;
pub mod rng;
pub mod screens;
pub mod shell;
pub mod skin;
pub mod statusbar;
pub mod view;

pub use config::PadConfig;
pub use nav::NavStack;
pub use shell::{Shell, Signal};
pub use view::ViewId;
