//! Preference store: typed user settings over simple key-value storage.
//!
//! Five independent settings (theme, font family, font size, menu skin,
//! background) are each persisted under their own key as one JSON-encoded
//! value. Loading falls back to per-key defaults on any failure; writes are
//! best-effort so the in-memory value always reflects the latest change.

pub mod prefs;
pub mod storage;
pub mod store;

pub use prefs::{FontFamily, FontSize, MenuTheme, Preferences, Theme};
pub use storage::{FileStorage, MemoryStorage, PrefStorage};
pub use store::PrefStore;
