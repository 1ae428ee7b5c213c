//! Platform-agnostic input event types.
//!
//! Every frontend maps its native input to these enums. The shell core
//! never sees raw platform input.

use serde::{Deserialize, Serialize};

/// A platform-agnostic input event.
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// Pointer tap at absolute position (mouse or touch).
    PointerClick { x: i32, y: i32 },
    /// Pointer released.
    PointerRelease { x: i32, y: i32 },
    /// A navigation / face button pressed.
    ButtonPress(Button),
    /// Character typed (physical keyboard or on-screen keyboard).
    TextInput(char),
    /// Backspace / delete-left.
    Backspace,
    /// The shell gained focus.
    FocusGained,
    /// The shell lost focus.
    FocusLost,
    /// User requested quit (window close, etc.).
    Quit,
}

/// Buttons that map across all frontends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Button {
    Up,
    Down,
    Left,
    Right,
    Confirm,
    Back,
}
