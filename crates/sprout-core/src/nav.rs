//! Push/pop navigation history.
//!
//! The history is never empty: the main menu is the root and cannot be
//! popped. Re-entrant pushes of the current screen are legal and create a
//! new entry, so "back" returns to the screen that triggered them.

use crate::view::ViewId;

/// Ordered history of visited screens. Owned exclusively by the shell.
#[derive(Debug, Clone)]
pub struct NavStack {
    history: Vec<ViewId>,
}

impl NavStack {
    /// A new stack rooted at the main menu.
    pub fn new() -> Self {
        Self {
            history: vec![ViewId::MainMenu],
        }
    }

    /// Append a screen unconditionally, duplicates included.
    pub fn push(&mut self, view: ViewId) {
        self.history.push(view);
        log::debug!("nav: push {view:?} (depth {})", self.history.len());
    }

    /// Remove the last entry unless already at the root. Never fails.
    pub fn pop(&mut self) {
        if self.history.len() > 1 {
            let left = self.history.pop();
            log::debug!("nav: pop {left:?} -> {:?}", self.current());
        }
    }

    /// The active screen. Always defined by the non-empty invariant.
    pub fn current(&self) -> ViewId {
        *self
            .history
            .last()
            .unwrap_or_else(|| unreachable!("history is never empty"))
    }

    /// Whether a pop would change the active screen.
    pub fn can_go_back(&self) -> bool {
        self.history.len() > 1
    }

    /// Current history length (always >= 1).
    pub fn depth(&self) -> usize {
        self.history.len()
    }
}

impl Default for NavStack {
    fn default() -> Self {
        Self::new()
    }
}
