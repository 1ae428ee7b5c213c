//! View registry: which capabilities each screen needs from the shell.

use crate::view::ViewId;

/// Capability record for one screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewSpec {
    pub id: ViewId,
    /// Receives the go-back callback (everything except the root).
    pub back: bool,
    /// Can deep-link to other screens (receives navigate).
    pub navigate: bool,
    /// Receives getter/setter pairs for every preference.
    pub pref_editor: bool,
    /// Rendered full-bleed with chrome suppressed.
    pub immersive: bool,
}

/// Capability lookup. Total over the closed `ViewId` set.
pub fn view_spec(id: ViewId) -> ViewSpec {
    let spec = |back, navigate, pref_editor, immersive| ViewSpec {
        id,
        back,
        navigate,
        pref_editor,
        immersive,
    };
    match id {
        ViewId::MainMenu => spec(false, true, false, false),
        ViewId::Entertainment => spec(true, true, false, false),
        ViewId::Learning => spec(true, true, false, false),
        ViewId::Calculator => spec(true, false, false, false),
        ViewId::MathPractice => spec(true, true, false, false),
        ViewId::RockPaperScissors => spec(true, false, false, false),
        ViewId::Settings => spec(true, false, true, false),
        ViewId::BatteryInfo => spec(true, false, false, false),
        ViewId::Calendar => spec(true, false, false, false),
        ViewId::Camera => spec(true, false, false, true),
    }
}

/// Specs for every screen, in `ViewId::ALL` order.
pub fn all_specs() -> impl Iterator<Item = ViewSpec> {
    ViewId::ALL.iter().map(|id| view_spec(*id))
}
