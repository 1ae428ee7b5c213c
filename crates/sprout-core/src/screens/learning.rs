//! Learning hub: calculator and math drills.

use sprout_scene::SceneRegistry;
use sprout_types::input::InputEvent;

use super::widgets::{column_rects, screen_title, themed_button};
use super::{Screen, ScreenContext, ScreenEvent};
use crate::view::ViewId;

const PREFIX: &str = "learn_";

#[derive(Debug, Default)]
pub struct LearningScreen;

impl LearningScreen {
    pub fn new() -> Self {
        Self
    }

    fn entries() -> [(&'static str, ScreenEvent); 3] {
        [
            ("Calculator", ScreenEvent::Navigate(ViewId::Calculator)),
            ("Math Practice", ScreenEvent::Navigate(ViewId::MathPractice)),
            ("Exit", ScreenEvent::Back),
        ]
    }
}

impl Screen for LearningScreen {
    fn view_id(&self) -> ViewId {
        ViewId::Learning
    }

    fn prefix(&self) -> &'static str {
        PREFIX
    }

    fn handle_input(&mut self, event: &InputEvent, ctx: &ScreenContext) -> ScreenEvent {
        if let InputEvent::PointerClick { x, y } = event {
            let rects = column_rects(ctx.content, Self::entries().len());
            for (rect, (_, action)) in rects.iter().zip(Self::entries()) {
                if rect.contains(*x, *y) {
                    return action;
                }
            }
        }
        ScreenEvent::None
    }

    fn sync_scene(&self, scene: &mut SceneRegistry, ctx: &ScreenContext) {
        screen_title(scene, "learn_title", "Learning", ctx);
        let rects = column_rects(ctx.content, Self::entries().len());
        for (i, (rect, (label, _))) in rects.iter().zip(Self::entries()).enumerate() {
            themed_button(scene, &format!("learn_btn_{i}"), *rect, label, ctx);
        }
    }
}
