//! Entertainment hub: external video link and the game.

use sprout_scene::SceneRegistry;
use sprout_types::input::InputEvent;

use super::widgets::{column_rects, screen_title, themed_button};
use super::{Screen, ScreenContext, ScreenEvent};
use crate::view::ViewId;

const PREFIX: &str = "ent_";

#[derive(Debug, Default)]
pub struct EntertainmentScreen;

impl EntertainmentScreen {
    pub fn new() -> Self {
        Self
    }

    fn entries() -> [(&'static str, ScreenEvent); 3] {
        [
            (
                "YouTube",
                ScreenEvent::OpenUrl("https://www.youtube.com".to_string()),
            ),
            (
                "Rock Paper Scissors",
                ScreenEvent::Navigate(ViewId::RockPaperScissors),
            ),
            ("Exit", ScreenEvent::Back),
        ]
    }
}

impl Screen for EntertainmentScreen {
    fn view_id(&self) -> ViewId {
        ViewId::Entertainment
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
        screen_title(scene, "ent_title", "Entertainment", ctx);
        let rects = column_rects(ctx.content, Self::entries().len());
        for (i, (rect, (label, _))) in rects.iter().zip(Self::entries()).enumerate() {
            themed_button(scene, &format!("ent_btn_{i}"), *rect, label, ctx);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::screens::testutil;

    #[test]
    fn buttons_dispatch_their_actions() {
        let ctx = testutil::ctx();
        let mut screen = EntertainmentScreen::new();
        let rects = column_rects(ctx.content, 3);

        let (cx, cy) = rects[0].center();
        let got = screen.handle_input(&InputEvent::PointerClick { x: cx, y: cy }, &ctx);
        assert_eq!(got, ScreenEvent::OpenUrl("https://www.youtube.com".into()));

        let (cx, cy) = rects[1].center();
        let got = screen.handle_input(&InputEvent::PointerClick { x: cx, y: cy }, &ctx);
        assert_eq!(got, ScreenEvent::Navigate(ViewId::RockPaperScissors));

        let (cx, cy) = rects[2].center();
        let got = screen.handle_input(&InputEvent::PointerClick { x: cx, y: cy }, &ctx);
        assert_eq!(got, ScreenEvent::Back);
    }

    #[test]
    fn sync_creates_title_and_buttons() {
        let ctx = testutil::ctx();
        let screen = EntertainmentScreen::new();
        let mut scene = SceneRegistry::new();
        screen.sync_scene(&mut scene, &ctx);
        assert!(scene.contains("ent_title"));
        assert!(scene.contains("ent_btn_0"));
        assert!(scene.contains("ent_btn_2"));
    }
}
