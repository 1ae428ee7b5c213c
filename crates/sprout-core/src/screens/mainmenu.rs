//! Main menu: two sections of themed cards.

use sprout_scene::SceneRegistry;
use sprout_scene::helpers::ensure_text;
use sprout_types::geometry::Rect;
use sprout_types::input::InputEvent;

use super::{Screen, ScreenContext, ScreenEvent};
use crate::view::ViewId;

const PREFIX: &str = "menu_";
const CARD_H: u32 = 132;
const MARGIN: i32 = 48;
const CARD_GAP: u32 = 24;
const SECTION_LABEL_H: i32 = 40;

/// One launchable card.
struct Card {
    target: ViewId,
    icon: &'static str,
    label: &'static str,
}

const FEATURED: [Card; 3] = [
    Card {
        target: ViewId::Entertainment,
        icon: "\u{1F3AC}",
        label: "Entertainment",
    },
    Card {
        target: ViewId::Learning,
        icon: "\u{1F4DA}",
        label: "Learning",
    },
    Card {
        target: ViewId::Camera,
        icon: "\u{1F4F7}",
        label: "Camera",
    },
];

const UTILITIES: [Card; 3] = [
    Card {
        target: ViewId::Calendar,
        icon: "\u{1F4C5}",
        label: "Calendar",
    },
    Card {
        target: ViewId::BatteryInfo,
        icon: "\u{1F50B}",
        label: "Battery",
    },
    Card {
        target: ViewId::Settings,
        icon: "\u{2699}",
        label: "Settings",
    },
];

/// The root screen. Stateless: everything it shows derives from context.
#[derive(Debug, Default)]
pub struct MainMenuScreen;

impl MainMenuScreen {
    pub fn new() -> Self {
        Self
    }

    fn card_w(ctx: &ScreenContext) -> u32 {
        (ctx.content.w - 2 * MARGIN as u32 - 2 * CARD_GAP) / 3
    }

    /// Card rectangles in (featured, utilities) order.
    fn card_rects(ctx: &ScreenContext) -> Vec<(Rect, ViewId)> {
        let card_w = Self::card_w(ctx);
        let mut rects = Vec::with_capacity(6);
        let mut y = ctx.content.y + SECTION_LABEL_H;
        for section in [&FEATURED, &UTILITIES] {
            for (i, card) in section.iter().enumerate() {
                let x = ctx.content.x + MARGIN + i as i32 * (card_w + CARD_GAP) as i32;
                rects.push((Rect::new(x, y, card_w, CARD_H), card.target));
            }
            y += CARD_H as i32 + SECTION_LABEL_H + 24;
        }
        rects
    }
}

impl Screen for MainMenuScreen {
    fn view_id(&self) -> ViewId {
        ViewId::MainMenu
    }

    fn prefix(&self) -> &'static str {
        PREFIX
    }

    fn handle_input(&mut self, event: &InputEvent, ctx: &ScreenContext) -> ScreenEvent {
        if let InputEvent::PointerClick { x, y } = event {
            for (rect, target) in Self::card_rects(ctx) {
                if rect.contains(*x, *y) {
                    return ScreenEvent::Navigate(target);
                }
            }
        }
        ScreenEvent::None
    }

    fn sync_scene(&self, scene: &mut SceneRegistry, ctx: &ScreenContext) {
        let sections: [(&str, &str, &[Card; 3]); 2] = [
            ("menu_sec_featured", "Main activities", &FEATURED),
            ("menu_sec_utils", "Tools & settings", &UTILITIES),
        ];
        for (name, label, _) in sections {
            ensure_text(
                scene,
                name,
                ctx.content.x + MARGIN,
                0, // positioned below
                ctx.font_px + 4,
                ctx.palette.text_secondary,
            );
            if let Ok(obj) = scene.get_mut(name) {
                obj.text = Some(label.to_string());
            }
        }
        // Section labels sit just above their card rows.
        let rects = Self::card_rects(ctx);
        if let Ok(obj) = scene.get_mut("menu_sec_featured") {
            obj.y = rects[0].0.y - SECTION_LABEL_H + 8;
        }
        if let Ok(obj) = scene.get_mut("menu_sec_utils") {
            obj.y = rects[3].0.y - SECTION_LABEL_H + 8;
        }

        for (i, ((rect, _), card)) in rects
            .iter()
            .zip(FEATURED.iter().chain(UTILITIES.iter()))
            .enumerate()
        {
            let name = format!("menu_card_{i}");
            super::widgets::themed_button(scene, &name, *rect, card.label, ctx);
            let icon_name = format!("menu_card_{i}_icon");
            let (cx, cy) = rect.center();
            ensure_text(
                scene,
                &icon_name,
                cx - 12,
                cy - 44,
                28,
                ctx.skin.button_text,
            );
            if let Ok(obj) = scene.get_mut(&icon_name) {
                obj.z = 2;
                obj.text = Some(card.icon.to_string());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::screens::testutil;

    #[test]
    fn cards_navigate_to_their_targets() {
        let ctx = testutil::ctx();
        let mut menu = MainMenuScreen::new();
        for (rect, target) in MainMenuScreen::card_rects(&ctx) {
            let (cx, cy) = rect.center();
            let event = InputEvent::PointerClick { x: cx, y: cy };
            assert_eq!(
                menu.handle_input(&event, &ctx),
                ScreenEvent::Navigate(target)
            );
        }
    }

    #[test]
    fn six_cards_cover_all_entry_points() {
        let ctx = testutil::ctx();
        let targets: Vec<ViewId> = MainMenuScreen::card_rects(&ctx)
            .into_iter()
            .map(|(_, t)| t)
            .collect();
        assert_eq!(
            targets,
            vec![
                ViewId::Entertainment,
                ViewId::Learning,
                ViewId::Camera,
                ViewId::Calendar,
                ViewId::BatteryInfo,
                ViewId::Settings,
            ]
        );
    }

    #[test]
    fn click_outside_cards_is_ignored() {
        let ctx = testutil::ctx();
        let mut menu = MainMenuScreen::new();
        let event = InputEvent::PointerClick { x: 1, y: 1 };
        assert_eq!(menu.handle_input(&event, &ctx), ScreenEvent::None);
    }

    #[test]
    fn sync_creates_cards_and_sections() {
        let ctx = testutil::ctx();
        let menu = MainMenuScreen::new();
        let mut scene = SceneRegistry::new();
        menu.sync_scene(&mut scene, &ctx);
        assert!(scene.contains("menu_sec_featured"));
        assert!(scene.contains("menu_sec_utils"));
        for i in 0..6 {
            assert!(scene.contains(&format!("menu_card_{i}")));
        }
    }
}
