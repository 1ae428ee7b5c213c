//! Rock-paper-scissors against the pad.
//!
//! The computer's pick is rolled immediately but revealed after a short
//! suspense delay, so the reveal feels like a real throw.

use sprout_scene::SceneRegistry;
use sprout_scene::helpers::{ensure_fill, ensure_text};
use sprout_types::color::Color;
use sprout_types::geometry::Rect;
use sprout_types::input::InputEvent;

use super::widgets::{plain_button, screen_title, themed_button};
use super::{Screen, ScreenContext, ScreenEvent};
use crate::rng::SimpleRng;
use crate::view::ViewId;

const PREFIX: &str = "rps_";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Choice {
    Rock,
    Paper,
    Scissors,
}

impl Choice {
    pub const ALL: &[Choice] = &[Choice::Rock, Choice::Paper, Choice::Scissors];

    pub fn emoji(self) -> &'static str {
        match self {
            Self::Rock => "\u{270A}",
            Self::Paper => "\u{270B}",
            Self::Scissors => "\u{270C}",
        }
    }

    /// Whether `self` beats `other`.
    pub fn beats(self, other: Choice) -> bool {
        matches!(
            (self, other),
            (Self::Rock, Self::Scissors)
                | (Self::Paper, Self::Rock)
                | (Self::Scissors, Self::Paper)
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Win,
    Lose,
    Draw,
}

impl Outcome {
    fn label(self) -> &'static str {
        match self {
            Self::Win => "You win!",
            Self::Lose => "You lose!",
            Self::Draw => "It's a draw!",
        }
    }
}

#[derive(Debug)]
pub struct RpsScreen {
    player: Option<Choice>,
    computer: Option<Choice>,
    pending_computer: Option<Choice>,
    outcome: Option<Outcome>,
    player_score: u32,
    computer_score: u32,
    reveal_frames: Option<u32>,
    rng: SimpleRng,
}

impl RpsScreen {
    pub fn new(seed: u64) -> Self {
        Self {
            player: None,
            computer: None,
            pending_computer: None,
            outcome: None,
            player_score: 0,
            computer_score: 0,
            reveal_frames: None,
            rng: SimpleRng::new(seed),
        }
    }

    pub fn scores(&self) -> (u32, u32) {
        (self.player_score, self.computer_score)
    }

    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    /// Player throws. Rolls the computer's pick and starts the reveal delay.
    pub fn play(&mut self, choice: Choice, fps: u32) {
        if self.reveal_frames.is_some() {
            return;
        }
        self.player = Some(choice);
        self.computer = None;
        self.outcome = None;
        self.pending_computer = Some(*self.rng.pick(Choice::ALL));
        self.reveal_frames = Some(fps.max(1));
    }

    /// Clear the board for the next round (scores stay).
    pub fn reset_round(&mut self) {
        self.player = None;
        self.computer = None;
        self.pending_computer = None;
        self.outcome = None;
    }

    fn reveal(&mut self) {
        let (Some(player), Some(computer)) = (self.player, self.pending_computer) else {
            return;
        };
        self.computer = Some(computer);
        self.outcome = Some(if player == computer {
            Outcome::Draw
        } else if player.beats(computer) {
            self.player_score += 1;
            Outcome::Win
        } else {
            self.computer_score += 1;
            Outcome::Lose
        });
    }

    fn choice_rects(ctx: &ScreenContext) -> [Rect; 3] {
        let cx = ctx.content.x + ctx.content.w as i32 / 2;
        let y = ctx.content.y + ctx.content.h as i32 - 200;
        [
            Rect::new(cx - 150, y, 88, 88),
            Rect::new(cx - 44, y, 88, 88),
            Rect::new(cx + 62, y, 88, 88),
        ]
    }

    fn replay_rect(ctx: &ScreenContext) -> Rect {
        let cx = ctx.content.x + ctx.content.w as i32 / 2;
        Rect::new(cx - 90, ctx.content.y + ctx.content.h as i32 - 190, 180, 52)
    }

    fn exit_rect(ctx: &ScreenContext) -> Rect {
        let cx = ctx.content.x + ctx.content.w as i32 / 2;
        Rect::new(cx - 140, ctx.content.y + ctx.content.h as i32 - 90, 280, 56)
    }
}

impl Screen for RpsScreen {
    fn view_id(&self) -> ViewId {
        ViewId::RockPaperScissors
    }

    fn prefix(&self) -> &'static str {
        PREFIX
    }

    fn handle_input(&mut self, event: &InputEvent, ctx: &ScreenContext) -> ScreenEvent {
        if let InputEvent::PointerClick { x, y } = event {
            if Self::exit_rect(ctx).contains(*x, *y) {
                return ScreenEvent::Back;
            }
            if self.outcome.is_some() {
                if Self::replay_rect(ctx).contains(*x, *y) {
                    self.reset_round();
                }
                return ScreenEvent::None;
            }
            if self.player.is_none() {
                for (rect, choice) in Self::choice_rects(ctx).iter().zip(Choice::ALL) {
                    if rect.contains(*x, *y) {
                        self.play(*choice, ctx.fps);
                    }
                }
            }
        }
        ScreenEvent::None
    }

    fn tick(&mut self, _ctx: &ScreenContext) -> ScreenEvent {
        if let Some(frames) = self.reveal_frames {
            if frames <= 1 {
                self.reveal_frames = None;
                self.reveal();
            } else {
                self.reveal_frames = Some(frames - 1);
            }
        }
        ScreenEvent::None
    }

    fn sync_scene(&self, scene: &mut SceneRegistry, ctx: &ScreenContext) {
        screen_title(scene, "rps_title", "Rock Paper Scissors", ctx);

        // Scoreboard.
        let board = Rect::new(
            ctx.content.x + (ctx.content.w as i32 - 320) / 2,
            ctx.content.y + 70,
            320,
            70,
        );
        ensure_fill(
            scene, "rps_board", board.x, board.y, board.w, board.h,
            ctx.palette.surface,
        );
        if let Ok(obj) = scene.get_mut("rps_board") {
            obj.border_radius = Some(12);
            obj.font_size = 24;
            obj.text_color = ctx.palette.text_primary;
            obj.text = Some(format!(
                "You {}  vs  {} Pad",
                self.player_score, self.computer_score
            ));
        }

        // Hands.
        let waiting = self.reveal_frames.is_some();
        let cx = ctx.content.x + ctx.content.w as i32 / 2;
        let hand_y = board.y + board.h as i32 + 40;
        ensure_text(scene, "rps_hand_player", cx - 140, hand_y, 48, ctx.palette.text_primary);
        if let Ok(obj) = scene.get_mut("rps_hand_player") {
            obj.text = Some(
                self.player
                    .map(|c| c.emoji().to_string())
                    .unwrap_or_else(|| "\u{1F914}".to_string()),
            );
        }
        ensure_text(scene, "rps_hand_computer", cx + 90, hand_y, 48, ctx.palette.text_primary);
        if let Ok(obj) = scene.get_mut("rps_hand_computer") {
            obj.text = Some(if waiting {
                "\u{23F3}".to_string()
            } else {
                self.computer
                    .map(|c| c.emoji().to_string())
                    .unwrap_or_else(|| "\u{1F916}".to_string())
            });
        }

        // Result banner + replay, or choice row.
        ensure_text(scene, "rps_result", cx - 80, hand_y + 80, 32, match self.outcome {
            Some(Outcome::Win) => ctx.palette.success,
            Some(Outcome::Lose) => ctx.palette.danger,
            _ => ctx.palette.warning,
        });
        if let Ok(obj) = scene.get_mut("rps_result") {
            obj.text = self.outcome.map(|o| o.label().to_string());
            obj.visible = self.outcome.is_some();
        }

        if self.outcome.is_some() {
            scene.destroy_prefix("rps_choice_");
            plain_button(
                scene,
                "rps_replay",
                Self::replay_rect(ctx),
                "Play again",
                ctx.palette.accent,
                Color::WHITE,
                ctx.font_px,
            );
        } else {
            scene.destroy_prefix("rps_replay");
            if self.player.is_none() {
                for (i, (rect, choice)) in
                    Self::choice_rects(ctx).iter().zip(Choice::ALL).enumerate()
                {
                    let name = format!("rps_choice_{i}");
                    plain_button(
                        scene,
                        &name,
                        *rect,
                        choice.emoji(),
                        ctx.palette.accent_subtle,
                        ctx.palette.text_primary,
                        32,
                    );
                }
            } else {
                scene.destroy_prefix("rps_choice_");
            }
        }

        themed_button(scene, "rps_exit", Self::exit_rect(ctx), "Exit", ctx);
    }
}
