//! Math drills: number comparison and +/- calculation.
//!
//! Problems use numbers 1-20; subtraction operands are swapped so results
//! never go negative. A correct answer bumps the score and auto-advances
//! after a short pause; a wrong answer resets the score.

use sprout_scene::SceneRegistry;
use sprout_scene::helpers::{ensure_fill, ensure_text};
use sprout_types::geometry::Rect;
use sprout_types::input::InputEvent;

use super::widgets::{column_rects, plain_button, screen_title, themed_button};
use super::{Screen, ScreenContext, ScreenEvent};
use crate::rng::SimpleRng;
use crate::view::ViewId;

const PREFIX: &str = "math_";

/// Which drill is running.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Drill {
    Comparison,
    Calculation,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Feedback {
    Correct,
    Wrong,
}

#[derive(Debug)]
pub struct MathPracticeScreen {
    drill: Option<Drill>,
    num1: i32,
    num2: i32,
    subtract: bool,
    answer: String,
    feedback: Option<Feedback>,
    score: u32,
    advance_frames: Option<u32>,
    rng: SimpleRng,
}

impl MathPracticeScreen {
    pub fn new(seed: u64) -> Self {
        Self {
            drill: None,
            num1: 0,
            num2: 0,
            subtract: false,
            answer: String::new(),
            feedback: None,
            score: 0,
            advance_frames: None,
            rng: SimpleRng::new(seed),
        }
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn drill(&self) -> Option<Drill> {
        self.drill
    }

    fn start(&mut self, drill: Drill) {
        self.drill = Some(drill);
        self.score = 0;
        self.next_problem();
    }

    fn next_problem(&mut self) {
        self.feedback = None;
        self.answer.clear();
        self.advance_frames = None;
        let mut a = self.rng.gen_range(20) as i32 + 1;
        let mut b = self.rng.gen_range(20) as i32 + 1;
        self.subtract = self.drill == Some(Drill::Calculation) && self.rng.coin();
        if self.subtract && a < b {
            std::mem::swap(&mut a, &mut b);
        }
        self.num1 = a;
        self.num2 = b;
    }

    fn expected(&self) -> i32 {
        if self.subtract {
            self.num1 - self.num2
        } else {
            self.num1 + self.num2
        }
    }

    /// Answer a comparison problem with `<`, `=`, or `>`.
    pub fn answer_comparison(&mut self, op: char, fps: u32) {
        let correct = match op {
            '<' => self.num1 < self.num2,
            '>' => self.num1 > self.num2,
            '=' => self.num1 == self.num2,
            _ => return,
        };
        self.apply_feedback(correct, fps);
    }

    /// Submit the typed answer for a calculation problem.
    pub fn submit_answer(&mut self, fps: u32) {
        let Ok(value) = self.answer.parse::<i32>() else {
            return;
        };
        let correct = value == self.expected();
        self.apply_feedback(correct, fps);
    }

    fn apply_feedback(&mut self, correct: bool, fps: u32) {
        if correct {
            self.feedback = Some(Feedback::Correct);
            self.score += 1;
            // Pause long enough to read the praise, then advance.
            self.advance_frames = Some(fps * 3 / 2);
        } else {
            self.feedback = Some(Feedback::Wrong);
            self.score = 0;
        }
    }

    fn problem_rect(ctx: &ScreenContext) -> Rect {
        Rect::new(
            ctx.content.x + (ctx.content.w as i32 - 360) / 2,
            ctx.content.y + 90,
            360,
            110,
        )
    }

    fn comparison_rects(ctx: &ScreenContext) -> [Rect; 3] {
        let problem = Self::problem_rect(ctx);
        let y = problem.y + problem.h as i32 + 30;
        let cx = ctx.content.x + ctx.content.w as i32 / 2;
        [
            Rect::new(cx - 140, y, 80, 80),
            Rect::new(cx - 40, y, 80, 80),
            Rect::new(cx + 60, y, 80, 80),
        ]
    }

    fn answer_rect(ctx: &ScreenContext) -> Rect {
        let problem = Self::problem_rect(ctx);
        Rect::new(
            ctx.content.x + (ctx.content.w as i32 - 180) / 2,
            problem.y + problem.h as i32 + 30,
            180,
            56,
        )
    }

    fn submit_rect(ctx: &ScreenContext) -> Rect {
        let answer = Self::answer_rect(ctx);
        Rect::new(answer.x, answer.y + answer.h as i32 + 16, 180, 50)
    }

    fn switch_rect(ctx: &ScreenContext) -> Rect {
        Rect::new(
            ctx.content.x + (ctx.content.w as i32 - 280) / 2,
            ctx.content.y + ctx.content.h as i32 - 80,
            280,
            56,
        )
    }
}

impl Screen for MathPracticeScreen {
    fn view_id(&self) -> ViewId {
        ViewId::MathPractice
    }

    fn prefix(&self) -> &'static str {
        PREFIX
    }

    fn handle_input(&mut self, event: &InputEvent, ctx: &ScreenContext) -> ScreenEvent {
        match (self.drill, event) {
            (None, InputEvent::PointerClick { x, y }) => {
                let rects = column_rects(ctx.content, 3);
                if rects[0].contains(*x, *y) {
                    self.start(Drill::Comparison);
                } else if rects[1].contains(*x, *y) {
                    self.start(Drill::Calculation);
                } else if rects[2].contains(*x, *y) {
                    return ScreenEvent::Back;
                }
                ScreenEvent::None
            },
            (Some(drill), InputEvent::PointerClick { x, y }) => {
                if Self::switch_rect(ctx).contains(*x, *y) {
                    self.drill = None;
                    return ScreenEvent::None;
                }
                if self.advance_frames.is_some() {
                    // Waiting out the praise pause; ignore answers.
                    return ScreenEvent::None;
                }
                match drill {
                    Drill::Comparison => {
                        for (rect, op) in Self::comparison_rects(ctx).iter().zip(['<', '=', '>']) {
                            if rect.contains(*x, *y) {
                                self.answer_comparison(op, ctx.fps);
                            }
                        }
                    },
                    Drill::Calculation => {
                        if Self::submit_rect(ctx).contains(*x, *y) {
                            self.submit_answer(ctx.fps);
                        }
                    },
                }
                ScreenEvent::None
            },
            (Some(Drill::Calculation), InputEvent::TextInput(c)) => {
                if c.is_ascii_digit() && self.answer.len() < 3 && self.advance_frames.is_none() {
                    self.answer.push(*c);
                }
                ScreenEvent::None
            },
            (Some(Drill::Calculation), InputEvent::Backspace) => {
                self.answer.pop();
                ScreenEvent::None
            },
            _ => ScreenEvent::None,
        }
    }

    fn tick(&mut self, _ctx: &ScreenContext) -> ScreenEvent {
        if let Some(frames) = self.advance_frames {
            if frames <= 1 {
                self.next_problem();
            } else {
                self.advance_frames = Some(frames - 1);
            }
        }
        ScreenEvent::None
    }

    fn sync_scene(&self, scene: &mut SceneRegistry, ctx: &ScreenContext) {
        screen_title(scene, "math_title", "Math Practice", ctx);

        let Some(drill) = self.drill else {
            scene.destroy_prefix("math_play_");
            let rects = column_rects(ctx.content, 3);
            let labels = ["Compare numbers", "Add & subtract", "Exit"];
            for (i, (rect, label)) in rects.iter().zip(labels).enumerate() {
                themed_button(scene, &format!("math_menu_{i}"), *rect, label, ctx);
            }
            return;
        };
        scene.destroy_prefix("math_menu_");

        ensure_text(
            scene,
            "math_play_score",
            ctx.content.x + 24,
            ctx.content.y + 24,
            ctx.font_px + 6,
            ctx.palette.text_primary,
        );
        if let Ok(obj) = scene.get_mut("math_play_score") {
            obj.text = Some(format!("Score: {}", self.score));
        }

        let problem = Self::problem_rect(ctx);
        ensure_fill(
            scene,
            "math_play_problem",
            problem.x,
            problem.y,
            problem.w,
            problem.h,
            ctx.palette.surface,
        );
        if let Ok(obj) = scene.get_mut("math_play_problem") {
            obj.border_radius = Some(14);
            obj.font_size = 40;
            obj.text_color = ctx.palette.text_primary;
            obj.text = Some(match drill {
                Drill::Comparison => format!("{}  ?  {}", self.num1, self.num2),
                Drill::Calculation => format!(
                    "{}  {}  {}",
                    self.num1,
                    if self.subtract { "-" } else { "+" },
                    self.num2
                ),
            });
        }

        match drill {
            Drill::Comparison => {
                scene.destroy_prefix("math_play_answer");
                scene.destroy_prefix("math_play_submit");
                for (i, (rect, op)) in Self::comparison_rects(ctx).iter().zip(["<", "=", ">"]).enumerate() {
                    let name = format!("math_play_cmp_{i}");
                    plain_button(
                        scene,
                        &name,
                        *rect,
                        op,
                        ctx.palette.accent,
                        sprout_types::color::Color::WHITE,
                        28,
                    );
                }
            },
            Drill::Calculation => {
                scene.destroy_prefix("math_play_cmp_");
                let answer = Self::answer_rect(ctx);
                ensure_fill(
                    scene,
                    "math_play_answer",
                    answer.x,
                    answer.y,
                    answer.w,
                    answer.h,
                    ctx.palette.surface_variant,
                );
                if let Ok(obj) = scene.get_mut("math_play_answer") {
                    obj.border_radius = Some(10);
                    obj.font_size = 28;
                    obj.text_color = ctx.palette.text_primary;
                    obj.text = Some(if self.answer.is_empty() {
                        "_".to_string()
                    } else {
                        self.answer.clone()
                    });
                }
                plain_button(
                    scene,
                    "math_play_submit",
                    Self::submit_rect(ctx),
                    "Answer",
                    ctx.palette.success,
                    sprout_types::color::Color::WHITE,
                    ctx.font_px,
                );
            },
        }

        ensure_text(
            scene,
            "math_play_feedback",
            ctx.content.x + ctx.content.w as i32 / 2 - 90,
            Self::switch_rect(ctx).y - 46,
            ctx.font_px + 8,
            match self.feedback {
                Some(Feedback::Correct) => ctx.palette.success,
                _ => ctx.palette.danger,
            },
        );
        if let Ok(obj) = scene.get_mut("math_play_feedback") {
            obj.text = match self.feedback {
                Some(Feedback::Correct) => Some("Correct! Great job!".to_string()),
                Some(Feedback::Wrong) => Some("Not quite, try again!".to_string()),
                None => None,
            };
            obj.visible = self.feedback.is_some();
        }

        themed_button(
            scene,
            "math_play_switch",
            Self::switch_rect(ctx),
            "Pick another drill",
            ctx,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::screens::testutil;

    fn started(drill: Drill) -> MathPracticeScreen {
        let mut screen = MathPracticeScreen::new(7);
        screen.start(drill);
        screen
    }

    #[test]
    fn problems_stay_in_range() {
        let mut screen = started(Drill::Calculation);
        for _ in 0..100 {
            assert!((1..=20).contains(&screen.num1));
            assert!((1..=20).contains(&screen.num2));
            if screen.subtract {
                assert!(screen.num1 >= screen.num2, "no negative results");
            }
            screen.next_problem();
        }
    }

    #[test]
    fn comparison_never_subtracts() {
        let mut screen = started(Drill::Comparison);
        for _ in 0..50 {
            assert!(!screen.subtract);
            screen.next_problem();
        }
    }

    #[test]
    fn correct_comparison_scores_and_schedules_advance() {
        let mut screen = started(Drill::Comparison);
        let op = match screen.num1.cmp(&screen.num2) {
            std::cmp::Ordering::Less => '<',
            std::cmp::Ordering::Equal => '=',
            std::cmp::Ordering::Greater => '>',
        };
        screen.answer_comparison(op, 30);
        assert_eq!(screen.score(), 1);
        assert_eq!(screen.advance_frames, Some(45));
        assert_eq!(screen.feedback, Some(Feedback::Correct));
    }

    #[test]
    fn wrong_answer_resets_score() {
        let mut screen = started(Drill::Comparison);
        screen.score = 5;
        // Pick a guaranteed-wrong operator.
        let wrong = match screen.num1.cmp(&screen.num2) {
            std::cmp::Ordering::Less => '>',
            _ => '<',
        };
        screen.answer_comparison(wrong, 30);
        assert_eq!(screen.score(), 0);
        assert_eq!(screen.feedback, Some(Feedback::Wrong));
        assert_eq!(screen.advance_frames, None);
    }

    #[test]
    fn calculation_checks_typed_answer() {
        let mut screen = started(Drill::Calculation);
        screen.answer = screen.expected().to_string();
        screen.submit_answer(30);
        assert_eq!(screen.score(), 1);
    }

    #[test]
    fn tick_advances_after_pause() {
        let mut screen = started(Drill::Calculation);
        let ctx = testutil::ctx();
        screen.answer = screen.expected().to_string();
        screen.submit_answer(2);
        let (n1, n2) = (screen.num1, screen.num2);
        for _ in 0..3 {
            screen.tick(&ctx);
        }
        assert_eq!(screen.advance_frames, None);
        assert!(screen.feedback.is_none());
        // A new problem was rolled (values may coincide, but answer resets).
        assert!(screen.answer.is_empty());
        let _ = (n1, n2);
    }

    #[test]
    fn drill_menu_navigates_back() {
        let ctx = testutil::ctx();
        let mut screen = MathPracticeScreen::new(1);
        let rects = column_rects(ctx.content, 3);
        let (cx, cy) = rects[2].center();
        assert_eq!(
            screen.handle_input(&InputEvent::PointerClick { x: cx, y: cy }, &ctx),
            ScreenEvent::Back
        );
    }

    #[test]
    fn switch_returns_to_drill_menu() {
        let ctx = testutil::ctx();
        let mut screen = started(Drill::Comparison);
        let (cx, cy) = MathPracticeScreen::switch_rect(&ctx).center();
        screen.handle_input(&InputEvent::PointerClick { x: cx, y: cy }, &ctx);
        assert_eq!(screen.drill(), None);
    }

    #[test]
    fn typed_digits_accumulate() {
        let ctx = testutil::ctx();
        let mut screen = started(Drill::Calculation);
        screen.handle_input(&InputEvent::TextInput('1'), &ctx);
        screen.handle_input(&InputEvent::TextInput('2'), &ctx);
        assert_eq!(screen.answer, "12");
        screen.handle_input(&InputEvent::Backspace, &ctx);
        assert_eq!(screen.answer, "1");
    }
}
