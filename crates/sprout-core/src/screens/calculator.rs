//! Four-function calculator with operator chaining.
//!
//! Pressing an operator while one is already latched computes the
//! intermediate result first, so `2 + 3 * 4` evaluates left to right the way
//! a pocket calculator does. Division by zero shows `Error` and drops the
//! pending chain.

use sprout_scene::SceneRegistry;
use sprout_scene::helpers::ensure_fill;
use sprout_types::color::Color;
use sprout_types::geometry::Rect;
use sprout_types::input::InputEvent;

use super::widgets::{grid_rects, plain_button, themed_button};
use super::{Screen, ScreenContext, ScreenEvent};
use crate::view::ViewId;

const PREFIX: &str = "calc_";

/// Button labels in keypad order.
const BUTTONS: [&str; 16] = [
    "7", "8", "9", "/", "4", "5", "6", "*", "1", "2", "3", "-", "0", ".", "=", "+",
];

const PANEL_W: u32 = 340;
const DISPLAY_H: u32 = 64;
const CELL_H: u32 = 56;
const PAD: i32 = 12;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Op {
    Add,
    Sub,
    Mul,
    Div,
}

impl Op {
    fn from_label(label: &str) -> Option<Self> {
        match label {
            "+" => Some(Self::Add),
            "-" => Some(Self::Sub),
            "*" => Some(Self::Mul),
            "/" => Some(Self::Div),
            _ => None,
        }
    }

    /// `None` on division by zero.
    fn apply(self, first: f64, second: f64) -> Option<f64> {
        match self {
            Self::Add => Some(first + second),
            Self::Sub => Some(first - second),
            Self::Mul => Some(first * second),
            Self::Div => {
                if second == 0.0 {
                    None
                } else {
                    Some(first / second)
                }
            },
        }
    }
}

#[derive(Debug)]
pub struct CalculatorScreen {
    display: String,
    first_operand: Option<f64>,
    operator: Option<Op>,
    waiting_for_second: bool,
}

impl CalculatorScreen {
    pub fn new() -> Self {
        Self {
            display: "0".to_string(),
            first_operand: None,
            operator: None,
            waiting_for_second: false,
        }
    }

    pub fn display(&self) -> &str {
        &self.display
    }

    /// Press a keypad button by label (`0`-`9`, `.`, `+`, `-`, `*`, `/`,
    /// `=`, `C`).
    pub fn press(&mut self, label: &str) {
        if label == "C" {
            self.clear();
        } else if label == "=" {
            self.equals();
        } else if let Some(op) = Op::from_label(label) {
            self.press_operator(op);
        } else if label.len() == 1 && (label.chars().all(|c| c.is_ascii_digit()) || label == ".") {
            self.press_digit(label);
        }
    }

    fn press_digit(&mut self, digit: &str) {
        if self.waiting_for_second {
            self.display = digit.to_string();
            self.waiting_for_second = false;
            return;
        }
        if digit == "." && self.display.contains('.') {
            return;
        }
        if self.display == "0" && digit != "." || self.display == "Error" {
            self.display = digit.to_string();
        } else {
            self.display.push_str(digit);
        }
    }

    fn current_value(&self) -> f64 {
        self.display.parse().unwrap_or(0.0)
    }

    fn press_operator(&mut self, next: Op) {
        let input = self.current_value();
        if let Some(op) = self.operator
            && !self.waiting_for_second
        {
            match self.first_operand {
                Some(first) => match op.apply(first, input) {
                    Some(result) => {
                        self.display = format_number(result);
                        self.first_operand = Some(result);
                    },
                    None => {
                        self.error();
                        return;
                    },
                },
                None => self.first_operand = Some(input),
            }
        } else {
            self.first_operand = Some(input);
        }
        self.waiting_for_second = true;
        self.operator = Some(next);
    }

    fn equals(&mut self) {
        if let (Some(op), Some(first)) = (self.operator, self.first_operand) {
            match op.apply(first, self.current_value()) {
                Some(result) => self.display = format_number(result),
                None => {
                    self.error();
                    return;
                },
            }
            self.first_operand = None;
            self.operator = None;
            self.waiting_for_second = false;
        }
    }

    fn clear(&mut self) {
        self.display = "0".to_string();
        self.first_operand = None;
        self.operator = None;
        self.waiting_for_second = false;
    }

    fn error(&mut self) {
        self.display = "Error".to_string();
        self.first_operand = None;
        self.operator = None;
        self.waiting_for_second = false;
    }

    fn panel(ctx: &ScreenContext) -> Rect {
        let x = ctx.content.x + (ctx.content.w as i32 - PANEL_W as i32) / 2;
        // Display + clear row + 4 keypad rows + exit button.
        let panel_h = DISPLAY_H + 6 * (CELL_H + 10) + 2 * PAD as u32 + 10;
        let y = ctx.content.y + (ctx.content.h as i32 - panel_h as i32).max(0) / 2;
        Rect::new(x, y, PANEL_W, panel_h)
    }

    fn clear_rect(ctx: &ScreenContext) -> Rect {
        let panel = Self::panel(ctx);
        Rect::new(
            panel.x + PAD,
            panel.y + PAD + DISPLAY_H as i32 + 10,
            PANEL_W - 2 * PAD as u32,
            CELL_H,
        )
    }

    fn keypad_rects(ctx: &ScreenContext) -> Vec<Rect> {
        let clear = Self::clear_rect(ctx);
        let area = Rect::new(
            clear.x,
            clear.y + CELL_H as i32 + 10,
            PANEL_W - 2 * PAD as u32,
            4 * (CELL_H + 10),
        );
        grid_rects(area, 4, BUTTONS.len(), CELL_H, 10)
    }

    fn exit_rect(ctx: &ScreenContext) -> Rect {
        let keypad = Self::keypad_rects(ctx);
        let last = keypad[keypad.len() - 1];
        Rect::new(
            Self::panel(ctx).x + PAD,
            last.y + CELL_H as i32 + 10,
            PANEL_W - 2 * PAD as u32,
            CELL_H,
        )
    }
}

impl Default for CalculatorScreen {
    fn default() -> Self {
        Self::new()
    }
}

/// Format like the display expects: integers without a trailing `.0`.
fn format_number(value: f64) -> String {
    format!("{value}")
}

impl Screen for CalculatorScreen {
    fn view_id(&self) -> ViewId {
        ViewId::Calculator
    }

    fn prefix(&self) -> &'static str {
        PREFIX
    }

    fn handle_input(&mut self, event: &InputEvent, ctx: &ScreenContext) -> ScreenEvent {
        match event {
            InputEvent::PointerClick { x, y } => {
                if Self::clear_rect(ctx).contains(*x, *y) {
                    self.press("C");
                    return ScreenEvent::None;
                }
                for (rect, label) in Self::keypad_rects(ctx).iter().zip(BUTTONS) {
                    if rect.contains(*x, *y) {
                        self.press(label);
                        return ScreenEvent::None;
                    }
                }
                if Self::exit_rect(ctx).contains(*x, *y) {
                    return ScreenEvent::Back;
                }
                ScreenEvent::None
            },
            InputEvent::TextInput(c) => {
                self.press(&c.to_string());
                ScreenEvent::None
            },
            _ => ScreenEvent::None,
        }
    }

    fn sync_scene(&self, scene: &mut SceneRegistry, ctx: &ScreenContext) {
        let panel = Self::panel(ctx);
        ensure_fill(
            scene, "calc_panel", panel.x, panel.y, panel.w, panel.h,
            ctx.palette.surface,
        );
        if let Ok(obj) = scene.get_mut("calc_panel") {
            obj.border_radius = Some(16);
        }

        // Display strip.
        ensure_fill(
            scene,
            "calc_display",
            panel.x + PAD,
            panel.y + PAD,
            PANEL_W - 2 * PAD as u32,
            DISPLAY_H,
            Color::rgb(10, 10, 10),
        );
        if let Ok(obj) = scene.get_mut("calc_display") {
            obj.z = 1;
            obj.border_radius = Some(8);
            obj.text = Some(self.display.clone());
            obj.text_color = Color::WHITE;
            obj.font_size = 28;
        }

        plain_button(
            scene,
            "calc_clear",
            Self::clear_rect(ctx),
            "C",
            ctx.palette.danger,
            Color::WHITE,
            ctx.font_px + 4,
        );

        for (i, (rect, label)) in Self::keypad_rects(ctx).iter().zip(BUTTONS).enumerate() {
            let is_op = matches!(label, "/" | "*" | "-" | "+" | "=");
            let fill = if is_op {
                ctx.palette.warning
            } else {
                ctx.palette.surface_variant
            };
            let text_color = if is_op {
                Color::WHITE
            } else {
                ctx.palette.text_primary
            };
            plain_button(
                scene,
                &format!("calc_btn_{i}"),
                *rect,
                label,
                fill,
                text_color,
                ctx.font_px + 4,
            );
        }

        themed_button(scene, "calc_exit", Self::exit_rect(ctx), "Exit", ctx);
    }
}
