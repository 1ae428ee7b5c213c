//! Month calendar with holidays and saved events.
//!
//! Events are keyed by `"year-month-day"` (no zero padding) and persisted as
//! one JSON map under the `calendar-events` storage key. Corrupt saved data
//! degrades to an empty map.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use sprout_platform::{days_in_month, weekday};
use sprout_scene::SceneRegistry;
use sprout_scene::helpers::{ensure_fill, ensure_text};
use sprout_types::color::{Color, with_alpha};
use sprout_types::geometry::Rect;
use sprout_types::input::InputEvent;

use super::widgets::{plain_button, themed_button};
use super::{Screen, ScreenContext, ScreenEvent};
use crate::view::ViewId;

const PREFIX: &str = "cal_";

/// Storage key for saved events.
pub const EVENTS_KEY: &str = "calendar-events";

/// Fixed holiday table for the shipped year.
const HOLIDAYS: &[(&str, &str)] = &[
    ("2024-1-1", "New Year's Day"),
    ("2024-2-10", "Lunar New Year"),
    ("2024-4-18", "Hung Kings Festival"),
    ("2024-4-30", "Reunification Day"),
    ("2024-5-1", "International Workers' Day"),
    ("2024-9-2", "National Day"),
    ("2024-9-17", "Mid-Autumn Festival"),
];

const WEEKDAY_LABELS: [&str; 7] = ["Su", "Mo", "Tu", "We", "Th", "Fr", "Sa"];

const GRID_W: u32 = 560;
const CELL_H: u32 = 44;
const CELL_GAP: u32 = 4;

/// One saved event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalEvent {
    pub time: String,
    pub title: String,
}

type EventMap = BTreeMap<String, Vec<CalEvent>>;

#[derive(Debug)]
pub struct CalendarScreen {
    year: u16,
    month: u8,
    selected_day: Option<u8>,
    events: EventMap,
    draft_title: String,
    draft_minutes: u16,
}

impl CalendarScreen {
    /// Build from the persisted events payload (absent or corrupt data ->
    /// empty map) opened on the given month.
    pub fn new(saved_events: serde_json::Value, year: u16, month: u8) -> Self {
        let events: EventMap = if saved_events.is_null() {
            EventMap::new()
        } else {
            serde_json::from_value(saved_events).unwrap_or_else(|e| {
                log::warn!("calendar: saved events are corrupt ({e}), starting empty");
                EventMap::new()
            })
        };
        Self {
            year,
            month: month.clamp(1, 12),
            selected_day: None,
            events,
            draft_title: String::new(),
            draft_minutes: 12 * 60,
        }
    }

    pub fn date_key(year: u16, month: u8, day: u8) -> String {
        format!("{year}-{month}-{day}")
    }

    pub fn holiday(year: u16, month: u8, day: u8) -> Option<&'static str> {
        let key = Self::date_key(year, month, day);
        HOLIDAYS
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, name)| *name)
    }

    pub fn month_label(&self) -> String {
        format!("Month {}, {}", self.month, self.year)
    }

    pub fn events_for(&self, day: u8) -> &[CalEvent] {
        let key = Self::date_key(self.year, self.month, day);
        self.events.get(&key).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn prev_month(&mut self) {
        if self.month == 1 {
            self.month = 12;
            self.year -= 1;
        } else {
            self.month -= 1;
        }
        self.selected_day = None;
    }

    pub fn next_month(&mut self) {
        if self.month == 12 {
            self.month = 1;
            self.year += 1;
        } else {
            self.month += 1;
        }
        self.selected_day = None;
    }

    fn draft_time(&self) -> String {
        format!("{:02}:{:02}", self.draft_minutes / 60, self.draft_minutes % 60)
    }

    /// Add the drafted event to the selected day, keeping the day's list
    /// sorted by time. Returns the persistence request.
    fn add_draft_event(&mut self) -> ScreenEvent {
        let Some(day) = self.selected_day else {
            return ScreenEvent::None;
        };
        if self.draft_title.is_empty() {
            return ScreenEvent::None;
        }
        let key = Self::date_key(self.year, self.month, day);
        let time = self.draft_time();
        let list = self.events.entry(key).or_default();
        list.push(CalEvent {
            time,
            title: std::mem::take(&mut self.draft_title),
        });
        list.sort_by(|a, b| a.time.cmp(&b.time));
        self.draft_minutes = 12 * 60;
        match serde_json::to_value(&self.events) {
            Ok(value) => ScreenEvent::Store {
                key: EVENTS_KEY,
                value,
            },
            Err(e) => {
                log::error!("calendar: serialize events failed: {e}");
                ScreenEvent::None
            },
        }
    }

    // -- Layout ---------------------------------------------------------------

    fn grid_origin(ctx: &ScreenContext) -> (i32, i32) {
        (
            ctx.content.x + (ctx.content.w as i32 - GRID_W as i32) / 2,
            ctx.content.y + 96,
        )
    }

    fn cell_rect(ctx: &ScreenContext, slot: usize) -> Rect {
        let (gx, gy) = Self::grid_origin(ctx);
        let cell_w = (GRID_W - 6 * CELL_GAP) / 7;
        let col = slot % 7;
        let row = slot / 7;
        Rect::new(
            gx + col as i32 * (cell_w + CELL_GAP) as i32,
            gy + row as i32 * (CELL_H + CELL_GAP) as i32,
            cell_w,
            CELL_H,
        )
    }

    /// Grid slot for a day, offset by the month's first weekday.
    fn day_slot(&self, day: u8) -> usize {
        weekday(self.year, self.month, 1) as usize + day as usize - 1
    }

    fn prev_rect(ctx: &ScreenContext) -> Rect {
        let (gx, gy) = Self::grid_origin(ctx);
        Rect::new(gx, gy - 52, 44, 40)
    }

    fn next_rect(ctx: &ScreenContext) -> Rect {
        let (gx, gy) = Self::grid_origin(ctx);
        Rect::new(gx + GRID_W as i32 - 44, gy - 52, 44, 40)
    }

    fn modal_rect(ctx: &ScreenContext) -> Rect {
        Rect::new(
            ctx.content.x + (ctx.content.w as i32 - 420) / 2,
            ctx.content.y + 60,
            420,
            330,
        )
    }

    fn modal_close_rect(ctx: &ScreenContext) -> Rect {
        let modal = Self::modal_rect(ctx);
        Rect::new(modal.x + 12, modal.y + modal.h as i32 - 56, modal.w - 24, 44)
    }

    fn modal_add_rect(ctx: &ScreenContext) -> Rect {
        let modal = Self::modal_rect(ctx);
        Rect::new(modal.x + modal.w as i32 - 92, modal.y + modal.h as i32 - 116, 80, 44)
    }

    fn modal_time_minus_rect(ctx: &ScreenContext) -> Rect {
        let modal = Self::modal_rect(ctx);
        Rect::new(modal.x + 12, modal.y + modal.h as i32 - 116, 36, 44)
    }

    fn modal_time_plus_rect(ctx: &ScreenContext) -> Rect {
        let modal = Self::modal_rect(ctx);
        Rect::new(modal.x + 116, modal.y + modal.h as i32 - 116, 36, 44)
    }

    fn exit_rect(ctx: &ScreenContext) -> Rect {
        Rect::new(
            ctx.content.x + (ctx.content.w as i32 - 280) / 2,
            ctx.content.y + ctx.content.h as i32 - 66,
            280,
            52,
        )
    }
}

impl Screen for CalendarScreen {
    fn view_id(&self) -> ViewId {
        ViewId::Calendar
    }

    fn prefix(&self) -> &'static str {
        PREFIX
    }

    fn handle_input(&mut self, event: &InputEvent, ctx: &ScreenContext) -> ScreenEvent {
        match event {
            InputEvent::PointerClick { x, y } => {
                if let Some(_day) = self.selected_day {
                    // Modal is open: only modal controls respond.
                    if Self::modal_close_rect(ctx).contains(*x, *y) {
                        self.selected_day = None;
                        self.draft_title.clear();
                    } else if Self::modal_add_rect(ctx).contains(*x, *y) {
                        return self.add_draft_event();
                    } else if Self::modal_time_minus_rect(ctx).contains(*x, *y) {
                        self.draft_minutes = self.draft_minutes.saturating_sub(30);
                    } else if Self::modal_time_plus_rect(ctx).contains(*x, *y) {
                        self.draft_minutes = (self.draft_minutes + 30).min(23 * 60 + 30);
                    }
                    return ScreenEvent::None;
                }
                if Self::prev_rect(ctx).contains(*x, *y) {
                    self.prev_month();
                    return ScreenEvent::None;
                }
                if Self::next_rect(ctx).contains(*x, *y) {
                    self.next_month();
                    return ScreenEvent::None;
                }
                if Self::exit_rect(ctx).contains(*x, *y) {
                    return ScreenEvent::Back;
                }
                for day in 1..=days_in_month(self.year, self.month) {
                    // First row holds the weekday header, so day cells start
                    // one row down.
                    let rect = Self::cell_rect(ctx, self.day_slot(day) + 7);
                    if rect.contains(*x, *y) {
                        self.selected_day = Some(day);
                        return ScreenEvent::None;
                    }
                }
                ScreenEvent::None
            },
            InputEvent::TextInput(c) => {
                if self.selected_day.is_some() && !c.is_control() && self.draft_title.len() < 40 {
                    self.draft_title.push(*c);
                }
                ScreenEvent::None
            },
            InputEvent::Backspace => {
                if self.selected_day.is_some() {
                    self.draft_title.pop();
                }
                ScreenEvent::None
            },
            _ => ScreenEvent::None,
        }
    }

    fn sync_scene(&self, scene: &mut SceneRegistry, ctx: &ScreenContext) {
        super::widgets::screen_title(scene, "cal_title", "Calendar", ctx);

        // Month header with prev/next.
        plain_button(
            scene,
            "cal_prev",
            Self::prev_rect(ctx),
            "<",
            ctx.palette.surface_variant,
            ctx.palette.text_primary,
            ctx.font_px + 2,
        );
        plain_button(
            scene,
            "cal_next",
            Self::next_rect(ctx),
            ">",
            ctx.palette.surface_variant,
            ctx.palette.text_primary,
            ctx.font_px + 2,
        );
        let (gx, gy) = Self::grid_origin(ctx);
        ensure_text(
            scene,
            "cal_month",
            gx + GRID_W as i32 / 2 - 70,
            gy - 46,
            ctx.font_px + 4,
            ctx.palette.text_primary,
        );
        if let Ok(obj) = scene.get_mut("cal_month") {
            obj.text = Some(self.month_label());
        }

        // Weekday header row.
        for (i, label) in WEEKDAY_LABELS.iter().enumerate() {
            let rect = Self::cell_rect(ctx, i);
            ensure_text(
                scene,
                &format!("cal_wd_{i}"),
                rect.x + rect.w as i32 / 2 - 8,
                rect.y + 10,
                ctx.font_px,
                ctx.palette.text_secondary,
            );
            if let Ok(obj) = scene.get_mut(&format!("cal_wd_{i}")) {
                obj.text = Some(label.to_string());
            }
        }

        // Day cells. Stale cells from longer months are dropped first.
        scene.destroy_prefix("cal_day_");
        let today = (ctx.now.year, ctx.now.month, ctx.now.day);
        for day in 1..=days_in_month(self.year, self.month) {
            let rect = Self::cell_rect(ctx, self.day_slot(day) + 7);
            let name = format!("cal_day_{day}");
            let is_today = today == (self.year, self.month, day);
            let fill = if is_today {
                ctx.palette.accent
            } else {
                ctx.palette.surface
            };
            let text_color = if is_today {
                Color::WHITE
            } else {
                ctx.palette.text_primary
            };
            plain_button(scene, &name, rect, &day.to_string(), fill, text_color, ctx.font_px);
            let marked = !self.events_for(day).is_empty()
                || Self::holiday(self.year, self.month, day).is_some();
            if marked {
                ensure_fill(
                    scene,
                    &format!("cal_day_{day}_dot"),
                    rect.x + rect.w as i32 - 10,
                    rect.y + rect.h as i32 - 10,
                    6,
                    6,
                    ctx.palette.danger,
                );
                if let Ok(obj) = scene.get_mut(&format!("cal_day_{day}_dot")) {
                    obj.z = 2;
                    obj.border_radius = Some(3);
                }
            }
        }

        // Day modal.
        if let Some(day) = self.selected_day {
            let modal = Self::modal_rect(ctx);
            ensure_fill(
                scene,
                "cal_modal_backdrop",
                ctx.screen.x,
                ctx.screen.y,
                ctx.screen.w,
                ctx.screen.h,
                with_alpha(Color::BLACK, 128),
            );
            if let Ok(obj) = scene.get_mut("cal_modal_backdrop") {
                obj.z = 500;
            }
            ensure_fill(
                scene, "cal_modal", modal.x, modal.y, modal.w, modal.h,
                ctx.palette.surface,
            );
            if let Ok(obj) = scene.get_mut("cal_modal") {
                obj.z = 501;
                obj.border_radius = Some(14);
            }
            ensure_text(
                scene,
                "cal_modal_title",
                modal.x + 16,
                modal.y + 14,
                ctx.font_px + 4,
                ctx.palette.text_primary,
            );
            if let Ok(obj) = scene.get_mut("cal_modal_title") {
                obj.z = 502;
                obj.text = Some(format!("Events on {}/{}/{}", day, self.month, self.year));
            }

            let holiday = Self::holiday(self.year, self.month, day);
            ensure_text(
                scene,
                "cal_modal_holiday",
                modal.x + 16,
                modal.y + 48,
                ctx.font_px,
                ctx.palette.warning,
            );
            if let Ok(obj) = scene.get_mut("cal_modal_holiday") {
                obj.z = 502;
                obj.text = holiday.map(|h| format!("Holiday: {h}"));
                obj.visible = holiday.is_some();
            }

            scene.destroy_prefix("cal_modal_event_");
            let events = self.events_for(day);
            if events.is_empty() {
                ensure_text(
                    scene,
                    "cal_modal_empty",
                    modal.x + 16,
                    modal.y + 80,
                    ctx.font_px,
                    ctx.palette.text_secondary,
                );
                if let Ok(obj) = scene.get_mut("cal_modal_empty") {
                    obj.z = 502;
                    obj.text = Some("No events yet.".to_string());
                }
            } else {
                scene.destroy_prefix("cal_modal_empty");
                for (i, event) in events.iter().take(5).enumerate() {
                    let name = format!("cal_modal_event_{i}");
                    ensure_text(
                        scene,
                        &name,
                        modal.x + 16,
                        modal.y + 80 + i as i32 * 26,
                        ctx.font_px,
                        ctx.palette.text_primary,
                    );
                    if let Ok(obj) = scene.get_mut(&name) {
                        obj.z = 502;
                        obj.text = Some(format!("{}  {}", event.time, event.title));
                    }
                }
            }

            // Draft row: time stepper + title + add.
            plain_button(
                scene,
                "cal_modal_minus",
                Self::modal_time_minus_rect(ctx),
                "-",
                ctx.palette.surface_variant,
                ctx.palette.text_primary,
                ctx.font_px,
            );
            ensure_text(
                scene,
                "cal_modal_time",
                modal.x + 56,
                Self::modal_time_minus_rect(ctx).y + 12,
                ctx.font_px + 2,
                ctx.palette.text_primary,
            );
            if let Ok(obj) = scene.get_mut("cal_modal_time") {
                obj.z = 502;
                obj.text = Some(self.draft_time());
            }
            plain_button(
                scene,
                "cal_modal_plus",
                Self::modal_time_plus_rect(ctx),
                "+",
                ctx.palette.surface_variant,
                ctx.palette.text_primary,
                ctx.font_px,
            );
            ensure_text(
                scene,
                "cal_modal_draft",
                modal.x + 162,
                Self::modal_time_minus_rect(ctx).y + 12,
                ctx.font_px,
                ctx.palette.text_primary,
            );
            if let Ok(obj) = scene.get_mut("cal_modal_draft") {
                obj.z = 502;
                obj.text = Some(if self.draft_title.is_empty() {
                    "(type a name)".to_string()
                } else {
                    self.draft_title.clone()
                });
            }
            plain_button(
                scene,
                "cal_modal_add",
                Self::modal_add_rect(ctx),
                "Add",
                ctx.palette.accent,
                Color::WHITE,
                ctx.font_px,
            );
            plain_button(
                scene,
                "cal_modal_close",
                Self::modal_close_rect(ctx),
                "Close",
                ctx.palette.surface_variant,
                ctx.palette.text_primary,
                ctx.font_px,
            );
        } else {
            scene.destroy_prefix("cal_modal");
        }

        themed_button(scene, "cal_exit", Self::exit_rect(ctx), "Exit", ctx);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::screens::testutil;

    fn screen() -> CalendarScreen {
        CalendarScreen::new(serde_json::json!({}), 2024, 6)
    }

    #[test]
    fn corrupt_saved_events_start_empty() {
        let cal = CalendarScreen::new(serde_json::json!("not a map"), 2024, 6);
        assert!(cal.events.is_empty());
    }

    #[test]
    fn saved_events_are_restored() {
        let saved = serde_json::json!({
            "2024-6-15": [{"time": "09:00", "title": "Swim class"}]
        });
        let cal = CalendarScreen::new(saved, 2024, 6);
        assert_eq!(cal.events_for(15).len(), 1);
        assert_eq!(cal.events_for(15)[0].title, "Swim class");
    }

    #[test]
    fn month_navigation_wraps_years() {
        let mut cal = CalendarScreen::new(serde_json::json!({}), 2024, 1);
        cal.prev_month();
        assert_eq!((cal.year, cal.month), (2023, 12));
        cal.next_month();
        assert_eq!((cal.year, cal.month), (2024, 1));
        let mut cal = CalendarScreen::new(serde_json::json!({}), 2024, 12);
        cal.next_month();
        assert_eq!((cal.year, cal.month), (2025, 1));
    }

    #[test]
    fn holidays_resolve_by_date() {
        assert_eq!(CalendarScreen::holiday(2024, 9, 2), Some("National Day"));
        assert_eq!(CalendarScreen::holiday(2024, 9, 3), None);
        assert_eq!(CalendarScreen::holiday(2023, 9, 2), None);
    }

    #[test]
    fn added_events_sort_by_time_and_persist() {
        let mut cal = screen();
        cal.selected_day = Some(15);
        cal.draft_title = "Dinner".to_string();
        cal.draft_minutes = 18 * 60;
        let first = cal.add_draft_event();
        cal.draft_title = "Breakfast".to_string();
        cal.draft_minutes = 7 * 60;
        let second = cal.add_draft_event();

        let events = cal.events_for(15);
        assert_eq!(events.len(), 2);
        assert_eq!(events[0].title, "Breakfast");
        assert_eq!(events[1].title, "Dinner");

        // Both adds requested persistence of the whole map.
        for event in [first, second] {
            match event {
                ScreenEvent::Store { key, value } => {
                    assert_eq!(key, EVENTS_KEY);
                    assert!(value.get("2024-6-15").is_some());
                },
                other => panic!("expected Store, got {other:?}"),
            }
        }
    }

    #[test]
    fn empty_draft_title_adds_nothing() {
        let mut cal = screen();
        cal.selected_day = Some(3);
        assert_eq!(cal.add_draft_event(), ScreenEvent::None);
        assert!(cal.events_for(3).is_empty());
    }

    #[test]
    fn day_click_opens_modal_and_close_dismisses() {
        let ctx = testutil::ctx();
        let mut cal = screen();
        let rect = CalendarScreen::cell_rect(&ctx, cal.day_slot(15) + 7);
        let (cx, cy) = rect.center();
        cal.handle_input(&InputEvent::PointerClick { x: cx, y: cy }, &ctx);
        assert_eq!(cal.selected_day, Some(15));

        let (cx, cy) = CalendarScreen::modal_close_rect(&ctx).center();
        cal.handle_input(&InputEvent::PointerClick { x: cx, y: cy }, &ctx);
        assert_eq!(cal.selected_day, None);
    }

    #[test]
    fn typing_builds_the_draft_title() {
        let ctx = testutil::ctx();
        let mut cal = screen();
        cal.selected_day = Some(1);
        for c in "Picnic".chars() {
            cal.handle_input(&InputEvent::TextInput(c), &ctx);
        }
        assert_eq!(cal.draft_title, "Picnic");
        cal.handle_input(&InputEvent::Backspace, &ctx);
        assert_eq!(cal.draft_title, "Picni");
    }

    #[test]
    fn time_stepper_stays_in_day_bounds() {
        let ctx = testutil::ctx();
        let mut cal = screen();
        cal.selected_day = Some(1);
        cal.draft_minutes = 0;
        let (cx, cy) = CalendarScreen::modal_time_minus_rect(&ctx).center();
        cal.handle_input(&InputEvent::PointerClick { x: cx, y: cy }, &ctx);
        assert_eq!(cal.draft_minutes, 0);
        cal.draft_minutes = 23 * 60 + 30;
        let (cx, cy) = CalendarScreen::modal_time_plus_rect(&ctx).center();
        cal.handle_input(&InputEvent::PointerClick { x: cx, y: cy }, &ctx);
        assert_eq!(cal.draft_minutes, 23 * 60 + 30);
    }

    #[test]
    fn june_2024_layout() {
        let cal = screen();
        // June 1, 2024 was a Saturday (slot 6 in the first day row).
        assert_eq!(cal.day_slot(1), 6);
        assert_eq!(days_in_month(2024, 6), 30);
    }

    #[test]
    fn sync_marks_today_and_events() {
        let ctx = testutil::ctx();
        let mut cal = screen();
        cal.selected_day = Some(15);
        cal.draft_title = "Party".to_string();
        cal.add_draft_event();
        cal.selected_day = None;

        let mut scene = SceneRegistry::new();
        cal.sync_scene(&mut scene, &ctx);
        // ctx "today" is 2024-06-15: the cell exists and carries a dot.
        assert!(scene.contains("cal_day_15"));
        assert!(scene.contains("cal_day_15_dot"));
        assert!(!scene.contains("cal_modal"));
    }
}
