//! Immersive camera screen: filters, frames, timer, photo and video modes.
//!
//! This screen renders full-bleed with the shell chrome suppressed. It owns
//! presentation state only; actual capture goes through the platform's
//! capture service via [`CaptureRequest`].

use sprout_scene::SceneRegistry;
use sprout_scene::helpers::{ensure_fill, ensure_text};
use sprout_types::color::{Color, with_alpha};
use sprout_types::geometry::Rect;
use sprout_types::input::InputEvent;

use super::widgets::plain_button;
use super::{CaptureRequest, Screen, ScreenContext, ScreenEvent};
use crate::view::ViewId;

const PREFIX: &str = "cam_";

/// Named filters, with the effect spec the capture pipeline understands.
pub const FILTERS: &[(&str, &str)] = &[
    ("None", ""),
    ("Grayscale", "grayscale(100%)"),
    ("Sepia", "sepia(100%)"),
    ("Invert", "invert(100%)"),
    ("Hue-Rotate", "hue-rotate(90deg)"),
    ("Saturate", "saturate(2)"),
    ("Contrast", "contrast(200%)"),
    ("Brightness", "brightness(150%)"),
    ("Vintage", "sepia(60%) contrast(110%) brightness(90%)"),
    ("Cool", "contrast(110%) saturate(120%) hue-rotate(-15deg)"),
    ("Warm", "sepia(30%) contrast(110%) saturate(120%) hue-rotate(15deg)"),
    ("Dramatic", "grayscale(50%) contrast(150%)"),
    ("Rose", "sepia(20%) saturate(150%) hue-rotate(-10deg)"),
    ("Cyberpunk", "contrast(120%) hue-rotate(50deg) saturate(180%)"),
    ("Emerald", "hue-rotate(-40deg) saturate(150%)"),
    ("Dreamy", "saturate(120%) brightness(110%) contrast(90%)"),
    ("Muted", "saturate(70%) contrast(90%)"),
    ("Film", "contrast(120%) saturate(80%)"),
    ("Sharpen", "contrast(110%) saturate(110%)"),
    ("Pop", "contrast(130%) saturate(130%)"),
];

/// Named photo frames.
pub const FRAMES: &[&str] = &[
    "None",
    "Classic",
    "Film",
    "Polaroid",
    "Gold",
    "Circle",
    "Neon Pink",
    "Neon Blue",
    "Vignette",
    "Dashed",
    "Double",
    "Gradient",
    "Stamp",
    "Wood",
    "Grunge",
    "Shadow",
    "Scanlines",
    "Hearts",
    "Stars",
    "Corner",
];

/// Timer settings cycle 0 -> 3 -> 5 -> 10 seconds.
const TIMER_STEPS: [u8; 4] = [0, 3, 5, 10];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CameraMode {
    Photo,
    Video,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Facing {
    Front,
    Rear,
}

#[derive(Debug)]
pub struct CameraScreen {
    mode: CameraMode,
    facing: Facing,
    timer_secs: u8,
    countdown_frames: Option<u32>,
    recording: bool,
    recording_frames: u32,
    filter_idx: usize,
    frame_idx: usize,
    show_filter_tray: bool,
    show_frame_tray: bool,
}

impl CameraScreen {
    pub fn new() -> Self {
        Self {
            mode: CameraMode::Photo,
            facing: Facing::Front,
            timer_secs: 0,
            countdown_frames: None,
            recording: false,
            recording_frames: 0,
            filter_idx: 0,
            frame_idx: 0,
            show_filter_tray: false,
            show_frame_tray: false,
        }
    }

    pub fn mode(&self) -> CameraMode {
        self.mode
    }

    pub fn facing(&self) -> Facing {
        self.facing
    }

    pub fn timer_secs(&self) -> u8 {
        self.timer_secs
    }

    pub fn is_recording(&self) -> bool {
        self.recording
    }

    pub fn active_filter(&self) -> &'static str {
        FILTERS[self.filter_idx].0
    }

    pub fn active_frame(&self) -> &'static str {
        FRAMES[self.frame_idx]
    }

    /// Cycle the self-timer to its next step.
    pub fn toggle_timer(&mut self) {
        let pos = TIMER_STEPS
            .iter()
            .position(|s| *s == self.timer_secs)
            .unwrap_or(0);
        self.timer_secs = TIMER_STEPS[(pos + 1) % TIMER_STEPS.len()];
    }

    pub fn toggle_facing(&mut self) {
        self.facing = match self.facing {
            Facing::Front => Facing::Rear,
            Facing::Rear => Facing::Front,
        };
    }

    /// The shutter was pressed. May return a capture request immediately or
    /// start the countdown.
    fn shutter(&mut self, fps: u32) -> ScreenEvent {
        match self.mode {
            CameraMode::Photo => {
                if self.countdown_frames.is_some() {
                    return ScreenEvent::None;
                }
                if self.timer_secs > 0 {
                    self.countdown_frames = Some(self.timer_secs as u32 * fps.max(1));
                    ScreenEvent::None
                } else {
                    ScreenEvent::Capture(CaptureRequest::Photo {
                        filter: self.active_filter().to_string(),
                    })
                }
            },
            CameraMode::Video => {
                if self.recording {
                    self.recording = false;
                    self.recording_frames = 0;
                    ScreenEvent::Capture(CaptureRequest::StopRecording)
                } else {
                    self.recording = true;
                    self.recording_frames = 0;
                    ScreenEvent::Capture(CaptureRequest::StartRecording)
                }
            },
        }
    }

    /// Seconds remaining on the countdown, if one is running.
    pub fn countdown_secs(&self, fps: u32) -> Option<u32> {
        self.countdown_frames.map(|f| f.div_ceil(fps.max(1)))
    }

    fn recording_label(&self, fps: u32) -> String {
        let secs = self.recording_frames / fps.max(1);
        format!("{:02}:{:02}", secs / 60, secs % 60)
    }

    // -- Layout ---------------------------------------------------------------

    fn exit_rect(_ctx: &ScreenContext) -> Rect {
        Rect::new(16, 16, 110, 44)
    }

    fn facing_rect(ctx: &ScreenContext) -> Rect {
        Rect::new(ctx.screen.w as i32 - 70, 16, 54, 44)
    }

    fn timer_rect(ctx: &ScreenContext) -> Rect {
        Rect::new(ctx.screen.w as i32 - 70, 72, 54, 44)
    }

    fn shutter_rect(ctx: &ScreenContext) -> Rect {
        Rect::new(
            ctx.screen.w as i32 / 2 - 44,
            ctx.screen.h as i32 - 120,
            88,
            88,
        )
    }

    fn filter_toggle_rect(ctx: &ScreenContext) -> Rect {
        Rect::new(60, ctx.screen.h as i32 - 100, 110, 48)
    }

    fn frame_toggle_rect(ctx: &ScreenContext) -> Rect {
        Rect::new(ctx.screen.w as i32 - 170, ctx.screen.h as i32 - 100, 110, 48)
    }

    fn mode_photo_rect(ctx: &ScreenContext) -> Rect {
        Rect::new(ctx.screen.w as i32 / 2 - 90, ctx.screen.h as i32 - 26, 80, 24)
    }

    fn mode_video_rect(ctx: &ScreenContext) -> Rect {
        Rect::new(ctx.screen.w as i32 / 2 + 10, ctx.screen.h as i32 - 26, 80, 24)
    }

    fn tray_item_rect(ctx: &ScreenContext, index: usize) -> Rect {
        let cell_w = ctx.screen.w / 20;
        Rect::new(
            index as i32 * cell_w as i32,
            ctx.screen.h as i32 - 170,
            cell_w,
            44,
        )
    }
}

impl Default for CameraScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl Screen for CameraScreen {
    fn view_id(&self) -> ViewId {
        ViewId::Camera
    }

    fn prefix(&self) -> &'static str {
        PREFIX
    }

    fn on_enter(&mut self) {
        // A fresh visit starts with trays closed and no countdown.
        self.show_filter_tray = false;
        self.show_frame_tray = false;
        self.countdown_frames = None;
    }

    fn handle_input(&mut self, event: &InputEvent, ctx: &ScreenContext) -> ScreenEvent {
        let InputEvent::PointerClick { x, y } = event else {
            return ScreenEvent::None;
        };
        let (x, y) = (*x, *y);

        if Self::exit_rect(ctx).contains(x, y) {
            if self.recording {
                self.recording = false;
                self.recording_frames = 0;
                // Leaving mid-recording finalizes the clip first; the shell
                // applies the capture request, then pops on the next back.
                return ScreenEvent::Capture(CaptureRequest::StopRecording);
            }
            return ScreenEvent::Back;
        }
        if !self.recording && Self::facing_rect(ctx).contains(x, y) {
            self.toggle_facing();
            return ScreenEvent::None;
        }
        if Self::timer_rect(ctx).contains(x, y) {
            self.toggle_timer();
            return ScreenEvent::None;
        }
        if Self::shutter_rect(ctx).contains(x, y) {
            return self.shutter(ctx.fps);
        }
        if Self::filter_toggle_rect(ctx).contains(x, y) {
            self.show_filter_tray = !self.show_filter_tray;
            self.show_frame_tray = false;
            return ScreenEvent::None;
        }
        if self.mode == CameraMode::Photo && Self::frame_toggle_rect(ctx).contains(x, y) {
            self.show_frame_tray = !self.show_frame_tray;
            self.show_filter_tray = false;
            return ScreenEvent::None;
        }
        if Self::mode_photo_rect(ctx).contains(x, y) {
            self.mode = CameraMode::Photo;
            return ScreenEvent::None;
        }
        if Self::mode_video_rect(ctx).contains(x, y) && !self.recording {
            self.mode = CameraMode::Video;
            self.show_frame_tray = false;
            return ScreenEvent::None;
        }
        if self.show_filter_tray {
            for i in 0..FILTERS.len() {
                if Self::tray_item_rect(ctx, i).contains(x, y) {
                    self.filter_idx = i;
                    self.show_filter_tray = false;
                    return ScreenEvent::None;
                }
            }
        }
        if self.show_frame_tray {
            for i in 0..FRAMES.len() {
                if Self::tray_item_rect(ctx, i).contains(x, y) {
                    self.frame_idx = i;
                    self.show_frame_tray = false;
                    return ScreenEvent::None;
                }
            }
        }
        ScreenEvent::None
    }

    fn tick(&mut self, _ctx: &ScreenContext) -> ScreenEvent {
        if self.recording {
            self.recording_frames += 1;
        }
        if let Some(frames) = self.countdown_frames {
            if frames <= 1 {
                self.countdown_frames = None;
                return ScreenEvent::Capture(CaptureRequest::Photo {
                    filter: self.active_filter().to_string(),
                });
            }
            self.countdown_frames = Some(frames - 1);
        }
        ScreenEvent::None
    }

    fn sync_scene(&self, scene: &mut SceneRegistry, ctx: &ScreenContext) {
        // Full-bleed viewfinder.
        ensure_fill(
            scene,
            "cam_viewfinder",
            ctx.screen.x,
            ctx.screen.y,
            ctx.screen.w,
            ctx.screen.h,
            Color::BLACK,
        );
        if let Ok(obj) = scene.get_mut("cam_viewfinder") {
            obj.z = -10;
            obj.style_class = Some(format!(
                "filter:{} frame:{} facing:{}",
                self.active_filter(),
                self.active_frame(),
                match self.facing {
                    Facing::Front => "front",
                    Facing::Rear => "rear",
                },
            ));
        }

        plain_button(
            scene,
            "cam_exit",
            Self::exit_rect(ctx),
            "< Exit",
            with_alpha(Color::BLACK, 128),
            Color::WHITE,
            ctx.font_px,
        );
        if !self.recording {
            plain_button(
                scene,
                "cam_facing",
                Self::facing_rect(ctx),
                "\u{1F504}",
                with_alpha(Color::BLACK, 128),
                Color::WHITE,
                ctx.font_px,
            );
        } else {
            scene.destroy_prefix("cam_facing");
        }
        plain_button(
            scene,
            "cam_timer",
            Self::timer_rect(ctx),
            &format!("{}s", self.timer_secs),
            with_alpha(Color::BLACK, 128),
            Color::rgb(250, 204, 21),
            ctx.font_px,
        );

        // Shutter.
        let shutter = Self::shutter_rect(ctx);
        ensure_fill(
            scene,
            "cam_shutter",
            shutter.x,
            shutter.y,
            shutter.w,
            shutter.h,
            if self.recording {
                Color::rgb(239, 68, 68)
            } else {
                with_alpha(Color::WHITE, 80)
            },
        );
        if let Ok(obj) = scene.get_mut("cam_shutter") {
            obj.z = 10;
            obj.border_radius = Some((shutter.w / 2) as u16);
            obj.stroke_width = Some(4);
            obj.stroke_color = Some(Color::WHITE);
        }

        // Mode selectors.
        plain_button(
            scene,
            "cam_mode_photo",
            Self::mode_photo_rect(ctx),
            "Photo",
            if self.mode == CameraMode::Photo {
                Color::rgb(250, 204, 21)
            } else {
                with_alpha(Color::BLACK, 128)
            },
            if self.mode == CameraMode::Photo {
                Color::BLACK
            } else {
                Color::WHITE
            },
            12,
        );
        plain_button(
            scene,
            "cam_mode_video",
            Self::mode_video_rect(ctx),
            "Video",
            if self.mode == CameraMode::Video {
                Color::rgb(250, 204, 21)
            } else {
                with_alpha(Color::BLACK, 128)
            },
            if self.mode == CameraMode::Video {
                Color::BLACK
            } else {
                Color::WHITE
            },
            12,
        );

        // Tray toggles.
        plain_button(
            scene,
            "cam_filters",
            Self::filter_toggle_rect(ctx),
            "Filters",
            with_alpha(Color::BLACK, 128),
            Color::WHITE,
            ctx.font_px,
        );
        if self.mode == CameraMode::Photo {
            plain_button(
                scene,
                "cam_frames",
                Self::frame_toggle_rect(ctx),
                "Frames",
                with_alpha(Color::BLACK, 128),
                Color::WHITE,
                ctx.font_px,
            );
        } else {
            scene.destroy_prefix("cam_frames");
        }

        // Trays.
        scene.destroy_prefix("cam_tray_");
        if self.show_filter_tray {
            for (i, (name, _)) in FILTERS.iter().enumerate() {
                plain_button(
                    scene,
                    &format!("cam_tray_{i}"),
                    Self::tray_item_rect(ctx, i),
                    name,
                    if i == self.filter_idx {
                        with_alpha(Color::WHITE, 50)
                    } else {
                        with_alpha(Color::BLACK, 128)
                    },
                    Color::WHITE,
                    10,
                );
            }
        } else if self.show_frame_tray {
            for (i, name) in FRAMES.iter().enumerate() {
                plain_button(
                    scene,
                    &format!("cam_tray_{i}"),
                    Self::tray_item_rect(ctx, i),
                    name,
                    if i == self.frame_idx {
                        with_alpha(Color::WHITE, 50)
                    } else {
                        with_alpha(Color::BLACK, 128)
                    },
                    Color::WHITE,
                    10,
                );
            }
        }

        // Countdown overlay.
        ensure_text(
            scene,
            "cam_countdown",
            ctx.screen.w as i32 / 2 - 30,
            ctx.screen.h as i32 / 2 - 60,
            96,
            Color::WHITE,
        );
        if let Ok(obj) = scene.get_mut("cam_countdown") {
            obj.z = 20;
            obj.text = self.countdown_secs(ctx.fps).map(|s| s.to_string());
            obj.visible = self.countdown_frames.is_some();
        }

        // Recording badge.
        ensure_text(
            scene,
            "cam_rec",
            ctx.screen.w as i32 / 2 - 40,
            20,
            ctx.font_px,
            Color::rgb(239, 68, 68),
        );
        if let Ok(obj) = scene.get_mut("cam_rec") {
            obj.z = 20;
            obj.text = Some(format!("\u{25CF} {}", self.recording_label(ctx.fps)));
            obj.visible = self.recording;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::screens::testutil;

    #[test]
    fn filter_and_frame_tables_are_complete() {
        assert_eq!(FILTERS.len(), 20);
        assert_eq!(FRAMES.len(), 20);
        assert_eq!(FILTERS[0].0, "None");
        assert_eq!(FRAMES[0], "None");
    }

    #[test]
    fn timer_cycles_through_steps() {
        let mut cam = CameraScreen::new();
        assert_eq!(cam.timer_secs(), 0);
        cam.toggle_timer();
        assert_eq!(cam.timer_secs(), 3);
        cam.toggle_timer();
        assert_eq!(cam.timer_secs(), 5);
        cam.toggle_timer();
        assert_eq!(cam.timer_secs(), 10);
        cam.toggle_timer();
        assert_eq!(cam.timer_secs(), 0);
    }

    #[test]
    fn instant_shutter_captures_with_active_filter() {
        let mut cam = CameraScreen::new();
        cam.filter_idx = 2;
        let event = cam.shutter(30);
        assert_eq!(
            event,
            ScreenEvent::Capture(CaptureRequest::Photo {
                filter: "Sepia".to_string()
            })
        );
    }

    #[test]
    fn timed_shutter_counts_down_then_captures() {
        let ctx = testutil::ctx();
        let mut cam = CameraScreen::new();
        cam.timer_secs = 3;
        assert_eq!(cam.shutter(2), ScreenEvent::None);
        assert_eq!(cam.countdown_secs(2), Some(3));
        let mut captured = None;
        for _ in 0..6 {
            if let ScreenEvent::Capture(req) = cam.tick(&ctx) {
                captured = Some(req);
                break;
            }
        }
        assert_eq!(
            captured,
            Some(CaptureRequest::Photo {
                filter: "None".to_string()
            })
        );
        assert_eq!(cam.countdown_secs(2), None);
    }

    #[test]
    fn shutter_is_ignored_during_countdown() {
        let mut cam = CameraScreen::new();
        cam.timer_secs = 5;
        cam.shutter(30);
        assert_eq!(cam.shutter(30), ScreenEvent::None);
    }

    #[test]
    fn video_shutter_toggles_recording() {
        let mut cam = CameraScreen::new();
        cam.mode = CameraMode::Video;
        assert_eq!(
            cam.shutter(30),
            ScreenEvent::Capture(CaptureRequest::StartRecording)
        );
        assert!(cam.is_recording());
        assert_eq!(
            cam.shutter(30),
            ScreenEvent::Capture(CaptureRequest::StopRecording)
        );
        assert!(!cam.is_recording());
    }

    #[test]
    fn recording_clock_advances_with_ticks() {
        let ctx = testutil::ctx();
        let mut cam = CameraScreen::new();
        cam.mode = CameraMode::Video;
        cam.shutter(30);
        for _ in 0..65 {
            cam.tick(&ctx);
        }
        assert_eq!(cam.recording_label(ctx.fps), "00:02");
    }

    #[test]
    fn exit_while_recording_stops_first() {
        let ctx = testutil::ctx();
        let mut cam = CameraScreen::new();
        cam.mode = CameraMode::Video;
        cam.shutter(30);
        let (cx, cy) = CameraScreen::exit_rect(&ctx).center();
        let event = cam.handle_input(&InputEvent::PointerClick { x: cx, y: cy }, &ctx);
        assert_eq!(event, ScreenEvent::Capture(CaptureRequest::StopRecording));
        // A second exit tap leaves the screen.
        let event = cam.handle_input(&InputEvent::PointerClick { x: cx, y: cy }, &ctx);
        assert_eq!(event, ScreenEvent::Back);
    }

    #[test]
    fn tray_click_selects_filter() {
        let ctx = testutil::ctx();
        let mut cam = CameraScreen::new();
        let (cx, cy) = CameraScreen::filter_toggle_rect(&ctx).center();
        cam.handle_input(&InputEvent::PointerClick { x: cx, y: cy }, &ctx);
        assert!(cam.show_filter_tray);
        let (cx, cy) = CameraScreen::tray_item_rect(&ctx, 4).center();
        cam.handle_input(&InputEvent::PointerClick { x: cx, y: cy }, &ctx);
        assert_eq!(cam.active_filter(), "Hue-Rotate");
        assert!(!cam.show_filter_tray);
    }

    #[test]
    fn frames_tray_only_in_photo_mode() {
        let ctx = testutil::ctx();
        let mut cam = CameraScreen::new();
        cam.mode = CameraMode::Video;
        let (cx, cy) = CameraScreen::frame_toggle_rect(&ctx).center();
        cam.handle_input(&InputEvent::PointerClick { x: cx, y: cy }, &ctx);
        assert!(!cam.show_frame_tray);
    }

    #[test]
    fn facing_toggle() {
        let mut cam = CameraScreen::new();
        assert_eq!(cam.facing(), Facing::Front);
        cam.toggle_facing();
        assert_eq!(cam.facing(), Facing::Rear);
    }

    #[test]
    fn sync_is_full_bleed() {
        let ctx = testutil::ctx();
        let cam = CameraScreen::new();
        let mut scene = SceneRegistry::new();
        cam.sync_scene(&mut scene, &ctx);
        let vf = scene.get("cam_viewfinder").unwrap();
        assert_eq!((vf.x, vf.y), (0, 0));
        assert_eq!((vf.w, vf.h), (800, 600));
    }
}
