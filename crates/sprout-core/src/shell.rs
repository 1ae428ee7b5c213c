//! The shell: navigation, preferences, chrome, and screen dispatch.
//!
//! All mutable application state lives here, injected with its storage and
//! platform at construction so tests can build isolated instances. Screens
//! are owned per feature: leaving a screen on the stack keeps its state.

use sprout_platform::{Platform, PowerInfo};
use sprout_prefs::{PrefStorage, PrefStore, Preferences, Theme};
use sprout_scene::SceneRegistry;
use sprout_scene::helpers::ensure_fill;
use sprout_types::geometry::Rect;
use sprout_types::input::{Button, InputEvent};

use crate::bottombar::{self, BottomBar};
use crate::config::PadConfig;
use crate::nav::NavStack;
use crate::screens::battery::BatteryInfoScreen;
use crate::screens::calculator::CalculatorScreen;
use crate::screens::calendar::{self, CalendarScreen};
use crate::screens::camera::CameraScreen;
use crate::screens::entertainment::EntertainmentScreen;
use crate::screens::learning::LearningScreen;
use crate::screens::mainmenu::MainMenuScreen;
use crate::screens::mathpractice::MathPracticeScreen;
use crate::screens::rps::RpsScreen;
use crate::screens::settings::SettingsScreen;
use crate::screens::{CaptureRequest, PrefChange, Screen, ScreenContext, ScreenEvent};
use crate::skin::background::{BackgroundStyle, derive_background};
use crate::skin::font::{family_class, size_class, size_px};
use crate::skin::menu::menu_skin;
use crate::skin::Palette;
use crate::statusbar::{self, StatusBar};
use crate::view::ViewId;

/// What the event loop should do after an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Signal {
    Continue,
    Quit,
}

/// The top-level shell state.
pub struct Shell<S: PrefStorage, P: Platform> {
    config: PadConfig,
    nav: NavStack,
    store: PrefStore<S>,
    prefs: Preferences,
    platform: P,
    dark: bool,
    palette: Palette,
    status_bar: StatusBar,
    bottom_bar: BottomBar,
    battery: PowerInfo,
    online: bool,
    frame_counter: u64,
    last_view: Option<ViewId>,

    // Per-feature screen state.
    main_menu: MainMenuScreen,
    entertainment: EntertainmentScreen,
    learning: LearningScreen,
    calculator: CalculatorScreen,
    math_practice: MathPracticeScreen,
    rps: RpsScreen,
    settings: SettingsScreen,
    battery_info: BatteryInfoScreen,
    calendar: CalendarScreen,
    camera: CameraScreen,
}

impl<S: PrefStorage, P: Platform> Shell<S, P> {
    /// Assemble the shell: load preferences, seed the games, restore saved
    /// calendar events.
    pub fn new(config: PadConfig, store: PrefStore<S>, platform: P) -> Self {
        let prefs = Preferences::load(&store);
        let dark = prefs.theme == Theme::Dark;
        log::info!(
            "shell: starting ({}x{}, theme {:?})",
            config.screen_width,
            config.screen_height,
            prefs.theme,
        );

        let now = platform.now().ok();
        let seed = platform.uptime_secs().unwrap_or(0)
            ^ now.map(|t| t.second as u64 * 1000 + t.minute as u64).unwrap_or(0)
            ^ 0x5EED;
        let (year, month) = now.map(|t| (t.year, t.month)).unwrap_or((2024, 1));

        let saved_events = store.load(calendar::EVENTS_KEY, serde_json::Value::Null);
        let mut shell = Self {
            status_bar: StatusBar::new(&config.owner_name),
            bottom_bar: BottomBar::new(),
            config,
            nav: NavStack::new(),
            prefs,
            platform,
            dark,
            palette: Palette::for_theme(if dark { Theme::Dark } else { Theme::Light }),
            battery: PowerInfo::unsupported(),
            online: false,
            frame_counter: 0,
            last_view: None,
            main_menu: MainMenuScreen::new(),
            entertainment: EntertainmentScreen::new(),
            learning: LearningScreen::new(),
            calculator: CalculatorScreen::new(),
            math_practice: MathPracticeScreen::new(seed),
            rps: RpsScreen::new(seed.rotate_left(17)),
            settings: SettingsScreen::new(),
            battery_info: BatteryInfoScreen::new(),
            calendar: CalendarScreen::new(saved_events, year, month),
            camera: CameraScreen::new(),
            store,
        };
        shell.refresh_status();
        shell
    }

    pub fn current_view(&self) -> ViewId {
        self.nav.current()
    }

    pub fn can_go_back(&self) -> bool {
        self.nav.can_go_back()
    }

    pub fn nav_depth(&self) -> usize {
        self.nav.depth()
    }

    pub fn prefs(&self) -> &Preferences {
        &self.prefs
    }

    pub fn is_dark(&self) -> bool {
        self.dark
    }

    pub fn platform(&self) -> &P {
        &self.platform
    }

    pub fn store(&self) -> &PrefStore<S> {
        &self.store
    }

    /// Push a screen (the navigate capability handed to screens).
    pub fn navigate_to(&mut self, view: ViewId) {
        self.nav.push(view);
    }

    /// Pop a screen (the go-back capability handed to screens).
    pub fn go_back(&mut self) {
        self.nav.pop();
    }

    /// Content area for the active screen: full screen when immersive,
    /// chrome-padded otherwise.
    fn content_rect(&self, view: ViewId) -> Rect {
        let screen = Rect::new(0, 0, self.config.screen_width, self.config.screen_height);
        if view.is_immersive() {
            return screen;
        }
        Rect::new(
            0,
            statusbar::HEIGHT as i32,
            self.config.screen_width,
            self.config
                .screen_height
                .saturating_sub(statusbar::HEIGHT + bottombar::HEIGHT),
        )
    }

    /// Snapshot the read-only inputs screens need.
    fn context(&self, view: ViewId) -> ScreenContext {
        ScreenContext {
            palette: self.palette,
            skin: menu_skin(self.prefs.menu_theme, self.dark),
            font_class: family_class(self.prefs.font_family),
            font_px: size_px(self.prefs.font_size),
            content: self.content_rect(view),
            screen: Rect::new(0, 0, self.config.screen_width, self.config.screen_height),
            prefs: self.prefs.clone(),
            battery: self.battery,
            online: self.online,
            now: self.platform.now().unwrap_or(sprout_platform::SystemTime {
                year: 1970,
                month: 1,
                day: 1,
                hour: 0,
                minute: 0,
                second: 0,
            }),
            fps: self.config.fps,
        }
    }

    fn screen_mut(&mut self, view: ViewId) -> &mut dyn Screen {
        match view {
            ViewId::MainMenu => &mut self.main_menu,
            ViewId::Entertainment => &mut self.entertainment,
            ViewId::Learning => &mut self.learning,
            ViewId::Calculator => &mut self.calculator,
            ViewId::MathPractice => &mut self.math_practice,
            ViewId::RockPaperScissors => &mut self.rps,
            ViewId::Settings => &mut self.settings,
            ViewId::BatteryInfo => &mut self.battery_info,
            ViewId::Calendar => &mut self.calendar,
            ViewId::Camera => &mut self.camera,
        }
    }

    fn screen(&self, view: ViewId) -> &dyn Screen {
        match view {
            ViewId::MainMenu => &self.main_menu,
            ViewId::Entertainment => &self.entertainment,
            ViewId::Learning => &self.learning,
            ViewId::Calculator => &self.calculator,
            ViewId::MathPractice => &self.math_practice,
            ViewId::RockPaperScissors => &self.rps,
            ViewId::Settings => &self.settings,
            ViewId::BatteryInfo => &self.battery_info,
            ViewId::Calendar => &self.calendar,
            ViewId::Camera => &self.camera,
        }
    }

    /// Route one input event. Runs to completion before the next event.
    pub fn handle_event(&mut self, event: &InputEvent) -> Signal {
        match event {
            InputEvent::Quit => return Signal::Quit,
            InputEvent::ButtonPress(Button::Back) => {
                self.go_back();
                return Signal::Continue;
            },
            InputEvent::PointerClick { x, y } => {
                let view = self.current_view();
                if !view.is_immersive()
                    && self.can_go_back()
                    && self.bottom_bar.hit_back(
                        *x,
                        *y,
                        self.config.screen_width,
                        self.config.screen_height,
                    )
                {
                    self.go_back();
                    return Signal::Continue;
                }
            },
            _ => {},
        }

        let view = self.current_view();
        let ctx = self.context(view);
        let screen_event = self.screen_mut(view).handle_input(event, &ctx);
        self.apply_screen_event(screen_event);
        Signal::Continue
    }

    /// Advance frame timers and refresh status once a second.
    pub fn tick(&mut self) {
        self.frame_counter += 1;
        if self.frame_counter % self.config.fps.max(1) as u64 == 0 {
            self.refresh_status();
        }
        let view = self.current_view();
        let ctx = self.context(view);
        let screen_event = self.screen_mut(view).tick(&ctx);
        self.apply_screen_event(screen_event);
    }

    /// Poll display-only platform state into the header.
    pub fn refresh_status(&mut self) {
        self.battery = self.platform.power_info().unwrap_or_else(|e| {
            log::debug!("power: {e}");
            PowerInfo::unsupported()
        });
        self.online = self.platform.is_online().unwrap_or(false);
        let time = self.platform.now().ok();
        self.status_bar
            .update_info(time.as_ref(), Some(&self.battery), self.online);
    }

    fn apply_screen_event(&mut self, event: ScreenEvent) {
        match event {
            ScreenEvent::None => {},
            ScreenEvent::Navigate(view) => self.navigate_to(view),
            ScreenEvent::Back => self.go_back(),
            ScreenEvent::OpenUrl(url) => {
                // Display/dispatch only; the host frontend decides what a
                // link does on this device.
                log::info!("shell: open url {url}");
            },
            ScreenEvent::Pref(change) => self.apply_pref_change(change),
            ScreenEvent::Store { key, value } => self.store.set_json(key, &value),
            ScreenEvent::Capture(request) => self.apply_capture(request),
        }
    }

    fn apply_pref_change(&mut self, change: PrefChange) {
        match change {
            PrefChange::Theme(theme) => {
                self.prefs.set_theme(&mut self.store, theme);
                // The one preference with a side effect beyond persistence:
                // it flips the shell-wide dark flag.
                self.dark = theme == Theme::Dark;
                self.palette = Palette::for_theme(theme);
            },
            PrefChange::FontFamily(font) => self.prefs.set_font_family(&mut self.store, font),
            PrefChange::FontSize(size) => self.prefs.set_font_size(&mut self.store, size),
            PrefChange::MenuTheme(theme) => self.prefs.set_menu_theme(&mut self.store, theme),
            PrefChange::Background(background) => {
                self.prefs.set_background(&mut self.store, background)
            },
        }
    }

    fn apply_capture(&mut self, request: CaptureRequest) {
        let result = match request {
            CaptureRequest::Photo { filter } => self
                .platform
                .capture_photo(&filter)
                .map(|name| log::info!("shell: saved {name}")),
            CaptureRequest::StartRecording => self.platform.start_recording(),
            CaptureRequest::StopRecording => self
                .platform
                .stop_recording()
                .map(|name| log::info!("shell: saved {name}")),
        };
        if let Err(e) = result {
            log::error!("shell: capture failed: {e}");
        }
    }

    /// Compose the frame: background, typography token, chrome, active
    /// screen.
    pub fn sync_scene(&mut self, scene: &mut SceneRegistry) {
        let view = self.current_view();

        // Screen switch: drop the previous screen's objects, enter the new.
        if self.last_view != Some(view) {
            if let Some(prev) = self.last_view {
                let prefix = self.screen(prev).prefix();
                scene.destroy_prefix(prefix);
            }
            self.screen_mut(view).on_enter();
            self.last_view = Some(view);
        }

        self.sync_background(scene);

        if view.is_immersive() {
            StatusBar::hide(scene);
            BottomBar::hide(scene);
        } else {
            self.status_bar
                .sync_scene(scene, &self.palette, self.config.screen_width);
            if self.can_go_back() {
                self.bottom_bar.sync_scene(
                    scene,
                    &self.palette,
                    self.config.screen_width,
                    self.config.screen_height,
                );
            } else {
                BottomBar::hide(scene);
            }
        }

        let ctx = self.context(view);
        self.screen(view).sync_scene(scene, &ctx);
    }

    fn sync_background(&self, scene: &mut SceneRegistry) {
        ensure_fill(
            scene,
            "root_bg",
            0,
            0,
            self.config.screen_width,
            self.config.screen_height,
            self.palette.background,
        );
        if let Ok(obj) = scene.get_mut("root_bg") {
            obj.z = -100;
            match derive_background(&self.prefs.background) {
                BackgroundStyle::Neutral => {
                    obj.style_class = None;
                    obj.image_url = None;
                },
                BackgroundStyle::Class(class) => {
                    obj.style_class = Some(class);
                    obj.image_url = None;
                },
                BackgroundStyle::Image(url) => {
                    obj.style_class = None;
                    obj.image_url = Some(url);
                },
            }
        }

        // Typography token for the presentation layer.
        if !scene.contains("root_typo") {
            scene.create("root_typo").visible = false;
        }
        if let Ok(obj) = scene.get_mut("root_typo") {
            obj.visible = false;
            obj.style_class = Some(format!(
                "{} {}",
                family_class(self.prefs.font_family),
                size_class(self.prefs.font_size),
            ));
        }
    }
}
