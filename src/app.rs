//! Frame driver tying input, overlays and click rates together
//!
//! Each frame the host feeds every [`HudAction`] to [`HudApp::apply`], then
//! calls [`HudApp::update`] once, then renders from the read-only accessors.

use crate::click_rate::{ClickRateTracker, Clock, MouseSide, SystemClock};
use crate::hud::{
    rainbow, GroupColors, HudError, InteractionController, NoticeBoard, OverlayGroup,
    OverlayRegistry, MAX_OVERLAYS,
};
use crate::input_system::{HudAction, InputContext, PressTracker};
use crate::keystroke::{input, FaceOptions, InputId, Widget};
use crate::settings::{HudSettings, KeyDisplay};

pub struct HudApp<C: Clock = SystemClock> {
    registry: OverlayRegistry,
    interaction: InteractionController,
    clicks: ClickRateTracker<C>,
    presses: PressTracker,
    notices: NoticeBoard,
    settings: HudSettings,
    context: InputContext,
    pointer: (i32, i32),
    /// Click rates captured by the last `update`, left then right
    cps: [u32; 2],
    running: bool,
}

impl HudApp<SystemClock> {
    pub fn new(registry: OverlayRegistry, settings: HudSettings) -> Self {
        Self::with_clock(registry, settings, SystemClock)
    }
}

impl<C: Clock> HudApp<C> {
    pub fn with_clock(mut registry: OverlayRegistry, settings: HudSettings, clock: C) -> Self {
        registry.ensure_default();
        registry.refresh_layouts(&settings);

        HudApp {
            registry,
            interaction: InteractionController::new(),
            clicks: ClickRateTracker::with_clock(clock),
            presses: PressTracker::new(),
            notices: NoticeBoard::new(),
            settings,
            context: InputContext::Hud,
            pointer: (0, 0),
            cps: [0, 0],
            running: true,
        }
    }

    pub fn registry(&self) -> &OverlayRegistry {
        &self.registry
    }

    pub fn settings(&self) -> &HudSettings {
        &self.settings
    }

    pub fn context(&self) -> InputContext {
        self.context
    }

    pub fn notices(&self) -> &NoticeBoard {
        &self.notices
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn is_held(&self, input: &InputId) -> bool {
        self.presses.is_held(input)
    }

    /// Name of the group being dragged in the editor.
    pub fn dragged(&self) -> Option<&str> {
        self.interaction.dragged()
    }

    /// Click rate as of the last `update`.
    pub fn cps(&self, side: MouseSide) -> u32 {
        match side {
            MouseSide::Left => self.cps[0],
            MouseSide::Right => self.cps[1],
        }
    }

    /// What a widget should show this frame.
    pub fn face_options(&self, widget: &Widget) -> FaceOptions {
        FaceOptions {
            key_display: self.settings.key_display,
            cps_display: self.settings.cps_display,
            cps: widget.kind().mouse_side().map(|side| self.cps(side)).unwrap_or(0),
        }
    }

    /// Colors for a group, following the default group when synced.
    pub fn colors_for(&self, group: &OverlayGroup) -> GroupColors {
        if self.settings.sync_colors {
            if let Some(default) = self.registry.default_group() {
                return *default.colors();
            }
        }
        *group.colors()
    }

    /// Colors for one cell of a group.
    ///
    /// `offset` is the cell's distance from the group's left edge as a
    /// fraction of the group width. In rainbow mode the text and click colors
    /// cycle with the clock, shifted by `offset` so the group shows a wave.
    pub fn cell_colors(&self, group: &OverlayGroup, offset: f64) -> GroupColors {
        let colors = self.colors_for(group);
        if !self.settings.rainbow {
            return colors;
        }

        let wave = rainbow(self.now(), offset);
        GroupColors {
            text: wave,
            click: wave,
            ..colors
        }
    }

    fn now(&self) -> i64 {
        self.clicks.clock().now_millis()
    }

    fn report(&mut self, error: &HudError) {
        tracing::warn!("{}", error);
        let now = self.now();
        self.notices.report(error, now);
    }

    fn report_all(&mut self, errors: Vec<HudError>) {
        for error in &errors {
            self.report(error);
        }
    }

    /// Executes one action.
    pub fn apply(&mut self, action: HudAction) {
        match action {
            HudAction::InputPressed(id) => self.input_pressed(id),
            HudAction::InputReleased(id) => self.presses.release(&id),

            HudAction::PointerDown(x, y) => {
                self.pointer = (x, y);
                if self.context == InputContext::EditLayout {
                    self.interaction.pointer_down(&mut self.registry, x, y);
                }
            }
            HudAction::PointerMoved { x, y, dx, dy } => {
                self.pointer = (x, y);
                if self.context == InputContext::EditLayout {
                    self.interaction.pointer_moved(&mut self.registry, dx, dy);
                }
            }
            HudAction::PointerUp => self.interaction.pointer_up(&mut self.registry),
            HudAction::Scroll(delta) => {
                if self.context == InputContext::EditLayout {
                    let (x, y) = self.pointer;
                    self.interaction.scroll(&mut self.registry, x, y, delta);
                }
            }

            HudAction::ToggleEditMode => match self.context {
                InputContext::Hud => self.enter_editor(),
                InputContext::EditLayout | InputContext::Binding => self.leave_editor(),
            },
            HudAction::BeginBinding => self.begin_binding(),
            HudAction::DeleteHovered => self.delete_hovered(),
            HudAction::SaveLayout => {
                let errors = self.registry.save_all();
                self.report_all(errors);
            }

            HudAction::CycleCpsDisplay => {
                self.settings.cps_display = self.settings.cps_display.next();
            }
            HudAction::ToggleKeyDisplay => {
                self.settings.key_display = match self.settings.key_display {
                    KeyDisplay::Letters => KeyDisplay::Arrows,
                    KeyDisplay::Arrows => KeyDisplay::Letters,
                };
            }
            HudAction::ToggleRainbow => self.settings.rainbow = !self.settings.rainbow,

            HudAction::ViewportResized(..) => self.registry.refresh_layouts(&self.settings),
            HudAction::FocusLost => {
                tracing::debug!("Focus lost, releasing held inputs");
                self.presses.clear();
            }
            HudAction::Back => match self.context {
                InputContext::Hud => self.quit(),
                InputContext::EditLayout => self.leave_editor(),
                InputContext::Binding => self.context = InputContext::EditLayout,
            },
            HudAction::Quit => self.quit(),
        }
    }

    /// Recomputes layouts and samples click rates after the frame's input.
    pub fn update(&mut self) {
        self.registry.refresh_layouts(&self.settings);
        self.cps = [
            self.clicks.rate(MouseSide::Left),
            self.clicks.rate(MouseSide::Right),
        ];

        let now = self.now();
        self.notices.prune(now);
    }

    fn input_pressed(&mut self, id: InputId) {
        if !self.presses.press(&id) {
            return;
        }

        match self.context {
            InputContext::Hud => match id.as_str() {
                input::ATTACK => self.clicks.record_click(MouseSide::Left),
                input::USE => self.clicks.record_click(MouseSide::Right),
                _ => {}
            },
            InputContext::Binding => {
                let created = self.registry.create_from_binding(id).map(|_| ());
                if let Err(err) = created {
                    self.report(&err);
                }
                self.context = InputContext::EditLayout;
            }
            InputContext::EditLayout => {}
        }
    }

    /// Ends any drag, saves every group and stops the frame loop.
    fn quit(&mut self) {
        let errors = self.interaction.close(&mut self.registry);
        self.report_all(errors);
        self.running = false;
    }

    fn enter_editor(&mut self) {
        tracing::debug!("Entering layout editor");
        self.context = InputContext::EditLayout;
    }

    fn leave_editor(&mut self) {
        let errors = self.interaction.close(&mut self.registry);
        self.report_all(errors);
        self.context = InputContext::Hud;
    }

    fn begin_binding(&mut self) {
        if self.context != InputContext::EditLayout {
            return;
        }
        if self.registry.len() >= MAX_OVERLAYS {
            self.report(&HudError::OverlayLimitReached(MAX_OVERLAYS));
            return;
        }
        self.context = InputContext::Binding;
    }

    fn delete_hovered(&mut self) {
        if self.context != InputContext::EditLayout {
            return;
        }

        let (x, y) = self.pointer;
        let Some(name) = self.registry.group_at(x, y).map(|g| g.name().to_string()) else {
            return;
        };

        if self.interaction.dragged().is_some_and(|dragged| dragged == name) {
            self.interaction.pointer_up(&mut self.registry);
        }
        self.registry.delete(&name);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::click_rate::tests::ManualClock;
    use crate::geometry::{Rectangle, Viewport};
    use crate::hud::registry::tests::{registry_with, ReadOnlyStore};
    use crate::hud::Rgb;
    use crate::save::MemoryStore;
    use crate::settings::CpsDisplay;

    fn app() -> (HudApp<ManualClock>, ManualClock) {
        let clock = ManualClock::default();
        let registry = registry_with(MemoryStore::new(), Viewport::new(800, 600));
        let app = HudApp::with_clock(registry, HudSettings::default(), clock.clone());
        (app, clock)
    }

    fn click(app: &mut HudApp<ManualClock>) {
        app.apply(HudAction::InputPressed(InputId::new(input::ATTACK)));
        app.apply(HudAction::InputReleased(InputId::new(input::ATTACK)));
    }

    #[test]
    fn test_clicks_are_counted_in_hud() {
        let (mut app, clock) = app();

        click(&mut app);
        clock.set(500);
        click(&mut app);
        clock.set(600);
        app.update();
        assert_eq!(app.cps(MouseSide::Left), 2);
        assert_eq!(app.cps(MouseSide::Right), 0);

        clock.set(1600);
        app.update();
        assert_eq!(app.cps(MouseSide::Left), 0);
    }

    #[test]
    fn test_held_button_counts_once() {
        let (mut app, _clock) = app();
        let attack = InputId::new(input::ATTACK);

        app.apply(HudAction::InputPressed(attack.clone()));
        app.apply(HudAction::InputPressed(attack.clone()));
        app.update();

        assert_eq!(app.cps(MouseSide::Left), 1);
        assert!(app.is_held(&attack));
    }

    #[test]
    fn test_clicks_ignored_in_editor() {
        let (mut app, _clock) = app();
        app.apply(HudAction::ToggleEditMode);
        click(&mut app);
        app.update();

        assert_eq!(app.context(), InputContext::EditLayout);
        assert_eq!(app.cps(MouseSide::Left), 0);
    }

    #[test]
    fn test_binding_creates_group_and_returns_to_editor() {
        let (mut app, _clock) = app();
        app.apply(HudAction::ToggleEditMode);
        app.apply(HudAction::BeginBinding);
        assert_eq!(app.context(), InputContext::Binding);

        app.apply(HudAction::InputPressed(InputId::keyboard("q")));
        assert_eq!(app.context(), InputContext::EditLayout);
        assert_eq!(app.registry().len(), 2);
        assert!(app.notices().is_empty());
    }

    #[test]
    fn test_binding_busy_input_leaves_notice() {
        let (mut app, _clock) = app();
        app.apply(HudAction::ToggleEditMode);
        app.apply(HudAction::BeginBinding);
        app.apply(HudAction::InputPressed(InputId::new(input::JUMP)));

        assert_eq!(app.registry().len(), 1);
        assert_eq!(app.notices().active().count(), 1);
    }

    #[test]
    fn test_begin_binding_refused_at_limit() {
        let (mut app, _clock) = app();
        app.apply(HudAction::ToggleEditMode);

        for key in ["q", "e", "r", "f"] {
            app.apply(HudAction::BeginBinding);
            app.apply(HudAction::InputPressed(InputId::keyboard(key)));
            app.update();
        }
        assert_eq!(app.registry().len(), MAX_OVERLAYS);

        app.apply(HudAction::BeginBinding);
        assert_eq!(app.context(), InputContext::EditLayout);
        let notice = app.notices().active().next().unwrap();
        assert!(notice.message.contains("limit"));
    }

    #[test]
    fn test_drag_and_scroll_in_editor() {
        let (mut app, _clock) = app();
        app.apply(HudAction::ToggleEditMode);

        app.apply(HudAction::PointerDown(10, 10));
        app.apply(HudAction::PointerMoved { x: 60, y: 30, dx: 50, dy: 20 });
        app.apply(HudAction::Scroll(2.0));
        assert_eq!(app.dragged(), Some("default"));
        app.apply(HudAction::PointerUp);
        app.update();

        let group = app.registry().default_group().unwrap();
        assert_eq!(group.scale(), 1.2);
        assert_eq!((group.rectangle().x, group.rectangle().y), (55, 25));
        assert_eq!(app.dragged(), None);
    }

    #[test]
    fn test_leaving_editor_saves() {
        let (mut app, _clock) = app();
        app.apply(HudAction::ToggleEditMode);
        app.apply(HudAction::Back);

        assert_eq!(app.context(), InputContext::Hud);
        assert_eq!(app.registry().store().list().unwrap(), vec!["default"]);
    }

    #[test]
    fn test_save_failure_becomes_notice_and_expires() {
        let clock = ManualClock::default();
        let registry = registry_with(ReadOnlyStore, Viewport::new(800, 600));
        let mut app = HudApp::with_clock(registry, HudSettings::default(), clock.clone());

        app.apply(HudAction::Quit);
        assert!(!app.is_running());
        assert_eq!(app.notices().active().next().unwrap().title, "Warning");

        clock.set(3000);
        app.update();
        assert!(app.notices().is_empty());
    }

    #[test]
    fn test_delete_hovered_custom_group() {
        let (mut app, _clock) = app();
        app.apply(HudAction::ToggleEditMode);
        app.apply(HudAction::BeginBinding);
        app.apply(HudAction::InputPressed(InputId::keyboard("q")));
        app.update();

        let rect = app.registry().get("q").unwrap().rectangle();
        assert_eq!(rect, Rectangle::new(85, 5, 26, 26));

        app.apply(HudAction::PointerMoved { x: 10, y: 10, dx: 0, dy: 0 });
        app.apply(HudAction::DeleteHovered);
        assert_eq!(app.registry().len(), 2);

        app.apply(HudAction::PointerMoved { x: 90, y: 10, dx: 0, dy: 0 });
        app.apply(HudAction::DeleteHovered);
        assert_eq!(app.registry().len(), 1);
    }

    #[test]
    fn test_display_toggles_and_face_options() {
        let (mut app, _clock) = app();
        app.apply(HudAction::CycleCpsDisplay);
        app.apply(HudAction::ToggleKeyDisplay);
        click(&mut app);
        app.update();

        assert_eq!(app.settings().cps_display, CpsDisplay::OnClick);
        assert_eq!(app.settings().key_display, KeyDisplay::Arrows);

        let group = app.registry().default_group().unwrap();
        let mouse = group.widgets().find(|w| w.is_bound_to(&InputId::new(input::ATTACK))).unwrap();
        assert_eq!(app.face_options(mouse).cps, 1);
    }

    #[test]
    fn test_focus_loss_releases_held_inputs() {
        let (mut app, clock) = app();
        let attack = InputId::new(input::ATTACK);

        app.apply(HudAction::InputPressed(attack.clone()));
        app.apply(HudAction::FocusLost);
        assert!(!app.is_held(&attack));

        clock.set(100);
        app.apply(HudAction::InputPressed(attack.clone()));
        app.update();
        assert_eq!(app.cps(MouseSide::Left), 2);
    }

    #[test]
    fn test_rainbow_colors_follow_clock() {
        let (mut app, clock) = app();
        let group = app.registry().default_group().unwrap().clone();
        assert_eq!(app.cell_colors(&group, 0.5), GroupColors::default());

        app.apply(HudAction::ToggleRainbow);
        assert!(app.settings().rainbow);

        let first = app.cell_colors(&group, 0.0);
        assert_eq!(first.text, Rgb(255, 0, 0));
        assert_eq!(first.click, first.text);
        assert_eq!(first.background, GroupColors::default().background);
        assert_ne!(app.cell_colors(&group, 0.5).text, first.text);

        clock.set(500);
        assert_ne!(app.cell_colors(&group, 0.0).text, first.text);

        app.apply(HudAction::ToggleRainbow);
        assert_eq!(app.cell_colors(&group, 0.0), GroupColors::default());
    }

    #[test]
    fn test_back_from_hud_stops() {
        let (mut app, _clock) = app();
        app.apply(HudAction::Back);
        assert!(!app.is_running());
    }
}
