use crate::keystroke::InputId;
use std::collections::HashSet;

/// Everything the HUD reacts to, independent of the windowing library.
///
/// The host translates raw events into these; [`crate::app::HudApp::apply`]
/// executes them.
#[derive(Debug, Clone, PartialEq)]
pub enum HudAction {
    // === Tracked inputs ===
    InputPressed(InputId),
    InputReleased(InputId),

    // === Pointer (layout editor) ===
    PointerDown(i32, i32),
    /// Position and the movement since the last event
    PointerMoved { x: i32, y: i32, dx: i32, dy: i32 },
    PointerUp,
    /// Wheel notches, positive away from the user
    Scroll(f64),

    // === Editor ===
    ToggleEditMode,
    BeginBinding,
    DeleteHovered,
    SaveLayout,

    // === Display settings ===
    CycleCpsDisplay,
    ToggleKeyDisplay,
    ToggleRainbow,

    // === System ===
    ViewportResized(i32, i32),
    /// The window stopped receiving input; every hold is released
    FocusLost,
    Back,
    Quit,
}

/// Which screen input is currently routed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputContext {
    /// Overlays shown over the host; clicks are counted
    #[default]
    Hud,
    /// Overlays can be dragged, scaled and deleted
    EditLayout,
    /// The next pressed input becomes a new overlay
    Binding,
}

/// Remembers which inputs are held so a press only counts on its leading
/// edge.
#[derive(Debug, Default)]
pub struct PressTracker {
    held: HashSet<InputId>,
}

impl PressTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks `input` held. Returns `true` only if it wasn't held already.
    pub fn press(&mut self, input: &InputId) -> bool {
        self.held.insert(input.clone())
    }

    pub fn release(&mut self, input: &InputId) {
        self.held.remove(input);
    }

    pub fn is_held(&self, input: &InputId) -> bool {
        self.held.contains(input)
    }

    /// Forgets every hold (e.g. when the window loses focus).
    pub fn clear(&mut self) {
        self.held.clear();
    }
}

#[cfg(feature = "sdl")]
pub use sdl_input::InputSystem;

#[cfg(feature = "sdl")]
mod sdl_input {
    use super::{HudAction, InputContext};
    use crate::keystroke::{input, InputId};
    use sdl2::event::{Event, WindowEvent};
    use sdl2::keyboard::Keycode;
    use sdl2::mouse::MouseButton;
    use sdl2::EventPump;

    /// Translates SDL2 events into [`HudAction`]s for the current context.
    ///
    /// # Architecture
    ///
    /// 1. The host sets `context` from the app before polling
    /// 2. Every pending event is polled
    /// 3. Keys and buttons are routed by context: tracked inputs in the HUD,
    ///    pointer actions in the editor, any input while binding
    pub struct InputSystem {
        pub context: InputContext,
    }

    impl InputSystem {
        pub fn new() -> Self {
            InputSystem {
                context: InputContext::Hud,
            }
        }

        /// Drains the event pump.
        pub fn poll_events(&self, event_pump: &mut EventPump) -> Vec<HudAction> {
            let mut actions = Vec::new();

            for event in event_pump.poll_iter() {
                match event {
                    Event::Quit { .. } => actions.push(HudAction::Quit),
                    Event::Window {
                        win_event: WindowEvent::SizeChanged(width, height),
                        ..
                    } => actions.push(HudAction::ViewportResized(width, height)),
                    Event::Window {
                        win_event: WindowEvent::FocusLost,
                        ..
                    } => actions.push(HudAction::FocusLost),
                    Event::KeyDown {
                        keycode: Some(key),
                        repeat: false,
                        ..
                    } => self.handle_keydown(key, &mut actions),
                    Event::KeyUp {
                        keycode: Some(key), ..
                    } => actions.push(HudAction::InputReleased(key_input(key))),
                    Event::MouseButtonDown { mouse_btn, x, y, .. } => {
                        self.handle_mouse_down(mouse_btn, x, y, &mut actions)
                    }
                    Event::MouseButtonUp { mouse_btn, .. } => {
                        self.handle_mouse_up(mouse_btn, &mut actions)
                    }
                    Event::MouseMotion {
                        x, y, xrel, yrel, ..
                    } => actions.push(HudAction::PointerMoved {
                        x,
                        y,
                        dx: xrel,
                        dy: yrel,
                    }),
                    Event::MouseWheel { y, .. } => actions.push(HudAction::Scroll(y as f64)),
                    _ => {}
                }
            }

            actions
        }

        fn handle_keydown(&self, key: Keycode, actions: &mut Vec<HudAction>) {
            match self.context {
                InputContext::Hud => match key {
                    Keycode::F2 => actions.push(HudAction::ToggleEditMode),
                    Keycode::F4 => actions.push(HudAction::CycleCpsDisplay),
                    Keycode::F6 => actions.push(HudAction::ToggleKeyDisplay),
                    Keycode::F7 => actions.push(HudAction::ToggleRainbow),
                    Keycode::Escape => actions.push(HudAction::Back),
                    _ => actions.push(HudAction::InputPressed(key_input(key))),
                },
                InputContext::EditLayout => match key {
                    Keycode::F2 | Keycode::Escape => actions.push(HudAction::Back),
                    Keycode::F3 => actions.push(HudAction::BeginBinding),
                    Keycode::F5 => actions.push(HudAction::SaveLayout),
                    Keycode::Delete => actions.push(HudAction::DeleteHovered),
                    _ => {}
                },
                InputContext::Binding => match key {
                    Keycode::Escape => actions.push(HudAction::Back),
                    _ => actions.push(HudAction::InputPressed(key_input(key))),
                },
            }
        }

        fn handle_mouse_down(
            &self,
            button: MouseButton,
            x: i32,
            y: i32,
            actions: &mut Vec<HudAction>,
        ) {
            if self.context == InputContext::EditLayout {
                if button == MouseButton::Left {
                    actions.push(HudAction::PointerDown(x, y));
                }
                return;
            }

            if let Some(input) = mouse_input(button) {
                actions.push(HudAction::InputPressed(input));
            }
        }

        fn handle_mouse_up(&self, button: MouseButton, actions: &mut Vec<HudAction>) {
            if button == MouseButton::Left {
                actions.push(HudAction::PointerUp);
            }
            if let Some(input) = mouse_input(button) {
                actions.push(HudAction::InputReleased(input));
            }
        }
    }

    impl Default for InputSystem {
        fn default() -> Self {
            Self::new()
        }
    }

    /// Input id of a keyboard key; WASD and space are the movement inputs.
    fn key_input(key: Keycode) -> InputId {
        let descriptor = match key {
            Keycode::W => input::FORWARD,
            Keycode::A => input::LEFT,
            Keycode::S => input::BACK,
            Keycode::D => input::RIGHT,
            Keycode::Space => input::JUMP,
            _ => return InputId::keyboard(&key.name()),
        };
        InputId::new(descriptor)
    }

    fn mouse_input(button: MouseButton) -> Option<InputId> {
        match button {
            MouseButton::Left => Some(InputId::new(input::ATTACK)),
            MouseButton::Right => Some(InputId::new(input::USE)),
            _ => None,
        }
    }
}
