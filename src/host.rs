//! Services the HUD core borrows from its host application
//!
//! The core never reaches for global state. Everything it needs from the
//! outside world (screen size, text metrics, input names) comes through the
//! three small traits in this module, bundled into a [`Host`] that is handed
//! to the [`crate::hud::OverlayRegistry`] at construction.
//!
//! # Example
//!
//! ```rust
//! use keystroke_hud::geometry::Viewport;
//! use keystroke_hud::host::{Host, KeyNameCatalog};
//! use keystroke_hud::text::BitmapTextMeasure;
//!
//! let host = Host::new(Viewport::new(854, 480), BitmapTextMeasure, KeyNameCatalog);
//! assert_eq!(host.viewport.current_size().width, 854);
//! ```

use crate::geometry::Viewport;
use crate::keystroke::input::{self, InputId};
use std::cell::Cell;
use std::rc::Rc;

/// Reports the current screen size.
pub trait ViewportProvider {
    fn current_size(&self) -> Viewport;
}

/// Measures rendered text width in pixels at a given scale.
pub trait TextMeasure {
    fn measure_width(&self, text: &str, scale: f64) -> f64;
}

/// Maps input descriptors to human readable names.
pub trait InputCatalog {
    fn display_name(&self, input: &InputId) -> String;
}

/// A fixed viewport size.
impl ViewportProvider for Viewport {
    fn current_size(&self) -> Viewport {
        *self
    }
}

/// Viewport size shared between the host (which updates it on window resize)
/// and the HUD core (which reads it).
#[derive(Debug, Clone)]
pub struct SharedViewport(Rc<Cell<Viewport>>);

impl SharedViewport {
    pub fn new(viewport: Viewport) -> Self {
        SharedViewport(Rc::new(Cell::new(viewport)))
    }

    pub fn set(&self, viewport: Viewport) {
        self.0.set(viewport);
    }

    pub fn get(&self) -> Viewport {
        self.0.get()
    }
}

impl ViewportProvider for SharedViewport {
    fn current_size(&self) -> Viewport {
        self.get()
    }
}

/// Names the default inputs and derives names for raw keyboard keys.
#[derive(Debug, Clone, Copy, Default)]
pub struct KeyNameCatalog;

impl InputCatalog for KeyNameCatalog {
    fn display_name(&self, id: &InputId) -> String {
        let name = match id.as_str() {
            input::FORWARD => "W",
            input::LEFT => "A",
            input::BACK => "S",
            input::RIGHT => "D",
            input::ATTACK => "LMB",
            input::USE => "RMB",
            input::JUMP => "Space",
            _ => {
                return input::keyboard_key_name(id).unwrap_or_else(|| id.to_string());
            }
        };
        name.to_string()
    }
}

/// The host services used by the HUD core.
pub struct Host {
    pub viewport: Box<dyn ViewportProvider>,
    pub text: Box<dyn TextMeasure>,
    pub inputs: Box<dyn InputCatalog>,
}

impl Host {
    pub fn new(
        viewport: impl ViewportProvider + 'static,
        text: impl TextMeasure + 'static,
        inputs: impl InputCatalog + 'static,
    ) -> Self {
        Host {
            viewport: Box::new(viewport),
            text: Box::new(text),
            inputs: Box::new(inputs),
        }
    }
}
