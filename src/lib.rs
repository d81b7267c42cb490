//! Keystroke HUD
//!
//! Tracks key and mouse presses and shows them as movable overlay groups of
//! keystroke widgets, with a clicks-per-second readout on the mouse buttons.
//!
//! # Architecture
//!
//! - `geometry` / `placement`: Rectangles, viewport clamping and the free-slot scan
//! - `click_rate`: Sliding one-second click window
//! - `keystroke`: Widgets, sections and rows
//! - `hud`: Overlay groups, the registry, layout and the drag/scroll controller
//! - `save`: Overlay records and stores
//! - `host`: Services borrowed from the host (viewport, text metrics, input names)
//! - `app` / `input_system`: Frame driver and host-neutral input actions
//! - `render`: SDL2 drawing (feature `sdl`)

pub mod app;
pub mod click_rate;
pub mod geometry;
pub mod host;
pub mod hud;
pub mod input_system;
pub mod keystroke;
pub mod logging;
pub mod placement;
#[cfg(feature = "sdl")]
pub mod render;
pub mod save;
pub mod settings;
pub mod text;
