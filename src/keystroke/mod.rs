//! Keystroke widgets and the section/row structure that holds them
//!
//! # Architecture
//!
//! - `input`: Input descriptors (`InputId`) and key naming helpers
//! - `widget`: A single keystroke cell (`Widget`) and its sizing rules
//! - `section`: Section kinds and rows (`Sections` is an ordered map)
//! - `builder`: Fluent `HudBuilder` for assembling overlay layouts

pub mod builder;
pub mod input;
pub mod section;
pub mod widget;

pub use builder::HudBuilder;
pub use input::InputId;
pub use section::{Row, SectionKind, Sections, ROW_GAP};
pub use widget::{Binding, FaceOptions, Widget, WidgetKind};
