//! Overlay groups and everything that moves them around
//!
//! # Architecture
//!
//! - `group`: `OverlayGroup`, the default layout and scale limits
//! - `layout`: Per-frame measurement of a group's cells and size
//! - `registry`: `OverlayRegistry`, the owner of every live group
//! - `interaction`: Drag/scroll state machine for the layout editor
//! - `notice`: Timed user-facing messages
//! - `error`: `HudError`
//!
//! Input is applied first, then `OverlayRegistry::refresh_layouts`, then
//! rendering; renderers only read.

pub mod error;
pub mod group;
pub mod interaction;
pub mod layout;
pub mod notice;
pub mod registry;

pub use error::HudError;
pub use group::{
    rainbow, GroupColors, OverlayGroup, Rgb, DEFAULT_GROUP_NAME, MAX_SCALE, MIN_SCALE,
    RAINBOW_PERIOD_MS, SCALE_STEP,
};
pub use interaction::{InteractionController, InteractionState};
pub use layout::{measure_group, GroupLayout, PlacedWidget};
pub use notice::{Notice, NoticeBoard, NOTICE_LIFETIME_MS};
pub use registry::{LoadReport, OverlayRegistry, MAX_OVERLAYS};
