//! Save data types for overlay persistence
//!
//! Every overlay is stored as its own JSON record wrapped in a small
//! versioned envelope.

use crate::hud::OverlayGroup;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Current overlay record version
pub const CURRENT_SAVE_VERSION: u32 = 1;

/// Errors from the persistence layer
#[derive(Debug, Error)]
pub enum SaveError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("unsupported save version {0}")]
    InvalidVersion(u32),

    #[error("no stored record '{0}'")]
    NotFound(String),

    #[error("record id '{0}' is not a plain file name")]
    InvalidRecordId(String),

    #[error("overlay scale {0} is out of range")]
    InvalidScale(f64),
}

/// On-disk envelope of one overlay (write side).
#[derive(Debug, Serialize)]
pub(crate) struct OverlayRecordRef<'a> {
    pub version: u32,
    pub overlay: &'a OverlayGroup,
}

/// On-disk envelope of one overlay (read side).
#[derive(Debug, Deserialize)]
pub(crate) struct OverlayRecord {
    pub version: u32,
    pub overlay: OverlayGroup,
}
