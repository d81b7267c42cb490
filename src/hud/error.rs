use crate::keystroke::InputId;
use crate::save::SaveError;
use thiserror::Error;

/// Failures the HUD core reports to the user.
///
/// None of these are fatal; the host shows them as notices and carries on.
#[derive(Debug, Error)]
pub enum HudError {
    #[error("No free space on screen for a new overlay")]
    PlacementExhausted,

    #[error("Overlay limit reached ({0} overlays)")]
    OverlayLimitReached(usize),

    #[error("{0} is already shown in an overlay")]
    InputBusy(InputId),

    #[error("An overlay named {0} already exists")]
    DuplicateName(String),

    #[error("No overlay named {0}")]
    UnknownOverlay(String),

    #[error("Could not save overlay {name}: {source}")]
    PersistenceWriteFailed {
        name: String,
        #[source]
        source: SaveError,
    },
}
