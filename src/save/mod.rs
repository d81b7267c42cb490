//! Overlay persistence
//!
//! This module stores overlays as one JSON record per overlay:
//! - `types`: Record envelope and error types
//! - `store`: The `OverlayStore` trait plus directory and in-memory stores
//! - `saveable`: The serialize/deserialize pair for overlays
//!
//! # Example Usage
//!
//! ```rust
//! use keystroke_hud::save::{MemoryStore, OverlayStore};
//!
//! let mut store = MemoryStore::new();
//! store.write("default", b"{}").unwrap();
//! assert_eq!(store.list().unwrap(), vec!["default".to_string()]);
//! ```

pub mod saveable;
pub mod store;
pub mod types;

pub use saveable::Saveable;
pub use store::{DirectoryStore, MemoryStore, OverlayStore};
pub use types::{SaveError, CURRENT_SAVE_VERSION};
