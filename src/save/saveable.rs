//! Saveable trait for values stored as opaque records
//!
//! The overlay store only moves bytes around; this trait is the
//! serialize/deserialize pair that turns an overlay into those bytes and back.

use super::types::*;
use crate::hud::{OverlayGroup, MAX_SCALE, MIN_SCALE};

/// Trait for values that round-trip through a stored record
pub trait Saveable {
    /// Serialize the value into record bytes
    fn to_save_bytes(&self) -> Result<Vec<u8>, SaveError>;

    /// Rebuild a value from record bytes
    ///
    /// Transient state (drag mode, widget owners) is not restored; it is
    /// rebuilt when the value is registered.
    fn from_save_bytes(bytes: &[u8]) -> Result<Self, SaveError>
    where
        Self: Sized;
}

impl Saveable for OverlayGroup {
    fn to_save_bytes(&self) -> Result<Vec<u8>, SaveError> {
        let record = OverlayRecordRef {
            version: CURRENT_SAVE_VERSION,
            overlay: self,
        };
        Ok(serde_json::to_vec_pretty(&record)?)
    }

    fn from_save_bytes(bytes: &[u8]) -> Result<Self, SaveError> {
        let record: OverlayRecord = serde_json::from_slice(bytes)?;

        if record.version > CURRENT_SAVE_VERSION {
            return Err(SaveError::InvalidVersion(record.version));
        }

        let scale = record.overlay.scale();
        if !(MIN_SCALE..=MAX_SCALE).contains(&scale) {
            return Err(SaveError::InvalidScale(scale));
        }

        Ok(record.overlay)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Rectangle;
    use crate::keystroke::{input, HudBuilder, SectionKind, Widget, WidgetKind};

    fn sample() -> OverlayGroup {
        let sections = HudBuilder::new()
            .section(SectionKind::Mouse)
            .row(vec![Widget::default_input(input::ATTACK, WidgetKind::MouseLeft)])
            .build();
        OverlayGroup::new("sample", sections, Rectangle::new(40, 60, 38, 28), true)
    }

    #[test]
    fn test_record_is_versioned_json() {
        let bytes = sample().to_save_bytes().unwrap();
        let value: serde_json::Value = serde_json::from_slice(&bytes).unwrap();

        assert_eq!(value["version"], CURRENT_SAVE_VERSION);
        assert_eq!(value["overlay"]["name"], "sample");
        assert!(value["overlay"].get("dragging").is_none());
    }

    #[test]
    fn test_round_trip_keeps_layout_state() {
        let group = sample();
        let back = OverlayGroup::from_save_bytes(&group.to_save_bytes().unwrap()).unwrap();

        assert_eq!(back.name(), group.name());
        assert_eq!(back.rectangle(), group.rectangle());
        assert_eq!(back.scale(), group.scale());
        assert_eq!(back.sections(), group.sections());
    }

    #[test]
    fn test_newer_version_is_rejected() {
        let mut value: serde_json::Value =
            serde_json::from_slice(&sample().to_save_bytes().unwrap()).unwrap();
        value["version"] = serde_json::json!(CURRENT_SAVE_VERSION + 1);
        let bytes = serde_json::to_vec(&value).unwrap();

        assert!(matches!(
            OverlayGroup::from_save_bytes(&bytes),
            Err(SaveError::InvalidVersion(_))
        ));
    }

    #[test]
    fn test_scale_outside_limits_is_rejected() {
        let mut value: serde_json::Value =
            serde_json::from_slice(&sample().to_save_bytes().unwrap()).unwrap();

        for scale in [10.0, 0.5, -1.0] {
            value["overlay"]["scale"] = serde_json::json!(scale);
            let bytes = serde_json::to_vec(&value).unwrap();
            assert!(matches!(
                OverlayGroup::from_save_bytes(&bytes),
                Err(SaveError::InvalidScale(_))
            ));
        }

        value["overlay"]["scale"] = serde_json::json!(3.0);
        let bytes = serde_json::to_vec(&value).unwrap();
        assert_eq!(OverlayGroup::from_save_bytes(&bytes).unwrap().scale(), 3.0);
    }

    #[test]
    fn test_garbage_is_a_serialization_error() {
        assert!(matches!(
            OverlayGroup::from_save_bytes(b"{ \"version\": 1, \"overlay\": 7"),
            Err(SaveError::Serialization(_))
        ));
    }
}
