use super::input::{self, InputId};
use crate::click_rate::MouseSide;
use crate::host::{InputCatalog, TextMeasure};
use crate::settings::{CpsDisplay, KeyDisplay};
use serde::{Deserialize, Serialize};

/// Horizontal padding added around the label of a text-sized widget.
pub const TEXT_PADDING: f64 = 5.0;

/// Labels up to this many characters fit the fixed base width.
pub const MAX_FIXED_LABEL_LEN: usize = 3;

/// What a widget looks like and how big it is by default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WidgetKind {
    /// A keyboard key (movement keys and every custom binding)
    Key,
    MouseLeft,
    MouseRight,
    /// The wide jump bar
    Spacebar,
}

impl WidgetKind {
    /// Height at scale 1.0.
    pub fn base_height(self) -> f64 {
        match self {
            WidgetKind::Key => 25.0,
            WidgetKind::MouseLeft | WidgetKind::MouseRight => 27.0,
            WidgetKind::Spacebar => 15.0,
        }
    }

    /// Width at scale 1.0.
    pub fn base_width(self) -> f64 {
        match self {
            WidgetKind::Key => 25.0,
            WidgetKind::MouseLeft | WidgetKind::MouseRight => 38.0,
            WidgetKind::Spacebar => 78.0,
        }
    }

    /// The mouse button whose click rate this widget shows, if any.
    pub fn mouse_side(self) -> Option<MouseSide> {
        match self {
            WidgetKind::MouseLeft => Some(MouseSide::Left),
            WidgetKind::MouseRight => Some(MouseSide::Right),
            _ => None,
        }
    }
}

/// The input a widget shows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "input", rename_all = "snake_case")]
pub enum Binding {
    /// Takes up layout space but is never drawn or clickable
    Barrier,
    Input(InputId),
}

/// Display options that decide what text a widget shows this frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FaceOptions {
    pub key_display: KeyDisplay,
    pub cps_display: CpsDisplay,
    /// Current click rate of the widget's mouse button (ignored otherwise)
    pub cps: u32,
}

/// One keystroke cell of an overlay.
///
/// Width and height are stored already multiplied by the owning overlay's
/// scale. `owner` names the overlay the widget belongs to; it is a lookup key
/// into the registry, not a reference, and is reassigned on registration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Widget {
    binding: Binding,
    kind: WidgetKind,
    width: f64,
    height: f64,
    is_default: bool,
    #[serde(skip)]
    owner: Option<String>,
}

impl Widget {
    /// A spacing-only cell with the size of a key.
    pub fn barrier() -> Self {
        Self::sized(Binding::Barrier, WidgetKind::Key, true)
    }

    /// A cell of the default overlay; always uses the base size of `kind`.
    pub fn default_input(input: impl Into<InputId>, kind: WidgetKind) -> Self {
        Self::sized(Binding::Input(input.into()), kind, true)
    }

    /// A user-bound key cell. Long labels widen the cell to fit the text.
    pub fn custom(input: InputId, catalog: &dyn InputCatalog, measure: &dyn TextMeasure) -> Self {
        let mut widget = Self::sized(Binding::Input(input), WidgetKind::Key, false);
        widget.rescale(1.0, catalog, measure);
        widget
    }

    fn sized(binding: Binding, kind: WidgetKind, is_default: bool) -> Self {
        Widget {
            binding,
            kind,
            width: kind.base_width(),
            height: kind.base_height(),
            is_default,
            owner: None,
        }
    }

    pub fn binding(&self) -> &Binding {
        &self.binding
    }

    /// The bound input, `None` for barriers.
    pub fn input(&self) -> Option<&InputId> {
        match &self.binding {
            Binding::Barrier => None,
            Binding::Input(id) => Some(id),
        }
    }

    pub fn is_barrier(&self) -> bool {
        matches!(self.binding, Binding::Barrier)
    }

    pub fn is_bound_to(&self, input: &InputId) -> bool {
        self.input() == Some(input)
    }

    pub fn kind(&self) -> WidgetKind {
        self.kind
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn is_default(&self) -> bool {
        self.is_default
    }

    /// Name of the overlay this widget is registered in.
    pub fn owner(&self) -> Option<&str> {
        self.owner.as_deref()
    }

    pub(crate) fn set_owner(&mut self, overlay_name: &str) {
        self.owner = Some(overlay_name.to_string());
    }

    /// The uppercased display name of the bound input.
    pub fn label(&self, catalog: &dyn InputCatalog) -> String {
        self.input()
            .map(|id| catalog.display_name(id).to_uppercase())
            .unwrap_or_default()
    }

    /// Whether this widget's width follows its label instead of the base width.
    pub fn sized_by_text(&self, label: &str) -> bool {
        !self.is_default && label.chars().count() > MAX_FIXED_LABEL_LEN
    }

    /// Recomputes width and height for a new overlay scale.
    pub fn rescale(&mut self, scale: f64, catalog: &dyn InputCatalog, measure: &dyn TextMeasure) {
        self.height = self.kind.base_height() * scale;

        let label = self.label(catalog);
        self.width = if self.sized_by_text(&label) {
            measure.measure_width(&label, scale) + TEXT_PADDING * scale
        } else {
            self.kind.base_width() * scale
        };
    }

    /// Lines of text drawn on this widget, top to bottom.
    ///
    /// Barriers and the space bar show no text.
    pub fn face_text(&self, catalog: &dyn InputCatalog, options: FaceOptions) -> Vec<String> {
        let Some(id) = self.input() else {
            return Vec::new();
        };

        match self.kind {
            WidgetKind::Key => {
                if options.key_display == KeyDisplay::Arrows {
                    let arrow = match id.as_str() {
                        input::FORWARD => Some("^"),
                        input::LEFT => Some("<"),
                        input::BACK => Some("v"),
                        input::RIGHT => Some(">"),
                        _ => None,
                    };
                    if let Some(arrow) = arrow {
                        return vec![arrow.to_string()];
                    }
                }
                vec![self.label(catalog)]
            }
            WidgetKind::MouseLeft | WidgetKind::MouseRight => {
                let name = self.kind.mouse_side().map(MouseSide::label).unwrap_or_default();
                let rate = format!("{} CPS", options.cps);

                match options.cps_display {
                    CpsDisplay::Never => vec![name.to_string()],
                    CpsDisplay::OnClick if options.cps == 0 => vec![name.to_string()],
                    CpsDisplay::OnClick => vec![rate],
                    CpsDisplay::Always => vec![name.to_string(), rate],
                }
            }
            WidgetKind::Spacebar => Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::KeyNameCatalog;
    use crate::text::BitmapTextMeasure;

    fn options(cps_display: CpsDisplay, cps: u32) -> FaceOptions {
        FaceOptions {
            key_display: KeyDisplay::Letters,
            cps_display,
            cps,
        }
    }

    #[test]
    fn test_default_widgets_use_base_size() {
        let space = Widget::default_input(input::JUMP, WidgetKind::Spacebar);
        assert_eq!((space.height(), space.width()), (15.0, 78.0));

        let mouse = Widget::default_input(input::ATTACK, WidgetKind::MouseLeft);
        assert_eq!((mouse.height(), mouse.width()), (27.0, 38.0));
    }

    #[test]
    fn test_short_custom_label_keeps_base_width() {
        let widget = Widget::custom(InputId::keyboard("q"), &KeyNameCatalog, &BitmapTextMeasure);
        assert_eq!(widget.width(), 25.0);
        assert!(!widget.is_default());
    }

    #[test]
    fn test_long_custom_label_sizes_by_text() {
        let mut widget =
            Widget::custom(InputId::keyboard("left shift"), &KeyNameCatalog, &BitmapTextMeasure);
        // "LEFT SHIFT" = 10 glyphs * 6px + 5px padding
        assert_eq!(widget.width(), 65.0);

        widget.rescale(2.0, &KeyNameCatalog, &BitmapTextMeasure);
        assert_eq!(widget.width(), 130.0);
        assert_eq!(widget.height(), 50.0);
    }

    #[test]
    fn test_barrier_has_no_input_and_no_text() {
        let barrier = Widget::barrier();
        assert!(barrier.is_barrier());
        assert_eq!(barrier.input(), None);
        assert!(barrier.face_text(&KeyNameCatalog, options(CpsDisplay::Always, 3)).is_empty());
    }

    #[test]
    fn test_mouse_face_text_follows_cps_display() {
        let left = Widget::default_input(input::ATTACK, WidgetKind::MouseLeft);
        let catalog = KeyNameCatalog;

        assert_eq!(left.face_text(&catalog, options(CpsDisplay::Never, 4)), vec!["LMB"]);
        assert_eq!(left.face_text(&catalog, options(CpsDisplay::OnClick, 0)), vec!["LMB"]);
        assert_eq!(left.face_text(&catalog, options(CpsDisplay::OnClick, 4)), vec!["4 CPS"]);
        assert_eq!(
            left.face_text(&catalog, options(CpsDisplay::Always, 0)),
            vec!["LMB", "0 CPS"]
        );
    }

    #[test]
    fn test_arrow_display_for_movement_keys() {
        let forward = Widget::default_input(input::FORWARD, WidgetKind::Key);
        let custom = Widget::custom(InputId::keyboard("q"), &KeyNameCatalog, &BitmapTextMeasure);
        let arrows = FaceOptions {
            key_display: KeyDisplay::Arrows,
            cps_display: CpsDisplay::Always,
            cps: 0,
        };

        assert_eq!(forward.face_text(&KeyNameCatalog, arrows), vec!["^"]);
        assert_eq!(custom.face_text(&KeyNameCatalog, arrows), vec!["Q"]);
        assert_eq!(
            forward.face_text(&KeyNameCatalog, options(CpsDisplay::Always, 0)),
            vec!["W"]
        );
    }

    #[test]
    fn test_binding_round_trips_through_json() {
        let widget = Widget::custom(InputId::keyboard("q"), &KeyNameCatalog, &BitmapTextMeasure);
        let json = serde_json::to_string(&widget).unwrap();
        let back: Widget = serde_json::from_str(&json).unwrap();
        assert_eq!(back, widget);

        let barrier_json = serde_json::to_string(&Widget::barrier()).unwrap();
        assert!(barrier_json.contains("\"barrier\""));
    }
}
