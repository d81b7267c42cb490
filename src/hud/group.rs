use crate::geometry::Rectangle;
use crate::host::{InputCatalog, TextMeasure};
use crate::keystroke::{input, HudBuilder, InputId, SectionKind, Sections, Widget, WidgetKind};
use serde::{Deserialize, Serialize};

/// Name of the built-in movement/mouse/jump overlay.
pub const DEFAULT_GROUP_NAME: &str = "default";

/// Smallest overlay scale.
pub const MIN_SCALE: f64 = 1.0;
/// Largest overlay scale.
pub const MAX_SCALE: f64 = 3.0;
/// Scale change per scroll notch.
pub const SCALE_STEP: f64 = 0.1;

/// An RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb(pub u8, pub u8, pub u8);

/// Colors an overlay is drawn with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GroupColors {
    pub text: Rgb,
    /// Cell background while the input is held
    pub click: Rgb,
    pub background: Rgb,
}

impl Default for GroupColors {
    fn default() -> Self {
        GroupColors {
            text: Rgb(255, 255, 255),
            click: Rgb(71, 71, 71),
            background: Rgb(48, 48, 48),
        }
    }
}

/// Length of one full hue cycle of the rainbow effect.
pub const RAINBOW_PERIOD_MS: i64 = 1000;
/// Hue shift, in turns, across the full width of a group.
const RAINBOW_SPREAD: f64 = 0.4;

/// Rainbow color at `now_millis` for a cell `offset` (fraction of the group
/// width) from the group's left edge.
pub fn rainbow(now_millis: i64, offset: f64) -> Rgb {
    let phase = now_millis.rem_euclid(RAINBOW_PERIOD_MS) as f64 / RAINBOW_PERIOD_MS as f64;
    hue_to_rgb(phase + offset * RAINBOW_SPREAD)
}

/// Fully saturated, full brightness color of a hue given in turns.
fn hue_to_rgb(hue: f64) -> Rgb {
    let h = hue.rem_euclid(1.0) * 6.0;
    let rising = ((h - h.floor()) * 255.0).round() as u8;
    let falling = 255 - rising;

    match h.floor() as u8 % 6 {
        0 => Rgb(255, rising, 0),
        1 => Rgb(falling, 255, 0),
        2 => Rgb(0, 255, rising),
        3 => Rgb(0, falling, 255),
        4 => Rgb(rising, 0, 255),
        _ => Rgb(255, 0, falling),
    }
}

/// One placeable cluster of keystroke widgets.
///
/// The rectangle's width and height are recomputed from the widgets every
/// frame (see [`crate::hud::measure_group`]); only the position is really
/// owned by the group.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OverlayGroup {
    name: String,
    rectangle: Rectangle,
    scale: f64,
    custom: bool,
    sections: Sections,
    #[serde(default)]
    colors: GroupColors,
    /// Last position known to be fully on screen
    last_good: (i32, i32),
    #[serde(skip)]
    dragging: bool,
}

impl OverlayGroup {
    pub fn new(name: impl Into<String>, sections: Sections, rectangle: Rectangle, custom: bool) -> Self {
        OverlayGroup {
            name: name.into(),
            rectangle,
            scale: MIN_SCALE,
            custom,
            sections,
            colors: GroupColors::default(),
            last_good: (rectangle.x, rectangle.y),
            dragging: false,
        }
    }

    /// The built-in overlay: WASD, both mouse buttons and the space bar.
    pub fn default_layout() -> Self {
        let sections = HudBuilder::new()
            .section(SectionKind::Movement)
            .row(vec![
                Widget::barrier(),
                Widget::default_input(input::FORWARD, WidgetKind::Key),
                Widget::barrier(),
            ])
            .row(vec![
                Widget::default_input(input::LEFT, WidgetKind::Key),
                Widget::default_input(input::BACK, WidgetKind::Key),
                Widget::default_input(input::RIGHT, WidgetKind::Key),
            ])
            .section(SectionKind::Mouse)
            .row(vec![
                Widget::default_input(input::ATTACK, WidgetKind::MouseLeft),
                Widget::default_input(input::USE, WidgetKind::MouseRight),
            ])
            .section(SectionKind::Jump)
            .row(vec![Widget::default_input(input::JUMP, WidgetKind::Spacebar)])
            .build();

        OverlayGroup::new(DEFAULT_GROUP_NAME, sections, Rectangle::new(5, 5, 75, 1), false)
    }

    /// A one-key custom overlay for `input`, named after the key.
    pub fn for_binding(
        input: InputId,
        catalog: &dyn InputCatalog,
        measure: &dyn TextMeasure,
    ) -> Self {
        let name = catalog.display_name(&input);
        let widget = Widget::custom(input, catalog, measure);
        let rectangle = Rectangle::new(5, 5, widget.width() as i32, widget.height() as i32);
        let sections = HudBuilder::new()
            .section(SectionKind::Movement)
            .row(vec![widget])
            .build();

        OverlayGroup::new(name, sections, rectangle, true)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Case-insensitive name comparison.
    pub fn name_matches(&self, name: &str) -> bool {
        self.name.to_lowercase() == name.to_lowercase()
    }

    /// Key of this group in an [`crate::save::OverlayStore`].
    ///
    /// The lowercased name, percent-encoded so that it is always a single
    /// plain file name (no separators, no dots).
    pub fn record_id(&self) -> String {
        urlencoding::encode(&self.name.to_lowercase()).replace('.', "%2E")
    }

    pub fn rectangle(&self) -> Rectangle {
        self.rectangle
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }

    pub fn is_custom(&self) -> bool {
        self.custom
    }

    pub fn sections(&self) -> &Sections {
        &self.sections
    }

    pub fn colors(&self) -> &GroupColors {
        &self.colors
    }

    pub fn last_good_position(&self) -> (i32, i32) {
        self.last_good
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// Every widget, barriers included, in layout order.
    pub fn widgets(&self) -> impl Iterator<Item = &Widget> {
        self.sections
            .values()
            .flat_map(|rows| rows.iter())
            .flat_map(|row| row.widgets().iter())
    }

    pub(crate) fn widgets_mut(&mut self) -> impl Iterator<Item = &mut Widget> {
        self.sections
            .values_mut()
            .flat_map(|rows| rows.iter_mut())
            .flat_map(|row| row.widgets_mut().iter_mut())
    }

    /// Whether any non-barrier widget shows `input`.
    pub fn has_binding(&self, input: &InputId) -> bool {
        self.widgets().any(|widget| widget.is_bound_to(input))
    }

    pub(crate) fn assign_owner(&mut self) {
        let name = self.name.clone();
        for widget in self.widgets_mut() {
            widget.set_owner(&name);
        }
    }

    pub(crate) fn move_to(&mut self, x: i32, y: i32) {
        self.rectangle = self.rectangle.at(x, y);
    }

    pub(crate) fn set_rectangle(&mut self, rectangle: Rectangle) {
        self.rectangle = rectangle;
    }

    pub(crate) fn remember_position(&mut self) {
        self.last_good = (self.rectangle.x, self.rectangle.y);
    }

    pub(crate) fn set_dragging(&mut self, dragging: bool) {
        self.dragging = dragging;
    }

    /// Sets the scale and resizes every widget to match.
    pub(crate) fn apply_scale(
        &mut self,
        scale: f64,
        catalog: &dyn InputCatalog,
        measure: &dyn TextMeasure,
    ) {
        self.scale = scale;
        for widget in self.widgets_mut() {
            widget.rescale(scale, catalog, measure);
        }
    }
}

/// The scale one scroll step away from `scale`, if it stays in range.
///
/// The result is rounded to one decimal so repeated steps don't drift.
pub fn stepped_scale(scale: f64, delta: f64) -> Option<f64> {
    let next = ((scale + delta * SCALE_STEP) * 10.0).round() / 10.0;
    (MIN_SCALE..=MAX_SCALE).contains(&next).then_some(next)
}
