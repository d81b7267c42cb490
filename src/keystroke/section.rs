use super::widget::Widget;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Vertical gap (times scale) below every row.
pub const ROW_GAP: f64 = 1.5;

/// The parts of an overlay, in the order they are laid out.
///
/// The derived `Ord` follows declaration order, so a `BTreeMap` keyed by
/// this enum iterates movement, mouse, jump.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionKind {
    Movement,
    Mouse,
    Jump,
}

impl SectionKind {
    pub const ALL: [SectionKind; 3] = [SectionKind::Movement, SectionKind::Mouse, SectionKind::Jump];

    /// Horizontal gap (times scale) after every widget in this section.
    pub fn column_gap(self) -> f64 {
        match self {
            SectionKind::Mouse => 2.0,
            SectionKind::Movement | SectionKind::Jump => 1.5,
        }
    }
}

/// One horizontal line of widgets.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Row {
    widgets: Vec<Widget>,
}

impl Row {
    pub fn new(widgets: Vec<Widget>) -> Self {
        Row { widgets }
    }

    pub fn widgets(&self) -> &[Widget] {
        &self.widgets
    }

    pub fn widgets_mut(&mut self) -> &mut [Widget] {
        &mut self.widgets
    }

    pub fn is_empty(&self) -> bool {
        self.widgets.is_empty()
    }

    /// Distance from the top of this row to the top of the next one.
    ///
    /// Follows the first widget's height; an empty row takes no space.
    pub fn height_advance(&self, scale: f64) -> f64 {
        self.widgets
            .first()
            .map(|widget| widget.height() + ROW_GAP * scale)
            .unwrap_or(0.0)
    }
}

/// Ordered mapping from section to its rows.
pub type Sections = BTreeMap<SectionKind, Vec<Row>>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keystroke::input;
    use crate::keystroke::widget::WidgetKind;

    #[test]
    fn test_sections_iterate_in_declaration_order() {
        let mut sections = Sections::new();
        sections.insert(SectionKind::Jump, Vec::new());
        sections.insert(SectionKind::Movement, Vec::new());
        sections.insert(SectionKind::Mouse, Vec::new());

        let order: Vec<_> = sections.keys().copied().collect();
        assert_eq!(order, SectionKind::ALL.to_vec());
    }

    #[test]
    fn test_row_height_advance() {
        let row = Row::new(vec![Widget::default_input(input::ATTACK, WidgetKind::MouseLeft)]);
        assert_eq!(row.height_advance(1.0), 28.5);
        assert_eq!(Row::default().height_advance(1.0), 0.0);
    }

    #[test]
    fn test_sections_serialize_as_named_keys() {
        let mut sections = Sections::new();
        sections.insert(SectionKind::Jump, vec![Row::new(vec![Widget::barrier()])]);

        let json = serde_json::to_string(&sections).unwrap();
        assert!(json.starts_with("{\"jump\":"));

        let back: Sections = serde_json::from_str(&json).unwrap();
        assert_eq!(back, sections);
    }
}
