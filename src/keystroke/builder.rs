use super::section::{Row, SectionKind, Sections};
use super::widget::Widget;

/// Builds the section/row layout of an overlay.
///
/// # Example
///
/// ```rust
/// use keystroke_hud::keystroke::{input, HudBuilder, SectionKind, Widget, WidgetKind};
///
/// let sections = HudBuilder::new()
///     .section(SectionKind::Mouse)
///     .row(vec![
///         Widget::default_input(input::ATTACK, WidgetKind::MouseLeft),
///         Widget::default_input(input::USE, WidgetKind::MouseRight),
///     ])
///     .build();
///
/// assert_eq!(sections[&SectionKind::Mouse][0].widgets().len(), 2);
/// ```
#[derive(Debug, Default)]
pub struct HudBuilder {
    sections: Sections,
    current: Option<SectionKind>,
}

impl HudBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts (or resets) a section; following rows are added to it.
    pub fn section(mut self, kind: SectionKind) -> Self {
        self.sections.insert(kind, Vec::new());
        self.current = Some(kind);
        self
    }

    /// Appends a row to the current section (movement if none was started).
    pub fn row(mut self, widgets: Vec<Widget>) -> Self {
        let kind = self.current.unwrap_or(SectionKind::Movement);
        self.sections.entry(kind).or_default().push(Row::new(widgets));
        self.current = Some(kind);
        self
    }

    pub fn build(self) -> Sections {
        self.sections
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rows_go_to_current_section() {
        let sections = HudBuilder::new()
            .section(SectionKind::Movement)
            .row(vec![Widget::barrier()])
            .row(vec![Widget::barrier(), Widget::barrier()])
            .section(SectionKind::Jump)
            .row(vec![Widget::barrier()])
            .build();

        assert_eq!(sections[&SectionKind::Movement].len(), 2);
        assert_eq!(sections[&SectionKind::Jump].len(), 1);
        assert!(!sections.contains_key(&SectionKind::Mouse));
    }

    #[test]
    fn test_row_without_section_defaults_to_movement() {
        let sections = HudBuilder::new().row(vec![Widget::barrier()]).build();
        assert_eq!(sections[&SectionKind::Movement].len(), 1);
    }
}
