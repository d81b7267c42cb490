use super::group::OverlayGroup;
use crate::keystroke::{SectionKind, Widget};
use crate::settings::HudSettings;

/// A visible widget and its offset from the group's top-left corner.
#[derive(Debug, Clone, Copy)]
pub struct PlacedWidget<'a> {
    pub widget: &'a Widget,
    pub section: SectionKind,
    pub x: f64,
    pub y: f64,
}

/// Where every visible cell of a group goes this frame, and the group's size.
#[derive(Debug, Clone, Default)]
pub struct GroupLayout<'a> {
    pub cells: Vec<PlacedWidget<'a>>,
    pub width: i32,
    pub height: i32,
}

/// Lays out a group's rows.
///
/// Sections are walked in order; the default group skips the sections
/// switched off in `settings`. Barriers take space but produce no cell.
/// Width is the widest row; height is the summed row advance less one pixel
/// plus the whole part of the scale.
pub fn measure_group<'a>(group: &'a OverlayGroup, settings: &HudSettings) -> GroupLayout<'a> {
    let scale = group.scale();
    let mut cells = Vec::new();
    let mut widest = 0.0_f64;
    let mut y = 0.0_f64;

    for (&section, rows) in group.sections() {
        if !group.is_custom() && !settings.shows(section) {
            continue;
        }

        let gap = section.column_gap() * scale;
        for row in rows {
            let mut x = 0.0_f64;

            for widget in row.widgets() {
                if !widget.is_barrier() {
                    cells.push(PlacedWidget { widget, section, x, y });
                }
                x += widget.width() + gap;
            }

            widest = widest.max(x);
            y += row.height_advance(scale);
        }
    }

    GroupLayout {
        cells,
        width: widest as i32,
        height: y as i32 - 1 + scale as i32,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::KeyNameCatalog;
    use crate::keystroke::InputId;
    use crate::text::BitmapTextMeasure;

    #[test]
    fn test_default_group_size() {
        let group = OverlayGroup::default_layout();
        let layout = measure_group(&group, &HudSettings::default());

        // mouse row: 2 * (38 + 2)
        assert_eq!(layout.width, 80);
        // 26.5 + 26.5 + 28.5 + 16.5, minus one, plus scale
        assert_eq!(layout.height, 98);
        assert_eq!(layout.cells.len(), 7);
    }

    #[test]
    fn test_barrier_offsets_following_cell() {
        let group = OverlayGroup::default_layout();
        let layout = measure_group(&group, &HudSettings::default());

        let forward = layout.cells[0];
        assert_eq!(forward.section, SectionKind::Movement);
        assert_eq!((forward.x, forward.y), (26.5, 0.0));

        let space = layout.cells.last().unwrap();
        assert_eq!((space.x, space.y), (0.0, 81.5));
    }

    #[test]
    fn test_hidden_sections_take_no_space() {
        let group = OverlayGroup::default_layout();
        let settings = HudSettings {
            show_movement: false,
            show_spacebar: false,
            ..HudSettings::default()
        };
        let layout = measure_group(&group, &settings);

        assert_eq!(layout.cells.len(), 2);
        assert_eq!(layout.cells[0].y, 0.0);
        assert_eq!(layout.height, 28);
    }

    #[test]
    fn test_custom_group_ignores_section_toggles() {
        let group =
            OverlayGroup::for_binding(InputId::keyboard("q"), &KeyNameCatalog, &BitmapTextMeasure);
        let settings = HudSettings {
            show_movement: false,
            ..HudSettings::default()
        };
        let layout = measure_group(&group, &settings);

        assert_eq!(layout.cells.len(), 1);
        assert_eq!((layout.width, layout.height), (26, 26));
    }

    #[test]
    fn test_scale_grows_layout() {
        let mut group = OverlayGroup::default_layout();
        group.apply_scale(2.0, &KeyNameCatalog, &BitmapTextMeasure);
        let layout = measure_group(&group, &HudSettings::default());

        assert_eq!(layout.width, 160);
        // 53 + 53 + 57 + 33, minus one, plus two
        assert_eq!(layout.height, 197);
    }
}
