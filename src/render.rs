//! SDL2 drawing of the overlays, the editor grid and notices
//!
//! The renderer only reads from [`HudApp`]; it runs after
//! [`HudApp::update`] so every group it draws has a fresh layout.

use crate::app::HudApp;
use crate::click_rate::Clock;
use crate::geometry::{Viewport, VIEWPORT_INSET};
use crate::hud::{measure_group, GroupColors, OverlayGroup, PlacedWidget, Rgb};
use crate::input_system::InputContext;
use crate::keystroke::WidgetKind;
use crate::text::{draw_simple_text, pixel_scale, text_width, GLYPH_HEIGHT};
use sdl2::pixels::Color;
use sdl2::rect::Rect;
use sdl2::render::Canvas;
use sdl2::video::Window;

/// Cell background while its input is held.
const HELD_BACKGROUND: Color = Color::RGB(200, 200, 200);
const GRID_COLOR: Color = Color::RGB(128, 128, 128);
const DRAG_COLOR: Color = Color::RGB(0, 255, 0);
const SHADOW_COLOR: Color = Color::RGB(0, 0, 0);

/// Gap between stacked lines of cell text, in font pixels.
const LINE_SPACING: u32 = 2;

fn to_color(rgb: Rgb) -> Color {
    Color::RGB(rgb.0, rgb.1, rgb.2)
}

#[derive(Debug, Default)]
pub struct HudRenderer;

impl HudRenderer {
    pub fn new() -> Self {
        HudRenderer
    }

    /// Draws one frame. The caller clears and presents the canvas.
    pub fn render<C: Clock>(&self, canvas: &mut Canvas<Window>, app: &HudApp<C>) -> Result<(), String> {
        let registry = app.registry();
        let editing = app.context() != InputContext::Hud;

        if editing {
            self.render_grid(canvas, registry.viewport())?;
        }

        for group in registry.groups() {
            self.render_group(canvas, app, group)?;
            if editing {
                self.render_frame(canvas, group)?;
            }
        }

        if app.context() == InputContext::Binding {
            draw_simple_text(canvas, "PRESS A KEY TO ADD", 20, 20, Color::RGB(255, 255, 255), 2)?;
        }

        self.render_notices(canvas, app, registry.viewport())
    }

    /// Helper lines: the inset border plus half and quarter lines.
    fn render_grid(&self, canvas: &mut Canvas<Window>, viewport: Viewport) -> Result<(), String> {
        let stop_x = viewport.max_x();
        let stop_y = viewport.max_y();
        let inset = VIEWPORT_INSET;

        let rows = [inset, stop_y / 4, stop_y / 2, stop_y / 4 + stop_y / 2, stop_y];
        let columns = [inset, stop_x / 4, stop_x / 2, stop_x / 4 + stop_x / 2, stop_x];

        for (i, y) in rows.into_iter().enumerate() {
            canvas.set_draw_color(if i == 2 { Color::RGB(255, 255, 255) } else { GRID_COLOR });
            canvas.draw_line((inset, y), (stop_x, y))?;
        }
        for (i, x) in columns.into_iter().enumerate() {
            canvas.set_draw_color(if i == 2 { Color::RGB(255, 255, 255) } else { GRID_COLOR });
            canvas.draw_line((x, inset), (x, stop_y))?;
        }

        Ok(())
    }

    /// Outline around a group, green while it is dragged.
    fn render_frame(&self, canvas: &mut Canvas<Window>, group: &OverlayGroup) -> Result<(), String> {
        let rect = group.rectangle();
        if rect.width <= 0 || rect.height <= 0 {
            return Ok(());
        }

        canvas.set_draw_color(if group.is_dragging() { DRAG_COLOR } else { Color::RGB(255, 255, 255) });
        canvas.draw_rect(Rect::new(
            rect.x - 1,
            rect.y - 1,
            rect.width as u32 + 1,
            rect.height as u32 + 1,
        ))
    }

    fn render_group<C: Clock>(
        &self,
        canvas: &mut Canvas<Window>,
        app: &HudApp<C>,
        group: &OverlayGroup,
    ) -> Result<(), String> {
        let layout = measure_group(group, app.settings());
        let origin = group.rectangle();
        let width = layout.width.max(1) as f64;

        for cell in &layout.cells {
            let x = origin.x + cell.x as i32;
            let y = origin.y + cell.y as i32;
            let colors = app.cell_colors(group, cell.x / width);
            self.render_cell(canvas, app, group, cell, x, y, colors)?;
        }

        Ok(())
    }

    #[allow(clippy::too_many_arguments)]
    fn render_cell<C: Clock>(
        &self,
        canvas: &mut Canvas<Window>,
        app: &HudApp<C>,
        group: &OverlayGroup,
        cell: &PlacedWidget,
        x: i32,
        y: i32,
        colors: GroupColors,
    ) -> Result<(), String> {
        let widget = cell.widget;
        let width = widget.width().max(1.0) as u32;
        let height = widget.height().max(1.0) as u32;

        let held = widget.input().is_some_and(|input| app.is_held(input));
        let (background, text_color) = if held {
            (HELD_BACKGROUND, to_color(colors.click))
        } else {
            (to_color(colors.background), to_color(colors.text))
        };

        canvas.set_draw_color(background);
        canvas.fill_rect(Rect::new(x, y, width, height))?;

        let font_scale = pixel_scale(group.scale());

        if widget.kind() == WidgetKind::Spacebar {
            let bar_width = width / 2;
            canvas.set_draw_color(text_color);
            return canvas.fill_rect(Rect::new(
                x + (width - bar_width) as i32 / 2,
                y + height as i32 / 2 - font_scale as i32 / 2,
                bar_width,
                font_scale,
            ));
        }

        let registry = app.registry();
        let lines = widget.face_text(registry.host().inputs.as_ref(), app.face_options(widget));
        let line_height = (GLYPH_HEIGHT + LINE_SPACING) * font_scale;
        let block_height = line_height * lines.len() as u32;
        let mut line_y = y + (height as i32 - block_height as i32) / 2 + (LINE_SPACING * font_scale) as i32 / 2;

        for line in &lines {
            let line_width = text_width(line, font_scale as f64) as i32;
            let line_x = x + (width as i32 - line_width) / 2;

            if app.settings().text_shadow {
                draw_simple_text(canvas, line, line_x + 1, line_y + 1, SHADOW_COLOR, font_scale)?;
            }
            draw_simple_text(canvas, line, line_x, line_y, text_color, font_scale)?;
            line_y += line_height as i32;
        }

        Ok(())
    }

    /// Live notices, newest at the bottom of the screen.
    fn render_notices<C: Clock>(
        &self,
        canvas: &mut Canvas<Window>,
        app: &HudApp<C>,
        viewport: Viewport,
    ) -> Result<(), String> {
        let notices: Vec<_> = app.notices().active().collect();

        for (i, notice) in notices.iter().rev().enumerate() {
            let text = format!("{}: {}", notice.title, notice.message);
            let y = viewport.max_y() - 12 - i as i32 * 12;
            let color = if notice.title == "Warning" {
                Color::RGB(255, 200, 0)
            } else {
                Color::RGB(255, 255, 255)
            };
            draw_simple_text(canvas, &text, 10, y, color, 1)?;
        }

        Ok(())
    }
}
