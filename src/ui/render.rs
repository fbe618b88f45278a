use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph},
    Frame,
};

use super::braille::BrailleCanvas;
use super::overlay::{render_overlay, OverlayMessage};
use crate::config::DisplayConfig;
use crate::game::state::Rect as WorldRect;
use crate::game::GameState;

// Layout: 2 text rows (score line, key hints), then the Braille playfield.
const UI_HEADER_ROWS: u16 = 2;

pub fn render(
    frame: &mut Frame,
    state: &GameState,
    display: &DisplayConfig,
    overlay: Option<&OverlayMessage>,
) {
    let area = frame.area();

    // Draw background (true black RGB, not terminal default)
    let bg = Block::default().style(Style::default().bg(Color::Rgb(0, 0, 0)));
    frame.render_widget(bg, area);

    draw_header(frame, state, display, area);

    if area.height > UI_HEADER_ROWS && area.width > 0 {
        draw_playfield(frame, state, display, area);
    }

    if let Some(message) = overlay {
        render_overlay(frame, message, area);
    }
}

fn draw_header(frame: &mut Frame, state: &GameState, display: &DisplayConfig, area: Rect) {
    let score = Paragraph::new(format!(" Score: {}", state.score))
        .style(Style::default().fg(rgb(display.score_color)));
    frame.render_widget(
        score,
        Rect {
            x: area.x,
            y: area.y,
            width: area.width,
            height: 1,
        },
    );

    if area.height > 1 {
        let hints = Paragraph::new("Space: Flap  Q: Quit")
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center);
        frame.render_widget(
            hints,
            Rect {
                x: area.x,
                y: area.y + 1,
                width: area.width,
                height: 1,
            },
        );
    }
}

/// The playfield is drawn on three Braille canvases (ground, pipes, bird)
/// that are composed cell by cell, so every entity class keeps its own
/// configured color while sharing one high-resolution grid.
fn draw_playfield(frame: &mut Frame, state: &GameState, display: &DisplayConfig, area: Rect) {
    let params = &state.params;
    let cols = area.width as usize;
    let rows = (area.height - UI_HEADER_ROWS) as usize;

    let mut ground = BrailleCanvas::new(cols, rows);
    let mut pipes = BrailleCanvas::new(cols, rows);
    let mut bird = BrailleCanvas::new(cols, rows);

    let scale_x = ground.pixel_width() as f32 / params.world_width;
    let scale_y = ground.pixel_height() as f32 / params.world_height;

    // Ground: solid top edge, sparse hatch below it.
    let ground_top = ((params.world_height - params.ground_height) * scale_y) as usize;
    ground.draw_horizontal_line(ground_top);
    ground.draw_horizontal_line(ground_top + 1);
    let mut hatch_row = ground_top + 3;
    while hatch_row < ground.pixel_height() {
        let offset = if (hatch_row / 3) % 2 == 0 { 0 } else { 2 };
        let mut x = offset;
        while x < ground.pixel_width() {
            ground.set_pixel(x, hatch_row);
            x += 4;
        }
        hatch_row += 3;
    }

    for pipe in &state.pipes {
        fill_world_rect(&mut pipes, &pipe.top_rect(params), scale_x, scale_y);
        fill_world_rect(&mut pipes, &pipe.bottom_rect(params), scale_x, scale_y);
    }

    fill_world_rect(&mut bird, &state.bird_rect(), scale_x, scale_y);

    // Compose: bird covers pipes, pipes cover ground.
    let bird_style = Style::default().fg(rgb(display.bird_color));
    let pipe_style = Style::default().fg(rgb(display.pipe_color));
    let ground_style = Style::default().fg(rgb(display.ground_color));

    for row in 0..rows {
        let mut spans: Vec<Span> = Vec::new();
        let mut run = String::new();
        let mut run_style = ground_style;

        for col in 0..cols {
            let (ch, style) = if bird.cell_occupied(col, row) {
                (bird.to_char(col, row), bird_style)
            } else if pipes.cell_occupied(col, row) {
                (pipes.to_char(col, row), pipe_style)
            } else {
                (ground.to_char(col, row), ground_style)
            };

            if style != run_style && !run.is_empty() {
                spans.push(Span::styled(std::mem::take(&mut run), run_style));
            }
            run_style = style;
            run.push(ch);
        }
        if !run.is_empty() {
            spans.push(Span::styled(run, run_style));
        }

        let row_area = Rect {
            x: area.x,
            y: area.y + UI_HEADER_ROWS + row as u16,
            width: area.width,
            height: 1,
        };
        frame.render_widget(Paragraph::new(Line::from(spans)), row_area);
    }
}

/// Scale a world-space rectangle to Braille pixels and fill it. Rectangles
/// partially off the left or top edge are clipped rather than skipped.
fn fill_world_rect(canvas: &mut BrailleCanvas, rect: &WorldRect, scale_x: f32, scale_y: f32) {
    let x0 = (rect.x * scale_x).max(0.0);
    let y0 = (rect.y * scale_y).max(0.0);
    let x1 = ((rect.x + rect.width) * scale_x).max(0.0);
    let y1 = ((rect.y + rect.height) * scale_y).max(0.0);

    let width = (x1 - x0) as usize;
    let height = (y1 - y0) as usize;
    if width == 0 || height == 0 {
        return;
    }
    canvas.fill_rect(x0 as usize, y0 as usize, width, height);
}

fn rgb(c: [u8; 3]) -> Color {
    Color::Rgb(c[0], c[1], c[2])
}
