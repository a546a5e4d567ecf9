use macroquad::prelude::*;

use crate::application::Snapshot;
use crate::domain::Hsl;
use crate::ui::{Button, board_layout, panel_x, MARGIN, PANEL_WIDTH};

const DEAD_CELL: Color = Color::new(0.06, 0.06, 0.06, 1.0);
const GRID_LINE: Color = Color::new(0.13, 0.13, 0.13, 1.0);
const EDIT_BORDER: Color = Color::new(0.655, 0.545, 0.980, 1.0);
const LABEL: Color = Color::new(0.867, 0.839, 0.996, 1.0);

fn neon(color: Hsl) -> Color {
    let rgb = color.to_rgb();
    Color::from_rgba(rgb.r, rgb.g, rgb.b, 255)
}

/// Draw the board: live cells in their assigned neon color on black
pub fn draw_grid(snapshot: &Snapshot<'_>) {
    let n = snapshot.grid.size();
    let (left, top, cell) = board_layout(n);
    let draw_lines = cell >= 4.0;

    for (row, col, state) in snapshot.grid.iter_cells() {
        let x = left + col as f32 * cell;
        let y = top + row as f32 * cell;

        let color = match snapshot.colors.get(row, col) {
            Some(hsl) if state.is_alive() => neon(hsl),
            _ => DEAD_CELL,
        };
        draw_rectangle(x, y, cell, cell, color);

        if draw_lines {
            draw_rectangle_lines(x, y, cell, cell, 1.0, GRID_LINE);
        }
    }

    // Editing is signalled by a frame around the board
    if snapshot.edit_mode {
        let side = cell * n as f32;
        draw_rectangle_lines(left - 2.0, top - 2.0, side + 4.0, side + 4.0, 3.0, EDIT_BORDER);
    }
}

/// Hint shown in place of the panel while it is hidden
pub fn draw_panel_hint() {
    draw_text("H: show controls", panel_x() + MARGIN, 24.0, 14.0, GRAY);
}

/// Draw the side panel: title, buttons and simulation stats
pub fn draw_controls(snapshot: &Snapshot<'_>, buttons: &[Button], mouse_pos: (f32, f32)) {
    let px = panel_x();
    draw_rectangle(px, 0.0, PANEL_WIDTH, screen_height(), Color::from_rgba(10, 10, 14, 230));

    let tx = px + MARGIN;
    draw_text("Conway's Game of Life", tx, 30.0, 20.0, LABEL);
    draw_text("Neon Edition", tx, 52.0, 18.0, EDIT_BORDER);

    buttons.iter().for_each(|btn| btn.draw(mouse_pos));

    let status = if snapshot.running {
        "Running"
    } else if snapshot.edit_mode {
        "Editing"
    } else {
        "Paused"
    };

    let stats = [
        format!("Speed: {}ms", snapshot.speed_ms),
        format!("Living Cells: {}", snapshot.population()),
        format!("Generation: {}", snapshot.generation),
        format!("Pattern: {}", snapshot.active_pattern.name()),
        format!("  {}", snapshot.active_pattern.description()),
        format!("Status: {status}"),
    ];
    let base_y = screen_height() - 170.0;
    for (i, line) in stats.iter().enumerate() {
        draw_text(line, tx, base_y + i as f32 * 18.0, 16.0, LABEL);
    }

    let help = [
        "Space: start/pause  R: reset",
        "E: edit  Up/Down: speed",
        "1-6: patterns  H: hide panel",
    ];
    for (i, line) in help.iter().enumerate() {
        draw_text(line, tx, base_y + 118.0 + i as f32 * 14.0, 12.0, GRAY);
    }
}
