mod button;

pub use button::Button;

// Layout is computed per frame so the window stays resizable
use macroquad::prelude::{screen_height, screen_width};

use crate::application::{Intent, Snapshot};
use crate::domain::PatternId;

pub const PANEL_WIDTH: f32 = 200.0;
pub const BUTTON_HEIGHT: f32 = 32.0;
pub const MARGIN: f32 = 10.0;
/// Step used by the speed buttons and arrow keys, in ms
pub const SPEED_STEP_MS: i32 = 50;

/// X position where the panel starts (right side)
pub fn panel_x() -> f32 {
    screen_width() - PANEL_WIDTH
}

pub fn grid_area_width() -> f32 {
    screen_width() - PANEL_WIDTH
}

pub fn grid_area_height() -> f32 {
    screen_height()
}

/// Square board placement inside the grid area: (left, top, cell size)
pub fn board_layout(grid_size: usize) -> (f32, f32, f32) {
    let side = (grid_area_width().min(grid_area_height()) - 2.0 * MARGIN).max(0.0);
    let cell = side / grid_size as f32;
    let left = (grid_area_width() - side) / 2.0;
    let top = (grid_area_height() - side) / 2.0;
    (left, top, cell)
}

/// Cell under a screen position, or `None` off the board
pub fn screen_to_cell(pos: (f32, f32), grid_size: usize) -> Option<(isize, isize)> {
    let (left, top, cell) = board_layout(grid_size);
    if cell <= 0.0 {
        return None;
    }
    let col = ((pos.0 - left) / cell).floor();
    let row = ((pos.1 - top) / cell).floor();
    let n = grid_size as f32;
    ((0.0..n).contains(&row) && (0.0..n).contains(&col)).then(|| (row as isize, col as isize))
}

/// Panel buttons for the current snapshot
pub fn create_buttons(snapshot: &Snapshot<'_>) -> Vec<Button> {
    let px = panel_x() + MARGIN;
    let width = PANEL_WIDTH - 2.0 * MARGIN;
    let half = (width - MARGIN) / 2.0;
    let row_y = |row: usize| 80.0 + row as f32 * (BUTTON_HEIGHT + MARGIN);

    let play_label = if snapshot.running { "Pause" } else { "Start" };
    let edit_label = if snapshot.edit_mode { "Edit: On" } else { "Edit: Off" };

    let mut buttons = vec![
        Button::new(px, row_y(0), half, BUTTON_HEIGHT, play_label, Intent::TogglePlay),
        Button::new(px + half + MARGIN, row_y(0), half, BUTTON_HEIGHT, "Reset", Intent::Reset),
        Button::new(px, row_y(1), width, BUTTON_HEIGHT, edit_label, Intent::ToggleEdit)
            .with_active(snapshot.edit_mode),
        Button::new(px, row_y(2), half, BUTTON_HEIGHT, "Faster", Intent::AdjustSpeed(-SPEED_STEP_MS)),
        Button::new(px + half + MARGIN, row_y(2), half, BUTTON_HEIGHT, "Slower", Intent::AdjustSpeed(SPEED_STEP_MS)),
    ];

    // Two pattern buttons per row below the controls
    buttons.extend(PatternId::all().into_iter().enumerate().map(|(i, pattern)| {
        let x = if i % 2 == 0 { px } else { px + half + MARGIN };
        Button::new(x, row_y(4 + i / 2), half, BUTTON_HEIGHT, pattern.name(), Intent::SelectPattern(pattern))
            .with_active(snapshot.active_pattern == pattern)
    }));

    buttons
}
