use macroquad::prelude::*;

use crate::application::{Intent, Snapshot};
use crate::domain::PatternId;
use crate::ui::{Button, SPEED_STEP_MS, grid_area_width, screen_to_cell};

const PATTERN_KEYS: [KeyCode; 6] = [
    KeyCode::Key1,
    KeyCode::Key2,
    KeyCode::Key3,
    KeyCode::Key4,
    KeyCode::Key5,
    KeyCode::Key6,
];

/// Intents from keys pressed this frame
pub fn keyboard_intents() -> Vec<Intent> {
    let actions = [
        (KeyCode::Space, Intent::TogglePlay),
        (KeyCode::R, Intent::Reset),
        (KeyCode::E, Intent::ToggleEdit),
        (KeyCode::H, Intent::ToggleControls),
        (KeyCode::Up, Intent::AdjustSpeed(-SPEED_STEP_MS)),
        (KeyCode::Down, Intent::AdjustSpeed(SPEED_STEP_MS)),
    ];

    let patterns = PATTERN_KEYS
        .into_iter()
        .zip(PatternId::all())
        .map(|(key, pattern)| (key, Intent::SelectPattern(pattern)));

    actions
        .into_iter()
        .chain(patterns)
        .filter(|(key, _)| is_key_pressed(*key))
        .map(|(_, intent)| intent)
        .collect()
}

/// Intents from panel buttons clicked this frame
pub fn button_intents(buttons: &[Button], mouse_pos: (f32, f32)) -> Vec<Intent> {
    buttons
        .iter()
        .filter_map(|btn| btn.clicked_intent(mouse_pos))
        .collect()
}

/// A click on the board toggles that cell, but only while editing
pub fn cell_click_intent(snapshot: &Snapshot<'_>, mouse_pos: (f32, f32)) -> Option<Intent> {
    if !snapshot.edit_mode
        || mouse_pos.0 >= grid_area_width()
        || !is_mouse_button_pressed(MouseButton::Left)
    {
        return None;
    }
    screen_to_cell(mouse_pos, snapshot.grid.size()).map(|(row, col)| Intent::ToggleCell { row, col })
}
