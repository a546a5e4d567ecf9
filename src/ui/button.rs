use macroquad::prelude::*;

use crate::application::Intent;

const VIOLET: Color = Color::new(0.486, 0.227, 0.929, 1.0);
const VIOLET_DARK: Color = Color::new(0.357, 0.129, 0.714, 1.0);
const VIOLET_HOVER: Color = Color::new(0.427, 0.157, 0.851, 1.0);

/// Panel button that emits one intent when clicked
#[derive(Clone)]
pub struct Button {
    x: f32,
    y: f32,
    width: f32,
    height: f32,
    text: String,
    intent: Intent,
    /// Highlighted, e.g. the active pattern
    active: bool,
}

impl Button {
    pub fn new(x: f32, y: f32, width: f32, height: f32, text: impl Into<String>, intent: Intent) -> Self {
        Self {
            x,
            y,
            width,
            height,
            text: text.into(),
            intent,
            active: false,
        }
    }

    pub fn with_active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }

    pub fn is_hovered(&self, mouse_pos: (f32, f32)) -> bool {
        mouse_pos.0 >= self.x
            && mouse_pos.0 <= self.x + self.width
            && mouse_pos.1 >= self.y
            && mouse_pos.1 <= self.y + self.height
    }

    pub fn draw(&self, mouse_pos: (f32, f32)) {
        let color = if self.active {
            VIOLET
        } else if self.is_hovered(mouse_pos) {
            VIOLET_HOVER
        } else {
            VIOLET_DARK
        };

        draw_rectangle(self.x, self.y, self.width, self.height, color);

        let font_size = 18;
        let text_size = measure_text(&self.text, None, font_size, 1.0);
        draw_text(
            &self.text,
            self.x + (self.width - text_size.width) / 2.0,
            self.y + (self.height + text_size.height) / 2.0,
            f32::from(font_size),
            WHITE,
        );
    }

    /// Intent to dispatch if the button was clicked this frame
    pub fn clicked_intent(&self, mouse_pos: (f32, f32)) -> Option<Intent> {
        (self.is_hovered(mouse_pos) && is_mouse_button_pressed(MouseButton::Left)).then_some(self.intent)
    }
}
