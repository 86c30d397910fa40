use macroquad::prelude::*;

/// Panel button with hover highlight, an optional colour swatch and an
/// "active" outline for toggles such as the selected cell state.
#[derive(Clone)]
pub struct Button {
    rect: Rect,
    label: String,
    swatch: Option<Color>,
}

const FILL: Color = Color::new(0.2, 0.2, 0.25, 1.0);
const HOVER_FILL: Color = Color::new(0.3, 0.3, 0.38, 1.0);

impl Button {
    pub fn new(x: f32, y: f32, width: f32, height: f32, label: impl Into<String>) -> Self {
        Self {
            rect: Rect::new(x, y, width, height),
            label: label.into(),
            swatch: None,
        }
    }

    /// Show a small square of `color` before the label
    pub fn with_swatch(mut self, color: Color) -> Self {
        self.swatch = Some(color);
        self
    }

    pub fn is_hovered(&self, mouse_pos: (f32, f32)) -> bool {
        self.rect.contains(vec2(mouse_pos.0, mouse_pos.1))
    }

    pub fn is_clicked(&self, mouse_pos: (f32, f32)) -> bool {
        self.is_hovered(mouse_pos) && is_mouse_button_pressed(MouseButton::Left)
    }

    pub fn draw(&self, mouse_pos: (f32, f32), active: bool) {
        let Rect { x, y, w, h } = self.rect;
        let fill = if self.is_hovered(mouse_pos) { HOVER_FILL } else { FILL };
        draw_rectangle(x, y, w, h, fill);
        let (outline, thickness) = if active { (YELLOW, 2.0) } else { (GRAY, 1.0) };
        draw_rectangle_lines(x, y, w, h, thickness, outline);

        let mut text_x = x + 8.0;
        if let Some(color) = self.swatch {
            let side = h - 10.0;
            draw_rectangle(text_x, y + 5.0, side, side, color);
            draw_rectangle_lines(text_x, y + 5.0, side, side, 1.0, GRAY);
            text_x += side + 6.0;
        }

        let text_size = measure_text(&self.label, None, 16, 1.0);
        draw_text(&self.label, text_x, y + (h + text_size.height) / 2.0, 16.0, WHITE);
    }
}
