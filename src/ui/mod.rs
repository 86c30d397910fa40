mod button;

pub use button::Button;

use macroquad::prelude::{BLACK, BLUE, Color, RED, YELLOW, screen_height, screen_width};

use crate::{application::TICK_RATE_PRESETS, domain::CellState, input::Command};

pub const PANEL_WIDTH: f32 = 300.0;
pub const BUTTON_HEIGHT: f32 = 26.0;
pub const CELL_SIZE: f32 = 12.0;
const BUTTON_GAP: f32 = 4.0;
const MARGIN: f32 = 10.0;

/// Get the X position where the panel starts (right side)
pub fn panel_x() -> f32 {
    screen_width() - PANEL_WIDTH
}

/// Width of the grid area, left of the panel
pub fn grid_area_width() -> f32 {
    panel_x()
}

pub fn grid_area_height() -> f32 {
    screen_height()
}

/// Display colour of each cell state
pub const fn state_color(state: CellState) -> Color {
    match state {
        CellState::Empty => BLACK,
        CellState::Head => BLUE,
        CellState::Tail => RED,
        CellState::Conductor => YELLOW,
    }
}

/// Y position where the help text below the buttons starts
pub fn buttons_bottom() -> f32 {
    MARGIN + 4.0 * (BUTTON_HEIGHT + BUTTON_GAP) + MARGIN
}

/// Panel buttons and the command each one issues.
/// Rows: play/clear, the four cell states, the speed presets, load/save.
pub fn create_buttons() -> Vec<(Button, Command)> {
    let px = panel_x() + MARGIN;
    let inner = PANEL_WIDTH - 2.0 * MARGIN;
    let row_y = |row: usize| MARGIN + row as f32 * (BUTTON_HEIGHT + BUTTON_GAP);
    let row = |index: usize, count: usize| {
        let width = (inner - BUTTON_GAP * (count - 1) as f32) / count as f32;
        let y = row_y(index);
        (0..count).map(move |i| (px + i as f32 * (width + BUTTON_GAP), y, width))
    };

    let mut buttons = Vec::new();

    let actions = [("Play/Pause", Command::TogglePause), ("Clear", Command::Clear)];
    for ((x, y, w), (label, command)) in row(0, actions.len()).zip(actions) {
        buttons.push((Button::new(x, y, w, BUTTON_HEIGHT, label), command));
    }

    for ((x, y, w), state) in row(1, CellState::ALL.len()).zip(CellState::ALL) {
        let label = match state {
            CellState::Conductor => "Wire",
            other => other.name(),
        };
        let button = Button::new(x, y, w, BUTTON_HEIGHT, label).with_swatch(state_color(state));
        buttons.push((button, Command::Select(state)));
    }

    for ((x, y, w), (index, rate)) in row(2, TICK_RATE_PRESETS.len()).zip(TICK_RATE_PRESETS.iter().enumerate()) {
        let label = if *rate >= 1000.0 { "Max".to_string() } else { format!("{rate}") };
        buttons.push((Button::new(x, y, w, BUTTON_HEIGHT, label), Command::SpeedPreset(index)));
    }

    let files = [("Load (Z)", Command::LoadWorld), ("Save (X)", Command::SaveWorld)];
    for ((x, y, w), (label, command)) in row(3, files.len()).zip(files) {
        buttons.push((Button::new(x, y, w, BUTTON_HEIGHT, label), command));
    }

    buttons
}
