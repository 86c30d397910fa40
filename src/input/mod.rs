use std::path::Path;

use macroquad::prelude::*;

use crate::{
    application::{Camera, Simulation},
    domain::CellState,
    storage,
    ui::{Button, CELL_SIZE, grid_area_width},
};

/// Everything the front-end can ask of the simulation or the view
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Command {
    TogglePause,
    Clear,
    Select(CellState),
    SpeedPreset(usize),
    LoadWorld,
    SaveWorld,
    ResetCamera,
}

const KEY_BINDINGS: [(KeyCode, Command); 14] = [
    (KeyCode::Space, Command::TogglePause),
    (KeyCode::Escape, Command::Clear),
    (KeyCode::F1, Command::Select(CellState::Empty)),
    (KeyCode::F2, Command::Select(CellState::Head)),
    (KeyCode::F3, Command::Select(CellState::Tail)),
    (KeyCode::F4, Command::Select(CellState::Conductor)),
    (KeyCode::F5, Command::SpeedPreset(0)),
    (KeyCode::F6, Command::SpeedPreset(1)),
    (KeyCode::F7, Command::SpeedPreset(2)),
    (KeyCode::F8, Command::SpeedPreset(3)),
    (KeyCode::F9, Command::SpeedPreset(4)),
    (KeyCode::Z, Command::LoadWorld),
    (KeyCode::X, Command::SaveWorld),
    (KeyCode::H, Command::ResetCamera),
];

const PAN_SPEED: f32 = 300.0;
const ZOOM_STEP: f32 = 1.1;

/// Commands whose keys were pressed this frame
pub fn keyboard_commands() -> Vec<Command> {
    let mut commands: Vec<Command> = KEY_BINDINGS
        .iter()
        .filter(|(key, _)| is_key_pressed(*key))
        .map(|(_, command)| *command)
        .collect();
    if is_key_pressed(KeyCode::LeftControl) || is_key_pressed(KeyCode::RightControl) {
        commands.push(Command::ResetCamera);
    }
    commands
}

/// Commands whose buttons were clicked this frame
pub fn button_commands(buttons: &[(Button, Command)], mouse_pos: (f32, f32)) -> Vec<Command> {
    buttons
        .iter()
        .filter(|(button, _)| button.is_clicked(mouse_pos))
        .map(|(_, command)| *command)
        .collect()
}

/// Carry out one command. File errors are logged, never fatal.
pub fn apply(command: Command, sim: &mut Simulation, camera: &mut Camera, world_path: &Path) {
    match command {
        Command::TogglePause => sim.toggle_pause(),
        Command::Clear => sim.clear(),
        Command::Select(state) => sim.set_selected_state(state),
        Command::SpeedPreset(index) => sim.select_tick_preset(index),
        Command::LoadWorld => {
            if let Err(e) = storage::load_world_file(world_path, sim) {
                log::error!("Could not load {}: {}", world_path.display(), e);
            }
        }
        Command::SaveWorld => {
            if let Err(e) = storage::save_world_file(world_path, sim) {
                log::error!("Could not save {}: {}", world_path.display(), e);
            }
        }
        Command::ResetCamera => camera.reset(),
    }
}

/// Zoom with the mouse wheel around the cursor
pub fn handle_zoom(camera: &mut Camera, mouse_pos: (f32, f32)) {
    let wheel = mouse_wheel().1;
    if wheel > 0.0 {
        camera.zoom_at(ZOOM_STEP, mouse_pos);
    } else if wheel < 0.0 {
        camera.zoom_at(1.0 / ZOOM_STEP, mouse_pos);
    }
}

/// Pan with WASD or the arrow keys
pub fn handle_pan(camera: &mut Camera, frame_time: f32) {
    let step = PAN_SPEED * frame_time;
    let held = |keys: [KeyCode; 2]| keys.iter().any(|&k| is_key_down(k));
    if held([KeyCode::W, KeyCode::Up]) {
        camera.pan(0.0, step);
    }
    if held([KeyCode::S, KeyCode::Down]) {
        camera.pan(0.0, -step);
    }
    if held([KeyCode::A, KeyCode::Left]) {
        camera.pan(step, 0.0);
    }
    if held([KeyCode::D, KeyCode::Right]) {
        camera.pan(-step, 0.0);
    }
}

/// Left click paints one cell, holding the right button paints continuously
pub fn handle_mouse_paint(sim: &mut Simulation, camera: &Camera, mouse_pos: (f32, f32)) {
    if mouse_pos.0 >= grid_area_width() {
        return;
    }
    if !(is_mouse_button_pressed(MouseButton::Left) || is_mouse_button_down(MouseButton::Right)) {
        return;
    }
    let (width, height) = sim.grid().dimensions();
    if let Some((x, y)) = camera.screen_to_cell(mouse_pos, CELL_SIZE, width, height) {
        if let Err(e) = sim.paint(x, y) {
            log::debug!("Paint ignored: {}", e);
        }
    }
}
