use macroquad::prelude::*;

use crate::{
    application::{Camera, Simulation, TICK_RATE_PRESETS},
    domain::{CellState, Grid},
    input::Command,
    ui::{Button, CELL_SIZE, PANEL_WIDTH, buttons_bottom, grid_area_height, grid_area_width, panel_x, state_color},
};

const BACKGROUND: Color = Color::new(0.35, 0.35, 0.35, 1.0);
const PANEL_BACKGROUND: Color = Color::new(0.05, 0.05, 0.05, 1.0);

const HELP: &[&str] = &[
    "Space: pause / unpause",
    "F1-F4: select cell type",
    "F5-F9: simulation speed",
    "WASD / arrows: move camera",
    "Wheel: zoom, Ctrl or H: reset view",
    "LMB: paint a cell, hold RMB: paint many",
    "Escape: clear all cells",
    "Z: load world, X: save world",
];

const RULES: &[&str] = &[
    "Rules:",
    "* An empty cell stays empty",
    "* A head becomes a tail",
    "* A tail becomes a conductor",
    "* A conductor becomes a head if one",
    "  or two neighbouring cells are heads",
];

/// Draw every visible cell, one pixel smaller than its slot for a border
pub fn draw_grid(grid: &Grid, camera: &Camera) {
    clear_background(BACKGROUND);
    let cell_size = CELL_SIZE * camera.zoom;
    let (area_width, area_height) = (grid_area_width(), grid_area_height());

    for (x, y, state) in grid.iter_cells() {
        let (sx, sy) = camera.cell_to_screen(x, y, CELL_SIZE);
        // Cull cells outside the grid area
        if sx + cell_size < 0.0 || sy + cell_size < 0.0 || sx > area_width || sy > area_height {
            continue;
        }
        draw_rectangle(sx + 1.0, sy + 1.0, cell_size - 1.0, cell_size - 1.0, state_color(state));
    }
}

fn draw_pause_indicator(is_paused: bool) {
    let right = grid_area_width();
    if is_paused {
        draw_rectangle(right - 20.0, 5.0, 5.0, 20.0, WHITE);
        draw_rectangle(right - 10.0, 5.0, 5.0, 20.0, WHITE);
    } else {
        draw_triangle(
            vec2(right - 20.0, 5.0),
            vec2(right - 20.0, 25.0),
            vec2(right - 5.0, 15.0),
            WHITE,
        );
    }
}

fn draw_lines(lines: &[&str], x: f32, y: f32, color: Color) -> f32 {
    lines.iter().enumerate().for_each(|(i, line)| {
        draw_text(line, x, y + i as f32 * 15.0, 15.0, color);
    });
    y + lines.len() as f32 * 15.0
}

fn is_active(command: Command, sim: &Simulation) -> bool {
    match command {
        Command::TogglePause => sim.is_running(),
        Command::Select(state) => state == sim.selected_state(),
        Command::SpeedPreset(index) => {
            TICK_RATE_PRESETS.get(index) == Some(&sim.tick_rate())
        }
        _ => false,
    }
}

/// Draw the side panel: buttons, help, rules and live statistics
pub fn draw_controls(sim: &Simulation, buttons: &[(Button, Command)], mouse_pos: (f32, f32)) {
    draw_pause_indicator(sim.is_paused());

    let px = panel_x();
    draw_rectangle(px, 0.0, PANEL_WIDTH, screen_height(), PANEL_BACKGROUND);
    buttons
        .iter()
        .for_each(|(button, command)| button.draw(mouse_pos, is_active(*command, sim)));

    let tx = px + 10.0;
    let mut y = buttons_bottom() + 10.0;
    draw_text("Wireworld cellular automaton", tx, y, 20.0, RED);
    y = draw_lines(HELP, tx, y + 22.0, WHITE);
    y = draw_lines(RULES, tx, y + 10.0, YELLOW);

    let grid = sim.grid();
    let (width, height) = grid.dimensions();
    let heads = grid.count(CellState::Head);
    let wires = grid.count(CellState::Conductor) + heads + grid.count(CellState::Tail);
    let stats = [
        format!("Selected type: {}", sim.selected_state().name()),
        format!("Target TPS: {}", sim.tick_rate() as u32),
        format!("Generation: {}", sim.generation()),
        format!("Logic took {:.2} ms", sim.last_step_time_ms()),
        format!("World {}x{}, {} wire cells, {} heads", width, height, wires, heads),
        format!("FPS: {}", get_fps()),
    ];
    let stats: Vec<&str> = stats.iter().map(String::as_str).collect();
    draw_lines(&stats, tx, y + 10.0, LIGHTGRAY);
}
