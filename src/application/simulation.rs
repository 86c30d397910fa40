use std::time::Instant;

use crate::domain::{self, CellState, Grid, Result};

/// Slowest accepted tick rate (ticks per second)
pub const MIN_TICKS_PER_SECOND: f32 = 0.001;
/// Fastest accepted tick rate, the "instant" preset
pub const MAX_TICKS_PER_SECOND: f32 = 10_000.0;
/// Speed presets offered by the front-end, slowest first
pub const TICK_RATE_PRESETS: [f32; 5] = [1.0, 5.0, 10.0, 50.0, 10_000.0];

/// Simulation owns the world grid and drives it at a fixed logical tick rate,
/// independent of how often the front-end renders.
pub struct Simulation {
    grid: Grid,
    is_running: bool,
    selected: CellState,
    ticks_per_second: f32,
    accumulator: f32,
    generation: u64,
    last_step_time_ms: f32,
}

impl Simulation {
    /// Create a paused simulation with an empty grid
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            grid: Grid::new(width, height),
            is_running: false,
            selected: CellState::Head,
            ticks_per_second: 5.0,
            accumulator: 0.0,
            generation: 0,
            last_step_time_ms: 0.0,
        }
    }

    /// Set tick rate (builder pattern)
    pub fn with_tick_rate(mut self, ticks_per_second: f32) -> Self {
        self.set_tick_rate(ticks_per_second);
        self
    }

    /// Set selected paint state (builder pattern)
    pub fn with_selected_state(mut self, state: CellState) -> Self {
        self.selected = state;
        self
    }

    /// Read-only view of the current grid; stale after the next `advance`
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Owned snapshot of the current grid
    pub fn current_grid(&self) -> Grid {
        self.grid.clone()
    }

    pub fn cell(&self, x: usize, y: usize) -> Result<CellState> {
        self.grid.get(x, y)
    }

    pub fn is_running(&self) -> bool {
        self.is_running
    }

    pub fn is_paused(&self) -> bool {
        !self.is_running
    }

    pub fn selected_state(&self) -> CellState {
        self.selected
    }

    pub fn tick_rate(&self) -> f32 {
        self.ticks_per_second
    }

    /// Generations computed since the last clear or load
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn last_step_time_ms(&self) -> f32 {
        self.last_step_time_ms
    }

    /// Replace one cell, running or paused
    pub fn edit_cell(&mut self, x: usize, y: usize, state: CellState) -> Result<()> {
        self.grid.set(x, y, state)
    }

    /// Write the selected state at (x, y)
    pub fn paint(&mut self, x: usize, y: usize) -> Result<()> {
        self.edit_cell(x, y, self.selected)
    }

    pub fn set_selected_state(&mut self, state: CellState) {
        self.selected = state;
    }

    /// Replace the target rate, clamped to
    /// [`MIN_TICKS_PER_SECOND`, `MAX_TICKS_PER_SECOND`]. NaN clamps to the minimum.
    pub fn set_tick_rate(&mut self, ticks_per_second: f32) {
        let clamped = if ticks_per_second.is_nan() {
            MIN_TICKS_PER_SECOND
        } else {
            ticks_per_second.clamp(MIN_TICKS_PER_SECOND, MAX_TICKS_PER_SECOND)
        };
        if clamped != ticks_per_second {
            log::warn!("Tick rate {} clamped to {}", ticks_per_second, clamped);
        }
        self.ticks_per_second = clamped;
        log::info!("Target tick rate: {} ticks/s", clamped);
    }

    /// Select one of [`TICK_RATE_PRESETS`]; out-of-range indices are ignored
    pub fn select_tick_preset(&mut self, index: usize) {
        if let Some(&rate) = TICK_RATE_PRESETS.get(index) {
            self.set_tick_rate(rate);
        }
    }

    /// Toggle play/pause state
    pub fn toggle_pause(&mut self) {
        self.is_running = !self.is_running;
        log::info!("Simulation {}", if self.is_running { "running" } else { "paused" });
    }

    /// Empty every cell; pause state is kept
    pub fn clear(&mut self) {
        self.grid.fill(CellState::Empty);
        self.generation = 0;
        log::info!("Grid cleared");
    }

    /// Update simulation by one frame.
    ///
    /// At most one step per call: once the accumulated time reaches the tick
    /// interval the grid advances and the accumulator resets to zero, so slow
    /// frames under-run the target rate instead of catching up.
    /// Returns whether a step happened.
    pub fn advance(&mut self, elapsed_seconds: f32) -> bool {
        if !self.is_running {
            return false;
        }

        self.accumulator += elapsed_seconds.max(0.0);
        let tick_interval = 1.0 / self.ticks_per_second;
        if self.accumulator < tick_interval {
            return false;
        }

        let start = Instant::now();
        self.grid = domain::step(&self.grid);
        self.last_step_time_ms = start.elapsed().as_secs_f32() * 1000.0;
        self.generation += 1;
        self.accumulator = 0.0;
        log::trace!("Generation {} took {:.3}ms", self.generation, self.last_step_time_ms);
        true
    }

    /// Replace the grid with a decoded world. On failure the current grid
    /// is untouched and the format error is returned.
    pub fn load(&mut self, text: &str) -> Result<()> {
        let (width, height) = self.grid.dimensions();
        match domain::decode(text, width, height) {
            Ok(grid) => {
                self.grid = grid;
                self.generation = 0;
                log::info!("Loaded {}x{} world", width, height);
                Ok(())
            }
            Err(e) => {
                log::warn!("Rejected world: {}", e);
                Err(e)
            }
        }
    }

    /// Encode the current grid
    pub fn save(&self) -> String {
        domain::encode(&self.grid)
    }
}
