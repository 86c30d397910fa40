//! Rule engine throughput on a dense random circuit

use std::time::Instant;

use rand::{Rng, SeedableRng, rngs::StdRng};
use wireworld::{CellState, Grid, WireworldError, domain::step_into};

/// Seeded random fill, mostly wire with scattered electrons
fn seeded_grid(size: usize, seed: u64) -> Result<Grid, WireworldError> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut grid = Grid::new(size, size);
    for y in 0..size {
        for x in 0..size {
            let cell = match rng.random_range(0..10) {
                0 => CellState::Head,
                1 => CellState::Tail,
                2..=6 => CellState::Conductor,
                _ => CellState::Empty,
            };
            grid.set(x, y, cell)?;
        }
    }
    Ok(grid)
}

fn benchmark_step(size: usize, iterations: u32) -> Result<f64, WireworldError> {
    let mut current = seeded_grid(size, 2020)?;
    let mut next = Grid::new(size, size);

    let start = Instant::now();
    for _ in 0..iterations {
        step_into(&current, &mut next)?;
        std::mem::swap(&mut current, &mut next);
    }
    Ok(start.elapsed().as_secs_f64() * 1000.0 / iterations as f64)
}

fn main() -> Result<(), WireworldError> {
    println!("=== Wireworld Step Benchmark ===\n");
    println!("{:>12} {:>12} {:>16}", "Size", "ms/gen", "Mcells/sec");
    println!("{:-<42}", "");

    for size in [50, 100, 500, 1000, 2000] {
        let iterations = if size <= 500 { 200 } else { 20 };
        let ms = benchmark_step(size, iterations)?;
        let cells = (size * size) as f64;
        println!(
            "{:>12} {:>12.3} {:>16.1}",
            format!("{}x{}", size, size),
            ms,
            cells / (ms / 1000.0) / 1_000_000.0
        );
    }
    Ok(())
}
