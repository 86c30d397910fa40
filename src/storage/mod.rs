//! World files on disk.
//!
//! The simulation only deals in text; reading and writing `.wire` files is
//! the front-end's job.

use std::{fs, io, path::Path};

use thiserror::Error;

use crate::{application::Simulation, domain::WireworldError};

#[derive(Debug, Error)]
pub enum WorldFileError {
    #[error("cannot access world file: {0}")]
    Io(#[from] io::Error),
    #[error(transparent)]
    World(#[from] WireworldError),
}

/// Read a world file into the simulation. The grid is only replaced if the
/// whole file is valid.
pub fn load_world_file(path: impl AsRef<Path>, sim: &mut Simulation) -> Result<(), WorldFileError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path)?;
    sim.load(&text)?;
    log::info!("Loaded world from {}", path.display());
    Ok(())
}

/// Write the current world to `path`, replacing any existing file
pub fn save_world_file(path: impl AsRef<Path>, sim: &Simulation) -> Result<(), WorldFileError> {
    let path = path.as_ref();
    fs::write(path, sim.save())?;
    log::info!("Saved world to {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::CellState;
    use std::path::PathBuf;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("wireworld-{}-{}.wire", name, std::process::id()))
    }

    #[test]
    fn test_save_then_load() {
        let path = temp_path("roundtrip");
        let mut sim = Simulation::new(5, 4);
        sim.edit_cell(4, 3, CellState::Conductor).unwrap();
        sim.edit_cell(0, 1, CellState::Head).unwrap();
        save_world_file(&path, &sim).unwrap();

        let mut restored = Simulation::new(5, 4);
        load_world_file(&path, &mut restored).unwrap();
        assert_eq!(restored.grid(), sim.grid());
        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let mut sim = Simulation::new(2, 2);
        let err = load_world_file(temp_path("missing"), &mut sim).unwrap_err();
        assert!(matches!(err, WorldFileError::Io(_)));
    }

    #[test]
    fn test_file_for_other_dimensions_rejected() {
        let path = temp_path("dims");
        fs::write(&path, "0123\n").unwrap();
        let mut sim = Simulation::new(3, 3);
        sim.edit_cell(1, 1, CellState::Tail).unwrap();
        let before = sim.current_grid();

        let err = load_world_file(&path, &mut sim).unwrap_err();
        assert!(matches!(err, WorldFileError::World(WireworldError::Format(_))));
        assert_eq!(sim.current_grid(), before);
        fs::remove_file(&path).unwrap();
    }
}
