use std::path::Path;

use xdrfile::TRRTrajectory;

use crate::TrajFile;

/// Adapter for GROMACS trr trajectories.
///
/// All reading and writing is done by [`TRRTrajectory`]; this type only names
/// that reader and fixes the mapping from value names to positions in its
/// decoded output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TrrFile;

impl TrajFile for TrrFile {
    type Reader = TRRTrajectory;

    fn open_read(path: impl AsRef<Path>) -> xdrfile::Result<TRRTrajectory> {
        TRRTrajectory::open_read(path)
    }

    fn open_write(path: impl AsRef<Path>) -> xdrfile::Result<TRRTrajectory> {
        TRRTrajectory::open_write(path)
    }

    fn output_value_index(value: &str) -> Option<usize> {
        match value {
            "coord" => Some(0),
            "time" => Some(1),
            // Position 2 holds the step number, which has no name here.
            "box" => Some(3),
            _ => None,
        }
    }
}
