use std::path::Path;

use glam::{Mat3, Vec3};
use xdrfile::{Frame, Trajectory};

pub mod trr;

pub use crate::trr::TrrFile;

pub type BoxVec = Mat3;

/// A trajectory file format adapter.
///
/// Implementations do no parsing of their own. They name the xdr reader that
/// handles their format and fix where each named per-frame quantity sits in
/// that reader's positional output (see [`output_values`]).
pub trait TrajFile {
    /// The reader implementation that parses and writes this format.
    type Reader: Trajectory + 'static;

    /// Open `path` for reading with the named reader.
    fn open_read(path: impl AsRef<Path>) -> xdrfile::Result<Self::Reader>;

    /// Open `path` for writing with the named reader.
    fn open_write(path: impl AsRef<Path>) -> xdrfile::Result<Self::Reader>;

    /// The position of a named per-frame quantity in the reader's output.
    ///
    /// Names outside the format's vocabulary yield [`None`]. Whether an absent
    /// position is an error is left to the caller.
    fn output_value_index(value: &str) -> Option<usize>;
}

/// A per-frame quantity as decoded by an xdr reader.
#[derive(Debug, Clone, PartialEq)]
pub enum OutputValue {
    /// Atom positions in nm.
    Coords(Vec<Vec3>),
    /// Time in picoseconds.
    Time(f32),
    /// Integration step number.
    Step(usize),
    /// The simulation box vectors.
    BoxVec(BoxVec),
}

/// Flatten a decoded [`Frame`] into the positional layout that the format
/// adapters translate value names into.
pub fn output_values(frame: &Frame) -> [OutputValue; 4] {
    [
        OutputValue::Coords(frame.coords.iter().map(|&c| Vec3::from_array(c)).collect()),
        OutputValue::Time(frame.time),
        OutputValue::Step(frame.step),
        OutputValue::BoxVec(BoxVec::from_cols_array_2d(&frame.box_vector)),
    ]
}

/// The trajectory formats that can be dispatched on at open-time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Trr,
}

impl Format {
    /// Determine the format of `path` from its extension.
    ///
    /// Unrecognized extensions yield [`None`].
    pub fn from_path(path: impl AsRef<Path>) -> Option<Self> {
        match path.as_ref().extension()?.to_str()? {
            "trr" => Some(Self::Trr),
            _ => None,
        }
    }

    /// Open `path` for reading with the reader that handles this format.
    pub fn open_read(self, path: impl AsRef<Path>) -> xdrfile::Result<Box<dyn Trajectory>> {
        match self {
            Self::Trr => Ok(Box::new(TrrFile::open_read(path)?)),
        }
    }

    /// The position of a named per-frame quantity for this format.
    pub fn output_value_index(self, value: &str) -> Option<usize> {
        match self {
            Self::Trr => TrrFile::output_value_index(value),
        }
    }
}
