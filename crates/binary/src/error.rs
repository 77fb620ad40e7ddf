//! Result and Error types for the binary module

// standard library
use std::path::PathBuf;

// crate modules
use crate::shape::Axis;

/// Type alias for `Result<T, binary::Error>`
pub type Result<T> = core::result::Result<T, Error>;

#[derive(thiserror::Error, Debug)]
/// The error type for `f90tools-binary`
pub enum Error {
    /// Element width other than 4 or 8 bytes
    #[error("precision must be 4 (single) or 8 (double) bytes, found {0}")]
    InvalidPrecision(i64),

    /// Zero dimension, or a grid too large to address
    #[error("invalid grid dimensions {nx}x{ny}x{nz}")]
    InvalidShape { nx: usize, ny: usize, nz: usize },

    /// Failure to open or read the file
    #[error("failure in file I/O for {path:?}")]
    IoError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// File or buffer length does not match the requested grid
    ///
    /// `path` is `None` when decoding a buffer already held in memory.
    #[error(
        "unexpected byte length{} (expected {expected} bytes, found {found})",
        source_name(.path)
    )]
    MalformedFile {
        path: Option<PathBuf>,
        expected: u64,
        found: u64,
    },

    /// Plane requested outside of the grid
    #[error("index {index} outside of {axis} axis with {length} entries")]
    IndexOutOfBounds {
        axis: Axis,
        index: usize,
        length: usize,
    },
}

/// Describe where a malformed payload came from, if anywhere
fn source_name(path: &Option<PathBuf>) -> String {
    match path {
        Some(path) => format!(" for {path:?}"),
        None => String::new(),
    }
}
