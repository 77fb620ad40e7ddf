//! Read operations for Fortran direct-access unformatted binaries
//!
//! Files are a single record of raw values with no header, padding, or
//! record length markers. The element count is fixed by the grid shape, so
//! the file length is fully determined before anything is read.

// standard library
use std::fs::File;
use std::io::{ErrorKind, Read};
use std::path::Path;

// crate modules
use crate::element::Element;
use crate::error::{Error, Result};
use crate::grid::{Grid, GridData};
use crate::precision::Precision;
use crate::shape::GridShape;

// external crates
use log::{debug, info, trace};

/// Read a Fortran direct-access binary file of known dimensions
///
/// Returns a [GridData] holding the `nx` x `ny` x `nz` values stored in the
/// file at `path`, with `precision` as the element width in bytes (4 for
/// single, 8 for double).
///
/// Arguments are validated before the file is touched. A `precision` other
/// than 4 or 8 is an [Error::InvalidPrecision] and a zero dimension is an
/// [Error::InvalidShape], even for a path that does not exist.
///
/// The file must be exactly `nx*ny*nz*precision` bytes long, anything else
/// is an [Error::MalformedFile].
///
/// ```rust
/// # use f90tools_binary::{read_f90_bin, Error};
/// // Nothing is opened for invalid precisions
/// let result = read_f90_bin("./does/not/exist.bin", 2, 2, 1, 2);
/// assert!(matches!(result, Err(Error::InvalidPrecision(2))));
///
/// // Only then is the file opened
/// let result = read_f90_bin("./does/not/exist.bin", 2, 2, 1, 4);
/// assert!(matches!(result, Err(Error::IoError { .. })));
/// ```
pub fn read_f90_bin<P: AsRef<Path>>(
    path: P,
    nx: usize,
    ny: usize,
    nz: usize,
    precision: i64,
) -> Result<GridData> {
    let precision = Precision::try_from(precision)?;
    let shape = GridShape::new(nx, ny, nz)?;
    read_grid_data(path, shape, precision)
}

/// Read a Fortran direct-access binary file at a runtime precision
///
/// Typed equivalent of [read_f90_bin()] for callers that already hold a
/// validated [GridShape] and [Precision].
pub fn read_grid_data<P: AsRef<Path>>(
    path: P,
    shape: GridShape,
    precision: Precision,
) -> Result<GridData> {
    match precision {
        Precision::Single => read_grid::<f32, P>(path, shape).map(GridData::Single),
        Precision::Double => read_grid::<f64, P>(path, shape).map(GridData::Double),
    }
}

/// Read a Fortran direct-access binary file at a compile-time precision
///
/// The element type `T` decides the width of each value, `f32` for
/// `real(4)` and `f64` for `real(8)` data.
///
/// ```rust, no_run
/// # use f90tools_binary::{read_grid, Grid, GridShape};
/// let shape = GridShape::new(128, 128, 64).unwrap();
/// let grid: Grid<f32> = read_grid("./data/theta.bin", shape).unwrap();
/// println!("{grid}");
/// ```
pub fn read_grid<T: Element, P: AsRef<Path>>(path: P, shape: GridShape) -> Result<Grid<T>> {
    let path = path.as_ref();
    info!("Reading {}", path.display());
    debug!("Expecting {shape} grid of {} precision values", T::PRECISION);

    let bytes = read_payload(path, shape.byte_length(T::PRECISION))?;
    decode(&bytes, shape)
}

/// Decode a buffer of native-endian values into a column-major [Grid]
///
/// The buffer must hold exactly the number of bytes required by `shape` at
/// the precision of `T`, otherwise an [Error::MalformedFile] with no path is
/// returned. Nothing is truncated or padded.
///
/// ```rust
/// # use f90tools_binary::{decode, Error, Grid, GridShape};
/// let shape = GridShape::new(1, 2, 1).unwrap();
/// let bytes: Vec<u8> = [0.5_f64, 1.5].iter().flat_map(|v| v.to_ne_bytes()).collect();
///
/// let grid: Grid<f64> = decode(&bytes, shape).unwrap();
/// assert_eq!(grid[(0, 1, 0)], 1.5);
///
/// // one byte short
/// let result = decode::<f64>(&bytes[1..], shape);
/// assert!(matches!(result, Err(Error::MalformedFile { path: None, .. })));
/// ```
pub fn decode<T: Element>(bytes: &[u8], shape: GridShape) -> Result<Grid<T>> {
    let expected = shape.byte_length(T::PRECISION) as u64;
    let found = bytes.len() as u64;
    if found != expected {
        return Err(Error::MalformedFile {
            path: None,
            expected,
            found,
        });
    }

    trace!("Decoding {} values", shape.number_of_elements());
    let values = bytes
        .chunks_exact(T::PRECISION.width())
        .map(T::from_ne_chunk)
        .collect();

    Ok(Grid::from_column_major(shape, values))
}

/// Read the full file into memory, checking the length before and after
fn read_payload(path: &Path, expected: usize) -> Result<Vec<u8>> {
    let io_error = |source: std::io::Error| Error::IoError {
        path: path.to_path_buf(),
        source,
    };

    let file = File::open(path).map_err(io_error)?;
    let metadata = file.metadata().map_err(io_error)?;

    // directories and other special files open fine on unix, but are not data
    if !metadata.is_file() {
        return Err(io_error(std::io::Error::new(
            ErrorKind::InvalidInput,
            "not a regular file",
        )));
    }
    check_length(path, expected, metadata.len())?;

    // one byte past the expected length is enough to catch a file that grew
    let mut bytes = Vec::with_capacity(expected);
    file.take(expected as u64 + 1)
        .read_to_end(&mut bytes)
        .map_err(io_error)?;
    check_length(path, expected, bytes.len() as u64)?;

    debug!("Read {} bytes", bytes.len());
    Ok(bytes)
}

/// Compare the byte count of a file against the grid it should hold
fn check_length(path: &Path, expected: usize, found: u64) -> Result<()> {
    let expected = expected as u64;
    if found == expected {
        Ok(())
    } else {
        Err(Error::MalformedFile {
            path: Some(path.to_path_buf()),
            expected,
            found,
        })
    }
}
