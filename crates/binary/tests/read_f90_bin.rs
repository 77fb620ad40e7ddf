//! Integration tests for reading direct-access binaries

use std::io::Write;
use std::path::PathBuf;

use f90tools_binary::{
    read_f90_bin, read_grid, read_grid_data, Error, Grid, GridData, GridShape, Precision,
};
use rstest::{fixture, rstest};
use tempfile::{NamedTempFile, TempDir};

/// Known value for every (i,j,k), unique across any grid used here
fn known(i: usize, j: usize, k: usize) -> f64 {
    i as f64 + 10.0 * j as f64 + 100.0 * k as f64 + 0.25
}

/// Flatten `known` values in Fortran order, i fastest
fn column_major(nx: usize, ny: usize, nz: usize) -> Vec<f64> {
    let mut values = Vec::with_capacity(nx * ny * nz);
    for k in 0..nz {
        for j in 0..ny {
            for i in 0..nx {
                values.push(known(i, j, k));
            }
        }
    }
    values
}

fn write_bytes(bytes: &[u8]) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(bytes).unwrap();
    file.flush().unwrap();
    file
}

fn write_single(values: &[f32]) -> NamedTempFile {
    let bytes: Vec<u8> = values.iter().flat_map(|v| v.to_ne_bytes()).collect();
    write_bytes(&bytes)
}

fn write_double(values: &[f64]) -> NamedTempFile {
    let bytes: Vec<u8> = values.iter().flat_map(|v| v.to_ne_bytes()).collect();
    write_bytes(&bytes)
}

/// Write the known grid at the requested element width
fn write_known(nx: usize, ny: usize, nz: usize, precision: i64) -> NamedTempFile {
    let values = column_major(nx, ny, nz);
    match precision {
        4 => write_single(&values.iter().map(|v| *v as f32).collect::<Vec<_>>()),
        8 => write_double(&values),
        _ => unreachable!("test only writes valid precisions"),
    }
}

#[fixture]
fn missing_path() -> (TempDir, PathBuf) {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("missing.bin");
    (dir, path)
}

#[rstest]
#[case(1, 1, 1, 4)]
#[case(2, 2, 1, 4)]
#[case(3, 4, 5, 4)]
#[case(7, 1, 3, 4)]
#[case(1, 1, 1, 8)]
#[case(2, 3, 2, 8)]
#[case(5, 4, 3, 8)]
#[case(1, 6, 1, 8)]
fn known_grid_round_trip(
    #[case] nx: usize,
    #[case] ny: usize,
    #[case] nz: usize,
    #[case] precision: i64,
) {
    let file = write_known(nx, ny, nz, precision);
    let data = read_f90_bin(file.path(), nx, ny, nz, precision).unwrap();

    assert_eq!(data.shape(), GridShape::new(nx, ny, nz).unwrap());
    assert_eq!(data.precision().width() as i64, precision);

    for k in 0..nz {
        for j in 0..ny {
            for i in 0..nx {
                let expected = match precision {
                    4 => f64::from(known(i, j, k) as f32),
                    _ => known(i, j, k),
                };
                assert_eq!(data.get(i, j, k), Some(expected), "at ({i},{j},{k})");
            }
        }
    }
    assert_eq!(data.get(nx, 0, 0), None);
}

#[test]
fn column_major_ordering() {
    let file = write_single(&[1.0, 2.0, 3.0, 4.0]);
    let data = read_f90_bin(file.path(), 2, 2, 1, 4).unwrap();
    let grid = data.as_single().unwrap();

    assert_eq!(grid[(0, 0, 0)], 1.0);
    assert_eq!(grid[(1, 0, 0)], 2.0);
    assert_eq!(grid[(0, 1, 0)], 3.0);
    assert_eq!(grid[(1, 1, 0)], 4.0);
}

#[test]
fn bit_exact_special_values() {
    let single = [
        f32::from_bits(0x7fc0_1234), // NaN with payload
        -0.0,
        f32::MIN_POSITIVE / 2.0, // subnormal
        f32::NEG_INFINITY,
    ];
    let file = write_single(&single);
    let shape = GridShape::new(1, 2, 2).unwrap();
    let grid: Grid<f32> = read_grid(file.path(), shape).unwrap();
    let bits: Vec<u32> = grid.values().iter().map(|v| v.to_bits()).collect();
    assert_eq!(bits, single.map(f32::to_bits));

    let double = [f64::from_bits(0x7ff8_0000_dead_beef), -0.0, f64::MAX, 5e-324];
    let file = write_double(&double);
    let grid: Grid<f64> = read_grid(file.path(), shape).unwrap();
    let bits: Vec<u64> = grid.values().iter().map(|v| v.to_bits()).collect();
    assert_eq!(bits, double.map(f64::to_bits));
}

#[rstest]
#[case(2)]
#[case(0)]
#[case(-1)]
#[case(16)]
fn invalid_precision_before_io(missing_path: (TempDir, PathBuf), #[case] precision: i64) {
    let (_dir, path) = missing_path;
    let result = read_f90_bin(&path, 2, 2, 2, precision);
    assert!(
        matches!(result, Err(Error::InvalidPrecision(p)) if p == precision),
        "{result:?}"
    );
}

#[rstest]
#[case(0, 2, 2)]
#[case(2, 0, 2)]
#[case(2, 2, 0)]
fn invalid_shape_before_io(
    missing_path: (TempDir, PathBuf),
    #[case] nx: usize,
    #[case] ny: usize,
    #[case] nz: usize,
) {
    let (_dir, path) = missing_path;
    let result = read_f90_bin(&path, nx, ny, nz, 8);
    assert!(matches!(result, Err(Error::InvalidShape { .. })), "{result:?}");
}

#[rstest]
#[case(4)]
#[case(8)]
fn missing_file_is_io_error(missing_path: (TempDir, PathBuf), #[case] precision: i64) {
    let (_dir, path) = missing_path;
    match read_f90_bin(&path, 2, 2, 2, precision) {
        Err(Error::IoError { path: found, source }) => {
            assert_eq!(found, path);
            assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
        }
        other => panic!("expected IoError, got {other:?}"),
    }
}

#[rstest]
#[case(4, 7)] // one element short
#[case(4, 9)] // one element long
#[case(8, 7)]
#[case(8, 9)]
#[case(4, 0)] // empty file
fn element_count_mismatch_is_malformed(#[case] precision: i64, #[case] n_written: usize) {
    let values = vec![1.0_f64; n_written];
    let file = match precision {
        4 => write_single(&values.iter().map(|v| *v as f32).collect::<Vec<_>>()),
        _ => write_double(&values),
    };

    match read_f90_bin(file.path(), 2, 2, 2, precision) {
        Err(Error::MalformedFile {
            path,
            expected,
            found,
        }) => {
            assert_eq!(path.as_deref(), Some(file.path()));
            assert_eq!(expected, 8 * precision as u64);
            assert_eq!(found, n_written as u64 * precision as u64);
        }
        other => panic!("expected MalformedFile, got {other:?}"),
    }
}

#[test]
fn partial_element_is_malformed() {
    // a double precision grid read as 4 bytes too many
    let mut bytes: Vec<u8> = [1.0_f64, 2.0].iter().flat_map(|v| v.to_ne_bytes()).collect();
    bytes.extend_from_slice(&[0u8; 4]);
    let file = write_bytes(&bytes);

    let result = read_f90_bin(file.path(), 2, 1, 1, 8);
    assert!(matches!(result, Err(Error::MalformedFile { .. })), "{result:?}");
}

#[test]
fn precision_mismatch_is_malformed() {
    // 8 single precision values can not be a 2x2x2 double grid
    let file = write_single(&[0.0; 8]);
    let result = read_f90_bin(file.path(), 2, 2, 2, 8);
    assert!(matches!(result, Err(Error::MalformedFile { .. })), "{result:?}");

    // ...but happen to be the right size for a 2x2x1 one
    let data = read_f90_bin(file.path(), 2, 2, 1, 8).unwrap();
    assert_eq!(data.precision(), Precision::Double);
}

#[test]
fn repeated_reads_are_equal() {
    let file = write_known(3, 2, 4, 8);
    let shape = GridShape::new(3, 2, 4).unwrap();

    let first = read_grid_data(file.path(), shape, Precision::Double).unwrap();
    let second = read_grid_data(file.path(), shape, Precision::Double).unwrap();
    assert_eq!(first, second);
    assert!(matches!(first, GridData::Double(_)));
}

#[rstest]
#[case(1, 1, 1)]
#[case(32, 32, 1)]
#[case(1024, 1, 1)]
fn directory_is_io_error(#[case] nx: usize, #[case] ny: usize, #[case] nz: usize) {
    // the outcome must not depend on how the directory size compares to the grid
    let dir = TempDir::new().unwrap();
    match read_f90_bin(dir.path(), nx, ny, nz, 4) {
        Err(Error::IoError { path, .. }) => assert_eq!(path, dir.path()),
        other => panic!("expected IoError, got {other:?}"),
    }
}
