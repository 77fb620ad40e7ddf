// standard library
use std::fmt::{Debug, Display, LowerExp};

// crate modules
use crate::precision::Precision;

/// Floating point types that can be stored in a [Grid](crate::Grid)
///
/// Implemented for `f32` and `f64`. Values are decoded from native-endian
/// bytes, so a file is only portable between machines of the same byte order.
pub trait Element: Copy + Debug + Display + LowerExp + PartialEq + 'static {
    /// Precision written to file for this type
    const PRECISION: Precision;

    /// Decode one value from exactly `PRECISION.width()` native-endian bytes
    ///
    /// Callers pass chunks from `chunks_exact`, so the length always matches.
    ///
    /// # Panics
    ///
    /// Panics if `chunk` is not exactly `PRECISION.width()` bytes long.
    fn from_ne_chunk(chunk: &[u8]) -> Self;

    /// Lossless conversion to `f64`
    fn to_f64(self) -> f64;
}

impl Element for f32 {
    const PRECISION: Precision = Precision::Single;

    fn from_ne_chunk(chunk: &[u8]) -> Self {
        let mut bytes = [0u8; 4];
        bytes.copy_from_slice(chunk);
        f32::from_ne_bytes(bytes)
    }

    fn to_f64(self) -> f64 {
        f64::from(self)
    }
}

impl Element for f64 {
    const PRECISION: Precision = Precision::Double;

    fn from_ne_chunk(chunk: &[u8]) -> Self {
        let mut bytes = [0u8; 8];
        bytes.copy_from_slice(chunk);
        f64::from_ne_bytes(bytes)
    }

    fn to_f64(self) -> f64 {
        self
    }
}
