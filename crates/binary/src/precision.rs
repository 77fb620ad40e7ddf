// crate modules
use crate::error::{Error, Result};

/// Floating point precision of the stored values
///
/// Fortran `real(4)` and `real(8)` are the only kinds written by the direct
/// access files handled here. Raw integer selectors are converted with
/// [TryFrom], which is where anything other than 4 or 8 gets rejected.
///
/// ```rust
/// # use f90tools_binary::Precision;
/// assert_eq!(Precision::try_from(4_i64).unwrap(), Precision::Single);
/// assert_eq!(Precision::try_from(8_i64).unwrap(), Precision::Double);
/// assert!(Precision::try_from(2_i64).is_err());
///
/// assert_eq!(Precision::Double.width(), 8);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Precision {
    /// IEEE-754 binary32, 4 bytes
    Single,
    /// IEEE-754 binary64, 8 bytes
    Double,
}

impl Precision {
    /// Number of bytes per stored value
    pub const fn width(&self) -> usize {
        match self {
            Self::Single => 4,
            Self::Double => 8,
        }
    }

    /// Largest width of any precision, used for overflow checks on shapes
    pub(crate) const MAX_WIDTH: usize = 8;
}

impl TryFrom<i64> for Precision {
    type Error = Error;

    fn try_from(width: i64) -> Result<Self> {
        match width {
            4 => Ok(Self::Single),
            8 => Ok(Self::Double),
            _ => Err(Error::InvalidPrecision(width)),
        }
    }
}

impl std::fmt::Display for Precision {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Single => write!(f, "single"),
            Self::Double => write!(f, "double"),
        }
    }
}
