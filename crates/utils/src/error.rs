//! Result and Error types for the utils module

/// Type alias for `Result<T, utils::Error>`
pub type Result<T> = core::result::Result<T, Error>;

#[derive(Debug, PartialEq)]
/// The error type for `f90tools-utils`
pub enum Error {
    /// An empty slice of floats
    SliceContainsNoValues,

    /// The slice of float values contains things like NAN or INFINITY
    SliceContainsUndefinedValues,
}

impl core::fmt::Display for Error {
    fn fmt(&self, fmt: &mut core::fmt::Formatter) -> core::result::Result<(), core::fmt::Error> {
        match self {
            Self::SliceContainsNoValues => write!(fmt, "slice contains no values"),
            Self::SliceContainsUndefinedValues => {
                write!(fmt, "slice contains NaN or infinite values")
            }
        }
    }
}

// needed for the ? operator in downstream crates
impl std::error::Error for Error {}
