//! Module for reading Fortran direct-access unformatted binaries
//!
#![doc = include_str!("../readme.md")]

// Split into subfiles for development, but anything important is re-exported
mod element;
mod error;
mod grid;
mod precision;
mod reader;
mod shape;

#[doc(inline)]
pub use element::Element;

#[doc(inline)]
pub use grid::{Grid, GridData, Plane};

#[doc(inline)]
pub use precision::Precision;

#[doc(inline)]
pub use shape::{Axis, GridShape};

#[doc(inline)]
pub use reader::{decode, read_f90_bin, read_grid, read_grid_data};

#[doc(inline)]
pub use error::{Error, Result};
