//! Common extensions for float primitives
//!
#![doc = include_str!("../readme.md")]

// Alias for the format! macro
pub use std::format as f;

mod error;
mod slice_ext;
mod value_ext;

pub use error::{Error, Result};
pub use slice_ext::SliceExt;
pub use value_ext::ValueExt;
