//! Sorted range table over layer Z heights.
//!
//! This crate provides an immutable lookup table for discretized layer
//! heights, built once from a snapshot of `u32` samples and queried for
//! "which recorded heights fall within [min, max]?" any number of times
//! afterward. Construction copies (and, when needed, sorts) the caller's
//! input; queries run in O(log n + k) via binary search over the sorted
//! storage.
//!
//! # Key Types
//!
//! - [`ZTable`] - the sorted height table with the inclusive range query
//! - [`HeightsIter`] - iterator over stored heights, whole-table or windowed
//! - [`Error`] / [`Result`] - error surface of the checked constructor

pub mod error;
pub mod z_table;

#[cfg(test)]
mod tests;

pub use error::{Error, ErrorKind, Result};
pub use z_table::{HeightsIter, ZTable};
