//! Report generation for comparison results.
//!
//! Two generators are provided, each accessed through a `generate` function:
//! - **Console**: fixed-width comparison table plus a best/worst summary block
//! - **CSV**: spreadsheet-compatible format with a fixed column set
//!
//! Both operate on the same input, a slice of [`crate::results::ResultRow`] in
//! its current order, and write into any [`core::fmt::Write`] sink. Neither
//! performs I/O or reorders rows; the caller decides where the text goes.

mod console;
mod csv;

pub use console::{generate_summary, generate_table};
pub use csv::{FIELDNAMES, generate as generate_csv};
