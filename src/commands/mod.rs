//! Command implementation for the `gatebench-compare` CLI.

mod common;
mod compare;

pub use compare::{CompareArgs, run as compare};
