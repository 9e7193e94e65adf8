//! Loading and normalization of gatebench result documents.
//!
//! Each input file holds one JSON document emitted by a gatebench run. The
//! documents have no guaranteed shape, so loading happens in two stages:
//! [`loader::load`] decodes a file into an opaque [`RawResult`], and
//! [`ResultRow::from_raw`] projects that document onto the fixed comparison
//! schema, substituting defaults for anything missing or malformed.

mod loader;
mod row;

pub use loader::load;
pub use row::{RawResult, ResultRow};
