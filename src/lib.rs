//! levelpacker — batch-converts a directory of Tiled `.tmx` tile maps into a
//! single consolidated JSON document of levels.
//!
//! The whole program is one linear pipeline: discover map files in an input
//! directory (sorted lexicographically by path), parse each into a [`Level`],
//! collect them into a [`LevelPack`], serialize the pack to JSON and write it
//! in a single call. The first error anywhere aborts the run; no partial
//! output document is ever written.
//!
//! Basic example (no-run):
//!
//! ```rust,no_run
//! let pack = levelpacker::build_pack(std::path::Path::new("assets/maps"))?;
//! println!("{} levels", pack.levels.len());
//! # Ok::<(), levelpacker::PackError>(())
//! ```

pub mod error;
pub mod layer;
pub mod model;
pub mod pack;
pub mod parser;

pub use crate::error::{PackError, Result};
pub use crate::model::{Level, LevelPack};
pub use crate::pack::{build_pack, convert_directory, discover_map_files};
pub use crate::parser::parse_map_file;
