use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors produced while converting a directory of map files. Every error is
/// fatal: the first one aborts the whole run before any output is written.
#[derive(Debug, Error)]
pub enum PackError {
    /// Directory listing, file open/read, or output write failure.
    #[error("filesystem error on {}: {source}", path.display())]
    Filesystem {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The XML could not be parsed, or a required attribute/element is
    /// missing (root `width`/`height`, layer `name`, layer data child).
    #[error("malformed map file {}: {reason}", path.display())]
    MalformedMapFile { path: PathBuf, reason: String },

    /// A token in a layer's data text is not a base-10 integer.
    #[error("malformed layer data in layer {layer:?} of {}: {token:?} is not an integer", path.display())]
    MalformedLayerData {
        path: PathBuf,
        layer: String,
        token: String,
    },

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, PackError>;
