use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One parsed tile-map file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Level {
    /// Base name of the source file, extension stripped.
    pub name: String,
    /// Root-element attribute, passed through verbatim. Deliberately kept as
    /// a string: the source format is lenient here and consumers expect the
    /// unconverted value.
    pub width: String,
    /// Root-element attribute, passed through verbatim (see `width`).
    pub height: String,
    /// Layer name → decoded tile indices, flat in row-major source order.
    /// Duplicate layer names within one file are last-write-wins. The length
    /// is whatever the data text contained; it is not checked against
    /// `width * height`.
    pub layers: BTreeMap<String, Vec<i64>>,
}

/// The aggregate output document: every level of a run, in sorted
/// input-path order.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LevelPack {
    pub levels: Vec<Level>,
}
