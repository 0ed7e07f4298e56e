use std::path::Path;

use crate::error::{PackError, Result};

/// Decode one layer's raw data text: a comma-separated list of base-10 tile
/// indices, with embedded newlines permitted as formatting whitespace.
///
/// The token count is preserved exactly as written; no `width * height`
/// validation is performed. `path` and `layer` are only used for error
/// context.
pub fn parse_layer_data(path: &Path, layer: &str, raw: &str) -> Result<Vec<i64>> {
    let flat = raw.replace('\n', "");
    flat.split(',')
        .map(|token| {
            token
                .parse::<i64>()
                .map_err(|_| PackError::MalformedLayerData {
                    path: path.to_owned(),
                    layer: layer.to_owned(),
                    token: token.to_owned(),
                })
        })
        .collect()
}
