use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{PackError, Result};
use crate::model::LevelPack;
use crate::parser::parse_map_file;

/// Extension of the map files picked up by discovery.
pub const MAP_FILE_EXTENSION: &str = "tmx";

/// List the map files directly inside `dir` (non-recursive), sorted
/// lexicographically by full path. An empty result is not an error.
pub fn discover_map_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let entries = fs::read_dir(dir).map_err(|source| PackError::Filesystem {
        path: dir.to_owned(),
        source,
    })?;

    let mut files = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|source| PackError::Filesystem {
            path: dir.to_owned(),
            source,
        })?;
        let path = entry.path();
        let is_map = path.is_file()
            && path
                .extension()
                .map(|ext| ext == MAP_FILE_EXTENSION)
                .unwrap_or(false);
        if is_map {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

/// Discover, parse, and aggregate a whole input directory into an in-memory
/// [`LevelPack`], in sorted-path order. This is strict: the first failing
/// file aborts the run with its error.
pub fn build_pack(dir: &Path) -> Result<LevelPack> {
    let mut levels = Vec::new();
    for path in discover_map_files(dir)? {
        levels.push(parse_map_file(&path)?);
    }
    Ok(LevelPack { levels })
}

/// Convert `input_dir` and write the resulting JSON document to
/// `output_file`, overwriting anything there. The pack is serialized fully in
/// memory and written in a single call, only after every file has parsed; a
/// failing run never touches the output path.
pub fn convert_directory(input_dir: &Path, output_file: &Path) -> Result<()> {
    let pack = build_pack(input_dir)?;
    let json = serde_json::to_string(&pack)?;
    fs::write(output_file, json).map_err(|source| PackError::Filesystem {
        path: output_file.to_owned(),
        source,
    })?;
    Ok(())
}
