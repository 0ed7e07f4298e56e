use std::collections::BTreeMap;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use xml::reader::{EventReader, XmlEvent};

use crate::error::{PackError, Result};
use crate::layer::parse_layer_data;
use crate::model::Level;

/// Parse a single `.tmx` map file into a [`Level`].
///
/// The level name is the file's base name with its extension removed.
/// `width` and `height` come verbatim from the root element's attributes.
/// Every `layer` element anywhere in the document, in document order,
/// contributes one entry to the level's layer map: its `name` attribute keyed
/// to the decoded text of its first child element (the data node).
pub fn parse_map_file(path: &Path) -> Result<Level> {
    let name = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();

    let file = File::open(path).map_err(|source| PackError::Filesystem {
        path: path.to_owned(),
        source,
    })?;
    let mut reader = EventReader::new(BufReader::new(file));

    let mut width: Option<String> = None;
    let mut height: Option<String> = None;
    let mut saw_root = false;
    let mut layers: BTreeMap<String, Vec<i64>> = BTreeMap::new();

    // Scan state for the layer currently being read. `data_buf` is None until
    // the layer's first child element opens; `capture_depth` tracks nesting
    // inside that child so its text is collected until it closes.
    let mut current_layer: Option<String> = None;
    let mut data_buf: Option<String> = None;
    let mut capture_depth = 0usize;

    loop {
        let event = reader.next().map_err(|err| PackError::MalformedMapFile {
            path: path.to_owned(),
            reason: err.to_string(),
        })?;

        match event {
            XmlEvent::StartElement {
                name, attributes, ..
            } => {
                if !saw_root {
                    saw_root = true;
                    for attr in &attributes {
                        match attr.name.local_name.as_str() {
                            "width" => width = Some(attr.value.clone()),
                            "height" => height = Some(attr.value.clone()),
                            _ => {}
                        }
                    }
                } else if current_layer.is_none() && name.local_name == "layer" {
                    let layer_name = attributes
                        .iter()
                        .find(|a| a.name.local_name == "name")
                        .map(|a| a.value.clone())
                        .ok_or_else(|| PackError::MalformedMapFile {
                            path: path.to_owned(),
                            reason: "layer element without a name attribute".to_string(),
                        })?;
                    current_layer = Some(layer_name);
                    data_buf = None;
                    capture_depth = 0;
                } else if current_layer.is_some() {
                    if capture_depth > 0 {
                        capture_depth += 1;
                    } else if data_buf.is_none() {
                        // First child of the layer: this is its data node.
                        data_buf = Some(String::new());
                        capture_depth = 1;
                    }
                    // Children after the first are ignored.
                }
            }
            XmlEvent::Characters(text) | XmlEvent::CData(text) | XmlEvent::Whitespace(text) => {
                if capture_depth > 0 {
                    if let Some(buf) = data_buf.as_mut() {
                        buf.push_str(&text);
                    }
                }
            }
            XmlEvent::EndElement { name } => {
                if capture_depth > 0 {
                    capture_depth -= 1;
                } else if name.local_name == "layer" {
                    if let Some(layer_name) = current_layer.take() {
                        let raw =
                            data_buf
                                .take()
                                .ok_or_else(|| PackError::MalformedMapFile {
                                    path: path.to_owned(),
                                    reason: format!("layer {layer_name:?} has no data child"),
                                })?;
                        let tiles = parse_layer_data(path, &layer_name, &raw)?;
                        layers.insert(layer_name, tiles);
                    }
                }
            }
            XmlEvent::EndDocument => break,
            _ => {}
        }
    }

    let (Some(width), Some(height)) = (width, height) else {
        return Err(PackError::MalformedMapFile {
            path: path.to_owned(),
            reason: "root element is missing width/height attributes".to_string(),
        });
    };

    Ok(Level {
        name,
        width,
        height,
        layers,
    })
}

// File-system dependent tests live in the integration test directory `tests/`.
