//! Lectura y escritura del monolito.
//!
//! El monolito es siempre un único array JSON con todos los nodos, sea cual
//! sea el `fileFormat` configurado para el árbol.

use std::fs;
use std::path::Path;

use serde_json::Value;

use crate::config::FileFormat;
use crate::encode::{decode, encode};
use crate::error::PersistenceError;

pub fn read_monolith(path: &Path) -> Result<Vec<Value>, PersistenceError> {
    let text = fs::read_to_string(path).map_err(|e| PersistenceError::from_read(path, e))?;
    let value = decode(&text, FileFormat::Json).map_err(|e| e.at_path(path))?;
    value.as_array().cloned().ok_or_else(|| PersistenceError::Parse {
        context: path.display().to_string(),
        detail: "monolith must be a JSON array of nodes".into(),
    })
}

pub fn write_monolith(path: &Path, nodes: &[Value]) -> Result<(), PersistenceError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| PersistenceError::from_write(parent, e))?;
    }
    let text = encode(&Value::Array(nodes.to_vec()), FileFormat::Json)?;
    fs::write(path, text).map_err(|e| PersistenceError::from_write(path, e))?;
    log::debug!("monolito escrito en {} ({} nodos)", path.display(), nodes.len());
    Ok(())
}
