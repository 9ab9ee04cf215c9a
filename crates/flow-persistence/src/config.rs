//! Record de configuración de la conversión.
//!
//! Las cuatro claves son obligatorias y se validan antes de tocar el
//! filesystem: una configuración inválida falla rápido, sin efectos
//! secundarios parciales.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use serde_json::Value;

use crate::encode::decode;
use crate::error::PersistenceError;

/// Formato de los archivos del árbol. `yaml` y `yml` sólo difieren en la
/// extensión producida; el monolito es siempre JSON.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileFormat {
    Json,
    Yaml,
    Yml,
}

impl FileFormat {
    pub fn parse(tag: &str) -> Result<Self, PersistenceError> {
        match tag {
            "json" => Ok(FileFormat::Json),
            "yaml" => Ok(FileFormat::Yaml),
            "yml" => Ok(FileFormat::Yml),
            other => Err(PersistenceError::UnsupportedFormat(other.to_string())),
        }
    }

    pub fn extension(&self) -> &'static str {
        match self {
            FileFormat::Json => "json",
            FileFormat::Yaml => "yaml",
            FileFormat::Yml => "yml",
        }
    }

    pub fn is_yaml(&self) -> bool {
        matches!(self, FileFormat::Yaml | FileFormat::Yml)
    }

    /// Formato inferido de la extensión de un path (para el archivo de
    /// configuración en sí). Sin extensión reconocida se asume JSON.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some("yaml") => FileFormat::Yaml,
            Some("yml") => FileFormat::Yml,
            _ => FileFormat::Json,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ConvertConfig {
    pub file_format: FileFormat,
    pub destination_folder: PathBuf,
    pub tabs_order: Vec<String>,
    pub monolith_filename: PathBuf,
}

/// Forma cruda del record: todas las claves opcionales para poder señalar
/// exactamente cuál falta. Claves desconocidas se toleran.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawConfig {
    file_format: Option<String>,
    destination_folder: Option<PathBuf>,
    tabs_order: Option<Vec<String>>,
    monolith_filename: Option<PathBuf>,
}

impl ConvertConfig {
    /// Valida el record de configuración completo. Claves obligatorias:
    /// `fileFormat`, `destinationFolder`, `tabsOrder`, `monolithFilename`.
    pub fn from_value(record: &Value) -> Result<Self, PersistenceError> {
        let raw: RawConfig = serde_json::from_value(record.clone())
            .map_err(|e| PersistenceError::Configuration(e.to_string()))?;

        let file_format = raw.file_format
                             .ok_or_else(|| PersistenceError::missing_key("fileFormat"))?;
        let destination_folder = raw.destination_folder
                                    .ok_or_else(|| PersistenceError::missing_key("destinationFolder"))?;
        let tabs_order = raw.tabs_order
                            .ok_or_else(|| PersistenceError::missing_key("tabsOrder"))?;
        let monolith_filename = raw.monolith_filename
                                   .ok_or_else(|| PersistenceError::missing_key("monolithFilename"))?;

        Ok(ConvertConfig { file_format: FileFormat::parse(&file_format)?,
                           destination_folder,
                           tabs_order,
                           monolith_filename })
    }

    /// Carga y valida la configuración desde un archivo JSON o YAML (según
    /// extensión).
    pub fn load(path: &Path) -> Result<Self, PersistenceError> {
        let text = std::fs::read_to_string(path).map_err(|e| PersistenceError::from_read(path, e))?;
        let record = decode(&text, FileFormat::from_path(path)).map_err(|e| e.at_path(path))?;
        Self::from_value(&record)
    }
}
