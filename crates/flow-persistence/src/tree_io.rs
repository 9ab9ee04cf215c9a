//! Lectura y escritura del árbol descompuesto.
//!
//! Disposición en disco:
//! `<destino>/tabs/<slug>.<ext>`, `<destino>/subflows/<slug>.<ext>`,
//! `<destino>/config-nodes/<slug>.<ext>`, un archivo por entrada. Las
//! operaciones son por lotes y best-effort: el fallo de un archivo se
//! registra y se acumula en el reporte sin abortar el resto. No hay
//! transacción ni rollback: un fallo a mitad deja un árbol parcial.

use std::fs;
use std::path::{Path, PathBuf};

use flow_domain::{Folder, TreeEntry};
use serde_json::Value;

use crate::config::ConvertConfig;
use crate::encode::{decode, encode};
use crate::error::PersistenceError;

/// Resultado de una escritura por lotes.
#[derive(Debug, Default)]
pub struct WriteReport {
    pub written: Vec<PathBuf>,
    pub failures: Vec<(PathBuf, PersistenceError)>,
}

impl WriteReport {
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Resultado de una lectura por lotes.
#[derive(Debug, Default)]
pub struct ReadReport {
    pub entries: Vec<TreeEntry>,
    pub failures: Vec<(PathBuf, PersistenceError)>,
}

impl ReadReport {
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }
}

fn entry_path(config: &ConvertConfig, entry: &TreeEntry) -> PathBuf {
    config.destination_folder
          .join(entry.folder.as_str())
          .join(format!("{}.{}", entry.file_name, config.file_format.extension()))
}

fn write_entry(entry: &TreeEntry, path: &Path, config: &ConvertConfig) -> Result<(), PersistenceError> {
    let text = encode(&Value::Array(entry.content.clone()), config.file_format)?;
    fs::write(path, text).map_err(|e| PersistenceError::from_write(path, e))
}

/// Escribe una entrada por archivo bajo las tres carpetas de categoría.
/// La creación de carpetas es previa y sí aborta si falla (sin destino no
/// hay lote que intentar).
pub fn write_tree(entries: &[TreeEntry], config: &ConvertConfig) -> Result<WriteReport, PersistenceError> {
    for folder in Folder::all() {
        let dir = config.destination_folder.join(folder.as_str());
        fs::create_dir_all(&dir).map_err(|e| PersistenceError::from_write(&dir, e))?;
    }

    let mut report = WriteReport::default();
    for entry in entries {
        let path = entry_path(config, entry);
        match write_entry(entry, &path, config) {
            Ok(()) => {
                log::debug!("escrito {}", path.display());
                report.written.push(path);
            }
            Err(err) => {
                log::error!("fallo escribiendo {}: {err}", path.display());
                report.failures.push((path, err));
            }
        }
    }
    Ok(report)
}

fn read_entry(path: &Path, folder: Folder, config: &ConvertConfig) -> Result<TreeEntry, PersistenceError> {
    let text = fs::read_to_string(path).map_err(|e| PersistenceError::from_read(path, e))?;
    let value = decode(&text, config.file_format).map_err(|e| e.at_path(path))?;
    let content = value.as_array().cloned().ok_or_else(|| PersistenceError::Parse {
        context: path.display().to_string(),
        detail: "tree file must contain a sequence of records".into(),
    })?;
    let file_name = path.file_stem()
                        .and_then(|s| s.to_str())
                        .unwrap_or_default()
                        .to_string();
    Ok(TreeEntry::new(folder, file_name, content))
}

/// Lee el árbol completo desde el directorio destino. Carpeta destino
/// ausente es `SourceNotFound`; una carpeta de categoría ausente equivale a
/// categoría vacía. Los archivos se recorren en orden de nombre para que la
/// lectura sea determinista.
pub fn read_tree(config: &ConvertConfig) -> Result<ReadReport, PersistenceError> {
    let root = &config.destination_folder;
    if !root.is_dir() {
        return Err(PersistenceError::SourceNotFound(root.clone()));
    }

    let mut report = ReadReport::default();
    for folder in Folder::all() {
        let dir = root.join(folder.as_str());
        if !dir.is_dir() {
            continue;
        }
        let mut paths: Vec<PathBuf> = fs::read_dir(&dir)
            .map_err(|e| PersistenceError::from_read(&dir, e))?
            .filter_map(|dent| dent.ok().map(|d| d.path()))
            .filter(|p| {
                p.extension().and_then(|e| e.to_str()) == Some(config.file_format.extension())
            })
            .collect();
        paths.sort();

        for path in paths {
            match read_entry(&path, folder, config) {
                Ok(entry) => report.entries.push(entry),
                Err(err) => {
                    log::error!("fallo leyendo {}: {err}", path.display());
                    report.failures.push((path, err));
                }
            }
        }
    }
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FileFormat;
    use serde_json::json;
    use tempfile::TempDir;

    fn config_for(dir: &TempDir, format: FileFormat) -> ConvertConfig {
        ConvertConfig { file_format: format,
                        destination_folder: dir.path().join("out"),
                        tabs_order: vec![],
                        monolith_filename: dir.path().join("flows.json") }
    }

    fn sample_entries() -> Vec<TreeEntry> {
        vec![TreeEntry::new(Folder::Tabs, "main".into(),
                            vec![json!({"id": "f1", "type": "tab"}),
                                 json!({"id": "n1", "type": "inject", "z": "f1"})]),
             TreeEntry::new(Folder::ConfigNodes, "broker".into(),
                            vec![json!({"id": "c1", "type": "mqtt-broker"})])]
    }

    #[test]
    fn write_then_read_round_trips_entries() {
        let dir = TempDir::new().unwrap();
        let config = config_for(&dir, FileFormat::Json);
        let entries = sample_entries();

        let written = write_tree(&entries, &config).unwrap();
        assert!(written.is_complete());
        assert_eq!(written.written.len(), 2);
        assert!(config.destination_folder.join("tabs/main.json").is_file());

        let read = read_tree(&config).unwrap();
        assert!(read.is_complete());
        assert_eq!(read.entries, entries);
    }

    #[test]
    fn yaml_trees_use_the_configured_extension() {
        let dir = TempDir::new().unwrap();
        let config = config_for(&dir, FileFormat::Yml);
        write_tree(&sample_entries(), &config).unwrap();
        assert!(config.destination_folder.join("tabs/main.yml").is_file());

        let read = read_tree(&config).unwrap();
        assert_eq!(read.entries.len(), 2);
    }

    #[test]
    fn missing_destination_is_source_not_found() {
        let dir = TempDir::new().unwrap();
        let config = config_for(&dir, FileFormat::Json);
        let err = read_tree(&config).unwrap_err();
        assert!(matches!(err, PersistenceError::SourceNotFound(_)));
    }

    #[test]
    fn one_malformed_file_does_not_abort_the_batch() {
        let dir = TempDir::new().unwrap();
        let config = config_for(&dir, FileFormat::Json);
        write_tree(&sample_entries(), &config).unwrap();
        fs::write(config.destination_folder.join("tabs/broken.json"), "{not json").unwrap();

        let read = read_tree(&config).unwrap();
        assert_eq!(read.entries.len(), 2);
        assert_eq!(read.failures.len(), 1);
        assert!(!read.is_complete());
    }

    #[test]
    fn foreign_extensions_are_ignored() {
        let dir = TempDir::new().unwrap();
        let config = config_for(&dir, FileFormat::Json);
        write_tree(&sample_entries(), &config).unwrap();
        fs::write(config.destination_folder.join("tabs/notes.txt"), "hi").unwrap();

        let read = read_tree(&config).unwrap();
        assert!(read.is_complete());
        assert_eq!(read.entries.len(), 2);
    }
}
