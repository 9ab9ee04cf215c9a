//! Errores de persistencia.
//!
//! Mapea errores de `std::io` y de los codecs a variantes semánticas, de
//! modo que ningún error crudo cruce la frontera pública. `NotFound` se
//! distingue del resto: un origen ausente no es lo mismo que un fallo de
//! escritura.

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("configuration: {0}")]
    Configuration(String),
    #[error("unsupported file format `{0}` (expected json, yaml or yml)")]
    UnsupportedFormat(String),
    #[error("source not found: {}", .0.display())]
    SourceNotFound(PathBuf),
    #[error("parse error in {context}: {detail}")]
    Parse { context: String, detail: String },
    #[error("write error in {context}: {detail}")]
    Write { context: String, detail: String },
}

impl PersistenceError {
    pub fn missing_key(key: &str) -> Self {
        PersistenceError::Configuration(format!("missing required key `{key}`"))
    }

    /// Error de I/O en lectura: origen ausente o contenido ilegible.
    pub fn from_read(path: &Path, err: io::Error) -> Self {
        if err.kind() == io::ErrorKind::NotFound {
            PersistenceError::SourceNotFound(path.to_path_buf())
        } else {
            PersistenceError::Parse { context: path.display().to_string(),
                                      detail: err.to_string() }
        }
    }

    /// Error de I/O al persistir.
    pub fn from_write(path: &Path, err: io::Error) -> Self {
        PersistenceError::Write { context: path.display().to_string(),
                                  detail: err.to_string() }
    }

    /// Reancla un error de codec al path del archivo implicado.
    pub fn at_path(self, path: &Path) -> Self {
        let context = path.display().to_string();
        match self {
            PersistenceError::Parse { detail, .. } => PersistenceError::Parse { context, detail },
            PersistenceError::Write { detail, .. } => PersistenceError::Write { context, detail },
            other => other,
        }
    }
}
