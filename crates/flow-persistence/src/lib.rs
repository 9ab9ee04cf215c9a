//! flow-persistence: colaboradores de archivo de la conversión.
//!
//! Aísla todo el I/O detrás de errores semánticos, igual que el núcleo aísla
//! las transformaciones puras: record de configuración validado de forma
//! temprana, colaborador de codificación JSON/YAML, y lectura/escritura del
//! árbol descompuesto y del monolito. Las operaciones por lotes son
//! best-effort: el fallo de una entrada se registra y no aborta el resto.

pub mod config;
pub mod encode;
pub mod error;
pub mod monolith;
pub mod tree_io;

pub use config::{ConvertConfig, FileFormat};
pub use encode::{decode, encode};
pub use error::PersistenceError;
pub use monolith::{read_monolith, write_monolith};
pub use tree_io::{read_tree, write_tree, ReadReport, WriteReport};
