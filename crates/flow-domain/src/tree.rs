//! Unidades de serialización del árbol descompuesto.

use serde_json::Value;

/// Carpeta destino de un `TreeEntry` dentro del directorio descompuesto.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Folder {
    Tabs,
    Subflows,
    ConfigNodes,
}

impl Folder {
    pub fn as_str(&self) -> &'static str {
        match self {
            Folder::Tabs => "tabs",
            Folder::Subflows => "subflows",
            Folder::ConfigNodes => "config-nodes",
        }
    }

    /// Las tres carpetas, en el orden natural de exportación.
    pub fn all() -> [Folder; 3] {
        [Folder::Tabs, Folder::Subflows, Folder::ConfigNodes]
    }
}

/// Un archivo del árbol: carpeta, nombre y lista de contenido. El primer
/// elemento del contenido es el record de la entidad propietaria; después
/// vienen sus nodos hijos exportados.
#[derive(Debug, Clone, PartialEq)]
pub struct TreeEntry {
    pub folder: Folder,
    pub file_name: String,
    pub content: Vec<Value>,
}

impl TreeEntry {
    pub fn new(folder: Folder, file_name: String, content: Vec<Value>) -> Self {
        Self { folder, file_name, content }
    }
}
