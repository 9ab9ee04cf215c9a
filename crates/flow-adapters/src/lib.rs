//! flow-adapters: proveedor de modelo de grafo en proceso.
//!
//! El núcleo trata al proveedor como una capacidad opaca
//! (`GraphModelProvider`); este crate aporta la implementación conforme que
//! usa el workspace. Reglas de partición de la secuencia plana:
//! - `type == "tab"` → flow (tab).
//! - `type == "subflow"` → subflow.
//! - cualquier nodo con campo `z` → hijo del contenedor que nombra `z`.
//! - el resto (sin `z`, sin tag contenedor) → config-node.
//!
//! Fuera de `id`, `type` y `z` no se interpreta ningún campo: el parseo
//! semántico de cada tipo de nodo no es asunto de esta conversión.

pub mod model;

pub use model::RecordGraphModel;
