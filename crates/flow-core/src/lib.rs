//! flow-core: transformación estructural del flow-set.
//!
//! Operaciones puras sobre datos ya residentes: normalización de nombres,
//! desambiguación global, gestión de orden, canonicalización de grupos y la
//! conversión árbol ↔ secuencia plana. Nada de I/O aquí; los colaboradores
//! de archivo viven en `flow-persistence`.

pub mod assemble;
pub mod disambiguate;
pub mod errors;
pub mod groups;
pub mod normalize;
pub mod order;
pub mod tree;

pub use assemble::assemble_flow_config;
pub use disambiguate::disambiguate;
pub use errors::CoreError;
pub use groups::normalize_groups;
pub use normalize::{normalize, SEPARATOR};
pub use order::{apply_order, derive_tabs_order, move_to_front, project_monolith};
pub use tree::build_tree;
