//! Orquestación de las dos conversiones extremo a extremo.
//!
//! `split`: monolito → árbol descompuesto. `merge`: árbol → monolito. Cada
//! llamada construye un flow-set fresco y un registro de nombres fresco; no
//! hay estado compartido entre conversiones.

pub mod merge;
pub mod split;

pub use merge::{merge, MergeOutcome};
pub use split::{split, SplitOutcome};

use flow_core::disambiguate;
use flow_domain::{Category, FlowSet, NameRegistry};

/// Clave de atributo de la que sale el label por categoría: los tabs llevan
/// `label`, subflows y config-nodes llevan `name`.
fn label_key(category: Category) -> &'static str {
    match category {
        Category::Flow => "label",
        Category::Subflow | Category::ConfigNode => "name",
    }
}

/// Desambigua las tres categorías contra un único registro compartido, en
/// orden fijo (flows, subflows, config-nodes) para que el resultado sea
/// determinista.
pub(crate) fn disambiguate_all(set: &mut FlowSet) {
    let mut registry = NameRegistry::new();
    for category in [Category::Flow, Category::Subflow, Category::ConfigNode] {
        disambiguate(set, category, label_key(category), &mut registry);
    }
}
