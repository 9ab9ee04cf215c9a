//! Construcción del árbol de entradas a partir de un flow-set.

use flow_domain::{Category, Entity, FlowSet, TreeEntry};
use serde_json::Value;

use crate::errors::CoreError;
use crate::groups::normalize_groups;
use crate::order::node_id;

fn entry_for(entity: &Entity, with_children: bool) -> Result<TreeEntry, CoreError> {
    let label = entity.normalized_label()
                      .ok_or_else(|| CoreError::MissingNormalizedLabel(entity.id().to_string()))?;
    let mut content: Vec<Value> = vec![entity.export()];
    if with_children {
        let mut children = entity.export_contents();
        // Orden canónico por id, lexicográfico (ids opacos).
        children.sort_by(|a, b| node_id(a).unwrap_or("").cmp(node_id(b).unwrap_or("")));
        content.extend(children);
    }
    Ok(TreeEntry::new(entity.kind().folder(), label.to_string(), content))
}

/// Convierte el flow-set en la lista de entradas del árbol: una por flow
/// (carpeta `tabs`, record propio + hijos ordenados por id), una por subflow
/// (`subflows`, misma forma) y una por config-node (`config-nodes`, sólo el
/// record: los config-nodes no poseen nodos colocados). Los grupos se
/// canonicalizan antes de devolver. Precondición: la desambiguación ya corrió
/// sobre las tres categorías; si falta algún label se devuelve error, no se
/// entra en pánico.
pub fn build_tree(flow_set: &FlowSet) -> Result<Vec<TreeEntry>, CoreError> {
    let mut entries = Vec::new();
    for category in [Category::Flow, Category::Subflow] {
        for entity in flow_set.category(category).values() {
            entries.push(entry_for(entity, true)?);
        }
    }
    for entity in flow_set.config_nodes.values() {
        entries.push(entry_for(entity, false)?);
    }
    normalize_groups(&mut entries);
    Ok(entries)
}
