//! Canonicalización de nodos de grupo.
//!
//! El orden de la lista de miembros y las coordenadas de layout son ruido de
//! editor: dos descomposiciones del mismo grafo no deben diferir por ellos.

use flow_domain::node::GROUP_TYPE;
use flow_domain::TreeEntry;
use serde_json::Value;

/// Campos de layout que se eliminan de los grupos (ancho/alto).
const LAYOUT_FIELDS: [&str; 2] = ["w", "h"];

/// Clave de la lista de miembros de un grupo.
const MEMBERS_KEY: &str = "nodes";

/// Canonicaliza todo record de tipo `group` dentro de cualquier entrada:
/// elimina ancho/alto si están presentes y ordena lexicográficamente la lista
/// de miembros. Muta el contenido in place.
pub fn normalize_groups(entries: &mut [TreeEntry]) {
    for entry in entries.iter_mut() {
        for record in entry.content.iter_mut() {
            normalize_group_record(record);
        }
    }
}

fn normalize_group_record(record: &mut Value) {
    let Some(obj) = record.as_object_mut() else { return };
    if obj.get("type").and_then(Value::as_str) != Some(GROUP_TYPE) {
        return;
    }
    for field in LAYOUT_FIELDS {
        obj.remove(field);
    }
    if let Some(Value::Array(members)) = obj.get_mut(MEMBERS_KEY) {
        members.sort_by(|a, b| a.as_str().unwrap_or("").cmp(b.as_str().unwrap_or("")));
    }
}
