//! Gestión de orden de entidades de primer nivel.
//!
//! `apply_order` produce un prefijo fijado: los ids referenciados quedan
//! primero, en su orden, y todo lo no referenciado conserva su orden relativo
//! original. El orden por identificador es SIEMPRE lexicográfico: los ids son
//! strings opacos, no números.

use flow_domain::FlowSet;
use serde_json::Value;

/// Id de un record de nodo, si lo trae.
pub fn node_id(record: &Value) -> Option<&str> {
    record.get("id").and_then(Value::as_str)
}

/// Reubica el elemento en `from_index` a la posición `to_index`. Índices
/// fuera de rango no rompen: `from_index` inválido es un no-op y `to_index`
/// se recorta al final. La rama de relleno con huecos de la implementación
/// ancestral resultó inalcanzable (`to_index` es siempre 0 en los
/// llamadores) y se omite; la decisión queda registrada en DESIGN.md.
pub fn move_to_front<T>(seq: &mut Vec<T>, from_index: usize, to_index: usize) {
    if from_index >= seq.len() {
        return;
    }
    let item = seq.remove(from_index);
    let target = to_index.min(seq.len());
    seq.insert(target, item);
}

/// Aplica la lista de referencia recorriéndola de última a primera y moviendo
/// cada elemento encontrado al frente. Un id ausente es un no-op para ese id,
/// nunca un fallo. Idempotente.
pub fn apply_order(seq: &mut Vec<Value>, reference: &[String]) {
    for id in reference.iter().rev() {
        if let Some(pos) = seq.iter().position(|record| node_id(record) == Some(id.as_str())) {
            move_to_front(seq, pos, 0);
        }
    }
}

/// Re-deriva la lista de referencia desde el orden actual de los flows.
pub fn derive_tabs_order(flow_set: &FlowSet) -> Vec<String> {
    flow_set.flows.keys().cloned().collect()
}

/// Exporta el flow-set a una secuencia plana de monolito. Con `tabs_order`
/// vacío o `overwrite` pedido se devuelve el orden natural de exportación sin
/// tocar; en caso contrario se ordena por id (lexicográfico) y se aplica el
/// prefijo de `tabs_order`.
pub fn project_monolith(flow_set: &FlowSet, tabs_order: &[String], overwrite: bool) -> Vec<Value> {
    let mut nodes = flow_set.export();
    if tabs_order.is_empty() || overwrite {
        return nodes;
    }
    nodes.sort_by(|a, b| node_id(a).unwrap_or("").cmp(node_id(b).unwrap_or("")));
    apply_order(&mut nodes, tabs_order);
    nodes
}
