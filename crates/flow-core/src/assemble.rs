//! Ensamblado del árbol de entradas de vuelta a una secuencia plana.

use flow_domain::TreeEntry;
use serde_json::Value;

use crate::order::apply_order;

/// Concatena el contenido de todas las entradas en una única secuencia (la
/// acumulación es real: todo va a parar al vector devuelto) y aplica el
/// prefijo de `tabs_order`. El resultado se entrega al proveedor de modelo
/// para reconstruir el flow-set.
pub fn assemble_flow_config(entries: &[TreeEntry], tabs_order: &[String]) -> Vec<Value> {
    let mut nodes: Vec<Value> = Vec::new();
    for entry in entries {
        nodes.extend(entry.content.iter().cloned());
    }
    apply_order(&mut nodes, tabs_order);
    nodes
}
