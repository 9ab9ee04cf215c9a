//! Implementación por defecto del proveedor de modelo de grafo.

use flow_domain::{Category, DomainError, Entity, FlowSet, GraphModelProvider, Node};
use serde_json::{Map, Value};

/// Proveedor que parsea records JSON planos sin semántica de tipos de nodo.
#[derive(Debug, Default, Clone, Copy)]
pub struct RecordGraphModel;

impl RecordGraphModel {
    pub fn new() -> Self {
        Self
    }
}

fn record_map(record: &Value) -> Result<Map<String, Value>, DomainError> {
    record.as_object().cloned().ok_or(DomainError::NotAnObject)
}

impl GraphModelProvider for RecordGraphModel {
    /// Dos pasadas: primero las entidades contenedoras (para conocer todos
    /// los destinos de `z`), después el colgado de hijos. Un `z` que no
    /// nombra a ningún tab/subflow es error de parseo, no un descarte
    /// silencioso: perder nodos rompería el round-trip.
    fn parse_flow(&self, nodes: Vec<Value>) -> Result<FlowSet, DomainError> {
        let mut set = FlowSet::new();
        let mut placed: Vec<Node> = Vec::new();

        for record in &nodes {
            let node = Node::from_record(record)?;
            if node.node_type == Category::Flow.type_tag() {
                set.tabs_order.push(node.id.clone());
                set.insert(Entity::new(Category::Flow, record_map(record)?)?);
            } else if node.node_type == Category::Subflow.type_tag() {
                set.insert(Entity::new(Category::Subflow, record_map(record)?)?);
            } else if node.container_id().is_some() {
                placed.push(node);
            } else {
                set.insert(Entity::new(Category::ConfigNode, record_map(record)?)?);
            }
        }

        for node in placed {
            let container = node.container_id().unwrap_or_default().to_string();
            let entity = match set.flows.get_mut(&container) {
                Some(entity) => entity,
                None => set.subflows.get_mut(&container).ok_or_else(|| {
                            DomainError::UnknownContainer { node: node.id.clone(),
                                                            container: container.clone() }
                        })?,
            };
            entity.push_child(node);
        }

        Ok(set)
    }
}
