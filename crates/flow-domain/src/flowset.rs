//! Flow-set: el grafo parseado en memoria.
//!
//! Tres mappings ordenados por inserción (flows, subflows, config-nodes) más
//! el `tabs_order` canónico. El registro de nombres NO vive aquí: es un
//! parámetro explícito de la desambiguación (ver `registry`), de modo que la
//! dependencia cross-categoría quede visible en cada llamada.

use indexmap::IndexMap;
use serde_json::Value;

use crate::category::Category;
use crate::entity::Entity;
use crate::error::DomainError;

#[derive(Debug, Clone, Default)]
pub struct FlowSet {
    pub flows: IndexMap<String, Entity>,
    pub subflows: IndexMap<String, Entity>,
    pub config_nodes: IndexMap<String, Entity>,
    /// Orden canónico de tabs para round-trips; vacío = orden natural.
    pub tabs_order: Vec<String>,
}

impl FlowSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn category(&self, category: Category) -> &IndexMap<String, Entity> {
        match category {
            Category::Flow => &self.flows,
            Category::Subflow => &self.subflows,
            Category::ConfigNode => &self.config_nodes,
        }
    }

    pub fn category_mut(&mut self, category: Category) -> &mut IndexMap<String, Entity> {
        match category {
            Category::Flow => &mut self.flows,
            Category::Subflow => &mut self.subflows,
            Category::ConfigNode => &mut self.config_nodes,
        }
    }

    /// Inserta una entidad en el mapping de su categoría.
    pub fn insert(&mut self, entity: Entity) {
        self.category_mut(entity.kind()).insert(entity.id().to_string(), entity);
    }

    /// Entidad por id, buscando en las tres categorías.
    pub fn entity(&self, id: &str) -> Option<&Entity> {
        self.flows.get(id)
            .or_else(|| self.subflows.get(id))
            .or_else(|| self.config_nodes.get(id))
    }

    /// Todas las entidades en orden natural: flows, subflows, config-nodes.
    pub fn entities(&self) -> impl Iterator<Item = &Entity> {
        self.flows.values()
            .chain(self.subflows.values())
            .chain(self.config_nodes.values())
    }

    pub fn is_empty(&self) -> bool {
        self.flows.is_empty() && self.subflows.is_empty() && self.config_nodes.is_empty()
    }

    /// Exportación plana en orden natural: cada flow seguido de sus hijos,
    /// después cada subflow con los suyos, después los config-nodes.
    pub fn export(&self) -> Vec<Value> {
        let mut nodes = Vec::new();
        for entity in self.flows.values().chain(self.subflows.values()) {
            nodes.push(entity.export());
            nodes.extend(entity.export_contents());
        }
        for entity in self.config_nodes.values() {
            nodes.push(entity.export());
        }
        nodes
    }
}

/// Capacidad de parseo del proveedor de modelo de grafo. El núcleo trata al
/// proveedor como opaco: cualquier implementación conforme sirve (la de este
/// workspace vive en `flow-adapters`).
pub trait GraphModelProvider {
    fn parse_flow(&self, nodes: Vec<Value>) -> Result<FlowSet, DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::Node;
    use serde_json::json;

    fn entity(kind: Category, record: Value) -> Entity {
        Entity::new(kind, record.as_object().unwrap().clone()).unwrap()
    }

    #[test]
    fn insert_routes_by_category() {
        let mut set = FlowSet::new();
        set.insert(entity(Category::Flow, json!({"id": "f1", "type": "tab"})));
        set.insert(entity(Category::ConfigNode, json!({"id": "c1", "type": "broker"})));
        assert_eq!(set.flows.len(), 1);
        assert_eq!(set.config_nodes.len(), 1);
        assert!(set.subflows.is_empty());
        assert!(set.entity("c1").is_some());
    }

    #[test]
    fn export_interleaves_entities_and_children() {
        let mut set = FlowSet::new();
        let mut flow = entity(Category::Flow, json!({"id": "f1", "type": "tab"}));
        flow.push_child(Node::from_record(&json!({"id": "n1", "type": "inject", "z": "f1"})).unwrap());
        set.insert(flow);
        set.insert(entity(Category::ConfigNode, json!({"id": "c1", "type": "broker"})));

        let ids: Vec<_> = set.export()
                             .iter()
                             .map(|n| n["id"].as_str().unwrap().to_string())
                             .collect();
        assert_eq!(ids, vec!["f1", "n1", "c1"]);
    }
}
