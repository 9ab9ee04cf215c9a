//! Nodo individual del grafo de automatización.
//!
//! Un `Node` es neutral: el núcleo nunca interpreta los campos específicos
//! del tipo (`rest` es JSON genérico). Sólo `id`, `type` y la referencia de
//! contenedor `z` tienen significado estructural para la conversión.

use serde_json::{Map, Value};

use crate::error::DomainError;

/// Type tag de los nodos de grupo (contenedores puramente organizativos).
pub const GROUP_TYPE: &str = "group";

#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    pub id: String,
    pub node_type: String,
    /// Campos específicos del tipo, sin `id` ni `type`.
    pub rest: Map<String, Value>,
}

impl Node {
    /// Construye un nodo desde un record crudo. Exige `id` y `type` como
    /// strings; el resto de campos se conserva sin interpretar.
    pub fn from_record(value: &Value) -> Result<Self, DomainError> {
        let obj = value.as_object().ok_or(DomainError::NotAnObject)?;
        let id = obj.get("id")
                    .and_then(Value::as_str)
                    .ok_or(DomainError::MissingField("id"))?
                    .to_string();
        let node_type = obj.get("type")
                           .and_then(Value::as_str)
                           .ok_or(DomainError::MissingField("type"))?
                           .to_string();
        let mut rest = obj.clone();
        rest.remove("id");
        rest.remove("type");
        Ok(Node { id, node_type, rest })
    }

    /// Record JSON completo del nodo (inversa de `from_record`).
    pub fn to_record(&self) -> Value {
        let mut obj = Map::new();
        obj.insert("id".into(), Value::String(self.id.clone()));
        obj.insert("type".into(), Value::String(self.node_type.clone()));
        for (k, v) in &self.rest {
            obj.insert(k.clone(), v.clone());
        }
        Value::Object(obj)
    }

    /// Identificador del contenedor (`z`) si el nodo está colocado dentro de
    /// un tab o subflow.
    pub fn container_id(&self) -> Option<&str> {
        self.rest.get("z").and_then(Value::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn from_record_splits_structural_fields() {
        let raw = json!({"id": "n1", "type": "inject", "z": "f1", "topic": "t"});
        let node = Node::from_record(&raw).unwrap();
        assert_eq!(node.id, "n1");
        assert_eq!(node.node_type, "inject");
        assert_eq!(node.container_id(), Some("f1"));
        assert_eq!(node.rest.get("topic"), Some(&json!("t")));
    }

    #[test]
    fn to_record_round_trips() {
        let raw = json!({"id": "n1", "type": "debug", "z": "f1", "active": true});
        let node = Node::from_record(&raw).unwrap();
        assert_eq!(node.to_record(), raw);
    }

    #[test]
    fn missing_id_is_an_error() {
        let raw = json!({"type": "inject"});
        assert_eq!(Node::from_record(&raw), Err(DomainError::MissingField("id")));
    }

    #[test]
    fn non_object_is_an_error() {
        assert_eq!(Node::from_record(&json!([1, 2])), Err(DomainError::NotAnObject));
    }
}
