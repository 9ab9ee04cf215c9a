//! Entidad de primer nivel: un tab (flow), un subflow o un config-node.
//!
//! La entidad separa dos superficies:
//! - `config`: el record serializado del contenedor (lo que se exporta).
//! - `attrs`: campos de nivel wrapper que un proveedor de modelo puede
//!   adjuntar además del record. El proveedor por defecto los deja vacíos;
//!   la cadena de candidatos de nombre los consulta igualmente.

use serde_json::{Map, Value};

use crate::category::Category;
use crate::error::DomainError;
use crate::node::Node;

/// Clave bajo la que el label normalizado se refleja en el record exportado.
pub const NORMALIZED_LABEL_KEY: &str = "normalizedLabel";

#[derive(Debug, Clone, PartialEq)]
pub struct Entity {
    id: String,
    kind: Category,
    config: Map<String, Value>,
    attrs: Map<String, Value>,
    children: Vec<Node>,
    normalized_label: Option<String>,
}

impl Entity {
    /// Crea una entidad a partir de su record contenedor. El record debe
    /// traer un `id` string; todo lo demás se conserva tal cual.
    pub fn new(kind: Category, config: Map<String, Value>) -> Result<Self, DomainError> {
        let id = config.get("id")
                       .and_then(Value::as_str)
                       .ok_or(DomainError::MissingField("id"))?
                       .to_string();
        Ok(Entity { id,
                    kind,
                    config,
                    attrs: Map::new(),
                    children: Vec::new(),
                    normalized_label: None })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn kind(&self) -> Category {
        self.kind
    }

    pub fn children(&self) -> &[Node] {
        &self.children
    }

    pub fn push_child(&mut self, node: Node) {
        self.children.push(node);
    }

    /// Campo string del record de configuración, si existe y no está vacío.
    pub fn config_str(&self, key: &str) -> Option<&str> {
        self.config.get(key).and_then(Value::as_str).filter(|s| !s.is_empty())
    }

    /// Campo string de nivel wrapper (variantes de proveedor).
    pub fn attr_str(&self, key: &str) -> Option<&str> {
        self.attrs.get(key).and_then(Value::as_str).filter(|s| !s.is_empty())
    }

    pub fn set_attr(&mut self, key: &str, value: Value) {
        self.attrs.insert(key.to_string(), value);
    }

    /// Nombre anidado `site.name` de entidades de configuración estilo broker.
    pub fn site_name(&self) -> Option<&str> {
        self.config.get("site")
            .and_then(Value::as_object)
            .and_then(|site| site.get("name"))
            .and_then(Value::as_str)
            .filter(|s| !s.is_empty())
    }

    /// Type tag propio del record (`type`), no el de la categoría.
    pub fn type_tag(&self) -> Option<&str> {
        self.config_str("type")
    }

    pub fn normalized_label(&self) -> Option<&str> {
        self.normalized_label.as_deref()
    }

    /// Asigna el slug desambiguado y lo refleja en el record exportado.
    pub fn set_normalized_label(&mut self, slug: String) {
        self.config.insert(NORMALIZED_LABEL_KEY.into(), Value::String(slug.clone()));
        self.normalized_label = Some(slug);
    }

    /// Record propio de la entidad (incluye `normalizedLabel` una vez
    /// asignado).
    pub fn export(&self) -> Value {
        Value::Object(self.config.clone())
    }

    /// Records de los nodos colocados dentro de la entidad, en orden de
    /// documento. El orden canónico por id lo aplica quien construye el árbol.
    pub fn export_contents(&self) -> Vec<Value> {
        self.children.iter().map(Node::to_record).collect()
    }
}
