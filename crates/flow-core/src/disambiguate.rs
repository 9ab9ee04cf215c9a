//! Asignación de slugs únicos a las entidades de una categoría.

use flow_domain::{Category, Entity, FlowSet, NameRegistry};

use crate::normalize::{normalize, SEPARATOR};

/// Candidato de label por cadena de prioridad:
/// (a) campo `attribute_key` del record de configuración,
/// (b) campo homónimo de nivel wrapper,
/// (c) `site.name` anidado (entidades de configuración estilo broker),
/// (d) type tag del propio record,
/// (e) el identificador, que siempre existe.
/// Se toma el primer candidato cuyo slug normalizado no quede vacío.
fn candidate_slug(entity: &Entity, attribute_key: &str) -> String {
    let chain = [entity.config_str(attribute_key),
                 entity.attr_str(attribute_key),
                 entity.site_name(),
                 entity.type_tag(),
                 Some(entity.id())];
    chain.into_iter()
         .flatten()
         .map(normalize)
         .find(|slug| !slug.is_empty())
         .unwrap_or_else(|| entity.id().to_string())
}

/// Asigna a cada entidad de `category` un `normalizedLabel` único en todo el
/// flow-set. El registro es compartido: las tres categorías deben pasar por
/// el mismo `NameRegistry` para que la unicidad sea global y no por carpeta.
/// Ante colisión se fuerza unicidad añadiendo separador + identificador.
pub fn disambiguate(flow_set: &mut FlowSet,
                    category: Category,
                    attribute_key: &str,
                    registry: &mut NameRegistry) {
    for entity in flow_set.category_mut(category).values_mut() {
        let mut slug = candidate_slug(entity, attribute_key);
        if registry.contains(&slug) {
            slug = normalize(&format!("{slug}{SEPARATOR}{}", entity.id()));
        }
        registry.register(slug.clone());
        entity.set_normalized_label(slug);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn entity(kind: Category, record: serde_json::Value) -> Entity {
        Entity::new(kind, record.as_object().unwrap().clone()).unwrap()
    }

    #[test]
    fn duplicate_labels_get_id_suffix() {
        let mut set = FlowSet::new();
        set.insert(entity(Category::Flow, json!({"id": "f1", "type": "tab", "label": "Test"})));
        set.insert(entity(Category::Flow, json!({"id": "f2", "type": "tab", "label": "Test"})));

        let mut registry = NameRegistry::new();
        disambiguate(&mut set, Category::Flow, "label", &mut registry);

        assert_eq!(set.flows["f1"].normalized_label(), Some("test"));
        assert_eq!(set.flows["f2"].normalized_label(), Some("test-f2"));
    }

    #[test]
    fn uniqueness_is_global_across_categories() {
        // Comportamiento confirmado: un config-node no puede reutilizar el
        // slug de un flow aunque vivan en carpetas distintas.
        let mut set = FlowSet::new();
        set.insert(entity(Category::Flow, json!({"id": "f1", "type": "tab", "label": "shared"})));
        set.insert(entity(Category::ConfigNode, json!({"id": "c1", "type": "broker", "name": "shared"})));

        let mut registry = NameRegistry::new();
        disambiguate(&mut set, Category::Flow, "label", &mut registry);
        disambiguate(&mut set, Category::ConfigNode, "name", &mut registry);

        assert_eq!(set.flows["f1"].normalized_label(), Some("shared"));
        assert_eq!(set.config_nodes["c1"].normalized_label(), Some("shared-c1"));
    }

    #[test]
    fn wrapper_attr_wins_over_site_name() {
        let mut set = FlowSet::new();
        let mut cfg = entity(Category::ConfigNode,
                             json!({"id": "c1", "type": "broker", "site": {"name": "Plant"}}));
        cfg.set_attr("name", json!("Wrapper Name"));
        set.insert(cfg);

        let mut registry = NameRegistry::new();
        disambiguate(&mut set, Category::ConfigNode, "name", &mut registry);
        assert_eq!(set.config_nodes["c1"].normalized_label(), Some("wrapper-name"));
    }

    #[test]
    fn site_name_and_type_tag_fallbacks() {
        let mut set = FlowSet::new();
        set.insert(entity(Category::ConfigNode,
                          json!({"id": "c1", "type": "broker", "site": {"name": "Plant A"}})));
        set.insert(entity(Category::ConfigNode, json!({"id": "c2", "type": "mqtt-broker"})));
        set.insert(entity(Category::ConfigNode, json!({"id": "c3", "type": ""})));

        let mut registry = NameRegistry::new();
        disambiguate(&mut set, Category::ConfigNode, "name", &mut registry);

        assert_eq!(set.config_nodes["c1"].normalized_label(), Some("plant-a"));
        assert_eq!(set.config_nodes["c2"].normalized_label(), Some("mqtt-broker"));
        // Sin label, ni site, ni type: cae al identificador.
        assert_eq!(set.config_nodes["c3"].normalized_label(), Some("c3"));
    }

    #[test]
    fn label_that_normalizes_to_empty_falls_through() {
        let mut set = FlowSet::new();
        set.insert(entity(Category::Flow, json!({"id": "f9", "type": "tab", "label": "!!!"})));

        let mut registry = NameRegistry::new();
        disambiguate(&mut set, Category::Flow, "label", &mut registry);
        // "!!!" normaliza vacío; el siguiente candidato útil es el type tag.
        assert_eq!(set.flows["f9"].normalized_label(), Some("tab"));
    }
}
