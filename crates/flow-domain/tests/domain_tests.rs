use flow_domain::{Category, Entity, FlowSet, NameRegistry, Node};
use serde_json::json;

fn entity(kind: Category, record: serde_json::Value) -> Entity {
    Entity::new(kind, record.as_object().unwrap().clone()).unwrap()
}

#[test]
fn flowset_export_round_trips_node_records() {
    let mut set = FlowSet::new();
    let mut flow = entity(Category::Flow, json!({"id": "f1", "type": "tab", "label": "Main"}));
    let child = json!({"id": "n1", "type": "inject", "z": "f1", "repeat": "5"});
    flow.push_child(Node::from_record(&child).unwrap());
    set.insert(flow);

    let exported = set.export();
    assert_eq!(exported.len(), 2);
    assert_eq!(exported[1], child);
}

#[test]
fn registry_is_shared_state_across_categories() {
    // El registro no pertenece a ninguna categoría: el mismo valor se
    // reutiliza para flows y config-nodes de una misma conversión.
    let mut registry = NameRegistry::new();
    assert!(registry.register("test".into()));
    assert!(!registry.register("test".into()));
    assert!(registry.register("test-f2".into()));
    assert_eq!(registry.len(), 2);
}

#[test]
fn tabs_order_defaults_to_empty_meaning_natural_order() {
    let set = FlowSet::new();
    assert!(set.tabs_order.is_empty());
    assert!(set.is_empty());
}
