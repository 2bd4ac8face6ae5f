//! The "modern" sample graph
//!
//! Six vertices and six weighted directed edges:
//!
//! ```text
//! marko -knows(0.5)-> vadas     marko -created(0.4)-> lop
//! marko -knows(1.0)-> josh      josh  -created(1.0)-> ripple
//! josh  -created(0.4)-> lop     peter -created(0.2)-> lop
//! ```

use super::property::{PropertyMap, PropertyValue};
use super::store::{GraphResult, GraphStore};
use super::types::{EdgeId, Label, NodeId};

fn add_vertex(store: &mut GraphStore, label: &str, name: &str, extra: (&str, PropertyValue)) -> NodeId {
    let mut props = PropertyMap::new();
    props.insert("name".to_string(), name.into());
    props.insert(extra.0.to_string(), extra.1);
    store.create_node_with_properties(vec![Label::new(label)], props)
}

fn add_edge(
    store: &mut GraphStore,
    source: NodeId,
    target: NodeId,
    rel_type: &str,
    weight: f64,
) -> GraphResult<EdgeId> {
    let mut props = PropertyMap::new();
    props.insert("weight".to_string(), weight.into());
    store.create_edge_with_properties(source, target, rel_type, props)
}

/// Build the modern sample graph in a fresh store
pub fn create_modern() -> GraphStore {
    let mut store = GraphStore::new();

    let marko = add_vertex(&mut store, "person", "marko", ("age", 29i64.into()));
    let vadas = add_vertex(&mut store, "person", "vadas", ("age", 27i64.into()));
    let lop = add_vertex(&mut store, "software", "lop", ("lang", "java".into()));
    let josh = add_vertex(&mut store, "person", "josh", ("age", 32i64.into()));
    let ripple = add_vertex(&mut store, "software", "ripple", ("lang", "java".into()));
    let peter = add_vertex(&mut store, "person", "peter", ("age", 35i64.into()));

    let edges = [
        (marko, vadas, "knows", 0.5),
        (marko, josh, "knows", 1.0),
        (marko, lop, "created", 0.4),
        (josh, ripple, "created", 1.0),
        (josh, lop, "created", 0.4),
        (peter, lop, "created", 0.2),
    ];
    for (source, target, rel_type, weight) in edges {
        add_edge(&mut store, source, target, rel_type, weight)
            .expect("endpoints are created above");
    }

    store
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_modern_shape() {
        let store = create_modern();
        assert_eq!(store.node_count(), 6);
        assert_eq!(store.edge_count(), 6);
        assert_eq!(store.get_nodes_by_label(&Label::new("software")).len(), 2);

        let lop = store.find_node_by_property("name", &PropertyValue::from("lop")).unwrap();
        assert_eq!(store.get_incoming_edges(lop.id).len(), 3);

        let josh = store.find_node_by_property("name", &PropertyValue::from("josh")).unwrap();
        assert_eq!(josh.get_property("age").and_then(PropertyValue::as_integer), Some(32));
    }

    #[test]
    fn test_edges_carry_weights() {
        let store = create_modern();
        let weights: Vec<f64> = store
            .all_edges()
            .iter()
            .filter_map(|e| e.get_property("weight").and_then(PropertyValue::as_f64))
            .collect();
        assert_eq!(weights, vec![0.5, 1.0, 0.4, 1.0, 0.4, 0.2]);
    }

    #[test]
    fn test_add_edge_reports_missing_endpoint() {
        let mut store = GraphStore::new();
        let a = store.create_node("person");
        let missing = NodeId::new(99);

        let result = add_edge(&mut store, a, missing, "knows", 1.0);
        assert_eq!(result, Err(crate::graph::GraphError::InvalidEdgeTarget(missing)));
        assert_eq!(store.edge_count(), 0);
    }
}
