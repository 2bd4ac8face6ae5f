use propview::graph::{create_modern, EdgeId, GraphStore, NodeId};
use propview::view::{
    directed_view, DirectedGraph, DirectedGraphMut, EdgeType, Hypergraph, HypergraphMut, Mutation,
    StoreHypergraph,
};
use rustc_hash::FxHashSet;
use std::io;
use std::sync::{Arc, Mutex};

/// Mixed graph: a chain, a parallel pair, a self-loop and an isolated vertex
fn mixed_store() -> GraphStore {
    let mut store = GraphStore::new();
    let a = store.create_node("person");
    let b = store.create_node("person");
    let c = store.create_node("person");
    let d = store.create_node("person");
    let _isolated = store.create_node("person");
    store.create_edge(a, b, "knows").unwrap();
    store.create_edge(b, c, "knows").unwrap();
    store.create_edge(c, a, "knows").unwrap();
    store.create_edge(a, b, "follows").unwrap();
    store.create_edge(d, d, "likes").unwrap();
    store.create_edge(d, a, "knows").unwrap();
    store
}

#[test]
fn test_scenario_chain() {
    // A -> B -> C
    let mut store = GraphStore::new();
    let a = store.create_node("person");
    let b = store.create_node("person");
    let c = store.create_node("person");
    let ab = store.create_edge(a, b, "knows").unwrap();
    store.create_edge(b, c, "knows").unwrap();

    let graph = directed_view(&store);

    assert_eq!(graph.find_edge(a, b).unwrap(), Some(ab));
    assert_eq!(graph.find_edge(a, c).unwrap(), None);
    assert_eq!(graph.predecessors(c).unwrap(), FxHashSet::from_iter([b]));
    assert_eq!(graph.successors(a).unwrap(), FxHashSet::from_iter([b]));
    assert_eq!(graph.degree(b).unwrap(), 2);
    assert_eq!(graph.in_degree(b).unwrap(), 1);
    assert_eq!(graph.out_degree(b).unwrap(), 1);
    assert_eq!(graph.opposite(a, ab).unwrap(), b);
}

#[test]
fn test_scenario_single_self_loop() {
    let mut store = GraphStore::new();
    let a = store.create_node("person");
    let aa = store.create_edge(a, a, "likes").unwrap();

    let graph = directed_view(&store);

    assert_eq!(graph.degree(a).unwrap(), 1);
    assert_eq!(graph.neighbors(a).unwrap(), FxHashSet::from_iter([a]));
    assert_eq!(graph.in_degree(a).unwrap(), 1);
    assert_eq!(graph.out_degree(a).unwrap(), 1);
    assert_eq!(graph.incident_vertices(aa).unwrap(), vec![a, a]);
    assert_eq!(graph.opposite(a, aa).unwrap(), a);
    assert!(graph.is_predecessor(a, a).unwrap());
}

#[test]
fn test_scenario_type_filter_returns_all_edges() {
    let store = create_modern();
    let graph = StoreHypergraph::new(&store);

    let undirected = graph.edges_of_type(EdgeType::Undirected).unwrap();
    assert_eq!(undirected.len(), 6);
    assert_eq!(graph.edge_count_of_type(EdgeType::Undirected).unwrap(), 6);
    for edge in graph.edges().unwrap() {
        assert_eq!(graph.edge_type(edge), EdgeType::Directed);
    }
}

#[test]
fn test_every_vertex_contained_exactly_once() {
    let store = mixed_store();
    let graph = directed_view(&store);
    let vertices = graph.vertices().unwrap();

    assert_eq!(vertices.len(), graph.vertex_count().unwrap());
    assert_eq!(graph.edges().unwrap().len(), graph.edge_count().unwrap());
    for v in &vertices {
        assert!(graph.contains_vertex(*v).unwrap());
        assert_eq!(vertices.iter().filter(|x| *x == v).count(), 1);
    }
    assert!(!graph.contains_vertex(NodeId::new(1000)).unwrap());
    assert!(!graph.contains_edge(EdgeId::new(1000)).unwrap());
}

#[test]
fn test_every_edge_has_two_endpoints() {
    let store = mixed_store();
    let graph = directed_view(&store);

    for e in graph.edges().unwrap() {
        assert!(graph.contains_edge(e).unwrap());
        assert_eq!(graph.incident_count(e).unwrap(), 2);
        assert_eq!(
            graph.endpoints(e).unwrap(),
            (graph.source(e).unwrap(), graph.dest(e).unwrap())
        );
    }
}

#[test]
fn test_degree_identities() {
    let store = mixed_store();
    let graph = directed_view(&store);

    for v in graph.vertices().unwrap() {
        let incident = graph.incident_edges(v).unwrap();
        let self_loops = incident
            .iter()
            .filter(|e| graph.source(**e).unwrap() == graph.dest(**e).unwrap())
            .count();

        assert_eq!(graph.degree(v).unwrap(), incident.len());
        assert_eq!(
            graph.degree(v).unwrap(),
            graph.in_degree(v).unwrap() + graph.out_degree(v).unwrap() - self_loops
        );
    }
}

#[test]
fn test_neighbors_are_far_endpoints_of_incident_edges() {
    let store = mixed_store();
    let graph = directed_view(&store);

    for v in graph.vertices().unwrap() {
        let mut expected = FxHashSet::default();
        for e in graph.incident_edges(v).unwrap() {
            let (s, d) = graph.endpoints(e).unwrap();
            if s == v && d == v {
                expected.insert(v);
            } else if s == v {
                expected.insert(d);
            } else {
                expected.insert(s);
            }
        }
        assert_eq!(graph.neighbors(v).unwrap(), expected);
        assert_eq!(graph.neighbor_count(v).unwrap(), expected.len());
    }
}

#[test]
fn test_predecessor_successor_equivalences() {
    let store = mixed_store();
    let graph = directed_view(&store);
    let vertices = graph.vertices().unwrap();

    for &v1 in &vertices {
        for &v2 in &vertices {
            let is_pred = graph.is_predecessor(v1, v2).unwrap();
            assert_eq!(is_pred, graph.predecessors(v2).unwrap().contains(&v1));
            assert_eq!(is_pred, graph.successors(v1).unwrap().contains(&v2));
            assert_eq!(is_pred, graph.is_successor(v2, v1).unwrap());
            assert_eq!(is_pred, graph.find_edge(v1, v2).unwrap().is_some());
        }
    }
}

#[test]
fn test_queries_are_idempotent() {
    let store = mixed_store();
    let graph = directed_view(&store);
    let a = NodeId::new(1);

    assert_eq!(graph.vertices().unwrap(), graph.vertices().unwrap());
    assert_eq!(graph.incident_edges(a).unwrap(), graph.incident_edges(a).unwrap());
    assert_eq!(graph.neighbors(a).unwrap(), graph.neighbors(a).unwrap());
    assert_eq!(graph.find_edge(a, NodeId::new(2)).unwrap(), graph.find_edge(a, NodeId::new(2)).unwrap());
    assert_eq!(graph.find_edge_set(a, NodeId::new(2)).unwrap().len(), 2);
}

#[test]
fn test_returned_collections_are_snapshots() {
    let store = mixed_store();
    let graph = directed_view(&store);
    let a = NodeId::new(1);

    let mut edges = graph.incident_edges(a).unwrap();
    let before = edges.len();
    edges.clear();
    let mut succ = graph.successors(a).unwrap();
    succ.insert(NodeId::new(99));

    assert_eq!(graph.incident_edges(a).unwrap().len(), before);
    assert!(!graph.successors(a).unwrap().contains(&NodeId::new(99)));
}

#[test]
fn test_every_mutation_rejected_and_counts_unchanged() {
    let store = mixed_store();
    let mut hyper = StoreHypergraph::new(&store);
    let mut graph = directed_view(&store);
    let (a, b) = (NodeId::new(1), NodeId::new(2));
    let e = EdgeId::new(1);
    let vertex_count = graph.vertex_count().unwrap();
    let edge_count = graph.edge_count().unwrap();

    let rejections = [
        hyper.add_vertex(NodeId::new(50)),
        hyper.add_edge(EdgeId::new(50), &[a, b]),
        hyper.add_typed_edge(EdgeId::new(50), &[a, b], EdgeType::Directed),
        hyper.remove_vertex(a),
        hyper.remove_edge(e),
        graph.add_vertex(NodeId::new(50)),
        graph.add_edge(EdgeId::new(50), &[a, b]),
        graph.add_directed_edge(EdgeId::new(50), a, b),
        graph.add_directed_typed_edge(EdgeId::new(50), a, b, EdgeType::Directed),
        graph.remove_vertex(a),
        graph.remove_edge(e),
    ];

    for result in rejections {
        let err = result.unwrap_err();
        assert!(matches!(
            err.operation,
            Mutation::AddVertex | Mutation::AddEdge | Mutation::RemoveVertex | Mutation::RemoveEdge
        ));
    }
    assert_eq!(graph.vertex_count().unwrap(), vertex_count);
    assert_eq!(graph.edge_count().unwrap(), edge_count);
    assert_eq!(store.node_count(), vertex_count);
}

#[test]
fn test_unknown_vertex_yields_empty_results() {
    let store = mixed_store();
    let graph = directed_view(&store);
    let ghost = NodeId::new(404);

    assert!(graph.incident_edges(ghost).unwrap().is_empty());
    assert!(graph.neighbors(ghost).unwrap().is_empty());
    assert_eq!(graph.degree(ghost).unwrap(), 0);
    assert_eq!(graph.find_edge(ghost, NodeId::new(1)).unwrap(), None);
}

#[test]
fn test_view_sees_store_changes_between_calls() {
    let mut store = GraphStore::new();
    let a = store.create_node("person");
    let b = store.create_node("person");

    assert_eq!(directed_view(&store).find_edge(a, b).unwrap(), None);

    let ab = store.create_edge(a, b, "knows").unwrap();
    assert_eq!(directed_view(&store).find_edge(a, b).unwrap(), Some(ab));
}

/// In-memory log sink for a test-local subscriber
#[derive(Clone, Default)]
struct LogBuffer(Arc<Mutex<Vec<u8>>>);

impl LogBuffer {
    fn contents(&self) -> String {
        String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
    }
}

impl io::Write for LogBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[test]
fn test_queries_trace_and_rejections_warn() {
    let logs = LogBuffer::default();
    let writer = logs.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_ansi(false)
        .with_writer(move || writer.clone())
        .finish();

    let store = create_modern();
    let mut graph = directed_view(&store);
    let marko = NodeId::new(1);

    tracing::subscriber::with_default(subscriber, || {
        assert_eq!(graph.successor_count(marko).unwrap(), 3);
        assert_eq!(graph.in_degree(marko).unwrap(), 0);
        let err = graph.remove_vertex(marko).unwrap_err();
        assert_eq!(err.operation, Mutation::RemoveVertex);
    });

    let output = logs.contents();
    assert!(output.contains("TRACE"), "{}", output);
    assert!(output.contains("successors of v[1]"), "{}", output);
    assert!(output.contains("in_edges of v[1]"), "{}", output);
    assert!(output.contains("WARN"), "{}", output);
    assert!(output.contains("Rejected unsupported mutation remove_vertex"), "{}", output);
    assert_eq!(store.node_count(), 6);
}
