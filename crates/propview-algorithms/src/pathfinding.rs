//! Shortest-path search over a directed graph view
//!
//! Both searches follow edges strictly from source to destination, using
//! `out_edges` and `dest` of the view.

use propview::view::DirectedGraph;
use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap, VecDeque};

/// Result of a pathfinding algorithm
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct PathResult<V, E> {
    pub source: V,
    pub target: V,
    /// Vertices on the path, `source` first and `target` last
    pub vertices: Vec<V>,
    /// Edges on the path, in travel order
    pub edges: Vec<E>,
    pub cost: f64,
}

/// Walk the parent links back from `target` and build the result
fn reconstruct<V, E>(
    parent: &HashMap<V, (V, E)>,
    source: V,
    target: V,
    cost: f64,
) -> PathResult<V, E>
where
    V: Copy + Eq + std::hash::Hash,
    E: Copy,
{
    let mut vertices = vec![target];
    let mut edges = Vec::new();
    let mut curr = target;
    while curr != source {
        match parent.get(&curr) {
            Some(&(prev, edge)) => {
                edges.push(edge);
                vertices.push(prev);
                curr = prev;
            }
            None => break,
        }
    }
    vertices.reverse();
    edges.reverse();
    PathResult { source, target, vertices, edges, cost }
}

/// Breadth-First Search (Unweighted Shortest Path)
///
/// `Ok(None)` when either vertex is missing or `target` is unreachable.
pub fn bfs<G: DirectedGraph>(
    graph: &G,
    source: G::Vertex,
    target: G::Vertex,
) -> Result<Option<PathResult<G::Vertex, G::Edge>>, G::Error> {
    if !graph.contains_vertex(source)? || !graph.contains_vertex(target)? {
        return Ok(None);
    }

    let mut queue = VecDeque::new();
    let mut parent: HashMap<G::Vertex, (G::Vertex, G::Edge)> = HashMap::new();
    let mut visited = HashMap::new();

    queue.push_back(source);
    visited.insert(source, 0usize);

    while let Some(current) = queue.pop_front() {
        let depth = visited[&current];
        if current == target {
            return Ok(Some(reconstruct(&parent, source, target, depth as f64)));
        }

        for edge in graph.out_edges(current)? {
            let next = graph.dest(edge)?;
            if !visited.contains_key(&next) {
                visited.insert(next, depth + 1);
                parent.insert(next, (current, edge));
                queue.push_back(next);
            }
        }
    }

    Ok(None)
}

/// State for Dijkstra priority queue
#[derive(Copy, Clone, PartialEq)]
struct State<V> {
    cost: f64,
    vertex: V,
}

impl<V: PartialEq> Eq for State<V> {}

impl<V: PartialEq> Ord for State<V> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Compare costs reversed for min-heap
        other.cost.partial_cmp(&self.cost).unwrap_or(Ordering::Equal)
    }
}

impl<V: PartialEq> PartialOrd for State<V> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Dijkstra's Algorithm (Weighted Shortest Path)
///
/// `weight` gives the cost of traversing an edge; edges with a negative or
/// NaN weight are skipped.
pub fn dijkstra<G, W>(
    graph: &G,
    source: G::Vertex,
    target: G::Vertex,
    weight: W,
) -> Result<Option<PathResult<G::Vertex, G::Edge>>, G::Error>
where
    G: DirectedGraph,
    W: Fn(G::Edge) -> f64,
{
    if !graph.contains_vertex(source)? || !graph.contains_vertex(target)? {
        return Ok(None);
    }

    let mut dist: HashMap<G::Vertex, f64> = HashMap::new();
    let mut parent: HashMap<G::Vertex, (G::Vertex, G::Edge)> = HashMap::new();
    let mut heap = BinaryHeap::new();

    dist.insert(source, 0.0);
    heap.push(State { cost: 0.0, vertex: source });

    while let Some(State { cost, vertex }) = heap.pop() {
        if vertex == target {
            return Ok(Some(reconstruct(&parent, source, target, cost)));
        }

        if cost > *dist.get(&vertex).unwrap_or(&f64::INFINITY) {
            continue;
        }

        for edge in graph.out_edges(vertex)? {
            let w = weight(edge);
            if w.is_nan() || w < 0.0 {
                continue;
            }

            let next = graph.dest(edge)?;
            let next_cost = cost + w;
            if next_cost < *dist.get(&next).unwrap_or(&f64::INFINITY) {
                dist.insert(next, next_cost);
                parent.insert(next, (vertex, edge));
                heap.push(State { cost: next_cost, vertex: next });
            }
        }
    }

    Ok(None)
}
