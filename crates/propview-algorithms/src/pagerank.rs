//! PageRank over a directed graph view
//!
//! Edges count individually, so parallel edges carry proportionally more
//! rank. Scores are normalised to sum to 1; the rank of vertices without
//! outgoing edges is spread evenly over all vertices.

use propview::view::DirectedGraph;
use std::collections::HashMap;
use tracing::debug;

/// PageRank configuration
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PageRankConfig {
    /// Damping factor (usually 0.85)
    pub damping_factor: f64,
    /// Maximum number of iterations
    pub iterations: usize,
    /// Stop once the L1 change between iterations falls below this
    pub tolerance: f64,
}

impl Default for PageRankConfig {
    fn default() -> Self {
        Self {
            damping_factor: 0.85,
            iterations: 20,
            tolerance: 0.0001,
        }
    }
}

/// Calculate PageRank for every vertex of `graph`
pub fn page_rank<G: DirectedGraph>(
    graph: &G,
    config: PageRankConfig,
) -> Result<HashMap<G::Vertex, f64>, G::Error> {
    let vertices = graph.vertices()?;
    let n = vertices.len();

    if n == 0 {
        return Ok(HashMap::new());
    }

    let index: HashMap<G::Vertex, usize> = vertices.iter().enumerate().map(|(i, v)| (*v, i)).collect();

    // Per vertex: out-degree and the index of the source of every in-edge
    let mut out_degree = Vec::with_capacity(n);
    let mut in_sources: Vec<Vec<usize>> = Vec::with_capacity(n);
    for &v in &vertices {
        out_degree.push(graph.out_degree(v)?);
        let mut sources = Vec::new();
        for edge in graph.in_edges(v)? {
            if let Some(&i) = index.get(&graph.source(edge)?) {
                sources.push(i);
            }
        }
        in_sources.push(sources);
    }

    let d = config.damping_factor;
    let teleport = (1.0 - d) / n as f64;
    let mut scores = vec![1.0 / n as f64; n];
    let mut next_scores = vec![0.0; n];

    for iteration in 0..config.iterations {
        let dangling: f64 = (0..n).filter(|&i| out_degree[i] == 0).map(|i| scores[i]).sum();
        let dangling_share = d * dangling / n as f64;

        let mut total_diff = 0.0;
        for i in 0..n {
            let sum_incoming: f64 = in_sources[i]
                .iter()
                .map(|&s| scores[s] / out_degree[s] as f64)
                .sum();

            next_scores[i] = teleport + dangling_share + d * sum_incoming;
            total_diff += (next_scores[i] - scores[i]).abs();
        }

        std::mem::swap(&mut scores, &mut next_scores);

        if total_diff < config.tolerance {
            debug!("PageRank converged after {} iterations", iteration + 1);
            break;
        }
    }

    Ok(vertices.into_iter().zip(scores).collect())
}
