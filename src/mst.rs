use crate::data_wrappers::TreeEdge;
use crate::union_find::UnionFind;
use crate::{ScgError, WeightedGraph};
use num_traits::Float;
use std::cmp::Ordering;

/// The minimum spanning tree algorithm options. Both break ties between equal weights
/// deterministically, so repeated runs on identical graphs give identical trees.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum MstAlgorithm {
    /// Dense Prim's algorithm, O(m²). Well suited to complete graphs.
    Prim,
    /// Kruskal's algorithm over all m(m-1)/2 edges sorted by weight, then vertex pair.
    Kruskal,
}

/// A minimum spanning tree of a `WeightedGraph`. Edges are sorted ascending by weight,
/// with ties ordered by vertex pair.
#[derive(Debug, Clone, PartialEq)]
pub struct SpanningTree<T> {
    n_vertices: usize,
    edges: Vec<TreeEdge<T>>,
}

impl<T: Float> SpanningTree<T> {
    /// Reduces a complete graph to its minimum spanning tree.
    ///
    /// # Parameters
    /// * `graph` - the graph to reduce.
    /// * `algorithm` - the minimum spanning tree algorithm to use.
    ///
    /// # Returns
    /// * A tree with `n_vertices - 1` edges, or `InvalidGraph` for graphs with fewer than
    ///   two vertices.
    pub fn from_graph(graph: &WeightedGraph<T>, algorithm: MstAlgorithm) -> Result<Self, ScgError> {
        let n_vertices = graph.n_vertices();
        if n_vertices < 2 {
            return Err(ScgError::InvalidGraph(format!(
                "a spanning tree needs at least 2 vertices, found {n_vertices}"
            )));
        }
        let mut edges = match algorithm {
            MstAlgorithm::Prim => prims_min_spanning_tree(graph),
            MstAlgorithm::Kruskal => kruskals_min_spanning_tree(graph),
        };
        edges.sort_by(cmp_edges);
        Ok(SpanningTree { n_vertices, edges })
    }

    pub fn n_vertices(&self) -> usize {
        self.n_vertices
    }

    pub fn edges(&self) -> &[TreeEdge<T>] {
        &self.edges
    }

    pub fn total_weight(&self) -> T {
        self.edges.iter().fold(T::zero(), |acc, edge| acc + edge.weight)
    }
}

fn prims_min_spanning_tree<T: Float>(graph: &WeightedGraph<T>) -> Vec<TreeEdge<T>> {
    let n_vertices = graph.n_vertices();
    let mut in_tree = vec![false; n_vertices];
    let mut distances = vec![T::infinity(); n_vertices];
    let mut parents = vec![0; n_vertices];
    distances[0] = T::zero();

    for _ in 0..n_vertices {
        let left_node = select_min_node(&distances, &in_tree);
        in_tree[left_node] = true;

        for right_node in 0..n_vertices {
            if in_tree[right_node] {
                continue;
            }
            let weight = graph.weight(left_node, right_node);
            let closer = weight < distances[right_node];
            let lower_pair = weight == distances[right_node] && left_node < parents[right_node];
            if closer || lower_pair {
                distances[right_node] = weight;
                parents[right_node] = left_node;
            }
        }
    }

    parents
        .iter()
        .zip(&distances)
        .enumerate()
        .skip(1)
        .map(|(right, (&left, &weight))| TreeEdge::new(left, right, weight))
        .collect()
}

fn select_min_node<T: Float>(distances: &[T], in_tree: &[bool]) -> usize {
    let mut selected: Option<(usize, T)> = None;
    for (i, (&dist, is_in_tree)) in distances.iter().zip(in_tree).enumerate() {
        if *is_in_tree {
            continue;
        }
        match selected {
            Some((_, min_dist)) if dist >= min_dist => {}
            _ => selected = Some((i, dist)),
        }
    }
    selected.map_or(0, |(node, _)| node)
}

fn kruskals_min_spanning_tree<T: Float>(graph: &WeightedGraph<T>) -> Vec<TreeEdge<T>> {
    let n_vertices = graph.n_vertices();
    let mut candidates: Vec<TreeEdge<T>> = graph
        .edges()
        .map(|(i, j, weight)| TreeEdge::new(i, j, weight))
        .collect();
    candidates.sort_by(cmp_edges);

    let mut union_find = UnionFind::new(n_vertices);
    let mut mst = Vec::with_capacity(n_vertices - 1);
    for edge in candidates {
        if union_find.union(edge.left_node_id, edge.right_node_id) {
            mst.push(edge);
            if mst.len() == n_vertices - 1 {
                break;
            }
        }
    }
    mst
}

fn cmp_edges<T: Float>(a: &TreeEdge<T>, b: &TreeEdge<T>) -> Ordering {
    a.weight
        .partial_cmp(&b.weight)
        .unwrap_or(Ordering::Equal)
        .then(a.left_node_id.cmp(&b.left_node_id))
        .then(a.right_node_id.cmp(&b.right_node_id))
}
