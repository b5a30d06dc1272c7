//! Betti-0 curves of spanning trees.
//!
//! For a tree on m vertices and a threshold t, the Betti-0 number is the number of
//! connected components left once every edge heavier than t is discarded. Sweeping t
//! upwards only ever adds edges, so each curve is non-increasing and is computed in a
//! single pass with a union-find.

use crate::data_wrappers::BettiCurves;
use crate::union_find::UnionFind;
use crate::{ScgError, SpanningTree};
use num_traits::Float;
use std::cmp::Ordering;

/// The threshold axis options for Betti-0 curves.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum ThresholdSweep<T> {
    /// Negative infinity followed by the distinct edge weights of both trees. These are
    /// exactly the points where either curve can change, so the distance between the
    /// curves on this axis equals their distance over all real thresholds.
    EdgeWeights,
    /// Evenly spaced thresholds `resolution` apart. The axis starts at the largest
    /// multiple of `resolution` strictly below the smallest edge weight and ends at the
    /// first step at or above the largest edge weight.
    Uniform { resolution: T },
    /// A fixed axis of `n` evenly spaced thresholds from `start` to `stop` inclusive,
    /// independent of the trees. The curves only start at the vertex count and end at 1
    /// when `start` lies below every edge weight and `stop` at or above all of them.
    Linspace { start: T, stop: T, n: usize },
}

impl<T: Float> ThresholdSweep<T> {
    /// Builds the ascending threshold axis for a pair of trees.
    pub fn axis(&self, tree_a: &SpanningTree<T>, tree_b: &SpanningTree<T>) -> Result<Vec<T>, ScgError> {
        let mut weights: Vec<T> = tree_a
            .edges()
            .iter()
            .chain(tree_b.edges())
            .map(|edge| edge.weight)
            .collect();
        weights.sort_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));
        weights.dedup();

        match *self {
            ThresholdSweep::EdgeWeights => {
                let mut axis = Vec::with_capacity(weights.len() + 1);
                axis.push(T::neg_infinity());
                axis.extend(weights);
                Ok(axis)
            }
            ThresholdSweep::Uniform { resolution } => {
                if !(resolution.is_finite() && resolution > T::zero()) {
                    return Err(ScgError::InvalidSweep(String::from(
                        "Uniform sweep resolution must be finite and positive",
                    )));
                }
                let (min_weight, max_weight) = match (weights.first(), weights.last()) {
                    (Some(&min), Some(&max)) => (min, max),
                    _ => return Ok(Vec::new()),
                };
                uniform_axis(min_weight, max_weight, resolution)
            }
            ThresholdSweep::Linspace { start, stop, n } => linspace(start, stop, n),
        }
    }
}

fn uniform_axis<T: Float>(min_weight: T, max_weight: T, resolution: T) -> Result<Vec<T>, ScgError> {
    let mut start_step = (min_weight / resolution).floor();
    if start_step * resolution >= min_weight {
        start_step = start_step - T::one();
    }
    let too_fine = || {
        ScgError::InvalidSweep(String::from(
            "Uniform sweep resolution is too fine for the edge weight range",
        ))
    };
    let mut n_steps = ((max_weight / resolution).ceil() - start_step)
        .to_usize()
        .ok_or_else(too_fine)?;
    while (start_step + T::from(n_steps).ok_or_else(too_fine)?) * resolution < max_weight {
        n_steps += 1;
    }
    (0..=n_steps)
        .map(|k| {
            T::from(k)
                .map(|k| (start_step + k) * resolution)
                .ok_or_else(too_fine)
        })
        .collect()
}

fn linspace<T: Float>(start: T, stop: T, n: usize) -> Result<Vec<T>, ScgError> {
    if n == 0 || !start.is_finite() || !stop.is_finite() || start > stop {
        return Err(ScgError::InvalidSweep(format!(
            "Linspace needs finite bounds with start <= stop and at least one point, got n = {n}"
        )));
    }
    if n == 1 {
        return Ok(vec![start]);
    }
    let intervals = T::from(n - 1).ok_or_else(|| {
        ScgError::InvalidSweep(format!("{n} thresholds cannot be represented"))
    })?;
    let step = (stop - start) / intervals;
    let mut axis: Vec<T> = (0..n)
        .map(|k| start + T::from(k).unwrap_or(intervals) * step)
        .collect();
    axis[n - 1] = stop;
    Ok(axis)
}

/// Computes the Betti-0 curve of each tree on a shared threshold axis.
///
/// # Parameters
/// * `tree_a`, `tree_b` - spanning trees over the same number of vertices.
/// * `sweep` - how the threshold axis is chosen.
///
/// # Returns
/// * The axis and both curves, all of the same length.
///
/// # Examples
/// ```
///use scg_inference::{betti_curves, MstAlgorithm, SpanningTree, ThresholdSweep, WeightedGraph};
///
///let weights = vec![
///    vec![0.0, 0.1, 0.5],
///    vec![0.1, 0.0, 0.3],
///    vec![0.5, 0.3, 0.0],
///];
///let graph = WeightedGraph::from_weights(&weights).unwrap();
///let tree = SpanningTree::from_graph(&graph, MstAlgorithm::Prim).unwrap();
///let curves = betti_curves(&tree, &tree, &ThresholdSweep::EdgeWeights).unwrap();
///assert_eq!(curves.curve_a(), &[3, 2, 1]);
/// ```
pub fn betti_curves<T: Float>(
    tree_a: &SpanningTree<T>,
    tree_b: &SpanningTree<T>,
    sweep: &ThresholdSweep<T>,
) -> Result<BettiCurves<T>, ScgError> {
    if tree_a.n_vertices() != tree_b.n_vertices() {
        return Err(ScgError::InvalidGraph(format!(
            "trees must share a vertex set, found {} and {} vertices",
            tree_a.n_vertices(),
            tree_b.n_vertices()
        )));
    }
    let axis = sweep.axis(tree_a, tree_b)?;
    let curve_a = betti_curve(tree_a, &axis);
    let curve_b = betti_curve(tree_b, &axis);
    Ok(BettiCurves { axis, curve_a, curve_b })
}

/// Component counts of `tree` at each threshold of an ascending `axis`.
pub(crate) fn betti_curve<T: Float>(tree: &SpanningTree<T>, axis: &[T]) -> Vec<usize> {
    let edges = tree.edges();
    let mut union_find = UnionFind::new(tree.n_vertices());
    let mut next_edge = 0;

    axis.iter()
        .map(|&threshold| {
            while next_edge < edges.len() && edges[next_edge].weight <= threshold {
                let edge = &edges[next_edge];
                union_find.union(edge.left_node_id, edge.right_node_id);
                next_edge += 1;
            }
            union_find.n_components()
        })
        .collect()
}
