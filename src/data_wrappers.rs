/// An edge of a spanning tree. `left_node_id` is always the lower vertex index.
#[derive(Clone, Debug, PartialEq)]
pub struct TreeEdge<T> {
    pub left_node_id: usize,
    pub right_node_id: usize,
    pub weight: T,
}

impl<T> TreeEdge<T> {
    pub(crate) fn new(a: usize, b: usize, weight: T) -> Self {
        TreeEdge {
            left_node_id: a.min(b),
            right_node_id: a.max(b),
            weight,
        }
    }
}

/// The two Betti-0 curves of a comparison, aligned on a shared threshold axis.
#[derive(Clone, Debug, PartialEq)]
pub struct BettiCurves<T> {
    pub(crate) axis: Vec<T>,
    pub(crate) curve_a: Vec<usize>,
    pub(crate) curve_b: Vec<usize>,
}

impl<T> BettiCurves<T> {
    /// The ascending thresholds at which both curves are evaluated.
    pub fn axis(&self) -> &[T] {
        &self.axis
    }

    pub fn curve_a(&self) -> &[usize] {
        &self.curve_a
    }

    pub fn curve_b(&self) -> &[usize] {
        &self.curve_b
    }
}
