use crate::correlation::{correlation_matrix, WeightTransform};
use crate::validation::validate_cohort;
use crate::ScgError;
use num_traits::Float;

/// A complete, undirected, weighted graph over `n_vertices` regions. Weights are stored
/// as a dense symmetric matrix with no self loops.
#[derive(Debug, Clone, PartialEq)]
pub struct WeightedGraph<T> {
    n_vertices: usize,
    weights: Vec<T>,
}

impl<T: Float> WeightedGraph<T> {
    /// Builds the structural correlation graph of a cohort. Vertices are the regions
    /// (columns) and each edge weight is the transformed Pearson correlation between two
    /// regions across the subjects (rows).
    ///
    /// # Parameters
    /// * `rows` - one row per subject, every row with the same number of regions.
    /// * `transform` - the map from correlation to edge weight.
    ///
    /// # Returns
    /// * The graph, `DegenerateColumn` if some region is constant across subjects, or
    ///   `EmptyCohort`, `RaggedRows` or `NonFiniteMeasurement` for malformed rows.
    ///
    /// # Examples
    /// ```
    ///use scg_inference::{WeightTransform, WeightedGraph};
    ///
    ///let rows = vec![
    ///    vec![1.0, 2.0, 4.0],
    ///    vec![2.0, 4.0, 3.0],
    ///    vec![3.0, 6.0, 2.0],
    ///    vec![4.0, 8.0, 1.0],
    ///];
    ///let graph = WeightedGraph::<f64>::from_rows(&rows, WeightTransform::OneMinusCorrelation).unwrap();
    ///assert!(graph.weight(0, 1).abs() < 1e-12);
    ///assert!((graph.weight(0, 2) - 2.0).abs() < 1e-12);
    /// ```
    pub fn from_rows<R: AsRef<[T]>>(rows: &[R], transform: WeightTransform) -> Result<Self, ScgError> {
        validate_cohort(rows, "rows")?;
        Self::from_valid_rows(rows, transform)
    }

    fn from_valid_rows<R: AsRef<[T]>>(rows: &[R], transform: WeightTransform) -> Result<Self, ScgError> {
        let correlations = correlation_matrix(rows)?;
        let n_vertices = correlations.len();
        let mut weights = vec![T::infinity(); n_vertices * n_vertices];
        for i in 0..n_vertices {
            for j in (i + 1)..n_vertices {
                let weight = transform.apply(correlations[i][j]);
                weights[i * n_vertices + j] = weight;
                weights[j * n_vertices + i] = weight;
            }
        }
        Ok(WeightedGraph { n_vertices, weights })
    }

    /// Wraps a precalculated weight matrix. The matrix must be square, symmetric and
    /// finite off the diagonal. Diagonal entries are ignored.
    pub fn from_weights(matrix: &[Vec<T>]) -> Result<Self, ScgError> {
        let n_vertices = matrix.len();
        if let Some((n, row)) = matrix.iter().enumerate().find(|(_, row)| row.len() != n_vertices) {
            return Err(ScgError::InvalidGraph(format!(
                "weight matrix has {n_vertices} rows, but {n}th row has {} entries",
                row.len()
            )));
        }
        let mut weights = vec![T::infinity(); n_vertices * n_vertices];
        for i in 0..n_vertices {
            for j in (i + 1)..n_vertices {
                let (w_ij, w_ji) = (matrix[i][j], matrix[j][i]);
                if !w_ij.is_finite() || (w_ij - w_ji).abs() > T::epsilon() {
                    return Err(ScgError::InvalidGraph(format!(
                        "weights between {i} and {j} must be finite and symmetrical"
                    )));
                }
                weights[i * n_vertices + j] = w_ij;
                weights[j * n_vertices + i] = w_ij;
            }
        }
        Ok(WeightedGraph { n_vertices, weights })
    }

    pub fn n_vertices(&self) -> usize {
        self.n_vertices
    }

    /// The weight of the edge between `i` and `j`. Self loops have infinite weight.
    pub fn weight(&self, i: usize, j: usize) -> T {
        self.weights[i * self.n_vertices + j]
    }

    /// All edges `(i, j, weight)` with `i < j`, in lexicographic vertex order.
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize, T)> + '_ {
        (0..self.n_vertices)
            .flat_map(move |i| ((i + 1)..self.n_vertices).map(move |j| (i, j, self.weight(i, j))))
    }
}

/// Builds one graph per cohort. Each cohort is checked for malformed rows, then both
/// must share the same number of regions.
pub fn build_graphs<T, R>(
    cohort_a: &[R],
    cohort_b: &[R],
    transform: WeightTransform,
) -> Result<(WeightedGraph<T>, WeightedGraph<T>), ScgError>
where
    T: Float,
    R: AsRef<[T]>,
{
    let n_regions_a = validate_cohort(cohort_a, "cohort A")?;
    let n_regions_b = validate_cohort(cohort_b, "cohort B")?;
    if n_regions_a != n_regions_b {
        return Err(ScgError::ShapeMismatch(format!(
            "cohort A has {n_regions_a} regions, but cohort B has {n_regions_b}"
        )));
    }
    let graph_a = WeightedGraph::from_valid_rows(cohort_a, transform)?;
    let graph_b = WeightedGraph::from_valid_rows(cohort_b, transform)?;
    Ok((graph_a, graph_b))
}
