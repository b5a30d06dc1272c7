use crate::data_wrappers::BettiCurves;
use crate::graph::build_graphs;
#[cfg(any(feature = "serial", feature = "parallel"))]
use crate::resampling::draw_seeds;
use crate::resampling::trial_rng;
use crate::validation::CohortValidator;
use crate::{
    betti_curves, p_value, sup_distance, DegeneratePolicy, ResamplingMode, ScgError, SpanningTree,
    TestParams, WeightedGraph,
};
use num_traits::Float;
#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Everything computed when comparing two groups of subjects once: the structural
/// correlation graphs, their minimum spanning trees, the Betti-0 curves and the
/// resulting test statistic.
#[derive(Debug, Clone, PartialEq)]
pub struct PipelineOutput<T> {
    pub graphs: (WeightedGraph<T>, WeightedGraph<T>),
    pub trees: (SpanningTree<T>, SpanningTree<T>),
    pub curves: BettiCurves<T>,
    pub statistic: usize,
}

/// Outcome of a resampling test.
#[derive(Debug, Clone, PartialEq)]
pub struct TestResult {
    /// Dq of the cohorts as given.
    pub observed: usize,
    /// `(#{null >= observed} + 1) / (T + 1)`, in the range (0, 1].
    pub p_value: f64,
    /// Dq of every trial, indexed by trial.
    pub null_distribution: Vec<usize>,
    pub mode: ResamplingMode,
}

/// Runs graph construction, tree reduction, curve extraction and the test statistic on
/// one pair of groups. No randomness is involved, so identical input gives bit-identical
/// output.
pub fn run_pipeline<T, R>(
    group_a: &[R],
    group_b: &[R],
    params: &TestParams<T>,
) -> Result<PipelineOutput<T>, ScgError>
where
    T: Float,
    R: AsRef<[T]>,
{
    let (graph_a, graph_b) = build_graphs(group_a, group_b, params.weight_transform)?;
    let tree_a = SpanningTree::from_graph(&graph_a, params.mst_algorithm)?;
    let tree_b = SpanningTree::from_graph(&graph_b, params.mst_algorithm)?;
    let curves = betti_curves(&tree_a, &tree_b, &params.sweep)?;
    let statistic = sup_distance(&curves.curve_a, &curves.curve_b)?;
    Ok(PipelineOutput {
        graphs: (graph_a, graph_b),
        trees: (tree_a, tree_b),
        curves,
        statistic,
    })
}

/// Two-sample test of whether the Betti-0 curves of two cohorts' structural
/// correlation graphs differ more than expected under random group assignment.
/// Generic over floating point numeric types.
#[derive(Debug, Clone, PartialEq)]
pub struct TwoSampleTest<'a, T> {
    cohort_a: &'a [Vec<T>],
    cohort_b: &'a [Vec<T>],
    params: TestParams<T>,
}

impl<'a, T: Float + Send + Sync> TwoSampleTest<'a, T> {
    /// Creates a test over two cohorts using a custom parameter configuration.
    ///
    /// # Parameters
    /// * `cohort_a`, `cohort_b` - one row per subject, one column per region. Both cohorts
    ///   must have the same regions in the same order; the number of subjects may differ.
    /// * `params` - the test configuration.
    ///
    /// # Examples
    /// ```
    ///use scg_inference::{ResamplingMode, TestParams, TwoSampleTest};
    ///
    ///let cohort_a: Vec<Vec<f64>> = vec![
    ///    vec![1.0, 2.1, 0.4],
    ///    vec![2.0, 3.9, 0.1],
    ///    vec![3.0, 6.2, 0.9],
    ///    vec![4.0, 8.1, 0.3],
    ///];
    ///let cohort_b: Vec<Vec<f64>> = vec![
    ///    vec![1.2, 0.3, 4.0],
    ///    vec![2.3, 0.8, 2.9],
    ///    vec![2.9, 0.2, 2.2],
    ///    vec![4.1, 0.5, 0.8],
    ///];
    ///let params = TestParams::builder()
    ///    .n_trials(50)
    ///    .mode(ResamplingMode::Permutation)
    ///    .build();
    ///let test = TwoSampleTest::new(&cohort_a, &cohort_b, params);
    ///let result = test.run_with_seeds(&(0..50).collect::<Vec<u32>>()).unwrap();
    ///assert_eq!(50, result.null_distribution.len());
    ///assert!(result.p_value > 0.0 && result.p_value <= 1.0);
    /// ```
    pub fn new(cohort_a: &'a [Vec<T>], cohort_b: &'a [Vec<T>], params: TestParams<T>) -> Self {
        TwoSampleTest { cohort_a, cohort_b, params }
    }

    /// Creates a test over two cohorts using the default parameters: 1000 permutation
    /// trials, `1 - r` weights, Prim's algorithm and an edge weight threshold sweep.
    pub fn default_params(cohort_a: &'a [Vec<T>], cohort_b: &'a [Vec<T>]) -> Self {
        TwoSampleTest::new(cohort_a, cohort_b, TestParams::default())
    }

    /// Runs the full pipeline on the cohorts as given, exposing intermediate results.
    pub fn pipeline(&self) -> Result<PipelineOutput<T>, ScgError> {
        CohortValidator::new(self.cohort_a, self.cohort_b).validate_input_data()?;
        run_pipeline(self.cohort_a, self.cohort_b, &self.params)
    }

    /// The test statistic Dq of the cohorts as given.
    pub fn observed_statistic(&self) -> Result<usize, ScgError> {
        Ok(self.pipeline()?.statistic)
    }

    /// Runs the configured number of trials, each seeded from the operating system's
    /// entropy source, one after another.
    #[cfg(feature = "serial")]
    pub fn run(&self) -> Result<TestResult, ScgError> {
        self.run_with_seeds(&draw_seeds(self.params.n_trials))
    }

    /// Runs one trial per seed, one after another. The number of trials is the number of
    /// seeds. Identical seeds always give identical null distributions.
    pub fn run_with_seeds(&self, seeds: &[u32]) -> Result<TestResult, ScgError> {
        let observed = self.start_run(seeds.len())?;
        let pooled = self.pooled();
        let null_distribution = seeds
            .iter()
            .enumerate()
            .map(|(trial, &seed)| self.run_trial(&pooled, trial, seed))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(self.finish_run(observed, null_distribution))
    }

    /// Runs the configured number of trials, each seeded from the operating system's
    /// entropy source, on a pool of worker threads.
    #[cfg(feature = "parallel")]
    pub fn run_par(&self) -> Result<TestResult, ScgError> {
        self.run_par_with_seeds(&draw_seeds(self.params.n_trials))
    }

    /// Runs one trial per seed on a pool of worker threads. The null distribution is
    /// identical to that of `run_with_seeds` for the same seeds, whatever the pool size.
    #[cfg(feature = "parallel")]
    pub fn run_par_with_seeds(&self, seeds: &[u32]) -> Result<TestResult, ScgError> {
        let observed = self.start_run(seeds.len())?;
        let pooled = self.pooled();
        let trials = || {
            seeds
                .par_iter()
                .enumerate()
                .map(|(trial, &seed)| self.run_trial(&pooled, trial, seed))
                .collect::<Result<Vec<_>, _>>()
        };
        let null_distribution = match self.params.n_threads {
            Some(n_threads) => {
                log::debug!("Running trials on {n_threads} threads");
                rayon::ThreadPoolBuilder::new()
                    .num_threads(n_threads)
                    .build()
                    .map_err(|err| ScgError::ThreadPool(err.to_string()))?
                    .install(trials)?
            }
            None => trials()?,
        };
        Ok(self.finish_run(observed, null_distribution))
    }

    fn start_run(&self, n_trials: usize) -> Result<usize, ScgError> {
        let observed = self.observed_statistic()?;
        log::info!(
            "Starting {:?} test with {n_trials} trials: {} vs {} subjects, observed Dq = {observed}",
            self.params.mode,
            self.cohort_a.len(),
            self.cohort_b.len()
        );
        Ok(observed)
    }

    fn finish_run(&self, observed: usize, null_distribution: Vec<usize>) -> TestResult {
        let p_value = p_value(&null_distribution, observed);
        log::info!("Finished {} trials, p-value = {p_value}", null_distribution.len());
        TestResult {
            observed,
            p_value,
            null_distribution,
            mode: self.params.mode,
        }
    }

    fn pooled(&self) -> Vec<&[T]> {
        self.cohort_a
            .iter()
            .chain(self.cohort_b)
            .map(|row| row.as_slice())
            .collect()
    }

    fn run_trial(&self, pooled: &[&[T]], trial: usize, seed: u32) -> Result<usize, ScgError> {
        let max_attempts = match self.params.degenerate_policy {
            DegeneratePolicy::Abort => 1,
            DegeneratePolicy::Redraw { max_attempts } => max_attempts,
        };
        let mut rng = trial_rng(seed);
        let mut attempt = 1;
        loop {
            let partition =
                self.params
                    .mode
                    .draw_partition(self.cohort_a.len(), self.cohort_b.len(), &mut rng);
            let group_a: Vec<&[T]> = partition.group_a.iter().map(|&i| pooled[i]).collect();
            let group_b: Vec<&[T]> = partition.group_b.iter().map(|&i| pooled[i]).collect();

            match run_pipeline(&group_a, &group_b, &self.params) {
                Ok(output) => return Ok(output.statistic),
                Err(err) if err.is_degenerate() && attempt < max_attempts => {
                    log::debug!("Trial {trial}: {err}, redrawing (attempt {attempt} of {max_attempts})");
                    attempt += 1;
                }
                Err(err) => return Err(err.in_trial(trial)),
            }
        }
    }
}
