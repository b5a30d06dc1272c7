use crate::{MstAlgorithm, ResamplingMode, ThresholdSweep, WeightTransform};
use num_traits::Float;

// Defaults for parameters
const N_TRIALS_DEFAULT: usize = 1000;
const MODE_DEFAULT: ResamplingMode = ResamplingMode::Permutation;
const WEIGHT_TRANSFORM_DEFAULT: WeightTransform = WeightTransform::OneMinusCorrelation;
const MST_ALGORITHM_DEFAULT: MstAlgorithm = MstAlgorithm::Prim;
const DEGENERATE_POLICY_DEFAULT: DegeneratePolicy = DegeneratePolicy::Abort;

// Valid minimums/left bounds of parameters
const N_TRIALS_MINIMUM: usize = 1;
const N_THREADS_MINIMUM: usize = 1;
const MAX_ATTEMPTS_MINIMUM: usize = 1;

/// What a resampling trial does when one of its groups contains a region with zero
/// variance, which leaves the correlation graph undefined.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum DegeneratePolicy {
    /// Fail the whole run, reporting the trial index.
    Abort,
    /// Draw a new partition from the trial's own random stream, up to `max_attempts`
    /// partitions in total, then fail the run.
    Redraw { max_attempts: usize },
}

/// The configuration of a two-sample test. Use `TestParams::default()` unless you want to
/// change the number of trials, the resampling scheme or the pipeline options.
#[derive(Debug, Clone, PartialEq)]
pub struct TestParams<T> {
    pub(crate) n_trials: usize,
    pub(crate) mode: ResamplingMode,
    pub(crate) sweep: ThresholdSweep<T>,
    pub(crate) weight_transform: WeightTransform,
    pub(crate) mst_algorithm: MstAlgorithm,
    pub(crate) degenerate_policy: DegeneratePolicy,
    pub(crate) n_threads: Option<usize>,
}

/// Builder object to set custom test parameters.
pub struct ParamBuilder<T> {
    n_trials: Option<usize>,
    mode: Option<ResamplingMode>,
    sweep: Option<ThresholdSweep<T>>,
    weight_transform: Option<WeightTransform>,
    mst_algorithm: Option<MstAlgorithm>,
    degenerate_policy: Option<DegeneratePolicy>,
    n_threads: Option<usize>,
}

impl<T: Float> Default for TestParams<T> {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl<T: Float> TestParams<T> {
    /// Enters the builder pattern, allowing custom parameters to be set using various
    /// setter methods.
    ///
    /// # Returns
    /// * the parameter configuration builder
    pub fn builder() -> ParamBuilder<T> {
        ParamBuilder {
            n_trials: None,
            mode: None,
            sweep: None,
            weight_transform: None,
            mst_algorithm: None,
            degenerate_policy: None,
            n_threads: None,
        }
    }

    pub fn n_trials(&self) -> usize {
        self.n_trials
    }

    pub fn mode(&self) -> ResamplingMode {
        self.mode
    }
}

impl<T: Float> ParamBuilder<T> {
    /// Sets the number of resampling trials, i.e. the size of the null distribution.
    /// Defaults to 1000.
    pub fn n_trials(mut self, n_trials: usize) -> ParamBuilder<T> {
        self.n_trials = Some(validate_input_left_bound(n_trials, N_TRIALS_MINIMUM, "n_trials"));
        self
    }

    /// Sets how group labels are randomised in each trial. Defaults to permutation.
    pub fn mode(mut self, mode: ResamplingMode) -> ParamBuilder<T> {
        self.mode = Some(mode);
        self
    }

    /// Sets the threshold axis used for Betti-0 curves. Defaults to the distinct edge
    /// weights of both trees.
    pub fn sweep(mut self, sweep: ThresholdSweep<T>) -> ParamBuilder<T> {
        self.sweep = Some(sweep);
        self
    }

    /// Sets the map from region correlation to edge weight. Defaults to `1 - r`.
    pub fn weight_transform(mut self, weight_transform: WeightTransform) -> ParamBuilder<T> {
        self.weight_transform = Some(weight_transform);
        self
    }

    /// Sets the minimum spanning tree algorithm. Defaults to Prim's.
    pub fn mst_algorithm(mut self, mst_algorithm: MstAlgorithm) -> ParamBuilder<T> {
        self.mst_algorithm = Some(mst_algorithm);
        self
    }

    /// Sets the policy for groups containing a zero variance region. Defaults to aborting
    /// the run.
    pub fn degenerate_policy(mut self, policy: DegeneratePolicy) -> ParamBuilder<T> {
        let policy = match policy {
            DegeneratePolicy::Redraw { max_attempts } => DegeneratePolicy::Redraw {
                max_attempts: validate_input_left_bound(
                    max_attempts,
                    MAX_ATTEMPTS_MINIMUM,
                    "max_attempts",
                ),
            },
            DegeneratePolicy::Abort => DegeneratePolicy::Abort,
        };
        self.degenerate_policy = Some(policy);
        self
    }

    /// Sets the number of worker threads used by parallel runs. Defaults to the
    /// available parallelism.
    pub fn n_threads(mut self, n_threads: usize) -> ParamBuilder<T> {
        self.n_threads = Some(validate_input_left_bound(n_threads, N_THREADS_MINIMUM, "n_threads"));
        self
    }

    /// Finishes the building of the parameter configuration.
    pub fn build(self) -> TestParams<T> {
        TestParams {
            n_trials: self.n_trials.unwrap_or(N_TRIALS_DEFAULT),
            mode: self.mode.unwrap_or(MODE_DEFAULT),
            sweep: self.sweep.unwrap_or(ThresholdSweep::EdgeWeights),
            weight_transform: self.weight_transform.unwrap_or(WEIGHT_TRANSFORM_DEFAULT),
            mst_algorithm: self.mst_algorithm.unwrap_or(MST_ALGORITHM_DEFAULT),
            degenerate_policy: self.degenerate_policy.unwrap_or(DEGENERATE_POLICY_DEFAULT),
            n_threads: self.n_threads,
        }
    }
}

fn validate_input_left_bound(input_param: usize, left_bound: usize, param: &str) -> usize {
    if input_param < left_bound {
        log::warn!("{param} ({input_param}) cannot be lower than {left_bound}. Set to {left_bound}.");
        left_bound
    } else {
        input_param
    }
}
