use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use scg_inference::{
    p_value, DegeneratePolicy, ResamplingMode, ScgError, TestParams, TestResult, TwoSampleTest,
};

pub type RunFn = fn(&TwoSampleTest<f64>, &[u32]) -> Result<TestResult, ScgError>;

fn cohort(seed: u64, n_subjects: usize, n_regions: usize) -> Vec<Vec<f64>> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..n_subjects)
        .map(|_| (0..n_regions).map(|_| rng.gen_range(0.2..0.9)).collect())
        .collect()
}

fn seeds(n_trials: u32) -> Vec<u32> {
    (0..n_trials).map(|n| n.wrapping_mul(2_654_435_761)).collect()
}

// Region 0 takes only two values across the pooled subjects, so some random groups see
// it as constant.
fn cohorts_with_binary_region() -> (Vec<Vec<f64>>, Vec<Vec<f64>>) {
    let cohort_a = vec![
        vec![0.0, 0.31, 0.72],
        vec![0.0, 0.45, 0.51],
        vec![0.0, 0.29, 0.66],
        vec![1.0, 0.52, 0.48],
    ];
    let cohort_b = vec![
        vec![0.0, 0.38, 0.59],
        vec![0.0, 0.61, 0.44],
        vec![1.0, 0.34, 0.70],
        vec![1.0, 0.49, 0.63],
    ];
    (cohort_a, cohort_b)
}

pub fn test_permutation(run_fn: RunFn) {
    let cohort_a = cohort(1, 12, 6);
    let cohort_b = cohort(2, 12, 6);
    let params = TestParams::builder()
        .n_trials(100)
        .mode(ResamplingMode::Permutation)
        .build();
    let test = TwoSampleTest::new(&cohort_a, &cohort_b, params);
    let result = run_fn(&test, &seeds(100)).unwrap();

    assert_eq!(ResamplingMode::Permutation, result.mode);
    assert_eq!(100, result.null_distribution.len());
    assert_eq!(test.observed_statistic().unwrap(), result.observed);
    assert_eq!(p_value(&result.null_distribution, result.observed), result.p_value);
    assert!(result.p_value > 0.0 && result.p_value <= 1.0);
    // A Betti-0 curve never exceeds the number of regions
    assert!(result.null_distribution.iter().all(|&dq| dq < 6));
}

pub fn test_bootstrap(run_fn: RunFn) {
    let cohort_a = cohort(3, 10, 5);
    let cohort_b = cohort(4, 14, 5);
    let params = TestParams::builder()
        .n_trials(80)
        .mode(ResamplingMode::Bootstrap)
        .build();
    let test = TwoSampleTest::new(&cohort_a, &cohort_b, params);
    let result = run_fn(&test, &seeds(80)).unwrap();

    assert_eq!(ResamplingMode::Bootstrap, result.mode);
    assert_eq!(80, result.null_distribution.len());
    assert!(result.p_value > 0.0 && result.p_value <= 1.0);
}

pub fn test_reproducible_with_seeds(run_fn: RunFn) {
    let cohort_a = cohort(5, 9, 7);
    let cohort_b = cohort(6, 11, 7);
    for mode in [ResamplingMode::Permutation, ResamplingMode::Bootstrap] {
        let params = TestParams::builder().mode(mode).build();
        let test = TwoSampleTest::new(&cohort_a, &cohort_b, params);
        let seeds = seeds(60);
        let first = run_fn(&test, &seeds).unwrap();
        let second = run_fn(&test, &seeds).unwrap();
        let serial = test.run_with_seeds(&seeds).unwrap();
        assert_eq!(first, second);
        assert_eq!(serial, first);
    }
}

pub fn test_entropy_seeds(run_fn: RunFn) {
    let cohort_a = cohort(7, 8, 4);
    let cohort_b = cohort(8, 8, 4);
    let params = TestParams::builder().n_trials(25).build();
    let test = TwoSampleTest::new(&cohort_a, &cohort_b, params);
    let result = run_fn(&test, &scg_inference::draw_seeds(25)).unwrap();
    assert_eq!(25, result.null_distribution.len());
}

pub fn test_single_trial(run_fn: RunFn) {
    let cohort_a = cohort(9, 6, 3);
    let cohort_b = cohort(10, 6, 3);
    let test = TwoSampleTest::default_params(&cohort_a, &cohort_b);
    let result = run_fn(&test, &[12345]).unwrap();
    assert_eq!(1, result.null_distribution.len());
    assert!(result.p_value == 0.5 || result.p_value == 1.0);
}

pub fn test_shape_mismatch(run_fn: RunFn) {
    let cohort_a = cohort(11, 6, 4);
    let cohort_b = cohort(12, 6, 5);
    let test = TwoSampleTest::default_params(&cohort_a, &cohort_b);
    let result = run_fn(&test, &seeds(10));
    assert!(matches!(result, Err(ScgError::ShapeMismatch(_))));
}

pub fn test_degenerate_trial_aborts(run_fn: RunFn) {
    let (cohort_a, cohort_b) = cohorts_with_binary_region();
    let test = TwoSampleTest::default_params(&cohort_a, &cohort_b);
    assert!(test.observed_statistic().is_ok());

    match run_fn(&test, &seeds(300)) {
        Err(err @ ScgError::Trial { .. }) => {
            assert!(matches!(err.root(), ScgError::DegenerateColumn(_)));
        }
        other => panic!("Expected a failed trial, got {other:?}"),
    }
}

pub fn test_degenerate_trial_redraws(run_fn: RunFn) {
    let (cohort_a, cohort_b) = cohorts_with_binary_region();
    let params = TestParams::builder()
        .degenerate_policy(DegeneratePolicy::Redraw { max_attempts: 60 })
        .build();
    let test = TwoSampleTest::new(&cohort_a, &cohort_b, params);
    let result = run_fn(&test, &seeds(300)).unwrap();
    assert_eq!(300, result.null_distribution.len());
    assert!(result.null_distribution.iter().all(|&dq| dq < 3));
}
