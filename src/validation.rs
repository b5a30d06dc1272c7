use crate::ScgError;
use num_traits::Float;

const MIN_SUBJECTS: usize = 2;

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct CohortValidator<'a, T> {
    cohort_a: &'a [Vec<T>],
    cohort_b: &'a [Vec<T>],
}

impl<'a, T: Float> CohortValidator<'a, T> {
    pub(crate) fn new(cohort_a: &'a [Vec<T>], cohort_b: &'a [Vec<T>]) -> Self {
        Self { cohort_a, cohort_b }
    }

    pub(crate) fn validate_input_data(&self) -> Result<(), ScgError> {
        let n_regions_a = validate_cohort(self.cohort_a, "cohort A")?;
        let n_regions_b = validate_cohort(self.cohort_b, "cohort B")?;
        if n_regions_a != n_regions_b {
            return Err(ScgError::ShapeMismatch(format!(
                "cohort A has {n_regions_a} regions, but cohort B has {n_regions_b}"
            )));
        }
        if n_regions_a < 2 {
            return Err(ScgError::InvalidGraph(format!(
                "at least 2 regions are required, found {n_regions_a}"
            )));
        }
        Ok(())
    }
}

/// Checks a single cohort and returns its number of regions. `name` prefixes the error
/// messages.
pub(crate) fn validate_cohort<T, R>(cohort: &[R], name: &str) -> Result<usize, ScgError>
where
    T: Float,
    R: AsRef<[T]>,
{
    if cohort.len() < MIN_SUBJECTS {
        return Err(ScgError::EmptyCohort(format!(
            "{name} has {} subject(s), at least {MIN_SUBJECTS} are required",
            cohort.len()
        )));
    }
    let n_regions = cohort[0].as_ref().len();
    for (n, row) in cohort.iter().enumerate() {
        let row = row.as_ref();
        if row.len() != n_regions {
            return Err(ScgError::RaggedRows(format!(
                "{name}: 0th subject has {n_regions} regions, but {n}th has {}",
                row.len()
            )));
        }
        if row.iter().any(|value| !value.is_finite()) {
            return Err(ScgError::NonFiniteMeasurement(format!(
                "{name}: {n}th subject contains non-finite element(s)"
            )));
        }
    }
    Ok(n_regions)
}
