use crate::ScgError;
use num_traits::Float;

/// Possible maps from a Pearson correlation coefficient `r` to an edge weight. Higher
/// correlation always gives a lower weight, so minimum spanning trees favour strongly
/// correlated region pairs.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum WeightTransform {
    /// `1 - r`, in the range 0 to 2. Anti-correlated regions are far apart.
    OneMinusCorrelation,
    /// `1 - |r|`, in the range 0 to 1. Correlation strength regardless of sign.
    OneMinusAbsCorrelation,
}

impl WeightTransform {
    pub(crate) fn apply<T: Float>(&self, r: T) -> T {
        match *self {
            Self::OneMinusCorrelation => T::one() - r,
            Self::OneMinusAbsCorrelation => T::one() - r.abs(),
        }
    }
}

/// Pearson correlation matrix between the columns of `rows`, computed across rows.
/// Errors if any column is constant, as its correlation is undefined.
pub(crate) fn correlation_matrix<T, R>(rows: &[R]) -> Result<Vec<Vec<T>>, ScgError>
where
    T: Float,
    R: AsRef<[T]>,
{
    let n_subjects = rows.len();
    let n_regions = rows.first().map_or(0, |row| row.as_ref().len());
    let n = T::from(n_subjects).ok_or_else(|| {
        ScgError::EmptyCohort(format!("{n_subjects} subjects cannot be represented"))
    })?;

    let mut centered = Vec::with_capacity(n_regions);
    let mut sum_squares = Vec::with_capacity(n_regions);
    for region in 0..n_regions {
        let column: Vec<T> = rows.iter().map(|row| row.as_ref()[region]).collect();
        let first = column[0];
        if column.iter().all(|&value| value == first) {
            return Err(ScgError::DegenerateColumn(format!(
                "region {region} is constant across all {n_subjects} subjects"
            )));
        }
        let mean = column.iter().fold(T::zero(), |acc, &x| acc + x) / n;
        let deviations: Vec<T> = column.iter().map(|&x| x - mean).collect();
        let ss = deviations.iter().fold(T::zero(), |acc, &d| acc + d * d);
        if ss <= T::zero() {
            return Err(ScgError::DegenerateColumn(format!(
                "region {region} has zero variance across {n_subjects} subjects"
            )));
        }
        centered.push(deviations);
        sum_squares.push(ss);
    }

    let mut correlations = vec![vec![T::one(); n_regions]; n_regions];
    for i in 0..n_regions {
        for j in (i + 1)..n_regions {
            let dot = centered[i]
                .iter()
                .zip(&centered[j])
                .fold(T::zero(), |acc, (&x, &y)| acc + x * y);
            let r = (dot / (sum_squares[i] * sum_squares[j]).sqrt())
                .max(-T::one())
                .min(T::one());
            correlations[i][j] = r;
            correlations[j][i] = r;
        }
    }
    Ok(correlations)
}
