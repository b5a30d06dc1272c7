use std::error::Error;
use std::fmt::{Display, Formatter};

/// Possible errors that arise while building graphs, extracting curves or running
/// resampling trials. All of them are fatal for the run in which they occur.
#[derive(Debug, Clone, PartialEq)]
pub enum ScgError {
    EmptyCohort(String),
    RaggedRows(String),
    NonFiniteMeasurement(String),
    ShapeMismatch(String),
    DegenerateColumn(String),
    InvalidGraph(String),
    InvalidSweep(String),
    LengthMismatch(String),
    ThreadPool(String),
    /// An error raised inside a single resampling trial.
    Trial { trial: usize, source: Box<ScgError> },
}

impl ScgError {
    pub(crate) fn in_trial(self, trial: usize) -> Self {
        ScgError::Trial { trial, source: Box::new(self) }
    }

    /// The underlying error, looking through any trial wrapper.
    pub fn root(&self) -> &ScgError {
        match self {
            ScgError::Trial { source, .. } => source.root(),
            other => other,
        }
    }

    pub(crate) fn is_degenerate(&self) -> bool {
        matches!(self, ScgError::DegenerateColumn(_))
    }
}

impl Error for ScgError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            ScgError::Trial { source, .. } => Some(source.as_ref()),
            _ => None,
        }
    }
}

impl Display for ScgError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let message = match self {
            ScgError::EmptyCohort(msg) => format!("Cohort has too few subjects: {msg}"),
            ScgError::RaggedRows(msg) => format!("Subject rows have mismatched lengths: {msg}"),
            ScgError::NonFiniteMeasurement(msg) => format!("Non finite measurement: {msg}"),
            ScgError::ShapeMismatch(msg) => format!("Cohorts have mismatched shapes: {msg}"),
            ScgError::DegenerateColumn(msg) => format!("Zero variance region: {msg}"),
            ScgError::InvalidGraph(msg) => format!("Invalid graph: {msg}"),
            ScgError::InvalidSweep(msg) => format!("Invalid threshold sweep: {msg}"),
            ScgError::LengthMismatch(msg) => format!("Betti curves are not aligned: {msg}"),
            ScgError::ThreadPool(msg) => format!("Failed to build thread pool: {msg}"),
            ScgError::Trial { trial, source } => format!("Trial {trial} failed: {source}"),
        };
        write!(f, "{message}")
    }
}
