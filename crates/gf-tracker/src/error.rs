use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TrackerError {
    #[error("tracking {tracked} zones but {zones} exist")]
    ZoneCountMismatch { tracked: usize, zones: usize },
}

pub type TrackerResult<T> = Result<T, TrackerError>;
