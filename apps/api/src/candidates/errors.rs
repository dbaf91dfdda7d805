use thiserror::Error;

use crate::candidates::validation::ValidationError;
use crate::models::RecordError;

/// Failure of a candidate operation. Every variant renders a user-facing message.
#[derive(Debug, Error)]
pub enum CandidateError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("The email already exists in the database")]
    DuplicateEmail,

    #[error(transparent)]
    Record(#[from] RecordError),
}
