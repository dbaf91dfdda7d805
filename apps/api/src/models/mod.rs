//! Domain records persisted through a [`CandidateStore`](crate::store::CandidateStore).
//!
//! Records are built in memory from a submission and persisted with `save`,
//! which takes the store explicitly.

pub mod candidate;
pub mod education;
pub mod resume;
pub mod work_experience;

use thiserror::Error;

use crate::store::StoreError;

pub use candidate::{Candidate, CandidateProfile};
pub use education::Education;
pub use resume::Resume;
pub use work_experience::WorkExperience;

/// Failure of a single record's `save`.
#[derive(Debug, Error)]
pub enum RecordError {
    #[error("No se permite la actualización de un currículum existente")]
    ResumeUpdateForbidden,

    #[error("No se pudo encontrar el registro del candidato con el ID proporcionado.")]
    CandidateNotFound,

    #[error("No se pudo conectar con la base de datos. Por favor, asegúrese de que el servidor de base de datos esté en ejecución.")]
    Unavailable,

    #[error("{0} is not attached to a persisted candidate")]
    MissingIdentity(&'static str),

    #[error(transparent)]
    Store(#[from] StoreError),
}
