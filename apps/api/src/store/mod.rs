//! Persistence seam for candidate records.
//!
//! `AppState` carries an `Arc<dyn CandidateStore>`. Production uses
//! [`PgCandidateStore`]; tests use the recording store in [`testing`].

pub mod postgres;
#[cfg(test)]
pub mod testing;

use async_trait::async_trait;
use thiserror::Error;

use crate::models::{Candidate, CandidateProfile, Education, Resume, WorkExperience};

pub use postgres::PgCandidateStore;

/// PostgreSQL SQLSTATE for `unique_violation`.
pub const UNIQUE_VIOLATION: &str = "23505";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Unique constraint violation ({code}) on {constraint}")]
    Conflict { code: String, constraint: String },

    #[error("Record not found")]
    NotFound,

    #[error("Database unavailable: {0}")]
    Unavailable(String),

    #[error("Database error: {0}")]
    Database(#[source] sqlx::Error),
}

impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::RowNotFound => StoreError::NotFound,
            sqlx::Error::Database(ref db) if db.code().as_deref() == Some(UNIQUE_VIOLATION) => {
                StoreError::Conflict {
                    code: UNIQUE_VIOLATION.to_string(),
                    constraint: db.constraint().unwrap_or("unknown").to_string(),
                }
            }
            sqlx::Error::Io(_)
            | sqlx::Error::Tls(_)
            | sqlx::Error::PoolTimedOut
            | sqlx::Error::PoolClosed => StoreError::Unavailable(err.to_string()),
            other => StoreError::Database(other),
        }
    }
}

/// Create/read/update/delete operations for a candidate and the records it owns.
///
/// Every call is an independent round trip; no method opens a transaction.
#[async_trait]
pub trait CandidateStore: Send + Sync {
    async fn insert_candidate(&self, candidate: &Candidate) -> Result<Candidate, StoreError>;

    async fn update_candidate(
        &self,
        id: i32,
        candidate: &Candidate,
    ) -> Result<Candidate, StoreError>;

    /// Removes the candidate and, by cascade, everything it owns.
    async fn delete_candidate(&self, id: i32) -> Result<(), StoreError>;

    async fn find_candidate(&self, id: i32) -> Result<Option<CandidateProfile>, StoreError>;

    async fn insert_education(&self, education: &Education) -> Result<Education, StoreError>;

    async fn update_education(
        &self,
        id: i32,
        education: &Education,
    ) -> Result<Education, StoreError>;

    async fn insert_work_experience(
        &self,
        experience: &WorkExperience,
    ) -> Result<WorkExperience, StoreError>;

    async fn update_work_experience(
        &self,
        id: i32,
        experience: &WorkExperience,
    ) -> Result<WorkExperience, StoreError>;

    async fn insert_resume(&self, resume: &Resume) -> Result<Resume, StoreError>;
}
