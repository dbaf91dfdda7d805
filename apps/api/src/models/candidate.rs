use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::{Education, RecordError, Resume, WorkExperience};
use crate::store::{CandidateStore, StoreError};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i32>,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub address: Option<String>,
}

impl Candidate {
    /// Inserts a new candidate, or updates it in place when it already has an id.
    ///
    /// A uniqueness violation on insert is returned as
    /// `RecordError::Store(StoreError::Conflict { .. })` for the caller to translate.
    pub async fn save(&self, store: &dyn CandidateStore) -> Result<Candidate, RecordError> {
        match self.id {
            Some(id) => store.update_candidate(id, self).await.map_err(|err| match err {
                StoreError::NotFound => RecordError::CandidateNotFound,
                StoreError::Unavailable(_) => RecordError::Unavailable,
                other => RecordError::Store(other),
            }),
            None => Ok(store.insert_candidate(self).await?),
        }
    }
}

/// A persisted candidate together with every record it owns.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CandidateProfile {
    #[serde(flatten)]
    pub candidate: Candidate,
    pub educations: Vec<Education>,
    pub work_experiences: Vec<WorkExperience>,
    pub resumes: Vec<Resume>,
}
