use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::RecordError;
use crate::store::CandidateStore;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Resume {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i32>,
    pub file_path: String,
    pub file_type: String,
    pub upload_date: DateTime<Utc>,
    pub candidate_id: Option<i32>,
}

impl Resume {
    /// Builds an unsaved resume. `upload_date` is fixed here, not at insert time.
    pub fn new(file_path: impl Into<String>, file_type: impl Into<String>) -> Self {
        Resume {
            id: None,
            file_path: file_path.into(),
            file_type: file_type.into(),
            upload_date: Utc::now(),
            candidate_id: None,
        }
    }

    pub fn for_candidate(mut self, candidate_id: i32) -> Self {
        self.candidate_id = Some(candidate_id);
        self
    }

    /// Inserts the resume. Resumes are immutable once stored.
    pub async fn save(&self, store: &dyn CandidateStore) -> Result<Resume, RecordError> {
        if self.id.is_some() {
            return Err(RecordError::ResumeUpdateForbidden);
        }
        if self.candidate_id.is_none() {
            return Err(RecordError::MissingIdentity("Resume"));
        }
        Ok(store.insert_resume(self).await?)
    }
}
