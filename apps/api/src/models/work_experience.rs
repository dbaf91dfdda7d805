use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::RecordError;
use crate::store::CandidateStore;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct WorkExperience {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i32>,
    pub company: String,
    pub position: String,
    pub description: Option<String>,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    pub candidate_id: Option<i32>,
}

impl WorkExperience {
    pub async fn save(&self, store: &dyn CandidateStore) -> Result<WorkExperience, RecordError> {
        if self.candidate_id.is_none() {
            return Err(RecordError::MissingIdentity("WorkExperience"));
        }
        match self.id {
            Some(id) => Ok(store.update_work_experience(id, self).await?),
            None => Ok(store.insert_work_experience(self).await?),
        }
    }
}
