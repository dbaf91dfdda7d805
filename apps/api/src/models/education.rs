use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::RecordError;
use crate::store::CandidateStore;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Education {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i32>,
    pub institution: String,
    pub title: String,
    pub start_date: NaiveDate,
    /// `None` while the studies are ongoing.
    pub end_date: Option<NaiveDate>,
    pub candidate_id: Option<i32>,
}

impl Education {
    pub async fn save(&self, store: &dyn CandidateStore) -> Result<Education, RecordError> {
        if self.candidate_id.is_none() {
            return Err(RecordError::MissingIdentity("Education"));
        }
        match self.id {
            Some(id) => Ok(store.update_education(id, self).await?),
            None => Ok(store.insert_education(self).await?),
        }
    }
}
