//! Wire shape of `POST /candidates` and its conversion into domain records.
//!
//! Every field is optional at the serde level so that a missing field reaches
//! the validator (and its message) instead of failing deserialization.

use serde::Deserialize;

use crate::candidates::validation::{parse_date, ValidationError};
use crate::models::{Candidate, Education, Resume, WorkExperience};

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CandidateSubmission {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub educations: Option<Vec<EducationInput>>,
    pub work_experiences: Option<Vec<WorkExperienceInput>>,
    pub cv: Option<CvInput>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EducationInput {
    pub institution: Option<String>,
    pub title: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WorkExperienceInput {
    pub company: Option<String>,
    pub position: Option<String>,
    pub description: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

/// Descriptor returned by `POST /upload`, echoed back by the form.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CvInput {
    pub file_path: Option<String>,
    pub file_type: Option<String>,
}

impl CvInput {
    /// The form sends `cv: {}` when no file was attached.
    pub fn is_empty(&self) -> bool {
        self.file_path.is_none() && self.file_type.is_none()
    }
}

impl CandidateSubmission {
    /// Builds the unsaved candidate from the scalar fields.
    pub fn to_candidate(&self) -> Candidate {
        Candidate {
            id: None,
            first_name: self.first_name.clone().unwrap_or_default(),
            last_name: self.last_name.clone().unwrap_or_default(),
            email: self.email.clone().unwrap_or_default(),
            phone: non_empty(&self.phone),
            address: non_empty(&self.address),
        }
    }

    pub fn resume_for(&self, candidate_id: i32) -> Option<Resume> {
        let cv = self.cv.as_ref().filter(|cv| !cv.is_empty())?;
        Some(
            Resume::new(
                cv.file_path.clone().unwrap_or_default(),
                cv.file_type.clone().unwrap_or_default(),
            )
            .for_candidate(candidate_id),
        )
    }
}

impl EducationInput {
    pub fn to_record(&self, candidate_id: i32) -> Result<Education, ValidationError> {
        Ok(Education {
            id: None,
            institution: self.institution.clone().unwrap_or_default(),
            title: self.title.clone().unwrap_or_default(),
            start_date: parse_date(self.start_date.as_deref().unwrap_or_default())?,
            end_date: optional_date(&self.end_date)?,
            candidate_id: Some(candidate_id),
        })
    }
}

impl WorkExperienceInput {
    pub fn to_record(&self, candidate_id: i32) -> Result<WorkExperience, ValidationError> {
        Ok(WorkExperience {
            id: None,
            company: self.company.clone().unwrap_or_default(),
            position: self.position.clone().unwrap_or_default(),
            description: non_empty(&self.description),
            start_date: parse_date(self.start_date.as_deref().unwrap_or_default())?,
            end_date: optional_date(&self.end_date)?,
            candidate_id: Some(candidate_id),
        })
    }
}

fn non_empty(value: &Option<String>) -> Option<String> {
    value.clone().filter(|v| !v.is_empty())
}

fn optional_date(value: &Option<String>) -> Result<Option<chrono::NaiveDate>, ValidationError> {
    match value.as_deref() {
        Some(date) if !date.is_empty() => parse_date(date).map(Some),
        _ => Ok(None),
    }
}
