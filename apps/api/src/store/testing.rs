//! In-memory `CandidateStore` that records every call, for unit and handler tests.

use std::collections::HashMap;
use std::sync::atomic::{AtomicI32, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use super::{CandidateStore, StoreError, UNIQUE_VIOLATION};
use crate::models::{Candidate, CandidateProfile, Education, Resume, WorkExperience};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Op {
    InsertCandidate,
    UpdateCandidate,
    DeleteCandidate,
    FindCandidate,
    InsertEducation,
    UpdateEducation,
    InsertWorkExperience,
    UpdateWorkExperience,
    InsertResume,
}

#[derive(Default)]
struct Tables {
    candidates: Vec<Candidate>,
    educations: Vec<Education>,
    work_experiences: Vec<WorkExperience>,
    resumes: Vec<Resume>,
}

#[derive(Default)]
pub struct MockStore {
    next_id: AtomicI32,
    calls: Mutex<Vec<Op>>,
    failures: HashMap<Op, fn() -> StoreError>,
    tables: Mutex<Tables>,
}

impl MockStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes every call to `op` fail with the error built by `make_error`.
    pub fn failing(mut self, op: Op, make_error: fn() -> StoreError) -> Self {
        self.failures.insert(op, make_error);
        self
    }

    pub fn email_conflict() -> StoreError {
        StoreError::Conflict {
            code: UNIQUE_VIOLATION.to_string(),
            constraint: "candidates_email_key".to_string(),
        }
    }

    pub fn calls(&self) -> Vec<Op> {
        self.calls.lock().unwrap().clone()
    }

    pub fn count(&self, op: Op) -> usize {
        self.calls.lock().unwrap().iter().filter(|c| **c == op).count()
    }

    pub fn candidate_count(&self) -> usize {
        self.tables.lock().unwrap().candidates.len()
    }

    fn record(&self, op: Op) -> Result<(), StoreError> {
        self.calls.lock().unwrap().push(op);
        match self.failures.get(&op) {
            Some(make_error) => Err(make_error()),
            None => Ok(()),
        }
    }

    fn next_id(&self) -> i32 {
        self.next_id.fetch_add(1, Ordering::SeqCst) + 1
    }
}

#[async_trait]
impl CandidateStore for MockStore {
    async fn insert_candidate(&self, candidate: &Candidate) -> Result<Candidate, StoreError> {
        self.record(Op::InsertCandidate)?;
        let mut tables = self.tables.lock().unwrap();
        if tables.candidates.iter().any(|c| c.email == candidate.email) {
            return Err(Self::email_conflict());
        }
        let saved = Candidate {
            id: Some(self.next_id()),
            ..candidate.clone()
        };
        tables.candidates.push(saved.clone());
        Ok(saved)
    }

    async fn update_candidate(
        &self,
        id: i32,
        candidate: &Candidate,
    ) -> Result<Candidate, StoreError> {
        self.record(Op::UpdateCandidate)?;
        let mut tables = self.tables.lock().unwrap();
        let existing = tables
            .candidates
            .iter_mut()
            .find(|c| c.id == Some(id))
            .ok_or(StoreError::NotFound)?;
        *existing = Candidate {
            id: Some(id),
            ..candidate.clone()
        };
        Ok(existing.clone())
    }

    async fn delete_candidate(&self, id: i32) -> Result<(), StoreError> {
        self.record(Op::DeleteCandidate)?;
        let mut tables = self.tables.lock().unwrap();
        let before = tables.candidates.len();
        tables.candidates.retain(|c| c.id != Some(id));
        if tables.candidates.len() == before {
            return Err(StoreError::NotFound);
        }
        tables.educations.retain(|e| e.candidate_id != Some(id));
        tables.work_experiences.retain(|w| w.candidate_id != Some(id));
        tables.resumes.retain(|r| r.candidate_id != Some(id));
        Ok(())
    }

    async fn find_candidate(&self, id: i32) -> Result<Option<CandidateProfile>, StoreError> {
        self.record(Op::FindCandidate)?;
        let tables = self.tables.lock().unwrap();
        let Some(candidate) = tables.candidates.iter().find(|c| c.id == Some(id)) else {
            return Ok(None);
        };
        Ok(Some(CandidateProfile {
            candidate: candidate.clone(),
            educations: tables
                .educations
                .iter()
                .filter(|e| e.candidate_id == Some(id))
                .cloned()
                .collect(),
            work_experiences: tables
                .work_experiences
                .iter()
                .filter(|w| w.candidate_id == Some(id))
                .cloned()
                .collect(),
            resumes: tables
                .resumes
                .iter()
                .filter(|r| r.candidate_id == Some(id))
                .cloned()
                .collect(),
        }))
    }

    async fn insert_education(&self, education: &Education) -> Result<Education, StoreError> {
        self.record(Op::InsertEducation)?;
        let saved = Education {
            id: Some(self.next_id()),
            ..education.clone()
        };
        self.tables.lock().unwrap().educations.push(saved.clone());
        Ok(saved)
    }

    async fn update_education(
        &self,
        id: i32,
        education: &Education,
    ) -> Result<Education, StoreError> {
        self.record(Op::UpdateEducation)?;
        let mut tables = self.tables.lock().unwrap();
        let existing = tables
            .educations
            .iter_mut()
            .find(|e| e.id == Some(id))
            .ok_or(StoreError::NotFound)?;
        *existing = Education {
            id: Some(id),
            ..education.clone()
        };
        Ok(existing.clone())
    }

    async fn insert_work_experience(
        &self,
        experience: &WorkExperience,
    ) -> Result<WorkExperience, StoreError> {
        self.record(Op::InsertWorkExperience)?;
        let saved = WorkExperience {
            id: Some(self.next_id()),
            ..experience.clone()
        };
        self.tables
            .lock()
            .unwrap()
            .work_experiences
            .push(saved.clone());
        Ok(saved)
    }

    async fn update_work_experience(
        &self,
        id: i32,
        experience: &WorkExperience,
    ) -> Result<WorkExperience, StoreError> {
        self.record(Op::UpdateWorkExperience)?;
        let mut tables = self.tables.lock().unwrap();
        let existing = tables
            .work_experiences
            .iter_mut()
            .find(|w| w.id == Some(id))
            .ok_or(StoreError::NotFound)?;
        *existing = WorkExperience {
            id: Some(id),
            ..experience.clone()
        };
        Ok(existing.clone())
    }

    async fn insert_resume(&self, resume: &Resume) -> Result<Resume, StoreError> {
        self.record(Op::InsertResume)?;
        let saved = Resume {
            id: Some(self.next_id()),
            ..resume.clone()
        };
        self.tables.lock().unwrap().resumes.push(saved.clone());
        Ok(saved)
    }
}
