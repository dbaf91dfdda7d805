use async_trait::async_trait;
use sqlx::PgPool;
use tracing::debug;

use super::{CandidateStore, StoreError};
use crate::models::{Candidate, CandidateProfile, Education, Resume, WorkExperience};

const CANDIDATE_COLUMNS: &str = "id, first_name, last_name, email, phone, address";
const EDUCATION_COLUMNS: &str = "id, institution, title, start_date, end_date, candidate_id";
const EXPERIENCE_COLUMNS: &str =
    "id, company, position, description, start_date, end_date, candidate_id";
const RESUME_COLUMNS: &str = "id, file_path, file_type, upload_date, candidate_id";

/// `CandidateStore` backed by the `candidates`, `educations`,
/// `work_experiences` and `resumes` tables.
#[derive(Clone)]
pub struct PgCandidateStore {
    pool: PgPool,
}

impl PgCandidateStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CandidateStore for PgCandidateStore {
    async fn insert_candidate(&self, candidate: &Candidate) -> Result<Candidate, StoreError> {
        let row = sqlx::query_as::<_, Candidate>(&format!(
            r#"
            INSERT INTO candidates (first_name, last_name, email, phone, address)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING {CANDIDATE_COLUMNS}
            "#
        ))
        .bind(&candidate.first_name)
        .bind(&candidate.last_name)
        .bind(&candidate.email)
        .bind(&candidate.phone)
        .bind(&candidate.address)
        .fetch_one(&self.pool)
        .await?;

        debug!("Inserted candidate {:?}", row.id);
        Ok(row)
    }

    async fn update_candidate(
        &self,
        id: i32,
        candidate: &Candidate,
    ) -> Result<Candidate, StoreError> {
        Ok(sqlx::query_as::<_, Candidate>(&format!(
            r#"
            UPDATE candidates
            SET first_name = $1, last_name = $2, email = $3, phone = $4, address = $5
            WHERE id = $6
            RETURNING {CANDIDATE_COLUMNS}
            "#
        ))
        .bind(&candidate.first_name)
        .bind(&candidate.last_name)
        .bind(&candidate.email)
        .bind(&candidate.phone)
        .bind(&candidate.address)
        .bind(id)
        .fetch_one(&self.pool)
        .await?)
    }

    async fn delete_candidate(&self, id: i32) -> Result<(), StoreError> {
        let result = sqlx::query("DELETE FROM candidates WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound);
        }
        Ok(())
    }

    async fn find_candidate(&self, id: i32) -> Result<Option<CandidateProfile>, StoreError> {
        let Some(candidate) = sqlx::query_as::<_, Candidate>(&format!(
            "SELECT {CANDIDATE_COLUMNS} FROM candidates WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        else {
            return Ok(None);
        };

        let educations = sqlx::query_as::<_, Education>(&format!(
            "SELECT {EDUCATION_COLUMNS} FROM educations WHERE candidate_id = $1 ORDER BY id"
        ))
        .bind(id)
        .fetch_all(&self.pool)
        .await?;

        let work_experiences = sqlx::query_as::<_, WorkExperience>(&format!(
            "SELECT {EXPERIENCE_COLUMNS} FROM work_experiences WHERE candidate_id = $1 ORDER BY id"
        ))
        .bind(id)
        .fetch_all(&self.pool)
        .await?;

        let resumes = sqlx::query_as::<_, Resume>(&format!(
            "SELECT {RESUME_COLUMNS} FROM resumes WHERE candidate_id = $1 ORDER BY id"
        ))
        .bind(id)
        .fetch_all(&self.pool)
        .await?;

        Ok(Some(CandidateProfile {
            candidate,
            educations,
            work_experiences,
            resumes,
        }))
    }

    async fn insert_education(&self, education: &Education) -> Result<Education, StoreError> {
        Ok(sqlx::query_as::<_, Education>(&format!(
            r#"
            INSERT INTO educations (institution, title, start_date, end_date, candidate_id)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING {EDUCATION_COLUMNS}
            "#
        ))
        .bind(&education.institution)
        .bind(&education.title)
        .bind(education.start_date)
        .bind(education.end_date)
        .bind(education.candidate_id)
        .fetch_one(&self.pool)
        .await?)
    }

    async fn update_education(
        &self,
        id: i32,
        education: &Education,
    ) -> Result<Education, StoreError> {
        Ok(sqlx::query_as::<_, Education>(&format!(
            r#"
            UPDATE educations
            SET institution = $1, title = $2, start_date = $3, end_date = $4, candidate_id = $5
            WHERE id = $6
            RETURNING {EDUCATION_COLUMNS}
            "#
        ))
        .bind(&education.institution)
        .bind(&education.title)
        .bind(education.start_date)
        .bind(education.end_date)
        .bind(education.candidate_id)
        .bind(id)
        .fetch_one(&self.pool)
        .await?)
    }

    async fn insert_work_experience(
        &self,
        experience: &WorkExperience,
    ) -> Result<WorkExperience, StoreError> {
        Ok(sqlx::query_as::<_, WorkExperience>(&format!(
            r#"
            INSERT INTO work_experiences
                (company, position, description, start_date, end_date, candidate_id)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING {EXPERIENCE_COLUMNS}
            "#
        ))
        .bind(&experience.company)
        .bind(&experience.position)
        .bind(&experience.description)
        .bind(experience.start_date)
        .bind(experience.end_date)
        .bind(experience.candidate_id)
        .fetch_one(&self.pool)
        .await?)
    }

    async fn update_work_experience(
        &self,
        id: i32,
        experience: &WorkExperience,
    ) -> Result<WorkExperience, StoreError> {
        Ok(sqlx::query_as::<_, WorkExperience>(&format!(
            r#"
            UPDATE work_experiences
            SET company = $1, position = $2, description = $3,
                start_date = $4, end_date = $5, candidate_id = $6
            WHERE id = $7
            RETURNING {EXPERIENCE_COLUMNS}
            "#
        ))
        .bind(&experience.company)
        .bind(&experience.position)
        .bind(&experience.description)
        .bind(experience.start_date)
        .bind(experience.end_date)
        .bind(experience.candidate_id)
        .bind(id)
        .fetch_one(&self.pool)
        .await?)
    }

    async fn insert_resume(&self, resume: &Resume) -> Result<Resume, StoreError> {
        Ok(sqlx::query_as::<_, Resume>(&format!(
            r#"
            INSERT INTO resumes (file_path, file_type, upload_date, candidate_id)
            VALUES ($1, $2, $3, $4)
            RETURNING {RESUME_COLUMNS}
            "#
        ))
        .bind(&resume.file_path)
        .bind(&resume.file_type)
        .bind(resume.upload_date)
        .bind(resume.candidate_id)
        .fetch_one(&self.pool)
        .await?)
    }
}
