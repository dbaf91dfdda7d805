use tracing::{debug, info, warn};

use crate::candidates::errors::CandidateError;
use crate::candidates::submission::CandidateSubmission;
use crate::candidates::validation::validate_candidate_data;
use crate::models::{Candidate, CandidateProfile, RecordError};
use crate::store::{CandidateStore, StoreError};

/// Validates a submission and persists the candidate plus its nested records.
///
/// Steps:
/// 1. Validate; the first failing field is returned unchanged.
/// 2. Save the candidate. A uniqueness conflict becomes `DuplicateEmail`.
/// 3. Save each education, work experience and the CV, one round trip each,
///    tagged with the new candidate id.
/// 4. If any nested save fails, delete the candidate (cascading to whatever
///    nested rows were written) and return the nested error.
///
/// Returns the persisted candidate without its nested records.
pub async fn add_candidate(
    store: &dyn CandidateStore,
    submission: &CandidateSubmission,
) -> Result<Candidate, CandidateError> {
    validate_candidate_data(submission)?;

    let candidate = match submission.to_candidate().save(store).await {
        Ok(candidate) => candidate,
        Err(RecordError::Store(StoreError::Conflict { .. })) => {
            return Err(CandidateError::DuplicateEmail)
        }
        Err(err) => return Err(err.into()),
    };
    let candidate_id = candidate
        .id
        .ok_or(RecordError::MissingIdentity("Candidate"))?;

    if let Err(err) = save_nested(store, submission, candidate_id).await {
        compensate(store, candidate_id).await;
        return Err(err);
    }

    info!("Added candidate {candidate_id}");
    Ok(candidate)
}

/// Loads a candidate with every record it owns, or `None` when the id is unknown.
pub async fn get_candidate(
    store: &dyn CandidateStore,
    id: i32,
) -> Result<Option<CandidateProfile>, RecordError> {
    Ok(store.find_candidate(id).await?)
}

async fn save_nested(
    store: &dyn CandidateStore,
    submission: &CandidateSubmission,
    candidate_id: i32,
) -> Result<(), CandidateError> {
    for education in submission.educations.iter().flatten() {
        education.to_record(candidate_id)?.save(store).await?;
    }
    for experience in submission.work_experiences.iter().flatten() {
        experience.to_record(candidate_id)?.save(store).await?;
    }
    if let Some(resume) = submission.resume_for(candidate_id) {
        resume.save(store).await?;
    }
    debug!("Saved nested records for candidate {candidate_id}");
    Ok(())
}

async fn compensate(store: &dyn CandidateStore, candidate_id: i32) {
    match store.delete_candidate(candidate_id).await {
        Ok(()) => warn!("Rolled back candidate {candidate_id} after a nested save failed"),
        Err(err) => warn!("Failed to roll back candidate {candidate_id}: {err}"),
    }
}
