//! Axum route handlers for the Candidates API.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use serde_json::json;
use tracing::{debug, error, warn};

use crate::candidates::errors::CandidateError;
use crate::candidates::service::{add_candidate, get_candidate};
use crate::candidates::submission::CandidateSubmission;
use crate::errors::AppError;
use crate::models::{Candidate, CandidateProfile, RecordError};
use crate::state::AppState;

pub const ADD_SUCCESS_MESSAGE: &str = "Candidate added successfully";
pub const ADD_FAILURE_MESSAGE: &str = "Error adding candidate";
pub const UNKNOWN_ERROR: &str = "Unknown error";

#[derive(Debug, Serialize)]
pub struct AddCandidateResponse {
    pub message: &'static str,
    pub data: Candidate,
}

/// Why `POST /candidates` failed. Both variants answer 400; only a
/// `Candidate` failure exposes its message.
#[derive(Debug)]
pub enum AddCandidateFailure {
    Candidate(CandidateError),
    Unknown,
}

impl IntoResponse for AddCandidateFailure {
    fn into_response(self) -> Response {
        let detail = match &self {
            AddCandidateFailure::Candidate(err) => {
                if let CandidateError::Record(RecordError::Store(store_err)) = err {
                    error!("Candidate persistence failed: {store_err}");
                } else {
                    warn!("Candidate rejected: {err}");
                }
                err.to_string()
            }
            AddCandidateFailure::Unknown => UNKNOWN_ERROR.to_string(),
        };

        let body = Json(json!({
            "message": ADD_FAILURE_MESSAGE,
            "error": detail
        }));

        (StatusCode::BAD_REQUEST, body).into_response()
    }
}

/// POST /candidates
pub async fn handle_add_candidate(
    State(state): State<AppState>,
    payload: Result<Json<CandidateSubmission>, JsonRejection>,
) -> Result<(StatusCode, Json<AddCandidateResponse>), AddCandidateFailure> {
    let Json(submission) = payload.map_err(|rejection| {
        debug!("Unreadable candidate payload: {rejection}");
        AddCandidateFailure::Unknown
    })?;

    let candidate = add_candidate(state.store.as_ref(), &submission)
        .await
        .map_err(AddCandidateFailure::Candidate)?;

    Ok((
        StatusCode::CREATED,
        Json(AddCandidateResponse {
            message: ADD_SUCCESS_MESSAGE,
            data: candidate,
        }),
    ))
}

/// GET /candidates/:id
///
/// Returns the candidate with its educations, work experiences and resumes.
pub async fn handle_get_candidate(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<CandidateProfile>, AppError> {
    let profile = get_candidate(state.store.as_ref(), id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Candidate {id} not found")))?;
    Ok(Json(profile))
}
