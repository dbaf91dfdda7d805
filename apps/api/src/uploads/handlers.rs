use axum::{
    extract::{multipart::MultipartError, Multipart, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use tracing::{error, info};

use crate::state::AppState;
use crate::uploads::storage::store_upload;
use crate::uploads::{UploadedFile, ALLOWED_MIME_TYPES, FILE_FIELD};

#[derive(Debug, Error)]
pub enum UploadError {
    #[error("Invalid file type, only PDF and DOCX are allowed!")]
    InvalidFileType,

    #[error("No file uploaded")]
    MissingFile,

    #[error("File too large. Maximum size is {max_bytes} bytes")]
    TooLarge { max_bytes: usize },

    #[error("Malformed upload: {0}")]
    Multipart(#[from] MultipartError),

    #[error("Failed to store file: {0}")]
    Storage(#[from] std::io::Error),
}

impl IntoResponse for UploadError {
    fn into_response(self) -> Response {
        let status = match &self {
            UploadError::Storage(e) => {
                error!("Upload storage error: {e}");
                StatusCode::INTERNAL_SERVER_ERROR
            }
            _ => StatusCode::BAD_REQUEST,
        };

        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}

/// POST /upload
///
/// Accepts a single PDF or DOCX in the `file` field and returns where it was stored.
pub async fn handle_upload(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<UploadedFile>, UploadError> {
    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some(FILE_FIELD) {
            field.bytes().await?;
            continue;
        }

        let file_name = field.file_name().unwrap_or("upload").to_string();
        let content_type = field.content_type().unwrap_or_default().to_string();
        if !ALLOWED_MIME_TYPES.contains(&content_type.as_str()) {
            return Err(UploadError::InvalidFileType);
        }

        let data = field.bytes().await?;
        let max_bytes = state.config.max_upload_bytes;
        if data.len() > max_bytes {
            return Err(UploadError::TooLarge { max_bytes });
        }

        let path = store_upload(&state.config.upload_dir, &file_name, &data).await?;
        info!("Stored upload {} ({} bytes)", path.display(), data.len());

        return Ok(Json(UploadedFile {
            file_path: path.to_string_lossy().into_owned(),
            file_type: content_type,
        }));
    }

    Err(UploadError::MissingFile)
}
