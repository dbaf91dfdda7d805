//! HTTP client for the candidates API: CV upload and candidate submission.
//!
//! Every failure, including a request that never got a response, is returned
//! as a [`ClientError`] whose message starts with a fixed Spanish prefix
//! followed by the server's error detail.

use reqwest::{multipart, Client, Response};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;
use tracing::debug;

pub const DEFAULT_BASE_URL: &str = "http://localhost:3010";
const UPLOAD_PATH: &str = "/upload";
const CANDIDATES_PATH: &str = "/candidates";
const FILE_FIELD: &str = "file";

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("Error al subir el archivo: {0}")]
    Upload(String),

    #[error("Error al enviar datos del candidato: {0}")]
    Submit(String),

    #[error("Failed to build HTTP client: {0}")]
    Build(#[source] reqwest::Error),
}

/// Descriptor of a stored CV, as returned by `POST /upload`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadedFile {
    pub file_path: String,
    pub file_type: String,
}

#[derive(Clone)]
pub struct CandidateClient {
    client: Client,
    base_url: String,
}

impl CandidateClient {
    pub fn new(base_url: impl Into<String>) -> Result<Self, ClientError> {
        Ok(Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(30))
                .build()
                .map_err(ClientError::Build)?,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    /// Client for a backend running on `DEFAULT_BASE_URL`.
    pub fn local() -> Result<Self, ClientError> {
        Self::new(DEFAULT_BASE_URL)
    }

    /// Uploads a CV as multipart field `file`.
    pub async fn upload_cv(
        &self,
        file_name: &str,
        data: Vec<u8>,
        mime: &str,
    ) -> Result<UploadedFile, ClientError> {
        let part = multipart::Part::bytes(data)
            .file_name(file_name.to_string())
            .mime_str(mime)
            .map_err(|e| ClientError::Upload(e.to_string()))?;
        let form = multipart::Form::new().part(FILE_FIELD, part);

        debug!("Uploading {file_name} ({mime})");
        let response = self
            .client
            .post(self.url(UPLOAD_PATH))
            .multipart(form)
            .send()
            .await
            .map_err(|e| ClientError::Upload(e.to_string()))?;

        let response = ensure_success(response).await.map_err(ClientError::Upload)?;
        response
            .json::<UploadedFile>()
            .await
            .map_err(|e| ClientError::Upload(e.to_string()))
    }

    /// Posts a candidate submission as JSON and returns the response body.
    pub async fn send_candidate<T: Serialize + ?Sized>(
        &self,
        candidate: &T,
    ) -> Result<Value, ClientError> {
        debug!("Submitting candidate");
        let response = self
            .client
            .post(self.url(CANDIDATES_PATH))
            .json(candidate)
            .send()
            .await
            .map_err(|e| ClientError::Submit(e.to_string()))?;

        let response = ensure_success(response).await.map_err(ClientError::Submit)?;
        response
            .json::<Value>()
            .await
            .map_err(|e| ClientError::Submit(e.to_string()))
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

/// Passes 2xx responses through; otherwise returns the server's error detail.
async fn ensure_success(response: Response) -> Result<Response, String> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    debug!("Server answered {status}: {body}");
    Err(error_detail(status.as_u16(), &body))
}

/// Picks the most specific message from an error body: `error`, then
/// `message`, then the raw body, then the status code.
fn error_detail(status: u16, body: &str) -> String {
    if let Ok(json) = serde_json::from_str::<Value>(body) {
        for key in ["error", "message"] {
            if let Some(detail) = json.get(key).and_then(Value::as_str) {
                return detail.to_string();
            }
        }
    }
    let body = body.trim();
    if body.is_empty() {
        format!("HTTP {status}")
    } else {
        body.to_string()
    }
}
