// CV uploads: multipart intake, type/size checks and on-disk storage.
// The returned descriptor is what the form later sends as `cv`.

pub mod handlers;
pub mod storage;

use serde::{Deserialize, Serialize};

pub const PDF_MIME: &str = "application/pdf";
pub const DOCX_MIME: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";

pub const ALLOWED_MIME_TYPES: [&str; 2] = [PDF_MIME, DOCX_MIME];

/// Multipart field carrying the file.
pub const FILE_FIELD: &str = "file";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadedFile {
    pub file_path: String,
    pub file_type: String,
}
