use std::path::{Path, PathBuf};

use bytes::Bytes;
use uuid::Uuid;

/// Writes `data` under `dir` as `<uuid>-<file name>` and returns the full path.
pub async fn store_upload(dir: &Path, file_name: &str, data: &Bytes) -> std::io::Result<PathBuf> {
    tokio::fs::create_dir_all(dir).await?;
    let path = dir.join(format!("{}-{}", Uuid::new_v4(), sanitize_file_name(file_name)));
    tokio::fs::write(&path, data).await?;
    Ok(path)
}

/// Keeps the last path component and replaces anything outside `[A-Za-z0-9._-]`.
pub fn sanitize_file_name(name: &str) -> String {
    let base = Path::new(name)
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("");
    let cleaned: String = base
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_') {
                c
            } else {
                '_'
            }
        })
        .collect();
    if cleaned.trim_matches('.').is_empty() {
        "upload".to_string()
    } else {
        cleaned
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_strips_directories() {
        assert_eq!(sanitize_file_name("../../etc/passwd"), "passwd");
        assert_eq!(sanitize_file_name("mi cv (final).pdf"), "mi_cv__final_.pdf");
        assert_eq!(sanitize_file_name(".."), "upload");
        assert_eq!(sanitize_file_name(""), "upload");
    }

    #[tokio::test]
    async fn test_store_upload_writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("uploads");
        let data = Bytes::from_static(b"%PDF-1.4");

        let path = store_upload(&nested, "cv.pdf", &data).await.unwrap();

        assert!(path.starts_with(&nested));
        assert!(path.to_string_lossy().ends_with("-cv.pdf"));
        assert_eq!(tokio::fs::read(&path).await.unwrap(), b"%PDF-1.4");
    }
}
