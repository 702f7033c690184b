use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum TakeoffError {
    #[error("PDF extraction failed: {0}")]
    Extraction(String),

    #[error("pdftotext not found. Install poppler: brew install poppler (macOS) or apt install poppler-utils (Linux)")]
    PdftotextNotFound,

    #[error("{tool} failed with exit code {code}: {stderr}")]
    PdftotextFailed {
        tool: &'static str,
        code: i32,
        stderr: String,
    },

    #[error("invalid page range: {0}")]
    InvalidPageRange(String),

    #[error("failed to load profile from {path}: {reason}")]
    ProfileLoad { path: PathBuf, reason: String },

    #[error("invalid profile: {0}")]
    ProfileInvalid(String),

    #[error("export failed: {0}")]
    Export(String),

    #[error("invalid match pattern: {0}")]
    Pattern(#[from] regex::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
