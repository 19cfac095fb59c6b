use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum Plan2BoardError {
    #[error("PDF extraction failed: {0}")]
    Extraction(String),

    #[error("pdftotext not found. Install poppler: brew install poppler (macOS) or apt install poppler-utils (Linux)")]
    PdftotextNotFound,

    #[error("pdftotext failed with exit code {code}: {stderr}")]
    PdftotextFailed { code: i32, stderr: String },

    #[error("invalid room pattern '{pattern}': {reason}")]
    Pattern { pattern: String, reason: String },

    #[error("failed to load standards from {path}: {reason}")]
    StandardsLoad { path: PathBuf, reason: String },

    #[error("invalid standards table: {0}")]
    StandardsInvalid(String),

    #[error("CSV export failed: {0}")]
    CsvExport(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}
