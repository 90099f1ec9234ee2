// src/advise/types.rs
use serde::{Deserialize, Serialize};

/// Media type a résumé must declare before submission is permitted.
pub const PDF_MEDIA_TYPE: &str = "application/pdf";

/// Advertised upload limit, enforced before any network call.
pub const MAX_RESUME_BYTES: usize = 5 * 1024 * 1024;

/// A user-selected résumé file, held only for the duration of one
/// upload-and-analyze interaction.
#[derive(Debug, Clone)]
pub struct SelectedFile {
    pub name: String,
    pub content_type: String,
    pub data: Vec<u8>,
}

impl SelectedFile {
    pub fn new(name: impl Into<String>, content_type: impl Into<String>, data: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            content_type: content_type.into(),
            data,
        }
    }

    pub fn is_pdf(&self) -> bool {
        self.content_type == PDF_MEDIA_TYPE
    }

    pub fn size(&self) -> usize {
        self.data.len()
    }
}

/// Analysis returned by the advice service, stored verbatim.
///
/// Field names match the wire contract of `POST /advise`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub skills_gap: Vec<String>,
    pub bullet_suggestions: Vec<String>,
    pub career_path: Option<String>,
}
