// src/advise/error.rs
//! Error taxonomy for the upload-and-analyze flow.
//!
//! Validation errors are detected locally and carry a specific message.
//! Service errors keep their detail for the log; the user sees one generic
//! retry-suggesting message regardless of the cause.

use thiserror::Error;

/// Generic message shown for any transport or server failure.
pub const SERVICE_FAILURE_MESSAGE: &str = "Failed to analyze resume. Please try again later.";

#[derive(Debug, Error)]
pub enum AdviseError {
    #[error("no resume file selected")]
    NoFileSelected,

    #[error("only PDF files are accepted (received: {received})")]
    NotPdf { received: String },

    #[error("resume is {size} bytes, over the {limit} byte limit")]
    FileTooLarge { size: usize, limit: usize },

    #[error("failed to reach the advice service")]
    Transport(#[source] reqwest::Error),

    #[error("advice service returned status {status}")]
    ServiceStatus { status: u16, body: String },

    #[error("advice service returned a malformed payload")]
    MalformedPayload(#[source] serde_json::Error),
}

impl AdviseError {
    /// Local validation failures never touch the network.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            AdviseError::NoFileSelected
                | AdviseError::NotPdf { .. }
                | AdviseError::FileTooLarge { .. }
        )
    }

    /// Message suitable for end users. Validation failures name the specific
    /// problem; every service failure maps to the same generic message.
    pub fn user_message(&self) -> String {
        match self {
            AdviseError::NoFileSelected => "Please select a resume file".to_string(),
            AdviseError::NotPdf { .. } => "Only PDF files are accepted".to_string(),
            AdviseError::FileTooLarge { .. } => {
                "Resume file is too large (max 5MB)".to_string()
            }
            AdviseError::Transport(_)
            | AdviseError::ServiceStatus { .. }
            | AdviseError::MalformedPayload(_) => SERVICE_FAILURE_MESSAGE.to_string(),
        }
    }
}
