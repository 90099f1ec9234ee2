// src/advise/flow.rs
//! Upload-and-analyze state machine, independent of any rendering layer.
//!
//! The flow owns the selected file and the last outcome. Submission validates
//! locally first (no network on failure), then performs exactly one backend
//! call and lands in exactly one of `Success` or `Error`. Re-submission while
//! a call is in flight is impossible here: `submit` holds `&mut self`.

use tracing::{error, warn};

use super::client::AdviseBackend;
use super::error::AdviseError;
use super::types::{AnalysisResult, SelectedFile, MAX_RESUME_BYTES};

#[derive(Debug, Default)]
pub enum FlowState {
    #[default]
    Idle,
    Uploading,
    Success(AnalysisResult),
    Error(String),
}

impl FlowState {
    pub fn is_idle(&self) -> bool {
        matches!(self, FlowState::Idle)
    }
}

#[derive(Debug, Default)]
pub struct UploadFlow {
    state: FlowState,
    selected: Option<SelectedFile>,
}

impl UploadFlow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &FlowState {
        &self.state
    }

    pub fn selected_file(&self) -> Option<&SelectedFile> {
        self.selected.as_ref()
    }

    /// The held analysis, if the last submission succeeded.
    pub fn result(&self) -> Option<&AnalysisResult> {
        match &self.state {
            FlowState::Success(result) => Some(result),
            _ => None,
        }
    }

    /// The held user-facing message, if the last attempt failed.
    pub fn error_message(&self) -> Option<&str> {
        match &self.state {
            FlowState::Error(message) => Some(message),
            _ => None,
        }
    }

    /// Submission is permitted once a file is selected.
    pub fn can_submit(&self) -> bool {
        self.selected.is_some() && !matches!(self.state, FlowState::Uploading)
    }

    /// Record a candidate file. Always succeeds; clears any prior result or
    /// error so the view returns to a clean idle form.
    pub fn select_file(&mut self, file: SelectedFile) {
        self.selected = Some(file);
        self.state = FlowState::Idle;
    }

    /// Return to the initial state: no file, no result, no error.
    pub fn reset(&mut self) {
        self.selected = None;
        self.state = FlowState::Idle;
    }

    /// Check the current selection without touching the network.
    fn validate_selection(&self) -> Result<SelectedFile, AdviseError> {
        let file = self.selected.as_ref().ok_or(AdviseError::NoFileSelected)?;
        if !file.is_pdf() {
            return Err(AdviseError::NotPdf {
                received: file.content_type.clone(),
            });
        }
        if file.size() > MAX_RESUME_BYTES {
            return Err(AdviseError::FileTooLarge {
                size: file.size(),
                limit: MAX_RESUME_BYTES,
            });
        }
        Ok(file.clone())
    }

    /// Submit the current selection for analysis.
    ///
    /// Validation failures are reported before any network call is made. A
    /// failed submission leaves the flow in `Error` holding the user-facing
    /// message; the specific cause only reaches the log.
    pub async fn submit<B>(&mut self, backend: &B) -> Result<(), AdviseError>
    where
        B: AdviseBackend + ?Sized,
    {
        let file = match self.validate_selection() {
            Ok(file) => file,
            Err(err) => {
                warn!(error = %err, "Rejected resume submission before upload");
                self.state = FlowState::Error(err.user_message());
                return Err(err);
            }
        };

        self.state = FlowState::Uploading;

        match backend.analyze(&file).await {
            Ok(result) => {
                self.state = FlowState::Success(result);
                Ok(())
            }
            Err(err) => {
                error!(error = ?err, "Resume analysis failed");
                self.state = FlowState::Error(err.user_message());
                Err(err)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::advise::error::SERVICE_FAILURE_MESSAGE;
    use crate::advise::types::PDF_MEDIA_TYPE;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct StubBackend {
        calls: AtomicUsize,
        outcome: Result<AnalysisResult, u16>,
    }

    impl StubBackend {
        fn succeeding(result: AnalysisResult) -> Self {
            Self {
                calls: AtomicUsize::new(0),
                outcome: Ok(result),
            }
        }

        fn failing(status: u16) -> Self {
            Self {
                calls: AtomicUsize::new(0),
                outcome: Err(status),
            }
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl AdviseBackend for StubBackend {
        async fn analyze(&self, _file: &SelectedFile) -> Result<AnalysisResult, AdviseError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            match &self.outcome {
                Ok(result) => Ok(result.clone()),
                Err(status) => Err(AdviseError::ServiceStatus {
                    status: *status,
                    body: "rejected".to_string(),
                }),
            }
        }
    }

    fn pdf_file() -> SelectedFile {
        SelectedFile::new("resume.pdf", PDF_MEDIA_TYPE, b"%PDF-1.4".to_vec())
    }

    fn sample_result() -> AnalysisResult {
        AnalysisResult {
            skills_gap: vec!["Cloud Architecture".to_string()],
            bullet_suggestions: vec!["Quantify achievements with metrics".to_string()],
            career_path: Some("Senior DevOps Engineer".to_string()),
        }
    }

    #[tokio::test]
    async fn submit_without_file_makes_no_call() {
        let backend = StubBackend::succeeding(sample_result());
        let mut flow = UploadFlow::new();

        let err = flow.submit(&backend).await.unwrap_err();
        assert!(matches!(err, AdviseError::NoFileSelected));
        assert_eq!(backend.calls(), 0);
        assert_eq!(flow.error_message(), Some("Please select a resume file"));
    }

    #[tokio::test]
    async fn submit_non_pdf_makes_no_call() {
        let backend = StubBackend::succeeding(sample_result());
        let mut flow = UploadFlow::new();
        flow.select_file(SelectedFile::new(
            "resume.docx",
            "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
            vec![0u8; 64],
        ));

        let err = flow.submit(&backend).await.unwrap_err();
        assert!(matches!(err, AdviseError::NotPdf { .. }));
        assert_eq!(backend.calls(), 0);
        assert_eq!(flow.error_message(), Some("Only PDF files are accepted"));
    }

    #[tokio::test]
    async fn submit_oversized_file_makes_no_call() {
        let backend = StubBackend::succeeding(sample_result());
        let mut flow = UploadFlow::new();
        flow.select_file(SelectedFile::new(
            "resume.pdf",
            PDF_MEDIA_TYPE,
            vec![0u8; MAX_RESUME_BYTES + 1],
        ));

        let err = flow.submit(&backend).await.unwrap_err();
        assert!(matches!(err, AdviseError::FileTooLarge { .. }));
        assert_eq!(backend.calls(), 0);
    }

    #[tokio::test]
    async fn successful_submit_stores_result_verbatim() {
        let backend = StubBackend::succeeding(sample_result());
        let mut flow = UploadFlow::new();
        flow.select_file(pdf_file());

        flow.submit(&backend).await.unwrap();
        assert_eq!(backend.calls(), 1);
        assert_eq!(flow.result(), Some(&sample_result()));
        assert!(flow.error_message().is_none());
    }

    #[tokio::test]
    async fn empty_lists_are_a_success_not_an_error() {
        let empty = AnalysisResult {
            skills_gap: vec![],
            bullet_suggestions: vec![],
            career_path: None,
        };
        let backend = StubBackend::succeeding(empty.clone());
        let mut flow = UploadFlow::new();
        flow.select_file(pdf_file());

        flow.submit(&backend).await.unwrap();
        assert_eq!(flow.result(), Some(&empty));
    }

    #[tokio::test]
    async fn failed_submit_holds_the_generic_message() {
        let backend = StubBackend::failing(503);
        let mut flow = UploadFlow::new();
        flow.select_file(pdf_file());

        let err = flow.submit(&backend).await.unwrap_err();
        assert!(!err.is_validation());
        assert_eq!(backend.calls(), 1);
        assert_eq!(flow.error_message(), Some(SERVICE_FAILURE_MESSAGE));
        assert!(flow.result().is_none());
    }

    #[tokio::test]
    async fn reset_returns_to_initial_state() {
        let backend = StubBackend::succeeding(sample_result());
        let mut flow = UploadFlow::new();
        flow.select_file(pdf_file());
        flow.submit(&backend).await.unwrap();

        flow.reset();
        assert!(flow.state().is_idle());
        assert!(flow.selected_file().is_none());
        assert!(flow.result().is_none());
        assert!(flow.error_message().is_none());
        assert!(!flow.can_submit());
    }

    #[tokio::test]
    async fn selecting_a_new_file_clears_a_prior_error() {
        let backend = StubBackend::failing(500);
        let mut flow = UploadFlow::new();
        flow.select_file(pdf_file());
        let _ = flow.submit(&backend).await;
        assert!(flow.error_message().is_some());

        flow.select_file(pdf_file());
        assert!(flow.state().is_idle());
        assert!(flow.error_message().is_none());
        assert!(flow.can_submit());
    }
}
