// src/advise/client.rs
//! HTTP client for the remote advice service.

use anyhow::Context;
use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use tracing::{error, info};

use super::error::AdviseError;
use super::types::{AnalysisResult, SelectedFile, PDF_MEDIA_TYPE};

const ADVISE_ENDPOINT: &str = "/advise";
const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// Seam between the flow state machine and the network, so the machine can be
/// driven by a stub in tests.
#[async_trait]
pub trait AdviseBackend: Send + Sync {
    async fn analyze(&self, file: &SelectedFile) -> Result<AnalysisResult, AdviseError>;
}

pub struct AdviseClient {
    client: reqwest::Client,
    base_url: String,
}

impl AdviseClient {
    /// Create a client for the configured service base URL.
    pub fn new(base_url: &str) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn advise_url(&self) -> String {
        format!("{}{}", self.base_url, ADVISE_ENDPOINT)
    }

    /// Upload the résumé as a single multipart POST and parse the analysis.
    ///
    /// The file goes under field name `resume`, as the service expects. Non-2xx
    /// statuses and undecodable bodies are logged with their detail and mapped
    /// to service error variants.
    pub async fn analyze_resume(
        &self,
        file: &SelectedFile,
    ) -> Result<AnalysisResult, AdviseError> {
        let url = self.advise_url();

        let part = Part::bytes(file.data.clone())
            .file_name(file.name.clone())
            .mime_str(PDF_MEDIA_TYPE)
            .map_err(AdviseError::Transport)?;
        let form = Form::new().part("resume", part);

        info!(url = %url, file = %file.name, bytes = file.size(), "Submitting resume for analysis");

        let response = self
            .client
            .post(&url)
            .multipart(form)
            .send()
            .await
            .map_err(AdviseError::Transport)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!(status = %status, body = %body, "Advice service rejected the request");
            return Err(AdviseError::ServiceStatus {
                status: status.as_u16(),
                body,
            });
        }

        // Read the raw body first so a parse failure can be logged with it.
        let body = response.text().await.map_err(AdviseError::Transport)?;
        let result: AnalysisResult = serde_json::from_str(&body).map_err(|e| {
            error!(body = %body, "Advice service returned an unexpected payload");
            AdviseError::MalformedPayload(e)
        })?;

        info!(
            skills_gap = result.skills_gap.len(),
            suggestions = result.bullet_suggestions.len(),
            "Received resume analysis"
        );
        Ok(result)
    }
}

#[async_trait]
impl AdviseBackend for AdviseClient {
    async fn analyze(&self, file: &SelectedFile) -> Result<AnalysisResult, AdviseError> {
        self.analyze_resume(file).await
    }
}
