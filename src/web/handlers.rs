// src/web/handlers.rs
//! Resume upload handler: reads the multipart form, drives the
//! upload-and-analyze flow, renders the page from the resulting state.

use rocket::form::Form;
use rocket::http::Status;
use rocket::response::content::RawHtml;
use rocket::State;
use tracing::{error, info};

use crate::advise::error::SERVICE_FAILURE_MESSAGE;
use crate::advise::{AdviseClient, SelectedFile, UploadFlow};
use crate::web::pages::{self, ResumeAnalysisPage};
use crate::web::types::ResumeUploadForm;

pub async fn analyze_resume_handler(
    mut upload: Form<ResumeUploadForm<'_>>,
    client: &State<AdviseClient>,
) -> Result<RawHtml<String>, Status> {
    let file_name = upload
        .resume
        .raw_name()
        .and_then(|n| n.as_str())
        .unwrap_or("resume.pdf")
        .to_string();

    let content_type = upload
        .resume
        .content_type()
        .map(|ct| ct.to_string())
        .unwrap_or_else(|| "application/octet-stream".to_string());

    info!(file = %file_name, content_type = %content_type, "Received resume upload");

    let data = match read_upload(&mut upload.resume).await {
        Ok(data) => data,
        Err(e) => {
            error!(error = %e, "Failed to read uploaded resume");
            return pages::render(ResumeAnalysisPage {
                year: pages::current_year(),
                result: None,
                error: Some(SERVICE_FAILURE_MESSAGE.to_string()),
            });
        }
    };

    let mut flow = UploadFlow::new();
    flow.select_file(SelectedFile::new(file_name, content_type, data));

    // The flow holds the outcome either way; the page renders from its state.
    let _ = flow.submit(client.inner()).await;

    pages::render(ResumeAnalysisPage {
        year: pages::current_year(),
        result: flow.result().cloned(),
        error: flow.error_message().map(String::from),
    })
}

/// Spool the temp file through a uuid-suffixed path and read it back.
async fn read_upload(file: &mut rocket::fs::TempFile<'_>) -> anyhow::Result<Vec<u8>> {
    let temp_path = std::env::temp_dir().join(format!("resume_upload_{}", uuid::Uuid::new_v4()));

    file.copy_to(&temp_path).await?;
    let data = tokio::fs::read(&temp_path).await?;
    if let Err(e) = tokio::fs::remove_file(&temp_path).await {
        error!(path = %temp_path.display(), error = %e, "Failed to clean up temp upload");
    }

    Ok(data)
}
