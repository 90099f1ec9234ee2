// src/web/pages.rs
//! Askama templates for the site's pages.

use askama::Template;
use chrono::Datelike;
use rocket::http::Status;
use rocket::response::content::RawHtml;
use tracing::error;

use crate::advise::AnalysisResult;

#[derive(Template)]
#[template(path = "home.html")]
pub struct HomePage {
    pub year: i32,
}

#[derive(Template)]
#[template(path = "about.html")]
pub struct AboutPage {
    pub year: i32,
}

#[derive(Template)]
#[template(path = "resume_analysis.html")]
pub struct ResumeAnalysisPage {
    pub year: i32,
    pub result: Option<AnalysisResult>,
    pub error: Option<String>,
}

#[derive(Template)]
#[template(path = "error.html")]
pub struct ErrorPage {
    pub year: i32,
    pub status: u16,
    pub message: String,
}

pub fn current_year() -> i32 {
    chrono::Utc::now().year()
}

impl ResumeAnalysisPage {
    /// The blank form shown on initial load or after a reset.
    pub fn fresh() -> Self {
        Self {
            year: current_year(),
            result: None,
            error: None,
        }
    }
}

pub fn render<T: Template>(template: T) -> Result<RawHtml<String>, Status> {
    match template.render() {
        Ok(html) => Ok(RawHtml(html)),
        Err(e) => {
            error!(error = %e, "Failed to render template");
            Err(Status::InternalServerError)
        }
    }
}
