// src/web/types.rs
use rocket::form::FromForm;
use rocket::fs::TempFile;
use rocket::serde::Serialize;

#[derive(FromForm)]
pub struct ResumeUploadForm<'f> {
    pub resume: TempFile<'f>,
}

#[derive(Serialize)]
#[serde(crate = "rocket::serde")]
pub struct HealthResponse {
    pub success: bool,
    pub message: String,
}
