// src/web/mod.rs
//! Rocket server: three pages, one upload route, health, CORS.

pub mod handlers;
pub mod pages;
pub mod types;

pub use types::*;

use anyhow::Result;
use rocket::data::{Limits, ToByteUnit};
use rocket::fairing::{Fairing, Info, Kind};
use rocket::form::Form;
use rocket::http::{Header, Status};
use rocket::response::content::RawHtml;
use rocket::serde::json::Json;
use rocket::{catchers, get, options, post, routes, Request, Response, State};
use tracing::info;

use crate::advise::AdviseClient;
use crate::config::AppConfig;
use pages::{AboutPage, ErrorPage, HomePage, ResumeAnalysisPage};

// CORS Fairing
pub struct Cors;

#[rocket::async_trait]
impl Fairing for Cors {
    fn info(&self) -> Info {
        Info {
            name: "Add CORS headers to responses",
            kind: Kind::Response,
        }
    }

    async fn on_response<'r>(&self, _request: &'r Request<'_>, response: &mut Response<'r>) {
        response.set_header(Header::new("Access-Control-Allow-Origin", "*"));
        response.set_header(Header::new(
            "Access-Control-Allow-Methods",
            "POST, GET, OPTIONS",
        ));
        response.set_header(Header::new("Access-Control-Allow-Headers", "*"));
    }
}

#[get("/")]
pub fn home() -> Result<RawHtml<String>, Status> {
    pages::render(HomePage {
        year: pages::current_year(),
    })
}

#[get("/about")]
pub fn about() -> Result<RawHtml<String>, Status> {
    pages::render(AboutPage {
        year: pages::current_year(),
    })
}

#[get("/resume-analysis")]
pub fn resume_analysis() -> Result<RawHtml<String>, Status> {
    pages::render(ResumeAnalysisPage::fresh())
}

#[post("/resume-analysis", data = "<upload>")]
pub async fn analyze_resume(
    upload: Form<ResumeUploadForm<'_>>,
    client: &State<AdviseClient>,
) -> Result<RawHtml<String>, Status> {
    handlers::analyze_resume_handler(upload, client).await
}

#[get("/health")]
pub fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        success: true,
        message: "Career Compass frontend is running".to_string(),
    })
}

#[options("/<_..>")]
pub fn options() -> Status {
    Status::Ok
}

// Error catchers
#[rocket::catch(404)]
pub fn not_found() -> Result<RawHtml<String>, Status> {
    pages::render(ErrorPage {
        year: pages::current_year(),
        status: 404,
        message: "We couldn't find that page.".to_string(),
    })
}

#[rocket::catch(500)]
pub fn internal_error() -> Result<RawHtml<String>, Status> {
    pages::render(ErrorPage {
        year: pages::current_year(),
        status: 500,
        message: "Something went wrong on our side. Please try again.".to_string(),
    })
}

// Main server start function
pub async fn start_web_server(config: AppConfig) -> Result<()> {
    let client = AdviseClient::new(&config.advise_api_url)?;

    // Room for the advertised 5MB resume plus multipart overhead.
    let limits = Limits::default()
        .limit("file", 8.mebibytes())
        .limit("data-form", 10.mebibytes());

    let figment = rocket::Config::figment()
        .merge(("port", config.port))
        .merge(("address", "0.0.0.0"))
        .merge(("limits", limits));

    info!(port = config.port, advise_api_url = %config.advise_api_url, "Starting Career Compass frontend");

    let _rocket = rocket::custom(figment)
        .attach(Cors)
        .manage(client)
        .manage(config)
        .register("/", catchers![not_found, internal_error])
        .mount(
            "/",
            routes![
                home,
                about,
                resume_analysis,
                analyze_resume,
                health,
                options,
            ],
        )
        .launch()
        .await?;

    Ok(())
}
