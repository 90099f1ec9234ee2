pub mod advise;
pub mod config;
pub mod web;

pub use advise::{AdviseBackend, AdviseClient, AdviseError, AnalysisResult, SelectedFile, UploadFlow};
pub use config::AppConfig;
pub use web::start_web_server;
