// src/advise/mod.rs
//! Upload-and-analyze flow: the one stateful piece of the site.

pub mod client;
pub mod error;
pub mod flow;
pub mod types;

pub use client::{AdviseBackend, AdviseClient};
pub use error::AdviseError;
pub use flow::{FlowState, UploadFlow};
pub use types::{AnalysisResult, SelectedFile, MAX_RESUME_BYTES, PDF_MEDIA_TYPE};
