pub mod digest;
pub mod models;

/// Settings for the hosted summarization model.
#[derive(Debug, Clone, Default)]
pub struct Config {
    pub api_key: Option<String>,
    pub model_url: Option<String>,
}

pub mod prelude {
    pub use super::digest::{Digest, DigestGenerator};
    pub use super::models::create_model;
    pub use super::Config;
    pub use fw_core::{Article, Error, Result, SummaryModel};
}

pub use digest::{Digest, DigestGenerator};
pub use models::create_model;
