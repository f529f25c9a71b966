use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Serde: {0}")]
    Serde(#[from] serde_json::error::Error),

    #[error("Reqwest: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("Gallery: {0}")]
    Gallery(#[from] ApiError),

    #[error("Auth: viewer token required")]
    Auth,

    #[error("Parse: {0}")]
    Parse(#[from] url::ParseError),
}

/// Error body returned by the gallery service.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    pub message: String,

    pub code: u64,
}

impl std::error::Error for ApiError {}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match serde_json::to_string_pretty(&self) {
            Ok(e) => write!(f, "{}", e),
            Err(e) => write!(f, "{}", e),
        }
    }
}
