use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Gallery: {0}")]
    GalleryApi(#[from] gallery_api::errors::Error),

    #[error("Serde: {0}")]
    Serde(#[from] serde_json::error::Error),
}
