pub mod errors;
pub mod responses;

use std::sync::Arc;

use errors::{ApiError, Error};

use gallery_data::{
    filter::FeedFilter, model::CreatorRef, viewer::Viewer, CreatorId, Cursor, ModelId,
};

use crate::responses::*;

use reqwest::{Client, Url};

pub const DEFAULT_URI: &str = "http://127.0.0.1:3000/api/v1/";

/// Items per page when the caller does not choose.
pub const DEFAULT_PAGE_SIZE: usize = 100;

/// Hard cap the service enforces on page size.
pub const MAX_PAGE_SIZE: usize = 200;

type Result<T> = std::result::Result<T, Error>;

#[derive(Clone)]
pub struct GalleryService {
    client: Client,
    base_url: Arc<Url>,
}

impl Default for GalleryService {
    fn default() -> Self {
        let base_url = Url::parse(DEFAULT_URI).expect("Parsing URI");
        let base_url = Arc::from(base_url);

        let client = Client::new();

        Self { client, base_url }
    }
}

impl GalleryService {
    pub fn new(url: Url) -> Self {
        let base_url = Arc::from(url);

        let client = Client::new();

        Self { client, base_url }
    }

    /// Fetch one page of the model feed.
    ///
    /// No cursor means the first page.
    pub async fn models_page(
        &self,
        filter: &FeedFilter,
        cursor: Option<&Cursor>,
        limit: usize,
    ) -> Result<ModelPage> {
        let url = self.base_url.join("models")?;

        let limit = limit.min(MAX_PAGE_SIZE);

        let mut builder = self
            .client
            .get(url)
            .query(filter)
            .query(&[("limit", limit.to_string())]);

        if let Some(cursor) = cursor {
            builder = builder.query(&[("cursor", cursor.as_str())]);
        }

        let bytes = builder.send().await?.bytes().await?;

        //println!("{}", std::str::from_utf8(&bytes).unwrap());

        if let Ok(res) = serde_json::from_slice::<ModelPage>(&bytes) {
            return Ok(res);
        }

        let error = serde_json::from_slice::<ApiError>(&bytes)?;

        Err(error.into())
    }

    /// Creators this viewer muted.
    pub async fn hidden_creators(&self, viewer: &Viewer) -> Result<Vec<CreatorRef>> {
        let token = viewer.token().ok_or(Error::Auth)?;

        let url = self.base_url.join("creators/hidden")?;

        let bytes = self
            .client
            .get(url)
            .bearer_auth(token)
            .send()
            .await?
            .bytes()
            .await?;

        if let Ok(res) = serde_json::from_slice::<Vec<CreatorRef>>(&bytes) {
            return Ok(res);
        }

        let error = serde_json::from_slice::<ApiError>(&bytes)?;

        Err(error.into())
    }

    /// Mute a creator. Their models disappear from this viewer's feeds.
    pub async fn hide_creator(
        &self,
        viewer: &Viewer,
        creator: CreatorId,
    ) -> Result<ToggleResponse> {
        let token = viewer.token().ok_or(Error::Auth)?;

        let url = self.base_url.join(&format!("creators/hidden/{}", creator))?;

        let bytes = self
            .client
            .post(url)
            .bearer_auth(token)
            .send()
            .await?
            .bytes()
            .await?;

        if let Ok(res) = serde_json::from_slice::<ToggleResponse>(&bytes) {
            return Ok(res);
        }

        let error = serde_json::from_slice::<ApiError>(&bytes)?;

        Err(error.into())
    }

    /// Unmute a creator.
    pub async fn unhide_creator(
        &self,
        viewer: &Viewer,
        creator: CreatorId,
    ) -> Result<ToggleResponse> {
        let token = viewer.token().ok_or(Error::Auth)?;

        let url = self.base_url.join(&format!("creators/hidden/{}", creator))?;

        let bytes = self
            .client
            .delete(url)
            .bearer_auth(token)
            .send()
            .await?
            .bytes()
            .await?;

        if let Ok(res) = serde_json::from_slice::<ToggleResponse>(&bytes) {
            return Ok(res);
        }

        let error = serde_json::from_slice::<ApiError>(&bytes)?;

        Err(error.into())
    }

    /// Models this viewer favorited.
    pub async fn favorite_models(&self, viewer: &Viewer) -> Result<Vec<ModelId>> {
        let token = viewer.token().ok_or(Error::Auth)?;

        let url = self.base_url.join("models/favorites")?;

        let bytes = self
            .client
            .get(url)
            .bearer_auth(token)
            .send()
            .await?
            .bytes()
            .await?;

        //println!("{}", std::str::from_utf8(&bytes).unwrap());

        if let Ok(res) = serde_json::from_slice::<Vec<FavoriteModel>>(&bytes) {
            return Ok(res.into_iter().map(|fav| fav.model_id).collect());
        }

        let error = serde_json::from_slice::<ApiError>(&bytes)?;

        Err(error.into())
    }
}
