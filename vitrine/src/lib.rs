pub mod errors;
pub mod feed;
pub mod layout;
pub mod pager;
pub mod reorder;
pub mod session;
pub mod source;
pub mod viewer_cache;

use std::collections::HashSet;

use errors::Error;

use futures::Stream;

use gallery_api::GalleryService;

use gallery_data::{filter::FeedFilter, model::ModelSummary, viewer::Viewer, CreatorId, ModelId};

use session::FeedSession;

use source::{GalleryFetcher, Page};

#[derive(Default, Clone)]
pub struct Vitrine {
    api: GalleryService,
}

impl Vitrine {
    pub fn new(api: GalleryService) -> Self {
        Self { api }
    }

    /// Start a feed session for one viewer and one filter descriptor.
    pub fn session(
        &self,
        filter: FeedFilter,
        viewer: Viewer,
    ) -> Result<FeedSession<GalleryFetcher>, Error> {
        FeedSession::new(GalleryFetcher::new(self.api.clone()), filter, viewer)
    }

    /// Walk the whole cursor chain, one page per item.
    pub fn stream_pages(
        &self,
        filter: FeedFilter,
    ) -> impl Stream<Item = Result<Page<ModelSummary>, Error>> {
        source::stream_pages(GalleryFetcher::new(self.api.clone()), filter)
    }

    /// Creators this viewer muted, straight from the service.
    pub async fn hidden_creator_ids(&self, viewer: &Viewer) -> Result<HashSet<CreatorId>, Error> {
        let creators = self.api.hidden_creators(viewer).await?;

        Ok(creators.into_iter().map(|creator| creator.id).collect())
    }

    /// Models this viewer favorited, straight from the service.
    pub async fn favorite_model_ids(&self, viewer: &Viewer) -> Result<HashSet<ModelId>, Error> {
        let models = self.api.favorite_models(viewer).await?;

        Ok(models.into_iter().collect())
    }

    /// Mute a creator's models, returns the new hidden state.
    pub async fn hide_creator(&self, viewer: &Viewer, creator: CreatorId) -> Result<bool, Error> {
        let response = self.api.hide_creator(viewer, creator).await?;

        Ok(response.hidden)
    }

    /// Unmute a creator's models, returns the new hidden state.
    pub async fn unhide_creator(&self, viewer: &Viewer, creator: CreatorId) -> Result<bool, Error> {
        let response = self.api.unhide_creator(viewer, creator).await?;

        Ok(response.hidden)
    }
}
