use crate::{
    errors::Error,
    feed::{FeedEntry, FeedKey, MaterializedFeed, Materializer},
    pager::SentinelPager,
    reorder::DelayPolicy,
    source::{Page, PageFetcher, Paginator},
    viewer_cache::{FavoriteModels, HiddenCreators},
};

use gallery_data::{filter::FeedFilter, viewer::Viewer};

/// One viewer looking at one feed.
///
/// Owns the fetched pages, the viewer caches and the render memo.
/// Single threaded, exclusive access serializes every operation.
pub struct FeedSession<F>
where
    F: PageFetcher,
{
    fetcher: F,
    filter: FeedFilter,
    filter_key: String,
    viewer: Viewer,
    paginator: Paginator<F::Item>,
    hidden: HiddenCreators,
    favorites: FavoriteModels,
    materializer: Materializer<F::Item>,
    pager: SentinelPager,
    generation: u64,
}

impl<F> FeedSession<F>
where
    F: PageFetcher,
    F::Item: FeedEntry + Clone,
{
    pub fn new(fetcher: F, filter: FeedFilter, viewer: Viewer) -> Result<Self, Error> {
        Self::with_policy(fetcher, filter, viewer, DelayPolicy::default())
    }

    pub fn with_policy(
        fetcher: F,
        filter: FeedFilter,
        viewer: Viewer,
        policy: DelayPolicy,
    ) -> Result<Self, Error> {
        let filter_key = serde_json::to_string(&filter)?;

        Ok(Self {
            fetcher,
            filter,
            filter_key,
            viewer,
            paginator: Paginator::new(),
            hidden: HiddenCreators::new(),
            favorites: FavoriteModels::new(),
            materializer: Materializer::new(policy),
            pager: SentinelPager::new(),
            generation: 0,
        })
    }

    pub fn filter(&self) -> &FeedFilter {
        &self.filter
    }

    pub fn viewer(&self) -> &Viewer {
        &self.viewer
    }

    /// Replace the filter descriptor.
    ///
    /// A changed descriptor drops every page and rearms the pager, the
    /// feed restarts from the first page. Descriptors serializing to the
    /// same form are the same feed and change nothing.
    pub fn set_filter(&mut self, filter: FeedFilter) -> Result<(), Error> {
        let filter_key = serde_json::to_string(&filter)?;

        if filter_key == self.filter_key {
            return Ok(());
        }

        tracing::debug!(filter = %filter_key, "feed reset");

        self.filter = filter;
        self.filter_key = filter_key;
        self.paginator = Paginator::new();
        self.pager.reset();
        self.generation += 1;

        Ok(())
    }

    /// Drop every page and restart from the first one.
    ///
    /// Filter, viewer and cached viewer lists stay.
    pub fn refresh(&mut self) {
        self.paginator = Paginator::new();
        self.pager.reset();
        self.generation += 1;
    }

    /// Swap who is looking.
    ///
    /// Loaded pages stay, the next materialization reflects the new
    /// viewer. Cached viewer lists belong to the account and are
    /// dropped.
    pub fn set_viewer(&mut self, viewer: Viewer) {
        if viewer == self.viewer {
            return;
        }

        self.viewer = viewer;
        self.hidden.invalidate();
        self.favorites.invalidate();
    }

    /// Hidden creators cache, fill it from the service after login.
    pub fn hidden(&self) -> &HiddenCreators {
        &self.hidden
    }

    pub fn hidden_mut(&mut self) -> &mut HiddenCreators {
        &mut self.hidden
    }

    /// Favorites cache, fill it from the service after login.
    pub fn favorites(&self) -> &FavoriteModels {
        &self.favorites
    }

    pub fn favorites_mut(&mut self) -> &mut FavoriteModels {
        &mut self.favorites
    }

    /// True while the service reports more pages.
    pub fn has_next(&self) -> bool {
        self.paginator.has_next()
    }

    /// Pages fetched so far, in arrival order.
    pub fn pages(&self) -> &[Page<F::Item>] {
        self.paginator.pages()
    }

    /// Bumped on every filter reset.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Report sentinel visibility, true means call load_more now.
    pub fn sentinel(&mut self, visible: bool) -> bool {
        self.pager.observe(visible, self.paginator.has_next())
    }

    /// Fetch and append the next page.
    ///
    /// False when the feed was already exhausted. A failure leaves the
    /// loaded pages untouched and the same page is retried next call.
    pub async fn load_more(&mut self) -> Result<bool, Error> {
        let page = self
            .paginator
            .next_page(&mut self.fetcher, &self.filter)
            .await?;

        match page {
            Some(page) => {
                tracing::debug!(items = page.items.len(), "page appended");

                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// The render ready feed for the current inputs.
    ///
    /// Unchanged inputs hand back the memoized feed.
    pub fn feed(&mut self) -> &MaterializedFeed<F::Item> {
        let key = FeedKey {
            filter: self.filter_key.clone(),
            authenticated: self.viewer.is_authenticated(),
            pages_revision: self.paginator.revision(),
            hidden_revision: self.hidden.revision(),
        };

        self.materializer
            .materialize(key, self.paginator.pages(), self.hidden.ids(), &self.viewer)
    }
}
