use crate::errors::Error;

use async_trait::async_trait;

use futures::{stream, Stream};

use gallery_api::{responses::ModelPage, GalleryService, DEFAULT_PAGE_SIZE};

use gallery_data::{filter::FeedFilter, model::ModelSummary, Cursor};

/// One fetched page, never mutated after arrival.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,

    /// Cursor of the page after this one, absent on the last page.
    pub next_cursor: Option<Cursor>,
}

impl From<ModelPage> for Page<ModelSummary> {
    fn from(page: ModelPage) -> Self {
        Self {
            items: page.items,
            next_cursor: page.next_cursor,
        }
    }
}

/// Backend serving feed pages one cursor at a time.
#[async_trait(?Send)]
pub trait PageFetcher {
    type Item;

    /// Fetch the page at this cursor, no cursor means the first page.
    async fn fetch(
        &mut self,
        filter: &FeedFilter,
        cursor: Option<&Cursor>,
    ) -> Result<Page<Self::Item>, Error>;
}

/// Fetches pages from the remote gallery service.
#[derive(Clone)]
pub struct GalleryFetcher {
    api: GalleryService,
    page_size: usize,
}

impl GalleryFetcher {
    pub fn new(api: GalleryService) -> Self {
        Self {
            api,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }

    pub fn with_page_size(api: GalleryService, page_size: usize) -> Self {
        Self { api, page_size }
    }
}

#[async_trait(?Send)]
impl PageFetcher for GalleryFetcher {
    type Item = ModelSummary;

    async fn fetch(
        &mut self,
        filter: &FeedFilter,
        cursor: Option<&Cursor>,
    ) -> Result<Page<Self::Item>, Error> {
        let page = self.api.models_page(filter, cursor, self.page_size).await?;

        Ok(page.into())
    }
}

/// Ordered list of fetched pages and the cursor chain between them.
///
/// Exclusive access keeps at most one fetch in flight.
pub struct Paginator<T> {
    pages: Vec<Page<T>>,
    next: Option<Cursor>,
    exhausted: bool,
    revision: u64,
}

impl<T> Paginator<T> {
    pub fn new() -> Self {
        Self {
            pages: Vec::new(),
            next: None,
            exhausted: false,
            revision: 0,
        }
    }

    /// False once the service reported the last page.
    pub fn has_next(&self) -> bool {
        !self.exhausted
    }

    /// Pages in arrival order.
    pub fn pages(&self) -> &[Page<T>] {
        &self.pages
    }

    /// Bumped every time a page lands.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Fetch and append the next page.
    ///
    /// None means the feed was already exhausted.
    /// On failure the cursor chain is untouched and the next call
    /// retries the same page.
    pub async fn next_page<F>(
        &mut self,
        fetcher: &mut F,
        filter: &FeedFilter,
    ) -> Result<Option<&Page<T>>, Error>
    where
        F: PageFetcher<Item = T>,
    {
        if self.exhausted {
            return Ok(None);
        }

        let page = fetcher.fetch(filter, self.next.as_ref()).await?;

        self.next = page.next_cursor.clone();
        self.exhausted = self.next.is_none();

        self.pages.push(page);
        self.revision += 1;

        Ok(self.pages.last())
    }
}

impl<T> Default for Paginator<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Lazily walk a whole feed, one page per poll.
///
/// The stream ends when the cursor chain does.
pub fn stream_pages<F>(
    fetcher: F,
    filter: FeedFilter,
) -> impl Stream<Item = Result<Page<F::Item>, Error>>
where
    F: PageFetcher,
{
    stream::try_unfold(
        (fetcher, filter, Some(Option::<Cursor>::None)),
        |(mut fetcher, filter, state)| async move {
            let cursor = match state {
                Some(cursor) => cursor,
                None => return Result::<_, Error>::Ok(None),
            };

            let page = fetcher.fetch(&filter, cursor.as_ref()).await?;

            let next = page.next_cursor.clone().map(Some);

            Ok(Some((page, (fetcher, filter, next))))
        },
    )
}
