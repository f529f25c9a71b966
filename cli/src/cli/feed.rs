use std::time::Duration;

use chrono::Utc;

use clap::Parser;

use futures_util::pin_mut;

use gallery_api::GalleryService;

use gallery_data::{
    filter::{FeedFilter, FeedPeriod, FeedSort},
    viewer::Viewer,
    ModelId,
};

use url::Url;

use vitrine::{
    layout::{tiles, TileMetrics},
    session::FeedSession,
    source::GalleryFetcher,
    Vitrine,
};

use crate::display::feed_line;

pub const EMPTY_FEED_MESSAGE: &str =
    "Try adjusting your search or filters to find what you're looking for";

#[derive(Debug, Parser)]
pub struct Feed {
    /// Gallery service URI.
    #[arg(long)]
    uri: Option<Url>,

    /// Viewer API token.
    #[arg(long)]
    token: Option<String>,

    /// Free text search on model names.
    #[arg(short, long)]
    query: Option<String>,

    /// Only models by this creator.
    #[arg(short, long)]
    user: Option<String>,

    /// Only models carrying this tag.
    #[arg(short, long)]
    tag: Option<String>,

    /// Only your favorited models.
    #[arg(short, long)]
    favorites: bool,

    /// Feed ordering.
    #[arg(short, long, default_value = "Highest Rated")]
    sort: FeedSort,

    /// Ranking time window.
    #[arg(short, long, default_value = "AllTime")]
    period: FeedPeriod,

    /// Pages to load before rendering.
    #[arg(long, default_value = "1")]
    pages: usize,

    /// Keep polling for new models until CTRL-C.
    #[arg(short, long)]
    watch: bool,

    /// Seconds between polls.
    #[arg(long, default_value = "30")]
    poll_seconds: u64,

    /// Find this model in the feed.
    #[arg(short, long)]
    goto: Option<ModelId>,

    /// Masonry column width in pixels.
    #[arg(long, default_value = "300")]
    column_width: u32,

    /// Single caption line under each tile.
    #[arg(long)]
    one_line: bool,
}

pub async fn feed_cli(cli: Feed) {
    let res = feed(cli).await;

    if let Err(e) = res {
        eprintln!("❗ Gallery: {:#?}", e);
    }
}

async fn feed(args: Feed) -> Result<(), vitrine::errors::Error> {
    let service = match args.uri.clone() {
        Some(uri) => GalleryService::new(uri),
        None => GalleryService::default(),
    };

    let vitrine = Vitrine::new(service);

    let viewer = match args.token.clone() {
        Some(token) => Viewer::with_token(token),
        None => Viewer::anonymous(),
    };

    let filter = FeedFilter {
        query: args.query.clone(),
        username: args.user.clone(),
        tag: args.tag.clone(),
        favorites: args.favorites.then_some(true),
        sort: args.sort,
        period: args.period,
    };

    let mut session = vitrine.session(filter, viewer.clone())?;

    if viewer.is_authenticated() {
        match vitrine.hidden_creator_ids(&viewer).await {
            Ok(ids) => session.hidden_mut().fill(ids),
            Err(e) => eprintln!("❗ Hidden creators unavailable: {:#?}", e),
        }

        match vitrine.favorite_model_ids(&viewer).await {
            Ok(ids) => session.favorites_mut().fill(ids),
            Err(e) => eprintln!("❗ Favorites unavailable: {:#?}", e),
        }
    }

    let metrics = TileMetrics {
        column_width: args.column_width,
        two_line_captions: !args.one_line,
        ..Default::default()
    };

    load_pages(&mut session, args.pages).await?;
    render(&mut session, &metrics, args.goto);

    if args.watch {
        watch(&mut session, &metrics, args.poll_seconds).await;
    }

    Ok(())
}

/// Scroll until this many pages are loaded or the feed ends.
async fn load_pages(
    session: &mut FeedSession<GalleryFetcher>,
    pages: usize,
) -> Result<(), vitrine::errors::Error> {
    for _ in 0..pages {
        if !session.sentinel(true) {
            break;
        }

        if !session.load_more().await? {
            break;
        }

        session.sentinel(false);
    }

    Ok(())
}

fn render(session: &mut FeedSession<GalleryFetcher>, metrics: &TileMetrics, goto: Option<ModelId>) {
    let favorites = session.favorites().ids().clone();
    let feed = session.feed();

    if feed.is_empty() {
        println!("No models found");
        println!("{}", EMPTY_FEED_MESSAGE);

        return;
    }

    if let Some(id) = goto {
        match feed.position(id) {
            Some(index) => println!("Model {} is tile number {}", id, index + 1),
            None => println!("❗ Model {} is not in this feed", id),
        }
    }

    let now = Utc::now().timestamp();
    let tiles = tiles(feed, metrics);

    for (index, (model, tile)) in feed.items().iter().zip(tiles.iter()).enumerate() {
        let favorite = favorites.contains(&model.id);

        println!("{}", feed_line(index, model, tile, favorite, now));
    }
}

async fn watch(session: &mut FeedSession<GalleryFetcher>, metrics: &TileMetrics, seconds: u64) {
    let control = tokio::signal::ctrl_c();
    pin_mut!(control);

    let mut interval = tokio::time::interval(Duration::from_secs(seconds.max(1)));
    interval.tick().await;

    println!("Polling For New Models\nPress CTRL-C to exit...");

    loop {
        tokio::select! {
            biased;

            _ = &mut control => return,

            _ = interval.tick() => {
                session.refresh();

                if session.sentinel(true) {
                    if let Err(e) = session.load_more().await {
                        eprintln!("❗ Gallery: {:#?}", e);

                        continue;
                    }
                }

                render(session, metrics, None);
            }
        }
    }
}
