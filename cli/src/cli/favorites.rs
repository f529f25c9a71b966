use clap::{Parser, Subcommand};

use gallery_api::GalleryService;

use gallery_data::{viewer::Viewer, ModelId};

use url::Url;

use vitrine::{errors::Error, Vitrine};

#[derive(Debug, Parser)]
pub struct FavoritesCLI {
    /// Gallery service URI.
    #[arg(long)]
    uri: Option<Url>,

    /// Viewer API token.
    #[arg(long)]
    token: String,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print your favorited model ids.
    List,
}

pub async fn favorites_cli(cli: FavoritesCLI) {
    let service = match cli.uri.clone() {
        Some(uri) => GalleryService::new(uri),
        None => GalleryService::default(),
    };

    let vitrine = Vitrine::new(service);
    let viewer = Viewer::with_token(cli.token.clone());

    let res = match cli.cmd {
        Command::List => list(&vitrine, &viewer).await,
    };

    if let Err(e) = res {
        eprintln!("❗ Gallery: {:#?}", e);
    }
}

async fn list(vitrine: &Vitrine, viewer: &Viewer) -> Result<(), Error> {
    let favorites = vitrine.favorite_model_ids(viewer).await?;

    if favorites.is_empty() {
        println!("No Favorite Models");

        return Ok(());
    }

    let mut ids: Vec<ModelId> = favorites.into_iter().collect();
    ids.sort_unstable();

    println!("Favorite Models:");

    for id in ids {
        println!("models/{}", id);
    }

    Ok(())
}
