use clap::{Parser, Subcommand};

use gallery_api::GalleryService;

use gallery_data::{viewer::Viewer, CreatorId};

use url::Url;

use vitrine::{errors::Error, Vitrine};

#[derive(Debug, Parser)]
pub struct CreatorsCLI {
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
    /// Hide a creator's models from your feeds.
    Hide(Creator),

    /// Show a creator's models again.
    Unhide(Creator),

    /// Print your hidden creator list.
    List,
}

#[derive(Debug, Parser)]
pub struct Creator {
    /// Numeric creator id.
    #[arg(short, long)]
    id: CreatorId,
}

pub async fn creators_cli(cli: CreatorsCLI) {
    let service = match cli.uri.clone() {
        Some(uri) => GalleryService::new(uri),
        None => GalleryService::default(),
    };

    let vitrine = Vitrine::new(service.clone());
    let viewer = Viewer::with_token(cli.token.clone());

    let res = match cli.cmd {
        Command::Hide(args) => hide(&vitrine, &viewer, args.id).await,
        Command::Unhide(args) => unhide(&vitrine, &viewer, args.id).await,
        Command::List => list(&service, &viewer).await,
    };

    if let Err(e) = res {
        eprintln!("❗ Gallery: {:#?}", e);
    }
}

async fn hide(vitrine: &Vitrine, viewer: &Viewer, creator: CreatorId) -> Result<(), Error> {
    println!("Hiding Creator...");

    let hidden = vitrine.hide_creator(viewer, creator).await?;

    if hidden {
        println!("✅ Creator {} Hidden", creator);
    } else {
        println!("❗ Creator {} is not hidden", creator);
    }

    Ok(())
}

async fn unhide(vitrine: &Vitrine, viewer: &Viewer, creator: CreatorId) -> Result<(), Error> {
    println!("Unhiding Creator...");

    let hidden = vitrine.unhide_creator(viewer, creator).await?;

    if hidden {
        println!("❗ Creator {} is still hidden", creator);
    } else {
        println!("✅ Creator {} Unhidden", creator);
    }

    Ok(())
}

async fn list(service: &GalleryService, viewer: &Viewer) -> Result<(), Error> {
    let creators = service.hidden_creators(viewer).await?;

    if creators.is_empty() {
        println!("No Hidden Creators");

        return Ok(());
    }

    println!("Hidden Creators:");

    for creator in creators {
        println!("{} <{}>", creator.username, creator.id);
    }

    Ok(())
}
