mod cli;
mod display;

use clap::{Parser, Subcommand};

use crate::cli::{
    creators::{creators_cli, CreatorsCLI},
    favorites::{favorites_cli, FavoritesCLI},
    feed::{feed_cli, Feed},
};

#[derive(Parser)]
#[command(name = "vitrine", bin_name= "vitrine", author = "SionoiS <SionoiS@users.noreply.github.com>", version, about, long_about = None, rename_all = "kebab-case")]
struct VitrineCLI {
    /// Print debug logs.
    #[arg(long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Browse the model feed.
    Feed(Feed),

    /// Manage your hidden creator list.
    Creators(CreatorsCLI),

    /// Favorite models related commands.
    Favorites(FavoritesCLI),
}

#[tokio::main]
async fn main() {
    let cli = VitrineCLI::parse();

    if cli.verbose {
        tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::from_default_env()
                    .add_directive("vitrine=debug".parse().expect("Parsing directive")),
            )
            .init();
    }

    match cli.command {
        Commands::Feed(args) => feed_cli(args).await,
        Commands::Creators(args) => creators_cli(args).await,
        Commands::Favorites(args) => favorites_cli(args).await,
    }
}
