use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use meme_search_client::global_constants;
use meme_search_client::{
    ClientSettings, HttpMemeSearchService, ImageAttachment, MemeSearchService,
};

#[derive(Debug, Parser)]
#[command(name = "meme-search", about = "Fetch and search memes from the meme service")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Fetch a random meme URL
    Random {
        #[arg(short, long, default_value_t = global_constants::DEFAULT_RANDOM_MEME_COUNT)]
        count: u32,
    },
    /// Search memes by text
    Search { query: String },
    /// Search memes by an image plus text
    SearchImage { query: String, image_path: PathBuf },
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    log::info!(
        "{} Starting {}",
        global_constants::LOG_TAG_MAIN,
        global_constants::APPLICATION_NAME
    );

    let settings = ClientSettings::load()?;
    let service = HttpMemeSearchService::new(&settings);

    let urls = match cli.command {
        Command::Random { count } => vec![service.fetch_random_meme(count).await?],
        Command::Search { query } => service.search_by_text(&query).await?,
        Command::SearchImage { query, image_path } => {
            let image = ImageAttachment::from_path(&image_path).await?;
            service.search_by_image_text(&query, &image).await?
        }
    };

    for url in urls {
        println!("{}", url);
    }

    Ok(())
}
