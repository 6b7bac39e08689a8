mod context;
mod error;
mod fetcher;
mod pipeline;
mod settings;
mod writer;

use std::path::PathBuf;
use std::time::Instant;

use anyhow::Context;
use clap::Parser;
use tracing::info;

use context::RunContext;
use settings::{Overrides, Settings};

#[derive(Parser)]
#[command(
    name = "linkdump",
    about = "Turn the last week of Pinboard bookmarks into an Octopress link dump post"
)]
struct Cli {
    /// Location of the Octopress directory
    #[arg(short, long, value_name = "DIR")]
    octopress: Option<PathBuf>,
    /// Number of days of bookmarks to request
    #[arg(short, long)]
    days: Option<u32>,
    /// Pinboard API token file
    #[arg(short, long, value_name = "PATH")]
    token_file: Option<PathBuf>,
    /// API endpoint for `posts/all`
    #[arg(long, value_name = "URL")]
    endpoint: Option<String>,
}

impl Cli {
    fn overrides(self) -> Overrides {
        Overrides {
            output_dir: self.octopress,
            days: self.days,
            token_file: self.token_file,
            endpoint: self.endpoint,
        }
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let t0 = Instant::now();
    let cli = Cli::parse();
    let settings = Settings::load(&cli.overrides())?;
    let ctx = RunContext::now();

    let token = fetcher::read_token(&settings.token_file)?;
    let client = reqwest::blocking::Client::new();
    let raw = fetcher::fetch_posts(&client, &settings.endpoint, &token, settings.days, &ctx)
        .context("Failed to fetch bookmarks")?;

    let post = pipeline::build_post(&raw, &ctx);
    let path = writer::write_post(&settings.output_dir, &post.body, &ctx)
        .context("Failed to write post")?;

    println!(
        "Wrote {} links in {} categories to {}",
        post.links,
        post.categories,
        path.display()
    );
    info!("Done in {:.1}s", t0.elapsed().as_secs_f64());
    Ok(())
}
