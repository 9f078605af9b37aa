use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use colored::Colorize;
use log::debug;

use crate::config::{Config, UrlSource};
use crate::download::FileDownloader;
use crate::download::utils::build_client;
use crate::run::Orchestrator;
use crate::scrape::SelectorExtractor;

/// A simple CLI tool to download files from MediaFire URLs with a progress bar.
#[derive(Parser, Debug)]
#[command(name = "mediafire-dl", version, about, long_about = None)]
pub struct Cli {
    /// Path to a file containing URLs (one per line)
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// MediaFire landing page URLs
    urls: Vec<String>,
}

impl From<Cli> for Config {
    fn from(cli: Cli) -> Self {
        let source = match cli.file {
            Some(path) => UrlSource::File(path),
            None => UrlSource::Args(cli.urls),
        };
        Config::new(source)
    }
}

impl Cli {
    pub fn execute(self) -> anyhow::Result<()> {
        print_banner();
        let config = Config::from(self);
        debug!("{config:?}");
        let urls = config.urls()?;

        let client = build_client().context("Error setting up HTTP client")?;
        let extractor = SelectorExtractor::mediafire(client.clone())?;
        let downloader = FileDownloader::new(client, config.chunk_size);
        Orchestrator::new(extractor, downloader, config.output_dir).run(&urls);
        Ok(())
    }
}

fn print_banner() {
    println!("{}", "mediafire-dl".bold().cyan());
    println!("{}\n", concat!("version ", env!("CARGO_PKG_VERSION")).bright_black());
}
