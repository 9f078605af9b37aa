use std::path::{Path, PathBuf};

use colored::Colorize;
use indicatif::ProgressBar;
use log::{error, info};

use crate::download::FileDownloader;
use crate::download::utils;
use crate::error::Result;
use crate::scrape::LinkExtractor;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub succeeded: usize,
    pub failed: usize,
}

/// Drives each landing page through link extraction and download, one at a time.
pub struct Orchestrator<E> {
    extractor: E,
    downloader: FileDownloader,
    output_dir: PathBuf,
}

impl<E: LinkExtractor> Orchestrator<E> {
    pub fn new(extractor: E, downloader: FileDownloader, output_dir: PathBuf) -> Self {
        Self {
            extractor,
            downloader,
            output_dir,
        }
    }

    pub fn run(&self, urls: &[String]) -> RunSummary {
        let mut summary = RunSummary::default();
        for page_url in urls {
            if self.process(page_url) {
                summary.succeeded += 1;
            } else {
                summary.failed += 1;
            }
        }
        info!(
            "Finished: {} downloaded, {} failed",
            summary.succeeded, summary.failed
        );
        summary
    }

    fn process(&self, page_url: &str) -> bool {
        let download_url = match self.extractor.extract(page_url) {
            Ok(url) => url,
            Err(err) => {
                error!("Error fetching downloadable URL for {page_url}: {err}");
                return false;
            }
        };

        let filename = utils::file_name(&download_url);
        let destination = utils::build_download_path(&download_url, &self.output_dir);
        info!("Downloading File: {filename}");

        let bar = ProgressBar::hidden().with_message(filename.to_string());
        match self.download(&destination, &download_url, &bar) {
            Ok(bytes) => {
                println!(
                    "{} {} ({})\n",
                    "File downloaded successfully:".green(),
                    filename.bold(),
                    indicatif::HumanBytes(bytes)
                );
                true
            }
            Err(err) => {
                error!("Error downloading file {filename}: {err}");
                false
            }
        }
    }

    fn download(
        &self,
        destination: &Path,
        download_url: &str,
        bar: &ProgressBar,
    ) -> Result<u64> {
        let result = self.downloader.download(destination, download_url, bar);
        // A bar that never started (request, header or file creation failed)
        // is cleared instead of being left on screen as an empty 0/0 bar.
        if result.is_err() && !bar.is_finished() {
            bar.finish_and_clear();
        }
        result
    }
}
