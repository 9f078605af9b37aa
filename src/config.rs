use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::PathBuf;

use anyhow::{Context, bail};

use crate::download::DEFAULT_CHUNK_SIZE;

/// Where the landing-page URLs come from.
#[derive(Debug, Clone, PartialEq)]
pub enum UrlSource {
    /// Newline-delimited list, one URL per line.
    File(PathBuf),
    Args(Vec<String>),
}

#[derive(Debug, Clone)]
pub struct Config {
    pub source: UrlSource,
    pub output_dir: PathBuf,
    pub chunk_size: usize,
}

impl Config {
    pub fn new(source: UrlSource) -> Self {
        Self {
            source,
            output_dir: PathBuf::from("."),
            chunk_size: DEFAULT_CHUNK_SIZE,
        }
    }

    /// Resolves the URL set. Every line of a URL file is kept as-is, blank
    /// lines included.
    pub fn urls(&self) -> anyhow::Result<Vec<String>> {
        let urls = match &self.source {
            UrlSource::File(path) => {
                let file = File::open(path)
                    .with_context(|| format!("Error opening file {}", path.display()))?;
                BufReader::new(file)
                    .lines()
                    .collect::<Result<Vec<_>, _>>()
                    .with_context(|| format!("Error reading file {}", path.display()))?
            }
            UrlSource::Args(urls) => urls.clone(),
        };
        if urls.is_empty() {
            bail!("No URLs provided");
        }
        Ok(urls)
    }
}
