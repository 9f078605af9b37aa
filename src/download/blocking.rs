use std::fs::File;
use std::io::{ErrorKind, Read, Write};
use std::path::Path;

use log::debug;
use reqwest::StatusCode;
use reqwest::blocking::Client;
use reqwest::header::{CONTENT_LENGTH, HeaderMap};

use crate::download::progress::{ProgressReader, ProgressTracker};
use crate::error::{Error, Result};

pub const DEFAULT_CHUNK_SIZE: usize = 512 * 1024;

/// Streams a direct download URL into a local file.
pub struct FileDownloader {
    client: Client,
    chunk_size: usize,
}

impl FileDownloader {
    pub fn new(client: Client, chunk_size: usize) -> Self {
        Self {
            client,
            chunk_size: chunk_size.max(1),
        }
    }

    /// Downloads `url` into `destination`, returning the number of bytes written.
    ///
    /// The `Content-Length` header is checked before the destination is
    /// touched, so a response without a usable length never leaves an empty
    /// file behind. A copy that fails midway keeps whatever was written.
    pub fn download<P: ProgressTracker>(
        &self,
        destination: &Path,
        url: &str,
        tracker: &P,
    ) -> Result<u64> {
        debug!("GET {url}");
        let response = self.client.get(url).send()?;
        if response.status() != StatusCode::OK {
            return Err(Error::status(response.status()));
        }

        let total = parse_content_length(response.headers())?;
        debug!("{url} declares {total} bytes");

        let mut dest = File::create(destination).map_err(|source| Error::CreateFile {
            path: destination.to_path_buf(),
            source,
        })?;

        let copy_err = |source| Error::Copy {
            path: destination.to_path_buf(),
            source,
        };
        let mut reader = ProgressReader::new(response, tracker, total);
        let mut buffer = vec![0; self.chunk_size];
        loop {
            let data = match reader.read(&mut buffer) {
                Ok(0) => break,
                Ok(n) => n,
                Err(err) if err.kind() == ErrorKind::Interrupted => continue,
                Err(err) => return Err(copy_err(err)),
            };
            dest.write_all(&buffer[..data]).map_err(copy_err)?;
        }
        dest.sync_all().map_err(copy_err)?;

        Ok(reader.complete())
    }
}

pub fn parse_content_length(headers: &HeaderMap) -> Result<u64> {
    let value = headers
        .get(CONTENT_LENGTH)
        .ok_or(Error::MissingContentLength)?;
    let text = value.to_str().map_err(|_| {
        Error::InvalidContentLength(String::from_utf8_lossy(value.as_bytes()).into_owned())
    })?;
    text.trim()
        .parse::<u64>()
        .map_err(|_| Error::InvalidContentLength(text.to_string()))
}
