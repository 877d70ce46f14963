mod fetcher;

use std::env;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use url::Url;

use crate::catalog::Entry;

use fetcher::UReqFetcher;

#[derive(Debug)]
pub enum Response {
    Ok(Vec<u8>),
    InvalidBody,
    NotFound,
    NetworkError(String),
}

impl Response {
    pub fn ok(body: Vec<u8>) -> Self {
        Self::Ok(body)
    }

    pub fn invalid_body() -> Self {
        Self::InvalidBody
    }

    pub fn not_found() -> Self {
        Self::NotFound
    }

    pub fn network_error(reason: impl Into<String>) -> Self {
        Self::NetworkError(reason.into())
    }
}

pub trait ImageFetcher {
    fn fetch(&self, url: &str) -> Response;
}

pub struct Downloader<T: ImageFetcher> {
    fetcher: T,
    path: PathBuf,
}

#[derive(Debug, PartialEq)]
pub enum DownloadError {
    NotFound,
    NetworkError(String),
    InvalidUrl,
    InvalidBody,
    SaveFailed(String),
}

impl fmt::Display for DownloadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound => write!(f, "not found (404)"),
            Self::NetworkError(reason) => write!(f, "network error: {}", reason),
            Self::InvalidUrl => write!(f, "invalid URL"),
            Self::InvalidBody => write!(f, "could not read response body"),
            Self::SaveFailed(reason) => write!(f, "could not save file: {}", reason),
        }
    }
}

#[derive(Debug, PartialEq)]
pub struct Download {
    pub source: String,
    pub file: PathBuf,
    pub content: Vec<u8>,
}

impl Download {
    pub fn new(source: String, file: PathBuf, content: Vec<u8>) -> Self {
        Self {
            source,
            file,
            content,
        }
    }
}

impl<T> Downloader<T>
where
    T: ImageFetcher,
{
    pub fn with_fetcher(path: &str, fetcher: T) -> Self {
        let path = Self::create_path_from_string(path)
            .unwrap_or_else(|_| panic!("Error creating path: {}", path));

        Downloader { path, fetcher }
    }

    /// Fetches one entry and writes its bytes to `<path>/<filename>`,
    /// overwriting any existing file of the same name.
    pub fn download(&self, entry: &Entry) -> Result<Download, DownloadError> {
        let url = Url::parse(entry.url).map_err(|_| DownloadError::InvalidUrl)?;

        let url = url.as_str();

        let response = self.fetcher.fetch(url);

        match response {
            Response::NetworkError(reason) => Err(DownloadError::NetworkError(reason)),
            Response::NotFound => Err(DownloadError::NotFound),
            Response::InvalidBody => Err(DownloadError::InvalidBody),

            Response::Ok(body) => {
                let file_path = self.path.join(entry.filename);

                fs::write(&file_path, &body)
                    .map_err(|err| DownloadError::SaveFailed(err.to_string()))?;

                Ok(Download::new(String::from(url), file_path, body))
            }
        }
    }

    /// Attempts every entry in declaration order, printing one line per
    /// entry. A failed entry is reported and the batch continues; one
    /// result per entry is returned in the same order.
    pub fn download_all(&self, entries: &[Entry]) -> Vec<Result<Download, DownloadError>> {
        entries
            .iter()
            .map(|entry| {
                let result = self.download(entry);

                match &result {
                    Ok(_) => println!("✓ Downloaded: {}", entry.filename),
                    Err(err) => println!("✗ Failed to download {}: {}", entry.filename, err),
                }

                result
            })
            .collect()
    }

    fn create_path_from_string(path_str: &str) -> std::io::Result<PathBuf> {
        let path = Path::new(path_str);

        let absolute_path = if path.is_absolute() {
            path.to_path_buf()
        } else {
            env::current_dir()?.join(path)
        };

        if !absolute_path.exists() {
            fs::create_dir_all(&absolute_path)?;
        }

        Ok(absolute_path)
    }
}

impl Downloader<UReqFetcher> {
    pub fn new(path: &str) -> Self {
        let fetcher = UReqFetcher::new();
        Downloader::with_fetcher(path, fetcher)
    }
}

#[cfg(test)]
use fetcher::MockFetcher;
