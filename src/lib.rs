mod catalog;
mod downloader;

pub use catalog::{Entry, BREED_IMAGES};
pub use downloader::{Download, DownloadError, Downloader, ImageFetcher, Response};
