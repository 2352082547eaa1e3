//! Illustration fetching.
//!
//! Illustrations come from an [`IllustrationSource`]. Fetches run through a
//! bounded stream that keeps results in slide order, and any failure only
//! costs that slide its picture.
use crate::common::{Error, Result};
use crate::deck::Illustration;
use async_trait::async_trait;
use bytes::Bytes;
use futures::stream::{self, StreamExt};
use std::path::{Path, PathBuf};

use super::outline::IllustrationRequest;

/// Something that can produce image bytes for a slide.
///
/// `Ok(None)` means the source had nothing for this request.
#[async_trait]
pub trait IllustrationSource: Send + Sync {
    async fn fetch(&self, request: &IllustrationRequest) -> Result<Option<Bytes>>;
}

/// Fetch every request with at most `workers` fetches in flight.
///
/// The returned vector has `len` entries indexed by slide; slides without a
/// request, and requests that fail or return unusable bytes, are `None`.
/// A `workers` of zero is treated as one.
pub async fn fetch_illustrations<S>(
    source: &S,
    requests: &[IllustrationRequest],
    len: usize,
    workers: usize,
) -> Vec<Option<Illustration>>
where
    S: IllustrationSource + ?Sized,
{
    let workers = workers.max(1);
    tracing::debug!(requests = requests.len(), workers, "fetching illustrations");

    let fetched: Vec<(usize, Option<Illustration>)> = stream::iter(requests)
        .map(|request| async move { (request.index, fetch_one(source, request).await) })
        .buffered(workers)
        .collect()
        .await;

    let mut illustrations = vec![None; len];
    for (index, illustration) in fetched {
        if let Some(slot) = illustrations.get_mut(index) {
            *slot = illustration;
        }
    }

    let found = illustrations.iter().filter(|i| i.is_some()).count();
    tracing::info!(found, requested = requests.len(), "illustrations ready");
    illustrations
}

async fn fetch_one<S>(source: &S, request: &IllustrationRequest) -> Option<Illustration>
where
    S: IllustrationSource + ?Sized,
{
    let bytes = match source.fetch(request).await {
        Ok(Some(bytes)) => bytes,
        Ok(None) => {
            tracing::warn!(slide = request.index, "no illustration returned");
            return None;
        },
        Err(err) => {
            tracing::warn!(slide = request.index, error = %err, "illustration fetch failed");
            return None;
        },
    };

    match Illustration::from_bytes(bytes) {
        Ok(illustration) => Some(illustration),
        Err(err) => {
            tracing::warn!(slide = request.index, error = %err, "illustration is not a usable image");
            None
        },
    }
}

/// Reads illustrations from `slide-<n>.<ext>` files in a directory.
///
/// `n` is the one-based slide number; the first existing extension of
/// [`DirectorySource::EXTENSIONS`] wins.
#[derive(Debug, Clone)]
pub struct DirectorySource {
    dir: PathBuf,
}

impl DirectorySource {
    pub const EXTENSIONS: [&'static str; 5] = ["png", "jpg", "jpeg", "gif", "bmp"];

    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn candidates(&self, index: usize) -> impl Iterator<Item = PathBuf> + '_ {
        Self::EXTENSIONS
            .iter()
            .map(move |ext| self.dir.join(format!("slide-{}.{ext}", index + 1)))
    }
}

#[async_trait]
impl IllustrationSource for DirectorySource {
    async fn fetch(&self, request: &IllustrationRequest) -> Result<Option<Bytes>> {
        for path in self.candidates(request.index) {
            match tokio::fs::read(&path).await {
                Ok(data) => {
                    tracing::debug!(slide = request.index, path = %path.display(), "illustration found");
                    return Ok(Some(Bytes::from(data)));
                },
                Err(err) if err.kind() == std::io::ErrorKind::NotFound => continue,
                Err(err) => {
                    return Err(Error::Fetch(format!("{}: {err}", path.display())));
                },
            }
        }
        Ok(None)
    }
}
