//! Document loading trait and the primary/fallback composition.

use async_trait::async_trait;
use std::sync::Arc;
use tracing::warn;

use crate::types::SourceDocument;
use crate::{RaglensError, Result};

/// Loads source documents from a URL.
///
/// Loaders are external collaborators (web page extraction, video
/// transcript download); the core only depends on the document sequence
/// they produce.
#[async_trait]
pub trait Loader: Send + Sync + std::fmt::Debug {
    /// Load documents from the given URL.
    ///
    /// # Errors
    ///
    /// Returns a loader error when the source cannot be fetched or parsed.
    async fn load(&self, url: &str) -> Result<Vec<SourceDocument>>;

    /// Human-readable name for this loader.
    fn name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }
}

/// A two-stage loader: try the primary strategy, fall back on failure.
///
/// The fallback is an explicit second stage driven by the primary's typed
/// failure, not a catch-all. Only the primary's failure triggers the
/// fallback; the fallback's own failure propagates to the caller.
#[derive(Debug)]
pub struct FallbackLoader {
    primary: Arc<dyn Loader>,
    fallback: Arc<dyn Loader>,
}

impl FallbackLoader {
    /// Create a new fallback loader.
    pub fn new(primary: Arc<dyn Loader>, fallback: Arc<dyn Loader>) -> Self {
        Self { primary, fallback }
    }
}

#[async_trait]
impl Loader for FallbackLoader {
    async fn load(&self, url: &str) -> Result<Vec<SourceDocument>> {
        if url.trim().is_empty() {
            return Err(RaglensError::validation("URL must not be empty"));
        }

        match self.primary.load(url).await {
            Ok(documents) => Ok(documents),
            Err(err) => {
                warn!(
                    loader = self.primary.name(),
                    error = %err,
                    "primary loader failed, trying fallback"
                );
                self.fallback.load(url).await
            }
        }
    }

    fn name(&self) -> &'static str {
        "FallbackLoader"
    }
}
