//! Source documents and retrieved chunks.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use uuid::Uuid;

/// A document produced by a loader, before chunking.
///
/// Loaders turn a URL (web page, video transcript) into one or more
/// documents carrying the raw text plus provenance metadata. Chunking the
/// documents into retrieval-sized pieces is an external concern.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SourceDocument {
    /// Raw text content of the document.
    pub content: String,

    /// Provenance metadata (source URL, title, loader name, etc.)
    pub metadata: HashMap<String, serde_json::Value>,
}

impl SourceDocument {
    /// Create a new source document with the given content.
    pub fn new<S: Into<String>>(content: S) -> Self {
        Self {
            content: content.into(),
            metadata: HashMap::new(),
        }
    }

    /// Add a metadata entry.
    #[must_use]
    pub fn with_metadata<K, V>(mut self, key: K, value: V) -> Self
    where
        K: Into<String>,
        V: Into<serde_json::Value>,
    {
        self.metadata.insert(key.into(), value.into());
        self
    }
}

/// A retrieval-sized unit of source text plus provenance metadata.
///
/// Chunks are immutable once produced by retrieval. A run orchestrator owns
/// the chunk list for the duration of one run; the citation attributor only
/// borrows it. Citation indices reference *positions* in this list, not
/// distinct content: two chunks with identical text are scored
/// independently.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RetrievedChunk {
    /// Unique identifier for the chunk.
    pub id: Uuid,

    /// Text content of the chunk.
    pub content: String,

    /// Originating URL, when known.
    pub source: Option<String>,

    /// Position of the chunk in the retrieval output (0-based).
    pub position: usize,

    /// Additional provenance metadata.
    pub metadata: HashMap<String, serde_json::Value>,
}

impl RetrievedChunk {
    /// Create a new chunk with the given content and position.
    pub fn new<S: Into<String>>(content: S, position: usize) -> Self {
        Self {
            id: Uuid::new_v4(),
            content: content.into(),
            source: None,
            position,
            metadata: HashMap::new(),
        }
    }

    /// Set the originating URL.
    #[must_use]
    pub fn with_source<S: Into<String>>(mut self, source: S) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Add a metadata entry.
    #[must_use]
    pub fn with_metadata<K, V>(mut self, key: K, value: V) -> Self
    where
        K: Into<String>,
        V: Into<serde_json::Value>,
    {
        self.metadata.insert(key.into(), value.into());
        self
    }

    /// Number of whitespace-separated words in the chunk content.
    #[must_use]
    pub fn word_count(&self) -> usize {
        self.content.split_whitespace().count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chunk_builder() {
        let chunk = RetrievedChunk::new("Paris is the capital of France.", 2)
            .with_source("https://example.com/paris")
            .with_metadata("loader", "web");

        assert_eq!(chunk.position, 2);
        assert_eq!(chunk.source.as_deref(), Some("https://example.com/paris"));
        assert_eq!(
            chunk.metadata.get("loader"),
            Some(&serde_json::Value::String("web".to_string()))
        );
        assert_eq!(chunk.word_count(), 6);
    }

    #[test]
    fn test_identical_content_distinct_chunks() {
        let a = RetrievedChunk::new("same text", 0);
        let b = RetrievedChunk::new("same text", 1);
        assert_ne!(a.id, b.id);
        assert_ne!(a.position, b.position);
        assert_eq!(a.content, b.content);
    }

    #[test]
    fn test_source_document_metadata() {
        let doc = SourceDocument::new("Title: ...").with_metadata("source", "youtube_description");
        assert_eq!(
            doc.metadata.get("source"),
            Some(&serde_json::Value::String("youtube_description".to_string()))
        );
    }
}
