//! Query type for retrieval requests.

use serde::{Deserialize, Serialize};

/// A retrieval request: the question text plus search parameters.
///
/// # Examples
///
/// ```rust
/// use raglens_core::types::Query;
///
/// let query = Query::new("What are the key takeaways?").with_top_k(5);
/// assert_eq!(query.top_k, 5);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Query {
    /// The query text to search for.
    pub text: String,

    /// Number of chunks to return.
    pub top_k: usize,
}

/// Default number of chunks returned by a retrieval request.
pub const DEFAULT_TOP_K: usize = 5;

impl Query {
    /// Create a new query with the given text and the default `top_k`.
    pub fn new<S: Into<String>>(text: S) -> Self {
        Self {
            text: text.into(),
            top_k: DEFAULT_TOP_K,
        }
    }

    /// Set the number of chunks to return.
    #[must_use]
    pub fn with_top_k(mut self, top_k: usize) -> Self {
        self.top_k = top_k;
        self
    }
}
