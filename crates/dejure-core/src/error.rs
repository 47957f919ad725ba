use thiserror::Error;

#[derive(Debug, Error)]
pub enum DejureError {
    /// The fetch capability failed. The underlying error is kept as the source.
    #[error("transport error: {0}")]
    Transport(#[source] Box<dyn std::error::Error + Send + Sync>),

    #[error("statute code {code:?} matched {matches} entries, expected exactly one")]
    AmbiguousOrNotFound { code: String, matches: usize },

    #[error("search envelope is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

impl DejureError {
    pub(crate) fn transport<E>(err: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Transport(Box::new(err))
    }
}
