/// Failure of the page-fetch collaborator
#[derive(Debug, Clone, thiserror::Error)]
pub enum FetchError {
    #[error("Page not found: {0}")]
    NotFound(String),

    #[error("HTTP {status} for {url}")]
    Status { status: u16, url: String },

    #[error("Network error: {0}")]
    Network(String),
}

#[derive(Debug, thiserror::Error)]
pub enum LookupError {
    #[error("No usable entry for '{0}'")]
    NotFound(String),

    #[error(transparent)]
    Fetch(FetchError),

    /// Expected markers missing from a page section; scoped to that section
    #[error("Malformed page structure: {0}")]
    MalformedStructure(String),

    #[error("Entry for '{0}' has no valid item")]
    InvalidEntry(String),

    #[error("Rendered message is {size} units, limit is {limit}")]
    OversizeRender { size: usize, limit: usize },
}

impl From<FetchError> for LookupError {
    fn from(err: FetchError) -> Self {
        match err {
            FetchError::NotFound(url) => LookupError::NotFound(url),
            other => LookupError::Fetch(other),
        }
    }
}

impl LookupError {
    /// Whether a spelling-corrected retry can help
    pub fn is_retryable_with_correction(&self) -> bool {
        matches!(self, LookupError::NotFound(_) | LookupError::InvalidEntry(_))
    }
}
