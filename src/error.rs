use thiserror::Error;

#[derive(Error, Debug)]
pub enum PokedexError {
    /// The catalog has no resource for the given identifier. Covers bad
    /// names/IDs, IDs outside `[1, MAX_POKEMON_ID]`, and dangling references
    /// embedded in fetched documents.
    #[error("not found in catalog: {0}")]
    NotFound(String),

    /// Transport-level failure (DNS, connect, timeout). Never retried.
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The catalog answered 2xx but the body did not match the expected shape.
    #[error("malformed response from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },
}

pub type Result<T> = std::result::Result<T, PokedexError>;

impl PokedexError {
    /// True when the failure means "this identifier resolves to nothing",
    /// as opposed to a transport or decoding problem.
    pub fn is_not_found(&self) -> bool {
        matches!(self, PokedexError::NotFound(_))
    }
}
