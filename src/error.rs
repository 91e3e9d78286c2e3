use thiserror::Error;

/// Failure of a station lookup request
#[derive(Debug, Error)]
pub enum LookupError {
    #[error("invalid lookup url: {0}")]
    Url(String),

    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("lookup returned status {0}")]
    Status(u16),
}

/// Failure to read the seat or diagram tables embedded in the page
#[derive(Debug, Error)]
pub enum PageDataError {
    #[error("page global `{0}` is not defined")]
    Missing(&'static str),

    #[error("page global `{name}` could not be serialized: {reason}")]
    Unserializable { name: &'static str, reason: String },

    #[error("page global `{name}` has an unexpected shape: {source}")]
    Shape {
        name: &'static str,
        #[source]
        source: serde_json::Error,
    },
}
