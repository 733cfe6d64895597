use thiserror::Error;

/// Per-URL extraction failures.
///
/// None of these abort a batch: the extractor logs them and still emits a
/// record for the URL. `Selector` is the exception and only happens at startup.
#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("ASIN not found in URL {url}: no `dp` path segment")]
    MissingIdentifierMarker { url: String },

    #[error("ASIN not found in URL {url}: nothing after the `dp` segment")]
    MissingIdentifier { url: String },

    #[error("product name not found in URL {url}: nothing before the `dp` segment")]
    MissingProductName { url: String },

    #[error("error fetching URL {url}: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("error fetching URL {url}: HTTP status {status}")]
    HttpStatus { url: String, status: u16 },

    #[error("invalid selector `{selector}`: {reason}")]
    Selector { selector: String, reason: String },
}
