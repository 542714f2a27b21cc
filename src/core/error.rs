//! Custom error types for the application.
//!
//! Provides structured error handling with meaningful error messages
//! and proper error categorization for each domain:
//!
//! - [`FetchError`] - Network/fetch-related errors for HTTP requests
//! - [`ListingError`] - Directory listing failures (one user-facing panel)
//! - [`StorageError`] - localStorage persistence errors
//! - [`PreviewError`] - Document preview rendering errors (scoped to a card)

use thiserror::Error;

/// Network/fetch-related errors for HTTP requests.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// Browser window not available
    #[error("Browser window not available")]
    NoWindow,
    /// Failed to create HTTP request
    #[error("Failed to create request")]
    RequestCreationFailed,
    /// Network request failed (CORS, offline, DNS, ...)
    #[error("Network error: {0}")]
    NetworkError(String),
    /// HTTP error response (non-2xx status)
    #[error("HTTP error: {0}")]
    HttpError(u16),
    /// Failed to read response body
    #[error("Failed to read response")]
    ResponseReadFailed,
    /// Invalid response content (not text)
    #[error("Invalid response content")]
    InvalidContent,
}

/// Directory listing errors.
///
/// Every variant renders the same diagnostic panel; the split only exists
/// for logging.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ListingError {
    /// Owner or name is empty; no request was issued.
    #[error("Repository owner and name must be set")]
    IncompleteConfig,
    /// Transport failure or non-success status.
    #[error("Repository not found: {0}")]
    RepositoryNotFound(#[from] FetchError),
    /// Response body was not a directory listing.
    #[error("Malformed listing: {0}")]
    MalformedListing(String),
}

/// localStorage persistence errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    /// localStorage not available.
    #[error("localStorage not available")]
    Unavailable,
    /// Failed to serialize value to JSON.
    #[error("failed to serialize value: {0}")]
    Serialize(String),
    /// Failed to write to localStorage.
    #[error("failed to save to localStorage")]
    WriteFailed,
}

/// Document preview errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PreviewError {
    /// The pdf.js global is not loaded on the page.
    #[error("pdf.js is not loaded")]
    LibraryMissing,
    /// A pdf.js call failed or returned something unexpected.
    #[error("pdf.js error: {0}")]
    Js(String),
    /// The canvas could not provide a 2D context.
    #[error("canvas 2d context unavailable")]
    NoCanvasContext,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fetch_error_converts_to_not_found() {
        let err: ListingError = FetchError::HttpError(404).into();
        assert_eq!(err, ListingError::RepositoryNotFound(FetchError::HttpError(404)));
        assert_eq!(err.to_string(), "Repository not found: HTTP error: 404");
    }
}
