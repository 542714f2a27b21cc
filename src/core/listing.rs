//! Directory listing: fetch, parse, filter, build cards.

use crate::core::error::{FetchError, ListingError};
use crate::core::sequence::RequestSequencer;
use crate::models::{DirectoryEntry, Listing, RepositoryConfig};
use crate::utils::fetch_text;

/// Where listing bodies come from.
///
/// The browser uses [`GitHubContents`]; tests script responses.
#[allow(async_fn_in_trait)]
pub trait ListingSource {
    /// Issue one GET and return the body of a successful response.
    async fn fetch(&self, url: &str) -> Result<String, FetchError>;
}

/// Unauthenticated reads of the GitHub contents API.
#[derive(Clone, Copy, Debug, Default)]
pub struct GitHubContents;

impl ListingSource for GitHubContents {
    async fn fetch(&self, url: &str) -> Result<String, FetchError> {
        fetch_text(url).await
    }
}

/// State of the content region.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ListingState {
    /// A listing read is in flight.
    Loading,
    /// The last read succeeded.
    Loaded(Listing),
    /// The last read failed; shows the diagnostic panel.
    Failed(ListingError),
}

/// Parse a contents API response body.
pub fn parse_entries(body: &str) -> Result<Vec<DirectoryEntry>, ListingError> {
    serde_json::from_str(body).map_err(|e| ListingError::MalformedListing(e.to_string()))
}

/// Read one directory of the configured repository.
///
/// Issues exactly one request when owner and name are set, none otherwise.
pub async fn load_listing<L: ListingSource>(
    source: &L,
    config: &RepositoryConfig,
    path: &str,
) -> Result<Listing, ListingError> {
    if !config.is_complete() {
        return Err(ListingError::IncompleteConfig);
    }

    let body = source.fetch(&config.listing_url(path)).await?;
    let entries = parse_entries(&body)?;

    Ok(Listing::build(config, path, entries))
}

/// Read one directory as the newest navigation.
///
/// Takes a ticket from `requests` before reading. Returns `None` when a later
/// navigation took a ticket while this read was in flight; the result is then
/// stale and must not be shown.
pub async fn load_if_current<L: ListingSource>(
    requests: &RequestSequencer,
    source: &L,
    config: &RepositoryConfig,
    path: &str,
) -> Option<Result<Listing, ListingError>> {
    let ticket = requests.issue();
    let result = load_listing(source, config, path).await;
    requests.is_current(ticket).then_some(result)
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::collections::VecDeque;

    use super::*;
    use crate::models::{CardKind, CardPreview};

    /// Replays canned responses and records requested URLs.
    #[derive(Default)]
    struct ScriptedSource {
        responses: RefCell<VecDeque<Result<String, FetchError>>>,
        requests: RefCell<Vec<String>>,
    }

    impl ScriptedSource {
        fn replying(response: Result<&str, FetchError>) -> Self {
            let source = Self::default();
            source
                .responses
                .borrow_mut()
                .push_back(response.map(str::to_string));
            source
        }

        fn requests(&self) -> Vec<String> {
            self.requests.borrow().clone()
        }
    }

    impl ListingSource for ScriptedSource {
        async fn fetch(&self, url: &str) -> Result<String, FetchError> {
            self.requests.borrow_mut().push(url.to_string());
            self.responses
                .borrow_mut()
                .pop_front()
                .unwrap_or(Err(FetchError::NetworkError("no response scripted".into())))
        }
    }

    /// Answers after yielding to the runtime `delay` times.
    struct DelayedSource {
        delay: usize,
        body: &'static str,
    }

    impl ListingSource for DelayedSource {
        async fn fetch(&self, _url: &str) -> Result<String, FetchError> {
            for _ in 0..self.delay {
                tokio::task::yield_now().await;
            }
            Ok(self.body.to_string())
        }
    }

    fn config() -> RepositoryConfig {
        RepositoryConfig {
            owner: "alice".to_string(),
            name: "notes".to_string(),
            ..Default::default()
        }
    }

    const PHOTO_AND_README: &str = r#"[
        {"name": "photo.png", "type": "file", "path": "photo.png"},
        {"name": "README.md", "type": "file", "path": "README.md"}
    ]"#;

    #[tokio::test]
    async fn test_root_issues_one_read_to_root_url() {
        let source = ScriptedSource::replying(Ok("[]"));
        let listing = load_listing(&source, &config(), "").await.unwrap();

        assert_eq!(
            source.requests(),
            ["https://api.github.com/repos/alice/notes/contents/"]
        );
        assert!(listing.is_root());
        assert!(listing.cards.is_empty());
    }

    #[tokio::test]
    async fn test_excluded_readme_leaves_one_image_card() {
        let source = ScriptedSource::replying(Ok(PHOTO_AND_README));
        let listing = load_listing(&source, &config(), "").await.unwrap();

        assert_eq!(listing.cards.len(), 1);
        let card = &listing.cards[0];
        assert_eq!(card.name, "photo.png");
        let CardKind::File(file) = &card.kind else {
            panic!("expected a file card");
        };
        assert_eq!(
            file.preview,
            CardPreview::Image {
                url: "https://alice.github.io/notes/photo.png".to_string()
            }
        );
    }

    #[tokio::test]
    async fn test_subdirectory_url_and_path() {
        let body = r#"[{"name": "a.pdf", "type": "file", "path": "papers/a.pdf"}]"#;
        let source = ScriptedSource::replying(Ok(body));
        let listing = load_listing(&source, &config(), "papers").await.unwrap();

        assert_eq!(
            source.requests(),
            ["https://api.github.com/repos/alice/notes/contents/papers"]
        );
        assert_eq!(listing.path, "papers");
        assert_eq!(listing.cards[0].badge(), "PDF");
    }

    #[tokio::test]
    async fn test_http_failure_is_repository_not_found() {
        let source = ScriptedSource::replying(Err(FetchError::HttpError(404)));
        let err = load_listing(&source, &config(), "").await.unwrap_err();
        assert_eq!(err, ListingError::RepositoryNotFound(FetchError::HttpError(404)));
    }

    #[tokio::test]
    async fn test_non_array_body_is_malformed() {
        let source = ScriptedSource::replying(Ok(r#"{"message": "Not Found"}"#));
        let err = load_listing(&source, &config(), "").await.unwrap_err();
        assert!(matches!(err, ListingError::MalformedListing(_)));
    }

    #[tokio::test]
    async fn test_incomplete_config_issues_no_request() {
        let source = ScriptedSource::default();
        let mut c = config();
        c.name.clear();

        let err = load_listing(&source, &c, "").await.unwrap_err();

        assert_eq!(err, ListingError::IncompleteConfig);
        assert!(source.requests().is_empty());
    }

    #[tokio::test]
    async fn test_slow_earlier_read_is_discarded() {
        let requests = RequestSequencer::default();
        let slow = DelayedSource {
            delay: 8,
            body: r#"[{"name": "old.png", "type": "file", "path": "a/old.png"}]"#,
        };
        let fast = DelayedSource {
            delay: 0,
            body: r#"[{"name": "new.png", "type": "file", "path": "b/new.png"}]"#,
        };
        let config = config();

        let (older, newer) = tokio::join!(
            load_if_current(&requests, &slow, &config, "a"),
            load_if_current(&requests, &fast, &config, "b"),
        );

        assert!(older.is_none());
        let listing = newer.expect("newest read applies").unwrap();
        assert_eq!(listing.path, "b");
        assert_eq!(listing.cards[0].name, "new.png");
    }

    #[tokio::test]
    async fn test_sole_read_applies() {
        let requests = RequestSequencer::default();
        let source = ScriptedSource::replying(Ok("[]"));

        let result = load_if_current(&requests, &source, &config(), "").await;

        assert!(matches!(result, Some(Ok(_))));
    }
}
