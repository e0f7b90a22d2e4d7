//! High-level Futurama API client
//!
//! Read-only access to the characters collection.

use crate::config::ApiConfig;
use crate::error::FuturamaError;
use crate::types::{Character, CharactersPage};
use reqwest::Url;
use std::time::Duration;

/// Public API host
pub const DEFAULT_BASE_URL: &str = "https://futuramaapi.com";

/// Characters collection, relative to the base URL
pub const CHARACTERS_PATH: &str = "api/characters";

/// Bounded wait for a single request
pub const REQUEST_TIMEOUT: Duration = Duration::from_millis(8000);

/// Longest response body excerpt kept in a [`FuturamaError::Status`]
const MAX_ERROR_BODY: usize = 512;

/// Sort direction for list queries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OrderDirection {
    #[default]
    Asc,
    Desc,
}

impl OrderDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderDirection::Asc => "asc",
            OrderDirection::Desc => "desc",
        }
    }
}

/// Query parameters for the characters collection
///
/// The default is the first page of 50, ordered by id ascending.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CharactersQuery {
    pub order_by: &'static str,
    pub direction: OrderDirection,
    pub page: u32,
    pub size: u32,
}

impl Default for CharactersQuery {
    fn default() -> Self {
        Self {
            order_by: "id",
            direction: OrderDirection::Asc,
            page: 1,
            size: 50,
        }
    }
}

impl CharactersQuery {
    /// Query string pairs in the order the API documents them
    pub fn params(&self) -> [(&'static str, String); 4] {
        [
            ("orderBy", self.order_by.to_string()),
            ("orderByDirection", self.direction.as_str().to_string()),
            ("page", self.page.to_string()),
            ("size", self.size.to_string()),
        ]
    }
}

/// High-level client for the Futurama API
#[derive(Debug, Clone)]
pub struct FuturamaClient {
    http: reqwest::Client,
    base_url: Url,
    timeout: Duration,
}

impl FuturamaClient {
    /// Create a client for the public API
    pub fn new() -> Result<Self, FuturamaError> {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    /// Create a client from a loaded config
    pub fn from_config(config: &ApiConfig) -> Result<Self, FuturamaError> {
        Self::with_base_url(config.base_url())
    }

    /// Create a client against a specific host (mirrors, local mocks)
    pub fn with_base_url(base_url: &str) -> Result<Self, FuturamaError> {
        // Without a trailing slash `Url::join` would drop the last path segment
        let normalized = if base_url.ends_with('/') {
            base_url.to_string()
        } else {
            format!("{}/", base_url)
        };
        let base_url = Url::parse(&normalized).map_err(|e| FuturamaError::InvalidUrl {
            url: base_url.to_string(),
            reason: e.to_string(),
        })?;

        Ok(Self {
            http: reqwest::Client::new(),
            base_url,
            timeout: REQUEST_TIMEOUT,
        })
    }

    /// Return a copy of this client with a different request timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Full URL of the characters collection
    pub fn characters_url(&self) -> Result<Url, FuturamaError> {
        self.base_url
            .join(CHARACTERS_PATH)
            .map_err(|e| FuturamaError::InvalidUrl {
                url: format!("{}{}", self.base_url, CHARACTERS_PATH),
                reason: e.to_string(),
            })
    }

    /// Fetch one page of characters, in server order
    pub async fn characters(&self, query: &CharactersQuery) -> Result<Vec<Character>, FuturamaError> {
        Ok(self.characters_page(query).await?.items)
    }

    /// Fetch one page of characters including the paging envelope
    pub async fn characters_page(
        &self,
        query: &CharactersQuery,
    ) -> Result<CharactersPage, FuturamaError> {
        let url = self.characters_url()?;
        tracing::debug!("GET {} page={} size={}", url, query.page, query.size);

        let response = self
            .http
            .get(url)
            .query(&query.params())
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| FuturamaError::from_request(e, self.timeout))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| FuturamaError::from_request(e, self.timeout))?;

        if !status.is_success() {
            return Err(FuturamaError::Status {
                status: status.as_u16(),
                body: excerpt(&body),
            });
        }

        serde_json::from_str(&body).map_err(|e| FuturamaError::Decode(e.to_string()))
    }

    /// Check that an image URL is reachable
    ///
    /// Issues a HEAD request with the client timeout. Any failure, including
    /// a non-2xx status, is returned as an error.
    pub async fn probe_image(&self, image_url: &str) -> Result<(), FuturamaError> {
        let url = Url::parse(image_url).map_err(|e| FuturamaError::InvalidUrl {
            url: image_url.to_string(),
            reason: e.to_string(),
        })?;

        let response = self
            .http
            .head(url)
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| FuturamaError::from_request(e, self.timeout))?;

        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            Err(FuturamaError::Status {
                status: status.as_u16(),
                body: String::new(),
            })
        }
    }
}

fn excerpt(body: &str) -> String {
    if body.len() <= MAX_ERROR_BODY {
        body.to_string()
    } else {
        let cut: String = body.chars().take(MAX_ERROR_BODY).collect();
        format!("{}...", cut)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::CharacterStatus;
    use httpmock::Method::HEAD;
    use httpmock::prelude::*;
    use serde_json::json;

    fn character_json(id: i64, status: &str, image: &str) -> serde_json::Value {
        json!({
            "id": id,
            "name": format!("Character {}", id),
            "gender": "MALE",
            "status": status,
            "species": "HUMAN",
            "createdAt": "2023-12-31T14:01:17.617828Z",
            "image": image,
        })
    }

    #[test]
    fn test_default_query_params() {
        let params = CharactersQuery::default().params();
        assert_eq!(
            params,
            [
                ("orderBy", "id".to_string()),
                ("orderByDirection", "asc".to_string()),
                ("page", "1".to_string()),
                ("size", "50".to_string()),
            ]
        );
    }

    #[test]
    fn test_characters_url() {
        let client = FuturamaClient::new().unwrap();
        assert_eq!(
            client.characters_url().unwrap().as_str(),
            "https://futuramaapi.com/api/characters"
        );
        assert_eq!(client.timeout(), Duration::from_millis(8000));

        let client = FuturamaClient::with_base_url("http://localhost:8080/mirror").unwrap();
        assert_eq!(
            client.characters_url().unwrap().as_str(),
            "http://localhost:8080/mirror/api/characters"
        );
    }

    #[test]
    fn test_invalid_base_url() {
        let err = FuturamaClient::with_base_url("not a url").unwrap_err();
        assert!(matches!(err, FuturamaError::InvalidUrl { .. }));
    }

    #[tokio::test]
    async fn fetches_characters_in_server_order() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(GET)
                .path("/api/characters")
                .query_param("orderBy", "id")
                .query_param("orderByDirection", "asc")
                .query_param("page", "1")
                .query_param("size", "50");
            then.status(200).json_body(json!({
                "items": [
                    character_json(3, "DEAD", ""),
                    character_json(1, "ALIVE", "https://x/y.png"),
                ],
                "total": 2,
                "page": 1,
                "size": 50,
                "pages": 1
            }));
        });

        let client = FuturamaClient::with_base_url(&server.base_url()).unwrap();
        let characters = client
            .characters(&CharactersQuery::default())
            .await
            .expect("success");

        mock.assert();
        assert_eq!(characters.len(), 2);
        // No client-side sorting
        assert_eq!(characters[0].id, 3);
        assert_eq!(characters[0].status, CharacterStatus::Dead);
        assert_eq!(characters[1].image, "https://x/y.png");
    }

    #[tokio::test]
    async fn maps_non_success_status() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/api/characters");
            then.status(503).body("maintenance");
        });

        let client = FuturamaClient::with_base_url(&server.base_url()).unwrap();
        let err = client
            .characters(&CharactersQuery::default())
            .await
            .expect_err("expected status error");
        match err {
            FuturamaError::Status { status, body } => {
                assert_eq!(status, 503);
                assert_eq!(body, "maintenance");
            }
            other => panic!("unexpected error variant {other:?}"),
        }
    }

    #[tokio::test]
    async fn maps_malformed_body() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/api/characters");
            then.status(200).body("{\"results\": []}");
        });

        let client = FuturamaClient::with_base_url(&server.base_url()).unwrap();
        let err = client
            .characters(&CharactersQuery::default())
            .await
            .expect_err("expected decode error");
        assert!(matches!(err, FuturamaError::Decode(_)), "got {err:?}");
    }

    #[tokio::test]
    async fn maps_slow_response_to_timeout() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/api/characters");
            then.status(200)
                .delay(Duration::from_millis(1500))
                .json_body(json!({ "items": [] }));
        });

        let client = FuturamaClient::with_base_url(&server.base_url())
            .unwrap()
            .with_timeout(Duration::from_millis(200));
        let err = client
            .characters(&CharactersQuery::default())
            .await
            .expect_err("expected timeout");
        match err {
            FuturamaError::Timeout(after) => assert_eq!(after, Duration::from_millis(200)),
            other => panic!("unexpected error variant {other:?}"),
        }
    }

    #[tokio::test]
    async fn probes_image_reachability() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(HEAD).path("/ok.png");
            then.status(200);
        });
        server.mock(|when, then| {
            when.method(HEAD).path("/missing.png");
            then.status(404);
        });

        let client = FuturamaClient::with_base_url(&server.base_url()).unwrap();
        assert!(client.probe_image(&server.url("/ok.png")).await.is_ok());
        assert!(matches!(
            client.probe_image(&server.url("/missing.png")).await,
            Err(FuturamaError::Status { status: 404, .. })
        ));
        assert!(matches!(
            client.probe_image("/futurama-logo.png").await,
            Err(FuturamaError::InvalidUrl { .. })
        ));
    }

    #[test]
    fn test_excerpt_truncates_long_bodies() {
        let long = "x".repeat(MAX_ERROR_BODY + 10);
        let cut = excerpt(&long);
        assert_eq!(cut.len(), MAX_ERROR_BODY + 3);
        assert!(cut.ends_with("..."));
        assert_eq!(excerpt("short"), "short");
    }
}
