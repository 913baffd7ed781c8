//! Remote API boundary: the `ApiClient` trait and its HTTP implementation.
//!
//! The controller only ever sees the trait, so tests run against the mock
//! client and the binary runs against `HttpApiClient`. Both operations are
//! single-attempt: no retry, no cancellation of an in-flight request.
//!
//! # Example
//!
//! ```ignore
//! use translate_form::{ApiClient, HttpApiClient, FormSnapshot};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = HttpApiClient::new("http://127.0.0.1:5000")?;
//!     let form = FormSnapshot {
//!         source_language: "auto".to_string(),
//!         target_language: "fr".to_string(),
//!         text_to_translate: "Hello".to_string(),
//!         translated_text: String::new(),
//!     };
//!     let detected = client.detect_language(&form).await?;
//!     let translated = client.translate(&detected).await?;
//!     println!("{}", translated);
//!     Ok(())
//! }
//! ```

use async_trait::async_trait;
use serde::Deserialize;
use tracing::debug;

use crate::error::{ApiError, ApiResult, ErrorSet};
use crate::snapshot::FormSnapshot;

/// API route constants.
pub mod routes {
    /// Language detection endpoint.
    pub const DETECT_LANGUAGE: &str = "/api/detect-language";
    /// Translation endpoint.
    pub const TRANSLATE: &str = "/api/translate";
    /// File upload endpoint. Referenced for completeness; the submission
    /// controller never calls it.
    pub const FILE_UPLOAD: &str = "/api/file-upload";
}

/// Remote operations the submission controller depends on.
///
/// Both calls post the form snapshot and reject with a typed
/// [`ApiError::Rejected`] carrying the server's field-to-message error
/// object on any non-success response.
#[async_trait]
pub trait ApiClient: Send + Sync {
    /// Ask the server to detect the source language of the snapshot's text.
    ///
    /// Resolves with an updated snapshot: the server may fill in the
    /// detected source language and echoes (possibly normalized) text.
    async fn detect_language(&self, form: &FormSnapshot) -> ApiResult<FormSnapshot>;

    /// Translate the snapshot's text into its target language.
    async fn translate(&self, form: &FormSnapshot) -> ApiResult<String>;
}

/// Success body of the translate endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct TranslateResponse {
    pub translated_text: String,
}

/// `ApiClient` over HTTP, posting form-encoded snapshots to a base URL.
#[derive(Debug, Clone)]
pub struct HttpApiClient {
    client: reqwest::Client,
    base_url: String,
}

impl HttpApiClient {
    /// Per-request timeout. A request that exceeds it reports a network
    /// error like any other transport failure.
    const REQUEST_TIMEOUT: std::time::Duration = std::time::Duration::from_secs(30);

    /// Create a client for the API served at `base_url` (scheme + host,
    /// no trailing slash).
    pub fn new(base_url: impl Into<String>) -> ApiResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(Self::REQUEST_TIMEOUT)
            .build()
            .map_err(|e| ApiError::Network(format!("failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    async fn post_form<T: serde::de::DeserializeOwned>(
        &self,
        route: &str,
        form: &FormSnapshot,
    ) -> ApiResult<T> {
        let url = format!("{}{}", self.base_url, route);
        debug!(%url, "posting form");

        let response = self.client.post(&url).form(form).send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(rejection(route, status, &body));
        }

        response
            .json::<T>()
            .await
            .map_err(|e| ApiError::InvalidResponse(format!("{}: {}", route, e)))
    }
}

/// Decode a non-success response body into a rejection.
///
/// The API reports errors as a JSON object usable as an error set; anything
/// else (HTML error page, empty body) degrades to a one-entry set keyed by
/// the route so the UI still has something to render.
fn rejection(route: &str, status: reqwest::StatusCode, body: &str) -> ApiError {
    match serde_json::from_str::<ErrorSet>(body) {
        Ok(errors) if !errors.is_empty() => ApiError::Rejected(errors),
        _ => {
            let mut errors = ErrorSet::new();
            errors.insert(route, format!("request failed with status {}", status));
            ApiError::Rejected(errors)
        }
    }
}

#[async_trait]
impl ApiClient for HttpApiClient {
    async fn detect_language(&self, form: &FormSnapshot) -> ApiResult<FormSnapshot> {
        self.post_form(routes::DETECT_LANGUAGE, form).await
    }

    async fn translate(&self, form: &FormSnapshot) -> ApiResult<String> {
        let response: TranslateResponse = self.post_form(routes::TRANSLATE, form).await?;
        Ok(response.translated_text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_trims_trailing_slash() {
        let client = HttpApiClient::new("http://localhost:5000/").unwrap();
        assert_eq!(client.base_url, "http://localhost:5000");
    }

    #[test]
    fn test_route_constants() {
        assert_eq!(routes::DETECT_LANGUAGE, "/api/detect-language");
        assert_eq!(routes::TRANSLATE, "/api/translate");
        assert_eq!(routes::FILE_UPLOAD, "/api/file-upload");
    }

    #[test]
    fn test_rejection_decodes_error_object() {
        let error = rejection(
            routes::TRANSLATE,
            reqwest::StatusCode::BAD_REQUEST,
            r#"{"target-language": "Unsupported language pair"}"#,
        );
        match error {
            ApiError::Rejected(errors) => {
                assert_eq!(
                    errors.get("target-language"),
                    Some("Unsupported language pair")
                );
            }
            other => panic!("expected Rejected, got {:?}", other),
        }
    }

    #[test]
    fn test_rejection_falls_back_for_non_json_body() {
        let error = rejection(
            routes::DETECT_LANGUAGE,
            reqwest::StatusCode::INTERNAL_SERVER_ERROR,
            "<html>Internal Server Error</html>",
        );
        match error {
            ApiError::Rejected(errors) => {
                assert_eq!(errors.len(), 1);
                assert!(
                    errors
                        .get(routes::DETECT_LANGUAGE)
                        .is_some_and(|m| m.contains("500"))
                );
            }
            other => panic!("expected Rejected, got {:?}", other),
        }
    }

    #[test]
    fn test_rejection_falls_back_for_empty_error_object() {
        let error = rejection(routes::TRANSLATE, reqwest::StatusCode::BAD_GATEWAY, "{}");
        match error {
            ApiError::Rejected(errors) => assert_eq!(errors.len(), 1),
            other => panic!("expected Rejected, got {:?}", other),
        }
    }

    #[test]
    fn test_translate_response_decoding() {
        let response: TranslateResponse =
            serde_json::from_str(r#"{"translated_text": "Bonjour"}"#).unwrap();
        assert_eq!(response.translated_text, "Bonjour");
    }

    // Integration test against a running API server.
    #[tokio::test]
    #[ignore] // Run with: cargo test --ignored
    async fn test_real_api_detect_and_translate() {
        let base_url = match std::env::var("TRANSLATE_API_URL") {
            Ok(url) => url,
            Err(_) => {
                eprintln!("Skipping: TRANSLATE_API_URL not set");
                return;
            }
        };

        let client = HttpApiClient::new(base_url).unwrap();
        let form = FormSnapshot {
            source_language: "auto".to_string(),
            target_language: "fr".to_string(),
            text_to_translate: "Hello".to_string(),
            translated_text: String::new(),
        };

        let detected = client.detect_language(&form).await.unwrap();
        assert!(!detected.text_to_translate.is_empty());

        let translated = client.translate(&detected).await.unwrap();
        println!("Translation: {} → {}", form.text_to_translate, translated);
        assert!(!translated.is_empty());
    }
}
