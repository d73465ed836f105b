use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use tokio_util::sync::CancellationToken;

use super::models::OmdbSearchResponse;
use crate::modules::movie::application::ports::{CatalogSearch, CatalogSearchResult};
use crate::shared::application::run_cancellable;
use crate::shared::errors::{AppError, AppResult};
use crate::shared::utils::logger::{LogContext, TimedOperation};
use crate::{log_debug, log_warn};

const PROVIDER: &str = "OMDb";
const USER_AGENT: &str = concat!("cinedex/", env!("CARGO_PKG_VERSION"));
const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

/// OMDb (Open Movie Database) search adapter
///
/// One request per search, first page only, no retries.
pub struct OmdbClient {
    http_client: Client,
    base_url: String,
    api_key: String,
}

impl OmdbClient {
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> AppResult<Self> {
        let http_client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        Ok(Self::with_client(http_client, base_url, api_key))
    }

    /// Create adapter with custom HTTP client (for testing)
    pub fn with_client(
        http_client: Client,
        base_url: impl Into<String>,
        api_key: impl Into<String>,
    ) -> Self {
        Self {
            http_client,
            base_url: base_url.into(),
            api_key: api_key.into(),
        }
    }

    /// Build URL with API key and additional query parameters
    fn build_url(&self, params: &[(&str, &str)]) -> String {
        let mut url = format!(
            "{}?apikey={}",
            self.base_url,
            urlencoding::encode(&self.api_key)
        );
        for (key, value) in params {
            url.push_str(&format!("&{}={}", key, urlencoding::encode(value)));
        }
        url
    }

    async fn fetch_search(&self, term: &str) -> AppResult<OmdbSearchResponse> {
        let url = self.build_url(&[("s", term), ("type", "movie")]);

        let response = self.http_client.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(AppError::ApiError(format!(
                "{} search returned HTTP {}",
                PROVIDER, status
            )));
        }

        Ok(response.json::<OmdbSearchResponse>().await?)
    }
}

#[async_trait]
impl CatalogSearch for OmdbClient {
    async fn search_movies(
        &self,
        term: &str,
        cancel: &CancellationToken,
    ) -> AppResult<Vec<CatalogSearchResult>> {
        LogContext::api_call(PROVIDER, "search", "starting", None);
        let timer = TimedOperation::new(&format!("{} search '{}'", PROVIDER, term));

        let payload = match run_cancellable(cancel, "catalog search", self.fetch_search(term)).await
        {
            Ok(payload) => payload,
            Err(err) => {
                LogContext::error_with_context(&err, "OMDb search failed");
                return Err(err);
            }
        };
        LogContext::api_call(PROVIDER, "search", "200", Some(timer.elapsed_ms()));

        if !payload.is_success() {
            log_debug!(
                "{}: no results for '{}' ({})",
                PROVIDER,
                term,
                payload.error.as_deref().unwrap_or("no error message")
            );
            return Ok(Vec::new());
        }

        let items = payload.search.unwrap_or_default();
        if items.is_empty() {
            log_warn!("{}: Response=True without Search items for '{}'", PROVIDER, term);
        }

        Ok(items
            .into_iter()
            .map(|item| CatalogSearchResult::new(item.title, item.year, item.imdb_id))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(mock_server: &MockServer) -> OmdbClient {
        OmdbClient::new(format!("{}/", mock_server.uri()), "test-key").unwrap()
    }

    #[tokio::test]
    async fn test_search_returns_items_in_service_order() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(query_param("apikey", "test-key"))
            .and(query_param("s", "Inception"))
            .and(query_param("type", "movie"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "Search": [
                    {"Title": "Inception", "Year": "2010", "imdbID": "tt1375666", "Type": "movie", "Poster": "N/A"},
                    {"Title": "Inception: The Cobol Job", "Year": "2010", "imdbID": "tt1790736", "Type": "movie", "Poster": "N/A"}
                ],
                "totalResults": "2",
                "Response": "True"
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let results = client_for(&mock_server)
            .search_movies("Inception", &CancellationToken::new())
            .await
            .unwrap();

        assert_eq!(
            results,
            vec![
                CatalogSearchResult::new("Inception", "2010", "tt1375666"),
                CatalogSearchResult::new("Inception: The Cobol Job", "2010", "tt1790736"),
            ]
        );
    }

    #[tokio::test]
    async fn test_response_false_is_empty_list() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "Response": "False",
                "Error": "Movie not found!"
            })))
            .mount(&mock_server)
            .await;

        let results = client_for(&mock_server)
            .search_movies("xyznonexistent", &CancellationToken::new())
            .await
            .unwrap();

        assert!(results.is_empty());
    }

    #[tokio::test]
    async fn test_search_term_is_url_encoded() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(query_param("s", "star wars & co"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "Search": [
                    {"Title": "Star Wars", "Year": "1977", "imdbID": "tt0076759"}
                ],
                "totalResults": "1",
                "Response": "True"
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let results = client_for(&mock_server)
            .search_movies("star wars & co", &CancellationToken::new())
            .await
            .unwrap();

        assert_eq!(results.len(), 1);
        assert_eq!(results[0].year, "1977");
    }

    #[tokio::test]
    async fn test_server_error_is_fatal() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(500))
            .expect(1)
            .mount(&mock_server)
            .await;

        let result = client_for(&mock_server)
            .search_movies("Inception", &CancellationToken::new())
            .await;

        assert!(matches!(result, Err(AppError::ApiError(_))));
    }

    #[tokio::test]
    async fn test_malformed_body_is_fatal() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
            .mount(&mock_server)
            .await;

        let result = client_for(&mock_server)
            .search_movies("Inception", &CancellationToken::new())
            .await;

        assert!(matches!(result, Err(AppError::SerializationError(_))));
    }

    #[tokio::test]
    async fn test_cancelled_search_stops_waiting() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_delay(Duration::from_secs(5))
                    .set_body_json(serde_json::json!({"Response": "False"})),
            )
            .mount(&mock_server)
            .await;

        let cancel = CancellationToken::new();
        cancel.cancel();

        let result = client_for(&mock_server)
            .search_movies("Inception", &cancel)
            .await;

        assert!(matches!(result, Err(AppError::Cancelled(_))));
    }
}
