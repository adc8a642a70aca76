#![allow(dead_code)]

use std::collections::BTreeMap;
use std::time::Duration;

use mcp_spoonacular::client::{ClientBuilder, SpoonacularClient};
use wiremock::matchers::any;
use wiremock::{Mock, MockServer, Request, ResponseTemplate};

pub const TEST_API_KEY: &str = "test-api-key";

/// A mock upstream plus a client pointed at it.
pub struct MockEnvironment {
    pub server: MockServer,
    pub client: SpoonacularClient,
}

impl MockEnvironment {
    /// Client against a fresh mock server with nothing mounted.
    pub async fn new() -> Self {
        Self::with_client(|builder| builder).await
    }

    /// Client plus a mock that answers every request with [`ok_response`].
    pub async fn ok() -> Self {
        let env = Self::new().await;
        env.mount_ok().await;
        env
    }

    pub async fn with_client(configure: impl FnOnce(ClientBuilder) -> ClientBuilder) -> Self {
        let server = MockServer::start().await;
        let client = configure(
            SpoonacularClient::builder(TEST_API_KEY)
                .base_url(server.uri())
                .sleep_interval(Duration::from_secs(1)),
        )
        .build()
        .expect("Failed to build client against mock server");

        Self { server, client }
    }

    pub async fn mount_ok(&self) {
        Mock::given(any())
            .respond_with(ok_response())
            .mount(&self.server)
            .await;
    }

    pub async fn requests(&self) -> Vec<Request> {
        self.server
            .received_requests()
            .await
            .expect("Request recording is enabled by default")
    }

    /// The one request the mock server saw.
    pub async fn single_request(&self) -> Request {
        let mut requests = self.requests().await;
        assert_eq!(requests.len(), 1, "Expected exactly one request");
        requests.remove(0)
    }
}

pub fn ok_response() -> ResponseTemplate {
    ResponseTemplate::new(200)
        .set_body_json(serde_json::json!({}))
        .insert_header("x-ratelimit-requests-remaining", "150")
        .insert_header("x-ratelimit-tinyrequests-remaining", "1500")
        .insert_header("x-ratelimit-results-remaining", "500")
}

pub fn query_map(request: &Request) -> BTreeMap<String, String> {
    request.url.query_pairs().into_owned().collect()
}

/// Decoded form body. Empty unless the request was sent form-encoded.
pub fn form_map(request: &Request) -> BTreeMap<String, String> {
    let is_form = request
        .headers
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v.starts_with("application/x-www-form-urlencoded"));
    if !is_form {
        return BTreeMap::new();
    }
    url::form_urlencoded::parse(&request.body)
        .into_owned()
        .collect()
}

pub fn json_body(request: &Request) -> serde_json::Value {
    serde_json::from_slice(&request.body).expect("Request body should be JSON")
}

pub fn expected(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

/// Asserts verb, path, query and form body in one go.
pub fn assert_request(
    request: &Request,
    method: &str,
    path: &str,
    query: &[(&str, &str)],
    form: &[(&str, &str)],
) {
    assert_eq!(request.method.as_str(), method, "HTTP method");
    assert_eq!(request.url.path(), path, "Request path");
    pretty_assertions::assert_eq!(query_map(request), expected(query), "Query parameters");
    pretty_assertions::assert_eq!(form_map(request), expected(form), "Form body");
}

/// Live client for tests that hit the real API.
///
/// Returns `None` when `SPOONACULAR_API_KEY` is not set.
pub fn live_client() -> Option<SpoonacularClient> {
    let api_key = std::env::var("SPOONACULAR_API_KEY").ok()?;
    let client = SpoonacularClient::builder(api_key)
        .timeout(Duration::from_secs(5))
        .sleep_interval(Duration::from_secs(2))
        .build()
        .expect("Failed to build live client");
    Some(client)
}

pub fn init_test_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "mcp_spoonacular=debug".into()),
        )
        .with_test_writer()
        .try_init();
}
