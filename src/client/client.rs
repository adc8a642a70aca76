use std::time::Duration;

use reqwest::header::HeaderMap;
use reqwest::Url;
use tokio::sync::{Mutex, OnceCell};

use crate::client::{
    auth::ApiKey,
    costs::endpoint_cost,
    error::{Error, Result},
    quota::QuotaSnapshot,
    types::{ApiRequest, ApiResponse},
};

pub const DEFAULT_BASE_URL: &str = "https://spoonacular-recipe-food-nutrition-v1.p.rapidapi.com/";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);
pub const DEFAULT_SLEEP_INTERVAL: Duration = Duration::from_millis(1500);
/// Lower bound for the pause after every call.
pub const MIN_SLEEP_INTERVAL: Duration = Duration::from_secs(1);
/// Calls are refused once any category drops below this many remaining units.
pub const DEFAULT_QUOTA_THRESHOLD: i64 = 1;

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Settings fixed at construction time.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    api_key: ApiKey,
    base_url: Url,
    timeout: Duration,
    sleep_interval: Duration,
    allow_extra_calls: bool,
    quota_threshold: i64,
}

impl ClientConfig {
    pub fn api_key(&self) -> &ApiKey {
        &self.api_key
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub fn sleep_interval(&self) -> Duration {
        self.sleep_interval
    }

    pub fn allow_extra_calls(&self) -> bool {
        self.allow_extra_calls
    }

    pub fn quota_threshold(&self) -> i64 {
        self.quota_threshold
    }
}

/// Builder for [`SpoonacularClient`].
pub struct ClientBuilder {
    api_key: String,
    base_url: String,
    timeout: Duration,
    sleep_interval: Duration,
    allow_extra_calls: bool,
    quota_threshold: i64,
}

impl ClientBuilder {
    fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            sleep_interval: DEFAULT_SLEEP_INTERVAL,
            allow_extra_calls: false,
            quota_threshold: DEFAULT_QUOTA_THRESHOLD,
        }
    }

    /// Points the client at a different API root, e.g. a mock server.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Per-request socket timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Pause after every call. Values below [`MIN_SLEEP_INTERVAL`] are raised to it.
    pub fn sleep_interval(mut self, interval: Duration) -> Self {
        self.sleep_interval = interval;
        self
    }

    /// Keep dispatching even when the local quota snapshot says we are out.
    pub fn allow_extra_calls(mut self, allow: bool) -> Self {
        self.allow_extra_calls = allow;
        self
    }

    pub fn quota_threshold(mut self, threshold: i64) -> Self {
        self.quota_threshold = threshold;
        self
    }

    /// Validates the settings and builds the client.
    ///
    /// ## Errors
    ///
    /// Returns [`Error::Config`] for an empty API key, a key that cannot be
    /// sent as a header, or a base URL that does not parse.
    pub fn build(self) -> Result<SpoonacularClient> {
        let api_key = ApiKey::new(self.api_key)?;

        let mut base_url = self.base_url;
        if !base_url.ends_with('/') {
            base_url.push('/');
        }
        let base_url = Url::parse(&base_url)
            .map_err(|e| Error::Config(format!("invalid base URL {base_url}: {e}")))?;

        let headers = api_key.default_headers(base_url.host_str())?;

        if self.sleep_interval < MIN_SLEEP_INTERVAL {
            tracing::debug!(
                "Sleep interval {:?} is below the minimum, using {:?}",
                self.sleep_interval,
                MIN_SLEEP_INTERVAL
            );
        }

        let config = ClientConfig {
            api_key,
            base_url,
            timeout: self.timeout,
            sleep_interval: self.sleep_interval.max(MIN_SLEEP_INTERVAL),
            allow_extra_calls: self.allow_extra_calls,
            quota_threshold: self.quota_threshold,
        };

        tracing::info!(
            "Created Spoonacular client for {} (key {})",
            config.base_url,
            config.api_key.preview()
        );

        Ok(SpoonacularClient {
            config,
            headers,
            http: OnceCell::new(),
            quota: Mutex::new(None),
        })
    }
}

/// # Spoonacular API client
///
/// Every endpoint method funnels into [`SpoonacularClient::dispatch`], which
/// runs "check quota, send, record quota, sleep" under a single lock. Sharing
/// one client behind an `Arc` therefore keeps the serial throttle intact.
pub struct SpoonacularClient {
    config: ClientConfig,
    headers: HeaderMap,
    http: OnceCell<reqwest::Client>,
    quota: Mutex<Option<QuotaSnapshot>>,
}

impl SpoonacularClient {
    /// Creates a client with default settings.
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        Self::builder(api_key).build()
    }

    pub fn builder(api_key: impl Into<String>) -> ClientBuilder {
        ClientBuilder::new(api_key)
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// The quota snapshot recorded from the most recent response.
    ///
    /// Waits for any in-flight dispatch (including its trailing sleep) to finish.
    pub async fn quota(&self) -> Option<QuotaSnapshot> {
        self.quota.lock().await.clone()
    }

    /// Sends one request and returns the raw response.
    ///
    /// Always waits the configured sleep interval before returning, whatever
    /// the outcome.
    ///
    /// ## Errors
    ///
    /// - [`Error::QuotaExhausted`] when the local guard refuses the call
    /// - [`Error::Timeout`] when the upstream does not answer in time
    /// - [`Error::Http`] for a non-2xx status; the response is attached
    /// - [`Error::Transport`] for any other network failure
    #[tracing::instrument(
        name = "spoonacular_request",
        skip(self, request),
        fields(endpoint = request.endpoint, method = %request.method, path = %request.path)
    )]
    pub async fn dispatch(&self, request: ApiRequest) -> Result<ApiResponse> {
        let mut quota = self.quota.lock().await;
        let outcome = self.send(&mut quota, &request).await;
        tokio::time::sleep(self.config.sleep_interval).await;
        outcome
    }

    async fn send(
        &self,
        quota: &mut Option<QuotaSnapshot>,
        request: &ApiRequest,
    ) -> Result<ApiResponse> {
        self.check_quota(quota.as_ref())?;

        if let Some(cost) = endpoint_cost(request.endpoint) {
            tracing::debug!(
                "Expected cost of {}: {} requests, {} tinyrequests, {} results",
                cost.name,
                cost.requests.amount,
                cost.tiny_requests.amount,
                cost.results.amount
            );
        }

        let url = self
            .config
            .base_url
            .join(&request.path)
            .map_err(|e| Error::Config(format!("invalid path {}: {e}", request.path)))?;

        let mut builder = self.http().await?.request(request.method.to_reqwest(), url);
        if !request.query.is_empty() {
            builder = builder.query(&request.query);
        }
        if let Some(body) = &request.json {
            builder = builder.json(body);
        } else if !request.form.is_empty() {
            builder = builder.form(&request.form);
        }

        tracing::debug!(
            "Sending {} {} ({} query, {} form params)",
            request.method,
            request.path,
            request.query.len(),
            request.form.len()
        );

        let response = builder.send().await.map_err(|e| self.transport_error(request, e))?;

        let status = response.status();
        let headers = response.headers().clone();
        let snapshot = QuotaSnapshot::from_headers(&headers);
        if let Some((category, remaining)) = snapshot.min() {
            tracing::debug!("Lowest remaining quota: {} = {}", category, remaining);
        }
        *quota = Some(snapshot);

        let body = response
            .text()
            .await
            .map_err(|e| self.transport_error(request, e))?;
        let response = ApiResponse {
            status,
            headers,
            body,
        };

        if !status.is_success() {
            tracing::warn!("{} {} returned {}", request.method, request.path, status);
            return Err(Error::Http {
                status,
                path: request.path.clone(),
                response: Box::new(response),
            });
        }

        Ok(response)
    }

    fn check_quota(&self, snapshot: Option<&QuotaSnapshot>) -> Result<()> {
        if self.config.allow_extra_calls {
            return Ok(());
        }
        let Some((category, remaining)) = snapshot.and_then(|s| s.min()) else {
            return Ok(());
        };
        if remaining < self.config.quota_threshold {
            tracing::error!(
                "Quota guard tripped: '{}' has {} calls left (threshold {})",
                category,
                remaining,
                self.config.quota_threshold
            );
            return Err(Error::QuotaExhausted {
                category: category.to_string(),
                remaining,
                threshold: self.config.quota_threshold,
            });
        }
        Ok(())
    }

    fn transport_error(&self, request: &ApiRequest, error: reqwest::Error) -> Error {
        if error.is_timeout() {
            tracing::warn!(
                "Request to {} timed out after {:?}",
                request.path,
                self.config.timeout
            );
            Error::Timeout {
                path: request.path.clone(),
                timeout: self.config.timeout,
            }
        } else {
            tracing::error!("Network error calling {}: {}", request.path, error);
            Error::Transport(error)
        }
    }

    async fn http(&self) -> Result<&reqwest::Client> {
        self.http
            .get_or_try_init(|| async {
                tracing::debug!("Initializing HTTP session");
                reqwest::Client::builder()
                    .timeout(self.config.timeout)
                    .default_headers(self.headers.clone())
                    .user_agent(USER_AGENT)
                    .build()
                    .map_err(Error::Transport)
            })
            .await
    }
}
