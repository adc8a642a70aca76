//! Static API key authentication.
//!
//! The upstream authenticates every call with a key header. There is no token
//! exchange, so all this module does is validate the key once and turn it into
//! the default header set the HTTP session is built with.

use reqwest::header::{HeaderMap, HeaderName, HeaderValue, ACCEPT};

use crate::client::error::{Error, Result};

/// Header carrying the API key.
pub const API_KEY_HEADER: &str = "x-rapidapi-key";
/// Header naming the upstream host behind the marketplace gateway.
pub const API_HOST_HEADER: &str = "x-rapidapi-host";

/// # Spoonacular API key
///
/// A validated, non-empty key. Construction fails with [`Error::Config`] for an
/// empty or whitespace-only string, so an unusable key never reaches the network.
#[derive(Clone)]
pub struct ApiKey {
    key: String,
}

impl ApiKey {
    pub fn new(key: impl Into<String>) -> Result<Self> {
        let key = key.into();
        if key.trim().is_empty() {
            tracing::error!("Refusing to build a client with an empty API key");
            return Err(Error::Config("must supply a non-empty API key".to_string()));
        }
        Ok(Self { key })
    }

    pub fn as_str(&self) -> &str {
        &self.key
    }

    /// First few characters of the key, for log lines.
    pub fn preview(&self) -> String {
        let end = self
            .key
            .char_indices()
            .nth(6)
            .map(|(i, _)| i)
            .unwrap_or(self.key.len());
        format!("{}...", &self.key[..end])
    }

    /// Headers attached to every request made with this key.
    pub fn default_headers(&self, host: Option<&str>) -> Result<HeaderMap> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let mut key = HeaderValue::from_str(&self.key)
            .map_err(|e| Error::Config(format!("API key is not a valid header value: {e}")))?;
        key.set_sensitive(true);
        headers.insert(HeaderName::from_static(API_KEY_HEADER), key);

        if let Some(host) = host {
            let host = HeaderValue::from_str(host)
                .map_err(|e| Error::Config(format!("invalid host header: {e}")))?;
            headers.insert(HeaderName::from_static(API_HOST_HEADER), host);
        }

        tracing::debug!("Prepared default headers for key {}", self.preview());
        Ok(headers)
    }
}

impl std::fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("ApiKey").field(&self.preview()).finish()
    }
}
