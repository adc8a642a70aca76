//! Request and response types shared by the dispatcher and the endpoint wrappers.
//!
//! ## Key Types
//!
//! - [`ApiRequest`] - One endpoint call: verb, relative path, and its payload carriers
//! - [`Params`] - Ordered key/value pairs for the query string or a form body
//! - [`ApiResponse`] - The raw upstream answer (status, headers, body)
//!
//! Nothing here interprets response bodies. Callers decode them however they like.

use std::fmt;

use reqwest::header::HeaderMap;
use reqwest::StatusCode;
use serde::Serialize;
use serde_json::Value;

use crate::client::error::{Error, Result};

/// HTTP verbs used by the upstream API.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

impl Method {
    pub(crate) fn to_reqwest(self) -> reqwest::Method {
        match self {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Method::Get => f.write_str("GET"),
            Method::Post => f.write_str("POST"),
        }
    }
}

/// Ordered request parameters.
///
/// Optional values that are `None` are never inserted, so an unset argument
/// does not show up on the wire as an empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Params(Vec<(String, String)>);

impl Params {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a required parameter.
    pub fn set(mut self, key: &str, value: impl ToString) -> Self {
        self.0.push((key.to_string(), value.to_string()));
        self
    }

    /// Adds a parameter only when a value is present.
    pub fn opt<V: ToString>(self, key: &str, value: Option<V>) -> Self {
        match value {
            Some(value) => self.set(key, value),
            None => self,
        }
    }

    /// Appends every pair from `other`.
    pub fn extend(mut self, other: Params) -> Self {
        self.0.extend(other.0);
        self
    }

    /// Flattens a serializable struct into parameters.
    ///
    /// Null fields are skipped, arrays are joined with commas, and nested
    /// objects are flattened into the same level.
    pub fn from_struct<T: Serialize>(value: &T) -> Result<Self> {
        let mut params = Self::new();
        if let Value::Object(map) = serde_json::to_value(value)? {
            for (key, value) in map {
                params.push_value(key, value);
            }
        }
        Ok(params)
    }

    fn push_value(&mut self, key: String, value: Value) {
        match value {
            Value::Null => {}
            Value::String(s) => self.0.push((key, s)),
            Value::Array(items) => {
                let joined = items
                    .into_iter()
                    .filter(|item| !item.is_null())
                    .map(|item| match item {
                        Value::String(s) => s,
                        other => other.to_string(),
                    })
                    .collect::<Vec<_>>()
                    .join(",");
                if !joined.is_empty() {
                    self.0.push((key, joined));
                }
            }
            Value::Object(map) => {
                for (key, value) in map {
                    self.push_value(key, value);
                }
            }
            other => self.0.push((key, other.to_string())),
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

/// A single call against one upstream endpoint.
///
/// `path` is relative to the API root and already has any `{id}` placeholder
/// substituted. The three payload carriers may be combined; most endpoints use
/// one or two of them.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    /// Wrapper name, used to look up the documented cost and for logging
    pub endpoint: &'static str,
    pub method: Method,
    pub path: String,
    pub query: Params,
    pub form: Params,
    pub json: Option<Value>,
}

impl ApiRequest {
    pub fn new(endpoint: &'static str, method: Method, path: impl Into<String>) -> Self {
        Self {
            endpoint,
            method,
            path: path.into(),
            query: Params::new(),
            form: Params::new(),
            json: None,
        }
    }

    pub fn get(endpoint: &'static str, path: impl Into<String>) -> Self {
        Self::new(endpoint, Method::Get, path)
    }

    pub fn post(endpoint: &'static str, path: impl Into<String>) -> Self {
        Self::new(endpoint, Method::Post, path)
    }

    pub fn query(mut self, query: Params) -> Self {
        self.query = query;
        self
    }

    pub fn form(mut self, form: Params) -> Self {
        self.form = form;
        self
    }

    /// Attaches a JSON body.
    pub fn json<T: Serialize>(mut self, body: &T) -> Result<Self> {
        self.json = Some(serde_json::to_value(body)?);
        Ok(self)
    }
}

/// Raw upstream response.
#[derive(Debug, Clone)]
pub struct ApiResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: String,
}

impl ApiResponse {
    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }

    pub fn text(&self) -> &str {
        &self.body
    }
}

/// Builds a path segment from a caller-supplied identifier.
///
/// Empty, `.` and `..` values are refused: URL resolution would drop or
/// collapse them and the call would land on another endpoint.
pub(crate) fn segment(value: impl fmt::Display) -> Result<String> {
    let value = value.to_string();
    if matches!(value.as_str(), "" | "." | "..") {
        return Err(Error::Config(format!("invalid path segment {value:?}")));
    }
    Ok(urlencoding::encode(&value).into_owned())
}
