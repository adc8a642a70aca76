//! One method per upstream endpoint, grouped the way the API reference groups them.
//!
//! Every method only shapes parameters and hands an [`ApiRequest`](crate::client::types::ApiRequest)
//! to [`SpoonacularClient::dispatch`](crate::client::SpoonacularClient::dispatch).
//! Nothing here inspects the response.

mod chat;
mod compute;
mod data;
mod extract;
mod search;
