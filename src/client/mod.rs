//! # Spoonacular HTTP Client
//!
//! A thin, throttled client for the Spoonacular recipe and nutrition API.
//!
//! ## Modules
//!
//! - [`auth`] - API key validation and the default header set
//! - [`client`] - The client, its builder, and the request dispatcher
//! - [`costs`] - Documented cost of each endpoint per quota category
//! - [`error`] - Error taxonomy for dispatched calls
//! - [`params`] - Parameter structs for the filter-heavy search endpoints
//! - [`quota`] - Remaining-quota snapshot read from response headers
//! - [`types`] - Requests, parameters and raw responses
//!
//! ## Quick Start
//!
//! ```no_run
//! use mcp_spoonacular::client::SpoonacularClient;
//!
//! # async fn example() -> mcp_spoonacular::client::Result<()> {
//! let client = SpoonacularClient::new("your-api-key")?;
//!
//! let response = client
//!     .search_recipes_by_ingredients("apples,flour,sugar", Some(5), Some(1), None, None, None)
//!     .await?;
//! println!("{}", response.text());
//!
//! if let Some(quota) = client.quota().await {
//!     println!("lowest remaining quota: {:?}", quota.min());
//! }
//! # Ok(())
//! # }
//! ```

pub mod auth;
#[allow(clippy::module_inception)]
pub mod client;
pub mod costs;
mod endpoints;
pub mod error;
pub mod params;
pub mod quota;
pub mod types;

pub use client::{ClientBuilder, ClientConfig, SpoonacularClient};
pub use error::{Error, Result};
pub use quota::{QuotaCategory, QuotaSnapshot};
pub use types::{ApiRequest, ApiResponse, Method, Params};
