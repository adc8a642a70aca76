//! # Spoonacular MCP Library
//!
//! A client for the Spoonacular recipe, ingredient and nutrition API, plus a
//! Model Context Protocol (MCP) server that exposes part of it as tools.
//!
//! ## Client Module
//!
//! The [`client`] module maps one method onto each upstream endpoint. Every
//! call goes through a single dispatcher that attaches the API key, refuses to
//! spend quota the last response said was gone, and sleeps a fixed interval
//! after each request.
//!
//! ## Server Module
//!
//! The [`server`] module wraps a shared client in an MCP tool router so AI
//! assistants can search recipes, parse ingredients and so on.
//!
//! ## Quick Start
//!
//! ```no_run
//! use std::sync::Arc;
//! use std::time::Duration;
//! use mcp_spoonacular::{SpoonacularClient, SpoonacularMcpServer};
//!
//! # fn example() -> mcp_spoonacular::client::Result<()> {
//! // Use the client directly
//! let client = SpoonacularClient::builder("your-api-key")
//!     .timeout(Duration::from_secs(10))
//!     .sleep_interval(Duration::from_secs(2))
//!     .build()?;
//!
//! // Or create an MCP server around it
//! let server = SpoonacularMcpServer::new(Arc::new(client));
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod server;

pub use client::SpoonacularClient;
pub use server::SpoonacularMcpServer;
