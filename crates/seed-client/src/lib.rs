//! Client for the jsonplaceholder todo seed API
//!
//! This crate provides a trait-based client for the read-only demo endpoint
//! that seeds the task list at startup. The trait keeps the application
//! decoupled from the wire protocol, so tests can substitute a canned
//! in-memory source.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────┐
//! │            SeedSource trait          │
//! │  - fetch_todos(limit)                │
//! └─────────────────────────────────────┘
//!                   │
//!                   ▼
//!         ┌──────────────────┐
//!         │  HttpSeedClient  │
//!         │  (reqwest)       │
//!         └──────────────────┘
//! ```
//!
//! # Example
//!
//! ```rust,no_run
//! use seed_client::{HttpSeedClient, SeedSource};
//!
//! # async fn example() -> anyhow::Result<()> {
//! let client = HttpSeedClient::new();
//! let todos = client.fetch_todos(20).await?;
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod error;
pub mod http_client;
pub mod types;

pub use client::SeedSource;
pub use error::SeedClientError;
pub use http_client::HttpSeedClient;
pub use types::SeedTodo;

/// The fixed public endpoint the application seeds from.
pub const DEFAULT_ENDPOINT: &str = "https://jsonplaceholder.typicode.com";
