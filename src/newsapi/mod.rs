//! # News API Integration Module
//!
//! Client side of the relay: everything that talks to the upstream News API.
//!
//! ## Overview
//!
//! ```text
//! Route handlers (api)
//!          ↓
//! News API Integration Layer
//!     ├── Client (single GET, error message resolution)
//!     └── Random aggregator (7-way fan-out, shuffle, truncate)
//!          ↓
//! HTTP Layer (reqwest, JSON)
//!          ↓
//! News API (top-headlines, everything)
//! ```
//!
//! ## Error Handling
//!
//! Every failure surfaces as [`UpstreamError`](crate::error::UpstreamError).
//! Its message is resolved in a fixed order: the upstream body's `message`
//! field, then the transport error, then `"Error fetching news"`. Transport
//! messages never include the request URL, which carries the API key.
//!
//! Requests are never retried. Timeouts are whatever the configuration sets,
//! otherwise the reqwest default.
//!
//! ## Usage
//!
//! ```rust,ignore
//! let api = NewsApi::new(Arc::new(config))?;
//! let query = api.query().category("general").page(1);
//! let headlines = api.fetch(Endpoint::TopHeadlines, &query).await?;
//! let mixed = api.fetch_random(1).await?;
//! ```

mod client;
mod random;

pub use client::{Endpoint, NewsApi};
pub use random::{ARTICLES_PER_CATEGORY, MAX_ARTICLES, mix_articles, shuffled_categories};
