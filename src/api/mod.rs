//! # API Module
//!
//! HTTP route handlers of the relay.
//!
//! ## Endpoints
//!
//! | Route | Method | Upstream |
//! |---|---|---|
//! | `/fetch_latest` | POST | top-headlines, `category=general`, `page=pageno` |
//! | `/fetchnewsbycategory` | POST | top-headlines, `category`, `page=pageno`, `pageSize=10` |
//! | `/HomeLatest` | GET | top-headlines, `category=general`, `pageSize=10` |
//! | `/fetch_trending` | GET | top-headlines, `category=general`, `pageSize=20` |
//! | `/fetch_Random` | POST | everything, one search per category, shuffled |
//! | `/health` | GET | none |
//!
//! POST bodies are optional JSON; `pageno` defaults to 1. Handlers that need
//! the upstream receive the shared [`NewsApi`](crate::newsapi::NewsApi) client
//! through an `Extension`.
//!
//! ## Errors
//!
//! A missing `category` is answered with 400 before anything is sent
//! upstream. Upstream failures become 500 with a short per-route text, while
//! the detailed message is only logged. `/fetch_Random` instead returns the
//! upstream message as `{ "error": "..." }`.

mod health;
mod news;

pub use health::health;
pub use news::{fetch_latest, fetch_news_by_category, fetch_random, fetch_trending, home_latest};
