//! News API Relay Library
//!
//! This library implements a small HTTP relay in front of the News API. Every
//! route injects the server-side API key, shapes the upstream query for its
//! purpose and passes the upstream JSON back to the caller. One route fans out
//! across all topic categories and returns a shuffled sample of the results.
//!
//! # Modules
//!
//! - `api` - HTTP route handlers
//! - `config` - Configuration loading from the environment and `.env` files
//! - `error` - Upstream and relay error types and their HTTP mapping
//! - `newsapi` - News API client and the random category aggregator
//! - `server` - Router construction and the serve loop
//! - `types` - Data structures and type definitions
//! - `utils` - Request body parsing and shuffling helpers
//!
//! # Example
//!
//! ```
//! use newsrelay::{config, server};
//!
//! #[tokio::main]
//! async fn main() -> newsrelay::Res<()> {
//!     config::load_env().await?;
//!     let config = config::Config::from_env()?;
//!     server::start_api_server(config).await
//! }
//! ```

pub mod api;
pub mod config;
pub mod error;
pub mod newsapi;
pub mod server;
pub mod types;
pub mod utils;

/// A convenient Result type alias for operations that may fail.
///
/// Uses a boxed dynamic error trait object with Send + Sync bounds so it can
/// cross await points and task boundaries.
pub type Res<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Prints an informational message with a blue bullet point.
///
/// # Example
///
/// ```
/// info!("Fetching trending news...");
/// info!("Listening on {}", addr);
/// ```
#[macro_export]
macro_rules! info {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "o".blue().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a success message with a green checkmark.
#[macro_export]
macro_rules! success {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "✓".green().bold(), std::format_args!($($arg)*));
  })
}

/// Prints an error message with a red exclamation mark and exits the program.
///
/// Only used during startup, where a broken configuration leaves nothing to
/// recover. Request handling reports problems with [`failure!`] instead.
///
/// # Example
///
/// ```
/// error!("Missing required environment variable: {}", var_name);
/// // Program exits here - code after this will not execute
/// ```
#[macro_export]
macro_rules! error {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".red().bold(), std::format_args!($($arg)*));
    std::process::exit(1);
  })
}

/// Prints a non-fatal failure with a red cross to stderr.
///
/// Used for errors that end a single request but leave the server running,
/// such as a failed upstream call.
///
/// # Example
///
/// ```
/// failure!("Error fetching latest news: {}", err);
/// ```
#[macro_export]
macro_rules! failure {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    eprintln!("[{}] {}", "x".red().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a warning message with a yellow exclamation mark.
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".yellow().bold(), std::format_args!($($arg)*));
  })
}
