//! # GitHub Repository Searching
//!
//! A Rust library for searching repositories on GitHub and enriching each
//! result with its top contributors and a README excerpt.
//!
//! ## Main Components
//!
//! - [`GitHubSearcher`]: runs a search and enriches every result
//! - [`GitHubApi`]: the GitHub lookups, implemented over HTTP by [`HttpGitHubApi`]
//! - [`SearchQuery`]: search text, filters, sort key and result count
//! - [`RepositoryResult`]: a fully resolved result, ready to render
//! - [`Args`]: command line arguments
//!
//! Contributor and README lookups never fail a search: a failed lookup is
//! replaced by a fallback value (see [`enrich`]).
//!
//! ## Example
//!
//! ```no_run
//! use github_repo_searching::{Config, GitHubSearcher, SearchQuery, SortKey};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
//!     let config = Config::from_env(None, None);
//!     let searcher = GitHubSearcher::from_config(&config, 4)?;
//!
//!     let query = SearchQuery::new("http client", Some("rust".into()), None, SortKey::Stars, 5)?;
//!     for repo in searcher.execute(&query).await? {
//!         println!("{} ({} stars)", repo.full_name, repo.stars);
//!     }
//!
//!     Ok(())
//! }
//! ```

mod api;
mod args;
mod config;
pub mod enrich;
mod error;
mod github_searcher;
mod models;
pub mod prompt;
mod query;
pub mod render;
mod repository;

pub use crate::api::{GitHubApi, HttpGitHubApi};
pub use crate::args::Args;
pub use crate::config::Config;
pub use crate::error::SearchError;
pub use crate::github_searcher::GitHubSearcher;
pub use crate::models::{Contributor, License, Owner, ReadmeContent, RepoItem, SearchResponse};
pub use crate::query::{SearchQuery, SortKey};
pub use crate::repository::RepositoryResult;
