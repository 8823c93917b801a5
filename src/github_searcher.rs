use std::io::{self, Write};

use futures::stream::{self, Stream, StreamExt};
use indicatif::{ProgressBar, ProgressStyle};
use tokio::time::Duration;
use tracing::{debug, info, warn};

use crate::api::{GitHubApi, HttpGitHubApi};
use crate::config::Config;
use crate::enrich;
use crate::error::SearchError;
use crate::models::RepoItem;
use crate::query::{SearchQuery, MAX_PER_PAGE};
use crate::render;
use crate::repository::RepositoryResult;

pub struct GitHubSearcher<A = HttpGitHubApi> {
    api: A,
    concurrency: usize,
    show_progress: bool,
}

impl GitHubSearcher<HttpGitHubApi> {
    /// Create a searcher backed by the GitHub REST API
    pub fn from_config(config: &Config, concurrency: usize) -> Result<Self, SearchError> {
        Ok(GitHubSearcher::new(HttpGitHubApi::new(config)?, concurrency))
    }
}

impl<A: GitHubApi> GitHubSearcher<A> {
    /// `concurrency` is the number of repositories enriched at once; 0 is
    /// treated as 1.
    pub fn new(api: A, concurrency: usize) -> Self {
        GitHubSearcher {
            api,
            concurrency: concurrency.max(1),
            show_progress: true,
        }
    }

    /// Disable the progress spinner
    pub fn without_progress(mut self) -> Self {
        self.show_progress = false;
        self
    }

    #[cfg(test)]
    fn api(&self) -> &A {
        &self.api
    }

    /// Search and enrich every result, in the order GitHub returned them
    pub async fn execute(&self, query: &SearchQuery) -> Result<Vec<RepositoryResult>, SearchError> {
        let items = self.search(query).await?;
        let pb = ProgressBar::hidden();
        Ok(self.enriched(items, &pb).collect::<Vec<_>>().await)
    }

    /// Search and print the report to `out`. A failed search is reported
    /// as a single error line and is not an error of this function.
    ///
    /// Returns the number of results printed.
    pub async fn run<W: Write>(&self, query: &SearchQuery, out: &mut W) -> io::Result<usize> {
        writeln!(out, "\n{}\n", render::search_header(query))?;

        let pb = self.spinner();
        pb.set_message(format!("Searching for '{}'", query.qualified_text()));

        let items = match self.search(query).await {
            Ok(items) => items,
            Err(e) => {
                pb.finish_and_clear();
                debug!(
                    status = ?e.status(),
                    "Search for '{}' failed: {}",
                    query.qualified_text(),
                    e
                );
                writeln!(out, "{}", render::render_error(&e))?;
                return Ok(0);
            }
        };

        let mut printed = 0;
        let mut results = std::pin::pin!(self.enriched(items, &pb));
        while let Some(result) = results.next().await {
            printed += 1;
            pb.suspend(|| writeln!(out, "{}", render::render_result(printed, &result)))?;
        }

        pb.finish_and_clear();
        info!("Printed {} results", printed);
        Ok(printed)
    }

    async fn search(&self, query: &SearchQuery) -> Result<Vec<RepoItem>, SearchError> {
        if query.max_results() > MAX_PER_PAGE {
            warn!(
                "GitHub returns at most {} results per request, requested {}",
                MAX_PER_PAGE,
                query.max_results()
            );
        }

        let response = self.api.search_repositories(query).await?;
        let mut items = response.items;
        items.truncate(query.max_results() as usize);

        info!(
            "Found {} repositories for '{}'",
            items.len(),
            query.qualified_text()
        );
        Ok(items)
    }

    /// Enrich up to `concurrency` items at a time; output keeps input order.
    fn enriched<'a>(
        &'a self,
        items: Vec<RepoItem>,
        pb: &'a ProgressBar,
    ) -> impl Stream<Item = RepositoryResult> + 'a {
        stream::iter(items)
            .map(move |item| self.enrich(item, pb))
            .buffered(self.concurrency)
    }

    async fn enrich(&self, item: RepoItem, pb: &ProgressBar) -> RepositoryResult {
        pb.set_message(format!("Fetching details for '{}'", item.full_name));
        debug!("Enriching '{}'", item.full_name);

        let owner = item.owner.login.as_str();
        let (contributors, readme) = tokio::join!(
            self.api.contributors(owner, &item.name),
            self.api.readme(owner, &item.name)
        );

        let contributors = enrich::contributors_or_fallback(&item.full_name, contributors);
        let readme = enrich::readme_or_fallback(&item.full_name, readme);
        RepositoryResult::new(item, contributors, readme)
    }

    fn spinner(&self) -> ProgressBar {
        if !self.show_progress {
            return ProgressBar::hidden();
        }

        let pb = ProgressBar::new_spinner();
        let style = ProgressStyle::default_spinner()
            .template("{spinner:.green} [{elapsed_precise}] {wide_msg}")
            .map(|s| s.tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏ "))
            .unwrap_or_else(|_| ProgressStyle::default_spinner());
        pb.set_style(style);
        pb.enable_steady_tick(Duration::from_millis(80));
        pb
    }
}
