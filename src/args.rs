use clap::Parser;

use crate::query::SortKey;

/// GitHub repository search CLI that reports the top contributors and a
/// README excerpt for every result.
#[derive(Parser, Debug)]
#[clap(
    author,
    version,
    about,
    long_about = "Search GitHub repositories by keyword, language and license. Each result is enriched with its top contributors and a README excerpt. Run without --query to be prompted for the search interactively."
)]
pub struct Args {
    /// Words or phrases to search for. Prompted for interactively if omitted.
    #[clap(short, long, num_args = 1..)]
    pub query: Vec<String>,

    /// Only match repositories written in this language.
    #[clap(short, long)]
    pub language: Option<String>,

    /// Only match repositories under this license (e.g. mit, gpl-3.0).
    #[clap(short = 'L', long)]
    pub license: Option<String>,

    /// Sort order: stars, forks, help-wanted-issues or updated.
    #[clap(short, long, default_value = "stars")]
    pub sort: SortKey,

    /// Number of repositories to show.
    #[clap(short = 'n', long, value_name = "NUM", default_value = "5")]
    pub max_results: u32,

    /// GitHub API token. Falls back to the GITHUB_TOKEN environment variable.
    #[clap(short, long)]
    pub token: Option<String>,

    /// Maximum number of repositories enriched concurrently.
    #[clap(short = 'c', long, default_value = "4")]
    pub concurrency: usize,

    /// Base URL of the GitHub API. Falls back to GITHUB_API_URL.
    #[clap(long, value_name = "URL")]
    pub api_url: Option<String>,
}

impl Args {
    /// The search words joined with spaces, or `None` when none were given.
    pub fn query_text(&self) -> Option<String> {
        let text = self.query.join(" ");
        if text.trim().is_empty() {
            None
        } else {
            Some(text)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_interactive_defaults() {
        let args = Args::parse_from(["github-repo-searching", "-q", "async", "runtime"]);
        assert_eq!(args.query_text().as_deref(), Some("async runtime"));
        assert_eq!(args.sort, SortKey::Stars);
        assert_eq!(args.max_results, 5);
        assert_eq!(args.concurrency, 4);
        assert!(args.language.is_none());
        assert!(args.license.is_none());
    }

    #[test]
    fn filters_and_sort_are_parsed() {
        let args = Args::parse_from([
            "github-repo-searching",
            "--query",
            "parser",
            "-l",
            "rust",
            "-L",
            "mit",
            "-s",
            "updated",
            "-n",
            "10",
        ]);
        assert_eq!(args.language.as_deref(), Some("rust"));
        assert_eq!(args.license.as_deref(), Some("mit"));
        assert_eq!(args.sort, SortKey::Updated);
        assert_eq!(args.max_results, 10);
    }

    #[test]
    fn missing_query_means_interactive() {
        let args = Args::parse_from(["github-repo-searching"]);
        assert_eq!(args.query_text(), None);
    }

    #[test]
    fn unknown_sort_is_rejected() {
        assert!(Args::try_parse_from(["github-repo-searching", "-s", "popularity"]).is_err());
    }
}
