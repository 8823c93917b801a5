use std::error::Error;
use std::io::{self, IsTerminal};

use clap::Parser;
use dotenv::dotenv;
use tracing::{debug, error};
use tracing_subscriber::EnvFilter;

use github_repo_searching::{prompt, Args, Config, GitHubSearcher, SearchQuery};

const DEFAULT_LOG_FILTER: &str = "github_repo_searching=warn";

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error + Send + Sync>> {
    // Logs go to stderr; stdout carries the report
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .with_target(false)
        .init();

    dotenv().ok();

    let args = Args::parse();

    let query = match args.query_text() {
        Some(text) => SearchQuery::new(
            text,
            args.language.clone(),
            args.license.clone(),
            args.sort,
            args.max_results,
        )?,
        None => {
            if !io::stdin().is_terminal() {
                error!("No query given and stdin is not a terminal");
                return Err("Interactive mode requires a terminal. Use --query instead.".into());
            }
            let answers = prompt::ask()?;
            SearchQuery::new(
                answers.text,
                answers.language,
                answers.license,
                answers.sort,
                answers.max_results,
            )?
        }
    };
    debug!("Query: {:?}", query);

    let config = Config::from_env(args.token.clone(), args.api_url.clone());
    let searcher = GitHubSearcher::from_config(&config, args.concurrency)?;

    let mut stdout = io::stdout().lock();
    searcher.run(&query, &mut stdout).await?;

    Ok(())
}
