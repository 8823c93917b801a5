use std::env;

use tracing::debug;

pub const DEFAULT_API_URL: &str = "https://api.github.com";

/// Connection settings for the GitHub API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    token: Option<String>,
    api_base_url: String,
}

impl Config {
    /// Blank values are treated as absent.
    pub fn new(token: Option<String>, api_base_url: Option<String>) -> Self {
        let token = token
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty());
        let api_base_url = api_base_url
            .map(|u| u.trim().trim_end_matches('/').to_string())
            .filter(|u| !u.is_empty())
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());

        Config {
            token,
            api_base_url,
        }
    }

    /// Arguments take precedence over `GITHUB_TOKEN` and `GITHUB_API_URL`.
    /// Call `dotenv()` first to pick up a `.env` file.
    pub fn from_env(token: Option<String>, api_base_url: Option<String>) -> Self {
        let token = first_non_blank(token, env::var("GITHUB_TOKEN").ok());
        let api_base_url = first_non_blank(api_base_url, env::var("GITHUB_API_URL").ok());

        let config = Config::new(token, api_base_url);
        debug!(
            "Using API at {} ({})",
            config.api_base_url,
            if config.token.is_some() {
                "authenticated"
            } else {
                "unauthenticated"
            }
        );
        config
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn api_base_url(&self) -> &str {
        &self.api_base_url
    }
}

fn first_non_blank(preferred: Option<String>, fallback: Option<String>) -> Option<String> {
    match preferred {
        Some(v) if !v.trim().is_empty() => Some(v),
        _ => fallback,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_token_means_unauthenticated() {
        assert_eq!(Config::new(Some("   ".into()), None).token(), None);
        assert_eq!(Config::new(None, None).token(), None);
        assert_eq!(
            Config::new(Some(" ghp_abc \n".into()), None).token(),
            Some("ghp_abc")
        );
    }

    #[test]
    fn base_url_defaults_and_trims_slashes() {
        assert_eq!(Config::new(None, None).api_base_url(), DEFAULT_API_URL);
        assert_eq!(
            Config::new(None, Some("https://ghe.example.com/api/v3/".into())).api_base_url(),
            "https://ghe.example.com/api/v3"
        );
        assert_eq!(
            Config::new(None, Some("".into())).api_base_url(),
            DEFAULT_API_URL
        );
    }

    #[test]
    fn argument_wins_over_environment_value() {
        assert_eq!(
            first_non_blank(Some("arg".into()), Some("env".into())),
            Some("arg".into())
        );
        assert_eq!(
            first_non_blank(Some(" ".into()), Some("env".into())),
            Some("env".into())
        );
        assert_eq!(first_non_blank(None, None), None);
    }
}
