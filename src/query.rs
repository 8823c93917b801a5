use std::fmt;
use std::str::FromStr;

use crate::error::SearchError;

/// GitHub caps `per_page` for the search endpoint at this value.
pub const MAX_PER_PAGE: u32 = 100;

/// Sort keys accepted by the repository search endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    #[default]
    Stars,
    Forks,
    HelpWantedIssues,
    Updated,
}

impl SortKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Stars => "stars",
            SortKey::Forks => "forks",
            SortKey::HelpWantedIssues => "help-wanted-issues",
            SortKey::Updated => "updated",
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "stars" => Ok(SortKey::Stars),
            "forks" => Ok(SortKey::Forks),
            "help-wanted-issues" => Ok(SortKey::HelpWantedIssues),
            "updated" => Ok(SortKey::Updated),
            other => Err(format!(
                "unknown sort key '{}' (expected stars, forks, help-wanted-issues or updated)",
                other
            )),
        }
    }
}

/// One repository search request. Built once, never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    text: String,
    language: Option<String>,
    license: Option<String>,
    sort: SortKey,
    max_results: u32,
}

impl SearchQuery {
    /// Build a query. Blank filters are treated as absent.
    pub fn new(
        text: impl Into<String>,
        language: Option<String>,
        license: Option<String>,
        sort: SortKey,
        max_results: u32,
    ) -> Result<Self, SearchError> {
        let text = text.into().trim().to_string();
        if text.is_empty() {
            return Err(SearchError::InvalidQuery("search text is empty".into()));
        }
        if max_results == 0 {
            return Err(SearchError::InvalidQuery(
                "result count must be at least 1".into(),
            ));
        }

        Ok(SearchQuery {
            text,
            language: non_blank(language),
            license: non_blank(license),
            sort,
            max_results,
        })
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn language(&self) -> Option<&str> {
        self.language.as_deref()
    }

    pub fn license(&self) -> Option<&str> {
        self.license.as_deref()
    }

    pub fn sort(&self) -> SortKey {
        self.sort
    }

    pub fn max_results(&self) -> u32 {
        self.max_results
    }

    /// The `q` parameter: base text, then `language:`, then `license:`.
    pub fn qualified_text(&self) -> String {
        let mut q = self.text.clone();
        if let Some(language) = &self.language {
            q.push_str(&format!(" language:{}", language));
        }
        if let Some(license) = &self.license {
            q.push_str(&format!(" license:{}", license));
        }
        q
    }

    /// Value sent as `per_page`.
    pub fn per_page(&self) -> u32 {
        self.max_results.min(MAX_PER_PAGE)
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
