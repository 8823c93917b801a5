use crate::models::RepoItem;

pub const NO_LICENSE: &str = "None";
pub const NO_DESCRIPTION: &str = "No description provided.";

/// A search result with every field resolved, ready to render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryResult {
    pub full_name: String,
    pub owner: String,
    pub stars: u64,
    pub forks: u64,
    pub open_issues: u64,
    pub license: String,
    pub updated_at: String,
    pub description: String,
    pub url: String,
    /// At most [`crate::enrich::MAX_CONTRIBUTORS`] logins.
    pub contributors: Vec<String>,
    pub readme_excerpt: String,
}

impl RepositoryResult {
    pub fn new(item: RepoItem, contributors: Vec<String>, readme_excerpt: String) -> Self {
        let description = item
            .description
            .filter(|d| !d.trim().is_empty())
            .unwrap_or_else(|| NO_DESCRIPTION.to_string());

        RepositoryResult {
            full_name: item.full_name,
            owner: item.owner.login,
            stars: item.stargazers_count,
            forks: item.forks_count,
            open_issues: item.open_issues_count,
            license: item
                .license
                .map(|l| l.name)
                .unwrap_or_else(|| NO_LICENSE.to_string()),
            updated_at: item.updated_at,
            description,
            url: item.html_url,
            contributors,
            readme_excerpt,
        }
    }
}
