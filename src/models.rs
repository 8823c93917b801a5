use serde::Deserialize;

/// Response from `GET /search/repositories`.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub items: Vec<RepoItem>,
}

/// A single repository from the search results.
#[derive(Debug, Clone, Deserialize)]
pub struct RepoItem {
    pub name: String,
    pub full_name: String,
    pub owner: Owner,
    #[serde(default)]
    pub stargazers_count: u64,
    #[serde(default)]
    pub forks_count: u64,
    #[serde(default)]
    pub open_issues_count: u64,
    pub license: Option<License>,
    #[serde(default)]
    pub updated_at: String,
    pub description: Option<String>,
    pub html_url: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Owner {
    pub login: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct License {
    pub name: String,
}

/// An entry from `GET /repos/{owner}/{repo}/contributors`.
#[derive(Debug, Clone, Deserialize)]
pub struct Contributor {
    pub login: String,
}

/// Response from `GET /repos/{owner}/{repo}/readme`.
/// `content` is base64 with embedded line breaks.
#[derive(Debug, Clone, Deserialize)]
pub struct ReadmeContent {
    #[serde(default)]
    pub content: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn repo_item_tolerates_null_license_and_description() {
        let item: RepoItem = serde_json::from_value(json!({
            "name": "tokio",
            "full_name": "tokio-rs/tokio",
            "owner": { "login": "tokio-rs", "id": 1 },
            "stargazers_count": 27000,
            "forks_count": 2500,
            "open_issues_count": 300,
            "license": null,
            "updated_at": "2026-10-01T12:00:00Z",
            "description": null,
            "html_url": "https://github.com/tokio-rs/tokio"
        }))
        .unwrap();

        assert_eq!(item.owner.login, "tokio-rs");
        assert!(item.license.is_none());
        assert!(item.description.is_none());
        assert_eq!(item.stargazers_count, 27000);
    }

    #[test]
    fn search_response_without_items_is_empty() {
        let resp: SearchResponse = serde_json::from_value(json!({ "total_count": 0 })).unwrap();
        assert!(resp.items.is_empty());
    }
}
