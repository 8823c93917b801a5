use std::fmt::Display;

use console::style;

use crate::error::SearchError;
use crate::query::SearchQuery;
use crate::repository::RepositoryResult;

const INDENT: &str = "   ";
const RULE_WIDTH: usize = 72;
const NO_CONTRIBUTORS: &str = "Not available";

pub fn search_header(query: &SearchQuery) -> String {
    format!(
        "🔍 {}: '{}' | Sorted by: {}",
        style("Searching GitHub for").green().bold(),
        query.qualified_text(),
        style(query.sort()).cyan().bold()
    )
}

/// One report block. `index` is 1-based.
pub fn render_result(index: usize, result: &RepositoryResult) -> String {
    let contributors = if result.contributors.is_empty() {
        NO_CONTRIBUTORS.to_string()
    } else {
        result.contributors.join(", ")
    };

    let mut out = String::new();
    line(
        &mut out,
        style(format!("{}. {}", index, result.full_name)).yellow().bold(),
    );
    line(
        &mut out,
        style(format!(
            "{INDENT}🌟 Stars: {}   🍴 Forks: {}   🐛 Open Issues: {}",
            result.stars, result.forks, result.open_issues
        ))
        .cyan(),
    );
    line(
        &mut out,
        style(format!(
            "{INDENT}📜 License: {}   ⏰ Updated: {}",
            result.license, result.updated_at
        ))
        .dim(),
    );
    line(
        &mut out,
        style(format!(
            "{INDENT}👤 Owner: {}   🔗 URL: {}",
            result.owner, result.url
        ))
        .blue(),
    );
    out.push('\n');
    line(
        &mut out,
        style(format!("{INDENT}📄 Description: {}", result.description)).italic(),
    );
    line(
        &mut out,
        style(format!("{INDENT}👥 Top Contributors: {}", contributors)).magenta(),
    );
    line(&mut out, format!("{INDENT}📘 README Snippet:"));
    line(
        &mut out,
        format!("{INDENT}{}", indent_lines(&result.readme_excerpt)),
    );
    out.push_str(&rule());

    out
}

pub fn render_error(err: &SearchError) -> String {
    style(format!("❌ Error: {}", err)).red().bold().to_string()
}

pub fn rule() -> String {
    style("─".repeat(RULE_WIDTH)).blue().bright().to_string()
}

fn line(out: &mut String, text: impl Display) {
    out.push_str(&text.to_string());
    out.push('\n');
}

fn indent_lines(text: &str) -> String {
    text.lines().collect::<Vec<_>>().join(&format!("\n{INDENT}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::SortKey;
    use console::strip_ansi_codes;

    fn result(contributors: Vec<&str>) -> RepositoryResult {
        RepositoryResult {
            full_name: "serde-rs/serde".into(),
            owner: "serde-rs".into(),
            stars: 9000,
            forks: 800,
            open_issues: 250,
            license: "None".into(),
            updated_at: "2026-10-10T10:00:00Z".into(),
            description: "No description provided.".into(),
            url: "https://github.com/serde-rs/serde".into(),
            contributors: contributors.into_iter().map(String::from).collect(),
            readme_excerpt: "# Serde\nSerialization framework".into(),
        }
    }

    #[test]
    fn block_contains_every_field() {
        let text = strip_ansi_codes(&render_result(2, &result(vec!["dtolnay", "oli-obk"])))
            .to_string();

        assert!(text.starts_with("2. serde-rs/serde\n"));
        assert!(text.contains("Stars: 9000"));
        assert!(text.contains("Forks: 800"));
        assert!(text.contains("Open Issues: 250"));
        assert!(text.contains("License: None"));
        assert!(text.contains("Updated: 2026-10-10T10:00:00Z"));
        assert!(text.contains("Owner: serde-rs"));
        assert!(text.contains("URL: https://github.com/serde-rs/serde"));
        assert!(text.contains("Description: No description provided."));
        assert!(text.contains("Top Contributors: dtolnay, oli-obk"));
        assert!(text.contains("   # Serde\n   Serialization framework"));
    }

    #[test]
    fn empty_contributors_render_as_not_available() {
        let text = strip_ansi_codes(&render_result(1, &result(vec![]))).to_string();
        assert!(text.contains("Top Contributors: Not available"));
    }

    #[test]
    fn header_shows_qualified_query_and_sort() {
        let query = SearchQuery::new(
            "http client",
            Some("rust".into()),
            None,
            SortKey::Updated,
            3,
        )
        .unwrap();
        let text = strip_ansi_codes(&search_header(&query)).to_string();
        assert!(text.contains("Searching GitHub for: 'http client language:rust' | Sorted by: updated"));
    }

    #[test]
    fn error_line_has_status_and_body() {
        let err = SearchError::Status {
            status: 422,
            body: "Validation Failed".into(),
        };
        let text = strip_ansi_codes(&render_error(&err)).to_string();
        assert!(text.contains("Error: 422 - Validation Failed"));
    }

    #[test]
    fn block_is_one_field_per_line_ending_in_rule() {
        let text = strip_ansi_codes(&render_result(1, &result(vec!["dtolnay"]))).to_string();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 11);
        assert_eq!(lines[4], "");
        assert_eq!(lines[7], "   📘 README Snippet:");
        assert_eq!(lines[10], "─".repeat(RULE_WIDTH));
    }
}
