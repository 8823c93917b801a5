use dialoguer::theme::ColorfulTheme;
use dialoguer::Input;

use crate::query::SortKey;

/// Search inputs collected from the terminal.
#[derive(Debug, Clone)]
pub struct PromptAnswers {
    pub text: String,
    pub language: Option<String>,
    pub license: Option<String>,
    pub sort: SortKey,
    pub max_results: u32,
}

/// Ask for the search interactively. Requires a TTY.
pub fn ask() -> dialoguer::Result<PromptAnswers> {
    let theme = ColorfulTheme::default();

    let text: String = Input::with_theme(&theme)
        .with_prompt("Enter your GitHub search query")
        .validate_with(|input: &String| {
            if input.trim().is_empty() {
                Err("Query cannot be empty")
            } else {
                Ok(())
            }
        })
        .interact_text()?;

    let language = optional(&theme, "Filter by programming language (optional)")?;
    let license = optional(&theme, "Filter by license (e.g., mit, gpl-3.0) (optional)")?;

    let sort: SortKey = Input::with_theme(&theme)
        .with_prompt("Sort by stars, forks, help-wanted-issues or updated")
        .default(SortKey::Stars)
        .interact_text()?;

    let max_results: u32 = Input::with_theme(&theme)
        .with_prompt("How many results do you want to see?")
        .default(5)
        .validate_with(|n: &u32| {
            if *n == 0 {
                Err("Enter a number of at least 1")
            } else {
                Ok(())
            }
        })
        .interact_text()?;

    Ok(PromptAnswers {
        text: text.trim().to_string(),
        language,
        license,
        sort,
        max_results,
    })
}

fn optional(theme: &ColorfulTheme, prompt: &str) -> dialoguer::Result<Option<String>> {
    let value: String = Input::with_theme(theme)
        .with_prompt(prompt)
        .allow_empty(true)
        .interact_text()?;
    Ok(blank_to_none(value))
}

fn blank_to_none(value: String) -> Option<String> {
    let value = value.trim();
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}
