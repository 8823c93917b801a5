use thiserror::Error;

/// Errors that abort a search run.
///
/// Enrichment lookups use the same type internally, but their failures are
/// always turned into fallback values and never reach the user.
#[derive(Debug, Error)]
pub enum SearchError {
    #[error("invalid query: {0}")]
    InvalidQuery(String),

    #[error("invalid configuration: {0}")]
    Config(String),

    /// Non-success HTTP status with the raw response body.
    #[error("{status} - {body}")]
    Status { status: u16, body: String },

    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("unexpected response: {0}")]
    Decode(String),
}

impl SearchError {
    pub fn status(&self) -> Option<u16> {
        match self {
            SearchError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_error_shows_code_and_body() {
        let err = SearchError::Status {
            status: 422,
            body: r#"{"message":"Validation Failed"}"#.to_string(),
        };
        assert_eq!(err.to_string(), r#"422 - {"message":"Validation Failed"}"#);
        assert_eq!(err.status(), Some(422));
    }

    #[test]
    fn non_status_errors_have_no_code() {
        assert_eq!(SearchError::Decode("bad".into()).status(), None);
    }
}
