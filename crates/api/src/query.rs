//! Query parameter types shared by the project tree handlers.

use consult_core::error::CoreError;
use consult_core::query::TreeFilter;
use consult_core::status::Status;
use consult_core::types::DbId;
use serde::Deserialize;

/// Longest search term accepted from a client.
pub const MAX_SEARCH_LENGTH: usize = 200;

/// Filter parameters for `GET /projects/{id}/tree` (`?search=&status=&assignee=`).
///
/// Blank `search` and `status` values are treated as absent.
#[derive(Debug, Default, Deserialize)]
pub struct TreeQueryParams {
    pub search: Option<String>,
    pub status: Option<String>,
    pub assignee: Option<DbId>,
}

impl TreeQueryParams {
    /// Validate the parameters and turn them into a [`TreeFilter`].
    pub fn into_filter(self) -> Result<TreeFilter, CoreError> {
        let search = self.search.filter(|s| !s.trim().is_empty());
        if let Some(term) = &search {
            if term.chars().count() > MAX_SEARCH_LENGTH {
                return Err(CoreError::Validation(format!(
                    "search must be at most {MAX_SEARCH_LENGTH} characters"
                )));
            }
        }

        let status = self
            .status
            .filter(|s| !s.trim().is_empty())
            .map(|s| Status::from_str_value(&s))
            .transpose()
            .map_err(CoreError::Validation)?;

        Ok(TreeFilter {
            search,
            status,
            assignee: self.assignee,
        })
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn empty_params_give_empty_filter() {
        let filter = TreeQueryParams {
            search: Some("  ".into()),
            status: Some(String::new()),
            assignee: None,
        }
        .into_filter()
        .unwrap();
        assert!(filter.is_empty());
    }

    #[test]
    fn status_is_parsed_case_insensitively() {
        let filter = TreeQueryParams {
            status: Some("IN_PROGRESS".into()),
            ..Default::default()
        }
        .into_filter()
        .unwrap();
        assert_eq!(filter.status, Some(Status::InProgress));
    }

    #[test]
    fn unknown_status_is_a_validation_error() {
        let result = TreeQueryParams {
            status: Some("blocked".into()),
            ..Default::default()
        }
        .into_filter();
        assert_matches!(result, Err(CoreError::Validation(_)));
    }

    #[test]
    fn overlong_search_is_rejected() {
        let result = TreeQueryParams {
            search: Some("x".repeat(MAX_SEARCH_LENGTH + 1)),
            ..Default::default()
        }
        .into_filter();
        assert_matches!(result, Err(CoreError::Validation(_)));
    }
}
