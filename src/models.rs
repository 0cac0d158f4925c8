use serde::{Deserialize, Serialize};
use serde_json::json;
use validator::Validate;

use crate::error::{AppError, AppResult};

/// Stored form of a catalog entry. The id is always assigned by the store.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    pub id: i32,
    pub title: String,
    pub overview: String,
    pub year: i32,
    pub rating: f64,
    pub category: String,
}

/// Inbound payload for create and update. A client-supplied id is accepted
/// in the JSON but ignored; the store owns identifier assignment.
#[derive(Clone, Debug, Deserialize, Validate)]
pub struct MovieDraft {
    #[serde(default)]
    pub id: Option<i32>,
    #[validate(length(min = 5, max = 15, message = "length must be between 5 and 15"))]
    pub title: String,
    #[validate(length(min = 15, max = 50, message = "length must be between 15 and 50"))]
    pub overview: String,
    #[validate(range(max = 2022, message = "must not be later than 2022"))]
    pub year: i32,
    #[validate(range(min = 1.0, max = 10.0, message = "must be between 1 and 10"))]
    pub rating: f64,
    #[validate(length(min = 5, max = 15, message = "length must be between 5 and 15"))]
    pub category: String,
}

impl MovieDraft {
    /// Runs the field constraints, turning violations into a structured
    /// per-field list for the 422 response body.
    pub fn validated(self) -> AppResult<Self> {
        match self.validate() {
            Ok(()) => Ok(self),
            Err(errors) => {
                let mut details = Vec::new();
                for (field, violations) in errors.field_errors() {
                    for violation in violations {
                        details.push(json!({
                            "field": AsRef::<str>::as_ref(field),
                            "code": violation.code.as_ref(),
                            "message": violation.message.as_deref(),
                        }));
                    }
                }
                Err(AppError::Validation(details))
            }
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft() -> MovieDraft {
        MovieDraft {
            id: None,
            title: "Inception".to_string(),
            overview: "A thief who steals secrets".to_string(),
            year: 2010,
            rating: 8.8,
            category: "Sci-Fi".to_string(),
        }
    }

    #[test]
    fn valid_draft_passes() {
        assert!(draft().validated().is_ok());
    }

    fn violated_fields(err: AppError) -> Vec<String> {
        match err {
            AppError::Validation(details) => details
                .iter()
                .map(|d| d["field"].as_str().unwrap_or_default().to_string())
                .collect(),
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn short_title_is_rejected() {
        let mut d = draft();
        d.title = "Up".to_string();
        let fields = violated_fields(d.validated().unwrap_err());
        assert_eq!(fields, vec!["title"]);
    }

    #[test]
    fn short_overview_is_rejected() {
        let mut d = draft();
        d.overview = "too short".to_string();
        let fields = violated_fields(d.validated().unwrap_err());
        assert_eq!(fields, vec!["overview"]);
    }

    #[test]
    fn future_year_is_rejected() {
        let mut d = draft();
        d.year = 2023;
        let fields = violated_fields(d.validated().unwrap_err());
        assert_eq!(fields, vec!["year"]);
    }

    #[test]
    fn out_of_range_rating_is_rejected() {
        let mut d = draft();
        d.rating = 0.5;
        let fields = violated_fields(d.validated().unwrap_err());
        assert_eq!(fields, vec!["rating"]);
    }

    #[test]
    fn long_category_is_rejected() {
        let mut d = draft();
        d.category = "a genre name that is far too long".to_string();
        let fields = violated_fields(d.validated().unwrap_err());
        assert_eq!(fields, vec!["category"]);
    }
}
