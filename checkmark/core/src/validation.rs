use chrono::NaiveDate;
use thiserror::Error;

/// Maximum number of characters in a title.
pub const TITLE_MAX_LEN: usize = 200;
/// Maximum number of characters in a description.
pub const DESCRIPTION_MAX_LEN: usize = 1000;

/// A single rule a checkmark's fields can break.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Title is required")]
    TitleRequired,
    #[error("Title must be at most {} characters", TITLE_MAX_LEN)]
    TitleTooLong,
    #[error("Description must be at most {} characters", DESCRIPTION_MAX_LEN)]
    DescriptionTooLong,
    #[error("Due date cannot be in the past")]
    DueDateInPast,
}

/// Every rule a set of fields broke, in the order they were checked.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{}", .0.iter().map(ToString::to_string).collect::<Vec<_>>().join(". "))]
pub struct ValidationErrors(pub Vec<ValidationError>);

impl ValidationErrors {
    /// Turns the collected errors into a result, `Ok` when there are none.
    pub fn into_result(errors: Vec<ValidationError>) -> Result<(), ValidationErrors> {
        if errors.is_empty() {
            Ok(())
        } else {
            Err(ValidationErrors(errors))
        }
    }

    pub fn contains(&self, error: ValidationError) -> bool {
        self.0.contains(&error)
    }
}

/// Checks the text fields of a checkmark.
pub fn content_errors(title: &str, description: &str) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    if title.trim().is_empty() {
        errors.push(ValidationError::TitleRequired);
    }
    if title.chars().count() > TITLE_MAX_LEN {
        errors.push(ValidationError::TitleTooLong);
    }
    if description.chars().count() > DESCRIPTION_MAX_LEN {
        errors.push(ValidationError::DescriptionTooLong);
    }
    errors
}

/// Same as [`content_errors`], as a `Result`.
pub fn validate_content(title: &str, description: &str) -> Result<(), ValidationErrors> {
    ValidationErrors::into_result(content_errors(title, description))
}

/// A due date may be today or later, never strictly before `today`.
pub fn due_date_error(due_date: Option<NaiveDate>, today: NaiveDate) -> Option<ValidationError> {
    due_date
        .filter(|due| *due < today)
        .map(|_| ValidationError::DueDateInPast)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_title_and_description_within_limits() {
        assert_eq!(validate_content("Buy milk", ""), Ok(()));
        assert_eq!(
            validate_content(&"a".repeat(TITLE_MAX_LEN), &"b".repeat(DESCRIPTION_MAX_LEN)),
            Ok(())
        );
    }

    #[test]
    fn rejects_blank_title() {
        let errors = validate_content("   ", "").unwrap_err();
        assert_eq!(errors, ValidationErrors(vec![ValidationError::TitleRequired]));
    }

    #[test]
    fn collects_every_broken_rule() {
        let errors =
            validate_content(&"a".repeat(TITLE_MAX_LEN + 1), &"b".repeat(DESCRIPTION_MAX_LEN + 1))
                .unwrap_err();

        assert!(errors.contains(ValidationError::TitleTooLong));
        assert!(errors.contains(ValidationError::DescriptionTooLong));
        assert_eq!(
            errors.to_string(),
            "Title must be at most 200 characters. Description must be at most 1000 characters"
        );
    }

    #[test]
    fn counts_characters_not_bytes() {
        let title = "é".repeat(TITLE_MAX_LEN);
        assert_eq!(validate_content(&title, ""), Ok(()));
    }

    #[test]
    fn due_date_today_is_allowed() {
        let today = NaiveDate::from_ymd_opt(2026, 10, 18).unwrap();
        assert_eq!(due_date_error(Some(today), today), None);
        assert_eq!(due_date_error(None, today), None);
        assert_eq!(
            due_date_error(today.pred_opt(), today),
            Some(ValidationError::DueDateInPast)
        );
    }
}
