use checkmark_core::validation::{content_errors, due_date_error};
use checkmark_core::{CheckmarkItem, NewCheckmark, Priority, ValidationError};
use chrono::NaiveDate;

/// Format the due date field is typed in.
pub const INPUT_DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    #[error(transparent)]
    Field(#[from] ValidationError),
    #[error("Due date '{0}' is not a valid date (expected YYYY-MM-DD)")]
    MalformedDueDate(String),
}

/// What a valid form turns into.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    Create(NewCheckmark),
    Update { id: i32, item: CheckmarkItem },
}

/// Editable fields of the create/edit form, kept as the user typed them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CheckmarkDraft {
    pub title: String,
    pub description: String,
    pub is_completed: bool,
    /// Empty when no due date is set.
    pub due_date: String,
    pub priority: Priority,
    pub editing: Option<CheckmarkItem>,
}

impl CheckmarkDraft {
    pub fn new() -> Self {
        Self::default()
    }

    /// Prefills the form from an existing item.
    pub fn editing(item: &CheckmarkItem) -> Self {
        Self {
            title: item.title.clone(),
            description: item.description.clone(),
            is_completed: item.is_completed,
            due_date: item
                .due_date
                .map(|due| due.format(INPUT_DATE_FORMAT).to_string())
                .unwrap_or_default(),
            priority: item.priority,
            editing: Some(item.clone()),
        }
    }

    pub fn is_editing(&self) -> bool {
        self.editing.is_some()
    }

    fn parsed_due_date(&self) -> Result<Option<NaiveDate>, FormError> {
        let raw = self.due_date.trim();
        if raw.is_empty() {
            return Ok(None);
        }
        NaiveDate::parse_from_str(raw, INPUT_DATE_FORMAT)
            .map(Some)
            .map_err(|_| FormError::MalformedDueDate(raw.to_string()))
    }

    /// Every problem with the current input. A due date before `today` is
    /// rejected here only; the server accepts it.
    pub fn validate(&self, today: NaiveDate) -> Result<(), Vec<FormError>> {
        let mut errors: Vec<FormError> = content_errors(&self.title, &self.description)
            .into_iter()
            .map(FormError::from)
            .collect();
        match self.parsed_due_date() {
            Ok(due) => errors.extend(due_date_error(due, today).map(FormError::from)),
            Err(err) => errors.push(err),
        }
        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    pub fn is_valid(&self, today: NaiveDate) -> bool {
        self.validate(today).is_ok()
    }

    /// Normalized payload: trimmed text, blank due date sent as none.
    pub fn prepare(&self) -> Result<NewCheckmark, FormError> {
        Ok(NewCheckmark {
            title: self.title.trim().to_string(),
            description: self.description.trim().to_string(),
            is_completed: self.is_completed,
            due_date: self.parsed_due_date()?,
            priority: self.priority,
        })
    }

    /// Validates, then builds the request the form stands for.
    pub fn submit(&self, today: NaiveDate) -> Result<Submission, Vec<FormError>> {
        self.validate(today)?;
        let prepared = self.prepare().map_err(|err| vec![err])?;
        Ok(match &self.editing {
            None => Submission::Create(prepared),
            Some(original) => Submission::Update {
                id: original.id,
                item: CheckmarkItem {
                    title: prepared.title,
                    description: prepared.description,
                    is_completed: prepared.is_completed,
                    due_date: prepared.due_date,
                    priority: prepared.priority,
                    ..original.clone()
                },
            },
        })
    }
}
