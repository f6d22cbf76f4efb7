use chrono::{DateTime, NaiveDate, Utc};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// How urgent a checkmark is.
///
/// Crosses the HTTP boundary as a number (`0` = Low, `1` = Medium, `2` = High)
/// and is stored and addressed in URLs by its name.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(try_from = "u8", into = "u8")
)]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
}

/// Raised when a value does not name one of the three priority levels.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown priority level '{0}'")]
pub struct UnknownPriority(pub String);

impl Priority {
    pub const ALL: [Priority; 3] = [Priority::Low, Priority::Medium, Priority::High];

    /// Returns the level's name, as persisted in storage.
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Low => "Low",
            Priority::Medium => "Medium",
            Priority::High => "High",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<Priority> for u8 {
    fn from(priority: Priority) -> Self {
        match priority {
            Priority::Low => 0,
            Priority::Medium => 1,
            Priority::High => 2,
        }
    }
}

impl TryFrom<u8> for Priority {
    type Error = UnknownPriority;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Priority::Low),
            1 => Ok(Priority::Medium),
            2 => Ok(Priority::High),
            other => Err(UnknownPriority(other.to_string())),
        }
    }
}

/// Accepts either the level's name (any casing) or its numeric form.
impl FromStr for Priority {
    type Err = UnknownPriority;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Ok(number) = trimmed.parse::<u8>() {
            return Priority::try_from(number);
        }
        Priority::ALL
            .into_iter()
            .find(|level| level.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| UnknownPriority(s.to_string()))
    }
}

/// A single to-do item.
///
/// `id` and `created_at` are owned by the persistence layer: whatever a caller
/// puts there before the item is first stored gets overwritten.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "camelCase", default)
)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct CheckmarkItem {
    /// Identifier assigned on creation
    pub id: i32,
    /// Short summary of the task
    pub title: String,
    /// Optional longer description, empty when absent
    pub description: String,
    /// Whether the task is done
    pub is_completed: bool,
    /// Optional due date
    pub due_date: Option<NaiveDate>,
    /// Priority level, `0` = Low, `1` = Medium, `2` = High
    #[cfg_attr(feature = "openapi", schema(value_type = u8, minimum = 0, maximum = 2))]
    pub priority: Priority,
    /// When the item was created
    pub created_at: DateTime<Utc>,
    /// When the item was last updated, absent until the first update
    pub updated_at: Option<DateTime<Utc>>,
}

impl Default for CheckmarkItem {
    fn default() -> Self {
        Self {
            id: 0,
            title: String::new(),
            description: String::new(),
            is_completed: false,
            due_date: None,
            priority: Priority::default(),
            created_at: Utc::now(),
            updated_at: None,
        }
    }
}

impl CheckmarkItem {
    /// Label identifying this kind of entity.
    pub const ENTITY_TYPE: &'static str = "Item";

    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Default::default()
        }
    }

    pub fn entity_type(&self) -> &'static str {
        Self::ENTITY_TYPE
    }

    pub fn is_pending(&self) -> bool {
        !self.is_completed
    }

    /// A pending item is overdue once its due date lies strictly before `today`.
    pub fn is_overdue(&self, today: NaiveDate) -> bool {
        self.is_pending() && self.due_date.is_some_and(|due| due < today)
    }

    /// Whole days from `today` until the due date; negative once it has passed.
    pub fn days_until_due(&self, today: NaiveDate) -> Option<i64> {
        self.due_date.map(|due| (due - today).num_days())
    }
}

/// Payload for creating a checkmark.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "camelCase", default)
)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct NewCheckmark {
    /// Short summary of the task
    pub title: String,
    /// Optional longer description
    pub description: String,
    /// Whether the task starts out done
    pub is_completed: bool,
    /// Optional due date
    pub due_date: Option<NaiveDate>,
    /// Priority level, `0` = Low, `1` = Medium, `2` = High
    #[cfg_attr(feature = "openapi", schema(value_type = u8, minimum = 0, maximum = 2))]
    pub priority: Priority,
}

impl NewCheckmark {
    /// Builds the unsaved item this payload describes.
    pub fn into_item(self) -> CheckmarkItem {
        CheckmarkItem {
            title: self.title,
            description: self.description,
            is_completed: self.is_completed,
            due_date: self.due_date,
            priority: self.priority,
            ..Default::default()
        }
    }
}

impl From<&CheckmarkItem> for NewCheckmark {
    fn from(item: &CheckmarkItem) -> Self {
        Self {
            title: item.title.clone(),
            description: item.description.clone(),
            is_completed: item.is_completed,
            due_date: item.due_date,
            priority: item.priority,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn new_item_has_expected_defaults() {
        let before = Utc::now();
        let item = CheckmarkItem::default();

        assert_eq!(item.id, 0);
        assert!(item.title.is_empty());
        assert!(item.description.is_empty());
        assert!(!item.is_completed);
        assert_eq!(item.due_date, None);
        assert_eq!(item.priority, Priority::Medium);
        assert!(item.created_at >= before);
        assert_eq!(item.updated_at, None);
    }

    #[test]
    fn entity_type_is_item() {
        assert_eq!(CheckmarkItem::new("anything").entity_type(), "Item");
    }

    #[test]
    fn priority_parses_names_and_numbers() {
        assert_eq!("High".parse::<Priority>(), Ok(Priority::High));
        assert_eq!("low".parse::<Priority>(), Ok(Priority::Low));
        assert_eq!("1".parse::<Priority>(), Ok(Priority::Medium));
        assert_eq!(
            "Urgent".parse::<Priority>(),
            Err(UnknownPriority("Urgent".to_string()))
        );
        assert!("3".parse::<Priority>().is_err());
    }

    #[test]
    fn priority_is_ordered_by_urgency() {
        assert!(Priority::Low < Priority::Medium);
        assert!(Priority::Medium < Priority::High);
        assert_eq!(u8::from(Priority::High), 2);
    }

    #[test]
    fn overdue_requires_pending_item_with_past_due_date() {
        let today = date(2026, 10, 18);
        let mut item = CheckmarkItem::new("Pay rent");
        assert!(!item.is_overdue(today));

        item.due_date = Some(date(2026, 10, 17));
        assert!(item.is_overdue(today));

        item.due_date = Some(today);
        assert!(!item.is_overdue(today));

        item.due_date = Some(date(2026, 10, 1));
        item.is_completed = true;
        assert!(!item.is_overdue(today));
    }

    #[test]
    fn days_until_due_counts_whole_days() {
        let today = date(2026, 10, 18);
        let mut item = CheckmarkItem::new("Renew passport");
        assert_eq!(item.days_until_due(today), None);

        item.due_date = Some(date(2026, 10, 25));
        assert_eq!(item.days_until_due(today), Some(7));

        item.due_date = Some(date(2026, 10, 15));
        assert_eq!(item.days_until_due(today), Some(-3));
    }

    #[test]
    fn new_checkmark_builds_unsaved_item() {
        let payload = NewCheckmark {
            title: "Test Item".to_string(),
            description: "Test Description".to_string(),
            priority: Priority::High,
            ..Default::default()
        };

        let item = payload.into_item();

        assert_eq!(item.id, 0);
        assert_eq!(item.title, "Test Item");
        assert_eq!(item.description, "Test Description");
        assert_eq!(item.priority, Priority::High);
        assert_eq!(item.updated_at, None);
    }

    #[cfg(feature = "serde")]
    mod json_tests {
        use super::*;

        #[test]
        fn item_serializes_with_camel_case_and_numeric_priority() {
            let item = CheckmarkItem {
                id: 7,
                title: "Water plants".to_string(),
                description: String::new(),
                is_completed: true,
                due_date: Some(date(2026, 11, 2)),
                priority: Priority::High,
                created_at: "2026-10-18T09:30:00Z".parse().unwrap(),
                updated_at: None,
            };

            let json = serde_json::to_value(&item).unwrap();

            assert_eq!(
                json,
                serde_json::json!({
                    "id": 7,
                    "title": "Water plants",
                    "description": "",
                    "isCompleted": true,
                    "dueDate": "2026-11-02",
                    "priority": 2,
                    "createdAt": "2026-10-18T09:30:00Z",
                    "updatedAt": null
                })
            );
        }

        #[test]
        fn new_checkmark_fills_missing_fields_with_defaults() {
            let payload: NewCheckmark =
                serde_json::from_str(r#"{"title": "Call the bank"}"#).unwrap();

            assert_eq!(payload.title, "Call the bank");
            assert_eq!(payload.description, "");
            assert!(!payload.is_completed);
            assert_eq!(payload.due_date, None);
            assert_eq!(payload.priority, Priority::Medium);
        }

        #[test]
        fn out_of_range_priority_is_rejected() {
            let result = serde_json::from_str::<NewCheckmark>(r#"{"title": "x", "priority": 5}"#);
            assert!(result.is_err());
        }
    }
}
