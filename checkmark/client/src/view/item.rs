use checkmark_core::CheckmarkItem;
use chrono::NaiveDate;
use std::fmt;

use super::DATE_FORMAT;

/// Where an item stands relative to its due date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DueStatus {
    NoDueDate,
    Completed,
    Overdue(i64),
    Today,
    Tomorrow,
    InDays(i64),
    On(NaiveDate),
}

impl DueStatus {
    /// Due dates within this many days are shown relative to today.
    pub const RELATIVE_WINDOW_DAYS: i64 = 7;

    pub fn for_item(item: &CheckmarkItem, today: NaiveDate) -> Self {
        let Some(due) = item.due_date else {
            return DueStatus::NoDueDate;
        };
        if item.is_completed {
            return DueStatus::Completed;
        }
        match (due - today).num_days() {
            days if days < 0 => DueStatus::Overdue(-days),
            0 => DueStatus::Today,
            1 => DueStatus::Tomorrow,
            days if days <= Self::RELATIVE_WINDOW_DAYS => DueStatus::InDays(days),
            _ => DueStatus::On(due),
        }
    }
}

impl fmt::Display for DueStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DueStatus::NoDueDate => Ok(()),
            DueStatus::Completed => write!(f, "Completed"),
            DueStatus::Overdue(days) => write!(f, "Overdue by {} day(s)", days),
            DueStatus::Today => write!(f, "Due today"),
            DueStatus::Tomorrow => write!(f, "Due tomorrow"),
            DueStatus::InDays(days) => write!(f, "Due in {} days", days),
            DueStatus::On(date) => write!(f, "Due on {}", date.format(DATE_FORMAT)),
        }
    }
}

/// A single checkmark as presented to the user.
#[derive(Debug, Clone, Copy)]
pub struct ItemView<'a> {
    item: &'a CheckmarkItem,
    today: NaiveDate,
}

impl<'a> ItemView<'a> {
    pub fn new(item: &'a CheckmarkItem, today: NaiveDate) -> Self {
        Self { item, today }
    }

    pub fn is_overdue(&self) -> bool {
        self.item.is_overdue(self.today)
    }

    pub fn days_until_due(&self) -> Option<i64> {
        self.item.days_until_due(self.today)
    }

    pub fn due_status(&self) -> DueStatus {
        DueStatus::for_item(self.item, self.today)
    }

    pub fn render(&self) -> String {
        let item = self.item;
        let marker = if item.is_completed { "[x]" } else { "[ ]" };
        let mut out = format!("{} #{} {} [{}]", marker, item.id, item.title, item.priority);
        if self.is_overdue() {
            out.push_str(" (overdue)");
        }
        if !item.description.is_empty() {
            out.push_str(&format!("\n    {}", item.description));
        }
        let status = self.due_status();
        if status != DueStatus::NoDueDate {
            out.push_str(&format!("\n    {}", status));
        }
        out.push_str(&format!(
            "\n    Created {}",
            item.created_at.date_naive().format(DATE_FORMAT)
        ));
        if let Some(updated_at) = item.updated_at {
            out.push_str(&format!(
                ", updated {}",
                updated_at.date_naive().format(DATE_FORMAT)
            ));
        }
        out
    }
}
