use checkmark_core::CheckmarkItem;
use chrono::NaiveDate;
use std::cmp::Ordering;

use super::ItemView;

/// Which items the list shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum Filter {
    #[default]
    All,
    Completed,
    Pending,
}

impl Filter {
    pub fn matches(&self, item: &CheckmarkItem) -> bool {
        match self {
            Filter::All => true,
            Filter::Completed => item.is_completed,
            Filter::Pending => !item.is_completed,
        }
    }

    fn label(&self) -> Option<&'static str> {
        match self {
            Filter::All => None,
            Filter::Completed => Some("completed"),
            Filter::Pending => Some("pending"),
        }
    }

    fn empty_message(&self) -> (&'static str, &'static str) {
        match self {
            Filter::All => (
                "No checkmarks found",
                "Start by creating your first checkmark!",
            ),
            Filter::Completed => (
                "No completed checkmarks",
                "Complete some tasks to see them here.",
            ),
            Filter::Pending => ("No pending checkmarks", "All tasks are done!"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum SortKey {
    #[default]
    Created,
    DueDate,
    Priority,
    Title,
}

impl SortKey {
    fn label(&self) -> &'static str {
        match self {
            SortKey::Created => "creation date",
            SortKey::DueDate => "due date",
            SortKey::Priority => "priority",
            SortKey::Title => "title",
        }
    }

    fn compare(&self, a: &CheckmarkItem, b: &CheckmarkItem) -> Ordering {
        match self {
            SortKey::Created => a.created_at.cmp(&b.created_at),
            // Undated items rank after every dated one.
            SortKey::DueDate => (a.due_date.is_none(), a.due_date)
                .cmp(&(b.due_date.is_none(), b.due_date)),
            SortKey::Priority => a.priority.cmp(&b.priority),
            SortKey::Title => a.title.to_lowercase().cmp(&b.title.to_lowercase()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

impl SortOrder {
    fn label(&self) -> &'static str {
        match self {
            SortOrder::Asc => "ascending",
            SortOrder::Desc => "descending",
        }
    }
}

/// Counters shown above the list. They always cover every fetched item,
/// whatever the active filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ListStats {
    pub total: usize,
    pub completed: usize,
    pub pending: usize,
    pub overdue: usize,
}

/// Local copy of the fetched collection plus the user's view settings.
#[derive(Debug, Clone, Default)]
pub struct ListView {
    items: Vec<CheckmarkItem>,
    pub filter: Filter,
    pub sort_key: SortKey,
    pub sort_order: SortOrder,
}

impl ListView {
    pub fn new(items: Vec<CheckmarkItem>) -> Self {
        Self {
            items,
            ..Default::default()
        }
    }

    pub fn items(&self) -> &[CheckmarkItem] {
        &self.items
    }

    pub fn find(&self, id: i32) -> Option<&CheckmarkItem> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Items passing the filter, in display order. Ties keep fetch order.
    pub fn visible(&self) -> Vec<&CheckmarkItem> {
        let mut visible: Vec<&CheckmarkItem> = self
            .items
            .iter()
            .filter(|item| self.filter.matches(item))
            .collect();
        visible.sort_by(|a, b| {
            let ordering = self.sort_key.compare(a, b);
            match self.sort_order {
                SortOrder::Asc => ordering,
                SortOrder::Desc => ordering.reverse(),
            }
        });
        visible
    }

    pub fn stats(&self, today: NaiveDate) -> ListStats {
        let completed = self.items.iter().filter(|item| item.is_completed).count();
        ListStats {
            total: self.items.len(),
            completed,
            pending: self.items.len() - completed,
            overdue: self
                .items
                .iter()
                .filter(|item| item.is_overdue(today))
                .count(),
        }
    }

    /// Replaces the local copy of an item the server accepted an update for.
    pub fn apply_toggle(&mut self, updated: CheckmarkItem) {
        if let Some(item) = self.items.iter_mut().find(|item| item.id == updated.id) {
            *item = updated;
        }
    }

    /// Drops an item the server confirmed as deleted.
    pub fn apply_delete(&mut self, id: i32) {
        self.items.retain(|item| item.id != id);
    }

    pub fn render(&self, today: NaiveDate) -> String {
        let stats = self.stats(today);
        let visible = self.visible();

        let mut showing = format!("Showing {} of {} checkmarks", visible.len(), stats.total);
        if let Some(label) = self.filter.label() {
            showing.push_str(&format!(" (filtered by: {})", label));
        }
        let mut lines = vec![
            "Checkmarks".to_string(),
            format!(
                "Total: {} | Completed: {} | Pending: {} | Overdue: {}",
                stats.total, stats.completed, stats.pending, stats.overdue
            ),
            showing,
            format!(
                "Sorted by: {} ({})",
                self.sort_key.label(),
                self.sort_order.label()
            ),
            String::new(),
        ];

        if visible.is_empty() {
            let (title, hint) = self.filter.empty_message();
            lines.push(title.to_string());
            lines.push(hint.to_string());
        } else {
            let blocks: Vec<String> = visible
                .iter()
                .map(|item| ItemView::new(item, today).render())
                .collect();
            lines.push(blocks.join("\n\n"));
            lines.push(String::new());
            lines.push(format!(
                "Status: {} pending, {} overdue",
                stats.pending, stats.overdue
            ));
        }
        lines.join("\n")
    }
}
