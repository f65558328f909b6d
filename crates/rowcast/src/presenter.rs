//! View-side handling of list changes.
//!
//! A [`ListPresenter`] turns each [`Change`] into incremental view updates.
//! [`RowTable`] is a headless list view: it keeps the displayed cell texts
//! and records the batched row insertions and deletions a real table widget
//! would animate.

use rowcast_core::logging::targets;
use rowcast_core::{Change, ObservableList};

/// Translates list changes into view updates.
pub trait ListPresenter {
    /// Apply one change. `source` already reflects it.
    fn apply(&mut self, change: &Change, source: &ObservableList);
}

/// One batch of row updates performed on the view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowUpdate {
    /// Rows inserted at these positions (ascending).
    InsertRows(Vec<usize>),
    /// Rows deleted from these pre-removal positions (ascending).
    DeleteRows(Vec<usize>),
    /// All rows rebuilt from the model.
    Reload,
}

/// Most row updates a [`RowTable`] keeps; older entries are discarded.
pub const MAX_RECORDED_UPDATES: usize = 256;

/// A headless list view that mirrors an [`ObservableList`].
///
/// Cells display the decimal value of the item in the matching row. The
/// table records the row updates it performs, keeping at most
/// [`MAX_RECORDED_UPDATES`] of them; drain them with
/// [`take_updates`](Self::take_updates).
///
/// A change is applied incrementally only when it accounts for the whole
/// difference between the displayed rows and the source. Otherwise (for
/// example when another subscriber mutated the list from inside its handler,
/// so events arrive out of order) the table reloads from the source.
#[derive(Debug, Default)]
pub struct RowTable {
    rows: Vec<String>,
    updates: Vec<RowUpdate>,
}

impl RowTable {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a table showing the current contents of `source`.
    pub fn for_source(source: &ObservableList) -> Self {
        let mut table = Self::new();
        table.reload(source);
        table
    }

    /// Rebuild every row from `source`.
    pub fn reload(&mut self, source: &ObservableList) {
        self.rows = source.snapshot().iter().map(i64::to_string).collect();
        self.record(RowUpdate::Reload);
        tracing::debug!(target: targets::PRESENTER, rows = self.rows.len(), "table reloaded");
    }

    /// Number of displayed rows.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Text of the cell in `row`.
    pub fn cell_text(&self, row: usize) -> Option<&str> {
        self.rows.get(row).map(String::as_str)
    }

    /// All displayed cell texts, top to bottom.
    pub fn rows(&self) -> &[String] {
        &self.rows
    }

    /// The most recent row updates, oldest first.
    pub fn updates(&self) -> &[RowUpdate] {
        &self.updates
    }

    /// Drain the recorded row updates.
    pub fn take_updates(&mut self) -> Vec<RowUpdate> {
        std::mem::take(&mut self.updates)
    }

    /// Returns `true` if the displayed rows match the contents of `source`.
    pub fn is_in_sync(&self, source: &ObservableList) -> bool {
        let items = source.snapshot();
        self.rows.len() == items.len()
            && self
                .rows
                .iter()
                .zip(&items)
                .all(|(text, value)| *text == value.to_string())
    }

    fn record(&mut self, update: RowUpdate) {
        if self.updates.len() >= MAX_RECORDED_UPDATES {
            self.updates.remove(0);
        }
        self.updates.push(update);
    }

    fn reload_out_of_step(&mut self, change: &Change, source: &ObservableList) {
        tracing::warn!(
            target: targets::PRESENTER,
            %change,
            rows = self.rows.len(),
            source_len = source.len(),
            "change does not match the displayed rows, reloading"
        );
        self.reload(source);
    }

    fn insert_rows(&mut self, positions: &[usize], source: &ObservableList) -> bool {
        if self.rows.len() + positions.len() != source.len() {
            return false;
        }
        for &position in positions {
            match source.get(position) {
                Some(value) if position <= self.rows.len() => {
                    self.rows.insert(position, value.to_string());
                }
                _ => return false,
            }
        }
        self.record(RowUpdate::InsertRows(positions.to_vec()));
        true
    }

    fn delete_rows(&mut self, positions: &[usize], source: &ObservableList) -> bool {
        let fits = self.rows.len().checked_sub(positions.len()) == Some(source.len())
            && positions.iter().all(|&position| position < self.rows.len());
        if !fits {
            return false;
        }
        // Highest first so earlier removals do not shift later positions.
        for &position in positions.iter().rev() {
            self.rows.remove(position);
        }
        self.record(RowUpdate::DeleteRows(positions.to_vec()));
        true
    }
}

impl ListPresenter for RowTable {
    fn apply(&mut self, change: &Change, source: &ObservableList) {
        tracing::trace!(target: targets::PRESENTER, %change, "applying change");
        let positions: Vec<usize> = change.positions().iter().copied().collect();
        let applied = match change {
            Change::InsertedAt(_) => self.insert_rows(&positions, source),
            Change::DeletedAt(_) => self.delete_rows(&positions, source),
        };
        if !applied {
            self.reload_out_of_step(change, source);
        }
    }
}
