//! A list screen: model, view and the wiring between them.

use std::ops::RangeInclusive;
use std::sync::{Arc, Weak};

use parking_lot::Mutex;
use rand::Rng;
use rowcast_core::logging::targets;
use rowcast_core::{ListConfig, ObservableList, Result, Subscription};

use crate::presenter::{ListPresenter, RowTable, RowUpdate};

/// Owns a list, the table displaying it, and the subscription that keeps the
/// two in sync.
///
/// The subscription's handler holds only weak references to the list and the
/// table, so neither side keeps the other alive. Dropping the screen releases
/// the subscription.
///
/// # Example
///
/// ```
/// use rowcast::ListScreen;
///
/// let screen = ListScreen::new(rowcast::ObservableList::with_items(vec![0, 1, 2]));
/// screen.delete_row(1);
/// assert_eq!(screen.rows(), vec!["0", "2"]);
/// ```
pub struct ListScreen {
    title: String,
    model: Arc<ObservableList>,
    table: Arc<Mutex<RowTable>>,
    value_range: RangeInclusive<i64>,
    subscription: Subscription,
}

impl ListScreen {
    /// Creates a screen for `model` with the default title and value range.
    pub fn new(model: ObservableList) -> Self {
        Self::with_model(Arc::new(model))
    }

    /// Creates a screen for a list that is shared with other owners.
    pub fn with_model(model: Arc<ObservableList>) -> Self {
        let defaults = ListConfig::default();
        Self::build(model, defaults.title.clone(), defaults.value_range())
    }

    /// Creates a screen and its list from `config`.
    pub fn from_config(config: &ListConfig) -> Result<Self> {
        config.validate()?;
        let model = Arc::new(ObservableList::from_config(config));
        Ok(Self::build(model, config.title.clone(), config.value_range()))
    }

    fn build(model: Arc<ObservableList>, title: String, value_range: RangeInclusive<i64>) -> Self {
        let table = Arc::new(Mutex::new(RowTable::for_source(&model)));
        let subscription = Self::configure_subscription(&model, &table);
        tracing::debug!(target: targets::PRESENTER, %title, rows = model.len(), "screen created");
        Self {
            title,
            model,
            table,
            value_range,
            subscription,
        }
    }

    fn configure_subscription(
        model: &Arc<ObservableList>,
        table: &Arc<Mutex<RowTable>>,
    ) -> Subscription {
        let source: Weak<ObservableList> = Arc::downgrade(model);
        let view: Weak<Mutex<RowTable>> = Arc::downgrade(table);
        model.subscribe(move |change| {
            let (Some(source), Some(view)) = (source.upgrade(), view.upgrade()) else {
                tracing::debug!(target: targets::PRESENTER, %change, "view released, change ignored");
                return;
            };
            view.lock().apply(change, &source);
        })
    }

    /// Title shown above the list.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// The list this screen displays.
    pub fn model(&self) -> &Arc<ObservableList> {
        &self.model
    }

    /// Shared handle to the table.
    pub fn table(&self) -> &Arc<Mutex<RowTable>> {
        &self.table
    }

    /// Returns `true` while the screen still receives list changes.
    pub fn is_observing(&self) -> bool {
        self.subscription.is_active()
    }

    /// Add a random value at a random row, like tapping the add button.
    ///
    /// Returns the inserted value and the row it landed in.
    pub fn add_item<R: Rng + ?Sized>(&self, rng: &mut R) -> (i64, usize) {
        let row = rng.gen_range(0..=self.model.len());
        let value = rng.gen_range(self.value_range.clone());
        self.model.insert(value, i64::try_from(row).unwrap_or(i64::MAX));
        (value, row)
    }

    /// Insert `value` at `row`; out-of-range rows are clamped.
    pub fn insert_item(&self, value: i64, row: i64) {
        self.model.insert(value, row);
    }

    /// Delete the item shown in `row`; rows that do not exist are ignored.
    pub fn delete_row(&self, row: usize) {
        let Ok(position) = i64::try_from(row) else {
            return;
        };
        self.model.delete(position);
    }

    /// Number of rows the table displays.
    pub fn row_count(&self) -> usize {
        self.table.lock().row_count()
    }

    /// Text of the cell in `row`.
    pub fn cell_text(&self, row: usize) -> Option<String> {
        self.table.lock().cell_text(row).map(str::to_string)
    }

    /// All displayed cell texts.
    pub fn rows(&self) -> Vec<String> {
        self.table.lock().rows().to_vec()
    }

    /// Drain the row updates the table performed.
    pub fn take_updates(&self) -> Vec<RowUpdate> {
        self.table.lock().take_updates()
    }

    /// Returns `true` if the table shows exactly what the list holds.
    pub fn is_in_sync(&self) -> bool {
        self.table.lock().is_in_sync(&self.model)
    }
}

impl std::fmt::Debug for ListScreen {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ListScreen")
            .field("title", &self.title)
            .field("model", &self.model)
            .field("value_range", &self.value_range)
            .field("subscription", &self.subscription)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn screen(items: Vec<i64>) -> ListScreen {
        ListScreen::new(ObservableList::with_items(items))
    }

    #[test]
    fn test_initial_rows() {
        let screen = ListScreen::new(ObservableList::new());
        assert_eq!(screen.title(), "Items");
        assert_eq!(screen.row_count(), 10);
        assert_eq!(screen.cell_text(9).as_deref(), Some("9"));
        assert!(screen.is_observing());
    }

    #[test]
    fn test_insert_and_delete_update_rows() {
        let screen = screen(vec![0, 1, 2]);
        screen.take_updates();

        screen.insert_item(99, -5);
        screen.delete_row(2);
        screen.delete_row(40);

        assert_eq!(screen.rows(), vec!["99", "0", "2"]);
        assert_eq!(
            screen.take_updates(),
            vec![RowUpdate::InsertRows(vec![0]), RowUpdate::DeleteRows(vec![2])]
        );
        assert!(screen.is_in_sync());
    }

    #[test]
    fn test_add_item_stays_in_range() {
        let screen = screen(vec![0, 1, 2]);
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..20 {
            let rows_before = screen.row_count();
            let (value, row) = screen.add_item(&mut rng);
            assert!((0..=100).contains(&value));
            assert!(row <= rows_before);
            assert_eq!(screen.cell_text(row), Some(value.to_string()));
        }

        assert_eq!(screen.row_count(), 23);
        assert!(screen.is_in_sync());
    }

    #[test]
    fn test_from_config() {
        let config = ListConfig {
            initial_items: vec![5],
            title: "Scores".to_string(),
            value_min: -3,
            value_max: -3,
        };
        let screen = ListScreen::from_config(&config).unwrap();
        let mut rng = StdRng::seed_from_u64(1);

        let (value, _) = screen.add_item(&mut rng);

        assert_eq!(screen.title(), "Scores");
        assert_eq!(value, -3);
        assert_eq!(screen.row_count(), 2);
    }

    #[test]
    fn test_from_invalid_config() {
        let config = ListConfig {
            value_min: 1,
            value_max: 0,
            ..ListConfig::default()
        };
        assert!(ListScreen::from_config(&config).is_err());
    }

    #[test]
    fn test_dropping_screen_releases_subscription() {
        let screen = screen(vec![0, 1]);
        let model = screen.model().clone();
        assert_eq!(model.subscriber_count(), 1);

        drop(screen);

        assert_eq!(model.subscriber_count(), 0);
        model.insert(3, 0);
        assert_eq!(model.snapshot(), vec![3, 0, 1]);
    }
}
