//! The observable integer list.
//!
//! [`ObservableList`] is the single source of truth for an ordered collection
//! of integers. Its two mutating operations never fail, and each successful
//! mutation is followed by exactly one [`Change`] describing it.

use parking_lot::RwLock;

use crate::change::Change;
use crate::config::{ListConfig, default_items};
use crate::logging::targets;
use crate::signal::{Signal, Subscription};

/// An ordered list of integers that publishes a [`Change`] after every
/// mutation.
///
/// Delivery is synchronous: subscribers run inside [`insert`](Self::insert)
/// or [`delete`](Self::delete), after the items already reflect the change,
/// and may read the list from their handler.
///
/// # Example
///
/// ```
/// use rowcast_core::{Change, ObservableList};
/// use std::sync::{Arc, Mutex};
///
/// let list = ObservableList::with_items(vec![0, 1, 2]);
/// let seen = Arc::new(Mutex::new(Vec::new()));
///
/// let seen_clone = seen.clone();
/// let _subscription = list.subscribe(move |change| {
///     seen_clone.lock().unwrap().push(change.clone());
/// });
///
/// list.insert(99, -5);
/// assert_eq!(list.snapshot(), vec![99, 0, 1, 2]);
/// assert_eq!(*seen.lock().unwrap(), vec![Change::inserted_at(0)]);
/// ```
pub struct ObservableList {
    items: RwLock<Vec<i64>>,
    changed: Signal<Change>,
}

impl Default for ObservableList {
    fn default() -> Self {
        Self::new()
    }
}

impl ObservableList {
    /// Creates a list holding the integers 0 through 9.
    pub fn new() -> Self {
        Self::with_items(default_items())
    }

    /// Creates a list holding `items`.
    pub fn with_items(items: Vec<i64>) -> Self {
        Self {
            items: RwLock::new(items),
            changed: Signal::new(),
        }
    }

    /// Creates a list holding the configured initial items.
    pub fn from_config(config: &ListConfig) -> Self {
        Self::with_items(config.initial_items.clone())
    }

    /// Returns the number of items.
    pub fn len(&self) -> usize {
        self.items.read().len()
    }

    /// Returns `true` if the list holds no items.
    pub fn is_empty(&self) -> bool {
        self.items.read().is_empty()
    }

    /// Returns the item at `index`, if any.
    pub fn get(&self, index: usize) -> Option<i64> {
        self.items.read().get(index).copied()
    }

    /// Returns a copy of the current contents.
    pub fn snapshot(&self) -> Vec<i64> {
        self.items.read().clone()
    }

    /// Inserts `value` at `position`, clamped into `0..=len()`.
    ///
    /// Emits [`Change::InsertedAt`] with the clamped position.
    pub fn insert(&self, value: i64, position: i64) {
        let inserted_at = {
            let mut items = self.items.write();
            let clamped = clamp_insert_position(position, items.len());
            items.insert(clamped, value);
            clamped
        };

        tracing::debug!(
            target: targets::LIST,
            value,
            requested = position,
            position = inserted_at,
            "item inserted"
        );
        self.changed.emit(Change::inserted_at(inserted_at));
    }

    /// Removes the item at `position`.
    ///
    /// Positions outside `0..len()` are ignored: nothing is removed and no
    /// change is emitted. Otherwise emits [`Change::DeletedAt`] with the
    /// position the item held before removal.
    pub fn delete(&self, position: i64) {
        let removed = {
            let mut items = self.items.write();
            checked_position(position, items.len()).map(|index| (index, items.remove(index)))
        };

        let Some((index, value)) = removed else {
            tracing::trace!(target: targets::LIST, position, "delete out of range, ignored");
            return;
        };

        tracing::debug!(target: targets::LIST, value, position = index, "item deleted");
        self.changed.emit(Change::deleted_at(index));
    }

    /// Registers `handler` to receive every future [`Change`].
    ///
    /// Handlers run in registration order. The returned [`Subscription`]
    /// disconnects the handler when released or dropped.
    pub fn subscribe<F>(&self, handler: F) -> Subscription
    where
        F: Fn(&Change) + Send + Sync + 'static,
    {
        self.changed.connect(handler)
    }

    /// Stops delivery to `subscription`.
    ///
    /// Idempotent: returns `true` only for the call that disconnected it.
    pub fn unsubscribe(&self, subscription: &Subscription) -> bool {
        self.changed.unsubscribe(subscription)
    }

    /// Returns the number of live subscriptions.
    pub fn subscriber_count(&self) -> usize {
        self.changed.connection_count()
    }
}

impl std::fmt::Debug for ObservableList {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ObservableList")
            .field("items", &*self.items.read())
            .field("subscribers", &self.changed.connection_count())
            .finish()
    }
}

static_assertions::assert_impl_all!(ObservableList: Send, Sync);

fn clamp_insert_position(position: i64, len: usize) -> usize {
    usize::try_from(position).map_or(0, |position| position.min(len))
}

fn checked_position(position: i64, len: usize) -> Option<usize> {
    usize::try_from(position).ok().filter(|&position| position < len)
}
