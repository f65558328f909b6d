//! rowcast - a list view kept in sync with an observable model.
//!
//! This crate re-exports [`rowcast_core`] and adds the presentation half:
//!
//! - [`ListPresenter`]: turns each [`Change`] into incremental view updates
//! - [`RowTable`]: a headless table that mirrors the list row by row
//! - [`ListScreen`]: owns the list, the table and the subscription between
//!   them, and exposes the add and delete actions
//!
//! # Example
//!
//! ```
//! use rowcast::prelude::*;
//!
//! let screen = ListScreen::new(ObservableList::with_items(vec![0, 1, 2]));
//!
//! screen.insert_item(9, 1);
//! screen.delete_row(0);
//!
//! assert_eq!(screen.rows(), vec!["9", "1", "2"]);
//! assert!(screen.is_in_sync());
//! ```

pub use rowcast_core::*;

pub mod prelude;
mod presenter;
mod screen;

pub use presenter::{ListPresenter, MAX_RECORDED_UPDATES, RowTable, RowUpdate};
pub use screen::ListScreen;
