//! Core systems for rowcast.
//!
//! This crate provides the model half of rowcast:
//!
//! - **Observable List**: An ordered list of integers that publishes a
//!   structured [`Change`] after every mutation
//! - **Signal/Subscription System**: Synchronous, registration-ordered
//!   broadcast with owned, idempotently releasable subscriptions
//! - **Configuration**: TOML-backed settings for the initial contents
//!
//! # Example
//!
//! ```
//! use rowcast_core::{Change, ObservableList};
//! use std::sync::{Arc, Mutex};
//!
//! let list = ObservableList::with_items(vec![0, 1, 2]);
//! let changes = Arc::new(Mutex::new(Vec::new()));
//!
//! let changes_clone = changes.clone();
//! let mut subscription = list.subscribe(move |change| {
//!     changes_clone.lock().unwrap().push(change.clone());
//! });
//!
//! list.delete(1); // [0, 2]
//! list.delete(5); // out of range: ignored, nothing emitted
//!
//! subscription.release();
//! list.insert(7, 0); // no longer observed
//!
//! assert_eq!(*changes.lock().unwrap(), vec![Change::deleted_at(1)]);
//! assert_eq!(list.snapshot(), vec![7, 0, 2]);
//! ```

mod change;
pub mod config;
mod error;
mod list;
pub mod logging;
pub mod signal;

pub use change::Change;
pub use config::ListConfig;
pub use error::{Error, Result};
pub use list::ObservableList;
pub use signal::{ConnectionId, Signal, Subscription};
