//! Prelude module for rowcast.
//!
//! ```ignore
//! use rowcast::prelude::*;
//! ```

// Model
pub use crate::{Change, ListConfig, ObservableList};

// Signal/subscription system
pub use crate::{ConnectionId, Signal, Subscription};

// Presentation
pub use crate::{ListPresenter, ListScreen, RowTable, RowUpdate};
