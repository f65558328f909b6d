//! Structured change events published by [`ObservableList`](crate::ObservableList).

use std::collections::BTreeSet;
use std::fmt;

/// Describes one mutation of an observable list.
///
/// Positions are 0-based. For [`Change::InsertedAt`] they are the positions
/// the new elements occupy after the insertion; for [`Change::DeletedAt`]
/// they are the positions the removed elements held before the removal.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Change {
    /// One or more positions now hold newly inserted elements.
    InsertedAt(BTreeSet<usize>),
    /// Positions that held now-removed elements.
    DeletedAt(BTreeSet<usize>),
}

impl Change {
    /// A single-element insertion at `position`.
    pub fn inserted_at(position: usize) -> Self {
        Self::InsertedAt(BTreeSet::from([position]))
    }

    /// A single-element deletion at `position`.
    pub fn deleted_at(position: usize) -> Self {
        Self::DeletedAt(BTreeSet::from([position]))
    }

    /// The affected positions, in ascending order.
    pub fn positions(&self) -> &BTreeSet<usize> {
        match self {
            Self::InsertedAt(positions) | Self::DeletedAt(positions) => positions,
        }
    }

    /// Returns `true` for [`Change::InsertedAt`].
    pub fn is_insertion(&self) -> bool {
        matches!(self, Self::InsertedAt(_))
    }

    /// Returns `true` for [`Change::DeletedAt`].
    pub fn is_deletion(&self) -> bool {
        matches!(self, Self::DeletedAt(_))
    }
}

impl fmt::Display for Change {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (label, positions) = match self {
            Self::InsertedAt(positions) => ("inserted at", positions),
            Self::DeletedAt(positions) => ("deleted at", positions),
        };
        write!(f, "{label} {positions:?}")
    }
}
