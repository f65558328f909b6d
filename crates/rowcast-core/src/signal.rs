//! Signal/subscription system for rowcast.
//!
//! A [`Signal<Args>`] broadcasts a value to every connected slot (callback),
//! synchronously and in registration order. Connecting returns a
//! [`Subscription`] that the subscriber owns; releasing or dropping it stops
//! delivery immediately.
//!
//! # Key Types
//!
//! - [`Signal<Args>`] - The broadcast channel
//! - [`Subscription`] - Owned handle for one connected slot
//! - [`ConnectionId`] - Unique identifier of a connection
//!
//! # Ownership
//!
//! The signal owns its slots as plain callbacks and nothing else. A
//! [`Subscription`] only holds a weak reference to the signal's connection
//! table, so it never keeps the signal (or whatever owns it) alive. Slots that
//! need to reach back into their subscriber should capture a
//! [`std::sync::Weak`] for the same reason.
//!
//! # Example
//!
//! ```
//! use rowcast_core::Signal;
//!
//! let text_changed = Signal::<String>::new();
//!
//! let mut subscription = text_changed.connect(|text| {
//!     println!("Text changed to: {}", text);
//! });
//!
//! text_changed.emit("Hello".to_string());
//!
//! // Releasing is idempotent; dropping the handle does the same.
//! assert!(subscription.release());
//! assert!(!subscription.release());
//! ```

use std::sync::{Arc, Weak};

use parking_lot::Mutex;
use slotmap::{SlotMap, new_key_type};

use crate::logging::targets;

new_key_type! {
    /// A unique identifier for a signal-slot connection.
    ///
    /// The ID remains valid until the connection is disconnected or the
    /// signal is dropped.
    pub struct ConnectionId;
}

type Slot<Args> = Arc<dyn Fn(&Args) + Send + Sync>;

/// Internal storage for a single connection.
struct Connection<Args> {
    /// The slot function to invoke (Arc-wrapped so emission can run unlocked).
    slot: Slot<Args>,
    /// Registration order; emission visits connections by ascending sequence.
    sequence: u64,
}

struct ConnectionTable<Args> {
    connections: SlotMap<ConnectionId, Connection<Args>>,
    next_sequence: u64,
}

/// Type-erased view of a connection table, held weakly by [`Subscription`].
trait ConnectionRegistry: Send + Sync {
    fn disconnect(&self, id: ConnectionId) -> bool;
    fn is_connected(&self, id: ConnectionId) -> bool;
}

impl<Args> ConnectionRegistry for Mutex<ConnectionTable<Args>> {
    fn disconnect(&self, id: ConnectionId) -> bool {
        self.lock().connections.remove(id).is_some()
    }

    fn is_connected(&self, id: ConnectionId) -> bool {
        self.lock().connections.contains_key(id)
    }
}

/// A type-safe signal that can have multiple connected slots.
///
/// When a signal is emitted, every connected slot is invoked with a reference
/// to the emitted value, in the order the slots were connected, before
/// `emit` returns.
///
/// # Type Parameter
///
/// - `Args`: The argument type passed to connected slots. Use `()` for signals
///   with no arguments, or a tuple for multiple arguments.
///
/// # Re-entrancy
///
/// The connection table is not locked while slots run. A slot may connect,
/// disconnect or emit on the same signal; a slot disconnected during an
/// emission is not invoked for the remainder of it. Slots connected during an
/// emission first receive the next one.
pub struct Signal<Args> {
    table: Arc<Mutex<ConnectionTable<Args>>>,
}

impl<Args: 'static> Default for Signal<Args> {
    fn default() -> Self {
        Self::new()
    }
}

impl<Args: 'static> Signal<Args> {
    /// Create a new signal with no connections.
    pub fn new() -> Self {
        Self {
            table: Arc::new(Mutex::new(ConnectionTable {
                connections: SlotMap::with_key(),
                next_sequence: 0,
            })),
        }
    }

    /// Connect a slot (closure) to this signal.
    ///
    /// The returned [`Subscription`] disconnects the slot when released or
    /// dropped. Use [`Subscription::detach`] to keep the slot connected for the
    /// lifetime of the signal.
    ///
    /// # Example
    ///
    /// ```
    /// use rowcast_core::Signal;
    ///
    /// let signal = Signal::<i64>::new();
    /// let _subscription = signal.connect(|n| println!("Got: {}", n));
    /// signal.emit(42);
    /// ```
    pub fn connect<F>(&self, slot: F) -> Subscription
    where
        F: Fn(&Args) + Send + Sync + 'static,
    {
        let id = {
            let mut table = self.table.lock();
            let sequence = table.next_sequence;
            table.next_sequence += 1;
            table.connections.insert(Connection {
                slot: Arc::new(slot),
                sequence,
            })
        };
        tracing::trace!(target: targets::SIGNAL, ?id, "slot connected");

        let registry: Weak<dyn ConnectionRegistry> = Arc::downgrade(&self.table) as _;
        Subscription {
            id,
            registry: Some(registry),
        }
    }

    /// Disconnect a specific slot by its connection ID.
    ///
    /// Returns `true` if the connection was found and removed, `false` otherwise.
    pub fn disconnect(&self, id: ConnectionId) -> bool {
        self.table.lock().connections.remove(id).is_some()
    }

    /// Disconnect the slot behind `subscription`.
    ///
    /// Returns `false` if the subscription was already released or belongs to
    /// a different signal. Calling this repeatedly is harmless.
    pub fn unsubscribe(&self, subscription: &Subscription) -> bool {
        if !subscription.is_from(&self.table) {
            return false;
        }
        self.disconnect(subscription.id)
    }

    /// Disconnect all slots from this signal.
    pub fn disconnect_all(&self) {
        self.table.lock().connections.clear();
    }

    /// Get the number of connected slots.
    pub fn connection_count(&self) -> usize {
        self.table.lock().connections.len()
    }

    /// Emit the signal, invoking all connected slots in registration order.
    #[tracing::instrument(skip_all, target = "rowcast_core::signal", level = "trace")]
    pub fn emit(&self, args: Args) {
        let mut slots: Vec<(u64, ConnectionId, Slot<Args>)> = self
            .table
            .lock()
            .connections
            .iter()
            .map(|(id, conn)| (conn.sequence, id, conn.slot.clone()))
            .collect();
        slots.sort_unstable_by_key(|(sequence, _, _)| *sequence);

        tracing::trace!(target: targets::SIGNAL, connection_count = slots.len(), "emitting signal");

        for (_, id, slot) in slots {
            let connected = self.table.lock().connections.contains_key(id);
            if connected {
                slot(&args);
            }
        }
    }
}

/// An owned handle to one connected slot.
///
/// Dropping the handle disconnects the slot. The handle holds only a weak
/// reference to the signal, so it may outlive the signal safely; once the
/// signal is gone, releasing is a no-op.
///
/// # Example
///
/// ```
/// use rowcast_core::Signal;
/// use std::sync::atomic::{AtomicI64, Ordering};
/// use std::sync::Arc;
///
/// let signal = Signal::<i64>::new();
/// let counter = Arc::new(AtomicI64::new(0));
/// {
///     let counter_clone = counter.clone();
///     let _subscription = signal.connect(move |&n| {
///         counter_clone.fetch_add(n, Ordering::SeqCst);
///     });
///     signal.emit(42);
/// }
/// signal.emit(43); // subscription was dropped
/// assert_eq!(counter.load(Ordering::SeqCst), 42);
/// ```
#[must_use = "dropping a Subscription disconnects its slot immediately"]
pub struct Subscription {
    id: ConnectionId,
    registry: Option<Weak<dyn ConnectionRegistry>>,
}

impl Subscription {
    /// The connection this handle controls.
    pub fn id(&self) -> ConnectionId {
        self.id
    }

    /// Returns `true` while the slot is still connected to a live signal.
    pub fn is_active(&self) -> bool {
        self.registry
            .as_ref()
            .and_then(Weak::upgrade)
            .is_some_and(|registry| registry.is_connected(self.id))
    }

    /// Disconnect the slot.
    ///
    /// Returns `true` only for the call that actually removed the connection.
    pub fn release(&mut self) -> bool {
        let Some(registry) = self.registry.take() else {
            return false;
        };
        let removed = registry
            .upgrade()
            .is_some_and(|registry| registry.disconnect(self.id));
        if removed {
            tracing::trace!(target: targets::SIGNAL, id = ?self.id, "subscription released");
        }
        removed
    }

    /// Give up the handle without disconnecting.
    ///
    /// The slot stays connected until [`Signal::disconnect`] is called with the
    /// returned ID or the signal is dropped.
    pub fn detach(mut self) -> ConnectionId {
        self.registry = None;
        self.id
    }

    fn is_from<Args>(&self, table: &Arc<Mutex<ConnectionTable<Args>>>) -> bool {
        self.registry.as_ref().is_some_and(|registry| {
            std::ptr::addr_eq(registry.as_ptr(), Arc::as_ptr(table))
        })
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.release();
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription")
            .field("id", &self.id)
            .field("active", &self.is_active())
            .finish()
    }
}

static_assertions::assert_impl_all!(Signal<i64>: Send, Sync);
static_assertions::assert_impl_all!(Subscription: Send, Sync);
