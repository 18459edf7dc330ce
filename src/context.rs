//! Per-evaluation scratch storage
//!
//! A [`Context`] lives for exactly one evaluation call. Validators use it to
//! hand structured failure detail from their `test` step to their own
//! `report` step, so the report does not have to recompute anything.
//!
//! Each validator instance owns a [`Slot`], allocated once when the validator
//! is constructed. A validator only ever reads the slot it owns, so two
//! instances built by the same constructor never see each other's payload.
//!
//! # Examples
//!
//! ```
//! use weir::context::{Context, Slot};
//!
//! let slot = Slot::new();
//! let mut cx = Context::new();
//!
//! cx.stash(slot, 3usize);
//! assert_eq!(cx.get::<usize>(slot), Some(&3));
//! assert_eq!(cx.get::<String>(slot), None);
//! ```

use std::any::Any;
use std::collections::HashMap;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_SLOT: AtomicU64 = AtomicU64::new(0);

/// Opaque key identifying one validator instance inside a [`Context`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Slot(u64);

impl Slot {
    /// Allocate a fresh slot, distinct from every slot allocated before.
    pub fn new() -> Self {
        Slot(NEXT_SLOT.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for Slot {
    fn default() -> Self {
        Self::new()
    }
}

/// Scratch store scoped to a single evaluation call.
#[derive(Default)]
pub struct Context {
    slots: HashMap<Slot, Box<dyn Any + Send>>,
}

impl Context {
    /// Create an empty context.
    pub fn new() -> Self {
        Context {
            slots: HashMap::new(),
        }
    }

    /// Store `payload` under `slot`, replacing whatever was there.
    pub fn stash<T: Any + Send>(&mut self, slot: Slot, payload: T) {
        self.slots.insert(slot, Box::new(payload));
    }

    /// Borrow the payload under `slot`, if one of type `T` was stashed.
    pub fn get<T: Any>(&self, slot: Slot) -> Option<&T> {
        self.slots.get(&slot).and_then(|payload| payload.downcast_ref())
    }

    /// Number of occupied slots.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Returns true if nothing has been stashed.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

impl fmt::Debug for Context {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Context")
            .field("slots", &self.slots.len())
            .finish()
    }
}
