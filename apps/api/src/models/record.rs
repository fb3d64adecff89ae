use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use serde::{Deserialize, Serialize};

/// Stable identity of one entry in a repeatable collection.
///
/// Assigned once by an [`IdGenerator`] and never reassigned, so a removed
/// record's id is never seen again within the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(u64);

impl RecordId {
    /// Largest id a client may supply. Matches the largest integer a JSON
    /// client can hold exactly, and keeps the generator far from overflow.
    pub const MAX_SUPPLIED: u64 = (1 << 53) - 1;

    pub fn get(self) -> u64 {
        self.0
    }

    /// Whether a client may hand this id back in a replaced document.
    pub fn is_assignable(self) -> bool {
        self.0 <= Self::MAX_SUPPLIED
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Session-scoped monotonic id source.
///
/// One generator backs every collection in a session, which makes ids unique
/// across collections as well as within them.
#[derive(Debug)]
pub struct IdGenerator {
    next: AtomicU64,
}

impl IdGenerator {
    pub fn new() -> Self {
        Self {
            next: AtomicU64::new(1),
        }
    }

    /// The counter never wraps; supplied ids are capped at
    /// [`RecordId::MAX_SUPPLIED`], so it cannot reach `u64::MAX` in practice.
    pub fn next_id(&self) -> RecordId {
        let issued = self
            .next
            .fetch_update(Ordering::Relaxed, Ordering::Relaxed, |n| n.checked_add(1))
            .unwrap_or_else(|stuck| stuck);
        RecordId(issued)
    }

    /// Marks an externally supplied id as used, so it is never generated later.
    /// Ids above [`RecordId::MAX_SUPPLIED`] are ignored; callers reject them first.
    pub fn observe(&self, id: RecordId) {
        if id.is_assignable() {
            self.next.fetch_max(id.0 + 1, Ordering::Relaxed);
        }
    }
}

impl Default for IdGenerator {
    fn default() -> Self {
        Self::new()
    }
}

/// An identity-bearing entry of an ordered collection (experience, education,
/// project, skill). Every editable field is a string addressed by its
/// camelCase name.
pub trait Record: Clone {
    /// Singular name used in logs and error messages.
    const KIND: &'static str;
    /// Names accepted by [`Record::set_field`].
    const FIELDS: &'static [&'static str];

    fn id(&self) -> RecordId;

    /// A record with every field empty.
    fn blank(id: RecordId) -> Self;

    /// Replaces one named field. Returns `false` for an unknown field name,
    /// leaving the record untouched.
    fn set_field(&mut self, field: &str, value: &str) -> bool;
}
