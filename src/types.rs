use crate::spooky_record::Record;
use rustc_hash::FxHasher;
use smol_str::SmolStr;
use std::hash::BuildHasherDefault;
use std::num::NonZeroU64;
use std::sync::atomic::{AtomicU64, Ordering};

pub type FastMap<K, V> = std::collections::HashMap<K, V, BuildHasherDefault<FxHasher>>;

/// Schemas with at most this many fields resolve names by linear scan.
pub const DEFAULT_LINEAR_LOOKUP_MAX: usize = 4;

/// Display name used when a record type is defined without one.
pub const DEFAULT_RECORD_NAME: &str = "Record";

// ─── Identity ───────────────────────────────────────────────────────────────

static NEXT_OWNER_ID: AtomicU64 = AtomicU64::new(1);
static NEXT_SCHEMA_ID: AtomicU64 = AtomicU64::new(1);

/// Opaque token naming one mutation session. Two ids compare equal only if
/// one is a copy of the other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct OwnerId(NonZeroU64);

impl OwnerId {
    pub fn new() -> Self {
        let raw = NEXT_OWNER_ID.fetch_add(1, Ordering::Relaxed);
        // The counter starts at 1 and would need 2^64 sessions to wrap.
        Self(NonZeroU64::new(raw).unwrap_or(NonZeroU64::MIN))
    }
}

impl Default for OwnerId {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct SchemaId(u64);

impl SchemaId {
    pub(crate) fn next() -> Self {
        Self(NEXT_SCHEMA_ID.fetch_add(1, Ordering::Relaxed))
    }
}

// ─── Ownership ──────────────────────────────────────────────────────────────

/// Mutation state of a record.
///
/// `Frozen` records are shareable values: every write produces a new record.
/// `Owned` records belong to one mutation session and are written in place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Ownership {
    #[default]
    Frozen,
    Owned(OwnerId),
}

impl Ownership {
    #[inline]
    pub fn owner(self) -> Option<OwnerId> {
        match self {
            Ownership::Frozen => None,
            Ownership::Owned(id) => Some(id),
        }
    }

    #[inline]
    pub fn is_owned(self) -> bool {
        matches!(self, Ownership::Owned(_))
    }
}

impl From<Option<OwnerId>> for Ownership {
    fn from(owner: Option<OwnerId>) -> Self {
        match owner {
            Some(id) => Ownership::Owned(id),
            None => Ownership::Frozen,
        }
    }
}

// ─── FieldSlot (Resolved Field Position) ───────────────────────────────────

/// A field resolved once against its record type, for lookup-free access
/// through [`Record::get_at`] and [`Record::set_at`].
///
/// A slot is only valid for records of the type that produced it; using it
/// elsewhere yields [`RecordError::ForeignSchema`](crate::RecordError).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSlot {
    pub(crate) index: usize,
    pub(crate) name: SmolStr,
    pub(crate) schema_id: SchemaId,
}

impl FieldSlot {
    #[inline]
    pub fn index(&self) -> usize {
        self.index
    }

    #[inline]
    pub fn name(&self) -> &str {
        self.name.as_str()
    }
}

// ─── Iterator ───────────────────────────────────────────────────────────────

/// `(field, value)` pairs of a record in schema order, defaults filled in.
pub struct FieldIter<'a, V> {
    pub(crate) record: &'a Record<V>,
    pub(crate) front: usize,
    pub(crate) back: usize,
}

impl<'a, V> Iterator for FieldIter<'a, V> {
    type Item = (&'a str, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        if self.front >= self.back {
            return None;
        }
        let pair = self.record.pair_at(self.front);
        self.front += 1;
        Some(pair)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.back - self.front;
        (remaining, Some(remaining))
    }
}

impl<'a, V> DoubleEndedIterator for FieldIter<'a, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front >= self.back {
            return None;
        }
        self.back -= 1;
        Some(self.record.pair_at(self.back))
    }
}

impl<'a, V> ExactSizeIterator for FieldIter<'a, V> {}
