use crate::schema::{RecordType, Schema};
use crate::spooky_value::SpookyValue;
use crate::types::*;
use std::fmt;
use std::sync::Arc;

// ─── Record ─────────────────────────────────────────────────────────────────

/// An instance of a [`RecordType`]: one slot per schema field, in schema
/// order. An absent slot (`None`) reads as the schema default, so unset
/// fields never hold storage of their own.
///
/// Records are values. `Clone` is O(1) and shares the slot array; writes go
/// through copy-on-write, so no clone ever sees another clone's writes.
pub struct Record<V = SpookyValue> {
    pub(crate) schema: Arc<Schema<V>>,
    pub(crate) slots: Arc<Vec<Option<V>>>,
    pub(crate) ownership: Ownership,
}

impl<V> Clone for Record<V> {
    fn clone(&self) -> Self {
        Self {
            schema: Arc::clone(&self.schema),
            slots: Arc::clone(&self.slots),
            ownership: self.ownership,
        }
    }
}

impl<V> Record<V> {
    #[inline]
    pub(crate) fn from_parts(
        schema: Arc<Schema<V>>,
        slots: Vec<Option<V>>,
        ownership: Ownership,
    ) -> Self {
        debug_assert_eq!(
            slots.len(),
            schema.len(),
            "Record::from_parts: {} slots for {} fields",
            slots.len(),
            schema.len()
        );
        Self {
            schema,
            slots: Arc::new(slots),
            ownership,
        }
    }

    /// All slots absent, frozen.
    pub(crate) fn empty_of(schema: Arc<Schema<V>>) -> Self {
        let mut slots = Vec::with_capacity(schema.len());
        slots.resize_with(schema.len(), || None);
        Self::from_parts(schema, slots, Ownership::Frozen)
    }

    #[inline]
    pub fn schema(&self) -> &Arc<Schema<V>> {
        &self.schema
    }

    /// The type this record was created from.
    pub fn record_type(&self) -> RecordType<V> {
        RecordType::from_schema(Arc::clone(&self.schema))
    }

    #[inline]
    pub fn name(&self) -> &str {
        self.schema.name()
    }

    /// Number of fields, which is fixed by the schema.
    #[inline]
    pub fn len(&self) -> usize {
        self.schema.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.schema.is_empty()
    }

    #[inline]
    pub fn ownership(&self) -> Ownership {
        self.ownership
    }

    #[inline]
    pub fn owner(&self) -> Option<OwnerId> {
        self.ownership.owner()
    }

    #[inline]
    pub fn is_owned(&self) -> bool {
        self.ownership.is_owned()
    }

    /// True if both records share the same schema and the same slot storage,
    /// i.e. one was produced from the other without a copy.
    #[inline]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.schema, &other.schema) && Arc::ptr_eq(&self.slots, &other.slots)
    }

    #[cfg(test)]
    pub(crate) fn storage_addr(&self) -> usize {
        Arc::as_ptr(&self.slots) as usize
    }
}

// ─── Formatting ─────────────────────────────────────────────────────────────

/// `Name { a: 1, b: "x" }` in schema order, defaults filled in.
impl<V: fmt::Display> fmt::Display for Record<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "{} {{}}", self.name());
        }
        write!(f, "{} {{ ", self.name())?;
        for (i, (field, value)) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}: {}", field, value)?;
        }
        f.write_str(" }")
    }
}

impl<V: fmt::Debug> fmt::Debug for Record<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())?;
        if let Ownership::Owned(id) = self.ownership {
            write!(f, "<{:?}>", id)?;
        }
        f.write_str(" ")?;
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<'a, V> IntoIterator for &'a Record<V> {
    type Item = (&'a str, &'a V);
    type IntoIter = FieldIter<'a, V>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
