use super::record::Record;
use crate::error::RecordError;
use crate::types::*;

impl<V> Record<V> {
    // ════════════════════════════════════════════════════════════════════════
    // Field lookup
    // ════════════════════════════════════════════════════════════════════════

    /// True iff `field` is declared by the schema, whether or not it was set.
    #[inline]
    pub fn has(&self, field: &str) -> bool {
        self.schema.contains(field)
    }

    /// True iff `field` holds an explicit value rather than its default.
    #[inline]
    pub fn is_set(&self, field: &str) -> bool {
        self.schema
            .index_of(field)
            .is_some_and(|i| self.slots[i].is_some())
    }

    #[inline]
    pub(crate) fn check_slot(&self, slot: &FieldSlot) -> Result<(), RecordError> {
        if slot.schema_id != self.schema.id {
            return Err(RecordError::ForeignSchema {
                field: slot.name.clone(),
            });
        }
        Ok(())
    }

    // ════════════════════════════════════════════════════════════════════════
    // Read access
    // ════════════════════════════════════════════════════════════════════════

    /// Stored value, or the schema default for an absent slot. Callers
    /// guarantee `index < len()`.
    #[inline]
    pub(crate) fn value_at(&self, index: usize) -> &V {
        match &self.slots[index] {
            Some(value) => value,
            None => self.schema.default_at(index),
        }
    }

    #[inline]
    pub(crate) fn pair_at(&self, index: usize) -> (&str, &V) {
        (self.schema.field_at(index).as_str(), self.value_at(index))
    }

    /// Value of `field`, defaults filled in. `None` if the schema has no
    /// such field.
    #[inline]
    pub fn get(&self, field: &str) -> Option<&V> {
        let index = self.schema.index_of(field)?;
        Some(self.value_at(index))
    }

    /// Like [`get`](Self::get), returning `fallback` for unknown fields.
    #[inline]
    pub fn get_or<'a>(&'a self, field: &str, fallback: &'a V) -> &'a V {
        self.get(field).unwrap_or(fallback)
    }

    /// Read through a resolved [`FieldSlot`]. No name lookup.
    #[inline]
    pub fn get_at(&self, slot: &FieldSlot) -> Result<&V, RecordError> {
        self.check_slot(slot)?;
        Ok(self.value_at(slot.index))
    }

    // ════════════════════════════════════════════════════════════════════════
    // Iteration
    // ════════════════════════════════════════════════════════════════════════

    /// `(field, value)` pairs in schema order. Every call starts a fresh pass.
    #[inline]
    pub fn iter(&self) -> FieldIter<'_, V> {
        FieldIter {
            record: self,
            front: 0,
            back: self.schema.len(),
        }
    }

    pub fn values(&self) -> impl DoubleEndedIterator<Item = &V> + ExactSizeIterator + '_ {
        self.iter().map(|(_, v)| v)
    }
}
