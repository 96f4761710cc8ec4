use super::record::Record;
use crate::error::RecordError;
use crate::types::*;
use log::trace;
use smol_str::SmolStr;
use std::sync::Arc;

impl<V: Clone> Record<V> {
    // ════════════════════════════════════════════════════════════════════════
    // Internal: slot writes
    // ════════════════════════════════════════════════════════════════════════

    /// Write one slot, in place when owned and into a fresh copy when frozen.
    fn write_slot(mut self, index: usize, value: Option<V>) -> Self {
        match self.ownership {
            Ownership::Owned(_) => {
                // Unique after acquire_ownership, so this does not allocate
                // unless the session record was cloned.
                Arc::make_mut(&mut self.slots)[index] = value;
                self
            }
            Ownership::Frozen => {
                trace!(
                    "{}: copy-on-write of {} slots",
                    self.schema.name(),
                    self.slots.len()
                );
                let mut slots = Vec::clone(&self.slots);
                slots[index] = value;
                Record::from_parts(Arc::clone(&self.schema), slots, Ownership::Frozen)
            }
        }
    }

    /// In-place write through a borrowed handle. Frozen records refuse.
    fn write_in_place(
        &mut self,
        index: usize,
        field: &str,
        value: Option<V>,
    ) -> Result<(), RecordError> {
        if !self.ownership.is_owned() {
            return Err(RecordError::ImmutableWriteAttempt {
                field: SmolStr::new(field),
            });
        }
        Arc::make_mut(&mut self.slots)[index] = value;
        Ok(())
    }

    fn unknown_field(&self, field: &str) -> RecordError {
        RecordError::UnknownField {
            field: SmolStr::new(field),
            record: SmolStr::new(self.schema.name()),
        }
    }

    // ════════════════════════════════════════════════════════════════════════
    // Setters by name
    // ════════════════════════════════════════════════════════════════════════

    /// Set `field` to `value`.
    ///
    /// An owned record is updated in place and handed back. A frozen record
    /// is left as it was; the result is a new frozen record sharing the
    /// schema. Unknown fields fail with [`RecordError::UnknownField`].
    pub fn set(self, field: &str, value: V) -> Result<Self, RecordError> {
        let Some(index) = self.schema.index_of(field) else {
            return Err(self.unknown_field(field));
        };
        Ok(self.write_slot(index, Some(value)))
    }

    /// Reset `field` to its schema default. Unknown fields are a no-op that
    /// returns the record untouched.
    pub fn remove(self, field: &str) -> Self {
        match self.schema.index_of(field) {
            Some(index) => self.write_slot(index, None),
            None => self,
        }
    }

    /// Reset every field to its default.
    ///
    /// Owned records are cleared in place. Frozen records yield a brand-new
    /// record of the same type, as if created with no values.
    pub fn clear(mut self) -> Self {
        match self.ownership {
            Ownership::Owned(_) => {
                Arc::make_mut(&mut self.slots)
                    .iter_mut()
                    .for_each(|slot| *slot = None);
                self
            }
            Ownership::Frozen => Record::empty_of(Arc::clone(&self.schema)),
        }
    }

    // ════════════════════════════════════════════════════════════════════════
    // In-place setters (mutation session only)
    // ════════════════════════════════════════════════════════════════════════

    /// Set `field` in place through a borrowed session record.
    ///
    /// The field is resolved before anything is written, so a failure leaves
    /// the record exactly as it was and still usable. Fails with
    /// [`RecordError::UnknownField`] for fields outside the schema and with
    /// [`RecordError::ImmutableWriteAttempt`] on frozen records.
    pub fn set_in_place(&mut self, field: &str, value: V) -> Result<(), RecordError> {
        let index = self
            .schema
            .index_of(field)
            .ok_or_else(|| self.unknown_field(field))?;
        self.write_in_place(index, field, Some(value))
    }

    /// Reset `field` to its default in place. Unknown fields are a no-op, as
    /// with [`remove`](Self::remove); frozen records fail.
    pub fn remove_in_place(&mut self, field: &str) -> Result<(), RecordError> {
        match self.schema.index_of(field) {
            Some(index) => self.write_in_place(index, field, None),
            None => Ok(()),
        }
    }

    /// Set a resolved field in place. Same session rules as
    /// [`set_in_place`](Self::set_in_place), without the name lookup.
    #[inline]
    pub fn set_at(&mut self, slot: &FieldSlot, value: V) -> Result<(), RecordError> {
        self.check_slot(slot)?;
        self.write_in_place(slot.index, &slot.name, Some(value))
    }

    /// Reset a resolved field to its default in place.
    #[inline]
    pub fn remove_at(&mut self, slot: &FieldSlot) -> Result<(), RecordError> {
        self.check_slot(slot)?;
        self.write_in_place(slot.index, &slot.name, None)
    }
}
