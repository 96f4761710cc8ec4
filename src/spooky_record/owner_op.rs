use super::record::Record;
use crate::error::RecordError;
use crate::types::*;
use log::trace;
use std::sync::Arc;

impl<V: Clone> Record<V> {
    // ════════════════════════════════════════════════════════════════════════
    // Ownership transitions
    // ════════════════════════════════════════════════════════════════════════

    /// Move the record into the session `owner`, or freeze it with `None`.
    ///
    /// - same owner as now: returned unchanged
    /// - `Some(id)`: a new record over a private copy of the slots, owned by
    ///   `id`, so every later write in the session is in place
    /// - `None`: the record is finalized as a frozen value; later writes go
    ///   through copy-on-write
    pub fn acquire_ownership(mut self, owner: Option<OwnerId>) -> Self {
        if owner == self.ownership.owner() {
            return self;
        }
        match owner {
            Some(id) => {
                trace!("{}: entering mutation session {:?}", self.schema.name(), id);
                let slots = Vec::clone(&self.slots);
                Record::from_parts(Arc::clone(&self.schema), slots, Ownership::Owned(id))
            }
            None => {
                trace!(
                    "{}: freezing after session {:?}",
                    self.schema.name(),
                    self.ownership.owner()
                );
                // The session's slot array is either unique to this record or
                // guarded by make_mut in any clone, so it can be published as is.
                self.ownership = Ownership::Frozen;
                self
            }
        }
    }

    /// Enter a fresh mutation session. Already-owned records stay in theirs.
    pub fn as_mutable(self) -> Self {
        if self.ownership.is_owned() {
            return self;
        }
        self.acquire_ownership(Some(OwnerId::new()))
    }

    /// End the current session and return a frozen record.
    #[inline]
    pub fn as_immutable(self) -> Self {
        self.acquire_ownership(None)
    }

    /// Apply a batch of edits inside one mutation session and return the
    /// result; `self` is never modified.
    ///
    /// `edits` receives an owned record over a private copy of the slots, so
    /// chained `set`/`remove` calls write in place. The result comes back
    /// under the caller's ownership: frozen in, frozen out. If `edits` fails,
    /// its error is returned and `self` is still intact.
    ///
    /// ```
    /// use spooky_record::{defaults, RecordType, SpookyValue};
    ///
    /// let point = RecordType::define(defaults! { "x" => 0i64, "y" => 0i64 }, Some("Point")).unwrap();
    /// let origin = point.empty();
    /// let p = origin
    ///     .with_mutations(|p| p.set("x", SpookyValue::from(3i64))?.set("y", SpookyValue::from(4i64)))
    ///     .unwrap();
    /// assert!(!p.is_owned());
    /// assert_eq!(p.get("y"), Some(&SpookyValue::from(4i64)));
    /// assert_eq!(origin.get("y"), Some(&SpookyValue::from(0i64)));
    /// ```
    pub fn with_mutations<F>(&self, edits: F) -> Result<Self, RecordError>
    where
        F: FnOnce(Self) -> Result<Self, RecordError>,
    {
        let prior = self.ownership.owner();
        let session = self.clone().acquire_ownership(Some(OwnerId::new()));
        let edited = edits(session)?;
        Ok(edited.acquire_ownership(prior))
    }
}
