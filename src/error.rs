// ─── Error ──────────────────────────────────────────────────────────────────
use smol_str::SmolStr;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecordError {
    #[error("Cannot set unknown key \"{field}\" on {record}")]
    UnknownField { field: SmolStr, record: SmolStr },
    #[error("Cannot set \"{field}\" on an immutable record")]
    ImmutableWriteAttempt { field: SmolStr },
    #[error("Field \"{0}\" declared more than once")]
    DuplicateField(SmolStr),
    #[error("Field slot \"{field}\" belongs to a different record type")]
    ForeignSchema { field: SmolStr },
    #[error("Can't define a record type from a non-object value")]
    NotAnObject,
}
