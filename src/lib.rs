//! Schema-fixed immutable records.
//!
//! A [`RecordType`] declares an ordered set of fields with one default each.
//! Its [`Record`] instances store only the fields that were explicitly set
//! and read everything else from the schema. Records are persistent values:
//! `set`/`remove`/`clear` on a frozen record return a new record and leave the
//! old one intact. For batches of edits, a record can enter a mutation session
//! ([`Record::as_mutable`], [`Record::with_mutations`]) in which writes happen
//! in place, and be frozen again afterwards.
//!
//! ```
//! use spooky_record::{defaults, RecordType, SpookyValue};
//!
//! let user = RecordType::define(defaults! { "name" => "anon", "age" => 0i64 }, Some("User")).unwrap();
//! let alice = user.create([("name", SpookyValue::from("Alice"))]);
//! let older = alice.clone().set("age", SpookyValue::from(31i64)).unwrap();
//!
//! assert_eq!(alice.get("age"), Some(&SpookyValue::from(0i64)));
//! assert_eq!(older.to_string(), r#"User { name: "Alice", age: 31 }"#);
//! ```

pub mod error;
pub mod schema;
pub mod serialization;
pub mod spooky_record;
pub mod spooky_value;
pub mod types;

pub use error::RecordError;
pub use schema::{RecordType, Schema, SchemaConfig};
pub use spooky_record::Record;
pub use spooky_value::{ObjectMap, SpookyNumber, SpookyValue};
pub use types::{FastMap, FieldIter, FieldSlot, OwnerId, Ownership};

#[doc(hidden)]
pub use smol_str;
