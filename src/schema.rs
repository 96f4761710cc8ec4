use crate::error::RecordError;
use crate::spooky_record::Record;
use crate::spooky_value::SpookyValue;
use crate::types::*;
use log::debug;
use smol_str::SmolStr;
use std::sync::Arc;

// ─── Config ─────────────────────────────────────────────────────────────────

/// Configuration for [`RecordType::define_with_config`].
#[derive(Debug, Clone)]
pub struct SchemaConfig {
    /// Display name of the record type. Falls back to `"Record"`.
    pub name: Option<SmolStr>,
    /// Largest field count for which field names are resolved by linear scan.
    ///
    /// Wider schemas build a name→index table once at definition time.
    /// Lookup results are the same either way.
    ///
    /// Default: 4.
    pub linear_lookup_max: usize,
}

impl Default for SchemaConfig {
    fn default() -> Self {
        Self {
            name: None,
            linear_lookup_max: DEFAULT_LINEAR_LOOKUP_MAX,
        }
    }
}

impl SchemaConfig {
    pub fn named(name: impl Into<SmolStr>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }
}

// ─── Schema ─────────────────────────────────────────────────────────────────

/// The fixed shape of a record: ordered field names and one default per
/// field. Never mutated after definition; shared by every instance.
#[derive(Debug)]
pub struct Schema<V> {
    pub(crate) id: SchemaId,
    name: Option<SmolStr>,
    fields: Vec<SmolStr>,
    defaults: Vec<V>,
    /// Empty for schemas resolved by linear scan.
    index: FastMap<SmolStr, usize>,
}

impl<V> Schema<V> {
    fn build<K, I>(defaults: I, config: SchemaConfig) -> Result<Self, RecordError>
    where
        K: Into<SmolStr>,
        I: IntoIterator<Item = (K, V)>,
    {
        let iter = defaults.into_iter();
        let (lower, _) = iter.size_hint();
        let mut fields: Vec<SmolStr> = Vec::with_capacity(lower);
        let mut values: Vec<V> = Vec::with_capacity(lower);
        let mut index: FastMap<SmolStr, usize> = FastMap::default();
        index.reserve(lower);

        for (key, value) in iter {
            let key = key.into();
            if index.insert(key.clone(), fields.len()).is_some() {
                return Err(RecordError::DuplicateField(key));
            }
            fields.push(key);
            values.push(value);
        }

        // Narrow schemas scan `fields` instead.
        if fields.len() <= config.linear_lookup_max {
            index = FastMap::default();
        }

        Ok(Self {
            id: SchemaId::next(),
            name: config.name,
            fields,
            defaults: values,
            index,
        })
    }

    /// Display name, or `"Record"` when none was given.
    #[inline]
    pub fn name(&self) -> &str {
        self.name.as_deref().unwrap_or(DEFAULT_RECORD_NAME)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Field names in declaration order.
    #[inline]
    pub fn fields(&self) -> &[SmolStr] {
        &self.fields
    }

    /// Resolve a field name to its slot index.
    #[inline]
    pub fn index_of(&self, field: &str) -> Option<usize> {
        if self.index.is_empty() {
            self.fields.iter().position(|f| f.as_str() == field)
        } else {
            self.index.get(field).copied()
        }
    }

    #[inline]
    pub fn contains(&self, field: &str) -> bool {
        self.index_of(field).is_some()
    }

    #[inline]
    pub fn default_of(&self, field: &str) -> Option<&V> {
        self.index_of(field).map(|i| &self.defaults[i])
    }

    /// Callers guarantee `index < len()`.
    #[inline]
    pub(crate) fn field_at(&self, index: usize) -> &SmolStr {
        &self.fields[index]
    }

    /// Callers guarantee `index < len()`.
    #[inline]
    pub(crate) fn default_at(&self, index: usize) -> &V {
        &self.defaults[index]
    }
}

// ─── RecordType (factory) ───────────────────────────────────────────────────

/// A defined record shape and the constructor for its instances.
///
/// Cloning is cheap: clones share the same [`Schema`].
#[derive(Debug)]
pub struct RecordType<V = SpookyValue> {
    schema: Arc<Schema<V>>,
}

impl<V> Clone for RecordType<V> {
    fn clone(&self) -> Self {
        Self {
            schema: Arc::clone(&self.schema),
        }
    }
}

impl<V> RecordType<V> {
    /// Define a record type from `(field, default)` pairs. Field order is the
    /// iteration order of `defaults`.
    pub fn define<K, I>(defaults: I, name: Option<&str>) -> Result<Self, RecordError>
    where
        K: Into<SmolStr>,
        I: IntoIterator<Item = (K, V)>,
    {
        let config = SchemaConfig {
            name: name.map(SmolStr::new),
            ..SchemaConfig::default()
        };
        Self::define_with_config(defaults, config)
    }

    pub fn define_with_config<K, I>(defaults: I, config: SchemaConfig) -> Result<Self, RecordError>
    where
        K: Into<SmolStr>,
        I: IntoIterator<Item = (K, V)>,
    {
        let schema = Schema::build(defaults, config)?;
        debug!(
            "record type {} defined with {} fields",
            schema.name(),
            schema.len()
        );
        Ok(Self {
            schema: Arc::new(schema),
        })
    }

    #[inline]
    pub(crate) fn from_schema(schema: Arc<Schema<V>>) -> Self {
        Self { schema }
    }

    #[inline]
    pub fn schema(&self) -> &Arc<Schema<V>> {
        &self.schema
    }

    #[inline]
    pub fn name(&self) -> &str {
        self.schema.name()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.schema.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.schema.is_empty()
    }

    pub fn fields(&self) -> impl ExactSizeIterator<Item = &str> + '_ {
        self.schema.fields().iter().map(SmolStr::as_str)
    }

    #[inline]
    pub fn default_of(&self, field: &str) -> Option<&V> {
        self.schema.default_of(field)
    }

    /// Resolve a field once for repeated [`Record::get_at`] / [`Record::set_at`]
    /// access.
    pub fn resolve(&self, field: &str) -> Option<FieldSlot> {
        let index = self.schema.index_of(field)?;
        Some(self.slot_at(index))
    }

    /// The full accessor table, one slot per field in schema order.
    pub fn slots(&self) -> impl ExactSizeIterator<Item = FieldSlot> + '_ {
        (0..self.schema.len()).map(|i| self.slot_at(i))
    }

    fn slot_at(&self, index: usize) -> FieldSlot {
        FieldSlot {
            index,
            name: self.schema.field_at(index).clone(),
            schema_id: self.schema.id,
        }
    }

    /// A record with every field at its default.
    pub fn empty(&self) -> Record<V> {
        Record::empty_of(Arc::clone(&self.schema))
    }

    /// A record with the given fields set. Keys that are not fields of this
    /// type are ignored.
    pub fn create<K, I>(&self, values: I) -> Record<V>
    where
        K: AsRef<str>,
        I: IntoIterator<Item = (K, V)>,
    {
        let mut slots: Vec<Option<V>> = Vec::with_capacity(self.schema.len());
        slots.resize_with(self.schema.len(), || None);

        for (key, value) in values {
            let key = key.as_ref();
            match self.schema.index_of(key) {
                Some(i) => slots[i] = Some(value),
                None => debug!("{}: ignoring unknown initial key {:?}", self.name(), key),
            }
        }

        Record::from_parts(Arc::clone(&self.schema), slots, Ownership::Frozen)
    }
}

impl RecordType<SpookyValue> {
    /// Define a record type from a JSON object of defaults. Key order of the
    /// object is the field order.
    pub fn define_from_json(
        defaults: serde_json::Value,
        name: Option<&str>,
    ) -> Result<Self, RecordError> {
        match defaults {
            serde_json::Value::Object(map) => Self::define(
                map.into_iter()
                    .map(|(k, v)| (SmolStr::from(k), SpookyValue::from(v))),
                name,
            ),
            _ => Err(RecordError::NotAnObject),
        }
    }

    /// Build a record from a JSON object of initial values.
    pub fn create_from_json(&self, values: serde_json::Value) -> Result<Record, RecordError> {
        match values {
            serde_json::Value::Object(map) => Ok(self.create(
                map.into_iter().map(|(k, v)| (k, SpookyValue::from(v))),
            )),
            _ => Err(RecordError::NotAnObject),
        }
    }
}
