use crate::spooky_record::Record;
use crate::spooky_value::SpookyValue;
use serde::ser::{Serialize, SerializeMap, Serializer};

// ─── Serialize ──────────────────────────────────────────────────────────────

/// A record serializes as a map in schema order with defaults filled in.
/// Slot presence is not observable in the output.
impl<V: Serialize> Serialize for Record<V> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut m = serializer.serialize_map(Some(self.len()))?;
        for (field, value) in self.iter() {
            m.serialize_entry(field, value)?;
        }
        m.end()
    }
}

// ─── JSON ───────────────────────────────────────────────────────────────────

impl Record<SpookyValue> {
    /// Convert to a JSON object. Key order follows the schema.
    pub fn to_json(&self) -> serde_json::Value {
        let mut map = serde_json::Map::with_capacity(self.len());
        for (field, value) in self.iter() {
            map.insert(field.to_string(), value.clone().into());
        }
        serde_json::Value::Object(map)
    }
}
