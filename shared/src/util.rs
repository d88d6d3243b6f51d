use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Generate a fresh resource id.
///
/// 32 lowercase hex chars (random v4 UUID, no hyphens). Unique for the
/// lifetime of the process; ids are not persisted.
pub fn next_id() -> String {
    uuid::Uuid::new_v4().simple().to_string()
}

/// serde helper: keep an explicit `null` as `Some(Value::Null)`.
///
/// Combined with `#[serde(default)]` an absent key stays `None`.
pub fn present<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}
