use crate::utils::error::{Result, ServiceError};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

/// The four keys every todo must carry, in the order they are checked and
/// written to CSV.
pub const REQUIRED_FIELDS: [&str; 4] = ["id", "userId", "title", "completed"];

/// One item of the remote collection, exactly as it came off the wire.
/// Shape is never assumed; the four required keys are checked explicitly.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RawRecord {
    pub fields: HashMap<String, Value>,
}

/// A raw record confirmed to carry all four required fields. Values are kept
/// as untyped JSON values; presence is the only guarantee.
#[derive(Debug, Clone, PartialEq)]
pub struct TodoRecord {
    pub id: Value,
    pub user_id: Value,
    pub title: Value,
    pub completed: Value,
}

impl TodoRecord {
    /// Fails with the first missing key, in `REQUIRED_FIELDS` order. No type
    /// coercion: whatever value sits under each key is carried through.
    pub fn from_raw(raw: &RawRecord) -> Result<Self> {
        for field in REQUIRED_FIELDS {
            if !raw.fields.contains_key(field) {
                return Err(ServiceError::MissingField { field });
            }
        }

        Ok(Self {
            id: raw.fields["id"].clone(),
            user_id: raw.fields["userId"].clone(),
            title: raw.fields["title"].clone(),
            completed: raw.fields["completed"].clone(),
        })
    }
}
