//! User record model.
//!
//! [`UserRecord`] is the validated in-memory form; [`StoredRecord`] is the exact JSON shape
//! written to the registry file (`{"name": ..., "joined_at": "YYYY-MM-DD HH:MM:SS"}`).

use chrono::{NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};

use crate::error::RegistryError;

/// `strftime` format of `joined_at` in the registry file.
pub const JOINED_AT_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// One registered user: display name and the moment of first contact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserRecord {
    pub name: String,
    pub joined_at: NaiveDateTime,
}

impl UserRecord {
    pub fn new(name: impl Into<String>, joined_at: NaiveDateTime) -> Self {
        Self {
            name: name.into(),
            // The file keeps whole seconds only.
            joined_at: truncate_to_seconds(joined_at),
        }
    }

    /// `joined_at` rendered as stored in the file.
    pub fn joined_at_string(&self) -> String {
        self.joined_at.format(JOINED_AT_FORMAT).to_string()
    }
}

fn truncate_to_seconds(t: NaiveDateTime) -> NaiveDateTime {
    t.with_nanosecond(0).unwrap_or(t)
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct StoredRecord {
    pub name: String,
    pub joined_at: String,
}

impl StoredRecord {
    pub(crate) fn into_record(self, id: &str) -> Result<UserRecord, RegistryError> {
        let joined_at = NaiveDateTime::parse_from_str(&self.joined_at, JOINED_AT_FORMAT)
            .map_err(|e| RegistryError::InvalidRecord {
                id: id.to_string(),
                reason: format!("joined_at {:?} is not {}: {}", self.joined_at, JOINED_AT_FORMAT, e),
            })?;
        Ok(UserRecord {
            name: self.name,
            joined_at,
        })
    }
}

impl From<&UserRecord> for StoredRecord {
    fn from(record: &UserRecord) -> Self {
        Self {
            name: record.name.clone(),
            joined_at: record.joined_at_string(),
        }
    }
}
