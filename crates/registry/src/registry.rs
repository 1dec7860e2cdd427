//! In-memory registry: ordered mapping user id → [`UserRecord`].
//!
//! Iteration order is insertion order, which is also the key order of the JSON file.

use indexmap::IndexMap;

use crate::error::RegistryError;
use crate::growth::{cumulative_growth, GrowthPoint};
use crate::models::{StoredRecord, UserRecord};

/// Result of [`crate::RegistryStore::register_if_absent`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Registration {
    /// The id was unknown; this record was inserted and saved.
    New(UserRecord),
    /// The id was already registered; nothing was written.
    Existing(UserRecord),
}

impl Registration {
    pub fn is_new(&self) -> bool {
        matches!(self, Registration::New(_))
    }

    pub fn record(&self) -> &UserRecord {
        match self {
            Registration::New(r) | Registration::Existing(r) => r,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Registry {
    users: IndexMap<i64, UserRecord>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    pub fn get(&self, user_id: i64) -> Option<&UserRecord> {
        self.users.get(&user_id)
    }

    /// Inserts `record` unless `user_id` is already present. Existing records are never replaced.
    /// Returns true when the record was inserted.
    pub fn insert_if_absent(&mut self, user_id: i64, record: UserRecord) -> bool {
        if self.users.contains_key(&user_id) {
            return false;
        }
        self.users.insert(user_id, record);
        true
    }

    /// Records in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (i64, &UserRecord)> {
        self.users.iter().map(|(id, r)| (*id, r))
    }

    /// Cumulative user count per join date, ascending.
    pub fn growth_series(&self) -> Vec<GrowthPoint> {
        cumulative_growth(self.users.values())
    }

    pub(crate) fn from_stored(stored: IndexMap<String, StoredRecord>) -> Result<Self, RegistryError> {
        let mut users = IndexMap::with_capacity(stored.len());
        for (key, value) in stored {
            let user_id: i64 = key.trim().parse().map_err(|_| RegistryError::InvalidRecord {
                id: key.clone(),
                reason: "key is not a numeric user id".to_string(),
            })?;
            let record = value.into_record(&key)?;
            if users.insert(user_id, record).is_some() {
                return Err(RegistryError::InvalidRecord {
                    id: key,
                    reason: "duplicate user id".to_string(),
                });
            }
        }
        Ok(Self { users })
    }

    pub(crate) fn to_stored(&self) -> IndexMap<String, StoredRecord> {
        self.users
            .iter()
            .map(|(id, r)| (id.to_string(), StoredRecord::from(r)))
            .collect()
    }
}
