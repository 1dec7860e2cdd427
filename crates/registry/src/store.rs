//! Registry store: the whole registry lives in one JSON file.
//!
//! Every read loads the file fresh; every mutation rewrites it completely. There is no
//! atomic rename and no backup. Load-modify-save sequences started through
//! [`RegistryStore::register_if_absent`] are serialized by an async mutex, because the
//! Telegram dispatcher delivers updates from different chats concurrently.

use chrono::NaiveDateTime;
use indexmap::IndexMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::sync::Mutex;
use tracing::{debug, info, instrument};

use crate::error::RegistryError;
use crate::models::{StoredRecord, UserRecord};
use crate::registry::{Registration, Registry};

pub struct RegistryStore {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl RegistryStore {
    /// Creates a store backed by `path`. The file is not touched until the first load/save.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the registry file. A missing file is an empty registry; a file that is not a
    /// well-formed registry is an error.
    #[instrument(skip(self), fields(path = %self.path.display()))]
    pub async fn load(&self) -> Result<Registry, RegistryError> {
        let bytes = match tokio::fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("Registry file absent, starting empty");
                return Ok(Registry::new());
            }
            Err(source) => {
                return Err(RegistryError::Io {
                    path: self.path.clone(),
                    source,
                })
            }
        };

        let stored: IndexMap<String, StoredRecord> =
            serde_json::from_slice(&bytes).map_err(|source| RegistryError::Parse {
                path: self.path.clone(),
                source,
            })?;
        let registry = Registry::from_stored(stored)?;
        debug!(users = registry.len(), "Registry loaded");
        Ok(registry)
    }

    /// Overwrites the registry file with the full contents of `registry`.
    #[instrument(skip(self, registry), fields(path = %self.path.display(), users = registry.len()))]
    pub async fn save(&self, registry: &Registry) -> Result<(), RegistryError> {
        let json =
            serde_json::to_vec_pretty(&registry.to_stored()).map_err(RegistryError::Serialize)?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|source| RegistryError::Io {
                    path: parent.to_path_buf(),
                    source,
                })?;
        }

        tokio::fs::write(&self.path, json)
            .await
            .map_err(|source| RegistryError::Io {
                path: self.path.clone(),
                source,
            })?;
        debug!("Registry saved");
        Ok(())
    }

    /// Registers `user_id` on first contact. Loads, inserts and saves while holding the store's
    /// write lock; an already known id leaves the file untouched.
    #[instrument(skip(self, name), fields(path = %self.path.display()))]
    pub async fn register_if_absent(
        &self,
        user_id: i64,
        name: &str,
        joined_at: NaiveDateTime,
    ) -> Result<Registration, RegistryError> {
        let _guard = self.write_lock.lock().await;

        let mut registry = self.load().await?;
        if let Some(existing) = registry.get(user_id) {
            debug!(user_id, "User already registered");
            return Ok(Registration::Existing(existing.clone()));
        }

        let record = UserRecord::new(name, joined_at);
        registry.insert_if_absent(user_id, record.clone());
        self.save(&registry).await?;

        info!(user_id, total_users = registry.len(), "New user registered");
        Ok(Registration::New(record))
    }
}
