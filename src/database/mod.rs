use anyhow::Result;
use chrono::Utc;
use serde::Serialize;
use tokio::sync::{RwLock, RwLockReadGuard};

use crate::config::Config;

pub mod models;
pub mod seed;
pub mod storage;
pub mod stores;

use storage::{AUTH_STORAGE_KEY, DATA_STORAGE_KEY, Storage};
use stores::{AuthStore, DataStore};

/// The two application stores plus the storage they are persisted to.
///
/// Every mutation goes through [`Store::mutate_auth`] or [`Store::mutate_data`],
/// which write the whole store back to storage once the change is applied.
pub struct Store {
    auth: RwLock<AuthStore>,
    data: RwLock<DataStore>,
    storage: Storage,
}

impl Store {
    pub fn new(storage: Storage, auth: AuthStore, data: DataStore) -> Self {
        Self {
            auth: RwLock::new(auth),
            data: RwLock::new(data),
            storage,
        }
    }

    pub async fn auth(&self) -> RwLockReadGuard<'_, AuthStore> {
        self.auth.read().await
    }

    pub async fn data(&self) -> RwLockReadGuard<'_, DataStore> {
        self.data.read().await
    }

    pub async fn mutate_auth<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut AuthStore) -> R,
    {
        let mut auth = self.auth.write().await;
        let result = f(&mut auth);
        self.persist(AUTH_STORAGE_KEY, &*auth);
        result
    }

    pub async fn mutate_data<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut DataStore) -> R,
    {
        let mut data = self.data.write().await;
        let result = f(&mut data);
        self.persist(DATA_STORAGE_KEY, &*data);
        result
    }

    /// A failed write leaves the in-memory state authoritative until the next mutation.
    ///
    /// Runs synchronously while the caller still holds the write guard, so writes
    /// land in mutation order. The blobs are small JSON files.
    fn persist<T: Serialize>(&self, key: &str, state: &T) {
        if let Err(err) = self.storage.save(key, state) {
            log::error!("Failed to persist {}: {}", key, err);
        }
    }
}

/// Builds the store from persisted blobs, falling back to sample data (or an empty
/// store) for any blob that is missing or can no longer be read.
pub async fn init_store(config: &Config) -> Result<Store> {
    let storage = if config.storage_dir.is_empty() {
        log::info!("Using in-memory storage");
        Storage::memory()
    } else {
        log::info!("Using storage directory {}", config.storage_dir);
        Storage::file(&config.storage_dir)
    };

    let auth = storage.load::<AuthStore>(AUTH_STORAGE_KEY).unwrap_or_default();

    let data = match storage.load::<DataStore>(DATA_STORAGE_KEY) {
        Some(data) => {
            log::info!(
                "Loaded {} users and {} attendance records from storage",
                data.users.len(),
                data.attendance.len()
            );
            data
        }
        None if config.seed_sample_data => {
            log::info!("No stored data found, seeding sample data");
            let data = seed::sample_data(Utc::now().date_naive());
            storage.save(DATA_STORAGE_KEY, &data)?;
            data
        }
        None => {
            log::info!("No stored data found, starting empty");
            DataStore::new()
        }
    };

    Ok(Store::new(storage, auth, data))
}
