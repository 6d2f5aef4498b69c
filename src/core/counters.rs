use crate::domain::model::CountersStore;
use crate::domain::ports::{CorruptStorePolicy, Storage};
use crate::utils::error::{Result, TurnError};

pub const DEFAULT_STORE_KEY: &str = "positionCounts";

/// Reads and writes the whole counters blob under a single storage key.
pub struct CounterRepository<S: Storage> {
    storage: S,
    key: String,
    on_corrupt: CorruptStorePolicy,
}

impl<S: Storage> CounterRepository<S> {
    pub fn new(storage: S, key: impl Into<String>, on_corrupt: CorruptStorePolicy) -> Self {
        Self {
            storage,
            key: key.into(),
            on_corrupt,
        }
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// An absent blob loads as an empty store.
    pub fn load(&self) -> Result<CountersStore> {
        let Some(bytes) = self.storage.read(&self.key)? else {
            tracing::debug!("No counters stored under '{}'", self.key);
            return Ok(CountersStore::new());
        };

        match CountersStore::from_json(&bytes) {
            Ok(counters) => {
                tracing::debug!("Loaded counters for {} names", counters.len());
                Ok(counters)
            }
            Err(e) => match self.on_corrupt {
                CorruptStorePolicy::Discard => {
                    tracing::warn!(
                        "Counters under '{}' are unreadable ({}); starting from an empty store",
                        self.key,
                        e
                    );
                    Ok(CountersStore::new())
                }
                CorruptStorePolicy::Halt => Err(TurnError::CorruptStore {
                    message: e.to_string(),
                }),
            },
        }
    }

    pub fn save(&self, counters: &CountersStore) -> Result<()> {
        let bytes = counters.to_json()?;
        self.storage.write(&self.key, &bytes)?;
        tracing::debug!("Saved counters for {} names", counters.len());
        Ok(())
    }

    pub fn clear(&self) -> Result<()> {
        self.storage.remove(&self.key)
    }
}
