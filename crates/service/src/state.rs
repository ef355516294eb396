use super::config::Config;
use super::store::{Store, StoreError};

/// Main service state, handed to every handler.
///
/// The data directory is carried here rather than in a global so each
/// server (and each test) can point at its own directory.
#[derive(Clone, Debug)]
pub struct State {
    store: Store,
}

impl State {
    /// Build state from config, creating and seeding the data directory.
    pub async fn from_config(config: &Config) -> Result<Self, StateSetupError> {
        let store = Store::new(&config.data_dir);
        tracing::info!("Data directory: {}", store.data_dir().display());
        store.init().await?;

        Ok(Self { store })
    }

    /// Wrap an existing store without touching the disk.
    pub fn from_store(store: Store) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &Store {
        &self.store
    }
}

#[derive(Debug, thiserror::Error)]
pub enum StateSetupError {
    #[error("failed to initialize data directory: {0}")]
    Store(#[from] StoreError),
}
