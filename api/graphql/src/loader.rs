use std::{
    collections::HashMap,
    sync::{
        atomic::{AtomicUsize, Ordering},
        Arc,
    },
};

use async_graphql::dataloader::Loader;
use pm_dao::{client::ClientDao, Db};
use uuid::Uuid;

/// Batches `Project.client` lookups issued in the same execution tick into
/// one store round-trip.
pub struct ClientLoader {
    db: Arc<Db>,
    batches: AtomicUsize,
}

impl ClientLoader {
    pub fn new(db: Arc<Db>) -> Self {
        Self {
            db,
            batches: AtomicUsize::new(0),
        }
    }

    /// Number of store round-trips issued so far.
    #[cfg(test)]
    pub fn batches(&self) -> usize {
        self.batches.load(Ordering::Relaxed)
    }
}

impl Loader<Uuid> for ClientLoader {
    type Value = ClientDao;
    type Error = Arc<anyhow::Error>;

    async fn load(&self, keys: &[Uuid]) -> Result<HashMap<Uuid, Self::Value>, Self::Error> {
        let batch = self.batches.fetch_add(1, Ordering::Relaxed) + 1;
        pm_log::trace(
            None,
            format!("[ClientLoader] Loading {} client(s) in batch #{batch}", keys.len()),
        );

        let clients_data = ClientDao::db_select_many_by_ids(&self.db, keys)
            .await
            .map_err(Arc::new)?;

        Ok(clients_data
            .into_iter()
            .map(|client_data| (*client_data.id(), client_data))
            .collect())
    }
}
