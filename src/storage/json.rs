use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::fs;
use tokio::sync::Mutex;

use super::model::{Tour, TourDraft};
use super::{filter_and_slice, generate_id, StorageError, TourStorage};

/// JSON-file backed tour store.
///
/// The file is the single source of truth: a pretty-printed array of tour
/// objects, reloaded in full on every operation and rewritten in full on
/// every mutation. Record volume is assumed small, so there is no index and
/// no incremental writing. Mutations serialize behind a lock so concurrent
/// requests cannot interleave the read-modify-write cycle; beyond that the
/// guarantee is last write wins.
#[derive(Debug)]
pub struct JsonStorage {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl JsonStorage {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the full record sequence, initializing the file to an empty
    /// array if it does not exist yet.
    async fn load(&self) -> Result<Vec<Tour>, StorageError> {
        if !fs::try_exists(&self.path).await? {
            self.save(&[]).await?;
            return Ok(Vec::new());
        }
        let bytes = fs::read(&self.path).await?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    async fn save(&self, tours: &[Tour]) -> Result<(), StorageError> {
        let bytes = serde_json::to_vec_pretty(tours)?;
        fs::write(&self.path, bytes).await?;
        tracing::debug!(count = tours.len(), path = %self.path.display(), "rewrote store file");
        Ok(())
    }
}

#[async_trait]
impl TourStorage for JsonStorage {
    async fn create(&self, draft: TourDraft) -> Result<Tour, StorageError> {
        let _guard = self.write_lock.lock().await;
        let mut tours = self.load().await?;
        let tour = Tour::from_draft(generate_id(), draft);
        tours.push(tour.clone());
        self.save(&tours).await?;
        tracing::info!(id = %tour.id, "created tour");
        Ok(tour)
    }

    async fn list(
        &self,
        skip: usize,
        limit: usize,
        search: &str,
    ) -> Result<Vec<Tour>, StorageError> {
        let tours = self.load().await?;
        Ok(filter_and_slice(tours, skip, limit, search))
    }

    async fn get(&self, id: &str) -> Result<Option<Tour>, StorageError> {
        let tours = self.load().await?;
        Ok(tours.into_iter().find(|tour| tour.id == id))
    }

    async fn update(&self, id: &str, draft: TourDraft) -> Result<Tour, StorageError> {
        let _guard = self.write_lock.lock().await;
        let mut tours = self.load().await?;
        let Some(tour) = tours.iter_mut().find(|tour| tour.id == id) else {
            return Err(StorageError::NotFound(id.to_string()));
        };
        tour.apply(draft);
        let updated = tour.clone();
        self.save(&tours).await?;
        tracing::info!(id = %updated.id, "updated tour");
        Ok(updated)
    }

    async fn delete(&self, id: &str) -> Result<(), StorageError> {
        let _guard = self.write_lock.lock().await;
        let mut tours = self.load().await?;
        // An unknown id is a silent no-op; the file is still rewritten
        // with identical content.
        if let Some(pos) = tours.iter().position(|tour| tour.id == id) {
            tours.remove(pos);
            tracing::info!(id, "deleted tour");
        }
        self.save(&tours).await?;
        Ok(())
    }
}
