use async_trait::async_trait;
use tokio::sync::Mutex;

use super::model::{Tour, TourDraft};
use super::{filter_and_slice, generate_id, StorageError, TourStorage};

/// In-memory variant of the tour store. Mirrors the JSON file semantics
/// (including the silent no-op delete) without touching disk; used by tests
/// and available as a swap-in backend.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    tours: Mutex<Vec<Tour>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TourStorage for MemoryStorage {
    async fn create(&self, draft: TourDraft) -> Result<Tour, StorageError> {
        let mut tours = self.tours.lock().await;
        let tour = Tour::from_draft(generate_id(), draft);
        tours.push(tour.clone());
        Ok(tour)
    }

    async fn list(
        &self,
        skip: usize,
        limit: usize,
        search: &str,
    ) -> Result<Vec<Tour>, StorageError> {
        let tours = self.tours.lock().await;
        Ok(filter_and_slice(tours.clone(), skip, limit, search))
    }

    async fn get(&self, id: &str) -> Result<Option<Tour>, StorageError> {
        let tours = self.tours.lock().await;
        Ok(tours.iter().find(|tour| tour.id == id).cloned())
    }

    async fn update(&self, id: &str, draft: TourDraft) -> Result<Tour, StorageError> {
        let mut tours = self.tours.lock().await;
        let Some(tour) = tours.iter_mut().find(|tour| tour.id == id) else {
            return Err(StorageError::NotFound(id.to_string()));
        };
        tour.apply(draft);
        Ok(tour.clone())
    }

    async fn delete(&self, id: &str) -> Result<(), StorageError> {
        let mut tours = self.tours.lock().await;
        if let Some(pos) = tours.iter().position(|tour| tour.id == id) {
            tours.remove(pos);
        }
        Ok(())
    }
}
