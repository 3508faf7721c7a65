pub mod json;
pub mod memory;
pub mod model;

pub use json::JsonStorage;
pub use memory::MemoryStorage;
pub use model::{Tag, Tour, TourDraft};

use async_trait::async_trait;

#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("tour {0} not found")]
    NotFound(String),
    #[error("storage file error: {0}")]
    Io(#[from] std::io::Error),
    #[error("storage content error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Capability set of the tour store. `JsonStorage` is the production
/// variant; `MemoryStorage` mirrors its semantics without touching disk.
///
/// Not-found signaling is uneven across operations: `get` answers `None`,
/// `update` fails, `delete` silently no-ops on a missing id.
#[async_trait]
pub trait TourStorage: Send + Sync {
    /// Assign a fresh id, append the record, and return it.
    async fn create(&self, draft: TourDraft) -> Result<Tour, StorageError>;

    /// Filtered, paginated listing in insertion order.
    async fn list(
        &self,
        skip: usize,
        limit: usize,
        search: &str,
    ) -> Result<Vec<Tour>, StorageError>;

    /// First record with a matching id, if any.
    async fn get(&self, id: &str) -> Result<Option<Tour>, StorageError>;

    /// Replace every field of the matching record except its id.
    async fn update(&self, id: &str, draft: TourDraft) -> Result<Tour, StorageError>;

    /// Remove the matching record. Unknown ids complete without error.
    async fn delete(&self, id: &str) -> Result<(), StorageError>;
}

/// Shared query semantics: keep records matching the search string (all of
/// them when it is empty), then take `[skip, skip + limit)` of what remains,
/// preserving insertion order.
pub(crate) fn filter_and_slice(
    tours: Vec<Tour>,
    skip: usize,
    limit: usize,
    search: &str,
) -> Vec<Tour> {
    tours
        .into_iter()
        .filter(|tour| search.is_empty() || tour.matches(search))
        .skip(skip)
        .take(limit)
        .collect()
}

/// Fresh opaque record id: UUIDv4 in simple form (32 hex chars).
pub(crate) fn generate_id() -> String {
    uuid::Uuid::new_v4().simple().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn tour(id: &str, country: &str) -> Tour {
        Tour {
            id: id.to_string(),
            operator: "Acme".to_string(),
            country: country.to_string(),
            price: Decimal::new(100, 0),
            duration: 5,
            tags: Vec::new(),
            description: None,
        }
    }

    #[test]
    fn slice_preserves_order() {
        let tours = vec![tour("a", "Spain"), tour("b", "Italy"), tour("c", "Spain")];
        let page = filter_and_slice(tours, 1, 2, "");
        let ids: Vec<_> = page.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, ["b", "c"]);
    }

    #[test]
    fn slice_short_tail_returns_fewer() {
        let tours = vec![tour("a", "Spain"), tour("b", "Italy")];
        assert_eq!(filter_and_slice(tours.clone(), 1, 10, "").len(), 1);
        assert!(filter_and_slice(tours, 5, 10, "").is_empty());
    }

    #[test]
    fn filter_applies_before_pagination() {
        let tours = vec![
            tour("a", "Spain"),
            tour("b", "Italy"),
            tour("c", "Spain"),
            tour("d", "Spain"),
        ];
        let page = filter_and_slice(tours, 1, 2, "Spain");
        let ids: Vec<_> = page.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, ["c", "d"]);
    }

    #[test]
    fn generated_ids_are_unique_hex() {
        let a = generate_id();
        let b = generate_id();
        assert_ne!(a, b);
        assert_eq!(a.len(), 32);
        assert!(a.chars().all(|c| c.is_ascii_hexdigit()));
    }
}
