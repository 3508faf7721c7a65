use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Closed set of tags a tour can carry. Unknown values are rejected at the
/// deserialization boundary, so storage never sees anything outside this set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tag {
    Sea,
    Mountains,
    Desert,
}

impl Tag {
    pub fn as_str(&self) -> &'static str {
        match self {
            Tag::Sea => "sea",
            Tag::Mountains => "mountains",
            Tag::Desert => "desert",
        }
    }
}

/// A persisted tour record. The `id` is assigned by the storage layer on
/// create and never reassigned afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tour {
    pub id: String,
    pub operator: String,
    pub country: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    pub duration: i64,
    pub tags: Vec<Tag>,
    pub description: Option<String>,
}

/// Full field set for create and update: everything except the
/// server-assigned id. Callers are expected to have validated the fields
/// before handing the draft to storage.
#[derive(Debug, Clone, PartialEq)]
pub struct TourDraft {
    pub operator: String,
    pub country: String,
    pub price: Decimal,
    pub duration: i64,
    pub tags: Vec<Tag>,
    pub description: Option<String>,
}

impl Tour {
    pub(crate) fn from_draft(id: String, draft: TourDraft) -> Self {
        Self {
            id,
            operator: draft.operator,
            country: draft.country,
            price: draft.price,
            duration: draft.duration,
            tags: draft.tags,
            description: draft.description,
        }
    }

    /// Overwrite every field except the id.
    pub(crate) fn apply(&mut self, draft: TourDraft) {
        self.operator = draft.operator;
        self.country = draft.country;
        self.price = draft.price;
        self.duration = draft.duration;
        self.tags = draft.tags;
        self.description = draft.description;
    }

    /// Case-sensitive substring search across country, operator, description
    /// and tag names. A match on any one field is enough.
    pub fn matches(&self, needle: &str) -> bool {
        self.country.contains(needle)
            || self.operator.contains(needle)
            || self
                .description
                .as_deref()
                .is_some_and(|d| d.contains(needle))
            || self.tags.iter().any(|tag| tag.as_str().contains(needle))
    }
}
