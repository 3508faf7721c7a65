mod create;
mod delete;
mod list;
mod show;
mod update;

pub use create::create_post;
pub use delete::tour_delete;
pub use list::list_get;
pub use show::show_get;
pub use update::update_patch;

use std::collections::HashMap;

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::error::ApiError;
use crate::storage::{Tag, TourDraft};

/// Incoming field set for create and update. `price` defaults to 100 and
/// `tags` to empty when omitted; `operator`, `country` and `duration` are
/// required by the deserializer.
#[derive(Debug, Deserialize)]
pub struct NewTour {
    pub operator: String,
    pub country: String,
    #[serde(default = "default_price", with = "rust_decimal::serde::float")]
    pub price: Decimal,
    pub duration: i64,
    #[serde(default)]
    pub tags: Vec<Tag>,
    #[serde(default)]
    pub description: Option<String>,
}

fn default_price() -> Decimal {
    Decimal::new(100, 0)
}

impl NewTour {
    /// Field-level validation applied before the draft reaches storage:
    /// strictly positive price, at most two tags, no tag listed twice.
    pub fn into_draft(self) -> Result<TourDraft, ApiError> {
        let mut field_errors = HashMap::new();

        if self.price <= Decimal::ZERO {
            field_errors.insert(
                "price".to_string(),
                "must be greater than zero".to_string(),
            );
        }

        if self.tags.len() > 2 {
            field_errors.insert("tags".to_string(), "at most 2 tags are allowed".to_string());
        } else if let Some(dup) = first_duplicate(&self.tags) {
            field_errors.insert(
                "tags".to_string(),
                format!("tag '{}' is listed more than once", dup.as_str()),
            );
        }

        if !field_errors.is_empty() {
            return Err(ApiError::validation_error(
                "Invalid tour fields",
                Some(field_errors),
            ));
        }

        Ok(TourDraft {
            operator: self.operator,
            country: self.country,
            price: self.price,
            duration: self.duration,
            tags: self.tags,
            description: self.description,
        })
    }
}

fn first_duplicate(tags: &[Tag]) -> Option<Tag> {
    tags.iter()
        .enumerate()
        .find(|(i, tag)| tags[..*i].contains(tag))
        .map(|(_, tag)| *tag)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn parse(value: serde_json::Value) -> Result<NewTour, serde_json::Error> {
        serde_json::from_value(value)
    }

    #[test]
    fn defaults_apply_when_fields_omitted() {
        let tour = parse(json!({
            "operator": "SunTours",
            "country": "Spain",
            "duration": 7
        }))
        .unwrap();

        assert_eq!(tour.price, Decimal::new(100, 0));
        assert!(tour.tags.is_empty());
        assert_eq!(tour.description, None);
        assert!(tour.into_draft().is_ok());
    }

    #[test]
    fn missing_required_field_fails_deserialization() {
        let result = parse(json!({ "operator": "SunTours", "duration": 7 }));
        assert!(result.is_err());
    }

    #[test]
    fn non_positive_price_is_rejected() {
        let tour = parse(json!({
            "operator": "SunTours",
            "country": "Spain",
            "duration": 7,
            "price": 0
        }))
        .unwrap();

        let err = tour.into_draft().unwrap_err();
        assert_eq!(err.to_json()["field_errors"]["price"], "must be greater than zero");
    }

    #[test]
    fn more_than_two_tags_is_rejected() {
        let tour = parse(json!({
            "operator": "SunTours",
            "country": "Spain",
            "duration": 7,
            "tags": ["sea", "mountains", "desert"]
        }))
        .unwrap();

        assert!(tour.into_draft().is_err());
    }

    #[test]
    fn duplicate_tags_are_rejected() {
        let tour = parse(json!({
            "operator": "SunTours",
            "country": "Spain",
            "duration": 7,
            "tags": ["sea", "sea"]
        }))
        .unwrap();

        assert!(tour.into_draft().is_err());
    }

    #[test]
    fn two_distinct_tags_pass() {
        let tour = parse(json!({
            "operator": "SunTours",
            "country": "Spain",
            "duration": 7,
            "tags": ["sea", "desert"]
        }))
        .unwrap();

        let draft = tour.into_draft().unwrap();
        assert_eq!(draft.tags, vec![Tag::Sea, Tag::Desert]);
    }
}
