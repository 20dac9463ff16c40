//! The Plant entity and its request payloads.
//!
//! Request bodies arrive as loose JSON and are converted through an explicit
//! validation step, so a missing required field is a structured 400 rather
//! than a deserialization fault. Unknown keys in payloads are silently
//! dropped (serde's default), matching the partial-update contract.

use crate::error::AppError;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::FromRow;

/// A row from the `plants` table. Serializes to the flat JSON shape
/// `{"id", "name", "image", "price", "is_in_stock"}`.
#[derive(Debug, Clone, PartialEq, Serialize, FromRow)]
pub struct Plant {
    pub id: i64,
    pub name: String,
    pub image: String,
    pub price: f64,
    pub is_in_stock: bool,
}

/// Raw creation payload before validation. All fields optional so that
/// presence checking is an explicit step with a useful error message.
#[derive(Debug, Default, Deserialize)]
pub struct PlantDraft {
    pub name: Option<String>,
    pub image: Option<String>,
    pub price: Option<f64>,
    pub is_in_stock: Option<bool>,
}

/// Validated creation input. `is_in_stock` has its default applied.
#[derive(Debug, Clone, PartialEq)]
pub struct NewPlant {
    pub name: String,
    pub image: String,
    pub price: f64,
    pub is_in_stock: bool,
}

/// Partial update: only fields present in the payload are overwritten.
/// `id` is immutable and not patchable.
#[derive(Debug, Default, Deserialize)]
pub struct PlantPatch {
    pub name: Option<String>,
    pub image: Option<String>,
    pub price: Option<f64>,
    pub is_in_stock: Option<bool>,
}

fn require_object(body: &Value) -> Result<(), AppError> {
    if body.is_object() {
        Ok(())
    } else {
        Err(AppError::BadRequest("body must be a JSON object".into()))
    }
}

impl PlantDraft {
    pub fn from_value(body: Value) -> Result<Self, AppError> {
        require_object(&body)?;
        serde_json::from_value(body)
            .map_err(|e| AppError::BadRequest(format!("invalid plant payload: {}", e)))
    }

    /// Check the required fields and produce a validated `NewPlant`.
    /// The error message names every missing field.
    pub fn validate(self) -> Result<NewPlant, AppError> {
        let mut missing = Vec::new();
        if self.name.is_none() {
            missing.push("name");
        }
        if self.image.is_none() {
            missing.push("image");
        }
        if self.price.is_none() {
            missing.push("price");
        }
        match (self.name, self.image, self.price) {
            (Some(name), Some(image), Some(price)) => Ok(NewPlant {
                name,
                image,
                price,
                is_in_stock: self.is_in_stock.unwrap_or(true),
            }),
            _ => Err(AppError::Validation(format!(
                "missing required fields: {}",
                missing.join(", ")
            ))),
        }
    }
}

impl PlantPatch {
    pub fn from_value(body: Value) -> Result<Self, AppError> {
        require_object(&body)?;
        serde_json::from_value(body)
            .map_err(|e| AppError::BadRequest(format!("invalid plant payload: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn draft_applies_stock_default() {
        let draft = PlantDraft::from_value(json!({
            "name": "Fern",
            "image": "fern.jpg",
            "price": 12.5
        }))
        .unwrap();
        let new = draft.validate().unwrap();
        assert!(new.is_in_stock);
        assert_eq!(new.name, "Fern");
    }

    #[test]
    fn draft_keeps_explicit_stock_value() {
        let draft = PlantDraft::from_value(json!({
            "name": "Cactus",
            "image": "cactus.jpg",
            "price": 4.0,
            "is_in_stock": false
        }))
        .unwrap();
        assert!(!draft.validate().unwrap().is_in_stock);
    }

    #[test]
    fn draft_names_every_missing_field() {
        let err = PlantDraft::from_value(json!({ "name": "Fern" }))
            .unwrap()
            .validate()
            .unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("image"), "{}", msg);
        assert!(msg.contains("price"), "{}", msg);
        assert!(!msg.contains("name"), "{}", msg);
    }

    #[test]
    fn non_object_body_is_rejected() {
        let err = PlantDraft::from_value(json!([1, 2, 3])).unwrap_err();
        assert!(matches!(err, AppError::BadRequest(_)));
    }

    #[test]
    fn patch_ignores_unknown_keys() {
        let patch = PlantPatch::from_value(json!({
            "price": 9.99,
            "color": "green"
        }))
        .unwrap();
        assert_eq!(patch.price, Some(9.99));
        assert!(patch.name.is_none());
    }

    #[test]
    fn mistyped_field_is_a_bad_request() {
        let err = PlantDraft::from_value(json!({
            "name": 42,
            "image": "fern.jpg",
            "price": 12.5
        }))
        .unwrap_err();
        assert!(matches!(err, AppError::BadRequest(_)));
    }
}
