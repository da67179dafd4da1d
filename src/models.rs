// src/models.rs
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FoodItem {
    pub name: String,
    pub confidence: f32,
    pub bounding_box: Option<BoundingBox>,
}

impl FoodItem {
    /// Opt-in sanity check: confidence in [0, 1] and, when a box is present,
    /// non-negative dimensions. Construction does not enforce either bound;
    /// detection backends disagree on score ranges, so callers that care
    /// check explicitly.
    pub fn is_plausible(&self) -> bool {
        (0.0..=1.0).contains(&self.confidence)
            && self
                .bounding_box
                .as_ref()
                .is_none_or(|b| b.width >= 0.0 && b.height >= 0.0)
    }
}
