//! Crop advice lookup. Depends only on the soil type label.

use crate::catalog::profiles;
use crate::types::{Crop, CropRecommendations, SoilType};

/// Recommended crops and growing notes for a soil type.
///
/// Types without their own list (compound loams, `Unknown`) get the generic
/// Mixed Vegetables / Cover Crops / Native Plants advice.
pub fn recommend(soil_type: SoilType) -> CropRecommendations {
    let advice = profiles::crop_advice(soil_type);

    CropRecommendations {
        recommended_crops: advice
            .crops
            .iter()
            .map(|entry| Crop {
                name: entry.name.to_string(),
                suitability: entry.suitability,
                description: entry.description.to_string(),
            })
            .collect(),
        notes: Some(advice.notes.to_string()),
    }
}

/// Recommend by free-text label. Unrecognized labels get the generic advice.
pub fn recommend_for_label(label: &str) -> CropRecommendations {
    recommend(SoilType::from_label(label))
}
