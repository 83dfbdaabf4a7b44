//! Soil classification.
//!
//! - `texture`: threshold rules over measured clay/sand/silt percentages
//! - `fallback`: deterministic coordinate hash when no measurement exists
//! - `depth`: depth-band bucketing for composition queries

pub mod depth;
pub mod fallback;
pub mod texture;

pub use depth::DepthBand;
pub use fallback::{classify_fallback, fallback_score, FALLBACK_SOIL_TYPES};
pub use texture::{classify_composition, water_retention};

use crate::types::{SampleLocation, SoilComposition, SoilType};

/// Resolve a soil type: measured composition when available, coordinate hash otherwise.
pub fn classify(location: &SampleLocation, composition: Option<&SoilComposition>) -> SoilType {
    match composition {
        Some(c) => classify_composition(c.clay_pct, c.sand_pct, c.silt_pct),
        None => classify_fallback(location.longitude, location.latitude, location.depth),
    }
}
