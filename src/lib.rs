//! Soil Advisor
//!
//! Classifies the soil at a sample point and returns its properties plus
//! crop recommendations for that soil type.
//!
//! - `classifier/`: texture-threshold rules, coordinate-hash estimate, depth bands
//! - `catalog/`: static descriptions, property tables and crop advice
//! - `soilgrids`: measured composition from ISRIC SoilGrids
//! - `analysis`: request pipeline with fallback to estimated data
//! - `api_server`: Axum REST endpoints (feature `api`)

pub mod analysis;
pub mod api_server;
pub mod catalog;
pub mod classifier;
pub mod config;
pub mod error;
pub mod soilgrids;
pub mod types;

// Re-export commonly used types
pub use analysis::{SoilAnalyzer, SoilReport};
pub use catalog::{describe_properties, recommend, recommend_for_label};
pub use classifier::{classify, classify_composition, classify_fallback, DepthBand};
pub use config::ServerConfig;
pub use error::{DataSourceError, UnknownSoilType, ValidationError};
pub use soilgrids::{CompositionSource, SoilGridsClient};
pub use types::*;

#[cfg(feature = "api")]
pub use api_server::{create_router, AppState};
