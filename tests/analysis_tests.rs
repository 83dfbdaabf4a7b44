//! Analysis Pipeline Tests
//!
//! End-to-end scenarios through the library API: validation, estimated
//! classification, catalog lookups and crop advice.

use std::sync::Arc;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use soil_advisor::{
    recommend, recommend_for_label, CompositionSource, DataSource, DataSourceError, SampleLocation,
    SoilAnalyzer, SoilComposition, SoilFormData, SoilType, Suitability, ValidationError,
};

/// Never answers within any reasonable timeout
struct StalledSource;

#[async_trait]
impl CompositionSource for StalledSource {
    fn name(&self) -> &str {
        "stalled"
    }

    async fn fetch(&self, _location: &SampleLocation) -> Result<SoilComposition, DataSourceError> {
        tokio::time::sleep(Duration::from_secs(30)).await;
        Ok(SoilComposition::default())
    }
}

fn form(longitude: f64, latitude: f64, depth: f64) -> SoilFormData {
    SoilFormData { longitude, latitude, depth }
}

fn number(result: &soil_advisor::SoilAnalysisResult, name: &str) -> f64 {
    result
        .property(name)
        .and_then(|p| p.value.as_f64())
        .unwrap_or_else(|| panic!("missing numeric property {}", name))
}

// =========================================================================
// Section 1: Estimated analysis (composition source unavailable)
// =========================================================================

#[tokio::test]
async fn test_new_york_estimate() {
    let analyzer = SoilAnalyzer::offline();
    let result = analyzer.analyze(&form(-74.006, 40.713, 30.0)).await.unwrap();

    // sin(4.0713)*100 + cos(-11.1009)*100 + tan(1.5)*50 ≈ 635.44 -> 635 % 6 = 5
    assert_eq!(result.soil_type, SoilType::Chalky);
    assert_eq!(result.source, DataSource::Estimated);
    assert!(result.description.starts_with("Chalky soil is alkaline"));

    // Chalky table: pH 8.0±0.4, organic matter 1.5±0.7, nitrogen 0.1±0.04
    let ph = number(&result, "pH Level");
    assert!(ph > 7.6 && ph < 8.4, "pH {}", ph);
    let om = number(&result, "Organic Matter");
    assert!(om > 0.8 && om < 2.2, "organic matter {}", om);
    let n = number(&result, "Nitrogen");
    assert!(n > 0.06 && n < 0.14, "nitrogen {}", n);

    let crops = recommend(result.soil_type);
    assert_eq!(crops.recommended_crops.len(), 5);
    assert_eq!(crops.recommended_crops[0].name, "Lavender");
    assert!(crops.notes.unwrap().contains("acidifying fertilizers"));
}

#[tokio::test]
async fn test_estimate_is_reproducible() {
    let analyzer = SoilAnalyzer::offline();
    let input = form(151.2093, -33.8688, 72.5);
    let first = analyzer.analyze(&input).await.unwrap();
    let second = analyzer.analyze(&input).await.unwrap();
    assert_eq!(first, second);
}

#[tokio::test]
async fn test_stalled_source_times_out_to_estimate() {
    let analyzer = SoilAnalyzer::with_source(Arc::new(StalledSource), Duration::from_millis(50));
    let start = Instant::now();
    let result = analyzer.analyze(&form(-74.006, 40.713, 30.0)).await.unwrap();

    assert!(start.elapsed() < Duration::from_secs(5));
    assert_eq!(result.source, DataSource::Estimated);
    assert_eq!(result.soil_type, SoilType::Chalky);
}

// =========================================================================
// Section 2: Input validation
// =========================================================================

#[tokio::test]
async fn test_boundary_inputs() {
    let analyzer = SoilAnalyzer::offline();

    assert!(analyzer.analyze(&form(-180.0, 0.0, 10.0)).await.is_ok());
    assert!(analyzer.analyze(&form(180.0, 0.0, 10.0)).await.is_ok());
    assert_eq!(
        analyzer.analyze(&form(-180.0001, 0.0, 10.0)).await,
        Err(ValidationError::Longitude(-180.0001))
    );
    assert_eq!(
        analyzer.analyze(&form(180.0001, 0.0, 10.0)).await,
        Err(ValidationError::Longitude(180.0001))
    );

    assert_eq!(
        analyzer.analyze(&form(0.0, 0.0, 0.0)).await,
        Err(ValidationError::Depth(0.0))
    );
    assert!(analyzer.analyze(&form(0.0, 0.0, 0.0001)).await.is_ok());
    assert!(analyzer.analyze(&form(0.0, 0.0, 200.0)).await.is_ok());
    assert_eq!(
        analyzer.analyze(&form(0.0, 0.0, 200.0001)).await,
        Err(ValidationError::Depth(200.0001))
    );
}

// =========================================================================
// Section 3: Crop advice
// =========================================================================

#[test]
fn test_loam_crop_list() {
    let recs = recommend_for_label("Loam");
    assert_eq!(recs.recommended_crops.len(), 5);

    for name in ["Tomatoes", "Corn", "Most Vegetables"] {
        let crop = recs.recommended_crops.iter().find(|c| c.name == name).unwrap();
        assert_eq!(crop.suitability, Suitability::High);
    }
    assert!(recs.notes.unwrap().contains("regular additions of organic matter"));
}

#[test]
fn test_unrecognized_soil_type() {
    let recs = recommend_for_label("Rocky");
    assert_eq!(recs.recommended_crops.len(), 3);
    assert_eq!(recs.recommended_crops[0].name, "Mixed Vegetables");
    assert_eq!(recs.recommended_crops[1].name, "Cover Crops");
    assert_eq!(recs.recommended_crops[2].name, "Native Plants");
    assert_eq!(
        recs.notes.as_deref(),
        Some("Consider testing your soil further to determine the best crops for your specific conditions.")
    );
}

#[test]
fn test_recommendations_serialize_identically() {
    for label in ["Clay", "Sandy", "Loam", "Silt", "Peat", "Chalky", "Clay Loam", "Rocky"] {
        let a = serde_json::to_string(&recommend_for_label(label)).unwrap();
        let b = serde_json::to_string(&recommend_for_label(label)).unwrap();
        assert_eq!(a, b);
    }
}
