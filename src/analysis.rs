//! Soil analysis pipeline.
//!
//! validate -> fetch composition (bounded) -> classify -> describe.
//! Any composition failure is logged and replaced by the coordinate-hash
//! estimate; callers only ever see validation errors.

use std::sync::Arc;
use std::time::Duration;

use crate::catalog::{describe_properties, recommend};
use crate::classifier::{self, DepthBand};
use crate::error::{DataSourceError, ValidationError};
use crate::soilgrids::CompositionSource;
use crate::types::{
    CropRecommendations, DataSource, SampleLocation, SoilAnalysisResult, SoilComposition, SoilFormData,
};

pub const DEFAULT_FETCH_TIMEOUT: Duration = Duration::from_secs(10);

/// Analysis plus the crop advice for its soil type.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct SoilReport {
    pub analysis: SoilAnalysisResult,
    pub crops: CropRecommendations,
}

#[derive(Clone)]
pub struct SoilAnalyzer {
    source: Option<Arc<dyn CompositionSource>>,
    timeout: Duration,
}

impl SoilAnalyzer {
    /// Analyzer that always estimates from coordinates.
    pub fn offline() -> Self {
        Self {
            source: None,
            timeout: DEFAULT_FETCH_TIMEOUT,
        }
    }

    pub fn with_source(source: Arc<dyn CompositionSource>, timeout: Duration) -> Self {
        Self {
            source: Some(source),
            timeout,
        }
    }

    pub fn has_source(&self) -> bool {
        self.source.is_some()
    }

    /// Validate input and analyze the sample point.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError`] for out-of-range input. Composition source
    /// failures never surface here.
    pub async fn analyze(&self, form: &SoilFormData) -> Result<SoilAnalysisResult, ValidationError> {
        let location = form.validate()?;
        tracing::debug!(
            "Analyzing soil at ({}, {}) depth {}cm (band {})",
            location.longitude,
            location.latitude,
            location.depth,
            DepthBand::from_depth(location.depth).label()
        );

        let composition = self.fetch_composition(&location).await;
        Ok(Self::build_result(&location, composition.as_ref()))
    }

    /// Analysis and crop advice in one call.
    ///
    /// # Errors
    ///
    /// Same as [`SoilAnalyzer::analyze`].
    pub async fn report(&self, form: &SoilFormData) -> Result<SoilReport, ValidationError> {
        let analysis = self.analyze(form).await?;
        let crops = recommend(analysis.soil_type);
        Ok(SoilReport { analysis, crops })
    }

    /// Pure part of the pipeline: classification and catalog lookup.
    pub fn build_result(location: &SampleLocation, composition: Option<&SoilComposition>) -> SoilAnalysisResult {
        let soil_type = classifier::classify(location, composition);
        let (description, properties) = describe_properties(soil_type, location, composition);

        SoilAnalysisResult {
            soil_type,
            properties,
            description,
            location: Some(*location),
            source: if composition.is_some() {
                DataSource::SoilGrids
            } else {
                DataSource::Estimated
            },
        }
    }

    async fn fetch_composition(&self, location: &SampleLocation) -> Option<SoilComposition> {
        let source = self.source.as_ref()?;

        let outcome = match tokio::time::timeout(self.timeout, source.fetch(location)).await {
            Ok(result) => result,
            Err(_) => Err(DataSourceError::Timeout(self.timeout)),
        };

        match outcome {
            Ok(composition) => Some(composition),
            Err(e) => {
                tracing::warn!(
                    "{} unavailable for ({}, {}), using estimated soil data: {}",
                    source.name(),
                    location.longitude,
                    location.latitude,
                    e
                );
                None
            }
        }
    }
}

impl Default for SoilAnalyzer {
    fn default() -> Self {
        Self::offline()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::SoilType;
    use async_trait::async_trait;

    struct FixedSource(SoilComposition);

    #[async_trait]
    impl CompositionSource for FixedSource {
        fn name(&self) -> &str {
            "fixed"
        }

        async fn fetch(&self, _location: &SampleLocation) -> Result<SoilComposition, DataSourceError> {
            Ok(self.0)
        }
    }

    struct FailingSource;

    #[async_trait]
    impl CompositionSource for FailingSource {
        fn name(&self) -> &str {
            "failing"
        }

        async fn fetch(&self, _location: &SampleLocation) -> Result<SoilComposition, DataSourceError> {
            Err(DataSourceError::Status {
                status: 503,
                reason: "Service Unavailable".to_string(),
            })
        }
    }

    fn nyc() -> SoilFormData {
        SoilFormData { longitude: -74.006, latitude: 40.713, depth: 30.0 }
    }

    #[tokio::test]
    async fn test_measured_path() {
        let composition = SoilComposition {
            clay_pct: 12.0,
            sand_pct: 65.0,
            silt_pct: 23.0,
            ph: 6.1,
            ..Default::default()
        };
        let analyzer = SoilAnalyzer::with_source(Arc::new(FixedSource(composition)), DEFAULT_FETCH_TIMEOUT);
        let result = analyzer.analyze(&nyc()).await.unwrap();

        assert_eq!(result.soil_type, SoilType::Sandy);
        assert_eq!(result.source, DataSource::SoilGrids);
        assert_eq!(result.properties.len(), 9);
        assert_eq!(result.property("Sand Content").unwrap().value.as_f64(), Some(65.0));
    }

    #[tokio::test]
    async fn test_failure_falls_back() {
        let analyzer = SoilAnalyzer::with_source(Arc::new(FailingSource), DEFAULT_FETCH_TIMEOUT);
        let result = analyzer.analyze(&nyc()).await.unwrap();

        assert_eq!(result.soil_type, SoilType::Chalky);
        assert_eq!(result.source, DataSource::Estimated);
        assert_eq!(result, SoilAnalyzer::offline().analyze(&nyc()).await.unwrap());
    }

    #[tokio::test]
    async fn test_validation_precedes_fetch() {
        let analyzer = SoilAnalyzer::with_source(Arc::new(FailingSource), DEFAULT_FETCH_TIMEOUT);
        let form = SoilFormData { longitude: 200.0, latitude: 0.0, depth: 10.0 };
        assert_eq!(analyzer.analyze(&form).await, Err(ValidationError::Longitude(200.0)));
    }

    #[tokio::test]
    async fn test_report_uses_resolved_type() {
        let report = SoilAnalyzer::offline().report(&nyc()).await.unwrap();
        assert_eq!(report.crops, recommend(SoilType::Chalky));
        assert_eq!(report.analysis.location, Some(nyc().validate().unwrap()));
    }
}
