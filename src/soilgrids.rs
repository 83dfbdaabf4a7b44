//! ISRIC SoilGrids composition source.
//!
//! Queries the SoilGrids v2.0 properties endpoint for the eight properties
//! used here, picks the layer matching the sample's depth band and converts
//! each mean to conventional units using the layer's `d_factor`.
//!
//! Reference: https://rest.isric.org/soilgrids/v2.0/docs

use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;

use crate::classifier::DepthBand;
use crate::error::DataSourceError;
use crate::types::{SampleLocation, SoilComposition};

pub const DEFAULT_SOILGRIDS_URL: &str = "https://rest.isric.org/soilgrids/v2.0/properties/query";

/// Property codes requested from the provider.
pub const PROPERTY_CODES: [&str; 8] = ["clay", "sand", "silt", "phh2o", "soc", "nitrogen", "bdod", "cec"];

/// Anything that can produce measured composition for a sample point.
#[async_trait]
pub trait CompositionSource: Send + Sync {
    /// Short name for log messages.
    fn name(&self) -> &str;

    /// Fetch composition for the depth band containing `location.depth`.
    ///
    /// # Errors
    ///
    /// Returns [`DataSourceError`] on transport, status or payload problems.
    async fn fetch(&self, location: &SampleLocation) -> Result<SoilComposition, DataSourceError>;
}

// ============================================================================
// Response Shape
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct SoilGridsResponse {
    pub properties: SoilGridsProperties,
}

#[derive(Debug, Deserialize)]
pub struct SoilGridsProperties {
    pub layers: Vec<SoilGridsLayer>,
}

#[derive(Debug, Deserialize)]
pub struct SoilGridsLayer {
    pub name: String,
    #[serde(default)]
    pub unit_measure: Option<UnitMeasure>,
    pub depths: Vec<SoilGridsDepth>,
}

#[derive(Debug, Deserialize)]
pub struct UnitMeasure {
    /// Divisor from mapped integer units to conventional units
    #[serde(default = "default_d_factor")]
    pub d_factor: f64,
    #[serde(default)]
    pub target_units: Option<String>,
}

fn default_d_factor() -> f64 {
    1.0
}

#[derive(Debug, Deserialize)]
pub struct SoilGridsDepth {
    pub label: String,
    pub values: SoilGridsValues,
}

#[derive(Debug, Deserialize)]
pub struct SoilGridsValues {
    /// Null over water and other unmapped cells
    #[serde(default)]
    pub mean: Option<f64>,
}

impl SoilGridsLayer {
    /// Mean for a depth band, scaled to conventional units.
    fn scaled_mean(&self, band: DepthBand) -> Option<f64> {
        let d_factor = self
            .unit_measure
            .as_ref()
            .map(|u| u.d_factor)
            .filter(|d| *d != 0.0)
            .unwrap_or(1.0);

        self.depths
            .iter()
            .find(|d| band.matches_label(&d.label))
            .and_then(|d| d.values.mean)
            .map(|mean| mean / d_factor)
    }
}

impl SoilGridsResponse {
    /// Extract composition for one depth band.
    ///
    /// Clay, sand and silt are required; missing chemistry reads as 0.
    pub fn composition(&self, band: DepthBand) -> Result<SoilComposition, DataSourceError> {
        let value = |code: &str| {
            self.properties
                .layers
                .iter()
                .find(|layer| layer.name == code)
                .and_then(|layer| layer.scaled_mean(band))
        };
        let required = |code: &'static str| {
            value(code).ok_or(DataSourceError::MissingTexture {
                property: code,
                band: band.label(),
            })
        };

        Ok(SoilComposition {
            clay_pct: required("clay")?,
            sand_pct: required("sand")?,
            silt_pct: required("silt")?,
            ph: value("phh2o").unwrap_or(0.0),
            organic_carbon_g_kg: value("soc").unwrap_or(0.0),
            nitrogen_g_kg: value("nitrogen").unwrap_or(0.0),
            bulk_density_kg_dm3: value("bdod").unwrap_or(0.0),
            cec_cmol_kg: value("cec").unwrap_or(0.0),
        })
    }
}

// ============================================================================
// HTTP Client
// ============================================================================

pub struct SoilGridsClient {
    client: reqwest::Client,
    base_url: String,
}

impl SoilGridsClient {
    /// # Errors
    ///
    /// Fails if the TLS backend cannot be initialized.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, DataSourceError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn query(location: &SampleLocation, band: DepthBand) -> Vec<(&'static str, String)> {
        let mut params = vec![
            ("lon", location.longitude.to_string()),
            ("lat", location.latitude.to_string()),
        ];
        params.extend(PROPERTY_CODES.iter().map(|code| ("property", (*code).to_string())));
        params.push(("depth", band.query_param()));
        params.push(("value", "mean".to_string()));
        params
    }
}

#[async_trait]
impl CompositionSource for SoilGridsClient {
    fn name(&self) -> &str {
        "soilgrids"
    }

    async fn fetch(&self, location: &SampleLocation) -> Result<SoilComposition, DataSourceError> {
        let band = DepthBand::from_depth(location.depth);
        tracing::debug!(
            "Querying SoilGrids at ({}, {}) for band {}",
            location.longitude,
            location.latitude,
            band.label()
        );

        let response = self
            .client
            .get(&self.base_url)
            .query(&Self::query(location, band))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(DataSourceError::Status {
                status: status.as_u16(),
                reason: status.canonical_reason().unwrap_or("unknown").to_string(),
            });
        }

        let body = response.text().await?;
        let parsed: SoilGridsResponse = serde_json::from_str(&body)?;
        parsed.composition(band)
    }
}
