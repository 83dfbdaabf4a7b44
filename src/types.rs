//! Shared data types for soil analysis and crop advice.
//!
//! Serialized field names follow the JSON shapes the web client already
//! consumes (`soilType`, `recommendedCrops`, lowercase suitability tiers).

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{UnknownSoilType, ValidationError};

// ============================================================================
// Soil Type
// ============================================================================

/// Texture classification resolved once per request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SoilType {
    Clay,
    Sandy,
    Loam,
    Silt,
    Peat,
    Chalky,
    #[serde(rename = "Clay Loam")]
    ClayLoam,
    #[serde(rename = "Sandy Loam")]
    SandyLoam,
    #[serde(rename = "Silty Loam")]
    SiltyLoam,
    Unknown,
}

impl SoilType {
    /// Every variant, in declaration order.
    pub const ALL: [SoilType; 10] = [
        SoilType::Clay,
        SoilType::Sandy,
        SoilType::Loam,
        SoilType::Silt,
        SoilType::Peat,
        SoilType::Chalky,
        SoilType::ClayLoam,
        SoilType::SandyLoam,
        SoilType::SiltyLoam,
        SoilType::Unknown,
    ];

    /// Display label, identical to the serialized form.
    pub fn label(self) -> &'static str {
        match self {
            SoilType::Clay => "Clay",
            SoilType::Sandy => "Sandy",
            SoilType::Loam => "Loam",
            SoilType::Silt => "Silt",
            SoilType::Peat => "Peat",
            SoilType::Chalky => "Chalky",
            SoilType::ClayLoam => "Clay Loam",
            SoilType::SandyLoam => "Sandy Loam",
            SoilType::SiltyLoam => "Silty Loam",
            SoilType::Unknown => "Unknown",
        }
    }

    /// Lenient lookup: unrecognized labels resolve to `Unknown`.
    pub fn from_label(label: &str) -> SoilType {
        label.parse().unwrap_or_else(|err: UnknownSoilType| {
            tracing::debug!("{}; using generic catalog entries", err);
            SoilType::Unknown
        })
    }
}

impl fmt::Display for SoilType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for SoilType {
    type Err = UnknownSoilType;

    /// Accepts display labels and their space-less forms, case-insensitively
    /// ("Clay Loam", "clayloam", "CLAY_LOAM").
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '_' && *c != '-')
            .flat_map(char::to_lowercase)
            .collect();

        let soil_type = match normalized.as_str() {
            "clay" => SoilType::Clay,
            "sandy" | "sand" => SoilType::Sandy,
            "loam" => SoilType::Loam,
            "silt" => SoilType::Silt,
            "peat" => SoilType::Peat,
            "chalky" | "chalk" => SoilType::Chalky,
            "clayloam" => SoilType::ClayLoam,
            "sandyloam" => SoilType::SandyLoam,
            "siltyloam" | "siltloam" => SoilType::SiltyLoam,
            "unknown" => SoilType::Unknown,
            _ => return Err(UnknownSoilType(s.to_string())),
        };
        Ok(soil_type)
    }
}

// ============================================================================
// Soil Properties
// ============================================================================

/// A property value: numeric measurements or qualitative ratings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PropertyValue {
    Number(f64),
    Text(String),
}

impl PropertyValue {
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            PropertyValue::Number(n) => Some(*n),
            PropertyValue::Text(_) => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            PropertyValue::Number(_) => None,
            PropertyValue::Text(s) => Some(s),
        }
    }
}

impl From<f64> for PropertyValue {
    fn from(value: f64) -> Self {
        PropertyValue::Number(value)
    }
}

impl From<&str> for PropertyValue {
    fn from(value: &str) -> Self {
        PropertyValue::Text(value.to_string())
    }
}

/// One row of the property list. List order is display order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SoilProperty {
    pub name: String,
    pub value: PropertyValue,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl SoilProperty {
    pub fn new(name: &str, value: impl Into<PropertyValue>) -> Self {
        Self {
            name: name.to_string(),
            value: value.into(),
            unit: None,
            description: None,
        }
    }

    pub fn with_unit(mut self, unit: &str) -> Self {
        self.unit = Some(unit.to_string());
        self
    }

    pub fn with_description(mut self, description: &str) -> Self {
        self.description = Some(description.to_string());
        self
    }
}

// ============================================================================
// Analysis Result
// ============================================================================

/// Where the sample was taken. Depth is in centimeters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SampleLocation {
    pub longitude: f64,
    pub latitude: f64,
    pub depth: f64,
}

/// Which path produced the classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DataSource {
    /// Measured texture from the composition provider
    SoilGrids,
    /// Deterministic coordinate hash, used when the provider is unavailable
    Estimated,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SoilAnalysisResult {
    pub soil_type: SoilType,
    pub properties: Vec<SoilProperty>,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<SampleLocation>,
    pub source: DataSource,
}

impl SoilAnalysisResult {
    /// Find a property row by name.
    pub fn property(&self, name: &str) -> Option<&SoilProperty> {
        self.properties.iter().find(|p| p.name == name)
    }
}

/// Measured composition for one depth band, in conventional units.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SoilComposition {
    pub clay_pct: f64,
    pub sand_pct: f64,
    pub silt_pct: f64,
    pub ph: f64,
    pub organic_carbon_g_kg: f64,
    pub nitrogen_g_kg: f64,
    pub bulk_density_kg_dm3: f64,
    pub cec_cmol_kg: f64,
}

// ============================================================================
// Crop Advice
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Suitability {
    High,
    Medium,
    Low,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Crop {
    pub name: String,
    pub suitability: Suitability,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CropRecommendations {
    pub recommended_crops: Vec<Crop>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

// ============================================================================
// Request Input
// ============================================================================

/// Raw user input, validated before any classification happens.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SoilFormData {
    pub longitude: f64,
    pub latitude: f64,
    pub depth: f64,
}

pub const MIN_LONGITUDE: f64 = -180.0;
pub const MAX_LONGITUDE: f64 = 180.0;
pub const MIN_LATITUDE: f64 = -90.0;
pub const MAX_LATITUDE: f64 = 90.0;
/// Exclusive lower bound (cm)
pub const MIN_DEPTH: f64 = 0.0;
/// Inclusive upper bound (cm)
pub const MAX_DEPTH: f64 = 200.0;

impl SoilFormData {
    /// Check ranges: longitude in [-180, 180], latitude in [-90, 90],
    /// depth in (0, 200]. Values are never clamped; NaN fails every check.
    pub fn validate(&self) -> Result<SampleLocation, ValidationError> {
        if !(MIN_LONGITUDE..=MAX_LONGITUDE).contains(&self.longitude) {
            return Err(ValidationError::Longitude(self.longitude));
        }
        if !(MIN_LATITUDE..=MAX_LATITUDE).contains(&self.latitude) {
            return Err(ValidationError::Latitude(self.latitude));
        }
        if !(self.depth > MIN_DEPTH && self.depth <= MAX_DEPTH) {
            return Err(ValidationError::Depth(self.depth));
        }

        Ok(SampleLocation {
            longitude: self.longitude,
            latitude: self.latitude,
            depth: self.depth,
        })
    }
}
