//! Soil property lists.
//!
//! Two modes:
//! - measured: rows built from a [`SoilComposition`] fetched for the sample's depth band
//! - baseline: the soil type's static table, varied slightly by the request inputs
//!   so different points differ while the same point always agrees

use crate::catalog::profiles::{self, BaselineProperty, BaselineValue, VariationInput};
use crate::classifier::water_retention;
use crate::types::{SampleLocation, SoilComposition, SoilProperty, SoilType};

/// Description paragraph and ordered property rows for a soil type.
pub fn describe_properties(
    soil_type: SoilType,
    location: &SampleLocation,
    composition: Option<&SoilComposition>,
) -> (String, Vec<SoilProperty>) {
    let properties = match composition {
        Some(c) => measured_properties(c),
        None => baseline_properties(soil_type, location),
    };
    (profiles::description(soil_type).to_string(), properties)
}

// ============================================================================
// Measured Mode
// ============================================================================

fn ph_label(ph: f64) -> &'static str {
    if ph > 7.0 {
        "Alkaline"
    } else if ph < 7.0 {
        "Acidic"
    } else {
        "Neutral"
    }
}

fn organic_matter_label(g_kg: f64) -> &'static str {
    if g_kg > 30.0 {
        "High"
    } else if g_kg > 15.0 {
        "Moderate"
    } else {
        "Low"
    }
}

fn nitrogen_label(g_kg: f64) -> &'static str {
    if g_kg > 2.0 {
        "High"
    } else if g_kg > 1.0 {
        "Moderate"
    } else {
        "Low"
    }
}

/// Rows for measured composition, in display order.
pub fn measured_properties(c: &SoilComposition) -> Vec<SoilProperty> {
    let (retention, retention_note) = water_retention(c.clay_pct, c.sand_pct);

    vec![
        SoilProperty::new("Clay Content", c.clay_pct)
            .with_unit("%")
            .with_description("Percentage of clay particles"),
        SoilProperty::new("Sand Content", c.sand_pct)
            .with_unit("%")
            .with_description("Percentage of sand particles"),
        SoilProperty::new("Silt Content", c.silt_pct)
            .with_unit("%")
            .with_description("Percentage of silt particles"),
        SoilProperty::new("pH Level", c.ph)
            .with_unit("pH")
            .with_description(ph_label(c.ph)),
        SoilProperty::new("Organic Matter", c.organic_carbon_g_kg)
            .with_unit("g/kg")
            .with_description(organic_matter_label(c.organic_carbon_g_kg)),
        SoilProperty::new("Nitrogen", c.nitrogen_g_kg)
            .with_unit("g/kg")
            .with_description(nitrogen_label(c.nitrogen_g_kg)),
        SoilProperty::new("Bulk Density", c.bulk_density_kg_dm3)
            .with_unit("kg/dm³")
            .with_description("Soil compaction indicator"),
        SoilProperty::new("CEC", c.cec_cmol_kg)
            .with_unit("cmol/kg")
            .with_description("Cation Exchange Capacity - nutrient retention ability"),
        SoilProperty::new("Water Retention", retention).with_description(retention_note),
    ]
}

// ============================================================================
// Baseline Mode
// ============================================================================

fn input_term(input: VariationInput, location: &SampleLocation) -> f64 {
    match input {
        VariationInput::Longitude => location.longitude,
        VariationInput::Latitude => location.latitude,
        VariationInput::Depth => location.depth,
        VariationInput::LonLat => location.longitude * location.latitude,
    }
}

/// Evaluate one baseline row. `%` is the truncated remainder, so the
/// variation has the sign of the input and stays strictly inside ±range.
pub fn baseline_value(row: &BaselineProperty, location: &SampleLocation) -> SoilProperty {
    let property = match row.value {
        BaselineValue::Varied {
            input,
            coefficient,
            base,
            range,
            rounded,
        } => {
            let value = base + (input_term(input, location) * coefficient) % range;
            let value = if rounded { libm::round(value) } else { value };
            SoilProperty::new(row.name, value)
        }
        BaselineValue::Fixed(text) => SoilProperty::new(row.name, text),
    };

    let property = match row.unit {
        Some(unit) => property.with_unit(unit),
        None => property,
    };
    property.with_description(row.description)
}

pub fn baseline_properties(soil_type: SoilType, location: &SampleLocation) -> Vec<SoilProperty> {
    profiles::baseline(soil_type)
        .iter()
        .map(|row| baseline_value(row, location))
        .collect()
}
