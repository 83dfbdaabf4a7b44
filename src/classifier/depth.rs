//! SoilGrids depth bands.
//!
//! Sampling depth (cm) is bucketed into the provider's standard layers.
//! Intervals are lower-exclusive, upper-inclusive; anything past 100 cm
//! lands in the last band.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum DepthBand {
    #[serde(rename = "0-5")]
    D0To5,
    #[serde(rename = "5-15")]
    D5To15,
    #[serde(rename = "15-30")]
    D15To30,
    #[serde(rename = "30-60")]
    D30To60,
    #[serde(rename = "60-100")]
    D60To100,
    #[serde(rename = "100-200")]
    D100To200,
}

impl DepthBand {
    pub const ALL: [DepthBand; 6] = [
        DepthBand::D0To5,
        DepthBand::D5To15,
        DepthBand::D15To30,
        DepthBand::D30To60,
        DepthBand::D60To100,
        DepthBand::D100To200,
    ];

    /// Bucket a depth. Non-positive depths fall in the first band.
    pub fn from_depth(depth_cm: f64) -> DepthBand {
        if depth_cm <= 5.0 {
            DepthBand::D0To5
        } else if depth_cm <= 15.0 {
            DepthBand::D5To15
        } else if depth_cm <= 30.0 {
            DepthBand::D15To30
        } else if depth_cm <= 60.0 {
            DepthBand::D30To60
        } else if depth_cm <= 100.0 {
            DepthBand::D60To100
        } else {
            DepthBand::D100To200
        }
    }

    /// Range label as used by the provider, without the unit ("30-60").
    pub fn label(self) -> &'static str {
        match self {
            DepthBand::D0To5 => "0-5",
            DepthBand::D5To15 => "5-15",
            DepthBand::D15To30 => "15-30",
            DepthBand::D30To60 => "30-60",
            DepthBand::D60To100 => "60-100",
            DepthBand::D100To200 => "100-200",
        }
    }

    /// Query parameter form ("30-60cm").
    pub fn query_param(self) -> String {
        format!("{}cm", self.label())
    }

    /// (lower exclusive, upper inclusive) in cm
    pub fn bounds(self) -> (f64, f64) {
        match self {
            DepthBand::D0To5 => (0.0, 5.0),
            DepthBand::D5To15 => (5.0, 15.0),
            DepthBand::D15To30 => (15.0, 30.0),
            DepthBand::D30To60 => (30.0, 60.0),
            DepthBand::D60To100 => (60.0, 100.0),
            DepthBand::D100To200 => (100.0, 200.0),
        }
    }

    /// True if the provider's layer label names this band ("30-60" or "30-60cm").
    pub fn matches_label(self, label: &str) -> bool {
        label.trim().trim_end_matches("cm").trim() == self.label()
    }
}
