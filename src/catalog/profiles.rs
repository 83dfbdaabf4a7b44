//! Static soil profile table.
//!
//! One record per soil type holding its description paragraph, the baseline
//! property rows used when nothing was measured, and its crop advice. Types
//! without baseline rows or crop advice (the compound loams) borrow the
//! generic entries. The table is built once and shared read-only.

use std::sync::LazyLock;

use rustc_hash::FxHashMap;

use crate::types::{SoilType, Suitability};

// ============================================================================
// Record Types
// ============================================================================

/// Which request input drives a baseline property's variation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VariationInput {
    Longitude,
    Latitude,
    Depth,
    /// longitude * latitude
    LonLat,
}

/// How a baseline row gets its value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BaselineValue {
    /// `base + (input * coefficient) % range`, optionally rounded to an integer
    Varied {
        input: VariationInput,
        coefficient: f64,
        base: f64,
        range: f64,
        rounded: bool,
    },
    Fixed(&'static str),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BaselineProperty {
    pub name: &'static str,
    pub unit: Option<&'static str>,
    pub description: &'static str,
    pub value: BaselineValue,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CropEntry {
    pub name: &'static str,
    pub suitability: Suitability,
    pub description: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CropAdvice {
    pub crops: &'static [CropEntry],
    pub notes: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SoilProfile {
    pub description: &'static str,
    pub baseline: Option<&'static [BaselineProperty]>,
    pub crop_advice: Option<&'static CropAdvice>,
}

// ============================================================================
// Row Builders
// ============================================================================

const fn ph(base: f64, range: f64, description: &'static str) -> BaselineProperty {
    BaselineProperty {
        name: "pH Level",
        unit: Some("pH"),
        description,
        value: BaselineValue::Varied {
            input: VariationInput::Longitude,
            coefficient: 0.01,
            base,
            range,
            rounded: false,
        },
    }
}

const fn organic_matter(base: f64, coefficient: f64, range: f64, description: &'static str) -> BaselineProperty {
    BaselineProperty {
        name: "Organic Matter",
        unit: Some("%"),
        description,
        value: BaselineValue::Varied {
            input: VariationInput::Latitude,
            coefficient,
            base,
            range,
            rounded: false,
        },
    }
}

const fn nitrogen(base: f64, coefficient: f64, range: f64, description: &'static str) -> BaselineProperty {
    BaselineProperty {
        name: "Nitrogen",
        unit: Some("%"),
        description,
        value: BaselineValue::Varied {
            input: VariationInput::Depth,
            coefficient,
            base,
            range,
            rounded: false,
        },
    }
}

const fn phosphorus(base: f64, range: f64, description: &'static str) -> BaselineProperty {
    BaselineProperty {
        name: "Phosphorus",
        unit: Some("ppm"),
        description,
        value: BaselineValue::Varied {
            input: VariationInput::LonLat,
            coefficient: 0.001,
            base,
            range,
            rounded: true,
        },
    }
}

const fn potassium(base: f64, coefficient: f64, range: f64, description: &'static str) -> BaselineProperty {
    BaselineProperty {
        name: "Potassium",
        unit: Some("ppm"),
        description,
        value: BaselineValue::Varied {
            input: VariationInput::Depth,
            coefficient,
            base,
            range,
            rounded: true,
        },
    }
}

const fn water_retention(rating: &'static str, description: &'static str) -> BaselineProperty {
    BaselineProperty {
        name: "Water Retention",
        unit: None,
        description,
        value: BaselineValue::Fixed(rating),
    }
}

const fn crop(name: &'static str, suitability: Suitability, description: &'static str) -> CropEntry {
    CropEntry { name, suitability, description }
}

use crate::types::Suitability::{High, Medium};

// ============================================================================
// Descriptions
// ============================================================================

const CLAY_DESCRIPTION: &str = "Clay soil is characterized by fine particles that stick together when wet, forming a heavy and dense texture. It retains water and nutrients well but can be difficult to work with.";
const SANDY_DESCRIPTION: &str = "Sandy soil consists of larger particles that allow for good drainage but poor nutrient retention. It warms up quickly in spring but can dry out rapidly in hot weather.";
const LOAM_DESCRIPTION: &str = "Loam is considered ideal for growing most plants. It has a balanced mixture of sand, silt, and clay particles, providing good drainage while retaining adequate moisture and nutrients.";
const SILT_DESCRIPTION: &str = "Silt soil has medium-sized particles that hold water well but can become compacted. It is fertile and easy to work with when properly managed.";
const PEAT_DESCRIPTION: &str = "Peat soil is high in organic matter and tends to be acidic. It holds moisture very well but may require amendments for optimal growing conditions for many plants.";
const CHALKY_DESCRIPTION: &str = "Chalky soil is alkaline and typically contains calcium carbonate or lime. It drains well but can cause nutrient deficiencies in plants that prefer acidic conditions.";
const CLAY_LOAM_DESCRIPTION: &str = "Clay loam combines the nutrient-richness of clay with better drainage. It's fertile while being less difficult to work with than heavy clay.";
const SANDY_LOAM_DESCRIPTION: &str = "Sandy loam provides good drainage with better water and nutrient retention than pure sandy soil. It's easy to work with and warms quickly in spring.";
const SILTY_LOAM_DESCRIPTION: &str = "Silty loam combines the fertility and water retention of silt with improved drainage and structure. It's generally fertile and easy to work with.";
const GENERIC_DESCRIPTION: &str = "This soil has a balanced composition with moderate fertility and water retention properties.";

// ============================================================================
// Baseline Property Tables
// ============================================================================

const CLAY_BASELINE: &[BaselineProperty] = &[
    ph(7.5, 0.5, "Slightly alkaline"),
    organic_matter(2.5, 0.01, 1.0, "Moderate"),
    nitrogen(0.15, 0.001, 0.1, "Moderate"),
    phosphorus(12.0, 5.0, "Medium"),
    potassium(180.0, 0.5, 20.0, "High"),
    water_retention("High", "Holds water well"),
];

const SANDY_BASELINE: &[BaselineProperty] = &[
    ph(6.0, 0.5, "Slightly acidic"),
    organic_matter(1.0, 0.01, 0.8, "Low"),
    nitrogen(0.08, 0.001, 0.05, "Low"),
    phosphorus(8.0, 4.0, "Low"),
    potassium(90.0, 0.4, 15.0, "Medium"),
    water_retention("Low", "Drains quickly"),
];

const LOAM_BASELINE: &[BaselineProperty] = &[
    ph(6.8, 0.3, "Neutral"),
    organic_matter(4.0, 0.01, 1.2, "High"),
    nitrogen(0.25, 0.001, 0.08, "High"),
    phosphorus(20.0, 6.0, "High"),
    potassium(200.0, 0.6, 25.0, "High"),
    water_retention("Moderate", "Good balance"),
];

const SILT_BASELINE: &[BaselineProperty] = &[
    ph(6.5, 0.4, "Slightly acidic"),
    organic_matter(3.0, 0.01, 1.1, "Moderate"),
    nitrogen(0.18, 0.001, 0.07, "Moderate"),
    phosphorus(15.0, 5.0, "Medium"),
    potassium(150.0, 0.5, 20.0, "Medium"),
    water_retention("Moderate to High", "Holds water well"),
];

const PEAT_BASELINE: &[BaselineProperty] = &[
    ph(4.5, 0.6, "Acidic"),
    organic_matter(20.0, 0.02, 5.0, "Very High"),
    nitrogen(0.3, 0.002, 0.1, "High"),
    phosphorus(5.0, 3.0, "Low"),
    potassium(60.0, 0.3, 15.0, "Low"),
    water_retention("Very High", "Can become waterlogged"),
];

const CHALKY_BASELINE: &[BaselineProperty] = &[
    ph(8.0, 0.4, "Alkaline"),
    organic_matter(1.5, 0.01, 0.7, "Low"),
    nitrogen(0.1, 0.001, 0.04, "Low"),
    phosphorus(10.0, 4.0, "Medium"),
    potassium(120.0, 0.4, 18.0, "Medium"),
    water_retention("Low", "Drains quickly"),
];

const GENERIC_BASELINE: &[BaselineProperty] = &[
    ph(7.0, 0.3, "Neutral"),
    organic_matter(2.0, 0.01, 0.9, "Moderate"),
    nitrogen(0.15, 0.001, 0.06, "Moderate"),
    phosphorus(12.0, 5.0, "Medium"),
    potassium(150.0, 0.5, 20.0, "Medium"),
    water_retention("Moderate", "Average drainage"),
];

// ============================================================================
// Crop Advice Tables
// ============================================================================

static CLAY_CROPS: CropAdvice = CropAdvice {
    crops: &[
        crop("Broccoli", High, "Thrives in moisture-retentive clay soils"),
        crop("Cabbage", High, "Does well in heavy, nutrient-rich soils"),
        crop("Brussels Sprouts", High, "Prefers clay soils with good moisture retention"),
        crop("Summer Squash", Medium, "Can grow well with proper drainage improvements"),
        crop("Beans", Medium, "Can help improve clay soil structure over time"),
    ],
    notes: "Clay soils benefit from regular addition of organic matter to improve structure and drainage. Consider raised beds for better results.",
};

static SANDY_CROPS: CropAdvice = CropAdvice {
    crops: &[
        crop("Carrots", High, "Grow straight and clean in loose sandy soil"),
        crop("Potatoes", High, "Easy to harvest in sandy soils"),
        crop("Radishes", High, "Quick-growing root vegetables ideal for sandy soil"),
        crop("Lettuce", Medium, "Requires consistent watering due to quick drainage"),
        crop("Strawberries", Medium, "Enjoy the good drainage of sandy soils"),
    ],
    notes: "Sandy soils will benefit from regular additions of compost to improve water and nutrient retention. More frequent watering is typically required.",
};

static LOAM_CROPS: CropAdvice = CropAdvice {
    crops: &[
        crop("Tomatoes", High, "Ideal conditions for tomato growth"),
        crop("Corn", High, "Thrives in nutrient-rich, well-draining loam"),
        crop("Squash", High, "Excellent for all types of squash"),
        crop("Peppers", High, "Perfect balance of drainage and moisture retention"),
        crop("Most Vegetables", High, "Loam is optimal for most garden vegetables"),
    ],
    notes: "Loam soil is considered ideal for most crops. Maintain its quality with regular additions of organic matter.",
};

static SILT_CROPS: CropAdvice = CropAdvice {
    crops: &[
        crop("Leafy Greens", High, "Thrive in moisture-retentive silt soil"),
        crop("Vine Crops", High, "Do well in the fertile conditions of silt"),
        crop("Root Vegetables", Medium, "Good growth with proper management"),
        crop("Onions", Medium, "Grow well with adequate drainage"),
        crop("Perennial Herbs", Medium, "Can establish well in silt soils"),
    ],
    notes: "Silt soils are naturally fertile but can benefit from additions that improve structure and prevent compaction.",
};

static PEAT_CROPS: CropAdvice = CropAdvice {
    crops: &[
        crop("Blueberries", High, "Thrive in acidic, moisture-rich peat soil"),
        crop("Cranberries", High, "Ideal acidic and wet conditions"),
        crop("Lingonberries", High, "Perfect for these acid-loving plants"),
        crop("Rhododendrons", High, "Ornamental shrubs that prefer acidic soil"),
        crop("Azaleas", High, "Flourish in acidic peat conditions"),
    ],
    notes: "Peat soils are excellent for acid-loving plants but may need drainage improvements for some crops. Consider sustainability concerns with peat usage.",
};

static CHALKY_CROPS: CropAdvice = CropAdvice {
    crops: &[
        crop("Lavender", High, "Thrives in alkaline, free-draining soil"),
        crop("Spinach", High, "Tolerates alkaline conditions well"),
        crop("Beets", High, "Prefer slightly alkaline soil conditions"),
        crop("Cabbage Family", Medium, "Can adapt to chalky soils with amendments"),
        crop("Sweet Corn", Medium, "Can perform adequately with proper nutrients"),
    ],
    notes: "Chalky soils may need addition of organic matter to improve water retention. Consider using acidifying fertilizers for plants that prefer lower pH.",
};

static GENERIC_CROPS: CropAdvice = CropAdvice {
    crops: &[
        crop("Mixed Vegetables", Medium, "Various vegetables can be grown with appropriate amendments"),
        crop("Cover Crops", High, "Consider cover crops to improve soil quality"),
        crop("Native Plants", High, "Local native plants often adapt well to regional soil conditions"),
    ],
    notes: "Consider testing your soil further to determine the best crops for your specific conditions.",
};

// ============================================================================
// Keyed Table
// ============================================================================

/// Entry used for `Unknown` and for any field a type does not define.
pub static GENERIC_PROFILE: SoilProfile = SoilProfile {
    description: GENERIC_DESCRIPTION,
    baseline: Some(GENERIC_BASELINE),
    crop_advice: Some(&GENERIC_CROPS),
};

static PROFILES: LazyLock<FxHashMap<SoilType, SoilProfile>> = LazyLock::new(|| {
    let entries = [
        (SoilType::Clay, CLAY_DESCRIPTION, Some(CLAY_BASELINE), Some(&CLAY_CROPS)),
        (SoilType::Sandy, SANDY_DESCRIPTION, Some(SANDY_BASELINE), Some(&SANDY_CROPS)),
        (SoilType::Loam, LOAM_DESCRIPTION, Some(LOAM_BASELINE), Some(&LOAM_CROPS)),
        (SoilType::Silt, SILT_DESCRIPTION, Some(SILT_BASELINE), Some(&SILT_CROPS)),
        (SoilType::Peat, PEAT_DESCRIPTION, Some(PEAT_BASELINE), Some(&PEAT_CROPS)),
        (SoilType::Chalky, CHALKY_DESCRIPTION, Some(CHALKY_BASELINE), Some(&CHALKY_CROPS)),
        (SoilType::ClayLoam, CLAY_LOAM_DESCRIPTION, None, None),
        (SoilType::SandyLoam, SANDY_LOAM_DESCRIPTION, None, None),
        (SoilType::SiltyLoam, SILTY_LOAM_DESCRIPTION, None, None),
    ];

    entries
        .into_iter()
        .map(|(soil_type, description, baseline, crop_advice)| {
            (soil_type, SoilProfile { description, baseline, crop_advice })
        })
        .collect()
});

/// Profile for a soil type; `Unknown` gets the generic profile.
pub fn profile(soil_type: SoilType) -> &'static SoilProfile {
    PROFILES.get(&soil_type).unwrap_or(&GENERIC_PROFILE)
}

pub fn description(soil_type: SoilType) -> &'static str {
    profile(soil_type).description
}

/// Baseline rows, falling back to the generic table.
pub fn baseline(soil_type: SoilType) -> &'static [BaselineProperty] {
    profile(soil_type).baseline.unwrap_or(GENERIC_BASELINE)
}

/// Crop advice, falling back to the generic list.
pub fn crop_advice(soil_type: SoilType) -> &'static CropAdvice {
    profile(soil_type).crop_advice.unwrap_or(&GENERIC_CROPS)
}
