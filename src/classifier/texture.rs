//! Texture classification from clay/sand/silt percentages.
//!
//! Simplified USDA texture-triangle thresholds. Rules are checked in order
//! and the first match wins, so overlapping ranges resolve deterministically.

use crate::types::SoilType;

pub const CLAY_DOMINANT: f64 = 40.0;
pub const SAND_DOMINANT: f64 = 50.0;
pub const SILT_DOMINANT: f64 = 50.0;
pub const BALANCED_MIN: f64 = 25.0;
pub const CLAY_LOAM_MAX_SAND_SILT: f64 = 45.0;
pub const LOAM_VARIANT_MIN: f64 = 70.0;
pub const LOAM_VARIANT_MAX_CLAY: f64 = 15.0;

/// Classify soil texture from particle-size percentages.
///
/// 1. clay >= 40 -> Clay
/// 2. sand >= 50 -> Sandy
/// 3. silt >= 50 -> Silt
/// 4. all three >= 25 -> Loam
/// 5. clay >= 25, sand <= 45, silt <= 45 -> Clay Loam
/// 6. sand >= 70, clay <= 15 -> Sandy Loam
/// 7. silt >= 70, clay <= 15 -> Silty Loam
/// 8. otherwise -> Loam
///
/// Inputs are not required to sum to 100.
pub fn classify_composition(clay: f64, sand: f64, silt: f64) -> SoilType {
    if clay >= CLAY_DOMINANT {
        SoilType::Clay
    } else if sand >= SAND_DOMINANT {
        SoilType::Sandy
    } else if silt >= SILT_DOMINANT {
        SoilType::Silt
    } else if clay >= BALANCED_MIN && sand >= BALANCED_MIN && silt >= BALANCED_MIN {
        SoilType::Loam
    } else if clay >= BALANCED_MIN
        && sand <= CLAY_LOAM_MAX_SAND_SILT
        && silt <= CLAY_LOAM_MAX_SAND_SILT
    {
        SoilType::ClayLoam
    } else if sand >= LOAM_VARIANT_MIN && clay <= LOAM_VARIANT_MAX_CLAY {
        // Rules 6 and 7 are shadowed by rules 2 and 3 at the current thresholds
        SoilType::SandyLoam
    } else if silt >= LOAM_VARIANT_MIN && clay <= LOAM_VARIANT_MAX_CLAY {
        SoilType::SiltyLoam
    } else {
        SoilType::Loam
    }
}

/// Qualitative water retention from texture: (value, description).
pub fn water_retention(clay: f64, sand: f64) -> (&'static str, &'static str) {
    if clay > 35.0 {
        ("High", "Holds water well")
    } else if sand > 50.0 {
        ("Low", "Drains quickly")
    } else {
        ("Moderate", "Average drainage")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{Rng, SeedableRng};

    #[test]
    fn test_clay_wins_regardless_of_other_fractions() {
        let mut rng = rand::rngs::StdRng::seed_from_u64(7);
        for _ in 0..1_000 {
            let clay = rng.gen_range(40.0..=100.0);
            let sand = rng.gen_range(0.0..=100.0);
            let silt = rng.gen_range(0.0..=100.0);
            assert_eq!(classify_composition(clay, sand, silt), SoilType::Clay);
        }
    }

    #[test]
    fn test_rule_order() {
        assert_eq!(classify_composition(40.0, 60.0, 0.0), SoilType::Clay);
        assert_eq!(classify_composition(10.0, 50.0, 40.0), SoilType::Sandy);
        assert_eq!(classify_composition(10.0, 40.0, 50.0), SoilType::Silt);
        assert_eq!(classify_composition(30.0, 35.0, 35.0), SoilType::Loam);
        assert_eq!(classify_composition(35.0, 45.0, 20.0), SoilType::ClayLoam);
        assert_eq!(classify_composition(25.0, 30.0, 45.0), SoilType::Loam);
    }

    #[test]
    fn test_default_is_loam() {
        // clay under 25, nothing dominant
        assert_eq!(classify_composition(20.0, 40.0, 40.0), SoilType::Loam);
        assert_eq!(classify_composition(0.0, 0.0, 0.0), SoilType::Loam);
    }

    #[test]
    fn test_clay_loam_needs_sand_and_silt_at_most_45() {
        assert_eq!(classify_composition(30.0, 46.0, 24.0), SoilType::Loam);
        assert_eq!(classify_composition(30.0, 45.0, 24.0), SoilType::ClayLoam);
    }

    #[test]
    fn test_water_retention() {
        assert_eq!(water_retention(36.0, 60.0).0, "High");
        assert_eq!(water_retention(20.0, 51.0).0, "Low");
        assert_eq!(water_retention(35.0, 50.0).0, "Moderate");
    }
}
