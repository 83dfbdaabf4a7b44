//! Coordinate-hash soil estimate, used when no measured composition exists.
//!
//! This is a deterministic pseudo-randomizer, not a soil model. It spreads
//! (longitude, latitude, depth) over six soil types so repeated requests for
//! the same point agree:
//!
//! ```text
//! x     = sin(lat * 0.1) * 100 + cos(lon * 0.15) * 100 + clamp(tan(depth * 0.05), ±1e6) * 50
//! score = round_half_away_from_zero(|x|)      (0 if x is not finite)
//! index = score mod 6  ->  [Clay, Sandy, Loam, Silt, Peat, Chalky]
//! ```
//!
//! `tan` has poles at depth = (π/2 + kπ) / 0.05 cm (≈31.4, 94.2, 157.1 within
//! the valid range). Clamping keeps the score finite and exactly representable
//! near them. All trig goes through `libm` for bit-identical results across
//! platforms.

use crate::types::SoilType;

/// Ordered pick list for the hash index.
pub const FALLBACK_SOIL_TYPES: [SoilType; 6] = [
    SoilType::Clay,
    SoilType::Sandy,
    SoilType::Loam,
    SoilType::Silt,
    SoilType::Peat,
    SoilType::Chalky,
];

const LATITUDE_FREQ: f64 = 0.1;
const LONGITUDE_FREQ: f64 = 0.15;
const DEPTH_FREQ: f64 = 0.05;
const LATITUDE_WEIGHT: f64 = 100.0;
const LONGITUDE_WEIGHT: f64 = 100.0;
const DEPTH_WEIGHT: f64 = 50.0;

/// Bound on |tan(depth * 0.05)|.
pub const TAN_CLAMP: f64 = 1.0e6;

/// Integer hash score for a sample point.
pub fn fallback_score(longitude: f64, latitude: f64, depth: f64) -> u64 {
    let lat_term = libm::sin(latitude * LATITUDE_FREQ) * LATITUDE_WEIGHT;
    let lon_term = libm::cos(longitude * LONGITUDE_FREQ) * LONGITUDE_WEIGHT;
    let depth_term = libm::tan(depth * DEPTH_FREQ).clamp(-TAN_CLAMP, TAN_CLAMP) * DEPTH_WEIGHT;

    let x = lat_term + lon_term + depth_term;
    if !x.is_finite() {
        return 0;
    }
    // |x| <= 100 + 100 + 5e7, well inside u64 and f64's exact-integer range
    libm::round(x.abs()) as u64
}

/// Estimate a soil type from coordinates alone.
pub fn classify_fallback(longitude: f64, latitude: f64, depth: f64) -> SoilType {
    let score = fallback_score(longitude, latitude, depth);
    FALLBACK_SOIL_TYPES[(score % FALLBACK_SOIL_TYPES.len() as u64) as usize]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_points() {
        // x ≈ 635.44 -> 635 % 6 = 5
        assert_eq!(fallback_score(-74.006, 40.713, 30.0), 635);
        assert_eq!(classify_fallback(-74.006, 40.713, 30.0), SoilType::Chalky);

        // x ≈ 127.32 -> 127 % 6 = 1
        assert_eq!(fallback_score(0.0, 0.0, 10.0), 127);
        assert_eq!(classify_fallback(0.0, 0.0, 10.0), SoilType::Sandy);

        // x ≈ -173.69, absolute value taken before rounding
        assert_eq!(fallback_score(2.35, 48.85, 100.0), 174);
        assert_eq!(classify_fallback(2.35, 48.85, 100.0), SoilType::Clay);

        // x ≈ 75.58 -> 76 % 6 = 4
        assert_eq!(classify_fallback(-122.4194, 37.7749, 15.0), SoilType::Peat);
    }

    #[test]
    fn test_deterministic() {
        for i in 0..200 {
            let lon = -180.0 + i as f64 * 1.8;
            let lat = -90.0 + i as f64 * 0.9;
            let depth = 0.5 + i as f64;
            assert_eq!(
                classify_fallback(lon, lat, depth),
                classify_fallback(lon, lat, depth)
            );
        }
    }

    #[test]
    fn test_tan_pole_stays_finite() {
        let pole = std::f64::consts::FRAC_PI_2 / DEPTH_FREQ;
        for depth in [pole, pole + f64::EPSILON * 64.0, 3.0 * pole, 5.0 * pole] {
            let score = fallback_score(0.0, 0.0, depth);
            assert!(score as f64 <= 200.0 + TAN_CLAMP * DEPTH_WEIGHT + 1.0);
            assert!(FALLBACK_SOIL_TYPES.contains(&classify_fallback(0.0, 0.0, depth)));
        }
    }

    #[test]
    fn test_non_finite_input_scores_zero() {
        assert_eq!(fallback_score(f64::NAN, 0.0, 10.0), 0);
        assert_eq!(classify_fallback(f64::NAN, 0.0, 10.0), SoilType::Clay);
    }

    #[test]
    fn test_spreads_over_all_six_types() {
        let mut seen = std::collections::HashSet::new();
        for lat in -90..=90 {
            seen.insert(classify_fallback(10.0, lat as f64, 12.0));
        }
        assert_eq!(seen.len(), FALLBACK_SOIL_TYPES.len());
    }
}
