// ABOUTME: Unit conversion helpers for the historical body composition formulas
// ABOUTME: Converts cm to inches, kg to pounds, and cm to meters for Navy, YMCA, Bailey, Parillo

//! Unit conversion helpers.
//!
//! Callers normalize everything to metric (kg, cm, mm) before reaching the
//! engine. A handful of published formulas were fitted in imperial units or
//! meters; they convert through these helpers instead of inlining factors.

use crate::constants::units::{CM_PER_INCH, CM_PER_METER, LB_PER_KG};

/// Centimeters to inches
#[must_use]
pub fn cm_to_inches(cm: f64) -> f64 {
    cm / CM_PER_INCH
}

/// Inches to centimeters
#[must_use]
pub fn inches_to_cm(inches: f64) -> f64 {
    inches * CM_PER_INCH
}

/// Kilograms to pounds
#[must_use]
pub fn kg_to_lb(kg: f64) -> f64 {
    kg * LB_PER_KG
}

/// Pounds to kilograms
#[must_use]
pub fn lb_to_kg(lb: f64) -> f64 {
    lb / LB_PER_KG
}

/// Centimeters to meters
#[must_use]
pub fn cm_to_m(cm: f64) -> f64 {
    cm / CM_PER_METER
}

/// Meters to centimeters
#[must_use]
pub fn m_to_cm(m: f64) -> f64 {
    m * CM_PER_METER
}

/// Round an energy or gram value to a whole number, saturating at zero
#[must_use]
pub fn round_whole(value: f64) -> u32 {
    if value.is_nan() || value <= 0.0 {
        return 0;
    }
    value.round().min(f64::from(u32::MAX)) as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converts_common_reference_values() {
        assert!((cm_to_inches(2.54) - 1.0).abs() < 1e-12);
        assert!((kg_to_lb(1.0) - 2.20462).abs() < 1e-12);
        assert!((cm_to_m(180.0) - 1.8).abs() < 1e-12);
    }

    #[test]
    fn conversions_are_inverse() {
        let waist_cm = 91.4;
        assert!((inches_to_cm(cm_to_inches(waist_cm)) - waist_cm).abs() < 1e-9);
        assert!((lb_to_kg(kg_to_lb(72.5)) - 72.5).abs() < 1e-9);
        assert!((m_to_cm(cm_to_m(165.0)) - 165.0).abs() < 1e-9);
    }

    #[test]
    fn rounding_saturates_at_zero() {
        assert_eq!(round_whole(3029.4), 3029);
        assert_eq!(round_whole(2528.5), 2529);
        assert_eq!(round_whole(-12.0), 0);
        assert_eq!(round_whole(f64::NAN), 0);
    }
}
