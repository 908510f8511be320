// ABOUTME: Tape-measure body fat methods (Covert Bailey, U.S. Navy, YMCA, modified YMCA)
// ABOUTME: All circumference formulas work in inches and pounds and return body fat percent

use super::{
    BodyCompositionEstimate, BodyCompositionMethod, BodyCompositionParams, MeasurementRequirements,
};
use calculeat_core::models::TapeSite;
use calculeat_core::units::{cm_to_inches, kg_to_lb};
use calculeat_core::Gender;

use TapeSite::{Calf, Forearm, Hip, Neck, Thigh, Waist, Wrist};

const COVERT_BAILEY_MALE_SITES: &[TapeSite] = &[Waist, Hip, Forearm, Wrist];
const COVERT_BAILEY_FEMALE_SITES: &[TapeSite] = &[Hip, Thigh, Calf, Wrist];
const NAVY_MALE_SITES: &[TapeSite] = &[Neck, Waist];
const NAVY_FEMALE_SITES: &[TapeSite] = &[Neck, Waist, Hip];
const YMCA_SITES: &[TapeSite] = &[Waist];
const MODIFIED_YMCA_FEMALE_SITES: &[TapeSite] = &[Waist, Hip, Wrist, Forearm];

/// Covert Bailey switches coefficients after this age (inclusive below)
const COVERT_BAILEY_AGE_SPLIT: f64 = 30.0;

const YMCA_MALE_OFFSET_LB: f64 = -98.42;
const YMCA_FEMALE_OFFSET_LB: f64 = -76.76;
const YMCA_WAIST_COEFFICIENT: f64 = 4.15;
const YMCA_WEIGHT_COEFFICIENT: f64 = -0.082;

pub(super) fn requirements(
    method: BodyCompositionMethod,
    gender: Gender,
) -> MeasurementRequirements {
    let tape = match method {
        BodyCompositionMethod::CovertBailey => {
            gender.select(COVERT_BAILEY_MALE_SITES, COVERT_BAILEY_FEMALE_SITES)
        }
        BodyCompositionMethod::UsNavy => gender.select(NAVY_MALE_SITES, NAVY_FEMALE_SITES),
        BodyCompositionMethod::ModifiedYmca => {
            gender.select(YMCA_SITES, MODIFIED_YMCA_FEMALE_SITES)
        }
        _ => YMCA_SITES,
    };
    MeasurementRequirements {
        tape,
        ..MeasurementRequirements::default()
    }
}

/// Circumference in inches, when present
fn inches(params: &BodyCompositionParams, site: TapeSite) -> Option<f64> {
    params.tape.get(site).map(cm_to_inches)
}

pub(super) fn covert_bailey(params: &BodyCompositionParams) -> Option<BodyCompositionEstimate> {
    let young = params.age_years() <= COVERT_BAILEY_AGE_SPLIT;
    let wrist = inches(params, Wrist)?;

    let percent = match params.gender {
        Gender::Male => {
            let waist = inches(params, Waist)?;
            let hip = inches(params, Hip)?;
            let forearm = inches(params, Forearm)?;
            let forearm_coefficient: f64 = if young { -3.0 } else { -2.7 };
            forearm_coefficient.mul_add(forearm, 0.5_f64.mul_add(hip, waist)) - wrist
        }
        Gender::Female => {
            let hip = inches(params, Hip)?;
            let thigh = inches(params, Thigh)?;
            let calf = inches(params, Calf)?;
            let thigh_coefficient: f64 = if young { 0.8 } else { 1.0 };
            (-2.0_f64).mul_add(calf, thigh_coefficient.mul_add(thigh, hip)) - wrist
        }
    };
    Some(BodyCompositionEstimate::BodyFatPercent(percent))
}

pub(super) fn us_navy(params: &BodyCompositionParams) -> Option<BodyCompositionEstimate> {
    let neck = inches(params, Neck)?;
    let waist = inches(params, Waist)?;
    let height = cm_to_inches(params.height_cm);

    let (girth, girth_coefficient, height_coefficient, intercept): (f64, f64, f64, f64) =
        match params.gender {
            Gender::Male => (waist - neck, 86.010, -70.041, 36.76),
            Gender::Female => (waist + inches(params, Hip)? - neck, 163.205, -97.684, -78.387),
        };
    if girth <= 0.0 || height <= 0.0 {
        return None;
    }

    Some(BodyCompositionEstimate::BodyFatPercent(girth_coefficient.mul_add(
        girth.log10(),
        height_coefficient.mul_add(height.log10(), intercept),
    )))
}

pub(super) fn ymca(params: &BodyCompositionParams) -> Option<BodyCompositionEstimate> {
    let waist = inches(params, Waist)?;
    let weight_lb = kg_to_lb(params.weight_kg);
    let offset = params.gender.select(YMCA_MALE_OFFSET_LB, YMCA_FEMALE_OFFSET_LB);
    let fat_lb = YMCA_WEIGHT_COEFFICIENT
        .mul_add(weight_lb, YMCA_WAIST_COEFFICIENT.mul_add(waist, offset));
    Some(BodyCompositionEstimate::BodyFatPercent(fat_lb / weight_lb * 100.0))
}

pub(super) fn modified_ymca(params: &BodyCompositionParams) -> Option<BodyCompositionEstimate> {
    if params.gender == Gender::Male {
        return ymca(params);
    }

    let weight_lb = kg_to_lb(params.weight_kg);
    let wrist = inches(params, Wrist)?;
    let waist = inches(params, Waist)?;
    let hip = inches(params, Hip)?;
    let forearm = inches(params, Forearm)?;

    let fat_lb = 0.268_f64.mul_add(
        weight_lb,
        (-0.318_f64).mul_add(
            wrist,
            0.157_f64.mul_add(
                waist,
                0.245_f64.mul_add(hip, (-0.434_f64).mul_add(forearm, -8.987)),
            ),
        ),
    );
    Some(BodyCompositionEstimate::BodyFatPercent(fat_lb / weight_lb * 100.0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithms::body_composition::compute_body_fat;
    use calculeat_core::{CaliperMeasurements, TapeMeasurements};

    fn params(gender: Gender, age: u32, tape: TapeMeasurements) -> BodyCompositionParams {
        BodyCompositionParams {
            age,
            gender,
            weight_kg: gender.select(80.0, 60.0),
            height_cm: gender.select(180.0, 165.0),
            bmi: None,
            bmr: None,
            caliper: CaliperMeasurements::default(),
            tape,
        }
    }

    fn percent(estimate: Option<BodyCompositionEstimate>) -> Option<f64> {
        match estimate? {
            BodyCompositionEstimate::BodyFatPercent(bf) => Some(bf),
            BodyCompositionEstimate::Density(_) => None,
        }
    }

    #[test]
    fn navy_male_reference_range() {
        let tape = TapeMeasurements {
            neck: Some(38.0),
            waist: Some(85.0),
            ..TapeMeasurements::default()
        };
        let bf = percent(us_navy(&params(Gender::Male, 30, tape)));
        assert!(bf.is_some_and(|bf| (bf - 16.1).abs() < 0.2));
    }

    #[test]
    fn navy_rejects_non_positive_log_argument() {
        let tape = TapeMeasurements {
            neck: Some(40.0),
            waist: Some(40.0),
            ..TapeMeasurements::default()
        };
        assert_eq!(us_navy(&params(Gender::Male, 30, tape)), None);
    }

    #[test]
    fn navy_female_needs_hip() {
        let mut tape = TapeMeasurements {
            neck: Some(32.0),
            waist: Some(70.0),
            ..TapeMeasurements::default()
        };
        assert_eq!(us_navy(&params(Gender::Female, 30, tape)), None);

        tape.hip = Some(95.0);
        assert!(us_navy(&params(Gender::Female, 30, tape)).is_some());
    }

    #[test]
    fn covert_bailey_switches_coefficients_after_thirty() {
        let tape = TapeMeasurements {
            hip: Some(95.0),
            thigh: Some(55.0),
            calf: Some(35.0),
            wrist: Some(15.0),
            ..TapeMeasurements::default()
        };
        let young = percent(covert_bailey(&params(Gender::Female, 30, tape)));
        let older = percent(covert_bailey(&params(Gender::Female, 31, tape)));
        assert!(young.is_some_and(|bf| (bf - 21.25).abs() < 0.05));
        // Thigh coefficient rises from 0.8 to 1.0
        let thigh_in = cm_to_inches(55.0);
        assert!(older
            .zip(young)
            .is_some_and(|(o, y)| (o - y - 0.2 * thigh_in).abs() < 1e-9));
    }

    #[test]
    fn covert_bailey_uses_sex_specific_sites() {
        let female_sites_only = TapeMeasurements {
            hip: Some(95.0),
            thigh: Some(55.0),
            calf: Some(35.0),
            wrist: Some(15.0),
            ..TapeMeasurements::default()
        };
        assert_eq!(
            compute_body_fat(
                BodyCompositionMethod::CovertBailey,
                None,
                &params(Gender::Male, 30, female_sites_only)
            ),
            None
        );
    }

    #[test]
    fn ymca_male_reference_range() {
        let tape = TapeMeasurements {
            waist: Some(85.0),
            ..TapeMeasurements::default()
        };
        let bf = percent(ymca(&params(Gender::Male, 30, tape)));
        assert!(bf.is_some_and(|bf| (bf - 14.7).abs() < 0.2));
    }

    #[test]
    fn modified_ymca_male_matches_ymca() {
        let tape = TapeMeasurements {
            waist: Some(85.0),
            ..TapeMeasurements::default()
        };
        let male = params(Gender::Male, 30, tape);
        assert_eq!(modified_ymca(&male), ymca(&male));
    }

    #[test]
    fn modified_ymca_female_needs_four_sites() {
        let mut tape = TapeMeasurements {
            waist: Some(70.0),
            hip: Some(95.0),
            wrist: Some(15.0),
            ..TapeMeasurements::default()
        };
        assert_eq!(modified_ymca(&params(Gender::Female, 30, tape)), None);

        tape.forearm = Some(23.0);
        let bf = percent(modified_ymca(&params(Gender::Female, 30, tape)));
        assert!(bf.is_some_and(|bf| (bf - 25.8).abs() < 0.3));
    }
}
