// ABOUTME: Body fat derived from other metrics instead of body measurements
// ABOUTME: Heritage BMI regression and the Cunningham BMR equation solved for lean mass

use super::{BodyCompositionEstimate, BodyCompositionParams};
use calculeat_core::constants::cunningham::{
    INTERCEPT, LEAN_MASS_COEFFICIENT, MAX_PLAUSIBLE_BODY_FAT_PERCENT,
};

const HERITAGE_BMI_COEFFICIENT: f64 = 1.39;
const HERITAGE_AGE_COEFFICIENT: f64 = 0.16;
const HERITAGE_MALE_OFFSET: f64 = 19.34;
const HERITAGE_FEMALE_OFFSET: f64 = 9.0;

/// `1.39·BMI + 0.16·age − (19.34 | 9)`
pub(super) fn heritage_bmi(params: &BodyCompositionParams) -> Option<BodyCompositionEstimate> {
    let bmi = params.bmi()?;
    let offset = params
        .gender
        .select(HERITAGE_MALE_OFFSET, HERITAGE_FEMALE_OFFSET);
    Some(BodyCompositionEstimate::BodyFatPercent(
        HERITAGE_BMI_COEFFICIENT.mul_add(
            bmi,
            HERITAGE_AGE_COEFFICIENT.mul_add(params.age_years(), -offset),
        ),
    ))
}

/// Invert `BMR = 370 + 21.6·LBM`, rejecting implausible results
pub(super) fn reversed_cunningham(
    params: &BodyCompositionParams,
) -> Option<BodyCompositionEstimate> {
    let bmr = params.bmr()?;
    let lean_mass = (bmr - INTERCEPT) / LEAN_MASS_COEFFICIENT;
    let body_fat = (1.0 - lean_mass / params.weight_kg) * 100.0;
    (0.0..=MAX_PLAUSIBLE_BODY_FAT_PERCENT)
        .contains(&body_fat)
        .then_some(BodyCompositionEstimate::BodyFatPercent(body_fat))
}
