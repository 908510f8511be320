// ABOUTME: Skinfold caliper regressions (Jackson/Pollock 3/4/7, Durnin/Womersley, Parillo)
// ABOUTME: Jackson/Pollock and Durnin/Womersley yield body density; Parillo and JP4 sum-only yield percent

use super::{
    BodyCompositionEstimate, BodyCompositionMethod, BodyCompositionParams,
    MeasurementRequirements, MethodVariation,
};
use crate::algorithms::brackets;
use calculeat_core::models::{CaliperSite, TapeSite};
use calculeat_core::units::{cm_to_m, kg_to_lb};
use calculeat_core::Gender;

use CaliperSite::{
    Abdominal, Bicep, Calf, Chest, LowerBack, Midaxillary, Subscapular, Suprailiac, Thigh, Tricep,
};

const JP3_MALE_SITES: &[CaliperSite] = &[Chest, Abdominal, Thigh];
const JP3_MALE_CLOTHED_SITES: &[CaliperSite] = &[Chest, Tricep, Subscapular];
const JP3_FEMALE_SITES: &[CaliperSite] = &[Tricep, Suprailiac, Thigh];
const JP3_FEMALE_CLOTHED_SITES: &[CaliperSite] = &[Tricep, Suprailiac, Abdominal];
const JP4_SITES: &[CaliperSite] = &[Abdominal, Suprailiac, Tricep, Thigh];
const JP7_SITES: &[CaliperSite] = &[
    Chest,
    Abdominal,
    Thigh,
    Tricep,
    Subscapular,
    Suprailiac,
    Midaxillary,
];
const DURNIN_WOMERSLEY_SITES: &[CaliperSite] = &[Bicep, Tricep, Subscapular, Suprailiac];
const PARILLO_SITES: &[CaliperSite] = &[
    Chest,
    Abdominal,
    Thigh,
    Bicep,
    Tricep,
    Subscapular,
    Suprailiac,
    LowerBack,
    Calf,
];

/// Waist and forearm terms of the male circumference regressions
const MALE_CIRCUMFERENCE_SITES: &[TapeSite] = &[TapeSite::Waist, TapeSite::Forearm];
/// Hip term of the female circumference regressions
const FEMALE_CIRCUMFERENCE_SITES: &[TapeSite] = &[TapeSite::Hip];

/// Durnin/Womersley age brackets: 17-19, 20-29, 30-39, 40-49, 50+
const DURNIN_WOMERSLEY_AGE_BRACKETS: [f64; 4] = [20.0, 30.0, 40.0, 50.0];
/// `(intercept, slope)` on `log10(S)` per age bracket
const DURNIN_WOMERSLEY_MALE: [(f64, f64); 5] = [
    (1.1620, -0.0630),
    (1.1631, -0.0632),
    (1.1422, -0.0544),
    (1.1620, -0.0700),
    (1.1715, -0.0779),
];
const DURNIN_WOMERSLEY_FEMALE: [(f64, f64); 5] = [
    (1.1549, -0.0678),
    (1.1599, -0.0717),
    (1.1423, -0.0632),
    (1.1333, -0.0612),
    (1.1339, -0.0645),
];

const PARILLO_FACTOR: f64 = 27.0;

/// Quadratic skinfold regression with optional age and circumference terms
///
/// Coefficients carry their sign: `intercept + sum·S + sum_sq·S² + age·A`.
#[derive(Debug, Clone, Copy)]
struct Regression {
    intercept: f64,
    sum: f64,
    sum_sq: f64,
    age: f64,
}

impl Regression {
    const fn new(intercept: f64, sum: f64, sum_sq: f64, age: f64) -> Self {
        Self {
            intercept,
            sum,
            sum_sq,
            age,
        }
    }

    fn evaluate(&self, s: f64, age: f64) -> f64 {
        self.sum
            .mul_add(s, self.sum_sq.mul_add(s * s, self.age.mul_add(age, self.intercept)))
    }
}

const JP3_MALE_AGE: Regression =
    Regression::new(1.109_38, -0.000_826_7, 0.000_001_6, -0.000_257_4);
const JP3_MALE_AGE_CIRC: Regression =
    Regression::new(1.099_075_0, -0.000_820_9, 0.000_002_6, -0.000_201_7);
const JP3_MALE_CLOTHED: Regression =
    Regression::new(1.112_502_5, -0.001_312_5, 0.000_005_5, -0.000_244);

const JP3_FEMALE_AGE: Regression =
    Regression::new(1.099_492_1, -0.000_992_9, 0.000_002_3, -0.000_139_2);
const JP3_FEMALE_AGE_CIRC: Regression =
    Regression::new(1.147_029_2, -0.000_937_6, 0.000_003_0, -0.000_115_6);
const JP3_FEMALE_CLOTHED: Regression =
    Regression::new(1.089_733, -0.000_924_5, 0.000_002_5, -0.000_097_9);

const JP4_FEMALE_AGE: Regression =
    Regression::new(1.096_095, -0.000_695_2, 0.000_001_1, -0.000_071_4);
const JP4_FEMALE_CIRC: Regression = Regression::new(1.144_391_3, -0.000_652_3, 0.000_001_4, 0.0);
const JP4_FEMALE_AGE_CIRC: Regression =
    Regression::new(1.145_446_4, -0.000_655_8, 0.000_001_5, -0.000_060_4);
const JP4_MALE_SUM_ONLY: Regression = Regression::new(-5.763_77, 0.292_88, -0.0005, 0.158_45);
const JP4_FEMALE_SUM_ONLY: Regression = Regression::new(1.4072, 0.296_69, -0.000_43, 0.029_63);

const JP7_MALE_AGE: Regression =
    Regression::new(1.112, -0.000_434_99, 0.000_000_55, -0.000_288_26);
const JP7_FEMALE_AGE: Regression =
    Regression::new(1.097, -0.000_469_71, 0.000_000_56, -0.000_128_28);
const JP7_FEMALE_CIRC: Regression =
    Regression::new(1.147_029_2, -0.000_429_0, 0.000_000_51, 0.0);
const JP7_MALE_AGE_CIRC: Regression =
    Regression::new(1.101_00, -0.000_411_5, 0.000_000_69, -0.000_226_31);
const JP7_FEMALE_AGE_CIRC: Regression =
    Regression::new(1.1440, -0.000_419_86, 0.000_000_55, -0.000_06);

/// Male waist (m) and forearm (m) coefficients
const JP3_MALE_WAIST_FOREARM: (f64, f64) = (-0.005_675, 0.018_586);
const JP7_MALE_WAIST_FOREARM: (f64, f64) = (-0.005_923_9, 0.019_063_2);

/// Female hip (cm) coefficients
const JP3_FEMALE_HIP: f64 = -0.000_583_9;
const JP4_FEMALE_CIRC_HIP: f64 = -0.000_605_3;
const JP4_FEMALE_AGE_CIRC_HIP: f64 = -0.000_598_1;
const JP7_FEMALE_CIRC_HIP: f64 = -0.000_625_5;
const JP7_FEMALE_AGE_CIRC_HIP: f64 = -0.000_583_1;

pub(super) fn requirements(
    method: BodyCompositionMethod,
    variation: Option<MethodVariation>,
    gender: Gender,
) -> Option<MeasurementRequirements> {
    use MethodVariation::{Age, AgeCircumference, Circumference, Clothed, SumOnly};

    let circumference = gender.select(MALE_CIRCUMFERENCE_SITES, FEMALE_CIRCUMFERENCE_SITES);
    let (caliper, tape): (&'static [CaliperSite], &'static [TapeSite]) = match (method, variation) {
        (BodyCompositionMethod::JacksonPollock3Male, Some(Age)) => (JP3_MALE_SITES, &[]),
        (BodyCompositionMethod::JacksonPollock3Male, Some(AgeCircumference)) => {
            (JP3_MALE_SITES, MALE_CIRCUMFERENCE_SITES)
        }
        (BodyCompositionMethod::JacksonPollock3Male, Some(Clothed)) => {
            (JP3_MALE_CLOTHED_SITES, &[])
        }
        (BodyCompositionMethod::JacksonPollock3Female, Some(Age)) => (JP3_FEMALE_SITES, &[]),
        (BodyCompositionMethod::JacksonPollock3Female, Some(AgeCircumference)) => {
            (JP3_FEMALE_SITES, FEMALE_CIRCUMFERENCE_SITES)
        }
        (BodyCompositionMethod::JacksonPollock3Female, Some(Clothed)) => {
            (JP3_FEMALE_CLOTHED_SITES, &[])
        }
        (BodyCompositionMethod::JacksonPollock4, Some(SumOnly)) => (JP4_SITES, &[]),
        (BodyCompositionMethod::JacksonPollock4, Some(Age)) if gender == Gender::Female => {
            (JP4_SITES, &[])
        }
        (BodyCompositionMethod::JacksonPollock4, Some(Circumference | AgeCircumference))
            if gender == Gender::Female =>
        {
            (JP4_SITES, FEMALE_CIRCUMFERENCE_SITES)
        }
        (BodyCompositionMethod::JacksonPollock7, Some(Age)) => (JP7_SITES, &[]),
        (BodyCompositionMethod::JacksonPollock7, Some(Circumference))
            if gender == Gender::Female =>
        {
            (JP7_SITES, FEMALE_CIRCUMFERENCE_SITES)
        }
        (BodyCompositionMethod::JacksonPollock7, Some(AgeCircumference)) => {
            (JP7_SITES, circumference)
        }
        (BodyCompositionMethod::DurninWomersley, _) => (DURNIN_WOMERSLEY_SITES, &[]),
        (BodyCompositionMethod::Parillo, _) => (PARILLO_SITES, &[]),
        _ => return None,
    };

    Some(MeasurementRequirements {
        caliper,
        tape,
        ..MeasurementRequirements::default()
    })
}

pub(super) fn estimate(
    method: BodyCompositionMethod,
    variation: Option<MethodVariation>,
    params: &BodyCompositionParams,
) -> Option<BodyCompositionEstimate> {
    use MethodVariation::{Age, AgeCircumference, Circumference, Clothed, SumOnly};

    let age = params.age_years();
    let female = params.gender == Gender::Female;

    match (method, variation) {
        (BodyCompositionMethod::JacksonPollock3Male, Some(Age)) => {
            density(JP3_MALE_AGE, params, JP3_MALE_SITES, 0.0)
        }
        (BodyCompositionMethod::JacksonPollock3Male, Some(AgeCircumference)) => {
            let adjustment = male_waist_forearm(params, JP3_MALE_WAIST_FOREARM)?;
            density(JP3_MALE_AGE_CIRC, params, JP3_MALE_SITES, adjustment)
        }
        (BodyCompositionMethod::JacksonPollock3Male, Some(Clothed)) => {
            density(JP3_MALE_CLOTHED, params, JP3_MALE_CLOTHED_SITES, 0.0)
        }
        (BodyCompositionMethod::JacksonPollock3Female, Some(Age)) => {
            density(JP3_FEMALE_AGE, params, JP3_FEMALE_SITES, 0.0)
        }
        (BodyCompositionMethod::JacksonPollock3Female, Some(AgeCircumference)) => {
            let adjustment = female_hip(params, JP3_FEMALE_HIP)?;
            density(JP3_FEMALE_AGE_CIRC, params, JP3_FEMALE_SITES, adjustment)
        }
        (BodyCompositionMethod::JacksonPollock3Female, Some(Clothed)) => {
            density(JP3_FEMALE_CLOTHED, params, JP3_FEMALE_CLOTHED_SITES, 0.0)
        }
        (BodyCompositionMethod::JacksonPollock4, Some(SumOnly)) => {
            let s = params.caliper.sum(JP4_SITES)?;
            let regression = params.gender.select(JP4_MALE_SUM_ONLY, JP4_FEMALE_SUM_ONLY);
            Some(BodyCompositionEstimate::BodyFatPercent(regression.evaluate(s, age)))
        }
        (BodyCompositionMethod::JacksonPollock4, Some(Age)) if female => {
            density(JP4_FEMALE_AGE, params, JP4_SITES, 0.0)
        }
        (BodyCompositionMethod::JacksonPollock4, Some(Circumference)) if female => {
            let adjustment = female_hip(params, JP4_FEMALE_CIRC_HIP)?;
            density(JP4_FEMALE_CIRC, params, JP4_SITES, adjustment)
        }
        (BodyCompositionMethod::JacksonPollock4, Some(AgeCircumference)) if female => {
            let adjustment = female_hip(params, JP4_FEMALE_AGE_CIRC_HIP)?;
            density(JP4_FEMALE_AGE_CIRC, params, JP4_SITES, adjustment)
        }
        (BodyCompositionMethod::JacksonPollock7, Some(Age)) => {
            let regression = params.gender.select(JP7_MALE_AGE, JP7_FEMALE_AGE);
            density(regression, params, JP7_SITES, 0.0)
        }
        (BodyCompositionMethod::JacksonPollock7, Some(Circumference)) if female => {
            let adjustment = female_hip(params, JP7_FEMALE_CIRC_HIP)?;
            density(JP7_FEMALE_CIRC, params, JP7_SITES, adjustment)
        }
        (BodyCompositionMethod::JacksonPollock7, Some(AgeCircumference)) => {
            if female {
                let adjustment = female_hip(params, JP7_FEMALE_AGE_CIRC_HIP)?;
                density(JP7_FEMALE_AGE_CIRC, params, JP7_SITES, adjustment)
            } else {
                let adjustment = male_waist_forearm(params, JP7_MALE_WAIST_FOREARM)?;
                density(JP7_MALE_AGE_CIRC, params, JP7_SITES, adjustment)
            }
        }
        (BodyCompositionMethod::DurninWomersley, _) => durnin_womersley(params),
        (BodyCompositionMethod::Parillo, _) => parillo(params),
        _ => None,
    }
}

fn density(
    regression: Regression,
    params: &BodyCompositionParams,
    sites: &[CaliperSite],
    circumference_term: f64,
) -> Option<BodyCompositionEstimate> {
    let s = params.caliper.sum(sites)?;
    Some(BodyCompositionEstimate::Density(
        regression.evaluate(s, params.age_years()) + circumference_term,
    ))
}

fn male_waist_forearm(params: &BodyCompositionParams, (waist, forearm): (f64, f64)) -> Option<f64> {
    let waist_m = cm_to_m(params.tape.get(TapeSite::Waist)?);
    let forearm_m = cm_to_m(params.tape.get(TapeSite::Forearm)?);
    Some(waist.mul_add(waist_m, forearm * forearm_m))
}

fn female_hip(params: &BodyCompositionParams, hip: f64) -> Option<f64> {
    Some(hip * params.tape.get(TapeSite::Hip)?)
}

fn durnin_womersley(params: &BodyCompositionParams) -> Option<BodyCompositionEstimate> {
    let s = params.caliper.sum(DURNIN_WOMERSLEY_SITES)?;
    let table = params
        .gender
        .select(&DURNIN_WOMERSLEY_MALE, &DURNIN_WOMERSLEY_FEMALE);
    let (intercept, slope) =
        brackets::select(params.age_years(), &DURNIN_WOMERSLEY_AGE_BRACKETS, table)?;
    Some(BodyCompositionEstimate::Density(
        slope.mul_add(s.log10(), *intercept),
    ))
}

fn parillo(params: &BodyCompositionParams) -> Option<BodyCompositionEstimate> {
    let s = params.caliper.sum(PARILLO_SITES)?;
    Some(BodyCompositionEstimate::BodyFatPercent(
        s * PARILLO_FACTOR / kg_to_lb(params.weight_kg),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithms::body_composition::compute_body_fat;
    use crate::algorithms::density::DensityConversion;
    use calculeat_core::{CaliperMeasurements, TapeMeasurements};

    fn params(gender: Gender, caliper: CaliperMeasurements) -> BodyCompositionParams {
        BodyCompositionParams {
            age: 30,
            gender,
            weight_kg: 80.0,
            height_cm: 180.0,
            bmi: None,
            bmr: None,
            caliper,
            tape: TapeMeasurements::default(),
        }
    }

    fn jp4_caliper() -> CaliperMeasurements {
        CaliperMeasurements {
            abdominal: Some(20.0),
            suprailiac: Some(15.0),
            tricep: Some(15.0),
            thigh: Some(10.0),
            ..CaliperMeasurements::default()
        }
    }

    #[test]
    fn jackson_pollock_3_male_reference_case() {
        let caliper = CaliperMeasurements {
            chest: Some(10.0),
            abdominal: Some(15.0),
            thigh: Some(12.0),
            ..CaliperMeasurements::default()
        };
        let estimate = compute_body_fat(
            BodyCompositionMethod::JacksonPollock3Male,
            None,
            &params(Gender::Male, caliper),
        );
        let density = estimate.and_then(|e| e.density());
        assert!(density.is_some_and(|d| (d - 1.073_26).abs() < 1e-4));
        let bf = estimate.map(|e| e.body_fat_percent(DensityConversion::Siri));
        assert!(bf.is_some_and(|bf| (bf - 11.23).abs() < 0.05));
    }

    #[test]
    fn jackson_pollock_4_density_variations_are_female_only() {
        let male = params(Gender::Male, jp4_caliper());
        for variation in [
            MethodVariation::Age,
            MethodVariation::Circumference,
            MethodVariation::AgeCircumference,
        ] {
            assert_eq!(
                compute_body_fat(BodyCompositionMethod::JacksonPollock4, Some(variation), &male),
                None
            );
        }

        let female = params(Gender::Female, jp4_caliper());
        let density = compute_body_fat(BodyCompositionMethod::JacksonPollock4, None, &female)
            .and_then(|e| e.density());
        assert!(density.is_some());
    }

    #[test]
    fn jackson_pollock_4_sum_only_serves_both_sexes() {
        let male = compute_body_fat(
            BodyCompositionMethod::JacksonPollock4,
            Some(MethodVariation::SumOnly),
            &params(Gender::Male, jp4_caliper()),
        );
        // 0.29288·60 − 0.0005·3600 + 0.15845·30 − 5.76377 = 14.7625
        assert!(matches!(
            male,
            Some(BodyCompositionEstimate::BodyFatPercent(bf)) if (bf - 14.7625).abs() < 1e-3
        ));

        let female = compute_body_fat(
            BodyCompositionMethod::JacksonPollock4,
            Some(MethodVariation::SumOnly),
            &params(Gender::Female, jp4_caliper()),
        );
        assert!(matches!(female, Some(BodyCompositionEstimate::BodyFatPercent(_))));
    }

    #[test]
    fn circumference_variation_needs_tape_sites() {
        let caliper = CaliperMeasurements {
            chest: Some(10.0),
            abdominal: Some(15.0),
            thigh: Some(12.0),
            ..CaliperMeasurements::default()
        };
        let mut male = params(Gender::Male, caliper);
        let variation = Some(MethodVariation::AgeCircumference);
        assert_eq!(
            compute_body_fat(BodyCompositionMethod::JacksonPollock3Male, variation, &male),
            None
        );

        male.tape.waist = Some(85.0);
        male.tape.forearm = Some(29.0);
        assert!(
            compute_body_fat(BodyCompositionMethod::JacksonPollock3Male, variation, &male)
                .is_some()
        );
    }

    fn jp7_caliper() -> CaliperMeasurements {
        CaliperMeasurements {
            chest: Some(10.0),
            abdominal: Some(20.0),
            thigh: Some(15.0),
            tricep: Some(12.0),
            subscapular: Some(14.0),
            suprailiac: Some(13.0),
            midaxillary: Some(11.0),
            ..CaliperMeasurements::default()
        }
    }

    fn density_of(
        method: BodyCompositionMethod,
        variation: MethodVariation,
        params: &BodyCompositionParams,
    ) -> Option<f64> {
        compute_body_fat(method, Some(variation), params).and_then(|e| e.density())
    }

    fn assert_density(actual: Option<f64>, expected: f64) {
        assert!(
            actual.is_some_and(|d| (d - expected).abs() < 1e-9),
            "expected {expected}, got {actual:?}"
        );
    }

    #[test]
    fn jackson_pollock_3_female_reference_case() {
        let caliper = CaliperMeasurements {
            tricep: Some(15.0),
            suprailiac: Some(12.0),
            thigh: Some(20.0),
            ..CaliperMeasurements::default()
        };
        let female = params(Gender::Female, caliper);
        let density = density_of(
            BodyCompositionMethod::JacksonPollock3Female,
            MethodVariation::Age,
            &female,
        );
        // S = 47: 1.0994921 − 0.0009929·47 + 0.0000023·2209 − 0.0001392·30
        assert_density(density, 1.053_730_5);
        let bf = density.map(|d| DensityConversion::Siri.convert(d));
        assert!(bf.is_some_and(|bf| (bf - 19.76).abs() < 0.01));
    }

    #[test]
    fn jackson_pollock_3_clothed_sites() {
        let female = params(
            Gender::Female,
            CaliperMeasurements {
                tricep: Some(15.0),
                suprailiac: Some(12.0),
                abdominal: Some(18.0),
                ..CaliperMeasurements::default()
            },
        );
        // S = 45: 1.089733 − 0.0009245·45 + 0.0000025·2025 − 0.0000979·30
        assert_density(
            density_of(
                BodyCompositionMethod::JacksonPollock3Female,
                MethodVariation::Clothed,
                &female,
            ),
            1.050_256,
        );

        let male = params(
            Gender::Male,
            CaliperMeasurements {
                chest: Some(10.0),
                tricep: Some(12.0),
                subscapular: Some(14.0),
                ..CaliperMeasurements::default()
            },
        );
        // S = 36: 1.1125025 − 0.0013125·36 + 0.0000055·1296 − 0.000244·30
        assert_density(
            density_of(
                BodyCompositionMethod::JacksonPollock3Male,
                MethodVariation::Clothed,
                &male,
            ),
            1.065_060_5,
        );
    }

    #[test]
    fn jackson_pollock_7_age_uses_sex_coefficients() {
        let male = params(Gender::Male, jp7_caliper());
        let female = params(Gender::Female, jp7_caliper());
        // S = 95 for both
        // male: 1.112 − 0.00043499·95 + 0.00000055·9025 − 0.00028826·30
        assert_density(
            density_of(BodyCompositionMethod::JacksonPollock7, MethodVariation::Age, &male),
            1.066_991_9,
        );
        // female: 1.097 − 0.00046971·95 + 0.00000056·9025 − 0.00012828·30
        assert_density(
            density_of(BodyCompositionMethod::JacksonPollock7, MethodVariation::Age, &female),
            1.053_583_15,
        );
    }

    #[test]
    fn jackson_pollock_7_circumference_is_female_only() {
        let mut male = params(Gender::Male, jp7_caliper());
        male.tape.hip = Some(98.0);
        male.tape.waist = Some(85.0);
        male.tape.forearm = Some(29.0);
        assert_eq!(
            density_of(
                BodyCompositionMethod::JacksonPollock7,
                MethodVariation::Circumference,
                &male
            ),
            None
        );

        let mut female = params(Gender::Female, jp7_caliper());
        female.tape.hip = Some(98.0);
        // 1.1470292 − 0.000429·95 + 0.00000051·9025 − 0.0006255·98
        assert_density(
            density_of(
                BodyCompositionMethod::JacksonPollock7,
                MethodVariation::Circumference,
                &female,
            ),
            1.049_577_95,
        );
    }

    #[test]
    fn jackson_pollock_7_age_circumference_terms_follow_sex() {
        let mut male = params(Gender::Male, jp7_caliper());
        male.tape.hip = Some(98.0);
        let variation = MethodVariation::AgeCircumference;
        // A hip reading does not satisfy the male waist and forearm terms
        assert_eq!(
            density_of(BodyCompositionMethod::JacksonPollock7, variation, &male),
            None
        );
        male.tape.waist = Some(85.0);
        male.tape.forearm = Some(29.0);
        // 1.101 − 0.0004115·95 + 0.00000069·9025 − 0.00022631·30
        //   − 0.0059239·0.85 + 0.0190632·0.29
        assert_density(
            density_of(BodyCompositionMethod::JacksonPollock7, variation, &male),
            1.061_838_463,
        );

        let mut female = params(Gender::Female, jp7_caliper());
        female.tape.waist = Some(85.0);
        female.tape.forearm = Some(29.0);
        assert_eq!(
            density_of(BodyCompositionMethod::JacksonPollock7, variation, &female),
            None
        );
        female.tape.hip = Some(98.0);
        // 1.144 − 0.00041986·95 + 0.00000055·9025 − 0.00006·30 − 0.0005831·98
        assert_density(
            density_of(BodyCompositionMethod::JacksonPollock7, variation, &female),
            1.050_133_25,
        );
    }

    #[test]
    fn jackson_pollock_3_circumference_terms() {
        let mut male = params(
            Gender::Male,
            CaliperMeasurements {
                chest: Some(10.0),
                abdominal: Some(15.0),
                thigh: Some(12.0),
                ..CaliperMeasurements::default()
            },
        );
        male.tape.waist = Some(85.0);
        male.tape.forearm = Some(29.0);
        // 1.099075 − 0.0008209·37 + 0.0000026·1369 − 0.0002017·30
        //   − 0.005675·0.85 + 0.018586·0.29
        assert_density(
            density_of(
                BodyCompositionMethod::JacksonPollock3Male,
                MethodVariation::AgeCircumference,
                &male,
            ),
            1.066_776_29,
        );

        let mut female = params(
            Gender::Female,
            CaliperMeasurements {
                tricep: Some(15.0),
                suprailiac: Some(12.0),
                thigh: Some(20.0),
                ..CaliperMeasurements::default()
            },
        );
        female.tape.hip = Some(98.0);
        // 1.1470292 − 0.0009376·47 + 0.000003·2209 − 0.0001156·30 − 0.0005839·98
        assert_density(
            density_of(
                BodyCompositionMethod::JacksonPollock3Female,
                MethodVariation::AgeCircumference,
                &female,
            ),
            1.048_898_8,
        );
    }

    #[test]
    fn durnin_womersley_uses_teen_row_below_twenty() {
        let caliper = CaliperMeasurements {
            bicep: Some(5.0),
            tricep: Some(10.0),
            subscapular: Some(12.0),
            suprailiac: Some(13.0),
            ..CaliperMeasurements::default()
        };
        let mut teen = params(Gender::Male, caliper);
        teen.age = 17;
        let density = compute_body_fat(BodyCompositionMethod::DurninWomersley, None, &teen)
            .and_then(|e| e.density());
        let expected = (-0.0630_f64).mul_add(40.0_f64.log10(), 1.1620);
        assert!(density.is_some_and(|d| (d - expected).abs() < 1e-12));

        teen.age = 50;
        let senior = compute_body_fat(BodyCompositionMethod::DurninWomersley, None, &teen)
            .and_then(|e| e.density());
        let expected = (-0.0779_f64).mul_add(40.0_f64.log10(), 1.1715);
        assert!(senior.is_some_and(|d| (d - expected).abs() < 1e-12));
    }

    #[test]
    fn parillo_scales_sum_by_body_weight() {
        let caliper = CaliperMeasurements {
            chest: Some(10.0),
            abdominal: Some(20.0),
            thigh: Some(15.0),
            bicep: Some(5.0),
            tricep: Some(10.0),
            subscapular: Some(12.0),
            suprailiac: Some(14.0),
            lower_back: Some(12.0),
            calf: Some(8.0),
            ..CaliperMeasurements::default()
        };
        let estimate = compute_body_fat(
            BodyCompositionMethod::Parillo,
            None,
            &params(Gender::Male, caliper),
        );
        let expected = 106.0 * 27.0 / kg_to_lb(80.0);
        assert!(matches!(
            estimate,
            Some(BodyCompositionEstimate::BodyFatPercent(bf)) if (bf - expected).abs() < 1e-9
        ));
    }
}
