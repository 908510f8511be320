// ABOUTME: Method availability resolver listing body composition methods computable from the given inputs
// ABOUTME: Shares the per-variation requirement tables with the formulas so the two cannot drift apart

use super::body_composition::{BodyCompositionMethod, BodyCompositionParams, MethodVariation};

/// Variations of `method` that can be evaluated with `params`
///
/// Methods without variations yield an empty list; use
/// [`available_methods`] to ask whether such a method is computable.
#[must_use]
pub fn available_variations(
    method: BodyCompositionMethod,
    params: &BodyCompositionParams,
) -> Vec<MethodVariation> {
    method
        .variations()
        .iter()
        .copied()
        .filter(|variation| is_computable(method, Some(*variation), params))
        .collect()
}

/// Methods with at least one computable variation, in declaration order
///
/// # Example
///
/// ```rust
/// use calculeat_core::{CaliperMeasurements, Gender, TapeMeasurements};
/// use calculeat_intelligence::algorithms::{
///     available_methods, BodyCompositionMethod, BodyCompositionParams,
/// };
///
/// let params = BodyCompositionParams {
///     age: 30,
///     gender: Gender::Male,
///     weight_kg: 80.0,
///     height_cm: 180.0,
///     bmi: Some(24.7),
///     bmr: None,
///     caliper: CaliperMeasurements::default(),
///     tape: TapeMeasurements::default(),
/// };
/// assert_eq!(available_methods(&params), vec![BodyCompositionMethod::HeritageBmi]);
/// ```
#[must_use]
pub fn available_methods(params: &BodyCompositionParams) -> Vec<BodyCompositionMethod> {
    BodyCompositionMethod::ALL
        .into_iter()
        .filter(|method| {
            if method.variations().is_empty() {
                is_computable(*method, None, params)
            } else {
                !available_variations(*method, params).is_empty()
            }
        })
        .collect()
}

fn is_computable(
    method: BodyCompositionMethod,
    variation: Option<MethodVariation>,
    params: &BodyCompositionParams,
) -> bool {
    method
        .requirements(variation, params.gender)
        .is_some_and(|requirements| requirements.satisfied_by(params))
}
