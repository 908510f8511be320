// ABOUTME: Shared half-open bracket lookup used by age-, hour-, and step-bucketed formulas
// ABOUTME: One helper keeps every piecewise table on the same [lower, upper) convention

//! Piecewise bracket lookup.
//!
//! Tables are stored as `upper_bounds` plus `upper_bounds.len() + 1` rows; the
//! last row is the open-ended bracket. A value equal to a bound belongs to the
//! next bracket up.

/// Index of the bracket containing `value` for ascending exclusive upper bounds
#[must_use]
pub fn bracket_index(value: f64, upper_bounds: &[f64]) -> usize {
    upper_bounds
        .iter()
        .position(|upper| value < *upper)
        .unwrap_or(upper_bounds.len())
}

/// Row of `table` selected by `value`
///
/// `table` must hold one more row than `upper_bounds`.
#[must_use]
pub fn select<'a, T>(value: f64, upper_bounds: &[f64], table: &'a [T]) -> Option<&'a T> {
    table.get(bracket_index(value, upper_bounds))
}

#[cfg(test)]
mod tests {
    use super::*;

    const BOUNDS: [f64; 3] = [3.0, 10.0, 18.0];

    #[test]
    fn edges_belong_to_the_upper_bracket() {
        assert_eq!(bracket_index(2.9, &BOUNDS), 0);
        assert_eq!(bracket_index(3.0, &BOUNDS), 1);
        assert_eq!(bracket_index(17.99, &BOUNDS), 2);
        assert_eq!(bracket_index(18.0, &BOUNDS), 3);
        assert_eq!(bracket_index(95.0, &BOUNDS), 3);
    }

    #[test]
    fn select_returns_the_matching_row() {
        let table = ["infant", "child", "teen", "adult"];
        assert_eq!(select(18.0, &BOUNDS, &table), Some(&"adult"));
        assert_eq!(select(0.5, &BOUNDS, &table), Some(&"infant"));
    }
}
