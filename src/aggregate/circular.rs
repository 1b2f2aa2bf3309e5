//! Vector averaging of wind directions.
//!
//! Angles cannot be averaged arithmetically (350° and 10° would average to 180°).
//! Each direction is turned into a wind vector, the vectors are summed, and the
//! direction of the sum is recovered with `atan2`. Component conventions follow
//! Grange, "Technical note: Averaging wind speeds and directions" (2014).

use std::f64::consts::PI;

/// Per-row directions are rounded to a millionth of a degree so that floating
/// point noise from the trigonometry does not split otherwise identical values.
const DIRECTION_STEPS_PER_DEG: f64 = 1e6;

/// The `(u, v)` components of a wind blowing from `direction_deg` with magnitude `weight`.
pub fn wind_components(direction_deg: f64, weight: f64) -> (f64, f64) {
    let theta = 2.0 * PI * direction_deg / 360.0;
    (-weight * theta.sin(), -weight * theta.cos())
}

/// The direction, in `[0, 360)`, that a wind with components `(u, v)` blows from.
pub fn direction_from_components(u: f64, v: f64) -> f64 {
    normalize_degrees((180.0 / PI) * u.atan2(v) + 180.0)
}

/// Folds any angle into `[0, 360)`.
pub fn normalize_degrees(degrees: f64) -> f64 {
    let folded = degrees.rem_euclid(360.0);
    // rem_euclid of a tiny negative value rounds up to exactly 360
    if folded >= 360.0 {
        0.0
    } else {
        folded
    }
}

/// Direction of the vector sum of all `directions`, each scaled by `weight`.
///
/// Returns `None` for an empty series.
///
/// # Examples
///
/// ```
/// use mesonet_wind::aggregate::circular::resultant_direction;
///
/// let direction = resultant_direction(&[80.0, 100.0], 4.0).unwrap();
/// assert!((direction - 90.0).abs() < 1e-9);
/// ```
pub fn resultant_direction(directions: &[f64], weight: f64) -> Option<f64> {
    if directions.is_empty() {
        return None;
    }
    let (u_sum, v_sum) = directions
        .iter()
        .map(|&d| wind_components(d, weight))
        .fold((0.0, 0.0), |(u_acc, v_acc), (u, v)| (u_acc + u, v_acc + v));
    Some(direction_from_components(u_sum, v_sum))
}

/// The resultant direction of each observation on its own.
pub fn per_row_directions(directions: &[f64], weight: f64) -> Vec<f64> {
    directions
        .iter()
        .map(|&d| {
            let (u, v) = wind_components(d, weight);
            let direction = direction_from_components(u, v);
            let rounded = (direction * DIRECTION_STEPS_PER_DEG).round() / DIRECTION_STEPS_PER_DEG;
            normalize_degrees(rounded)
        })
        .collect()
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    /// Smallest angle between two directions.
    pub(crate) fn angular_distance(a: f64, b: f64) -> f64 {
        let diff = (a - b).rem_euclid(360.0);
        diff.min(360.0 - diff)
    }

    #[test]
    fn test_identical_directions_resolve_to_themselves() {
        for theta in [0.0, 10.0, 45.0, 90.0, 179.0, 180.0, 270.0, 359.0] {
            for weight in [0.5, 1.0, 12.0] {
                let result = resultant_direction(&[theta, theta, theta], weight).unwrap();
                assert!(
                    angular_distance(result, theta) < 1e-9,
                    "theta {} weight {} gave {}",
                    theta,
                    weight,
                    result
                );
                assert!((0.0..360.0).contains(&result));
            }
        }
    }

    #[test]
    fn test_wrap_around_averages_to_north() {
        let result = resultant_direction(&[350.0, 10.0], 5.0).unwrap();
        assert!(angular_distance(result, 0.0) < 1e-9, "got {}", result);
        assert!(angular_distance(result, 180.0) > 179.0);
    }

    #[test]
    fn test_empty_series_has_no_direction() {
        assert_eq!(resultant_direction(&[], 3.0), None);
        assert!(per_row_directions(&[], 3.0).is_empty());
    }

    #[test]
    fn test_per_row_directions_are_exact() {
        let rows = per_row_directions(&[0.0, 90.0, 180.0, 270.0, 360.0, 225.5], 7.0);
        assert_eq!(rows, vec![0.0, 90.0, 180.0, 270.0, 0.0, 225.5]);
    }

    #[test]
    fn test_components_point_downwind() {
        // a northerly wind blows towards the south
        let (u, v) = wind_components(0.0, 2.0);
        assert!(u.abs() < 1e-12);
        assert!((v + 2.0).abs() < 1e-12);
        // a westerly wind blows towards the east
        let (u, v) = wind_components(270.0, 2.0);
        assert!((u - 2.0).abs() < 1e-12);
        assert!(v.abs() < 1e-12);
    }

    #[test]
    fn test_normalize_degrees() {
        assert_eq!(normalize_degrees(-90.0), 270.0);
        assert_eq!(normalize_degrees(360.0), 0.0);
        assert_eq!(normalize_degrees(-1e-20), 0.0);
        assert_eq!(normalize_degrees(725.0), 5.0);
    }
}
