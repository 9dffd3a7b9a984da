//! Linear range remapping.

use crate::error::{Error, Result};

/// Remap `value` from [`source_min`, `source_max`] into [`target_min`, `target_max`]
///
/// The mapping is linear and does not clamp: a value outside the source
/// range lands proportionally outside the target range. A zero-width
/// source range has no defined mapping and is rejected.
pub fn remap(
    value: f64,
    source_min: f64,
    source_max: f64,
    target_min: f64,
    target_max: f64,
) -> Result<f64> {
    if source_min == source_max {
        return Err(Error::DivisionByZero(source_min));
    }
    let t = (value - source_min) / (source_max - source_min);
    Ok(target_min + t * (target_max - target_min))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remap_to_unit_range() {
        // The mapping the octave compositor relies on: [-1, 1] -> [0, 1]
        assert_eq!(remap(-1.0, -1.0, 1.0, 0.0, 1.0).unwrap(), 0.0);
        assert_eq!(remap(0.0, -1.0, 1.0, 0.0, 1.0).unwrap(), 0.5);
        assert_eq!(remap(1.0, -1.0, 1.0, 0.0, 1.0).unwrap(), 1.0);
    }

    #[test]
    fn test_remap_does_not_clamp() {
        assert_eq!(remap(2.0, -1.0, 1.0, 0.0, 1.0).unwrap(), 1.5);
        assert_eq!(remap(-3.0, -1.0, 1.0, 0.0, 1.0).unwrap(), -1.0);
    }

    #[test]
    fn test_round_trip() {
        let (a, b) = (2.0, 10.0);
        let (c, d) = (-4.0, 3.5);

        for i in 0..=16 {
            let v = a + (b - a) * i as f64 / 16.0;
            let forward = remap(v, a, b, c, d).unwrap();
            let back = remap(forward, c, d, a, b).unwrap();
            assert!(
                (back - v).abs() < 1e-9,
                "Round trip of {} drifted to {}",
                v,
                back
            );
        }
    }

    #[test]
    fn test_inverted_target_range() {
        assert_eq!(remap(0.25, 0.0, 1.0, 1.0, 0.0).unwrap(), 0.75);
    }

    #[test]
    fn test_degenerate_source_range_rejected() {
        assert!(matches!(
            remap(0.5, 1.0, 1.0, 0.0, 1.0),
            Err(Error::DivisionByZero(_))
        ));
    }
}
