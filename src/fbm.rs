//! Fractional Brownian motion: stacked noise octaves.

use crate::error::Result;
use crate::field::NoiseField;
use crate::params::OctaveParams;
use crate::remap::remap;

/// Composite multiple noise octaves at a coordinate
///
/// Each octave samples the field at a frequency-scaled coordinate, remaps
/// the raw [-1, 1] value into [0, 1], and weights it by the octave's
/// amplitude before summing. The sum is divided by the accumulated
/// amplitude, so the result stays in [0, 1] for any octave count and
/// persistence.
///
/// # Arguments
/// * `nx`, `ny` - Sampling coordinate, typically normalized to [0, 1)
/// * `params` - Octave count and frequency/amplitude progression
/// * `field` - The noise field to sample
pub fn composite(nx: f64, ny: f64, params: &OctaveParams, field: &NoiseField) -> Result<f64> {
    params.validate()?;

    let mut total = 0.0;
    let mut max_amplitude = 0.0;
    let mut frequency = params.base_frequency;
    let mut amplitude = params.base_amplitude;

    for _ in 0..params.octaves {
        let raw = field.sample(nx * frequency, ny * frequency)?;
        total += remap(raw, -1.0, 1.0, 0.0, 1.0)? * amplitude;
        max_amplitude += amplitude;
        amplitude *= params.persistence;
        frequency *= params.lacunarity;
    }

    Ok(total / max_amplitude)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn test_single_octave_is_the_normalized_sample() {
        let field = NoiseField::new(42);
        let params = OctaveParams::with_octaves(1);

        for i in 0..16 {
            let nx = i as f64 / 16.0;
            let ny = (15 - i) as f64 / 16.0;

            let composited = composite(nx, ny, &params, &field).unwrap();
            let raw = field.sample(nx, ny).unwrap();
            let normalized = remap(raw, -1.0, 1.0, 0.0, 1.0).unwrap();

            assert!(
                (composited - normalized).abs() < 1e-9,
                "One octave should reduce to the normalized sample: {} vs {}",
                composited,
                normalized
            );
        }
    }

    #[test]
    fn test_zero_persistence_matches_single_octave() {
        let field = NoiseField::new(42);
        let flat = OctaveParams {
            octaves: 6,
            persistence: 0.0,
            ..Default::default()
        };
        let single = OctaveParams::with_octaves(1);

        let a = composite(0.3, 0.7, &flat, &field).unwrap();
        let b = composite(0.3, 0.7, &single, &field).unwrap();
        assert!(
            (a - b).abs() < 1e-9,
            "Octaves past the first should contribute nothing at persistence 0"
        );
    }

    #[test]
    fn test_output_range() {
        let field = NoiseField::new(7);
        let params = OctaveParams::default();

        for i in 0..16 {
            for j in 0..16 {
                let v = composite(i as f64 / 16.0, j as f64 / 16.0, &params, &field).unwrap();
                assert!(
                    v > -1e-6 && v < 1.0 + 1e-6,
                    "Composite {} at ({}, {}) out of [0, 1]",
                    v,
                    i,
                    j
                );
            }
        }
    }

    #[test]
    fn test_deterministic() {
        let field = NoiseField::new(1);
        let params = OctaveParams::default();

        let a = composite(0.25, 0.75, &params, &field).unwrap();
        let b = composite(0.25, 0.75, &params, &field).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_invalid_params_rejected() {
        let field = NoiseField::new(0);
        let params = OctaveParams::with_octaves(0);

        assert!(matches!(
            composite(0.5, 0.5, &params, &field),
            Err(Error::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_non_finite_coordinate_rejected() {
        let field = NoiseField::new(0);
        let params = OctaveParams::default();

        assert!(matches!(
            composite(f64::NAN, 0.5, &params, &field),
            Err(Error::InvalidInput { .. })
        ));
    }
}
