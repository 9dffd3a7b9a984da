//! Fractal noise parameters with documented semantics.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Multi-octave noise compositing parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OctaveParams {
    /// Number of octaves summed (1 = a single noise sample, 8 = fine fractal detail)
    pub octaves: u32,

    /// Spatial frequency of the first octave (scale of the largest features)
    pub base_frequency: f64,

    /// Amplitude of the first octave
    pub base_amplitude: f64,

    /// Amplitude multiplier per octave (contrast falloff across octaves)
    pub persistence: f64,

    /// Frequency multiplier per octave (detail growth across octaves)
    pub lacunarity: f64,
}

impl Default for OctaveParams {
    fn default() -> Self {
        Self {
            octaves: 8,
            base_frequency: 1.0,
            base_amplitude: 1.0,
            persistence: 0.5, // halve amplitude each octave
            lacunarity: 2.0,  // double frequency each octave
        }
    }
}

impl OctaveParams {
    /// Parameters with a given octave count, defaults elsewhere
    pub fn with_octaves(octaves: u32) -> Self {
        Self {
            octaves,
            ..Default::default()
        }
    }

    /// Check the documented ranges
    ///
    /// `persistence` may be zero (octaves beyond the first then contribute
    /// nothing); every other field must be strictly positive and finite.
    pub fn validate(&self) -> Result<()> {
        if self.octaves == 0 {
            return Err(Error::InvalidArgument("octaves must be at least 1".into()));
        }
        if !(self.base_frequency.is_finite() && self.base_frequency > 0.0) {
            return Err(Error::InvalidArgument(format!(
                "base_frequency must be positive, got {}",
                self.base_frequency
            )));
        }
        if !(self.base_amplitude.is_finite() && self.base_amplitude > 0.0) {
            return Err(Error::InvalidArgument(format!(
                "base_amplitude must be positive, got {}",
                self.base_amplitude
            )));
        }
        if !(self.persistence.is_finite() && self.persistence >= 0.0) {
            return Err(Error::InvalidArgument(format!(
                "persistence must not be negative, got {}",
                self.persistence
            )));
        }
        if !(self.lacunarity.is_finite() && self.lacunarity > 0.0) {
            return Err(Error::InvalidArgument(format!(
                "lacunarity must be positive, got {}",
                self.lacunarity
            )));
        }
        Ok(())
    }
}
