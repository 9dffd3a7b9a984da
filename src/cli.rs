//! Command-line argument parsing.

use std::path::PathBuf;

use clap::Parser;

use noisetex::params::OctaveParams;

/// Command line arguments
#[derive(Parser, Debug)]
#[command(name = "noisetex")]
#[command(about = "Procedural grayscale noise texture generator", long_about = None)]
pub struct Args {
    /// Texture resolution in pixels per side
    #[arg(long, value_name = "PIXELS", default_value = "256")]
    pub size: u32,

    /// Noise seed (the same seed reproduces the same texture)
    #[arg(long, default_value = "42")]
    pub seed: u32,

    /// Number of noise octaves (more = finer fractal detail)
    #[arg(long, default_value = "8")]
    pub octaves: u32,

    /// Spatial frequency of the largest features
    #[arg(long, default_value = "1.0")]
    pub frequency: f64,

    /// Amplitude falloff per octave
    #[arg(long, default_value = "0.5")]
    pub persistence: f64,

    /// Frequency growth per octave
    #[arg(long, default_value = "2.0")]
    pub lacunarity: f64,

    /// Output PNG path
    #[arg(long, value_name = "PATH", default_value = "noise.png")]
    pub output: PathBuf,
}

impl Args {
    /// Octave parameters from the parsed flags
    pub fn octave_params(&self) -> OctaveParams {
        OctaveParams {
            octaves: self.octaves,
            base_frequency: self.frequency,
            persistence: self.persistence,
            lacunarity: self.lacunarity,
            ..Default::default()
        }
    }
}
