//! Noisetex - procedural grayscale noise texture generator
//!
//! Generates a fractal-noise texture from command-line parameters and
//! writes it out as a PNG.

mod cli;

use std::process;

use clap::Parser;

use cli::Args;
use noisetex::field::NoiseField;
use noisetex::texture;

fn main() {
    let args = Args::parse();
    let params = args.octave_params();

    println!("Noisetex - procedural noise texture generator");
    println!("Size: {}x{}", args.size, args.size);
    println!("Seed: {}", args.seed);
    println!(
        "Octaves: {} (frequency {}, persistence {}, lacunarity {})",
        params.octaves, params.base_frequency, params.persistence, params.lacunarity
    );

    let field = NoiseField::new(args.seed);
    let buffer = match texture::generate(args.size, &params, &field) {
        Ok(buffer) => buffer,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };

    if let Err(e) = buffer.write_png(&args.output) {
        eprintln!("Error: failed to write {}: {}", args.output.display(), e);
        process::exit(1);
    }

    println!("Wrote {}", args.output.display());
}
