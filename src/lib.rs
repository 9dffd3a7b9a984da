//! Noisetex library - procedural noise textures and mesh centering
//!
//! A seeded gradient-noise field is composited over multiple octaves and
//! rasterized into grayscale RGBA textures; a small geometry helper
//! recenters a mesh on the world origin from its bounding box.

pub mod error;
pub mod fbm;
pub mod field;
pub mod mesh;
pub mod params;
pub mod remap;
pub mod texture;
