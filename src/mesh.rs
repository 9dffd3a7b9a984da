//! Mesh bounding boxes and origin centering.
//!
//! Centering works through a narrow capability trait instead of a concrete
//! scene-graph type, so meshes owned by any host engine can be recentered
//! without this crate depending on the engine.

use bytemuck::{Pod, Zeroable};
use glam::{Mat4, Quat, Vec3};

use crate::error::{Error, Result};

/// Vertex data for mesh geometry (position + UV coordinates)
#[repr(C)]
#[derive(Copy, Clone, Debug, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub uv: [f32; 2],
}

/// Axis-aligned bounding box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec3,
    pub max: Vec3,
}

impl Aabb {
    /// Smallest box containing all `points`
    ///
    /// Geometry with no derivable extent is rejected: no points at all,
    /// any non-finite coordinate, or every point identical.
    pub fn from_points<I>(points: I) -> Result<Self>
    where
        I: IntoIterator<Item = Vec3>,
    {
        let mut min = Vec3::splat(f32::INFINITY);
        let mut max = Vec3::splat(f32::NEG_INFINITY);
        let mut empty = true;

        for point in points {
            if !point.is_finite() {
                return Err(Error::UndefinedBoundingBox);
            }
            min = min.min(point);
            max = max.max(point);
            empty = false;
        }

        if empty || min == max {
            return Err(Error::UndefinedBoundingBox);
        }
        Ok(Self { min, max })
    }

    /// Center of the box
    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }
}

/// Capability view over an externally owned mesh
///
/// Centering needs exactly three things from the host's mesh type: the
/// bounds of its local geometry, its local-to-world transform, and a
/// writable position.
pub trait MeshHandle {
    /// Bounding box of the local-space geometry
    fn local_bounds(&self) -> Result<Aabb>;

    /// Local-to-world transform, including the current position
    fn local_to_world(&self) -> Mat4;

    /// Current position
    fn position(&self) -> Vec3;

    /// Overwrite the position
    fn set_position(&mut self, position: Vec3);
}

/// World-space center of a mesh's local bounding box
pub fn world_center<M: MeshHandle>(mesh: &M) -> Result<Vec3> {
    let bounds = mesh.local_bounds()?;
    Ok(mesh.local_to_world().transform_point3(bounds.center()))
}

/// Move a mesh so its bounding box is centered on the world origin
///
/// Subtracts the world-space bounds center from the position, in place.
/// The geometry itself is never touched. Center once, right after the
/// geometry is assigned: a later call sees the already-shifted transform,
/// so interleaving rotation or scale edits between calls changes where the
/// mesh ends up.
pub fn center_on_origin<M: MeshHandle>(mesh: &mut M) -> Result<()> {
    let center = world_center(mesh)?;
    mesh.set_position(mesh.position() - center);
    Ok(())
}

/// Self-contained mesh with a position/rotation/scale transform
///
/// The shape hosts without their own scene graph can use directly, and the
/// shape the centering contract is tested against.
#[derive(Debug, Clone)]
pub struct SimpleMesh {
    pub vertices: Vec<Vertex>,
    pub position: Vec3,
    pub rotation: Quat,
    pub scale: Vec3,
}

impl SimpleMesh {
    /// Mesh with the given geometry and an identity transform
    pub fn new(vertices: Vec<Vertex>) -> Self {
        Self {
            vertices,
            position: Vec3::ZERO,
            rotation: Quat::IDENTITY,
            scale: Vec3::ONE,
        }
    }
}

impl MeshHandle for SimpleMesh {
    fn local_bounds(&self) -> Result<Aabb> {
        Aabb::from_points(self.vertices.iter().map(|v| Vec3::from_array(v.position)))
    }

    fn local_to_world(&self) -> Mat4 {
        Mat4::from_scale_rotation_translation(self.scale, self.rotation, self.position)
    }

    fn position(&self) -> Vec3 {
        self.position
    }

    fn set_position(&mut self, position: Vec3) {
        self.position = position;
    }
}
