//! Triangle meshes and per-kind tessellation.
//!
//! Every tessellator produces a mesh named after its primitive kind; the
//! extractor relies on that identity to infer kinds back out of a live
//! scene, the same way the source engine exposes shared-mesh names.

use glam::Vec3;
use std::f32::consts::PI;

use crate::geometry::ResolvedGeometry;

/// Default number of segments for curved surfaces.
pub const DEFAULT_SEGMENTS: u32 = 32;

/// A triangle mesh with per-vertex normals.
#[derive(Debug, Clone, Default)]
pub struct Mesh {
    /// Identity of the mesh; carries the primitive kind name.
    pub name: String,
    pub vertices: Vec<Vec3>,
    pub normals: Vec<Vec3>,
    pub indices: Vec<u32>,
}

impl Mesh {
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }
}

/// Tessellate resolved geometry into a triangle mesh.
pub fn tessellate(geometry: &ResolvedGeometry, segments: u32) -> Mesh {
    let mut mesh = match *geometry {
        ResolvedGeometry::Box {
            width,
            height,
            depth,
        } => tessellate_box(width, height, depth),
        ResolvedGeometry::Sphere { radius } => tessellate_sphere(radius, segments),
        ResolvedGeometry::Cylinder { radius, height } => {
            tessellate_cylinder(radius, height, segments)
        }
        ResolvedGeometry::Capsule {
            radius,
            body_height,
        } => tessellate_capsule(radius, body_height, segments),
        ResolvedGeometry::Plane { width, depth } => tessellate_rect(width, depth),
        ResolvedGeometry::Quad { width, height } => tessellate_rect(width, height),
    };
    mesh.name = geometry.kind().model_name().to_string();
    mesh
}

/// Tessellate a box centered at origin.
fn tessellate_box(width: f32, height: f32, depth: f32) -> Mesh {
    let hw = width / 2.0;
    let hh = height / 2.0;
    let hd = depth / 2.0;

    // 8 corners of the box
    let corners = [
        Vec3::new(-hw, -hh, -hd), // 0: left-bottom-back
        Vec3::new(hw, -hh, -hd),  // 1: right-bottom-back
        Vec3::new(hw, hh, -hd),   // 2: right-top-back
        Vec3::new(-hw, hh, -hd),  // 3: left-top-back
        Vec3::new(-hw, -hh, hd),  // 4: left-bottom-front
        Vec3::new(hw, -hh, hd),   // 5: right-bottom-front
        Vec3::new(hw, hh, hd),    // 6: right-top-front
        Vec3::new(-hw, hh, hd),   // 7: left-top-front
    ];

    // Face normals
    let normals = [
        Vec3::new(0.0, 0.0, -1.0), // back
        Vec3::new(0.0, 0.0, 1.0),  // front
        Vec3::new(-1.0, 0.0, 0.0), // left
        Vec3::new(1.0, 0.0, 0.0),  // right
        Vec3::new(0.0, -1.0, 0.0), // bottom
        Vec3::new(0.0, 1.0, 0.0),  // top
    ];

    // Each face has 4 vertices with the same normal
    let faces = [
        ([0, 1, 2, 3], 0), // back
        ([4, 5, 6, 7], 1), // front (reverse winding)
        ([0, 4, 7, 3], 2), // left
        ([1, 5, 6, 2], 3), // right (reverse winding)
        ([0, 1, 5, 4], 4), // bottom
        ([3, 2, 6, 7], 5), // top (reverse winding)
    ];

    let mut vertices = Vec::with_capacity(24);
    let mut vertex_normals = Vec::with_capacity(24);
    let mut indices = Vec::with_capacity(36);

    for (corner_indices, normal_idx) in &faces {
        let base = vertices.len() as u32;
        let normal = normals[*normal_idx];

        for &ci in corner_indices {
            vertices.push(corners[ci]);
            vertex_normals.push(normal);
        }

        // Two triangles per face
        indices.extend_from_slice(&[base, base + 2, base + 1, base, base + 3, base + 2]);
    }

    Mesh {
        name: String::new(),
        vertices,
        normals: vertex_normals,
        indices,
    }
}

/// Tessellate a sphere centered at origin.
fn tessellate_sphere(radius: f32, segments: u32) -> Mesh {
    let segments = segments.max(8);
    let rings = segments / 2;

    let mut vertices = Vec::new();
    let mut normals = Vec::new();
    let mut indices = Vec::new();

    // Generate vertices in a grid pattern, pole to pole
    for ring in 0..=rings {
        let phi = (ring as f32 / rings as f32) * PI; // 0 to PI
        let y = phi.cos();
        let ring_radius = phi.sin();

        for seg in 0..=segments {
            let theta = (seg as f32 / segments as f32) * 2.0 * PI;
            let x = ring_radius * theta.cos();
            let z = ring_radius * theta.sin();

            let normal = Vec3::new(x, y, z).normalize_or_zero();
            vertices.push(Vec3::new(x, y, z) * radius);
            normals.push(normal);
        }
    }

    let verts_per_ring = segments + 1;
    for ring in 0..rings {
        for seg in 0..segments {
            let current = ring * verts_per_ring + seg;
            let next = current + verts_per_ring;

            indices.extend_from_slice(&[
                current,
                next,
                current + 1,
                current + 1,
                next,
                next + 1,
            ]);
        }
    }

    Mesh {
        name: String::new(),
        vertices,
        normals,
        indices,
    }
}

/// Tessellate a capped cylinder centered at origin, extending along Y.
fn tessellate_cylinder(radius: f32, height: f32, segments: u32) -> Mesh {
    let half_height = height / 2.0;
    let segments = segments.max(8);

    let mut vertices = Vec::new();
    let mut normals = Vec::new();
    let mut indices = Vec::new();

    // Side vertices
    for i in 0..=segments {
        let angle = (i as f32 / segments as f32) * 2.0 * PI;
        let x = angle.cos() * radius;
        let z = angle.sin() * radius;
        let normal = Vec3::new(angle.cos(), 0.0, angle.sin());

        vertices.push(Vec3::new(x, -half_height, z));
        normals.push(normal);
        vertices.push(Vec3::new(x, half_height, z));
        normals.push(normal);
    }

    for i in 0..segments {
        let base = i * 2;
        indices.extend_from_slice(&[base, base + 2, base + 1, base + 1, base + 2, base + 3]);
    }

    // Top cap
    let top_center_idx = vertices.len() as u32;
    vertices.push(Vec3::new(0.0, half_height, 0.0));
    normals.push(Vec3::Y);

    for i in 0..=segments {
        let angle = (i as f32 / segments as f32) * 2.0 * PI;
        vertices.push(Vec3::new(angle.cos() * radius, half_height, angle.sin() * radius));
        normals.push(Vec3::Y);
    }

    for i in 0..segments {
        let base = top_center_idx + 1 + i;
        indices.extend_from_slice(&[top_center_idx, base, base + 1]);
    }

    // Bottom cap
    let bottom_center_idx = vertices.len() as u32;
    vertices.push(Vec3::new(0.0, -half_height, 0.0));
    normals.push(Vec3::NEG_Y);

    for i in 0..=segments {
        let angle = (i as f32 / segments as f32) * 2.0 * PI;
        vertices.push(Vec3::new(angle.cos() * radius, -half_height, angle.sin() * radius));
        normals.push(Vec3::NEG_Y);
    }

    for i in 0..segments {
        let base = bottom_center_idx + 1 + i;
        indices.extend_from_slice(&[bottom_center_idx, base + 1, base]);
    }

    Mesh {
        name: String::new(),
        vertices,
        normals,
        indices,
    }
}

/// Tessellate a capsule centered at origin, extending along Y.
///
/// Built as a sphere split at the equator with the halves pushed apart by
/// the body height; the duplicated equator rings form the cylindrical
/// side, whose normals are exactly the sphere's equator normals. A
/// negative body height (degenerate bounds) pulls the halves through each
/// other rather than clamping.
fn tessellate_capsule(radius: f32, body_height: f32, segments: u32) -> Mesh {
    let segments = segments.max(8);
    let half_rings = (segments / 4).max(2);
    let half_body = body_height / 2.0;

    // Latitude rings: top hemisphere offset up, bottom hemisphere offset
    // down. The equator ring appears once per hemisphere, at each offset.
    let mut ring_params = Vec::with_capacity(2 * (half_rings as usize + 1));
    for ring in 0..=half_rings {
        let phi = (ring as f32 / half_rings as f32) * (PI / 2.0);
        ring_params.push((phi, half_body));
    }
    for ring in 0..=half_rings {
        let phi = PI / 2.0 + (ring as f32 / half_rings as f32) * (PI / 2.0);
        ring_params.push((phi, -half_body));
    }

    let mut vertices = Vec::new();
    let mut normals = Vec::new();
    let mut indices = Vec::new();

    for &(phi, offset) in &ring_params {
        let y = phi.cos();
        let ring_radius = phi.sin();
        for seg in 0..=segments {
            let theta = (seg as f32 / segments as f32) * 2.0 * PI;
            let x = ring_radius * theta.cos();
            let z = ring_radius * theta.sin();

            let normal = Vec3::new(x, y, z).normalize_or_zero();
            vertices.push(Vec3::new(x * radius, y * radius + offset, z * radius));
            normals.push(normal);
        }
    }

    let verts_per_ring = segments + 1;
    for ring in 0..(ring_params.len() as u32 - 1) {
        for seg in 0..segments {
            let current = ring * verts_per_ring + seg;
            let next = current + verts_per_ring;

            indices.extend_from_slice(&[
                current,
                next,
                current + 1,
                current + 1,
                next,
                next + 1,
            ]);
        }
    }

    Mesh {
        name: String::new(),
        vertices,
        normals,
        indices,
    }
}

/// Tessellate an upright rectangle in the XY plane, facing +Z.
///
/// Used for both planes and quads; the plane's base correction pitches it
/// into the ground plane afterwards.
fn tessellate_rect(width: f32, height: f32) -> Mesh {
    let hw = width / 2.0;
    let hh = height / 2.0;

    Mesh {
        name: String::new(),
        vertices: vec![
            Vec3::new(-hw, -hh, 0.0),
            Vec3::new(hw, -hh, 0.0),
            Vec3::new(hw, hh, 0.0),
            Vec3::new(-hw, hh, 0.0),
        ],
        normals: vec![Vec3::Z; 4],
        indices: vec![0, 1, 2, 2, 3, 0],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::resolve;
    use spatial_core::PrimitiveKind;

    #[test]
    fn test_box_counts() {
        let mesh = tessellate_box(2.0, 3.0, 4.0);
        assert_eq!(mesh.vertex_count(), 24);
        assert_eq!(mesh.triangle_count(), 12);
    }

    #[test]
    fn test_sphere_vertices_on_surface() {
        let mesh = tessellate_sphere(2.0, 16);
        for v in &mesh.vertices {
            assert!((v.length() - 2.0).abs() < 0.001, "vertex distance {}", v.length());
        }
        assert_eq!(mesh.vertex_count(), mesh.normals.len());
    }

    #[test]
    fn test_cylinder_extent() {
        let mesh = tessellate_cylinder(1.0, 4.0, 16);
        let max_y = mesh.vertices.iter().map(|v| v.y).fold(f32::MIN, f32::max);
        let min_y = mesh.vertices.iter().map(|v| v.y).fold(f32::MAX, f32::min);
        assert!((max_y - 2.0).abs() < 0.001);
        assert!((min_y + 2.0).abs() < 0.001);
    }

    #[test]
    fn test_capsule_total_height() {
        let mesh = tessellate_capsule(0.5, 1.0, 16);
        let max_y = mesh.vertices.iter().map(|v| v.y).fold(f32::MIN, f32::max);
        let min_y = mesh.vertices.iter().map(|v| v.y).fold(f32::MAX, f32::min);
        // body of 1.0 plus a 0.5 radius cap on each end
        assert!((max_y - 1.0).abs() < 0.001);
        assert!((min_y + 1.0).abs() < 0.001);
    }

    #[test]
    fn test_rect_is_flat_in_xy() {
        let mesh = tessellate_rect(10.0, 10.0);
        assert_eq!(mesh.triangle_count(), 2);
        assert!(mesh.vertices.iter().all(|v| v.z == 0.0));
        assert!(mesh.normals.iter().all(|&n| n == Vec3::Z));
    }

    #[test]
    fn test_meshes_carry_kind_names() {
        for (kind, expected) in [
            (PrimitiveKind::Cube, "Cube"),
            (PrimitiveKind::Sphere, "Sphere"),
            (PrimitiveKind::Capsule, "Capsule"),
            (PrimitiveKind::Plane, "Plane"),
        ] {
            let mesh = tessellate(&resolve(kind, glam::Vec3::ONE), DEFAULT_SEGMENTS);
            assert_eq!(mesh.name, expected);
        }
    }

    #[test]
    fn test_indices_in_range() {
        for kind in spatial_core::ALL_KINDS {
            let mesh = tessellate(&resolve(kind, glam::Vec3::new(1.0, 2.0, 3.0)), 12);
            let max = mesh.vertex_count() as u32;
            assert!(mesh.indices.iter().all(|&i| i < max), "kind {kind}");
            assert_eq!(mesh.indices.len() % 3, 0);
        }
    }
}
