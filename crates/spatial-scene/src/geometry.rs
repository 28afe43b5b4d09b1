//! Per-kind geometry resolution, pivot orientation, and label placement.
//!
//! Three lookup tables keyed by [`PrimitiveKind`], each total over the
//! enumeration: [`resolve`] turns a bounds hint into concrete geometric
//! parameters, [`base_correction`] supplies the fixed orientation that
//! grounds a primitive before user rotation, and [`label_height`] places
//! an attached label above the primitive's extent.

use glam::{Quat, Vec3};
use spatial_core::{PrimitiveKind, RotationSpec};
use std::f32::consts::FRAC_PI_2;

/// Concrete geometric parameters for one primitive, derived from its
/// bounds hint. Never persisted; recomputed on every build.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ResolvedGeometry {
    Box { width: f32, height: f32, depth: f32 },
    Sphere { radius: f32 },
    Cylinder { radius: f32, height: f32 },
    Capsule { radius: f32, body_height: f32 },
    Plane { width: f32, depth: f32 },
    Quad { width: f32, height: f32 },
}

impl ResolvedGeometry {
    /// The primitive kind this geometry belongs to.
    pub fn kind(&self) -> PrimitiveKind {
        match self {
            ResolvedGeometry::Box { .. } => PrimitiveKind::Cube,
            ResolvedGeometry::Sphere { .. } => PrimitiveKind::Sphere,
            ResolvedGeometry::Cylinder { .. } => PrimitiveKind::Cylinder,
            ResolvedGeometry::Capsule { .. } => PrimitiveKind::Capsule,
            ResolvedGeometry::Plane { .. } => PrimitiveKind::Plane,
            ResolvedGeometry::Quad { .. } => PrimitiveKind::Quad,
        }
    }
}

/// The implicit footprint of a default plane: bounds act as a multiplier
/// against a 10x10 unit quad, not as an absolute size.
pub const PLANE_FOOTPRINT: f32 = 10.0;

/// Vertical gap between a primitive's top extent and its label.
pub const LABEL_MARGIN: f32 = 0.5;

/// Resolve a bounds hint into concrete geometry for the given kind.
///
/// The meaning of `bounds` is kind-specific: full extents for a box, a
/// diameter-implying maximum for a sphere, a footprint multiplier for a
/// plane. A capsule's body height goes negative when its bounds are
/// degenerate; that is passed through unclamped so malformed input stays
/// visible downstream.
pub fn resolve(kind: PrimitiveKind, bounds: Vec3) -> ResolvedGeometry {
    match kind {
        PrimitiveKind::Cube => ResolvedGeometry::Box {
            width: bounds.x,
            height: bounds.y,
            depth: bounds.z,
        },
        PrimitiveKind::Sphere => ResolvedGeometry::Sphere {
            radius: bounds.max_element() / 2.0,
        },
        PrimitiveKind::Cylinder => ResolvedGeometry::Cylinder {
            radius: bounds.x.max(bounds.z) / 2.0,
            height: bounds.y,
        },
        PrimitiveKind::Capsule => {
            let radius = bounds.x.max(bounds.z) / 2.0;
            ResolvedGeometry::Capsule {
                radius,
                body_height: bounds.y - 2.0 * radius,
            }
        }
        PrimitiveKind::Plane => ResolvedGeometry::Plane {
            width: bounds.x * PLANE_FOOTPRINT,
            depth: bounds.z * PLANE_FOOTPRINT,
        },
        PrimitiveKind::Quad => ResolvedGeometry::Quad {
            width: bounds.x,
            height: bounds.y,
        },
    }
}

/// A fixed rotation grounding a primitive's resting orientation, in both
/// the forms the two rotation encodings compose with.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BaseCorrection {
    pub quat: Quat,
    /// The same rotation as component-wise Euler radians, added to an
    /// Euler-encoded user rotation.
    pub euler_offset: Vec3,
}

impl BaseCorrection {
    pub const IDENTITY: Self = Self {
        quat: Quat::IDENTITY,
        euler_offset: Vec3::ZERO,
    };
}

/// The base orientation correction for a kind.
///
/// Plane meshes are generated upright in the XY plane and must be pitched
/// -90 degrees about X to lie flat with the face up; everything else rests
/// correctly as generated.
pub fn base_correction(kind: PrimitiveKind) -> BaseCorrection {
    match kind {
        PrimitiveKind::Plane => BaseCorrection {
            quat: Quat::from_rotation_x(-FRAC_PI_2),
            euler_offset: Vec3::new(-FRAC_PI_2, 0.0, 0.0),
        },
        _ => BaseCorrection::IDENTITY,
    }
}

/// Compose a declarative rotation with the kind's base correction into the
/// runtime rotation.
///
/// The correction is applied unconditionally: quaternion specs multiply it
/// in as the inner rotation (mesh is grounded first, user rotation applied
/// on top), Euler specs get its offset added component-wise after the
/// degree-to-radian conversion. Degenerate quaternions are not normalized.
pub fn orient(rotation: &RotationSpec, kind: PrimitiveKind) -> Quat {
    let correction = base_correction(kind);
    match *rotation {
        RotationSpec::Quaternion(q) => q * correction.quat,
        RotationSpec::Euler(deg) => {
            let radians = Vec3::new(
                deg.x.to_radians(),
                deg.y.to_radians(),
                deg.z.to_radians(),
            ) + correction.euler_offset;
            Quat::from_euler(glam::EulerRot::XYZ, radians.x, radians.y, radians.z)
        }
    }
}

/// Vertical offset at which a label sits relative to the primitive's
/// origin, before the fixed margin.
pub fn label_height(kind: PrimitiveKind, bounds: Vec3, scale: Vec3) -> f32 {
    match kind {
        PrimitiveKind::Cube
        | PrimitiveKind::Capsule
        | PrimitiveKind::Cylinder
        | PrimitiveKind::Quad => bounds.y * scale.y / 2.0,
        PrimitiveKind::Sphere => bounds.max_element() * scale.max_element() / 2.0,
        PrimitiveKind::Plane => 0.0,
    }
}

/// Label anchor in the primitive's local frame: straight above the top
/// extent with a fixed margin, so the label rides with the primitive
/// under all further transforms.
pub fn label_offset(kind: PrimitiveKind, bounds: Vec3, scale: Vec3) -> Vec3 {
    Vec3::new(0.0, label_height(kind, bounds, scale) + LABEL_MARGIN, 0.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use spatial_core::ALL_KINDS;

    #[test]
    fn test_unit_sphere_radius() {
        assert_eq!(
            resolve(PrimitiveKind::Sphere, Vec3::ONE),
            ResolvedGeometry::Sphere { radius: 0.5 }
        );
    }

    #[test]
    fn test_sphere_radius_takes_max_axis() {
        assert_eq!(
            resolve(PrimitiveKind::Sphere, Vec3::new(1.0, 4.0, 2.0)),
            ResolvedGeometry::Sphere { radius: 2.0 }
        );
    }

    #[test]
    fn test_box_extents_are_bounds() {
        assert_eq!(
            resolve(PrimitiveKind::Cube, Vec3::new(2.0, 3.0, 4.0)),
            ResolvedGeometry::Box {
                width: 2.0,
                height: 3.0,
                depth: 4.0
            }
        );
    }

    #[test]
    fn test_cylinder_ignores_depthwise_radius_only_for_height() {
        assert_eq!(
            resolve(PrimitiveKind::Cylinder, Vec3::new(1.0, 5.0, 3.0)),
            ResolvedGeometry::Cylinder {
                radius: 1.5,
                height: 5.0
            }
        );
    }

    #[test]
    fn test_capsule_body_can_go_negative() {
        // Degenerate bounds: diameter exceeds total height. Passed through
        // unclamped so the caller can see the malformed input.
        assert_eq!(
            resolve(PrimitiveKind::Capsule, Vec3::new(2.0, 1.0, 2.0)),
            ResolvedGeometry::Capsule {
                radius: 1.0,
                body_height: -1.0
            }
        );
    }

    #[test]
    fn test_default_plane_is_ten_by_ten() {
        assert_eq!(
            resolve(PrimitiveKind::Plane, Vec3::new(1.0, 0.1, 1.0)),
            ResolvedGeometry::Plane {
                width: 10.0,
                depth: 10.0
            }
        );
    }

    #[test]
    fn test_quad_has_no_multiplier() {
        assert_eq!(
            resolve(PrimitiveKind::Quad, Vec3::new(2.0, 3.0, 9.0)),
            ResolvedGeometry::Quad {
                width: 2.0,
                height: 3.0
            }
        );
    }

    #[test]
    fn test_only_plane_has_a_base_correction() {
        for kind in ALL_KINDS {
            let correction = base_correction(kind);
            if kind == PrimitiveKind::Plane {
                assert!(correction
                    .quat
                    .abs_diff_eq(Quat::from_rotation_x(-FRAC_PI_2), 1e-6));
            } else {
                assert_eq!(correction, BaseCorrection::IDENTITY);
            }
        }
    }

    #[test]
    fn test_orient_plane_without_rotation_is_bare_correction() {
        let quat = orient(&RotationSpec::IDENTITY, PrimitiveKind::Plane);
        assert!(quat.abs_diff_eq(Quat::from_rotation_x(-FRAC_PI_2), 1e-6));
    }

    #[test]
    fn test_orient_applies_user_rotation_on_top_of_correction() {
        let spec = RotationSpec::Quaternion(Quat::from_rotation_y(FRAC_PI_2));
        let quat = orient(&spec, PrimitiveKind::Plane);
        let expected = Quat::from_rotation_y(FRAC_PI_2) * Quat::from_rotation_x(-FRAC_PI_2);
        assert!(quat.abs_diff_eq(expected, 1e-6));
    }

    #[test]
    fn test_orient_euler_adds_offset_componentwise() {
        let spec = RotationSpec::Euler(Vec3::new(90.0, 0.0, 0.0));
        let quat = orient(&spec, PrimitiveKind::Plane);
        // 90 degrees user pitch cancels the -90 degree correction exactly.
        assert!(quat.abs_diff_eq(Quat::IDENTITY, 1e-6));
    }

    #[test]
    fn test_degenerate_quaternion_is_not_special_cased() {
        let spec = RotationSpec::Quaternion(Quat::from_xyzw(0.0, 0.0, 0.0, 0.0));
        assert_eq!(orient(&spec, PrimitiveKind::Cube), Quat::from_xyzw(0.0, 0.0, 0.0, 0.0));
    }

    #[test]
    fn test_label_height_per_kind() {
        let bounds = Vec3::new(1.0, 4.0, 1.0);
        let scale = Vec3::new(1.0, 2.0, 1.0);
        assert_eq!(label_height(PrimitiveKind::Cube, bounds, scale), 4.0);
        assert_eq!(label_height(PrimitiveKind::Cylinder, bounds, scale), 4.0);
        assert_eq!(label_height(PrimitiveKind::Sphere, bounds, scale), 4.0);
        assert_eq!(label_height(PrimitiveKind::Plane, bounds, scale), 0.0);
    }

    #[test]
    fn test_label_offset_includes_margin() {
        let offset = label_offset(PrimitiveKind::Cube, Vec3::ONE, Vec3::ONE);
        assert_eq!(offset, Vec3::new(0.0, 0.5 + LABEL_MARGIN, 0.0));
    }

    proptest! {
        #[test]
        fn prop_resolve_is_total(
            kind_idx in 0usize..ALL_KINDS.len(),
            x in -100.0f32..100.0,
            y in -100.0f32..100.0,
            z in -100.0f32..100.0,
        ) {
            // Any bounds vector resolves without panicking, for every kind.
            let geometry = resolve(ALL_KINDS[kind_idx], Vec3::new(x, y, z));
            prop_assert_eq!(geometry.kind(), ALL_KINDS[kind_idx]);
        }

        #[test]
        fn prop_cylinder_height_follows_bounds_y(
            x in 0.01f32..100.0,
            y in 0.01f32..100.0,
            z in 0.01f32..100.0,
        ) {
            match resolve(PrimitiveKind::Cylinder, Vec3::new(x, y, z)) {
                ResolvedGeometry::Cylinder { height, .. } => prop_assert_eq!(height, y),
                other => prop_assert!(false, "unexpected geometry {:?}", other),
            }
        }

        #[test]
        fn prop_plane_footprint_scales_linearly(
            x in 0.01f32..100.0,
            z in 0.01f32..100.0,
        ) {
            match resolve(PrimitiveKind::Plane, Vec3::new(x, 1.0, z)) {
                ResolvedGeometry::Plane { width, depth } => {
                    prop_assert_eq!(width, x * PLANE_FOOTPRINT);
                    prop_assert_eq!(depth, z * PLANE_FOOTPRINT);
                }
                other => prop_assert!(false, "unexpected geometry {:?}", other),
            }
        }
    }
}
