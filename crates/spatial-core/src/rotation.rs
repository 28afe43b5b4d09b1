//! Rotation specifications: Euler degrees or quaternion.

use glam::{EulerRot, Quat, Vec3};

/// A declarative rotation, as found in a scene document.
///
/// The two encodings are discriminated at parse time by the presence of a
/// `w` component on the source record; use sites always know which variant
/// they hold.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RotationSpec {
    /// Euler angles in degrees, applied in XYZ order.
    Euler(Vec3),
    /// A raw quaternion. Not normalized on ingest; a degenerate
    /// `{0,0,0,0}` record is carried through as-is.
    Quaternion(Quat),
}

impl RotationSpec {
    /// The identity rotation in Euler form (the default for records with
    /// no rotation field).
    pub const IDENTITY: Self = RotationSpec::Euler(Vec3::ZERO);

    /// Classify a raw rotation record into one of the two encodings.
    ///
    /// A present `w` selects the quaternion form (missing components
    /// default to `0`, `w` to `1`); otherwise the record is Euler degrees
    /// with missing components defaulting to `0`.
    pub fn classify(
        x: Option<f32>,
        y: Option<f32>,
        z: Option<f32>,
        w: Option<f32>,
    ) -> Self {
        match w {
            Some(w) => RotationSpec::Quaternion(Quat::from_xyzw(
                x.unwrap_or(0.0),
                y.unwrap_or(0.0),
                z.unwrap_or(0.0),
                w,
            )),
            None => RotationSpec::Euler(Vec3::new(
                x.unwrap_or(0.0),
                y.unwrap_or(0.0),
                z.unwrap_or(0.0),
            )),
        }
    }

    /// Build an Euler-degrees spec from a runtime quaternion.
    pub fn euler_degrees_from_quat(quat: Quat) -> Self {
        let (x, y, z) = quat.to_euler(EulerRot::XYZ);
        RotationSpec::Euler(Vec3::new(
            x.to_degrees(),
            y.to_degrees(),
            z.to_degrees(),
        ))
    }

    /// Convert to a runtime quaternion, without any basis correction.
    pub fn to_quat(&self) -> Quat {
        match *self {
            RotationSpec::Euler(deg) => Quat::from_euler(
                EulerRot::XYZ,
                deg.x.to_radians(),
                deg.y.to_radians(),
                deg.z.to_radians(),
            ),
            RotationSpec::Quaternion(q) => q,
        }
    }

    /// Whether this spec is exactly the identity rotation.
    pub fn is_identity(&self) -> bool {
        match *self {
            RotationSpec::Euler(deg) => deg == Vec3::ZERO,
            RotationSpec::Quaternion(q) => q == Quat::IDENTITY,
        }
    }
}

impl Default for RotationSpec {
    fn default() -> Self {
        Self::IDENTITY
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_quaternion_by_w_presence() {
        let spec = RotationSpec::classify(Some(0.0), Some(0.0), Some(0.0), Some(1.0));
        assert_eq!(spec, RotationSpec::Quaternion(Quat::IDENTITY));
    }

    #[test]
    fn test_classify_euler_without_w() {
        let spec = RotationSpec::classify(Some(0.0), Some(90.0), Some(0.0), None);
        assert_eq!(spec, RotationSpec::Euler(Vec3::new(0.0, 90.0, 0.0)));
    }

    #[test]
    fn test_classify_defaults_missing_components() {
        assert_eq!(
            RotationSpec::classify(None, None, None, None),
            RotationSpec::IDENTITY
        );
        // w alone implies the identity quaternion components.
        assert_eq!(
            RotationSpec::classify(None, None, None, Some(1.0)),
            RotationSpec::Quaternion(Quat::IDENTITY)
        );
    }

    #[test]
    fn test_degenerate_quaternion_passes_through() {
        let spec = RotationSpec::classify(Some(0.0), Some(0.0), Some(0.0), Some(0.0));
        assert_eq!(spec.to_quat(), Quat::from_xyzw(0.0, 0.0, 0.0, 0.0));
    }

    #[test]
    fn test_euler_to_quat_converts_degrees() {
        let quat = RotationSpec::Euler(Vec3::new(0.0, 90.0, 0.0)).to_quat();
        let expected = Quat::from_rotation_y(std::f32::consts::FRAC_PI_2);
        assert!(quat.abs_diff_eq(expected, 1e-5));
    }

    #[test]
    fn test_euler_quat_round_trip() {
        let spec = RotationSpec::Euler(Vec3::new(10.0, 45.0, -30.0));
        let back = RotationSpec::euler_degrees_from_quat(spec.to_quat());
        match back {
            RotationSpec::Euler(deg) => {
                assert!((deg.x - 10.0).abs() < 0.01);
                assert!((deg.y - 45.0).abs() < 0.01);
                assert!((deg.z - (-30.0)).abs() < 0.01);
            }
            _ => panic!("expected Euler"),
        }
    }
}
