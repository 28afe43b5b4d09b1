//! Primitive kinds and their name resolution rules.

use std::fmt;

/// The closed set of primitive shapes a scene object can be built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrimitiveKind {
    Cube,
    Sphere,
    Cylinder,
    Capsule,
    Plane,
    Quad,
}

/// All kinds, in a fixed order (useful for exhaustive table tests).
pub const ALL_KINDS: [PrimitiveKind; 6] = [
    PrimitiveKind::Cube,
    PrimitiveKind::Sphere,
    PrimitiveKind::Cylinder,
    PrimitiveKind::Capsule,
    PrimitiveKind::Plane,
    PrimitiveKind::Quad,
];

impl PrimitiveKind {
    /// Resolve a document `model` string, case-insensitively.
    ///
    /// Returns `None` for unrecognized names; callers substitute
    /// [`PrimitiveKind::default`] and record a warning rather than failing.
    pub fn from_model_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "cube" => Some(PrimitiveKind::Cube),
            "sphere" => Some(PrimitiveKind::Sphere),
            "cylinder" => Some(PrimitiveKind::Cylinder),
            "capsule" => Some(PrimitiveKind::Capsule),
            "plane" => Some(PrimitiveKind::Plane),
            "quad" => Some(PrimitiveKind::Quad),
            _ => None,
        }
    }

    /// Infer a kind from a runtime mesh identity.
    ///
    /// Mesh names are matched by lowercase substring so decorated names
    /// ("Cube Instance", "sphere.001") still resolve. Unrecognized names
    /// degrade to `Cube`.
    pub fn from_mesh_name(name: &str) -> Self {
        let name = name.to_ascii_lowercase();
        if name.contains("cube") {
            PrimitiveKind::Cube
        } else if name.contains("sphere") {
            PrimitiveKind::Sphere
        } else if name.contains("capsule") {
            PrimitiveKind::Capsule
        } else if name.contains("cylinder") {
            PrimitiveKind::Cylinder
        } else if name.contains("plane") {
            PrimitiveKind::Plane
        } else if name.contains("quad") {
            PrimitiveKind::Quad
        } else {
            PrimitiveKind::Cube
        }
    }

    /// The canonical document `model` string for this kind.
    pub fn model_name(&self) -> &'static str {
        match self {
            PrimitiveKind::Cube => "Cube",
            PrimitiveKind::Sphere => "Sphere",
            PrimitiveKind::Cylinder => "Cylinder",
            PrimitiveKind::Capsule => "Capsule",
            PrimitiveKind::Plane => "Plane",
            PrimitiveKind::Quad => "Quad",
        }
    }
}

impl Default for PrimitiveKind {
    fn default() -> Self {
        PrimitiveKind::Cube
    }
}

impl fmt::Display for PrimitiveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.model_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_model_name_resolution() {
        assert_eq!(
            PrimitiveKind::from_model_name("Sphere"),
            Some(PrimitiveKind::Sphere)
        );
        assert_eq!(
            PrimitiveKind::from_model_name("CYLINDER"),
            Some(PrimitiveKind::Cylinder)
        );
        assert_eq!(PrimitiveKind::from_model_name("Torus"), None);
    }

    #[test]
    fn test_model_name_round_trip() {
        for kind in ALL_KINDS {
            assert_eq!(PrimitiveKind::from_model_name(kind.model_name()), Some(kind));
        }
    }

    #[test]
    fn test_mesh_name_inference() {
        assert_eq!(
            PrimitiveKind::from_mesh_name("Sphere.001"),
            PrimitiveKind::Sphere
        );
        assert_eq!(
            PrimitiveKind::from_mesh_name("Capsule Instance"),
            PrimitiveKind::Capsule
        );
        assert_eq!(PrimitiveKind::from_mesh_name("pCylinder3"), PrimitiveKind::Cylinder);
    }

    #[test]
    fn test_mesh_name_inference_defaults_to_cube() {
        assert_eq!(PrimitiveKind::from_mesh_name("teapot"), PrimitiveKind::Cube);
        assert_eq!(PrimitiveKind::from_mesh_name(""), PrimitiveKind::Cube);
    }
}
