//! The normalized scene document model.

use glam::Vec3;

use crate::primitive::PrimitiveKind;
use crate::rotation::RotationSpec;

/// A declarative scene description: metadata plus an ordered object list.
///
/// Documents are immutable inputs to scene building. Object order is
/// significant: it seeds the deterministic fallback colors and is
/// preserved on export.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SceneDocument {
    /// Scene-level metadata.
    pub info: SceneInfo,
    /// The objects, in document order.
    pub objects: Vec<ObjectSpec>,
}

impl SceneDocument {
    /// Create an empty document with the given metadata.
    pub fn new(info: SceneInfo) -> Self {
        Self {
            info,
            objects: Vec::new(),
        }
    }

    /// Number of objects in the document.
    pub fn object_count(&self) -> usize {
        self.objects.len()
    }
}

/// Scene-level metadata.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SceneInfo {
    pub name: String,
    pub description: String,
}

impl SceneInfo {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
        }
    }
}

/// A single object in a scene document, with every field normalized.
///
/// All transform fields are always present after normalization; sparse
/// source records have already had their defaults substituted. `color`
/// stays a raw hex string; it is validated (and degraded to white) at
/// build time, so invalid strings survive a document round-trip intact.
#[derive(Debug, Clone, PartialEq)]
pub struct ObjectSpec {
    pub name: String,
    pub kind: PrimitiveKind,
    pub position: Vec3,
    pub rotation: RotationSpec,
    pub scale: Vec3,
    /// Size hint whose meaning depends on `kind`: full extents for a cube,
    /// a diameter-implying maximum for a sphere, a footprint multiplier
    /// for a plane.
    pub bounds: Vec3,
    pub color: Option<String>,
    pub label: Option<String>,
}

impl ObjectSpec {
    /// Create a spec with the default transform (origin, identity
    /// rotation, unit scale, unit bounds).
    pub fn new(name: impl Into<String>, kind: PrimitiveKind) -> Self {
        Self {
            name: name.into(),
            kind,
            position: Vec3::ZERO,
            rotation: RotationSpec::IDENTITY,
            scale: Vec3::ONE,
            bounds: Vec3::ONE,
            color: None,
            label: None,
        }
    }

    /// Set the position.
    pub fn at(mut self, position: Vec3) -> Self {
        self.position = position;
        self
    }

    /// Set the rotation.
    pub fn rotated(mut self, rotation: RotationSpec) -> Self {
        self.rotation = rotation;
        self
    }

    /// Set the scale.
    pub fn scaled(mut self, scale: Vec3) -> Self {
        self.scale = scale;
        self
    }

    /// Set the bounds.
    pub fn with_bounds(mut self, bounds: Vec3) -> Self {
        self.bounds = bounds;
        self
    }

    /// Set the fill color from a hex string.
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    /// Set the label text.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }
}
