//! The built scene: live objects instantiated from a document.

use glam::{Mat4, Quat, Vec3};
use log::debug;
use spatial_core::{Color, PrimitiveKind};

use crate::material::Material;
use crate::mesh::Mesh;

/// The set of live objects built from the most recent document.
///
/// The object registry is owned exclusively by the scene and replaced
/// wholesale on each rebuild; collaborators get `clear`, the count, and
/// read-only enumeration. Rebuilds are serialized by the exclusive borrow
/// `build` takes; there is no interior mutability to race on.
#[derive(Debug, Default)]
pub struct Scene3D {
    pub(crate) objects: Vec<SceneObject>,
}

impl Scene3D {
    /// Create an empty scene.
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop every built object, releasing its mesh and material.
    ///
    /// Clearing an empty scene is a no-op.
    pub fn clear(&mut self) {
        if !self.objects.is_empty() {
            debug!("clearing {} objects", self.objects.len());
        }
        self.objects.clear();
    }

    /// Number of top-level objects currently built.
    pub fn object_count(&self) -> usize {
        self.objects.len()
    }

    /// Iterate the built objects in build order.
    pub fn iter(&self) -> impl Iterator<Item = &SceneObject> {
        self.objects.iter()
    }

    /// Get a built object by index.
    pub fn get(&self, index: usize) -> Option<&SceneObject> {
        self.objects.get(index)
    }
}

/// One live object in the built scene.
#[derive(Debug, Clone)]
pub struct SceneObject {
    pub name: String,
    /// The tessellated primitive; its name carries the primitive kind.
    pub mesh: Mesh,
    pub material: Material,
    pub position: Vec3,
    pub rotation: Quat,
    pub scale: Vec3,
    /// Attached text label, positioned in this object's local frame.
    pub label: Option<Label>,
    /// Nested objects, transformed relative to this one.
    pub children: Vec<SceneObject>,
}

impl SceneObject {
    /// Create an object at the origin with identity rotation and unit
    /// scale.
    pub fn new(name: impl Into<String>, mesh: Mesh, material: Material) -> Self {
        Self {
            name: name.into(),
            mesh,
            material,
            position: Vec3::ZERO,
            rotation: Quat::IDENTITY,
            scale: Vec3::ONE,
            label: None,
            children: Vec::new(),
        }
    }

    /// The primitive kind, inferred from the mesh identity.
    pub fn kind(&self) -> PrimitiveKind {
        PrimitiveKind::from_mesh_name(&self.mesh.name)
    }

    /// The local transform matrix (translation, then rotation, then
    /// scale innermost).
    pub fn transform(&self) -> Mat4 {
        Mat4::from_scale_rotation_translation(self.scale, self.rotation, self.position)
    }
}

/// A text label riding with a primitive.
///
/// Rasterizing the text into an image is the hosting renderer's business;
/// the mapping layer only decides what the label says, what color it
/// inherits, and where it sits in the primitive's local frame.
#[derive(Debug, Clone, PartialEq)]
pub struct Label {
    pub text: String,
    pub color: Color,
    /// Anchor in the owning object's local frame.
    pub offset: Vec3,
}
