//! Extracting a document back out of a live scene.

use log::debug;
use spatial_core::{ObjectSpec, PrimitiveKind, RotationSpec, SceneDocument, SceneInfo};

use crate::scene::{Scene3D, SceneObject};

/// Controls for scene extraction.
#[derive(Debug, Clone)]
pub struct ExtractOptions {
    /// Name to stamp on the exported document.
    pub scene_name: String,
    /// Description to stamp on the exported document.
    pub description: String,
    /// Also walk nested children, depth-first; their traversal order
    /// becomes document order. When false only top-level objects export.
    pub recursive: bool,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            scene_name: "Exported Scene".to_string(),
            description: "Scene exported from the live scene graph".to_string(),
            recursive: false,
        }
    }
}

/// Derive a document from every object in the scene.
pub fn extract(scene: &Scene3D, options: &ExtractOptions) -> SceneDocument {
    extract_filtered(scene, options, |_| true)
}

/// Derive a document from the objects matching `filter`.
///
/// An object rejected by the filter is skipped together with its subtree,
/// which is how a self-hosted extractor keeps its own control object out
/// of the export. The extractor only reads the live objects; it takes
/// no ownership and the scene is left untouched.
///
/// Kinds are inferred from mesh identity, rotation is read back as Euler
/// degrees, and `bounds` is deliberately set to the live scale; the
/// extractor does not attempt to recover an independent bounds value.
pub fn extract_filtered(
    scene: &Scene3D,
    options: &ExtractOptions,
    filter: impl Fn(&SceneObject) -> bool,
) -> SceneDocument {
    let mut document = SceneDocument::new(SceneInfo::new(
        options.scene_name.clone(),
        options.description.clone(),
    ));

    for object in scene.iter() {
        collect(object, options.recursive, &filter, &mut document.objects);
    }

    debug!("extracted {} objects", document.object_count());
    document
}

fn collect(
    object: &SceneObject,
    recursive: bool,
    filter: &impl Fn(&SceneObject) -> bool,
    out: &mut Vec<ObjectSpec>,
) {
    if !filter(object) {
        return;
    }

    out.push(record(object));

    if recursive {
        for child in &object.children {
            collect(child, recursive, filter, out);
        }
    }
}

fn record(object: &SceneObject) -> ObjectSpec {
    ObjectSpec {
        name: object.name.clone(),
        kind: PrimitiveKind::from_mesh_name(&object.mesh.name),
        position: object.position,
        rotation: RotationSpec::euler_degrees_from_quat(object.rotation),
        scale: object.scale,
        bounds: object.scale,
        color: Some(object.material.color_hex()),
        label: Some(object.name.to_uppercase()),
    }
}
