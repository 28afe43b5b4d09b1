//! Building a live scene from a document.

use log::{debug, warn};
use spatial_core::{Color, ObjectSpec, SceneDocument, Warning};

use crate::geometry::{label_offset, orient, resolve};
use crate::material::Material;
use crate::mesh::{tessellate, DEFAULT_SEGMENTS};
use crate::scene::{Label, Scene3D, SceneObject};

/// Outcome of a build: how many objects were created, plus any
/// recoverable per-object degradations.
#[derive(Debug, Clone, Default)]
pub struct BuildReport {
    pub built: usize,
    pub warnings: Vec<Warning>,
}

/// Populate a scene from a document.
///
/// The scene is cleared completely before any new object is created, so a
/// rebuild can never leave a mixture of old and new objects. Individual
/// objects degrade through their documented defaults rather than aborting
/// the build; after a successful build the live object count always equals
/// the document's object count.
pub fn build(scene: &mut Scene3D, document: &SceneDocument) -> BuildReport {
    scene.clear();

    let mut warnings = Vec::new();
    for (index, spec) in document.objects.iter().enumerate() {
        let object = build_object(spec, index, &mut warnings);
        scene.objects.push(object);
    }

    debug!(
        "built {} objects from document '{}'",
        scene.object_count(),
        document.info.name
    );
    BuildReport {
        built: scene.object_count(),
        warnings,
    }
}

/// Build a fresh scene from a document.
pub fn build_scene(document: &SceneDocument) -> (Scene3D, BuildReport) {
    let mut scene = Scene3D::new();
    let report = build(&mut scene, document);
    (scene, report)
}

fn build_object(spec: &ObjectSpec, index: usize, warnings: &mut Vec<Warning>) -> SceneObject {
    let name = if spec.name.is_empty() {
        format!("Object_{index}")
    } else {
        spec.name.clone()
    };

    let geometry = resolve(spec.kind, spec.bounds);
    let mesh = tessellate(&geometry, DEFAULT_SEGMENTS);
    let color = fill_color(spec, &name, index, warnings);

    let mut object = SceneObject::new(name, mesh, Material::flat(color));
    object.position = spec.position;
    object.rotation = orient(&spec.rotation, spec.kind);
    object.scale = spec.scale;
    object.label = spec.label.as_ref().map(|text| Label {
        text: text.clone(),
        color,
        offset: label_offset(spec.kind, spec.bounds, spec.scale),
    });
    object
}

/// Explicit color when present and valid; white with a warning when
/// present and invalid; otherwise the deterministic index-seeded fallback.
fn fill_color(
    spec: &ObjectSpec,
    name: &str,
    index: usize,
    warnings: &mut Vec<Warning>,
) -> Color {
    match spec.color.as_deref() {
        Some(hex) => Color::from_hex(hex).unwrap_or_else(|| {
            let warning = Warning::InvalidColor {
                object: name.to_string(),
                color: hex.to_string(),
            };
            warn!("{warning}");
            warnings.push(warning);
            Color::WHITE
        }),
        None => Color::fallback(index),
    }
}
