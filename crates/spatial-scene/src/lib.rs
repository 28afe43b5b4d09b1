//! spatial-scene: scene building and extraction for spatial documents.
//!
//! This crate is the runtime side of the mapping layer:
//! - Per-kind geometry resolution from a declarative bounds hint
//! - Pivot orientation corrections and rotation composition
//! - Label placement above a primitive's extent
//! - Tessellation of primitives to triangle meshes
//! - [`build`]: document -> live [`Scene3D`]
//! - [`extract`]: live [`Scene3D`] -> document
//!
//! The hosting renderer consumes the built scene (meshes, flat-color
//! materials, TRS transforms, label anchors) however it likes; nothing
//! here touches a GPU, camera, or frame loop.

mod builder;
mod extract;
mod geometry;
mod material;
mod mesh;
mod scene;

pub use builder::{build, build_scene, BuildReport};
pub use extract::{extract, extract_filtered, ExtractOptions};
pub use geometry::{
    base_correction, label_height, label_offset, orient, resolve, BaseCorrection,
    ResolvedGeometry, LABEL_MARGIN, PLANE_FOOTPRINT,
};
pub use material::Material;
pub use mesh::{tessellate, Mesh, DEFAULT_SEGMENTS};
pub use scene::{Label, Scene3D, SceneObject};
