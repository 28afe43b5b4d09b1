//! The JSON wire format and its normalization rules.
//!
//! Raw serde types mirror the document shape exactly as it appears on the
//! wire, sparse fields and all. [`normalize`] turns a raw document into the
//! normalized [`SceneDocument`] model, substituting field defaults and
//! recording recoverable warnings; [`denormalize`] goes the other way for
//! serialization.

use glam::Vec3;
use log::warn;
use serde::{Deserialize, Serialize};

use spatial_core::{
    ObjectSpec, PrimitiveKind, RotationSpec, SceneDocument, SceneInfo, Warning,
};

use crate::error::{IoError, Result};

/// The result of a successful parse: the normalized document plus any
/// per-object degradations encountered along the way.
#[derive(Debug, Clone)]
pub struct ParseOutcome {
    pub document: SceneDocument,
    pub warnings: Vec<Warning>,
}

/// Wire-shape document root.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawDocument {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scene: Option<RawSceneInfo>,
    #[serde(default)]
    pub objects: Option<Vec<RawObject>>,
}

/// Wire-shape scene metadata.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawSceneInfo {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
}

/// Wire-shape object record. Every field is optional; normalization
/// substitutes the documented defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawObject {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<RawVec3>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rotation: Option<RawRotation>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scale: Option<RawVec3>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bounds: Option<RawVec3>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

/// Wire-shape numeric triple; components may be sparse.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct RawVec3 {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub x: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub y: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub z: Option<f32>,
}

impl RawVec3 {
    fn from_vec3(v: Vec3) -> Self {
        Self {
            x: Some(v.x),
            y: Some(v.y),
            z: Some(v.z),
        }
    }

    /// Missing components default to zero.
    fn to_vec3(self) -> Vec3 {
        Vec3::new(
            self.x.unwrap_or(0.0),
            self.y.unwrap_or(0.0),
            self.z.unwrap_or(0.0),
        )
    }
}

/// Wire-shape rotation record. A present `w` marks a quaternion; its
/// absence marks Euler degrees.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct RawRotation {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub x: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub y: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub z: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub w: Option<f32>,
}

impl RawRotation {
    fn from_spec(spec: &RotationSpec) -> Self {
        match *spec {
            RotationSpec::Euler(deg) => Self {
                x: Some(deg.x),
                y: Some(deg.y),
                z: Some(deg.z),
                w: None,
            },
            RotationSpec::Quaternion(q) => Self {
                x: Some(q.x),
                y: Some(q.y),
                z: Some(q.z),
                w: Some(q.w),
            },
        }
    }

    fn to_spec(self) -> RotationSpec {
        RotationSpec::classify(self.x, self.y, self.z, self.w)
    }
}

/// Normalize a raw wire document into the typed model.
///
/// Rejects a document with no `objects` sequence wholesale; every
/// per-object problem instead degrades to the field's default and is
/// recorded as a warning.
pub fn normalize(raw: RawDocument) -> Result<ParseOutcome> {
    let objects = raw.objects.ok_or(IoError::MissingObjects)?;

    let info = match raw.scene {
        Some(scene) => SceneInfo::new(scene.name, scene.description),
        None => SceneInfo::default(),
    };

    let mut warnings = Vec::new();
    let mut document = SceneDocument::new(info);

    for raw_obj in objects {
        let name = raw_obj.name.unwrap_or_default();

        let kind = match raw_obj.model {
            None => PrimitiveKind::default(),
            Some(model) => PrimitiveKind::from_model_name(&model).unwrap_or_else(|| {
                let warning = Warning::UnknownModel {
                    object: name.clone(),
                    model,
                };
                warn!("{warning}");
                warnings.push(warning);
                PrimitiveKind::default()
            }),
        };

        document.objects.push(ObjectSpec {
            name,
            kind,
            position: raw_obj.position.map(RawVec3::to_vec3).unwrap_or(Vec3::ZERO),
            rotation: raw_obj
                .rotation
                .map(RawRotation::to_spec)
                .unwrap_or(RotationSpec::IDENTITY),
            scale: raw_obj.scale.map(RawVec3::to_vec3).unwrap_or(Vec3::ONE),
            bounds: raw_obj.bounds.map(RawVec3::to_vec3).unwrap_or(Vec3::ONE),
            color: raw_obj.color,
            label: raw_obj.text,
        });
    }

    Ok(ParseOutcome { document, warnings })
}

/// Convert a typed document back to the wire shape.
///
/// The rotation encoding is preserved: an object parsed from a quaternion
/// record serializes back out as one.
pub fn denormalize(document: &SceneDocument) -> RawDocument {
    RawDocument {
        scene: Some(RawSceneInfo {
            name: document.info.name.clone(),
            description: document.info.description.clone(),
        }),
        objects: Some(
            document
                .objects
                .iter()
                .map(|spec| RawObject {
                    name: Some(spec.name.clone()),
                    model: Some(spec.kind.model_name().to_string()),
                    position: Some(RawVec3::from_vec3(spec.position)),
                    rotation: Some(RawRotation::from_spec(&spec.rotation)),
                    scale: Some(RawVec3::from_vec3(spec.scale)),
                    bounds: Some(RawVec3::from_vec3(spec.bounds)),
                    color: spec.color.clone(),
                    text: spec.label.clone(),
                })
                .collect(),
        ),
    }
}
