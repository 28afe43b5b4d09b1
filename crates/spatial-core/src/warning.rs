//! Recoverable degradations recorded while parsing or building.

use thiserror::Error;

/// A recoverable problem with a single object.
///
/// Warnings never abort a parse or a build; the affected field has already
/// been substituted with its documented default when one of these is
/// recorded.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Warning {
    /// A `model` string that is not a known primitive kind; the object was
    /// built as a Cube.
    #[error("object '{object}': unknown model '{model}', using Cube")]
    UnknownModel { object: String, model: String },

    /// A `color` string that does not parse as hex; the object was given a
    /// white fill.
    #[error("object '{object}': invalid color '{color}', using white")]
    InvalidColor { object: String, color: String },
}

impl Warning {
    /// Name of the object the warning applies to.
    pub fn object(&self) -> &str {
        match self {
            Warning::UnknownModel { object, .. } => object,
            Warning::InvalidColor { object, .. } => object,
        }
    }
}
