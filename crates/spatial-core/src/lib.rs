//! Core types for spatial scene documents.
//!
//! This crate provides the foundational types shared across the spatial
//! workspace:
//! - The normalized scene document model (`SceneDocument`, `ObjectSpec`)
//! - Primitive kinds and their name resolution rules
//! - Rotation specifications (Euler degrees or quaternion)
//! - Color values and the deterministic fallback palette
//! - Recoverable warnings

pub mod document;
pub mod primitive;
pub mod rotation;
pub mod types;
pub mod warning;

pub use document::*;
pub use primitive::*;
pub use rotation::*;
pub use types::*;
pub use warning::*;
