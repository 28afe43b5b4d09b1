//! The built-in sample scene.

use crate::error::Result;
use crate::format::ParseOutcome;

/// A small playground document exercising colors, labels, and per-axis
/// markers. Used by the "load sample" action so a host has something to
/// show without any file input.
pub const SAMPLE_SCENE_JSON: &str = r##"{
  "scene": {
    "name": "Playground Scene",
    "description": "Comprehensive test scene showcasing colors and text labels"
  },
  "objects": [
    {
      "name": "Ground_Platform",
      "position": { "x": 0, "y": 0, "z": 0 },
      "rotation": { "x": 0, "y": 0, "z": 0 },
      "scale": { "x": 15, "y": 0.2, "z": 15 },
      "bounds": { "x": 15, "y": 0.2, "z": 15 },
      "color": "#444444",
      "text": "GROUND"
    },
    {
      "name": "Red_Cube",
      "position": { "x": 10, "y": 0, "z": 0 },
      "rotation": { "x": 0, "y": 0, "z": 0 },
      "scale": { "x": 1, "y": 1, "z": 1 },
      "bounds": { "x": 1, "y": 1, "z": 1 },
      "color": "#ff6600",
      "text": "RED CUBE"
    },
    {
      "name": "Blue_Rectangle",
      "position": { "x": -10, "y": 0, "z": 0 },
      "rotation": { "x": 0, "y": 0, "z": 0 },
      "scale": { "x": 1, "y": 1, "z": 1 },
      "bounds": { "x": 1, "y": 1, "z": 1 },
      "color": "#0066ff",
      "text": "BLUE RECT"
    },
    {
      "name": "X_Axis_Marker",
      "position": { "x": 5, "y": 1, "z": 0 },
      "rotation": { "x": 0, "y": 0, "z": 0 },
      "scale": { "x": 0.5, "y": 0.5, "z": 0.5 },
      "bounds": { "x": 0.5, "y": 0.5, "z": 0.5 },
      "color": "#ff0000",
      "text": "X+ AXIS"
    },
    {
      "name": "Y_Axis_Marker",
      "position": { "x": 0, "y": 5, "z": 0 },
      "rotation": { "x": 0, "y": 0, "z": 0 },
      "scale": { "x": 0.5, "y": 0.5, "z": 0.5 },
      "bounds": { "x": 0.5, "y": 0.5, "z": 0.5 },
      "color": "#00ff00",
      "text": "Y+ AXIS"
    },
    {
      "name": "Z_Axis_Marker",
      "position": { "x": 0, "y": 1, "z": 5 },
      "rotation": { "x": 0, "y": 0, "z": 0 },
      "scale": { "x": 0.5, "y": 0.5, "z": 0.5 },
      "bounds": { "x": 0.5, "y": 0.5, "z": 0.5 },
      "color": "#0066ff",
      "text": "Z+ AXIS"
    },
    {
      "name": "Origin_Marker",
      "position": { "x": 0, "y": 0.5, "z": 0 },
      "rotation": { "x": 0, "y": 45, "z": 0 },
      "scale": { "x": 0.8, "y": 1, "z": 0.8 },
      "bounds": { "x": 0.8, "y": 1, "z": 0.8 },
      "color": "#ffff00",
      "text": "ORIGIN"
    }
  ]
}"##;

/// Parse the embedded sample scene.
pub fn sample_document() -> Result<ParseOutcome> {
    crate::read_document(SAMPLE_SCENE_JSON.as_bytes())
}
