use bevy::asset::AssetPath;
use bevy::gltf::GltfAssetLabel;
use bevy::prelude::*;
use constants::model::MODEL_PATH;
use serde::{Deserialize, Serialize};

use crate::error::CanvasError;

/// Runtime overrides read from `earth/canvas.json`. Missing fields take the
/// built-in defaults, and a missing file means all defaults.
#[derive(Asset, TypePath, Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CanvasManifest {
    pub model_path: String,
    pub scene_index: usize,
}

impl Default for CanvasManifest {
    fn default() -> Self {
        Self {
            model_path: MODEL_PATH.to_string(),
            scene_index: 0,
        }
    }
}

impl CanvasManifest {
    pub fn validate(&self) -> Result<(), CanvasError> {
        let path = self.model_path.trim();
        if path.is_empty() {
            return Err(CanvasError::Manifest("model_path is empty".to_string()));
        }
        if !(path.ends_with(".gltf") || path.ends_with(".glb")) {
            return Err(CanvasError::Manifest(format!(
                "model_path '{path}' is not a glTF file"
            )));
        }
        Ok(())
    }

    /// Asset path of the scene to spawn, e.g. `earth/scene.gltf#Scene0`.
    pub fn scene_path(&self) -> AssetPath<'static> {
        GltfAssetLabel::Scene(self.scene_index).from_asset(self.model_path.trim().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_manifest_uses_defaults() {
        let manifest: CanvasManifest = serde_json::from_str("{}").unwrap();
        assert_eq!(manifest, CanvasManifest::default());
        assert_eq!(manifest.scene_path().to_string(), "earth/scene.gltf#Scene0");
    }

    #[test]
    fn partial_manifest_keeps_other_defaults() {
        let manifest: CanvasManifest =
            serde_json::from_str(r#"{ "scene_index": 2 }"#).unwrap();
        assert_eq!(manifest.model_path, MODEL_PATH);
        assert_eq!(manifest.scene_index, 2);
    }

    #[test]
    fn rejects_non_gltf_paths() {
        let manifest = CanvasManifest {
            model_path: "earth/scene.obj".to_string(),
            scene_index: 0,
        };
        assert!(matches!(manifest.validate(), Err(CanvasError::Manifest(_))));

        let blank = CanvasManifest {
            model_path: "  ".to_string(),
            scene_index: 0,
        };
        assert!(blank.validate().is_err());
        assert!(CanvasManifest::default().validate().is_ok());
    }
}
