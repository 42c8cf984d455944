use bevy::asset::LoadState;
use bevy::prelude::*;
use constants::model::MANIFEST_PATH;

use crate::engine::assets::canvas_manifest::CanvasManifest;
use crate::engine::loading::model_loader::ModelLoader;
use crate::engine::loading::progress::LoadingProgress;

// Start the loading process
pub fn start_loading(mut loader: ResMut<ModelLoader>, asset_server: Res<AssetServer>) {
    info!("Loading canvas manifest from: {}", MANIFEST_PATH);
    loader.manifest = Some(asset_server.load(MANIFEST_PATH));
}

/// Resolve the manifest, then request the model scene it names.
/// A missing or invalid manifest falls back to the built-in defaults.
pub fn resolve_manifest(
    mut loading_progress: ResMut<LoadingProgress>,
    mut loader: ResMut<ModelLoader>,
    mut commands: Commands,
    asset_server: Res<AssetServer>,
    manifests: Res<Assets<CanvasManifest>>,
) {
    if loading_progress.manifest_resolved {
        return;
    }
    let Some(handle) = loader.manifest.clone() else {
        return;
    };

    let manifest = match asset_server.get_load_state(&handle) {
        Some(LoadState::Loaded) => match manifests.get(&handle) {
            Some(manifest) => accept_manifest(manifest),
            None => return,
        },
        Some(LoadState::Failed(err)) => {
            warn!("Canvas manifest unavailable ({err}), using defaults");
            CanvasManifest::default()
        }
        _ => return,
    };

    let scene_path = manifest.scene_path();
    info!("✓ Manifest resolved, loading model scene: {}", scene_path);
    loader.scene = Some(asset_server.load(scene_path));
    loader.manifest = None;
    commands.insert_resource(manifest);
    loading_progress.manifest_resolved = true;
}

fn accept_manifest(manifest: &CanvasManifest) -> CanvasManifest {
    match manifest.validate() {
        Ok(()) => manifest.clone(),
        Err(e) => {
            warn!("{e}, using defaults");
            CanvasManifest::default()
        }
    }
}
