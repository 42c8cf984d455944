use bevy::asset::{LoadState, RecursiveDependencyLoadState};
use bevy::prelude::*;

use crate::engine::assets::canvas_manifest::CanvasManifest;
use crate::engine::core::app_state::CanvasRoot;
use crate::engine::loading::progress::LoadingProgress;
use crate::engine::scene::config::ActiveSceneConfig;
use crate::engine::scene::earth_model::spawn_earth_model;

/// Handles for in-flight loads. Dropping them discards the result.
#[derive(Resource, Default)]
pub struct ModelLoader {
    pub manifest: Option<Handle<CanvasManifest>>,
    pub scene: Option<Handle<Scene>>,
}

impl ModelLoader {
    pub fn is_pending(&self) -> bool {
        self.manifest.is_some() || self.scene.is_some()
    }

    pub fn discard(&mut self) {
        self.manifest = None;
        self.scene = None;
    }
}

/// Poll the scene load. The model is spawned only once the scene and every
/// mesh, material and texture it references are loaded.
pub fn check_model_loading(
    mut loading_progress: ResMut<LoadingProgress>,
    loader: Res<ModelLoader>,
    mut commands: Commands,
    asset_server: Res<AssetServer>,
    config: Res<ActiveSceneConfig>,
    roots: Query<Entity, With<CanvasRoot>>,
) {
    if loading_progress.model_spawned || loading_progress.failure.is_some() {
        return;
    }
    let Some(handle) = loader.scene.as_ref() else {
        return;
    };

    if !loading_progress.scene_parsed
        && matches!(asset_server.get_load_state(handle), Some(LoadState::Loaded))
    {
        loading_progress.scene_parsed = true;
    }

    match asset_server.get_recursive_dependency_load_state(handle) {
        Some(RecursiveDependencyLoadState::Loaded) => {}
        Some(RecursiveDependencyLoadState::Failed(err)) => {
            error!("Failed to load Earth model: {err}");
            loading_progress.failure = Some(err.to_string());
            return;
        }
        _ => return,
    }
    loading_progress.dependencies_loaded = true;

    let Ok(root) = roots.single() else {
        warn!("Model loaded without a canvas root, discarding");
        return;
    };

    spawn_earth_model(&mut commands, root, handle.clone(), &config.0);
    loading_progress.model_spawned = true;
    info!("✓ Earth model loaded and attached");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn discard_drops_every_handle() {
        let mut loader = ModelLoader {
            manifest: Some(Handle::default()),
            scene: Some(Handle::default()),
        };
        assert!(loader.is_pending());
        loader.discard();
        assert!(!loader.is_pending());
    }
}
