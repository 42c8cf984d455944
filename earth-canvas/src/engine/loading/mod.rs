//! Suspending load of the Earth model.
//!
//! Manages the loading pipeline from manifest resolution through glTF scene
//! loading to spawning the model, with a placeholder shown until it is ready.

use bevy::prelude::*;
use bevy_common_assets::json::JsonAssetPlugin;

use crate::engine::assets::canvas_manifest::CanvasManifest;
use crate::engine::core::app_state::{AppState, CanvasSet, transition_to_running};

/// Manifest resolution, falling back to defaults when it is missing or invalid.
pub mod manifest_loader;

/// glTF scene request, load polling and model spawning.
pub mod model_loader;

/// Loading indicator shown in place of the model.
pub mod placeholder;

/// Loading progress tracking resource for state transitions.
///
/// Monitors manifest resolution, scene parsing, dependency loading and spawning.
pub mod progress;

use manifest_loader::{resolve_manifest, start_loading};
use model_loader::{ModelLoader, check_model_loading};
use placeholder::{
    despawn_loading_placeholder, spawn_loading_placeholder, update_loading_placeholder,
};
use progress::LoadingProgress;

pub struct ModelLoadingPlugin;

impl Plugin for ModelLoadingPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(JsonAssetPlugin::<CanvasManifest>::new(&["json"]))
            .init_resource::<LoadingProgress>()
            .init_resource::<ModelLoader>()
            .add_systems(Startup, (start_loading, spawn_loading_placeholder))
            .add_systems(
                Update,
                (
                    resolve_manifest,
                    check_model_loading,
                    transition_to_running,
                    update_loading_placeholder,
                )
                    .chain()
                    .in_set(CanvasSet::Load)
                    .run_if(in_state(AppState::Loading)),
            )
            .add_systems(OnEnter(AppState::Running), despawn_loading_placeholder);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::core::app_state::CanvasRoot;
    use crate::engine::scene::earth_model::EarthModel;
    use crate::engine::test_support::{loading_app, run_until, viewport_width};
    use crate::rpc::web_rpc::WebRpcInterface;
    use placeholder::{LoadingPlaceholder, LoadingPlaceholderText};

    fn state(world: &World) -> AppState {
        *world.resource::<State<AppState>>().get()
    }

    fn placeholder_count(app: &mut App) -> usize {
        let mut placeholders = app
            .world_mut()
            .query_filtered::<Entity, With<LoadingPlaceholder>>();
        placeholders.iter(app.world()).count()
    }

    #[test]
    fn missing_manifest_requests_default_scene() {
        let mut app = loading_app();
        run_until(&mut app, |world| {
            world.resource::<LoadingProgress>().manifest_resolved
        });

        let world = app.world();
        assert_eq!(*world.resource::<CanvasManifest>(), CanvasManifest::default());

        let loader = world.resource::<ModelLoader>();
        assert!(loader.manifest.is_none());
        let scene = loader.scene.as_ref().expect("scene requested");
        let path = world
            .resource::<AssetServer>()
            .get_path(scene.id())
            .expect("scene loads from a path");
        assert_eq!(path.to_string(), "earth/scene.gltf#Scene0");
    }

    #[test]
    fn missing_scene_reports_failure_once() {
        let mut app = loading_app();
        run_until(&mut app, |world| {
            world.resource::<LoadingProgress>().failure.is_some()
        });
        for _ in 0..3 {
            app.update();
        }

        assert_eq!(state(app.world()), AppState::Loading);
        assert_eq!(placeholder_count(&mut app), 1);

        let mut texts = app
            .world_mut()
            .query_filtered::<&Text, With<LoadingPlaceholderText>>();
        let text = texts.single(app.world()).unwrap();
        assert_eq!(text.0, "Failed to load model");

        let failures = app
            .world()
            .resource::<WebRpcInterface>()
            .pending_notifications()
            .iter()
            .filter(|n| n.method == "loading_failed")
            .count();
        assert_eq!(failures, 1);
    }

    #[test]
    fn loaded_scene_spawns_model_and_runs() {
        let mut app = loading_app();
        viewport_width(&mut app, 400.0);

        let scene = app
            .world()
            .resource::<AssetServer>()
            .add(Scene::new(World::new()));
        app.insert_resource(LoadingProgress {
            manifest_resolved: true,
            ..default()
        })
        .insert_resource(ModelLoader {
            manifest: None,
            scene: Some(scene),
        });

        run_until(&mut app, |world| state(world) == AppState::Running);

        let progress = app.world().resource::<LoadingProgress>().clone();
        assert!(progress.scene_parsed && progress.dependencies_loaded && progress.model_spawned);
        assert_eq!(placeholder_count(&mut app), 0);

        let world = app.world_mut();
        let mut roots = world.query_filtered::<Entity, With<CanvasRoot>>();
        let root = roots.single(world).unwrap();

        let mut models = world.query::<(&EarthModel, &Transform, &ChildOf)>();
        let (model, transform, parent) = models.single(world).unwrap();
        assert_eq!(parent.parent(), root);
        assert_eq!(model.scale, 0.6);
        assert_eq!(model.position, Vec3::new(0.0, -1.2, 0.0));
        assert!(transform.translation.distance(Vec3::new(0.0, -1.2, 0.0)) < 1e-5);
        assert!(transform.scale.distance(Vec3::splat(0.6)) < 1e-5);
    }
}
