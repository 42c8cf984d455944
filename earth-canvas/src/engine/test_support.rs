use std::time::Duration;

use bevy::asset::AssetMetaCheck;
use bevy::input::InputPlugin;
use bevy::prelude::*;
use bevy::scene::ScenePlugin;
use bevy::state::app::StatesPlugin;
use bevy::time::TimeUpdateStrategy;
use bevy::window::WindowResized;

use crate::engine::core::app_state::{AppState, CanvasLifecyclePlugin, CanvasSet};
use crate::engine::loading::ModelLoadingPlugin;
use crate::engine::loading::model_loader::ModelLoader;
use crate::engine::loading::progress::LoadingProgress;
use crate::engine::scene::SceneComposerPlugin;
use crate::engine::scene::config::ActiveSceneConfig;
use crate::engine::scene::earth_model::EarthModel;
use crate::engine::systems::notifications::notify_loading_progress;
use crate::engine::viewport::ViewportPlugin;
use crate::engine::viewport::mode::{ViewportSample, ViewportSignal};
use crate::rpc::web_rpc::WebRpcInterface;

pub(crate) const FRAME: Duration = Duration::from_millis(100);

/// Frames `run_until` waits for background asset IO.
const MAX_LOADING_FRAMES: usize = 400;

/// Canvas without rendering or asset IO. Every update advances time by `FRAME`
/// and the model load is left pending.
pub(crate) fn headless_app() -> App {
    let mut app = App::new();
    app.add_plugins((MinimalPlugins, StatesPlugin, InputPlugin))
        .add_event::<WindowResized>()
        .insert_resource(TimeUpdateStrategy::ManualDuration(FRAME))
        .init_resource::<LoadingProgress>()
        .insert_resource(ModelLoader {
            manifest: None,
            scene: Some(Handle::default()),
        })
        .add_plugins((CanvasLifecyclePlugin, ViewportPlugin, SceneComposerPlugin));
    app
}

/// Canvas with the real loading pipeline reading from an asset directory that
/// does not exist, so every file request fails.
pub(crate) fn loading_app() -> App {
    let missing_assets = std::env::temp_dir().join("earth-canvas-test-no-assets");

    let mut app = App::new();
    app.add_plugins((MinimalPlugins, StatesPlugin, InputPlugin))
        .add_plugins((
            AssetPlugin {
                file_path: missing_assets.to_string_lossy().into_owned(),
                meta_check: AssetMetaCheck::Never,
                ..default()
            },
            ScenePlugin,
        ))
        .add_event::<WindowResized>()
        .insert_resource(TimeUpdateStrategy::ManualDuration(FRAME))
        .init_resource::<WebRpcInterface>()
        .add_plugins((
            CanvasLifecyclePlugin,
            ViewportPlugin,
            SceneComposerPlugin,
            ModelLoadingPlugin,
        ))
        .add_systems(
            Update,
            notify_loading_progress
                .after(CanvasSet::Load)
                .run_if(in_state(AppState::Loading)),
        );
    app
}

/// Update until `done` holds, giving asset IO threads time between frames.
pub(crate) fn run_until(app: &mut App, done: impl Fn(&World) -> bool) {
    for _ in 0..MAX_LOADING_FRAMES {
        app.update();
        if done(app.world()) {
            return;
        }
        std::thread::sleep(Duration::from_millis(5));
    }
    panic!("condition not reached within {MAX_LOADING_FRAMES} frames");
}

pub(crate) fn viewport_width(app: &mut App, width: f32) {
    app.world()
        .resource::<ViewportSignal>()
        .push(ViewportSample::Width(width));
}

/// Stand-in for a loaded model: the group without its glTF scene.
pub(crate) fn spawn_test_model(app: &mut App) -> Entity {
    let config = app.world().resource::<ActiveSceneConfig>().0;
    let model = EarthModel::from_preset(&config.model);
    app.world_mut().spawn((model, model.transform())).id()
}
