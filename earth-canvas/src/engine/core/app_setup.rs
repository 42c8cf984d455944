use bevy::asset::AssetMetaCheck;
use bevy::diagnostic::FrameTimeDiagnosticsPlugin;
use bevy::prelude::*;

use crate::engine::core::app_state::{AppState, CanvasLifecyclePlugin, CanvasSet};
use crate::engine::core::window_config::create_window_config;
use crate::engine::loading::ModelLoadingPlugin;
use crate::engine::scene::SceneComposerPlugin;
use crate::engine::systems::fps_tracking::fps_notification_system;
use crate::engine::systems::notifications::{notify_loading_progress, notify_viewport_mode_changes};
use crate::engine::systems::pixel_ratio::clamp_pixel_ratio;
use crate::engine::viewport::ViewportPlugin;
use crate::rpc::web_rpc::WebRpcPlugin;

#[cfg(not(target_arch = "wasm32"))]
use crate::engine::systems::fps_tracking::{fps_text_update_system, spawn_fps_overlay};

/// Everything the canvas needs on top of Bevy's default plugins.
pub struct EarthCanvasPlugin;

impl Plugin for EarthCanvasPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(CanvasLifecyclePlugin)
            .add_plugins(ViewportPlugin)
            .add_plugins(SceneComposerPlugin)
            .add_plugins(ModelLoadingPlugin)
            .add_plugins(WebRpcPlugin)
            .add_plugins(FrameTimeDiagnosticsPlugin::default())
            .insert_resource(ClearColor(Color::NONE));

        app.add_systems(
            Update,
            (
                clamp_pixel_ratio,
                notify_viewport_mode_changes.after(CanvasSet::Observe),
                notify_loading_progress
                    .after(CanvasSet::Load)
                    .run_if(in_state(AppState::Loading)),
                fps_notification_system.run_if(in_state(AppState::Running)),
            ),
        );

        // Native builds get an FPS overlay; the web host receives fps_update instead.
        #[cfg(not(target_arch = "wasm32"))]
        {
            app.add_systems(Startup, spawn_fps_overlay)
                .add_systems(Update, fps_text_update_system);
        }
    }
}

pub fn create_app() -> App {
    let mut app = App::new();
    app.add_plugins(create_default_plugins())
        .add_plugins(EarthCanvasPlugin);
    app
}

fn create_default_plugins() -> impl PluginGroup {
    let window_config = WindowPlugin {
        primary_window: Some(create_window_config()),
        ..default()
    };

    let asset_config = AssetPlugin {
        meta_check: AssetMetaCheck::Never,
        ..default()
    };

    DefaultPlugins.set(window_config).set(asset_config)
}
