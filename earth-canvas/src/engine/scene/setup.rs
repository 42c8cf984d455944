use bevy::prelude::*;

use constants::camera::CAMERA_TARGET;

use crate::engine::camera::canvas_camera::spawn_camera;
use crate::engine::camera::orbit_controls::OrbitControls;
use crate::engine::core::app_state::spawn_canvas_root;
use crate::engine::scene::config::SceneConfig;
use crate::engine::scene::lighting::spawn_lighting;
use crate::engine::viewport::mode::ViewportMode;

/// Lights and camera exist from the first frame; the model joins them once
/// it has loaded. Later mode changes are handled by `apply_scene_config`.
pub fn setup_scene(mut commands: Commands, mode: Res<ViewportMode>) {
    let config = SceneConfig::for_mode(*mode);
    let root = spawn_canvas_root(&mut commands);

    spawn_lighting(&mut commands, root);
    let camera = spawn_camera(&mut commands, root, &config.camera);
    if let Some(settings) = config.orbit {
        commands.entity(camera).insert(OrbitControls::new(
            settings,
            CAMERA_TARGET,
            config.camera.position,
        ));
    }
}
