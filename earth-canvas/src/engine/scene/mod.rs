//! Scene composition for the Earth canvas.
//!
//! Spawns the canvas root with its lights and camera, derives the scene
//! configuration from the viewport mode, and animates the model group.

use bevy::pbr::PointLightShadowMap;
use bevy::prelude::*;
use constants::lighting::SHADOW_MAP_SIZE;

use crate::engine::camera::orbit_controls::orbit_controls_system;
use crate::engine::core::app_state::{AppState, CanvasSet};
use crate::engine::viewport::mode::ViewportMode;

/// Mode-derived scene configuration and the system that applies it.
pub mod config;

/// Earth model group, its rotation accumulator and per-frame spin.
pub mod earth_model;

/// Constant lighting rig shared by both viewport modes.
pub mod lighting;

/// Canvas root, camera and lights spawned at startup.
pub mod setup;

use config::{ActiveSceneConfig, apply_scene_config};
use earth_model::spin_earth_model;
use setup::setup_scene;

pub struct SceneComposerPlugin;

impl Plugin for SceneComposerPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ActiveSceneConfig>()
            .insert_resource(PointLightShadowMap {
                size: SHADOW_MAP_SIZE,
            })
            .add_systems(Startup, setup_scene)
            .add_systems(
                Update,
                apply_scene_config
                    .in_set(CanvasSet::Compose)
                    .run_if(resource_changed::<ViewportMode>)
                    .run_if(not(in_state(AppState::Unmounted))),
            )
            .add_systems(
                Update,
                (spin_earth_model, orbit_controls_system)
                    .in_set(CanvasSet::Animate)
                    .run_if(in_state(AppState::Running)),
            );
    }
}
