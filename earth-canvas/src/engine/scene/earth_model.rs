use bevy::prelude::*;
use constants::model::ModelTransform;

use crate::engine::scene::config::{ActiveSceneConfig, SceneConfig};

/// The group wrapping the loaded Earth scene. `rotation` is the Euler XYZ
/// accumulator; it grows without bound and is never wrapped.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct EarthModel {
    pub scale: f32,
    pub position: Vec3,
    pub rotation: Vec3,
}

impl EarthModel {
    pub fn from_preset(preset: &ModelTransform) -> Self {
        Self {
            scale: preset.scale,
            position: preset.position,
            rotation: preset.rotation,
        }
    }

    pub fn transform(&self) -> Transform {
        Transform {
            translation: self.position,
            rotation: Quat::from_euler(
                EulerRot::XYZ,
                self.rotation.x,
                self.rotation.y,
                self.rotation.z,
            ),
            scale: Vec3::splat(self.scale),
        }
    }
}

pub fn advance_rotation(rotation: &mut Vec3, delta_secs: f32, rate: f32) {
    rotation.y += delta_secs * rate;
}

/// Spawn the model group under `parent`, holding the glTF scene.
pub fn spawn_earth_model(
    commands: &mut Commands,
    parent: Entity,
    scene: Handle<Scene>,
    config: &SceneConfig,
) -> Entity {
    let model = EarthModel::from_preset(&config.model);
    commands
        .spawn((
            Name::new("Earth"),
            model,
            model.transform(),
            Visibility::default(),
            SceneRoot(scene),
            ChildOf(parent),
        ))
        .id()
}

pub fn spin_earth_model(
    time: Res<Time>,
    config: Res<ActiveSceneConfig>,
    mut models: Query<(&mut EarthModel, &mut Transform)>,
) {
    let delta = time.delta_secs();
    for (mut model, mut transform) in &mut models {
        advance_rotation(&mut model.rotation, delta, config.0.rotation_rate);
        transform.rotation = model.transform().rotation;
    }
}
