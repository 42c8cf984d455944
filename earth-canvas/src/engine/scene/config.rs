use bevy::prelude::*;
use constants::camera::{CAMERA_TARGET, CameraPreset, DESKTOP_CAMERA, MOBILE_CAMERA};
use constants::model::{
    DESKTOP_MODEL, DESKTOP_ROTATION_RATE, MOBILE_MODEL, MOBILE_ROTATION_RATE, ModelTransform,
};
use constants::orbit::{DESKTOP_ORBIT, OrbitSettings};

use crate::engine::camera::canvas_camera::{CanvasCamera, apply_camera_preset};
use crate::engine::camera::orbit_controls::OrbitControls;
use crate::engine::scene::earth_model::EarthModel;
use crate::engine::viewport::mode::ViewportMode;

/// Every visual parameter that depends on the viewport mode.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SceneConfig {
    pub mode: ViewportMode,
    pub camera: CameraPreset,
    /// `None` when orbit interaction is disabled.
    pub orbit: Option<OrbitSettings>,
    pub model: ModelTransform,
    /// Y-axis spin of the model group, radians per second.
    pub rotation_rate: f32,
}

impl SceneConfig {
    pub fn for_mode(mode: ViewportMode) -> Self {
        if mode.is_mobile {
            Self {
                mode,
                camera: MOBILE_CAMERA,
                orbit: None,
                model: MOBILE_MODEL,
                rotation_rate: MOBILE_ROTATION_RATE,
            }
        } else {
            Self {
                mode,
                camera: DESKTOP_CAMERA,
                orbit: Some(DESKTOP_ORBIT),
                model: DESKTOP_MODEL,
                rotation_rate: DESKTOP_ROTATION_RATE,
            }
        }
    }

    pub fn to_json(&self) -> serde_json::Value {
        let vec = |v: Vec3| [v.x, v.y, v.z];
        serde_json::json!({
            "mode": self.mode.label(),
            "is_mobile": self.mode.is_mobile,
            "camera": {
                "position": vec(self.camera.position),
                "fov": self.camera.fov_degrees,
            },
            "orbit": self.orbit.map(|orbit| serde_json::json!({
                "enable_zoom": orbit.enable_zoom,
                "min_polar_angle": orbit.min_polar_angle,
                "max_polar_angle": orbit.max_polar_angle,
                "auto_rotate": orbit.auto_rotate,
                "auto_rotate_speed": orbit.auto_rotate_speed,
            })),
            "model": {
                "scale": self.model.scale,
                "position": vec(self.model.position),
                "rotation": vec(self.model.rotation),
            },
            "rotation_rate": self.rotation_rate,
        })
    }
}

/// The configuration currently applied to the world.
#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct ActiveSceneConfig(pub SceneConfig);

impl Default for ActiveSceneConfig {
    fn default() -> Self {
        Self(SceneConfig::for_mode(ViewportMode::default()))
    }
}

/// Apply camera, orbit controls and model transform for the current mode in
/// one pass, so no frame ever renders a mix of mobile and desktop parameters.
pub fn apply_scene_config(
    mode: Res<ViewportMode>,
    mut active: ResMut<ActiveSceneConfig>,
    mut commands: Commands,
    mut cameras: Query<
        (Entity, &mut Transform, &mut Projection),
        (With<CanvasCamera>, Without<EarthModel>),
    >,
    mut models: Query<(&mut Transform, &mut EarthModel), Without<CanvasCamera>>,
) {
    let config = SceneConfig::for_mode(*mode);
    active.set_if_neq(ActiveSceneConfig(config));

    for (entity, mut transform, mut projection) in &mut cameras {
        apply_camera_preset(&config.camera, &mut transform, &mut projection);

        match config.orbit {
            Some(settings) => {
                commands.entity(entity).insert(OrbitControls::new(
                    settings,
                    CAMERA_TARGET,
                    config.camera.position,
                ));
            }
            None => {
                commands.entity(entity).remove::<OrbitControls>();
            }
        }
    }

    for (mut transform, mut model) in &mut models {
        *model = EarthModel::from_preset(&config.model);
        *transform = model.transform();
    }

    info!("→ Applied {} scene configuration", mode.label());
}
