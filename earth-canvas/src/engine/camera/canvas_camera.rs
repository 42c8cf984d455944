use bevy::prelude::*;
use bevy::render::camera::Exposure;
use constants::camera::{CAMERA_FAR, CAMERA_NEAR, CAMERA_TARGET, CameraPreset};

use crate::constants::render_settings::SCENE_EV100;

#[derive(Component)]
pub struct CanvasCamera;

pub fn spawn_camera(commands: &mut Commands, parent: Entity, preset: &CameraPreset) -> Entity {
    commands
        .spawn((
            Camera3d::default(),
            Camera {
                clear_color: ClearColorConfig::Custom(Color::NONE),
                ..default()
            },
            camera_projection(preset),
            camera_transform(preset),
            Exposure { ev100: SCENE_EV100 },
            CanvasCamera,
            ChildOf(parent),
        ))
        .id()
}

pub fn camera_projection(preset: &CameraPreset) -> Projection {
    Projection::Perspective(PerspectiveProjection {
        fov: preset.fov_degrees.to_radians(),
        near: CAMERA_NEAR,
        far: CAMERA_FAR,
        ..default()
    })
}

pub fn camera_transform(preset: &CameraPreset) -> Transform {
    Transform::from_translation(preset.position).looking_at(CAMERA_TARGET, Vec3::Y)
}

/// Move the camera to a preset. Only the field of view of an existing
/// perspective projection is replaced so aspect ratio tracking is kept.
pub fn apply_camera_preset(
    preset: &CameraPreset,
    transform: &mut Transform,
    projection: &mut Projection,
) {
    *transform = camera_transform(preset);
    match projection {
        Projection::Perspective(perspective) => {
            perspective.fov = preset.fov_degrees.to_radians();
        }
        other => *other = camera_projection(preset),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use constants::camera::{DESKTOP_CAMERA, MOBILE_CAMERA};

    #[test]
    fn preset_replaces_fov_and_position() {
        let mut transform = camera_transform(&DESKTOP_CAMERA);
        let mut projection = camera_projection(&DESKTOP_CAMERA);

        apply_camera_preset(&MOBILE_CAMERA, &mut transform, &mut projection);

        assert_eq!(transform.translation, Vec3::new(0.0, 0.0, 20.0));
        let Projection::Perspective(perspective) = projection else {
            panic!("expected perspective projection");
        };
        assert!((perspective.fov - 50f32.to_radians()).abs() < 1e-6);
    }

    #[test]
    fn camera_faces_the_target() {
        let transform = camera_transform(&DESKTOP_CAMERA);
        let to_target = (CAMERA_TARGET - transform.translation).normalize();
        assert!(transform.forward().dot(to_target) > 0.9999);
    }
}
