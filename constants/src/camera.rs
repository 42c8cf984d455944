use bevy::math::Vec3;

/// Camera placement for one viewport mode. The camera always looks at `CAMERA_TARGET`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraPreset {
    pub position: Vec3,
    pub fov_degrees: f32,
}

pub const CAMERA_TARGET: Vec3 = Vec3::ZERO;

pub const MOBILE_CAMERA: CameraPreset = CameraPreset {
    position: Vec3::new(0.0, 0.0, 20.0),
    fov_degrees: 50.0,
};

pub const DESKTOP_CAMERA: CameraPreset = CameraPreset {
    position: Vec3::new(20.0, 3.0, 5.0),
    fov_degrees: 25.0,
};

pub const CAMERA_NEAR: f32 = 0.1;
pub const CAMERA_FAR: f32 = 1000.0;
