use bevy::math::Vec3;

/// Asset path of the Earth scene, relative to the asset root.
pub const MODEL_PATH: &str = "earth/scene.gltf";

/// Optional runtime overrides, relative to the asset root.
pub const MANIFEST_PATH: &str = "earth/canvas.json";

/// Transform applied to the group wrapping the loaded scene.
/// Rotation is Euler XYZ in radians.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ModelTransform {
    pub scale: f32,
    pub position: Vec3,
    pub rotation: Vec3,
}

// Tuned so the globe is not cropped on narrow screens.
pub const MOBILE_MODEL: ModelTransform = ModelTransform {
    scale: 0.6,
    position: Vec3::new(0.0, -1.2, 0.0),
    rotation: Vec3::ZERO,
};

pub const DESKTOP_MODEL: ModelTransform = ModelTransform {
    scale: 0.9,
    position: Vec3::new(0.0, -1.6, 0.0),
    rotation: Vec3::new(0.0, 0.2, 0.0),
};

/// Y-axis spin in radians per second.
pub const MOBILE_ROTATION_RATE: f32 = 0.5;
pub const DESKTOP_ROTATION_RATE: f32 = 0.15;
