use std::f32::consts::PI;

/// Authored light intensities are candela; Bevy point and spot lights take lumens.
pub const CANDELA_TO_LUMENS: f32 = 4.0 * PI;

/// Exposure at which an authored intensity of 1.0 renders close to unit radiance.
pub const SCENE_EV100: f32 = 0.0;

/// Seconds between `fps_update` notifications.
pub const FPS_NOTIFY_INTERVAL: f32 = 0.5;

pub const PLACEHOLDER_FONT_SIZE: f32 = 14.0;
pub const PLACEHOLDER_TEXT_COLOUR: [f32; 3] = [0.95, 0.95, 0.95];
