use std::f32::consts::FRAC_PI_2;

/// Interactive orbit behaviour around the camera target.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitSettings {
    pub enable_zoom: bool,
    /// Polar angle bounds in radians, measured from +Y.
    pub min_polar_angle: f32,
    pub max_polar_angle: f32,
    pub auto_rotate: bool,
    /// 1.0 is one full turn per minute.
    pub auto_rotate_speed: f32,
    pub rotate_speed: f32,
}

/// Desktop only. Polar angle is pinned to the horizon.
pub const DESKTOP_ORBIT: OrbitSettings = OrbitSettings {
    enable_zoom: false,
    min_polar_angle: FRAC_PI_2,
    max_polar_angle: FRAC_PI_2,
    auto_rotate: true,
    auto_rotate_speed: 0.4,
    rotate_speed: 1.0,
};
