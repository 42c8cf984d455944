use bevy::math::Vec3;

/// Sky/ground gradient light. Intensities are in the unitless scale the
/// scene was authored in; the engine converts them.
pub struct HemisphereLightInfo {
    pub intensity: f32,
    pub sky_colour: [f32; 3],
    pub ground_colour: [f32; 3],
}

pub struct SpotLightInfo {
    pub position: Vec3,
    pub target: Vec3,
    /// Half-angle of the cone, radians.
    pub angle: f32,
    /// Fraction of the cone that is attenuated, 0..=1.
    pub penumbra: f32,
    pub intensity: f32,
    pub range: f32,
    pub cast_shadow: bool,
}

pub struct PointLightInfo {
    pub position: Vec3,
    pub intensity: f32,
}

pub const HEMISPHERE_LIGHT: HemisphereLightInfo = HemisphereLightInfo {
    intensity: 0.15,
    sky_colour: [1.0, 1.0, 1.0],
    ground_colour: [0.0, 0.0, 0.0],
};

pub const SPOT_LIGHT: SpotLightInfo = SpotLightInfo {
    position: Vec3::new(-20.0, 50.0, 10.0),
    target: Vec3::ZERO,
    angle: 0.12,
    penumbra: 1.0,
    intensity: 1.0,
    range: 100.0,
    cast_shadow: true,
};

pub const POINT_LIGHT: PointLightInfo = PointLightInfo {
    position: Vec3::ZERO,
    intensity: 1.0,
};

pub const SHADOW_MAP_SIZE: usize = 1024;
