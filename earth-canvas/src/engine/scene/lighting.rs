use bevy::prelude::*;
use constants::lighting::{
    HEMISPHERE_LIGHT, HemisphereLightInfo, POINT_LIGHT, PointLightInfo, SPOT_LIGHT, SpotLightInfo,
};

use crate::constants::render_settings::CANDELA_TO_LUMENS;

/// Bevy has no hemisphere light; the sky/ground pair becomes an ambient term
/// at their average brightness, tinted by the sky colour.
pub fn hemisphere_ambient(info: &HemisphereLightInfo) -> AmbientLight {
    let luminance = |c: [f32; 3]| 0.2126 * c[0] + 0.7152 * c[1] + 0.0722 * c[2];
    let [r, g, b] = info.sky_colour;
    AmbientLight {
        color: Color::srgb(r, g, b),
        brightness: info.intensity
            * (luminance(info.sky_colour) + luminance(info.ground_colour))
            * 0.5,
        ..default()
    }
}

/// Three.js style penumbra: the inner cone shrinks as penumbra grows.
pub fn spot_light(info: &SpotLightInfo) -> SpotLight {
    SpotLight {
        intensity: info.intensity * CANDELA_TO_LUMENS,
        range: info.range,
        shadows_enabled: info.cast_shadow,
        outer_angle: info.angle,
        inner_angle: info.angle * (1.0 - info.penumbra.clamp(0.0, 1.0)),
        ..default()
    }
}

pub fn point_light(info: &PointLightInfo) -> PointLight {
    PointLight {
        intensity: info.intensity * CANDELA_TO_LUMENS,
        shadows_enabled: false,
        ..default()
    }
}

pub fn spawn_lighting(commands: &mut Commands, parent: Entity) {
    commands.insert_resource(hemisphere_ambient(&HEMISPHERE_LIGHT));

    commands.spawn((
        Name::new("Spot light"),
        spot_light(&SPOT_LIGHT),
        Transform::from_translation(SPOT_LIGHT.position).looking_at(SPOT_LIGHT.target, Vec3::Y),
        ChildOf(parent),
    ));

    commands.spawn((
        Name::new("Point light"),
        point_light(&POINT_LIGHT),
        Transform::from_translation(POINT_LIGHT.position),
        ChildOf(parent),
    ));
}
