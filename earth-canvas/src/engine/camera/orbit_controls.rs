use std::f32::consts::{PI, TAU};

use bevy::input::mouse::{MouseMotion, MouseScrollUnit, MouseWheel};
use bevy::prelude::*;
use bevy::window::PrimaryWindow;
use constants::orbit::OrbitSettings;

use crate::engine::camera::canvas_camera::CanvasCamera;

/// Keeps the polar angle off the poles, where `looking_at` degenerates.
const POLAR_EPSILON: f32 = 1e-6;
const FALLBACK_VIEWPORT_HEIGHT: f32 = 600.0;
const ZOOM_STEP: f32 = 0.95;

/// Camera offset from the orbit target. Polar is measured from +Y,
/// azimuth around +Y starting at +Z.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spherical {
    pub radius: f32,
    pub polar: f32,
    pub azimuth: f32,
}

impl Spherical {
    pub fn from_offset(offset: Vec3) -> Self {
        let radius = offset.length();
        if radius == 0.0 {
            return Self {
                radius: 0.0,
                polar: 0.0,
                azimuth: 0.0,
            };
        }

        Self {
            radius,
            polar: (offset.y / radius).clamp(-1.0, 1.0).acos(),
            azimuth: offset.x.atan2(offset.z),
        }
    }

    pub fn to_offset(&self) -> Vec3 {
        let ring = self.radius * self.polar.sin();
        Vec3::new(
            ring * self.azimuth.sin(),
            self.radius * self.polar.cos(),
            ring * self.azimuth.cos(),
        )
    }
}

/// Orbit controller attached to the canvas camera on desktop.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct OrbitControls {
    pub settings: OrbitSettings,
    pub target: Vec3,
    pub spherical: Spherical,
}

impl OrbitControls {
    pub fn new(settings: OrbitSettings, target: Vec3, camera_position: Vec3) -> Self {
        Self {
            settings,
            target,
            spherical: Spherical::from_offset(camera_position - target),
        }
    }

    /// Azimuth change from auto-rotation over `delta_secs`.
    /// A speed of 1.0 is one turn per minute.
    pub fn auto_rotate_angle(&self, delta_secs: f32) -> f32 {
        if !self.settings.auto_rotate {
            return 0.0;
        }
        TAU / 60.0 * self.settings.auto_rotate_speed * delta_secs
    }

    /// Apply a pointer drag measured in pixels.
    pub fn drag(&mut self, delta: Vec2, viewport_height: f32) {
        let height = viewport_height.max(1.0);
        let speed = self.settings.rotate_speed;
        self.spherical.azimuth -= TAU * delta.x / height * speed;
        self.spherical.polar -= TAU * delta.y / height * speed;
    }

    /// Wheel input, in lines. Ignored when zoom is disabled.
    pub fn zoom(&mut self, lines: f32) {
        if !self.settings.enable_zoom || lines == 0.0 {
            return;
        }
        self.spherical.radius *= ZOOM_STEP.powf(lines);
    }

    /// Advance auto-rotation, clamp the polar angle and return the camera position.
    pub fn update(&mut self, delta_secs: f32) -> Vec3 {
        self.spherical.azimuth -= self.auto_rotate_angle(delta_secs);
        self.spherical.polar = self
            .spherical
            .polar
            .clamp(self.settings.min_polar_angle, self.settings.max_polar_angle)
            .clamp(POLAR_EPSILON, PI - POLAR_EPSILON);

        self.target + self.spherical.to_offset()
    }
}

pub fn orbit_controls_system(
    mut cameras: Query<(&mut Transform, &mut OrbitControls), With<CanvasCamera>>,
    mouse_button: Res<ButtonInput<MouseButton>>,
    mut mouse_motion: EventReader<MouseMotion>,
    mut scroll_events: EventReader<MouseWheel>,
    windows: Query<&Window, With<PrimaryWindow>>,
    time: Res<Time>,
) {
    let mouse_delta: Vec2 = mouse_motion.read().map(|m| m.delta).sum();

    let scroll_lines: f32 = scroll_events
        .read()
        .map(|ev| match ev.unit {
            MouseScrollUnit::Line => ev.y,
            MouseScrollUnit::Pixel => ev.y * 0.05,
        })
        .sum();

    let viewport_height = windows
        .single()
        .map(|window| window.height())
        .unwrap_or(FALLBACK_VIEWPORT_HEIGHT);

    for (mut transform, mut controls) in &mut cameras {
        if mouse_button.pressed(MouseButton::Left) && mouse_delta != Vec2::ZERO {
            controls.drag(mouse_delta, viewport_height);
        }
        controls.zoom(scroll_lines);

        let position = controls.update(time.delta_secs());
        *transform = Transform::from_translation(position).looking_at(controls.target, Vec3::Y);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use constants::camera::{CAMERA_TARGET, DESKTOP_CAMERA};
    use constants::orbit::DESKTOP_ORBIT;
    use std::f32::consts::FRAC_PI_2;

    fn desktop_controls() -> OrbitControls {
        OrbitControls::new(DESKTOP_ORBIT, CAMERA_TARGET, DESKTOP_CAMERA.position)
    }

    #[test]
    fn spherical_matches_offset() {
        let offset = Vec3::new(20.0, 3.0, 5.0);
        let spherical = Spherical::from_offset(offset);
        assert!((spherical.radius - offset.length()).abs() < 1e-5);
        assert!(spherical.to_offset().distance(offset) < 1e-4);
    }

    #[test]
    fn polar_is_pinned_to_horizon() {
        let mut controls = desktop_controls();
        let position = controls.update(0.0);

        assert!((controls.spherical.polar - FRAC_PI_2).abs() < 1e-6);
        assert!(position.y.abs() < 1e-4);
        assert!((position.length() - DESKTOP_CAMERA.position.length()).abs() < 1e-4);
    }

    #[test]
    fn vertical_drag_cannot_leave_horizon() {
        let mut controls = desktop_controls();
        controls.drag(Vec2::new(0.0, 250.0), 600.0);
        controls.update(0.0);
        assert!((controls.spherical.polar - FRAC_PI_2).abs() < 1e-6);
    }

    #[test]
    fn zoom_is_ignored_when_disabled() {
        let mut controls = desktop_controls();
        let radius = controls.spherical.radius;
        controls.zoom(5.0);
        assert_eq!(controls.spherical.radius, radius);
    }

    #[test]
    fn auto_rotate_advances_azimuth() {
        let mut controls = desktop_controls();
        controls.update(0.0);
        let before = controls.spherical.azimuth;
        controls.update(1.0);
        let expected = TAU / 60.0 * 0.4;
        assert!((before - controls.spherical.azimuth - expected).abs() < 1e-6);
    }

    #[test]
    fn auto_rotate_off_holds_still() {
        let settings = OrbitSettings {
            auto_rotate: false,
            ..DESKTOP_ORBIT
        };
        let controls = OrbitControls::new(settings, CAMERA_TARGET, DESKTOP_CAMERA.position);
        assert_eq!(controls.auto_rotate_angle(10.0), 0.0);
    }
}
