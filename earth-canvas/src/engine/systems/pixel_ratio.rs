use bevy::prelude::*;
use bevy::window::PrimaryWindow;
use constants::viewport::PIXEL_RATIO_RANGE;

/// The override to install for a device ratio, or `None` when it is already in range.
pub fn pixel_ratio_override(device_ratio: f32) -> Option<f32> {
    let (min, max) = PIXEL_RATIO_RANGE;
    let clamped = device_ratio.clamp(min, max);
    (clamped != device_ratio).then_some(clamped)
}

pub fn clamp_pixel_ratio(mut windows: Query<&mut Window, (With<PrimaryWindow>, Changed<Window>)>) {
    for mut window in &mut windows {
        let desired = pixel_ratio_override(window.resolution.base_scale_factor());
        if window.resolution.scale_factor_override() != desired {
            window.resolution.set_scale_factor_override(desired);
            info!("Pixel ratio override: {:?}", desired);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ratio_is_clamped_into_range() {
        assert_eq!(pixel_ratio_override(3.0), Some(2.0));
        assert_eq!(pixel_ratio_override(0.75), Some(1.0));
        assert_eq!(pixel_ratio_override(1.5), None);
        assert_eq!(pixel_ratio_override(2.0), None);
    }
}
