/// Widest viewport, in logical pixels, that still counts as mobile.
pub const MOBILE_BREAKPOINT_PX: f32 = 500.0;

/// Media query matching the mobile bucket. Must agree with `MOBILE_BREAKPOINT_PX`.
pub const MOBILE_MEDIA_QUERY: &str = "(max-width: 500px)";

/// Canvas element the wasm build renders into.
pub const CANVAS_SELECTOR: &str = "#earth-canvas";

/// Device pixel ratio is clamped into this range before rendering.
pub const PIXEL_RATIO_RANGE: (f32, f32) = (1.0, 2.0);
