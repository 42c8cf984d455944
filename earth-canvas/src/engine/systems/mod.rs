//! Runtime systems for diagnostics and host notifications.
//!
//! Provides FPS tracking, device pixel ratio clamping, and the notifications
//! that keep the embedding page informed about viewport and loading state.

/// FPS tracking and notification systems for performance monitoring.
///
/// Sends frame rate updates to frontend via RPC and updates native UI overlays.
pub mod fps_tracking;

/// Viewport mode and loading progress notifications for the host page.
pub mod notifications;

/// Device pixel ratio clamping for the primary window.
pub mod pixel_ratio;
