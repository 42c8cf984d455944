//! Canvas camera and orbit interaction.
//!
//! The camera placement comes from the active scene configuration; on
//! desktop an orbit controller keeps it circling the globe at horizon level.

/// Camera spawning and preset application.
pub mod canvas_camera;

/// Orbit controller with clamped polar angle, auto-rotation and drag input.
pub mod orbit_controls;
