//! Shared viewing presets for the Earth canvas.
//!
//! Every value here is plain data. The engine derives its scene configuration
//! from these tables and never hard-codes a preset itself.

pub mod camera;
pub mod lighting;
pub mod model;
pub mod orbit;
pub mod viewport;
