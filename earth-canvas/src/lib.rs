//! Responsive Earth scene rendered into a web canvas or a native window.
//!
//! The viewport observer classifies the display as mobile or desktop, the
//! scene composer derives every camera, orbit and model parameter from that
//! single flag, and the loader defers the model until its glTF scene is ready.

pub mod constants;
pub mod engine;
pub mod error;
pub mod rpc;

pub use engine::core::app_setup::{EarthCanvasPlugin, create_app};
