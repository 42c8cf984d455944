//! Asset types owned by the canvas.

/// Optional JSON manifest overriding which glTF scene is loaded.
pub mod canvas_manifest;
