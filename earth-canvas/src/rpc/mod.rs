//! JSON-RPC 2.0 bridge between the Earth canvas and the page embedding it.
//!
//! The canvas runs inside an iframe and talks to its parent window through
//! `postMessage`. Requests carry an `id` and get a response with the same id;
//! messages without an `id` are notifications and never get a reply.
//!
//! ```text
//! Host page (parent)  <──postMessage──>  Earth canvas (iframe)
//!        │                                        │
//!        ├─ get_scene_config (id: 7) ───────────> │
//!        │ <──────────────── result (id: 7) ──────┤
//!        │ <──────── viewport_mode_changed ───────┤
//! ```
//!
//! Handlers are pure functions of an [`web_rpc::RpcContext`] snapshot and
//! return an [`web_rpc::RpcOutcome`]; anything that must change the world
//! (a host-reported width, an unmount) comes back as an [`web_rpc::RpcAction`]
//! and is applied by the dispatching system.
//!
//! ```typescript
//! iframe.contentWindow.postMessage(JSON.stringify({
//!   jsonrpc: "2.0",
//!   method: "set_viewport_width",
//!   params: { width: window.innerWidth },
//! }), "*");
//! ```
//!
//! ## Error Handling
//!
//! Standard JSON-RPC 2.0 error codes:
//! - `-32600`: Invalid request
//! - `-32601`: Method not found
//! - `-32602`: Invalid params
//! - `-32603`: Internal error
//!
//! ## Methods
//!
//! - `get_viewport_mode`: current mobile/desktop classification
//! - `set_viewport_width`: host-reported viewport width in logical pixels,
//!   refused with `-32603` once the canvas is unmounted
//! - `get_scene_config`: camera, orbit and model parameters in effect
//! - `get_loading_progress`: model loading percentage and stage
//! - `get_fps`: smoothed frame rate
//! - `unmount_canvas`: tear the canvas down and release observers
//!
//! ## Notifications
//!
//! - `viewport_mode_changed`: full scene configuration after a mode flip
//! - `loading_progress`: percentage and stage while the model loads
//! - `loading_failed`: the model could not be loaded
//! - `fps_update`: smoothed frame rate every half second
//! - `debug_message`: a host message that could not be parsed

/// Message types, the request dispatcher and the wasm message listener.
pub mod web_rpc;
