use bevy::diagnostic::DiagnosticsStore;
use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::engine::core::app_state::{AppState, UnmountCanvas};
use crate::engine::loading::progress::LoadingProgress;
use crate::engine::scene::config::{ActiveSceneConfig, SceneConfig};
use crate::engine::systems::fps_tracking::smoothed_fps;
use crate::engine::viewport::mode::{ViewportMode, ViewportSample, ViewportSignal};

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsValue;

#[cfg(target_arch = "wasm32")]
use web_sys::{MessageEvent, window};

const JSONRPC_VERSION: &str = "2.0";

/// JSON-RPC 2.0 request structure.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct RpcRequest {
    pub jsonrpc: String,
    pub method: String,
    #[serde(default)]
    pub params: serde_json::Value,
    pub id: Option<serde_json::Value>,
}

/// JSON-RPC 2.0 response structure.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct RpcResponse {
    pub jsonrpc: String,
    pub result: Option<serde_json::Value>,
    pub error: Option<RpcError>,
    pub id: Option<serde_json::Value>,
}

/// JSON-RPC 2.0 notification structure for one-way communication.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct RpcNotification {
    pub jsonrpc: String,
    pub method: String,
    pub params: serde_json::Value,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct RpcError {
    pub code: i32,
    pub message: String,
    pub data: Option<serde_json::Value>,
}

/// World changes requested by the host, applied after dispatch.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RpcAction {
    SetViewportWidth(f32),
    Unmount,
}

/// Read-only snapshot handed to request handlers.
pub struct RpcContext<'a> {
    pub mode: ViewportMode,
    pub config: &'a SceneConfig,
    pub progress: &'a LoadingProgress,
    pub fps: f32,
    /// Canvas already torn down; width changes are refused.
    pub unmounted: bool,
}

#[derive(Debug, Default)]
pub struct RpcOutcome {
    pub response: Option<RpcResponse>,
    pub action: Option<RpcAction>,
}

/// Outgoing queue towards the host page.
#[derive(Resource, Default)]
pub struct WebRpcInterface {
    outgoing_notifications: Vec<RpcNotification>,
    outgoing_responses: Vec<RpcResponse>,
}

impl WebRpcInterface {
    /// Send notification to the host without expecting a response.
    pub fn send_notification(&mut self, method: &str, params: serde_json::Value) {
        self.outgoing_notifications.push(RpcNotification {
            jsonrpc: JSONRPC_VERSION.to_string(),
            method: method.to_string(),
            params,
        });
    }

    pub fn pending_notifications(&self) -> &[RpcNotification] {
        &self.outgoing_notifications
    }

    pub fn pending_responses(&self) -> &[RpcResponse] {
        &self.outgoing_responses
    }

    fn queue_response(&mut self, response: RpcResponse) {
        self.outgoing_responses.push(response);
    }
}

/// Plugin establishing the postMessage bridge for iframe deployment.
pub struct WebRpcPlugin;

impl Plugin for WebRpcPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<WebRpcInterface>()
            .add_event::<IncomingRpcMessage>()
            .add_systems(
                Update,
                (
                    process_incoming_messages,
                    handle_rpc_messages,
                    send_outgoing_messages,
                )
                    .chain(),
            );

        #[cfg(target_arch = "wasm32")]
        app.add_systems(Startup, setup_message_listener);
    }
}

#[cfg(target_arch = "wasm32")]
fn setup_message_listener(mut commands: Commands) {
    use std::sync::{Arc, Mutex};

    let message_queue: Arc<Mutex<Vec<String>>> = Arc::new(Mutex::new(Vec::new()));
    let queue_clone = message_queue.clone();

    let closure = Closure::wrap(Box::new(move |event: MessageEvent| {
        if let Ok(data) = event.data().dyn_into::<js_sys::JsString>() {
            let message_str: String = data.into();

            // Cheap filter; full parsing happens on the ECS side.
            if message_str.contains("jsonrpc") {
                if let Ok(mut queue) = queue_clone.lock() {
                    queue.push(message_str);
                }
            }
        }
    }) as Box<dyn FnMut(MessageEvent)>);

    match window() {
        Some(window) => {
            if let Err(e) = window
                .add_event_listener_with_callback("message", closure.as_ref().unchecked_ref())
            {
                error!("Failed to register message listener: {:?}", e);
                return;
            }
        }
        None => {
            warn!("No window, host messages disabled");
            return;
        }
    }

    // The listener lives as long as the page.
    closure.forget();
    commands.insert_resource(MessageQueue(message_queue));
}

/// Message queue shared with the browser `message` listener.
#[derive(Resource)]
struct MessageQueue(std::sync::Arc<std::sync::Mutex<Vec<String>>>);

#[derive(Event)]
struct IncomingRpcMessage {
    content: String,
}

fn process_incoming_messages(
    message_queue: Option<Res<MessageQueue>>,
    mut message_events: EventWriter<IncomingRpcMessage>,
) {
    let Some(queue_res) = message_queue else {
        return;
    };

    let messages = if let Ok(mut queue) = queue_res.0.lock() {
        std::mem::take(&mut *queue)
    } else {
        Vec::new()
    };

    for message_str in messages {
        message_events.write(IncomingRpcMessage {
            content: message_str,
        });
    }
}

fn handle_rpc_messages(
    mut events: EventReader<IncomingRpcMessage>,
    diagnostics: Option<Res<DiagnosticsStore>>,
    mode: Res<ViewportMode>,
    config: Res<ActiveSceneConfig>,
    progress: Res<LoadingProgress>,
    state: Res<State<AppState>>,
    signal: Res<ViewportSignal>,
    mut rpc_interface: ResMut<WebRpcInterface>,
    mut unmount: EventWriter<UnmountCanvas>,
) {
    let fps = diagnostics
        .as_deref()
        .and_then(smoothed_fps)
        .unwrap_or(0.0) as f32;

    for event in events.read() {
        let request = match serde_json::from_str::<RpcRequest>(&event.content) {
            Ok(request) => request,
            Err(parse_error) => {
                warn!("Dropping malformed RPC message: {}", parse_error);
                rpc_interface.send_notification(
                    "debug_message",
                    serde_json::json!({
                        "message": format!("Parse error: {}", parse_error)
                    }),
                );
                continue;
            }
        };

        let context = RpcContext {
            mode: *mode,
            config: &config.0,
            progress: &progress,
            fps,
            unmounted: *state.get() == AppState::Unmounted,
        };
        let outcome = handle_rpc_request(&request, &context);

        match outcome.action {
            Some(RpcAction::SetViewportWidth(width)) => {
                signal.push(ViewportSample::Width(width));
            }
            Some(RpcAction::Unmount) => {
                unmount.write(UnmountCanvas);
            }
            None => {}
        }

        if let Some(response) = outcome.response {
            rpc_interface.queue_response(response);
        }
    }
}

/// Dispatch one request. Requests without an id still run their action but
/// never produce a response.
pub fn handle_rpc_request(request: &RpcRequest, context: &RpcContext) -> RpcOutcome {
    if request.jsonrpc != JSONRPC_VERSION {
        return RpcOutcome {
            response: request.id.clone().map(|id| {
                create_error_response(
                    id,
                    -32600,
                    "Invalid request",
                    Some(serde_json::json!({"jsonrpc": request.jsonrpc})),
                )
            }),
            action: None,
        };
    }

    let (result, action) = match request.method.as_str() {
        "get_viewport_mode" => (handle_get_viewport_mode(context.mode), None),
        "get_scene_config" => (Ok(context.config.to_json()), None),
        "get_loading_progress" => (Ok(context.progress.to_json()), None),
        "get_fps" => (Ok(serde_json::json!({ "fps": context.fps })), None),
        "set_viewport_width" if context.unmounted => (
            Err(RpcError {
                code: -32603,
                message: "Canvas is unmounted".to_string(),
                data: None,
            }),
            None,
        ),
        "set_viewport_width" => match parse_viewport_width(&request.params) {
            Ok(width) => (
                Ok(serde_json::json!({
                    "accepted": true,
                    "mode": ViewportMode::from_width(width).label(),
                })),
                Some(RpcAction::SetViewportWidth(width)),
            ),
            Err(error) => (Err(error), None),
        },
        "unmount_canvas" => (
            Ok(serde_json::json!({ "success": true })),
            Some(RpcAction::Unmount),
        ),
        _ => {
            warn!("Unknown RPC method: {}", request.method);
            (
                Err(RpcError {
                    code: -32601,
                    message: "Method not found".to_string(),
                    data: Some(serde_json::json!({"method": request.method})),
                }),
                None,
            )
        }
    };

    let response = request.id.clone().map(|id| match result {
        Ok(result_value) => RpcResponse {
            jsonrpc: JSONRPC_VERSION.to_string(),
            result: Some(result_value),
            error: None,
            id: Some(id),
        },
        Err(error) => RpcResponse {
            jsonrpc: JSONRPC_VERSION.to_string(),
            result: None,
            error: Some(error),
            id: Some(id),
        },
    });

    RpcOutcome { response, action }
}

fn handle_get_viewport_mode(mode: ViewportMode) -> Result<serde_json::Value, RpcError> {
    Ok(serde_json::json!({
        "mode": mode.label(),
        "is_mobile": mode.is_mobile,
    }))
}

fn parse_viewport_width(params: &serde_json::Value) -> Result<f32, RpcError> {
    #[derive(serde::Deserialize)]
    struct ViewportWidthParams {
        width: f32,
    }

    let parsed = serde_json::from_value::<ViewportWidthParams>(params.clone())
        .map_err(|_| RpcError::invalid_params("Expected numeric 'width' parameter"))?;

    if !parsed.width.is_finite() || parsed.width <= 0.0 {
        return Err(RpcError::invalid_params(&format!(
            "Width must be positive, got {}",
            parsed.width
        )));
    }

    Ok(parsed.width)
}

fn create_error_response(
    id: serde_json::Value,
    code: i32,
    message: &str,
    data: Option<serde_json::Value>,
) -> RpcResponse {
    RpcResponse {
        jsonrpc: JSONRPC_VERSION.to_string(),
        result: None,
        error: Some(RpcError {
            code,
            message: message.to_string(),
            data,
        }),
        id: Some(id),
    }
}

/// Send queued notifications and responses to the host page.
fn send_outgoing_messages(mut rpc_interface: ResMut<WebRpcInterface>) {
    for notification in rpc_interface.outgoing_notifications.drain(..) {
        send_message_to_parent(&notification);
    }

    for response in rpc_interface.outgoing_responses.drain(..) {
        send_message_to_parent(&response);
    }
}

fn send_message_to_parent<T: Serialize>(message: &T) {
    #[cfg(target_arch = "wasm32")]
    {
        match serde_json::to_string(message) {
            Ok(json) => {
                if let Some(window) = window() {
                    if let Some(parent) = window.parent().ok().flatten() {
                        if let Err(e) = parent.post_message(&JsValue::from_str(&json), "*") {
                            error!("Failed to send message to parent: {:?}", e);
                        }
                    } else {
                        warn!("No parent window available for message transmission");
                    }
                } else {
                    error!("Window object not available");
                }
            }
            Err(e) => {
                error!("Failed to serialize message: {}", e);
            }
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = message;
    }
}

impl RpcError {
    pub fn invalid_params(message: &str) -> Self {
        Self {
            code: -32602,
            message: message.to_string(),
            data: None,
        }
    }
}
