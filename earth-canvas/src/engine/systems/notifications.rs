use bevy::prelude::*;

use crate::engine::loading::progress::LoadingProgress;
use crate::engine::scene::config::SceneConfig;
use crate::engine::viewport::mode::ViewportModeChanged;
use crate::rpc::web_rpc::WebRpcInterface;

pub fn notify_viewport_mode_changes(
    mut events: EventReader<ViewportModeChanged>,
    mut rpc_interface: ResMut<WebRpcInterface>,
) {
    for event in events.read() {
        rpc_interface.send_notification(
            "viewport_mode_changed",
            SceneConfig::for_mode(event.mode).to_json(),
        );
    }
}

pub fn notify_loading_progress(
    progress: Res<LoadingProgress>,
    mut rpc_interface: ResMut<WebRpcInterface>,
    mut failure_reported: Local<bool>,
) {
    if !progress.is_changed() {
        return;
    }

    rpc_interface.send_notification("loading_progress", progress.to_json());

    if let Some(reason) = &progress.failure {
        if !*failure_reported {
            rpc_interface.send_notification(
                "loading_failed",
                serde_json::json!({ "error": reason }),
            );
            *failure_reported = true;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::viewport::mode::ViewportMode;

    #[test]
    fn mode_change_is_forwarded_to_host() {
        let mut app = App::new();
        app.init_resource::<WebRpcInterface>()
            .add_event::<ViewportModeChanged>()
            .add_systems(Update, notify_viewport_mode_changes);

        app.world_mut().send_event(ViewportModeChanged {
            mode: ViewportMode::MOBILE,
        });
        app.update();

        let rpc = app.world().resource::<WebRpcInterface>();
        let sent = rpc.pending_notifications();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].method, "viewport_mode_changed");
        assert_eq!(sent[0].params["is_mobile"], true);
    }

    #[test]
    fn failure_is_reported_once() {
        let mut app = App::new();
        app.init_resource::<WebRpcInterface>()
            .init_resource::<LoadingProgress>()
            .add_systems(Update, notify_loading_progress);

        app.world_mut().resource_mut::<LoadingProgress>().failure = Some("404".to_string());
        app.update();
        app.world_mut().resource_mut::<LoadingProgress>().manifest_resolved = true;
        app.update();

        let rpc = app.world().resource::<WebRpcInterface>();
        let failures = rpc
            .pending_notifications()
            .iter()
            .filter(|n| n.method == "loading_failed")
            .count();
        assert_eq!(failures, 1);
    }
}
