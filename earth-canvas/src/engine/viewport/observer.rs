use bevy::prelude::*;

use crate::engine::viewport::mode::ViewportSignal;
#[cfg(not(target_arch = "wasm32"))]
use crate::engine::viewport::mode::ViewportSample;
#[cfg(not(target_arch = "wasm32"))]
use bevy::window::{PrimaryWindow, WindowResized};

#[cfg(target_arch = "wasm32")]
pub use web::MediaQuerySubscription;

/// Take the first viewport reading and subscribe to later changes.
/// If the viewport cannot be observed the canvas stays in desktop mode.
pub fn start_viewport_observer(world: &mut World) {
    let signal = world.resource::<ViewportSignal>().clone();

    #[cfg(target_arch = "wasm32")]
    {
        use constants::viewport::MOBILE_MEDIA_QUERY;

        match MediaQuerySubscription::subscribe(MOBILE_MEDIA_QUERY, signal) {
            Ok(subscription) => {
                info!("✓ Observing viewport via {}", MOBILE_MEDIA_QUERY);
                world.insert_non_send_resource(subscription);
            }
            Err(e) => warn!("Viewport observer unavailable, keeping desktop mode: {e}"),
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        let mut windows = world.query_filtered::<&Window, With<PrimaryWindow>>();
        match windows.single(world) {
            Ok(window) => signal.push(ViewportSample::Width(device_logical_width(window))),
            Err(_) => warn!("No primary window, keeping desktop mode"),
        }
    }
}

/// Drop the viewport subscription, removing any browser listener.
pub fn release_viewport_observer(world: &mut World) {
    #[cfg(target_arch = "wasm32")]
    {
        if world
            .remove_non_send_resource::<MediaQuerySubscription>()
            .is_some()
        {
            info!("Viewport observer released");
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = world;
    }
}

/// Width in the device's own logical pixels. `Window::width()` divides by the
/// pixel ratio override, which would move the breakpoint once it is clamped.
#[cfg(not(target_arch = "wasm32"))]
pub fn device_logical_width(window: &Window) -> f32 {
    window.resolution.physical_width() as f32 / window.resolution.base_scale_factor()
}

#[cfg(not(target_arch = "wasm32"))]
pub fn observe_window_resize(
    mut resized: EventReader<WindowResized>,
    primary: Query<(Entity, &Window), With<PrimaryWindow>>,
    signal: Res<ViewportSignal>,
) {
    let Ok((primary, window)) = primary.single() else {
        resized.clear();
        return;
    };

    let primary_resized = resized.read().filter(|event| event.window == primary).count() > 0;
    if primary_resized {
        signal.push(ViewportSample::Width(device_logical_width(window)));
    }
}

#[cfg(target_arch = "wasm32")]
mod web {
    use wasm_bindgen::JsCast;
    use wasm_bindgen::prelude::*;
    use web_sys::{MediaQueryList, MediaQueryListEvent};

    use crate::engine::viewport::mode::{ViewportSample, ViewportSignal};
    use crate::error::CanvasError;

    /// Live `change` listener on a `MediaQueryList`. Dropping it removes the
    /// listener, so a remounted canvas never sees a stale callback.
    pub struct MediaQuerySubscription {
        query_list: MediaQueryList,
        listener: Closure<dyn FnMut(MediaQueryListEvent)>,
    }

    impl MediaQuerySubscription {
        pub fn subscribe(query: &str, signal: ViewportSignal) -> Result<Self, CanvasError> {
            let window = web_sys::window().ok_or(CanvasError::NoWindow)?;
            let query_list = window
                .match_media(query)
                .map_err(|e| CanvasError::MediaQuery {
                    query: query.to_string(),
                    reason: format!("{e:?}"),
                })?
                .ok_or_else(|| CanvasError::MediaQuery {
                    query: query.to_string(),
                    reason: "matchMedia returned null".to_string(),
                })?;

            signal.push(ViewportSample::MediaMatch(query_list.matches()));

            let listener = Closure::<dyn FnMut(MediaQueryListEvent)>::new(
                move |event: MediaQueryListEvent| {
                    signal.push(ViewportSample::MediaMatch(event.matches()));
                },
            );

            query_list
                .add_event_listener_with_callback("change", listener.as_ref().unchecked_ref())
                .map_err(|e| CanvasError::Listener(format!("{e:?}")))?;

            Ok(Self {
                query_list,
                listener,
            })
        }
    }

    impl Drop for MediaQuerySubscription {
        fn drop(&mut self) {
            if let Err(e) = self.query_list.remove_event_listener_with_callback(
                "change",
                self.listener.as_ref().unchecked_ref(),
            ) {
                bevy::log::warn!("Failed to remove viewport listener: {:?}", e);
            }
        }
    }
}
