//! Viewport observation and mobile/desktop classification.
//!
//! The browser build follows a `matchMedia` query; native builds follow the
//! primary window's logical width. Both feed the same sample queue, which is
//! reduced once per frame into the shared `ViewportMode` flag.

use bevy::prelude::*;

use crate::engine::core::app_state::{AppState, CanvasSet};

/// Viewport mode resource, sample queue and the per-frame reducer.
pub mod mode;

/// Platform observers that push viewport samples and release them on unmount.
pub mod observer;

use mode::{ViewportMode, ViewportModeChanged, ViewportSignal, apply_viewport_samples};
use observer::start_viewport_observer;

pub struct ViewportPlugin;

impl Plugin for ViewportPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ViewportMode>()
            .init_resource::<ViewportSignal>()
            .add_event::<ViewportModeChanged>()
            .add_systems(Startup, start_viewport_observer)
            .add_systems(
                Update,
                apply_viewport_samples
                    .in_set(CanvasSet::Observe)
                    .run_if(not(in_state(AppState::Unmounted))),
            );

        #[cfg(not(target_arch = "wasm32"))]
        app.add_systems(
            Update,
            observer::observe_window_resize
                .in_set(CanvasSet::Observe)
                .before(apply_viewport_samples)
                .run_if(not(in_state(AppState::Unmounted))),
        );
    }
}
