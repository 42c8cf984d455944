use std::sync::{Arc, Mutex};

use bevy::prelude::*;
use constants::viewport::MOBILE_BREAKPOINT_PX;

/// Mobile/desktop classification of the viewport. Every camera, orbit and
/// model parameter is derived from this one flag.
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct ViewportMode {
    pub is_mobile: bool,
}

impl ViewportMode {
    pub const MOBILE: Self = Self { is_mobile: true };
    pub const DESKTOP: Self = Self { is_mobile: false };

    pub fn from_width(width: f32) -> Self {
        Self {
            is_mobile: width <= MOBILE_BREAKPOINT_PX,
        }
    }

    pub fn label(&self) -> &'static str {
        if self.is_mobile { "mobile" } else { "desktop" }
    }
}

/// One observation of the viewport.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ViewportSample {
    /// Logical width in pixels, from a window resize or the host.
    Width(f32),
    /// Result of the mobile media query.
    MediaMatch(bool),
}

impl ViewportSample {
    pub fn mode(self) -> ViewportMode {
        match self {
            ViewportSample::Width(width) => ViewportMode::from_width(width),
            ViewportSample::MediaMatch(matches) => ViewportMode { is_mobile: matches },
        }
    }
}

/// Thread-safe sample queue shared with browser callbacks.
#[derive(Resource, Clone, Default)]
pub struct ViewportSignal(Arc<Mutex<Vec<ViewportSample>>>);

impl ViewportSignal {
    pub fn push(&self, sample: ViewportSample) {
        if let Ok(mut queue) = self.0.lock() {
            queue.push(sample);
        }
    }

    pub fn drain(&self) -> Vec<ViewportSample> {
        match self.0.lock() {
            Ok(mut queue) => std::mem::take(&mut *queue),
            Err(_) => Vec::new(),
        }
    }
}

/// Sent only when the mobile flag actually flips.
#[derive(Event, Debug, Clone, Copy, PartialEq)]
pub struct ViewportModeChanged {
    pub mode: ViewportMode,
}

/// Reduce this frame's samples into `ViewportMode`. The last sample wins;
/// the resource is only touched when the flag changes.
pub fn apply_viewport_samples(
    signal: Res<ViewportSignal>,
    mut mode: ResMut<ViewportMode>,
    mut changed: EventWriter<ViewportModeChanged>,
) {
    let Some(latest) = signal.drain().pop() else {
        return;
    };

    let next = latest.mode();
    if mode.set_if_neq(next) {
        info!("Viewport mode: {}", next.label());
        changed.write(ViewportModeChanged { mode: next });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn breakpoint_is_inclusive() {
        assert!(ViewportMode::from_width(400.0).is_mobile);
        assert!(ViewportMode::from_width(500.0).is_mobile);
        assert!(!ViewportMode::from_width(500.5).is_mobile);
        assert!(!ViewportMode::from_width(1200.0).is_mobile);
    }

    #[test]
    fn default_mode_is_desktop() {
        assert_eq!(ViewportMode::default(), ViewportMode::DESKTOP);
    }

    #[test]
    fn signal_drains_in_order() {
        let signal = ViewportSignal::default();
        signal.push(ViewportSample::Width(1200.0));
        signal.push(ViewportSample::MediaMatch(true));
        let drained = signal.drain();
        assert_eq!(
            drained,
            vec![
                ViewportSample::Width(1200.0),
                ViewportSample::MediaMatch(true)
            ]
        );
        assert!(signal.drain().is_empty());
    }

    #[test]
    fn last_sample_wins_and_emits_once() {
        let mut app = App::new();
        app.init_resource::<ViewportMode>()
            .init_resource::<ViewportSignal>()
            .add_event::<ViewportModeChanged>()
            .add_systems(Update, apply_viewport_samples);

        let signal = app.world().resource::<ViewportSignal>().clone();
        signal.push(ViewportSample::Width(1200.0));
        signal.push(ViewportSample::Width(300.0));
        app.update();

        assert_eq!(*app.world().resource::<ViewportMode>(), ViewportMode::MOBILE);
        let events = app.world().resource::<Events<ViewportModeChanged>>();
        let mut cursor = events.get_cursor();
        let sent: Vec<_> = cursor.read(events).copied().collect();
        assert_eq!(
            sent,
            vec![ViewportModeChanged {
                mode: ViewportMode::MOBILE
            }]
        );
    }

    #[test]
    fn unchanged_flag_sends_nothing() {
        let mut app = App::new();
        app.init_resource::<ViewportMode>()
            .init_resource::<ViewportSignal>()
            .add_event::<ViewportModeChanged>()
            .add_systems(Update, apply_viewport_samples);

        let signal = app.world().resource::<ViewportSignal>().clone();
        signal.push(ViewportSample::MediaMatch(false));
        app.update();

        let events = app.world().resource::<Events<ViewportModeChanged>>();
        assert!(events.is_empty());
    }
}
