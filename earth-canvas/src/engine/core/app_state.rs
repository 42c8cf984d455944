use bevy::prelude::*;

use crate::engine::loading::model_loader::ModelLoader;
use crate::engine::loading::placeholder::LoadingPlaceholder;
use crate::engine::loading::progress::LoadingProgress;
use crate::engine::viewport::observer::release_viewport_observer;
use crate::engine::viewport::mode::ViewportSignal;

#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Hash, States)]
pub enum AppState {
    /// Model scene requested but not yet ready. Placeholder is visible.
    #[default]
    Loading,
    Running,
    /// Host tore the canvas down. Nothing is rendered or animated any more.
    Unmounted,
}

/// Per-frame ordering of the canvas systems inside `Update`.
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CanvasSet {
    Observe,
    Compose,
    Load,
    Animate,
}

/// Parent of every entity the canvas owns in the 3D world.
#[derive(Component)]
pub struct CanvasRoot;

#[derive(Component)]
pub struct FpsText;

/// Request from the host to tear the canvas down.
#[derive(Event, Debug, Clone, Copy, Default)]
pub struct UnmountCanvas;

pub struct CanvasLifecyclePlugin;

impl Plugin for CanvasLifecyclePlugin {
    fn build(&self, app: &mut App) {
        app.init_state::<AppState>()
            .add_event::<UnmountCanvas>()
            .configure_sets(
                Update,
                (
                    CanvasSet::Observe,
                    CanvasSet::Compose,
                    CanvasSet::Load,
                    CanvasSet::Animate,
                )
                    .chain(),
            )
            // PreUpdate so the state change lands before this frame's Update.
            .add_systems(
                PreUpdate,
                unmount_canvas.run_if(not(in_state(AppState::Unmounted))),
            );
    }
}

pub fn spawn_canvas_root(commands: &mut Commands) -> Entity {
    commands
        .spawn((
            CanvasRoot,
            Name::new("Earth canvas"),
            Transform::default(),
            Visibility::default(),
        ))
        .id()
}

/// Despawn everything the canvas owns and stop observing the viewport.
/// A pending model load is dropped and its result never reaches the world.
pub fn unmount_canvas(
    mut events: EventReader<UnmountCanvas>,
    mut commands: Commands,
    roots: Query<Entity, With<CanvasRoot>>,
    placeholders: Query<Entity, With<LoadingPlaceholder>>,
    loader: Option<ResMut<ModelLoader>>,
    signal: Option<Res<ViewportSignal>>,
    mut next_state: ResMut<NextState<AppState>>,
) {
    if events.is_empty() {
        return;
    }
    events.clear();

    for entity in roots.iter().chain(placeholders.iter()) {
        commands.entity(entity).despawn();
    }

    if let Some(mut loader) = loader {
        loader.discard();
    }
    if let Some(signal) = signal {
        signal.drain();
    }

    commands.queue(release_viewport_observer);
    next_state.set(AppState::Unmounted);
    info!("→ Canvas unmounted");
}

// Final transition once the model is in the scene.
pub fn transition_to_running(
    loading_progress: Res<LoadingProgress>,
    mut next_state: ResMut<NextState<AppState>>,
) {
    if loading_progress.model_spawned {
        info!("→ Model ready, transitioning to Running state");
        next_state.set(AppState::Running);
    }
}
