use bevy::prelude::*;

use crate::constants::render_settings::{PLACEHOLDER_FONT_SIZE, PLACEHOLDER_TEXT_COLOUR};
use crate::engine::loading::progress::LoadingProgress;

#[derive(Component)]
pub struct LoadingPlaceholder;

#[derive(Component)]
pub struct LoadingPlaceholderText;

pub fn placeholder_label(progress: &LoadingProgress) -> String {
    match &progress.failure {
        Some(_) => "Failed to load model".to_string(),
        None => format!("{}%", progress.percent()),
    }
}

pub fn spawn_loading_placeholder(mut commands: Commands) {
    let [r, g, b] = PLACEHOLDER_TEXT_COLOUR;
    commands
        .spawn((
            Node {
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                ..default()
            },
            LoadingPlaceholder,
        ))
        .with_children(|parent| {
            parent.spawn((
                Text::new(placeholder_label(&LoadingProgress::default())),
                TextFont {
                    font_size: PLACEHOLDER_FONT_SIZE,
                    ..default()
                },
                TextColor(Color::srgb(r, g, b)),
                LoadingPlaceholderText,
            ));
        });
}

pub fn update_loading_placeholder(
    progress: Res<LoadingProgress>,
    mut texts: Query<&mut Text, With<LoadingPlaceholderText>>,
) {
    if !progress.is_changed() {
        return;
    }
    for mut text in &mut texts {
        text.0 = placeholder_label(&progress);
    }
}

pub fn despawn_loading_placeholder(
    mut commands: Commands,
    placeholders: Query<Entity, With<LoadingPlaceholder>>,
) {
    for entity in &placeholders {
        commands.entity(entity).despawn();
    }
}
