/// Engine-side render settings. Viewing presets live in the shared `constants` crate.
pub mod render_settings;
