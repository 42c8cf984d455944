use bevy::prelude::*;

#[derive(Resource, Default, Debug, Clone, PartialEq)]
pub struct LoadingProgress {
    pub manifest_resolved: bool,
    pub scene_parsed: bool,
    pub dependencies_loaded: bool,
    pub model_spawned: bool,
    pub failure: Option<String>,
}

impl LoadingProgress {
    pub fn percent(&self) -> u8 {
        let stages = [
            (self.manifest_resolved, 10),
            (self.scene_parsed, 40),
            (self.dependencies_loaded, 40),
            (self.model_spawned, 10),
        ];
        stages
            .iter()
            .filter(|(done, _)| *done)
            .map(|(_, weight)| weight)
            .sum()
    }

    pub fn stage(&self) -> &'static str {
        if self.failure.is_some() {
            "failed"
        } else if self.model_spawned {
            "ready"
        } else if self.scene_parsed {
            "loading_dependencies"
        } else if self.manifest_resolved {
            "loading_scene"
        } else {
            "loading_manifest"
        }
    }

    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "percent": self.percent(),
            "stage": self.stage(),
            "error": self.failure,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percent_tracks_stages() {
        let mut progress = LoadingProgress::default();
        assert_eq!(progress.percent(), 0);
        assert_eq!(progress.stage(), "loading_manifest");

        progress.manifest_resolved = true;
        progress.scene_parsed = true;
        assert_eq!(progress.percent(), 50);
        assert_eq!(progress.stage(), "loading_dependencies");

        progress.dependencies_loaded = true;
        progress.model_spawned = true;
        assert_eq!(progress.percent(), 100);
        assert_eq!(progress.stage(), "ready");
    }

    #[test]
    fn failure_overrides_stage() {
        let progress = LoadingProgress {
            manifest_resolved: true,
            failure: Some("404".to_string()),
            ..default()
        };
        assert_eq!(progress.stage(), "failed");
        assert_eq!(progress.to_json()["error"], "404");
    }
}
