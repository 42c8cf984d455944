// build.rs
use std::{env, fs, path::PathBuf};

/// Must match `constants::model::MODEL_PATH` and the `CanvasManifest` defaults.
const DEFAULT_MODEL_PATH: &str = "earth/scene.gltf";

fn main() {
    println!("cargo:rerun-if-changed=build.rs");

    let manifest_dir = PathBuf::from(env::var("CARGO_MANIFEST_DIR").expect("CARGO_MANIFEST_DIR"));
    let earth_dir = manifest_dir.join("assets").join("earth");
    let manifest_path = earth_dir.join("canvas.json");

    // Never clobber a hand-edited manifest.
    if manifest_path.exists() {
        return;
    }

    let manifest = serde_json::json!({
        "model_path": DEFAULT_MODEL_PATH,
        "scene_index": 0
    });
    let json_content =
        serde_json::to_string_pretty(&manifest).expect("default manifest serialises");

    fs::create_dir_all(&earth_dir).ok();
    fs::write(&manifest_path, &json_content).expect("Failed to write assets/earth/canvas.json");

    println!("cargo:warning=Generated default manifest in assets/earth/canvas.json");
}
