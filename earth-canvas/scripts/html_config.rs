use std::env;
use std::fs;
use std::path::PathBuf;

// Trunk post-build hook: make the staged page load its bundle relative to
// wherever the host serves it, so the canvas can be embedded under any path.
fn main() {
    let staging_dir = env::var("TRUNK_STAGING_DIR").expect("TRUNK_STAGING_DIR is set by trunk");

    let staged_html_path = PathBuf::from(staging_dir).join("index.html");

    let html = fs::read_to_string(&staged_html_path).expect("staged index.html");

    let html = html
        .replace("/earth-canvas.js", "./earth-canvas.js")
        .replace("/earth-canvas_bg.wasm", "./earth-canvas_bg.wasm");

    fs::write(staged_html_path, html).expect("rewrite staged index.html");
}
