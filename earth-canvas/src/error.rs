#[derive(Debug, thiserror::Error)]
pub enum CanvasError {
    #[error("browser window is not available")]
    NoWindow,

    #[error("media query '{query}' could not be evaluated: {reason}")]
    MediaQuery { query: String, reason: String },

    #[error("failed to register viewport listener: {0}")]
    Listener(String),

    #[error("invalid canvas manifest: {0}")]
    Manifest(String),
}
