pub mod assets;
pub mod camera;
pub mod core;
pub mod loading;
pub mod scene;
pub mod systems;
pub mod viewport;

#[cfg(test)]
pub(crate) mod test_support;
