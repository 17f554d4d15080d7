pub mod camera;
pub mod constants;
pub mod drift;
pub mod gaze;
pub mod model;
pub mod pointer;
pub mod scene;
pub static MODEL_WGSL: &str = include_str!("../shaders/model.wgsl");

pub use camera::*;
pub use constants::*;
pub use drift::*;
pub use gaze::*;
pub use model::*;
pub use pointer::*;
pub use scene::*;
