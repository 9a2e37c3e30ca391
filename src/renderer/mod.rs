//! wgpu rendering module
//!
//! The scene is two filled rectangles on a cleared frame; vertices are built
//! on the CPU in `shapes` and uploaded each frame.

pub mod pipeline;
pub mod shapes;
pub mod vertex;

pub use pipeline::RenderState;
