//! Rendering module
//!
//! `scene` is platform-independent; `canvas` draws it with Canvas2D in the browser.

pub mod scene;

#[cfg(target_arch = "wasm32")]
pub mod canvas;

pub use scene::{DrawCommand, SceneOptions};

#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasRenderer;
