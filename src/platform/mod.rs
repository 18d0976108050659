//! Platform abstraction layer
//!
//! Handles browser/native differences for:
//! - Time (frame deltas)
//! - Viewport size

use crate::sim::Viewport;

/// Measures time between frames
#[derive(Debug, Clone, Default)]
pub struct FrameClock {
    last_ms: Option<f64>,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Restart timing from `now_ms` (next delta is measured from here)
    pub fn reset(&mut self, now_ms: f64) {
        self.last_ms = Some(now_ms);
    }

    /// Milliseconds since the previous call or reset. Never negative.
    pub fn delta_ms(&mut self, now_ms: f64) -> f32 {
        let delta = match self.last_ms {
            Some(last) => (now_ms - last).max(0.0) as f32,
            None => 0.0,
        };
        self.last_ms = Some(now_ms);
        delta
    }
}

/// Wall clock in milliseconds
#[cfg(target_arch = "wasm32")]
pub fn now_ms() -> f64 {
    js_sys::Date::now()
}

#[cfg(not(target_arch = "wasm32"))]
pub fn now_ms() -> f64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs_f64() * 1000.0)
        .unwrap_or(0.0)
}

/// Current window size in CSS pixels
#[cfg(target_arch = "wasm32")]
pub fn window_viewport() -> Option<Viewport> {
    let window = web_sys::window()?;
    let width = window.inner_width().ok()?.as_f64()?;
    let height = window.inner_height().ok()?.as_f64()?;
    Some(Viewport::new(width as f32, height as f32))
}

#[cfg(not(target_arch = "wasm32"))]
pub fn window_viewport() -> Option<Viewport> {
    None
}
