/*
 * Debug Information Module
 *
 * This module defines the DebugInfo struct that holds the per-frame numbers
 * shown in the UI panel and the on-screen overlay:
 * - FPS (frames per second)
 * - Wall-clock frame time
 * - Seconds handed to the cars on the last tick
 * - Number of ticks simulated so far
 */

use std::time::Duration;

// Debug information to display
#[derive(Debug, Clone, Default)]
pub struct DebugInfo {
    pub fps: f32,
    pub frame_time: Duration,
    pub tick_secs: f64,
    pub ticks: u64,
    pub cars: usize,
}

impl DebugInfo {
    /// Overlay lines, top to bottom.
    pub fn lines(&self) -> [String; 4] {
        [
            format!("FPS: {:.1}", self.fps),
            format!("Frame time: {:.2} ms", self.frame_time.as_secs_f64() * 1000.0),
            format!("Tick: {:.2} ms ({} so far)", self.tick_secs * 1000.0, self.ticks),
            format!("Cars: {}", self.cars),
        ]
    }
}
