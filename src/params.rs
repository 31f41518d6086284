/*
 * Simulation Parameters Module
 *
 * This module defines the SimulationParams struct that holds the host-side
 * knobs of the simulation. These can be changed from the UI. It also provides
 * snapshot-based change detection so the app only reacts when something
 * actually moved, plus the frame-time policy (scaling and clamping of the
 * elapsed time handed to the cars).
 */

use tracing::warn;

use crate::physics::UpdateOrder;

// Parameters for the simulation that can be adjusted via UI
pub struct SimulationParams {
    pub update_order: UpdateOrder,
    /// Multiplier applied to wall-clock frame time.
    pub time_scale: f64,
    /// Longest tick handed to the cars, in seconds. Protects against huge
    /// jumps after the window was dragged or the process was suspended.
    pub max_frame_secs: f64,
    pub show_debug: bool,
    pub pause_simulation: bool,

    // Internal state for tracking changes
    previous_values: Option<ParamSnapshot>,
}

// A snapshot of parameter values used for change detection
#[derive(Clone, Copy, PartialEq)]
struct ParamSnapshot {
    update_order: UpdateOrder,
    time_scale: f64,
    max_frame_secs: f64,
    show_debug: bool,
    pause_simulation: bool,
}

/// What changed since the last snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ParamChanges {
    pub order_changed: bool,
    pub any_changed: bool,
}

impl Default for SimulationParams {
    fn default() -> Self {
        Self {
            update_order: UpdateOrder::Sequential,
            time_scale: 1.0,
            max_frame_secs: 0.25,
            // Debug arrows start switched on
            show_debug: true,
            pause_simulation: false,
            previous_values: None,
        }
    }
}

impl SimulationParams {
    fn snapshot(&self) -> ParamSnapshot {
        ParamSnapshot {
            update_order: self.update_order,
            time_scale: self.time_scale,
            max_frame_secs: self.max_frame_secs,
            show_debug: self.show_debug,
            pause_simulation: self.pause_simulation,
        }
    }

    // Take a snapshot of current parameter values for change detection
    pub fn take_snapshot(&mut self) {
        self.previous_values = Some(self.snapshot());
    }

    // Compare against the last snapshot. Without one, nothing has changed.
    pub fn detect_changes(&self) -> ParamChanges {
        let Some(prev) = self.previous_values else {
            return ParamChanges::default();
        };
        let current = self.snapshot();
        ParamChanges {
            order_changed: current.update_order != prev.update_order,
            any_changed: current != prev,
        }
    }

    /// Elapsed seconds to simulate for a frame that took `raw_secs` of wall time.
    pub fn frame_secs(&self, raw_secs: f64) -> f64 {
        if self.pause_simulation {
            return 0.0;
        }
        let scaled = raw_secs.max(0.0) * self.time_scale;
        if scaled > self.max_frame_secs {
            warn!(scaled, limit = self.max_frame_secs, "frame time clamped");
            return self.max_frame_secs;
        }
        scaled
    }

    // Get parameter ranges for UI sliders
    pub fn get_time_scale_range() -> std::ops::RangeInclusive<f64> {
        0.1..=4.0
    }

    pub fn get_max_frame_secs_range() -> std::ops::RangeInclusive<f64> {
        0.01..=1.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_snapshot_means_no_changes() {
        let params = SimulationParams::default();
        assert_eq!(params.detect_changes(), ParamChanges::default());
    }

    #[test]
    fn detects_order_and_other_changes() {
        let mut params = SimulationParams::default();
        params.take_snapshot();
        params.show_debug = false;
        assert_eq!(
            params.detect_changes(),
            ParamChanges { order_changed: false, any_changed: true }
        );

        params.take_snapshot();
        params.update_order = UpdateOrder::Snapshot;
        assert_eq!(
            params.detect_changes(),
            ParamChanges { order_changed: true, any_changed: true }
        );
    }

    #[test]
    fn frame_time_is_scaled_clamped_and_paused() {
        let mut params = SimulationParams::default();
        assert_eq!(params.frame_secs(0.016), 0.016);
        assert_eq!(params.frame_secs(3.0), 0.25);
        assert_eq!(params.frame_secs(-1.0), 0.0);

        params.time_scale = 2.0;
        assert_eq!(params.frame_secs(0.05), 0.1);

        params.pause_simulation = true;
        assert_eq!(params.frame_secs(0.05), 0.0);
    }
}
