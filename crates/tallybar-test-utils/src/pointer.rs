//! Pointer path helpers for drag tests.

use glam::DVec2;

/// Points moving straight up from `start`, `step_px` apart.
pub fn upward(start: DVec2, step_px: f64, count: usize) -> Vec<DVec2> {
    (1..=count)
        .map(|i| DVec2::new(start.x, start.y - step_px * i as f64))
        .collect()
}

/// Points moving straight down from `start`, `step_px` apart.
pub fn downward(start: DVec2, step_px: f64, count: usize) -> Vec<DVec2> {
    (1..=count)
        .map(|i| DVec2::new(start.x, start.y + step_px * i as f64))
        .collect()
}
