//! Volume trend.

use super::mean;

/// Percent change of the mean of the latest `window` volumes against the
/// mean of the `window` volumes before them.
///
/// Reports 0 unless `2 * window` volumes are available and the earlier mean
/// is positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VolumeTrend {
    window: usize,
}

impl Default for VolumeTrend {
    fn default() -> Self {
        Self { window: 5 }
    }
}

impl VolumeTrend {
    pub fn calculate(&self, volumes: &[f64]) -> f64 {
        let len = volumes.len();
        if self.window == 0 || len < self.window * 2 {
            return 0.0;
        }

        let recent = mean(&volumes[len - self.window..]);
        let previous = mean(&volumes[len - self.window * 2..len - self.window]);

        if previous > 0.0 {
            (recent / previous - 1.0) * 100.0
        } else {
            0.0
        }
    }
}
