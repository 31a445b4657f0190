//! Rolling-window chart buffer for one metric.
//!
//! Each metric panel owns a fixed-capacity window of the most recent
//! samples. The buffer maps to (value, filler) bar-height pairs that the
//! render surface draws as two-part bars, so the surface never has to do
//! the percentage math itself.

use std::collections::VecDeque;

/// Bar heights for one chart slot, expressed as percentages.
///
/// `value_pct + filler_pct == 100` for every slot. Values above the chart's
/// scale produce `value_pct > 100` and a negative filler; the buffer does
/// not clamp.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BarHeights {
    pub value_pct: f64,
    pub filler_pct: f64,
}

/// Fixed-capacity rolling window of samples, most-recent-first.
///
/// The capacity comes from the style source (bars per chart) and the scale
/// from the server-declared maximum for the metric; both are fixed at
/// construction and live for the session.
#[derive(Debug, Clone)]
pub struct RollingChart {
    capacity: usize,
    scale_max: f64,
    window: VecDeque<f64>,
}

impl RollingChart {
    /// Create an empty chart with the given slot count and scale.
    pub fn new(capacity: usize, scale_max: f64) -> Self {
        Self {
            capacity,
            scale_max,
            window: VecDeque::with_capacity(capacity),
        }
    }

    /// Insert a sample at the front, evicting the oldest when full.
    ///
    /// Existing samples keep their relative order.
    pub fn push(&mut self, sample: f64) {
        self.window.push_front(sample);
        if self.window.len() > self.capacity {
            self.window.pop_back();
        }
    }

    /// Number of samples currently in the window.
    pub fn len(&self) -> usize {
        self.window.len()
    }

    /// True if no sample has been pushed yet.
    pub fn is_empty(&self) -> bool {
        self.window.is_empty()
    }

    /// The value representing 100% bar height.
    pub fn scale_max(&self) -> f64 {
        self.scale_max
    }

    /// Slot count of the chart.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// The most recent sample, if any.
    pub fn latest(&self) -> Option<f64> {
        self.window.front().copied()
    }

    /// Bar heights for every slot, most-recent-first.
    ///
    /// Slots without a sample yet report `(0, 100)`. Filled slots report
    /// `100 * sample / scale_max` without an upper bound.
    pub fn heights(&self) -> Vec<BarHeights> {
        (0..self.capacity)
            .map(|i| {
                let value_pct = match self.window.get(i) {
                    Some(sample) => sample / self.scale_max * 100.0,
                    None => 0.0,
                };
                BarHeights {
                    value_pct,
                    filler_pct: 100.0 - value_pct,
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_len_tracks_pushes_up_to_capacity() {
        let mut chart = RollingChart::new(3, 100.0);
        assert_eq!(chart.len(), 0);
        assert!(chart.is_empty());

        chart.push(1.0);
        assert_eq!(chart.len(), 1);
        chart.push(2.0);
        assert_eq!(chart.len(), 2);
        chart.push(3.0);
        chart.push(4.0);
        chart.push(5.0);
        assert_eq!(chart.len(), 3);
    }

    #[test]
    fn test_most_recent_sample_is_first() {
        let mut chart = RollingChart::new(4, 100.0);
        chart.push(10.0);
        chart.push(20.0);
        chart.push(30.0);

        assert_eq!(chart.latest(), Some(30.0));
        let heights = chart.heights();
        assert_eq!(heights[0].value_pct, 30.0);
        assert_eq!(heights[1].value_pct, 20.0);
        assert_eq!(heights[2].value_pct, 10.0);
    }

    #[test]
    fn test_eviction_drops_oldest_first() {
        let mut chart = RollingChart::new(3, 100.0);
        for v in [1.0, 2.0, 3.0, 4.0] {
            chart.push(v);
        }

        // 1.0 was pushed first and must be gone; order preserved otherwise
        let values: Vec<f64> = chart.heights().iter().map(|h| h.value_pct).collect();
        assert_eq!(values, vec![4.0, 3.0, 2.0]);
    }

    #[test]
    fn test_heights_exact_fractions() {
        let mut chart = RollingChart::new(2, 200.0);
        chart.push(50.0);

        let heights = chart.heights();
        assert_eq!(heights[0].value_pct, 25.0);
        assert_eq!(heights[0].filler_pct, 75.0);
    }

    #[test]
    fn test_heights_do_not_clamp_above_scale() {
        let mut chart = RollingChart::new(1, 100.0);
        chart.push(120.0);

        let heights = chart.heights();
        assert_eq!(heights[0].value_pct, 120.0);
        assert_eq!(heights[0].filler_pct, -20.0);
    }

    #[test]
    fn test_heights_pairs_always_sum_to_hundred() {
        let mut chart = RollingChart::new(5, 80.0);
        for v in [0.0, 12.5, 80.0, 200.0] {
            chart.push(v);
        }

        for pair in chart.heights() {
            assert_eq!(pair.value_pct + pair.filler_pct, 100.0);
        }
    }

    #[test]
    fn test_unfilled_slots_report_zero() {
        let mut chart = RollingChart::new(4, 100.0);
        chart.push(40.0);

        let heights = chart.heights();
        assert_eq!(heights.len(), 4);
        assert_eq!(heights[1].value_pct, 0.0);
        assert_eq!(heights[1].filler_pct, 100.0);
        assert_eq!(heights[3].value_pct, 0.0);
    }
}
