use std::collections::VecDeque;

use crate::models::{RollingStats, SnapshotRecord, WindowedRecord};

/// Fixed-capacity trailing window keeping a running sum and sum-of-squares,
/// so each step is O(1) instead of re-summing the whole slice.
#[derive(Debug, Clone)]
pub struct RollingWindow {
    capacity: usize,
    values: VecDeque<f64>,
    sum: f64,
    sum_sq: f64,
}

impl RollingWindow {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            values: VecDeque::with_capacity(capacity),
            sum: 0.0,
            sum_sq: 0.0,
        }
    }

    /// Push the next value; once `capacity` values are present, returns the
    /// trailing (mean, sample std) over exactly the last `capacity` values.
    pub fn push(&mut self, value: f64) -> Option<(f64, f64)> {
        if self.values.len() == self.capacity {
            if let Some(evicted) = self.values.pop_front() {
                self.sum -= evicted;
                self.sum_sq -= evicted * evicted;
            }
        }
        self.values.push_back(value);
        self.sum += value;
        self.sum_sq += value * value;

        let n = self.values.len();
        if n < self.capacity {
            return None;
        }

        let n_f = n as f64;
        let mean = self.sum / n_f;
        // Sample variance (n-1); clamp the tiny negatives cancellation can produce.
        let var = ((self.sum_sq - self.sum * self.sum / n_f) / (n_f - 1.0)).max(0.0);
        Some((mean, var.sqrt()))
    }
}

/// Augment each record with trailing statistics over `window` records.
///
/// The first `window - 1` outputs carry no statistics; every later one carries
/// all four.
pub fn add_rolling_stats(records: &[SnapshotRecord], window: usize) -> Vec<WindowedRecord> {
    let mut ltp_window = RollingWindow::new(window);
    let mut oi_window = RollingWindow::new(window);

    records
        .iter()
        .map(|record| {
            let ltp_stats = ltp_window.push(record.ltp);
            let oi_stats = oi_window.push(record.net_oi_change as f64);
            let stats = match (ltp_stats, oi_stats) {
                (Some((ltp_ma, ltp_std)), Some((net_oi_ma, net_oi_std))) => Some(RollingStats {
                    ltp_ma,
                    ltp_std,
                    net_oi_ma,
                    net_oi_std,
                }),
                _ => None,
            };
            WindowedRecord {
                base: record.clone(),
                stats,
            }
        })
        .collect()
}
