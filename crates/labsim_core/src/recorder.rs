//! Data recorder
//!
//! Accumulates timestamped (x, y) observations for one lab session. The
//! list is kept fully sorted by ascending `x`: every insert re-sorts the
//! whole thing rather than splicing the new point in. O(n log n) per
//! insert, which is fine at human-paced point counts.

use jiff::Timestamp;

use crate::model::{DataPoint, PointSource};

/// Recorded observations for one session, sorted ascending by `x`.
///
/// The recorder trusts its input: numeric validation (unparsable manual
/// entry, NaN checks) happens upstream before `record` is called.
#[derive(Debug, Clone, Default)]
pub struct DataRecorder {
    points: Vec<DataPoint>,
}

impl DataRecorder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an observation and re-sort the full list by `x`.
    ///
    /// Points with equal `x` keep an arbitrary relative order (the sort is
    /// unstable), matching the contract that ties are unordered.
    pub fn record(&mut self, x: f64, y: f64, timestamp: Timestamp, source: PointSource) {
        self.points.push(DataPoint {
            x,
            y,
            timestamp,
            source,
        });
        self.points.sort_unstable_by(|a, b| a.x.total_cmp(&b.x));
    }

    /// Drop every recorded point. Points are never deleted individually.
    pub fn clear(&mut self) {
        self.points.clear();
    }

    #[must_use]
    pub fn points(&self) -> &[DataPoint] {
        &self.points
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ts() -> Timestamp {
        Timestamp::UNIX_EPOCH
    }

    fn xs(recorder: &DataRecorder) -> Vec<f64> {
        recorder.points().iter().map(|p| p.x).collect()
    }

    #[test]
    fn test_points_stay_sorted_by_x() {
        let mut recorder = DataRecorder::new();
        for x in [0.4, 0.1, 0.9, 0.2, 0.6] {
            recorder.record(x, x * 2.0, ts(), PointSource::Manual);
            // Invariant holds after every record, not just at the end.
            let xs = xs(&recorder);
            assert!(
                xs.windows(2).all(|w| w[0] <= w[1]),
                "points out of order after recording x={x}: {xs:?}"
            );
        }
        assert_eq!(xs(&recorder), vec![0.1, 0.2, 0.4, 0.6, 0.9]);
    }

    #[test]
    fn test_equal_x_keeps_both_points() {
        let mut recorder = DataRecorder::new();
        recorder.record(0.1, 2.5, ts(), PointSource::Manual);
        recorder.record(0.1, 1.0, ts(), PointSource::Auto);

        assert_eq!(recorder.len(), 2);
        let ys: Vec<f64> = recorder.points().iter().map(|p| p.y).collect();
        assert!(ys.contains(&2.5) && ys.contains(&1.0));
    }

    #[test]
    fn test_clear_empties_the_list() {
        let mut recorder = DataRecorder::new();
        recorder.record(1.0, 1.0, ts(), PointSource::Auto);
        recorder.clear();
        assert!(recorder.is_empty());
        assert_eq!(recorder.len(), 0);
    }
}
