//! Sign-change detection over circular curvature sequences.

/// Rule deciding whether two consecutive values form a crossing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ZeroCrossingMode {
    /// `prev * curr < 0`: only strict sign flips count. Transitions through
    /// an exact zero are not reported.
    #[default]
    Strict,
    /// `prev * curr <= 0` with at least one value non-zero: entering or
    /// leaving an exact zero also counts.
    Inclusive,
}

impl ZeroCrossingMode {
    #[inline]
    fn is_crossing(self, prev: f64, curr: f64) -> bool {
        let product = prev * curr;
        match self {
            ZeroCrossingMode::Strict => product < 0.0,
            ZeroCrossingMode::Inclusive => product <= 0.0 && (prev != 0.0 || curr != 0.0),
        }
    }
}

/// Crossings found in one curvature sequence.
///
/// Stores the crossing indices in ascending order together with the sequence
/// length, so positions can be reported as fractions of the contour.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ZeroCrossingSet {
    indices: Vec<usize>,
    len: usize,
}

impl ZeroCrossingSet {
    /// Returns the crossing indices in ascending order.
    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    /// Returns the length of the scanned sequence.
    pub fn sequence_len(&self) -> usize {
        self.len
    }

    /// Returns the number of crossings.
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    /// Returns true when no crossing was found.
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Returns the fractional position `i / N` of every crossing, in [0, 1).
    pub fn positions(&self) -> impl Iterator<Item = f64> + '_ {
        let n = self.len as f64;
        self.indices.iter().map(move |&i| i as f64 / n)
    }

    /// Counts circular runs of crossings whose neighboring indices are at
    /// most `max_gap` apart.
    ///
    /// The gap between the last and first crossing wraps through the end of
    /// the sequence.
    pub fn cluster_count(&self, max_gap: usize) -> usize {
        let Some((&first, &last)) = self.indices.first().zip(self.indices.last()) else {
            return 0;
        };
        let breaks = self
            .indices
            .windows(2)
            .filter(|pair| pair[1] - pair[0] > max_gap)
            .count();
        if breaks == 0 {
            return 1;
        }
        let wrap_gap = first + self.len - last;
        if wrap_gap > max_gap {
            breaks + 1
        } else {
            breaks
        }
    }
}

/// Scans `values` circularly and reports every index `i` where
/// `values[i - 1]` and `values[i]` form a crossing under `mode`.
///
/// Index 0 is compared against the last value. Sequences shorter than two
/// values have no adjacent pair and yield an empty set.
pub fn detect_zero_crossings(values: &[f64], mode: ZeroCrossingMode) -> ZeroCrossingSet {
    let n = values.len();
    if n < 2 {
        return ZeroCrossingSet {
            indices: Vec::new(),
            len: n,
        };
    }
    let indices = (0..n)
        .filter(|&i| {
            let prev = values[if i == 0 { n - 1 } else { i - 1 }];
            mode.is_crossing(prev, values[i])
        })
        .collect();
    ZeroCrossingSet { indices, len: n }
}

#[cfg(test)]
mod tests {
    use super::{detect_zero_crossings, ZeroCrossingMode};

    #[test]
    fn strict_mode_reports_sign_flips_circularly() {
        let seq = [1.0, 2.0, -1.0, -3.0, 4.0, 5.0];
        let set = detect_zero_crossings(&seq, ZeroCrossingMode::Strict);
        assert_eq!(set.indices(), &[2, 4]);
        let positions: Vec<f64> = set.positions().collect();
        assert_eq!(positions, vec![2.0 / 6.0, 4.0 / 6.0]);

        // Wrap: the last value is negative, the first positive.
        let seq = [1.0, 1.0, -1.0];
        let set = detect_zero_crossings(&seq, ZeroCrossingMode::Strict);
        assert_eq!(set.indices(), &[0, 2]);
    }

    #[test]
    fn strict_mode_misses_transitions_through_zero() {
        let seq = [1.0, 0.0, -1.0, 0.0];
        assert!(detect_zero_crossings(&seq, ZeroCrossingMode::Strict).is_empty());
        let set = detect_zero_crossings(&seq, ZeroCrossingMode::Inclusive);
        assert_eq!(set.indices(), &[0, 1, 2, 3]);
    }

    #[test]
    fn inclusive_mode_ignores_zero_runs() {
        let seq = [0.0, 0.0, 0.0, 2.0, 0.0];
        let set = detect_zero_crossings(&seq, ZeroCrossingMode::Inclusive);
        assert_eq!(set.indices(), &[3, 4]);
    }

    #[test]
    fn short_sequences_have_no_crossings() {
        assert!(detect_zero_crossings(&[], ZeroCrossingMode::Strict).is_empty());
        assert!(detect_zero_crossings(&[-1.0], ZeroCrossingMode::Inclusive).is_empty());
        assert_eq!(
            detect_zero_crossings(&[-1.0, 1.0], ZeroCrossingMode::Strict).indices(),
            &[0, 1]
        );
    }

    #[test]
    fn constant_sign_has_no_crossings() {
        let seq = [0.5; 10];
        assert!(detect_zero_crossings(&seq, ZeroCrossingMode::Strict).is_empty());
        assert!(detect_zero_crossings(&seq, ZeroCrossingMode::Inclusive).is_empty());
    }

    #[test]
    fn clusters_merge_across_the_wrap() {
        let mut seq = [0.0; 100];
        for i in [0usize, 25, 50, 75] {
            seq[i] = 1.0;
        }
        let set = detect_zero_crossings(&seq, ZeroCrossingMode::Inclusive);
        assert_eq!(set.indices(), &[0, 1, 25, 26, 50, 51, 75, 76]);
        assert_eq!(set.cluster_count(1), 4);
        assert_eq!(set.cluster_count(0), 8);
        assert_eq!(set.cluster_count(30), 1);

        let mut seq = [1.0; 10];
        seq[9] = -1.0;
        let set = detect_zero_crossings(&seq, ZeroCrossingMode::Strict);
        assert_eq!(set.indices(), &[0, 9]);
        assert_eq!(set.cluster_count(1), 1);
        assert_eq!(set.cluster_count(0), 2);
    }
}
