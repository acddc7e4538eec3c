//! Threshold selection
//!
//! Each selector maps a region (or its histogram) to one threshold `t`.
//! Binarization then sends samples `< t` to black and samples `>= t` to
//! white. All divisions truncate.
//!
//! | Selector | Input | Rule |
//! |----------|-------|------|
//! | [`fixed`] | - | caller constant |
//! | [`global_mean`] | region | mean of present samples |
//! | [`midrange`] | image | `(min + max) / 2` |
//! | [`iterative_mean`] | region | isodata, starting from a given estimate |
//! | [`otsu`] | histogram | maximum between-class variance |
//! | [`median`] | histogram | first bin whose cumulative count reaches `N / 2` |

use crate::{ThresholdError, ThresholdResult};
use bilevel_core::{Gray, Histogram, Region};
use log::trace;

/// Iterations used by the isodata selector unless told otherwise
pub const DEFAULT_ITERATIONS: u32 = 10;

/// Threshold used by the fixed method unless told otherwise
pub const DEFAULT_FIXED_THRESHOLD: u8 = 127;

/// Return the caller's threshold unchanged.
#[inline]
pub fn fixed(threshold: u8) -> u8 {
    threshold
}

/// Mean of the present samples of `region`.
///
/// # Errors
///
/// Returns [`ThresholdError::EmptyRegion`] if the region has no present
/// sample.
pub fn global_mean(region: &Region) -> ThresholdResult<u8> {
    Histogram::from_region(region)
        .mean()
        .ok_or(ThresholdError::EmptyRegion)
}

/// Midpoint of the darkest and brightest pixel of the whole image.
///
/// This is the starting estimate for [`iterative_mean`].
pub fn midrange(gray: &Gray) -> u8 {
    let (lo, hi) = gray.min_max();
    ((lo as u16 + hi as u16) / 2) as u8
}

/// Iterative mean (isodata) threshold.
///
/// Starting from `initial`, each iteration splits the present samples into
/// `g1` (`< t`) and `g2` (`>= t`) and moves `t` to the average of the two
/// group means. When a group is empty the rule degrades:
///
/// - both empty: `t / 2`
/// - one empty: half the mean of the other group
///
/// The threshold after `iterations` rounds is returned; zero iterations
/// return `initial`.
///
/// # Arguments
///
/// * `region` - Samples to split; absent samples are ignored
/// * `initial` - Starting threshold, usually [`midrange`] of the image
/// * `iterations` - Number of refinement rounds
pub fn iterative_mean(region: &Region, initial: u8, iterations: u32) -> u8 {
    let mut t = initial as u64;
    for n in 0..iterations {
        let mut count1 = 0u64;
        let mut sum1 = 0u64;
        let mut count2 = 0u64;
        let mut sum2 = 0u64;
        for v in region.present() {
            let v = v as u64;
            if v < t {
                count1 += 1;
                sum1 += v;
            } else {
                count2 += 1;
                sum2 += v;
            }
        }
        t = match (count1, count2) {
            (0, 0) => t / 2,
            (0, _) => sum2 / count2 / 2,
            (_, 0) => sum1 / count1 / 2,
            _ => (sum1 / count1 + sum2 / count2) / 2,
        };
        trace!(
            "isodata iteration {}: g1={} g2={} -> t={}",
            n, count1, count2, t
        );
    }
    t as u8
}

/// Otsu threshold: the candidate maximising the between-class variance.
///
/// For each candidate `t` the lower class holds intensities `<= t`.
/// Candidates that leave one class empty are skipped. The variance is
/// `q1 * q2 * (u1 - u2)^2` with truncated class means `u1`, `u2`; the first
/// candidate reaching the strict maximum wins, so ties resolve to the
/// smallest `t`. Returns 0 if no candidate has a positive variance
/// (empty or single-valued histograms).
pub fn otsu(hist: &Histogram) -> u8 {
    let total = hist.total();
    let sum = hist.weighted_sum();

    let mut q1 = 0u64;
    let mut sum_b = 0u64;
    let mut best = 0u128;
    let mut threshold = 0u8;

    for (t, &count) in hist.counts().iter().enumerate() {
        q1 += count as u64;
        sum_b += t as u64 * count as u64;
        if q1 == 0 || q1 == total {
            continue;
        }
        let q2 = total - q1;
        let u1 = sum_b / q1;
        let u2 = (sum - sum_b) / q2;
        let d = u1.abs_diff(u2) as u128;
        let variance = q1 as u128 * q2 as u128 * d * d;
        if variance > best {
            best = variance;
            threshold = t as u8;
        }
    }
    threshold
}

/// Median threshold: the smallest intensity whose cumulative count
/// (inclusive) reaches `N / 2`.
///
/// Returns 0 for an empty histogram.
pub fn median(hist: &Histogram) -> u8 {
    let half = hist.total() / 2;
    let mut cumulative = 0u64;
    for (i, &count) in hist.counts().iter().enumerate() {
        cumulative += count as u64;
        if cumulative >= half {
            return i as u8;
        }
    }
    // cumulative ends at total >= half, so the loop always returns
    u8::MAX
}

/// Per-region threshold strategy used by the global and tiling drivers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selector {
    /// Constant threshold
    Fixed(u8),
    /// Mean of the region
    Mean,
    /// Isodata starting from a shared estimate
    IterativeMean {
        /// Starting threshold, usually the [`midrange`] of the whole image
        initial: u8,
        /// Refinement rounds
        iterations: u32,
    },
    /// Otsu on the region's histogram
    Otsu,
    /// Median of the region's histogram
    Median,
}

impl Selector {
    /// Compute the threshold for `region`.
    ///
    /// # Errors
    ///
    /// Only [`Selector::Mean`] can fail, with
    /// [`ThresholdError::EmptyRegion`].
    pub fn select(&self, region: &Region) -> ThresholdResult<u8> {
        match *self {
            Selector::Fixed(t) => Ok(fixed(t)),
            Selector::Mean => global_mean(region),
            Selector::IterativeMean {
                initial,
                iterations,
            } => Ok(iterative_mean(region, initial, iterations)),
            Selector::Otsu => Ok(otsu(&Histogram::from_region(region))),
            Selector::Median => Ok(median(&Histogram::from_region(region))),
        }
    }

    /// Short name for log messages
    pub fn name(&self) -> &'static str {
        match self {
            Selector::Fixed(_) => "fixed",
            Selector::Mean => "mean",
            Selector::IterativeMean { .. } => "iterative-mean",
            Selector::Otsu => "otsu",
            Selector::Median => "median",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bilevel_core::HISTOGRAM_BINS;

    fn region(values: &[Option<u8>]) -> Region {
        Region::from_samples(values.len() as u32, 1, values.to_vec()).unwrap()
    }

    fn hist_with(entries: &[(usize, u32)]) -> Histogram {
        let mut counts = [0u32; HISTOGRAM_BINS];
        for &(i, c) in entries {
            counts[i] = c;
        }
        Histogram::from_counts(counts)
    }

    #[test]
    fn test_fixed() {
        assert_eq!(fixed(127), 127);
        assert_eq!(Selector::Fixed(3).select(&region(&[Some(200)])).unwrap(), 3);
    }

    #[test]
    fn test_global_mean_truncates() {
        let r = region(&[Some(10), Some(200), Some(10), Some(200)]);
        assert_eq!(global_mean(&r).unwrap(), 105);
        let r = region(&[Some(1), Some(2)]);
        assert_eq!(global_mean(&r).unwrap(), 1);
    }

    #[test]
    fn test_global_mean_skips_absent() {
        let r = region(&[Some(100), None, None, Some(50)]);
        assert_eq!(global_mean(&r).unwrap(), 75);
    }

    #[test]
    fn test_global_mean_empty() {
        let r = region(&[None, None]);
        assert!(matches!(global_mean(&r), Err(ThresholdError::EmptyRegion)));
        assert!(matches!(
            Selector::Mean.select(&r),
            Err(ThresholdError::EmptyRegion)
        ));
    }

    #[test]
    fn test_midrange() {
        let gray = Gray::from_rows(&[[20u8, 100], [255, 31]]).unwrap();
        assert_eq!(midrange(&gray), 137);
    }

    #[test]
    fn test_iterative_mean_two_groups() {
        // means 10 and 200 -> 105, stable afterwards
        let r = region(&[Some(10), Some(10), Some(200), Some(200)]);
        assert_eq!(iterative_mean(&r, 105, 10), 105);
        assert_eq!(iterative_mean(&r, 150, 1), 105);
    }

    #[test]
    fn test_iterative_mean_zero_iterations() {
        let r = region(&[Some(10), Some(200)]);
        assert_eq!(iterative_mean(&r, 42, 0), 42);
    }

    #[test]
    fn test_iterative_mean_lower_group_empty() {
        // all samples >= 128: t = mean2 / 2 = 64, then g1 stays empty
        let r = region(&[Some(128); 4]);
        assert_eq!(iterative_mean(&r, 128, 1), 64);
        assert_eq!(iterative_mean(&r, 128, 10), 64);
    }

    #[test]
    fn test_iterative_mean_upper_group_empty() {
        // all samples < 250: t = mean1 / 2 = 50, then both groups populated
        let r = region(&[Some(100); 3]);
        assert_eq!(iterative_mean(&r, 250, 1), 50);
    }

    #[test]
    fn test_iterative_mean_both_groups_empty_halves() {
        let r = region(&[None, None, None]);
        assert_eq!(iterative_mean(&r, 200, 1), 100);
        assert_eq!(iterative_mean(&r, 200, 3), 25);
    }

    #[test]
    fn test_otsu_bimodal() {
        let hist = hist_with(&[(20, 50), (30, 50), (200, 50), (210, 50)]);
        // any t in [30, 199] separates the modes; the first one wins
        assert_eq!(otsu(&hist), 30);
    }

    #[test]
    fn test_otsu_tie_keeps_smallest() {
        // symmetric histogram: splitting after 0 and after 10 score the same
        let hist = hist_with(&[(0, 10), (10, 10), (20, 10)]);
        let t = otsu(&hist);
        assert_eq!(t, 0);

        // two separated plateaus of equal variance, earliest is chosen
        let hist = hist_with(&[(50, 10), (100, 10)]);
        assert_eq!(otsu(&hist), 50);
    }

    #[test]
    fn test_otsu_degenerate() {
        assert_eq!(otsu(&hist_with(&[])), 0);
        assert_eq!(otsu(&hist_with(&[(128, 1000)])), 0);
    }

    #[test]
    fn test_otsu_counts_255() {
        let hist = hist_with(&[(0, 5), (255, 5)]);
        assert_eq!(otsu(&hist), 0);
        let hist = hist_with(&[(100, 5), (255, 5)]);
        assert_eq!(otsu(&hist), 100);
    }

    #[test]
    fn test_otsu_large_counts_do_not_overflow() {
        let hist = hist_with(&[(0, u32::MAX / 2), (255, u32::MAX / 2)]);
        assert_eq!(otsu(&hist), 0);
    }

    #[test]
    fn test_median_two_spikes() {
        let hist = hist_with(&[(50, 10), (200, 10)]);
        let t = median(&hist);
        assert_eq!(t, 50);
        // cumulative at t reaches N/2, nothing below it does
        let half = hist.total() / 2;
        let cum = |i: usize| hist.counts()[..=i].iter().map(|&c| c as u64).sum::<u64>();
        assert!(cum(t as usize) >= half);
        assert!((0..t as usize).all(|i| cum(i) < half));
    }

    #[test]
    fn test_median_odd_total() {
        let hist = hist_with(&[(10, 1), (20, 1), (30, 1)]);
        // N/2 = 1
        assert_eq!(median(&hist), 10);
        let hist = hist_with(&[(10, 1), (20, 3), (30, 1)]);
        assert_eq!(median(&hist), 20);
    }

    #[test]
    fn test_median_empty() {
        assert_eq!(median(&hist_with(&[])), 0);
    }

    #[test]
    fn test_selectors_are_pure() {
        let r = region(&[Some(3), Some(90), None, Some(250), Some(17)]);
        for sel in [
            Selector::Fixed(9),
            Selector::Mean,
            Selector::IterativeMean {
                initial: 126,
                iterations: 10,
            },
            Selector::Otsu,
            Selector::Median,
        ] {
            let a = sel.select(&r).unwrap();
            let b = sel.select(&r).unwrap();
            assert_eq!(a, b, "{} not deterministic", sel.name());
        }
    }
}
