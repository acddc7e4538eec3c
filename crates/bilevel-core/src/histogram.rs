//! Intensity histograms
//!
//! A [`Histogram`] has one bin per 8-bit intensity, so all 256 values
//! including 255 are counted. Absent samples of a [`Region`] are skipped,
//! which keeps `total()` equal to the region's present sample count.

use crate::{Gray, Region};

/// Number of histogram bins
pub const HISTOGRAM_BINS: usize = 256;

/// Occurrence counts per intensity
///
/// Built fresh for every region and never modified afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Histogram {
    counts: [u32; HISTOGRAM_BINS],
}

impl Histogram {
    /// Count the present samples of a region.
    ///
    /// # Example
    ///
    /// ```
    /// use bilevel_core::{Histogram, Region};
    ///
    /// let region = Region::from_samples(2, 2, vec![Some(7), None, Some(7), Some(255)]).unwrap();
    /// let hist = Histogram::from_region(&region);
    /// assert_eq!(hist.count(7), 2);
    /// assert_eq!(hist.count(255), 1);
    /// assert_eq!(hist.total(), 3);
    /// ```
    pub fn from_region(region: &Region) -> Self {
        Self::from_values(region.present())
    }

    /// Count every pixel of an image.
    pub fn from_gray(gray: &Gray) -> Self {
        Self::from_values(gray.data().iter().copied())
    }

    /// Wrap precomputed counts.
    pub fn from_counts(counts: [u32; HISTOGRAM_BINS]) -> Self {
        Histogram { counts }
    }

    fn from_values<I: Iterator<Item = u8>>(values: I) -> Self {
        let mut counts = [0u32; HISTOGRAM_BINS];
        for v in values {
            counts[v as usize] += 1;
        }
        Histogram { counts }
    }

    /// Count for intensity `value`.
    #[inline]
    pub fn count(&self, value: u8) -> u32 {
        self.counts[value as usize]
    }

    /// All bins, indexed by intensity.
    #[inline]
    pub fn counts(&self) -> &[u32; HISTOGRAM_BINS] {
        &self.counts
    }

    /// Total number of counted samples.
    pub fn total(&self) -> u64 {
        self.counts.iter().map(|&c| c as u64).sum()
    }

    /// Sum of `intensity * count` over all bins.
    pub fn weighted_sum(&self) -> u64 {
        self.counts
            .iter()
            .enumerate()
            .map(|(i, &c)| i as u64 * c as u64)
            .sum()
    }

    /// Truncated mean intensity, `None` for an empty histogram.
    pub fn mean(&self) -> Option<u8> {
        let total = self.total();
        if total == 0 {
            return None;
        }
        Some((self.weighted_sum() / total) as u8)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_matches_present_count() {
        let region = Region::from_samples(
            3,
            2,
            vec![Some(0), None, Some(255), Some(128), None, Some(128)],
        )
        .unwrap();
        let hist = Histogram::from_region(&region);
        assert_eq!(hist.total(), region.present_count() as u64);
        assert_eq!(hist.count(128), 2);
        assert_eq!(hist.count(0), 1);
        assert_eq!(hist.count(255), 1);
    }

    #[test]
    fn test_from_gray() {
        let gray = Gray::from_rows(&[[10u8, 200], [10, 200]]).unwrap();
        let hist = Histogram::from_gray(&gray);
        assert_eq!(hist.total(), 4);
        assert_eq!(hist.weighted_sum(), 420);
        assert_eq!(hist.mean(), Some(105));
    }

    #[test]
    fn test_empty() {
        let region = Region::from_samples(2, 1, vec![None, None]).unwrap();
        let hist = Histogram::from_region(&region);
        assert_eq!(hist.total(), 0);
        assert_eq!(hist.mean(), None);
    }

    #[test]
    fn test_from_counts() {
        let mut counts = [0u32; HISTOGRAM_BINS];
        counts[3] = 5;
        let hist = Histogram::from_counts(counts);
        assert_eq!(hist.total(), 5);
        assert_eq!(hist.weighted_sum(), 15);
    }
}
