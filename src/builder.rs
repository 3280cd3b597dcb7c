use crate::error::Result;
use crate::estimate::try_estimate;
use crate::filter::BloomFilter;
use tracing::{debug, warn};

/// How the estimated bit count is turned into storage.
#[derive(Eq, PartialEq, Debug, Clone, Copy)]
pub enum Sizing {
    /// The estimated bit count becomes the word count, as in [`BloomFilter::with_estimates`].
    Compatible,
    /// The estimated bit count is rounded up to whole words.
    Exact,
}

impl Default for Sizing {
    fn default() -> Self {
        Sizing::Compatible
    }
}

/// Validating constructor for filters sized from an expected item count and a target false
/// positive rate.
///
/// ```
/// use bloomset::{FilterBuilder, Sizing};
///
/// let filter = FilterBuilder::new()
///     .expected_items(1000)
///     .false_positive_rate(0.01)
///     .sizing(Sizing::Exact)
///     .build()
///     .unwrap();
///
/// assert_eq!(filter.capacity(), 150);
/// assert_eq!(filter.probe_count(), 7);
/// ```
#[derive(PartialEq, Debug, Clone)]
pub struct FilterBuilder {
    expected_items: u64,
    fp_rate: f64,
    sizing: Sizing,
}

impl FilterBuilder {
    pub fn new() -> Self {
        FilterBuilder {
            expected_items: 1000,
            fp_rate: 0.01,
            sizing: Sizing::default(),
        }
    }

    pub fn expected_items(mut self, expected_items: u64) -> Self {
        self.expected_items = expected_items;
        self
    }

    pub fn false_positive_rate(mut self, fp_rate: f64) -> Self {
        self.fp_rate = fp_rate;
        self
    }

    pub fn sizing(mut self, sizing: Sizing) -> Self {
        self.sizing = sizing;
        self
    }

    /// Fails when the item count is 0 or the rate is outside `(0, 1)`.
    pub fn build(&self) -> Result<BloomFilter> {
        let (m, k) = try_estimate(self.expected_items, self.fp_rate).map_err(|err| {
            warn!(%err, "rejecting bloom filter parameters");
            err
        })?;
        debug!(
            bits = m,
            probes = k,
            sizing = ?self.sizing,
            "estimated bloom filter parameters"
        );

        Ok(match self.sizing {
            Sizing::Compatible => BloomFilter::new(m, k),
            Sizing::Exact => BloomFilter::with_bit_capacity(m, k),
        })
    }
}

impl Default for FilterBuilder {
    fn default() -> Self {
        FilterBuilder::new()
    }
}
