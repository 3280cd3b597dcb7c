use crate::bits::BitWords;
use crate::error::{FilterError, Result};
use crate::estimate::estimate;
use crate::hashing::probe_indices;
use tracing::{debug, trace};

/// A plain (non-counting) Bloom filter over `capacity() * 64` bits.
///
/// Elements are treated as raw bytes; no encoding is assumed for the string methods. Bits are
/// only ever set, so anything reported present stays present.
///
/// Mutation takes `&mut self` and nothing is synchronised internally. To share a filter between
/// writers, wrap it in a `Mutex` or `RwLock` (or shard the keys over several filters, each behind
/// its own lock). Concurrent readers without writers need nothing extra.
#[derive(Eq, PartialEq, Debug, Clone)]
pub struct BloomFilter {
    word_count: u64,
    probe_count: u64,
    bits: BitWords,
}

impl BloomFilter {
    /// Creates a filter of `word_count` zeroed 64-bit words probed `probe_count` times per element.
    /// Zero for either argument is raised to 1.
    pub fn new(word_count: u64, probe_count: u64) -> Self {
        let word_count = word_count.max(1);
        let probe_count = probe_count.max(1);
        debug!(word_count, probe_count, "creating bloom filter");

        BloomFilter {
            word_count,
            probe_count,
            bits: BitWords::new(word_count as usize),
        }
    }

    /// Sizes the filter with [`estimate`] and passes its bit count through as the *word* count.
    ///
    /// This keeps indices and layout identical to filters produced by existing implementations of
    /// this scheme, at the price of 64 times the memory the estimate asked for. Use
    /// [`with_bit_capacity`](Self::with_bit_capacity) or [`FilterBuilder`](crate::FilterBuilder)
    /// with [`Sizing::Exact`](crate::Sizing::Exact) for a filter of the estimated size.
    pub fn with_estimates(item_count: u64, fp_rate: f64) -> Self {
        let (m, k) = estimate(item_count, fp_rate);
        BloomFilter::new(m, k)
    }

    /// Creates a filter holding at least `bit_capacity` bits, rounded up to whole words.
    pub fn with_bit_capacity(bit_capacity: u64, probe_count: u64) -> Self {
        let word_count = bit_capacity / 64 + u64::from(bit_capacity % 64 != 0);
        BloomFilter::new(word_count, probe_count)
    }

    /// Rebuilds a filter from words previously taken from [`raw_bits`](Self::raw_bits).
    /// An empty vector becomes a single zeroed word.
    pub fn from_words(mut words: Vec<u64>, probe_count: u64) -> Self {
        if words.is_empty() {
            words.push(0);
        }
        let word_count = words.len() as u64;
        let probe_count = probe_count.max(1);
        debug!(word_count, probe_count, "restoring bloom filter from words");

        BloomFilter {
            word_count,
            probe_count,
            bits: BitWords::from_words(words),
        }
    }

    pub fn add(&mut self, element: &str) {
        self.add_bytes(element.as_bytes())
    }

    pub fn add_bytes(&mut self, element: &[u8]) {
        for index in probe_indices(element, self.probe_count, self.bits.bit_len()) {
            self.bits.set(index);
        }
    }

    pub fn add_all<I, S>(&mut self, elements: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<[u8]>,
    {
        let mut added = 0usize;
        for element in elements {
            self.add_bytes(element.as_ref());
            added += 1;
        }
        trace!(added, "added batch");
    }

    /// `false` means `element` was never added; `true` means it probably was.
    pub fn contains(&self, element: &str) -> bool {
        self.contains_bytes(element.as_bytes())
    }

    pub fn contains_bytes(&self, element: &[u8]) -> bool {
        let bits = &self.bits;
        probe_indices(element, self.probe_count, bits.bit_len()).all(|index| bits.test(index))
    }

    /// Stops at the first element that is definitely absent.
    pub fn contains_all<I, S>(&self, elements: I) -> bool
    where
        I: IntoIterator<Item = S>,
        S: AsRef<[u8]>,
    {
        let mut checked = 0usize;
        let found = elements.into_iter().all(|element| {
            checked += 1;
            self.contains_bytes(element.as_ref())
        });
        trace!(checked, found, "checked batch");

        found
    }

    /// The number of 64-bit words, not bits. See [`bit_len`](Self::bit_len).
    pub fn capacity(&self) -> u64 {
        self.word_count
    }

    pub fn probe_count(&self) -> u64 {
        self.probe_count
    }

    pub fn bit_len(&self) -> u64 {
        self.bits.bit_len()
    }

    /// The backing words, bit `i` at `words[i / 64] >> (i % 64)`.
    pub fn raw_bits(&self) -> &[u64] {
        self.bits.as_words()
    }

    pub fn into_raw_bits(self) -> Vec<u64> {
        self.bits.into_words()
    }

    /// Bit indices that `element` sets or tests, in probe order.
    pub fn probe_indices(&self, element: &[u8]) -> impl Iterator<Item = u64> {
        probe_indices(element, self.probe_count, self.bits.bit_len())
    }

    pub fn count_ones(&self) -> u64 {
        self.bits.count_ones()
    }

    pub fn fill_ratio(&self) -> f64 {
        self.count_ones() as f64 / self.bit_len() as f64
    }

    /// Chance that an unseen element is reported present, given the bits set so far.
    pub fn estimated_false_positive_rate(&self) -> f64 {
        self.fill_ratio().powf(self.probe_count as f64)
    }

    /// Adds every element of `other` to `self`. Both filters must have the same word and probe
    /// counts (the hash backend is fixed per build).
    pub fn union_with(&mut self, other: &BloomFilter) -> Result<()> {
        if self.word_count != other.word_count || self.probe_count != other.probe_count {
            return Err(FilterError::ShapeMismatch {
                left_words: self.word_count,
                left_probes: self.probe_count,
                right_words: other.word_count,
                right_probes: other.probe_count,
            });
        }
        self.bits.union_with(&other.bits);

        Ok(())
    }
}

impl<'a> Extend<&'a str> for BloomFilter {
    fn extend<T: IntoIterator<Item = &'a str>>(&mut self, iter: T) {
        self.add_all(iter)
    }
}

impl Extend<String> for BloomFilter {
    fn extend<T: IntoIterator<Item = String>>(&mut self, iter: T) {
        self.add_all(iter)
    }
}
