/// Fixed-length bitset stored as 64-bit words. Bit `i` lives in word `i / 64` at offset `i % 64`.
#[derive(Eq, PartialEq, Debug, Clone)]
pub struct BitWords {
    words: Vec<u64>,
}

impl BitWords {
    /// Allocates `word_count` zeroed words.
    pub fn new(word_count: usize) -> Self {
        BitWords {
            words: vec![0; word_count],
        }
    }

    pub fn from_words(words: Vec<u64>) -> Self {
        BitWords { words }
    }

    pub fn word_count(&self) -> usize {
        self.words.len()
    }

    pub fn bit_len(&self) -> u64 {
        self.words.len() as u64 * 64
    }

    /// `index` must already be reduced below [`bit_len`](Self::bit_len).
    #[inline]
    pub fn set(&mut self, index: u64) {
        self.words[(index / 64) as usize] |= 1u64 << (index % 64);
    }

    #[inline]
    pub fn test(&self, index: u64) -> bool {
        self.words[(index / 64) as usize] & (1u64 << (index % 64)) != 0
    }

    pub fn as_words(&self) -> &[u64] {
        &self.words
    }

    pub fn into_words(self) -> Vec<u64> {
        self.words
    }

    pub fn count_ones(&self) -> u64 {
        self.words.iter().map(|w| w.count_ones() as u64).sum()
    }

    /// ORs `other` into `self`. Both must have the same length.
    pub fn union_with(&mut self, other: &BitWords) {
        debug_assert_eq!(self.words.len(), other.words.len());

        for (word, other_word) in self.words.iter_mut().zip(&other.words) {
            *word |= *other_word;
        }
    }
}
