use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum FilterError {
    #[error("expected item count must be at least 1, got {0}")]
    InvalidItemCount(u64),

    #[error("false positive rate must lie in (0, 1), got {0}")]
    FalsePositiveRateOutOfBounds(f64),

    /// Two filters can only be merged when words and probes agree.
    #[error("filter shapes differ: {left_words}x{left_probes} vs {right_words}x{right_probes}")]
    ShapeMismatch {
        left_words: u64,
        left_probes: u64,
        right_words: u64,
        right_probes: u64,
    },
}

pub type Result<T> = std::result::Result<T, FilterError>;
