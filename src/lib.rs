//! A plain Bloom filter stored as 64-bit words.
//!
//! Each element is hashed once with a 64-bit hash (XXH64 by default, see the Cargo features).
//! The first probe is the byte-reversed hash; every further probe rehashes an 8-byte
//! little-endian counter seeded with that hash.
//!
//! ```
//! use bloomset::BloomFilter;
//!
//! let mut filter = BloomFilter::with_estimates(1000, 0.01);
//! filter.add_all(["apple", "banana"].iter());
//!
//! assert!(filter.contains("apple"));
//! assert!(filter.contains_all(["apple", "banana"].iter()));
//! ```

pub mod bits;
pub mod builder;
pub mod error;
pub mod estimate;
pub mod filter;
pub mod hashing;

pub use builder::{FilterBuilder, Sizing};
pub use error::{FilterError, Result};
pub use estimate::{estimate, try_estimate};
pub use filter::BloomFilter;
