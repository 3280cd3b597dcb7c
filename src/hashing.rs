#[cfg(all(feature = "xxh64", feature = "xxh3"))]
compile_error!("Please choose one hash function to use: xxh64 or xxh3.");
#[cfg(all(feature = "xxh64", feature = "blake3"))]
compile_error!("Please choose one hash function to use: xxh64 or blake3.");
#[cfg(all(feature = "xxh64", feature = "shake128"))]
compile_error!("Please choose one hash function to use: xxh64 or shake128.");
#[cfg(all(feature = "xxh3", feature = "blake3"))]
compile_error!("Please choose one hash function to use: xxh3 or blake3.");
#[cfg(all(feature = "xxh3", feature = "shake128"))]
compile_error!("Please choose one hash function to use: xxh3 or shake128.");
#[cfg(all(feature = "blake3", feature = "shake128"))]
compile_error!("Please choose one hash function to use: blake3 or shake128.");
#[cfg(not(any(
    feature = "xxh64",
    feature = "xxh3",
    feature = "blake3",
    feature = "shake128"
)))]
compile_error!("Please enable one hash function: xxh64, xxh3, blake3 or shake128.");

/// XXH64 with seed 0. Indices match filters built by other XXH64-based implementations running on
/// little-endian hosts.
#[cfg(feature = "xxh64")]
pub fn hash64(bytes: &[u8]) -> u64 {
    xxhash_rust::xxh64::xxh64(bytes, 0)
}

#[cfg(feature = "xxh3")]
pub fn hash64(bytes: &[u8]) -> u64 {
    xxh3::hash64_with_seed(bytes, 0)
}

#[cfg(feature = "blake3")]
pub fn hash64(bytes: &[u8]) -> u64 {
    let mut hasher = blake3::Hasher::new();
    hasher.update(bytes);
    let mut reader = hasher.finalize_xof();
    let mut res = [0u8; 8];
    reader.fill(&mut res);

    u64::from_le_bytes(res)
}

#[cfg(feature = "shake128")]
use sha3::{
    digest::{ExtendableOutput, Update, XofReader},
    Shake128,
};
#[cfg(feature = "shake128")]
pub fn hash64(bytes: &[u8]) -> u64 {
    let mut hasher = Shake128::default();
    hasher.update(bytes);
    let mut reader = hasher.finalize_xof();
    let mut res = [0u8; 8];
    reader.read(&mut res);

    u64::from_le_bytes(res)
}

/// Reverses the byte order of `value`; used for the first probe instead of a second hash.
#[inline]
pub fn reverse_bytes(value: u64) -> u64 {
    value.swap_bytes()
}

/// Counter layout fed back into [`hash64`]. Always little-endian, whatever the host.
#[inline]
pub fn encode_counter(counter: u64) -> [u8; 8] {
    counter.to_le_bytes()
}

/// Probe values for one element.
///
/// The element is hashed once to `base`. Probe 0 is `reverse_bytes(base)`, probe `i > 0` is
/// `hash64(encode_counter(base + i))` with wrapping addition. Only the 8-byte counter is rehashed,
/// so the cost of a long element is paid a single time.
#[derive(Debug, Clone)]
pub struct Probes {
    base: u64,
    counter: u64,
    next: u64,
    count: u64,
}

impl Probes {
    pub fn new(bytes: &[u8], count: u64) -> Self {
        let base = hash64(bytes);

        Probes {
            base,
            counter: base,
            next: 0,
            count,
        }
    }

    pub fn base(&self) -> u64 {
        self.base
    }
}

impl Iterator for Probes {
    type Item = u64;

    fn next(&mut self) -> Option<u64> {
        if self.next >= self.count {
            return None;
        }

        let value = if self.next == 0 {
            reverse_bytes(self.counter)
        } else {
            hash64(&encode_counter(self.counter))
        };
        self.counter = self.counter.wrapping_add(1);
        self.next += 1;

        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.count - self.next) as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Probes {}

/// Bit indices in `0..bit_len` touched by `bytes`.
pub fn probe_indices(bytes: &[u8], probe_count: u64, bit_len: u64) -> impl Iterator<Item = u64> {
    Probes::new(bytes, probe_count).map(move |h| h % bit_len)
}

#[cfg(test)]
mod tests {
    use crate::hashing::{encode_counter, hash64, probe_indices, reverse_bytes, Probes};

    #[test]
    fn test_reverse_bytes() {
        assert_eq!(reverse_bytes(0x0102_0304_0506_0708), 0x0807_0605_0403_0201);
        assert_eq!(reverse_bytes(reverse_bytes(0xdead_beef)), 0xdead_beef);
    }

    #[test]
    fn test_encode_counter_is_little_endian() {
        assert_eq!(encode_counter(0x0102_0304_0506_0708), [8, 7, 6, 5, 4, 3, 2, 1]);
        assert_eq!(encode_counter(1), [1, 0, 0, 0, 0, 0, 0, 0]);
    }

    #[cfg(feature = "xxh64")]
    #[test]
    fn test_xxh64_known_values() {
        assert_eq!(hash64(b""), 0xef46_db37_51d8_e999);
        assert_eq!(hash64(b"abc"), 0x44bc_2cf5_ad77_0999);
        assert_eq!(Probes::new(b"", 1).next(), Some(0x99e9_d851_37db_46ef));
    }

    #[test]
    fn test_probe_sequence() {
        let base = hash64(b"element");
        let probes: Vec<u64> = Probes::new(b"element", 4).collect();

        assert_eq!(
            probes,
            vec![
                reverse_bytes(base),
                hash64(&encode_counter(base.wrapping_add(1))),
                hash64(&encode_counter(base.wrapping_add(2))),
                hash64(&encode_counter(base.wrapping_add(3))),
            ]
        );
    }

    #[test]
    fn test_probes_are_deterministic() {
        let first: Vec<u64> = Probes::new(b"hello", 7).collect();
        let second: Vec<u64> = Probes::new(b"hello", 7).collect();

        assert_eq!(first, second);
        assert_eq!(Probes::new(b"hello", 7).len(), 7);
        assert_eq!(Probes::new(b"hello", 0).count(), 0);
    }

    #[test]
    fn test_longer_sequence_extends_shorter() {
        let short: Vec<u64> = Probes::new(b"prefix", 3).collect();
        let long: Vec<u64> = Probes::new(b"prefix", 10).collect();

        assert_eq!(&long[..3], &short[..]);
    }

    #[test]
    fn test_probe_indices_in_range() {
        for index in probe_indices(b"bounded", 32, 192) {
            assert!(index < 192);
        }
    }
}
