//! Payload generators.
//!
//! Payloads are printable ASCII plus newline, which makes mismatches easy to
//! read in test output and gives the codecs something compressible.

use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// The 96 characters payloads are drawn from.
pub const PRINTABLE: &[u8; 96] = b" !\"#$%&'()*+,-./\
0123456789:;<=>?\
@ABCDEFGHIJKLMNO\
PQRSTUVWXYZ[\\]^_\
`abcdefghijklmno\
pqrstuvwxyz{|}~\n";

/// Deterministic printable payload of `len` bytes.
pub fn printable_bytes(len: usize, seed: u64) -> Vec<u8> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..len)
        .map(|_| PRINTABLE[rng.gen_range(0..PRINTABLE.len())])
        .collect()
}

/// Strategy for printable payloads up to `max_len` bytes.
pub fn printable_strategy(max_len: usize) -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(prop::sample::select(PRINTABLE.to_vec()), 0..=max_len)
}

/// Strategy for arbitrary binary payloads up to `max_len` bytes.
pub fn binary_strategy(max_len: usize) -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(any::<u8>(), 0..=max_len)
}

/// Strategy for small buffer capacities that force frequent refills.
pub fn capacity_strategy() -> impl Strategy<Value = usize> {
    prop_oneof![
        3 => 1usize..16,
        2 => 16usize..256,
        1 => 256usize..4096,
    ]
}

/// Configuration for property tests.
#[derive(Debug, Clone)]
pub struct PropTestConfig {
    /// Number of test cases to run.
    pub cases: u32,
    /// Maximum shrink iterations.
    pub max_shrink_iters: u32,
}

impl PropTestConfig {
    /// Creates a configuration for quick tests.
    #[must_use]
    pub fn quick() -> Self {
        Self {
            cases: 32,
            max_shrink_iters: 100,
        }
    }

    /// Converts to proptest config.
    #[must_use]
    pub fn to_proptest_config(&self) -> ProptestConfig {
        ProptestConfig {
            cases: self.cases,
            max_shrink_iters: self.max_shrink_iters,
            ..ProptestConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn printable_table_has_no_duplicates() {
        let mut seen = PRINTABLE.to_vec();
        seen.sort_unstable();
        seen.dedup();
        assert_eq!(seen.len(), PRINTABLE.len());
    }

    #[test]
    fn printable_bytes_is_deterministic() {
        let a = printable_bytes(512, 42);
        let b = printable_bytes(512, 42);
        assert_eq!(a, b);
        assert_ne!(a, printable_bytes(512, 43));
        assert!(a.iter().all(|c| PRINTABLE.contains(c)));
    }

    proptest! {
        #![proptest_config(PropTestConfig::quick().to_proptest_config())]

        #[test]
        fn printable_strategy_stays_printable(data in printable_strategy(256)) {
            prop_assert!(data.len() <= 256);
            prop_assert!(data.iter().all(|c| PRINTABLE.contains(c)));
        }

        #[test]
        fn capacity_is_positive(cap in capacity_strategy()) {
            prop_assert!(cap >= 1);
            prop_assert!(cap < 4096);
        }
    }
}
