//! Property tests for the sources and combinators.
//!
//! Each property builds a pipeline over a slice, drains it through the std
//! iterator bridge, and compares the result against the same computation done
//! directly on the slice.

use proptest::prelude::*;
use pullseq::prelude::*;

/// Drain a producer into a `Vec`.
fn drain<P: Producer>(producer: P) -> Vec<P::Item> {
    producer.into_iter().collect()
}

proptest! {
    #[test]
    fn skip_within_len_yields_suffix(data in prop::collection::vec(any::<i32>(), 0..64), frac in 0.0f64..=1.0) {
        let n = (data.len() as f64 * frac) as usize;
        prop_assert_eq!(drain(from_seq(data.as_slice()).skip(n)), data[n..].to_vec());
    }

    #[test]
    fn skip_past_len_yields_nothing(data in prop::collection::vec(any::<i32>(), 0..64), extra in 1usize..1000) {
        let mut stage = from_seq(data.as_slice()).skip(data.len() + extra);
        prop_assert_eq!(stage.next(), None);
        prop_assert_eq!(stage.next(), None);
    }

    #[test]
    fn take_yields_prefix(data in prop::collection::vec(any::<u8>(), 0..64), n in 0usize..128) {
        let expected = data[..n.min(data.len())].to_vec();
        prop_assert_eq!(drain(from_seq(data.as_slice()).take(n)), expected);
    }

    #[test]
    fn repeat_take_yields_value_n_times(value in any::<i64>(), n in 0usize..512) {
        prop_assert_eq!(drain(repeat(value).take(n)), vec![value; n]);
    }

    #[test]
    fn once_exhausts_for_good(value in any::<u16>(), extra_calls in 10usize..50) {
        let mut stage = once(value);
        prop_assert_eq!(stage.next(), Some(value));
        for _ in 0..extra_calls {
            prop_assert_eq!(stage.next(), None);
        }
    }

    #[test]
    fn map_matches_slice_map(data in prop::collection::vec(any::<i32>(), 0..64)) {
        let f = |n: i32| n.wrapping_mul(3).wrapping_sub(7);
        let expected: Vec<i32> = data.iter().copied().map(f).collect();
        prop_assert_eq!(drain(from_seq(data.as_slice()).map(f)), expected);
    }

    #[test]
    fn filter_matches_slice_filter(data in prop::collection::vec(any::<i32>(), 0..64), modulus in 1i32..10) {
        let expected: Vec<i32> = data.iter().copied().filter(|n| n % modulus == 0).collect();
        prop_assert_eq!(drain(from_seq(data.as_slice()).filter(|n| n % modulus == 0)), expected);
    }

    #[test]
    fn zip_pairs_up_to_shorter_len(
        a in prop::collection::vec(any::<u8>(), 0..32),
        b in prop::collection::vec(any::<char>(), 0..32),
    ) {
        let expected: Vec<(u8, char)> = a.iter().copied().zip(b.iter().copied()).collect();
        let pairs = drain(from_seq(a.as_slice()).zip(from_seq(b.as_slice())));
        prop_assert_eq!(pairs.len(), a.len().min(b.len()));
        prop_assert_eq!(pairs, expected);
    }

    #[test]
    fn fold_is_left_fold(data in prop::collection::vec(any::<i64>(), 0..64), seed in any::<i64>()) {
        // non-commutative, so argument order is checked too
        let f = |x: i64, acc: i64| acc.wrapping_mul(31).wrapping_add(x);
        let expected = data.iter().fold(seed, |acc, &x| f(x, acc));
        prop_assert_eq!(from_seq(data.as_slice()).fold(seed, f), expected);
    }

    #[test]
    fn from_fn_counts_up_to_limit(limit in 0u32..200) {
        let stage = from_fn(0u32, move |n: &u32| if *n == limit { None } else { Some(n + 1) });
        prop_assert_eq!(drain(stage), (1..=limit).collect::<Vec<_>>());
    }

    #[test]
    fn str_source_yields_bytes(s in ".{0,32}") {
        prop_assert_eq!(drain(from_seq(s.as_str())), s.as_bytes().to_vec());
    }
}
