//! Concrete pipelines with known outputs.

use pullseq::prelude::*;

#[test]
fn test_skip_two_of_five() {
    let mut stage = from_seq([1, 2, 3, 4, 5]).skip(2);
    assert_eq!(stage.next(), Some(3));
    assert_eq!(stage.next(), Some(4));
    assert_eq!(stage.next(), Some(5));
    assert_eq!(stage.next(), None);
}

#[test]
fn test_take_two_of_five() {
    let mut stage = from_seq([1, 2, 3, 4, 5]).take(2);
    assert_eq!(stage.next(), Some(1));
    assert_eq!(stage.next(), Some(2));
    assert_eq!(stage.next(), None);
}

#[test]
fn test_zip_with_repeat() {
    let mut stage = from_seq([1, 2, 3]).zip(repeat(4));
    assert_eq!(stage.next(), Some((1, 4)));
    assert_eq!(stage.next(), Some((2, 4)));
    assert_eq!(stage.next(), Some((3, 4)));
    assert_eq!(stage.next(), None);
}

#[test]
fn test_fold_sum() {
    assert_eq!(from_seq([1, 2, 3]).fold(0, |n, acc| acc + n), 6);
}

#[test]
fn test_filter_greater_than_one() {
    let mut stage = from_seq([1, 2, 3]).filter(|n| *n > 1);
    assert_eq!(stage.next(), Some(2));
    assert_eq!(stage.next(), Some(3));
    assert_eq!(stage.next(), None);
}

#[test]
fn test_map_double() {
    let mut stage = from_seq([1, 2, 3]).map(|n| n * 2);
    assert_eq!(stage.next(), Some(2));
    assert_eq!(stage.next(), Some(4));
    assert_eq!(stage.next(), Some(6));
    assert_eq!(stage.next(), None);
}

#[test]
fn test_from_fn_stops_at_three() {
    fn step(n: &i32) -> Option<i32> {
        if *n == 3 {
            None
        } else {
            Some(n + 1)
        }
    }

    let mut stage = from_fn(0, step);
    assert_eq!(stage.next(), Some(1));
    assert_eq!(stage.next(), Some(2));
    assert_eq!(stage.next(), Some(3));
    assert_eq!(stage.next(), None);
    assert_eq!(stage.next(), None);
}

#[test]
fn test_filter_out_hundred_thousand() {
    let mut stage = from_fn(0u32, |n: &u32| if *n < 100_001 { Some(n + 1) } else { None })
        .filter(|n| *n > 100_000);
    assert_eq!(stage.next(), Some(100_001));
    assert_eq!(stage.next(), None);
}

#[test]
fn test_array_ref_and_str_sources() {
    let table = [3u8, 1, 4];
    let mut pairs = from_seq(&table).zip(from_seq("pie"));
    assert_eq!(pairs.next(), Some((3, b'p')));
    assert_eq!(pairs.next(), Some((1, b'i')));
    assert_eq!(pairs.next(), Some((4, b'e')));
    assert_eq!(pairs.next(), None);
}

#[test]
fn test_long_chain_is_lazy() {
    let mut pulled = 0;
    let mut stage = from_fn(0u64, |n: &u64| Some(n + 1))
        .map(|n| {
            pulled += 1;
            n
        })
        .filter(|n| n % 3 == 0)
        .skip(1)
        .take(2);

    assert_eq!(stage.next(), Some(6));
    assert_eq!(stage.next(), Some(9));
    assert_eq!(stage.next(), None);
    drop(stage);
    assert_eq!(pulled, 9);
}

#[test]
fn test_try_fold_reports_overflow() {
    let mut source = repeat(u8::MAX / 2).take(4);
    let result = source.try_fold(0u8, |n, acc| acc.checked_add(n).ok_or("overflow"));
    assert_eq!(result, Err("overflow"));
    assert_eq!(source.count(), 1);
}
