//! Building and draining a few pipelines.
//!
//! Run with: `RUST_LOG=pullseq=trace cargo run --example pipeline`

use pullseq::prelude::*;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn collatz(n: &u64) -> Option<u64> {
    match *n {
        0 | 1 => None,
        n if n % 2 == 0 => Some(n / 2),
        n => Some(3 * n + 1),
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let readings = [12, -3, 40, 7, -8, 19, 33];
    let positive_sum = from_seq(&readings)
        .filter(|r| *r > 0)
        .map(|r| r * 10)
        .fold(0, |r, acc| acc + r);
    info!(positive_sum, "scaled sum of positive readings");

    let steps = from_fn(27u64, collatz).count();
    info!(steps, "collatz steps from 27");

    let labels = from_seq("abc").map(char::from).zip(repeat("row"));
    for (label, kind) in labels.into_iter() {
        info!(%label, kind, "zipped label");
    }

    let first_even_squares: Vec<u64> = from_fn(0u64, |n: &u64| Some(n + 1))
        .map(|n| n * n)
        .filter(|sq| sq % 2 == 0)
        .take(5)
        .into_iter()
        .collect();
    info!(?first_even_squares, "first even squares");
}
