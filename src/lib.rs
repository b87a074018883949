//! # Pullseq: Lazy Pull-Based Producers
//!
//! Build pipelines of transformations over finite or infinite sources without
//! allocating intermediate storage. Nothing happens until an element is pulled.
//!
//! ## Core Trait
//!
//! - **[`Producer`]**: anything with an element type and a `next` method that
//!   returns `None` once it is exhausted
//!
//! ## Key Features
//!
//! - **Lazy**: each combinator pulls from upstream only when it is pulled itself
//! - **Chainable**: `.skip()`, `.take()`, `.map()`, `.filter()`, `.zip()` on any producer
//! - **Allocation-free**: works under `no_std` (disable the default `std` feature)
//!
//! ## Example
//!
//! ```
//! use pullseq::prelude::*;
//!
//! let total = from_seq([1, 2, 3, 4, 5])
//!     .skip(1)                  // 2, 3, 4, 5
//!     .filter(|n| n % 2 == 0)   // 2, 4
//!     .zip(repeat(10))          // (2, 10), (4, 10)
//!     .map(|(n, m)| n * m)      // 20, 40
//!     .fold(0, |n, acc| acc + n);
//! assert_eq!(total, 60);
//! ```
//!
//! ## Common Functions
//!
//! **Sources:**
//! - [`repeat(value)`](build::repeat) - Produce `value` forever
//! - [`once(value)`](build::once) - Produce `value` a single time
//! - [`from_seq(sequence)`](build::from_seq) - Produce the elements of an array, slice or string
//! - [`from_fn(initial, step)`](build::from_fn) - Produce successive states of a transition
//!
//! **Draining:**
//! - [`fold(producer, init, f)`](drive::fold) - Combine every element into one value
//! - [`try_fold(producer, init, f)`](drive::try_fold) - Same, stopping at the first error

#![cfg_attr(not(any(feature = "std", test)), no_std)]

pub mod adapt;
pub mod build;
pub mod compose;
pub mod drive;
pub mod iter;
pub mod prelude;
mod producer;

pub use producer::*;
