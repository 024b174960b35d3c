//! Randomized selection of a single matching item.
//!
//! This module provides:
//! - `XorShift32`, a small deterministic generator
//! - `RandomSource`, the capability the algorithms draw from, and the range mapping it uses
//! - four interchangeable strategies for picking one item uniformly among the items
//!   that satisfy a predicate, without knowing the match count in advance
//!
//! # Examples
//!
//! ```rust
//! use pickone::cs::randomized::{random_item_select, XorShift32};
//!
//! let mut rng = XorShift32::new(1234);
//! let words = ["apple", "ant", "bee", "ape"];
//! let picked = random_item_select(&words, |w| w.starts_with('a'), &mut rng);
//! assert!(matches!(picked, Some("apple") | Some("ant") | Some("ape")));
//! ```

pub mod dual_iterate;
pub mod rand_range;
pub mod random_source;
pub mod reservoir_sampling;
pub mod sort_array;
pub mod strategy;
pub mod temp_array;
pub mod thread_source;
pub mod xorshift;


pub use dual_iterate::random_item_dual_iterate;
pub use random_source::{RandomSource, RangeMode, RngSource};
pub use reservoir_sampling::{random_item_select, sample_one_iter, TakeRand};
pub use sort_array::random_item_sort_array;
pub use strategy::Algorithm;
pub use temp_array::random_item_temp_array;
pub use thread_source::{next_random, random_range, seed, with_generator};
pub use xorshift::XorShift32;
