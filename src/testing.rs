//! Testing oriented utilities.

use crate::models::types::{Int, index_to_int};

/// The accumulator every variant must end up with after `iters` iterations:
/// the indices `0..iters` folded into zero with ordinary addition.
///
/// Example:
/// ```
/// use funcall::testing::expected_total;
///
/// assert_eq!(expected_total(5), 10);
/// ```
pub fn expected_total(iters: u64) -> Int {
    (0..iters).map(index_to_int).fold(0, Int::wrapping_add)
}

/// A random iteration count up to `max` included.
/// This is mainly useful for testing and benchmarking.
///
/// Example:
/// ```
/// use funcall::testing::random_iterations;
///
/// let mut rng = rand::rng();
/// assert!(random_iterations(&mut rng, 10) <= 10);
/// ```
pub fn random_iterations<U: rand::Rng>(rng: &mut U, max: u64) -> u64 {
    rng.random_range(0..=max)
}
