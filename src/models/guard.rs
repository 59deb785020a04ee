use rand::Rng;

use crate::models::types::Int;

/// Makes `total` observable so the loop that computed it cannot be
/// removed as dead code.
///
/// `total` is compared to a fresh random number and only printed on
/// equality, which practically never happens.
/// Returns true if it printed.
pub fn escape(total: Int) -> bool {
    escape_with(total, &mut rand::rng())
}

/// Same as [`escape`], drawing the number from the given generator.
///
/// Example:
/// ```
/// use funcall::prelude::*;
/// use rand::{SeedableRng, rngs::StdRng};
///
/// let mut rng = StdRng::seed_from_u64(42);
/// assert!(!escape_with(10, &mut rng));
/// ```
pub fn escape_with<R: Rng>(total: Int, rng: &mut R) -> bool {
    if total == rng.random::<Int>() {
        println!("{total}");
        true
    } else {
        false
    }
}
