// Post text generator: a run of 'A' then a run of 'H'.

use std::iter;

use rand::Rng;

pub const MAX_AS: usize = 20;
pub const MAX_HS: usize = 100;

/// Generate a scream with the thread-local RNG.
pub fn scream() -> String {
    scream_with(&mut rand::rng())
}

/// Generate a scream from `rng`. Between 1 and [`MAX_AS`] 'A's followed by
/// between 1 and [`MAX_HS`] 'H's, each count drawn uniformly.
pub fn scream_with<R: Rng + ?Sized>(rng: &mut R) -> String {
    let a = rng.random_range(1..=MAX_AS);
    let h = rng.random_range(1..=MAX_HS);

    let mut text = String::with_capacity(a + h);
    text.extend(iter::repeat_n('A', a));
    text.extend(iter::repeat_n('H', h));
    text
}
