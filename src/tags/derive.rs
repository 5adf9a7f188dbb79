//! Name-based tag derivation.
//!
//! Every contiguous window of the normalized name is a candidate tag. The
//! distinct windows are shuffled with the caller's random source, so the
//! result is fully determined by the inputs and the state of `rng`.

use std::collections::BTreeSet;

use rand::seq::SliceRandom;
use rand::Rng;

use super::normalize::{normalize_name, pad_with_digits};

/// Derives up to `count` distinct tags of `tag_len` characters from `name`.
///
/// The name is lowercased with spaces removed, then padded with random
/// digits if it is shorter than `tag_len`. Returns
/// `min(count, distinct windows)` tags in shuffled order; an empty vector
/// when `tag_len` or `count` is zero.
pub fn derive_name_tags<R: Rng + ?Sized>(
    name: &str,
    tag_len: usize,
    count: usize,
    rng: &mut R,
) -> Vec<String> {
    if tag_len == 0 || count == 0 {
        return Vec::new();
    }

    let mut combined = normalize_name(name);
    pad_with_digits(&mut combined, tag_len, rng);

    let chars: Vec<char> = combined.chars().collect();
    // Ordered set: HashSet iteration order would leak per-process hashing
    // state into the shuffle.
    let windows: BTreeSet<String> =
        chars.windows(tag_len).map(|window| window.iter().collect::<String>()).collect();

    let mut candidates: Vec<String> = windows.into_iter().collect();
    candidates.shuffle(rng);
    candidates.truncate(count);
    candidates
}
