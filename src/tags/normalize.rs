//! Length normalization helpers shared by the generator and the deriver.
//!
//! Lengths are counted in characters, so truncation never splits a
//! multi-byte code point.

use rand::Rng;

/// Lowercases `name` and strips every space.
#[must_use]
pub fn normalize_name(name: &str) -> String {
    name.to_lowercase().replace(' ', "")
}

/// Appends random decimal digits to `value` until it holds at least
/// `min_len` characters.
pub fn pad_with_digits<R: Rng + ?Sized>(value: &mut String, min_len: usize, rng: &mut R) {
    let mut len = value.chars().count();
    while len < min_len {
        value.push(random_digit(rng));
        len += 1;
    }
}

/// Truncates or digit-pads `candidate` to exactly `tag_len` characters.
pub fn fit_to_length<R: Rng + ?Sized>(candidate: &str, tag_len: usize, rng: &mut R) -> String {
    let mut tag: String = candidate.chars().take(tag_len).collect();
    pad_with_digits(&mut tag, tag_len, rng);
    tag
}

fn random_digit<R: Rng + ?Sized>(rng: &mut R) -> char {
    char::from(b'0' + rng.gen_range(0..10u8))
}
