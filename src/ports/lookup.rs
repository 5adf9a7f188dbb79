//! Lookup port for checking whether a tag is already taken.

use super::BoxError;

/// Answers whether a tag already exists in some external store.
///
/// Implementations must be side-effect free from the caller's point of
/// view: asking twice about the same tag with no intervening change yields
/// the same answer. The generator only ever reads through this port.
pub trait LookUpRepository: Send + Sync {
    /// Returns `true` if `tag` is already in use.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing store cannot be consulted.
    fn data_exists(&self, tag: &str) -> Result<bool, BoxError>;
}
