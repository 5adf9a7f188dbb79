//! Tag generator: alternates candidate sources until enough unique tags
//! are collected or the attempt budget runs out.

use std::collections::HashSet;

use chrono::{DateTime, Utc};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;
use tracing::{debug, info, warn};

use super::derive::derive_name_tags;
use super::normalize::fit_to_length;
use crate::config::{GeneratorConfig, DEFAULT_MAX_ATTEMPTS};
use crate::context::ServiceContext;
use crate::ports::BoxError;

/// Where a candidate tag comes from on a given attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CandidateSource {
    /// A whimsical word from the context's word source.
    SillyWord,
    /// A window of the seed name, see [`derive_name_tags`].
    NameBased,
}

impl CandidateSource {
    const ROTATION: [Self; 2] = [Self::SillyWord, Self::NameBased];

    /// Source used for the zero-based `attempt`: even attempts use silly
    /// words, odd attempts use the name.
    #[must_use]
    pub const fn for_attempt(attempt: usize) -> Self {
        Self::ROTATION[attempt % Self::ROTATION.len()]
    }
}

/// Outcome of one [`TagGenerator::generate_tags`] call.
///
/// A batch holding fewer tags than requested means the attempt budget was
/// exhausted first; that is not an error, check [`TagBatch::is_complete`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TagBatch {
    /// Accepted tags in generation order.
    pub tags: Vec<String>,
    /// Number of tags the caller asked for.
    pub requested: usize,
    /// Number of candidates tried.
    pub attempts: usize,
}

impl TagBatch {
    /// Returns `true` if every requested tag was found.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.tags.len() >= self.requested
    }
}

/// Generates fixed-length tags that are unique within a call and unknown
/// to the context's lookup store.
///
/// The random source lives as long as the generator, so consecutive calls
/// produce different sequences. Not meant to be shared across threads; give
/// each caller its own generator.
pub struct TagGenerator<'a> {
    ctx: &'a ServiceContext,
    rng: StdRng,
    max_attempts: usize,
}

impl<'a> TagGenerator<'a> {
    /// Creates a generator seeded from the context clock.
    #[must_use]
    pub fn new(ctx: &'a ServiceContext) -> Self {
        let seed = clock_seed(ctx.clock.now());
        Self::with_seed(ctx, seed)
    }

    /// Creates a generator with a caller-chosen seed.
    #[must_use]
    pub fn with_seed(ctx: &'a ServiceContext, seed: u64) -> Self {
        debug!(seed, "seeding tag generator");
        Self { ctx, rng: StdRng::seed_from_u64(seed), max_attempts: DEFAULT_MAX_ATTEMPTS }
    }

    /// Creates a generator from a [`GeneratorConfig`], seeding from the
    /// clock unless the config fixes a seed.
    #[must_use]
    pub fn with_config(ctx: &'a ServiceContext, config: &GeneratorConfig) -> Self {
        let mut generator = match config.seed {
            Some(seed) => Self::with_seed(ctx, seed),
            None => Self::new(ctx),
        };
        generator.max_attempts = config.max_attempts;
        generator
    }

    /// The attempt ceiling applied to each call.
    #[must_use]
    pub const fn max_attempts(&self) -> usize {
        self.max_attempts
    }

    /// Generates up to `num_tags` distinct tags of exactly `tag_len`
    /// characters.
    ///
    /// Candidates alternate between silly words and windows of `name`. Each
    /// is truncated or digit-padded to `tag_len`, then accepted only if it
    /// was not already produced in this call and the lookup store does not
    /// know it.
    ///
    /// # Errors
    ///
    /// Returns an error if `tag_len` is zero or the lookup store fails.
    pub fn generate_tags(
        &mut self,
        name: &str,
        tag_len: usize,
        num_tags: usize,
    ) -> Result<TagBatch, BoxError> {
        if tag_len == 0 {
            return Err("tag length must be at least 1".into());
        }

        let mut tags = Vec::with_capacity(num_tags);
        let mut seen = HashSet::new();
        let mut attempts = 0;

        while tags.len() < num_tags && attempts < self.max_attempts {
            let source = CandidateSource::for_attempt(attempts);
            let raw = self.candidate(source, name, tag_len);
            let tag = fit_to_length(&raw, tag_len, &mut self.rng);
            attempts += 1;

            if seen.contains(&tag) {
                debug!(attempt = attempts, ?source, %tag, "duplicate within call");
                continue;
            }
            if self.ctx.lookup.data_exists(&tag)? {
                debug!(attempt = attempts, ?source, %tag, "already taken");
                continue;
            }

            debug!(attempt = attempts, ?source, %tag, "accepted");
            seen.insert(tag.clone());
            tags.push(tag);
        }

        let batch = TagBatch { tags, requested: num_tags, attempts };
        if batch.is_complete() {
            info!(found = batch.tags.len(), attempts, "generated tags");
        } else {
            warn!(
                found = batch.tags.len(),
                requested = num_tags,
                attempts,
                "attempt budget exhausted before enough unique tags were found"
            );
        }
        Ok(batch)
    }

    fn candidate(&mut self, source: CandidateSource, name: &str, tag_len: usize) -> String {
        match source {
            CandidateSource::SillyWord => {
                let seed = self.rng.gen::<u64>();
                self.ctx.words.silly_word(seed).to_lowercase()
            }
            CandidateSource::NameBased => derive_name_tags(name, tag_len, 1, &mut self.rng)
                .into_iter()
                .next()
                .unwrap_or_default(),
        }
    }
}

/// Seed derived from a point in time: nanoseconds since the Unix epoch.
pub(crate) fn clock_seed(now: DateTime<Utc>) -> u64 {
    now.timestamp_nanos_opt().unwrap_or_else(|| now.timestamp()).unsigned_abs()
}
