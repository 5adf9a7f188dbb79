//! The set of ports a tag generator talks to, wired for live use,
//! recording, or replay.

use std::path::Path;
use std::sync::Arc;

use crate::adapters::live::{LiveClock, NothingTaken, SillyWordSource, TakenTagsFile};
use crate::adapters::recording::{RecordingClock, RecordingLookUp, RecordingWordSource};
use crate::adapters::replaying::{ReplayingClock, ReplayingLookUp, ReplayingWordSource};
use crate::cassette::config::CassetteConfig;
use crate::cassette::format::Cassette;
use crate::cassette::replayer::CassetteReplayer;
use crate::cassette::session::RecordingSession;
use crate::config::GeneratorConfig;
use crate::ports::{BoxError, Clock, LookUpRepository, WordSource};

/// Clock, taken-tag store and word source handed to a [`crate::tags::TagGenerator`].
///
/// Pick a constructor to choose between real adapters, cassette-backed
/// replayers, or real adapters whose answers are written to cassettes.
pub struct ServiceContext {
    /// Clock used to seed generators.
    pub clock: Box<dyn Clock>,
    /// Store answering whether a tag is already taken.
    pub lookup: Box<dyn LookUpRepository>,
    /// Source of whimsical words.
    pub words: Box<dyn WordSource>,
}

impl ServiceContext {
    /// Creates a context from explicit adapters.
    #[must_use]
    pub fn from_parts(
        clock: Box<dyn Clock>,
        lookup: Box<dyn LookUpRepository>,
        words: Box<dyn WordSource>,
    ) -> Self {
        Self { clock, lookup, words }
    }

    /// Creates a live context.
    ///
    /// The lookup store reads `config.taken_file` when one is configured and
    /// otherwise treats every tag as free.
    ///
    /// # Errors
    ///
    /// Returns an error if the taken-tags file cannot be read.
    pub fn live(config: &GeneratorConfig) -> Result<Self, String> {
        Ok(Self::from_parts(
            Box::new(LiveClock),
            live_lookup(config.taken_file.as_deref())?,
            Box::new(SillyWordSource::new()),
        ))
    }

    /// Creates a live context whose port traffic is recorded to per-port
    /// cassettes in a timestamped directory below `dir`.
    ///
    /// Drop the context before calling [`RecordingSession::finish`] so the
    /// recorders are no longer shared.
    ///
    /// # Errors
    ///
    /// Returns an error if the session directory or taken-tags file cannot
    /// be set up.
    pub fn recording_at(
        dir: &Path,
        config: &GeneratorConfig,
    ) -> Result<(Self, RecordingSession), String> {
        let lookup = live_lookup(config.taken_file.as_deref())?;
        let session = RecordingSession::new(dir)?;
        let ctx = Self::from_parts(
            Box::new(RecordingClock::new(Box::new(LiveClock), Arc::clone(&session.clock))),
            Box::new(RecordingLookUp::new(lookup, Arc::clone(&session.lookup))),
            Box::new(RecordingWordSource::new(
                Box::new(SillyWordSource::new()),
                Arc::clone(&session.words),
            )),
        );
        Ok((ctx, session))
    }

    /// Creates a replaying context from a monolithic cassette file.
    ///
    /// Each port gets its own replayer so per-port cursors are independent.
    ///
    /// # Errors
    ///
    /// Returns an error if the cassette file cannot be read or parsed.
    pub fn replaying(path: &Path) -> Result<Self, String> {
        let cassette = Cassette::load(path)?;

        Ok(Self::from_parts(
            Box::new(ReplayingClock::new(CassetteReplayer::new(&cassette))),
            Box::new(ReplayingLookUp::new(CassetteReplayer::new(&cassette))),
            Box::new(ReplayingWordSource::new(CassetteReplayer::new(&cassette))),
        ))
    }

    /// Creates a replaying context from per-port cassette files.
    ///
    /// Ports without a configured cassette use a panicking adapter that
    /// fails with a clear message when called.
    ///
    /// # Errors
    ///
    /// Returns an error if any configured cassette file cannot be read or parsed.
    pub fn replaying_from(config: &CassetteConfig) -> Result<Self, String> {
        let replayers = config.load_all()?;

        Ok(Self::from_parts(
            match replayers.clock {
                Some(r) => Box::new(ReplayingClock::new(r)),
                None => Box::new(PanickingClock),
            },
            match replayers.lookup {
                Some(r) => Box::new(ReplayingLookUp::new(r)),
                None => Box::new(PanickingLookUp),
            },
            match replayers.words {
                Some(r) => Box::new(ReplayingWordSource::new(r)),
                None => Box::new(PanickingWordSource),
            },
        ))
    }
}

fn live_lookup(taken_file: Option<&Path>) -> Result<Box<dyn LookUpRepository>, String> {
    match taken_file {
        Some(path) => Ok(Box::new(TakenTagsFile::open(path)?)),
        None => Ok(Box::new(NothingTaken)),
    }
}

// Stand-ins for ports that have no cassette in a replay config.

struct PanickingClock;
impl Clock for PanickingClock {
    fn now(&self) -> chrono::DateTime<chrono::Utc> {
        panic!("Clock port not configured in CassetteConfig: no cassette loaded for clock");
    }
}

struct PanickingLookUp;
impl LookUpRepository for PanickingLookUp {
    fn data_exists(&self, _tag: &str) -> Result<bool, BoxError> {
        panic!("LookUpRepository port not configured in CassetteConfig: no lookup cassette");
    }
}

struct PanickingWordSource;
impl WordSource for PanickingWordSource {
    fn silly_word(&self, _seed: u64) -> String {
        panic!("WordSource port not configured in CassetteConfig: no cassette loaded for words");
    }
}
