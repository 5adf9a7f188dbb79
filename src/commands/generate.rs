//! `wallstag generate` command.

use serde::Serialize;

use crate::cli::TagShape;
use crate::config::GeneratorConfig;
use crate::context::ServiceContext;
use crate::tags::{TagBatch, TagGenerator};

/// How the generated batch is reported.
#[derive(Debug, Clone, Copy, Default)]
pub struct Output {
    /// Print the batch as JSON instead of one tag per line.
    pub json: bool,
    /// Treat a short batch as a failure.
    pub strict: bool,
}

#[derive(Serialize)]
struct BatchReport<'a> {
    #[serde(flatten)]
    batch: &'a TagBatch,
    complete: bool,
}

/// Execute the `generate` command.
///
/// # Errors
///
/// Returns an error string if the lookup store fails, or, with `strict`,
/// when fewer tags than requested were found.
pub fn run(
    ctx: &ServiceContext,
    config: &GeneratorConfig,
    name: &str,
    shape: TagShape,
    output: Output,
) -> Result<(), String> {
    let batch = generate(ctx, config, name, shape)?;
    print!("{}", render(&batch, output.json)?);
    check_complete(&batch, output.strict)
}

/// Describes how far a short batch fell behind, or `None` when it is complete.
#[must_use]
pub fn shortfall(batch: &TagBatch) -> Option<String> {
    (!batch.is_complete()).then(|| {
        format!(
            "Found only {} of {} tags after {} attempts",
            batch.tags.len(),
            batch.requested,
            batch.attempts
        )
    })
}

/// Runs the generator for one request.
///
/// # Errors
///
/// Returns an error string if the lookup store fails or the length is zero.
pub fn generate(
    ctx: &ServiceContext,
    config: &GeneratorConfig,
    name: &str,
    shape: TagShape,
) -> Result<TagBatch, String> {
    let mut generator = TagGenerator::with_config(ctx, config);
    generator
        .generate_tags(name, shape.length, shape.count)
        .map_err(|e| format!("Failed to generate tags for {name:?}: {e}"))
}

/// Formats a batch as one tag per line, or as pretty JSON.
///
/// # Errors
///
/// Returns an error string if JSON serialization fails.
pub fn render(batch: &TagBatch, json: bool) -> Result<String, String> {
    if json {
        let report = BatchReport { batch, complete: batch.is_complete() };
        let mut text = serde_json::to_string_pretty(&report)
            .map_err(|e| format!("Failed to serialize tags: {e}"))?;
        text.push('\n');
        Ok(text)
    } else {
        Ok(batch.tags.iter().map(|tag| format!("{tag}\n")).collect())
    }
}

fn check_complete(batch: &TagBatch, strict: bool) -> Result<(), String> {
    match shortfall(batch) {
        Some(note) if strict => Err(note),
        Some(note) => {
            eprintln!("Note: {note}");
            Ok(())
        }
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::live::{LiveClock, NothingTaken, SillyWordSource};
    use crate::ports::{BoxError, LookUpRepository};

    struct AlwaysTaken;
    impl LookUpRepository for AlwaysTaken {
        fn data_exists(&self, _tag: &str) -> Result<bool, BoxError> {
            Ok(true)
        }
    }

    fn seeded() -> GeneratorConfig {
        GeneratorConfig { seed: Some(5), ..GeneratorConfig::default() }
    }

    #[test]
    fn generates_requested_tags() {
        let ctx = ServiceContext::from_parts(
            Box::new(LiveClock),
            Box::new(NothingTaken),
            Box::new(SillyWordSource::new()),
        );
        let shape = TagShape { length: 5, count: 4 };
        let batch = generate(&ctx, &seeded(), "Sandy Beach", shape).unwrap();
        assert_eq!(batch.tags.len(), 4);
        assert!(batch.tags.iter().all(|t| t.chars().count() == 5));
        assert!(run(&ctx, &seeded(), "Sandy Beach", shape, Output::default()).is_ok());
    }

    #[test]
    fn strict_mode_fails_on_short_batch() {
        let ctx = ServiceContext::from_parts(
            Box::new(LiveClock),
            Box::new(AlwaysTaken),
            Box::new(SillyWordSource::new()),
        );
        let shape = TagShape { length: 4, count: 2 };
        let output = Output { json: false, strict: true };

        let err = run(&ctx, &seeded(), "Lake", shape, output).unwrap_err();
        assert_eq!(err, "Found only 0 of 2 tags after 100 attempts");
        assert!(run(&ctx, &seeded(), "Lake", shape, Output::default()).is_ok());
    }

    #[test]
    fn shortfall_only_for_incomplete_batches() {
        let full = TagBatch { tags: vec!["sand".into()], requested: 1, attempts: 1 };
        assert_eq!(shortfall(&full), None);

        let short = TagBatch { tags: vec!["sand".into()], requested: 3, attempts: 100 };
        assert_eq!(shortfall(&short).unwrap(), "Found only 1 of 3 tags after 100 attempts");
        assert!(check_complete(&short, false).is_ok());
        assert!(check_complete(&short, true).is_err());
    }

    #[test]
    fn renders_lines_and_json() {
        let batch =
            TagBatch { tags: vec!["sand".into(), "wobb".into()], requested: 3, attempts: 100 };
        assert_eq!(render(&batch, false).unwrap(), "sand\nwobb\n");

        let json: serde_json::Value = serde_json::from_str(&render(&batch, true).unwrap()).unwrap();
        assert_eq!(json["tags"], serde_json::json!(["sand", "wobb"]));
        assert_eq!(json["complete"], serde_json::json!(false));
        assert_eq!(json["attempts"], serde_json::json!(100));
    }
}
