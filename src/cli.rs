//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// Top-level CLI parser for `wallstag`.
#[derive(Debug, Parser)]
#[command(name = "wallstag", version, about = "Generate short unique tags from a name")]
pub struct Cli {
    /// The command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Length and number of tags to produce.
#[derive(Debug, Clone, Copy, Args)]
pub struct TagShape {
    /// Exact number of characters in every tag.
    #[arg(short = 'l', long = "length", default_value_t = 6, value_parser = positive)]
    pub length: usize,
    /// Number of tags to produce.
    #[arg(short = 'n', long = "count", default_value_t = 5, value_parser = positive)]
    pub count: usize,
}

/// Supported top-level subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Generate unique tags mixing silly words and pieces of NAME.
    Generate {
        /// Seed name the tags are derived from.
        name: String,
        /// Tag length and count.
        #[command(flatten)]
        shape: TagShape,
        /// Fixed seed for reproducible output.
        #[arg(long)]
        seed: Option<u64>,
        /// Maximum number of candidates to try.
        #[arg(long)]
        max_attempts: Option<usize>,
        /// File listing tags that are already taken, one per line.
        #[arg(long, value_name = "FILE")]
        taken: Option<PathBuf>,
        /// Print the batch as JSON.
        #[arg(long)]
        json: bool,
        /// Fail when fewer tags than requested were found.
        #[arg(long)]
        strict: bool,
    },
    /// Print tags cut from NAME only, without checking the taken store.
    Derive {
        /// Seed name the tags are cut from.
        name: String,
        /// Tag length and count.
        #[command(flatten)]
        shape: TagShape,
        /// Fixed seed for reproducible output.
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Print one silly word.
    Word {
        /// Fixed seed for reproducible output.
        #[arg(long)]
        seed: Option<u64>,
    },
}

fn positive(raw: &str) -> Result<usize, String> {
    match raw.parse::<usize>() {
        Ok(0) => Err("must be at least 1".to_string()),
        Ok(value) => Ok(value),
        Err(e) => Err(e.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::{Cli, Command};
    use clap::Parser;

    #[test]
    fn parses_generate_with_defaults() {
        let cli = Cli::parse_from(["wallstag", "generate", "Sandy Beach"]);
        let Command::Generate { name, shape, seed, max_attempts, taken, json, strict } =
            cli.command
        else {
            panic!("expected generate");
        };
        assert_eq!(name, "Sandy Beach");
        assert_eq!(shape.length, 6);
        assert_eq!(shape.count, 5);
        assert!(seed.is_none() && max_attempts.is_none() && taken.is_none());
        assert!(!json && !strict);
    }

    #[test]
    fn parses_generate_flags() {
        let cli = Cli::parse_from([
            "wallstag",
            "generate",
            "x",
            "-l",
            "3",
            "-n",
            "2",
            "--seed",
            "9",
            "--max-attempts",
            "40",
            "--taken",
            "taken.txt",
            "--json",
            "--strict",
        ]);
        let Command::Generate { shape, seed, max_attempts, taken, json, strict, .. } = cli.command
        else {
            panic!("expected generate");
        };
        assert_eq!((shape.length, shape.count), (3, 2));
        assert_eq!(seed, Some(9));
        assert_eq!(max_attempts, Some(40));
        assert_eq!(taken.unwrap().to_str(), Some("taken.txt"));
        assert!(json && strict);
    }

    #[test]
    fn parses_derive_and_word() {
        let cli = Cli::parse_from(["wallstag", "derive", "Lake", "--length", "4"]);
        assert!(matches!(cli.command, Command::Derive { shape, .. } if shape.length == 4));

        let cli = Cli::parse_from(["wallstag", "word", "--seed", "3"]);
        assert!(matches!(cli.command, Command::Word { seed: Some(3) }));
    }

    #[test]
    fn rejects_zero_length() {
        let result = Cli::try_parse_from(["wallstag", "generate", "x", "--length", "0"]);
        assert!(result.is_err());
    }
}
