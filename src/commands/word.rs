//! `wallstag word` command.

use crate::config::GeneratorConfig;
use crate::context::ServiceContext;
use crate::tags::generator::clock_seed;

/// Execute the `word` command: print one silly word.
///
/// # Errors
///
/// Never fails today; the signature matches the other command handlers.
pub fn run(ctx: &ServiceContext, config: &GeneratorConfig) -> Result<(), String> {
    let seed = config.seed.unwrap_or_else(|| clock_seed(ctx.clock.now()));
    println!("{}", ctx.words.silly_word(seed));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_command_runs() {
        let ctx = ServiceContext::live(&GeneratorConfig::default()).unwrap();
        assert!(run(&ctx, &GeneratorConfig::default()).is_ok());
    }
}
