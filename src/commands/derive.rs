//! `wallstag derive` command.

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::cli::TagShape;
use crate::config::GeneratorConfig;
use crate::context::ServiceContext;
use crate::tags::derive_name_tags;
use crate::tags::generator::clock_seed;

/// Execute the `derive` command: print windows of `name` without
/// consulting the taken store.
///
/// # Errors
///
/// Never fails today; the signature matches the other command handlers.
pub fn run(
    ctx: &ServiceContext,
    config: &GeneratorConfig,
    name: &str,
    shape: TagShape,
) -> Result<(), String> {
    for tag in derive(ctx, config, name, shape) {
        println!("{tag}");
    }
    Ok(())
}

/// Derives the tags printed by [`run`].
#[must_use]
pub fn derive(
    ctx: &ServiceContext,
    config: &GeneratorConfig,
    name: &str,
    shape: TagShape,
) -> Vec<String> {
    let seed = config.seed.unwrap_or_else(|| clock_seed(ctx.clock.now()));
    let mut rng = StdRng::seed_from_u64(seed);
    derive_name_tags(name, shape.length, shape.count, &mut rng)
}
