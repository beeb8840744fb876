//! Command implementations

use anyhow::anyhow;
use bfm_core::{CommandSpec, Registry, ResolvedArgs};

pub mod copy_all;
pub mod help;

/// Build the shell's command registry.
///
/// Registration order is the display order used by `help`.
pub fn build_registry() -> bfm_core::Result<Registry> {
    let mut registry = Registry::new();
    registry.register(copy_all::spec()?)?;
    registry.register(help::spec()?)?;
    Ok(registry)
}

/// Resolve an argument's value through its declared identifier chain.
///
/// By the time a handler runs, validation has already passed, so a missing
/// value here means the handler asked for an argument its own spec does not
/// declare - a programming error, reported rather than swallowed.
pub(crate) fn argument_value<'a>(
    spec: &CommandSpec,
    args: &'a ResolvedArgs,
    name: &str,
) -> anyhow::Result<&'a str> {
    spec.argument(name)
        .and_then(|arg| arg.value_in(args))
        .ok_or_else(|| anyhow!("could not resolve a value for argument '{name}'"))
}
