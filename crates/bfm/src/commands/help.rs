//! List all commands, or describe a single one

use anyhow::{anyhow, Result};
use futures::future::BoxFuture;
use itertools::Itertools;

use bfm_core::{ArgSpec, CommandSpec, Registry, ResolvedArgs};

/// Command name as typed by the user.
pub const NAME: &str = "help";

/// Build the `help` command spec.
pub fn spec() -> bfm_core::Result<CommandSpec> {
    CommandSpec::builder(
        NAME,
        "Lists all commands, or detailed information about a single command",
        handle,
    )
    .with_argument(
        ArgSpec::new(
            "command",
            "Command to get information about; if not set, all commands are listed",
        )
        .with_alias("cmd"),
    )
    .with_help_text(
        "help lists every command with its description. Give it the \"command\"\n\
         argument with the name of another command to see that command's full\n\
         argument table instead.",
    )
    .build()
}

fn handle<'a>(registry: &'a Registry, args: ResolvedArgs) -> BoxFuture<'a, Result<()>> {
    Box::pin(async move { run(registry, &args) })
}

fn run(registry: &Registry, args: &ResolvedArgs) -> Result<()> {
    // A flag-style empty value selects nothing, same as omitting the
    // argument entirely.
    let selector = registry
        .find(NAME)
        .and_then(|spec| spec.argument("command"))
        .and_then(|arg| arg.value_in(args))
        .filter(|value| !value.is_empty());

    match selector {
        None => {
            print_command_list(registry);
            Ok(())
        }
        Some(name) => print_command_details(registry, name),
    }
}

fn print_command_list(registry: &Registry) {
    for cmd in registry.iter() {
        println!("{} - {}", cmd.name(), cmd.description());
    }
}

fn print_command_details(registry: &Registry, name: &str) -> Result<()> {
    let cmd = registry
        .find(name)
        .ok_or_else(|| anyhow!("Couldn't find any command named '{name}'"))?;

    println!("{} - {}", cmd.name(), cmd.description());
    if !cmd.help_text().is_empty() {
        println!();
        println!("{}", cmd.help_text());
    }
    if !cmd.arguments().is_empty() {
        println!();
        println!("Arguments:");
        for arg in cmd.arguments() {
            println!("  -{}", arg.name());
            if !arg.aliases().is_empty() {
                let aliases = arg.aliases().iter().map(|alias| format!("-{alias}"));
                println!("      aliases: {}", aliases.format(" "));
            }
            println!("      purpose: {}", arg.description());
            println!(
                "      required: {}",
                if arg.is_required() { "yes" } else { "no" }
            );
        }
    }
    Ok(())
}
