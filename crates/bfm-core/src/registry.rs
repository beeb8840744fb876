//! Command registry
//!
//! An explicit, append-only collection of command specs owned by the process
//! entry point. It is populated entirely before any input is dispatched and
//! treated as read-only afterwards, so lookups need no synchronization.

use crate::{command::CommandSpec, result::Result, Error};

/// Registry of all registered commands, in registration order.
#[derive(Debug, Default)]
pub struct Registry {
    commands: Vec<CommandSpec>,
}

impl Registry {
    /// Create an empty registry.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            commands: Vec::new(),
        }
    }

    /// Append a command spec.
    ///
    /// A name collision is a hard error: a shadowed duplicate would be an
    /// unreachable dead entry, which is never what the caller meant.
    pub fn register(&mut self, spec: CommandSpec) -> Result<()> {
        if self.find(spec.name()).is_some() {
            return Err(Error::duplicate_command(spec.name()));
        }
        self.commands.push(spec);
        Ok(())
    }

    /// Look up a command by its typed name.
    #[must_use]
    pub fn find(&self, name: &str) -> Option<&CommandSpec> {
        self.commands.iter().find(|cmd| cmd.name() == name)
    }

    /// Enumerate all commands in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &CommandSpec> {
        self.commands.iter()
    }

    /// Number of registered commands.
    #[must_use]
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Whether nothing has been registered yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}
