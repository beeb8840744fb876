//! Command and argument specifications
//!
//! A [`CommandSpec`] describes one invocable command: its name, its ordered
//! argument specs, help text, and the handler function the dispatcher calls.
//! Specs are built once at registration time and immutable afterwards; the
//! builder rejects argument name/alias collisions instead of letting them
//! shadow each other at resolution time.

use std::fmt;

use futures::future::BoxFuture;

use crate::{registry::Registry, resolver::ResolvedArgs, result::Result, Error};

/// Handler invoked for a dispatched command.
///
/// Handlers receive the registry so listing-style commands can enumerate
/// their peers without global state; commands that don't need it ignore it.
/// The returned error is propagated by the dispatcher unchanged.
pub type Handler = for<'a> fn(&'a Registry, ResolvedArgs) -> BoxFuture<'a, anyhow::Result<()>>;

/// The declared shape of one command argument.
#[derive(Debug, Clone)]
pub struct ArgSpec {
    name: String,
    description: String,
    aliases: Vec<String>,
    required: bool,
}

impl ArgSpec {
    /// Create an optional argument spec.
    #[must_use]
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            aliases: Vec::new(),
            required: false,
        }
    }

    /// Add an alternate identifier for this argument.
    #[must_use]
    pub fn with_alias(mut self, alias: impl Into<String>) -> Self {
        self.aliases.push(alias.into());
        self
    }

    /// Mark this argument as required.
    #[must_use]
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Base name of the argument.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Human-readable purpose of the argument.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Alternate identifiers, in declaration order.
    #[must_use]
    pub fn aliases(&self) -> &[String] {
        &self.aliases
    }

    /// Whether a non-empty value must be supplied.
    #[must_use]
    pub const fn is_required(&self) -> bool {
        self.required
    }

    /// All identifiers that select this argument: the base name first, then
    /// aliases in declaration order.
    ///
    /// This is the single definition of alias precedence; the validator and
    /// every handler walk this chain rather than re-deriving it.
    pub fn identifiers(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.name.as_str()).chain(self.aliases.iter().map(String::as_str))
    }

    /// First value present in `args` along the identifier chain, if any.
    ///
    /// Presence is what counts here: a flag-style empty value under the base
    /// name wins over a non-empty value under an alias.
    #[must_use]
    pub fn value_in<'a>(&self, args: &'a ResolvedArgs) -> Option<&'a str> {
        self.identifiers()
            .find_map(|id| args.get(id).map(String::as_str))
    }
}

/// An immutable, registered command: schema plus handler.
#[derive(Clone)]
pub struct CommandSpec {
    name: String,
    description: String,
    arguments: Vec<ArgSpec>,
    help_text: String,
    handler: Handler,
}

impl CommandSpec {
    /// Start building a command spec.
    #[must_use]
    pub fn builder(
        name: impl Into<String>,
        description: impl Into<String>,
        handler: Handler,
    ) -> CommandSpecBuilder {
        CommandSpecBuilder {
            name: name.into(),
            description: description.into(),
            arguments: Vec::new(),
            help_text: String::new(),
            handler,
        }
    }

    /// Command name as typed by the user.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// One-line description shown in command listings.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Argument specs, in declaration order.
    #[must_use]
    pub fn arguments(&self) -> &[ArgSpec] {
        &self.arguments
    }

    /// Long help text shown for a single-command help request.
    #[must_use]
    pub fn help_text(&self) -> &str {
        &self.help_text
    }

    /// Handler function for this command.
    #[must_use]
    pub fn handler(&self) -> Handler {
        self.handler
    }

    /// Find an argument spec by its base name.
    #[must_use]
    pub fn argument(&self, name: &str) -> Option<&ArgSpec> {
        self.arguments.iter().find(|arg| arg.name() == name)
    }
}

impl fmt::Debug for CommandSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CommandSpec")
            .field("name", &self.name)
            .field("description", &self.description)
            .field("arguments", &self.arguments)
            .finish_non_exhaustive()
    }
}

/// Builder for [`CommandSpec`] with fallible construction.
pub struct CommandSpecBuilder {
    name: String,
    description: String,
    arguments: Vec<ArgSpec>,
    help_text: String,
    handler: Handler,
}

impl CommandSpecBuilder {
    /// Append an argument spec. Declaration order is validation and
    /// help-table order.
    #[must_use]
    pub fn with_argument(mut self, spec: ArgSpec) -> Self {
        self.arguments.push(spec);
        self
    }

    /// Set the long help text.
    #[must_use]
    pub fn with_help_text(mut self, text: impl Into<String>) -> Self {
        self.help_text = text.into();
        self
    }

    /// Build the spec, rejecting identifier collisions.
    ///
    /// No argument's name or alias may equal another argument's name or
    /// alias within the same command; otherwise resolution would silently
    /// prefer whichever argument was declared first.
    pub fn build(self) -> Result<CommandSpec> {
        let mut seen = std::collections::HashSet::new();
        let collision = self
            .arguments
            .iter()
            .flat_map(ArgSpec::identifiers)
            .find(|id| !seen.insert((*id).to_string()))
            .map(ToString::to_string);

        match collision {
            Some(identifier) => Err(Error::duplicate_argument(&self.name, identifier)),
            None => Ok(CommandSpec {
                name: self.name,
                description: self.description,
                arguments: self.arguments,
                help_text: self.help_text,
                handler: self.handler,
            }),
        }
    }
}
