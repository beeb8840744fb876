//! Dispatch pipeline: one raw input line to one command invocation
//!
//! The dispatcher owns the registry and the whole
//! split/tokenize/resolve/lookup/validate/invoke sequence. Each `execute`
//! call is independent; no state persists between calls beyond the registry
//! itself.

use crate::{
    resolver::resolve_args, result::Result, tokenizer::tokenize,
    validator::all_required_present, Error, Registry,
};

/// Routes raw input lines to registered command handlers.
#[derive(Debug)]
pub struct Dispatcher {
    registry: Registry,
}

impl Dispatcher {
    /// Create a dispatcher over a fully populated registry.
    #[must_use]
    pub const fn new(registry: Registry) -> Self {
        Self { registry }
    }

    /// The registry this dispatcher routes into.
    #[must_use]
    pub const fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Execute one raw input line.
    ///
    /// The text before the first space is the command name (so the name
    /// itself cannot be quoted); the remainder is tokenized and resolved
    /// into arguments. Lookup and validation failures are reported as core
    /// errors; a handler's own error is propagated unchanged.
    pub async fn execute(&self, raw_line: &str) -> Result<()> {
        let (name, remainder) = split_command_line(raw_line);
        let resolved = resolve_args(tokenize(remainder));

        let spec = self
            .registry
            .find(name)
            .ok_or_else(|| Error::command_not_found(name))?;

        let (ok, missing) = all_required_present(&resolved, spec.arguments());
        if !ok {
            tracing::debug!(command = name, ?missing, "required arguments missing");
            return Err(Error::missing_required_args(name, missing));
        }

        tracing::debug!(command = name, args = resolved.len(), "dispatching");
        spec.handler()(&self.registry, resolved)
            .await
            .map_err(Error::from)
    }
}

/// Split a raw line into command name and argument remainder.
fn split_command_line(raw: &str) -> (&str, &str) {
    raw.split_once(' ').unwrap_or((raw, ""))
}
