//! Required-argument validation
//!
//! Decides whether a resolved argument map satisfies a command's declared
//! argument specs. Satisfaction walks the same identifier chain handlers use
//! ([`ArgSpec::identifiers`]) but demands a non-empty value: a flag supplied
//! without a value does not count as providing a required argument.

use crate::{command::ArgSpec, resolver::ResolvedArgs};

/// Check that every required spec is satisfied by `resolved`.
///
/// Returns `(ok, missing)` where `missing` holds the *base names* of the
/// unsatisfied required arguments, in spec-declaration order. The alias scan
/// short-circuits on the first non-empty value.
#[must_use]
pub fn all_required_present(resolved: &ResolvedArgs, specs: &[ArgSpec]) -> (bool, Vec<String>) {
    let missing: Vec<String> = specs
        .iter()
        .filter(|spec| spec.is_required())
        .filter(|spec| !has_nonempty_value(resolved, spec))
        .map(|spec| spec.name().to_string())
        .collect();

    (missing.is_empty(), missing)
}

fn has_nonempty_value(resolved: &ResolvedArgs, spec: &ArgSpec) -> bool {
    spec.identifiers()
        .any(|id| resolved.get(id).is_some_and(|value| !value.is_empty()))
}
