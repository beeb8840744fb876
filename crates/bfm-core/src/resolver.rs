//! Argument resolution: token sequence to name/value mapping (no I/O)
//!
//! Resolution is permissive by design. Unknown or stray tokens are dropped
//! silently, repeated identifiers overwrite earlier ones, and nothing here
//! ever fails - bad input surfaces later, as a missing required argument.

use std::collections::HashMap;

/// Ephemeral mapping from argument-identifier-as-typed to its raw value.
///
/// Keys are whatever followed the `-`, so a key may be a base name or an
/// alias. The empty string marks a flag supplied without a value.
pub type ResolvedArgs = HashMap<String, String>;

/// Pair up `-name value` tokens into a [`ResolvedArgs`] map.
///
/// A token starting with `-` names an argument (one leading `-` stripped).
/// The following token is consumed as its value unless it also starts with
/// `-`, in which case the argument is flag-style and maps to `""`. Tokens
/// that name nothing and follow no argument are ignored.
///
/// ```
/// use bfm_core::resolve_args;
///
/// let args = resolve_args(["-src", "in", "-v"]);
/// assert_eq!(args.get("src").map(String::as_str), Some("in"));
/// assert_eq!(args.get("v").map(String::as_str), Some(""));
/// ```
pub fn resolve_args<'a, I>(tokens: I) -> ResolvedArgs
where
    I: IntoIterator<Item = &'a str>,
{
    let mut tokens = tokens.into_iter().peekable();
    let mut args = ResolvedArgs::new();

    while let Some(token) = tokens.next() {
        let Some(name) = token.strip_prefix('-') else {
            // Stray value token: not an argument, not consumed by one.
            continue;
        };

        let value = if tokens.peek().is_some_and(|next| !next.starts_with('-')) {
            tokens.next().unwrap_or("")
        } else {
            ""
        };

        // Last occurrence of a repeated identifier wins.
        args.insert(name.to_string(), value.to_string());
    }

    args
}
