//! # BFM Core
//!
//! Command-dispatch core for BFM - strictly functional Rust with zero unwraps.
//!
//! The core turns one raw input line into one command invocation:
//!
//! ```text
//! raw line -> split name/remainder -> tokenize -> resolve args
//!          -> registry lookup -> validate required args -> handler
//! ```
//!
//! The pieces are deliberately small and side-effect free: the [`tokenizer`]
//! and [`resolver`] never fail, the [`Registry`] is built once at startup and
//! read-only afterwards, and the [`Dispatcher`] owns the whole pipeline.
//! Handlers are the only place I/O happens.
//!
//! ## Laws (Compiler Enforced)
//!
//! - No `unwrap()` - returns `Result` instead
//! - No `expect()` - returns `Result` instead
//! - No `panic!()` - returns `Result` instead
//! - No `unsafe` - safe Rust only
//!
//! ## Error Handling
//!
//! All fallible operations return `Result<T, Error>`. Use:
//! - `?` operator for propagation
//! - `map`, `and_then` combinators for transformation
//! - `match` / `map_or` / `unwrap_or_else` for defaults

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod command;
pub mod dispatcher;
mod error;
pub mod registry;
pub mod resolver;
pub mod result;
pub mod tokenizer;
pub mod validator;

pub use command::{ArgSpec, CommandSpec, CommandSpecBuilder, Handler};
pub use dispatcher::Dispatcher;
pub use error::Error;
pub use registry::Registry;
pub use resolver::{resolve_args, ResolvedArgs};
pub use result::Result;
pub use tokenizer::tokenize;
pub use validator::all_required_present;
