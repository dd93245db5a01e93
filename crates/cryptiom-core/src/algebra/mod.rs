//! Tagged-union value types used for every fallible operation in the project.
//!
//! # Why not just `std::result::Result`? (for beginners)
//!
//! The standard library types are perfectly good, and both types here convert
//! losslessly to and from them.  The project defines its own pair so that the
//! fatal paths carry the exact diagnostics the client prints, and so that the
//! read-only (`*_cloned`) and consuming accessors exist side by side:
//!
//! - [`Outcome<T, E>`](outcome::Outcome) – exactly one of `Ok(T)` or `Err(E)`.
//! - [`Maybe<T>`](maybe::Maybe) – either `Some(T)` or `None`.
//!
//! Both are plain Rust `enum`s.  The compiler guarantees that exactly one
//! payload is live and that dropping the value drops only that payload, so
//! there is no manual lifetime bookkeeping anywhere in this module.

pub mod maybe;
pub mod outcome;

pub use maybe::Maybe;
pub use outcome::Outcome;
