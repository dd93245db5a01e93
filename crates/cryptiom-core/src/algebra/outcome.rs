//! `Outcome<T, E>`: a value holding either a success payload or an error payload.
//!
//! Every fallible operation in the project (config parsing, file I/O) returns
//! an `Outcome` instead of panicking, so callers must either branch on
//! [`Outcome::is_ok`] / [`Outcome::is_err`] or explicitly opt into a fatal
//! failure with [`Outcome::unwrap`].
//!
//! # Accessor pairs
//!
//! Each payload accessor comes in two forms:
//!
//! | Consuming            | Read-only (clones)          |
//! |----------------------|-----------------------------|
//! | [`Outcome::unwrap`]     | [`Outcome::unwrap_cloned`]     |
//! | [`Outcome::unwrap_err`] | [`Outcome::unwrap_err_cloned`] |
//!
//! The consuming form moves the payload out; the compiler then rejects any
//! further use of the spent value.  The read-only form clones the payload and
//! leaves the `Outcome` untouched.

use std::fmt;

use crate::algebra::maybe::Maybe;

/// Either a success value of type `T` (`Ok`) or an error value of type `E` (`Err`).
///
/// Exactly one payload is live at any time.  Assigning a new `Outcome` over an
/// old one drops the old payload first, and dropping an `Outcome` drops only
/// the active payload.
///
/// # Examples
///
/// ```rust
/// use cryptiom_core::Outcome;
///
/// let good: Outcome<u32, String> = Outcome::Ok(7);
/// assert!(good.is_ok());
/// assert_eq!(good.unwrap(), 7);
///
/// let bad: Outcome<u32, String> = Outcome::Err("boom".to_string());
/// assert_eq!(bad.unwrap_or(0), 0);
/// ```
#[must_use = "this `Outcome` may be an `Err` variant, which should be handled"]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome<T, E> {
    /// Success payload.
    Ok(T),
    /// Error payload.
    Err(E),
}

impl<T, E> Outcome<T, E> {
    /// Returns `true` if this is an `Ok` value.
    pub fn is_ok(&self) -> bool {
        matches!(self, Outcome::Ok(_))
    }

    /// Returns `true` if this is an `Err` value.
    pub fn is_err(&self) -> bool {
        matches!(self, Outcome::Err(_))
    }

    /// Borrows both payloads, producing an `Outcome<&T, &E>`.
    pub fn as_ref(&self) -> Outcome<&T, &E> {
        match self {
            Outcome::Ok(value) => Outcome::Ok(value),
            Outcome::Err(error) => Outcome::Err(error),
        }
    }

    /// Converts into a [`Maybe`] holding the success payload, discarding any error.
    pub fn ok(self) -> Maybe<T> {
        match self {
            Outcome::Ok(value) => Maybe::Some(value),
            Outcome::Err(_) => Maybe::None,
        }
    }

    /// Converts into a [`Maybe`] holding the error payload, discarding any success.
    pub fn err(self) -> Maybe<E> {
        match self {
            Outcome::Ok(_) => Maybe::None,
            Outcome::Err(error) => Maybe::Some(error),
        }
    }

    /// Applies `f` to the success payload, leaving an error untouched.
    pub fn map<U, F>(self, f: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Outcome::Ok(value) => Outcome::Ok(f(value)),
            Outcome::Err(error) => Outcome::Err(error),
        }
    }

    /// Applies `f` to the error payload, leaving a success untouched.
    pub fn map_err<F, O>(self, op: O) -> Outcome<T, F>
    where
        O: FnOnce(E) -> F,
    {
        match self {
            Outcome::Ok(value) => Outcome::Ok(value),
            Outcome::Err(error) => Outcome::Err(op(error)),
        }
    }

    /// Chains another fallible step onto a success payload.
    pub fn and_then<U, F>(self, f: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> Outcome<U, E>,
    {
        match self {
            Outcome::Ok(value) => f(value),
            Outcome::Err(error) => Outcome::Err(error),
        }
    }

    /// Returns the success payload, or `default` if this is an `Err`.
    ///
    /// Never panics.  The error payload (if any) is dropped.
    pub fn unwrap_or(self, default: T) -> T {
        match self {
            Outcome::Ok(value) => value,
            Outcome::Err(_) => default,
        }
    }

    /// Returns the success payload, or computes one from the error.
    pub fn unwrap_or_else<F>(self, op: F) -> T
    where
        F: FnOnce(E) -> T,
    {
        match self {
            Outcome::Ok(value) => value,
            Outcome::Err(error) => op(error),
        }
    }

    /// Returns the error payload, consuming the `Outcome`.
    ///
    /// # Panics
    ///
    /// Panics if this is an `Ok` value.
    #[track_caller]
    pub fn unwrap_err(self) -> E {
        match self {
            Outcome::Ok(_) => unwrap_err_failed(),
            Outcome::Err(error) => error,
        }
    }

    /// Returns a clone of the error payload, leaving the `Outcome` intact.
    ///
    /// # Panics
    ///
    /// Panics if this is an `Ok` value.
    #[track_caller]
    pub fn unwrap_err_cloned(&self) -> E
    where
        E: Clone,
    {
        match self {
            Outcome::Ok(_) => unwrap_err_failed(),
            Outcome::Err(error) => error.clone(),
        }
    }

    /// Converts into the standard library `Result` so `?` can be used.
    pub fn into_result(self) -> Result<T, E> {
        self.into()
    }
}

impl<T, E: fmt::Display> Outcome<T, E> {
    /// Returns the success payload, consuming the `Outcome`.
    ///
    /// # Panics
    ///
    /// Panics if this is an `Err` value.  The panic message embeds the
    /// `Display` rendering of the error payload.
    #[track_caller]
    pub fn unwrap(self) -> T {
        match self {
            Outcome::Ok(value) => value,
            Outcome::Err(error) => unwrap_failed(&error),
        }
    }

    /// Returns a clone of the success payload, leaving the `Outcome` intact.
    ///
    /// # Panics
    ///
    /// Panics if this is an `Err` value, with the same message as [`Outcome::unwrap`].
    #[track_caller]
    pub fn unwrap_cloned(&self) -> T
    where
        T: Clone,
    {
        match self {
            Outcome::Ok(value) => value.clone(),
            Outcome::Err(error) => unwrap_failed(error),
        }
    }
}

impl<T, E> From<Result<T, E>> for Outcome<T, E> {
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Outcome::Ok(value),
            Err(error) => Outcome::Err(error),
        }
    }
}

impl<T, E> From<Outcome<T, E>> for Result<T, E> {
    fn from(outcome: Outcome<T, E>) -> Self {
        match outcome {
            Outcome::Ok(value) => Ok(value),
            Outcome::Err(error) => Err(error),
        }
    }
}

#[cold]
#[inline(never)]
#[track_caller]
fn unwrap_failed(error: &dyn fmt::Display) -> ! {
    panic!("called `Outcome::unwrap()` on an `Err` value: {error}")
}

#[cold]
#[inline(never)]
#[track_caller]
fn unwrap_err_failed() -> ! {
    panic!("called `Outcome::unwrap_err()` on an `Ok` value")
}

// ── Tests ─────────────────────────────────────────────────────────────────────
