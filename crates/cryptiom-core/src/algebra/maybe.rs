//! `Maybe<T>`: a value holding either a payload or nothing.

use crate::algebra::outcome::Outcome;

/// Either `Some(T)` or `None`.
///
/// `None` carries no payload, so dropping it drops nothing.
///
/// # Examples
///
/// ```rust
/// use cryptiom_core::Maybe;
///
/// let present = Maybe::some(3);
/// assert!(present.has_value());
/// assert_eq!(present.value(), 3);
///
/// let absent: Maybe<i32> = Maybe::none();
/// assert_eq!(absent.value_or(10), 10);
/// ```
#[must_use]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Maybe<T> {
    /// No payload.
    None,
    /// A payload of type `T`.
    Some(T),
}

impl<T> Maybe<T> {
    /// Wraps `value` in a `Some`.
    pub fn some(value: T) -> Self {
        Maybe::Some(value)
    }

    /// Returns an empty `Maybe`.
    pub fn none() -> Self {
        Maybe::None
    }

    /// Returns `true` if a payload is present.
    pub fn has_value(&self) -> bool {
        matches!(self, Maybe::Some(_))
    }

    /// Returns the payload, consuming the `Maybe`.
    ///
    /// # Panics
    ///
    /// Panics with a fixed "no value present" message if this is `None`.
    #[track_caller]
    pub fn value(self) -> T {
        match self {
            Maybe::Some(value) => value,
            Maybe::None => value_failed(),
        }
    }

    /// Returns a clone of the payload, leaving the `Maybe` intact.
    ///
    /// # Panics
    ///
    /// Panics if this is `None`.
    #[track_caller]
    pub fn value_cloned(&self) -> T
    where
        T: Clone,
    {
        match self {
            Maybe::Some(value) => value.clone(),
            Maybe::None => value_failed(),
        }
    }

    /// Returns the payload, or `default` if empty.  Never panics.
    pub fn value_or(self, default: T) -> T {
        match self {
            Maybe::Some(value) => value,
            Maybe::None => default,
        }
    }

    pub fn as_ref(&self) -> Maybe<&T> {
        match self {
            Maybe::Some(value) => Maybe::Some(value),
            Maybe::None => Maybe::None,
        }
    }

    pub fn map<U, F>(self, f: F) -> Maybe<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Maybe::Some(value) => Maybe::Some(f(value)),
            Maybe::None => Maybe::None,
        }
    }

    /// Turns an absent value into the error `err`.
    pub fn ok_or<E>(self, err: E) -> Outcome<T, E> {
        match self {
            Maybe::Some(value) => Outcome::Ok(value),
            Maybe::None => Outcome::Err(err),
        }
    }

    /// Converts into the standard library `Option`.
    pub fn into_option(self) -> Option<T> {
        self.into()
    }
}

impl<T> Default for Maybe<T> {
    fn default() -> Self {
        Maybe::None
    }
}

impl<T> From<Option<T>> for Maybe<T> {
    fn from(option: Option<T>) -> Self {
        match option {
            Some(value) => Maybe::Some(value),
            None => Maybe::None,
        }
    }
}

impl<T> From<Maybe<T>> for Option<T> {
    fn from(maybe: Maybe<T>) -> Self {
        match maybe {
            Maybe::Some(value) => Some(value),
            Maybe::None => None,
        }
    }
}

#[cold]
#[inline(never)]
#[track_caller]
fn value_failed() -> ! {
    panic!("called `Maybe::value()` on a `None` value: no value present")
}
