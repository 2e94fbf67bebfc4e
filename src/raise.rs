//! Building errors by type at the raise site.
//!
//! [`Maybe::otherwise_throw`] needs the error value in hand before the
//! container is inspected. The [`Raise`] trait instead lets the caller name
//! the error *type* and have it constructed only at the point of failure,
//! with or without a message. An error type that lacks the requested
//! constructor shape reports a [`ConfigError`] naming the type, never the
//! error the caller expected.
//!
//! # Examples
//!
//! ```rust
//! use maybe::{unknown, Raised, StateError};
//!
//! let result = unknown::<i32>().otherwise_raise_msg::<StateError>("myMessage");
//! match result {
//!     Err(Raised::Error(e)) => assert_eq!(e.message(), "myMessage"),
//!     other => panic!("unexpected outcome: {other:?}"),
//! }
//! ```

use std::any::type_name;

use thiserror::Error;

use crate::Maybe;

/// Error kinds constructible by type at the raise site.
///
/// Implement the constructor shapes the type actually has; the remaining
/// default bodies report a [`ConfigError`]. A type with only a message
/// constructor, say, implements [`raise_msg`](Raise::raise_msg) and leaves
/// [`raise`](Raise::raise) alone.
///
/// # Examples
///
/// ```rust
/// use maybe::{unknown, ConfigError, Raise, Raised};
///
/// #[derive(Debug, thiserror::Error)]
/// #[error("no session")]
/// struct NoSession;
///
/// impl Raise for NoSession {
///     fn raise() -> Result<Self, ConfigError> {
///         Ok(NoSession)
///     }
/// }
///
/// assert!(matches!(
///     unknown::<i32>().otherwise_raise::<NoSession>(),
///     Err(Raised::Error(NoSession)),
/// ));
///
/// // `NoSession` cannot carry a message, so asking for one is a
/// // configuration error rather than a `NoSession`.
/// assert!(matches!(
///     unknown::<i32>().otherwise_raise_msg::<NoSession>("detail"),
///     Err(Raised::Config(ConfigError::NoMessageConstructor { .. })),
/// ));
/// ```
pub trait Raise: Sized {
    /// Build the error without a message.
    fn raise() -> Result<Self, ConfigError> {
        Err(ConfigError::NoPlainConstructor {
            type_name: type_name::<Self>(),
        })
    }

    /// Build the error carrying `message`.
    fn raise_msg(message: &str) -> Result<Self, ConfigError> {
        let _ = message;
        Err(ConfigError::NoMessageConstructor {
            type_name: type_name::<Self>(),
        })
    }
}

/// The requested error type lacks the constructor shape the raise site
/// asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// The type cannot be built without a message.
    #[error("error type `{type_name}` cannot be built without a message")]
    NoPlainConstructor {
        /// The offending error type.
        type_name: &'static str,
    },
    /// The type cannot carry a message.
    #[error("error type `{type_name}` cannot carry a message")]
    NoMessageConstructor {
        /// The offending error type.
        type_name: &'static str,
    },
}

/// Outcome of a by-type raise on an `Unknown` container.
///
/// Either the requested error was built and raised, or the [`Raise`]
/// factory could not produce it as asked.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Raised<E> {
    /// The requested error, built because no value was present.
    #[error("{0}")]
    Error(E),
    /// The error type could not be built as asked.
    #[error("misconfigured raise: {0}")]
    Config(ConfigError),
}

/// A ready-made error kind for values that should have been known by now.
///
/// Constructible both plain and with a message, so it satisfies every
/// [`Raise`] form.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct StateError {
    message: String,
}

impl StateError {
    /// Create with a message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// The message carried by this error.
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl Raise for StateError {
    fn raise() -> Result<Self, ConfigError> {
        Ok(Self::new("value was unknown"))
    }

    fn raise_msg(message: &str) -> Result<Self, ConfigError> {
        Ok(Self::new(message))
    }
}

impl<T> Maybe<T> {
    /// Returns the held value, or raises an `E` built by its [`Raise`]
    /// factory.
    ///
    /// The factory runs only when the container is `Unknown`; a `Known`
    /// container returns its value without constructing anything.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe::{known, unknown, Raised, StateError};
    ///
    /// assert_eq!(known(5).otherwise_raise::<StateError>(), Ok(5));
    /// assert!(unknown::<i32>().otherwise_raise::<StateError>().is_err());
    /// ```
    pub fn otherwise_raise<E: Raise>(self) -> Result<T, Raised<E>> {
        match self {
            Maybe::Known(value) => Ok(value),
            Maybe::Unknown => Err(match E::raise() {
                Ok(error) => Raised::Error(error),
                Err(config) => Raised::Config(config),
            }),
        }
    }

    /// Returns the held value, or raises an `E` built with the given
    /// message.
    ///
    /// The factory runs only when the container is `Unknown`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe::{unknown, Raised, StateError};
    ///
    /// let result = unknown::<i32>().otherwise_raise_msg::<StateError>("myMessage");
    /// match result {
    ///     Err(Raised::Error(e)) => assert_eq!(e.message(), "myMessage"),
    ///     other => panic!("unexpected outcome: {other:?}"),
    /// }
    /// ```
    pub fn otherwise_raise_msg<E: Raise>(self, message: &str) -> Result<T, Raised<E>> {
        match self {
            Maybe::Known(value) => Ok(value),
            Maybe::Unknown => Err(match E::raise_msg(message) {
                Ok(error) => Raised::Error(error),
                Err(config) => Raised::Config(config),
            }),
        }
    }
}
