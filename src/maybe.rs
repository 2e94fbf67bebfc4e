//! The [`Maybe`] container and its combinators.
//!
//! A [`Maybe<T>`] is either `Known(value)` or `Unknown`. Every operation is
//! a pure function of the variant and payload; once built, a container never
//! changes. Mappings and predicates handed to the combinators are only ever
//! invoked on a `Known` container.

use std::fmt;
use std::hash::{Hash, Hasher};

use thiserror::Error;

/// A value that is either known or explicitly unknown.
///
/// `Maybe` makes absence an ordinary value rather than a null: callers
/// default, transform, and query through the container instead of checking
/// for presence by hand.
///
/// # Examples
///
/// ```rust
/// use maybe::{known, unknown, Maybe};
///
/// let found: Maybe<i32> = known(42);
/// let missing: Maybe<i32> = unknown();
///
/// assert_eq!(found.otherwise(0), 42);
/// assert_eq!(missing.otherwise(0), 0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Maybe<T> {
    /// A present value. The payload is always there; there is no null state.
    Known(T),
    /// The explicit absence of a value.
    Unknown,
}

/// Wrap a present value.
///
/// # Examples
///
/// ```rust
/// use maybe::{known, Maybe};
///
/// let x = known("rumsfeld");
/// assert_eq!(x, Maybe::Known("rumsfeld"));
/// ```
#[inline]
pub fn known<T>(value: T) -> Maybe<T> {
    Maybe::Known(value)
}

/// The absent container.
///
/// Pin the payload type with turbofish when inference needs help:
/// `unknown::<String>()`.
///
/// # Examples
///
/// ```rust
/// use maybe::unknown;
///
/// let x = unknown::<i32>();
/// assert!(x.is_empty());
/// ```
#[inline]
pub fn unknown<T>() -> Maybe<T> {
    Maybe::Unknown
}

/// Wrap a value that may be absent.
///
/// `None` becomes `Unknown`, `Some(v)` becomes `Known(v)`.
///
/// # Examples
///
/// ```rust
/// use maybe::{known, possibly, unknown};
///
/// assert_eq!(possibly(Some(5)), known(5));
/// assert_eq!(possibly(None::<i32>), unknown());
/// ```
#[inline]
pub fn possibly<T>(value: Option<T>) -> Maybe<T> {
    match value {
        Some(value) => Maybe::Known(value),
        None => Maybe::Unknown,
    }
}

/// Error from [`Maybe::try_known`]: a known value cannot be built out of an
/// explicit absence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("cannot have a known value that is absent")]
pub struct AbsentValueError;

impl<T> Maybe<T> {
    /// Build a `Known` container from a payload that may be absent, treating
    /// absence as an invalid argument.
    ///
    /// Use [`possibly`] instead when absence should become `Unknown`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe::{known, AbsentValueError, Maybe};
    ///
    /// assert_eq!(Maybe::try_known(Some(5)), Ok(known(5)));
    /// assert_eq!(Maybe::try_known(None::<i32>), Err(AbsentValueError));
    /// ```
    #[inline]
    pub fn try_known(value: Option<T>) -> Result<Self, AbsentValueError> {
        match value {
            Some(value) => Ok(Maybe::Known(value)),
            None => Err(AbsentValueError),
        }
    }

    /// Returns `true` if the container holds a value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe::{known, unknown};
    ///
    /// assert!(known(1).is_known());
    /// assert!(!unknown::<i32>().is_known());
    /// ```
    #[inline]
    pub const fn is_known(&self) -> bool {
        matches!(self, Maybe::Known(_))
    }

    /// Returns `true` if the container is `Unknown`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe::{known, unknown};
    ///
    /// assert!(unknown::<i32>().is_empty());
    /// assert!(!known(1).is_empty());
    /// ```
    #[inline]
    pub const fn is_empty(&self) -> bool {
        !self.is_known()
    }

    /// Returns `true` if the container holds a value equal to the given one.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe::{known, unknown};
    ///
    /// assert!(known(42).contains(&42));
    /// assert!(!known(42).contains(&100));
    /// assert!(!unknown::<i32>().contains(&42));
    /// ```
    #[inline]
    pub fn contains<U>(&self, value: &U) -> bool
    where
        U: PartialEq<T>,
    {
        matches!(self, Maybe::Known(v) if value == v)
    }

    /// Converts from `Maybe<T>` to `Option<T>`, consuming `self`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe::{known, unknown};
    ///
    /// assert_eq!(known(42).known_value(), Some(42));
    /// assert_eq!(unknown::<i32>().known_value(), None);
    /// ```
    #[inline]
    pub fn known_value(self) -> Option<T> {
        match self {
            Maybe::Known(value) => Some(value),
            Maybe::Unknown => None,
        }
    }

    /// Returns the held value, or `default` when the container is `Unknown`.
    ///
    /// The default is evaluated eagerly at the call site; use
    /// [`otherwise_with`](Maybe::otherwise_with) when it is expensive to
    /// compute.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe::{known, unknown};
    ///
    /// assert_eq!(known("foo").otherwise(""), "foo");
    /// assert_eq!(unknown::<&str>().otherwise(""), "");
    /// ```
    #[inline]
    pub fn otherwise(self, default: T) -> T {
        match self {
            Maybe::Known(value) => value,
            Maybe::Unknown => default,
        }
    }

    /// Returns the held value, or computes a default from the supplier.
    ///
    /// The supplier runs only when the container is `Unknown`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe::{known, unknown};
    ///
    /// assert_eq!(known(2).otherwise_with(|| 0), 2);
    /// assert_eq!(unknown::<i32>().otherwise_with(|| 0), 0);
    /// ```
    #[inline]
    pub fn otherwise_with<F>(self, supplier: F) -> T
    where
        F: FnOnce() -> T,
    {
        match self {
            Maybe::Known(value) => value,
            Maybe::Unknown => supplier(),
        }
    }

    /// Returns `self` when `Known`, or the fallback container unchanged.
    ///
    /// Fallbacks chain left to right, ending with a plain
    /// [`otherwise`](Maybe::otherwise):
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe::{known, unknown};
    ///
    /// let preferred = unknown::<&str>();
    /// let configured = known("X");
    ///
    /// assert_eq!(preferred.otherwise_maybe(configured).otherwise(""), "X");
    /// ```
    #[inline]
    pub fn otherwise_maybe(self, fallback: Maybe<T>) -> Maybe<T> {
        match self {
            Maybe::Known(value) => Maybe::Known(value),
            Maybe::Unknown => fallback,
        }
    }

    /// Returns `self` when `Known`, or a fallback container computed from
    /// the supplier.
    ///
    /// The supplier runs only when the container is `Unknown`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe::{known, unknown};
    ///
    /// assert_eq!(unknown::<i32>().otherwise_maybe_with(|| known(7)), known(7));
    /// assert_eq!(known(1).otherwise_maybe_with(|| known(7)), known(1));
    /// ```
    #[inline]
    pub fn otherwise_maybe_with<F>(self, supplier: F) -> Maybe<T>
    where
        F: FnOnce() -> Maybe<T>,
    {
        match self {
            Maybe::Known(value) => Maybe::Known(value),
            Maybe::Unknown => supplier(),
        }
    }

    /// Returns the held value, or raises the given error.
    ///
    /// The error is built eagerly at the call site; use
    /// [`otherwise_throw_with`](Maybe::otherwise_throw_with) to build it
    /// only at the point of failure.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe::{known, unknown};
    ///
    /// assert_eq!(known(5).otherwise_throw("missing"), Ok(5));
    /// assert_eq!(unknown::<i32>().otherwise_throw("missing"), Err("missing"));
    /// ```
    #[inline]
    pub fn otherwise_throw<E>(self, error: E) -> Result<T, E> {
        match self {
            Maybe::Known(value) => Ok(value),
            Maybe::Unknown => Err(error),
        }
    }

    /// Returns the held value, or raises an error computed from the
    /// supplier.
    ///
    /// The supplier runs only when the container is `Unknown`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe::{known, unknown};
    ///
    /// let absent = unknown::<i32>().otherwise_throw_with(|| "missing".to_string());
    /// assert_eq!(absent, Err("missing".to_string()));
    ///
    /// let present = known(5).otherwise_throw_with(|| "missing".to_string());
    /// assert_eq!(present, Ok(5));
    /// ```
    #[inline]
    pub fn otherwise_throw_with<E, F>(self, supplier: F) -> Result<T, E>
    where
        F: FnOnce() -> E,
    {
        match self {
            Maybe::Known(value) => Ok(value),
            Maybe::Unknown => Err(supplier()),
        }
    }

    /// Maps the held value through `mapping`, producing a container of the
    /// mapping's result type.
    ///
    /// An `Unknown` container passes through unchanged and the mapping is
    /// never invoked for it.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe::{known, unknown};
    ///
    /// let address = known("alice@example.com");
    /// assert_eq!(
    ///     address.transform(|a| a.to_uppercase()).otherwise("UNKNOWN".to_string()),
    ///     "ALICE@EXAMPLE.COM",
    /// );
    ///
    /// let absent = unknown::<&str>();
    /// assert_eq!(
    ///     absent.transform(|a| a.to_uppercase()).otherwise("UNKNOWN".to_string()),
    ///     "UNKNOWN",
    /// );
    /// ```
    #[inline]
    pub fn transform<U, F>(self, mapping: F) -> Maybe<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Maybe::Known(value) => Maybe::Known(mapping(value)),
            Maybe::Unknown => Maybe::Unknown,
        }
    }

    /// Maps the held value through a mapping whose result may be absent,
    /// wrapping via [`possibly`].
    ///
    /// A mapping that returns `None` yields `Unknown`; an `Unknown`
    /// container passes through without invoking the mapping.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe::{known, unknown};
    ///
    /// let parsed = known("42").transform_possibly(|s| s.parse::<i32>().ok());
    /// assert_eq!(parsed, known(42));
    ///
    /// let unparsable = known("nope").transform_possibly(|s| s.parse::<i32>().ok());
    /// assert_eq!(unparsable, unknown());
    /// ```
    #[inline]
    pub fn transform_possibly<U, F>(self, mapping: F) -> Maybe<U>
    where
        F: FnOnce(T) -> Option<U>,
    {
        match self {
            Maybe::Known(value) => possibly(mapping(value)),
            Maybe::Unknown => Maybe::Unknown,
        }
    }

    /// Chains a container-producing mapping, returning its result directly.
    ///
    /// Unlike [`transform`](Maybe::transform) the result is never
    /// re-wrapped, so mappings that themselves yield a `Maybe` compose
    /// without nesting. An `Unknown` container passes through without
    /// invoking the mapping.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe::{known, possibly, unknown, Maybe};
    ///
    /// fn domain(address: &str) -> Maybe<&str> {
    ///     possibly(address.split('@').nth(1))
    /// }
    ///
    /// assert_eq!(known("alice@example.com").bind(domain), known("example.com"));
    /// assert_eq!(known("invalid").bind(domain), unknown());
    /// assert_eq!(unknown::<&str>().bind(domain), unknown());
    /// ```
    #[inline]
    pub fn bind<U, F>(self, mapping: F) -> Maybe<U>
    where
        F: FnOnce(T) -> Maybe<U>,
    {
        match self {
            Maybe::Known(value) => mapping(value),
            Maybe::Unknown => Maybe::Unknown,
        }
    }

    /// Keeps a `Known` value only when the predicate holds.
    ///
    /// A `Known` value failing the predicate becomes `Unknown`; an
    /// `Unknown` container passes through without invoking the predicate.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe::{known, unknown};
    ///
    /// assert_eq!(known(4).filter(|n| n % 2 == 0), known(4));
    /// assert_eq!(known(3).filter(|n| n % 2 == 0), unknown());
    /// assert_eq!(unknown::<i32>().filter(|n| n % 2 == 0), unknown());
    /// ```
    #[inline]
    pub fn filter<P>(self, predicate: P) -> Maybe<T>
    where
        P: FnOnce(&T) -> bool,
    {
        match self {
            Maybe::Known(value) => {
                if predicate(&value) {
                    Maybe::Known(value)
                } else {
                    Maybe::Unknown
                }
            }
            Maybe::Unknown => Maybe::Unknown,
        }
    }

    /// Applies a predicate to the held value, keeping the answer in the
    /// container.
    ///
    /// A `Known` container yields `Known(predicate(value))`; an `Unknown`
    /// container passes through without invoking the predicate, so "don't
    /// know" survives the question.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe::{known, unknown};
    ///
    /// assert_eq!(known("a@example.com").query(|a| a.contains('@')), known(true));
    /// assert_eq!(known("invalid").query(|a| a.contains('@')), known(false));
    /// assert!(unknown::<&str>().query(|a| a.contains('@')).is_empty());
    /// ```
    #[inline]
    pub fn query<P>(self, predicate: P) -> Maybe<bool>
    where
        P: FnOnce(&T) -> bool,
    {
        match self {
            Maybe::Known(value) => Maybe::Known(predicate(&value)),
            Maybe::Unknown => Maybe::Unknown,
        }
    }

    /// Converts from `&Maybe<T>` to `Maybe<&T>`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe::{known, Maybe};
    ///
    /// let text: Maybe<String> = known("value".to_string());
    /// let length: Maybe<usize> = text.as_ref().transform(|s| s.len());
    /// assert_eq!(length, known(5));
    /// assert!(text.is_known());
    /// ```
    #[inline]
    pub const fn as_ref(&self) -> Maybe<&T> {
        match self {
            Maybe::Known(value) => Maybe::Known(value),
            Maybe::Unknown => Maybe::Unknown,
        }
    }

    /// Converts from `&mut Maybe<T>` to `Maybe<&mut T>`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe::{known, Maybe};
    ///
    /// let mut x = known(2);
    /// if let Maybe::Known(v) = x.as_mut() {
    ///     *v = 42;
    /// }
    /// assert_eq!(x, known(42));
    /// ```
    #[inline]
    pub fn as_mut(&mut self) -> Maybe<&mut T> {
        match self {
            Maybe::Known(value) => Maybe::Known(value),
            Maybe::Unknown => Maybe::Unknown,
        }
    }

    /// Returns the held value, consuming `self`.
    ///
    /// # Panics
    ///
    /// Panics with `msg` if the container is `Unknown`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe::known;
    ///
    /// assert_eq!(known(42).expect_known("value was configured"), 42);
    /// ```
    ///
    /// ```should_panic
    /// use maybe::unknown;
    ///
    /// unknown::<i32>().expect_known("value was configured"); // panics
    /// ```
    #[inline]
    pub fn expect_known(self, msg: &str) -> T {
        match self {
            Maybe::Known(value) => value,
            Maybe::Unknown => panic!("{}", msg),
        }
    }

    /// Returns the held value, consuming `self`.
    ///
    /// # Panics
    ///
    /// Panics if the container is `Unknown`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe::known;
    ///
    /// assert_eq!(known(42).unwrap_known(), 42);
    /// ```
    ///
    /// ```should_panic
    /// use maybe::unknown;
    ///
    /// unknown::<i32>().unwrap_known(); // panics
    /// ```
    #[inline]
    pub fn unwrap_known(self) -> T {
        match self {
            Maybe::Known(value) => value,
            Maybe::Unknown => panic!("called `Maybe::unwrap_known()` on an `Unknown` value"),
        }
    }
}

impl<'a, T> Maybe<&'a T> {
    /// Maps a `Maybe<&T>` to a `Maybe<T>` by copying the referenced value.
    #[inline]
    pub fn copied(self) -> Maybe<T>
    where
        T: Copy,
    {
        match self {
            Maybe::Known(&value) => Maybe::Known(value),
            Maybe::Unknown => Maybe::Unknown,
        }
    }

    /// Maps a `Maybe<&T>` to a `Maybe<T>` by cloning the referenced value.
    #[inline]
    pub fn cloned(self) -> Maybe<T>
    where
        T: Clone,
    {
        match self {
            Maybe::Known(value) => Maybe::Known(value.clone()),
            Maybe::Unknown => Maybe::Unknown,
        }
    }
}

impl<T> Default for Maybe<T> {
    /// An absent container.
    #[inline]
    fn default() -> Self {
        Maybe::Unknown
    }
}

impl<T> From<Option<T>> for Maybe<T> {
    #[inline]
    fn from(value: Option<T>) -> Self {
        possibly(value)
    }
}

impl<T> From<Maybe<T>> for Option<T> {
    #[inline]
    fn from(value: Maybe<T>) -> Self {
        value.known_value()
    }
}

impl<T: Hash> Hash for Maybe<T> {
    /// `Known` delegates to the payload's hash; `Unknown` hashes to a fixed
    /// constant for every payload type.
    fn hash<H: Hasher>(&self, state: &mut H) {
        match self {
            Maybe::Known(value) => value.hash(state),
            Maybe::Unknown => state.write_u8(0),
        }
    }
}

impl<T: fmt::Display> fmt::Display for Maybe<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Maybe::Known(value) => write!(f, "known {value}"),
            Maybe::Unknown => f.write_str("unknown"),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::hash_map::DefaultHasher;
    use std::hash::{Hash, Hasher};

    use super::*;

    fn hash_of(value: &impl Hash) -> u64 {
        let mut hasher = DefaultHasher::new();
        value.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn test_known_is_known_and_otherwise_keeps_value() {
        let x = known(42);
        assert!(x.is_known());
        assert!(!x.is_empty());
        assert_eq!(x.otherwise(0), 42);
    }

    #[test]
    fn test_unknown_is_empty_and_otherwise_takes_default() {
        let x = unknown::<i32>();
        assert!(!x.is_known());
        assert!(x.is_empty());
        assert_eq!(x.otherwise(7), 7);
    }

    #[test]
    fn test_possibly_dispatches_on_absence() {
        assert_eq!(possibly(Some(5)), known(5));
        assert_eq!(possibly(None::<i32>), unknown());
    }

    #[test]
    fn test_try_known_rejects_absent_payload() {
        assert_eq!(Maybe::try_known(Some(5)), Ok(known(5)));
        assert_eq!(Maybe::try_known(None::<i32>), Err(AbsentValueError));
    }

    #[test]
    fn test_chaining_otherwise() {
        let no_str = unknown::<&str>;

        assert_eq!(no_str().otherwise_maybe(no_str()).otherwise(""), "");
        assert_eq!(no_str().otherwise_maybe(known("X")).otherwise(""), "X");
        assert_eq!(known("X").otherwise_maybe(known("Y")).otherwise(""), "X");
    }

    #[test]
    fn test_otherwise_with_supplies_default_when_unknown() {
        assert_eq!(unknown::<i32>().otherwise_with(|| 7), 7);
    }

    #[test]
    fn test_otherwise_with_does_not_run_supplier_when_known() {
        let value = known(2).otherwise_with(|| panic!("supplier must not run"));
        assert_eq!(value, 2);
    }

    #[test]
    fn test_otherwise_maybe_with_is_lazy() {
        assert_eq!(unknown::<i32>().otherwise_maybe_with(|| known(7)), known(7));

        let kept = known(1).otherwise_maybe_with(|| panic!("supplier must not run"));
        assert_eq!(kept, known(1));
    }

    #[test]
    fn test_otherwise_throw() {
        assert_eq!(known(5).otherwise_throw("missing"), Ok(5));
        assert_eq!(unknown::<i32>().otherwise_throw("missing"), Err("missing"));
    }

    #[test]
    fn test_otherwise_throw_with_builds_error_only_on_unknown() {
        let present: Result<i32, String> =
            known(5).otherwise_throw_with(|| panic!("error must not be built"));
        assert_eq!(present, Ok(5));

        let absent: Result<i32, String> =
            unknown().otherwise_throw_with(|| "missing".to_string());
        assert_eq!(absent, Err("missing".to_string()));
    }

    #[test]
    fn test_transform_maps_known_values() {
        let address = known("alice@example.com");
        assert_eq!(
            address.transform(str::to_uppercase),
            known("ALICE@EXAMPLE.COM".to_string()),
        );
        assert_eq!(
            unknown::<&str>().transform(str::to_uppercase),
            unknown::<String>(),
        );
    }

    #[test]
    fn test_transform_is_not_invoked_on_unknown() {
        let mut called = false;
        let result = unknown::<i32>().transform(|v| {
            called = true;
            v + 1
        });
        assert_eq!(result, unknown());
        assert!(!called);
    }

    #[test]
    fn test_transform_possibly_treats_absent_result_as_unknown() {
        assert_eq!(known("42").transform_possibly(|s| s.parse::<i32>().ok()), known(42));
        assert_eq!(
            known("nope").transform_possibly(|s| s.parse::<i32>().ok()),
            unknown(),
        );
    }

    #[test]
    fn test_transform_possibly_is_not_invoked_on_unknown() {
        let mut called = false;
        let result = unknown::<&str>().transform_possibly(|s| {
            called = true;
            s.parse::<i32>().ok()
        });
        assert_eq!(result, unknown());
        assert!(!called);
    }

    #[test]
    fn test_bind_chains_without_rewrapping() {
        fn half(n: i32) -> Maybe<i32> {
            if n % 2 == 0 {
                known(n / 2)
            } else {
                unknown()
            }
        }

        assert_eq!(known(8).bind(half), known(4));
        assert_eq!(known(8).bind(half).bind(half), known(2));
        assert_eq!(known(3).bind(half), unknown());
    }

    #[test]
    fn test_bind_is_not_invoked_on_unknown() {
        let mut called = false;
        let result = unknown::<i32>().bind(|v| {
            called = true;
            known(v)
        });
        assert_eq!(result, unknown());
        assert!(!called);
    }

    #[test]
    fn test_filter_keeps_matching_values() {
        assert_eq!(known(4).filter(|n| n % 2 == 0), known(4));
        assert_eq!(known(3).filter(|n| n % 2 == 0), unknown());
    }

    #[test]
    fn test_filter_is_not_invoked_on_unknown() {
        let mut called = false;
        let result = unknown::<i32>().filter(|_| {
            called = true;
            true
        });
        assert_eq!(result, unknown());
        assert!(!called);
    }

    #[test]
    fn test_query_answers_inside_the_container() {
        let is_valid = |address: &&str| address.contains('@');

        assert_eq!(known("example@example.com").query(is_valid), known(true));
        assert_eq!(known("invalid-email-address").query(is_valid), known(false));
        assert!(unknown::<&str>().query(is_valid).is_empty());
    }

    #[test]
    fn test_query_is_not_invoked_on_unknown() {
        let mut called = false;
        let result = unknown::<i32>().query(|_| {
            called = true;
            true
        });
        assert_eq!(result, unknown());
        assert!(!called);
    }

    #[test]
    fn test_equality_of_known_values() {
        assert_eq!(known(1), known(1));
        assert_ne!(known(1), known(2));
    }

    #[test]
    fn test_unknown_values_are_equal() {
        assert_eq!(unknown::<i32>(), unknown::<i32>());

        let u = unknown::<String>();
        assert_eq!(u, u);
    }

    #[test]
    fn test_unknown_never_equals_known() {
        assert_ne!(unknown::<i32>(), known(1));
        assert_ne!(known("rumsfeld"), unknown::<&str>());
    }

    #[test]
    fn test_hash_of_known_delegates_to_value() {
        assert_eq!(hash_of(&known(42)), hash_of(&42));
        assert_eq!(hash_of(&known("abc")), hash_of(&"abc"));
    }

    #[test]
    fn test_hash_of_unknown_is_a_fixed_constant() {
        assert_eq!(hash_of(&unknown::<i32>()), hash_of(&unknown::<i32>()));
        assert_eq!(hash_of(&unknown::<i32>()), hash_of(&unknown::<String>()));
    }

    #[test]
    fn test_equal_containers_hash_equal() {
        assert_eq!(hash_of(&known(7)), hash_of(&known(7)));
    }

    #[test]
    fn test_display() {
        assert_eq!(known(7).to_string(), "known 7");
        assert_eq!(unknown::<i32>().to_string(), "unknown");
    }

    #[test]
    fn test_contains() {
        assert!(known(42).contains(&42));
        assert!(!known(42).contains(&100));
        assert!(!unknown::<i32>().contains(&42));
    }

    #[test]
    fn test_as_ref_and_as_mut() {
        let text = known("value".to_string());
        assert_eq!(text.as_ref().transform(String::len), known(5));
        assert!(text.is_known());

        let mut x = known(2);
        if let Maybe::Known(v) = x.as_mut() {
            *v = 42;
        }
        assert_eq!(x, known(42));
    }

    #[test]
    fn test_copied_and_cloned() {
        let value = 12;
        assert_eq!(known(&value).copied(), known(12));

        let text = "value".to_string();
        assert_eq!(known(&text).cloned(), known(text.clone()));
        assert_eq!(unknown::<&String>().cloned(), unknown::<String>());
    }

    #[test]
    fn test_default_is_unknown() {
        assert_eq!(Maybe::<i32>::default(), unknown());
    }

    #[test]
    fn test_conversions_with_option() {
        assert_eq!(Maybe::from(Some(5)), known(5));
        assert_eq!(Maybe::from(None::<i32>), unknown());
        assert_eq!(Option::from(known(5)), Some(5));
        assert_eq!(Option::<i32>::from(unknown::<i32>()), None);
    }

    #[test]
    fn test_known_value() {
        assert_eq!(known(42).known_value(), Some(42));
        assert_eq!(unknown::<i32>().known_value(), None);
    }

    #[test]
    fn test_expect_known() {
        assert_eq!(known(42).expect_known("should be known"), 42);
    }

    #[test]
    #[should_panic(expected = "should be known")]
    fn test_expect_known_panics() {
        unknown::<i32>().expect_known("should be known");
    }

    #[test]
    fn test_unwrap_known() {
        assert_eq!(known(42).unwrap_known(), 42);
    }

    #[test]
    #[should_panic(expected = "called `Maybe::unwrap_known()` on an `Unknown` value")]
    fn test_unwrap_known_panics() {
        unknown::<i32>().unwrap_known();
    }
}
