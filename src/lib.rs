//! # Maybe: explicit optional values
//!
//! A container for values that may be unknown, with combinators for safely
//! extracting, defaulting, transforming, filtering, and querying the held
//! value. Absence is an ordinary state of the container, never a null.
//!
//! ## Core Type
//!
//! - **[`Maybe<T>`]**: either `Known(value)` or `Unknown`
//!
//! ## Key Features
//!
//! - **Defaulting**: eager `.otherwise()`, lazy `.otherwise_with()`, and
//!   fallback chains with `.otherwise_maybe()`
//! - **Composable**: `.transform()`, `.bind()`, `.filter()`, `.query()`
//! - **Error raising**: `.otherwise_throw()` for prebuilt errors, or errors
//!   built by type at the raise site via [`Raise`]
//! - **Iterable**: zero or one element, usable in `for` loops and iterator
//!   chains
//!
//! ## Example
//!
//! ```
//! use maybe::prelude::*;
//!
//! let address: Maybe<String> = known("alice@example.com".to_string());
//!
//! let display = address
//!     .transform(|a| a.to_uppercase())
//!     .otherwise("UNKNOWN".to_string());
//! assert_eq!(display, "ALICE@EXAMPLE.COM");
//! ```
//!
//! ## Common Functions
//!
//! **Building containers:**
//! - [`known(value)`] - wrap a present value
//! - [`unknown()`] - the absent container
//! - [`possibly(option)`] - absent for `None`, present for `Some`
//!
//! **Getting values back out:**
//! - [`Maybe::otherwise`] - the value, or a default
//! - [`Maybe::otherwise_throw`] - the value, or a caller-supplied error
//! - [`Maybe::otherwise_raise`] - the value, or an error built by its type

mod iter;
mod maybe;
pub mod prelude;
mod raise;
#[cfg(feature = "serde")]
mod serde_impls;

pub use iter::{IntoIter, Iter, IterMut};
pub use maybe::{known, possibly, unknown, AbsentValueError, Maybe};
pub use raise::{ConfigError, Raise, Raised, StateError};
