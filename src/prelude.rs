//! Commonly used imports
//!
//! Use `use maybe::prelude::*;` for quick access to the most common types and functions.

// Core type and its variants
pub use crate::Maybe::{self, Known, Unknown};

// Constructors
pub use crate::{known, possibly, unknown};

// Error raising
pub use crate::{ConfigError, Raise, Raised, StateError};
