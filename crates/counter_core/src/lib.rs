#![forbid(unsafe_code)]
#![cfg_attr(not(feature = "std"), no_std)]
#![allow(clippy::must_use_candidate)]

//! # Counter Core
//!
//! Pure transitions over a signed counter value.
//!
//! Every function here is stateless, total over `i64` and free of side
//! effects. The caller owns the value and replaces it with the result:
//!
//! ```rust
//! use counter_core::{decrement, increment, reset, INITIAL_VALUE};
//!
//! let mut value = INITIAL_VALUE;
//! value = increment(value);
//! value = increment(value);
//! value = decrement(value);
//! assert_eq!(value, 1);
//!
//! value = reset();
//! assert_eq!(value, 0);
//! ```
//!
//! ## Overflow
//!
//! Arithmetic wraps in two's complement at the `i64` bounds, so
//! `increment(i64::MAX) == i64::MIN`. Wrapping keeps the inverse laws exact
//! for every input:
//!
//! ```rust
//! use counter_core::{decrement, increment};
//!
//! assert_eq!(increment(i64::MAX), i64::MIN);
//! assert_eq!(decrement(increment(i64::MAX)), i64::MAX);
//! ```

mod ops;
mod sign;

pub use ops::{
    decrement, decrement_by, increment, increment_by, is_negative, is_positive, is_zero, reset,
    INITIAL_VALUE,
};
pub use sign::Sign;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::{
        decrement, decrement_by, increment, increment_by, is_negative, is_positive, is_zero,
        reset, Sign, INITIAL_VALUE,
    };
}
