//! Result container and its failure causes.
//!
//! - [`Result`]: success, failure with a [`Cause`], or empty
//! - [`Cause`]: why a computation failed, tagged with a [`CauseKind`]
//! - [`lift2`]: lifts a binary function over two results
//!
//! # Examples
//!
//! ```rust
//! use fpinrs::control::{Result, lift2};
//!
//! let multiply = lift2(|a: i32, b: i32| a * b);
//! let product = multiply(Result::of(Some(6)), Result::of(Some(7)));
//! assert_eq!(product.get_or_else(0), 42);
//!
//! let missing = multiply(Result::of(Some(6)), Result::of(None));
//! assert!(missing.is_failure());
//! ```

mod cause;
mod firewall;
mod result;

pub use cause::{Cause, CauseKind};
pub use result::{Result, lift2};

pub(crate) use firewall::guard;
