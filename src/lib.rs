//! # fpinrs
//!
//! Two composable, immutable functional data types and the operations that
//! bridge them:
//!
//! - **[`Result`](control::Result)**: a tri-state container holding a success
//!   value, a failure [`Cause`](control::Cause), or nothing at all. Callbacks
//!   passed to `map` and `flat_map` run behind a panic firewall, so a chain of
//!   steps always ends in a value.
//! - **[`SinglyLinkedList`](persistent::SinglyLinkedList)**: a persistent cons
//!   list with structural sharing and stack-safe folds.
//! - **[`traverse`](traverse::traverse)** and
//!   **[`sequence`](traverse::sequence)**: lift result-producing steps over a
//!   list.
//!
//! ## Feature Flags
//!
//! - `arc` (default): share list cells through `Arc`, making lists and
//!   results `Send + Sync`; without it cells use `Rc`
//! - `serde`: `Serialize`/`Deserialize` for lists, results and slots
//! - `full`: enable all features
//!
//! ## Example
//!
//! ```rust
//! use fpinrs::prelude::*;
//!
//! let parsed = list!["1", "2", "3"].traverse(|text| Result::of(text.parse::<i32>().ok()));
//! assert_eq!(parsed.to_string(), "Result([1, 2, 3, NIL])");
//!
//! let rejected = list!["1", "two"].traverse(|text| Result::of(text.parse::<i32>().ok()));
//! assert_eq!(rejected.failure_value().unwrap().message(), "missing value");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// Re-exports the container types, the bridging functions and the
/// [`list!`] macro.
///
/// # Usage
///
/// ```rust
/// use fpinrs::prelude::*;
/// ```
pub mod prelude {
    pub use crate::control::{Cause, CauseKind, Result, lift2};
    pub use crate::list;
    pub use crate::persistent::SinglyLinkedList;
    pub use crate::traverse::{Slot, flatten_result, sequence, traverse};
}

pub mod control;
pub mod error;
pub mod persistent;
pub mod traverse;
