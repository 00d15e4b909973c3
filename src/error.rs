//! Contract-violation errors.
//!
//! These errors describe programming mistakes rather than data failures:
//! asking a `Nil` list for its head, or asking a `Result` for the payload of
//! a variant it does not hold. Data failures travel inside
//! [`Result`](crate::control::Result) as a [`Cause`](crate::control::Cause)
//! instead.
//!
//! Building a `Result` or list variant directly is not an error at runtime:
//! the variant representation is private, so such code does not compile.

use std::fmt;

use thiserror::Error;

/// The three shapes a [`Result`](crate::control::Result) can take.
///
/// Used to describe variants in error messages and diagnostics; it cannot be
/// turned into a `Result` by itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VariantName {
    /// A successful value.
    Success,
    /// A failure with a cause.
    Failure,
    /// Neither a value nor an error.
    Empty,
}

impl fmt::Display for VariantName {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Success => "Success",
            Self::Failure => "Failure",
            Self::Empty => "Empty",
        };
        formatter.write_str(name)
    }
}

/// Returned by `head`, `tail` and `set_head` on an empty list.
///
/// # Examples
///
/// ```rust
/// use fpinrs::list;
/// use fpinrs::persistent::SinglyLinkedList;
///
/// let empty: SinglyLinkedList<i32> = list![];
/// let error = empty.head().unwrap_err();
/// assert_eq!(error.to_string(), "head called on an empty list");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("{operation} called on an empty list")]
pub struct EmptyListAccess {
    /// The name of the operation that needed a non-empty list.
    pub operation: &'static str,
}

/// Returned by `success_value` and `failure_value` on the wrong variant.
///
/// # Examples
///
/// ```rust
/// use fpinrs::control::Result;
///
/// let empty: Result<i32> = Result::empty();
/// let error = empty.success_value().unwrap_err();
/// assert_eq!(error.to_string(), "expected Success but found Empty");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("expected {expected} but found {found}")]
pub struct StateMismatch {
    /// The variant the accessor requires.
    pub expected: VariantName,
    /// The variant the receiver actually holds.
    pub found: VariantName,
}

/// Any contract violation raised by this crate.
///
/// Lets callers combine list and result accessors with `?`.
///
/// # Examples
///
/// ```rust
/// use fpinrs::error::Error;
/// use fpinrs::list;
///
/// fn first_plus_one() -> Result<i32, Error> {
///     let numbers = list![1, 2, 3];
///     Ok(*numbers.head()? + 1)
/// }
///
/// assert_eq!(first_plus_one(), Ok(2));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// A list operation needed at least one element.
    #[error(transparent)]
    EmptyListAccess(#[from] EmptyListAccess),
    /// A result accessor was used on the wrong variant.
    #[error(transparent)]
    StateMismatch(#[from] StateMismatch),
}
