//! Bridging lists and results.
//!
//! - [`traverse`]: applies a result-producing step to every element and
//!   gathers the outputs into one result
//! - [`sequence`]: turns a list of results into a result of a list
//! - [`flatten_result`]: a display transform that keeps one slot per result
//!
//! # Examples
//!
//! ```rust
//! use fpinrs::control::Result;
//! use fpinrs::list;
//! use fpinrs::traverse::{flatten_result, sequence, traverse};
//!
//! let incremented = traverse(&list![1, 2, 3], |x| Result::success(x + 1));
//! assert_eq!(incremented.to_string(), "Result([2, 3, 4, NIL])");
//!
//! let results = list![Result::success(1), Result::failure("oops"), Result::success(3)];
//! assert!(sequence(&results).is_failure());
//! assert_eq!(flatten_result(&results).to_string(), "[1, [NIL], 3, NIL]");
//! ```

use std::fmt;

use crate::control::{self, Cause, CauseKind, Result};
use crate::persistent::SinglyLinkedList;

/// Applies `step` to every element, front to back, collecting the outputs.
///
/// Returns a success holding the outputs in order when every step succeeds.
/// Stops at the first step that does not: a failure is returned with its
/// cause, an empty result is reported as a failure of kind
/// [`CauseKind::Missing`]. A panic inside `step` becomes a failure of kind
/// [`CauseKind::Panic`].
///
/// # Examples
///
/// ```rust
/// use fpinrs::control::{CauseKind, Result};
/// use fpinrs::list;
/// use fpinrs::traverse::traverse;
///
/// let halves = traverse(&list![2, 4, 6], |x| {
///     if x % 2 == 0 { Result::success(x / 2) } else { Result::failure(format!("{x} is odd")) }
/// });
/// assert_eq!(halves.success_value().unwrap().to_vec(), vec![1, 2, 3]);
///
/// let odd = traverse(&list![2, 3, 5], |x| {
///     if x % 2 == 0 { Result::success(x / 2) } else { Result::failure(format!("{x} is odd")) }
/// });
/// assert_eq!(odd.failure_value().unwrap().message(), "3 is odd");
///
/// let vanished = traverse(&list![1], |_| Result::<i32>::empty());
/// assert_eq!(vanished.failure_value().unwrap().kind(), CauseKind::Missing);
/// ```
pub fn traverse<T, U, F>(list: &SinglyLinkedList<T>, mut step: F) -> Result<SinglyLinkedList<U>>
where
    F: FnMut(&T) -> Result<U>,
{
    let mut outputs = Vec::with_capacity(list.length());
    for (position, element) in list.iter().enumerate() {
        let outcome = match control::guard(|| step(element)) {
            Ok(outcome) => outcome,
            Err(cause) => Result::failure(cause),
        };
        let variant = outcome.variant_name();
        match outcome.fold(Ok, Err, || Err(empty_step_cause(position))) {
            Ok(output) => outputs.push(output),
            Err(cause) => {
                tracing::trace!(position, %variant, "traverse short-circuited");
                return Result::failure(cause);
            }
        }
    }
    Result::success(outputs.into_iter().collect())
}

/// Turns a list of results into a result of a list.
///
/// Behaves like [`traverse`] with the identity step.
///
/// # Examples
///
/// ```rust
/// use fpinrs::control::Result;
/// use fpinrs::list;
/// use fpinrs::persistent::SinglyLinkedList;
/// use fpinrs::traverse::sequence;
///
/// assert_eq!(sequence(&list![Result::success(1)]), Result::success(list![1]));
///
/// let none: SinglyLinkedList<Result<i32>> = list![];
/// assert_eq!(sequence(&none), Result::success(list![]));
/// ```
pub fn sequence<T: Clone>(list: &SinglyLinkedList<Result<T>>) -> Result<SinglyLinkedList<T>> {
    traverse(list, Clone::clone)
}

/// Replaces every result by a [`Slot`], keeping order and length.
///
/// Successes become [`Slot::Filled`] with their value; failures and empty
/// results become [`Slot::Vacant`]. The output is a plain list and never
/// fails.
///
/// # Examples
///
/// ```rust
/// use fpinrs::control::Result;
/// use fpinrs::list;
/// use fpinrs::traverse::{Slot, flatten_result};
///
/// let slots = flatten_result(&list![Result::success(1), Result::empty()]);
/// assert_eq!(slots.to_vec(), vec![Slot::Filled(1), Slot::Vacant]);
/// ```
pub fn flatten_result<T: Clone>(list: &SinglyLinkedList<Result<T>>) -> SinglyLinkedList<Slot<T>> {
    list.map(|result| {
        result
            .success_value()
            .map_or(Slot::Vacant, |value| Slot::Filled(value.clone()))
    })
}

fn empty_step_cause(position: usize) -> Cause {
    Cause::with_kind(
        CauseKind::Missing,
        format!("empty result at position {position}"),
    )
}

/// One element of a flattened list of results.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Slot<T> {
    /// The value of a success.
    Filled(T),
    /// Stands in for a failure or an empty result.
    Vacant,
}

impl<T> Slot<T> {
    /// Returns `true` for a filled slot.
    #[inline]
    #[must_use]
    pub const fn is_filled(&self) -> bool {
        matches!(self, Self::Filled(_))
    }

    /// Converts into an `Option`.
    #[inline]
    #[must_use]
    pub fn into_option(self) -> Option<T> {
        match self {
            Self::Filled(value) => Some(value),
            Self::Vacant => None,
        }
    }
}

/// A filled slot renders as its value, a vacant one as `[NIL]`.
impl<T: fmt::Display> fmt::Display for Slot<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Filled(value) => write!(formatter, "{value}"),
            Self::Vacant => formatter.write_str("[NIL]"),
        }
    }
}

// =============================================================================
// List Methods
// =============================================================================

impl<T> SinglyLinkedList<T> {
    /// Method form of [`traverse`].
    pub fn traverse<U, F>(&self, step: F) -> Result<SinglyLinkedList<U>>
    where
        F: FnMut(&T) -> Result<U>,
    {
        traverse(self, step)
    }
}

impl<T: Clone> SinglyLinkedList<Result<T>> {
    /// Method form of [`sequence`].
    pub fn sequence(&self) -> Result<SinglyLinkedList<T>> {
        sequence(self)
    }

    /// Method form of [`flatten_result`].
    #[must_use]
    pub fn flatten_result(&self) -> SinglyLinkedList<Slot<T>> {
        flatten_result(self)
    }
}
