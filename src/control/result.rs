//! Tri-state result container.
//!
//! [`Result<T>`] is either a success holding a value, a failure holding a
//! [`Cause`], or empty (no value and no error). Values are built only
//! through factories, so the invariants they establish (for example that
//! [`Result::of`] never produces a success from a missing value) cannot be
//! bypassed.
//!
//! Composition short-circuits: once a computation fails or comes up empty,
//! later [`map`](Result::map) and [`flat_map`](Result::flat_map) steps are
//! skipped and the original variant flows through untouched. Callbacks that
//! do run are guarded, so a panicking step yields a failure instead of
//! unwinding.
//!
//! # Examples
//!
//! ```rust
//! use fpinrs::control::Result;
//!
//! let parsed = Result::of("42".parse::<i32>().ok())
//!     .map(|value| value * 2)
//!     .flat_map(|value| if value > 0 { Result::success(value) } else { Result::empty() });
//! assert_eq!(parsed.get_or_else(0), 84);
//!
//! let empty: Vec<i32> = Vec::new();
//! let indexed = Result::success(3).map(|index: usize| empty[index]);
//! assert!(indexed.is_failure());
//! ```

use std::fmt;

use super::cause::{Cause, CauseKind};
use super::firewall;
use crate::error::{StateMismatch, VariantName};

#[derive(Clone, PartialEq, Eq)]
enum Variant<T> {
    Success(T),
    Failure(Cause),
    Empty,
}

/// A value that is a success, a failure with a cause, or empty.
///
/// # Examples
///
/// ```rust
/// use fpinrs::control::Result;
///
/// let present = Result::of(Some(1));
/// let missing: Result<i32> = Result::of(None);
/// let nothing: Result<i32> = Result::empty();
///
/// assert!(present.is_success());
/// assert!(missing.is_failure());
/// assert!(nothing.is_empty());
/// assert_eq!(missing.failure_value().unwrap().to_string(), "missing value");
/// ```
///
/// The variants cannot be built directly:
///
/// ```compile_fail
/// let forged = fpinrs::control::Result::<i32> { variant: unreachable!() };
/// ```
#[must_use]
#[derive(Clone, PartialEq, Eq)]
pub struct Result<T> {
    variant: Variant<T>,
}

impl<T> Result<T> {
    // =========================================================================
    // Factories
    // =========================================================================

    #[inline]
    const fn from_variant(variant: Variant<T>) -> Self {
        Self { variant }
    }

    /// Wraps a possibly missing value.
    ///
    /// `Some(value)` becomes a success; `None` becomes a failure of kind
    /// [`CauseKind::Missing`] described as `"missing value"`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fpinrs::control::{CauseKind, Result};
    ///
    /// assert_eq!(Result::of(Some(3)).get_or_else(0), 3);
    ///
    /// let missing: Result<i32> = Result::of(None);
    /// assert_eq!(missing.failure_value().unwrap().kind(), CauseKind::Missing);
    /// ```
    pub fn of(value: Option<T>) -> Self {
        value.map_or_else(|| Self::failure(Cause::missing()), Self::success)
    }

    /// Wraps `value` as a success without any presence check.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fpinrs::control::Result;
    ///
    /// let wrapped: Result<Option<i32>> = Result::success(None);
    /// assert!(wrapped.is_success());
    /// ```
    #[inline]
    pub const fn success(value: T) -> Self {
        Self::from_variant(Variant::Success(value))
    }

    /// Builds a failure from text or an existing [`Cause`].
    ///
    /// Text becomes a cause of kind [`CauseKind::Runtime`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fpinrs::control::{CauseKind, Result};
    ///
    /// let failed: Result<i32> = Result::failure("oops");
    /// let cause = failed.failure_value().unwrap();
    /// assert_eq!(cause.message(), "oops");
    /// assert_eq!(cause.kind(), CauseKind::Runtime);
    /// ```
    pub fn failure(cause: impl Into<Cause>) -> Self {
        Self::from_variant(Variant::Failure(cause.into()))
    }

    /// Builds a failure whose cause has the given kind.
    pub fn failure_with(kind: CauseKind, message: impl Into<String>) -> Self {
        Self::failure(Cause::with_kind(kind, message))
    }

    /// Builds a failure wrapping an existing error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fpinrs::control::Result;
    ///
    /// let error = "x".parse::<i32>().unwrap_err();
    /// let failed: Result<i32> = Result::failure_from_error(error);
    /// assert_eq!(
    ///     failed.failure_value().unwrap().message(),
    ///     "invalid digit found in string"
    /// );
    /// ```
    pub fn failure_from_error<E>(error: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::failure(Cause::from_error(error))
    }

    /// Builds a failure from another result, propagating its cause.
    ///
    /// A failure hands over its cause unchanged. A success or empty result
    /// has no cause to give, so the failure describes the state mismatch.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fpinrs::control::Result;
    ///
    /// let first: Result<i32> = Result::failure("oops");
    /// let second: Result<String> = Result::failure_from(&first);
    /// assert_eq!(second.failure_value(), first.failure_value());
    /// ```
    pub fn failure_from<U>(other: &Result<U>) -> Self {
        match &other.variant {
            Variant::Failure(cause) => Self::failure(cause.clone()),
            Variant::Success(_) | Variant::Empty => {
                let mismatch = StateMismatch {
                    expected: VariantName::Failure,
                    found: other.variant_name(),
                };
                Self::failure_with(CauseKind::State, mismatch.to_string())
            }
        }
    }

    /// The empty result.
    #[inline]
    pub const fn empty() -> Self {
        Self::from_variant(Variant::Empty)
    }

    // =========================================================================
    // Inspection
    // =========================================================================

    /// Returns `true` for a success.
    #[inline]
    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self.variant, Variant::Success(_))
    }

    /// Returns `true` for a failure.
    #[inline]
    #[must_use]
    pub const fn is_failure(&self) -> bool {
        matches!(self.variant, Variant::Failure(_))
    }

    /// Returns `true` for the empty result.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        matches!(self.variant, Variant::Empty)
    }

    /// Names the variant held.
    #[inline]
    #[must_use]
    pub const fn variant_name(&self) -> VariantName {
        match self.variant {
            Variant::Success(_) => VariantName::Success,
            Variant::Failure(_) => VariantName::Failure,
            Variant::Empty => VariantName::Empty,
        }
    }

    /// Borrows the success value.
    ///
    /// # Errors
    ///
    /// Returns [`StateMismatch`] when the result is a failure or empty.
    pub fn success_value(&self) -> std::result::Result<&T, StateMismatch> {
        match &self.variant {
            Variant::Success(value) => Ok(value),
            Variant::Failure(_) | Variant::Empty => Err(StateMismatch {
                expected: VariantName::Success,
                found: self.variant_name(),
            }),
        }
    }

    /// Borrows the failure cause.
    ///
    /// # Errors
    ///
    /// Returns [`StateMismatch`] when the result is a success or empty.
    pub fn failure_value(&self) -> std::result::Result<&Cause, StateMismatch> {
        match &self.variant {
            Variant::Failure(cause) => Ok(cause),
            Variant::Success(_) | Variant::Empty => Err(StateMismatch {
                expected: VariantName::Failure,
                found: self.variant_name(),
            }),
        }
    }

    /// The cause, if this is a failure.
    #[inline]
    #[must_use]
    pub const fn cause(&self) -> Option<&Cause> {
        match &self.variant {
            Variant::Failure(cause) => Some(cause),
            Variant::Success(_) | Variant::Empty => None,
        }
    }

    /// Borrows the payload, producing a `Result<&T>`.
    pub fn as_ref(&self) -> Result<&T> {
        match &self.variant {
            Variant::Success(value) => Result::success(value),
            Variant::Failure(cause) => Result::failure(cause.clone()),
            Variant::Empty => Result::empty(),
        }
    }

    /// Converts into an `Option`, discarding any cause.
    #[must_use]
    pub fn ok(self) -> Option<T> {
        match self.variant {
            Variant::Success(value) => Some(value),
            Variant::Failure(_) | Variant::Empty => None,
        }
    }

    // =========================================================================
    // Composition
    // =========================================================================

    /// Transforms the success value.
    ///
    /// A panic inside `function` is captured and returned as a failure of
    /// kind [`CauseKind::Panic`]. Failures and empty results pass through
    /// unchanged and `function` is not called.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fpinrs::control::Result;
    ///
    /// assert_eq!(Result::success(1).map(|x| x + 1), Result::success(2));
    ///
    /// let failed: Result<i32> = Result::failure("oops");
    /// assert_eq!(failed.clone().map(|x| x + 1), failed);
    /// ```
    pub fn map<U, F>(self, function: F) -> Result<U>
    where
        F: FnOnce(T) -> U,
    {
        match self.variant {
            Variant::Success(value) => match firewall::guard(|| function(value)) {
                Ok(mapped) => Result::success(mapped),
                Err(cause) => Result::failure(cause),
            },
            Variant::Failure(cause) => Result::failure(cause),
            Variant::Empty => Result::empty(),
        }
    }

    /// Transforms the success value with a fallible function.
    ///
    /// An `Err` returned by `function` becomes a failure wrapping that error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fpinrs::control::{CauseKind, Result};
    ///
    /// let parsed = Result::success("12").try_map(|text| text.parse::<i32>());
    /// assert_eq!(parsed, Result::success(12));
    ///
    /// let rejected = Result::success("twelve").try_map(|text| text.parse::<i32>());
    /// assert_eq!(rejected.failure_value().unwrap().kind(), CauseKind::External);
    /// ```
    pub fn try_map<U, E, F>(self, function: F) -> Result<U>
    where
        E: std::error::Error + Send + Sync + 'static,
        F: FnOnce(T) -> std::result::Result<U, E>,
    {
        self.flat_map(|value| match function(value) {
            Ok(mapped) => Result::success(mapped),
            Err(error) => Result::failure_from_error(error),
        })
    }

    /// Chains a computation that itself returns a result.
    ///
    /// The result of `function` is returned as is. A panic inside `function`
    /// becomes a failure; failures and empty results short-circuit.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fpinrs::control::Result;
    ///
    /// let halved = Result::success(8).flat_map(|x| {
    ///     if x % 2 == 0 { Result::success(x / 2) } else { Result::failure("odd") }
    /// });
    /// assert_eq!(halved, Result::success(4));
    ///
    /// let vanished = Result::success(1).flat_map(|_| Result::<i32>::empty());
    /// assert!(vanished.is_empty());
    /// ```
    pub fn flat_map<U, F>(self, function: F) -> Result<U>
    where
        F: FnOnce(T) -> Result<U>,
    {
        match self.variant {
            Variant::Success(value) => match firewall::guard(|| function(value)) {
                Ok(next) => next,
                Err(cause) => Result::failure(cause),
            },
            Variant::Failure(cause) => Result::failure(cause),
            Variant::Empty => Result::empty(),
        }
    }

    /// Combines two results with a binary function.
    ///
    /// Equivalent to `lift2(function)(self, other)`: the first non-success
    /// argument, from left to right, decides the outcome.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fpinrs::control::Result;
    ///
    /// let sum = Result::success(2).map2(Result::success(3), |a, b| a + b);
    /// assert_eq!(sum, Result::success(5));
    ///
    /// let missing = Result::success(2).map2(Result::<i32>::empty(), |a, b| a + b);
    /// assert!(missing.is_empty());
    /// ```
    pub fn map2<B, C, F>(self, other: Result<B>, function: F) -> Result<C>
    where
        F: FnOnce(T, B) -> C,
    {
        self.flat_map(|first| other.map(|second| function(first, second)))
    }

    /// Eliminates the result by handling each variant.
    pub fn fold<R, S, G, H>(self, on_success: S, on_failure: G, on_empty: H) -> R
    where
        S: FnOnce(T) -> R,
        G: FnOnce(Cause) -> R,
        H: FnOnce() -> R,
    {
        match self.variant {
            Variant::Success(value) => on_success(value),
            Variant::Failure(cause) => on_failure(cause),
            Variant::Empty => on_empty(),
        }
    }

    // =========================================================================
    // Extraction
    // =========================================================================

    /// Returns the success value or `default`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fpinrs::control::Result;
    ///
    /// assert_eq!(Result::success(1).get_or_else(2), 1);
    /// assert_eq!(Result::<i32>::failure("bad input").get_or_else(2), 2);
    /// ```
    pub fn get_or_else(self, default: T) -> T {
        match self.variant {
            Variant::Success(value) => value,
            Variant::Failure(_) | Variant::Empty => default,
        }
    }

    /// Returns the success value or the output of `supplier`.
    ///
    /// `supplier` is only called for failures and empty results.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fpinrs::control::Result;
    ///
    /// assert_eq!(Result::success(1).get_or_else_with(|| unreachable!()), 1);
    /// assert_eq!(Result::<i32>::empty().get_or_else_with(|| 2), 2);
    /// ```
    pub fn get_or_else_with<F>(self, supplier: F) -> T
    where
        F: FnOnce() -> T,
    {
        match self.variant {
            Variant::Success(value) => value,
            Variant::Failure(_) | Variant::Empty => supplier(),
        }
    }

    // =========================================================================
    // Effects
    // =========================================================================

    /// Runs `effect` on the success value; does nothing otherwise.
    pub fn for_each<F>(&self, effect: F)
    where
        F: FnOnce(&T),
    {
        if let Variant::Success(value) = &self.variant {
            effect(value);
        }
    }

    /// Runs `effect` on a success and exposes the cause of a failure.
    ///
    /// A success runs `effect` and yields an empty result. A failure does not
    /// run `effect` and yields a success holding its cause. An empty result
    /// stays empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fpinrs::control::Result;
    ///
    /// assert!(Result::success(1).for_each_or_exception(|_| {}).is_empty());
    ///
    /// let failed: Result<i32> = Result::failure("oops");
    /// let exposed = failed.for_each_or_exception(|_| unreachable!());
    /// assert_eq!(exposed.success_value().unwrap().message(), "oops");
    /// ```
    pub fn for_each_or_exception<F>(&self, effect: F) -> Result<Cause>
    where
        F: FnOnce(&T),
    {
        match &self.variant {
            Variant::Success(value) => {
                effect(value);
                Result::empty()
            }
            Variant::Failure(cause) => Result::success(cause.clone()),
            Variant::Empty => Result::empty(),
        }
    }

    /// Runs `effect` on a success and exposes the description of a failure.
    ///
    /// A success runs `effect` and yields an empty result. A failure yields a
    /// success holding the rendered cause. An empty result stays empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fpinrs::control::Result;
    ///
    /// let failed: Result<i32> = Result::failure("oops");
    /// let described = failed.for_each_or_fail(|_| {});
    /// assert_eq!(described.success_value().map(String::as_str), Ok("oops"));
    /// ```
    pub fn for_each_or_fail<F>(&self, effect: F) -> Result<String>
    where
        F: FnOnce(&T),
    {
        match &self.variant {
            Variant::Success(value) => {
                effect(value);
                Result::empty()
            }
            Variant::Failure(cause) => Result::success(cause.to_string()),
            Variant::Empty => Result::empty(),
        }
    }

    /// Replaces the description of a failure.
    ///
    /// The new cause keeps the kind and chains the old cause as its source.
    /// Successes and empty results are returned unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fpinrs::control::Result;
    ///
    /// let failed: Result<i32> = Result::failure("oops").map_failure("oh well");
    /// assert_eq!(failed.failure_value().unwrap().to_string(), "oh well");
    /// ```
    pub fn map_failure(self, message: impl Into<String>) -> Self {
        match self.variant {
            Variant::Failure(cause) => Self::failure(cause.redescribe(message)),
            variant @ (Variant::Success(_) | Variant::Empty) => Self::from_variant(variant),
        }
    }
}

/// Lifts a binary function to operate on results.
///
/// The returned function flat-maps over its first argument and maps over its
/// second, so the first non-success argument, left to right, is returned.
///
/// # Examples
///
/// ```rust
/// use fpinrs::control::{lift2, Result};
///
/// let add = lift2(|a: i32, b: i32| a + b);
/// assert_eq!(add(Result::success(1), Result::success(2)), Result::success(3));
///
/// let failed = add(Result::failure("left"), Result::failure("right"));
/// assert_eq!(failed.failure_value().unwrap().message(), "left");
/// ```
pub fn lift2<A, B, C, F>(function: F) -> impl Fn(Result<A>, Result<B>) -> Result<C>
where
    F: Fn(A, B) -> C,
{
    move |first: Result<A>, second: Result<B>| {
        let function = &function;
        first.flat_map(|a| second.map(|b| function(a, b)))
    }
}

impl<T> From<Option<T>> for Result<T> {
    fn from(value: Option<T>) -> Self {
        Self::of(value)
    }
}

impl<T: fmt::Debug> fmt::Debug for Result<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.variant {
            Variant::Success(value) => formatter.debug_tuple("Success").field(value).finish(),
            Variant::Failure(cause) => formatter.debug_tuple("Failure").field(cause).finish(),
            Variant::Empty => formatter.write_str("Empty"),
        }
    }
}

impl<T: fmt::Display> fmt::Display for Result<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.variant {
            Variant::Success(value) => write!(formatter, "Result({value})"),
            Variant::Failure(cause) => write!(formatter, "Failure({cause})"),
            Variant::Empty => formatter.write_str("Empty"),
        }
    }
}

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
#[derive(serde::Serialize)]
#[serde(rename = "Result")]
enum SerializedResultRef<'a, T> {
    Success(&'a T),
    Failure { kind: CauseKind, message: &'a str },
    Empty,
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
#[serde(rename = "Result")]
enum SerializedResult<T> {
    Success(T),
    Failure { kind: CauseKind, message: String },
    Empty,
}

#[cfg(feature = "serde")]
impl<T: serde::Serialize> serde::Serialize for Result<T> {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let serialized = match &self.variant {
            Variant::Success(value) => SerializedResultRef::Success(value),
            Variant::Failure(cause) => SerializedResultRef::Failure {
                kind: cause.kind(),
                message: cause.message(),
            },
            Variant::Empty => SerializedResultRef::Empty,
        };
        serde::Serialize::serialize(&serialized, serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de, T> serde::Deserialize<'de> for Result<T>
where
    T: serde::Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let serialized: SerializedResult<T> = serde::Deserialize::deserialize(deserializer)?;
        Ok(match serialized {
            SerializedResult::Success(value) => Self::success(value),
            SerializedResult::Failure { kind, message } => Self::failure_with(kind, message),
            SerializedResult::Empty => Self::empty(),
        })
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::cell::Cell;

    #[rstest]
    fn test_of_present_value_is_success() {
        let result = Result::of(Some(1));
        assert!(result.is_success());
        assert_eq!(result.variant_name(), VariantName::Success);
    }

    #[rstest]
    fn test_of_missing_value_is_failure() {
        let result: Result<i32> = Result::of(None);
        assert!(result.is_failure());
        assert_eq!(result.cause().map(Cause::message), Some("missing value"));
    }

    #[rstest]
    fn test_success_accepts_missing_sentinel() {
        let result: Result<Option<i32>> = Result::success(None);
        assert_eq!(result.success_value(), Ok(&None));
    }

    #[rstest]
    fn test_failure_from_failure_propagates_cause() {
        let original: Result<i32> = Result::failure_with(CauseKind::Value, "oops");
        let propagated: Result<u8> = Result::failure_from(&original);
        assert_eq!(propagated.cause(), original.cause());
    }

    #[rstest]
    fn test_failure_from_success_reports_state() {
        let propagated: Result<u8> = Result::failure_from(&Result::success(1));
        let cause = propagated.failure_value().unwrap();
        assert_eq!(cause.kind(), CauseKind::State);
        assert_eq!(cause.message(), "expected Failure but found Success");
    }

    #[rstest]
    fn test_map_is_not_applied_to_empty() {
        let applied = Cell::new(false);
        let result = Result::<i32>::empty().map(|x| {
            applied.set(true);
            x
        });
        assert!(result.is_empty());
        assert!(!applied.get());
    }

    #[rstest]
    fn test_map_captures_panic() {
        let result = Result::success(1).map(|x: i32| -> i32 { panic!("bad step {x}") });
        let cause = result.failure_value().unwrap();
        assert_eq!(cause.kind(), CauseKind::Panic);
        assert_eq!(cause.message(), "bad step 1");
    }

    #[rstest]
    fn test_flat_map_captures_panic() {
        let result: Result<i32> = Result::success(1).flat_map(|_| panic!("nope"));
        assert!(result.is_failure());
    }

    #[rstest]
    fn test_map_failure_leaves_success() {
        let result = Result::success(1).map_failure("new error message");
        assert_eq!(result, Result::success(1));
    }

    #[rstest]
    fn test_as_ref_keeps_variant() {
        let failed: Result<String> = Result::failure("oops");
        assert_eq!(failed.as_ref().cause(), failed.cause());
        let success = Result::success("text".to_string());
        assert_eq!(success.as_ref().ok().map(String::len), Some(4));
    }

    #[rstest]
    fn test_fold_dispatches_by_variant() {
        let render = |result: Result<i32>| {
            result.fold(
                |value| format!("value {value}"),
                |cause| format!("cause {cause}"),
                || "nothing".to_string(),
            )
        };
        assert_eq!(render(Result::success(3)), "value 3");
        assert_eq!(render(Result::failure("bad")), "cause bad");
        assert_eq!(render(Result::empty()), "nothing");
    }

    #[rstest]
    #[case(Result::success(1), "Result(1)")]
    #[case(Result::failure("oops"), "Failure(oops)")]
    #[case(Result::empty(), "Empty")]
    fn test_display(#[case] result: Result<i32>, #[case] rendered: &str) {
        assert_eq!(result.to_string(), rendered);
    }

    #[rstest]
    fn test_debug() {
        assert_eq!(format!("{:?}", Result::success(1)), "Success(1)");
        assert_eq!(format!("{:?}", Result::<i32>::empty()), "Empty");
        assert!(format!("{:?}", Result::<i32>::failure("oops")).starts_with("Failure(Cause"));
    }
}
