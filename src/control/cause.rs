//! The payload of a failed [`Result`](super::Result).
//!
//! A [`Cause`] is a textual description tagged with a [`CauseKind`] and,
//! optionally, the underlying error that produced it.

use std::any::Any;
use std::error::Error as StdError;
use std::fmt;
use std::sync::Arc;

/// The text used when `Result::of` receives no value.
pub(crate) const MISSING_VALUE: &str = "missing value";

/// Shared handle to an underlying error.
type SharedError = Arc<dyn StdError + Send + Sync + 'static>;

/// The category of a [`Cause`].
///
/// Plays the role of an exception type: it lets callers tell apart failures
/// raised from plain text, missing values, caught panics and wrapped errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CauseKind {
    /// A generic runtime failure. The default for text causes.
    #[default]
    Runtime,
    /// An argument or value was unacceptable.
    Value,
    /// A value was absent where one was required.
    Missing,
    /// A callback panicked and the panic was captured.
    Panic,
    /// A result was in an unexpected state.
    State,
    /// An error value produced outside this crate.
    External,
}

impl fmt::Display for CauseKind {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Runtime => "runtime",
            Self::Value => "value",
            Self::Missing => "missing",
            Self::Panic => "panic",
            Self::State => "state",
            Self::External => "external",
        };
        formatter.write_str(name)
    }
}

/// Why a computation failed.
///
/// Renders as its message only. Two causes are equal when their kind and
/// message are equal; the underlying error does not take part in equality.
///
/// # Examples
///
/// ```rust
/// use fpinrs::control::{Cause, CauseKind};
///
/// let cause = Cause::with_kind(CauseKind::Value, "negative length");
/// assert_eq!(cause.kind(), CauseKind::Value);
/// assert_eq!(cause.to_string(), "negative length");
///
/// let parsed = "x".parse::<i32>().unwrap_err();
/// let wrapped = Cause::from_error(parsed);
/// assert_eq!(wrapped.kind(), CauseKind::External);
/// assert!(std::error::Error::source(&wrapped).is_some());
/// ```
#[derive(Debug, Clone)]
pub struct Cause {
    kind: CauseKind,
    message: String,
    source: Option<SharedError>,
}

impl Cause {
    /// Creates a [`CauseKind::Runtime`] cause from a description.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self::with_kind(CauseKind::default(), message)
    }

    /// Creates a cause of the given kind from a description.
    #[must_use]
    pub fn with_kind(kind: CauseKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            source: None,
        }
    }

    /// Wraps an existing error. The message is the error's `Display` text.
    #[must_use]
    pub fn from_error<E>(error: E) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        Self {
            kind: CauseKind::External,
            message: error.to_string(),
            source: Some(Arc::new(error)),
        }
    }

    /// The cause used for an absent value.
    #[must_use]
    pub fn missing() -> Self {
        Self::with_kind(CauseKind::Missing, MISSING_VALUE)
    }

    /// Builds a cause from a captured panic payload.
    pub(crate) fn from_panic(payload: &(dyn Any + Send)) -> Self {
        let message = payload
            .downcast_ref::<&str>()
            .map(|text| (*text).to_string())
            .or_else(|| payload.downcast_ref::<String>().cloned())
            .unwrap_or_else(|| "callback panicked".to_string());
        Self::with_kind(CauseKind::Panic, message)
    }

    /// Replaces the message, keeping the kind and chaining `self` as source.
    #[must_use]
    pub(crate) fn redescribe(self, message: impl Into<String>) -> Self {
        Self {
            kind: self.kind,
            message: message.into(),
            source: Some(Arc::new(self)),
        }
    }

    /// The category of this cause.
    #[inline]
    #[must_use]
    pub const fn kind(&self) -> CauseKind {
        self.kind
    }

    /// The description of this cause.
    #[inline]
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for Cause {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(&self.message)
    }
}

impl StdError for Cause {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.source
            .as_deref()
            .map(|error| error as &(dyn StdError + 'static))
    }
}

impl PartialEq for Cause {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind && self.message == other.message
    }
}

impl Eq for Cause {}

impl From<&str> for Cause {
    fn from(message: &str) -> Self {
        Self::new(message)
    }
}

impl From<String> for Cause {
    fn from(message: String) -> Self {
        Self::new(message)
    }
}
