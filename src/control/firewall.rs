//! Captures panics raised by user callbacks.
//!
//! Every callback handed to `map`, `flat_map` or `traverse` runs through
//! [`guard`], so a failing step surfaces as a [`Cause`] value instead of
//! unwinding through the caller.

use std::panic::{self, AssertUnwindSafe};

use super::Cause;

/// Runs `callback`, turning a panic into a [`Cause`] of kind `Panic`.
///
/// The panic is logged at `DEBUG` under the `fpinrs::firewall` target.
pub(crate) fn guard<R, F>(callback: F) -> Result<R, Cause>
where
    F: FnOnce() -> R,
{
    panic::catch_unwind(AssertUnwindSafe(callback)).map_err(|payload| {
        let cause = Cause::from_panic(payload.as_ref());
        tracing::debug!(
            target: "fpinrs::firewall",
            reason = cause.message(),
            "callback panicked; converted to failure"
        );
        cause
    })
}
