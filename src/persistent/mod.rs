//! Persistent (immutable) data structures.
//!
//! - [`SinglyLinkedList`]: persistent singly-linked list
//!
//! # Structural Sharing
//!
//! Prepending creates one new cell that points at the existing list, so the
//! original list and the extended one share every other cell:
//!
//! ```rust
//! use fpinrs::list;
//! use fpinrs::persistent::SinglyLinkedList;
//!
//! let list = list![1, 2, 3];
//! let extended = SinglyLinkedList::cons(0, &list);
//!
//! assert_eq!(list.to_string(), "[1, 2, 3, NIL]");     // Original unchanged
//! assert_eq!(extended.to_string(), "[0, 1, 2, 3, NIL]");
//! ```

// =============================================================================
// Reference Counter Type Alias
// =============================================================================

/// Reference-counted smart pointer type.
///
/// When the `arc` feature is enabled (default), this is `std::sync::Arc`,
/// so lists can be shared across threads.
///
/// When the `arc` feature is disabled, this is `std::rc::Rc`,
/// which is cheaper but confines lists to one thread.
#[cfg(feature = "arc")]
pub(crate) type ReferenceCounter<T> = std::sync::Arc<T>;

#[cfg(not(feature = "arc"))]
pub(crate) type ReferenceCounter<T> = std::rc::Rc<T>;

mod list;

pub use list::IntoIter;
pub use list::Iter;
pub use list::RevIter;
pub use list::SinglyLinkedList;
