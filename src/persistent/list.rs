//! Persistent (immutable) singly-linked list.
//!
//! This module provides [`SinglyLinkedList`], a cons-list whose cells are
//! shared between every list that reaches them.
//!
//! # Overview
//!
//! A list is either `Nil` (empty) or a `Cons` cell holding a head element and
//! a tail list. It provides:
//!
//! - O(1) prepend (`cons`), head, tail and `set_head`
//! - O(1) length (cached)
//! - O(n) folds, `map`, `filter`, `reverse`, without recursion
//!
//! All operations return new lists without modifying the original.
//!
//! # Examples
//!
//! ```rust
//! use fpinrs::list;
//! use fpinrs::persistent::SinglyLinkedList;
//!
//! let list = list![1, 2, 3];
//! assert_eq!(list.fold_left(0, |sum, x| sum + x), 6);
//! assert_eq!(list.reverse().to_vec(), vec![3, 2, 1]);
//! assert_eq!(list.drop(5).to_string(), "[NIL]");
//!
//! let collected: SinglyLinkedList<i32> = (1..=3).collect();
//! assert_eq!(collected, list);
//! ```
//!
//! # Structural Sharing
//!
//! ```text
//! list1: 1 -> 2 -> 3 -> nil
//! list2 = cons(0, list1): 0 -> [1 -> 2 -> 3 -> nil]  // shares [1, 2, 3] with list1
//! list3 = list1.set_head(9): 9 -> [2 -> 3 -> nil]     // shares [2, 3] with list1
//! ```

use std::fmt;
use std::hash::{Hash, Hasher};
use std::iter::FusedIterator;

use super::ReferenceCounter;
use crate::error::EmptyListAccess;

/// A `Cons` cell. `next` of `None` is the terminal `Nil`.
struct Node<T> {
    element: T,
    next: Option<ReferenceCounter<Self>>,
}

/// A persistent (immutable) singly-linked list.
///
/// Cells are only reachable through factories (`nil`, `cons`, `list`,
/// [`list!`](crate::list)), so every list is finite and acyclic.
///
/// # Time Complexity
///
/// | Operation    | Complexity |
/// |--------------|------------|
/// | `cons`       | O(1)       |
/// | `head`       | O(1)       |
/// | `tail`       | O(1)       |
/// | `set_head`   | O(1)       |
/// | `length`     | O(1)       |
/// | `drop`       | O(n)       |
/// | `fold_left`  | O(n)       |
/// | `fold_right` | O(n)       |
/// | `reverse`    | O(n)       |
///
/// # Examples
///
/// ```rust
/// use fpinrs::persistent::SinglyLinkedList;
///
/// let list = SinglyLinkedList::cons(1, &SinglyLinkedList::singleton(2));
/// assert_eq!(list.head(), Ok(&1));
/// assert_eq!(list.length(), 2);
/// ```
///
/// Cells cannot be assembled by hand:
///
/// ```compile_fail
/// let forged = fpinrs::persistent::SinglyLinkedList::<i32> { head: None, length: 3 };
/// ```
pub struct SinglyLinkedList<T> {
    head: Option<ReferenceCounter<Node<T>>>,
    length: usize,
}

impl<T> SinglyLinkedList<T> {
    /// The empty list.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fpinrs::persistent::SinglyLinkedList;
    ///
    /// let list: SinglyLinkedList<i32> = SinglyLinkedList::nil();
    /// assert!(list.is_empty());
    /// assert_eq!(list.to_string(), "[NIL]");
    /// ```
    #[inline]
    #[must_use]
    pub const fn nil() -> Self {
        Self {
            head: None,
            length: 0,
        }
    }

    /// A list holding exactly one element.
    #[inline]
    #[must_use]
    pub fn singleton(element: T) -> Self {
        Self::nil().prepend(element)
    }

    /// Builds a list from any sequence, preserving its order.
    ///
    /// An empty sequence yields `Nil`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fpinrs::persistent::SinglyLinkedList;
    ///
    /// let list = SinglyLinkedList::list(vec!["a", "b"]);
    /// assert_eq!(list.to_string(), "[a, b, NIL]");
    /// ```
    #[must_use]
    pub fn list<I: IntoIterator<Item = T>>(elements: I) -> Self {
        Self::build_from_vec(elements.into_iter().collect())
    }

    /// Builds a list from a Vec by popping from its end.
    fn build_from_vec(mut elements: Vec<T>) -> Self {
        let length = elements.len();
        let mut head: Option<ReferenceCounter<Node<T>>> = None;
        while let Some(element) = elements.pop() {
            head = Some(ReferenceCounter::new(Node {
                element,
                next: head,
            }));
        }
        Self { head, length }
    }

    /// Prepends `head` onto `tail`, sharing every cell of `tail`.
    ///
    /// # Complexity
    ///
    /// O(1) time and space
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fpinrs::list;
    /// use fpinrs::persistent::SinglyLinkedList;
    ///
    /// let tail = list![2, 3];
    /// let list = SinglyLinkedList::cons(1, &tail);
    /// assert_eq!(list.to_string(), "[1, 2, 3, NIL]");
    /// assert_eq!(tail.to_string(), "[2, 3, NIL]");
    /// ```
    #[inline]
    #[must_use]
    pub fn cons(head: T, tail: &Self) -> Self {
        tail.prepend(head)
    }

    /// Returns a new list with `element` in front of this one.
    #[inline]
    #[must_use]
    pub fn prepend(&self, element: T) -> Self {
        Self {
            head: Some(ReferenceCounter::new(Node {
                element,
                next: self.head.clone(),
            })),
            length: self.length + 1,
        }
    }

    /// The first element.
    ///
    /// # Errors
    ///
    /// Returns [`EmptyListAccess`] for `Nil`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fpinrs::list;
    /// use fpinrs::persistent::SinglyLinkedList;
    ///
    /// assert_eq!(list![1, 2, 3].head(), Ok(&1));
    /// assert!(SinglyLinkedList::<i32>::nil().head().is_err());
    /// ```
    #[inline]
    pub fn head(&self) -> Result<&T, EmptyListAccess> {
        self.head
            .as_ref()
            .map(|node| &node.element)
            .ok_or(EmptyListAccess { operation: "head" })
    }

    /// The list without its first element, sharing its cells.
    ///
    /// # Errors
    ///
    /// Returns [`EmptyListAccess`] for `Nil`.
    #[inline]
    pub fn tail(&self) -> Result<Self, EmptyListAccess> {
        self.uncons()
            .map(|(_, tail)| tail)
            .ok_or(EmptyListAccess { operation: "tail" })
    }

    /// Splits into head and tail, or `None` for `Nil`.
    #[inline]
    #[must_use]
    pub fn uncons(&self) -> Option<(&T, Self)> {
        self.head.as_ref().map(|node| {
            let tail = Self {
                head: node.next.clone(),
                length: self.length - 1,
            };
            (&node.element, tail)
        })
    }

    /// Replaces the first element, keeping the same tail.
    ///
    /// # Errors
    ///
    /// Returns [`EmptyListAccess`] for `Nil`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fpinrs::list;
    ///
    /// let list = list![1, 2, 3];
    /// assert_eq!(list.set_head(4).unwrap().to_string(), "[4, 2, 3, NIL]");
    /// assert_eq!(list.to_string(), "[1, 2, 3, NIL]");
    /// ```
    pub fn set_head(&self, new_head: T) -> Result<Self, EmptyListAccess> {
        let node = self
            .head
            .as_ref()
            .ok_or(EmptyListAccess { operation: "set_head" })?;
        Ok(Self {
            head: Some(ReferenceCounter::new(Node {
                element: new_head,
                next: node.next.clone(),
            })),
            length: self.length,
        })
    }

    /// Returns `true` for `Nil`.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// The number of elements.
    #[inline]
    #[must_use]
    pub const fn length(&self) -> usize {
        self.length
    }

    /// The element at `index`, or `None` past the end.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.iter().nth(index)
    }

    /// Removes up to `count` leading elements.
    ///
    /// Dropping more elements than the list holds yields `Nil`. The result
    /// shares the remaining cells.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fpinrs::list;
    ///
    /// assert_eq!(list![1, 2, 3].drop(2).to_string(), "[3, NIL]");
    /// assert_eq!(list![1].drop(2).to_string(), "[NIL]");
    /// ```
    #[must_use]
    pub fn drop(&self, count: usize) -> Self {
        let mut current = self.head.as_ref();
        let dropped = count.min(self.length);
        for _ in 0..dropped {
            current = current.and_then(|node| node.next.as_ref());
        }
        Self {
            head: current.cloned(),
            length: self.length - dropped,
        }
    }

    /// Folds front to back: `op(...op(op(identity, x1), x2)..., xn)`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fpinrs::list;
    ///
    /// assert_eq!(list![2, 3, 4].fold_left(0, |sum, x| sum + x), 9);
    /// assert_eq!(list![3, 4, 5].fold_left(1, |product, x| product * x), 60);
    /// ```
    pub fn fold_left<A, F>(&self, identity: A, operation: F) -> A
    where
        F: FnMut(A, &T) -> A,
    {
        self.iter().fold(identity, operation)
    }

    /// Folds back to front: `op(x1, op(x2, ...op(xn, identity)))`.
    ///
    /// Walks the list in reverse with a left fold, so no recursion is
    /// involved regardless of length.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fpinrs::list;
    ///
    /// let rendered = list![1, 2, 3].fold_right(String::from("NIL"), |x, rest| format!("({x} {rest})"));
    /// assert_eq!(rendered, "(1 (2 (3 NIL)))");
    /// ```
    pub fn fold_right<A, F>(&self, identity: A, mut operation: F) -> A
    where
        F: FnMut(&T, A) -> A,
    {
        self.iter_rev()
            .fold(identity, |accumulator, element| operation(element, accumulator))
    }

    /// Applies `effect` to every element, front to back.
    pub fn for_each<F>(&self, effect: F)
    where
        F: FnMut(&T),
    {
        self.iter().for_each(effect);
    }

    /// Transforms every element, preserving order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fpinrs::list;
    ///
    /// assert_eq!(list![2, 3].map(|x| x * 2).to_string(), "[4, 6, NIL]");
    /// ```
    #[must_use]
    pub fn map<U, F>(&self, function: F) -> SinglyLinkedList<U>
    where
        F: FnMut(&T) -> U,
    {
        self.iter().map(function).collect()
    }

    /// Expands every element into a list and concatenates the results.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fpinrs::list;
    ///
    /// let expanded = list![1, 2].flat_map(|x| list![*x, x * 10]);
    /// assert_eq!(expanded.to_vec(), vec![1, 10, 2, 20]);
    /// ```
    #[must_use]
    pub fn flat_map<U, F>(&self, mut function: F) -> SinglyLinkedList<U>
    where
        U: Clone,
        F: FnMut(&T) -> SinglyLinkedList<U>,
    {
        let mut elements = Vec::new();
        for element in self {
            elements.extend(function(element).iter().cloned());
        }
        SinglyLinkedList::build_from_vec(elements)
    }

    /// A fresh front-to-back cursor.
    #[inline]
    #[must_use]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            current: self.head.as_ref(),
            remaining: self.length,
        }
    }

    /// A fresh back-to-front cursor.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fpinrs::list;
    ///
    /// let list = list![1, 2, 3];
    /// let backward: Vec<&i32> = list.iter_rev().collect();
    /// assert_eq!(backward, vec![&3, &2, &1]);
    /// ```
    #[must_use]
    pub fn iter_rev(&self) -> RevIter<'_, T> {
        RevIter {
            pending: self.iter().collect(),
        }
    }
}

impl<T: Clone> SinglyLinkedList<T> {
    /// Keeps the elements satisfying `predicate`, preserving order.
    #[must_use]
    pub fn filter<P>(&self, mut predicate: P) -> Self
    where
        P: FnMut(&T) -> bool,
    {
        self.iter()
            .filter(|element| predicate(element))
            .cloned()
            .collect()
    }

    /// The elements in reverse order.
    ///
    /// Built by a left fold that prepends each element onto `Nil`.
    #[must_use]
    pub fn reverse(&self) -> Self {
        self.fold_left(Self::nil(), |reversed, element| {
            reversed.prepend(element.clone())
        })
    }

    /// All elements of `self` followed by all elements of `other`.
    ///
    /// Shares the cells of `other`.
    #[must_use]
    pub fn append(&self, other: &Self) -> Self {
        if other.is_empty() {
            return self.clone();
        }
        let mut elements: Vec<T> = self.iter().cloned().collect();
        let mut result = other.clone();
        while let Some(element) = elements.pop() {
            result = result.prepend(element);
        }
        result
    }

    /// The first `count` elements.
    #[must_use]
    pub fn take(&self, count: usize) -> Self {
        self.iter().take(count).cloned().collect()
    }

    /// Copies the elements into a `Vec`, preserving order.
    #[must_use]
    pub fn to_vec(&self) -> Vec<T> {
        self.iter().cloned().collect()
    }
}

impl<T: Clone> SinglyLinkedList<SinglyLinkedList<T>> {
    /// Concatenates the inner lists, preserving order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fpinrs::list;
    ///
    /// let nested = list![list![1, 2], list![], list![3]];
    /// assert_eq!(nested.flatten().to_string(), "[1, 2, 3, NIL]");
    /// ```
    #[must_use]
    pub fn flatten(&self) -> SinglyLinkedList<T> {
        self.flat_map(Clone::clone)
    }
}

/// Builds a [`SinglyLinkedList`] from its elements, in order.
///
/// # Examples
///
/// ```rust
/// use fpinrs::list;
/// use fpinrs::persistent::SinglyLinkedList;
///
/// let empty: SinglyLinkedList<i32> = list![];
/// assert_eq!(empty.to_string(), "[NIL]");
/// assert_eq!(list![1, 2, 3].to_string(), "[1, 2, 3, NIL]");
/// ```
#[macro_export]
macro_rules! list {
    () => {
        $crate::persistent::SinglyLinkedList::nil()
    };
    ($($element:expr),+ $(,)?) => {
        $crate::persistent::SinglyLinkedList::list([$($element),+])
    };
}

// =============================================================================
// Iterator Implementation
// =============================================================================

/// A front-to-back cursor over a [`SinglyLinkedList`].
pub struct Iter<'a, T> {
    current: Option<&'a ReferenceCounter<Node<T>>>,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.current.map(|node| {
            self.current = node.next.as_ref();
            self.remaining -= 1;
            &node.element
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

/// A back-to-front cursor over a [`SinglyLinkedList`].
///
/// Holds its own snapshot of element references, so each cursor runs
/// independently of every other one.
pub struct RevIter<'a, T> {
    pending: Vec<&'a T>,
}

impl<'a, T> Iterator for RevIter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.pending.pop()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.pending.len(), Some(self.pending.len()))
    }
}

impl<T> ExactSizeIterator for RevIter<'_, T> {}

impl<T> FusedIterator for RevIter<'_, T> {}

/// An owning iterator over a [`SinglyLinkedList`].
///
/// Moves elements out of cells it owns alone and clones shared ones.
pub struct IntoIter<T> {
    list: SinglyLinkedList<T>,
}

impl<T: Clone> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.list.head.take()?;
        self.list.length -= 1;
        match ReferenceCounter::try_unwrap(node) {
            Ok(node) => {
                self.list.head = node.next;
                Some(node.element)
            }
            Err(shared) => {
                self.list.head.clone_from(&shared.next);
                Some(shared.element.clone())
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.list.length, Some(self.list.length))
    }
}

impl<T: Clone> ExactSizeIterator for IntoIter<T> {}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<T> Clone for SinglyLinkedList<T> {
    fn clone(&self) -> Self {
        Self {
            head: self.head.clone(),
            length: self.length,
        }
    }
}

/// Releases uniquely owned cells one at a time instead of recursively.
impl<T> Drop for SinglyLinkedList<T> {
    fn drop(&mut self) {
        let mut next = self.head.take();
        while let Some(node) = next {
            match ReferenceCounter::try_unwrap(node) {
                Ok(mut node) => next = node.next.take(),
                Err(_) => break,
            }
        }
    }
}

impl<T> Default for SinglyLinkedList<T> {
    #[inline]
    fn default() -> Self {
        Self::nil()
    }
}

impl<T> FromIterator<T> for SinglyLinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::build_from_vec(iter.into_iter().collect())
    }
}

impl<T: Clone> IntoIterator for SinglyLinkedList<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        IntoIter { list: self }
    }
}

impl<'a, T> IntoIterator for &'a SinglyLinkedList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: PartialEq> PartialEq for SinglyLinkedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.length == other.length && self.iter().zip(other.iter()).all(|(a, b)| a == b)
    }
}

impl<T: Eq> Eq for SinglyLinkedList<T> {}

impl<T: Hash> Hash for SinglyLinkedList<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.length.hash(state);
        for element in self {
            element.hash(state);
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for SinglyLinkedList<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_list().entries(self.iter()).finish()
    }
}

/// Renders as `[e1, e2, ..., NIL]`; `Nil` alone renders as `[NIL]`.
impl<T: fmt::Display> fmt::Display for SinglyLinkedList<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("[")?;
        for element in self {
            write!(formatter, "{element}, ")?;
        }
        formatter.write_str("NIL]")
    }
}

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl<T: serde::Serialize> serde::Serialize for SinglyLinkedList<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeSeq;
        let mut seq = serializer.serialize_seq(Some(self.length))?;
        for element in self {
            seq.serialize_element(element)?;
        }
        seq.end()
    }
}

#[cfg(feature = "serde")]
struct SinglyLinkedListVisitor<T> {
    marker: std::marker::PhantomData<T>,
}

#[cfg(feature = "serde")]
impl<'de, T> serde::de::Visitor<'de> for SinglyLinkedListVisitor<T>
where
    T: serde::Deserialize<'de>,
{
    type Value = SinglyLinkedList<T>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a sequence")
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: serde::de::SeqAccess<'de>,
    {
        let mut elements = Vec::with_capacity(seq.size_hint().unwrap_or(0));
        while let Some(element) = seq.next_element()? {
            elements.push(element);
        }
        Ok(SinglyLinkedList::build_from_vec(elements))
    }
}

#[cfg(feature = "serde")]
impl<'de, T> serde::Deserialize<'de> for SinglyLinkedList<T>
where
    T: serde::Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_seq(SinglyLinkedListVisitor {
            marker: std::marker::PhantomData,
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

    // =========================================================================
    // Display Tests
    // =========================================================================

    #[rstest]
    #[case(SinglyLinkedList::nil(), "[NIL]")]
    #[case(SinglyLinkedList::singleton(42), "[42, NIL]")]
    #[case(SinglyLinkedList::list(1..=3), "[1, 2, 3, NIL]")]
    fn test_display(#[case] list: SinglyLinkedList<i32>, #[case] rendered: &str) {
        assert_eq!(format!("{list}"), rendered);
    }

    #[rstest]
    fn test_debug() {
        let list: SinglyLinkedList<i32> = (1..=3).collect();
        assert_eq!(format!("{list:?}"), "[1, 2, 3]");
    }

    // =========================================================================
    // Construction Tests
    // =========================================================================

    #[rstest]
    fn test_nil_is_empty() {
        let list: SinglyLinkedList<i32> = SinglyLinkedList::nil();
        assert!(list.is_empty());
        assert_eq!(list.length(), 0);
    }

    #[rstest]
    fn test_cons_shares_tail() {
        let tail = SinglyLinkedList::list([2, 3]);
        let list = SinglyLinkedList::cons(1, &tail);
        let shared = list.tail().unwrap();
        assert!(ReferenceCounter::ptr_eq(
            shared.head.as_ref().unwrap(),
            tail.head.as_ref().unwrap()
        ));
    }

    #[rstest]
    fn test_set_head_shares_tail() {
        let list = SinglyLinkedList::list([1, 2, 3]);
        let updated = list.set_head(4).unwrap();
        assert_eq!(updated.to_vec(), vec![4, 2, 3]);
        assert!(ReferenceCounter::ptr_eq(
            updated.head.as_ref().unwrap().next.as_ref().unwrap(),
            list.head.as_ref().unwrap().next.as_ref().unwrap()
        ));
    }

    #[rstest]
    fn test_drop_shares_remaining_cells() {
        let list = SinglyLinkedList::list([1, 2, 3]);
        let dropped = list.drop(1);
        assert!(ReferenceCounter::ptr_eq(
            dropped.head.as_ref().unwrap(),
            list.head.as_ref().unwrap().next.as_ref().unwrap()
        ));
        assert_eq!(dropped.length(), 2);
    }

    // =========================================================================
    // Accessor Tests
    // =========================================================================

    #[rstest]
    #[case("head")]
    #[case("tail")]
    #[case("set_head")]
    fn test_nil_accessors_report_operation(#[case] operation: &str) {
        let list: SinglyLinkedList<i32> = SinglyLinkedList::nil();
        let error = match operation {
            "head" => list.head().map(|_| ()).unwrap_err(),
            "tail" => list.tail().map(|_| ()).unwrap_err(),
            _ => list.set_head(1).map(|_| ()).unwrap_err(),
        };
        assert_eq!(error.operation, operation);
    }

    #[rstest]
    fn test_get() {
        let list = SinglyLinkedList::list([1, 2, 3]);
        assert_eq!(list.get(0), Some(&1));
        assert_eq!(list.get(2), Some(&3));
        assert_eq!(list.get(3), None);
    }

    // =========================================================================
    // Iterator Tests
    // =========================================================================

    #[rstest]
    fn test_iter_size_hint_is_exact() {
        let list = SinglyLinkedList::list([1, 2, 3]);
        let mut iter = list.iter();
        assert_eq!(iter.len(), 3);
        iter.next();
        assert_eq!(iter.len(), 2);
    }

    #[rstest]
    fn test_into_iter_moves_unique_cells_and_clones_shared() {
        let shared = SinglyLinkedList::list(vec![String::from("b"), String::from("c")]);
        let list = SinglyLinkedList::cons(String::from("a"), &shared);
        let collected: Vec<String> = list.into_iter().collect();
        assert_eq!(collected, vec!["a", "b", "c"]);
        assert_eq!(shared.to_vec(), vec!["b", "c"]);
    }

    // =========================================================================
    // Stack Safety Tests
    // =========================================================================

    #[rstest]
    fn test_long_list_is_dropped_without_recursion() {
        let list: SinglyLinkedList<u32> = (0..1_000_000).collect();
        assert_eq!(list.length(), 1_000_000);
        drop(list);
    }

    #[rstest]
    fn test_drop_stops_at_shared_cells() {
        let shared: SinglyLinkedList<u32> = (0..10).collect();
        let extended = shared.prepend(99);
        drop(extended);
        assert_eq!(shared.length(), 10);
        assert_eq!(shared.to_vec(), (0..10).collect::<Vec<_>>());
    }
}
