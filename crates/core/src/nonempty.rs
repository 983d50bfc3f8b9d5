//! `NonEmptyList<E>` - an ordered list with at least one element
//!
//! Non-emptiness holds by construction: the list is a `head` plus a possibly
//! empty `tail`. It is the error type of accumulated validation, where "no
//! errors" is represented by `Ok` instead of an empty list.
//!
//! ```rust
//! use fpkit_core::nonempty::NonEmptyList;
//! use fpkit_core::maybe::Maybe;
//!
//! let nel = NonEmptyList::new(1).append(2).append(3);
//! assert_eq!(nel.into_vec(), vec![1, 2, 3]);
//!
//! assert!(NonEmptyList::<i32>::from_iter(Vec::new()).is_empty());
//! assert_eq!(NonEmptyList::from_iter(["a", "b"]).map(|n| *n.head()), Maybe::Some("a"));
//! ```

use std::fmt;

use crate::maybe::Maybe;

/// A list that always holds at least one element.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NonEmptyList<E> {
    head: E,
    tail: Vec<E>,
}

// `len` is never zero, so there is no `is_empty` to pair it with.
#[allow(clippy::len_without_is_empty)]
impl<E> NonEmptyList<E> {
    /// Creates a single-element list.
    pub fn new(head: E) -> Self {
        Self {
            head,
            tail: Vec::new(),
        }
    }

    /// Creates a list from a head and the remaining elements.
    pub fn with_tail(head: E, tail: Vec<E>) -> Self {
        Self { head, tail }
    }

    /// Builds a list from any iterable; `Empty` if the source has no elements.
    pub fn from_iter<I>(iter: I) -> Maybe<Self>
    where
        I: IntoIterator<Item = E>,
    {
        let mut iter = iter.into_iter();
        match iter.next() {
            Some(head) => Maybe::Some(Self::with_tail(head, iter.collect())),
            None => Maybe::Empty,
        }
    }

    /// Builds a list from a vector; `Empty` if the vector is empty.
    pub fn from_vec(items: Vec<E>) -> Maybe<Self> {
        Self::from_iter(items)
    }

    /// The first element.
    pub fn head(&self) -> &E {
        &self.head
    }

    /// Everything after the first element.
    pub fn tail(&self) -> &[E] {
        &self.tail
    }

    /// The last element.
    pub fn last(&self) -> &E {
        self.tail.last().unwrap_or(&self.head)
    }

    /// Number of elements, at least 1.
    pub fn len(&self) -> usize {
        1 + self.tail.len()
    }

    /// Appends an element in place.
    pub fn push(&mut self, item: E) {
        self.tail.push(item);
    }

    /// Returns the list with `item` appended.
    pub fn append(mut self, item: E) -> Self {
        self.push(item);
        self
    }

    /// Returns the list followed by every element of `other`.
    pub fn concat(mut self, other: Self) -> Self {
        self.tail.push(other.head);
        self.tail.extend(other.tail);
        self
    }

    /// Applies `f` to every element, keeping order.
    pub fn map<U, F>(self, mut f: F) -> NonEmptyList<U>
    where
        F: FnMut(E) -> U,
    {
        let head = f(self.head);
        NonEmptyList::with_tail(head, self.tail.into_iter().map(f).collect())
    }

    /// Borrowing iterator, head first.
    pub fn iter(&self) -> std::iter::Chain<std::iter::Once<&E>, std::slice::Iter<'_, E>> {
        std::iter::once(&self.head).chain(self.tail.iter())
    }

    /// Converts into a plain vector (never empty).
    pub fn into_vec(self) -> Vec<E> {
        let mut out = Vec::with_capacity(self.len());
        out.push(self.head);
        out.extend(self.tail);
        out
    }
}

impl<E> Extend<E> for NonEmptyList<E> {
    fn extend<I: IntoIterator<Item = E>>(&mut self, iter: I) {
        self.tail.extend(iter);
    }
}

impl<E> IntoIterator for NonEmptyList<E> {
    type Item = E;
    type IntoIter = std::iter::Chain<std::iter::Once<E>, std::vec::IntoIter<E>>;

    fn into_iter(self) -> Self::IntoIter {
        std::iter::once(self.head).chain(self.tail)
    }
}

impl<'a, E> IntoIterator for &'a NonEmptyList<E> {
    type Item = &'a E;
    type IntoIter = std::iter::Chain<std::iter::Once<&'a E>, std::slice::Iter<'a, E>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<E> From<NonEmptyList<E>> for Vec<E> {
    fn from(value: NonEmptyList<E>) -> Self {
        value.into_vec()
    }
}

impl<E: fmt::Display> fmt::Display for NonEmptyList<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.head)?;
        for item in &self.tail {
            write!(f, "; {item}")?;
        }
        Ok(())
    }
}

impl<E: fmt::Debug + fmt::Display> std::error::Error for NonEmptyList<E> {}
