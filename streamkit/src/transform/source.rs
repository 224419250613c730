//! Absent-as-empty input adapter.
//!
//! Every operation in [`crate::transform`] takes `impl IntoIterator`. A
//! collection that may be missing altogether (`Option<Vec<T>>`,
//! `Option<&[T]>`, ...) is passed through [`nullable`], which yields the
//! collection's elements when present and nothing when absent. No operation
//! ever has to special-case a missing input.
//!
//! ```rust
//! use streamkit::transform::{map_to_list, nullable};
//!
//! let missing: Option<Vec<i32>> = None;
//! let out: Vec<i32> = map_to_list(nullable(missing), |x| Some(x + 1));
//! assert!(out.is_empty());
//! ```

use std::iter::FusedIterator;

/// Adapt a possibly absent collection into an iterator.
///
/// `None` behaves exactly like an empty collection.
pub fn nullable<C: IntoIterator>(input: Option<C>) -> Nullable<C::IntoIter> {
    Nullable {
        inner: input.map(IntoIterator::into_iter),
    }
}

/// Iterator over a collection that may be absent.
///
/// Created by [`nullable`].
#[derive(Debug, Clone)]
pub struct Nullable<I> {
    inner: Option<I>,
}

impl<I: Iterator> Iterator for Nullable<I> {
    type Item = I::Item;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.as_mut()?.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        match &self.inner {
            Some(iter) => iter.size_hint(),
            None => (0, Some(0)),
        }
    }
}

impl<I: DoubleEndedIterator> DoubleEndedIterator for Nullable<I> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.as_mut()?.next_back()
    }
}

impl<I: ExactSizeIterator> ExactSizeIterator for Nullable<I> {}

impl<I: FusedIterator> FusedIterator for Nullable<I> {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_present_yields_elements() {
        let iter = nullable(Some(vec![1, 2, 3]));
        assert_eq!(iter.size_hint(), (3, Some(3)));
        assert_eq!(iter.collect::<Vec<_>>(), vec![1, 2, 3]);
    }

    #[test]
    fn test_absent_is_empty() {
        let iter = nullable(None::<Vec<i32>>);
        assert_eq!(iter.size_hint(), (0, Some(0)));
        assert_eq!(iter.count(), 0);
    }

    #[test]
    fn test_borrowed_collection() {
        let data = vec!["a", "b"];
        let iter = nullable(Some(&data));
        assert_eq!(iter.len(), 2);
        assert_eq!(iter.rev().copied().collect::<Vec<_>>(), vec!["b", "a"]);
    }
}
