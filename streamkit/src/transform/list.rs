//! List-producing operations.
//!
//! Every function here consumes an `IntoIterator` (pass `&vec` or
//! `vec.iter()` to borrow, `vec` to move, [`nullable`](super::nullable) for a
//! possibly absent collection) and returns a freshly allocated `Vec` in input
//! order. An empty input always yields an empty `Vec`.
//!
//! Transforms return `Option`; a `None` result is an absent value and the
//! element is silently dropped. It is never an error.
//!
//! Deduplicating variants require `Eq + Hash` on the deduplicated type. Custom
//! types must keep the two consistent (`a == b` implies equal hashes), or the
//! result is unspecified.

use std::collections::HashSet;
use std::hash::Hash;

/// Copy a collection into a new list.
pub fn to_list<I: IntoIterator>(input: I) -> Vec<I::Item> {
    input.into_iter().collect()
}

/// Apply `stage` to every element, keeping the present results.
///
/// Elements for which `stage` returns `None` are dropped. Use a
/// [`Pipeline`](super::Pipeline) to chain several stages.
///
/// ```rust
/// use streamkit::transform::map_to_list;
///
/// let out = map_to_list([1, 2, 3], |x| (x > 1).then_some(x * 10));
/// assert_eq!(out, vec![20, 30]);
/// ```
pub fn map_to_list<I, V, F>(input: I, stage: F) -> Vec<V>
where
    I: IntoIterator,
    F: FnMut(I::Item) -> Option<V>,
{
    input.into_iter().filter_map(stage).collect()
}

/// Like [`map_to_list`], then drop repeated values.
///
/// The first occurrence of each value is kept, in first-occurrence order.
pub fn map_to_distinct_list<I, V, F>(input: I, stage: F) -> Vec<V>
where
    I: IntoIterator,
    F: FnMut(I::Item) -> Option<V>,
    V: Eq + Hash,
{
    dedup(map_to_list(input, stage))
}

/// Remove duplicate elements, keeping first occurrences in order.
///
/// ```rust
/// use streamkit::transform::distinct;
///
/// assert_eq!(distinct(["b", "a", "b", "c", "a"]), vec!["b", "a", "c"]);
/// ```
pub fn distinct<I>(input: I) -> Vec<I::Item>
where
    I: IntoIterator,
    I::Item: Eq + Hash,
{
    dedup(input.into_iter().collect())
}

/// Remove elements whose derived key was already seen.
///
/// `key_fn` runs once per element; the first element for each key is kept.
pub fn distinct_by_key<I, Q, F>(input: I, mut key_fn: F) -> Vec<I::Item>
where
    I: IntoIterator,
    F: FnMut(&I::Item) -> Q,
    Q: Eq + Hash,
{
    let mut seen = HashSet::new();
    input
        .into_iter()
        .filter(|item| seen.insert(key_fn(item)))
        .collect()
}

/// Keep the elements matching `predicate`.
pub fn filter_to_list<I, P>(input: I, predicate: P) -> Vec<I::Item>
where
    I: IntoIterator,
    P: FnMut(&I::Item) -> bool,
{
    input.into_iter().filter(predicate).collect()
}

/// Filter with `predicate`, then map the survivors with `stage`.
///
/// `predicate` runs exactly once per element and `stage` never sees a
/// rejected element. Absent `stage` results are dropped.
pub fn filter_and_map_to_list<I, P, V, F>(input: I, predicate: P, stage: F) -> Vec<V>
where
    I: IntoIterator,
    P: FnMut(&I::Item) -> bool,
    F: FnMut(I::Item) -> Option<V>,
{
    input.into_iter().filter(predicate).filter_map(stage).collect()
}

/// Concatenate the sub-collections produced by `extractor`.
///
/// A `None` or empty sub-collection contributes nothing. Flattens exactly one
/// level.
///
/// ```rust
/// use streamkit::transform::flatten_to_list;
///
/// let nested = vec![vec!["a", "b"], vec!["b", "c"]];
/// assert_eq!(flatten_to_list(nested, Some), vec!["a", "b", "b", "c"]);
/// ```
pub fn flatten_to_list<I, L, E>(input: I, extractor: E) -> Vec<L::Item>
where
    I: IntoIterator,
    E: FnMut(I::Item) -> Option<L>,
    L: IntoIterator,
{
    input.into_iter().filter_map(extractor).flatten().collect()
}

/// [`flatten_to_list`] followed by deduplication.
pub fn flatten_to_distinct_list<I, L, E>(input: I, extractor: E) -> Vec<L::Item>
where
    I: IntoIterator,
    E: FnMut(I::Item) -> Option<L>,
    L: IntoIterator,
    L::Item: Eq + Hash,
{
    dedup(flatten_to_list(input, extractor))
}

/// Concatenate the sub-collections produced by `extractor`, mapping every
/// nested value through `stage`.
///
/// Absent sub-collections and absent `stage` results are dropped.
pub fn flat_map_to_list<I, L, E, V, F>(input: I, extractor: E, stage: F) -> Vec<V>
where
    I: IntoIterator,
    E: FnMut(I::Item) -> Option<L>,
    L: IntoIterator,
    F: FnMut(L::Item) -> Option<V>,
{
    input
        .into_iter()
        .filter_map(extractor)
        .flatten()
        .filter_map(stage)
        .collect()
}

/// [`flat_map_to_list`] followed by deduplication of the mapped values.
pub fn flat_map_to_distinct_list<I, L, E, V, F>(input: I, extractor: E, stage: F) -> Vec<V>
where
    I: IntoIterator,
    E: FnMut(I::Item) -> Option<L>,
    L: IntoIterator,
    F: FnMut(L::Item) -> Option<V>,
    V: Eq + Hash,
{
    dedup(flat_map_to_list(input, extractor, stage))
}

/// First element matching `predicate`, if any.
///
/// Stops at the first match; `predicate` is not evaluated on later elements.
pub fn find_first<I, P>(input: I, predicate: P) -> Option<I::Item>
where
    I: IntoIterator,
    P: FnMut(&I::Item) -> bool,
{
    input.into_iter().find(predicate)
}

/// Order-preserving dedup without cloning: mark first occurrences, then keep
/// the marked values.
pub(crate) fn dedup<V: Eq + Hash>(values: Vec<V>) -> Vec<V> {
    let keep: Vec<bool> = {
        let mut seen = HashSet::with_capacity(values.len());
        values.iter().map(|v| seen.insert(v)).collect()
    };

    values
        .into_iter()
        .zip(keep)
        .filter_map(|(v, first)| first.then_some(v))
        .collect()
}
