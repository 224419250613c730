//! Variants of the transform operations for caller functions that can fail.
//!
//! The caller's error type passes through untouched: processing stops at the
//! first `Err`, which is returned as-is, and the function is not invoked on
//! any later element. Absent (`Ok(None)`) results keep their usual meaning.

use std::collections::HashMap;
use std::hash::Hash;

/// Fallible [`map_to_list`](super::map_to_list).
pub fn try_map_to_list<I, V, E, F>(input: I, mut stage: F) -> Result<Vec<V>, E>
where
    I: IntoIterator,
    F: FnMut(I::Item) -> Result<Option<V>, E>,
{
    let mut out = Vec::new();
    for item in input {
        if let Some(value) = stage(item)? {
            out.push(value);
        }
    }
    Ok(out)
}

/// Fallible [`filter_to_list`](super::filter_to_list).
pub fn try_filter_to_list<I, E, P>(input: I, mut predicate: P) -> Result<Vec<I::Item>, E>
where
    I: IntoIterator,
    P: FnMut(&I::Item) -> Result<bool, E>,
{
    let mut out = Vec::new();
    for item in input {
        if predicate(&item)? {
            out.push(item);
        }
    }
    Ok(out)
}

/// Fallible [`to_map_with`](super::to_map_with). Last write wins.
pub fn try_to_map_with<I, KO, VO, E, KF, VF>(
    input: I,
    mut key_fn: KF,
    mut value_fn: VF,
) -> Result<HashMap<KO, VO>, E>
where
    I: IntoIterator,
    KF: FnMut(&I::Item) -> Result<KO, E>,
    VF: FnMut(I::Item) -> Result<VO, E>,
    KO: Eq + Hash,
{
    let iter = input.into_iter();
    let mut result = HashMap::with_capacity(iter.size_hint().0);
    for item in iter {
        let key = key_fn(&item)?;
        result.insert(key, value_fn(item)?);
    }
    Ok(result)
}

/// Fallible [`group_to_map_with`](super::group_to_map_with).
pub fn try_group_to_map_with<I, KO, VO, E, KF, VF>(
    input: I,
    mut key_fn: KF,
    mut value_fn: VF,
) -> Result<HashMap<KO, Vec<VO>>, E>
where
    I: IntoIterator,
    KF: FnMut(&I::Item) -> Result<KO, E>,
    VF: FnMut(I::Item) -> Result<VO, E>,
    KO: Eq + Hash,
{
    let iter = input.into_iter();
    let mut groups: HashMap<KO, Vec<VO>> = HashMap::with_capacity(iter.size_hint().0);
    for item in iter {
        let key = key_fn(&item)?;
        groups.entry(key).or_default().push(value_fn(item)?);
    }
    Ok(groups)
}

/// Fallible [`find_first`](super::find_first).
pub fn try_find_first<I, E, P>(input: I, mut predicate: P) -> Result<Option<I::Item>, E>
where
    I: IntoIterator,
    P: FnMut(&I::Item) -> Result<bool, E>,
{
    for item in input {
        if predicate(&item)? {
            return Ok(Some(item));
        }
    }
    Ok(None)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::num::ParseIntError;

    #[derive(Debug, PartialEq)]
    struct Boom(u32);

    #[test]
    fn test_try_map_propagates_caller_error() {
        let result: Result<Vec<i32>, ParseIntError> =
            try_map_to_list(["1", "", "x", "3"], |s| {
                if s.is_empty() {
                    Ok(None)
                } else {
                    s.parse().map(Some)
                }
            });
        let err = result.unwrap_err();
        assert_eq!(err, "x".parse::<i32>().unwrap_err());
    }

    #[test]
    fn test_try_map_ok_drops_absent() {
        let result = try_map_to_list([1, 2, 3], |x| Ok::<_, Boom>((x != 2).then_some(x)));
        assert_eq!(result, Ok(vec![1, 3]));
    }

    #[test]
    fn test_try_map_stops_at_first_error() {
        let calls = Cell::new(0);
        let result = try_map_to_list(1..=5, |x| {
            calls.set(calls.get() + 1);
            if x == 2 {
                Err(Boom(x))
            } else {
                Ok(Some(x))
            }
        });
        assert_eq!(result, Err(Boom(2)));
        assert_eq!(calls.get(), 2);
    }

    #[test]
    fn test_try_filter() {
        let ok = try_filter_to_list(1..=4, |x| Ok::<_, Boom>(x % 2 == 0));
        assert_eq!(ok, Ok(vec![2, 4]));

        let err = try_filter_to_list(1..=4, |x| if *x == 3 { Err(Boom(3)) } else { Ok(true) });
        assert_eq!(err, Err(Boom(3)));
    }

    #[test]
    fn test_try_maps() {
        let rows = [(1, "a"), (2, "b"), (1, "c")];

        let index = try_to_map_with(rows, |r| Ok::<_, Boom>(r.0), |r| Ok(r.1)).unwrap();
        assert_eq!(index[&1], "c");

        let groups = try_group_to_map_with(rows, |r| Ok::<_, Boom>(r.0), |r| Ok(r.1)).unwrap();
        assert_eq!(groups[&1], vec!["a", "c"]);

        let err = try_group_to_map_with(rows, |r| Ok(r.0), |r| {
            if r.1 == "b" {
                Err(Boom(r.0))
            } else {
                Ok(r.1)
            }
        });
        assert_eq!(err, Err(Boom(2)));
    }

    #[test]
    fn test_try_maps_reserve_from_size_hint() {
        let index = try_to_map_with(0..100, |_| Ok::<_, Boom>(0), |x| Ok(x)).unwrap();
        assert!(index.capacity() >= 100);

        let groups = try_group_to_map_with(0..100, |_| Ok::<_, Boom>(0), |x| Ok(x)).unwrap();
        assert!(groups.capacity() >= 100);
    }

    #[test]
    fn test_try_find_first() {
        let found = try_find_first([1, 2, 3, 4], |x| Ok::<_, Boom>(x % 2 == 0));
        assert_eq!(found, Ok(Some(2)));

        let none = try_find_first(Vec::<u32>::new(), |_| Ok::<_, Boom>(true));
        assert_eq!(none, Ok(None));

        let err = try_find_first([1, 2], |x| if *x == 1 { Err(Boom(1)) } else { Ok(true) });
        assert_eq!(err, Err(Boom(1)));
    }
}
