//! Map builders: index a collection by key, or group it by key.
//!
//! ```text
//! Input (flat)                 to_map (last wins)      group_to_map
//! ┌────────────────────┐       ┌──────────────┐        ┌──────────────────┐
//! │ { id: 1, n: "a" }  │       │ 1 → "c"      │        │ 1 → ["a", "c"]   │
//! │ { id: 2, n: "b" }  │  →    │ 2 → "b"      │        │ 2 → ["b"]        │
//! │ { id: 1, n: "c" }  │       └──────────────┘        └──────────────────┘
//! └────────────────────┘
//! ```
//!
//! Keys need `Eq + Hash`, and custom key types must keep the two consistent.
//! Values are stored as produced: unlike the list operations, nothing is
//! filtered on the value side.

use std::collections::HashMap;
use std::hash::Hash;

/// Index elements by `key_fn`.
///
/// When several elements share a key, the last one in iteration order wins.
/// Collisions are not reported.
pub fn to_map<I, KO, KF>(input: I, key_fn: KF) -> HashMap<KO, I::Item>
where
    I: IntoIterator,
    KF: FnMut(&I::Item) -> KO,
    KO: Eq + Hash,
{
    to_map_with(input, key_fn, |item| item)
}

/// Index `value_fn(element)` by `key_fn(&element)`.
///
/// `key_fn` runs before `value_fn` for each element. Duplicate keys are
/// resolved by last write wins.
///
/// ```rust
/// use streamkit::transform::to_map_with;
///
/// let rows = [(1, "x"), (1, "y"), (2, "z")];
/// let index = to_map_with(rows, |r| r.0, |r| r.1);
/// assert_eq!(index[&1], "y");
/// assert_eq!(index[&2], "z");
/// ```
pub fn to_map_with<I, KO, VO, KF, VF>(input: I, mut key_fn: KF, mut value_fn: VF) -> HashMap<KO, VO>
where
    I: IntoIterator,
    KF: FnMut(&I::Item) -> KO,
    VF: FnMut(I::Item) -> VO,
    KO: Eq + Hash,
{
    let iter = input.into_iter();
    let mut result = HashMap::with_capacity(iter.size_hint().0);

    for item in iter {
        let key = key_fn(&item);
        // No collision check
        result.insert(key, value_fn(item));
    }

    result
}

/// Group elements by `key_fn`.
///
/// Each key maps to its elements in encounter order.
pub fn group_to_map<I, KO, KF>(input: I, key_fn: KF) -> HashMap<KO, Vec<I::Item>>
where
    I: IntoIterator,
    KF: FnMut(&I::Item) -> KO,
    KO: Eq + Hash,
{
    group_to_map_with(input, key_fn, |item| item)
}

/// Group `value_fn(element)` by `key_fn(&element)`.
///
/// ```rust
/// use streamkit::transform::group_to_map_with;
///
/// let rows = [(1, "a"), (2, "b"), (1, "c")];
/// let groups = group_to_map_with(rows, |r| r.0, |r| r.1);
/// assert_eq!(groups[&1], vec!["a", "c"]);
/// assert_eq!(groups[&2], vec!["b"]);
/// ```
pub fn group_to_map_with<I, KO, VO, KF, VF>(
    input: I,
    mut key_fn: KF,
    mut value_fn: VF,
) -> HashMap<KO, Vec<VO>>
where
    I: IntoIterator,
    KF: FnMut(&I::Item) -> KO,
    VF: FnMut(I::Item) -> VO,
    KO: Eq + Hash,
{
    let iter = input.into_iter();
    let mut groups: HashMap<KO, Vec<VO>> = HashMap::with_capacity(iter.size_hint().0);

    for item in iter {
        let key = key_fn(&item);
        groups.entry(key).or_default().push(value_fn(item));
    }

    groups
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transform::nullable;

    #[derive(Debug, Clone, PartialEq)]
    struct Row {
        id: u32,
        name: &'static str,
    }

    fn row(id: u32, name: &'static str) -> Row {
        Row { id, name }
    }

    #[test]
    fn test_to_map_last_wins() {
        let rows = vec![row(1, "x"), row(1, "y")];
        let index = to_map_with(&rows, |r| r.id, |r| r.name);
        assert_eq!(index.len(), 1);
        assert_eq!(index[&1], "y");
    }

    #[test]
    fn test_to_map_identity_value() {
        let rows = vec![row(1, "a"), row(2, "b"), row(1, "c")];
        let index = to_map(rows, |r| r.id);
        assert_eq!(index[&1], row(1, "c"));
        assert_eq!(index[&2], row(2, "b"));
    }

    #[test]
    fn test_to_map_keeps_option_values() {
        let index = to_map_with([1, 2], |x| *x, |x| (x > 1).then_some(x));
        assert_eq!(index[&1], None);
        assert_eq!(index[&2], Some(2));
    }

    #[test]
    fn test_to_map_empty_and_absent() {
        assert!(to_map(Vec::<Row>::new(), |r| r.id).is_empty());
        assert!(to_map(nullable(None::<Vec<Row>>), |r| r.id).is_empty());
    }

    #[test]
    fn test_group_encounter_order() {
        let rows = vec![row(1, "a"), row(2, "b"), row(1, "c")];
        let groups = group_to_map_with(&rows, |r| r.id, |r| r.name);
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[&1], vec!["a", "c"]);
        assert_eq!(groups[&2], vec!["b"]);
    }

    #[test]
    fn test_group_identity_value() {
        let groups = group_to_map(["apple", "avocado", "banana"], |s| s.chars().next());
        assert_eq!(groups[&Some('a')], vec!["apple", "avocado"]);
        assert_eq!(groups[&Some('b')], vec!["banana"]);
    }

    #[test]
    fn test_builders_reserve_from_size_hint() {
        let index = to_map_with(0..100, |_| 0, |x| x);
        assert!(index.capacity() >= 100);

        let groups = group_to_map_with(0..100, |_| 0, |x| x);
        assert_eq!(groups[&0].len(), 100);
        assert!(groups.capacity() >= 100);
    }

    #[test]
    fn test_group_empty_and_absent() {
        assert!(group_to_map(Vec::<Row>::new(), |r| r.id).is_empty());
        assert!(group_to_map(nullable(None::<&[Row]>), |r| r.id).is_empty());
    }
}
