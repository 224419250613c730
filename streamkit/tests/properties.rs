//! Behavioural properties of the transform operations, exercised through the
//! public API.

use std::cell::Cell;
use std::collections::HashMap;

use streamkit::{
    distinct, filter_and_map_to_list, filter_to_list, find_first, flatten_to_distinct_list,
    flatten_to_list, group_to_map, group_to_map_with, map_to_distinct_list, map_to_list, nullable,
    to_map, to_map_with, try_map_to_list, Pipeline,
};

#[derive(Debug, Clone, PartialEq)]
struct Item {
    id: u32,
    name: &'static str,
}

fn item(id: u32, name: &'static str) -> Item {
    Item { id, name }
}

#[test]
fn absent_and_empty_inputs_give_empty_containers() {
    let absent: Option<Vec<u32>> = None;
    let empty: Vec<u32> = Vec::new();

    for input in [nullable(absent.clone()), nullable(Some(empty.clone()))] {
        assert!(map_to_list(input.clone(), Some).is_empty());
        assert!(map_to_distinct_list(input.clone(), Some).is_empty());
        assert!(distinct(input.clone()).is_empty());
        assert!(filter_to_list(input.clone(), |_| true).is_empty());
        assert!(filter_and_map_to_list(input.clone(), |_| true, Some).is_empty());
        assert!(flatten_to_list(input.clone(), |x| Some(vec![x])).is_empty());
        assert!(to_map(input.clone(), |x| *x).is_empty());
        assert!(group_to_map(input.clone(), |x| *x).is_empty());
        assert_eq!(find_first(input, |_| true), None);
    }
}

#[test]
fn map_drops_absent_and_keeps_order() {
    let out = map_to_list([1, 2, 3], |x| if x > 1 { Some(x * 10) } else { None });
    assert_eq!(out, vec![20, 30]);
}

#[test]
fn chained_stages_behave_like_nested_options() {
    let input = vec!["12", "-3", "x", "40", "7"];

    let chained = map_to_list(
        &input,
        Pipeline::new(|s: &&str| s.parse::<i32>().ok())
            .then(|n: i32| (n > 0).then_some(n))
            .then(|n: i32| (n % 2 == 0).then_some(n / 2))
            .into_fn(),
    );

    let nested = map_to_list(&input, |s| {
        s.parse::<i32>()
            .ok()
            .and_then(|n| (n > 0).then_some(n))
            .and_then(|n| (n % 2 == 0).then_some(n / 2))
    });

    assert_eq!(chained, vec![6, 20]);
    assert_eq!(chained, nested);
}

#[test]
fn distinct_is_idempotent() {
    let xs = vec![5, 1, 5, 2, 1, 9, 2];
    let once = distinct(xs.clone());
    assert_eq!(once, vec![5, 1, 2, 9]);
    assert_eq!(distinct(once.clone()), once);

    let mapped = map_to_distinct_list(&xs, |x| Some(x % 3));
    assert_eq!(mapped, vec![2, 1, 0]);
    assert_eq!(map_to_distinct_list(mapped.clone(), Some), mapped);
}

#[test]
fn flatten_two_levels_with_and_without_distinct() {
    let nested = vec![vec!["a", "b"], vec!["b", "c"]];
    assert_eq!(flatten_to_list(&nested, Some), vec![&"a", &"b", &"b", &"c"]);
    assert_eq!(flatten_to_distinct_list(&nested, Some), vec![&"a", &"b", &"c"]);
}

#[test]
fn to_map_last_write_wins() {
    let rows = vec![item(1, "x"), item(1, "y")];
    let index: HashMap<u32, &str> = to_map_with(&rows, |r| r.id, |r| r.name);
    assert_eq!(index, HashMap::from([(1, "y")]));
}

#[test]
fn group_to_map_keeps_encounter_order() {
    let rows = vec![item(1, "a"), item(2, "b"), item(1, "c")];
    let groups = group_to_map_with(rows, |r| r.id, |r| r.name);
    assert_eq!(groups, HashMap::from([(1, vec!["a", "c"]), (2, vec!["b"])]));
}

#[test]
fn find_first_returns_first_match() {
    assert_eq!(find_first([1, 2, 3, 4], |x| x % 2 == 0), Some(2));
    assert_eq!(find_first(Vec::<i32>::new(), |_| true), None);
}

#[test]
fn filter_and_map_never_transforms_rejected_elements() {
    let transformed = Cell::new(Vec::new());
    let out = filter_and_map_to_list(
        1..=6,
        |x| x % 3 == 0,
        |x| {
            let mut seen = transformed.take();
            seen.push(x);
            transformed.set(seen);
            Some(x * x)
        },
    );
    assert_eq!(out, vec![9, 36]);
    assert_eq!(transformed.into_inner(), vec![3, 6]);
}

#[test]
fn caller_errors_pass_through_unchanged() {
    #[derive(Debug, PartialEq)]
    enum LookupError {
        Missing(u32),
    }

    let known = HashMap::from([(1, "one"), (3, "three")]);
    let result = try_map_to_list([1, 2, 3], |id| {
        known
            .get(&id)
            .map(|name| Some(*name))
            .ok_or(LookupError::Missing(id))
    });
    assert_eq!(result, Err(LookupError::Missing(2)));
}
