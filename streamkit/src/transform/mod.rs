//! Transform pipeline.
//!
//! Pure, generic collection operations:
//! - Source: absent-as-empty input adapter
//! - Stage: chained transform stages
//! - List: map, distinct, filter, flatten, find
//! - Map: index and group by key
//! - Fallible: `try_*` variants for caller functions returning `Result`
//!
//! Nothing here mutates its input, performs I/O or keeps state between calls.
//! A missing input behaves like an empty one, an absent (`None`) transform
//! result is dropped, and a failing caller function surfaces unchanged.

pub mod fallible;
pub mod list;
pub mod map;
pub mod source;
pub mod stage;

pub use fallible::{
    try_filter_to_list, try_find_first, try_group_to_map_with, try_map_to_list, try_to_map_with,
};
pub use list::{
    distinct, distinct_by_key, filter_and_map_to_list, filter_to_list, find_first,
    flat_map_to_distinct_list, flat_map_to_list, flatten_to_distinct_list, flatten_to_list,
    map_to_distinct_list, map_to_list, to_list,
};
pub use map::{group_to_map, group_to_map_with, to_map, to_map_with};
pub use source::{nullable, Nullable};
pub use stage::Pipeline;
