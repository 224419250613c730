//! # Streamkit - null-safe collection transforms
//!
//! Streamkit is a set of small, generic, composable operations over
//! collections: map, distinct, filter, flatten, index and group. Every
//! operation is a pure function from an input collection plus caller
//! functions to a new container.
//!
//! ## Contract
//!
//! ```text
//! ┌──────────────┐     ┌─────────────┐     ┌─────────────┐     ┌──────────────┐
//! │ IntoIterator │────▶│ predicate?  │────▶│  stage(s)   │────▶│ Vec / HashMap│
//! │ (or absent)  │     │ (&K → bool) │     │ (K → Opt V) │     │   (new)      │
//! └──────────────┘     └─────────────┘     └─────────────┘     └──────────────┘
//! ```
//!
//! - A missing collection behaves like an empty one (see [`nullable`]).
//! - A stage returning `None` drops the element; it is not an error.
//! - Map builders store values as produced; duplicate keys are last write wins.
//! - Caller errors surface unchanged through the `try_*` variants.
//!
//! ## Quick Start
//!
//! ```rust
//! use streamkit::{group_to_map_with, map_to_list, to_map_with, Pipeline};
//!
//! let rows = vec![(1, "a"), (2, "b"), (1, "c")];
//!
//! let names = map_to_list(&rows, |r| (r.0 == 1).then_some(r.1));
//! assert_eq!(names, vec!["a", "c"]);
//!
//! let index = to_map_with(&rows, |r| r.0, |r| r.1);
//! assert_eq!(index[&1], "c");
//!
//! let groups = group_to_map_with(&rows, |r| r.0, |r| r.1);
//! assert_eq!(groups[&1], vec!["a", "c"]);
//!
//! let codes = map_to_list(
//!     &rows,
//!     Pipeline::new(|r: &(i32, &str)| r.1.chars().next())
//!         .then(|c: char| Some(c as u32))
//!         .into_fn(),
//! );
//! assert_eq!(codes, vec![97, 98, 99]);
//! ```
//!
//! ## Modules
//!
//! - [`transform`] - The generic operations
//! - [`records`] - JSON record adapters (field paths, matchers, keys)
//! - [`config`] - Environment options for the CLI
//! - [`error`] - Error types

// Core
pub mod transform;

// JSON records
pub mod records;

// Configuration
pub mod config;

// Errors
pub mod error;

// =============================================================================
// Re-exports - Transform
// =============================================================================

pub use transform::{
    distinct,
    distinct_by_key,
    filter_and_map_to_list,
    filter_to_list,
    find_first,
    flat_map_to_distinct_list,
    flat_map_to_list,
    flatten_to_distinct_list,
    flatten_to_list,
    group_to_map,
    group_to_map_with,
    map_to_distinct_list,
    map_to_list,
    nullable,
    to_list,
    to_map,
    to_map_with,
    Nullable,
    Pipeline,
};

// =============================================================================
// Re-exports - Fallible transforms
// =============================================================================

pub use transform::{
    try_filter_to_list,
    try_find_first,
    try_group_to_map_with,
    try_map_to_list,
    try_to_map_with,
};

// =============================================================================
// Re-exports - Records
// =============================================================================

pub use records::{as_array, key_string, FieldFilter, FieldPath, HashedValue, Matcher};

// =============================================================================
// Re-exports - Config and errors
// =============================================================================

pub use config::Options;
pub use error::{CliError, ConfigError, RecordError};
