//! Chained transform stages.
//!
//! A stage is any `FnMut(In) -> Option<Out>`. [`Pipeline`] composes stages
//! left to right: the output of one stage is the input of the next, and the
//! first `None` ends the chain for that element. Later stages are never
//! invoked for an element an earlier stage dropped.
//!
//! ```text
//!  K ──f──▶ Option<V1> ──g──▶ Option<V2> ──h──▶ Option<V3>
//!           None ─────────────────────────────▶ None
//! ```
//!
//! The composed chain is itself a stage, so it plugs into every list
//! operation via [`Pipeline::into_fn`]:
//!
//! ```rust
//! use streamkit::transform::{map_to_list, Pipeline};
//!
//! let words = vec!["1", "x", "30", "4"];
//! let out: Vec<u32> = map_to_list(
//!     words,
//!     Pipeline::new(|s: &str| s.parse::<u32>().ok())
//!         .then(|n: u32| (n > 1).then_some(n))
//!         .then(|n: u32| n.checked_mul(10))
//!         .into_fn(),
//! );
//! assert_eq!(out, vec![300, 40]);
//! ```

/// An ordered chain of transform stages.
#[derive(Debug, Clone)]
pub struct Pipeline<F> {
    stage: F,
}

impl<F> Pipeline<F> {
    /// Start a pipeline with its first stage.
    pub fn new<K, V>(stage: F) -> Self
    where
        F: FnMut(K) -> Option<V>,
    {
        Self { stage }
    }

    /// Append a stage.
    ///
    /// `next` only runs on values the chain so far produced; an absent value
    /// short-circuits the rest of the chain.
    pub fn then<K, V, W, G>(self, mut next: G) -> Pipeline<impl FnMut(K) -> Option<W>>
    where
        F: FnMut(K) -> Option<V>,
        G: FnMut(V) -> Option<W>,
    {
        let mut first = self.stage;
        Pipeline {
            stage: move |input: K| first(input).and_then(&mut next),
        }
    }

    /// Run the chain on a single value.
    pub fn apply<K, V>(&mut self, input: K) -> Option<V>
    where
        F: FnMut(K) -> Option<V>,
    {
        (self.stage)(input)
    }

    /// Unwrap the composed chain as a plain closure.
    pub fn into_fn(self) -> F {
        self.stage
    }
}
