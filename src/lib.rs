//! # JS Sequence
//!
//! A growable, double-ended sequence container that reproduces ECMAScript
//! `Array` semantics in Rust: auto-extending indexed writes, negative-index
//! slicing, the JS functional combinators, and in-place unstable sort.
//!
//! The buffer keeps unused capacity (*slack*) at both ends, so `push` and
//! `unshift` are both amortized O(1) and `shift` removes from the front
//! without moving elements.
//!
//! ## Key Features
//!
//! * **Double-ended growth:** symmetric-slack reallocation keeps head and
//!   tail insertion amortized O(1) over mixed workloads.
//! * **Auto-extension:** writing at an index past the end grows the
//!   sequence with default values, JS style; switchable per instance.
//! * **Negative-index `slice`:** `slice(1, -1)` and friends, with the JS
//!   tolerance: out-of-range or inverted ranges give an empty sequence.
//! * **Combinators:** `for_each`, `map`, `filter`, `every`, `some`, and
//!   both `reduce` forms, all in index order.
//! * **Typed failures:** `pop`/`shift`/seedless `reduce` on an empty
//!   sequence and out-of-range accesses surface as [`SequenceError`],
//!   never as silent corruption.
//!
//! ## Examples
//!
//! ```rust
//! use js_sequence::Sequence;
//!
//! let mut seq: Sequence<i32> = (0..5).collect();
//!
//! // Double-ended mutation.
//! seq.push(5);
//! assert_eq!(seq.shift().unwrap(), 0);
//! assert_eq!(seq.as_slice(), &[1, 2, 3, 4, 5]);
//!
//! // Negative-index slicing.
//! let tail = seq.slice_from(-2);
//! assert_eq!(tail.as_slice(), &[4, 5]);
//!
//! // Auto-extending writes.
//! let mut sparse: Sequence<i32> = Sequence::new();
//! sparse.set(9, 1).unwrap();
//! assert_eq!(sparse.len(), 10);
//! ```
//!
//! ```rust
//! use js_sequence::Sequence;
//!
//! let seq: Sequence<i32> = (0..10).collect();
//!
//! let evens = seq.filter(|x| x % 2 == 0);
//! assert_eq!(evens.len(), 5);
//!
//! let sum = seq.reduce(|acc, x| acc + x).unwrap();
//! assert_eq!(sum, 45);
//! ```
//!
//! The container is single-threaded by design: it performs no internal
//! locking, and concurrent use of one `Sequence` requires external
//! synchronization.

// --- Module Declarations ---

pub mod error;
pub mod sequence;

mod buffer;

// --- Re-exports ---

pub use error::SequenceError;
pub use sequence::Sequence;
