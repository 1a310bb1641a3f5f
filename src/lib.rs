//! Walk multiple sequences in lockstep.
//!
//! Given a tuple (or array) of sequences, `lockstep` produces one sequence of
//! tuples, where the i-th element of each tuple comes from the i-th input at
//! the same position. The walk stops as soon as *any* one of the inputs runs
//! out. Inputs are never copied or buffered: every element is read straight
//! out of the storage it lives in.
//!
//! How each input is bound decides what the walk hands out for it. A shared
//! reference (`&v`) yields `&T`. A mutable reference (`&mut v`) or owned
//! storage (`v`) yields `&mut T`. Each input makes this choice on its own,
//! independently of the others.
//!
//! # Operations
//!
//! - [`zip()`]: Bind a tuple or array of sequences, stopping at the shortest.
//! - [`zip_pair`]: Bind exactly two sequences.
//! - [`zip_exact`]: Bind sequences which must all have the same length.
//! - [`zip::Zip`]: The same operations as methods on tuples and arrays.
//!
//! # Examples
//!
//! Walk three sequences of different kinds with an iterator:
//!
//! ```rust
//! use lockstep::prelude::*;
//!
//! let names = ["ada", "grace", "barbara"];
//! let years = vec![1815, 1906];
//! let mut ages = [0; 3];
//!
//! for (_, year, age) in &mut (&names, &years, &mut ages).zip() {
//!     *age = 2024 - *year;
//! }
//!
//! // `names` is one longer than `years`, so the last age is never written.
//! assert_eq!(ages, [209, 118, 0]);
//! ```
//!
//! Or drive the walk by hand, comparing against the end:
//!
//! ```rust
//! use lockstep::zip;
//!
//! let a = [1, 2];
//! let b = [10, 20];
//! let c = [100];
//!
//! let mut zipped = zip((&a, &b, &c));
//! let end = zipped.end();
//! let mut pos = zipped.begin();
//! let mut out = vec![];
//! while pos != end {
//!     let (a, b, c) = pos.current();
//!     out.push((*a, *b, *c));
//!     pos.advance();
//! }
//! assert_eq!(out, [(1, 10, 100)]);
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(missing_debug_implementations, nonstandard_style)]
#![warn(missing_docs, unreachable_pub)]

#[cfg(feature = "alloc")]
extern crate alloc;

mod utils;

#[doc(hidden)]
pub use utils::private;

/// The lockstep prelude.
pub mod prelude {
    pub use super::sequence::Cursor as _;
    pub use super::sequence::Sequence as _;
    pub use super::zip::Zip as _;
}

pub mod sequence;
pub mod zip;

pub use zip::{
    zip, zip_exact, zip_pair, LengthMismatch, PairZip, PairZipIterator, TupleZip,
    TupleZipEnd, TupleZipIterator,
};
