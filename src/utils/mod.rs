//! Utilities to implement the different adaptors of this crate.

mod tuple;

#[doc(hidden)]
pub mod private;

pub(crate) use tuple::tuple_len;
