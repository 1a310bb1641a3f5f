//! Sealing for the [`Sequences`] and [`Cursors`] traits. Their impls are
//! only ever the tuple and array impls in this crate.
//!
//! [`Sequences`]: crate::zip::Sequences
//! [`Cursors`]: crate::zip::Cursors

/// Returned by the hidden method of a sealed trait.
#[allow(missing_debug_implementations)]
pub struct PrivateMarker;

#[doc(hidden)]
#[macro_export]
macro_rules! private_impl {
    () => {
        fn __lockstep_private__(&self) -> $crate::private::PrivateMarker {
            $crate::private::PrivateMarker
        }
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! private_decl {
    () => {
        /// This trait is private; this method exists to make it
        /// impossible to implement outside the crate.
        #[doc(hidden)]
        fn __lockstep_private__(&self) -> $crate::private::PrivateMarker;
    };
}
