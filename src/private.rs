//! Sealing support for the storage and operand traits.
//!
//! `RawData` and `Operand2` are public because they appear as bounds on
//! public methods, but only the representations and views of this crate
//! implement them. Both traits declare a method returning `PrivateMarker`,
//! a type that is public yet unreachable from outside the crate.

/// Unnameable outside the crate.
pub struct PrivateMarker;

macro_rules! private_decl {
    () => {
        /// Sealing method; the trait cannot be implemented outside the crate.
        #[doc(hidden)]
        fn __private__(&self) -> crate::private::PrivateMarker;
    };
}

macro_rules! private_impl {
    () => {
        fn __private__(&self) -> crate::private::PrivateMarker
        {
            crate::private::PrivateMarker
        }
    };
}
