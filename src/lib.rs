// Copyright 2014-2016 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
#![crate_name = "farray"]
#![doc(html_root_url = "https://docs.rs/farray/0.1/")]
#![allow(
    clippy::many_single_char_names,
    clippy::deref_addrof,
    clippy::unreadable_literal,
    clippy::len_without_is_empty
)]
#![cfg_attr(docsrs, feature(doc_cfg))]

//! The `farray` crate provides [`Array2Base`], a two-dimensional container
//! with Fortran array semantics.
//!
//! - **Index ranges**: each dimension is declared by an inclusive
//!   [`IndexRange`] `[l, u]` with arbitrary (also negative) bounds.
//!   `1`-based indexing is the default, as in Fortran.
//! - **Row-major storage**: element `(i1, i2)` lives at flat offset
//!   `(i1 - l1) * size2 + (i2 - l2)`.
//! - **Slicing**: [`slice`](Array2Base::slice) and friends produce strided
//!   views that alias the array's storage; mixing an index with a slice
//!   gives a one-dimensional view.
//! - **Assignment**: assigning an array, a view or a [member
//!   view](MemberView2) reshapes the receiver when needed; compound
//!   assignment requires conformable operands. Sources that may share the
//!   receiver's storage are copied out first, so results never depend on
//!   the order of element writes.
//! - **Matrix mutators**: identity and diagonal setters, in-place
//!   transpose and right multiplication.
//! - **Comparisons**: the [`compare`] module has the element-wise
//!   `eq`, `ne`, `lt`, `le`, `gt`, `ge` family with `any_`, `all_` and
//!   `count_` reductions.
//!
//! ## Errors
//!
//! Bounds, shape and divisor preconditions are checked and reported as
//! [`ShapeError`]. Plain indexing `a[(i1, i2)]` panics when out of bounds,
//! and the unsafe `uget` accessors are checked only in builds with debug
//! assertions.
//!
//! ## Crate Feature Flags
//!
//! - `serde`: serialization for [`IndexRange`] and owned arrays.
//! - `approx`: approximate equality traits for arrays of floats.
//!
//! ## Example
//!
//! ```
//! use farray::{Array2, IndexRange};
//!
//! let mut a = Array2::from_shape_fn(1..=3, 1..=3, |i, j| (i - 1) * 3 + j);
//! assert_eq!(a[(2, 1)], 4);
//!
//! a.transpose().unwrap();
//! assert_eq!(a[(1, 2)], 4);
//! assert!(!a.is_identity());
//!
//! a.to_identity().unwrap();
//! assert!(a.is_identity());
//! assert_eq!(a.range1(), IndexRange::new(1, 3));
//! ```

#[macro_use]
mod macro_utils;
#[macro_use]
mod private;

mod data_repr;
mod data_traits;
mod error;
mod index_range;
mod operand;
mod slice;

mod arrayformat;
mod arraytraits;
mod impl_assign;
mod impl_constructors;
mod impl_matrix;
mod impl_methods;
mod impl_ops;
mod impl_predicates;
mod impl_slicing;
mod member;
mod views;

mod array_approx;
#[cfg(feature = "serde")]
mod array_serde;

pub mod compare;
pub mod prelude;

pub use crate::data_repr::{OwnedRepr, ViewMutRepr, ViewRepr};
pub use crate::data_traits::{Data, DataMut, DataResize, RawData};
pub use crate::error::{ErrorKind, ShapeError};
pub use crate::impl_ops::ScalarOperand;
pub use crate::impl_predicates::{conformable, equal_dimensions};
pub use crate::index_range::IndexRange;
pub use crate::member::{MemberView2, MemberViewMut2};
pub use crate::operand::Operand2;
pub use crate::slice::{DimSlice, IndexSlice, SliceInfo1, SliceInfo2};
pub use crate::views::{ArrayView1S, ArrayView2S, ArrayViewMut1S, ArrayViewMut2S};

/// A two-dimensional array with Fortran index ranges.
///
/// The array is generic over its storage `S`:
///
/// - [`Array2`]: owns its elements in a `Vec`; dimensioning reallocates.
/// - [`Array2Proxy`]: an argument proxy over borrowed, writable storage;
///   dimensioning must fit in the borrowed buffer.
/// - [`Array2ProxyRef`]: a read-only proxy.
///
/// The two index ranges and the cached sizes always agree, and the storage
/// provides exactly `size1 * size2` elements to the array, in row-major
/// order.
pub struct Array2Base<S>
where S: RawData
{
    /// Data buffer / ownership information.
    data: S,
    /// Index range of dimension 1 (rows)
    range1: IndexRange,
    /// Index range of dimension 2 (columns)
    range2: IndexRange,
    size1: usize,
    size2: usize,
    /// `l1 * size2 + l2`, so that `i1 * size2 + i2 - shift` is the flat offset
    /// (computed with wrapping arithmetic)
    shift: isize,
}

/// An owned two-dimensional array.
pub type Array2<A> = Array2Base<OwnedRepr<A>>;

/// A read-write array proxy over storage owned elsewhere.
pub type Array2Proxy<'a, A> = Array2Base<ViewMutRepr<'a, A>>;

/// A read-only array proxy over storage owned elsewhere.
pub type Array2ProxyRef<'a, A> = Array2Base<ViewRepr<'a, A>>;

impl<S> Clone for Array2Base<S>
where S: RawData + Clone
{
    fn clone(&self) -> Self
    {
        Array2Base {
            data: self.data.clone(),
            range1: self.range1,
            range2: self.range2,
            size1: self.size1,
            size2: self.size2,
            shift: self.shift,
        }
    }

    fn clone_from(&mut self, other: &Self)
    {
        self.data.clone_from(&other.data);
        self.range1 = other.range1;
        self.range2 = other.range2;
        self.size1 = other.size1;
        self.size2 = other.size2;
        self.shift = other.shift;
    }
}

impl<S> Default for Array2Base<S>
where S: RawData + Default
{
    /// An empty array with cleared index ranges.
    fn default() -> Self
    {
        Array2Base::from_data_ranges(S::default(), IndexRange::default(), IndexRange::default())
    }
}

impl<S> Array2Base<S>
where S: RawData
{
    /// Assemble an array; the caller guarantees that `data` holds at least
    /// `r1.size() * r2.size()` elements.
    pub(crate) fn from_data_ranges(data: S, r1: IndexRange, r2: IndexRange) -> Self
    {
        let size1 = r1.size();
        let size2 = r2.size();
        Array2Base {
            data,
            range1: r1,
            range2: r2,
            size1,
            size2,
            shift: shift_of(&r1, &r2, size2),
        }
    }

    /// Replace the index ranges, keeping sizes and shift consistent.
    pub(crate) fn set_ranges(&mut self, r1: IndexRange, r2: IndexRange)
    {
        self.size1 = r1.size();
        self.size2 = r2.size();
        self.range1 = r1;
        self.range2 = r2;
        self.shift = shift_of(&r1, &r2, self.size2);
    }
}

#[inline]
fn shift_of(r1: &IndexRange, r2: &IndexRange, size2: usize) -> isize
{
    r1.l().wrapping_mul(size2 as isize).wrapping_add(r2.l())
}

/// Compute `size1 * size2`, failing with `DimensionTooLarge` on overflow.
///
/// Each size on its own must fit in `isize` as well.
pub(crate) fn size_of_ranges(r1: &IndexRange, r2: &IndexRange) -> Result<usize, ShapeError>
{
    let too_large = || error::from_kind(ErrorKind::DimensionTooLarge);
    let fits = |n: usize| n <= isize::MAX as usize;
    let (size1, size2) = (r1.size(), r2.size());
    if !fits(size1) || !fits(size2) {
        return Err(too_large());
    }
    size1
        .checked_mul(size2)
        .filter(|&n| fits(n))
        .ok_or_else(too_large)
}
