// Copyright 2014-2016 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! The data (inner representation) traits for farray

use crate::error::{from_kind, ErrorKind, ShapeError};
use crate::{OwnedRepr, ViewMutRepr, ViewRepr};

/// Array representation trait.
///
/// ***Note:*** `RawData` is not an extension interface at this point.
/// Traits in Rust can serve many different roles. This trait is public because
/// it is used as a bound on public methods.
pub trait RawData: Sized
{
    /// The array element type.
    type Elem;

    private_decl! {}
}

/// Array representation trait.
///
/// For an array whose elements can be read.
///
/// ***Internal trait, see `RawData`.***
pub trait Data: RawData
{
    #[doc(hidden)]
    /// The whole underlying buffer, which may be longer than the array.
    fn _data_slice(&self) -> &[Self::Elem];
}

/// Array representation trait.
///
/// For an array with writable elements.
///
/// ***Internal trait, see `RawData`.***
pub trait DataMut: Data
{
    #[doc(hidden)]
    fn _data_slice_mut(&mut self) -> &mut [Self::Elem];
}

/// Array representation trait.
///
/// The dimensioning hook: a representation that can change the number of
/// elements it provides. Owned storage reallocates; a borrowed proxy can
/// only use the buffer it was given.
///
/// ***Internal trait, see `RawData`.***
pub trait DataResize: DataMut
{
    #[doc(hidden)]
    /// Make at least `len` elements available.
    ///
    /// Elements that survive keep their values; new elements have
    /// unspecified (but initialized) values.
    fn _resize(&mut self, len: usize) -> Result<(), ShapeError>;
}

impl<A> RawData for OwnedRepr<A>
{
    type Elem = A;
    private_impl! {}
}

impl<A> Data for OwnedRepr<A>
{
    #[inline]
    fn _data_slice(&self) -> &[A]
    {
        &self.0
    }
}

impl<A> DataMut for OwnedRepr<A>
{
    #[inline]
    fn _data_slice_mut(&mut self) -> &mut [A]
    {
        &mut self.0
    }
}

impl<A> DataResize for OwnedRepr<A>
where A: Default
{
    fn _resize(&mut self, len: usize) -> Result<(), ShapeError>
    {
        if len == 0 {
            self.0 = Vec::new();
        } else {
            self.0.resize_with(len, A::default);
        }
        Ok(())
    }
}

impl<'a, A> RawData for ViewRepr<'a, A>
{
    type Elem = A;
    private_impl! {}
}

impl<'a, A> Data for ViewRepr<'a, A>
{
    #[inline]
    fn _data_slice(&self) -> &[A]
    {
        self.0
    }
}

impl<'a, A> RawData for ViewMutRepr<'a, A>
{
    type Elem = A;
    private_impl! {}
}

impl<'a, A> Data for ViewMutRepr<'a, A>
{
    #[inline]
    fn _data_slice(&self) -> &[A]
    {
        &*self.0
    }
}

impl<'a, A> DataMut for ViewMutRepr<'a, A>
{
    #[inline]
    fn _data_slice_mut(&mut self) -> &mut [A]
    {
        &mut *self.0
    }
}

impl<'a, A> DataResize for ViewMutRepr<'a, A>
{
    fn _resize(&mut self, len: usize) -> Result<(), ShapeError>
    {
        if len <= self.0.len() {
            Ok(())
        } else {
            Err(from_kind(ErrorKind::OutOfBounds))
        }
    }
}
