// Copyright 2014-2016 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

/// Owned array representation.
///
/// *Don’t use this type directly, use the type alias
/// [`Array2`](crate::Array2) for the array type!*
#[derive(Clone, Debug, PartialEq)]
pub struct OwnedRepr<A>(pub(crate) Vec<A>);

impl<A> Default for OwnedRepr<A>
{
    fn default() -> Self
    {
        OwnedRepr(Vec::new())
    }
}

impl<A> OwnedRepr<A>
{
    pub(crate) fn into_vec(self) -> Vec<A>
    {
        self.0
    }
}

/// Read-only proxy representation over borrowed storage.
///
/// *Don’t use this type directly, use the type alias
/// [`Array2ProxyRef`](crate::Array2ProxyRef) for the array type!*
#[derive(Copy, Clone, Debug)]
pub struct ViewRepr<'a, A>(pub(crate) &'a [A]);

/// Read-write proxy representation over borrowed storage.
///
/// The proxy can be redimensioned, but only within the borrowed buffer.
///
/// *Don’t use this type directly, use the type alias
/// [`Array2Proxy`](crate::Array2Proxy) for the array type!*
#[derive(Debug)]
pub struct ViewMutRepr<'a, A>(pub(crate) &'a mut [A]);

impl<'a, A> Default for ViewRepr<'a, A>
{
    fn default() -> Self
    {
        ViewRepr(&[])
    }
}

impl<'a, A> Default for ViewMutRepr<'a, A>
{
    fn default() -> Self
    {
        ViewMutRepr(&mut [])
    }
}
