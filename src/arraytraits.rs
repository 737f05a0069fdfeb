// Copyright 2014-2016 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use std::hash;
use std::slice;

use crate::{Array2Base, Data, DataMut};

/// Return `true` if the index ranges and all elements of `self` and `other`
/// are equal. Return `false` otherwise.
impl<A, B, S, S2> PartialEq<Array2Base<S2>> for Array2Base<S>
where
    A: PartialEq<B>,
    S: Data<Elem = A>,
    S2: Data<Elem = B>,
{
    fn eq(&self, rhs: &Array2Base<S2>) -> bool
    {
        self.range1 == rhs.range1
            && self.range2 == rhs.range2
            && self.as_slice().iter().zip(rhs.as_slice()).all(|(a, b)| a == b)
    }
}

impl<S> Eq for Array2Base<S>
where
    S: Data,
    S::Elem: Eq,
{
}

impl<S> hash::Hash for Array2Base<S>
where
    S: Data,
    S::Elem: hash::Hash,
{
    fn hash<H: hash::Hasher>(&self, state: &mut H)
    {
        self.range1.hash(state);
        self.range2.hash(state);
        for elt in self.iter() {
            elt.hash(state)
        }
    }
}

impl<'a, S> IntoIterator for &'a Array2Base<S>
where S: Data
{
    type Item = &'a S::Elem;
    type IntoIter = slice::Iter<'a, S::Elem>;

    fn into_iter(self) -> Self::IntoIter
    {
        self.iter()
    }
}

impl<'a, S> IntoIterator for &'a mut Array2Base<S>
where S: DataMut
{
    type Item = &'a mut S::Elem;
    type IntoIter = slice::IterMut<'a, S::Elem>;

    fn into_iter(self) -> Self::IntoIter
    {
        self.iter_mut()
    }
}
