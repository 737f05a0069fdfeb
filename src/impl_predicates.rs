// Copyright 2014-2016 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use num_traits::{One, Zero};

use crate::operand::Operand2;
use crate::{Array2Base, Data, RawData};

/// Return `true` if `a` and `b` have the same number of rows and the same
/// number of columns, whatever their index ranges.
pub fn conformable<V1, V2>(a: &V1, b: &V2) -> bool
where
    V1: Operand2,
    V2: Operand2,
{
    a.size1() == b.size1() && a.size2() == b.size2()
}

/// Return `true` if `a` and `b` have identical index ranges.
///
/// Views and member views are indexed from 1, so an array has equal
/// dimensions with a view only if its lower bounds are 1.
pub fn equal_dimensions<V1, V2>(a: &V1, b: &V2) -> bool
where
    V1: Operand2,
    V2: Operand2,
{
    a.range1() == b.range1() && a.range2() == b.range2()
}

/// # Shape predicates
impl<A, S> Array2Base<S>
where S: RawData<Elem = A>
{
    /// Return `true` if `other` has the same shape as `self`.
    ///
    /// ```
    /// use farray::Array2;
    ///
    /// let a = Array2::<f32>::zeros(0..=1, 3).unwrap();
    /// let b = Array2::<f32>::zeros(2, 1..=3).unwrap();
    /// assert!(a.conformable(&b));
    /// assert!(!a.equal_dimensions(&b));
    /// ```
    pub fn conformable<V>(&self, other: &V) -> bool
    where V: Operand2
    {
        self.size1 == other.size1() && self.size2 == other.size2()
    }

    /// Return `true` if `other` has the same index ranges as `self`.
    pub fn equal_dimensions<V>(&self, other: &V) -> bool
    where V: Operand2
    {
        self.range1 == other.range1() && self.range2 == other.range2()
    }

    /// Return `true` if the array has as many rows as columns.
    pub fn square(&self) -> bool
    {
        self.size1 == self.size2
    }

    /// Return `true` if both index ranges are the same.
    pub fn equal_square_dimensions(&self) -> bool
    {
        self.range1 == self.range2
    }
}

impl<A, S> Array2Base<S>
where S: Data<Elem = A>
{
    /// Return `true` if the array is square with ones on its diagonal and
    /// zeros elsewhere.
    pub fn is_identity(&self) -> bool
    where A: Zero + One + PartialEq
    {
        if !self.square() {
            return false;
        }
        let n = self.size2;
        self.iter().enumerate().all(|(l, x)| {
            if l / n == l % n {
                x.is_one()
            } else {
                x.is_zero()
            }
        })
    }

    /// Return `true` if the index ranges are equal and `a(i, j) == a(j, i)`
    /// for all `i`, `j`.
    pub fn symmetric(&self) -> bool
    where A: PartialEq
    {
        if !self.equal_square_dimensions() {
            return false;
        }
        let data = self.as_slice();
        let n = self.size2;
        (1..n).all(|i| (0..i).all(|j| data[i * n + j] == data[j * n + i]))
    }
}
