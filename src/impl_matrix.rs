// Copyright 2014-2016 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! In-place matrix operations.
//!
//! The diagonal of a square array is the element sequence with stride
//! `size2 + 1` in its row-major storage, starting at offset 0.
use std::ops::Mul;

use num_traits::{One, Zero};

use crate::error::{from_kind, incompatible_shapes, ErrorKind, ShapeError};
use crate::{Array2Base, Data, DataMut};

fn not_square() -> ShapeError
{
    from_kind(ErrorKind::NotSquare)
}

impl<A, S> Array2Base<S>
where S: DataMut<Elem = A>
{
    fn check_square(&self) -> Result<(), ShapeError>
    {
        if self.square() {
            Ok(())
        } else {
            Err(not_square())
        }
    }

    /// Set the array to the identity matrix.
    ///
    /// Fails with `NotSquare` unless the array is square.
    pub fn to_identity(&mut self) -> Result<(), ShapeError>
    where A: Clone + Zero + One
    {
        self.to_diag(A::one())
    }

    /// Set the diagonal to `d` and every other element to zero.
    ///
    /// Fails with `NotSquare` unless the array is square.
    pub fn to_diag(&mut self, d: A) -> Result<(), ShapeError>
    where A: Clone + Zero
    {
        self.check_square()?;
        self.as_mut_slice().iter_mut().for_each(|x| *x = A::zero());
        self.set_diagonal(d)
    }

    /// Set the diagonal to `d`, leaving the other elements untouched.
    ///
    /// Fails with `NotSquare` unless the array is square.
    pub fn set_diagonal(&mut self, d: A) -> Result<(), ShapeError>
    where A: Clone
    {
        self.check_square()?;
        let step = self.size2 + 1;
        for x in self.as_mut_slice().iter_mut().step_by(step) {
            *x = d.clone();
        }
        Ok(())
    }

    /// Transpose the array in place.
    ///
    /// Fails with `NotSquare` unless the array is square, since the shape
    /// cannot change.
    ///
    /// ```
    /// use farray::Array2;
    ///
    /// let mut a = Array2::from_shape_vec(2, 2, vec![1, 2, 3, 4]).unwrap();
    /// a.transpose().unwrap();
    /// assert_eq!(a.as_slice(), &[1, 3, 2, 4]);
    /// ```
    pub fn transpose(&mut self) -> Result<(), ShapeError>
    {
        self.check_square()?;
        let n = self.size2;
        let data = self.as_mut_slice();
        for i in 1..n {
            for j in 0..i {
                data.swap(i * n + j, j * n + i);
            }
        }
        Ok(())
    }

    /// Replace `self` with the matrix product `self * a`.
    ///
    /// Requires `size2 == a.size1` (`IncompatibleShapes`) and a square `a`
    /// (`NotSquare`), so the shape of `self` is unchanged.
    pub fn right_multiply_by<S2, B>(&mut self, a: &Array2Base<S2>) -> Result<(), ShapeError>
    where
        S2: Data<Elem = B>,
        B: Clone + Into<A>,
        A: Clone + Zero + Mul<Output = A>,
    {
        if self.size2 != a.size1 {
            return Err(incompatible_shapes());
        }
        if !a.square() {
            return Err(not_square());
        }
        let n = self.size2;
        let rhs = a.as_slice();
        self.multiply_rows(|row, j| {
            (0..n).fold(A::zero(), |d, k| d + row[k].clone() * rhs[k * n + j].clone().into())
        });
        Ok(())
    }

    /// Replace `self` with the matrix product `self * aᵀ`.
    ///
    /// Requires `size2 == a.size2` (`IncompatibleShapes`) and a square `a`
    /// (`NotSquare`).
    pub fn right_multiply_by_transpose<S2, B>(&mut self, a: &Array2Base<S2>) -> Result<(), ShapeError>
    where
        S2: Data<Elem = B>,
        B: Clone + Into<A>,
        A: Clone + Zero + Mul<Output = A>,
    {
        if self.size2 != a.size2 {
            return Err(incompatible_shapes());
        }
        if !a.square() {
            return Err(not_square());
        }
        let n = self.size2;
        let rhs = a.as_slice();
        self.multiply_rows(|row, j| {
            (0..n).fold(A::zero(), |d, k| d + row[k].clone() * rhs[j * n + k].clone().into())
        });
        Ok(())
    }

    /// Recompute every row through a temporary: element `j` of the new row
    /// is `dot(row, j)` of the old row.
    fn multiply_rows<F>(&mut self, mut dot: F)
    where F: FnMut(&[A], usize) -> A
    {
        let n = self.size2;
        if n == 0 {
            return;
        }
        let mut tmp = Vec::with_capacity(n);
        for row in self.as_mut_slice().chunks_exact_mut(n) {
            tmp.clear();
            tmp.extend((0..n).map(|j| dot(row, j)));
            for (x, y) in row.iter_mut().zip(tmp.drain(..)) {
                *x = y;
            }
        }
    }
}
