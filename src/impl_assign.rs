// Copyright 2014-2016 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Assignment from arrays, views and member views.
//!
//! Sources are visited in row-major order and written sequentially into the
//! receiver's storage. A source whose storage overlaps the receiver's is
//! copied into a temporary first. Safe borrows keep a `&mut` receiver and a
//! `&` source apart, so the overlapping case is reached through a
//! [`SliceInfo2`] of the receiver's own storage: the `*_slice_within`
//! methods.
use std::ops::{AddAssign, DivAssign, MulAssign, SubAssign};

use num_traits::Zero;

use crate::error::{from_kind, incompatible_shapes, ErrorKind, ShapeError};
use crate::operand::{address_span, spans_overlap, Operand2};
use crate::{Array2Base, Data, DataMut, DataResize, SliceInfo2};

impl<A, S> Array2Base<S>
where S: DataMut<Elem = A>
{
    /// Call `f` on each element of `self` and the matching element of
    /// `src`, both in row-major order. `src` must be conformable.
    fn zip_mut_with_operand<V, F>(&mut self, src: &V, mut f: F)
    where
        V: Operand2,
        V::Elem: Clone,
        F: FnMut(&mut A, &V::Elem),
    {
        debug_assert!(self.conformable(src));
        let n2 = src.size2();
        let own = address_span(self.as_slice(), 0, self.len());
        if spans_overlap(own, src.memory_span()) {
            let tmp: Vec<V::Elem> = (0..src.len()).map(|l| src.elem0(l / n2, l % n2).clone()).collect();
            for (x, y) in self.as_mut_slice().iter_mut().zip(&tmp) {
                f(x, y);
            }
        } else {
            for (l, x) in self.as_mut_slice().iter_mut().enumerate() {
                f(x, src.elem0(l / n2, l % n2));
            }
        }
    }

    /// Materialize the slice `info` of this array's own storage.
    fn gather_within(&self, info: &SliceInfo2) -> Result<Vec<A>, ShapeError>
    where A: Clone
    {
        Ok(info.view(self.as_slice())?.iter().cloned().collect())
    }

    fn check_conformable<V>(&self, src: &V) -> Result<(), ShapeError>
    where V: Operand2
    {
        if self.conformable(src) {
            Ok(())
        } else {
            Err(incompatible_shapes())
        }
    }

    /// Copy a conformable operand into the array, never reshaping.
    ///
    /// Fails with `IncompatibleShapes` unless the operand is conformable.
    pub fn assign_strict<V>(&mut self, src: &V) -> Result<(), ShapeError>
    where
        V: Operand2,
        V::Elem: Clone + Into<A>,
    {
        self.check_conformable(src)?;
        self.zip_mut_with_operand(src, |x, y| *x = y.clone().into());
        Ok(())
    }

    /// Divide each element by the matching element of `src`.
    ///
    /// Fails with `IncompatibleShapes` unless the operand is conformable, and
    /// with `DivideByZero` if any divisor is zero; nothing is written then.
    pub fn div_assign_from<V>(&mut self, src: &V) -> Result<(), ShapeError>
    where
        V: Operand2,
        V::Elem: Clone + Zero,
        A: DivAssign<V::Elem>,
    {
        self.check_conformable(src)?;
        let n2 = src.size2();
        if (0..src.len()).any(|l| src.elem0(l / n2, l % n2).is_zero()) {
            return Err(from_kind(ErrorKind::DivideByZero));
        }
        self.zip_mut_with_operand(src, |x, y| *x /= y.clone());
        Ok(())
    }

    /// Divide each element by the matching element of the slice `info` of
    /// this array's own storage.
    pub fn div_assign_slice_within(&mut self, info: &SliceInfo2) -> Result<(), ShapeError>
    where A: Clone + Zero + DivAssign
    {
        if self.size1 != info.size1() || self.size2 != info.size2() {
            return Err(incompatible_shapes());
        }
        let tmp = self.gather_within(info)?;
        if tmp.iter().any(Zero::is_zero) {
            return Err(from_kind(ErrorKind::DivideByZero));
        }
        for (x, y) in self.as_mut_slice().iter_mut().zip(tmp) {
            *x /= y;
        }
        Ok(())
    }

    /// Divide every element by `value`.
    ///
    /// Fails with `DivideByZero` if `value` is zero.
    pub fn div_assign_scalar(&mut self, value: A) -> Result<(), ShapeError>
    where A: Clone + Zero + DivAssign
    {
        if value.is_zero() {
            return Err(from_kind(ErrorKind::DivideByZero));
        }
        self.as_mut_slice().iter_mut().for_each(|x| *x /= value.clone());
        Ok(())
    }
}

macro_rules! compound_assign {
    ($($trt:ident, $method:ident, $within:ident, $op:tt, $doc:expr;)*) => {
        impl<A, S> Array2Base<S>
        where S: DataMut<Elem = A>
        {
        $(
            #[doc = concat!("Perform `self ", stringify!($op), " src` element by element (", $doc, ").")]
            ///
            /// `src` may be an array of another element type, a slice view or
            /// a member view. Fails with `IncompatibleShapes` unless it is
            /// conformable.
            pub fn $method<V>(&mut self, src: &V) -> Result<(), ShapeError>
            where
                V: Operand2,
                V::Elem: Clone,
                A: $trt<V::Elem>,
            {
                self.check_conformable(src)?;
                self.zip_mut_with_operand(src, |x, y| *x $op y.clone());
                Ok(())
            }

            #[doc = concat!("Perform `self ", stringify!($op), " slice` where the slice `info` reads this array's own storage.")]
            pub fn $within(&mut self, info: &SliceInfo2) -> Result<(), ShapeError>
            where A: Clone + $trt
            {
                if self.size1 != info.size1() || self.size2 != info.size2() {
                    return Err(incompatible_shapes());
                }
                let tmp = self.gather_within(info)?;
                for (x, y) in self.as_mut_slice().iter_mut().zip(tmp) {
                    *x $op y;
                }
                Ok(())
            }
        )*
        }
    };
}

compound_assign! {
    AddAssign, add_assign_from, add_assign_slice_within, +=, "addition";
    SubAssign, sub_assign_from, sub_assign_slice_within, -=, "subtraction";
    MulAssign, mul_assign_from, mul_assign_slice_within, *=, "multiplication";
}

/// # Assign-or-reshape
///
/// If the source is not conformable the receiver is first redimensioned to
/// the source's index ranges (`[1, u1]` × `[1, u2]` for views), which fails
/// for a proxy whose buffer is too small. A conformable receiver keeps its
/// own index ranges.
impl<A, S> Array2Base<S>
where S: DataResize<Elem = A>
{
    /// Copy `src` into the array, reshaping it if needed.
    ///
    /// ```
    /// use farray::Array2;
    ///
    /// let src = Array2::from_shape_fn(0..=1, 0..=1, |i, j| i + j);
    /// let mut a = Array2::<isize>::default();
    /// a.assign(&src).unwrap();
    /// assert_eq!(a.range1(), src.range1());
    /// assert_eq!(a[(1, 1)], 2);
    /// ```
    pub fn assign<S2>(&mut self, src: &Array2Base<S2>) -> Result<(), ShapeError>
    where
        S2: Data<Elem = A>,
        A: Clone,
    {
        self.assign_from(src)
    }

    /// Copy an operand of any element type convertible to `A` into the
    /// array, reshaping it if needed.
    pub fn assign_from<V>(&mut self, src: &V) -> Result<(), ShapeError>
    where
        V: Operand2,
        V::Elem: Clone + Into<A>,
    {
        if !self.conformable(src) {
            self.dimension(src.range1(), src.range2())?;
        }
        self.zip_mut_with_operand(src, |x, y| *x = y.clone().into());
        Ok(())
    }

    /// Copy the slice `info` of this array's own storage into the array,
    /// reshaping it to `[1, u1]` × `[1, u2]` if needed.
    ///
    /// ```
    /// use farray::Array2;
    ///
    /// let mut a = Array2::from_shape_vec(2, 2, vec![1, 2, 3, 4]).unwrap();
    /// let second_column = a.slice_info(.., 2..=2).unwrap();
    /// a.assign_slice_within(&second_column).unwrap();
    /// assert_eq!(a.size2(), 1);
    /// assert_eq!(a.as_slice(), &[2, 4]);
    /// ```
    pub fn assign_slice_within(&mut self, info: &SliceInfo2) -> Result<(), ShapeError>
    where A: Clone
    {
        let tmp = self.gather_within(info)?;
        if self.size1 != info.size1() || self.size2 != info.size2() {
            self.dimension(info.size1(), info.size2())?;
        }
        for (x, y) in self.as_mut_slice().iter_mut().zip(tmp) {
            *x = y;
        }
        Ok(())
    }
}

/// # Logical assignment
impl<S> Array2Base<S>
where S: DataMut<Elem = bool>
{
    /// `self = self && src`, element by element.
    pub fn and_equals<V>(&mut self, src: &V) -> Result<(), ShapeError>
    where V: Operand2<Elem = bool>
    {
        self.check_conformable(src)?;
        self.zip_mut_with_operand(src, |x, &y| *x = *x && y);
        Ok(())
    }

    /// `self = self || src`, element by element.
    pub fn or_equals<V>(&mut self, src: &V) -> Result<(), ShapeError>
    where V: Operand2<Elem = bool>
    {
        self.check_conformable(src)?;
        self.zip_mut_with_operand(src, |x, &y| *x = *x || y);
        Ok(())
    }

    pub fn and_equals_slice_within(&mut self, info: &SliceInfo2) -> Result<(), ShapeError>
    {
        if self.size1 != info.size1() || self.size2 != info.size2() {
            return Err(incompatible_shapes());
        }
        let tmp = self.gather_within(info)?;
        for (x, y) in self.as_mut_slice().iter_mut().zip(tmp) {
            *x = *x && y;
        }
        Ok(())
    }

    pub fn or_equals_slice_within(&mut self, info: &SliceInfo2) -> Result<(), ShapeError>
    {
        if self.size1 != info.size1() || self.size2 != info.size2() {
            return Err(incompatible_shapes());
        }
        let tmp = self.gather_within(info)?;
        for (x, y) in self.as_mut_slice().iter_mut().zip(tmp) {
            *x = *x || y;
        }
        Ok(())
    }
}
