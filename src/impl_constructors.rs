// Copyright 2014-2016 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Constructor methods for farray
//!
use num_traits::Zero;

use crate::error::{from_kind, incompatible_shapes, ErrorKind, ShapeError};
use crate::operand::Operand2;
use crate::{size_of_ranges, Array2, Array2Base, Array2Proxy, Array2ProxyRef, IndexRange};
use crate::{OwnedRepr, ViewMutRepr, ViewRepr};

/// # Constructor methods for owned arrays
///
/// Every constructor takes the two index ranges as `impl Into<IndexRange>`:
/// an `IndexRange`, an inclusive range like `0..=4`, or a size `n` for the
/// Fortran default `1..=n`. Constructors fail with `DimensionTooLarge` if
/// the element count overflows.
impl<A> Array2<A>
{
    /// Create an array with every element set to `A::default()`.
    ///
    /// ```
    /// use farray::Array2;
    ///
    /// let a = Array2::<f64>::new(0..=2, 4).unwrap();
    /// assert_eq!(a.size1(), 3);
    /// assert_eq!(a.u2(), 4);
    /// ```
    pub fn new<R1, R2>(r1: R1, r2: R2) -> Result<Self, ShapeError>
    where
        R1: Into<IndexRange>,
        R2: Into<IndexRange>,
        A: Default,
    {
        Self::from_shape_simple_fn(r1, r2, A::default)
    }

    /// Create an array with every element set to `elem`.
    pub fn from_elem<R1, R2>(r1: R1, r2: R2, elem: A) -> Result<Self, ShapeError>
    where
        R1: Into<IndexRange>,
        R2: Into<IndexRange>,
        A: Clone,
    {
        let (r1, r2) = (r1.into(), r2.into());
        let len = size_of_ranges(&r1, &r2)?;
        Ok(Array2Base::from_data_ranges(OwnedRepr(vec![elem; len]), r1, r2))
    }

    /// Create an array filled with zeros.
    pub fn zeros<R1, R2>(r1: R1, r2: R2) -> Result<Self, ShapeError>
    where
        R1: Into<IndexRange>,
        R2: Into<IndexRange>,
        A: Clone + Zero,
    {
        Self::from_elem(r1, r2, A::zero())
    }

    /// Create an array with values created by the function `f`, called in
    /// row-major order without arguments.
    pub fn from_shape_simple_fn<R1, R2, F>(r1: R1, r2: R2, mut f: F) -> Result<Self, ShapeError>
    where
        R1: Into<IndexRange>,
        R2: Into<IndexRange>,
        F: FnMut() -> A,
    {
        let (r1, r2) = (r1.into(), r2.into());
        let len = size_of_ranges(&r1, &r2)?;
        let v = (0..len).map(|_| f()).collect();
        Ok(Array2Base::from_data_ranges(OwnedRepr(v), r1, r2))
    }

    /// Create an array with values created by the function `f`, which is
    /// called with the index `(i1, i2)` of each element in row-major order.
    ///
    /// **Panics** if the element count overflows `usize`.
    ///
    /// ```
    /// use farray::Array2;
    ///
    /// let a = Array2::from_shape_fn(0..=1, 0..=2, |i, j| 10 * i + j);
    /// assert_eq!(a.as_slice(), &[0, 1, 2, 10, 11, 12]);
    /// ```
    pub fn from_shape_fn<R1, R2, F>(r1: R1, r2: R2, mut f: F) -> Self
    where
        R1: Into<IndexRange>,
        R2: Into<IndexRange>,
        F: FnMut(isize, isize) -> A,
    {
        let (r1, r2) = (r1.into(), r2.into());
        if let Err(e) = size_of_ranges(&r1, &r2) {
            panic!("farray: from_shape_fn: {}", e);
        }
        let v = r1
            .iter()
            .flat_map(|i1| r2.iter().map(move |i2| (i1, i2)))
            .map(|(i1, i2)| f(i1, i2))
            .collect();
        Array2Base::from_data_ranges(OwnedRepr(v), r1, r2)
    }

    /// Create an array from a vector of elements in row-major order.
    ///
    /// Fails with `IncompatibleShapes` unless the vector has exactly
    /// `size1 * size2` elements.
    ///
    /// ```
    /// use farray::Array2;
    ///
    /// let a = Array2::from_shape_vec(2, 3, vec![1, 2, 3, 4, 5, 6]).unwrap();
    /// assert_eq!(a[(2, 1)], 4);
    /// assert!(Array2::from_shape_vec(2, 2, vec![1, 2, 3]).is_err());
    /// ```
    pub fn from_shape_vec<R1, R2>(r1: R1, r2: R2, v: Vec<A>) -> Result<Self, ShapeError>
    where
        R1: Into<IndexRange>,
        R2: Into<IndexRange>,
    {
        let (r1, r2) = (r1.into(), r2.into());
        if size_of_ranges(&r1, &r2)? != v.len() {
            return Err(incompatible_shapes());
        }
        Ok(Array2Base::from_data_ranges(OwnedRepr(v), r1, r2))
    }

    /// Create an array by copying an operand: another array (also of a
    /// different element type), a slice view or a member view.
    ///
    /// The new array takes the operand's index ranges; views are 1-based.
    pub fn from_operand<V>(src: &V) -> Self
    where
        V: Operand2,
        V::Elem: Clone + Into<A>,
    {
        let (n1, n2) = (src.size1(), src.size2());
        let mut v = Vec::with_capacity(n1 * n2);
        for r in 0..n1 {
            for c in 0..n2 {
                v.push(src.elem0(r, c).clone().into());
            }
        }
        Array2Base::from_data_ranges(OwnedRepr(v), src.range1(), src.range2())
    }
}

/// # Proxy constructors
impl<'a, A> Array2Proxy<'a, A>
{
    /// Create a proxy with index ranges `r1` × `r2` over `data`.
    ///
    /// `data` may be longer than the array; the proxy uses its first
    /// `size1 * size2` elements. Fails with `OutOfBounds` if it is shorter.
    pub fn proxy<R1, R2>(data: &'a mut [A], r1: R1, r2: R2) -> Result<Self, ShapeError>
    where
        R1: Into<IndexRange>,
        R2: Into<IndexRange>,
    {
        let (r1, r2) = (r1.into(), r2.into());
        if size_of_ranges(&r1, &r2)? > data.len() {
            return Err(from_kind(ErrorKind::OutOfBounds));
        }
        Ok(Array2Base::from_data_ranges(ViewMutRepr(data), r1, r2))
    }

    /// Create a proxy over `data` with `data.len()` rows and one column,
    /// the default shape of a proxy over flat storage.
    pub fn from_slice(data: &'a mut [A]) -> Self
    {
        let r1 = IndexRange::with_size(data.len());
        Array2Base::from_data_ranges(ViewMutRepr(data), r1, IndexRange::with_size(1))
    }

    /// Create a 1 × 1 proxy over a single value.
    pub fn from_value(value: &'a mut A) -> Self
    {
        Self::from_slice(std::slice::from_mut(value))
    }
}

impl<'a, A> Array2ProxyRef<'a, A>
{
    /// Create a read-only proxy with index ranges `r1` × `r2` over `data`.
    ///
    /// Fails with `OutOfBounds` if `data` is shorter than the array.
    pub fn proxy_ref<R1, R2>(data: &'a [A], r1: R1, r2: R2) -> Result<Self, ShapeError>
    where
        R1: Into<IndexRange>,
        R2: Into<IndexRange>,
    {
        let (r1, r2) = (r1.into(), r2.into());
        if size_of_ranges(&r1, &r2)? > data.len() {
            return Err(from_kind(ErrorKind::OutOfBounds));
        }
        Ok(Array2Base::from_data_ranges(ViewRepr(data), r1, r2))
    }
}
