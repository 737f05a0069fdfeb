// Copyright 2014-2016 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use std::ops::{Index, IndexMut};
use std::slice;

use crate::error::{from_kind, out_of_bounds, ErrorKind, ShapeError};
use crate::{size_of_ranges, Array2, Array2Base, Array2Proxy, Data, DataMut, DataResize, IndexRange, RawData};
use crate::{Array2ProxyRef, ViewMutRepr, ViewRepr};

#[cold]
#[inline(never)]
pub(crate) fn array_out_of_bounds() -> !
{
    panic!("farray: index out of bounds");
}

/// # Inspectors
impl<S> Array2Base<S>
where S: RawData
{
    /// The rank of the array, always 2.
    #[inline]
    pub fn rank(&self) -> usize
    {
        2
    }

    /// Index range of dimension 1.
    #[inline]
    pub fn range1(&self) -> IndexRange
    {
        self.range1
    }

    /// Index range of dimension 2.
    #[inline]
    pub fn range2(&self) -> IndexRange
    {
        self.range2
    }

    #[inline]
    pub fn l1(&self) -> isize
    {
        self.range1.l()
    }

    #[inline]
    pub fn u1(&self) -> isize
    {
        self.range1.u()
    }

    #[inline]
    pub fn l2(&self) -> isize
    {
        self.range2.l()
    }

    #[inline]
    pub fn u2(&self) -> isize
    {
        self.range2.u()
    }

    /// Number of rows.
    #[inline]
    pub fn size1(&self) -> usize
    {
        self.size1
    }

    /// Number of columns.
    #[inline]
    pub fn size2(&self) -> usize
    {
        self.size2
    }

    #[inline]
    pub fn isize1(&self) -> isize
    {
        self.size1 as isize
    }

    #[inline]
    pub fn isize2(&self) -> isize
    {
        self.size2 as isize
    }

    /// Index range of dimension `d`.
    ///
    /// Fails with `InvalidDimension` unless `d` is 1 or 2.
    pub fn range(&self, d: usize) -> Result<IndexRange, ShapeError>
    {
        match d {
            1 => Ok(self.range1),
            2 => Ok(self.range2),
            _ => Err(from_kind(ErrorKind::InvalidDimension)),
        }
    }

    /// Lower index of dimension `d`.
    pub fn l(&self, d: usize) -> Result<isize, ShapeError>
    {
        self.range(d).map(|r| r.l())
    }

    /// Upper index of dimension `d`.
    pub fn u(&self, d: usize) -> Result<isize, ShapeError>
    {
        self.range(d).map(|r| r.u())
    }

    /// Size of dimension `d`.
    pub fn size(&self, d: usize) -> Result<usize, ShapeError>
    {
        self.range(d).map(|r| r.size())
    }

    /// Size of dimension `d`, as a signed integer.
    pub fn isize(&self, d: usize) -> Result<isize, ShapeError>
    {
        self.range(d).map(|r| r.isize())
    }

    /// Return the total number of elements in the array.
    #[inline]
    pub fn len(&self) -> usize
    {
        self.size1 * self.size2
    }

    #[inline]
    pub fn is_empty(&self) -> bool
    {
        self.len() == 0
    }

    /// Return `true` if `(i1, i2)` is inside both index ranges.
    #[inline]
    pub fn contains(&self, i1: isize, i2: isize) -> bool
    {
        self.range1.contains(i1) && self.range2.contains(i2)
    }

    /// The zero-based row-major offset of `(i1, i2)` in the flat buffer.
    ///
    /// The index is not checked; see [`checked_index`](Self::checked_index).
    #[inline]
    pub fn index(&self, i1: isize, i2: isize) -> usize
    {
        // exact modulo 2^N: the offset of an index inside the ranges is below `len`
        i1.wrapping_mul(self.size2 as isize)
            .wrapping_add(i2)
            .wrapping_sub(self.shift) as usize
    }

    /// The zero-based offset of `(i1, i2)`, or `None` if out of bounds.
    #[inline]
    pub fn checked_index(&self, i1: isize, i2: isize) -> Option<usize>
    {
        if self.contains(i1, i2) {
            Some(self.index(i1, i2))
        } else {
            None
        }
    }
}

/// # Element access
impl<A, S> Array2Base<S>
where S: Data<Elem = A>
{
    /// The elements of the array as a row-major slice.
    #[inline]
    pub fn as_slice(&self) -> &[A]
    {
        &self.data._data_slice()[..self.len()]
    }

    /// Return an iterator of references to the elements in row-major order.
    pub fn iter(&self) -> slice::Iter<'_, A>
    {
        self.as_slice().iter()
    }

    /// Return a reference to the element at `(i1, i2)`, or `None` if the
    /// index is out of bounds.
    pub fn get(&self, i1: isize, i2: isize) -> Option<&A>
    {
        let l = self.checked_index(i1, i2)?;
        Some(&self.as_slice()[l])
    }

    /// Return a reference to the element at `(i1, i2)`.
    ///
    /// Fails with `OutOfBounds` if the index is outside of the index ranges.
    pub fn at(&self, i1: isize, i2: isize) -> Result<&A, ShapeError>
    {
        self.get(i1, i2).ok_or_else(out_of_bounds)
    }

    /// Return a reference to the element at `(i1, i2)` without bounds
    /// checking.
    ///
    /// **Note:** only unchecked for non-debug builds of farray.
    ///
    /// # Safety
    ///
    /// The caller must ensure that the index is in-bounds.
    #[inline]
    pub unsafe fn uget(&self, i1: isize, i2: isize) -> &A
    {
        debug_bounds_check!(self, i1, i2);
        let l = self.index(i1, i2);
        self.as_slice().get_unchecked(l)
    }

    /// The flat buffer from element `(i1, i2)` to the end of the array.
    ///
    /// Fails with `OutOfBounds` if the index is outside of the index ranges.
    pub fn tail(&self, i1: isize, i2: isize) -> Result<&[A], ShapeError>
    {
        let l = self.checked_index(i1, i2).ok_or_else(out_of_bounds)?;
        Ok(&self.as_slice()[l..])
    }

    /// Return a read-only proxy over this array's storage.
    pub fn as_proxy_ref(&self) -> Array2ProxyRef<'_, A>
    {
        Array2Base::from_data_ranges(ViewRepr(self.as_slice()), self.range1, self.range2)
    }

    /// Copy the elements into a new `Vec` in row-major order.
    pub fn to_vec(&self) -> Vec<A>
    where A: Clone
    {
        self.as_slice().to_vec()
    }
}

/// # Mutable element access
impl<A, S> Array2Base<S>
where S: DataMut<Elem = A>
{
    /// The elements of the array as a mutable row-major slice.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [A]
    {
        let len = self.len();
        &mut self.data._data_slice_mut()[..len]
    }

    /// Return an iterator of mutable references to the elements in
    /// row-major order.
    pub fn iter_mut(&mut self) -> slice::IterMut<'_, A>
    {
        self.as_mut_slice().iter_mut()
    }

    /// Return a mutable reference to the element at `(i1, i2)`, or `None`
    /// if the index is out of bounds.
    pub fn get_mut(&mut self, i1: isize, i2: isize) -> Option<&mut A>
    {
        let l = self.checked_index(i1, i2)?;
        Some(&mut self.as_mut_slice()[l])
    }

    /// Return a mutable reference to the element at `(i1, i2)`.
    ///
    /// Fails with `OutOfBounds` if the index is outside of the index ranges.
    pub fn at_mut(&mut self, i1: isize, i2: isize) -> Result<&mut A, ShapeError>
    {
        self.get_mut(i1, i2).ok_or_else(out_of_bounds)
    }

    /// Set the element at `(i1, i2)` to `value`.
    ///
    /// Fails with `OutOfBounds` if the index is outside of the index ranges.
    pub fn set(&mut self, i1: isize, i2: isize, value: A) -> Result<(), ShapeError>
    {
        *self.at_mut(i1, i2)? = value;
        Ok(())
    }

    /// Return a mutable reference to the element at `(i1, i2)` without
    /// bounds checking.
    ///
    /// **Note:** only unchecked for non-debug builds of farray.
    ///
    /// # Safety
    ///
    /// The caller must ensure that the index is in-bounds.
    #[inline]
    pub unsafe fn uget_mut(&mut self, i1: isize, i2: isize) -> &mut A
    {
        debug_bounds_check!(self, i1, i2);
        let l = self.index(i1, i2);
        self.as_mut_slice().get_unchecked_mut(l)
    }

    /// The mutable flat buffer from element `(i1, i2)` to the end of the
    /// array.
    pub fn tail_mut(&mut self, i1: isize, i2: isize) -> Result<&mut [A], ShapeError>
    {
        let l = self.checked_index(i1, i2).ok_or_else(out_of_bounds)?;
        Ok(&mut self.as_mut_slice()[l..])
    }

    /// Return a read-write proxy over this array's storage, with the same
    /// index ranges.
    pub fn as_proxy(&mut self) -> Array2Proxy<'_, A>
    {
        let (r1, r2) = (self.range1, self.range2);
        Array2Base::from_data_ranges(ViewMutRepr(self.as_mut_slice()), r1, r2)
    }

    /// Set every element to `value`.
    pub fn fill(&mut self, value: A)
    where A: Clone
    {
        self.as_mut_slice().fill(value);
    }

    /// Set every element to `A::default()`.
    pub fn to_default(&mut self)
    where A: Default
    {
        self.as_mut_slice().iter_mut().for_each(|x| *x = A::default());
    }

    /// Swap the contents (elements and index ranges) of two arrays.
    pub fn swap(&mut self, other: &mut Self)
    {
        std::mem::swap(self, other);
    }
}

/// # Dimensioning
impl<A, S> Array2Base<S>
where S: DataResize<Elem = A>
{
    /// Redimension the array to the index ranges `r1` × `r2`.
    ///
    /// Element values afterwards are unspecified; use
    /// [`redimension`](Array2::redimension) on an owned array to keep them.
    ///
    /// Fails with `OutOfBounds` if a proxy's buffer is too small for the new
    /// shape, and with `DimensionTooLarge` if the element count overflows.
    pub fn dimension<R1, R2>(&mut self, r1: R1, r2: R2) -> Result<(), ShapeError>
    where
        R1: Into<IndexRange>,
        R2: Into<IndexRange>,
    {
        let (r1, r2) = (r1.into(), r2.into());
        let len = size_of_ranges(&r1, &r2)?;
        self.data._resize(len)?;
        self.set_ranges(r1, r2);
        Ok(())
    }

    /// Clear the array: empty index ranges and no elements.
    pub fn clear(&mut self)
    {
        let shrunk = self.data._resize(0);
        debug_assert!(shrunk.is_ok(), "shrinking to zero elements always succeeds");
        self.set_ranges(IndexRange::default(), IndexRange::default());
    }
}

impl<A, S> Array2Base<S>
where S: RawData<Elem = A> + Default
{
    /// Move the contents out, leaving `self` empty with cleared ranges.
    pub fn take(&mut self) -> Self
    {
        std::mem::take(self)
    }
}

impl<A> Array2<A>
{
    /// Redimension to `r1` × `r2`, keeping the values of the elements whose
    /// indices are in both the old and the new index ranges.
    ///
    /// New elements are set to `A::default()`.
    pub fn redimension<R1, R2>(&mut self, r1: R1, r2: R2) -> Result<(), ShapeError>
    where
        R1: Into<IndexRange>,
        R2: Into<IndexRange>,
        A: Default,
    {
        let (r1, r2) = (r1.into(), r2.into());
        if r1 == self.range1 && r2 == self.range2 {
            return Ok(());
        }
        let mut fresh = Array2::new(r1, r2)?;
        let rows = self.range1.intersection(&r1);
        let cols = self.range2.intersection(&r2);
        if !rows.is_empty() && !cols.is_empty() {
            let mut old = std::mem::take(&mut self.data.0);
            for i1 in rows {
                for i2 in cols {
                    let from = self.index(i1, i2);
                    let to = fresh.index(i1, i2);
                    fresh.data.0[to] = std::mem::take(&mut old[from]);
                }
            }
        }
        *self = fresh;
        Ok(())
    }

    /// Consume the array and return its elements in row-major order.
    pub fn into_raw_vec(self) -> Vec<A>
    {
        self.data.into_vec()
    }
}

impl<A, S> Index<(isize, isize)> for Array2Base<S>
where S: Data<Elem = A>
{
    type Output = A;

    /// **Panics** if the index is out of bounds.
    #[inline]
    fn index(&self, (i1, i2): (isize, isize)) -> &A
    {
        self.get(i1, i2).unwrap_or_else(|| array_out_of_bounds())
    }
}

impl<A, S> IndexMut<(isize, isize)> for Array2Base<S>
where S: DataMut<Elem = A>
{
    /// **Panics** if the index is out of bounds.
    #[inline]
    fn index_mut(&mut self, (i1, i2): (isize, isize)) -> &mut A
    {
        self.get_mut(i1, i2).unwrap_or_else(|| array_out_of_bounds())
    }
}

#[cfg(test)]
mod tests
{
    use crate::{Array2, ErrorKind, IndexRange};

    #[test]
    fn shift_maps_origin_to_zero()
    {
        let a = Array2::<i32>::new(-1..=1, 4..=6).unwrap();
        assert_eq!(a.index(-1, 4), 0);
        assert_eq!(a.index(-1, 6), 2);
        assert_eq!(a.index(0, 4), 3);
        assert_eq!(a.index(1, 6), 8);
        assert_eq!(a.checked_index(2, 4), None);
    }

    #[test]
    fn index_near_the_isize_limits()
    {
        let r1 = IndexRange::new(isize::MAX - 1, isize::MAX);
        let r2 = IndexRange::new(isize::MIN, isize::MIN + 2);
        let a = Array2::from_shape_vec(r1, r2, (0..6).collect::<Vec<i32>>()).unwrap();
        assert_eq!(a.index(isize::MAX - 1, isize::MIN), 0);
        assert_eq!(a.index(isize::MAX, isize::MIN + 2), 5);
        assert_eq!(a.at(isize::MAX, isize::MIN + 1), Ok(&4));
        assert_eq!(a.checked_index(isize::MAX, isize::MAX), None);
    }

    #[test]
    fn inspectors_by_dimension_number()
    {
        let a = Array2::<f64>::new(0..=2, 5).unwrap();
        assert_eq!(a.rank(), 2);
        assert_eq!(a.range(1), Ok(IndexRange::new(0, 2)));
        assert_eq!(a.u(2), Ok(5));
        assert_eq!(a.size(1), Ok(3));
        assert_eq!(a.isize(2), Ok(5));
        assert_eq!(a.l(3).unwrap_err().kind(), ErrorKind::InvalidDimension);
    }

    #[test]
    fn redimension_keeps_common_elements()
    {
        let mut a = Array2::from_shape_fn(1..=2, 1..=2, |i, j| i * 10 + j);
        a.redimension(0..=2, 2..=3).unwrap();
        assert_eq!(a.range1(), IndexRange::new(0, 2));
        assert_eq!(a[(1, 2)], 12);
        assert_eq!(a[(2, 2)], 22);
        assert_eq!(a[(0, 3)], 0);
        assert_eq!(a[(2, 3)], 0);
        assert_eq!(a.len(), 6);
    }

    #[test]
    fn take_leaves_source_cleared()
    {
        let mut a = Array2::from_elem(2, 3, 7u8).unwrap();
        let b = a.take();
        assert_eq!(b.len(), 6);
        assert!(a.is_empty());
        assert_eq!(a.range1(), IndexRange::default());
        assert_eq!(a.size2(), 0);
    }

    #[test]
    fn tail_runs_to_the_end()
    {
        let a = Array2::from_shape_vec(2, 2, vec![1, 2, 3, 4]).unwrap();
        assert_eq!(a.tail(1, 2).unwrap(), &[2, 3, 4]);
        assert!(a.tail(3, 1).is_err());
    }
}
