// Copyright 2014-2016 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use crate::error::ShapeError;
use crate::{Array2Base, Data, DataMut, RawData};
use crate::{ArrayView1S, ArrayView2S, ArrayViewMut1S, ArrayViewMut2S};
use crate::{DimSlice, IndexSlice, SliceInfo1, SliceInfo2};

/// # Slicing
///
/// A slice selects, in each dimension, the indices `start, start + step, …`
/// up to the inclusive end bound; either bound may be omitted. The result
/// is a view indexed from 1 in each dimension. Slicing fails with
/// `OutOfBounds` if any selected index is outside the array's index ranges.
///
/// ```
/// use farray::{Array2, IndexSlice};
///
/// let mut a = Array2::from_shape_fn(0..=3, 0..=3, |i, j| 10 * i + j);
/// let v = a.slice(1..=3, IndexSlice::from(..).step_by(2)).unwrap();
/// assert_eq!(v.size1(), 3);
/// assert_eq!(v.size2(), 2);
/// assert_eq!(v[(1, 1)], 10);
/// assert_eq!(v[(3, 2)], 32);
///
/// a.slice_mut(.., 3..=3).unwrap().fill(-1);
/// assert_eq!(a[(2, 3)], -1);
/// ```
impl<A, S> Array2Base<S>
where S: RawData<Elem = A>
{
    /// Resolve a two-dimensional slice into a descriptor that does not
    /// borrow the array.
    pub fn slice_info<I1, I2>(&self, s1: I1, s2: I2) -> Result<SliceInfo2, ShapeError>
    where
        I1: Into<IndexSlice>,
        I2: Into<IndexSlice>,
    {
        let d1 = DimSlice::new(&self.range1, &s1.into(), self.size2)?;
        let d2 = DimSlice::new(&self.range2, &s2.into(), 1)?;
        Ok(SliceInfo2::new(0, d1, d2))
    }

    /// Resolve a section of row `i1`.
    pub fn row_slice_info<I2>(&self, i1: isize, s2: I2) -> Result<SliceInfo1, ShapeError>
    where I2: Into<IndexSlice>
    {
        let k1 = DimSlice::index_offset(&self.range1, i1, self.size2)?;
        let d2 = DimSlice::new(&self.range2, &s2.into(), 1)?;
        Ok(SliceInfo1::new(k1, d2))
    }

    /// Resolve a section of column `i2`.
    pub fn col_slice_info<I1>(&self, s1: I1, i2: isize) -> Result<SliceInfo1, ShapeError>
    where I1: Into<IndexSlice>
    {
        let k2 = DimSlice::index_offset(&self.range2, i2, 1)?;
        let d1 = DimSlice::new(&self.range1, &s1.into(), self.size2)?;
        Ok(SliceInfo1::new(k2, d1))
    }
}

impl<A, S> Array2Base<S>
where S: Data<Elem = A>
{
    /// Return a read-only view of the slice `s1` × `s2`.
    pub fn slice<I1, I2>(&self, s1: I1, s2: I2) -> Result<ArrayView2S<'_, A>, ShapeError>
    where
        I1: Into<IndexSlice>,
        I2: Into<IndexSlice>,
    {
        let info = self.slice_info(s1, s2)?;
        Ok(ArrayView2S::new(self.as_slice(), info))
    }

    /// Return a read-only view of a section of row `i1`.
    pub fn slice_row<I2>(&self, i1: isize, s2: I2) -> Result<ArrayView1S<'_, A>, ShapeError>
    where I2: Into<IndexSlice>
    {
        let info = self.row_slice_info(i1, s2)?;
        Ok(ArrayView1S::new(self.as_slice(), info))
    }

    /// Return a read-only view of a section of column `i2`.
    pub fn slice_col<I1>(&self, s1: I1, i2: isize) -> Result<ArrayView1S<'_, A>, ShapeError>
    where I1: Into<IndexSlice>
    {
        let info = self.col_slice_info(s1, i2)?;
        Ok(ArrayView1S::new(self.as_slice(), info))
    }
}

impl<A, S> Array2Base<S>
where S: DataMut<Elem = A>
{
    /// Return a read-write view of the slice `s1` × `s2`.
    pub fn slice_mut<I1, I2>(&mut self, s1: I1, s2: I2) -> Result<ArrayViewMut2S<'_, A>, ShapeError>
    where
        I1: Into<IndexSlice>,
        I2: Into<IndexSlice>,
    {
        let info = self.slice_info(s1, s2)?;
        Ok(ArrayViewMut2S::new(self.as_mut_slice(), info))
    }

    pub fn slice_row_mut<I2>(&mut self, i1: isize, s2: I2) -> Result<ArrayViewMut1S<'_, A>, ShapeError>
    where I2: Into<IndexSlice>
    {
        let info = self.row_slice_info(i1, s2)?;
        Ok(ArrayViewMut1S::new(self.as_mut_slice(), info))
    }

    pub fn slice_col_mut<I1>(&mut self, s1: I1, i2: isize) -> Result<ArrayViewMut1S<'_, A>, ShapeError>
    where I1: Into<IndexSlice>
    {
        let info = self.col_slice_info(s1, i2)?;
        Ok(ArrayViewMut1S::new(self.as_mut_slice(), info))
    }
}

#[cfg(test)]
mod tests
{
    use crate::{Array2, ErrorKind, IndexRange, IndexSlice, Operand2};

    fn sample() -> Array2<i32>
    {
        Array2::from_shape_fn(1..=3, 1..=4, |i, j| (10 * i + j) as i32)
    }

    #[test]
    fn reversed_rows()
    {
        let a = sample();
        let v = a.slice(IndexSlice::new(None, None, -1), ..).unwrap();
        assert_eq!(v.range1(), IndexRange::new(1, 3));
        assert_eq!(v[(1, 1)], 31);
        assert_eq!(v[(3, 4)], 14);
    }

    #[test]
    fn row_and_column_sections()
    {
        let mut a = sample();
        let r = a.slice_row(2, 2..).unwrap();
        assert_eq!(r.to_vec(), vec![22, 23, 24]);
        let c = a.slice_col(.., 4).unwrap();
        assert_eq!(c.to_vec(), vec![14, 24, 34]);
        a.slice_col_mut(IndexSlice::from(..).step_by(2), 1).unwrap().fill(0);
        assert_eq!(a[(1, 1)], 0);
        assert_eq!(a[(2, 1)], 21);
        assert_eq!(a[(3, 1)], 0);
    }

    #[test]
    fn slices_of_offset_arrays()
    {
        let a = Array2::from_shape_fn(-1..=1, 5..=6, |i, j| (10 * i + j) as i32);
        let v = a.slice(0..=1, 6..=6).unwrap();
        assert_eq!(v.iter().copied().collect::<Vec<_>>(), vec![6, 16]);
        let e = a.slice(0..=2, ..).unwrap_err();
        assert_eq!(e.kind(), ErrorKind::OutOfBounds);
        assert!(a.slice_row(2, ..).is_err());
    }

    #[test]
    fn contiguous_view_to_proxy()
    {
        let mut a = sample();
        {
            let mut p = a.slice_mut(2..=3, ..).unwrap().into_proxy().unwrap();
            assert_eq!(p.range1(), IndexRange::new(1, 2));
            p[(2, 4)] = -7;
        }
        assert_eq!(a[(3, 4)], -7);
        let e = a.slice_mut(.., 1..=2).unwrap().into_proxy().unwrap_err();
        assert_eq!(e.kind(), ErrorKind::IncompatibleLayout);
    }
}
