// Copyright 2014-2016 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use std::ops::{RangeFrom, RangeFull, RangeInclusive, RangeToInclusive};

use crate::error::{out_of_bounds, ShapeError};
use crate::views::{ArrayView1S, ArrayView2S, ArrayViewMut1S, ArrayViewMut2S};
use crate::IndexRange;

/// A slice request for one dimension, the Fortran `l:u:s` triplet.
///
/// Bounds are array indices (not positions) and both are inclusive. An
/// omitted lower bound means the start of the dimension in the direction
/// of the stride; an omitted upper bound means its end.
///
/// ## Examples
///
/// `IndexSlice::from(..)` is the whole dimension, Fortran `:`.
///
/// `IndexSlice::from(2..=5)` is `2:5`.
///
/// `IndexSlice::from(2..).step_by(2)` is `2::2`, every second index from 2.
///
/// `IndexSlice::new(None, None, -1)` is `::-1`, the dimension reversed.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct IndexSlice
{
    pub start: Option<isize>,
    pub end: Option<isize>,
    pub step: isize,
}

impl IndexSlice
{
    /// Create a new `IndexSlice` with the given extents.
    ///
    /// **Panics** if `step` is zero.
    pub fn new(start: Option<isize>, end: Option<isize>, step: isize) -> IndexSlice
    {
        fassert!(step != 0, "IndexSlice::new: step must be nonzero");
        IndexSlice { start, end, step }
    }

    /// The single index `i`, as a slice of length one.
    #[inline]
    pub fn index(i: isize) -> IndexSlice
    {
        IndexSlice {
            start: Some(i),
            end: Some(i),
            step: 1,
        }
    }

    /// Create a new `IndexSlice` with the given step size (multiplied with the
    /// previous step size).
    ///
    /// **Panics** if `step` is zero.
    #[inline]
    pub fn step_by(self, step: isize) -> Self
    {
        fassert!(step != 0, "IndexSlice::step_by: step must be nonzero");
        IndexSlice {
            step: self.step * step,
            ..self
        }
    }
}

impl From<RangeFull> for IndexSlice
{
    #[inline]
    fn from(_: RangeFull) -> IndexSlice
    {
        IndexSlice {
            start: None,
            end: None,
            step: 1,
        }
    }
}

macro_rules! impl_index_slice_from_range {
    ($index:ty) => {
        impl From<RangeInclusive<$index>> for IndexSlice
        {
            #[inline]
            fn from(r: RangeInclusive<$index>) -> IndexSlice
            {
                IndexSlice {
                    start: Some(*r.start() as isize),
                    end: Some(*r.end() as isize),
                    step: 1,
                }
            }
        }

        impl From<RangeFrom<$index>> for IndexSlice
        {
            #[inline]
            fn from(r: RangeFrom<$index>) -> IndexSlice
            {
                IndexSlice {
                    start: Some(r.start as isize),
                    end: None,
                    step: 1,
                }
            }
        }

        impl From<RangeToInclusive<$index>> for IndexSlice
        {
            #[inline]
            fn from(r: RangeToInclusive<$index>) -> IndexSlice
            {
                IndexSlice {
                    start: None,
                    end: Some(r.end as isize),
                    step: 1,
                }
            }
        }
    };
}

impl_index_slice_from_range!(isize);
impl_index_slice_from_range!(usize);
impl_index_slice_from_range!(i32);

impl From<IndexRange> for IndexSlice
{
    #[inline]
    fn from(r: IndexRange) -> IndexSlice
    {
        IndexSlice {
            start: Some(r.l()),
            end: Some(r.u()),
            step: 1,
        }
    }
}

/// A slice resolved against one dimension of an array.
///
/// View index `i` (`1 ..= u`) of the dimension contributes `k + i * m` to
/// the flat offset of an element, where `m` is the stride multiplied by the
/// number of flat elements one step of the dimension skips. Offsets count
/// from the lower bound of the range.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct DimSlice
{
    m: isize,
    k: isize,
    u: isize,
}

impl DimSlice
{
    /// Resolve `slice` against `range`, where one index step in this
    /// dimension skips `multiplier` flat elements.
    ///
    /// Fails with `OutOfBounds` if the slice selects any index outside
    /// `range`. A slice selecting nothing is always accepted.
    pub fn new(range: &IndexRange, slice: &IndexSlice, multiplier: usize) -> Result<DimSlice, ShapeError>
    {
        let step = slice.step;
        let (default_start, default_end) = if step > 0 {
            (range.l(), range.u())
        } else {
            (range.u(), range.l())
        };
        let start = slice.start.unwrap_or(default_start);
        let end = slice.end.unwrap_or(default_end);
        let z = multiplier as isize;
        let selects = if step > 0 { end >= start } else { start >= end };
        if !selects {
            return Ok(DimSlice { m: z, k: 0, u: 0 });
        }
        if !range.contains(start) {
            return Err(out_of_bounds());
        }
        let stride = step.unsigned_abs();
        let count = (start.abs_diff(end) / stride)
            .checked_add(1)
            .ok_or_else(out_of_bounds)?;
        // distance from `start` to the last selected index
        let reach = (count - 1) * stride;
        let room = if step > 0 {
            range.u().abs_diff(start)
        } else {
            start.abs_diff(range.l())
        };
        if reach > room {
            return Err(out_of_bounds());
        }
        let step = if count == 1 { 1 } else { step };
        let u = isize::try_from(count).map_err(|_| out_of_bounds())?;
        let m = step.checked_mul(z).ok_or_else(out_of_bounds)?;
        let k = (start - range.l())
            .checked_sub(step)
            .and_then(|p| p.checked_mul(z))
            .ok_or_else(out_of_bounds)?;
        Ok(DimSlice { m, k, u })
    }

    /// The offset contribution of the single index `i` of `range`.
    pub(crate) fn index_offset(range: &IndexRange, i: isize, multiplier: usize) -> Result<isize, ShapeError>
    {
        if range.contains(i) {
            Ok((i - range.l()) * multiplier as isize)
        } else {
            Err(out_of_bounds())
        }
    }

    /// Stride in flat elements between consecutive view indices.
    #[inline]
    pub fn m(&self) -> isize
    {
        self.m
    }

    /// Offset contribution of view index 0.
    #[inline]
    pub fn k(&self) -> isize
    {
        self.k
    }

    /// Upper bound of the view index, which is also its length.
    #[inline]
    pub fn u(&self) -> isize
    {
        self.u
    }

    #[inline]
    pub fn size(&self) -> usize
    {
        self.u as usize
    }
}

/// A resolved two-dimensional slice that is not tied to a borrow.
///
/// `SliceInfo2` remembers where a strided slice lives in a flat buffer and
/// can be resolved against any buffer later. The owning array produces one
/// with [`slice_info`](crate::Array2Base::slice_info); the array's
/// `*_slice_within` methods use it to read a slice of the array's own
/// storage while writing to that storage.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct SliceInfo2
{
    base: isize,
    d1: DimSlice,
    d2: DimSlice,
}

impl SliceInfo2
{
    pub(crate) fn new(base: isize, d1: DimSlice, d2: DimSlice) -> Self
    {
        SliceInfo2 {
            base: base + d1.k + d2.k,
            d1,
            d2,
        }
    }

    #[inline]
    pub fn u1(&self) -> isize
    {
        self.d1.u
    }

    #[inline]
    pub fn u2(&self) -> isize
    {
        self.d2.u
    }

    #[inline]
    pub fn size1(&self) -> usize
    {
        self.d1.size()
    }

    #[inline]
    pub fn size2(&self) -> usize
    {
        self.d2.size()
    }

    #[inline]
    pub fn len(&self) -> usize
    {
        self.size1() * self.size2()
    }

    #[inline]
    pub fn is_empty(&self) -> bool
    {
        self.len() == 0
    }

    /// Flat offset of view element `(i1, i2)` (1-based, not bounds checked).
    #[inline]
    pub(crate) fn offset(&self, i1: isize, i2: isize) -> usize
    {
        (self.base + i1 * self.d1.m + i2 * self.d2.m) as usize
    }

    /// The smallest and largest flat offsets the slice touches.
    pub(crate) fn span(&self) -> Option<(usize, usize)>
    {
        if self.is_empty() {
            return None;
        }
        let corners = [
            self.offset(1, 1),
            self.offset(1, self.d2.u),
            self.offset(self.d1.u, 1),
            self.offset(self.d1.u, self.d2.u),
        ];
        let lo = corners.iter().copied().min()?;
        let hi = corners.iter().copied().max()?;
        Some((lo, hi))
    }

    /// Return `true` if the slice elements are consecutive and in row-major
    /// order in the flat buffer.
    pub fn is_contiguous(&self) -> bool
    {
        let rows_ok = self.d1.u <= 1 || self.d1.m == self.d2.u;
        let cols_ok = self.d2.u <= 1 || self.d2.m == 1;
        self.is_empty() || (rows_ok && cols_ok)
    }

    fn check_len(&self, len: usize) -> Result<(), ShapeError>
    {
        match self.span() {
            Some((_, hi)) if hi >= len => Err(out_of_bounds()),
            _ => Ok(()),
        }
    }

    /// Resolve the slice against `data` as a read-only view.
    ///
    /// Fails with `OutOfBounds` if `data` is too short for the slice.
    pub fn view<'a, A>(&self, data: &'a [A]) -> Result<ArrayView2S<'a, A>, ShapeError>
    {
        self.check_len(data.len())?;
        Ok(ArrayView2S::new(data, *self))
    }

    /// Resolve the slice against `data` as a read-write view.
    ///
    /// Fails with `OutOfBounds` if `data` is too short for the slice.
    pub fn view_mut<'a, A>(&self, data: &'a mut [A]) -> Result<ArrayViewMut2S<'a, A>, ShapeError>
    {
        self.check_len(data.len())?;
        Ok(ArrayViewMut2S::new(data, *self))
    }
}

/// A resolved one-dimensional slice: one dimension was fixed by an index.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct SliceInfo1
{
    base: isize,
    d: DimSlice,
}

impl SliceInfo1
{
    pub(crate) fn new(base: isize, d: DimSlice) -> Self
    {
        SliceInfo1 { base: base + d.k, d }
    }

    #[inline]
    pub fn u(&self) -> isize
    {
        self.d.u
    }

    #[inline]
    pub fn size(&self) -> usize
    {
        self.d.size()
    }

    #[inline]
    pub(crate) fn offset(&self, i: isize) -> usize
    {
        (self.base + i * self.d.m) as usize
    }

    pub(crate) fn span(&self) -> Option<(usize, usize)>
    {
        if self.d.u == 0 {
            return None;
        }
        let a = self.offset(1);
        let b = self.offset(self.d.u);
        Some((a.min(b), a.max(b)))
    }

    fn check_len(&self, len: usize) -> Result<(), ShapeError>
    {
        match self.span() {
            Some((_, hi)) if hi >= len => Err(out_of_bounds()),
            _ => Ok(()),
        }
    }

    pub fn view<'a, A>(&self, data: &'a [A]) -> Result<ArrayView1S<'a, A>, ShapeError>
    {
        self.check_len(data.len())?;
        Ok(ArrayView1S::new(data, *self))
    }

    pub fn view_mut<'a, A>(&self, data: &'a mut [A]) -> Result<ArrayViewMut1S<'a, A>, ShapeError>
    {
        self.check_len(data.len())?;
        Ok(ArrayViewMut1S::new(data, *self))
    }
}

#[cfg(test)]
mod tests
{
    use super::*;

    #[test]
    fn full_slice_defaults_to_range()
    {
        let r = IndexRange::new(0, 4);
        let d = DimSlice::new(&r, &IndexSlice::from(..), 1).unwrap();
        assert_eq!(d.u(), 5);
        assert_eq!(d.m(), 1);
        // view index 1 lands on index 0 of the range
        assert_eq!(d.k() + d.m(), 0);
    }

    #[test]
    fn negative_step_walks_backwards()
    {
        let r = IndexRange::new(1, 5);
        let d = DimSlice::new(&r, &IndexSlice::new(None, None, -2), 3).unwrap();
        assert_eq!(d.u(), 3);
        assert_eq!(d.m(), -6);
        // view index 1 is array index 5, the fifth index of the range
        assert_eq!(d.k() + d.m(), 12);
    }

    #[test]
    fn bounds_outside_range_are_rejected()
    {
        let r = IndexRange::new(1, 5);
        assert!(DimSlice::new(&r, &IndexSlice::from(0..=3), 1).is_err());
        assert!(DimSlice::new(&r, &IndexSlice::from(2..=6), 1).is_err());
        // 1, 3, 5
        assert_eq!(DimSlice::new(&r, &IndexSlice::from(1..=5).step_by(2), 1).unwrap().u(), 3);
        // stops at 5 before reaching the requested end
        assert!(DimSlice::new(&r, &IndexSlice::from(1..=6).step_by(2), 1).is_ok());
        // selects nothing, accepted whatever the bounds
        let d = DimSlice::new(&r, &IndexSlice::from(9..=3), 1).unwrap();
        assert_eq!(d.u(), 0);
    }

    #[test]
    fn extreme_bounds_are_out_of_bounds()
    {
        let r = IndexRange::new(1, 3);
        let everything = IndexSlice::from(isize::MIN..=isize::MAX);
        assert!(DimSlice::new(&r, &everything, 3).is_err());
        assert!(DimSlice::new(&r, &IndexSlice::new(Some(isize::MAX), Some(isize::MIN), -1), 3).is_err());
        assert!(DimSlice::new(&r, &IndexSlice::from(1..=isize::MAX), 1).is_err());
        // one selected index, whatever the step
        let d = DimSlice::new(&r, &IndexSlice::from(2..=3).step_by(isize::MAX), 3).unwrap();
        assert_eq!((d.u(), d.k() + d.m()), (1, 3));
        let d = DimSlice::new(&r, &IndexSlice::new(Some(2), None, isize::MIN), 1).unwrap();
        assert_eq!((d.u(), d.k() + d.m()), (1, 1));
    }

    #[test]
    fn contiguous_detection()
    {
        let r1 = IndexRange::new(1, 3);
        let r2 = IndexRange::new(1, 4);
        let full = SliceInfo2::new(
            0,
            DimSlice::new(&r1, &IndexSlice::from(..), 4).unwrap(),
            DimSlice::new(&r2, &IndexSlice::from(..), 1).unwrap(),
        );
        assert!(full.is_contiguous());
        assert_eq!(full.span(), Some((0, 11)));
        let cols = SliceInfo2::new(
            0,
            DimSlice::new(&r1, &IndexSlice::from(..), 4).unwrap(),
            DimSlice::new(&r2, &IndexSlice::from(2..=3), 1).unwrap(),
        );
        assert!(!cols.is_contiguous());
    }
}
