// Copyright 2014-2016 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use std::fmt;
use std::ops::RangeInclusive;

/// An inclusive index range `[lower, upper]` of one array dimension.
///
/// A range whose upper bound lies below its lower bound is empty. Empty
/// ranges are normalized so that `upper == lower - 1`, which keeps equality
/// between empty ranges with the same origin meaningful.
///
/// ## Examples
///
/// `IndexRange::new(0, 9)` has ten indices, `0` to `9`.
///
/// `IndexRange::from(5)` is the Fortran default `[1, 5]`.
///
/// `IndexRange::from(-2..=2)` is `[-2, 2]`.
#[derive(Copy, Clone, PartialEq, Eq, Hash)]
pub struct IndexRange
{
    l: isize,
    u: isize,
}

impl IndexRange
{
    /// Create the range `[l, u]`.
    ///
    /// If `u < l` the range is empty and stored as `[l, l - 1]`.
    #[inline]
    pub fn new(l: isize, u: isize) -> Self
    {
        // `u < l` implies `l > isize::MIN`
        IndexRange {
            l,
            u: if u < l { l - 1 } else { u },
        }
    }

    /// Create the range `[1, n]`.
    ///
    /// `n` above `isize::MAX` is clamped to `isize::MAX`.
    #[inline]
    pub fn with_size(n: usize) -> Self
    {
        IndexRange::new(1, isize::try_from(n).unwrap_or(isize::MAX))
    }

    /// Lower bound.
    #[inline]
    pub fn l(&self) -> isize
    {
        self.l
    }

    /// Upper bound.
    #[inline]
    pub fn u(&self) -> isize
    {
        self.u
    }

    /// Number of indices in the range.
    ///
    /// Saturates at `usize::MAX` for the range of every `isize`.
    #[inline]
    pub fn size(&self) -> usize
    {
        if self.is_empty() {
            0
        } else {
            self.u.abs_diff(self.l).saturating_add(1)
        }
    }

    /// Number of indices in the range, as a signed integer.
    ///
    /// Saturates at `isize::MAX`.
    #[inline]
    pub fn isize(&self) -> isize
    {
        isize::try_from(self.size()).unwrap_or(isize::MAX)
    }

    #[inline]
    pub fn is_empty(&self) -> bool
    {
        self.u < self.l
    }

    /// Return `true` if `i` is inside the range.
    #[inline]
    pub fn contains(&self, i: isize) -> bool
    {
        self.l <= i && i <= self.u
    }

    /// Return `true` if every index of `other` is inside this range.
    ///
    /// An empty `other` is contained in any range.
    pub fn contains_range(&self, other: &IndexRange) -> bool
    {
        other.is_empty() || (self.contains(other.l) && self.contains(other.u))
    }

    /// The zero-based position of `i` in the range (not bounds checked).
    #[inline]
    pub fn offset(&self, i: isize) -> isize
    {
        i - self.l
    }

    /// The indices common to both ranges.
    pub fn intersection(&self, other: &IndexRange) -> IndexRange
    {
        IndexRange::new(self.l.max(other.l), self.u.min(other.u))
    }

    /// Reset to the empty range `[1, 0]`.
    #[inline]
    pub fn clear(&mut self)
    {
        *self = IndexRange::default();
    }

    #[inline]
    pub fn swap(&mut self, other: &mut IndexRange)
    {
        std::mem::swap(self, other);
    }

    /// Iterate the indices of the range in increasing order.
    #[inline]
    pub fn iter(&self) -> RangeInclusive<isize>
    {
        self.l..=self.u
    }
}

impl Default for IndexRange
{
    #[inline]
    fn default() -> Self
    {
        IndexRange { l: 1, u: 0 }
    }
}

impl fmt::Debug for IndexRange
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        write!(f, "[{}:{}]", self.l, self.u)
    }
}

impl fmt::Display for IndexRange
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        write!(f, "{}:{}", self.l, self.u)
    }
}

/// Convert to `isize`, clamping values above `isize::MAX`.
#[inline]
fn clamp_index<I>(i: I) -> isize
where isize: TryFrom<I>
{
    isize::try_from(i).unwrap_or(isize::MAX)
}

macro_rules! impl_range_from_size {
    ($index:ty) => {
        impl From<$index> for IndexRange
        {
            /// The range `[1, n]`; zero or a negative `n` is empty.
            #[inline]
            fn from(n: $index) -> IndexRange
            {
                IndexRange::new(1, clamp_index(n))
            }
        }

        impl From<RangeInclusive<$index>> for IndexRange
        {
            #[inline]
            fn from(r: RangeInclusive<$index>) -> IndexRange
            {
                IndexRange::new(clamp_index(*r.start()), clamp_index(*r.end()))
            }
        }
    };
}

impl_range_from_size!(isize);
impl_range_from_size!(usize);
impl_range_from_size!(i32);

impl<'a> From<&'a IndexRange> for IndexRange
{
    #[inline]
    fn from(r: &'a IndexRange) -> IndexRange
    {
        *r
    }
}

impl IntoIterator for IndexRange
{
    type Item = isize;
    type IntoIter = RangeInclusive<isize>;

    fn into_iter(self) -> Self::IntoIter
    {
        self.iter()
    }
}
