// Copyright 2014-2016 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use std::mem::size_of;
use std::ops::Range;

use crate::{Array2Base, Data, IndexRange};

/// A two-dimensional operand: an array, a strided view or a member view.
///
/// Operands are what assignment, compound assignment, conformability
/// checks and the [`compare`](crate::compare) functions accept. Elements are
/// visited in row-major order by zero-based position, so operands with
/// different index origins line up element by element.
///
/// ***Note:*** `Operand2` is not an extension interface at this point; it is
/// public because it is used as a bound on public methods.
pub trait Operand2
{
    /// The element type.
    type Elem;

    /// Index range of dimension 1. Views are 1-based: `[1, u1]`.
    fn range1(&self) -> IndexRange;

    /// Index range of dimension 2. Views are 1-based: `[1, u2]`.
    fn range2(&self) -> IndexRange;

    /// Number of rows.
    fn size1(&self) -> usize;

    /// Number of columns.
    fn size2(&self) -> usize;

    /// Element at zero-based row `r` and column `c`.
    ///
    /// **Panics** if the position is outside of the operand.
    fn elem0(&self, r: usize, c: usize) -> &Self::Elem;

    /// Address range of the storage the operand reads, used to detect
    /// aliasing with an assignment target. `None` if it reads nothing.
    fn memory_span(&self) -> Option<Range<usize>>;

    /// Return `true` if the operand has a finite, known size.
    fn size_bounded(&self) -> bool
    {
        true
    }

    /// Total number of elements.
    fn len(&self) -> usize
    {
        self.size1() * self.size2()
    }

    private_decl! {}
}

/// Address range of `count` elements of `A` starting `lo` elements into
/// `data`.
pub(crate) fn address_span<A>(data: &[A], lo: usize, count: usize) -> Option<Range<usize>>
{
    let elem = size_of::<A>();
    if count == 0 || elem == 0 {
        return None;
    }
    let start = data.as_ptr() as usize + lo * elem;
    Some(start..start + count * elem)
}

/// Return `true` if the two address ranges share at least one byte.
pub(crate) fn spans_overlap(a: Option<Range<usize>>, b: Option<Range<usize>>) -> bool
{
    match (a, b) {
        (Some(a), Some(b)) => a.start < b.end && b.start < a.end,
        _ => false,
    }
}

impl<A, S> Operand2 for Array2Base<S>
where S: Data<Elem = A>
{
    type Elem = A;

    #[inline]
    fn range1(&self) -> IndexRange
    {
        self.range1
    }

    #[inline]
    fn range2(&self) -> IndexRange
    {
        self.range2
    }

    #[inline]
    fn size1(&self) -> usize
    {
        self.size1
    }

    #[inline]
    fn size2(&self) -> usize
    {
        self.size2
    }

    #[inline]
    fn elem0(&self, r: usize, c: usize) -> &A
    {
        &self.as_slice()[r * self.size2 + c]
    }

    fn memory_span(&self) -> Option<Range<usize>>
    {
        address_span(self.as_slice(), 0, self.len())
    }

    private_impl! {}
}

#[cfg(test)]
mod tests
{
    use super::*;

    #[test]
    fn overlap_of_spans()
    {
        assert!(spans_overlap(Some(0..8), Some(4..12)));
        assert!(!spans_overlap(Some(0..8), Some(8..12)));
        assert!(!spans_overlap(None, Some(0..12)));
    }

    #[test]
    fn span_of_zero_sized_elements_is_empty()
    {
        let data = [(); 4];
        assert_eq!(address_span(&data, 0, 4), None);
        let data = [0u32; 4];
        let span = address_span(&data, 1, 2).unwrap();
        assert_eq!(span.end - span.start, 8);
    }
}
