// Copyright 2014-2016 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use std::ops::{Index, IndexMut, Range};

use crate::error::{from_kind, incompatible_shapes, out_of_bounds, ErrorKind, ShapeError};
use crate::impl_methods::array_out_of_bounds;
use crate::operand::{address_span, spans_overlap, Operand2};
use crate::{Array2, Array2Base, Array2Proxy, IndexRange, SliceInfo2, ViewMutRepr};

/// A read-only two-dimensional strided view.
///
/// Produced by [`Array2Base::slice`](crate::Array2Base::slice).
pub struct ArrayView2S<'a, A>
{
    data: &'a [A],
    info: SliceInfo2,
}

/// A read-write two-dimensional strided view.
///
/// Produced by [`Array2Base::slice_mut`](crate::Array2Base::slice_mut).
pub struct ArrayViewMut2S<'a, A>
{
    data: &'a mut [A],
    info: SliceInfo2,
}

impl<'a, A> Clone for ArrayView2S<'a, A>
{
    fn clone(&self) -> Self
    {
        *self
    }
}

impl<'a, A> Copy for ArrayView2S<'a, A> {}

macro_rules! view2_readers {
    () => {
        /// The detached slice descriptor of the view.
        #[inline]
        pub fn info(&self) -> SliceInfo2
        {
            self.info
        }

        /// Lower index of dimension 1, always 1.
        #[inline]
        pub fn l1(&self) -> isize
        {
            1
        }

        /// Lower index of dimension 2, always 1.
        #[inline]
        pub fn l2(&self) -> isize
        {
            1
        }

        #[inline]
        pub fn u1(&self) -> isize
        {
            self.info.u1()
        }

        #[inline]
        pub fn u2(&self) -> isize
        {
            self.info.u2()
        }

        #[inline]
        pub fn size1(&self) -> usize
        {
            self.info.size1()
        }

        #[inline]
        pub fn size2(&self) -> usize
        {
            self.info.size2()
        }

        #[inline]
        pub fn len(&self) -> usize
        {
            self.info.len()
        }

        #[inline]
        pub fn is_empty(&self) -> bool
        {
            self.info.is_empty()
        }

        /// Return `true` if `(i1, i2)` is a valid view index.
        #[inline]
        pub fn contains(&self, i1: isize, i2: isize) -> bool
        {
            1 <= i1 && i1 <= self.u1() && 1 <= i2 && i2 <= self.u2()
        }

        /// Return `true` if the elements are consecutive and in row-major
        /// order in the underlying buffer.
        #[inline]
        pub fn is_contiguous(&self) -> bool
        {
            self.info.is_contiguous()
        }

        /// Copy the viewed elements into a new owned array with index
        /// ranges `[1, u1]` × `[1, u2]`.
        pub fn to_array(&self) -> Array2<A>
        where A: Clone
        {
            Array2::from_operand(self)
        }
    };
}

macro_rules! view2_operand {
    ($view:ident) => {
        impl<'a, A> Operand2 for $view<'a, A>
        {
            type Elem = A;

            fn range1(&self) -> IndexRange
            {
                IndexRange::with_size(self.info.size1())
            }

            fn range2(&self) -> IndexRange
            {
                IndexRange::with_size(self.info.size2())
            }

            #[inline]
            fn size1(&self) -> usize
            {
                self.info.size1()
            }

            #[inline]
            fn size2(&self) -> usize
            {
                self.info.size2()
            }

            #[inline]
            fn elem0(&self, r: usize, c: usize) -> &A
            {
                &self.data[self.info.offset(r as isize + 1, c as isize + 1)]
            }

            fn memory_span(&self) -> Option<Range<usize>>
            {
                let (lo, hi) = self.info.span()?;
                address_span(&*self.data, lo, hi - lo + 1)
            }

            private_impl! {}
        }

        impl<'a, A> Index<(isize, isize)> for $view<'a, A>
        {
            type Output = A;

            /// **Panics** if the index is out of bounds.
            #[inline]
            fn index(&self, (i1, i2): (isize, isize)) -> &A
            {
                if !self.contains(i1, i2) {
                    array_out_of_bounds();
                }
                &self.data[self.info.offset(i1, i2)]
            }
        }
    };
}

impl<'a, A> ArrayView2S<'a, A>
{
    pub(crate) fn new(data: &'a [A], info: SliceInfo2) -> Self
    {
        ArrayView2S { data, info }
    }

    view2_readers!();

    /// Return a reference to the element at `(i1, i2)`, or `None` if the
    /// index is out of bounds.
    pub fn get(&self, i1: isize, i2: isize) -> Option<&'a A>
    {
        if self.contains(i1, i2) {
            Some(&self.data[self.info.offset(i1, i2)])
        } else {
            None
        }
    }

    /// Return a reference to the element at `(i1, i2)`.
    ///
    /// Fails with `OutOfBounds` if the index is outside the view.
    pub fn at(&self, i1: isize, i2: isize) -> Result<&'a A, ShapeError>
    {
        self.get(i1, i2).ok_or_else(out_of_bounds)
    }

    /// Return an iterator of references to the elements in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = &'a A> + 'a
    {
        let data = self.data;
        let info = self.info;
        (1..=info.u1()).flat_map(move |i1| (1..=info.u2()).map(move |i2| &data[info.offset(i1, i2)]))
    }
}

impl<'a, A> ArrayViewMut2S<'a, A>
{
    pub(crate) fn new(data: &'a mut [A], info: SliceInfo2) -> Self
    {
        ArrayViewMut2S { data, info }
    }

    view2_readers!();

    pub fn get(&self, i1: isize, i2: isize) -> Option<&A>
    {
        if self.contains(i1, i2) {
            Some(&self.data[self.info.offset(i1, i2)])
        } else {
            None
        }
    }

    pub fn get_mut(&mut self, i1: isize, i2: isize) -> Option<&mut A>
    {
        if self.contains(i1, i2) {
            Some(&mut self.data[self.info.offset(i1, i2)])
        } else {
            None
        }
    }

    /// Return a mutable reference to the element at `(i1, i2)`.
    ///
    /// Fails with `OutOfBounds` if the index is outside the view.
    pub fn at_mut(&mut self, i1: isize, i2: isize) -> Result<&mut A, ShapeError>
    {
        self.get_mut(i1, i2).ok_or_else(out_of_bounds)
    }

    /// Return a read-only view of the same elements.
    pub fn view(&self) -> ArrayView2S<'_, A>
    {
        ArrayView2S::new(self.data, self.info)
    }

    /// Convert into a read-only view with the full lifetime `'a`.
    pub fn into_view(self) -> ArrayView2S<'a, A>
    {
        ArrayView2S::new(self.data, self.info)
    }

    /// Call `f` on a mutable reference of each element, in row-major order.
    pub fn map_inplace<F>(&mut self, mut f: F)
    where F: FnMut(&mut A)
    {
        for i1 in 1..=self.u1() {
            for i2 in 1..=self.u2() {
                f(&mut self.data[self.info.offset(i1, i2)]);
            }
        }
    }

    /// Set every viewed element to `value`.
    pub fn fill(&mut self, value: A)
    where A: Clone
    {
        self.map_inplace(|x| *x = value.clone());
    }

    /// Copy the elements of a conformable operand into the view.
    ///
    /// A view cannot be reshaped: fails with `IncompatibleShapes` unless the
    /// shapes match.
    pub fn assign_from<V>(&mut self, src: &V) -> Result<(), ShapeError>
    where
        V: Operand2,
        V::Elem: Clone + Into<A>,
    {
        if self.size1() != src.size1() || self.size2() != src.size2() {
            return Err(incompatible_shapes());
        }
        let n2 = src.size2();
        if spans_overlap(Operand2::memory_span(&*self), src.memory_span()) {
            let tmp: Vec<V::Elem> = (0..src.len()).map(|l| src.elem0(l / n2, l % n2).clone()).collect();
            let mut it = tmp.into_iter();
            self.map_inplace(|x| {
                if let Some(v) = it.next() {
                    *x = v.into();
                }
            });
        } else {
            let mut l = 0;
            self.map_inplace(|x| {
                *x = src.elem0(l / n2, l % n2).clone().into();
                l += 1;
            });
        }
        Ok(())
    }

    /// Convert a contiguous view into an array proxy with index ranges
    /// `[1, u1]` × `[1, u2]` over the same elements.
    ///
    /// Fails with `IncompatibleLayout` if the view is not contiguous.
    pub fn into_proxy(self) -> Result<Array2Proxy<'a, A>, ShapeError>
    {
        if !self.info.is_contiguous() {
            return Err(from_kind(ErrorKind::IncompatibleLayout));
        }
        let r1 = IndexRange::with_size(self.info.size1());
        let r2 = IndexRange::with_size(self.info.size2());
        let len = self.info.len();
        let ArrayViewMut2S { data, info } = self;
        let start = if len == 0 { 0 } else { info.offset(1, 1) };
        Ok(Array2Base::from_data_ranges(ViewMutRepr(&mut data[start..start + len]), r1, r2))
    }
}

view2_operand!(ArrayView2S);
view2_operand!(ArrayViewMut2S);

impl<'a, A> IndexMut<(isize, isize)> for ArrayViewMut2S<'a, A>
{
    /// **Panics** if the index is out of bounds.
    #[inline]
    fn index_mut(&mut self, (i1, i2): (isize, isize)) -> &mut A
    {
        if !self.contains(i1, i2) {
            array_out_of_bounds();
        }
        &mut self.data[self.info.offset(i1, i2)]
    }
}
