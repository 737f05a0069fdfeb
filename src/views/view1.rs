// Copyright 2014-2016 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use std::ops::{Index, IndexMut};

use crate::error::{incompatible_shapes, out_of_bounds, ShapeError};
use crate::impl_methods::array_out_of_bounds;
use crate::SliceInfo1;

/// A read-only one-dimensional strided view: a row or column section.
#[derive(Debug)]
pub struct ArrayView1S<'a, A>
{
    data: &'a [A],
    info: SliceInfo1,
}

/// A read-write one-dimensional strided view.
#[derive(Debug)]
pub struct ArrayViewMut1S<'a, A>
{
    data: &'a mut [A],
    info: SliceInfo1,
}

impl<'a, A> Clone for ArrayView1S<'a, A>
{
    fn clone(&self) -> Self
    {
        *self
    }
}

impl<'a, A> Copy for ArrayView1S<'a, A> {}

macro_rules! view1_common {
    ($view:ident) => {
        impl<'a, A> $view<'a, A>
        {
            #[inline]
            pub fn info(&self) -> SliceInfo1
            {
                self.info
            }

            /// Upper index; the lower index is 1.
            #[inline]
            pub fn u(&self) -> isize
            {
                self.info.u()
            }

            #[inline]
            pub fn len(&self) -> usize
            {
                self.info.size()
            }

            #[inline]
            pub fn is_empty(&self) -> bool
            {
                self.info.size() == 0
            }

            pub fn get(&self, i: isize) -> Option<&A>
            {
                if 1 <= i && i <= self.u() {
                    Some(&self.data[self.info.offset(i)])
                } else {
                    None
                }
            }

            /// Copy the viewed elements into a vector.
            pub fn to_vec(&self) -> Vec<A>
            where A: Clone
            {
                (1..=self.u()).map(|i| self.data[self.info.offset(i)].clone()).collect()
            }
        }

        impl<'a, A> Index<isize> for $view<'a, A>
        {
            type Output = A;

            #[inline]
            fn index(&self, i: isize) -> &A
            {
                self.get(i).unwrap_or_else(|| array_out_of_bounds())
            }
        }
    };
}

view1_common!(ArrayView1S);
view1_common!(ArrayViewMut1S);

impl<'a, A> ArrayView1S<'a, A>
{
    pub(crate) fn new(data: &'a [A], info: SliceInfo1) -> Self
    {
        ArrayView1S { data, info }
    }

    /// Return an iterator of references to the elements in view order.
    pub fn iter(&self) -> impl Iterator<Item = &'a A> + 'a
    {
        let data = self.data;
        let info = self.info;
        (1..=info.u()).map(move |i| &data[info.offset(i)])
    }
}

impl<'a, A> ArrayViewMut1S<'a, A>
{
    pub(crate) fn new(data: &'a mut [A], info: SliceInfo1) -> Self
    {
        ArrayViewMut1S { data, info }
    }

    pub fn iter(&self) -> impl Iterator<Item = &A> + '_
    {
        ArrayView1S::new(&*self.data, self.info).iter()
    }

    pub fn get_mut(&mut self, i: isize) -> Option<&mut A>
    {
        if 1 <= i && i <= self.u() {
            Some(&mut self.data[self.info.offset(i)])
        } else {
            None
        }
    }

    /// Return a mutable reference to element `i`.
    ///
    /// Fails with `OutOfBounds` if `i` is outside `[1, u]`.
    pub fn at_mut(&mut self, i: isize) -> Result<&mut A, ShapeError>
    {
        self.get_mut(i).ok_or_else(out_of_bounds)
    }

    pub fn view(&self) -> ArrayView1S<'_, A>
    {
        ArrayView1S::new(&*self.data, self.info)
    }

    pub fn map_inplace<F>(&mut self, mut f: F)
    where F: FnMut(&mut A)
    {
        for i in 1..=self.u() {
            f(&mut self.data[self.info.offset(i)]);
        }
    }

    pub fn fill(&mut self, value: A)
    where A: Clone
    {
        self.map_inplace(|x| *x = value.clone());
    }

    /// Copy `values` into the view element by element.
    ///
    /// Fails with `IncompatibleShapes` unless the lengths match.
    pub fn assign_slice(&mut self, values: &[A]) -> Result<(), ShapeError>
    where A: Clone
    {
        if values.len() != self.len() {
            return Err(incompatible_shapes());
        }
        let mut it = values.iter();
        self.map_inplace(|x| {
            if let Some(v) = it.next() {
                *x = v.clone();
            }
        });
        Ok(())
    }
}

impl<'a, A> IndexMut<isize> for ArrayViewMut1S<'a, A>
{
    #[inline]
    fn index_mut(&mut self, i: isize) -> &mut A
    {
        self.get_mut(i).unwrap_or_else(|| array_out_of_bounds())
    }
}
