// Copyright 2014-2016 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Member views: arrays of one field of every element.
use std::marker::PhantomData;
use std::ops::{Index, Range};

use crate::error::{incompatible_shapes, out_of_bounds, ShapeError};
use crate::impl_methods::array_out_of_bounds;
use crate::operand::{address_span, spans_overlap, Operand2};
use crate::{Array2, Array2Base, Data, DataMut, IndexRange};

/// A read-only view of the member `M` of every element of an array of `A`.
///
/// The view has the array's shape and is indexed from 1 in each dimension.
///
/// ```
/// use farray::Array2;
///
/// #[derive(Clone, Default)]
/// struct Cell { mass: f64, id: u32 }
///
/// let a = Array2::from_shape_fn(0..=1, 0..=1, |i, j| Cell { mass: (i + j) as f64, id: 0 });
/// let m = a.ma(|c| &c.mass);
/// assert_eq!(m[(2, 2)], 2.);
/// assert_eq!(m.iter().sum::<f64>(), 4.);
/// ```
pub struct MemberView2<'a, A, M, F>
{
    data: &'a [A],
    size1: usize,
    size2: usize,
    f: F,
    marker: PhantomData<fn() -> M>,
}

/// A write-only view of the member `M` of every element of an array of `A`.
pub struct MemberViewMut2<'a, A, M, F>
{
    data: &'a mut [A],
    size1: usize,
    size2: usize,
    f: F,
    marker: PhantomData<fn() -> M>,
}

impl<A, S> Array2Base<S>
where S: Data<Elem = A>
{
    /// Return a member view through the projection `f`.
    pub fn ma<M, F>(&self, f: F) -> MemberView2<'_, A, M, F>
    where F: Fn(&A) -> &M
    {
        MemberView2 {
            data: self.as_slice(),
            size1: self.size1,
            size2: self.size2,
            f,
            marker: PhantomData,
        }
    }
}

impl<A, S> Array2Base<S>
where S: DataMut<Elem = A>
{
    /// Return a writable member view through the projection `f`.
    pub fn ma_mut<M, F>(&mut self, f: F) -> MemberViewMut2<'_, A, M, F>
    where F: Fn(&mut A) -> &mut M
    {
        let (size1, size2) = (self.size1, self.size2);
        MemberViewMut2 {
            data: self.as_mut_slice(),
            size1,
            size2,
            f,
            marker: PhantomData,
        }
    }
}

impl<'a, A, M, F> MemberView2<'a, A, M, F>
where F: Fn(&A) -> &M
{
    #[inline]
    pub fn u1(&self) -> isize
    {
        self.size1 as isize
    }

    #[inline]
    pub fn u2(&self) -> isize
    {
        self.size2 as isize
    }

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

    #[inline]
    fn contains(&self, i1: isize, i2: isize) -> bool
    {
        1 <= i1 && i1 <= self.u1() && 1 <= i2 && i2 <= self.u2()
    }

    pub fn get(&self, i1: isize, i2: isize) -> Option<&M>
    {
        if self.contains(i1, i2) {
            Some(self.elem0((i1 - 1) as usize, (i2 - 1) as usize))
        } else {
            None
        }
    }

    /// Fails with `OutOfBounds` if the index is outside the view.
    pub fn at(&self, i1: isize, i2: isize) -> Result<&M, ShapeError>
    {
        self.get(i1, i2).ok_or_else(out_of_bounds)
    }

    /// Return an iterator of references to the members in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = &M> + '_
    {
        self.data.iter().map(move |x| (self.f)(x))
    }

    /// Copy the members into a new owned array indexed from 1.
    pub fn to_array(&self) -> Array2<M>
    where M: Clone
    {
        Array2::from_operand(self)
    }
}

impl<'a, A, M, F> Operand2 for MemberView2<'a, A, M, F>
where F: Fn(&A) -> &M
{
    type Elem = M;

    fn range1(&self) -> IndexRange
    {
        IndexRange::with_size(self.size1)
    }

    fn range2(&self) -> IndexRange
    {
        IndexRange::with_size(self.size2)
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
    fn elem0(&self, r: usize, c: usize) -> &M
    {
        (self.f)(&self.data[r * self.size2 + c])
    }

    fn memory_span(&self) -> Option<Range<usize>>
    {
        address_span(self.data, 0, self.data.len())
    }

    private_impl! {}
}

impl<'a, A, M, F> Index<(isize, isize)> for MemberView2<'a, A, M, F>
where F: Fn(&A) -> &M
{
    type Output = M;

    /// **Panics** if the index is out of bounds.
    fn index(&self, (i1, i2): (isize, isize)) -> &M
    {
        self.get(i1, i2).unwrap_or_else(|| array_out_of_bounds())
    }
}

impl<'a, A, M, F> MemberViewMut2<'a, A, M, F>
where F: Fn(&mut A) -> &mut M
{
    #[inline]
    pub fn u1(&self) -> isize
    {
        self.size1 as isize
    }

    #[inline]
    pub fn u2(&self) -> isize
    {
        self.size2 as isize
    }

    #[inline]
    pub fn size1(&self) -> usize
    {
        self.size1
    }

    #[inline]
    pub fn size2(&self) -> usize
    {
        self.size2
    }

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

    pub fn get_mut(&mut self, i1: isize, i2: isize) -> Option<&mut M>
    {
        if 1 <= i1 && i1 <= self.u1() && 1 <= i2 && i2 <= self.u2() {
            let l = (i1 - 1) as usize * self.size2 + (i2 - 1) as usize;
            Some((self.f)(&mut self.data[l]))
        } else {
            None
        }
    }

    /// Fails with `OutOfBounds` if the index is outside the view.
    pub fn at_mut(&mut self, i1: isize, i2: isize) -> Result<&mut M, ShapeError>
    {
        self.get_mut(i1, i2).ok_or_else(out_of_bounds)
    }

    /// Call `g` on every member in row-major order.
    pub fn map_inplace<G>(&mut self, mut g: G)
    where G: FnMut(&mut M)
    {
        let f = &self.f;
        self.data.iter_mut().for_each(|x| g(f(x)));
    }

    pub fn fill(&mut self, value: M)
    where M: Clone
    {
        self.map_inplace(|m| *m = value.clone());
    }

    /// Copy a conformable operand into the members.
    ///
    /// Fails with `IncompatibleShapes` unless the shapes match.
    pub fn assign_from<V>(&mut self, src: &V) -> Result<(), ShapeError>
    where
        V: Operand2,
        V::Elem: Clone + Into<M>,
    {
        if self.size1 != src.size1() || self.size2 != src.size2() {
            return Err(incompatible_shapes());
        }
        let n2 = self.size2;
        let own = address_span(&*self.data, 0, self.data.len());
        if spans_overlap(own, src.memory_span()) {
            let tmp: Vec<V::Elem> = (0..src.len()).map(|l| src.elem0(l / n2, l % n2).clone()).collect();
            let mut it = tmp.into_iter();
            self.map_inplace(|m| {
                if let Some(v) = it.next() {
                    *m = v.into();
                }
            });
        } else {
            let mut l = 0;
            self.map_inplace(|m| {
                *m = src.elem0(l / n2, l % n2).clone().into();
                l += 1;
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests
{
    use crate::{Array2, ErrorKind, Operand2};

    #[derive(Clone, Debug, Default, PartialEq)]
    struct Particle
    {
        x: f64,
        tag: i32,
    }

    fn particles() -> Array2<Particle>
    {
        Array2::from_shape_fn(0..=1, 0..=2, |i, j| Particle {
            x: (3 * i + j) as f64,
            tag: -1,
        })
    }

    #[test]
    fn member_view_is_one_based()
    {
        let a = particles();
        let xs = a.ma(|p| &p.x);
        assert_eq!(xs.size1(), 2);
        assert_eq!(xs.range2().u(), 3);
        assert_eq!(xs[(1, 1)], 0.);
        assert_eq!(xs[(2, 3)], 5.);
        assert!(xs.get(0, 1).is_none());
        assert_eq!(xs.to_array().into_raw_vec(), vec![0., 1., 2., 3., 4., 5.]);
    }

    #[test]
    fn member_view_writes()
    {
        let mut a = particles();
        let tags = Array2::from_shape_vec(2, 3, vec![1, 2, 3, 4, 5, 6]).unwrap();
        a.ma_mut(|p| &mut p.tag).assign_from(&tags).unwrap();
        assert_eq!(a[(1, 2)].tag, 6);
        assert_eq!(a[(1, 2)].x, 5.);

        let bad = Array2::from_elem(3, 2, 0).unwrap();
        let e = a.ma_mut(|p| &mut p.tag).assign_from(&bad).unwrap_err();
        assert_eq!(e.kind(), ErrorKind::IncompatibleShapes);

        *a.ma_mut(|p| &mut p.x).at_mut(1, 1).unwrap() = 9.;
        assert_eq!(a[(0, 0)].x, 9.);
    }
}
