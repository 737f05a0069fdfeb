// Copyright 2014-2016 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Element-wise comparison of conformable operands.
//!
//! Every function takes two [`Operand2`] values (arrays, slice views or
//! member views, in any combination) and compares them element by element
//! in row-major order. Both operands must be conformable, or the function
//! fails with `IncompatibleShapes`.
//!
//! - `eq`, `lt`, `le` hold if the relation holds for every pair. On empty
//!   operands `eq` and `le` are `true`, `lt` is `false`.
//! - `any_eq`, `any_lt`, `any_le` hold if the relation holds for some
//!   pair; `false` on empty operands.
//! - `count_*` return the number of pairs for which the relation holds.
//! - `all_*` are the plain forms, except `all_ne`, which is `!any_eq`.
//! - `ne(a, b)` is `!eq(a, b)` and `any_ne(a, b)` is the same; `gt(a, b)`
//!   is `lt(b, a)` and `ge(a, b)` is `le(b, a)`, likewise for the `any_`
//!   and `count_` forms.
//!
//! ```
//! use farray::{compare, Array2};
//!
//! let a = Array2::from_shape_vec(2, 2, vec![1, 2, 3, 4]).unwrap();
//! let b = Array2::from_shape_vec(0..=1, 0..=1, vec![1, 0, 5, 4]).unwrap();
//! assert!(!compare::eq(&a, &b).unwrap());
//! assert!(compare::any_gt(&a, &b).unwrap());
//! assert_eq!(compare::count_eq(&a, &b).unwrap(), 2);
//! assert!(compare::le(&a, &a.slice(.., ..).unwrap()).unwrap());
//! ```
use crate::error::{from_kind, incompatible_shapes, ErrorKind, ShapeError};
use crate::operand::Operand2;

/// How the per-pair results are combined.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Reduction
{
    /// `true` if every pair satisfies the relation.
    All,
    /// `true` if some pair satisfies the relation.
    Any,
    /// The number of pairs that satisfy the relation.
    Count,
}

fn check_operands<V1, V2>(a: &V1, b: &V2) -> Result<(), ShapeError>
where
    V1: Operand2,
    V2: Operand2,
{
    if !a.size_bounded() || !b.size_bounded() {
        return Err(from_kind(ErrorKind::Unbounded));
    }
    if a.size1() != b.size1() || a.size2() != b.size2() {
        return Err(incompatible_shapes());
    }
    Ok(())
}

/// Apply `relation` to each pair of elements and combine the results with
/// `reduction`. `All` and `Any` yield 0 or 1.
fn reduce<V1, V2, F>(a: &V1, b: &V2, reduction: Reduction, relation: F) -> Result<usize, ShapeError>
where
    V1: Operand2,
    V2: Operand2,
    F: Fn(&V1::Elem, &V2::Elem) -> bool,
{
    check_operands(a, b)?;
    let n2 = a.size2();
    let mut pairs = (0..a.len()).map(|l| {
        let (r, c) = (l / n2, l % n2);
        relation(a.elem0(r, c), b.elem0(r, c))
    });
    Ok(match reduction {
        Reduction::All => pairs.all(|x| x) as usize,
        Reduction::Any => pairs.any(|x| x) as usize,
        Reduction::Count => pairs.filter(|&x| x).count(),
    })
}

macro_rules! relation {
    ($bound:ident, $op:tt, $empty:expr, $plain:ident, $any:ident, $count:ident) => {
        #[doc = concat!("Return `true` if `a ", stringify!($op), " b` for every pair of elements.")]
        pub fn $plain<V1, V2>(a: &V1, b: &V2) -> Result<bool, ShapeError>
        where
            V1: Operand2,
            V2: Operand2,
            V1::Elem: $bound<V2::Elem>,
        {
            let holds = reduce(a, b, Reduction::All, |x, y| x $op y)? == 1;
            Ok(if a.len() == 0 { $empty } else { holds })
        }

        #[doc = concat!("Return `true` if `a ", stringify!($op), " b` for some pair of elements.")]
        pub fn $any<V1, V2>(a: &V1, b: &V2) -> Result<bool, ShapeError>
        where
            V1: Operand2,
            V2: Operand2,
            V1::Elem: $bound<V2::Elem>,
        {
            Ok(reduce(a, b, Reduction::Any, |x, y| x $op y)? == 1)
        }

        #[doc = concat!("Return the number of pairs of elements with `a ", stringify!($op), " b`.")]
        pub fn $count<V1, V2>(a: &V1, b: &V2) -> Result<usize, ShapeError>
        where
            V1: Operand2,
            V2: Operand2,
            V1::Elem: $bound<V2::Elem>,
        {
            reduce(a, b, Reduction::Count, |x, y| x $op y)
        }
    };
}

relation!(PartialEq, ==, true, eq, any_eq, count_eq);
relation!(PartialOrd, <, false, lt, any_lt, count_lt);
relation!(PartialOrd, <=, true, le, any_le, count_le);

/// Return the number of pairs of elements with `a != b`.
pub fn count_ne<V1, V2>(a: &V1, b: &V2) -> Result<usize, ShapeError>
where
    V1: Operand2,
    V2: Operand2,
    V1::Elem: PartialEq<V2::Elem>,
{
    reduce(a, b, Reduction::Count, |x, y| x != y)
}

/// `!eq(a, b)`
pub fn ne<V1, V2>(a: &V1, b: &V2) -> Result<bool, ShapeError>
where
    V1: Operand2,
    V2: Operand2,
    V1::Elem: PartialEq<V2::Elem>,
{
    eq(a, b).map(|e| !e)
}

/// `!eq(a, b)`: some pair of elements differs.
pub fn any_ne<V1, V2>(a: &V1, b: &V2) -> Result<bool, ShapeError>
where
    V1: Operand2,
    V2: Operand2,
    V1::Elem: PartialEq<V2::Elem>,
{
    ne(a, b)
}

/// `!any_eq(a, b)`: no pair of elements is equal.
pub fn all_ne<V1, V2>(a: &V1, b: &V2) -> Result<bool, ShapeError>
where
    V1: Operand2,
    V2: Operand2,
    V1::Elem: PartialEq<V2::Elem>,
{
    any_eq(a, b).map(|e| !e)
}

macro_rules! swapped {
    ($(#[$meta:meta])* $name:ident, $base:ident, $ret:ty) => {
        $(#[$meta])*
        pub fn $name<V1, V2>(a: &V1, b: &V2) -> Result<$ret, ShapeError>
        where
            V1: Operand2,
            V2: Operand2,
            V2::Elem: PartialOrd<V1::Elem>,
        {
            $base(b, a)
        }
    };
}

swapped!(
    /// `lt(b, a)`
    gt, lt, bool
);
swapped!(
    /// `le(b, a)`
    ge, le, bool
);
swapped!(
    /// `any_lt(b, a)`
    any_gt, any_lt, bool
);
swapped!(
    /// `any_le(b, a)`
    any_ge, any_le, bool
);
swapped!(
    /// `count_lt(b, a)`
    count_gt, count_lt, usize
);
swapped!(
    /// `count_le(b, a)`
    count_ge, count_le, usize
);

macro_rules! same_as {
    ($(#[$meta:meta])* $name:ident, $base:ident, $bound:ident, $v:ident, $w:ident) => {
        $(#[$meta])*
        pub fn $name<V1, V2>(a: &V1, b: &V2) -> Result<bool, ShapeError>
        where
            V1: Operand2,
            V2: Operand2,
            $v::Elem: $bound<$w::Elem>,
        {
            $base(a, b)
        }
    };
}

same_as!(
    /// Same as [`eq`].
    all_eq, eq, PartialEq, V1, V2
);
same_as!(
    /// Same as [`lt`].
    all_lt, lt, PartialOrd, V1, V2
);
same_as!(
    /// Same as [`le`].
    all_le, le, PartialOrd, V1, V2
);
same_as!(
    /// Same as [`gt`].
    all_gt, gt, PartialOrd, V2, V1
);
same_as!(
    /// Same as [`ge`].
    all_ge, ge, PartialOrd, V2, V1
);

#[cfg(test)]
mod tests
{
    use super::*;
    use crate::{Array2, IndexSlice};

    fn pair() -> (Array2<i32>, Array2<i32>)
    {
        let a = Array2::from_shape_vec(2, 3, vec![1, 2, 3, 4, 5, 6]).unwrap();
        let b = Array2::from_shape_vec(0..=1, 0..=2, vec![1, 3, 2, 4, 6, 5]).unwrap();
        (a, b)
    }

    #[test]
    fn plain_relations()
    {
        let (a, b) = pair();
        assert!(eq(&a, &a).unwrap());
        assert!(!lt(&a, &a).unwrap());
        assert!(le(&a, &a).unwrap());
        assert!(ne(&a, &b).unwrap());
        assert!(!lt(&a, &b).unwrap());
        assert!(!gt(&a, &b).unwrap());
        let c = Array2::from_shape_vec(2, 3, vec![2, 3, 4, 5, 6, 7]).unwrap();
        assert!(lt(&a, &c).unwrap());
        assert!(gt(&c, &a).unwrap());
        assert!(ge(&c, &a).unwrap());
        assert!(all_gt(&c, &a).unwrap());
    }

    #[test]
    fn any_and_all()
    {
        let (a, b) = pair();
        assert!(any_eq(&a, &b).unwrap());
        assert!(any_ne(&a, &b).unwrap());
        assert!(any_lt(&a, &b).unwrap());
        assert!(any_gt(&a, &b).unwrap());
        assert!(!all_ne(&a, &b).unwrap());
        assert!(all_le(&a, &a).unwrap());
        assert!(all_ge(&a, &a).unwrap());
        assert!(!all_eq(&a, &b).unwrap());
        assert!(!all_lt(&a, &b).unwrap());
    }

    #[test]
    fn counts()
    {
        let (a, b) = pair();
        assert_eq!(count_eq(&a, &b).unwrap(), 2);
        assert_eq!(count_ne(&a, &b).unwrap(), 4);
        assert_eq!(count_lt(&a, &b).unwrap(), 2);
        assert_eq!(count_gt(&a, &b).unwrap(), 2);
        assert_eq!(count_le(&a, &b).unwrap(), 4);
        assert_eq!(count_ge(&a, &b).unwrap(), 4);
    }

    #[test]
    fn empty_operands()
    {
        let a = Array2::<i32>::zeros(0, 3).unwrap();
        let b = Array2::<i32>::zeros(0, 3).unwrap();
        assert!(eq(&a, &b).unwrap());
        assert!(le(&a, &b).unwrap());
        assert!(ge(&a, &b).unwrap());
        assert!(!lt(&a, &b).unwrap());
        assert!(!gt(&a, &b).unwrap());
        assert!(!any_eq(&a, &b).unwrap());
        assert!(all_ne(&a, &b).unwrap());
        assert_eq!(count_eq(&a, &b).unwrap(), 0);
    }

    #[test]
    fn mixed_operands()
    {
        let (a, b) = pair();
        let v = b.slice(.., IndexSlice::new(None, None, -1)).unwrap();
        // reversed columns of b: 2 3 1 / 5 6 4
        assert_eq!(count_lt(&a, &v).unwrap(), 4);
        assert_eq!(count_gt(&v, &a).unwrap(), 4);
        let p = Array2::from_shape_fn(1..=2, 1..=3, |i, j| (i as i32, j as i32));
        let rows = p.ma(|t| &t.0);
        assert!(le(&rows, &a).unwrap());
        assert!(any_eq(&a, &rows).unwrap());
        let e = eq(&a, &v.to_array().slice(.., 1..=2).unwrap()).unwrap_err();
        assert_eq!(e.kind(), ErrorKind::IncompatibleShapes);
    }
}
