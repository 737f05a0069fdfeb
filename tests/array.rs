#![allow(clippy::many_single_char_names, clippy::deref_addrof, clippy::unreadable_literal)]

use farray::prelude::*;

use std::collections::HashSet;

fn scenario() -> Array2<i32>
{
    Array2::from_shape_vec(1..=3, 1..=3, (1..=9).collect()).unwrap()
}

#[test]
fn index_ranges()
{
    let a = Array2::<f32>::new(-2..=1, 3).unwrap();
    assert_eq!(a.rank(), 2);
    assert_eq!(a.range1(), IndexRange::new(-2, 1));
    assert_eq!(a.range2(), IndexRange::new(1, 3));
    assert_eq!((a.l1(), a.u1(), a.l2(), a.u2()), (-2, 1, 1, 3));
    assert_eq!((a.size1(), a.size2()), (4, 3));
    assert_eq!((a.isize1(), a.isize2()), (4, 3));
    assert_eq!(a.len(), 12);
    assert_eq!(a.range(2).unwrap(), IndexRange::new(1, 3));
    assert_eq!(a.l(1).unwrap(), -2);
    assert_eq!(a.u(2).unwrap(), 3);
    assert_eq!(a.size(1).unwrap(), 4);
    assert_eq!(a.range(3).unwrap_err().kind(), ErrorKind::InvalidDimension);
    assert_eq!(a.size(0).unwrap_err().kind(), ErrorKind::InvalidDimension);
}

#[test]
fn set_then_at()
{
    let mut a = Array2::<i64>::zeros(-1..=1, 0..=2).unwrap();
    for i1 in a.range1() {
        for i2 in a.range2() {
            a.set(i1, i2, (10 * i1 + i2) as i64).unwrap();
        }
    }
    for i1 in -1..=1 {
        for i2 in 0..=2 {
            assert_eq!(*a.at(i1, i2).unwrap(), (10 * i1 + i2) as i64);
            assert_eq!(a[(i1, i2)], (10 * i1 + i2) as i64);
        }
    }
    assert_eq!(a.at(2, 0).unwrap_err().kind(), ErrorKind::OutOfBounds);
    assert_eq!(a.at(0, -1).unwrap_err().kind(), ErrorKind::OutOfBounds);
    assert_eq!(a.set(-2, 0, 1).unwrap_err().kind(), ErrorKind::OutOfBounds);
    assert!(a.get(1, 3).is_none());
    *a.at_mut(1, 2).unwrap() = 7;
    assert_eq!(a[(1, 2)], 7);
}

#[test]
#[should_panic]
fn index_out_of_bounds()
{
    let a = scenario();
    let _ = a[(0, 1)];
}

#[test]
fn linear_index_is_a_bijection()
{
    let a = Array2::<u8>::zeros(-3..=0, 2..=6).unwrap();
    let mut seen = HashSet::new();
    for i1 in a.range1() {
        for i2 in a.range2() {
            let l = a.index(i1, i2);
            assert!(l < a.len());
            assert!(seen.insert(l));
            assert_eq!(a.checked_index(i1, i2), Some(l));
        }
    }
    assert_eq!(seen.len(), a.len());
    assert_eq!(a.index(-3, 2), 0);
    assert_eq!(a.index(-2, 2), 5);
    assert_eq!(a.checked_index(1, 2), None);
}

#[test]
fn transpose_and_identity_scenario()
{
    let mut a = scenario();
    assert_eq!(a[(1, 1)], 1);
    assert_eq!(a[(1, 2)], 2);
    assert_eq!(a[(3, 3)], 9);
    a.transpose().unwrap();
    assert_eq!(a[(1, 2)], 4);
    assert!(!a.is_identity());
    a.to_identity().unwrap();
    assert!(a.is_identity());
    assert_eq!(a[(2, 2)], 1);
    assert_eq!(a[(1, 2)], 0);
}

#[test]
fn tail_is_the_rest_of_the_storage()
{
    let mut a = scenario();
    assert_eq!(a.tail(3, 1).unwrap(), &[7, 8, 9]);
    a.tail_mut(2, 3).unwrap()[0] = 0;
    assert_eq!(a[(2, 3)], 0);
    assert!(a.tail(4, 1).is_err());
}

#[test]
fn redimension_keeps_common_elements()
{
    let mut a = scenario();
    a.redimension(0..=2, 2..=4).unwrap();
    assert_eq!(a.range1(), IndexRange::new(0, 2));
    assert_eq!(a.range2(), IndexRange::new(2, 4));
    assert_eq!(a[(1, 2)], 2);
    assert_eq!(a[(2, 3)], 6);
    assert_eq!(a[(0, 2)], 0);
    assert_eq!(a[(1, 4)], 0);

    let mut b = scenario();
    b.dimension(2, 2).unwrap();
    assert_eq!(b.len(), 4);
    b.clear();
    assert!(b.is_empty());
    assert_eq!(b.range1(), IndexRange::default());
}

#[test]
fn take_and_swap()
{
    let mut a = scenario();
    let mut b = Array2::from_elem(0..=0, 0..=1, 5).unwrap();
    a.swap(&mut b);
    assert_eq!(a.len(), 2);
    assert_eq!(b[(3, 3)], 9);
    let c = b.take();
    assert!(b.is_empty());
    assert_eq!(c, scenario());
    assert_eq!(c.into_raw_vec(), (1..=9).collect::<Vec<_>>());
}

#[test]
fn proxies_share_storage()
{
    let mut v = vec![0.; 8];
    {
        let mut p = Array2Proxy::proxy(&mut v, 0..=1, 0..=2).unwrap();
        p.fill(1.);
        p[(1, 2)] = 3.;
        // the proxy only covers the first six elements
        assert_eq!(p.len(), 6);
        assert!(p.dimension(3, 3).is_err());
        p.dimension(2, 4).unwrap();
        assert_eq!(p.u2(), 4);
        p.clear();
        assert!(p.is_empty());
        assert_eq!(p.range2(), IndexRange::default());
        p.dimension(2, 4).unwrap();
    }
    assert_eq!(v, [1., 1., 1., 1., 1., 3., 0., 0.]);
    let r = Array2ProxyRef::proxy_ref(&v, 2, 4).unwrap();
    assert_eq!(r[(2, 2)], 3.);
    assert_eq!(Array2ProxyRef::proxy_ref(&v, 3, 3).unwrap_err().kind(), ErrorKind::OutOfBounds);

    let mut x = 2;
    {
        let mut p = Array2Proxy::from_value(&mut x);
        assert_eq!((p.size1(), p.size2()), (1, 1));
        p[(1, 1)] += 1;
    }
    assert_eq!(x, 3);
}

#[test]
fn sizes_beyond_isize_are_rejected()
{
    let too_large = |r1: IndexRange, r2: IndexRange| Array2::<u8>::zeros(r1, r2).unwrap_err().kind();
    let (one, none) = (IndexRange::with_size(1), IndexRange::with_size(0));
    assert_eq!(too_large(IndexRange::new(-10, isize::MAX), one), ErrorKind::DimensionTooLarge);
    assert_eq!(too_large(IndexRange::new(isize::MIN, isize::MAX), one), ErrorKind::DimensionTooLarge);
    assert_eq!(too_large(IndexRange::new(isize::MIN, isize::MAX), none), ErrorKind::DimensionTooLarge);
    assert_eq!(too_large(one, IndexRange::new(isize::MIN, -1)), ErrorKind::DimensionTooLarge);

    let mut a = scenario();
    assert_eq!(
        a.dimension(IndexRange::new(isize::MIN, 0), 2).unwrap_err().kind(),
        ErrorKind::DimensionTooLarge
    );
    assert_eq!(a.len(), 9);
}

#[test]
fn small_arrays_at_the_isize_limits()
{
    let top = IndexRange::new(isize::MAX - 2, isize::MAX);
    let bottom = IndexRange::new(isize::MIN, isize::MIN + 1);
    let mut a = Array2::from_shape_fn(top, bottom, |i, j| (i - (isize::MAX - 2)) * 10 + (j - isize::MIN));
    assert_eq!(a.as_slice(), &[0, 1, 10, 11, 20, 21]);
    assert_eq!(a.at(isize::MAX, isize::MIN + 1), Ok(&21));
    assert_eq!(a.at(0, 1).unwrap_err().kind(), ErrorKind::OutOfBounds);
    a.set(isize::MAX - 1, isize::MIN, -1).unwrap();
    assert_eq!(a[(isize::MAX - 1, isize::MIN)], -1);
    let col = a.slice(.., isize::MIN + 1..=isize::MIN + 1).unwrap();
    assert_eq!(col.to_vec(), [1, 11, 21]);
}

/// An element type without a default value.
#[derive(Clone, Debug, PartialEq)]
struct Token(u32);

#[test]
fn empty_arrays_need_no_default_element()
{
    let empty = Array2::<Token>::default();
    assert!(empty.is_empty());
    let mut a = Array2::from_elem(2, 2, Token(7)).unwrap();
    let b = a.take();
    assert_eq!(b[(2, 2)], Token(7));
    assert!(a.is_empty());
    assert_eq!(a, empty);
}

#[test]
fn owned_array_through_a_proxy()
{
    let mut a = scenario();
    {
        let mut p = a.as_proxy();
        p *= 2;
        assert_eq!(p.range1(), IndexRange::new(1, 3));
    }
    assert_eq!(a[(3, 3)], 18);
    assert_eq!(a.as_proxy_ref(), a);
}

#[test]
fn equality_takes_index_ranges_into_account()
{
    let a = scenario();
    let b = Array2::from_shape_vec(0..=2, 0..=2, (1..=9).collect()).unwrap();
    assert_ne!(a, b);
    assert_eq!(a, a.clone());
    let mut set = HashSet::new();
    set.insert(a.clone());
    assert!(set.contains(&scenario()));
    assert!(!set.contains(&b));
}

#[test]
fn iteration_is_row_major()
{
    let mut a = Array2::from_shape_fn(1..=2, 1..=2, |i, j| (i, j));
    let order: Vec<_> = a.iter().cloned().collect();
    assert_eq!(order, [(1, 1), (1, 2), (2, 1), (2, 2)]);
    for x in &mut a {
        x.0 = -x.0;
    }
    assert_eq!(a[(2, 1)], (-2, 1));
    assert_eq!((&a).into_iter().count(), 4);
}

#[test]
fn to_default_resets_elements()
{
    let mut a = scenario();
    a.to_default();
    assert!(a.iter().all(|&x| x == 0));
    assert_eq!(a.range1(), IndexRange::new(1, 3));
}

#[test]
fn format()
{
    let a = Array2::from_shape_vec(2, 2, vec![1.5, -2., 0., 4.]).unwrap();
    assert_eq!(a.to_string(), "[[1.5, -2],\n [0, 4]]");
    assert_eq!(format!("{:.1}", a), "[[1.5, -2.0],\n [0.0, 4.0]]");
}
