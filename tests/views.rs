#![allow(clippy::many_single_char_names)]

use farray::prelude::*;

use itertools::Itertools;

fn grid() -> Array2<isize>
{
    // element value encodes its own index: 10 * i1 + i2
    Array2::from_shape_fn(0..=3, -1..=2, |i, j| 10 * i + j)
}

#[test]
fn slice_picks_the_selected_indices()
{
    let a = grid();
    let v = a.slice(1..=3, IndexSlice::from(-1..).step_by(2)).unwrap();
    assert_eq!((v.l1(), v.u1(), v.l2(), v.u2()), (1, 3, 1, 2));
    assert_eq!(v.len(), 6);
    assert_eq!(v.iter().cloned().collect_vec(), [9, 11, 19, 21, 29, 31]);
    assert_eq!(v[(2, 1)], 19);
    assert!(v.get(4, 1).is_none());
    assert!(!v.is_contiguous());
}

#[test]
fn negative_steps()
{
    let a = grid();
    let v = a.slice(IndexSlice::new(None, None, -1), IndexSlice::new(Some(2), Some(0), -2)).unwrap();
    assert_eq!((v.size1(), v.size2()), (4, 2));
    assert_eq!(v.iter().cloned().collect_vec(), [32, 30, 22, 20, 12, 10, 2, 0]);
}

#[test]
fn out_of_range_slices_fail()
{
    let a = grid();
    assert_eq!(a.slice(0..=4, ..).unwrap_err().kind(), ErrorKind::OutOfBounds);
    assert_eq!(a.slice(.., -2..=0).unwrap_err().kind(), ErrorKind::OutOfBounds);
    // nothing selected
    let e = a.slice(2..=1, ..).unwrap();
    assert!(e.is_empty());
    assert_eq!(e.size2(), 4);
}

#[test]
fn slices_at_the_isize_limits()
{
    let mut a = grid();
    let everything = IndexSlice::from(isize::MIN..=isize::MAX);
    assert_eq!(a.slice(everything, ..).unwrap_err().kind(), ErrorKind::OutOfBounds);
    assert_eq!(a.slice(.., everything).unwrap_err().kind(), ErrorKind::OutOfBounds);
    assert_eq!(a.slice_mut(0..=isize::MAX, ..).unwrap_err().kind(), ErrorKind::OutOfBounds);
    assert_eq!(
        a.slice(IndexSlice::new(Some(isize::MAX), Some(isize::MIN), -1), ..)
            .unwrap_err()
            .kind(),
        ErrorKind::OutOfBounds
    );
    assert_eq!(a.slice_row(1, everything).unwrap_err().kind(), ErrorKind::OutOfBounds);
    assert_eq!(a.slice_col(everything, 0).unwrap_err().kind(), ErrorKind::OutOfBounds);

    // a step larger than the range selects only the start
    let v = a.slice(IndexSlice::from(1..).step_by(isize::MAX), IndexSlice::new(None, None, isize::MIN)).unwrap();
    assert_eq!((v.size1(), v.size2()), (1, 1));
    assert_eq!(v[(1, 1)], 12);
}

#[test]
fn rows_and_columns()
{
    let a = grid();
    let row = a.slice_row(2, ..).unwrap();
    assert_eq!(row.to_vec(), [19, 20, 21, 22]);
    assert_eq!(row[1], 19);
    let col = a.slice_col(IndexSlice::from(..).step_by(-1), 0).unwrap();
    assert_eq!(col.iter().cloned().collect_vec(), [30, 20, 10, 0]);
    assert_eq!(col.u(), 4);
    assert!(a.slice_row(4, ..).is_err());
    assert!(a.slice_col(.., 3).is_err());
}

#[test]
fn writing_through_views()
{
    let mut a = grid();
    {
        let mut v = a.slice_mut(1..=2, 0..=1).unwrap();
        v.fill(0);
        v[(2, 2)] = -1;
    }
    assert_eq!(a[(1, 0)], 0);
    assert_eq!(a[(2, 1)], -1);
    assert_eq!(a[(3, 1)], 31);
    {
        let mut row = a.slice_row_mut(3, IndexSlice::from(..).step_by(3)).unwrap();
        assert_eq!(row.len(), 2);
        row.assign_slice(&[7, 8]).unwrap();
        assert!(row.assign_slice(&[1]).is_err());
        row.map_inplace(|x| *x *= 2);
    }
    assert_eq!(a.slice_row(3, ..).unwrap().to_vec(), [14, 30, 31, 16]);
    {
        let mut col = a.slice_col_mut(.., 2).unwrap();
        col[1] = 100;
        *col.at_mut(4).unwrap() += 1;
        assert!(col.at_mut(5).is_err());
    }
    assert_eq!(a[(0, 2)], 100);
    assert_eq!(a[(3, 2)], 17);
}

#[test]
fn view_to_array()
{
    let a = grid();
    let b = a.slice(1..=2, ..).unwrap().to_array();
    assert_eq!(b.range1(), IndexRange::new(1, 2));
    assert_eq!(b.range2(), IndexRange::new(1, 4));
    assert_eq!(b[(1, 1)], 9);
    let small = Array2::from_shape_vec(2, 2, vec![1i32, 2, 3, 4]).unwrap();
    let c = Array2::<f64>::from_operand(&small.slice(.., 2..=2).unwrap());
    assert_eq!(c.as_slice(), &[2., 4.]);
    assert_eq!(c.range1(), IndexRange::new(1, 2));
}

#[test]
fn view_assign_from_operands()
{
    let mut a = Array2::<i64>::zeros(3, 3).unwrap();
    let src = Array2::from_shape_vec(2, 2, vec![1i32, 2, 3, 4]).unwrap();
    a.slice_mut(2..=3, 2..=3).unwrap().assign_from(&src).unwrap();
    assert_eq!(a.as_slice(), &[0, 0, 0, 0, 1, 2, 0, 3, 4]);
    let e = a.slice_mut(.., 2..=3).unwrap().assign_from(&src).unwrap_err();
    assert_eq!(e.kind(), ErrorKind::IncompatibleShapes);
}

#[test]
fn contiguous_slices_become_proxies()
{
    let mut a = grid();
    {
        let v = a.slice_mut(2..=3, ..).unwrap();
        assert!(v.is_contiguous());
        let mut p = v.into_proxy().unwrap();
        assert_eq!(p.range1(), IndexRange::new(1, 2));
        p[(1, 1)] = 0;
    }
    assert_eq!(a[(2, -1)], 0);
    let v = a.slice_mut(.., 0..=1).unwrap();
    assert_eq!(v.into_proxy().unwrap_err().kind(), ErrorKind::IncompatibleLayout);
}

#[test]
fn slice_info_resolves_against_other_buffers()
{
    let a = grid();
    let info = a.slice_info(0..=1, 1..=2).unwrap();
    assert_eq!((info.size1(), info.size2()), (2, 2));
    let copy = a.to_vec();
    let v = info.view(&copy).unwrap();
    assert_eq!(v.iter().cloned().collect_vec(), [1, 2, 11, 12]);
    assert_eq!(info.view(&copy[..4]).unwrap_err().kind(), ErrorKind::OutOfBounds);
}

#[derive(Clone, Debug)]
struct Particle
{
    mass: f64,
    charge: i32,
}

#[test]
fn member_views()
{
    let mut a = Array2::from_shape_fn(1..=2, 0..=1, |i, j| Particle {
        mass: (i + j) as f64,
        charge: (i - j) as i32,
    });
    {
        let masses = a.ma(|p| &p.mass);
        assert_eq!((masses.u1(), masses.u2()), (2, 2));
        assert_eq!(masses[(2, 1)], 2.);
        assert_eq!(masses.iter().cloned().collect_vec(), [1., 2., 2., 3.]);
        assert!(masses.get(3, 1).is_none());
        let m = masses.to_array();
        assert_eq!(m.range2(), IndexRange::new(1, 2));
    }
    {
        let mut charges = a.ma_mut(|p| &mut p.charge);
        charges.map_inplace(|q| *q = -*q);
        *charges.at_mut(1, 1).unwrap() = 9;
        assert!(charges.at_mut(0, 1).is_err());
    }
    assert_eq!(a[(1, 0)].charge, 9);
    assert_eq!(a[(2, 1)].charge, -1);

    let source = Array2::from_elem(2, 2, 0.5).unwrap();
    a.ma_mut(|p| &mut p.mass).assign_from(&source).unwrap();
    assert!(a.iter().all(|p| p.mass == 0.5));
    let wrong = Array2::from_elem(1, 2, 0.5).unwrap();
    assert!(a.ma_mut(|p| &mut p.mass).assign_from(&wrong).is_err());
}

#[test]
fn member_view_as_assignment_source()
{
    let a = Array2::from_shape_fn(2, 3, |i, j| (i, j));
    let mut rows = Array2::<isize>::default();
    rows.assign_from(&a.ma(|t| &t.0)).unwrap();
    assert_eq!(rows.range2(), IndexRange::new(1, 3));
    assert_eq!(rows.as_slice(), &[1, 1, 1, 2, 2, 2]);
}
