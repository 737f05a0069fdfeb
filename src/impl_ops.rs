// Copyright 2014-2016 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

/// Elements that can be used as direct operands in arithmetic with arrays.
///
/// For example, `f64` is a `ScalarOperand` which means that for an array `a`,
/// arithmetic like `a += 3.` and `a *= 2.` is allowed.
///
/// This trait ***does not*** limit which elements can be stored in an array in general.
/// Non-`ScalarOperand` types can still participate in arithmetic as array elements in
/// array-array operations.
pub trait ScalarOperand: 'static + Clone {}
impl ScalarOperand for bool {}
impl ScalarOperand for i8 {}
impl ScalarOperand for u8 {}
impl ScalarOperand for i16 {}
impl ScalarOperand for u16 {}
impl ScalarOperand for i32 {}
impl ScalarOperand for u32 {}
impl ScalarOperand for i64 {}
impl ScalarOperand for u64 {}
impl ScalarOperand for i128 {}
impl ScalarOperand for u128 {}
impl ScalarOperand for isize {}
impl ScalarOperand for usize {}
impl ScalarOperand for f32 {}
impl ScalarOperand for f64 {}

mod assign_ops
{
    use std::ops::{AddAssign, DivAssign, MulAssign, SubAssign};

    use num_traits::Zero;

    use super::ScalarOperand;
    use crate::{Array2Base, Data, DataMut};

    macro_rules! impl_assign_op {
        ($trt:ident, $method:ident, $checked:ident, $doc:expr) => {
            #[doc=$doc]
            /// `rhs` may have other index ranges and another element type.
            ///
            /// **Panics** if the arrays are not conformable; use
            #[doc = concat!("[`", stringify!($checked), "`](Array2Base::", stringify!($checked), ")")]
            /// for a checked version.
            impl<'a, A, B, S, S2> $trt<&'a Array2Base<S2>> for Array2Base<S>
            where
                A: $trt<B>,
                B: Clone,
                S: DataMut<Elem = A>,
                S2: Data<Elem = B>,
            {
                fn $method(&mut self, rhs: &Array2Base<S2>)
                {
                    if let Err(e) = self.$checked(rhs) {
                        panic!("farray: {}: {}", stringify!($method), e);
                    }
                }
            }

            #[doc=$doc]
            impl<A, S> $trt<A> for Array2Base<S>
            where
                A: ScalarOperand + $trt<A>,
                S: DataMut<Elem = A>,
            {
                fn $method(&mut self, rhs: A)
                {
                    self.as_mut_slice().iter_mut().for_each(move |elt| {
                        elt.$method(rhs.clone());
                    });
                }
            }
        };
    }

    impl_assign_op!(
        AddAssign,
        add_assign,
        add_assign_from,
        "Perform `self += rhs` as elementwise addition (in place).\n"
    );
    impl_assign_op!(
        SubAssign,
        sub_assign,
        sub_assign_from,
        "Perform `self -= rhs` as elementwise subtraction (in place).\n"
    );
    impl_assign_op!(
        MulAssign,
        mul_assign,
        mul_assign_from,
        "Perform `self *= rhs` as elementwise multiplication (in place).\n"
    );

    /// Perform `self /= rhs` as elementwise division (in place).
    ///
    /// **Panics** if the arrays are not conformable or if an element of
    /// `rhs` is zero; use [`div_assign_from`](Array2Base::div_assign_from)
    /// for a checked version.
    impl<'a, A, B, S, S2> DivAssign<&'a Array2Base<S2>> for Array2Base<S>
    where
        A: DivAssign<B>,
        B: Clone + Zero,
        S: DataMut<Elem = A>,
        S2: Data<Elem = B>,
    {
        fn div_assign(&mut self, rhs: &Array2Base<S2>)
        {
            if let Err(e) = self.div_assign_from(rhs) {
                panic!("farray: div_assign: {}", e);
            }
        }
    }

    /// Perform `self /= rhs` as elementwise division (in place).
    ///
    /// See [`div_assign_scalar`](Array2Base::div_assign_scalar) for a
    /// version that checks for a zero divisor.
    impl<A, S> DivAssign<A> for Array2Base<S>
    where
        A: ScalarOperand + DivAssign<A>,
        S: DataMut<Elem = A>,
    {
        fn div_assign(&mut self, rhs: A)
        {
            self.as_mut_slice().iter_mut().for_each(move |elt| {
                *elt /= rhs.clone();
            });
        }
    }
}

#[cfg(test)]
mod tests
{
    use crate::Array2;

    #[test]
    fn scalar_assign_ops()
    {
        let mut a = Array2::from_shape_vec(2, 2, vec![1., 2., 3., 4.]).unwrap();
        a += 1.;
        a *= 2.;
        a -= 1.;
        a /= 2.;
        assert_eq!(a.as_slice(), &[1.5, 2.5, 3.5, 4.5]);
    }

    #[test]
    fn array_assign_ops_across_index_ranges()
    {
        let mut a = Array2::from_elem(0..=1, 0..=1, 8).unwrap();
        let b = Array2::from_shape_vec(2, 2, vec![1, 2, 4, 8]).unwrap();
        a += &b;
        assert_eq!(a.as_slice(), &[9, 10, 12, 16]);
        a /= &b;
        assert_eq!(a.as_slice(), &[9, 5, 3, 2]);
    }

    #[test]
    #[should_panic]
    fn non_conformable_operator_panics()
    {
        let mut a = Array2::from_elem(2, 2, 1).unwrap();
        let b = Array2::from_elem(2, 3, 1).unwrap();
        a -= &b;
    }
}
