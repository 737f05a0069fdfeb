// Copyright 2014-2016 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

#[cfg(feature = "approx")]
mod approx_methods
{
    use crate::{Array2Base, Data};

    impl<A, S> Array2Base<S>
    where S: Data<Elem = A>
    {
        /// A test for equality that uses the elementwise absolute difference to compute the
        /// approximate equality of two arrays.
        ///
        /// **Requires crate feature `"approx"`**
        pub fn abs_diff_eq<S2>(&self, other: &Array2Base<S2>, epsilon: A::Epsilon) -> bool
        where
            A: ::approx::AbsDiffEq<S2::Elem>,
            A::Epsilon: Clone,
            S2: Data,
        {
            <Self as ::approx::AbsDiffEq<_>>::abs_diff_eq(self, other, epsilon)
        }

        /// A test for equality that uses an elementwise relative comparison if the values are far
        /// apart; and the absolute difference otherwise.
        ///
        /// **Requires crate feature `"approx"`**
        pub fn relative_eq<S2>(&self, other: &Array2Base<S2>, epsilon: A::Epsilon, max_relative: A::Epsilon) -> bool
        where
            A: ::approx::RelativeEq<S2::Elem>,
            A::Epsilon: Clone,
            S2: Data,
        {
            <Self as ::approx::RelativeEq<_>>::relative_eq(self, other, epsilon, max_relative)
        }
    }
}

#[cfg(feature = "approx")]
macro_rules! impl_approx_traits {
    ($approx:ident, $doc:expr) => {
        mod $approx
        {
            use crate::{Array2Base, Data};
            use $approx::{AbsDiffEq, RelativeEq, UlpsEq};

            /// Pairs of elements of conformable arrays, in row-major order.
            /// `None` if the shapes differ.
            fn pairs<'a, A, B, S, S2>(
                a: &'a Array2Base<S>, b: &'a Array2Base<S2>,
            ) -> Option<impl Iterator<Item = (&'a A, &'a B)>>
            where
                A: 'a,
                B: 'a,
                S: Data<Elem = A>,
                S2: Data<Elem = B>,
            {
                if a.conformable(b) {
                    Some(a.iter().zip(b.iter()))
                } else {
                    None
                }
            }

            #[doc = $doc]
            impl<A, B, S, S2> AbsDiffEq<Array2Base<S2>> for Array2Base<S>
            where
                A: AbsDiffEq<B>,
                A::Epsilon: Clone,
                S: Data<Elem = A>,
                S2: Data<Elem = B>,
            {
                type Epsilon = A::Epsilon;

                fn default_epsilon() -> A::Epsilon
                {
                    A::default_epsilon()
                }

                fn abs_diff_eq(&self, other: &Array2Base<S2>, epsilon: A::Epsilon) -> bool
                {
                    match pairs(self, other) {
                        Some(mut it) => it.all(move |(a, b)| A::abs_diff_eq(a, b, epsilon.clone())),
                        None => false,
                    }
                }
            }

            #[doc = $doc]
            impl<A, B, S, S2> RelativeEq<Array2Base<S2>> for Array2Base<S>
            where
                A: RelativeEq<B>,
                A::Epsilon: Clone,
                S: Data<Elem = A>,
                S2: Data<Elem = B>,
            {
                fn default_max_relative() -> A::Epsilon
                {
                    A::default_max_relative()
                }

                fn relative_eq(&self, other: &Array2Base<S2>, epsilon: A::Epsilon, max_relative: A::Epsilon) -> bool
                {
                    match pairs(self, other) {
                        Some(mut it) => it.all(move |(a, b)| A::relative_eq(a, b, epsilon.clone(), max_relative.clone())),
                        None => false,
                    }
                }
            }

            #[doc = $doc]
            impl<A, B, S, S2> UlpsEq<Array2Base<S2>> for Array2Base<S>
            where
                A: UlpsEq<B>,
                A::Epsilon: Clone,
                S: Data<Elem = A>,
                S2: Data<Elem = B>,
            {
                fn default_max_ulps() -> u32
                {
                    A::default_max_ulps()
                }

                fn ulps_eq(&self, other: &Array2Base<S2>, epsilon: A::Epsilon, max_ulps: u32) -> bool
                {
                    match pairs(self, other) {
                        Some(mut it) => it.all(move |(a, b)| A::ulps_eq(a, b, epsilon.clone(), max_ulps)),
                        None => false,
                    }
                }
            }

            #[cfg(test)]
            mod tests
            {
                use crate::Array2;
                use $approx::{
                    assert_abs_diff_eq, assert_abs_diff_ne, assert_relative_eq, assert_relative_ne, assert_ulps_eq,
                    assert_ulps_ne,
                };

                fn pair() -> (Array2<f32>, Array2<f32>)
                {
                    let a = Array2::from_shape_vec(2, 2, vec![0., 2., -0.000010001, 100000000.]).unwrap();
                    let b = Array2::from_shape_vec(0..=1, 0..=1, vec![0., 1., -0.000010002, 100000001.]).unwrap();
                    (a, b)
                }

                #[test]
                fn abs_diff_eq()
                {
                    let (a, mut b) = pair();
                    assert_abs_diff_ne!(a, b);
                    b[(0, 1)] = 2.;
                    assert_abs_diff_eq!(a, b);

                    // Make sure we can compare different shapes without failure.
                    let c = Array2::from_elem(1, 2, 1.0f32).unwrap();
                    assert_abs_diff_ne!(a, c);
                }

                #[test]
                fn relative_eq()
                {
                    let (a, mut b) = pair();
                    assert_relative_ne!(a, b);
                    b[(0, 1)] = 2.;
                    assert_relative_eq!(a, b);
                    assert!(a.relative_eq(&b, 1e-6, 1e-6));
                }

                #[test]
                fn ulps_eq()
                {
                    let (a, mut b) = pair();
                    assert_ulps_ne!(a, b);
                    b[(0, 1)] = 2.;
                    assert_ulps_eq!(a, b);
                }
            }
        }
    };
}

#[cfg(feature = "approx")]
impl_approx_traits!(approx, "**Requires crate feature `\"approx\"`.**");
