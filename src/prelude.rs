// Copyright 2014-2016 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! farray prelude.
//!
//! This module contains the most used types, type aliases and traits that
//! you can import easily as a group.
//!
//! ```
//! use farray::prelude::*;
//!
//! let a = Array2::from_elem(1..=2, 0..=1, 0.).unwrap();
//! assert_eq!(a.range2(), IndexRange::new(0, 1));
//! ```

#[doc(no_inline)]
pub use crate::{Array2, Array2Base, Array2Proxy, Array2ProxyRef};

#[doc(no_inline)]
pub use crate::{ArrayView1S, ArrayView2S, ArrayViewMut1S, ArrayViewMut2S, MemberView2, MemberViewMut2};

#[doc(no_inline)]
pub use crate::{IndexRange, IndexSlice};

#[doc(no_inline)]
pub use crate::{ErrorKind, ShapeError};

#[doc(no_inline)]
pub use crate::{Operand2, ScalarOperand};
