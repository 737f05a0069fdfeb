// Copyright 2014-2016 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Strided slice views.
//!
//! Views are produced by the slicing methods of
//! [`Array2Base`](crate::Array2Base) or by resolving a detached
//! [`SliceInfo2`](crate::SliceInfo2) against a buffer. They borrow the
//! buffer: no copy is made, writes through a mutable view are visible in the
//! array, and the array cannot be redimensioned while a view is alive.
//!
//! Views are 1-based in every dimension whatever the index ranges of the
//! array they were taken from.

mod view1;
mod view2;

pub use self::view1::{ArrayView1S, ArrayViewMut1S};
pub use self::view2::{ArrayView2S, ArrayViewMut2S};
