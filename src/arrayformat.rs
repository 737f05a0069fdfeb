// Copyright 2014-2016 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use std::fmt;

use crate::operand::Operand2;
use crate::{Array2Base, ArrayView2S, ArrayViewMut2S, Data};

/// Write the operand row by row, one row per line.
fn format_rows<V, F>(view: &V, f: &mut fmt::Formatter<'_>, mut format: F) -> fmt::Result
where
    V: Operand2,
    F: FnMut(&V::Elem, &mut fmt::Formatter<'_>) -> fmt::Result,
{
    if view.size1() == 0 {
        return write!(f, "[]");
    }
    write!(f, "[")?;
    for r in 0..view.size1() {
        if r > 0 {
            write!(f, ",\n ")?;
        }
        write!(f, "[")?;
        for c in 0..view.size2() {
            if c > 0 {
                write!(f, ", ")?;
            }
            format(view.elem0(r, c), f)?;
        }
        write!(f, "]")?;
    }
    write!(f, "]")
}

/// Format the array using `Display` and apply the formatting parameters used
/// to each element.
///
/// The array is shown in multiline style, one row per line.
impl<A: fmt::Display, S> fmt::Display for Array2Base<S>
where S: Data<Elem = A>
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        format_rows(self, f, <_>::fmt)
    }
}

/// Format the array using `Debug` and apply the formatting parameters used
/// to each element.
///
/// The index ranges follow the elements.
impl<A: fmt::Debug, S> fmt::Debug for Array2Base<S>
where S: Data<Elem = A>
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        format_rows(self, f, <_>::fmt)?;
        write!(f, " range1={:?}, range2={:?}", self.range1, self.range2)
    }
}

/// Format the array using `LowerExp` and apply the formatting parameters used
/// to each element.
impl<A: fmt::LowerExp, S> fmt::LowerExp for Array2Base<S>
where S: Data<Elem = A>
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        format_rows(self, f, <_>::fmt)
    }
}

/// Format the array using `UpperExp` and apply the formatting parameters used
/// to each element.
impl<A: fmt::UpperExp, S> fmt::UpperExp for Array2Base<S>
where S: Data<Elem = A>
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        format_rows(self, f, <_>::fmt)
    }
}

impl<'a, A: fmt::Debug> fmt::Debug for ArrayView2S<'a, A>
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        format_rows(self, f, <_>::fmt)?;
        write!(f, " slice={:?}", self.info())
    }
}

impl<'a, A: fmt::Debug> fmt::Debug for ArrayViewMut2S<'a, A>
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        format_rows(self, f, <_>::fmt)?;
        write!(f, " slice={:?}", self.info())
    }
}
