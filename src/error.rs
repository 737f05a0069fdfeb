// Copyright 2014-2016 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use std::error::Error;
use std::fmt;

/// An error related to array shape, bounds or element preconditions.
///
/// Every checked operation of the crate reports its failure through this
/// type. Precondition checks happen before any element is written, so an
/// operation that returns an error has left the receiver unchanged.
#[derive(Clone)]
pub struct ShapeError
{
    // we want to be able to change this representation later
    repr: ErrorKind,
}

impl ShapeError
{
    /// Return the `ErrorKind` of this error.
    #[inline]
    pub fn kind(&self) -> ErrorKind
    {
        self.repr
    }

    /// Create a new `ShapeError`
    pub fn from_kind(error: ErrorKind) -> Self
    {
        from_kind(error)
    }
}

/// Error code for an error related to array shape, bounds or elements.
///
/// This enumeration is not exhaustive. The representation of the enum
/// is not guaranteed.
#[non_exhaustive]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind
{
    /// incompatible shapes (the operands are not conformable)
    IncompatibleShapes,
    /// incompatible layout: not contiguous
    IncompatibleLayout,
    /// the element count of the shape overflows `usize`
    DimensionTooLarge,
    /// index or slice bound outside of the index range
    OutOfBounds,
    /// operation requires a square array
    NotSquare,
    /// division by an element equal to zero
    DivideByZero,
    /// dimension number other than 1 or 2
    InvalidDimension,
    /// operand is not size bounded
    Unbounded,
}

#[inline(always)]
pub fn from_kind(k: ErrorKind) -> ShapeError
{
    ShapeError { repr: k }
}

impl PartialEq for ShapeError
{
    #[inline(always)]
    fn eq(&self, rhs: &Self) -> bool
    {
        self.repr == rhs.repr
    }
}

impl Error for ShapeError {}

impl fmt::Display for ShapeError
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        let description = match self.kind() {
            ErrorKind::IncompatibleShapes => "incompatible shapes",
            ErrorKind::IncompatibleLayout => "incompatible layout (not contiguous)",
            ErrorKind::DimensionTooLarge => "dimension too large",
            ErrorKind::OutOfBounds => "index out of bounds",
            ErrorKind::NotSquare => "array is not square",
            ErrorKind::DivideByZero => "division by a zero element",
            ErrorKind::InvalidDimension => "dimension number must be 1 or 2",
            ErrorKind::Unbounded => "operand is not size bounded",
        };
        write!(f, "ShapeError/{:?}: {}", self.kind(), description)
    }
}

impl fmt::Debug for ShapeError
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        write!(f, "{}", self)
    }
}

#[inline]
pub(crate) fn incompatible_shapes() -> ShapeError
{
    from_kind(ErrorKind::IncompatibleShapes)
}

#[inline]
pub(crate) fn out_of_bounds() -> ShapeError
{
    from_kind(ErrorKind::OutOfBounds)
}

#[cfg(test)]
mod tests
{
    use super::*;

    #[test]
    fn display_names_kind()
    {
        let e = from_kind(ErrorKind::NotSquare);
        assert_eq!(e.to_string(), "ShapeError/NotSquare: array is not square");
        assert_eq!(e, ShapeError::from_kind(ErrorKind::NotSquare));
        assert_ne!(e, out_of_bounds());
    }
}
