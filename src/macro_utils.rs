/// Check that `($i1, $i2)` lies inside the index ranges of `$self_`.
///
/// The check only exists in builds with debug assertions; it guards the
/// unchecked accessors, whose callers promise the index is in bounds.
macro_rules! debug_bounds_check {
    ($self_:ident, $i1:expr, $i2:expr) => {
        if cfg!(debug_assertions) && !$self_.contains($i1, $i2) {
            panic!(
                "farray: index ({}, {}) is out of bounds for ranges {:?} x {:?}",
                $i1,
                $i2,
                $self_.range1(),
                $self_.range2()
            );
        }
    };
}

/// This assertion is always enabled but only verbose (formatting when
/// debug assertions are enabled).
#[cfg(debug_assertions)]
macro_rules! fassert {
    ($e:expr, $($t:tt)*) => { assert!($e, $($t)*) }
}

#[cfg(not(debug_assertions))]
macro_rules! fassert {
    ($e:expr, $($_ignore:tt)*) => { assert!($e) }
}
