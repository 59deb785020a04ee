use crate::models::types::Int;

/// Adds two integers. Never inlined so calling it always costs a call.
///
/// Addition wraps on overflow.
#[inline(never)]
pub fn add(a: Int, b: Int) -> Int {
    a.wrapping_add(b)
}

/// A callable bound once to a specific adder.
pub type BoundAdd<'a> = Box<dyn Fn(Int, Int) -> Int + 'a>;

/// Something that can add two integers.
///
/// Calling [`Adder::add`] through a `&dyn Adder` goes through the vtable.
pub trait Adder {
    fn add(&self, a: Int, b: Int) -> Int;

    /// Resolves `add` on this concrete adder once, and returns
    /// a callable that calls it directly.
    ///
    /// Example:
    /// ```
    /// use funcall::prelude::*;
    ///
    /// let add = AdderImpl.bind();
    /// assert_eq!(add(2, 3), 5);
    /// ```
    fn bind<'a>(&'a self) -> BoundAdd<'a>
    where
        Self: Sized,
    {
        Box::new(move |a, b| self.add(a, b))
    }
}

/// The one and only implementation of [`Adder`]. Holds nothing.
#[derive(Debug, Default, Clone, Copy)]
pub struct AdderImpl;

impl Adder for AdderImpl {
    #[inline(never)]
    fn add(&self, a: Int, b: Int) -> Int {
        a.wrapping_add(b)
    }
}
