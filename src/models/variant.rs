use std::hint::black_box;
use std::time::Duration;

use strum::{AsRefStr, Display, EnumIter, EnumString, IntoStaticStr};

use crate::models::{
    adder::{Adder, AdderImpl, add},
    guard::escape,
    stopwatch::Stopwatch,
    types::{Int, index_to_int},
};

/// The ways of getting two integers added that are measured.
///
/// Iterate over all of them with [`strum::IntoEnumIterator`], in baseline first order.
/// They also parse from and display as their name:
/// ```
/// use funcall::prelude::*;
///
/// assert_eq!("Virtual".parse::<Variant>().unwrap(), Variant::Virtual);
/// assert_eq!(Variant::Pointer.to_string(), "Pointer");
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter, AsRefStr, IntoStaticStr,
)]
pub enum Variant {
    /// No function call at all.
    None,
    /// A direct call to a function that is never inlined.
    Bare,
    /// A call through a `&dyn Adder`.
    Virtual,
    /// A call through a callable bound to the adder before the loop.
    Pointer,
}

/// What one run of a variant produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timed {
    /// The final accumulator.
    pub total: Int,
    /// Time spent in the loop only.
    pub elapsed: Duration,
}

impl Variant {
    /// One line description of the call mechanism.
    pub fn description(&self) -> &'static str {
        match self {
            Variant::None => "inline addition, no call",
            Variant::Bare => "direct call to a non-inlined function",
            Variant::Virtual => "dynamic dispatch through a trait object",
            Variant::Pointer => "call through a pre-bound callable",
        }
    }

    /// Runs this variant for `iters` iterations.
    ///
    /// Setup is not timed. The accumulator escapes after the timer is stopped.
    pub fn measure(self, iters: u64) -> Timed {
        let mut sw = Stopwatch::new();
        let total = match self {
            Variant::None => sum_none(&mut sw, iters),
            Variant::Bare => sum_bare(&mut sw, iters),
            Variant::Virtual => {
                let adder = AdderImpl;
                // Hide the concrete type or the optimizer devirtualizes the calls.
                let adder = black_box(&adder as &dyn Adder);
                sum_virtual(&mut sw, adder, iters)
            }
            Variant::Pointer => {
                let adder = AdderImpl;
                let add = black_box(adder.bind());
                sum_pointer(&mut sw, &*add, iters)
            }
        };
        escape(total);
        Timed {
            total,
            elapsed: sw.elapsed(),
        }
    }

    /// The time taken by `iters` iterations. Suitable for criterion's `iter_custom`.
    pub fn run(self, iters: u64) -> Duration {
        self.measure(iters).elapsed
    }

    /// The accumulator after `iters` iterations.
    pub fn total(self, iters: u64) -> Int {
        self.measure(iters).total
    }
}

/// Adds every index to the total, inline.
///
/// Each index is opaque to the optimizer, otherwise the whole loop
/// folds into a closed form sum.
#[inline(never)]
pub fn sum_none(sw: &mut Stopwatch, iters: u64) -> Int {
    let mut total: Int = 0;
    sw.reset();
    for i in 0..iters {
        total = total.wrapping_add(black_box(index_to_int(i)));
    }
    sw.stop();
    total
}

#[inline(never)]
pub fn sum_bare(sw: &mut Stopwatch, iters: u64) -> Int {
    let mut total: Int = 0;
    sw.reset();
    for i in 0..iters {
        total = add(index_to_int(i), total);
    }
    sw.stop();
    total
}

#[inline(never)]
pub fn sum_virtual(sw: &mut Stopwatch, adder: &dyn Adder, iters: u64) -> Int {
    let mut total: Int = 0;
    sw.reset();
    for i in 0..iters {
        total = adder.add(index_to_int(i), total);
    }
    sw.stop();
    total
}

#[inline(never)]
pub fn sum_pointer(sw: &mut Stopwatch, add: &dyn Fn(Int, Int) -> Int, iters: u64) -> Int {
    let mut total: Int = 0;
    sw.reset();
    for i in 0..iters {
        total = add(index_to_int(i), total);
    }
    sw.stop();
    total
}
