//! How much does it cost to add two integers, depending on how `add` is called?
//!
//! Four ways are measured, see [`models::variant::Variant`]:
//!  - `None`: no call at all, the addition is inline.
//!  - `Bare`: a direct call to a function that is never inlined.
//!  - `Virtual`: a call through a `&dyn Adder`.
//!  - `Pointer`: a call through a callable bound to the adder once, before the loop.
//!
//! Each of them runs a loop `total = add(i, total)`, timed with setup excluded,
//! and lets the total escape so the loop is not optimized away.
//!
//! Example:
//! ```
//! use funcall::prelude::*;
//!
//! let report = Harness::builder().iterations(10_000).build().unwrap().run();
//! for m in report.measurements() {
//!     assert_eq!(m.total(), 49_995_000);
//! }
//! println!("{report}");
//! ```
//!
//! The criterion benchmarks under `benches/` call [`models::variant::Variant::run`] with the
//! iteration counts criterion picks.
pub mod models;
pub mod prelude;
pub mod testing;
