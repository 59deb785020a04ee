pub mod adder;
pub mod guard;
pub mod harness;
pub mod log_append;
pub mod stopwatch;
pub mod types;
pub mod variant;
