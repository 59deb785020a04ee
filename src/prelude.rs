pub use crate::models::adder::{Adder, AdderImpl, BoundAdd, add};
pub use crate::models::guard::{escape, escape_with};
pub use crate::models::harness::{
    Harness, HarnessBuilder, HarnessConfig, HarnessError, Measurement, Report,
};
pub use crate::models::log_append::{LogAppender, SyncPolicy, buf_data, interesting_buf_sizes};
pub use crate::models::stopwatch::Stopwatch;
pub use crate::models::types::Int;
pub use crate::models::variant::{Timed, Variant};
