use std::fmt;
use std::time::Duration;

use itertools::Itertools;
use strum::IntoEnumIterator;

use crate::models::{types::Int, variant::Variant};

/// The name every measurement is reported under.
pub const GROUP_NAME: &str = "func_call";

#[derive(Debug, PartialEq, Eq)]
pub enum HarnessError {
    /// The name filter does not select any variant.
    NoMatchingVariant(String),
}

impl fmt::Display for HarnessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HarnessError::NoMatchingVariant(filter) => {
                write!(f, "no variant matches filter '{filter}'")
            }
        }
    }
}

impl std::error::Error for HarnessError {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HarnessConfig {
    iterations: u64,
    filter: Option<String>,
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            iterations: 1_000_000,
            filter: None,
        }
    }
}

impl HarnessConfig {
    /// The number of loop iterations for each variant.
    ///
    /// The default is 1000000.
    pub fn iterations(&self) -> u64 {
        self.iterations
    }

    /// Only variants whose name contains this are run.
    ///
    /// The default is to run them all.
    pub fn filter(&self) -> Option<&str> {
        self.filter.as_deref()
    }

    fn selects(&self, v: Variant) -> bool {
        self.filter
            .as_deref()
            .is_none_or(|f| v.as_ref().contains(f))
    }
}

/// A builder should you want a harness
/// with different parameters.
#[derive(Default)]
pub struct HarnessBuilder {
    config: HarnessConfig,
}

impl HarnessBuilder {
    pub fn build(self) -> Result<Harness, HarnessError> {
        Harness::from_config(self.config)
    }

    /// Sets the iteration count of every variant.
    pub fn iterations(mut self, n: u64) -> Self {
        self.config.iterations = n;
        self
    }

    /// Restricts the run to the variants whose name contains `filter`.
    ///
    /// Example:
    /// ```
    /// use funcall::prelude::*;
    ///
    /// let h = Harness::builder().filter("er").build().unwrap();
    /// assert_eq!(h.variants(), &[Variant::Pointer]);
    /// ```
    pub fn filter(mut self, filter: &str) -> Self {
        self.config.filter = Some(filter.to_string());
        self
    }
}

/// Runs the selected variants one after the other and
/// collects their measurements.
///
/// Example:
/// ```
/// use funcall::prelude::*;
///
/// let h = Harness::builder().iterations(1000).build().unwrap();
/// let report = h.run();
/// assert_eq!(report.measurements().len(), 4);
/// println!("{report}");
/// ```
#[derive(Debug)]
pub struct Harness {
    config: HarnessConfig,
    variants: Vec<Variant>,
}

impl Default for Harness {
    fn default() -> Self {
        Self {
            config: HarnessConfig::default(),
            variants: Variant::iter().collect(),
        }
    }
}

impl Harness {
    /// Returns a harness builder for configurability.
    pub fn builder() -> HarnessBuilder {
        HarnessBuilder::default()
    }

    pub fn from_config(config: HarnessConfig) -> Result<Self, HarnessError> {
        let variants = Variant::iter()
            .filter(|v| config.selects(*v))
            .collect::<Vec<_>>();
        if variants.is_empty() {
            return Err(HarnessError::NoMatchingVariant(
                config.filter.clone().unwrap_or_default(),
            ));
        }
        Ok(Self { config, variants })
    }

    pub fn config(&self) -> &HarnessConfig {
        &self.config
    }

    /// The variants this harness runs, in running order.
    pub fn variants(&self) -> &[Variant] {
        &self.variants
    }

    pub fn run(&self) -> Report {
        Report {
            measurements: self
                .variants
                .iter()
                .map(|v| Measurement::take(*v, self.config.iterations))
                .collect(),
        }
    }
}

/// The outcome of running one variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Measurement {
    variant: Variant,
    iterations: u64,
    elapsed: Duration,
    total: Int,
}

impl Measurement {
    /// Runs the variant and records how it went.
    pub fn take(variant: Variant, iterations: u64) -> Self {
        let timed = variant.measure(iterations);
        Self {
            variant,
            iterations,
            elapsed: timed.elapsed,
            total: timed.total,
        }
    }

    pub fn variant(&self) -> Variant {
        self.variant
    }

    pub fn iterations(&self) -> u64 {
        self.iterations
    }

    /// Time spent in the loop.
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// The final accumulator.
    pub fn total(&self) -> Int {
        self.total
    }

    /// Elapsed time per iteration, truncated to the nanosecond.
    /// Zero when no iteration ran.
    pub fn per_iteration(&self) -> Duration {
        if self.iterations == 0 {
            return Duration::ZERO;
        }
        let nanos = self.elapsed.as_nanos() / u128::from(self.iterations);
        Duration::from_nanos(u64::try_from(nanos).unwrap_or(u64::MAX))
    }

    /// Elapsed nanoseconds per iteration, not truncated.
    pub fn ns_per_iteration(&self) -> f64 {
        if self.iterations == 0 {
            return 0.0;
        }
        self.elapsed.as_nanos() as f64 / self.iterations as f64
    }
}

impl fmt::Display for Measurement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = format!("{}/{}", GROUP_NAME, self.variant);
        write!(
            f,
            "{:<20}{:>14}{:>14.4} ns/op  ({})",
            name,
            self.iterations,
            self.ns_per_iteration(),
            self.variant.description()
        )
    }
}

/// All measurements of a harness run, in running order.
/// [`fmt::Display`] gives the textual report, one line per variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    measurements: Vec<Measurement>,
}

impl Report {
    pub fn measurements(&self) -> &[Measurement] {
        &self.measurements
    }

    /// The measurement of the given variant, if it was run.
    pub fn get(&self, variant: Variant) -> Option<&Measurement> {
        self.measurements.iter().find(|m| m.variant == variant)
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.measurements.iter().join("\n"))
    }
}
