//! Configuration with YAML schema and validation.
//!
//! Mistake-proofing happens in three layers:
//! - typed structs with `deny_unknown_fields`
//! - declarative range checks via `validator`
//! - semantic checks that span several fields

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::algorithms::{Algorithm, FrameGenerator, DEFAULT_BOGO_MAX_ATTEMPTS};
use crate::error::{SortError, SortResult};

/// Smallest array the input provider offers.
pub const MIN_COUNT: usize = 5;
/// Largest array the input provider offers.
pub const MAX_COUNT: usize = 90;
/// Shortest inter-frame delay, in seconds.
pub const MIN_DELAY_SECS: f64 = 0.001;
/// Longest inter-frame delay, in seconds.
pub const MAX_DELAY_SECS: f64 = 0.3;
/// Smallest value the input provider may draw.
pub const MIN_VALUE: i64 = -1_000_000;
/// Largest bound of the value range.
pub const MAX_VALUE: i64 = 1_000_000;

/// Top-level visualizer configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct VisConfig {
    /// Schema version for forward compatibility.
    #[validate(length(min = 1))]
    #[serde(default = "default_schema_version")]
    pub schema_version: String,

    /// Algorithm to animate.
    #[serde(default)]
    pub algorithm: Algorithm,

    /// Number of elements in the generated array.
    #[validate(range(min = 5, max = 90))]
    #[serde(default = "default_count")]
    pub count: usize,

    /// Pause between frames in seconds.
    #[validate(range(min = 0.001, max = 0.3))]
    #[serde(default = "default_delay")]
    pub delay: f64,

    /// Master seed; a fresh seed is drawn when absent.
    #[serde(default)]
    pub seed: Option<u64>,

    /// Range the array values are drawn from.
    #[validate(nested)]
    #[serde(default)]
    pub values: ValueRange,

    /// Bogo sort limits.
    #[validate(nested)]
    #[serde(default)]
    pub bogo: BogoConfig,

    /// Text output settings.
    #[validate(nested)]
    #[serde(default)]
    pub display: DisplayConfig,
}

fn default_schema_version() -> String {
    "1.0".to_string()
}

const fn default_count() -> usize {
    15
}

const fn default_delay() -> f64 {
    0.03
}

impl Default for VisConfig {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            algorithm: Algorithm::default(),
            count: default_count(),
            delay: default_delay(),
            seed: None,
            values: ValueRange::default(),
            bogo: BogoConfig::default(),
            display: DisplayConfig::default(),
        }
    }
}

impl VisConfig {
    /// Load configuration from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - File cannot be read
    /// - YAML parsing fails
    /// - Validation fails
    pub fn load<P: AsRef<Path>>(path: P) -> SortResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse configuration from YAML string.
    ///
    /// # Errors
    ///
    /// Returns error if parsing or validation fails.
    pub fn from_yaml(yaml: &str) -> SortResult<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.check()?;
        Ok(config)
    }

    /// Serialize to YAML.
    ///
    /// # Errors
    ///
    /// Returns error if serialization fails.
    pub fn to_yaml(&self) -> SortResult<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Create a builder for configuration.
    #[must_use]
    pub fn builder() -> VisConfigBuilder {
        VisConfigBuilder::default()
    }

    /// Run declarative and semantic validation.
    ///
    /// # Errors
    ///
    /// Returns the first violated constraint.
    pub fn check(&self) -> SortResult<()> {
        self.validate()?;
        self.validate_semantic()
    }

    /// Constraints that span several fields.
    fn validate_semantic(&self) -> SortResult<()> {
        if self.values.min >= self.values.max {
            return Err(SortError::config(format!(
                "value range is empty: min {} must be below max {}",
                self.values.min, self.values.max
            )));
        }

        let span = self.values.span();
        if self.count > span {
            return Err(SortError::config(format!(
                "cannot draw {} distinct values from [{}, {})",
                self.count, self.values.min, self.values.max
            )));
        }

        if !self.delay.is_finite() {
            return Err(SortError::config("delay must be a finite number of seconds"));
        }

        Ok(())
    }

    /// Inter-frame delay as a `Duration`.
    #[must_use]
    pub fn delay_duration(&self) -> Duration {
        Duration::from_secs_f64(self.delay.clamp(0.0, MAX_DELAY_SECS))
    }

    /// Frame generator configured from this file.
    #[must_use]
    pub fn generator(&self) -> FrameGenerator {
        FrameGenerator::new().with_max_bogo_attempts(self.bogo.max_attempts)
    }
}

/// Configuration builder for programmatic construction.
#[derive(Debug, Default)]
pub struct VisConfigBuilder {
    algorithm: Option<Algorithm>,
    count: Option<usize>,
    delay: Option<f64>,
    seed: Option<u64>,
    bogo_max_attempts: Option<u32>,
}

impl VisConfigBuilder {
    /// Set the algorithm.
    #[must_use]
    pub const fn algorithm(mut self, algorithm: Algorithm) -> Self {
        self.algorithm = Some(algorithm);
        self
    }

    /// Set the array length.
    #[must_use]
    pub const fn count(mut self, count: usize) -> Self {
        self.count = Some(count);
        self
    }

    /// Set the inter-frame delay in seconds.
    #[must_use]
    pub const fn delay(mut self, delay: f64) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Set the random seed.
    #[must_use]
    pub const fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the bogo sort shuffle budget.
    #[must_use]
    pub const fn bogo_max_attempts(mut self, attempts: u32) -> Self {
        self.bogo_max_attempts = Some(attempts);
        self
    }

    /// Build the configuration without validating it.
    #[must_use]
    pub fn build(self) -> VisConfig {
        let mut config = VisConfig::default();

        if let Some(algorithm) = self.algorithm {
            config.algorithm = algorithm;
        }
        if let Some(count) = self.count {
            config.count = count;
        }
        if let Some(delay) = self.delay {
            config.delay = delay;
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }
        if let Some(attempts) = self.bogo_max_attempts {
            config.bogo.max_attempts = attempts;
        }

        config
    }
}

/// Half-open range `[min, max)` of generated values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct ValueRange {
    /// Inclusive lower bound.
    #[validate(range(min = MIN_VALUE, max = MAX_VALUE))]
    pub min: i64,
    /// Exclusive upper bound.
    #[validate(range(min = MIN_VALUE, max = MAX_VALUE))]
    pub max: i64,
}

impl Default for ValueRange {
    fn default() -> Self {
        Self { min: 10, max: 100 }
    }
}

impl ValueRange {
    /// Number of distinct values in the range.
    #[must_use]
    pub fn span(&self) -> usize {
        usize::try_from(self.max.saturating_sub(self.min)).unwrap_or(0)
    }

    /// As a `Range`.
    #[must_use]
    pub const fn as_range(&self) -> std::ops::Range<i64> {
        self.min..self.max
    }
}

/// Bogo sort limits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct BogoConfig {
    /// Shuffles allowed before giving up.
    #[serde(default = "default_bogo_attempts")]
    pub max_attempts: u32,
}

const fn default_bogo_attempts() -> u32 {
    DEFAULT_BOGO_MAX_ATTEMPTS
}

impl Default for BogoConfig {
    fn default() -> Self {
        Self {
            max_attempts: default_bogo_attempts(),
        }
    }
}

/// Text output settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct DisplayConfig {
    /// Rows of the text bar chart.
    #[validate(range(min = 1, max = 100))]
    #[serde(default = "default_chart_height")]
    pub chart_height: usize,
    /// Redraw in place with ANSI escapes.
    #[serde(default = "default_true")]
    pub clear_screen: bool,
}

const fn default_chart_height() -> usize {
    16
}

const fn default_true() -> bool {
    true
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            chart_height: default_chart_height(),
            clear_screen: true,
        }
    }
}
