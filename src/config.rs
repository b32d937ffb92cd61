//! Run configuration.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::distance::MetricKind;

/// How report lines are written.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// `<flag> : <total> <names...> <first>` aligned text.
    #[default]
    Text,
    /// One JSON object per line.
    Json,
}

/// Settings for one invocation.
///
/// # Examples
///
/// ```
/// use u_tour::config::{OutputFormat, TourConfig};
/// use u_tour::distance::MetricKind;
///
/// let config = TourConfig::new()
///     .with_metric(MetricKind::Planar)
///     .with_format(OutputFormat::Json);
/// assert_eq!(config.metric(), MetricKind::Planar);
/// assert_eq!(config.format(), OutputFormat::Json);
/// assert!(!config.verbose());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TourConfig {
    metric: MetricKind,
    format: OutputFormat,
    verbose: bool,
}

impl TourConfig {
    /// Great-circle distances, text output, quiet logging.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the distance metric.
    pub fn with_metric(mut self, metric: MetricKind) -> Self {
        self.metric = metric;
        self
    }

    /// Sets the output format.
    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    /// Enables debug logging.
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Distance metric.
    pub fn metric(&self) -> MetricKind {
        self.metric
    }

    /// Output format.
    pub fn format(&self) -> OutputFormat {
        self.format
    }

    /// Whether debug logging is on.
    pub fn verbose(&self) -> bool {
        self.verbose
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let c = TourConfig::default();
        assert_eq!(c.metric(), MetricKind::GreatCircle);
        assert_eq!(c.format(), OutputFormat::Text);
        assert!(!c.verbose());
        assert_eq!(c, TourConfig::new());
    }

    #[test]
    fn test_builder() {
        let c = TourConfig::new().with_verbose(true).with_metric(MetricKind::Planar);
        assert!(c.verbose());
        assert_eq!(c.metric(), MetricKind::Planar);
        assert_eq!(c.format(), OutputFormat::Text);
    }
}
