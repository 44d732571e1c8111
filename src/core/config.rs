//! Run-time chart configuration + fluent builder.

use crate::core::{constants::DEFAULT_WIDTH, error::ConfigError, format::ValueFormat};

/// Immutable parameters handed to the chart renderer.
#[derive(Debug, Clone)]
pub struct ChartConfig {
    /// Target maximum block count of a bar.
    pub width: usize,
    pub format: ValueFormat,
    pub suffix: String,
    pub show_labels: bool,
    pub vertical: bool,
    pub stacked: bool,
    /// Normalize every category on its own.
    pub different_scale: bool,
}

impl ChartConfig {
    #[inline]
    #[must_use]
    pub fn builder() -> ChartConfigBuilder {
        ChartConfigBuilder::new()
    }

    /// Text printed after a bar: a space, the formatted value, the suffix.
    #[must_use]
    pub fn tail(&self, value: f64) -> String {
        format!(" {}{}", self.format.format(value), self.suffix)
    }

    /// `"{label}: "`, or nothing when labels are hidden.
    #[must_use]
    pub fn label_prefix(&self, label: &str) -> String {
        if self.show_labels {
            format!("{label}: ")
        } else {
            String::new()
        }
    }
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            format: ValueFormat::default(),
            suffix: String::new(),
            show_labels: true,
            vertical: false,
            stacked: false,
            different_scale: false,
        }
    }
}

/// Fluent builder; starts from the defaults of the command line.
#[derive(Debug)]
pub struct ChartConfigBuilder {
    inner: ChartConfig,
}

impl ChartConfigBuilder {
    pub(crate) fn new() -> Self {
        Self {
            inner: ChartConfig::default(),
        }
    }

    #[inline]
    #[must_use]
    pub fn width(mut self, w: usize) -> Self {
        self.inner.width = w;
        self
    }
    #[inline]
    #[must_use]
    pub fn format(mut self, f: ValueFormat) -> Self {
        self.inner.format = f;
        self
    }
    #[inline]
    #[must_use]
    pub fn suffix(mut self, s: impl Into<String>) -> Self {
        self.inner.suffix = s.into();
        self
    }
    #[inline]
    #[must_use]
    pub fn show_labels(mut self, on: bool) -> Self {
        self.inner.show_labels = on;
        self
    }
    #[inline]
    #[must_use]
    pub fn vertical(mut self, on: bool) -> Self {
        self.inner.vertical = on;
        self
    }
    #[inline]
    #[must_use]
    pub fn stacked(mut self, on: bool) -> Self {
        self.inner.stacked = on;
        self
    }
    #[inline]
    #[must_use]
    pub fn different_scale(mut self, on: bool) -> Self {
        self.inner.different_scale = on;
        self
    }

    pub fn build(self) -> Result<ChartConfig, ConfigError> {
        if self.inner.width == 0 {
            return Err(ConfigError::ZeroWidth);
        }
        Ok(self.inner)
    }
}
