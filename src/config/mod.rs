//! Configuration for the console report.

/// Configuration for rendering a roster report
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportConfig {
    /// Line printed before the member descriptions
    pub header: String,
    /// Label printed in front of the average age
    pub average_label: String,
    /// Fixed number of decimals for the average, or `None` for the shortest
    /// representation that round-trips
    pub average_precision: Option<usize>,
}

impl ReportConfig {
    /// Set a fixed number of decimals for the average age
    #[must_use]
    pub fn with_precision(mut self, precision: usize) -> Self {
        self.average_precision = Some(precision);
        self
    }

    /// Format an average age according to this configuration
    ///
    /// Without a precision the value uses `f64`'s `Display`, so `30.0` is
    /// written as `30` and `30.5` as `30.5`.
    #[must_use]
    pub fn format_average(&self, value: f64) -> String {
        match self.average_precision {
            Some(precision) => format!("{value:.precision$}"),
            None => format!("{value}"),
        }
    }
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            header: "Family Members:".to_string(),
            average_label: "Average Age".to_string(),
            average_precision: None,
        }
    }
}
