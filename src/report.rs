//! Report lines for constructed tours.

use serde::Serialize;

use crate::config::OutputFormat;
use crate::constructive::Heuristic;
use crate::models::Tour;

/// Minimum width of the heuristic column in text output.
pub const LABEL_WIDTH: usize = 10;

/// Outcome of one heuristic run: the label it was requested under, its
/// total cycle length, and the normalized visiting order.
///
/// # Examples
///
/// ```
/// use u_tour::constructive::Heuristic;
/// use u_tour::report::TourReport;
///
/// let report = TourReport::from_parts(
///     "-given",
///     Heuristic::Given,
///     12.5,
///     vec!["A".into(), "B".into()],
/// );
/// assert_eq!(report.to_text_line(), "-given    :        12.50 A B A");
/// assert_eq!(report.closed_order(), vec!["A", "B", "A"]);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct TourReport {
    label: String,
    heuristic: Heuristic,
    total_length: f64,
    order: Vec<String>,
}

#[derive(Serialize)]
struct JsonLine<'a> {
    heuristic: Heuristic,
    total_length: f64,
    order: Vec<&'a str>,
}

impl TourReport {
    /// Builds a report for a finished tour.
    pub fn new(label: impl Into<String>, heuristic: Heuristic, total_length: f64, tour: &Tour) -> Self {
        let order = tour.names().into_iter().map(str::to_string).collect();
        Self::from_parts(label, heuristic, total_length, order)
    }

    /// Builds a report from raw parts.
    pub fn from_parts(
        label: impl Into<String>,
        heuristic: Heuristic,
        total_length: f64,
        order: Vec<String>,
    ) -> Self {
        Self {
            label: label.into(),
            heuristic,
            total_length,
            order,
        }
    }

    /// Label the heuristic was requested under (e.g. `-nearest`).
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Total length of the closed tour.
    pub fn total_length(&self) -> f64 {
        self.total_length
    }

    /// City names in tour order.
    pub fn order(&self) -> &[String] {
        &self.order
    }

    /// City names in tour order, with the first repeated at the end.
    pub fn closed_order(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.order.iter().map(String::as_str).collect();
        if let Some(first) = self.order.first() {
            names.push(first);
        }
        names
    }

    /// Formats the aligned text line, without a trailing newline.
    pub fn to_text_line(&self) -> String {
        format!(
            "{:<width$}: {:>12.2} {}",
            self.label,
            self.total_length,
            self.closed_order().join(" "),
            width = LABEL_WIDTH
        )
    }

    /// Formats a single-line JSON object.
    pub fn to_json_line(&self) -> serde_json::Result<String> {
        serde_json::to_string(&JsonLine {
            heuristic: self.heuristic,
            total_length: self.total_length,
            order: self.closed_order(),
        })
    }

    /// Formats the line for `format`.
    pub fn render(&self, format: OutputFormat) -> serde_json::Result<String> {
        match format {
            OutputFormat::Text => Ok(self.to_text_line()),
            OutputFormat::Json => self.to_json_line(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> TourReport {
        TourReport::from_parts(
            "-nearest",
            Heuristic::Nearest,
            1234.567,
            vec!["HVN".into(), "BDL".into(), "ALB".into()],
        )
    }

    #[test]
    fn test_text_line() {
        assert_eq!(
            sample().to_text_line(),
            "-nearest  :      1234.57 HVN BDL ALB HVN"
        );
    }

    #[test]
    fn test_text_line_long_label_not_truncated() {
        let r = TourReport::from_parts("-nearestneighbor", Heuristic::Nearest, 1.0, vec!["A".into()]);
        assert!(r.to_text_line().starts_with("-nearestneighbor: "));
    }

    #[test]
    fn test_json_line() {
        let json = sample().to_json_line().expect("serialize");
        let value: serde_json::Value = serde_json::from_str(&json).expect("parse");
        assert_eq!(value["heuristic"], "nearest");
        assert_eq!(value["order"], serde_json::json!(["HVN", "BDL", "ALB", "HVN"]));
        assert!((value["total_length"].as_f64().expect("number") - 1234.567).abs() < 1e-9);
    }

    #[test]
    fn test_render() {
        let r = sample();
        assert_eq!(r.render(OutputFormat::Text).expect("text"), r.to_text_line());
        assert_eq!(
            r.render(OutputFormat::Json).expect("json"),
            r.to_json_line().expect("json")
        );
    }

    #[test]
    fn test_closed_order_empty() {
        let r = TourReport::from_parts("-given", Heuristic::Given, 0.0, Vec::new());
        assert!(r.closed_order().is_empty());
    }
}
