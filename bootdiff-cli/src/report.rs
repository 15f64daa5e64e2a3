//! Report Rendering
//!
//! Human-readable and JSON output for both procedures. The human text for
//! the interval procedure mirrors the classic tool's report line for line.

use crate::input::SampleGroup;
use bootdiff_stats::{CiConfig, DiffCiResult, PermutationResult};
use serde::Serialize;

/// Output format selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Machine-readable JSON.
    Json,
    /// Human-readable terminal output.
    Human,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(OutputFormat::Json),
            "human" | "text" => Ok(OutputFormat::Human),
            other => Err(format!("Unknown output format: {}", other)),
        }
    }
}

/// Confidence-interval report.
#[derive(Debug, Clone, Serialize)]
pub struct IntervalReport {
    /// Name of group `a`.
    pub group_a: String,
    /// Name of group `b`.
    pub group_b: String,
    /// Number of bootstrap iterations performed.
    pub num_resamples: usize,
    /// Confidence level the bounds were computed for.
    pub confidence_level: f64,
    /// Observed difference of means, `mean(b) - mean(a)`.
    pub observed: f64,
    /// Lower end of the interval.
    pub lower: f64,
    /// Upper end of the interval.
    pub upper: f64,
    /// Bootstrap statistics strictly below the observed value.
    pub num_below_observed: usize,
    /// Bias-correction term `z_0`.
    pub bias_correction: f64,
    /// Set when percentile indices were clamped into range.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
}

impl IntervalReport {
    /// Assemble a report from the driver result.
    pub fn new(a: &SampleGroup, b: &SampleGroup, config: &CiConfig, result: &DiffCiResult) -> Self {
        Self {
            group_a: a.name.clone(),
            group_b: b.name.clone(),
            num_resamples: config.num_resamples,
            confidence_level: config.confidence_level,
            observed: result.observed,
            lower: result.interval.lower,
            upper: result.interval.upper,
            num_below_observed: result.num_below_observed,
            bias_correction: result.bias_correction,
            warning: result.warning.clone(),
        }
    }
}

/// Permutation-test report.
#[derive(Debug, Clone, Serialize)]
pub struct PermutationReport {
    /// Name of group `a`.
    pub group_a: String,
    /// Name of group `b`.
    pub group_b: String,
    /// Number of shuffle experiments performed.
    pub num_shuffles: usize,
    /// Observed difference of means, `mean(b) - mean(a)`.
    pub observed: f64,
    /// Experiments with a difference at least as large as the observed one.
    pub num_as_extreme: usize,
    /// One-tailed p-value.
    pub p_value: f64,
}

impl PermutationReport {
    /// Assemble a report from the driver result.
    pub fn new(a: &SampleGroup, b: &SampleGroup, result: &PermutationResult) -> Self {
        Self {
            group_a: a.name.clone(),
            group_b: b.name.clone(),
            num_shuffles: result.num_shuffles,
            observed: result.observed,
            num_as_extreme: result.num_as_extreme,
            p_value: result.p_value,
        }
    }
}

/// Format the confidence level as a percentage without float noise.
fn format_percent(level: f64) -> String {
    let pct = level * 100.0;
    if (pct - pct.round()).abs() < 1e-6 {
        format!("{:.0}", pct)
    } else {
        format!("{:.1}", pct)
    }
}

/// Render an interval report for terminal display.
pub fn format_interval_human(report: &IntervalReport) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "Observed difference between the means: {:.2}\n",
        report.observed
    ));
    out.push_str(&format!(
        "We have {}% confidence that the true difference between the means is between: {:.2} and {:.2}",
        format_percent(report.confidence_level),
        report.lower,
        report.upper
    ));
    if let Some(warning) = &report.warning {
        out.push_str(&format!("\nWarning: {}", warning));
    }
    out
}

/// Render a permutation report for terminal display.
pub fn format_permutation_human(report: &PermutationReport) -> String {
    format!(
        "Observed difference of two means: {:.2}\n\
         {} out of {} experiments had a difference of two means greater than or equal to {:.2}\n\
         The chance of getting a difference of two means greater than or equal to {:.2} is {:.4}",
        report.observed,
        report.num_as_extreme,
        report.num_shuffles,
        report.observed,
        report.observed,
        report.p_value
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_interval_report() -> IntervalReport {
        IntervalReport {
            group_a: "placebo_vals".to_string(),
            group_b: "drug_vals".to_string(),
            num_resamples: 10_000,
            confidence_level: 0.9,
            observed: 12.97,
            lower: 7.81,
            upper: 18.11,
            num_below_observed: 5_018,
            bias_correction: 0.0,
            warning: None,
        }
    }

    #[test]
    fn test_interval_human_output() {
        let rendered = format_interval_human(&sample_interval_report());
        assert_eq!(
            rendered,
            "Observed difference between the means: 12.97\n\
             We have 90% confidence that the true difference between the means \
             is between: 7.81 and 18.11"
        );
    }

    #[test]
    fn test_interval_human_output_with_warning() {
        let mut report = sample_interval_report();
        report.warning = Some("indices clamped".to_string());
        let rendered = format_interval_human(&report);
        assert!(rendered.ends_with("Warning: indices clamped"));
    }

    #[test]
    fn test_percent_formatting() {
        assert_eq!(format_percent(0.9), "90");
        assert_eq!(format_percent(0.95), "95");
        assert_eq!(format_percent(0.925), "92.5");
    }

    #[test]
    fn test_permutation_human_output() {
        let report = PermutationReport {
            group_a: "a".to_string(),
            group_b: "b".to_string(),
            num_shuffles: 10_000,
            observed: 12.97,
            num_as_extreme: 7,
            p_value: 0.0007,
        };
        let rendered = format_permutation_human(&report);
        assert!(rendered.starts_with("Observed difference of two means: 12.97\n"));
        assert!(rendered.contains("7 out of 10000 experiments"));
        assert!(rendered.ends_with("is 0.0007"));
    }

    #[test]
    fn test_json_serialization_skips_absent_warning() {
        let json = serde_json::to_string(&sample_interval_report()).unwrap();
        assert!(json.contains("\"observed\":12.97"));
        assert!(!json.contains("warning"));
    }

    #[test]
    fn test_output_format_parsing() {
        assert_eq!("json".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert_eq!(
            "Human".parse::<OutputFormat>().unwrap(),
            OutputFormat::Human
        );
        assert!("csv".parse::<OutputFormat>().is_err());
    }
}
