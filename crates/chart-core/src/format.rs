// File: crates/chart-core/src/format.rs
// Summary: View-side label formatting for axis values, percent change, tooltip times,
// and the header/tooltip text a host paints around the plot.

use chrono::DateTime;
use serde::{Deserialize, Serialize};

use crate::controller::Summary;
use crate::types::Sample;

/// Axis label style.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LabelFormat {
    /// `$1234.56`
    #[default]
    Currency,
    /// `$12k`
    Thousands,
}

impl LabelFormat {
    pub fn format(&self, value: f64) -> String {
        match self {
            LabelFormat::Currency => format!("${value:.2}"),
            LabelFormat::Thousands => format!("${:.0}k", value / 1000.0),
        }
    }

    /// Full value for headers and tooltips. Thousands-style charts show whole
    /// grouped dollars (`$12,345`) rather than the abbreviated axis label.
    pub fn format_detail(&self, value: f64) -> String {
        match self {
            LabelFormat::Currency => self.format(value),
            LabelFormat::Thousands => grouped_dollars(value),
        }
    }
}

/// Tooltip timestamp style.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimeFormat {
    /// `14:05:09`
    #[default]
    Time,
    /// `2024-03-01`
    Date,
}

impl TimeFormat {
    fn pattern(&self) -> &'static str {
        match self {
            TimeFormat::Time => "%H:%M:%S",
            TimeFormat::Date => "%Y-%m-%d",
        }
    }

    /// UTC rendering of epoch millis; `None` when out of chrono's range.
    pub fn format(&self, timestamp_ms: i64) -> Option<String> {
        let dt = DateTime::from_timestamp_millis(timestamp_ms)?;
        Some(dt.format(self.pattern()).to_string())
    }
}

/// Range selector shown in the portfolio header.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimeRange {
    #[serde(rename = "1D")]
    Day,
    #[serde(rename = "7D")]
    Week,
    #[default]
    #[serde(rename = "1M")]
    Month,
    #[serde(rename = "3M")]
    Quarter,
    #[serde(rename = "1Y")]
    Year,
    #[serde(rename = "ALL")]
    All,
}

impl TimeRange {
    pub fn label(&self) -> &'static str {
        match self {
            TimeRange::Day => "24 Hours",
            TimeRange::Week => "7 Days",
            TimeRange::Month => "1 Month",
            TimeRange::Quarter => "3 Months",
            TimeRange::Year => "1 Year",
            TimeRange::All => "All Time",
        }
    }
}

/// `+1.25%` / `-0.40%`. Zero counts as positive.
pub fn signed_percent(pct: f64) -> String {
    // -0.0 would print as "+-0.00%"
    let pct = if pct == 0.0 { 0.0 } else { pct };
    if pct >= 0.0 { format!("+{pct:.2}%") } else { format!("{pct:.2}%") }
}

/// Whole-dollar amount with thousands separators: `$12,345`.
pub fn grouped_dollars(value: f64) -> String {
    let rounded = value.round();
    let digits = format!("{}", rounded.abs() as u128);
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if rounded < 0.0 { format!("-${grouped}") } else { format!("${grouped}") }
}

/// Header text: current value, change over the window, and an optional
/// range caption such as `1 Month • 30 data points`.
#[derive(Clone, Debug, PartialEq)]
pub struct HeaderText {
    pub value: String,
    pub change: String,
    pub caption: Option<String>,
}

impl HeaderText {
    pub fn new(summary: &Summary, labels: LabelFormat, range: Option<TimeRange>) -> Self {
        Self {
            value: labels.format_detail(summary.last_value),
            change: signed_percent(summary.change_percent),
            caption: range.map(|r| format!("{} \u{2022} {} data points", r.label(), summary.count)),
        }
    }
}

/// Tooltip text for the hovered sample. `change` is only present for
/// samples that carry a per-period change.
#[derive(Clone, Debug, PartialEq)]
pub struct TooltipText {
    pub time: String,
    pub value: String,
    pub change: Option<String>,
}

impl TooltipText {
    pub fn new(sample: &Sample, time: TimeFormat, labels: LabelFormat) -> Self {
        Self {
            time: time.format(sample.timestamp).unwrap_or_else(|| sample.timestamp.to_string()),
            value: labels.format_detail(sample.value),
            change: sample.change_percent.map(signed_percent),
        }
    }
}
