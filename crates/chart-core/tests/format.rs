// File: crates/chart-core/tests/format.rs
// Purpose: Axis labels, percent and dollar formatting, and header/tooltip text.

use chart_core::format::{grouped_dollars, signed_percent};
use chart_core::{
    ChartConfig, ChartController, HeaderText, LabelFormat, Sample, TimeFormat, TimeRange, TooltipText,
};

// 2024-03-01T12:34:56Z
const NOON_ISH: i64 = 1_709_296_496_000;

#[test]
fn currency_and_thousands_labels() {
    assert_eq!(LabelFormat::Currency.format(110.0), "$110.00");
    assert_eq!(LabelFormat::Currency.format(94.456), "$94.46");
    assert_eq!(LabelFormat::Thousands.format(12_499.0), "$12k");
    assert_eq!(LabelFormat::Thousands.format(125_600.0), "$126k");
}

#[test]
fn detail_values_are_not_abbreviated() {
    assert_eq!(LabelFormat::Currency.format_detail(94.456), "$94.46");
    assert_eq!(LabelFormat::Thousands.format_detail(125_600.0), "$125,600");
}

#[test]
fn percent_sign_rules() {
    assert_eq!(signed_percent(0.0), "+0.00%");
    assert_eq!(signed_percent(-0.0), "+0.00%");
    assert_eq!(signed_percent(1.234), "+1.23%");
    assert_eq!(signed_percent(-10.0), "-10.00%");
}

#[test]
fn grouping() {
    assert_eq!(grouped_dollars(0.0), "$0");
    assert_eq!(grouped_dollars(999.4), "$999");
    assert_eq!(grouped_dollars(12_345.0), "$12,345");
    assert_eq!(grouped_dollars(1_234_567.8), "$1,234,568");
    assert_eq!(grouped_dollars(-4_200.0), "-$4,200");
}

#[test]
fn timestamps_render_in_utc() {
    assert_eq!(TimeFormat::Time.format(NOON_ISH).as_deref(), Some("12:34:56"));
    assert_eq!(TimeFormat::Date.format(NOON_ISH).as_deref(), Some("2024-03-01"));
}

#[test]
fn time_range_labels_and_config_names() {
    assert_eq!(TimeRange::Day.label(), "24 Hours");
    assert_eq!(TimeRange::All.label(), "All Time");
    let cfg: ChartConfig = serde_json::from_str(r#"{ "time_range": "7D" }"#).expect("parse");
    assert_eq!(cfg.time_range, Some(TimeRange::Week));
    assert_eq!(ChartConfig::portfolio().time_range, Some(TimeRange::Month));
    assert_eq!(ChartConfig::price().time_range, None);
}

#[test]
fn header_text_from_portfolio_summary() {
    let mut ctl = ChartController::new(ChartConfig::portfolio()).expect("config");
    ctl.replace([Sample::new(0, 10_000.0), Sample::new(1, 12_500.0)]);
    let model = ctl.render_model();
    let ready = model.as_ready().expect("ready");

    let header = HeaderText::new(&ready.summary, LabelFormat::Thousands, Some(TimeRange::Month));
    assert_eq!(header.value, "$12,500");
    assert_eq!(header.change, "+25.00%");
    assert_eq!(header.caption.as_deref(), Some("1 Month \u{2022} 2 data points"));

    let bare = HeaderText::new(&ready.summary, LabelFormat::Currency, None);
    assert_eq!(bare.value, "$12500.00");
    assert_eq!(bare.caption, None);
}

#[test]
fn tooltip_text_carries_change_only_when_present() {
    let portfolio = TooltipText::new(
        &Sample::with_change(NOON_ISH, 12_345.0, -1.5),
        TimeFormat::Date,
        LabelFormat::Thousands,
    );
    assert_eq!(portfolio.time, "2024-03-01");
    assert_eq!(portfolio.value, "$12,345");
    assert_eq!(portfolio.change.as_deref(), Some("-1.50%"));

    let price = TooltipText::new(&Sample::new(NOON_ISH, 110.0), TimeFormat::Time, LabelFormat::Currency);
    assert_eq!(price.time, "12:34:56");
    assert_eq!(price.value, "$110.00");
    assert_eq!(price.change, None);
}
