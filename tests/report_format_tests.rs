//! 报表渲染测试
//!
//! 覆盖计数/百分比/日期格式化与整体文本渲染。

use chrono::NaiveDate;

use newsgauge::analytics::{PipelineOptions, ReportBundle};
use newsgauge::analytics::reports::{ArticleViews, AuthorViews, ErrorDay};
use newsgauge::interfaces::cli::commands::{
    format_count, format_day, format_percent, render_bundle,
};

#[test]
fn test_format_count_thousands_separator() {
    assert_eq!(format_count(0), "0");
    assert_eq!(format_count(999), "999");
    assert_eq!(format_count(1000), "1,000");
    assert_eq!(format_count(1334), "1,334");
    assert_eq!(format_count(1_234_567), "1,234,567");
}

#[test]
fn test_format_percent_two_decimals() {
    assert_eq!(format_percent(0.01), "1.00%");
    assert_eq!(format_percent(0.0226), "2.26%");
    assert_eq!(format_percent(1.0 / 3.0), "33.33%");
}

#[test]
fn test_format_day_long_form() {
    let day = NaiveDate::from_ymd_opt(2016, 7, 29).unwrap();
    assert_eq!(format_day(day), "July 29, 2016");
}

#[test]
fn test_render_bundle_sections() {
    colored::control::set_override(false);

    let bundle = ReportBundle {
        top_articles: vec![ArticleViews {
            title: "Title A".to_string(),
            views: 1334,
        }],
        top_authors: vec![AuthorViews {
            author: "Ada".to_string(),
            total_views: 1334,
        }],
        error_days: vec![ErrorDay {
            day: NaiveDate::from_ymd_opt(2016, 7, 29).unwrap(),
            error_rate: 0.0226,
        }],
        skipped_log_entries: 2,
    };
    let rendered = render_bundle(&bundle, &PipelineOptions::default());

    assert!(rendered.contains("Top 3 articles of all time:"));
    assert!(rendered.contains("1. \"Title A\" - 1,334 views"));
    assert!(rendered.contains("Top authors of all time:"));
    assert!(rendered.contains("1. Ada - 1,334 views"));
    assert!(rendered.contains("Days with greater than 1.00% error rate:"));
    assert!(rendered.contains("July 29, 2016 - 2.26% errors"));
    assert!(rendered.contains("Skipped 2 log entries"));
}

#[test]
fn test_render_bundle_empty_reports() {
    colored::control::set_override(false);

    let bundle = ReportBundle {
        top_articles: vec![],
        top_authors: vec![],
        error_days: vec![],
        skipped_log_entries: 0,
    };
    let rendered = render_bundle(&bundle, &PipelineOptions::default());

    assert!(rendered.contains("(no articles)"));
    assert!(rendered.contains("(no authors)"));
    assert!(rendered.contains("(none)"));
    assert!(!rendered.contains("Skipped"));
}
