//! Report command
//!
//! Loads the catalog and access log through `ReportSource`, runs the
//! aggregation pipeline and renders the three reports as rank-numbered
//! lists.

use std::sync::Arc;

use chrono::NaiveDate;
use colored::Colorize;

use crate::analytics::{PipelineOptions, ReportBundle, run_pipeline};
use crate::interfaces::cli::CliError;
use crate::storage::ReportSource;

pub async fn generate_report(
    source: Arc<dyn ReportSource>,
    options: PipelineOptions,
    json: bool,
) -> Result<(), CliError> {
    let catalog = source
        .load_catalog()
        .await
        .map_err(|e| CliError::StorageError(e.to_string()))?;
    let log = source
        .load_log()
        .await
        .map_err(|e| CliError::StorageError(e.to_string()))?;

    let bundle = run_pipeline(&catalog, &log, &options);

    if json {
        let rendered = serde_json::to_string_pretty(&bundle)
            .map_err(|e| CliError::CommandError(format!("Failed to serialize report: {}", e)))?;
        println!("{}", rendered);
        return Ok(());
    }

    print!("{}", render_bundle(&bundle, &options));
    Ok(())
}

/// 渲染三份报表为人类可读文本
pub fn render_bundle(bundle: &ReportBundle, options: &PipelineOptions) -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "\n{}\n",
        format!("Top {} articles of all time:", options.top_articles)
            .bold()
            .green()
    ));
    if bundle.top_articles.is_empty() {
        out.push_str("  (no articles)\n");
    }
    for (i, article) in bundle.top_articles.iter().enumerate() {
        out.push_str(&format!(
            "  {}. \"{}\" - {} views\n",
            i + 1,
            article.title.cyan(),
            format_count(article.views)
        ));
    }

    out.push_str(&format!("\n{}\n", "Top authors of all time:".bold().green()));
    if bundle.top_authors.is_empty() {
        out.push_str("  (no authors)\n");
    }
    for (i, author) in bundle.top_authors.iter().enumerate() {
        out.push_str(&format!(
            "  {}. {} - {} views\n",
            i + 1,
            author.author.cyan(),
            format_count(author.total_views)
        ));
    }

    out.push_str(&format!(
        "\n{}\n",
        format!(
            "Days with greater than {} error rate:",
            format_percent(options.error_rate_threshold)
        )
        .bold()
        .green()
    ));
    if bundle.error_days.is_empty() {
        out.push_str("  (none)\n");
    }
    for day in &bundle.error_days {
        out.push_str(&format!(
            "  {} - {} errors\n",
            format_day(day.day),
            format_percent(day.error_rate).yellow()
        ));
    }

    if bundle.skipped_log_entries > 0 {
        out.push_str(&format!(
            "\n{} Skipped {} log entries without a timestamp\n",
            "⚠".bold().yellow(),
            bundle.skipped_log_entries
        ));
    }

    out
}

/// 千位分隔计数格式（1334 -> "1,334"）
pub fn format_count(count: u64) -> String {
    let digits = count.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// 比值转百分比文本（0.0226 -> "2.26%"）
pub fn format_percent(rate: f64) -> String {
    format!("{:.2}%", rate * 100.0)
}

/// 长日期格式（"July 29, 2016"）
pub fn format_day(day: NaiveDate) -> String {
    day.format("%B %d, %Y").to_string()
}
