//! 聚合管线端到端测试
//!
//! 以完整 ReportBundle 为单位验证规格场景与不变量。

use chrono::{DateTime, TimeZone, Utc};

use newsgauge::analytics::{
    ArticleRecord, AuthorRecord, ContentCatalog, LogRecord, PipelineOptions, run_pipeline,
};

fn ts(y: i32, m: u32, d: u32, h: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, m, d, h, 0, 0).unwrap()
}

/// 单作者单文章、同一天 3 条日志（2 次 200、1 次 404）
fn single_article_fixture() -> (ContentCatalog, Vec<LogRecord>) {
    let catalog = ContentCatalog {
        authors: vec![AuthorRecord {
            id: 1,
            name: "Ada".to_string(),
        }],
        articles: vec![ArticleRecord {
            id: 1,
            slug: "slug-a".to_string(),
            title: "Title A".to_string(),
            author_id: Some(1),
        }],
    };
    let log = vec![
        LogRecord::new("/article/slug-a", "200 OK", ts(2016, 7, 29, 8)),
        LogRecord::new("/article/slug-a", "200 OK", ts(2016, 7, 29, 12)),
        LogRecord::new("/article/slug-a", "404 NOT FOUND", ts(2016, 7, 29, 18)),
    ];
    (catalog, log)
}

#[test]
fn test_full_bundle_for_single_article_day() {
    let (catalog, log) = single_article_fixture();
    let bundle = run_pipeline(&catalog, &log, &PipelineOptions::default());

    assert_eq!(bundle.top_articles.len(), 1);
    assert_eq!(bundle.top_articles[0].title, "Title A");
    assert_eq!(bundle.top_articles[0].views, 3);

    assert_eq!(bundle.top_authors.len(), 1);
    assert_eq!(bundle.top_authors[0].author, "Ada");
    assert_eq!(bundle.top_authors[0].total_views, 3);

    assert_eq!(bundle.error_days.len(), 1);
    assert!((bundle.error_days[0].error_rate - 1.0 / 3.0).abs() < 1e-9);

    assert_eq!(bundle.skipped_log_entries, 0);
}

#[test]
fn test_empty_log_still_enumerates_catalog() {
    let (catalog, _) = single_article_fixture();
    let bundle = run_pipeline(&catalog, &[], &PipelineOptions::default());

    // 日志为空：流量/错误报表为空，但目录仍以 0 计数出现
    assert!(bundle.error_days.is_empty());
    assert_eq!(bundle.top_articles.len(), 1);
    assert_eq!(bundle.top_articles[0].views, 0);
    assert_eq!(bundle.top_authors.len(), 1);
    assert_eq!(bundle.top_authors[0].total_views, 0);
}

#[test]
fn test_empty_catalog_and_log() {
    let bundle = run_pipeline(
        &ContentCatalog::default(),
        &[],
        &PipelineOptions::default(),
    );
    assert!(bundle.top_articles.is_empty());
    assert!(bundle.top_authors.is_empty());
    assert!(bundle.error_days.is_empty());
}

#[test]
fn test_missing_timestamps_are_skipped_and_counted() {
    let (catalog, mut log) = single_article_fixture();
    log.push(LogRecord {
        path: "/article/slug-a".to_string(),
        status: "200 OK".to_string(),
        time: None,
    });

    let bundle = run_pipeline(&catalog, &log, &PipelineOptions::default());
    assert_eq!(bundle.skipped_log_entries, 1);
    // 被剔除的行不计入任何视图：流量日仍然只有 3 条
    assert_eq!(bundle.top_articles[0].views, 3);
}

#[test]
fn test_pipeline_is_idempotent() {
    let (catalog, log) = single_article_fixture();
    let options = PipelineOptions::default();

    let first = run_pipeline(&catalog, &log, &options);
    let second = run_pipeline(&catalog, &log, &options);
    assert_eq!(first, second);
}

#[test]
fn test_top_n_is_respected() {
    let catalog = ContentCatalog {
        authors: vec![AuthorRecord {
            id: 1,
            name: "Ada".to_string(),
        }],
        articles: (0..5)
            .map(|i| ArticleRecord {
                id: i,
                slug: format!("slug-{}", i),
                title: format!("Title {}", i),
                author_id: Some(1),
            })
            .collect(),
    };
    let log: Vec<LogRecord> = (0..5)
        .flat_map(|i| {
            (0..=i).map(move |j| {
                LogRecord::new(
                    format!("/article/slug-{}", i),
                    "200 OK",
                    ts(2016, 7, 1, j as u32),
                )
            })
        })
        .collect();

    let options = PipelineOptions {
        top_articles: 3,
        ..Default::default()
    };
    let bundle = run_pipeline(&catalog, &log, &options);

    assert_eq!(bundle.top_articles.len(), 3);
    // 降序排列
    assert_eq!(bundle.top_articles[0].views, 5);
    assert_eq!(bundle.top_articles[1].views, 4);
    assert_eq!(bundle.top_articles[2].views, 3);
    // 作者总量守恒：5 篇文章的计数全部归并到同一作者
    assert_eq!(bundle.top_authors[0].total_views, 5 + 4 + 3 + 2 + 1);
}

#[test]
fn test_error_days_across_multiple_days() {
    let catalog = ContentCatalog::default();
    let mut log = Vec::new();

    // 7 月 1 日：100 条请求 1 条错误（1% 整，不入选）
    for h in 0..10 {
        for i in 0..10 {
            let status = if h == 0 && i == 0 { "500 ERROR" } else { "200 OK" };
            log.push(LogRecord::new(
                format!("/page/{}", i),
                status,
                ts(2016, 7, 1, h),
            ));
        }
    }
    // 7 月 2 日：50 条请求 2 条错误（4%，入选）
    for i in 0..50 {
        let status = if i < 2 { "404 NOT FOUND" } else { "200 OK" };
        log.push(LogRecord::new(
            format!("/page/{}", i),
            status,
            ts(2016, 7, 2, 12),
        ));
    }

    let bundle = run_pipeline(&catalog, &log, &PipelineOptions::default());
    assert_eq!(bundle.error_days.len(), 1);
    assert_eq!(
        bundle.error_days[0].day,
        chrono::NaiveDate::from_ymd_opt(2016, 7, 2).unwrap()
    );
    assert!((bundle.error_days[0].error_rate - 0.04).abs() < 1e-9);
}

#[test]
fn test_bundle_serializes_to_json() {
    let (catalog, log) = single_article_fixture();
    let bundle = run_pipeline(&catalog, &log, &PipelineOptions::default());

    let json = serde_json::to_value(&bundle).unwrap();
    assert_eq!(json["top_articles"][0]["title"], "Title A");
    assert_eq!(json["top_authors"][0]["total_views"], 3);
    assert_eq!(json["skipped_log_entries"], 0);
}
