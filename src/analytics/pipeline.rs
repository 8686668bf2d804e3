//! 聚合管线编排
//!
//! 按依赖顺序执行视图构建与报表投影：
//! 目录 → AuthorArticleView → PopularityView → TopArticles / TopAuthors
//! 日志 → DailyTrafficView → DailyErrorView → ErrorDays
//!
//! 纯函数：同一输入重复运行产出相同结果，三份报表共用派生视图、一并计算。

use serde::Serialize;
use tracing::debug;

use super::reports::{self, ArticleViews, AuthorViews, ErrorDay};
use super::views;
use super::{ContentCatalog, LogRecord};

/// 管线参数
#[derive(Debug, Clone, Copy)]
pub struct PipelineOptions {
    /// 热门文章榜单长度
    pub top_articles: usize,
    /// 错误率阈值（比值），严格大于才入选
    pub error_rate_threshold: f64,
}

impl Default for PipelineOptions {
    fn default() -> Self {
        Self {
            top_articles: 3,
            error_rate_threshold: 0.01,
        }
    }
}

/// 一次报表运行的全部产出
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportBundle {
    pub top_articles: Vec<ArticleViews>,
    pub top_authors: Vec<AuthorViews>,
    pub error_days: Vec<ErrorDay>,
    /// 因缺失时间戳被剔除的日志行数
    pub skipped_log_entries: usize,
}

/// 运行完整聚合管线
pub fn run_pipeline(
    catalog: &ContentCatalog,
    log: &[LogRecord],
    options: &PipelineOptions,
) -> ReportBundle {
    let (valid_log, skipped_log_entries) = views::validate_log(log);

    let author_article_view = views::build_author_article_view(&catalog.articles, &catalog.authors);
    let daily_traffic_view = views::build_daily_traffic_view(&valid_log);
    let popularity_view = views::build_popularity_view(&author_article_view, &valid_log);
    let daily_error_view = views::build_daily_error_view(&valid_log, &daily_traffic_view);

    debug!(
        "Views built: {} author/article rows, {} popularity rows, {} traffic days",
        author_article_view.len(),
        popularity_view.len(),
        daily_traffic_view.len()
    );

    ReportBundle {
        top_articles: reports::top_articles(&popularity_view, options.top_articles),
        top_authors: reports::top_authors(&popularity_view),
        error_days: reports::error_days(
            &daily_traffic_view,
            &daily_error_view,
            options.error_rate_threshold,
        ),
        skipped_log_entries,
    }
}
