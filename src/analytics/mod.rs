//! 报表聚合模块
//!
//! 从内容目录（authors/articles）与访问日志两个输入集合推导四个中间视图，
//! 并生成三份报表：热门文章、热门作者、错误率超标日。
//! 所有视图均为每次运行重新计算的临时值，不做任何持久化。

pub mod pipeline;
pub mod reports;
pub mod views;

pub use pipeline::{PipelineOptions, ReportBundle, run_pipeline};
pub use reports::{ArticleViews, AuthorViews, ErrorDay};
pub use views::{AuthorArticleRow, DailyErrorRow, DailyTrafficRow, PopularityRow};

use chrono::{DateTime, NaiveDate, Utc};

/// 作者记录
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthorRecord {
    pub id: i64,
    pub name: String,
}

/// 文章记录
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleRecord {
    pub id: i64,
    /// URL slug，日志路径通过子串匹配关联到它
    pub slug: String,
    pub title: String,
    /// 作者外键；可能悬空或缺失（视图层做左连接）
    pub author_id: Option<i64>,
}

/// 原始访问日志记录
///
/// status 保持文本形式（如 "200 OK" / "404 NOT FOUND"），
/// time 可能缺失，由管线校验阶段剔除并计数。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogRecord {
    pub path: String,
    pub status: String,
    pub time: Option<DateTime<Utc>>,
}

impl LogRecord {
    pub fn new(
        path: impl Into<String>,
        status: impl Into<String>,
        time: DateTime<Utc>,
    ) -> Self {
        Self {
            path: path.into(),
            status: status.into(),
            time: Some(time),
        }
    }
}

/// 内容目录快照（管线的左侧输入）
#[derive(Debug, Clone, Default)]
pub struct ContentCatalog {
    pub authors: Vec<AuthorRecord>,
    pub articles: Vec<ArticleRecord>,
}

/// 将时间戳截断到当天
pub fn truncate_to_day(ts: DateTime<Utc>) -> NaiveDate {
    ts.date_naive()
}
