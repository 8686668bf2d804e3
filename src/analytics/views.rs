//! 视图构建阶段（join / group）
//!
//! 四个派生视图：author_article_view、author_article_popularity_view、
//! daily_traffic_view、daily_error_view。
//! 全部为纯函数，输出顺序对同一输入保持确定。

use std::collections::HashMap;

use chrono::{DateTime, NaiveDate, Utc};
use tracing::debug;

use super::{ArticleRecord, AuthorRecord, LogRecord, truncate_to_day};

/// 作者-文章视图行（Article 左连接 Author）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthorArticleRow {
    /// 作者名；外键悬空时为空字符串，文章不丢弃
    pub author: String,
    pub slug: String,
    pub title: String,
}

/// 文章热度视图行，按 (title, author) 分组
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PopularityRow {
    pub author: String,
    pub title: String,
    pub views: u64,
}

/// 每日流量视图行
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DailyTrafficRow {
    pub day: NaiveDate,
    pub views: u64,
}

/// 每日错误视图行（由流量视图的日期驱动）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DailyErrorRow {
    pub day: NaiveDate,
    pub errors: u64,
}

/// 校验后的日志条目（时间已确认存在）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidLogEntry {
    pub path: String,
    pub status: String,
    pub time: DateTime<Utc>,
}

/// 剔除缺失时间戳的日志行，返回有效条目与被跳过的行数
///
/// 策略：单行坏数据不终止整次运行，只计数并上报。
pub fn validate_log(log: &[LogRecord]) -> (Vec<ValidLogEntry>, usize) {
    let mut valid = Vec::with_capacity(log.len());
    let mut skipped = 0usize;

    for entry in log {
        match entry.time {
            Some(time) => valid.push(ValidLogEntry {
                path: entry.path.clone(),
                status: entry.status.clone(),
                time,
            }),
            None => skipped += 1,
        }
    }

    if skipped > 0 {
        debug!("Skipped {} log entries without a timestamp", skipped);
    }

    (valid, skipped)
}

/// 判断状态文本是否属于 4xx/5xx 错误类
///
/// 取首个空白分隔的 token 解析为数字，400..=599 视为错误；
/// 非数字或超出已知类别的状态不匹配，也不报错。
pub fn is_error_status(status: &str) -> bool {
    status
        .split_whitespace()
        .next()
        .and_then(|token| token.parse::<u16>().ok())
        .is_some_and(|code| (400..=599).contains(&code))
}

/// 构建作者-文章视图：Article LEFT JOIN Author ON article.author = author.id
pub fn build_author_article_view(
    articles: &[ArticleRecord],
    authors: &[AuthorRecord],
) -> Vec<AuthorArticleRow> {
    let names: HashMap<i64, &str> = authors
        .iter()
        .map(|author| (author.id, author.name.as_str()))
        .collect();

    articles
        .iter()
        .map(|article| AuthorArticleRow {
            author: article
                .author_id
                .and_then(|id| names.get(&id))
                .map(|name| name.to_string())
                .unwrap_or_default(),
            slug: article.slug.clone(),
            title: article.title.clone(),
        })
        .collect()
}

/// 构建文章热度视图
///
/// 对每行统计路径包含 slug 子串的日志条数（区分大小写、不锚定位置），
/// 再按 (title, author) 对合并——分组键是人类可读身份而非 slug，
/// 同名同作者的文章会归并。零匹配的行保留，计数为 0。
/// 结果按 views 降序，平手按首次出现顺序（稳定排序）。
pub fn build_popularity_view(
    author_article_view: &[AuthorArticleRow],
    log: &[ValidLogEntry],
) -> Vec<PopularityRow> {
    let mut rows: Vec<PopularityRow> = Vec::new();
    let mut index: HashMap<(String, String), usize> = HashMap::new();

    for row in author_article_view {
        let views = log
            .iter()
            .filter(|entry| entry.path.contains(&row.slug))
            .count() as u64;

        let key = (row.title.clone(), row.author.clone());
        match index.get(&key) {
            Some(&pos) => rows[pos].views += views,
            None => {
                index.insert(key, rows.len());
                rows.push(PopularityRow {
                    author: row.author.clone(),
                    title: row.title.clone(),
                    views,
                });
            }
        }
    }

    // 稳定排序保证平手时维持首次出现顺序
    rows.sort_by(|a, b| b.views.cmp(&a.views));
    rows
}

/// 构建每日流量视图：按天截断时间戳并计数，仅包含有流量的日期
pub fn build_daily_traffic_view(log: &[ValidLogEntry]) -> Vec<DailyTrafficRow> {
    let mut counts: HashMap<NaiveDate, u64> = HashMap::new();
    for entry in log {
        *counts.entry(truncate_to_day(entry.time)).or_insert(0) += 1;
    }

    let mut rows: Vec<DailyTrafficRow> = counts
        .into_iter()
        .map(|(day, views)| DailyTrafficRow { day, views })
        .collect();
    rows.sort_by_key(|row| row.day);
    rows
}

/// 构建每日错误视图
///
/// 由流量视图的日期驱动（左连接）：每个有流量的日期统计 4xx/5xx 条数，
/// 没有错误也产出 0 行；流量视图之外的日期不会被凭空引入。
pub fn build_daily_error_view(
    log: &[ValidLogEntry],
    daily_traffic_view: &[DailyTrafficRow],
) -> Vec<DailyErrorRow> {
    let mut errors: HashMap<NaiveDate, u64> = HashMap::new();
    for entry in log {
        if is_error_status(&entry.status) {
            *errors.entry(truncate_to_day(entry.time)).or_insert(0) += 1;
        }
    }

    daily_traffic_view
        .iter()
        .map(|traffic| DailyErrorRow {
            day: traffic.day,
            errors: errors.get(&traffic.day).copied().unwrap_or(0),
        })
        .collect()
}
