//! 报表投影阶段
//!
//! 从派生视图裁剪出最终的三份报表，不持有视图之外的状态。

use chrono::NaiveDate;
use serde::Serialize;

use super::views::{DailyErrorRow, DailyTrafficRow, PopularityRow};

/// 热门文章行
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArticleViews {
    pub title: String,
    pub views: u64,
}

/// 热门作者行
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuthorViews {
    pub author: String,
    pub total_views: u64,
}

/// 错误率超标日
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ErrorDay {
    pub day: NaiveDate,
    /// 比值（0.02 = 2%），非百分比
    pub error_rate: f64,
}

/// 热度视图的前 n 行（视图已按 views 降序）
///
/// 行数不足 n 时返回全部；空输入返回空序列。
pub fn top_articles(popularity_view: &[PopularityRow], n: usize) -> Vec<ArticleViews> {
    popularity_view
        .iter()
        .take(n)
        .map(|row| ArticleViews {
            title: row.title.clone(),
            views: row.views,
        })
        .collect()
}

/// 按作者汇总热度视图，按总阅读量降序
///
/// 所有至少有一篇文章的作者都会出现，包括总量为 0 的。
pub fn top_authors(popularity_view: &[PopularityRow]) -> Vec<AuthorViews> {
    let mut rows: Vec<AuthorViews> = Vec::new();
    let mut index: std::collections::HashMap<String, usize> = std::collections::HashMap::new();

    for row in popularity_view {
        match index.get(&row.author) {
            Some(&pos) => rows[pos].total_views += row.views,
            None => {
                index.insert(row.author.clone(), rows.len());
                rows.push(AuthorViews {
                    author: row.author.clone(),
                    total_views: row.views,
                });
            }
        }
    }

    rows.sort_by(|a, b| b.total_views.cmp(&a.total_views));
    rows
}

/// 错误率严格大于阈值的日期
///
/// 流量与错误视图按日期内连接；错误视图的日期是流量视图的子集且
/// 流量计数 ≥ 1，除零在结构上不可能出现。比率使用浮点除法。
pub fn error_days(
    daily_traffic_view: &[DailyTrafficRow],
    daily_error_view: &[DailyErrorRow],
    threshold: f64,
) -> Vec<ErrorDay> {
    let errors: std::collections::HashMap<NaiveDate, u64> = daily_error_view
        .iter()
        .map(|row| (row.day, row.errors))
        .collect();

    daily_traffic_view
        .iter()
        .filter_map(|traffic| {
            let errors = errors.get(&traffic.day)?;
            let error_rate = *errors as f64 / traffic.views as f64;
            (error_rate > threshold).then_some(ErrorDay {
                day: traffic.day,
                error_rate,
            })
        })
        .collect()
}
