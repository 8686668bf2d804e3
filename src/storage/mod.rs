use std::sync::Arc;

use async_trait::async_trait;

use crate::analytics::{ContentCatalog, LogRecord};
use crate::errors::Result;

pub mod backend;

pub use backend::{SeaOrmStorage, infer_backend_from_url};

/// 报表数据源接口
///
/// 聚合管线只消费内存集合；这里是存储实现与 CLI 之间的接缝，
/// 测试可以用内存实现替换数据库。
#[async_trait]
pub trait ReportSource: Send + Sync {
    /// 加载内容目录（authors + articles）
    async fn load_catalog(&self) -> Result<ContentCatalog>;

    /// 加载完整访问日志
    async fn load_log(&self) -> Result<Vec<LogRecord>>;
}

pub struct StorageFactory;

impl StorageFactory {
    pub async fn create(database_url: &str) -> Result<Arc<SeaOrmStorage>> {
        // 从 URL 自动推断数据库类型
        let backend_type = infer_backend_from_url(database_url)?;

        let storage = SeaOrmStorage::new(database_url, &backend_type).await?;
        Ok(Arc::new(storage))
    }
}
