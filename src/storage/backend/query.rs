//! Read-only query operations for SeaOrmStorage
//!
//! Loads the two raw record sets (content catalog and access log) into the
//! plain in-memory records the aggregation pipeline consumes.

use async_trait::async_trait;
use sea_orm::EntityTrait;
use tracing::info;

use super::{SeaOrmStorage, retry};
use crate::analytics::{ArticleRecord, AuthorRecord, ContentCatalog, LogRecord};
use crate::errors::Result;
use crate::storage::ReportSource;

use migration::entities::{article, author, log_entry};

impl SeaOrmStorage {
    /// 加载全部作者记录
    pub async fn load_authors(&self) -> Result<Vec<AuthorRecord>> {
        let db = &self.db;
        let models = retry::with_retry("load_authors", self.retry_config, || async {
            author::Entity::find().all(db).await
        })
        .await?;

        Ok(models
            .into_iter()
            .map(|model| AuthorRecord {
                id: model.id,
                name: model.name,
            })
            .collect())
    }

    /// 加载全部文章记录
    pub async fn load_articles(&self) -> Result<Vec<ArticleRecord>> {
        let db = &self.db;
        let models = retry::with_retry("load_articles", self.retry_config, || async {
            article::Entity::find().all(db).await
        })
        .await?;

        Ok(models
            .into_iter()
            .map(|model| ArticleRecord {
                id: model.id,
                slug: model.slug,
                title: model.title,
                author_id: model.author,
            })
            .collect())
    }

    /// 加载全部访问日志
    ///
    /// path/status 为 NULL 的行按空字符串处理（不会匹配任何 slug 或错误类），
    /// time 为 NULL 的行保留 None，由管线校验阶段统一剔除计数。
    pub async fn load_log_entries(&self) -> Result<Vec<LogRecord>> {
        let db = &self.db;
        let models = retry::with_retry("load_log_entries", self.retry_config, || async {
            log_entry::Entity::find().all(db).await
        })
        .await?;

        Ok(models
            .into_iter()
            .map(|model| LogRecord {
                path: model.path.unwrap_or_default(),
                status: model.status.unwrap_or_default(),
                time: model.time,
            })
            .collect())
    }
}

#[async_trait]
impl ReportSource for SeaOrmStorage {
    async fn load_catalog(&self) -> Result<ContentCatalog> {
        let authors = self.load_authors().await?;
        let articles = self.load_articles().await?;
        info!(
            "Loaded catalog: {} authors, {} articles",
            authors.len(),
            articles.len()
        );
        Ok(ContentCatalog { authors, articles })
    }

    async fn load_log(&self) -> Result<Vec<LogRecord>> {
        let entries = self.load_log_entries().await?;
        info!("Loaded {} log entries", entries.len());
        Ok(entries)
    }
}
