//! Storage 端到端测试
//!
//! 使用临时 SQLite 数据库验证：迁移建表、目录/日志加载、
//! 以及从数据库一路跑到 ReportBundle 的完整链路。

use std::sync::Once;

use chrono::{TimeZone, Utc};
use sea_orm::{ActiveValue::Set, EntityTrait};
use tempfile::TempDir;

use migration::entities::{article, author, log_entry};
use newsgauge::analytics::{PipelineOptions, run_pipeline};
use newsgauge::config::init_config;
use newsgauge::storage::{ReportSource, StorageFactory};

static INIT: Once = Once::new();

fn init_static_config() {
    INIT.call_once(|| {
        init_config();
    });
}

async fn create_temp_storage() -> (std::sync::Arc<newsgauge::storage::SeaOrmStorage>, TempDir) {
    init_static_config();
    let td = TempDir::new().unwrap();
    let p = td.path().join("newsdata_test.db");
    let u = format!("sqlite://{}?mode=rwc", p.display());
    let storage = StorageFactory::create(&u).await.unwrap();
    (storage, td)
}

async fn seed_newsdata(storage: &newsgauge::storage::SeaOrmStorage) {
    let db = storage.get_db();

    author::Entity::insert_many(vec![
        author::ActiveModel {
            id: Set(1),
            name: Set("Ada".to_string()),
            bio: Set(None),
        },
        author::ActiveModel {
            id: Set(2),
            name: Set("Grace".to_string()),
            bio: Set(Some("compiler pioneer".to_string())),
        },
    ])
    .exec(db)
    .await
    .unwrap();

    article::Entity::insert_many(vec![
        article::ActiveModel {
            id: Set(10),
            slug: Set("slug-a".to_string()),
            title: Set("Title A".to_string()),
            author: Set(Some(1)),
            body: Set(None),
            time: Set(None),
        },
        article::ActiveModel {
            id: Set(11),
            slug: Set("slug-b".to_string()),
            title: Set("Title B".to_string()),
            // 悬空外键：加载后仍应出现在目录里
            author: Set(Some(99)),
            body: Set(None),
            time: Set(None),
        },
    ])
    .exec(db)
    .await
    .unwrap();

    let day = |h| Utc.with_ymd_and_hms(2016, 7, 29, h, 0, 0).unwrap();
    log_entry::Entity::insert_many(vec![
        log_entry::ActiveModel {
            id: Set(1),
            path: Set(Some("/article/slug-a".to_string())),
            ip: Set(Some("127.0.0.1".to_string())),
            method: Set(Some("GET".to_string())),
            status: Set(Some("200 OK".to_string())),
            time: Set(Some(day(8))),
        },
        log_entry::ActiveModel {
            id: Set(2),
            path: Set(Some("/article/slug-a".to_string())),
            ip: Set(Some("127.0.0.1".to_string())),
            method: Set(Some("GET".to_string())),
            status: Set(Some("200 OK".to_string())),
            time: Set(Some(day(12))),
        },
        log_entry::ActiveModel {
            id: Set(3),
            path: Set(Some("/article/slug-a".to_string())),
            ip: Set(Some("127.0.0.1".to_string())),
            method: Set(Some("GET".to_string())),
            status: Set(Some("404 NOT FOUND".to_string())),
            time: Set(Some(day(18))),
        },
        // NULL 时间戳：应被管线剔除并计数
        log_entry::ActiveModel {
            id: Set(4),
            path: Set(Some("/article/slug-a".to_string())),
            ip: Set(None),
            method: Set(None),
            status: Set(Some("200 OK".to_string())),
            time: Set(None),
        },
    ])
    .exec(db)
    .await
    .unwrap();
}

#[tokio::test]
async fn test_migrations_create_empty_tables() {
    let (storage, _td) = create_temp_storage().await;

    let catalog = storage.load_catalog().await.unwrap();
    assert!(catalog.authors.is_empty());
    assert!(catalog.articles.is_empty());
    assert!(storage.load_log().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_load_catalog_and_log() {
    let (storage, _td) = create_temp_storage().await;
    seed_newsdata(&storage).await;

    let catalog = storage.load_catalog().await.unwrap();
    assert_eq!(catalog.authors.len(), 2);
    assert_eq!(catalog.articles.len(), 2);
    assert_eq!(catalog.articles[0].slug, "slug-a");
    assert_eq!(catalog.articles[1].author_id, Some(99));

    let log = storage.load_log().await.unwrap();
    assert_eq!(log.len(), 4);
    assert!(log[3].time.is_none());
}

#[tokio::test]
async fn test_full_report_from_database() {
    let (storage, _td) = create_temp_storage().await;
    seed_newsdata(&storage).await;

    let catalog = storage.load_catalog().await.unwrap();
    let log = storage.load_log().await.unwrap();
    let bundle = run_pipeline(&catalog, &log, &PipelineOptions::default());

    // 3 条命中日志 + 一篇悬空作者的文章 + 一条坏日志行
    assert_eq!(bundle.top_articles[0].title, "Title A");
    assert_eq!(bundle.top_articles[0].views, 3);
    assert_eq!(bundle.top_authors[0].author, "Ada");
    assert_eq!(bundle.top_authors[0].total_views, 3);
    // 悬空外键的文章以空作者名出现
    assert!(bundle.top_authors.iter().any(|a| a.author.is_empty()));
    assert_eq!(bundle.error_days.len(), 1);
    assert_eq!(bundle.skipped_log_entries, 1);
}

#[tokio::test]
async fn test_infer_backend_from_url() {
    use newsgauge::storage::infer_backend_from_url;

    assert_eq!(
        infer_backend_from_url("sqlite://some/file.db?mode=rwc").unwrap(),
        "sqlite"
    );
    assert_eq!(
        infer_backend_from_url("postgres://localhost/newsdata").unwrap(),
        "postgres"
    );
    assert_eq!(
        infer_backend_from_url("mysql://localhost/newsdata").unwrap(),
        "mysql"
    );
    assert!(infer_backend_from_url("ftp://nope").is_err());
}
