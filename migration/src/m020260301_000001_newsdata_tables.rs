use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // 创建 authors 表
        manager
            .create_table(
                Table::create()
                    .table(Author::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Author::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Author::Name).text().not_null())
                    .col(ColumnDef::new(Author::Bio).text().null())
                    .to_owned(),
            )
            .await?;

        // 创建 articles 表
        manager
            .create_table(
                Table::create()
                    .table(Article::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Article::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Article::Slug).text().not_null().unique_key())
                    .col(ColumnDef::new(Article::Title).text().not_null())
                    .col(ColumnDef::new(Article::Author).big_integer().null())
                    .col(ColumnDef::new(Article::Body).text().null())
                    .col(
                        ColumnDef::new(Article::Time)
                            .timestamp_with_time_zone()
                            .null(),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建 log 表（原始访问日志，status 为文本列）
        manager
            .create_table(
                Table::create()
                    .table(Log::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Log::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Log::Path).text().null())
                    .col(ColumnDef::new(Log::Ip).text().null())
                    .col(ColumnDef::new(Log::Method).text().null())
                    .col(ColumnDef::new(Log::Status).text().null())
                    .col(
                        ColumnDef::new(Log::Time)
                            .timestamp_with_time_zone()
                            .null(),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建文章作者索引
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_articles_author")
                    .table(Article::Table)
                    .col(Article::Author)
                    .to_owned(),
            )
            .await?;

        // 创建日志时间索引
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_log_time")
                    .table(Log::Table)
                    .col(Log::Time)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Log::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Article::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Author::Table).to_owned())
            .await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
enum Author {
    #[sea_orm(iden = "authors")]
    Table,
    Id,
    Name,
    Bio,
}

#[derive(DeriveIden)]
enum Article {
    #[sea_orm(iden = "articles")]
    Table,
    Id,
    Slug,
    Title,
    Author,
    Body,
    Time,
}

#[derive(DeriveIden)]
enum Log {
    #[sea_orm(iden = "log")]
    Table,
    Id,
    Path,
    Ip,
    Method,
    Status,
    Time,
}
