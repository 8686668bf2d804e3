pub mod article;
pub mod author;
pub mod log_entry;

pub use article::Entity as ArticleEntity;
pub use author::Entity as AuthorEntity;
pub use log_entry::Entity as LogEntity;
