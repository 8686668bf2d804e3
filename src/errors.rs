use std::fmt;

#[derive(Debug, Clone)]
pub enum NewsgaugeError {
    DatabaseConfig(String),
    DatabaseConnection(String),
    DatabaseOperation(String),
    Validation(String),
    NotFound(String),
    Serialization(String),
    FileOperation(String),
    DateParse(String),
}

impl NewsgaugeError {
    /// 获取错误代码
    pub fn code(&self) -> &'static str {
        match self {
            NewsgaugeError::DatabaseConfig(_) => "E001",
            NewsgaugeError::DatabaseConnection(_) => "E002",
            NewsgaugeError::DatabaseOperation(_) => "E003",
            NewsgaugeError::Validation(_) => "E004",
            NewsgaugeError::NotFound(_) => "E005",
            NewsgaugeError::Serialization(_) => "E006",
            NewsgaugeError::FileOperation(_) => "E007",
            NewsgaugeError::DateParse(_) => "E008",
        }
    }

    /// 获取错误类型名称
    pub fn error_type(&self) -> &'static str {
        match self {
            NewsgaugeError::DatabaseConfig(_) => "Database Configuration Error",
            NewsgaugeError::DatabaseConnection(_) => "Database Connection Error",
            NewsgaugeError::DatabaseOperation(_) => "Database Operation Error",
            NewsgaugeError::Validation(_) => "Validation Error",
            NewsgaugeError::NotFound(_) => "Resource Not Found",
            NewsgaugeError::Serialization(_) => "Serialization Error",
            NewsgaugeError::FileOperation(_) => "File Operation Error",
            NewsgaugeError::DateParse(_) => "Date Parse Error",
        }
    }

    /// 获取错误详情
    pub fn message(&self) -> &str {
        match self {
            NewsgaugeError::DatabaseConfig(msg) => msg,
            NewsgaugeError::DatabaseConnection(msg) => msg,
            NewsgaugeError::DatabaseOperation(msg) => msg,
            NewsgaugeError::Validation(msg) => msg,
            NewsgaugeError::NotFound(msg) => msg,
            NewsgaugeError::Serialization(msg) => msg,
            NewsgaugeError::FileOperation(msg) => msg,
            NewsgaugeError::DateParse(msg) => msg,
        }
    }

    /// 格式化为彩色输出
    pub fn format_colored(&self) -> String {
        use colored::Colorize;
        format!(
            "{} {} {}\n  {}",
            "[ERROR]".red().bold(),
            self.code().yellow(),
            self.error_type().red(),
            self.message().white()
        )
    }

    /// 格式化为简洁输出
    pub fn format_simple(&self) -> String {
        format!("{}: {}", self.error_type(), self.message())
    }
}

impl fmt::Display for NewsgaugeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // 默认使用简洁格式
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for NewsgaugeError {}

// 便捷的构造函数
impl NewsgaugeError {
    pub fn database_config<T: Into<String>>(msg: T) -> Self {
        NewsgaugeError::DatabaseConfig(msg.into())
    }

    pub fn database_connection<T: Into<String>>(msg: T) -> Self {
        NewsgaugeError::DatabaseConnection(msg.into())
    }

    pub fn database_operation<T: Into<String>>(msg: T) -> Self {
        NewsgaugeError::DatabaseOperation(msg.into())
    }

    pub fn validation<T: Into<String>>(msg: T) -> Self {
        NewsgaugeError::Validation(msg.into())
    }

    pub fn not_found<T: Into<String>>(msg: T) -> Self {
        NewsgaugeError::NotFound(msg.into())
    }

    pub fn serialization<T: Into<String>>(msg: T) -> Self {
        NewsgaugeError::Serialization(msg.into())
    }

    pub fn file_operation<T: Into<String>>(msg: T) -> Self {
        NewsgaugeError::FileOperation(msg.into())
    }

    pub fn date_parse<T: Into<String>>(msg: T) -> Self {
        NewsgaugeError::DateParse(msg.into())
    }
}

// 为常见的错误类型实现 From trait
impl From<sea_orm::DbErr> for NewsgaugeError {
    fn from(err: sea_orm::DbErr) -> Self {
        NewsgaugeError::DatabaseOperation(err.to_string())
    }
}

impl From<std::io::Error> for NewsgaugeError {
    fn from(err: std::io::Error) -> Self {
        NewsgaugeError::FileOperation(err.to_string())
    }
}

impl From<serde_json::Error> for NewsgaugeError {
    fn from(err: serde_json::Error) -> Self {
        NewsgaugeError::Serialization(err.to_string())
    }
}

impl From<chrono::ParseError> for NewsgaugeError {
    fn from(err: chrono::ParseError) -> Self {
        NewsgaugeError::DateParse(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, NewsgaugeError>;
