//! CLI interface module
//!
//! This module provides command-line interface functionality for newsgauge.

pub mod commands;

use std::fmt;
use std::io::{BufRead, Write};

use crate::analytics::PipelineOptions;
use crate::cli::Commands;
use crate::storage::StorageFactory;
use commands::{generate_report, run_migrate};

#[derive(Debug)]
pub enum CliError {
    StorageError(String),
    ParseError(String),
    CommandError(String),
}

impl CliError {
    /// Format as simple output
    pub fn format_simple(&self) -> String {
        match self {
            CliError::StorageError(msg) => format!("Storage error: {}", msg),
            CliError::ParseError(msg) => format!("Parse error: {}", msg),
            CliError::CommandError(msg) => format!("Command error: {}", msg),
        }
    }

    /// Format as colored output
    pub fn format_colored(&self) -> String {
        use colored::Colorize;
        match self {
            CliError::StorageError(msg) => {
                format!("{} {}", "Storage error:".red().bold(), msg.white())
            }
            CliError::ParseError(msg) => {
                format!("{} {}", "Parse error:".yellow().bold(), msg.white())
            }
            CliError::CommandError(msg) => {
                format!("{} {}", "Command error:".red().bold(), msg.white())
            }
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for CliError {}

impl From<crate::errors::NewsgaugeError> for CliError {
    fn from(err: crate::errors::NewsgaugeError) -> Self {
        CliError::StorageError(err.to_string())
    }
}

/// 将 --database 参数（或交互输入）解析为完整数据库 URL
///
/// 裸数据库名扩展为 postgres://localhost/{name}。
pub fn resolve_database_url(database: Option<String>) -> Result<String, CliError> {
    let config = crate::config::get_config();

    let raw = match database {
        Some(value) if !value.trim().is_empty() => value.trim().to_string(),
        _ => {
            // 配置里给了完整 URL 就直接用，否则交互式询问数据库名
            if !config.database.database_url.is_empty() {
                return Ok(config.database.database_url.clone());
            }
            prompt_database_name(&config.database.default_db_name)?
        }
    };

    if raw.contains("://") {
        Ok(raw)
    } else {
        Ok(format!("postgres://localhost/{}", raw))
    }
}

/// 在 stdin 上询问数据库名，空输入使用默认值
fn prompt_database_name(default_name: &str) -> Result<String, CliError> {
    print!(
        "Enter database name to connect to (default is '{}'): ",
        default_name
    );
    std::io::stdout()
        .flush()
        .map_err(|e| CliError::CommandError(format!("Failed to flush stdout: {}", e)))?;

    let mut line = String::new();
    std::io::stdin()
        .lock()
        .read_line(&mut line)
        .map_err(|e| CliError::CommandError(format!("Failed to read database name: {}", e)))?;

    let name = line.trim();
    if name.is_empty() {
        Ok(default_name.to_string())
    } else {
        Ok(name.to_string())
    }
}

/// Run a CLI command from clap-parsed input
pub async fn run_cli_command(
    database: Option<String>,
    cmd: Option<Commands>,
) -> Result<(), CliError> {
    let database_url = resolve_database_url(database)?;

    // 连接失败在这里被捕获并以友好错误返回，绝不越过 CLI 边界
    let storage = StorageFactory::create(&database_url)
        .await
        .map_err(|e| CliError::StorageError(e.to_string()))?;

    match cmd {
        // 无子命令时默认生成报表
        None => {
            let config = crate::config::get_config();
            let options = PipelineOptions {
                top_articles: config.report.top_articles,
                error_rate_threshold: config.report.error_rate_threshold,
            };
            generate_report(storage, options, false).await
        }

        Some(Commands::Report {
            top,
            threshold,
            json,
        }) => {
            let config = crate::config::get_config();
            let options = PipelineOptions {
                top_articles: top.unwrap_or(config.report.top_articles),
                error_rate_threshold: threshold.unwrap_or(config.report.error_rate_threshold),
            };
            generate_report(storage, options, json).await
        }

        Some(Commands::Migrate) => run_migrate(storage).await,
    }
}
