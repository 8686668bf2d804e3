use clap::Parser;

use newsgauge::cli::Cli;
use newsgauge::config::{get_config, init_config};
use newsgauge::interfaces::cli::run_cli_command;
use newsgauge::system::init_logging;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    // 配置必须先于日志初始化
    init_config();
    let config = get_config();
    let _log_guard = init_logging(&config.logging);

    let cli = Cli::parse();

    if let Err(e) = run_cli_command(cli.database, cli.command).await {
        eprintln!("{}", e.format_colored());
        std::process::exit(1);
    }
}
