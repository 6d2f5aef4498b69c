use anyhow::Context;
use clap::Parser;
use fair_turns::app::report;
use fair_turns::utils::error::ErrorSeverity;
use fair_turns::utils::{logger, validation::Validate};
use fair_turns::{CliConfig, Command, LocalStorage, TurnEngine, TurnError};
use std::io::Read;
use std::path::Path;

fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    // 初始化日誌
    if cli.json_logs {
        logger::init_json_logger(cli.verbose);
    } else {
        logger::init_cli_logger(cli.verbose);
    }
    tracing::debug!("CLI config: {:?}", cli);

    // 載入並驗證配置
    let config = match cli.resolve().and_then(|config| config.validate().map(|_| config)) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("❌ Configuration failed: {}", e);
            fail(&e);
        }
    };

    // 建立存儲與引擎
    let storage = LocalStorage::new(config.store_path());
    let engine = match TurnEngine::new(storage, &config) {
        Ok(engine) => engine,
        Err(e) => fail(&e),
    };

    let result = match &cli.command {
        Command::Assign { input } => {
            let raw = read_input(input.as_deref())?;
            engine
                .assign(&raw)
                .map(|outcome| report::render_assignment(&outcome))
        }
        Command::Leaderboard => engine
            .leaderboard()
            .map(|board| report::render_leaderboard(&board, engine.policy())),
        Command::Reset { yes } => {
            if !yes {
                eprintln!("⚠️  Reset deletes all standings and cannot be undone.");
                eprintln!("💡 Re-run with --yes to confirm.");
                std::process::exit(2);
            }
            engine.reset().map(|_| "Data has been reset!".to_string())
        }
    };

    match result {
        Ok(text) => {
            println!("{}", text);
            Ok(())
        }
        Err(e) => {
            tracing::error!(
                "❌ Request failed: {} (Severity: {:?})",
                e,
                e.severity()
            );
            fail(&e);
        }
    }
}

fn read_input(path: Option<&Path>) -> anyhow::Result<String> {
    match path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read names from {}", path.display())),
        None => {
            let mut raw = String::new();
            std::io::stdin()
                .read_to_string(&mut raw)
                .context("failed to read names from stdin")?;
            Ok(raw)
        }
    }
}

fn fail(e: &TurnError) -> ! {
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());

    // 根據錯誤嚴重程度決定退出碼
    let exit_code = match e.severity() {
        ErrorSeverity::Low => 2, // 輸入問題
        ErrorSeverity::Medium | ErrorSeverity::High => 1,
        ErrorSeverity::Critical => 3, // 系統錯誤
    };
    std::process::exit(exit_code);
}
