mod cli;
mod context;
mod handlers;
mod output;

use clap::{CommandFactory, Parser};
use cli::{Cli, Commands};
use context::CliContext;
use slate_core::AppConfig;
use slate_persistence::JsonFileStore;
use slate_tui::App;
use std::path::PathBuf;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    if let Ok(log_path) = std::env::var("SLATE_DEBUG_LOG") {
        let log_file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_path)?;

        tracing_subscriber::fmt()
            .with_writer(log_file)
            .with_max_level(tracing::Level::DEBUG)
            .with_target(true)
            .with_ansi(false)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_writer(std::io::stderr)
            .with_max_level(tracing::Level::WARN)
            .init();
    }

    let cli = Cli::parse();

    if let Some(Commands::Completions { shell }) = &cli.command {
        clap_complete::generate(*shell, &mut Cli::command(), "slate", &mut std::io::stdout());
        return Ok(());
    }

    let file_path = resolve_data_path(cli.file)?;
    let file_path = file_path
        .to_str()
        .ok_or_else(|| anyhow::anyhow!("board file path is not valid UTF-8"))?
        .to_string();

    match cli.command {
        None => {
            let store = JsonFileStore::new(&file_path);
            let board = store.load_or_default().await;
            let mut app = App::new(store, board);
            app.run().await?;
        }
        Some(Commands::Show) => {
            let ctx = CliContext::load(&file_path).await;
            handlers::board::handle_show(&ctx);
        }
        Some(Commands::Task(task_cmd)) => {
            let mut ctx = CliContext::load(&file_path).await;
            handlers::task::handle(&mut ctx, task_cmd.action).await?;
        }
        Some(Commands::Completions { .. }) => unreachable!("handled above"),
    }

    Ok(())
}

fn resolve_data_path(flag: Option<String>) -> anyhow::Result<PathBuf> {
    if let Some(path) = flag {
        return Ok(PathBuf::from(path));
    }
    AppConfig::load()
        .effective_data_path()
        .ok_or_else(|| anyhow::anyhow!("could not determine a data directory; pass --file"))
}
