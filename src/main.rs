//! audio-slim CLI entry point

use std::process::ExitCode;

use clap::Parser;

use audio_slim::cli::{
    app::{
        list_formats, load_merged_config, run_check, run_optimize, EXIT_ERROR,
        EXIT_USAGE_ERROR,
    },
    args::{Cli, Commands, OptimizeOptions},
    config_cmd::handle_config_command,
    presenter::Presenter,
};
use audio_slim::domain::config::AppConfig;
use audio_slim::infrastructure::XdgConfigStore;

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();
}

#[tokio::main(flavor = "multi_thread", worker_threads = 2)]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    let presenter = Presenter::new();

    match cli.command {
        Commands::Config { action } => {
            let store = XdgConfigStore::new();
            if let Err(e) = handle_config_command(action, &store, &presenter).await {
                presenter.error(&e.to_string());
                return ExitCode::from(EXIT_ERROR);
            }
            ExitCode::SUCCESS
        }
        Commands::Formats => list_formats(),
        Commands::Check { input, max_size } => {
            let config = load_merged_config(AppConfig {
                max_size,
                ..Default::default()
            })
            .await;
            match config.parsed_max_size() {
                Ok(limit) => run_check(&input, limit).await,
                Err(e) => {
                    presenter.error(&format!("Invalid max-size: {}", e));
                    ExitCode::from(EXIT_USAGE_ERROR)
                }
            }
        }
        Commands::Optimize {
            input,
            output,
            max_size,
            force,
            json,
        } => {
            let config = load_merged_config(AppConfig {
                max_size,
                output_dir: None,
                overwrite: if force { Some(true) } else { None },
            })
            .await;

            let max_size = match config.parsed_max_size() {
                Ok(size) => size,
                Err(e) => {
                    presenter.error(&format!("Invalid max-size: {}", e));
                    return ExitCode::from(EXIT_USAGE_ERROR);
                }
            };

            let options = OptimizeOptions {
                input,
                output,
                output_dir: config.output_dir(),
                max_size,
                overwrite: config.overwrite_or_default(),
                json,
            };

            run_optimize(options).await
        }
    }
}
