use bevy::log::error;
use clap::Parser;
use springdrift::cli::{self, Args};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.verbose);

    if args.list_presets {
        cli::handle_list_presets();
        return ExitCode::SUCCESS;
    }

    if args.save_config {
        return match cli::handle_save_config(&args) {
            Ok(path) => {
                println!("Saved configuration to {}", path.display());
                ExitCode::SUCCESS
            }
            Err(e) => {
                error!("{e}");
                ExitCode::FAILURE
            }
        };
    }

    let stdout = std::io::stdout();
    match cli::run(&args, &mut stdout.lock()) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}

/// Log to stderr so the CSV on stdout stays clean. `RUST_LOG` wins over
/// `--verbose` when set.
fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
