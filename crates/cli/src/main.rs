//! setup-terragrunt CLI Application
//!
//! Downloads the Terragrunt release matching this host and prepends its
//! directory to PATH (and to `$GITHUB_PATH` on GitHub Actions).

// CLI binary needs to output to stdout/stderr - this is intentional
#![allow(clippy::print_stdout, clippy::print_stderr)]

use setup_terragrunt::cli::{self, EXIT_FAILURE, EXIT_OK};
use setup_terragrunt::tracing::{TracingConfig, init_tracing};
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = cli::parse();

    let tracing_config = TracingConfig {
        format: cli.log_format,
        level: cli.level.into(),
        filter: cli.log_filter.clone(),
    };
    if let Err(e) = init_tracing(tracing_config) {
        eprintln!("{e:?}");
        return ExitCode::from(EXIT_FAILURE);
    }

    // A single download is the only suspension point
    let rt = match tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
    {
        Ok(rt) => rt,
        Err(e) => {
            eprintln!("Fatal error: Failed to create tokio runtime: {e}");
            return ExitCode::from(EXIT_FAILURE);
        }
    };

    match rt.block_on(setup_terragrunt::run(&cli)) {
        Ok(installation) => {
            if cli.json {
                match serde_json::to_string_pretty(&installation) {
                    Ok(json) => println!("{json}"),
                    Err(e) => {
                        eprintln!("Failed to serialize result: {e}");
                        return ExitCode::from(EXIT_FAILURE);
                    }
                }
            } else {
                println!("{}", installation.identifier);
            }
            ExitCode::from(EXIT_OK)
        }
        Err(e) => {
            eprintln!("{:?}", miette::Report::new(e));
            ExitCode::from(EXIT_FAILURE)
        }
    }
}
