// Entry point for the CLI application. Parses arguments, initializes
// logging and delegates to the library for generation.

use std::process;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use req2test::cli::Args;
use req2test::utils::relative_to_cwd;
use req2test::{generate_tests, GenerateOptions};

fn main() {
    let args = Args::parse();

    let default_level = if args.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_target(false)
        .init();

    let options = GenerateOptions {
        stories: args.stories,
        features: args.features,
        openapi: args.openapi,
        output_dir: args.output_dir.clone(),
        ui_framework: args.ui_framework,
        api_framework: args.api_framework,
        base_url: args.base_url,
    };

    match generate_tests(&options) {
        Ok(report) => {
            println!(
                "Generated {} artifact(s) in {}",
                report.written.len(),
                relative_to_cwd(&args.output_dir).display()
            );

            for err in &report.source_errors {
                eprintln!("Source error: {}", err);
            }
            if report.failed_artifacts > 0 {
                eprintln!("{} artifact(s) failed to generate", report.failed_artifacts);
            }

            if !report.is_clean() {
                process::exit(1);
            }
        }
        Err(err) => {
            eprintln!("Error generating tests: {}", err);
            process::exit(1);
        }
    }
}
