// moo/src/main.rs
use std::fs;
use std::process;

use clap::Parser;
use colored::Colorize;
use moo_common::config::Config;
use moo_common::error::MooError;
use moo_common::model::Formula;
use tracing::debug;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::fmt::writer::MakeWriterExt;
use tracing_subscriber::EnvFilter;

mod cli;
use cli::CliArgs;

fn init_logging(verbose: u8, config: &Config) {
    let level_filter = match verbose {
        0 => LevelFilter::INFO,
        1 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };
    let max_log_level = level_filter.into_level().unwrap_or(tracing::Level::INFO);

    let env_filter = EnvFilter::builder()
        .with_default_directive(level_filter.into())
        .with_env_var("MOO_LOG")
        .from_env_lossy();

    if verbose == 0 {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_writer(std::io::stderr)
            .with_ansi(true)
            .without_time()
            .try_init();
        return;
    }

    let log_dir = config.logs_dir();
    if let Err(e) = fs::create_dir_all(&log_dir) {
        eprintln!(
            "{} Failed to create log directory {}: {} (logging to stderr only)",
            "Warning:".yellow(),
            log_dir.display(),
            e
        );
        let _ = tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_writer(std::io::stderr)
            .with_ansi(true)
            .without_time()
            .try_init();
        return;
    }

    let file_appender = tracing_appender::rolling::daily(&log_dir, "moo.log");
    let (non_blocking_appender, guard) = tracing_appender::non_blocking(file_appender);

    // For verbose mode, show debug/trace logs on stderr too
    let stderr_writer = std::io::stderr.with_max_level(max_log_level);
    let file_writer = non_blocking_appender.with_max_level(max_log_level);

    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(stderr_writer.and(file_writer))
        .with_ansi(true)
        .without_time()
        .try_init();

    // Keep guard alive
    Box::leak(Box::new(guard));

    debug!(
        "Verbose logging enabled. Writing logs to: {}/moo.log",
        log_dir.display()
    );
}

/// Prints `err` the way every failed invocation reports it, then exits 1.
fn exit_with_error(err: &MooError) -> ! {
    debug!("Command failed: {:#}", err);
    eprintln!("{}", error_line(err));
    process::exit(1);
}

fn error_line(err: &MooError) -> String {
    format!("{}: {:#}", "Error".red().bold(), err)
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli_args = CliArgs::parse();

    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => exit_with_error(&e),
    };
    init_logging(cli_args.verbose, &config);

    let formula = cli_args.artifact.apply(Formula::moo_statusline());
    debug!(
        "Using formula {} {} from {}",
        formula.name,
        formula.version(),
        formula.artifact.url
    );

    if let Err(e) = cli_args.command.run(&formula, &config).await {
        exit_with_error(&e);
    }

    debug!("Command completed successfully.");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_failures_print_as_plain_error_lines() {
        colored::control::set_override(false);
        let err = MooError::Config("Could not determine the home directory (set MOO_HOME)".into());

        let line = error_line(&err);
        assert_eq!(
            line,
            "Error: Configuration Error: Could not determine the home directory (set MOO_HOME)"
        );
    }
}
