// src/main.rs
use bm::cli::args::Cli;
use bm::config::{load_settings, Settings};
use bm::exitcode;
use clap::Parser;
use crossterm::style::Stylize;
use tracing::{debug, info, instrument};
use tracing_subscriber::{
    filter::LevelFilter,
    fmt::{self, format::FmtSpan},
    prelude::*,
};

#[instrument]
fn main() {
    let cli = Cli::parse();
    let no_color = cli.no_color;

    setup_logging(cli.debug, no_color);

    // Load configuration, the --path flag wins over it later
    let settings = match load_settings(cli.config.as_deref()) {
        Ok(settings) => settings,
        Err(e) if cli.config.is_some() => {
            report_error(&format!("Error: {}", e), no_color);
            std::process::exit(exitcode::USAGE);
        }
        Err(e) => {
            debug!("Failed to load settings: {}. Using defaults.", e);
            Settings::default()
        }
    };

    if let Err(e) = bm::cli::execute_command(cli, &settings) {
        report_error(&format!("Error: {}", e), no_color);
        std::process::exit(e.exit_code());
    }
}

fn report_error(message: &str, no_color: bool) {
    if no_color {
        eprintln!("{}", message);
    } else {
        eprintln!("{}", message.red());
    }
}

fn setup_logging(verbosity: u8, no_color: bool) {
    debug!("INIT: Attempting logger init from main.rs");

    let filter = match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        3 => LevelFilter::TRACE,
        _ => {
            eprintln!("Don't be crazy, max is -d -d -d");
            LevelFilter::TRACE
        }
    };

    // Create a subscriber with formatted output directed to stderr
    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_ansi(!no_color)
        .with_thread_names(false)
        .with_span_events(FmtSpan::CLOSE);

    tracing_subscriber::registry()
        .with(fmt_layer.with_filter(filter))
        .init();

    // Log initial debug level
    match filter {
        LevelFilter::INFO => info!("Debug mode: info"),
        LevelFilter::DEBUG => debug!("Debug mode: debug"),
        LevelFilter::TRACE => debug!("Debug mode: trace"),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_cli_command_when_verify_then_debug_asserts_pass() {
        use clap::CommandFactory;
        Cli::command().debug_assert()
    }
}
