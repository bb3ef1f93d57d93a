use super::cli::args::{Args, UsageError, USAGE};
use crate::core::console::Console;
use crate::core::error_handling::log_error_with_context;
use crate::core::logging::init_logging;
use crate::core::styles::{palette_to_clap, StyleRole};
use crate::scanner::manager::REPORTED_ERROR_LEVEL;
use crate::scanner::{ProcessLauncher, ScanManager, ScannerRegistry, SystemLauncher};
use std::io::IsTerminal;
use std::process::ExitCode;
use std::sync::Arc;

/// Exit status when at least one scan failed under `--fail-on-error`
pub const EXIT_SCAN_FAILED: u8 = 1;

/// Parse the process arguments, set up logging and run the scans
pub async fn startup() -> ExitCode {
    use clap::{CommandFactory, FromArgMatches};

    let raw_args: Vec<String> = std::env::args().collect();
    let use_color = color_preference(&raw_args, std::io::stdout().is_terminal());

    let matches = Args::command()
        .styles(palette_to_clap(use_color))
        .get_matches_from(&raw_args);
    let args = Args::from_arg_matches(&matches).unwrap_or_else(|e| e.exit());

    let log_file = args.log_file_path();
    if let Err(e) = init_logging(
        Some(&args.effective_log_level()),
        args.log_format.as_deref(),
        log_file.as_deref(),
        use_color && std::io::stderr().is_terminal(),
    ) {
        eprintln!("Failed to initialise logging: {}", e);
    }

    log::info!(
        "kube-scanner {} starting",
        crate::core::version::long_version()
    );

    let code = run(args, Arc::new(SystemLauncher), Console::stdout(use_color)).await;
    ExitCode::from(code)
}

/// Run one invocation against the given launcher and console
///
/// Returns the process exit status: 0 unless `--fail-on-error` is set and a
/// scan failed. Usage problems are reported and also end with 0.
pub async fn run(args: Args, launcher: Arc<dyn ProcessLauncher>, console: Console) -> u8 {
    let invocation = match args.invocation() {
        Ok(invocation) => invocation,
        Err(err) => {
            report_usage_error(&err, &console);
            return 0;
        }
    };

    let cli = args.cli_program();
    log::debug!(
        "scanning namespace '{}' for {:?} with '{}'",
        invocation.namespace,
        invocation.resource_types,
        cli
    );

    let manager = ScanManager::new(
        Arc::new(ScannerRegistry::with_builtin()),
        launcher,
        cli,
        console,
    );
    let summary = manager
        .run(&invocation.namespace, &invocation.resource_types)
        .await;

    if args.fail_on_error && summary.has_failures() {
        log::warn!("{} of {} scan(s) failed", summary.failed(), summary.launched());
        EXIT_SCAN_FAILED
    } else {
        0
    }
}

fn report_usage_error(err: &UsageError, console: &Console) {
    log_error_with_context(err, "Argument parsing", REPORTED_ERROR_LEVEL);
    match err {
        UsageError::MissingArguments => console.line(StyleRole::Value, USAGE),
        UsageError::UnsupportedCommand { .. } => {
            console.line(StyleRole::Error, &format!("Error: {}", err))
        }
    }
}

/// Decide on colour before clap runs so help output is styled consistently
///
/// `--no-color` wins over `--color`; otherwise `NO_COLOR` disables colour and
/// a terminal on stdout enables it.
pub fn color_preference(raw_args: &[String], stdout_is_terminal: bool) -> bool {
    if raw_args.iter().any(|a| a == "--no-color") {
        return false;
    }
    if raw_args.iter().any(|a| a == "--color") {
        return true;
    }
    if std::env::var_os("NO_COLOR").is_some_and(|v| !v.is_empty()) {
        return false;
    }
    stdout_is_terminal
}
