use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use indent_guard::cli::Cli;
use indent_guard::commands::{CheckOptions, run_check};
use indent_guard::output::{ConsoleSink, MessageSink, StyledMessage};
use indent_guard::{EXIT_CONFIG_ERROR, IndentGuardError};

fn setup_logging(verbosity: u8, quiet: bool) {
    let filter = if quiet {
        "error"
    } else {
        match verbosity {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)))
        .init();
}

fn report_fatal(err: &IndentGuardError, sink: &dyn MessageSink) {
    if let IndentGuardError::ConfigMissing { paths } = err {
        for path in paths {
            sink.emit(&StyledMessage::error(format!(
                "Required file missing: {}",
                path.display()
            )));
        }
        return;
    }
    tracing::debug!(kind = err.error_type(), "run aborted");
    sink.emit(&StyledMessage::error(format!("Error: {err}")));
}

fn main() {
    let cli = Cli::parse();
    setup_logging(cli.verbose, cli.quiet);

    let sink = ConsoleSink::new(cli.color.into()).with_quiet(cli.quiet);
    let exit_code = match CheckOptions::from_cli(&cli).and_then(|options| run_check(&options, &sink)) {
        Ok(code) => code,
        Err(err) => {
            report_fatal(&err, &sink);
            EXIT_CONFIG_ERROR
        }
    };

    std::process::exit(exit_code);
}
