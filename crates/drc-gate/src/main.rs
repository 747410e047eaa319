use anyhow::{Context, Result};
use clap::Parser;
use drc_gate::{Args, Gate, GateOutput};
use drc_report::{GateConfig, SavedReport};
use std::io::Write;
use std::process::ExitCode;

fn run(args: &Args) -> Result<GateOutput> {
    let config = GateConfig::resolve(args.config.as_deref(), &args.overrides())
        .context("Failed to load configuration")?;
    tracing::debug!(?config, "Gate config");

    let source = SavedReport::new(&args.report);
    let verdict = Gate::new(config, source, &args.board)
        .run()
        .with_context(|| format!("Failed to read report {}", args.report.display()))?;

    Ok(GateOutput::from_verdict(&verdict, args.format))
}

fn main() -> ExitCode {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "drc_gate=info,drc_report=warn".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    match run(&args) {
        Ok(output) => {
            let mut stdout = std::io::stdout().lock();
            if let Err(e) = stdout
                .write_all(output.stdout.as_bytes())
                .and_then(|()| stdout.flush())
            {
                eprintln!("An error occurred: {e}");
                return ExitCode::FAILURE;
            }
            ExitCode::from(output.exit_code)
        }
        Err(e) => {
            eprintln!("An error occurred: {e:#}");
            ExitCode::FAILURE
        }
    }
}
