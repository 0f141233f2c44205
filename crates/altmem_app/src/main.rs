mod cli;
mod countdown;
mod interrupt;

use std::process::ExitCode;

use altmem_core::TmxHeader;
use altmem_engine::{discover_inputs, locate_rules, run_batch, BatchSettings, DocumentConverter};
use altmem_logging::{altmem_debug, altmem_error, altmem_info, altmem_warn, LogDestination};
use anyhow::Context;
use clap::Parser;

use crate::cli::Cli;
use crate::countdown::{countdown_before_exit, COUNTDOWN_SECONDS};
use crate::interrupt::{EXIT_FAILURE, EXIT_SUCCESS};

fn main() -> ExitCode {
    let cli = Cli::parse();
    let destination = match &cli.log_file {
        Some(path) => LogDestination::Both(path.clone()),
        None => LogDestination::Terminal,
    };
    altmem_logging::initialize(destination, cli.verbose);
    if let Err(err) = interrupt::install() {
        altmem_warn!("Ctrl+C handler not installed: {}", err);
    }

    let code = match run(&cli) {
        Ok(code) => code,
        Err(err) => {
            altmem_error!("Fatal error: {err:#}");
            EXIT_FAILURE
        }
    };
    if !cli.no_countdown {
        interrupt::enter_countdown(code);
        countdown_before_exit(COUNTDOWN_SECONDS);
    }
    ExitCode::from(code)
}

fn run(cli: &Cli) -> anyhow::Result<u8> {
    let discovery = cli.discovery_options();
    altmem_debug!(
        "Searching for XLIFF files (recursive: {}, extensions: {})",
        discovery.recursive,
        discovery.extensions.join(", ")
    );

    let inputs = discover_inputs(cli.inputs.as_slice(), &discovery);
    if inputs.is_empty() {
        altmem_error!("No XLIFF files found matching the criteria");
        altmem_info!("Searched in: {}", cli.inputs.join(", "));
        altmem_info!("Extensions: {}", discovery.extensions.join(", "));
        if !cli.recursive {
            altmem_info!("Tip: Use -r for recursive directory search");
        }
        return Ok(EXIT_FAILURE);
    }
    altmem_debug!("Found {} XLIFF file(s)", inputs.len());

    if cli.output.is_some() && !cli.merge {
        altmem_warn!(
            "-o/--output is ignored in individual mode (use --merge for combined output)"
        );
    }

    let rules_path = locate_rules(cli.rules.as_deref());
    altmem_debug!("Transform rules: {}", rules_path.display());
    let converter = DocumentConverter::new(rules_path);
    let settings = BatchSettings {
        convert: cli.convert_options(),
        header: TmxHeader::default(),
    };

    let report = run_batch(&cli.mode(), &inputs, &converter, &settings)
        .context("conversion aborted")?;
    eprint!("{}", report.render());

    Ok(if report.success {
        EXIT_SUCCESS
    } else {
        EXIT_FAILURE
    })
}
