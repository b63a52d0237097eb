mod cli;

use clap::Parser;
use cli::Cli;
use is_terminal::IsTerminal;
use std::fs::File;
use std::io::{self, BufReader};
use topk::config::TopkConfig;
use topk::input::{read_values, InputError, ReadProgress};
use topk::output::{JsonRenderer, TerminalRenderer};
use topk::types::SelectionReport;
use topk::{oracle, TopKSelector};
use tracing::Level;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = cli.validate() {
        eprintln!("Error: {}", e);
        std::process::exit(2);
    }

    let config = match TopkConfig::load(cli.config.as_ref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(2);
        }
    };

    init_logging(&config, cli.verbose);

    match run(&cli, &config) {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(e.exit_code());
        }
    }
}

fn init_logging(config: &TopkConfig, verbose: u8) {
    let base = config.log_level().unwrap_or(Level::WARN);
    let requested = match verbose {
        0 => base,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };

    tracing_subscriber::fmt()
        .with_max_level(base.max(requested))
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: &Cli, config: &TopkConfig) -> topk::Result<i32> {
    let k = cli.effective_k(config);
    let sorted = cli.effective_sorted(config);
    let progress = ReadProgress::new(cli.progress && io::stderr().is_terminal());

    let values = match &cli.input {
        Some(path) => {
            let file = File::open(path).map_err(InputError::from)?;
            read_values(BufReader::new(file), &progress)?
        }
        None => read_values(io::stdin().lock(), &progress)?,
    };

    // The reference sorts its own copy; the selector consumes the original.
    let reference_input = cli.verify.then(|| values.clone());

    let input_len = values.len();
    let (mut selected, stats) = TopKSelector::new(k).select_with_stats(values);
    let verified = reference_input.map(|input| oracle::verify(input, k, &selected).matches);
    if sorted {
        selected.sort_by(|a, b| b.cmp(a));
    }

    let report = SelectionReport {
        source: cli.source_label(),
        k,
        input_len,
        values: selected,
        sorted,
        stats,
        verified,
    };

    if cli.should_output_json() {
        JsonRenderer::new().render(&report, cli.output.as_deref())?;
    } else {
        let use_color = cli.use_color(config, io::stdout().is_terminal());
        TerminalRenderer::new(use_color).render(&report);
    }

    Ok(report.exit_code())
}
