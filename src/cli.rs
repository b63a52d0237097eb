use clap::{ArgAction, Parser};
use std::path::PathBuf;
use topk::config::TopkConfig;

#[derive(Parser, Debug)]
#[command(name = "topk")]
#[command(about = "Select the k largest integers from a file or stdin", long_about = None)]
pub struct Cli {
    /// File of integers separated by whitespace or commas (defaults to stdin)
    #[arg(value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Number of largest values to keep (overrides config)
    #[arg(short, long, value_name = "N")]
    pub k: Option<usize>,

    /// Output JSON to stdout
    #[arg(long)]
    pub json: bool,

    /// Write JSON output to file
    #[arg(long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Print values in heap order instead of sorting them descending
    #[arg(long)]
    pub unsorted: bool,

    /// Check the result against a full sort of the input
    #[arg(long)]
    pub verify: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Show progress indicator while reading input
    #[arg(long)]
    pub progress: bool,

    /// Config file (default: ~/.config/topk/config.toml)
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    pub fn validate(&self) -> Result<(), String> {
        if let Some(path) = &self.input {
            if !path.exists() {
                return Err(format!("Input file does not exist: {}", path.display()));
            }
        }
        Ok(())
    }

    pub fn source_label(&self) -> String {
        self.input
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "-".to_string())
    }

    pub fn should_output_json(&self) -> bool {
        self.json || self.output.is_some()
    }

    /// `-k` wins over `selection.k`.
    pub fn effective_k(&self, config: &TopkConfig) -> usize {
        self.k.unwrap_or(config.selection.k)
    }

    pub fn effective_sorted(&self, config: &TopkConfig) -> bool {
        config.selection.sorted && !self.unsorted
    }

    /// Colour needs the config, the absence of `--no-color`, and a terminal.
    pub fn use_color(&self, config: &TopkConfig, is_terminal: bool) -> bool {
        config.display.color && !self.no_color && is_terminal
    }
}
