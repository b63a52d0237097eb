use indicatif::{ProgressBar, ProgressStyle};
use std::io::BufRead;
use thiserror::Error;

const TICK_EVERY: usize = 4096;

#[derive(Debug, Error)]
pub enum InputError {
    #[error("line {line}: not an integer: {token:?}")]
    Parse { line: usize, token: String },

    #[error("failed to read input: {0}")]
    Io(#[from] std::io::Error),
}

/// Spinner shown while values are being read.
pub struct ReadProgress {
    bar: ProgressBar,
    enabled: bool,
}

impl ReadProgress {
    pub fn new(enabled: bool) -> Self {
        if !enabled {
            return Self {
                bar: ProgressBar::hidden(),
                enabled: false,
            };
        }

        let bar = ProgressBar::new_spinner();
        if let Ok(style) =
            ProgressStyle::default_spinner().template("{spinner:.green} [{elapsed_precise}] {msg}")
        {
            bar.set_style(style);
        }

        Self { bar, enabled: true }
    }

    fn update(&self, values: usize) {
        if self.enabled {
            self.bar.set_message(format!("{} values read", values));
            self.bar.tick();
        }
    }

    fn finish(&self) {
        if self.enabled {
            self.bar.finish_and_clear();
        }
    }
}

/// Reads integers separated by whitespace and/or commas.
///
/// `#` starts a comment that runs to the end of the line.
pub fn read_values<R: BufRead>(
    reader: R,
    progress: &ReadProgress,
) -> Result<Vec<i64>, InputError> {
    let mut values = Vec::new();

    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        let content = match line.split_once('#') {
            Some((before, _)) => before,
            None => line.as_str(),
        };

        for token in content
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|t| !t.is_empty())
        {
            let value = token.parse::<i64>().map_err(|_| InputError::Parse {
                line: idx + 1,
                token: token.to_string(),
            })?;
            values.push(value);

            if values.len() % TICK_EVERY == 0 {
                progress.update(values.len());
            }
        }
    }

    progress.finish();
    tracing::info!(count = values.len(), "input read");
    Ok(values)
}
