use crate::config::ConfigError;
use crate::input::InputError;
use crate::output::OutputError;
use thiserror::Error;

/// Everything the command-line front end can fail with.
///
/// Selection itself never fails; these cover the I/O around it.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Input(#[from] InputError),

    #[error(transparent)]
    Output(#[from] OutputError),
}

impl Error {
    /// Process exit code: 2 for bad config or input, 3 when output can't be written.
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::Config(_) | Error::Input(_) => 2,
            Error::Output(_) => 3,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        let input: Error = InputError::Parse {
            line: 1,
            token: "x".to_string(),
        }
        .into();
        assert_eq!(input.exit_code(), 2);
        assert_eq!(input.to_string(), "line 1: not an integer: \"x\"");

        let output: Error = OutputError::Io(std::io::Error::other("disk full")).into();
        assert_eq!(output.exit_code(), 3);

        let config: Error = ConfigError::NoConfigDir.into();
        assert_eq!(config.exit_code(), 2);
    }
}
