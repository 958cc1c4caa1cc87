//! CLI 错误类型

use std::path::PathBuf;

use gbc_core::LexError;
use thiserror::Error;

/// CLI 运行期间的错误
#[derive(Debug, Error)]
pub enum CliError {
    #[error("Cannot read '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config '{}': {source}", .path.display())]
    Config {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("Failed to serialize tokens: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error(transparent)]
    Lex(#[from] LexError),
}

impl CliError {
    /// 进程退出码：词法错误为 2，其余为 1
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Lex(_) => 2,
            _ => 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gbc_core::SourcePosition;

    #[test]
    fn test_exit_codes() {
        let io = CliError::Io {
            path: PathBuf::from("missing.txt"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        };
        assert_eq!(io.exit_code(), 1);

        let lex = CliError::from(LexError::UnterminatedComment {
            position: SourcePosition::start(),
        });
        assert_eq!(lex.exit_code(), 2);
    }

    #[test]
    fn test_display() {
        let io = CliError::Io {
            path: PathBuf::from("missing.txt"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        };
        assert_eq!(io.to_string(), "Cannot read 'missing.txt': not found");

        let lex = CliError::from(LexError::UnknownCharacter {
            character: '#',
            position: SourcePosition::new(1, 2, 1),
        });
        assert_eq!(lex.to_string(), "[1:2] Unknown character '#'");
    }
}
