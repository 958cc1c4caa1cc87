//! GBC Config - Pure configuration data structures
//!
//! This crate contains only data structures, no logic or global state.
//! It serves as the shared configuration vocabulary across all GBC crates.

use serde::Deserialize;

/// Lexer pipeline phase, used for phase-specific log filtering
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    /// Raw character enumeration
    Source,
    /// Line and block comment elision
    Comments,
    /// Longest-match tokenization
    Tokenizer,
}

impl Phase {
    /// All phases in pipeline order
    pub const ALL: [Phase; 3] = [Phase::Source, Phase::Comments, Phase::Tokenizer];

    /// Get the log target name for this phase
    pub fn target(&self) -> &'static str {
        match self {
            Phase::Source => "gbc::source",
            Phase::Comments => "gbc::comments",
            Phase::Tokenizer => "gbc::tokenizer",
        }
    }
}

/// Log verbosity
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    /// Parse a level name, case-insensitive. `silent` is treated as `error`.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "silent" | "error" => Some(LogLevel::Error),
            "warn" => Some(LogLevel::Warn),
            "info" => Some(LogLevel::Info),
            "debug" => Some(LogLevel::Debug),
            "trace" => Some(LogLevel::Trace),
            _ => None,
        }
    }
}

/// Logging configuration with optional per-phase overrides
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// Default level for every target
    pub global: LogLevel,
    /// Character stream level (None falls back to global)
    pub source: Option<LogLevel>,
    /// Comment filter level
    pub comments: Option<LogLevel>,
    /// Tokenizer level
    pub tokenizer: Option<LogLevel>,
}

impl LogConfig {
    /// Get the effective level for a phase
    pub fn level_for(&self, phase: Phase) -> LogLevel {
        let specific = match phase {
            Phase::Source => self.source,
            Phase::Comments => self.comments,
            Phase::Tokenizer => self.tokenizer,
        };
        specific.unwrap_or(self.global)
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            global: LogLevel::Warn,
            source: None,
            comments: None,
            tokenizer: None,
        }
    }
}

/// Token rendering format
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// `<kind>: '<lexeme>'` per line
    #[default]
    Text,
    /// One JSON object per line
    Json,
}

/// Output configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub format: OutputFormat,
}

/// Top-level configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub log: LogConfig,
    pub output: OutputConfig,
}
