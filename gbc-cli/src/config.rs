//! CLI 配置
//!
//! 读取可选的 JSON 配置文件，再叠加命令行参数

use std::fs;
use std::path::Path;

use gbc_config::{Config, LogLevel, OutputFormat};

use crate::error::CliError;

/// 读取配置文件；未指定路径时使用默认配置
pub fn load_config(path: Option<&Path>) -> Result<Config, CliError> {
    let Some(path) = path else {
        return Ok(Config::default());
    };

    let content = fs::read_to_string(path).map_err(|source| CliError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    parse_config(&content).map_err(|source| CliError::Config {
        path: path.to_path_buf(),
        source,
    })
}

pub fn parse_config(content: &str) -> Result<Config, serde_json::Error> {
    serde_json::from_str(content)
}

/// 命令行参数优先于配置文件
pub fn apply_overrides(
    config: &mut Config,
    format: Option<OutputFormat>,
    log_level: Option<LogLevel>,
) {
    if let Some(format) = format {
        config.output.format = format;
    }
    if let Some(level) = log_level {
        config.log.global = level;
    }
}

/// clap 的 `--log-level` 解析器
pub fn parse_log_level(s: &str) -> Result<LogLevel, String> {
    LogLevel::parse(s).ok_or_else(|| {
        format!("unknown log level '{s}' (expected silent, error, warn, info, debug or trace)")
    })
}

/// clap 的 `--format` 解析器
pub fn parse_format(s: &str) -> Result<OutputFormat, String> {
    match s.to_ascii_lowercase().as_str() {
        "text" => Ok(OutputFormat::Text),
        "json" => Ok(OutputFormat::Json),
        _ => Err(format!("unknown format '{s}' (expected text or json)")),
    }
}
