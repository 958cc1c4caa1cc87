//! CLI 日志系统初始化
//!
//! 基于 `tracing-subscriber` 实现分阶段日志控制。日志写到 stderr，
//! stdout 只留给 token 输出。

use std::io;

use clap::ValueEnum;
use gbc_config::{LogConfig, LogLevel, Phase};
use tracing::Level;
use tracing_subscriber::{
    filter::Targets, fmt, layer::SubscriberExt, util::SubscriberInitExt, Layer,
};

/// CLI 自身的日志目标
pub const CLI_TARGET: &str = "gbc::cli";

/// 日志输出格式
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    /// 彩色格式化（开发使用）
    Pretty,
    /// 紧凑格式
    Compact,
    /// JSON 格式（工具集成）
    Json,
}

pub fn to_level(level: LogLevel) -> Level {
    match level {
        LogLevel::Error => Level::ERROR,
        LogLevel::Warn => Level::WARN,
        LogLevel::Info => Level::INFO,
        LogLevel::Debug => Level::DEBUG,
        LogLevel::Trace => Level::TRACE,
    }
}

/// 按阶段构建过滤目标
pub fn targets(log_config: &LogConfig) -> Targets {
    let global = to_level(log_config.global);
    Phase::ALL
        .iter()
        .fold(Targets::new().with_default(global), |targets, phase| {
            targets.with_target(phase.target(), to_level(log_config.level_for(*phase)))
        })
        .with_target(CLI_TARGET, global)
}

/// 使用指定格式和日志配置初始化日志系统
///
/// 重复初始化时静默忽略。
pub fn init(log_config: &LogConfig, format: LogFormat) {
    let layer = create_format_layer(format).with_filter(targets(log_config));
    let _ = tracing_subscriber::registry().with(layer).try_init();
}

fn create_format_layer(format: LogFormat) -> impl Layer<tracing_subscriber::Registry> {
    match format {
        LogFormat::Pretty => fmt::layer()
            .pretty()
            .with_target(true)
            .with_timer(fmt::time::SystemTime)
            .with_writer(io::stderr)
            .boxed(),
        LogFormat::Compact => fmt::layer()
            .compact()
            .with_target(false)
            .without_time()
            .with_writer(io::stderr)
            .boxed(),
        LogFormat::Json => fmt::layer()
            .json()
            .with_target(true)
            .with_timer(fmt::time::SystemTime)
            .with_writer(io::stderr)
            .boxed(),
    }
}
