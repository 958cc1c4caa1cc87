//! CLI 格式化输出
//!
//! 提供 token 渲染、命令行友好的错误显示和源码上下文打印。

use std::fmt::Write;

use gbc_config::OutputFormat;
use gbc_core::{LexError, Token, TAB_WIDTH};
use serde::Serialize;

/// JSON 输出的单条记录，附带数值编码
#[derive(Serialize)]
struct TokenRecord<'a, 'src> {
    code: u8,
    #[serde(flatten)]
    token: &'a Token<'src>,
}

/// 按格式渲染 token，每个 token 一行
pub fn render_tokens(tokens: &[Token<'_>], format: OutputFormat) -> Result<String, serde_json::Error> {
    let mut out = String::new();
    for token in tokens {
        match format {
            OutputFormat::Text => out.push_str(&token.to_string()),
            OutputFormat::Json => out.push_str(&serde_json::to_string(&TokenRecord {
                code: token.kind.code(),
                token,
            })?),
        }
        out.push('\n');
    }
    Ok(out)
}

/// 打印错误并显示源代码上下文
pub fn print_error_with_source(e: &LexError, source: &str) {
    eprintln!("❌ {}", e);
    print_source_context(source, e.line(), e.column());
}

pub fn print_source_context(source: &str, error_line: usize, error_col: usize) {
    eprint!("{}", source_context(source, error_line, error_col));
}

/// 源代码上下文（错误行前后几行），错误列下方放置 `^`
///
/// 制表符按列宽展开为空格，与错误列号的计数方式一致。
pub fn source_context(source: &str, error_line: usize, error_col: usize) -> String {
    const CONTEXT_LINES: usize = 5;

    let lines: Vec<&str> = source.lines().collect();
    let total_lines = lines.len();
    let mut out = String::new();

    if error_line == 0 || error_line > total_lines {
        return out;
    }

    let start_line = error_line.saturating_sub(CONTEXT_LINES).max(1);
    let end_line = (error_line + CONTEXT_LINES).min(total_lines);
    let width = end_line.to_string().len();
    let separator = "-".repeat(width + 1);
    let tab = " ".repeat(TAB_WIDTH);

    let _ = writeln!(out, "{separator}|--");
    for (line_idx, content) in (start_line..=end_line).zip(&lines[start_line - 1..end_line]) {
        let content = content.replace('\t', &tab);
        let _ = writeln!(out, "{line_idx:>width$} | {content}");
        if line_idx == error_line {
            let marker = " ".repeat(error_col.saturating_sub(1));
            let _ = writeln!(out, "{:width$} | {marker}^", "");
        }
    }
    let _ = writeln!(out, "{separator}|--");
    out
}
