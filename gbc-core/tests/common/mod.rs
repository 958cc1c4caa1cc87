//! 测试辅助工具
//!
//! 提供端到端分词测试的辅助函数

#![allow(dead_code)]

use gbc_core::{lex, CharPipeline, CharStream, LexError, TokenKind};

/// 分词并返回 (种类, 词素) 列表；遇到错误时 panic
pub fn lex_pairs(source: &str) -> Vec<(TokenKind, &str)> {
    lex(source)
        .into_result()
        .unwrap_or_else(|e| panic!("unexpected lex error for {source:?}: {e}"))
        .into_iter()
        .map(|t| (t.kind, t.lexeme))
        .collect()
}

/// 只取种类
pub fn lex_kinds(source: &str) -> Vec<TokenKind> {
    lex_pairs(source).into_iter().map(|(kind, _)| kind).collect()
}

/// 分词并返回出错前的词素与错误
pub fn lex_until_error(source: &str) -> (Vec<&str>, LexError) {
    let output = lex(source);
    let lexemes = output.tokens.iter().map(|t| t.lexeme).collect();
    let error = output
        .error
        .unwrap_or_else(|| panic!("expected lex error for {source:?}"));
    (lexemes, error)
}

/// 两个注释过滤阶段之后的字符序列
pub fn filtered_chars(source: &str) -> Result<Vec<(char, usize, usize, usize)>, LexError> {
    CharStream::new(source)
        .strip_line_comments()
        .strip_block_comments()
        .map(|c| c.map(|c| (c.ch, c.line(), c.column(), c.offset())))
        .collect()
}

/// 原始字符序列
pub fn raw_chars(source: &str) -> Vec<(char, usize, usize, usize)> {
    CharStream::new(source)
        .map(|c| (c.ch, c.line(), c.column(), c.offset()))
        .collect()
}
