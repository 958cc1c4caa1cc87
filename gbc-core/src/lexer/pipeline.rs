//! 管线组装
//!
//! 通过扩展 trait 把各阶段串成一条链：
//!
//! ```
//! use gbc_core::{CharPipeline, CharStream, TokenPipeline};
//!
//! let source = "a /* note */ += 1;";
//! let tokens: Vec<_> = CharStream::new(source)
//!     .strip_line_comments()
//!     .strip_block_comments()
//!     .tokenize(source)
//!     .collect::<Result<_, _>>()
//!     .unwrap();
//! assert_eq!(tokens.len(), 5);
//! ```

use super::block_comment::BlockCommentFilter;
use super::error::{LexError, LexResult};
use super::line_comment::LineCommentFilter;
use super::position::PositionedChar;
use super::stream::CharStream;
use super::token::Token;
use super::tokenizer::Tokenizer;
use tracing::debug_span;

/// 字符级阶段的组合方法
pub trait CharPipeline: Iterator<Item = PositionedChar> + Sized {
    fn strip_line_comments(self) -> LineCommentFilter<Self> {
        LineCommentFilter::new(self)
    }

    fn strip_block_comments(self) -> BlockCommentFilter<Self> {
        BlockCommentFilter::new(self)
    }
}

impl<I> CharPipeline for I where I: Iterator<Item = PositionedChar> {}

/// 把可能失败的字符流接入分词器
pub trait TokenPipeline: Iterator<Item = LexResult<PositionedChar>> + Sized {
    fn tokenize(self, source: &str) -> Tokenizer<'_, Self> {
        Tokenizer::new(source, self)
    }
}

impl<I> TokenPipeline for I where I: Iterator<Item = LexResult<PositionedChar>> {}

/// 完整管线的 token 迭代器
pub type SourceTokens<'src> =
    Tokenizer<'src, BlockCommentFilter<LineCommentFilter<CharStream<'src>>>>;

/// 构建完整的惰性管线
pub fn tokenize(source: &str) -> SourceTokens<'_> {
    CharStream::new(source)
        .strip_line_comments()
        .strip_block_comments()
        .tokenize(source)
}

/// 一次完整分词的结果
///
/// 出错前已产生的 token 仍然有效，与错误一起保留。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenizedSource<'src> {
    pub tokens: Vec<Token<'src>>,
    pub error: Option<LexError>,
}

impl<'src> TokenizedSource<'src> {
    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }

    pub fn into_result(self) -> Result<Vec<Token<'src>>, LexError> {
        match self.error {
            Some(e) => Err(e),
            None => Ok(self.tokens),
        }
    }

    /// 诊断文本：每行一个 `<code>: '<lexeme>'`
    pub fn render(&self) -> String {
        self.tokens
            .iter()
            .map(|token| format!("{token}\n"))
            .collect()
    }
}

/// 驱动完整管线直到 `Eos` 或第一个错误
pub fn lex(source: &str) -> TokenizedSource<'_> {
    debug_span!(target: "gbc::tokenizer", "lex", bytes = source.len()).in_scope(|| {
        let mut tokens = Vec::new();
        for item in tokenize(source) {
            match item {
                Ok(token) => tokens.push(token),
                Err(e) => {
                    return TokenizedSource {
                        tokens,
                        error: Some(e),
                    }
                }
            }
        }
        TokenizedSource {
            tokens,
            error: None,
        }
    })
}
