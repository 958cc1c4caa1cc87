//! GBC 词法分析器
//!
//! 拉取式管线，每个阶段都是普通的 `Iterator`：
//! - 惰性：下游请求时才计算下一项，不缓存中间结果
//! - 位置追踪：每个字符携带行、列、字节偏移
//! - 错误显式传播：致命错误以 `Err(LexError)` 形式穿过管线

pub mod automaton;
pub mod block_comment;
pub mod error;
pub mod line_comment;
pub mod pipeline;
pub mod position;
pub mod stream;
pub mod token;
pub mod tokenizer;

pub use automaton::{LexGraph, LexNode, NodeId, NodeKind};
pub use block_comment::BlockCommentFilter;
pub use error::{LexError, LexResult};
pub use line_comment::LineCommentFilter;
pub use pipeline::{lex, tokenize, CharPipeline, SourceTokens, TokenPipeline, TokenizedSource};
pub use position::{PositionedChar, SourcePosition, TAB_WIDTH};
pub use stream::CharStream;
pub use token::{Token, TokenKind};
pub use tokenizer::Tokenizer;
