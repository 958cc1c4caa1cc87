//! GBC Core - 词法前端（纯逻辑，无 IO）
//!
//! 将源码文本转换为分类 token 流。管线由四个惰性阶段组成，
//! 由 Tokenizer 逐个拉取字符驱动：
//!
//! ```text
//! CharStream -> LineCommentFilter -> BlockCommentFilter -> Tokenizer
//! ```
//!
//! 只操作内存中的数据，不读取文件，也不输出到终端。

pub mod lexer;

// 重导出常用类型
pub use lexer::{
    lex, tokenize, BlockCommentFilter, CharPipeline, CharStream, LexError, LineCommentFilter,
    PositionedChar, SourcePosition, SourceTokens, Token, TokenKind, TokenPipeline,
    TokenizedSource, Tokenizer, TAB_WIDTH,
};

/// 为当前测试初始化简单日志（输出到测试捕获）
#[cfg(test)]
pub(crate) fn init_test_logger() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_test_writer()
        .try_init();
}
