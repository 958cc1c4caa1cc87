//! GBC Token 类型定义

use std::fmt;

use super::position::SourcePosition;
use serde::Serialize;

/// Token 种类
///
/// 数值编码用于诊断输出（`<code>: '<lexeme>'`）。编码 0 留给自动机根节点、
/// 编码 2 留给空白，两者都不会出现在 token 流中。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[repr(u8)]
pub enum TokenKind {
    // 流结束
    Eos = 1,

    // 标识符与字面量 (3-4)
    Label = 3,
    Number,

    // 算术运算符 (5-10)
    Plus,
    Increment,
    PlusEqual,
    Minus,
    Decrement,
    MinusEqual,

    // 位/逻辑运算符 (11-20)
    And,
    AndAnd,
    AndEqual,
    Or,
    OrOr,
    OrEqual,
    Xor,
    XorEqual,
    Not,
    NotEqual,

    // 赋值与比较 (21-26)
    Assign,
    Equal,
    Less,
    LessEqual,
    Greater,
    GreaterEqual,

    // 分隔符 (27-35)
    OpenParen,
    CloseParen,
    OpenBrace,
    CloseBrace,
    OpenBracket,
    CloseBracket,
    Dot,
    Comma,
    Semicolon,
}

impl TokenKind {
    /// 诊断输出使用的数值编码
    pub fn code(self) -> u8 {
        self as u8
    }
}

impl From<TokenKind> for u8 {
    fn from(val: TokenKind) -> Self {
        val.code()
    }
}

/// Token，词素借用自源码缓冲区
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Token<'src> {
    pub kind: TokenKind,
    pub lexeme: &'src str,
    /// 词素首字符的位置
    pub position: SourcePosition,
}

impl<'src> Token<'src> {
    pub fn new(kind: TokenKind, lexeme: &'src str, position: SourcePosition) -> Self {
        Self {
            kind,
            lexeme,
            position,
        }
    }

    /// 流结束标记，词素为空
    pub fn eos(position: SourcePosition) -> Self {
        Self::new(TokenKind::Eos, "", position)
    }

    pub fn is_eos(&self) -> bool {
        self.kind == TokenKind::Eos
    }

    pub fn line(&self) -> usize {
        self.position.line
    }

    pub fn column(&self) -> usize {
        self.position.column
    }
}

impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: '{}'", self.kind.code(), self.lexeme)
    }
}
