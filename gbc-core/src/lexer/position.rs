//! 源代码位置追踪
//!
//! - line/column: 人类可读的错误显示（1-based）
//! - byte_offset: 切片词素用的字节下标（0-based）

use serde::Serialize;

/// 制表符占用的列宽
pub const TAB_WIDTH: usize = 4;

/// 源代码位置
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SourcePosition {
    /// 行号，1-based
    pub line: usize,
    /// 列号，1-based，制表符按 4 列计
    pub column: usize,
    /// 字节偏移，0-based
    pub byte_offset: usize,
}

impl SourcePosition {
    pub fn new(line: usize, column: usize, byte_offset: usize) -> Self {
        Self {
            line,
            column,
            byte_offset,
        }
    }

    /// 文件起始位置
    pub fn start() -> Self {
        Self::new(1, 1, 0)
    }

    /// 越过一个字符
    pub fn advance(&mut self, c: char) {
        match c {
            '\n' => {
                self.line += 1;
                self.column = 1;
            }
            '\t' => self.column += TAB_WIDTH,
            _ => self.column += 1,
        }
        self.byte_offset += c.len_utf8();
    }

    /// 返回越过 `c` 之后的位置
    pub fn after(mut self, c: char) -> Self {
        self.advance(c);
        self
    }
}

impl Default for SourcePosition {
    fn default() -> Self {
        Self::start()
    }
}

/// 带位置的字符，管线中流动的基本单元
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PositionedChar {
    pub ch: char,
    pub position: SourcePosition,
}

impl PositionedChar {
    pub fn new(ch: char, position: SourcePosition) -> Self {
        Self { ch, position }
    }

    /// 块注释被消除后留下的占位空格，位置取注释开头的 `/`
    pub fn synthetic_space(at: SourcePosition) -> Self {
        Self::new(' ', at)
    }

    pub fn line(&self) -> usize {
        self.position.line
    }

    pub fn column(&self) -> usize {
        self.position.column
    }

    pub fn offset(&self) -> usize {
        self.position.byte_offset
    }

    /// 该字符之后的字节偏移（词素右端点）
    pub fn end_offset(&self) -> usize {
        self.position.byte_offset + self.ch.len_utf8()
    }
}
