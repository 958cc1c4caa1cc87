//! 字符流
//!
//! 将源码缓冲区转换为带位置的字符序列，管线的叶子阶段

use std::str::Chars;

use super::position::{PositionedChar, SourcePosition};
use tracing::trace;

/// 字符流
///
/// 单次遍历；重新遍历需要在同一缓冲区上重新创建。
pub struct CharStream<'src> {
    chars: Chars<'src>,
    /// 下一个字符的位置
    position: SourcePosition,
}

impl<'src> CharStream<'src> {
    pub fn new(source: &'src str) -> Self {
        trace!(target: "gbc::source", bytes = source.len(), "Creating char stream");
        Self {
            chars: source.chars(),
            position: SourcePosition::start(),
        }
    }

    /// 获取下一个字符的位置
    pub fn position(&self) -> SourcePosition {
        self.position
    }
}

impl Iterator for CharStream<'_> {
    type Item = PositionedChar;

    fn next(&mut self) -> Option<PositionedChar> {
        let ch = self.chars.next()?;
        let item = PositionedChar::new(ch, self.position);
        self.position.advance(ch);
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.chars.size_hint()
    }
}
