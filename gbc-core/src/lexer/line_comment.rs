//! 行注释过滤
//!
//! 删除 `//` 到行尾的内容；换行符本身保留给下游。

use std::iter::Peekable;

use super::position::PositionedChar;
use tracing::{debug, trace};

/// 行注释过滤器，只做一个字符的预读
pub struct LineCommentFilter<I>
where
    I: Iterator<Item = PositionedChar>,
{
    inner: Peekable<I>,
}

impl<I> LineCommentFilter<I>
where
    I: Iterator<Item = PositionedChar>,
{
    pub fn new(inner: I) -> Self {
        Self {
            inner: inner.peekable(),
        }
    }

    /// 丢弃注释体，停在换行符之前
    fn skip_to_line_end(&mut self) -> usize {
        let mut skipped = 0;
        while self.inner.next_if(|c| c.ch != '\n').is_some() {
            skipped += 1;
        }
        skipped
    }
}

impl<I> Iterator for LineCommentFilter<I>
where
    I: Iterator<Item = PositionedChar>,
{
    type Item = PositionedChar;

    fn next(&mut self) -> Option<PositionedChar> {
        loop {
            let c = self.inner.next()?;
            if c.ch != '/' {
                return Some(c);
            }

            // 末尾的 `/` 或非注释的 `/`：原样输出，后继字符留给下一轮
            if self.inner.next_if(|next| next.ch == '/').is_none() {
                trace!(target: "gbc::comments", line = c.line(), column = c.column(), "Lone slash passed through");
                return Some(c);
            }

            let skipped = self.skip_to_line_end();
            debug!(
                target: "gbc::comments",
                line = c.line(),
                column = c.column(),
                skipped,
                "Elided line comment"
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::stream::CharStream;

    fn filter(input: &str) -> String {
        crate::init_test_logger();
        LineCommentFilter::new(CharStream::new(input))
            .map(|c| c.ch)
            .collect()
    }

    #[test]
    fn test_no_comment_is_identity() {
        assert_eq!(filter("x = 1 / 2;\ny"), "x = 1 / 2;\ny");
    }

    #[test]
    fn test_comment_keeps_newline() {
        assert_eq!(filter("x=1;//c\ny=2;"), "x=1;\ny=2;");
    }

    #[test]
    fn test_comment_at_end_of_input() {
        assert_eq!(filter("a // trailing"), "a ");
    }

    #[test]
    fn test_trailing_slash() {
        assert_eq!(filter("a/"), "a/");
    }

    #[test]
    fn test_slash_follower_is_not_lost() {
        assert_eq!(filter("a/b"), "a/b");
        assert_eq!(filter("/*x*/"), "/*x*/");
    }

    #[test]
    fn test_three_slashes() {
        assert_eq!(filter("///doc\nz"), "\nz");
    }

    #[test]
    fn test_positions_after_comment_unaffected() {
        let chars: Vec<PositionedChar> =
            LineCommentFilter::new(CharStream::new("a//long comment\nb")).collect();
        let b = chars.last().unwrap();
        assert_eq!(b.ch, 'b');
        assert_eq!((b.line(), b.column()), (2, 1));
    }

    #[test]
    fn test_consecutive_comment_lines() {
        assert_eq!(filter("//one\n//two\nx"), "\n\nx");
    }
}
