//! 块注释过滤
//!
//! 删除 `/* ... */`，支持任意深度嵌套。每段被删除的注释替换为一个
//! 位于开头 `/` 处的空格，保证注释两侧的 token 不会粘连。

use std::iter::Peekable;

use super::error::{LexError, LexResult};
use super::position::{PositionedChar, SourcePosition};
use tracing::{debug, trace, warn};

/// 注释内部的两字符确认状态
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Confirm {
    /// 无待确认
    None,
    /// 见到 `/`，等待 `*` 确认嵌套开始
    PrimedEntry,
    /// 见到 `*`，等待 `/` 确认结束
    PrimedExit,
}

/// 块注释过滤器
pub struct BlockCommentFilter<I>
where
    I: Iterator<Item = PositionedChar>,
{
    inner: Peekable<I>,
    /// 非注释 `/` 之后的字符，原样输出，不再参与注释判断
    pending: Option<PositionedChar>,
    failed: bool,
}

impl<I> BlockCommentFilter<I>
where
    I: Iterator<Item = PositionedChar>,
{
    pub fn new(inner: I) -> Self {
        Self {
            inner: inner.peekable(),
            pending: None,
            failed: false,
        }
    }

    /// 开头的 `/*` 已被消费，跳过直到深度归零
    fn skip_comment(&mut self, opener: SourcePosition) -> LexResult<()> {
        let mut depth: usize = 1;
        let mut state = Confirm::None;

        loop {
            let Some(c) = self.inner.next() else {
                warn!(
                    target: "gbc::comments",
                    line = opener.line,
                    column = opener.column,
                    depth,
                    "Input ended inside block comment"
                );
                return Err(LexError::UnterminatedComment { position: opener });
            };

            state = match (state, c.ch) {
                (Confirm::PrimedExit, '/') => {
                    depth -= 1;
                    if depth == 0 {
                        return Ok(());
                    }
                    trace!(target: "gbc::comments", depth, "Closed nested block comment");
                    Confirm::None
                }
                (Confirm::PrimedEntry, '*') => {
                    depth += 1;
                    trace!(target: "gbc::comments", depth, "Opened nested block comment");
                    Confirm::None
                }
                (Confirm::PrimedExit, '*') | (Confirm::None, '*') => Confirm::PrimedExit,
                (Confirm::PrimedEntry, '/') | (Confirm::None, '/') => Confirm::PrimedEntry,
                _ => Confirm::None,
            };
        }
    }
}

impl<I> Iterator for BlockCommentFilter<I>
where
    I: Iterator<Item = PositionedChar>,
{
    type Item = LexResult<PositionedChar>;

    fn next(&mut self) -> Option<LexResult<PositionedChar>> {
        if self.failed {
            return None;
        }

        if let Some(c) = self.pending.take() {
            return Some(Ok(c));
        }

        let c = self.inner.next()?;
        if c.ch != '/' {
            return Some(Ok(c));
        }
        if self.inner.next_if(|next| next.ch == '*').is_none() {
            self.pending = self.inner.next();
            return Some(Ok(c));
        }

        match self.skip_comment(c.position) {
            Ok(()) => {
                debug!(
                    target: "gbc::comments",
                    line = c.line(),
                    column = c.column(),
                    "Elided block comment"
                );
                Some(Ok(PositionedChar::synthetic_space(c.position)))
            }
            Err(e) => {
                self.failed = true;
                Some(Err(e))
            }
        }
    }
}
