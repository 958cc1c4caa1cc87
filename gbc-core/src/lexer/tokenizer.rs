//! 分词器
//!
//! 沿转移图做贪心最长匹配：只要下一个字符能被某个后继接受就继续延伸，
//! 停下时所在节点决定 token 种类。空白被吞掉，流末尾追加唯一的 `Eos`。

use std::iter::Peekable;

use super::automaton::{LexGraph, NodeId, NodeKind};
use super::error::{LexError, LexResult};
use super::position::{PositionedChar, SourcePosition};
use super::token::Token;
use tracing::{debug, trace, warn};

/// 分词器整体状态
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanState {
    Scanning,
    /// 已输出 `Eos`
    Finished,
    /// 已输出错误
    Failed,
}

/// 分词器
///
/// `source` 必须是上游字符流所基于的同一缓冲区，词素直接从中切片。
pub struct Tokenizer<'src, I>
where
    I: Iterator<Item = LexResult<PositionedChar>>,
{
    source: &'src str,
    input: Peekable<I>,
    graph: &'static LexGraph,
    state: ScanState,
    /// 最后一个已接收字符之后的位置
    end: SourcePosition,
}

impl<'src, I> Tokenizer<'src, I>
where
    I: Iterator<Item = LexResult<PositionedChar>>,
{
    /// `source` 必须与上游字符携带的字节偏移一致，否则词素无法切出
    pub fn new(source: &'src str, input: I) -> Self {
        Self::with_graph(source, input, LexGraph::standard())
    }

    /// 使用自定义转移图
    pub fn with_graph(source: &'src str, input: I, graph: &'static LexGraph) -> Self {
        trace!(target: "gbc::tokenizer", nodes = graph.len(), "Creating tokenizer");
        Self {
            source,
            input: input.peekable(),
            graph,
            state: ScanState::Scanning,
            end: SourcePosition::start(),
        }
    }

    /// 从根节点出发尽量延伸，返回停留节点和最后消费的字符
    fn extend(&mut self) -> (NodeId, Option<PositionedChar>) {
        let mut node = NodeId::ROOT;
        let mut last = None;

        while let Some(Ok(c)) = self.input.peek() {
            let Some(next) = self.graph.step(node, c.ch) else {
                break;
            };
            let c = *c;
            trace!(target: "gbc::tokenizer", ch = ?c.ch, node = next.index(), "Extended scan");
            node = next;
            last = Some(c);
            self.end = c.position.after(c.ch);
            self.input.next();
        }
        (node, last)
    }

    fn lexeme(&self, first: PositionedChar, last: PositionedChar) -> &'src str {
        let lexeme = self.source.get(first.offset()..last.end_offset());
        debug_assert!(
            lexeme.is_some(),
            "character offsets {}..{} do not slice the tokenizer source",
            first.offset(),
            last.end_offset()
        );
        lexeme.unwrap_or_default()
    }
}

impl<'src, I> Iterator for Tokenizer<'src, I>
where
    I: Iterator<Item = LexResult<PositionedChar>>,
{
    type Item = LexResult<Token<'src>>;

    fn next(&mut self) -> Option<LexResult<Token<'src>>> {
        while self.state == ScanState::Scanning {
            let first = match self.input.peek() {
                None => {
                    self.state = ScanState::Finished;
                    debug!(target: "gbc::tokenizer", line = self.end.line, column = self.end.column, "Reached end of stream");
                    return Some(Ok(Token::eos(self.end)));
                }
                Some(Err(_)) => {
                    self.state = ScanState::Failed;
                    return self.input.next().and_then(Result::err).map(Err);
                }
                Some(Ok(c)) => *c,
            };

            match self.extend() {
                (node, Some(last)) => match self.graph.node(node).kind() {
                    NodeKind::Whitespace => {
                        trace!(target: "gbc::tokenizer", line = first.line(), column = first.column(), "Discarded whitespace");
                    }
                    NodeKind::Token(kind) => {
                        let token = Token::new(kind, self.lexeme(first, last), first.position);
                        debug!(
                            target: "gbc::tokenizer",
                            kind = ?token.kind,
                            lexeme = token.lexeme,
                            line = token.line(),
                            column = token.column(),
                            "Produced token"
                        );
                        return Some(Ok(token));
                    }
                    NodeKind::Root => return Some(Err(self.unknown(first))),
                },
                (_, None) => return Some(Err(self.unknown(first))),
            }
        }
        None
    }
}

impl<I> Tokenizer<'_, I>
where
    I: Iterator<Item = LexResult<PositionedChar>>,
{
    fn unknown(&mut self, at: PositionedChar) -> LexError {
        self.state = ScanState::Failed;
        warn!(
            target: "gbc::tokenizer",
            ch = ?at.ch,
            line = at.line(),
            column = at.column(),
            "Unknown character"
        );
        LexError::UnknownCharacter {
            character: at.ch,
            position: at.position,
        }
    }
}
