//! Lexer 错误类型
//!
//! 致命词法错误以 `Err` 沿管线向下游传播，驱动循环据此停止并报告位置。

use super::automaton::NodeId;
use super::position::SourcePosition;
use thiserror::Error;

/// 词法结果
pub type LexResult<T> = Result<T, LexError>;

/// 词法错误，包含出错位置
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LexError {
    /// 新一轮扫描的首字符不在自动机字母表内
    #[error("[{}:{}] Unknown character '{}'", .position.line, .position.column, .character.escape_default())]
    UnknownCharacter {
        character: char,
        position: SourcePosition,
    },

    /// 输入在块注释内结束，位置为开头的 `/*`
    #[error("[{}:{}] Unterminated block comment", .position.line, .position.column)]
    UnterminatedComment { position: SourcePosition },
}

impl LexError {
    /// 错误发生的位置
    pub fn position(&self) -> SourcePosition {
        match self {
            LexError::UnknownCharacter { position, .. } => *position,
            LexError::UnterminatedComment { position } => *position,
        }
    }

    /// 获取行号（1-based）
    pub fn line(&self) -> usize {
        self.position().line
    }

    /// 获取列号（1-based）
    pub fn column(&self) -> usize {
        self.position().column
    }
}

/// 转移表结构错误
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
    #[error("Transition graph has no root node")]
    MissingRoot,

    #[error("Root node must carry the no-match sentinel kind")]
    RootNotSentinel,

    #[error("Node {0:?} reuses the root sentinel kind")]
    SentinelReused(NodeId),

    #[error("Node {from:?} links to missing node {to:?}")]
    DanglingSuccessor { from: NodeId, to: NodeId },

    #[error("Node {0:?} accepts no characters")]
    EmptyAcceptSet(NodeId),

    #[error("Reachable leaf {0:?} carries no token kind")]
    NonTokenLeaf(NodeId),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_character_display() {
        let err = LexError::UnknownCharacter {
            character: '#',
            position: SourcePosition::new(3, 7, 20),
        };
        assert_eq!(err.to_string(), "[3:7] Unknown character '#'");
        assert_eq!((err.line(), err.column()), (3, 7));
    }

    #[test]
    fn test_unknown_control_character_is_escaped() {
        let err = LexError::UnknownCharacter {
            character: '\u{7}',
            position: SourcePosition::start(),
        };
        assert!(err.to_string().contains("\\u{7}"));
    }

    #[test]
    fn test_unterminated_comment_display() {
        let err = LexError::UnterminatedComment {
            position: SourcePosition::new(1, 2, 1),
        };
        assert_eq!(err.to_string(), "[1:2] Unterminated block comment");
        assert_eq!(err.position().byte_offset, 1);
    }
}
