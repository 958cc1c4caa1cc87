//! 最长匹配自动机
//!
//! 转移图是一个节点竞技场：先按稳定下标分配全部节点，再回填每个节点的
//! 后继列表，节点之间只通过 [`NodeId`] 互相引用。标准表在首次使用时构建一次，
//! 之后只读，被所有分词过程共享。

use once_cell::sync::Lazy;

use super::error::GraphError;
use super::token::TokenKind;

/// 节点在竞技场中的下标
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

impl NodeId {
    /// 根节点永远位于下标 0
    pub const ROOT: NodeId = NodeId(0);

    pub fn index(self) -> usize {
        self.0
    }
}

/// 扫描停在某节点时报告的种类
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    /// 尚未匹配任何字符
    Root,
    /// 空白，扫描后丢弃
    Whitespace,
    Token(TokenKind),
}

/// 自动机节点
#[derive(Debug, Clone)]
pub struct LexNode {
    /// 进入该节点所接受的字符集
    accepts: &'static str,
    kind: NodeKind,
    successors: Vec<NodeId>,
}

impl LexNode {
    pub fn accepts(&self, c: char) -> bool {
        self.accepts.contains(c)
    }

    pub fn kind(&self) -> NodeKind {
        self.kind
    }

    pub fn successors(&self) -> &[NodeId] {
        &self.successors
    }

    pub fn is_leaf(&self) -> bool {
        self.successors.is_empty()
    }
}

/// 两阶段构建器：`node` 分配，`link` 回填后继
pub struct GraphBuilder {
    nodes: Vec<LexNode>,
}

impl GraphBuilder {
    /// 创建只含根节点的构建器
    pub fn new() -> Self {
        Self {
            nodes: vec![LexNode {
                accepts: "",
                kind: NodeKind::Root,
                successors: Vec::new(),
            }],
        }
    }

    pub fn root(&self) -> NodeId {
        NodeId::ROOT
    }

    /// 分配新节点
    pub fn node(&mut self, accepts: &'static str, kind: NodeKind) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(LexNode {
            accepts,
            kind,
            successors: Vec::new(),
        });
        id
    }

    /// 追加后继，按追加顺序优先匹配
    pub fn link(&mut self, from: NodeId, to: &[NodeId]) -> &mut Self {
        self.nodes[from.0].successors.extend_from_slice(to);
        self
    }

    /// 运算符节点及其双字符后继（如 `+` 之后的 `++`、`+=`）
    pub fn operator(
        &mut self,
        accepts: &'static str,
        kind: TokenKind,
        followers: &[(&'static str, TokenKind)],
    ) -> NodeId {
        let head = self.node(accepts, NodeKind::Token(kind));
        let tails: Vec<NodeId> = followers
            .iter()
            .map(|&(chars, kind)| self.node(chars, NodeKind::Token(kind)))
            .collect();
        self.link(head, &tails);
        head
    }

    pub fn build(self) -> LexGraph {
        LexGraph { nodes: self.nodes }
    }
}

impl Default for GraphBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// 转移图
#[derive(Debug, Clone)]
pub struct LexGraph {
    nodes: Vec<LexNode>,
}

static STANDARD: Lazy<LexGraph> = Lazy::new(LexGraph::build_standard);

const ALPHA: &str = "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ_";
const DIGITS: &str = "0123456789";
const WHITESPACE: &str = " \t\r\n";

impl LexGraph {
    /// 进程级共享的标准转移表
    pub fn standard() -> &'static LexGraph {
        &STANDARD
    }

    fn build_standard() -> LexGraph {
        use TokenKind::*;

        let mut b = GraphBuilder::new();
        let root = b.root();

        let whitespace = b.node(WHITESPACE, NodeKind::Whitespace);
        let alpha = b.node(ALPHA, NodeKind::Token(Label));
        let alnum = b.node(DIGITS, NodeKind::Token(Label));
        let numeric = b.node(DIGITS, NodeKind::Token(Number));
        b.link(whitespace, &[whitespace])
            .link(alpha, &[alnum, alpha])
            .link(alnum, &[alnum, alpha])
            .link(numeric, &[numeric, alpha]);

        let operators = [
            b.operator("+", Plus, &[("+", Increment), ("=", PlusEqual)]),
            b.operator("-", Minus, &[("-", Decrement), ("=", MinusEqual)]),
            b.operator("&", And, &[("&", AndAnd), ("=", AndEqual)]),
            b.operator("|", Or, &[("|", OrOr), ("=", OrEqual)]),
            b.operator("^", Xor, &[("=", XorEqual)]),
            b.operator("!", Not, &[("=", NotEqual)]),
            b.operator("=", Assign, &[("=", Equal)]),
            b.operator("<", Less, &[("=", LessEqual)]),
            b.operator(">", Greater, &[("=", GreaterEqual)]),
        ];

        let punctuation = [
            ("(", OpenParen),
            (")", CloseParen),
            ("{", OpenBrace),
            ("}", CloseBrace),
            ("[", OpenBracket),
            ("]", CloseBracket),
            (".", Dot),
            (",", Comma),
            (";", Semicolon),
        ]
        .map(|(chars, kind)| b.node(chars, NodeKind::Token(kind)));

        b.link(root, &[whitespace, alpha, numeric])
            .link(root, &operators)
            .link(root, &punctuation);

        let graph = b.build();
        debug_assert_eq!(graph.validate(), Ok(()));
        graph
    }

    pub fn node(&self, id: NodeId) -> &LexNode {
        &self.nodes[id.0]
    }

    pub fn root(&self) -> &LexNode {
        self.node(NodeId::ROOT)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// 从 `from` 读入 `c` 后到达的节点；没有后继接受 `c` 时返回 None
    pub fn step(&self, from: NodeId, c: char) -> Option<NodeId> {
        self.node(from)
            .successors
            .iter()
            .copied()
            .find(|&next| self.node(next).accepts(c))
    }

    /// 检查结构不变量：根节点持有哨兵种类且不被复用，后继下标均有效，
    /// 非根节点的接受集非空，从根可达的叶子都带有 token 种类
    pub fn validate(&self) -> Result<(), GraphError> {
        let root = self.nodes.first().ok_or(GraphError::MissingRoot)?;
        if root.kind != NodeKind::Root {
            return Err(GraphError::RootNotSentinel);
        }

        for (index, node) in self.nodes.iter().enumerate() {
            let id = NodeId(index);
            if index > 0 {
                if node.kind == NodeKind::Root {
                    return Err(GraphError::SentinelReused(id));
                }
                if node.accepts.is_empty() {
                    return Err(GraphError::EmptyAcceptSet(id));
                }
            }
            if let Some(&to) = node.successors.iter().find(|to| to.0 >= self.nodes.len()) {
                return Err(GraphError::DanglingSuccessor { from: id, to });
            }
        }
        self.check_reachable_leaves()
    }

    /// 后继下标已确认有效
    fn check_reachable_leaves(&self) -> Result<(), GraphError> {
        let mut seen = vec![false; self.nodes.len()];
        let mut stack = vec![NodeId::ROOT];

        while let Some(id) = stack.pop() {
            if std::mem::replace(&mut seen[id.0], true) {
                continue;
            }
            let node = self.node(id);
            if node.is_leaf() && !matches!(node.kind, NodeKind::Token(_)) {
                return Err(GraphError::NonTokenLeaf(id));
            }
            stack.extend_from_slice(&node.successors);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// 沿转移图走完整个输入，返回停留节点的种类
    fn walk(input: &str) -> Option<NodeKind> {
        let graph = LexGraph::standard();
        let mut node = NodeId::ROOT;
        for c in input.chars() {
            node = graph.step(node, c)?;
        }
        Some(graph.node(node).kind())
    }

    #[test]
    fn test_standard_graph_is_valid() {
        assert_eq!(LexGraph::standard().validate(), Ok(()));
    }

    #[test]
    fn test_standard_graph_is_shared() {
        assert!(std::ptr::eq(LexGraph::standard(), LexGraph::standard()));
    }

    #[test]
    fn test_root_rejects_unknown() {
        let graph = LexGraph::standard();
        assert_eq!(graph.step(NodeId::ROOT, '#'), None);
        assert_eq!(graph.step(NodeId::ROOT, '/'), None);
        assert_eq!(graph.root().kind(), NodeKind::Root);
    }

    #[test]
    fn test_two_char_operators() {
        assert_eq!(walk("++"), Some(NodeKind::Token(TokenKind::Increment)));
        assert_eq!(walk("+="), Some(NodeKind::Token(TokenKind::PlusEqual)));
        assert_eq!(walk("-="), Some(NodeKind::Token(TokenKind::MinusEqual)));
        assert_eq!(walk("&&"), Some(NodeKind::Token(TokenKind::AndAnd)));
        assert_eq!(walk("|="), Some(NodeKind::Token(TokenKind::OrEqual)));
        assert_eq!(walk("^="), Some(NodeKind::Token(TokenKind::XorEqual)));
        assert_eq!(walk("=="), Some(NodeKind::Token(TokenKind::Equal)));
        assert_eq!(walk(">="), Some(NodeKind::Token(TokenKind::GreaterEqual)));
    }

    #[test]
    fn test_operator_leaves_do_not_extend() {
        assert_eq!(walk("+++"), None);
        assert_eq!(walk("==="), None);
        assert_eq!(walk("(("), None);
    }

    #[test]
    fn test_labels_and_numbers() {
        assert_eq!(walk("_x1"), Some(NodeKind::Token(TokenKind::Label)));
        assert_eq!(walk("x12y"), Some(NodeKind::Token(TokenKind::Label)));
        assert_eq!(walk("042"), Some(NodeKind::Token(TokenKind::Number)));
        assert_eq!(walk("1a"), Some(NodeKind::Token(TokenKind::Label)));
    }

    #[test]
    fn test_whitespace_loops() {
        assert_eq!(walk(" \t\r\n "), Some(NodeKind::Whitespace));
    }

    #[test]
    fn test_reachable_leaves_carry_real_kinds() {
        let graph = LexGraph::standard();
        let mut stack = vec![NodeId::ROOT];
        let mut seen = vec![false; graph.len()];
        while let Some(id) = stack.pop() {
            if std::mem::replace(&mut seen[id.index()], true) {
                continue;
            }
            let node = graph.node(id);
            if node.is_leaf() {
                assert!(matches!(node.kind(), NodeKind::Token(_)), "leaf {:?}", id);
            }
            stack.extend_from_slice(node.successors());
        }
        assert!(seen.iter().all(|&s| s), "every node is reachable");
    }

    #[test]
    fn test_validate_rejects_dangling_successor() {
        let mut b = GraphBuilder::new();
        let root = b.root();
        b.link(root, &[NodeId(7)]);
        assert_eq!(
            b.build().validate(),
            Err(GraphError::DanglingSuccessor {
                from: NodeId::ROOT,
                to: NodeId(7)
            })
        );
    }

    #[test]
    fn test_validate_rejects_reused_sentinel() {
        let mut b = GraphBuilder::new();
        let bad = b.node("x", NodeKind::Root);
        let root = b.root();
        b.link(root, &[bad]);
        assert_eq!(b.build().validate(), Err(GraphError::SentinelReused(bad)));
    }

    #[test]
    fn test_validate_rejects_whitespace_leaf() {
        let mut b = GraphBuilder::new();
        let space = b.node(" ", NodeKind::Whitespace);
        let root = b.root();
        b.link(root, &[space]);
        assert_eq!(b.build().validate(), Err(GraphError::NonTokenLeaf(space)));
    }

    #[test]
    fn test_validate_rejects_bare_root() {
        assert_eq!(
            GraphBuilder::new().build().validate(),
            Err(GraphError::NonTokenLeaf(NodeId::ROOT))
        );
    }

    #[test]
    fn test_validate_ignores_unreachable_nodes() {
        let mut b = GraphBuilder::new();
        let plus = b.node("+", NodeKind::Token(TokenKind::Plus));
        b.node(" ", NodeKind::Whitespace);
        let root = b.root();
        b.link(root, &[plus]);
        assert_eq!(b.build().validate(), Ok(()));
    }

    #[test]
    fn test_validate_rejects_empty_accept_set() {
        let mut b = GraphBuilder::new();
        let bad = b.node("", NodeKind::Whitespace);
        assert_eq!(b.build().validate(), Err(GraphError::EmptyAcceptSet(bad)));
    }
}
