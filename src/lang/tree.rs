use super::token::*;
use super::Error;

type Result<T> = std::result::Result<T, Error>;

pub type NodeId = usize;

/// ## Abstract syntax tree
///
/// Nodes live in an arena owned by [`Tree`]; parents refer to their
/// children by index. The program root is always node zero.

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Parent {
        lexeme: Lexeme,
        children: Vec<NodeId>,
        data: Vec<u8>,
    },
    Terminal {
        lexeme: Lexeme,
        data: Vec<u8>,
    },
}

impl Node {
    pub fn lexeme(&self) -> Lexeme {
        match self {
            Node::Parent { lexeme, .. } | Node::Terminal { lexeme, .. } => *lexeme,
        }
    }
    pub fn data(&self) -> &[u8] {
        match self {
            Node::Parent { data, .. } | Node::Terminal { data, .. } => data,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tree {
    nodes: Vec<Node>,
}

impl Tree {
    pub const ROOT: NodeId = 0;

    pub fn build(tokens: &[Token]) -> Result<Tree> {
        let mut builder = TreeBuilder {
            nodes: vec![Node::Parent {
                lexeme: Lexeme::StartProgram,
                children: vec![],
                data: vec![],
            }],
            parents: vec![Tree::ROOT],
        };
        for token in tokens {
            builder.add(token, false)?;
        }
        if !builder.parents.is_empty() {
            return Err(error!(UnclosedSection; "PROGRAM NOT TERMINATED"));
        }
        Ok(Tree {
            nodes: builder.nodes,
        })
    }

    pub fn node(&self, id: NodeId) -> Result<&Node> {
        self.nodes.get(id).ok_or_else(|| error!(NodeNotFound))
    }

    pub fn root(&self) -> Result<&Node> {
        self.node(Tree::ROOT)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.len() <= 1
    }

    /// Lexemes of the children of `id`, in order.
    pub fn child_lexemes(&self, id: NodeId) -> Vec<Lexeme> {
        match self.nodes.get(id) {
            Some(Node::Parent { children, .. }) => children
                .iter()
                .filter_map(|&child| self.nodes.get(child))
                .map(Node::lexeme)
                .collect(),
            _ => vec![],
        }
    }
}

struct TreeBuilder {
    nodes: Vec<Node>,
    parents: Vec<NodeId>,
}

impl TreeBuilder {
    fn add(&mut self, token: &Token, nested: bool) -> Result<()> {
        let lexeme = token.lexeme;
        match lexeme {
            Lexeme::StartProgram | Lexeme::Separator | Lexeme::Empty => Ok(()),
            Lexeme::EndProgram => {
                if nested {
                    return Ok(());
                }
                match self.parents.pop() {
                    Some(Tree::ROOT) => Ok(()),
                    Some(_) => Err(error!(UnclosedSection)),
                    None => Err(error!(ParentNodeNotFound)),
                }
            }
            Lexeme::Embedded => {
                let (enter, restore) = match token.directories() {
                    Some(dirs) => dirs,
                    None => return Err(error!(InternalError; "EMBEDDED TOKEN WITHOUT DIRECTORIES")),
                };
                self.terminal(Lexeme::ChangeDir, enter)?;
                for child in token.children.iter() {
                    self.add(child, true)?;
                }
                self.terminal(Lexeme::ChangeDir, restore)
            }
            _ if lexeme.is_section_start() => {
                let id = self.attach(Node::Parent {
                    lexeme,
                    children: vec![],
                    data: token.data.clone(),
                })?;
                self.parents.push(id);
                Ok(())
            }
            _ if lexeme.is_section_end() => {
                if self.parents.len() <= 1 {
                    return Err(error!(ParentNodeNotFound));
                }
                let id = self.parents.pop().ok_or_else(|| error!(ParentNodeNotFound))?;
                if !token.data.is_empty() {
                    if let Some(Node::Parent { data, .. }) = self.nodes.get_mut(id) {
                        *data = token.data.clone();
                    }
                }
                Ok(())
            }
            _ if lexeme.is_terminal() => self.terminal(lexeme, &token.data),
            _ => Err(error!(SyntaxError; "UNRECOGNIZED LEXEME")),
        }
    }

    fn terminal(&mut self, lexeme: Lexeme, data: &[u8]) -> Result<()> {
        self.attach(Node::Terminal {
            lexeme,
            data: data.to_vec(),
        })
        .map(|_| ())
    }

    /// Appends `node` as the last child of the innermost open parent.
    fn attach(&mut self, node: Node) -> Result<NodeId> {
        let parent = *self.parents.last().ok_or_else(|| error!(ParentNodeNotFound))?;
        let id = self.nodes.len();
        self.nodes.push(node);
        match self.nodes.get_mut(parent) {
            Some(Node::Parent { children, .. }) => {
                children.push(id);
                Ok(id)
            }
            _ => Err(error!(NodeNotFound)),
        }
    }
}
