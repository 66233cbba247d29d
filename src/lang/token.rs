pub use super::lexeme::Lexeme;

/// Separates the enter and restore directories carried by an embedded token.
pub const DATA_SEPARATOR: u8 = 0;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub lexeme: Lexeme,
    pub data: Vec<u8>,
    pub children: TokenCollection,
}

impl Token {
    pub fn new(lexeme: Lexeme) -> Token {
        Token {
            lexeme,
            data: vec![],
            children: TokenCollection::new(),
        }
    }

    pub fn with_data(lexeme: Lexeme, data: &[u8]) -> Token {
        Token {
            lexeme,
            data: data.to_vec(),
            children: TokenCollection::new(),
        }
    }

    /// A sub-program that runs with `enter` as its working directory
    /// and switches back to `restore` afterwards.
    pub fn embedded(enter: &[u8], restore: &[u8], children: TokenCollection) -> Token {
        let mut data = Vec::with_capacity(enter.len() + restore.len() + 1);
        data.extend_from_slice(enter);
        data.push(DATA_SEPARATOR);
        data.extend_from_slice(restore);
        Token {
            lexeme: Lexeme::Embedded,
            data,
            children,
        }
    }

    /// Splits embedded data into its enter and restore directories.
    pub fn directories(&self) -> Option<(&[u8], &[u8])> {
        let at = self.data.iter().position(|&b| b == DATA_SEPARATOR)?;
        Some((&self.data[..at], &self.data[at + 1..]))
    }
}

impl From<Lexeme> for Token {
    fn from(lexeme: Lexeme) -> Self {
        Token::new(lexeme)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TokenCollection {
    tokens: Vec<Token>,
}

impl TokenCollection {
    pub fn new() -> TokenCollection {
        TokenCollection { tokens: vec![] }
    }
    pub fn with_capacity(capacity: usize) -> TokenCollection {
        TokenCollection {
            tokens: Vec::with_capacity(capacity),
        }
    }
    pub fn push(&mut self, token: Token) {
        self.tokens.push(token)
    }
    pub fn last_lexeme(&self) -> Lexeme {
        match self.tokens.last() {
            Some(token) => token.lexeme,
            None => Lexeme::Invalid,
        }
    }
    pub fn last_mut(&mut self) -> Option<&mut Token> {
        self.tokens.last_mut()
    }
    pub fn lexemes(&self) -> Vec<Lexeme> {
        self.tokens.iter().map(|t| t.lexeme).collect()
    }
    /// Lexemes with separators and no-ops filtered out.
    pub fn useful_lexemes(&self) -> Vec<Lexeme> {
        self.tokens
            .iter()
            .map(|t| t.lexeme)
            .filter(|l| !l.is_useless())
            .collect()
    }
    pub fn into_vec(self) -> Vec<Token> {
        self.tokens
    }
}

/// Index of the closest token before `index` that is not a separator or no-op.
pub fn prev_useful(tokens: &[Token], index: usize) -> Option<usize> {
    tokens[..index.min(tokens.len())]
        .iter()
        .rposition(|t| !t.lexeme.is_useless())
}

impl std::ops::Deref for TokenCollection {
    type Target = [Token];
    fn deref(&self) -> &[Token] {
        &self.tokens
    }
}

impl std::ops::DerefMut for TokenCollection {
    fn deref_mut(&mut self) -> &mut [Token] {
        &mut self.tokens
    }
}

impl From<Vec<Token>> for TokenCollection {
    fn from(tokens: Vec<Token>) -> Self {
        TokenCollection { tokens }
    }
}

impl std::iter::FromIterator<Token> for TokenCollection {
    fn from_iter<I: IntoIterator<Item = Token>>(iter: I) -> Self {
        TokenCollection {
            tokens: iter.into_iter().collect(),
        }
    }
}

impl std::fmt::Display for TokenCollection {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        fn walk(
            f: &mut std::fmt::Formatter,
            tokens: &[Token],
            indent: usize,
        ) -> std::fmt::Result {
            for token in tokens {
                writeln!(f, "{:w$}lexeme: {}", "", token.lexeme, w = indent * 4)?;
                walk(f, &token.children, indent + 1)?;
            }
            Ok(())
        }
        walk(f, &self.tokens, 0)
    }
}
