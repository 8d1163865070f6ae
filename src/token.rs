/// Possible tokens to find in the input string
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    /// A variable or function name: `[A-Za-z_$][A-Za-z0-9_$]*`
    Identifier(String),
    /// A decimal floating point literal
    Number(f64),
    /// A double-quoted string literal, without the quotes
    Str(String),
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `*`
    Star,
    /// `/`
    Slash,
    /// `(`
    LParen,
    /// `)`
    RParen,
    /// `,`
    Comma,
    /// A character sequence no rule accepts
    Invalid,
    /// The scan offset is at or past the end of the input
    End,
}

/// Token discriminant, used to remember the last token seen without
/// holding on to its payload
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// See [`Token::Identifier`]
    Identifier,
    /// See [`Token::Number`]
    Number,
    /// See [`Token::Str`]
    Str,
    /// See [`Token::Plus`]
    Plus,
    /// See [`Token::Minus`]
    Minus,
    /// See [`Token::Star`]
    Star,
    /// See [`Token::Slash`]
    Slash,
    /// See [`Token::LParen`]
    LParen,
    /// See [`Token::RParen`]
    RParen,
    /// See [`Token::Comma`]
    Comma,
    /// See [`Token::Invalid`]
    Invalid,
    /// See [`Token::End`]
    End,
}

impl Token {
    /// Get the payload-free discriminant for this token
    pub fn kind(&self) -> TokenKind {
        match *self {
            Token::Identifier(_) => TokenKind::Identifier,
            Token::Number(_) => TokenKind::Number,
            Token::Str(_) => TokenKind::Str,
            Token::Plus => TokenKind::Plus,
            Token::Minus => TokenKind::Minus,
            Token::Star => TokenKind::Star,
            Token::Slash => TokenKind::Slash,
            Token::LParen => TokenKind::LParen,
            Token::RParen => TokenKind::RParen,
            Token::Comma => TokenKind::Comma,
            Token::Invalid => TokenKind::Invalid,
            Token::End => TokenKind::End,
        }
    }
}
