use logos::Logos;

use crate::error::LexError;

/// Represents a lexical token in the source input.
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// This enum defines all recognized tokens in the language.
#[derive(Logos, Debug, PartialEq, Eq, Clone)]
#[logos(extras = LexerExtras)]
pub enum Token {
    /// Integer literal tokens, such as `42`.
    #[regex(r"[0-9]+", parse_integer)]
    Number(i64),
    /// One of the reserved words of the language.
    #[token("dhori", parse_keyword)]
    #[token("dekhao", parse_keyword)]
    #[token("jodi", parse_keyword)]
    #[token("nahole", parse_keyword)]
    #[token("nahole-jodi", parse_keyword)]
    #[token("ghuri", parse_keyword)]
    Keyword(Keyword),
    /// Identifier tokens such as `x` or `total-sum`.
    #[regex(r"[a-zA-Z][a-zA-Z0-9-]*", |lex| lex.slice().to_string())]
    Ident(String),
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `=`
    #[token("=")]
    Assign,
    /// `==`
    #[token("==")]
    EqualEqual,
    /// `>`
    #[token(">")]
    Greater,
    /// `<`
    #[token("<")]
    Less,
    /// `>=`
    #[token(">=")]
    GreaterEqual,
    /// `<=`
    #[token("<=")]
    LessEqual,
    /// `;`
    #[token(";")]
    Semi,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `{`
    #[token("{")]
    LBrace,
    /// `}`
    #[token("}")]
    RBrace,
    /// Newlines only move the position counters.
    #[token("\n", |lex| {
        lex.extras.line += 1;
        lex.extras.line_start = lex.span().end;
        logos::Skip
    })]
    NewLine,
    /// Spaces, tabs and feeds.
    #[regex(r"[ \t\r\f\v]+", logos::skip)]
    Ignored,
    /// End of input. Appended once by [`tokenize`], never matched.
    Eof,
}

/// The closed set of reserved words.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Keyword {
    /// `dhori`, declares a variable.
    Dhori,
    /// `dekhao`, prints a value.
    Dekhao,
    /// `jodi`, starts a conditional.
    Jodi,
    /// `nahole`, introduces the else block.
    Nahole,
    /// `nahole-jodi`. Reserved, but no statement accepts it.
    NaholeJodi,
    /// `ghuri`, starts a loop.
    Ghuri,
}

impl std::fmt::Display for Keyword {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let keyword = match self {
            Self::Dhori => "dhori",
            Self::Dekhao => "dekhao",
            Self::Jodi => "jodi",
            Self::Nahole => "nahole",
            Self::NaholeJodi => "nahole-jodi",
            Self::Ghuri => "ghuri",
        };
        write!(f, "{keyword}")
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(n) => write!(f, "number {n}"),
            Self::Keyword(keyword) => write!(f, "keyword '{keyword}'"),
            Self::Ident(name) => write!(f, "identifier '{name}'"),
            Self::Plus => write!(f, "'+'"),
            Self::Minus => write!(f, "'-'"),
            Self::Star => write!(f, "'*'"),
            Self::Slash => write!(f, "'/'"),
            Self::Assign => write!(f, "'='"),
            Self::EqualEqual => write!(f, "'=='"),
            Self::Greater => write!(f, "'>'"),
            Self::Less => write!(f, "'<'"),
            Self::GreaterEqual => write!(f, "'>='"),
            Self::LessEqual => write!(f, "'<='"),
            Self::Semi => write!(f, "';'"),
            Self::LParen => write!(f, "'('"),
            Self::RParen => write!(f, "')'"),
            Self::LBrace => write!(f, "'{{'"),
            Self::RBrace => write!(f, "'}}'"),
            Self::NewLine => write!(f, "newline"),
            Self::Ignored => write!(f, "whitespace"),
            Self::Eof => write!(f, "end of input"),
        }
    }
}

/// A 1-based source location.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Position {
    /// Line number, starting at 1.
    pub line:   usize,
    /// Column in characters, starting at 1.
    pub column: usize,
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "line {}, column {}", self.line, self.column)
    }
}

/// A token together with the position of its first character.
pub type SpannedToken = (Token, Position);

/// Additional information carried by the lexer during tokenization.
///
/// Tracks the current line and where it starts so that columns can be
/// derived from token spans.
pub struct LexerExtras {
    /// The current line number in the source being tokenized.
    pub line:       usize,
    /// Byte offset of the first character of the current line.
    pub line_start: usize,
}

impl Default for LexerExtras {
    fn default() -> Self {
        Self { line:       1,
               line_start: 0, }
    }
}

/// Converts source text into tokens terminated by a single [`Token::Eof`].
///
/// The first unrecognized character stops tokenization; there is no
/// resynchronization.
///
/// # Errors
/// - [`LexError::UnexpectedCharacter`] for characters outside the language.
/// - [`LexError::LiteralTooLarge`] for integers that do not fit in `i64`.
///
/// # Example
/// ```
/// use bpp::interpreter::lexer::{Keyword, Token, tokenize};
///
/// let tokens = tokenize("dhori x = 5;").unwrap();
/// let kinds: Vec<_> = tokens.into_iter().map(|(token, _)| token).collect();
///
/// assert_eq!(kinds,
///            vec![Token::Keyword(Keyword::Dhori),
///                 Token::Ident("x".to_string()),
///                 Token::Assign,
///                 Token::Number(5),
///                 Token::Semi,
///                 Token::Eof]);
/// ```
pub fn tokenize(source: &str) -> Result<Vec<SpannedToken>, LexError> {
    let mut tokens = Vec::new();
    let mut lexer = Token::lexer_with_extras(source, LexerExtras::default());

    while let Some(token) = lexer.next() {
        let span = lexer.span();
        let position = position_of(source, &lexer.extras, span.start);

        if let Ok(tok) = token {
            tokens.push((tok, position));
            continue;
        }

        let slice = lexer.slice();
        if !slice.is_empty() && slice.bytes().all(|b| b.is_ascii_digit()) {
            return Err(LexError::LiteralTooLarge { literal: slice.to_string(),
                                                   position });
        }

        match slice.chars().next() {
            Some(c) if c.is_whitespace() => {},
            Some(character) => {
                return Err(LexError::UnexpectedCharacter { character, position });
            },
            None => break,
        }
    }

    let eof = position_of(source, &lexer.extras, source.len());
    tokens.push((Token::Eof, eof));

    Ok(tokens)
}

/// Computes the position of `offset` relative to the line the lexer is on.
fn position_of(source: &str, extras: &LexerExtras, offset: usize) -> Position {
    let start = extras.line_start.min(offset);
    let column = source.get(start..offset)
                       .map_or(offset - start, |prefix| prefix.chars().count())
                 + 1;

    Position { line: extras.line,
               column }
}

/// Parses an integer literal from the current token slice.
///
/// # Returns
/// - `Some(i64)`: The parsed integer value if it fits.
/// - `None`: If the literal overflows; the lexer then reports an error.
fn parse_integer(lex: &logos::Lexer<Token>) -> Option<i64> {
    lex.slice().parse().ok()
}

/// Maps a reserved word slice to its [`Keyword`].
fn parse_keyword(lex: &logos::Lexer<Token>) -> Option<Keyword> {
    match lex.slice() {
        "dhori" => Some(Keyword::Dhori),
        "dekhao" => Some(Keyword::Dekhao),
        "jodi" => Some(Keyword::Jodi),
        "nahole" => Some(Keyword::Nahole),
        "nahole-jodi" => Some(Keyword::NaholeJodi),
        "ghuri" => Some(Keyword::Ghuri),
        _ => None,
    }
}
