use log::debug;
use logos::Logos;

use crate::error::{Diagnostics, ParseError};

/// The category of a lexical token.
///
/// Punctuation, operators and keywords are matched as fixed tokens; literals
/// and identifiers are matched by pattern. Keywords take priority over the
/// identifier pattern when both match the same text, while a longer
/// identifier (`andy`) still wins over a keyword prefix (`and`).
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[logos(extras = LexerExtras)]
pub enum TokenKind {
    /// `(`
    #[token("(")]
    LeftParen,
    /// `)`
    #[token(")")]
    RightParen,
    /// `{`
    #[token("{")]
    LeftBrace,
    /// `}`
    #[token("}")]
    RightBrace,
    /// `,`
    #[token(",")]
    Comma,
    /// `.`
    #[token(".")]
    Dot,
    /// `-`
    #[token("-")]
    Minus,
    /// `+`
    #[token("+")]
    Plus,
    /// `;`
    #[token(";")]
    Semicolon,
    /// `/`
    #[token("/")]
    Slash,
    /// `*`
    #[token("*")]
    Star,
    /// `!`
    #[token("!")]
    Bang,
    /// `!=`
    #[token("!=")]
    BangEqual,
    /// `=`
    #[token("=")]
    Equal,
    /// `==`
    #[token("==")]
    EqualEqual,
    /// `>`
    #[token(">")]
    Greater,
    /// `>=`
    #[token(">=")]
    GreaterEqual,
    /// `<`
    #[token("<")]
    Less,
    /// `<=`
    #[token("<=")]
    LessEqual,

    /// Identifier tokens, such as `x` or `total_2`.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*")]
    Identifier,
    /// String literal tokens. The literal may span several lines.
    #[regex(r#""[^"]*""#, count_newlines, allow_greedy = true)]
    String,
    /// Numeric literal tokens, such as `42` or `3.14`.
    #[regex(r"[0-9]+(\.[0-9]+)?")]
    Number,

    /// `and`
    #[token("and")]
    And,
    /// `class`
    #[token("class")]
    Class,
    /// `else`
    #[token("else")]
    Else,
    /// `false`
    #[token("false")]
    False,
    /// `for`
    #[token("for")]
    For,
    /// `fun`
    #[token("fun")]
    Fun,
    /// `if`
    #[token("if")]
    If,
    /// `nil`
    #[token("nil")]
    Nil,
    /// `or`
    #[token("or")]
    Or,
    /// `print`
    #[token("print")]
    Print,
    /// `return`
    #[token("return")]
    Return,
    /// `super`
    #[token("super")]
    Super,
    /// `this`
    #[token("this")]
    This,
    /// `true`
    #[token("true")]
    True,
    /// `var`
    #[token("var")]
    Var,
    /// `while`
    #[token("while")]
    While,

    /// A string literal missing its closing quote. Never leaves [`scan`]; it
    /// is turned into a diagnostic.
    #[regex(r#""[^"]*"#, count_newlines, allow_greedy = true)]
    UnterminatedString,
    /// `// Comments.`
    #[regex(r"//[^\n]*", logos::skip, allow_greedy = true)]
    Comment,
    /// Line breaks.
    #[token("\n", |lex| {
        lex.extras.line += 1;
        logos::Skip
    })]
    NewLine,
    /// Spaces, tabs and carriage returns.
    #[regex(r"[ \t\r]+", logos::skip)]
    Ignored,

    /// End of input. Appended by [`scan`], never matched.
    Eof,
}

impl TokenKind {
    /// Returns `true` for the keywords that begin a declaration or statement.
    ///
    /// The parser stops discarding tokens in front of these when it recovers
    /// from a syntax error.
    #[must_use]
    pub const fn starts_statement(self) -> bool {
        matches!(self,
                 Self::Class
                 | Self::Fun
                 | Self::Var
                 | Self::For
                 | Self::If
                 | Self::While
                 | Self::Print
                 | Self::Return)
    }
}

/// Additional information carried by the lexer during tokenization.
///
/// Tracks the current line number for diagnostics.
pub struct LexerExtras {
    /// The current line number in the source being tokenized.
    pub line: usize,
}

impl Default for LexerExtras {
    fn default() -> Self {
        Self { line: 1 }
    }
}

/// The value carried by a literal token.
#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    /// The parsed value of a [`TokenKind::Number`].
    Number(f64),
    /// The contents of a [`TokenKind::String`] without its quotes.
    String(String),
}

/// A lexical token: its category, the exact source text, the parsed literal
/// (for numbers and strings) and the line on which the token ended.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    /// The token category.
    pub kind:    TokenKind,
    /// The source text the token was scanned from.
    pub lexeme:  String,
    /// The literal value for numbers and strings.
    pub literal: Option<Literal>,
    /// The source line.
    pub line:    usize,
}

impl Token {
    /// Builds the end-of-input token for the given line.
    #[must_use]
    pub const fn eof(line: usize) -> Self {
        Self { kind: TokenKind::Eof,
               lexeme: String::new(),
               literal: None,
               line }
    }
}

/// Converts source text into tokens.
///
/// Scanning never fails. Unexpected characters and unterminated strings are
/// recorded in `diagnostics` and skipped, and scanning carries on so that
/// later problems are reported in the same pass. The returned sequence always
/// ends with exactly one [`TokenKind::Eof`] token.
///
/// # Example
/// ```
/// use clex::{
///     error::Diagnostics,
///     interpreter::lexer::{Literal, TokenKind, scan},
/// };
///
/// let mut diagnostics = Diagnostics::new();
/// let tokens = scan("var answer = 42;", &mut diagnostics);
///
/// let kinds: Vec<TokenKind> = tokens.iter().map(|t| t.kind).collect();
/// assert_eq!(kinds,
///            [TokenKind::Var,
///             TokenKind::Identifier,
///             TokenKind::Equal,
///             TokenKind::Number,
///             TokenKind::Semicolon,
///             TokenKind::Eof]);
/// assert_eq!(tokens[3].literal, Some(Literal::Number(42.0)));
/// assert!(!diagnostics.has_errors());
/// ```
pub fn scan(source: &str, diagnostics: &mut Diagnostics) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut lexer = TokenKind::lexer_with_extras(source, LexerExtras::default());

    while let Some(result) = lexer.next() {
        let line = lexer.extras.line;

        match result {
            Ok(TokenKind::UnterminatedString) => {
                diagnostics.report(ParseError::UnterminatedString { line });
            },
            Ok(kind) => {
                let lexeme = lexer.slice();
                tokens.push(Token { kind,
                                    lexeme: lexeme.to_string(),
                                    literal: literal_of(kind, lexeme),
                                    line });
            },
            Err(()) => {
                diagnostics.report(ParseError::UnexpectedCharacter { line });
            },
        }
    }

    tokens.push(Token::eof(lexer.extras.line));
    debug!("scanned {} tokens over {} lines", tokens.len(), lexer.extras.line);

    tokens
}

fn literal_of(kind: TokenKind, lexeme: &str) -> Option<Literal> {
    match kind {
        TokenKind::Number => lexeme.parse().ok().map(Literal::Number),
        TokenKind::String => {
            let inner = lexeme.strip_prefix('"')?.strip_suffix('"')?;
            Some(Literal::String(inner.to_string()))
        },
        _ => None,
    }
}

fn count_newlines(lex: &mut logos::Lexer<TokenKind>) {
    let newlines = lex.slice().chars().filter(|&c| c == '\n').count();
    lex.extras.line += newlines;
}
