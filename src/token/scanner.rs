use crate::token::{Token, TokenType, Tokenizer, split_lines};

/// Language-specific lexical rules plugged into the shared [`Scanner`].
///
/// The defaults describe the common ground of the supported languages:
/// `,` delimits, single quotes delimit strings, double quotes delimit quoted
/// names, `$name` is a template variable, and nothing is a comment.
pub trait Dialect: Send + Sync {
    /// Classify an identifier-like word (keyword, function, operator word, ...).
    fn word(&self, word: &str) -> TokenType;

    fn line_comment(&self) -> Option<&'static str> {
        None
    }

    fn is_delimiter(&self, c: char) -> bool {
        c == ','
    }

    fn is_operator(&self, c: char) -> bool {
        matches!(c, '=' | '!' | '<' | '>' | '+' | '-' | '*' | '/' | '%' | '^')
    }

    /// Characters allowed to start a word besides letters and `_`.
    fn is_word_start(&self, c: char) -> bool {
        c.is_alphabetic() || c == '_'
    }

    fn is_word_part(&self, c: char) -> bool {
        c.is_alphanumeric() || c == '_'
    }

    /// Whether `/.../` is a regex literal where an operand is expected.
    fn regex_literals(&self) -> bool {
        false
    }

    /// Role of a backtick-quoted run, or `None` if backticks are not quotes.
    fn backtick(&self) -> Option<TokenType> {
        None
    }
}

/// Lenient single pass scanner shared by the line-oriented languages.
///
/// Behavior:
/// - Whitespace runs become one `Whitespace` token.
/// - Unterminated quotes run to the end of the line (live editing leaves
///   plenty of those).
/// - Unknown characters become single-character `Identifier` tokens.
///
/// Never fails; O(n) in the document length.
#[derive(Debug, Clone, Copy)]
pub struct Scanner<D> {
    dialect: D,
}

impl<D: Dialect> Scanner<D> {
    pub const fn new(dialect: D) -> Self {
        Self { dialect }
    }

    pub fn dialect(&self) -> &D {
        &self.dialect
    }

    fn scan_line(&self, line: &str) -> Vec<Token> {
        let chars: Vec<char> = line.chars().collect();
        let mut out = Vec::new();
        let mut i = 0;
        let mut offset = 0;
        let units = |from: usize, to: usize| -> usize {
            chars[from..to].iter().map(|c| c.len_utf16()).sum()
        };

        while i < chars.len() {
            let start = i;
            let c = chars[i];
            let kind = if c.is_whitespace() {
                i = Self::run(&chars, i, |c| c.is_whitespace());
                TokenType::Whitespace
            } else if self
                .dialect
                .line_comment()
                .is_some_and(|marker| Self::starts_with(&chars, i, marker))
            {
                i = chars.len();
                TokenType::Comment
            } else if c == '\'' {
                i = Self::quoted(&chars, i, '\'');
                TokenType::String
            } else if c == '"' {
                i = Self::quoted(&chars, i, '"');
                TokenType::DoubleQuotedString
            } else if let Some(kind) = self.dialect.backtick().filter(|_| c == '`') {
                i = Self::quoted(&chars, i, '`');
                kind
            } else if c.is_ascii_digit() {
                i = Self::run(&chars, i, |c| c.is_alphanumeric() || c == '.' || c == '_');
                TokenType::Number
            } else if c == '$' {
                i = self.variable(&chars, i);
                TokenType::Variable
            } else if self.dialect.is_word_start(c) {
                i = Self::run(&chars, i, |c| self.dialect.is_word_part(c));
                let word: String = chars[start..i].iter().collect();
                self.dialect.word(&word)
            } else if c == '(' || c == ')' {
                i += 1;
                TokenType::Parenthesis
            } else if c == '/' && self.dialect.regex_literals() && Self::expects_operand(&out) {
                i = Self::quoted(&chars, i, '/');
                TokenType::Regexp
            } else if self.dialect.is_delimiter(c) {
                i += 1;
                TokenType::Delimiter
            } else if self.dialect.is_operator(c) {
                i = Self::run(&chars, i, |c| self.dialect.is_operator(c));
                TokenType::Operator
            } else {
                i += 1;
                TokenType::Identifier
            };
            out.push(Token::new(kind, offset));
            offset += units(start, i);
        }
        out
    }

    /// Index just past the run of characters matching `pred` starting at `from`.
    fn run(chars: &[char], from: usize, pred: impl Fn(char) -> bool) -> usize {
        let mut i = from + 1;
        while i < chars.len() && pred(chars[i]) {
            i += 1;
        }
        i
    }

    /// Index just past the closing `quote` (or the line end), honouring `\` escapes.
    fn quoted(chars: &[char], from: usize, quote: char) -> usize {
        let mut i = from + 1;
        while i < chars.len() {
            match chars[i] {
                '\\' => i += 2,
                c if c == quote => return i + 1,
                _ => i += 1,
            }
        }
        chars.len()
    }

    /// `$name` or `${...}`; a lone `$` is a variable token of its own.
    fn variable(&self, chars: &[char], from: usize) -> usize {
        match chars.get(from + 1) {
            Some('{') => chars[from..]
                .iter()
                .position(|c| *c == '}')
                .map(|end| from + end + 1)
                .unwrap_or(chars.len()),
            Some(c) if self.dialect.is_word_part(*c) => {
                Self::run(chars, from + 1, |c| self.dialect.is_word_part(c))
            }
            _ => from + 1,
        }
    }

    fn starts_with(chars: &[char], from: usize, marker: &str) -> bool {
        let mut i = from;
        for m in marker.chars() {
            if chars.get(i) != Some(&m) {
                return false;
            }
            i += 1;
        }
        true
    }

    /// A `/` opens a regex when the previous significant token cannot end an operand.
    fn expects_operand(tokens: &[Token]) -> bool {
        tokens
            .iter()
            .rev()
            .find(|t| !t.kind.is_trivia())
            .is_none_or(|t| {
                matches!(
                    t.kind,
                    TokenType::Keyword
                        | TokenType::Operator
                        | TokenType::Delimiter
                        | TokenType::Parenthesis
                )
            })
    }
}

impl<D: Dialect> Tokenizer for Scanner<D> {
    fn tokenize(&self, text: &str) -> Vec<Vec<Token>> {
        split_lines(text)
            .into_iter()
            .map(|line| self.scan_line(line))
            .collect()
    }
}
