use super::*;

/// Tokenizer for label templates: free text with `${...}` patterns.
///
/// - a closed `${...}` is one `Keyword` token,
/// - an unclosed `${...` runs to the end of the line as a `Variable`,
/// - a lone `$` is a `Variable` of its own,
/// - whitespace runs are `Whitespace`, everything else is `Identifier` text.
#[derive(Debug, Clone, Copy, Default)]
pub struct LabelScanner;

impl LabelScanner {
    fn scan_line(line: &str) -> Vec<Token> {
        let chars: Vec<char> = line.chars().collect();
        let mut out = Vec::new();
        let mut i = 0;
        let mut offset = 0;

        while i < chars.len() {
            let start = i;
            let kind = if chars[i].is_whitespace() {
                while i < chars.len() && chars[i].is_whitespace() {
                    i += 1;
                }
                TokenType::Whitespace
            } else if chars[i] == '$' && chars.get(i + 1) == Some(&'{') {
                match chars[i..].iter().position(|c| *c == '}') {
                    Some(end) => {
                        i += end + 1;
                        TokenType::Keyword
                    }
                    None => {
                        i = chars.len();
                        TokenType::Variable
                    }
                }
            } else if chars[i] == '$' {
                i += 1;
                TokenType::Variable
            } else {
                while i < chars.len() && !chars[i].is_whitespace() && chars[i] != '$' {
                    i += 1;
                }
                TokenType::Identifier
            };
            out.push(Token::new(kind, offset));
            offset += chars[start..i].iter().map(|c| c.len_utf16()).sum::<usize>();
        }
        out
    }
}

impl Tokenizer for LabelScanner {
    fn tokenize(&self, text: &str) -> Vec<Vec<Token>> {
        split_lines(text).into_iter().map(Self::scan_line).collect()
    }
}
