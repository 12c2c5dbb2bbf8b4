use crate::{
    linked_token::{Position, TokenChain, TokenRange},
    token::{Token, TokenType, Tokenizer, split_lines, utf16_len, utf16_slice},
};

/// Links a tokenizer's per-line output into one [`TokenChain`] and records
/// the token under the cursor.
///
/// Ranges: a token ends where the next token on its line starts, the last
/// token on a line ends at the line's end. Links cross line boundaries. A line
/// without tokens still contributes a synthetic whitespace node once the chain
/// has started, so walking the chain never silently skips a blank line.
///
/// Linear in the document size; documents are a handful of lines and the
/// chain is rebuilt once per completion trigger.
pub struct LinkedTokenBuilder;

impl LinkedTokenBuilder {
    /// Tokenize `text` and link it.
    pub fn build(tokenizer: &dyn Tokenizer, text: &str, position: Position) -> TokenChain {
        let tokens = tokenizer.tokenize(text);
        Self::link(text, &tokens, position)
    }

    /// Link already tokenized lines. `tokens_per_line[i]` belongs to line `i + 1`.
    pub fn link(text: &str, tokens_per_line: &[Vec<Token>], position: Position) -> TokenChain {
        let lines = split_lines(text);
        let mut chain = TokenChain::new();

        for (line_index, tokens) in tokens_per_line.iter().enumerate() {
            let line = lines.get(line_index).copied().unwrap_or_default();
            let line_number = line_index + 1;
            let line_length = utf16_len(line);

            if tokens.is_empty() {
                if !chain.is_empty() {
                    let range = TokenRange::new(line_number, 1, line_number, line_length + 1);
                    let index = chain.push(TokenType::Whitespace, line, range);
                    if range.contains(position) {
                        chain.set_current(index);
                    }
                }
                continue;
            }

            for (i, token) in tokens.iter().enumerate() {
                let end = tokens.get(i + 1).map_or(line_length, |next| next.offset);
                let range = TokenRange::new(line_number, token.offset + 1, line_number, end + 1);
                let value = utf16_slice(line, token.offset, end);
                let index = chain.push(token.kind, value, range);
                // Later tokens overwrite earlier ones, so boundaries resolve forward.
                if range.contains(position) {
                    chain.set_current(index);
                }
            }
        }

        chain
    }
}

impl TokenChain {
    /// Shorthand for [`LinkedTokenBuilder::build`].
    pub fn build(tokenizer: &dyn Tokenizer, text: &str, position: Position) -> Self {
        LinkedTokenBuilder::build(tokenizer, text, position)
    }
}
