/// Cursor position in a document. Both fields are 1-indexed; columns count
/// UTF-16 code units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, derive_more::Display)]
#[display("{line}:{column}")]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

impl Position {
    pub const fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

/// Source range of a token, 1-indexed like [`Position`].
///
/// Containment is inclusive at both ends: a cursor sitting between two tokens
/// is inside both, and whoever visits tokens in document order keeps the later.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
#[display("[{start_line}:{start_column}-{end_line}:{end_column}]")]
pub struct TokenRange {
    pub start_line: usize,
    pub start_column: usize,
    pub end_line: usize,
    pub end_column: usize,
}

impl TokenRange {
    pub const fn new(start_line: usize, start_column: usize, end_line: usize, end_column: usize) -> Self {
        Self {
            start_line,
            start_column,
            end_line,
            end_column,
        }
    }

    /// Zero-width range at `position`, used when there is nothing to replace.
    pub const fn empty_at(position: Position) -> Self {
        Self::new(position.line, position.column, position.line, position.column)
    }

    pub const fn start(&self) -> Position {
        Position::new(self.start_line, self.start_column)
    }

    pub const fn end(&self) -> Position {
        Position::new(self.end_line, self.end_column)
    }

    pub fn is_empty(&self) -> bool {
        self.start() == self.end()
    }

    pub fn contains(&self, position: Position) -> bool {
        self.start() <= position && position <= self.end()
    }
}
