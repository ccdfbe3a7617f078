/// Position of a character in the parsed text. Both `line` and `column`
/// start at `1`, columns count characters, not bytes.
#[derive(Debug, Copy, Clone, PartialOrd, PartialEq, Eq, Hash)]
pub struct Location {
    line: usize,
    column: usize,
}

impl Default for Location {
    fn default() -> Self {
        Self::at(1, 1)
    }
}

impl Location {
    pub const fn at(line: usize, column: usize) -> Location {
        Self { line, column }
    }

    pub const fn line(&self) -> usize {
        self.line
    }

    pub const fn column(&self) -> usize {
        self.column
    }

    /// The location `columns` characters further on the same line
    pub const fn advance(&self, columns: usize) -> Location {
        Self::at(self.line, self.column + columns)
    }
}
