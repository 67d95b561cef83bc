#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Location {
    pub(crate) line: usize,
    pub(crate) column: usize,
}

impl Location {
    /// 1-based line and column of the byte `offset` into `source`.
    pub(crate) fn of_offset(source: &str, offset: usize) -> Self {
        let consumed = &source[..offset];
        let line = consumed.matches('\n').count() + 1;
        let line_start = consumed.rfind('\n').map_or(0, |i| i + 1);
        let column = consumed[line_start..].chars().count() + 1;
        Self { line, column }
    }
}

impl std::fmt::Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "line {}, column {}", self.line, self.column)
    }
}

#[cfg(test)]
mod tests {
    use super::Location;

    #[test]
    fn counts_lines_and_columns_from_one() {
        assert_eq!(Location::of_offset("", 0), Location { line: 1, column: 1 });
        assert_eq!(Location::of_offset("(a b", 4), Location { line: 1, column: 5 });
        assert_eq!(Location::of_offset("(a\n  b", 5), Location { line: 2, column: 3 });
    }
}
