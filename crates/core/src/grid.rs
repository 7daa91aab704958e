use std::fmt;

/// Line terminator used when joining grid lines into text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineEnding {
    Lf,
    CrLf,
}

impl LineEnding {
    /// The line ending of the platform this was built for.
    pub fn native() -> Self {
        if cfg!(windows) {
            LineEnding::CrLf
        } else {
            LineEnding::Lf
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            LineEnding::Lf => "\n",
            LineEnding::CrLf => "\r\n",
        }
    }
}

/// A rendered month: header, separators and week rows, one entry per output line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Grid {
    lines: Vec<String>,
}

impl Grid {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            lines: Vec::with_capacity(capacity),
        }
    }

    pub(crate) fn push(&mut self, line: String) {
        self.lines.push(line);
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Joins the lines, terminating every line (including the last) with `ending`.
    pub fn to_text(&self, ending: LineEnding) -> String {
        let terminator = ending.as_str();
        let size = self
            .lines
            .iter()
            .map(|line| line.len() + terminator.len())
            .sum();

        let mut output = String::with_capacity(size);
        for line in &self.lines {
            output.push_str(line);
            output.push_str(terminator);
        }
        output
    }

    pub fn into_lines(self) -> Vec<String> {
        self.lines
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in &self.lines {
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Grid {
        let mut grid = Grid::with_capacity(2);
        grid.push("| a |".to_string());
        grid.push("|---|".to_string());
        grid
    }

    #[test]
    fn test_to_text_terminates_every_line() {
        assert_eq!(sample().to_text(LineEnding::Lf), "| a |\n|---|\n");
        assert_eq!(sample().to_text(LineEnding::CrLf), "| a |\r\n|---|\r\n");
    }

    #[test]
    fn test_display_uses_lf() {
        assert_eq!(sample().to_string(), sample().to_text(LineEnding::Lf));
    }

    #[test]
    fn test_into_lines() {
        assert_eq!(
            sample().into_lines(),
            vec!["| a |".to_string(), "|---|".to_string()]
        );
    }

    #[test]
    fn test_empty_grid() {
        let grid = Grid::default();
        assert!(grid.is_empty());
        assert_eq!(grid.to_text(LineEnding::Lf), "");
    }

    #[test]
    fn test_native_line_ending() {
        let expected = if cfg!(windows) { "\r\n" } else { "\n" };
        assert_eq!(LineEnding::native().as_str(), expected);
    }
}
