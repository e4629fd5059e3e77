use std::io::{self, Write};

use colored::Colorize;

use crate::report::ReportLine;

const INDENT: &str = "  ";

/// Writes report lines to an output stream, indented two spaces per level.
///
/// The reporter is handed to the walker explicitly, so the output can go to
/// stdout or be captured in a buffer.
pub struct Reporter<W: Write> {
    out: W,
    colorize: bool,
}

impl<W: Write> Reporter<W> {
    pub fn new(out: W, colorize: bool) -> Self {
        Reporter { out, colorize }
    }

    pub fn line(&mut self, level: usize, line: &ReportLine) -> io::Result<()> {
        let indent = INDENT.repeat(level);
        let text = line.to_string();

        match line.color() {
            Some(color) if self.colorize => writeln!(self.out, "{indent}{}", text.color(color)),
            _ => writeln!(self.out, "{indent}{text}"),
        }
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.out.flush()
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn lines_are_indented_per_level() {
        let mut reporter = Reporter::new(Vec::new(), false);
        reporter
            .line(
                0,
                &ReportLine::DirectoryHeader {
                    path: "old".into(),
                    count: 1,
                },
            )
            .unwrap();
        reporter.line(1, &ReportLine::Matched("a.txt".into())).unwrap();
        reporter.line(3, &ReportLine::Missing("x/y/z.txt".into())).unwrap();

        let output = String::from_utf8(reporter.into_inner()).unwrap();
        assert_eq!(
            output,
            "old: 1 files:\n  Matched: a.txt\n      Missing: x/y/z.txt\n"
        );
    }

    #[test]
    fn uncolored_output_has_no_escape_codes() {
        let mut reporter = Reporter::new(Vec::new(), false);
        reporter.line(0, &ReportLine::Changed("b.txt".into())).unwrap();

        let output = String::from_utf8(reporter.into_inner()).unwrap();
        assert!(!output.contains('\u{1b}'));
    }

    #[test]
    fn colored_output_keeps_the_text() {
        colored::control::set_override(true);
        let mut reporter = Reporter::new(Vec::new(), true);
        reporter.line(1, &ReportLine::Changed("b.txt".into())).unwrap();

        let output = String::from_utf8(reporter.into_inner()).unwrap();
        assert!(output.starts_with("  "));
        assert!(output.contains("Changed: b.txt"));
        assert!(output.contains('\u{1b}'));
    }
}
