#![allow(clippy::module_inception)]

use std::rc::Rc;

use crate::errors::errors::ErrorTip;

pub mod errors;
pub mod lexer;
pub mod logger;
pub mod macros;
pub mod verifier;

extern crate regex;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Position(pub usize, pub Rc<String>);

impl Position {
    pub fn null() -> Self {
        Position(0, Rc::new(String::from("<null>")))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

/// Finds the line holding byte `position` in `source`.
///
/// Returns the 1-based line number, the line text and the column of
/// `position` inside that line, counted in characters, or `None` when
/// `position` lies past the end.
pub fn get_line_at_position(source: &str, pos: usize) -> Option<(usize, String, usize)> {
    if pos >= source.len() {
        return None;
    }

    let mut start = 0;
    let mut line_number = 1;

    for line in source.split_inclusive('\n') {
        let end = start + line.len();

        if (start..end).contains(&pos) {
            let line_pos = line
                .get(..pos - start)
                .map_or(pos - start, |prefix| prefix.chars().count());
            return Some((line_number, line.to_string(), line_pos));
        }

        start = end;
        line_number += 1;
    }

    None
}

/// Renders a report with a source excerpt and a caret under `position`:
///
/// ```text
/// Error: UndefinedIdentifier ('y' is undefined)
/// -> app.toy
///   |
/// 3 | out(y)
///   | ----^
/// ```
pub fn format_report(title: &str, tip: &ErrorTip, position: &Position, source: &str) -> String {
    let mut report = if let ErrorTip::None = tip {
        format!("Error: {}\n", title)
    } else {
        format!("Error: {} ({})\n", title, tip)
    };
    report.push_str(&format!("-> {}\n", position.1));

    let Some((line, line_text, line_pos)) = get_line_at_position(source, position.0) else {
        report.push_str(&format!("   at end of input (position {})\n", position.0));
        return report;
    };

    let line_string = line.to_string();
    let padding = line_string.len() + 2;

    report.push_str(&format!("{:>padding$}\n", "|"));

    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(&line_text);
    report.push_str(&format!("{} | {}\n", line_string, line_text_removed.trim_end()));

    let arrows = line_pos.saturating_sub(removed_whitespace) + 1;

    report.push_str(&format!("{:>padding$} {:->arrows$}\n", "|", "^"));
    report
}

fn remove_starting_whitespace(string: &str) -> (String, usize) {
    let mut start = 0;
    for c in string.chars() {
        if c == ' ' || c == '\t' {
            start += 1;
        } else {
            break;
        }
    }

    (String::from(&string[start..]), start)
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use super::Position;
    use crate::errors::errors::ErrorTip;

    const SOURCE: &str = "Hello, world!\nfoo\n\n    Testing { }\n";

    #[test]
    fn test_get_line_at_position() {
        let (line_number, line, line_pos) = super::get_line_at_position(SOURCE, 10).unwrap();
        assert_eq!(line_number, 1);
        assert_eq!(line, "Hello, world!\n");
        assert_eq!(line_pos, 10);

        let (line_number, line, line_pos) = super::get_line_at_position(SOURCE, 31).unwrap();
        assert_eq!(line_number, 4);
        assert_eq!(line, "    Testing { }\n");
        assert_eq!(line_pos, 12);
    }

    #[test]
    fn test_get_line_past_end() {
        assert!(super::get_line_at_position(SOURCE, 500).is_none());
        assert!(super::get_line_at_position("", 0).is_none());
    }

    #[test]
    fn test_format_report_points_at_column() {
        let position = Position(31, Rc::new("test.toy".to_string()));
        let report = super::format_report("MismatchedDelimiter", &ErrorTip::None, &position, SOURCE);

        let lines: Vec<&str> = report.lines().collect();
        assert_eq!(lines[0], "Error: MismatchedDelimiter");
        assert_eq!(lines[1], "-> test.toy");
        assert_eq!(lines[2], "  |");
        assert_eq!(lines[3], "4 | Testing { }");
        assert_eq!(lines[4], "  | --------^");
    }

    #[test]
    fn test_format_report_with_detail_past_end() {
        let position = Position(99, Rc::new("test.toy".to_string()));
        let tip = ErrorTip::Suggestion("nothing to verify".to_string());
        let report = super::format_report("EmptyTokenStream", &tip, &position, "");

        assert!(report.starts_with("Error: EmptyTokenStream (nothing to verify)\n"));
        assert!(report.contains("at end of input (position 99)"));
    }

    #[test]
    fn test_caret_counts_characters_not_bytes() {
        let source = "out(\"é\" y)\n";
        let position = Position(9, Rc::new("test.toy".to_string()));

        let (_, _, column) = super::get_line_at_position(source, 9).unwrap();
        assert_eq!(column, 8);

        let report = super::format_report("UndefinedIdentifier", &ErrorTip::None, &position, source);
        let lines: Vec<&str> = report.lines().collect();
        assert_eq!(lines[3], "1 | out(\"é\" y)");
        assert_eq!(lines[4], "  | --------^");
    }
}
