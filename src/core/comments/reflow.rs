//! Line-level comment reflow.
//!
//! A two-state scanner walks the input once. In `Scanning` every line is
//! copied through until a line containing `//` is followed by a line that
//! starts with `//`; that pair opens a comment run. In `InCommentRun` the
//! scanner collects comment text until the first line that is not a line
//! comment (or end of input), then emits the run as a wrapped block.

use serde::Serialize;

use super::wrap;
use super::ReflowConfig;
use crate::error::Result;

const LINE_MARKER: &str = "//";
const BLOCK_OPEN: &str = "/*";
const BLOCK_LINE: &str = "* ";
const BLOCK_CLOSE: &str = "*/";

/// Summary of one merged comment run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MergedBlock {
    /// 1-based input line the run started on.
    pub first_line: usize,
    /// Number of input lines consumed by the run.
    pub source_lines: usize,
    /// Number of `* ` lines emitted for the run.
    pub body_lines: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReflowedLines {
    pub lines: Vec<String>,
    pub blocks: Vec<MergedBlock>,
}

impl ReflowedLines {
    pub fn changed(&self) -> bool {
        !self.blocks.is_empty()
    }
}

#[derive(Debug)]
struct CommentRun {
    start: usize,
    source_lines: usize,
    indent: String,
    fragments: Vec<String>,
}

#[derive(Debug)]
enum ScanState {
    Scanning,
    InCommentRun(CommentRun),
}

/// Text following the `//` marker when the line is a line comment.
fn line_comment_text(line: &str) -> Option<&str> {
    line.trim_start()
        .strip_prefix(LINE_MARKER)
        .map(str::trim_start)
}

fn leading_whitespace(line: &str) -> &str {
    &line[..line.len() - line.trim_start().len()]
}

impl CommentRun {
    /// Open a run on `line`, emitting any code in front of its last `//`.
    ///
    /// The block indentation is taken from `next`, the first continuation
    /// line, and copied verbatim.
    fn open(start: usize, line: &str, next: &str, out: &mut Vec<String>) -> Self {
        let (prefix, text) = match line.rfind(LINE_MARKER) {
            Some(idx) => (&line[..idx], &line[idx + LINE_MARKER.len()..]),
            None => (line, ""),
        };

        if !prefix.trim().is_empty() {
            out.push(prefix.to_string());
        }

        Self {
            start,
            source_lines: 1,
            indent: leading_whitespace(next).to_string(),
            fragments: vec![text.to_string()],
        }
    }

    fn push(&mut self, text: &str) {
        self.fragments.push(text.to_string());
        self.source_lines += 1;
    }

    fn close(self, config: &ReflowConfig, out: &mut ReflowedLines) {
        let prefix_width = self.indent.chars().count() + BLOCK_LINE.len();
        // An indent that fills the width leaves one word per line, overflowing.
        let available = config.max_width.saturating_sub(prefix_width).max(1);
        let words = self.fragments.iter().flat_map(|f| f.split_whitespace());
        let segments = wrap::wrap_words(words, available);

        out.lines.push(format!("{}{}", self.indent, BLOCK_OPEN));
        if segments.is_empty() {
            out.lines
                .push(format!("{}{}", self.indent, BLOCK_LINE.trim_end()));
        }
        for segment in &segments {
            out.lines
                .push(format!("{}{}{}", self.indent, BLOCK_LINE, segment));
        }
        out.lines.push(format!("{}{}", self.indent, BLOCK_CLOSE));

        out.blocks.push(MergedBlock {
            first_line: self.start + 1,
            source_lines: self.source_lines,
            body_lines: segments.len().max(1),
        });
    }
}

/// Merge every run of two or more `//` lines into a wrapped `/* */` block.
///
/// Lines are given without terminators. Everything outside a run is copied
/// through unchanged and in order.
pub fn reflow_lines<S: AsRef<str>>(lines: &[S], config: &ReflowConfig) -> Result<ReflowedLines> {
    config.validate()?;

    let mut out = ReflowedLines::default();
    let mut state = ScanState::Scanning;
    let mut i = 0;

    while i < lines.len() {
        let line = lines[i].as_ref();

        state = match state {
            ScanState::Scanning => {
                let next = lines.get(i + 1).map(|l| l.as_ref());
                match next {
                    Some(next)
                        if line.contains(LINE_MARKER) && line_comment_text(next).is_some() =>
                    {
                        let run = CommentRun::open(i, line, next, &mut out.lines);
                        i += 1;
                        ScanState::InCommentRun(run)
                    }
                    _ => {
                        out.lines.push(line.to_string());
                        i += 1;
                        ScanState::Scanning
                    }
                }
            }
            ScanState::InCommentRun(mut run) => match line_comment_text(line) {
                Some(text) => {
                    run.push(text);
                    i += 1;
                    ScanState::InCommentRun(run)
                }
                // Cursor stays on this line so Scanning can handle it.
                None => {
                    run.close(config, &mut out);
                    ScanState::Scanning
                }
            },
        };
    }

    if let ScanState::InCommentRun(run) = state {
        run.close(config, &mut out);
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reflow(lines: &[&str]) -> Vec<String> {
        reflow_lines(lines, &ReflowConfig::default()).unwrap().lines
    }

    #[test]
    fn trailing_comment_run_splits_code_from_block() {
        let out = reflow(&["int x = 1; // setup", "// continued", "// end", "doSomething();"]);
        assert_eq!(
            out,
            vec!["int x = 1; ", "/*", "* setup continued end", "*/", "doSomething();"]
        );
    }

    #[test]
    fn single_comment_line_is_untouched() {
        assert_eq!(reflow(&["// only one line"]), vec!["// only one line"]);
    }

    #[test]
    fn isolated_comments_between_code_are_untouched() {
        let input = ["a();", "// one", "b();", "// two", "c();"];
        assert_eq!(reflow(&input), input.to_vec());
    }

    #[test]
    fn indentation_comes_from_second_line() {
        let out = reflow(&["\t// first", "    // second"]);
        assert_eq!(out, vec!["    /*", "    * first second", "    */"]);
    }

    #[test]
    fn whitespace_only_prefix_is_not_emitted() {
        let out = reflow(&["    // a", "    // b"]);
        assert_eq!(out, vec!["    /*", "    * a b", "    */"]);
    }

    #[test]
    fn run_ending_at_end_of_input_is_closed() {
        let out = reflow_lines(&["x(); // a", "// b"], &ReflowConfig::default()).unwrap();
        assert_eq!(out.lines, vec!["x(); ", "/*", "* a b", "*/"]);
        assert_eq!(
            out.blocks,
            vec![MergedBlock {
                first_line: 1,
                source_lines: 2,
                body_lines: 1
            }]
        );
    }

    #[test]
    fn empty_comment_run_keeps_one_body_line() {
        assert_eq!(reflow(&["//", "//"]), vec!["/*", "*", "*/"]);
    }

    #[test]
    fn splits_at_last_marker_of_first_line() {
        let out = reflow(&["s = \"a//b\"; // note", "// more"]);
        assert_eq!(out, vec!["s = \"a//b\"; ", "/*", "* note more", "*/"]);
    }

    #[test]
    fn continuation_lines_keep_inner_slashes() {
        let out = reflow(&["// see", "// http://example.com/x"]);
        assert_eq!(out, vec!["/*", "* see http://example.com/x", "*/"]);
    }

    #[test]
    fn two_runs_separated_by_code_become_two_blocks() {
        let out = reflow_lines(
            &["// a", "// b", "call();", "// c", "// d"],
            &ReflowConfig::default(),
        )
        .unwrap();
        assert_eq!(
            out.lines,
            vec!["/*", "* a b", "*/", "call();", "/*", "* c d", "*/"]
        );
        assert_eq!(out.blocks.len(), 2);
        assert_eq!(out.blocks[1].first_line, 4);
    }

    #[test]
    fn body_lines_respect_width_including_prefix() {
        let config = ReflowConfig::new(20).unwrap();
        let out = reflow_lines(
            &["  // one two three four five", "  // six seven eight nine ten"],
            &config,
        )
        .unwrap();

        for line in out.lines.iter().filter(|l| l.trim_start().starts_with("* ")) {
            assert!(line.chars().count() <= 20, "too wide: {:?}", line);
        }
        assert_eq!(out.blocks[0].body_lines, out.lines.len() - 2);
    }

    #[test]
    fn indent_wider_than_width_puts_one_word_per_line() {
        let indent = " ".repeat(19);
        let first = format!("{}// a bb", indent);
        let second = format!("{}// c", indent);
        let config = ReflowConfig::new(20).unwrap();

        let out = reflow_lines(&[first.as_str(), second.as_str()], &config).unwrap();

        assert_eq!(
            out.lines,
            vec![
                format!("{}/*", indent),
                format!("{}* a", indent),
                format!("{}* bb", indent),
                format!("{}* c", indent),
                format!("{}*/", indent),
            ]
        );
        assert!(out.lines[1].chars().count() > 20);
    }

    #[test]
    fn zero_width_is_rejected() {
        let config = ReflowConfig { max_width: 0 };
        let err = reflow_lines(&["// a", "// b"], &config).unwrap_err();
        assert_eq!(err.code.as_str(), "config.invalid_value");
    }

    #[test]
    fn empty_input_produces_empty_output() {
        let out = reflow_lines::<&str>(&[], &ReflowConfig::default()).unwrap();
        assert!(out.lines.is_empty());
        assert!(!out.changed());
    }
}
