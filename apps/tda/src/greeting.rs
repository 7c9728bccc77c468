//! # Greeting Module
//!
//! The demo that drives a [`Stack`]: push words, then pop until empty,
//! writing each popped word as it comes off the top.
//!
//! With the default words (`"world!"`, then `"Hello, "`) this prints
//! `Hello, world!` followed by a newline.

use serde::Serialize;
use std::io::Write;
use tda_core::Stack;

/// What a drain wrote.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Report {
    /// Everything written, without the trailing newline.
    pub output: String,
    /// Number of successful pops.
    pub popped: usize,
}

/// Build a stack by pushing `words` in order.
pub fn fill<S: AsRef<str>>(words: &[S]) -> Stack {
    words.iter().map(|w| w.as_ref()).collect()
}

/// Pop until the stack is empty, writing each word to `out` as soon as it
/// is popped. Words after the first are preceded by `separator`.
///
/// A failed pop is logged and skipped.
pub fn drain<W: Write>(stack: &mut Stack, out: &mut W, separator: &str) -> std::io::Result<Report> {
    let mut report = Report::default();

    while stack.size() > 0 {
        match stack.pop() {
            Ok(word) => {
                if report.popped > 0 {
                    out.write_all(separator.as_bytes())?;
                    report.output.push_str(separator);
                }
                out.write_all(word.as_bytes())?;
                report.output.push_str(&word);
                report.popped += 1;
            }
            Err(e) => tracing::debug!("Skipping failed pop: {}", e),
        }
    }

    Ok(report)
}

/// Push `words`, then print them back in pop order on one line.
pub fn greet<S: AsRef<str>, W: Write>(words: &[S], out: &mut W) -> std::io::Result<Report> {
    let mut stack = fill(words);
    tracing::debug!("Greeting with {} words", stack.size());

    let report = drain(&mut stack, out, "")?;
    writeln!(out)?;
    Ok(report)
}

/// Push `words`, then print them back in pop order, one per line.
pub fn reverse<S: AsRef<str>, W: Write>(words: &[S], out: &mut W) -> std::io::Result<Report> {
    let mut stack = fill(words);

    let report = drain(&mut stack, out, "\n")?;
    writeln!(out)?;
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fill_puts_last_word_on_top() {
        let stack = fill(&["a", "b"]);
        assert_eq!(stack.peek(), Some("b"));
        assert_eq!(stack.size(), 2);
    }

    #[test]
    fn drain_empties_the_stack() {
        let mut stack = fill(&["1", "2", "3"]);
        let mut out = Vec::new();
        let report = drain(&mut stack, &mut out, ",").expect("drain");

        assert!(stack.is_empty());
        assert_eq!(report.popped, 3);
        assert_eq!(report.output, "3,2,1");
        assert_eq!(out, b"3,2,1");
    }

    #[test]
    fn drain_of_empty_stack_writes_nothing() {
        let mut stack = Stack::new();
        let mut out = Vec::new();
        let report = drain(&mut stack, &mut out, ",").expect("drain");

        assert_eq!(report, Report::default());
        assert!(out.is_empty());
    }
}
