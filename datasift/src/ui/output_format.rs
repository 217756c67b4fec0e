// datasift/src/ui/output_format.rs
//! Status message helpers. Color is applied only when the target is a terminal.

use owo_colors::OwoColorize;
use std::io::{self, Write};

/// Kind of status line, each with its own color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Info,
    Success,
}

impl MessageKind {
    fn prefix(&self) -> &'static str {
        match self {
            MessageKind::Info => "[Security]",
            MessageKind::Success => "✓",
        }
    }
}

/// Writes a single status line, colored when `supports_color` is set.
pub fn print_message<W: Write>(
    writer: &mut W,
    kind: MessageKind,
    message: &str,
    supports_color: bool,
) -> io::Result<()> {
    let prefix = kind.prefix();
    if !supports_color {
        return writeln!(writer, "{} {}", prefix, message);
    }
    match kind {
        MessageKind::Info => writeln!(writer, "{} {}", prefix.cyan(), message),
        MessageKind::Success => writeln!(writer, "{} {}", prefix.green(), message.green()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_output_has_no_escape_codes() {
        let mut buf = Vec::new();
        print_message(&mut buf, MessageKind::Info, "Processed 5 characters safely", false).unwrap();
        assert_eq!(
            String::from_utf8(buf).unwrap(),
            "[Security] Processed 5 characters safely\n"
        );
    }

    #[test]
    fn colored_output_keeps_the_text() {
        let mut buf = Vec::new();
        print_message(&mut buf, MessageKind::Success, "saved", true).unwrap();
        let out = String::from_utf8(buf).unwrap();
        assert!(out.contains("saved"));
        assert!(out.contains('\u{1b}'));
    }
}
