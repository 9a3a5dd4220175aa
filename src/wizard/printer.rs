// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 configwiz contributors

//! Indentation-aware prompt printer

use super::io::WizardIo;
use crate::errors::WizardResult;

/// Spaces per indentation level
pub const TAB_SIZE: usize = 4;

/// Prefixes every line it prints with `level * TAB_SIZE` spaces
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IndentingPrinter {
    level: usize,
}

impl IndentingPrinter {
    pub fn new(level: usize) -> Self {
        Self { level }
    }

    pub fn level(&self) -> usize {
        self.level
    }

    /// A printer one level deeper
    pub fn indent(self) -> Self {
        Self::new(self.level + 1)
    }

    /// A printer one level shallower, stopping at zero
    pub fn dedent(self) -> Self {
        Self::new(self.level.saturating_sub(1))
    }

    /// Write `s` after the indentation
    pub fn print(&self, io: &mut dyn WizardIo, s: &str) -> WizardResult<()> {
        io.write(&format!("{}{}", self.tab(), s))
    }

    /// Write `s` after the indentation and end the line
    pub fn println(&self, io: &mut dyn WizardIo, s: &str) -> WizardResult<()> {
        io.write(&format!("{}{}\n", self.tab(), s))
    }

    fn tab(&self) -> String {
        " ".repeat(self.level * TAB_SIZE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wizard::io::StdIo;
    use std::io::Cursor;

    fn printed(f: impl FnOnce(&mut dyn WizardIo)) -> String {
        let mut io = StdIo::new(Cursor::new(""), Vec::new());
        f(&mut io);
        String::from_utf8(io.into_writer()).unwrap()
    }

    #[test]
    fn test_print_and_println() {
        let out = printed(|io| {
            let pr = IndentingPrinter::new(2);
            pr.print(io, "> ").unwrap();
            pr.println(io, "done").unwrap();
        });
        assert_eq!(out, "        >         done\n");
    }

    #[test]
    fn test_level_zero_has_no_prefix() {
        let out = printed(|io| IndentingPrinter::default().println(io, "hello").unwrap());
        assert_eq!(out, "hello\n");
    }

    #[test]
    fn test_indent_and_dedent() {
        let pr = IndentingPrinter::new(1);
        assert_eq!(pr.indent().level(), 2);
        assert_eq!(pr.dedent().level(), 0);
        assert_eq!(pr.dedent().dedent().level(), 0);
    }
}
