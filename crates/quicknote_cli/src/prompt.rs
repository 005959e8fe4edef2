//! Line-based terminal dialogs.
//!
//! Prompts go to the writer (stderr in the binary) so stdout stays clean.
//! An empty answer keeps the shown default; end of input cancels.

use quicknote_core::Interaction;
use std::io::{self, BufRead, Write};

pub struct TerminalInteraction<R, W> {
    input: R,
    output: W,
}

impl TerminalInteraction<io::StdinLock<'static>, io::Stderr> {
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stderr())
    }
}

impl<R: BufRead, W: Write> TerminalInteraction<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// `None` on end of input or a read error.
    fn read_answer(&mut self) -> Option<String> {
        let mut line = String::new();
        match self.input.read_line(&mut line) {
            Ok(0) | Err(_) => None,
            Ok(_) => Some(line.trim_end_matches(['\n', '\r']).to_string()),
        }
    }

    fn show(&mut self, text: &str) {
        // Prompt output is best effort; a closed stderr must not abort the flow.
        let _ = write!(self.output, "{text}");
        let _ = self.output.flush();
    }
}

impl<R: BufRead, W: Write> Interaction for TerminalInteraction<R, W> {
    fn ask_text(&mut self, label: &str, default: &str) -> Option<String> {
        self.show(&format!("{label} [{}] ", escape_newlines(default)));
        let answer = self.read_answer()?;
        if answer.is_empty() {
            Some(default.to_string())
        } else {
            Some(unescape_newlines(&answer))
        }
    }

    fn ask_confirm(&mut self, message: &str) -> bool {
        self.show(&format!("{message} [y/N] "));
        self.read_answer()
            .map(|answer| matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes"))
            .unwrap_or(false)
    }

    fn notify(&mut self, message: &str) {
        self.show(&format!("{message}\n"));
    }
}

/// Confirms without asking; delegates everything else.
pub struct AssumeYes<'a, I: Interaction + ?Sized>(pub &'a mut I);

impl<I: Interaction + ?Sized> Interaction for AssumeYes<'_, I> {
    fn ask_text(&mut self, label: &str, default: &str) -> Option<String> {
        self.0.ask_text(label, default)
    }

    fn ask_confirm(&mut self, _message: &str) -> bool {
        true
    }

    fn notify(&mut self, message: &str) {
        self.0.notify(message);
    }
}

pub fn escape_newlines(text: &str) -> String {
    text.replace('\n', "\\n")
}

pub fn unescape_newlines(text: &str) -> String {
    text.replace("\\n", "\n")
}
