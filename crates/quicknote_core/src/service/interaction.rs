//! Blocking user-dialog capability injected into interactive flows.
//!
//! # Invariants
//! - Every call blocks until the user answers.
//! - `ask_text` returning `None` means the user cancelled.

use std::collections::VecDeque;

/// Synchronous prompts used by edit and clear flows.
pub trait Interaction {
    /// Asks for one line of text pre-filled with `default`.
    fn ask_text(&mut self, label: &str, default: &str) -> Option<String>;
    /// Asks a yes/no question.
    fn ask_confirm(&mut self, message: &str) -> bool;
    /// Shows a message; fire-and-forget.
    fn notify(&mut self, message: &str);
}

/// Pre-recorded answer for [`ScriptedInteraction`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScriptedAnswer {
    Text(String),
    /// Cancels an `ask_text` prompt.
    Cancel,
    Confirm(bool),
}

/// Interaction that replays a fixed script and records what was asked.
///
/// An exhausted script cancels text prompts and declines confirmations.
#[derive(Debug, Clone, Default)]
pub struct ScriptedInteraction {
    answers: VecDeque<ScriptedAnswer>,
    /// Labels passed to `ask_text`, with their defaults.
    pub text_prompts: Vec<(String, String)>,
    pub confirm_prompts: Vec<String>,
    pub notifications: Vec<String>,
}

impl ScriptedInteraction {
    pub fn new(answers: impl IntoIterator<Item = ScriptedAnswer>) -> Self {
        Self {
            answers: answers.into_iter().collect(),
            ..Self::default()
        }
    }

    /// Script of text answers only.
    pub fn texts<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(
            answers
                .into_iter()
                .map(|answer| ScriptedAnswer::Text(answer.into())),
        )
    }

    pub fn remaining(&self) -> usize {
        self.answers.len()
    }
}

impl Interaction for ScriptedInteraction {
    fn ask_text(&mut self, label: &str, default: &str) -> Option<String> {
        self.text_prompts
            .push((label.to_string(), default.to_string()));
        match self.answers.pop_front() {
            Some(ScriptedAnswer::Text(text)) => Some(text),
            _ => None,
        }
    }

    fn ask_confirm(&mut self, message: &str) -> bool {
        self.confirm_prompts.push(message.to_string());
        matches!(self.answers.pop_front(), Some(ScriptedAnswer::Confirm(true)))
    }

    fn notify(&mut self, message: &str) {
        self.notifications.push(message.to_string());
    }
}
