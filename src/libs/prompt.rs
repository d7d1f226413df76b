//! Interactive input abstraction.
//!
//! Commands collect user input through the [`Prompter`] trait instead of
//! the terminal directly, so tests can feed scripted answer sequences
//! where the real binary shows dialoguer prompts.

use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Completion, Input, Password};
use std::collections::VecDeque;

pub trait Prompter {
    /// Free-text input; an empty answer is allowed.
    fn input(&mut self, prompt: &str) -> Result<String>;

    /// Free-text input falling back to `default` on an empty answer.
    fn input_with_default(&mut self, prompt: &str, default: &str) -> Result<String>;

    /// Free-text input with tab completion over a fixed suggestion list.
    fn input_with_suggestions(&mut self, prompt: &str, suggestions: &[&str]) -> Result<String>;

    /// Masked input.
    fn password(&mut self, prompt: &str) -> Result<String>;
}

/// Prefix completion over a fixed suggestion list. Completes only when the
/// prefix is unambiguous.
struct SuggestionList<'a> {
    options: &'a [&'a str],
}

impl Completion for SuggestionList<'_> {
    fn get(&self, input: &str) -> Option<String> {
        let matches: Vec<&str> = self.options.iter().copied().filter(|option| option.starts_with(input)).collect();
        match matches.as_slice() {
            [single] => Some((*single).to_string()),
            _ => None,
        }
    }
}

/// Interactive prompter backed by dialoguer.
pub struct Terminal;

impl Prompter for Terminal {
    fn input(&mut self, prompt: &str) -> Result<String> {
        Ok(Input::with_theme(&ColorfulTheme::default())
            .with_prompt(prompt)
            .allow_empty(true)
            .interact_text()?)
    }

    fn input_with_default(&mut self, prompt: &str, default: &str) -> Result<String> {
        Ok(Input::with_theme(&ColorfulTheme::default())
            .with_prompt(prompt)
            .default(default.to_string())
            .interact_text()?)
    }

    fn input_with_suggestions(&mut self, prompt: &str, suggestions: &[&str]) -> Result<String> {
        let completion = SuggestionList { options: suggestions };
        Ok(Input::with_theme(&ColorfulTheme::default())
            .with_prompt(prompt)
            .allow_empty(true)
            .completion_with(&completion)
            .interact_text()?)
    }

    fn password(&mut self, prompt: &str) -> Result<String> {
        Ok(Password::with_theme(&ColorfulTheme::default()).with_prompt(prompt).interact()?)
    }
}

/// Replays a fixed sequence of answers; stands in for the terminal in
/// tests. Errors once the script runs dry so an unexpected extra prompt
/// fails the test instead of hanging it.
pub struct Scripted {
    lines: VecDeque<String>,
}

impl Scripted {
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
        }
    }

    fn next_line(&mut self) -> Result<String> {
        self.lines.pop_front().ok_or_else(|| anyhow::anyhow!("scripted input exhausted"))
    }
}

impl Prompter for Scripted {
    fn input(&mut self, _prompt: &str) -> Result<String> {
        self.next_line()
    }

    fn input_with_default(&mut self, _prompt: &str, default: &str) -> Result<String> {
        let line = self.next_line()?;
        Ok(if line.is_empty() { default.to_string() } else { line })
    }

    fn input_with_suggestions(&mut self, _prompt: &str, _suggestions: &[&str]) -> Result<String> {
        self.next_line()
    }

    fn password(&mut self, _prompt: &str) -> Result<String> {
        self.next_line()
    }
}
