//! Prompt plumbing for interactive commands.
//!
//! Declarative field descriptions plus the runner that renders them. The
//! runner owns the re-prompt loop: `ask` only returns a value the field's
//! validator has accepted.

use anyhow::{Context, Result};
use dialoguer::{Input, Password};
use serde::ser::{Serialize, SerializeMap, Serializer};

/// Pure validation function: `Ok(())` to accept, message to reject.
pub type Validator = fn(&str) -> Result<(), String>;

/// How a field's input is rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Plain text input, echoed to the terminal
    Text,
    /// Masked input for credentials
    Secret,
}

/// Declarative description of one prompt field
pub struct FieldSpec {
    /// Key the answer is recorded under
    pub name: &'static str,
    /// Prompt text shown to the user
    pub prompt: &'static str,
    pub kind: FieldKind,
    pub validate: Validator,
}

/// Answers collected for one command execution.
///
/// Preserves question order; holds exactly one entry per field asked.
/// Serializes as a JSON object with keys in that order.
#[derive(Debug, Default)]
pub struct Answers {
    entries: Vec<(&'static str, String)>,
}

impl Answers {
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn record(&mut self, name: &'static str, value: String) {
        self.entries.push((name, value));
    }
}

impl Serialize for Answers {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, value) in &self.entries {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

/// Source of validated answers for a sequence of fields.
///
/// Implementations own rendering, masking of secret input, and looping until
/// the field's validator accepts. A returned value has always passed the
/// field's validator; I/O failures (closed stdin, no TTY) surface as errors.
pub trait PromptRunner {
    fn ask(&mut self, field: &FieldSpec) -> Result<String>;
}

/// Interactive terminal prompts backed by dialoguer
pub struct TerminalPrompt;

impl PromptRunner for TerminalPrompt {
    fn ask(&mut self, field: &FieldSpec) -> Result<String> {
        let validate = field.validate;
        let value = match field.kind {
            FieldKind::Text => Input::<String>::new()
                .with_prompt(field.prompt)
                .validate_with(move |input: &String| validate(input))
                .interact_text()?,
            FieldKind::Secret => Password::new()
                .with_prompt(field.prompt)
                .validate_with(move |input: &String| validate(input))
                .interact()?,
        };
        Ok(value)
    }
}

/// Ask every field strictly in order and record the accepted values.
///
/// Runner failures propagate unchanged; validation rejections never reach
/// here because the runner re-prompts on them.
pub fn collect_answers(fields: &[FieldSpec], runner: &mut impl PromptRunner) -> Result<Answers> {
    let mut answers = Answers::default();
    for field in fields {
        let value = runner
            .ask(field)
            .with_context(|| format!("failed to collect '{}'", field.name))?;
        answers.record(field.name, value);
    }
    Ok(answers)
}

/// Replays canned input, applying each field's validator the way a terminal
/// runner would: rejected candidates are skipped and counted.
#[cfg(test)]
pub(crate) struct ScriptedPrompt {
    replies: std::collections::VecDeque<String>,
    pub rejections: usize,
}

#[cfg(test)]
impl ScriptedPrompt {
    pub fn new(replies: &[&str]) -> Self {
        Self {
            replies: replies.iter().map(|s| s.to_string()).collect(),
            rejections: 0,
        }
    }
}

#[cfg(test)]
impl PromptRunner for ScriptedPrompt {
    fn ask(&mut self, field: &FieldSpec) -> Result<String> {
        while let Some(candidate) = self.replies.pop_front() {
            if (field.validate)(&candidate).is_ok() {
                return Ok(candidate);
            }
            self.rejections += 1;
        }
        anyhow::bail!("input stream closed while asking '{}'", field.name)
    }
}
