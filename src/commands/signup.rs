//! Signup subcommand
//!
//! Interactively registers a user account: prompts for full name, email, and
//! password, validating each field locally, then prints the collected
//! answers.

use anyhow::{Result, bail};
use clap::Args;
use console::style;

use crate::prompt::{FieldKind, FieldSpec, TerminalPrompt, collect_answers};
use crate::validate::{validate_email, validate_full_name, validate_password};

/// Arguments for the signup command
#[derive(Args)]
#[command(
    override_usage = "arigato signup",
    after_help = "Example:\n  localhost$ arigato signup"
)]
pub struct SignupArgs {}

// TODO: Re-use the json schema from the registry here
const QUESTIONS: [FieldSpec; 3] = [
    FieldSpec {
        name: "full_name",
        prompt: "Full Name",
        kind: FieldKind::Text,
        validate: validate_full_name,
    },
    FieldSpec {
        name: "email",
        prompt: "Email",
        kind: FieldKind::Text,
        validate: validate_email,
    },
    FieldSpec {
        name: "password",
        prompt: "Password",
        kind: FieldKind::Secret,
        validate: validate_password,
    },
];

/// Register a user account
pub async fn cmd_signup(_args: &SignupArgs, quiet: bool, _verbose: u8) -> Result<()> {
    if !console::user_attended() {
        bail!("signup requires an interactive terminal");
    }

    let answers = collect_answers(&QUESTIONS, &mut TerminalPrompt)?;
    tracing::debug!(fields = answers.len(), "signup answers collected");

    println!("{}", serde_json::to_string_pretty(&answers)?);

    if !quiet {
        println!();
        println!("{} Signup details captured", style("Success:").green().bold());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prompt::ScriptedPrompt;

    #[test]
    fn test_questions_order_and_kinds() {
        let names: Vec<_> = QUESTIONS.iter().map(|q| q.name).collect();
        assert_eq!(names, ["full_name", "email", "password"]);
        assert_eq!(QUESTIONS[0].kind, FieldKind::Text);
        assert_eq!(QUESTIONS[1].kind, FieldKind::Text);
        assert_eq!(QUESTIONS[2].kind, FieldKind::Secret);
    }

    #[test]
    fn test_questions_prompts() {
        let prompts: Vec<_> = QUESTIONS.iter().map(|q| q.prompt).collect();
        assert_eq!(prompts, ["Full Name", "Email", "Password"]);
    }

    #[test]
    fn test_signup_scenario() {
        let mut prompt = ScriptedPrompt::new(&["Bob123", "bob@example.com", "supersecretpw"]);
        let answers = collect_answers(&QUESTIONS, &mut prompt).unwrap();
        assert_eq!(answers.len(), 3);
        assert_eq!(answers.get("full_name"), Some("Bob123"));
        assert_eq!(answers.get("email"), Some("bob@example.com"));
        assert_eq!(answers.get("password"), Some("supersecretpw"));
    }

    #[test]
    fn test_signup_scenario_with_rejected_candidates() {
        let mut prompt = ScriptedPrompt::new(&[
            "ab",
            "Bob123",
            "not-an-email",
            "bob@example.com",
            "short",
            "supersecretpw",
        ]);
        let answers = collect_answers(&QUESTIONS, &mut prompt).unwrap();
        assert_eq!(answers.len(), 3);
        assert_eq!(prompt.rejections, 3);
    }
}
