//! src/prompt.rs
//! Builds the instruction block sent to the model. Pure and deterministic.

use crate::config::MessageOptions;

/// Renders the full prompt for one diff.
pub fn build_commit_prompt(diff: &str, opts: &MessageOptions) -> String {
    let language = opts.normalized_language();
    let type_instruction = type_instruction(&opts.commit_type, &opts.scope);
    let convention_instruction = convention_instruction(&opts.custom_convention);

    format!(
        r#"Write a concise Git commit message in {language} for the following diff:

{diff}

Format:
Line 1: <type>: <summary> (imperative mood, at most 50 characters)
Line 2: (blank)
Line 3+: optional details, at most 100 characters per line

Rules:
- Use the imperative mood (Add, Fix, Refactor, ...)
- Be clear and specific about what changed
- {type_instruction}
- {convention_instruction}
- No emoji, no quotes, no Markdown, no explanations; output only the message

Examples:
feat: add JWT middleware

Check the access token on every protected route.

fix: prevent crash on missing DB config

Guard against an unset database section before connecting."#
    )
}

/// The line that pins (or frees) the commit type and scope.
pub fn type_instruction(commit_type: &str, scope: &str) -> String {
    let commit_type = commit_type.trim();
    let scope = scope.trim();
    match (commit_type.is_empty(), scope.is_empty()) {
        (false, false) => format!("Use exactly: {commit_type}({scope}): <summary>"),
        (false, true) => format!("Use exactly: {commit_type}: <summary>"),
        (true, false) => format!("Choose the type freely, but the scope ({scope}) is mandatory"),
        (true, true) => "Use the Conventional Commits format".to_string(),
    }
}

pub fn convention_instruction(convention: &str) -> String {
    let convention = convention.trim();
    if convention.is_empty() {
        "Follow Conventional Commits".to_string()
    } else {
        format!("Follow this custom convention exactly: {convention}")
    }
}
