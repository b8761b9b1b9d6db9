//! src/output.rs
//! Turning results into text for the terminal.

use colored::Colorize;

use crate::config::AiConfig;
use crate::prompt::build_commit_prompt;

const RULE_WIDTH: usize = 70;

/// Builds a `git commit` command line, one `-m` per non-empty line.
///
/// Quotes inside the message are not escaped: the command is only displayed,
/// never executed.
pub fn format_git_command(message: &str) -> String {
    let lines: Vec<&str> = message
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .collect();

    let Some((first, rest)) = lines.split_first() else {
        return "git commit -m \"\"".to_string();
    };

    let mut command = format!("git commit -m \"{first}\"");
    for line in rest {
        command.push_str(&format!(" \\\n    -m \"{line}\""));
    }
    command
}

/// The exact prompt a provider would receive, for `--dry-run`.
pub fn dry_run_prompt(diff: &str, cfg: &AiConfig) -> String {
    build_commit_prompt(diff, &cfg.message)
}

/// One-line summary of the effective provider, model, language and timeout.
pub fn dry_run_summary(cfg: &AiConfig) -> String {
    format!(
        "Provider : {}  |  Model : {}  |  Lang : {}  |  Timeout : {}s",
        cfg.provider.to_uppercase(),
        cfg.message.model,
        cfg.message.normalized_language(),
        cfg.timeout.as_secs()
    )
}

pub fn print_dry_run(prompt: &str, summary: &str) {
    let rule = "─".repeat(RULE_WIDTH);
    println!("Prompt sent to model:");
    println!("{rule}");
    println!("{prompt}");
    println!("{rule}");
    println!("\n{}\n", summary.bold());
}

pub fn print_generated(command: &str) {
    println!("{}", "✅ Commit message generated. You can now run:".green());
    println!("   {command}");
}
